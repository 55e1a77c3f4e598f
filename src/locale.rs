// src/locale.rs
use crate::host::Host;
use crate::utils::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const LOCALE_ZH_CN: &str = "zh-CN";
const LOCALE_EN_US: &str = "en-US";

/// A language the application ships a dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleCode {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl LocaleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleCode::ZhCn => LOCALE_ZH_CN,
            LocaleCode::EnUs => LOCALE_EN_US,
        }
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LocaleCode::ZhCn
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LOCALE_ZH_CN => Ok(LocaleCode::ZhCn),
            LOCALE_EN_US => Ok(LocaleCode::EnUs),
            other => Err(Error::UnknownLocale(other.to_string())),
        }
    }
}

/// Entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLocale {
    pub code: LocaleCode,
    pub name: &'static str,
}

pub fn supported_locales() -> Vec<SupportedLocale> {
    vec![
        SupportedLocale {
            code: LocaleCode::ZhCn,
            name: "简体中文",
        },
        SupportedLocale {
            code: LocaleCode::EnUs,
            name: "English",
        },
    ]
}

pub fn detect_from(lang: &str) -> LocaleCode {
    if lang.starts_with("zh") {
        LocaleCode::ZhCn
    } else {
        LocaleCode::EnUs
    }
}

/// Maps the host's preferred language to a supported locale.
///
/// Only the first preference is consulted. Anything that is not Chinese
/// resolves to `en-US`.
pub fn detect_locale<H: Host + ?Sized>(host: &H) -> LocaleCode {
    let lang = host.preferred_language().unwrap_or_default();
    let locale = detect_from(&lang);
    debug!("detect_locale: host language '{}' -> {}", lang, locale);
    locale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("zh-CN".parse::<LocaleCode>().unwrap(), LocaleCode::ZhCn);
        assert_eq!("en-US".parse::<LocaleCode>().unwrap(), LocaleCode::EnUs);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "fr-FR".parse::<LocaleCode>().unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(ref s) if s == "fr-FR"));
        assert!("zh-cn".parse::<LocaleCode>().is_err());
    }

    #[test]
    fn test_serde_uses_tag_strings() {
        assert_eq!(serde_json::to_string(&LocaleCode::EnUs).unwrap(), "\"en-US\"");
        let code: LocaleCode = serde_json::from_str("\"zh-CN\"").unwrap();
        assert_eq!(code, LocaleCode::ZhCn);
    }

    #[test]
    fn test_supported_locales_order() {
        let locales = supported_locales();
        assert_eq!(locales.len(), 2);
        assert_eq!(locales[0].code, LocaleCode::ZhCn);
        assert_eq!(locales[0].name, "简体中文");
        assert_eq!(locales[1].code, LocaleCode::EnUs);
        assert_eq!(locales[1].name, "English");
    }

    #[test]
    fn test_detect_from_prefix() {
        assert_eq!(detect_from("zh-TW"), LocaleCode::ZhCn);
        assert_eq!(detect_from("zh"), LocaleCode::ZhCn);
        assert_eq!(detect_from("fr-FR"), LocaleCode::EnUs);
        assert_eq!(detect_from("en-GB"), LocaleCode::EnUs);
        assert_eq!(detect_from(""), LocaleCode::EnUs);
    }

    #[test]
    fn test_detect_locale_reads_host() {
        assert_eq!(detect_locale(&MemoryHost::with_language("zh-HK")), LocaleCode::ZhCn);
        assert_eq!(detect_locale(&MemoryHost::with_language("en-GB")), LocaleCode::EnUs);
        assert_eq!(detect_locale(&MemoryHost::new()), LocaleCode::EnUs);
    }
}
