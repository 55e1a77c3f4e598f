// src/translator.rs
use crate::config::I18nConfig;
use crate::emitter::{self, LocaleChanged, LOCALE_CHANGED_EVENT};
use crate::host::Host;
use crate::interpolate::{interpolate, Params};
use crate::locale::{self, LocaleCode, SupportedLocale};
use crate::messages::{LocaleRegistry, Lookup, MessageTree};
use crate::utils::error::Error;
use std::sync::Arc;
use tracing::{debug, info};

/// Holds the active locale and resolves keys against its dictionary.
///
/// One instance is created at startup and handed to whatever renders text.
/// `current_locale` and `current_messages` always describe the same locale.
#[derive(Debug)]
pub struct Translator<H: Host> {
    registry: LocaleRegistry,
    current_locale: LocaleCode,
    current_messages: Arc<MessageTree>,
    host: H,
}

impl<H: Host> Translator<H> {
    /// Starts in `zh-CN`.
    pub fn new(registry: LocaleRegistry, host: H) -> Result<Self, Error> {
        Self::with_locale(registry, LocaleCode::default(), host)
    }

    pub fn with_locale(registry: LocaleRegistry, locale: LocaleCode, host: H) -> Result<Self, Error> {
        let current_messages = registry
            .get(locale)
            .ok_or_else(|| Error::LocaleNotLoaded(locale.to_string()))?;
        Ok(Self {
            registry,
            current_locale: locale,
            current_messages,
            host,
        })
    }

    /// Bundled dictionaries, starting locale from `config`, optionally
    /// switched to the host language.
    pub fn from_config(config: &I18nConfig, host: H) -> Result<Self, Error> {
        let mut translator = Self::with_locale(LocaleRegistry::bundled(), config.default_locale, host)?;
        if config.detect_system_locale {
            let detected = translator.detect_locale();
            info!("Switching to detected locale {}", detected);
            translator.set_locale(detected.as_str());
        }
        Ok(translator)
    }

    /// Switches locale and notifies the host. Unknown or unloaded codes are
    /// ignored without notification.
    pub fn set_locale(&mut self, locale: &str) {
        let Ok(code) = locale.parse::<LocaleCode>() else {
            debug!("set_locale: ignoring unrecognized locale '{}'", locale);
            return;
        };
        let Some(messages) = self.registry.get(code) else {
            debug!("set_locale: no messages loaded for '{}'", code);
            return;
        };
        self.current_locale = code;
        self.current_messages = messages;
        info!("Locale changed to {}", code);
        emitter::emit(&self.host, LOCALE_CHANGED_EVENT, LocaleChanged { locale: code });
    }

    pub fn get_locale(&self) -> LocaleCode {
        self.current_locale
    }

    pub fn get_supported_locales(&self) -> Vec<SupportedLocale> {
        locale::supported_locales()
    }

    /// Resolves a dotted `key` and fills `{name}` placeholders from `params`.
    ///
    /// Falls back to `key` itself when the path does not resolve to text. Only
    /// a path that runs out reports a diagnostic; a key naming a namespace
    /// falls back silently.
    pub fn t(&self, key: &str, params: &Params) -> String {
        match self.current_messages.lookup(key) {
            Lookup::Found(text) => interpolate(text, params),
            Lookup::Namespace => key.to_string(),
            Lookup::Missing => {
                self.host
                    .diagnostic(&format!("Missing translation for key: {}", key));
                key.to_string()
            }
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.t(key, &Params::new())
    }

    /// The locale the host environment would pick. Does not switch.
    pub fn detect_locale(&self) -> LocaleCode {
        locale::detect_locale(&self.host)
    }

    pub fn current_messages(&self) -> &MessageTree {
        &self.current_messages
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// `t!(translator, "key", name = value, ...)`
#[macro_export]
macro_rules! t {
    ($translator:expr, $key:expr $(,)?) => {
        $translator.tr($key)
    };
    ($translator:expr, $key:expr, $($name:ident = $value:expr),+ $(,)?) => {{
        let mut params = $crate::interpolate::Params::new();
        $(
            params.insert(
                ::std::stringify!($name).to_string(),
                $crate::interpolate::ParamValue::from($value),
            );
        )+
        $translator.t($key, &params)
    }};
}
