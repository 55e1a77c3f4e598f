// src/utils/error.rs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("no messages loaded for locale {0}")]
    LocaleNotLoaded(String),
    #[error("{0}")]
    Msg(String),
}

#[derive(serde::Serialize)]
#[serde(tag = "kind", content = "message")]
#[serde(rename_all = "camelCase")]
enum ErrorKind {
    Io(String),
    Json(String),
    UnknownLocale(String),
    LocaleNotLoaded(String),
    Msg(String),
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let error_message = self.to_string();
        let error_kind = match self {
            Self::Io(_) => ErrorKind::Io(error_message),
            Self::Json(_) => ErrorKind::Json(error_message),
            Self::UnknownLocale(_) => ErrorKind::UnknownLocale(error_message),
            Self::LocaleNotLoaded(_) => ErrorKind::LocaleNotLoaded(error_message),
            Self::Msg(_) => ErrorKind::Msg(error_message),
        };
        error_kind.serialize(serializer)
    }
}

#[macro_export]
macro_rules! err {
    ($fmt:literal $(, $($arg:tt)*)?) => {
        $crate::utils::error::Error::Msg(::std::format!($fmt $(, $($arg)*)?))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_is_tagged() {
        let value = serde_json::to_value(Error::UnknownLocale("fr-FR".into())).unwrap();
        assert_eq!(value["kind"], "unknownLocale");
        assert_eq!(value["message"], "unknown locale: fr-FR");
    }

    #[test]
    fn test_err_macro_formats() {
        let e = crate::err!("locale {} missing", "en-US");
        assert_eq!(e.to_string(), "locale en-US missing");
    }
}
