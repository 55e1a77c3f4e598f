// src/host.rs
//! The environment a [`Translator`](crate::translator::Translator) runs in.
//!
//! A host answers which language the user prefers, receives change
//! notifications and takes diagnostics. [`SystemHost`] talks to the real
//! operating system; [`MemoryHost`] records everything in memory and is what
//! tests and headless embedders use.

use crate::emitter::{Emitter, Event};
use serde_json::Value;
use std::cell::RefCell;
use tracing::{debug, warn};

pub trait Host {
    /// The user's preferred language tag, e.g. `zh-CN`.
    fn preferred_language(&self) -> Option<String>;

    /// Fire-and-forget event delivery.
    fn notify(&self, event: &str, payload: &Value);

    fn diagnostic(&self, message: &str) {
        warn!("{}", message);
    }
}

/// OS-backed host: language from the system locale, events through an
/// [`Emitter`].
#[derive(Debug, Default)]
pub struct SystemHost {
    emitter: Emitter,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }
}

pub fn get_default_locale() -> Option<String> {
    sys_locale::get_locale().map(|locale| locale.replace('_', "-"))
}

impl Host for SystemHost {
    fn preferred_language(&self) -> Option<String> {
        let locale = get_default_locale();
        debug!("System locale is: {:?}", locale);
        locale
    }

    fn notify(&self, event: &str, payload: &Value) {
        debug!("notify '{}': {}", event, payload);
        self.emitter.dispatch(event, payload);
    }
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    language: Option<String>,
    events: RefCell<Vec<Event>>,
    diagnostics: RefCell<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        self.diagnostics.borrow_mut().clear();
    }
}

impl Host for MemoryHost {
    fn preferred_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn notify(&self, event: &str, payload: &Value) {
        self.events.borrow_mut().push(Event {
            name: event.to_string(),
            payload: payload.clone(),
        });
    }

    fn diagnostic(&self, message: &str) {
        warn!("{}", message);
        self.diagnostics.borrow_mut().push(message.to_string());
    }
}

impl<H: Host + ?Sized> Host for &H {
    fn preferred_language(&self) -> Option<String> {
        (**self).preferred_language()
    }

    fn notify(&self, event: &str, payload: &Value) {
        (**self).notify(event, payload)
    }

    fn diagnostic(&self, message: &str) {
        (**self).diagnostic(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_memory_host_records() {
        let host = MemoryHost::with_language("en-GB");
        assert_eq!(host.preferred_language().as_deref(), Some("en-GB"));
        host.notify("locale-changed", &json!({ "locale": "en-US" }));
        host.diagnostic("Missing translation for key: a.b");
        assert_eq!(host.events().len(), 1);
        assert_eq!(host.diagnostics(), vec!["Missing translation for key: a.b"]);
        host.clear();
        assert!(host.events().is_empty());
        assert!(host.diagnostics().is_empty());
    }

    #[test]
    fn test_system_host_forwards_to_emitter() {
        let host = SystemHost::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        host.emitter()
            .listen("locale-changed", move |event| sink.borrow_mut().push(event.payload.clone()));
        host.notify("locale-changed", &json!({ "locale": "zh-CN" }));
        assert_eq!(*seen.borrow(), vec![json!({ "locale": "zh-CN" })]);
    }

    #[test]
    fn test_system_locale_is_normalized() {
        if let Some(locale) = get_default_locale() {
            assert!(!locale.contains('_'));
        }
    }
}
