// src/emitter.rs
use crate::host::Host;
use crate::locale::LocaleCode;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, error};

pub const LOCALE_CHANGED_EVENT: &str = "locale-changed";

#[derive(Debug, Clone, Serialize)]
pub struct LocaleChanged {
    pub locale: LocaleCode,
}

/// An event as seen by listeners: its name plus the JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub payload: Value,
}

type Listener = Rc<dyn Fn(&Event)>;

/// Synchronous listener registry.
///
/// Listeners are called in registration order on the emitting thread. Nothing
/// flows back to the emitter. A listener may register further listeners;
/// those first hear the next dispatch.
#[derive(Default)]
pub struct Emitter {
    listeners: RefCell<Vec<(String, Listener)>>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<F>(&self, event_name: &str, listener: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.listeners
            .borrow_mut()
            .push((event_name.to_string(), Rc::new(listener)));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn dispatch(&self, event_name: &str, payload: &Value) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(name, _)| name == event_name)
            .map(|(_, listener)| listener.clone())
            .collect();
        let event = Event {
            name: event_name.to_string(),
            payload: payload.clone(),
        };
        if listeners.is_empty() {
            debug!("No listeners registered for event '{}'.", event_name);
            return;
        }
        debug!("Delivering event '{}' to {} listener(s)", event_name, listeners.len());
        for listener in listeners {
            listener(&event);
        }
    }
}

/// Serializes `payload` and hands it to the host.
pub fn emit<H: Host + ?Sized, S: Serialize>(host: &H, event_name: &str, payload: S) {
    match serde_json::to_value(payload) {
        Ok(value) => host.notify(event_name, &value),
        Err(e) => error!("Failed to emit event '{}': {}", event_name, e),
    }
}
