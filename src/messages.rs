// src/messages.rs
//! Message dictionaries and dotted-key lookup.

use crate::err;
use crate::locale::LocaleCode;
use crate::utils::error::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A node of a locale dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    Leaf(String),
    Namespace(HashMap<String, MessageTree>),
}

/// Outcome of walking a dotted key through a [`MessageTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    /// Every segment matched but the key names a namespace.
    Namespace,
    /// Some segment had nothing to descend into.
    Missing,
}

impl MessageTree {
    pub fn namespace() -> Self {
        MessageTree::Namespace(HashMap::new())
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let mut node = self;
        for segment in key.split('.') {
            node = match node {
                MessageTree::Namespace(children) => match children.get(segment) {
                    Some(child) => child,
                    None => return Lookup::Missing,
                },
                MessageTree::Leaf(_) => return Lookup::Missing,
            };
        }
        match node {
            MessageTree::Leaf(text) => Lookup::Found(text),
            MessageTree::Namespace(_) => Lookup::Namespace,
        }
    }

    /// Number of leaves below this node.
    pub fn len(&self) -> usize {
        match self {
            MessageTree::Leaf(_) => 1,
            MessageTree::Namespace(children) => children.values().map(MessageTree::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static BUNDLED: Lazy<LocaleRegistry> = Lazy::new(|| {
    let mut registry = LocaleRegistry::new();
    for (code, json) in [
        (LocaleCode::ZhCn, include_str!("../assets/locales/zh-CN.json")),
        (LocaleCode::EnUs, include_str!("../assets/locales/en-US.json")),
    ] {
        registry
            .insert_json(code, json)
            .unwrap_or_else(|e| panic!("Failed to parse embedded {} messages: {}", code, e));
    }
    info!("Loaded {} embedded locales", registry.len());
    registry
});

/// Dictionaries keyed by locale. Read-only once handed to a translator.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: HashMap<LocaleCode, Arc<MessageTree>>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionaries compiled into the binary.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    pub fn insert(&mut self, code: LocaleCode, messages: MessageTree) {
        debug!("Registering {} messages for {}", messages.len(), code);
        self.locales.insert(code, Arc::new(messages));
    }

    pub fn with(mut self, code: LocaleCode, messages: MessageTree) -> Self {
        self.insert(code, messages);
        self
    }

    pub fn insert_json(&mut self, code: LocaleCode, json: &str) -> Result<(), Error> {
        let messages = MessageTree::from_json(json)?;
        if let MessageTree::Leaf(_) = messages {
            return Err(err!("messages for {} must be a JSON object", code));
        }
        self.insert(code, messages);
        Ok(())
    }

    pub fn get(&self, code: LocaleCode) -> Option<Arc<MessageTree>> {
        self.locales.get(&code).cloned()
    }

    pub fn contains(&self, code: LocaleCode) -> bool {
        self.locales.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
