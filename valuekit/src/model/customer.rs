//! Customers whose message history is loaded on first access.

use thiserror::Error;
use tracing::debug;

use crate::core::lazy::LazyCache;

/// Messages returned by [`default_messages`].
pub const DEFAULT_MESSAGES: [&str; 3] = [
    "Initial contact",
    "Sent product overview",
    "Signed training contract",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("message source unavailable: {0}")]
    Unavailable(String),
}

pub type MessageLoader = Box<dyn Fn() -> Result<Vec<String>, LoadError>>;

/// Loader used by [`Customer::new`].
pub fn default_messages() -> Result<Vec<String>, LoadError> {
    let messages: Vec<String> = DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect();
    debug!(count = messages.len(), "loaded messages");
    Ok(messages)
}

#[derive(Debug)]
pub struct Customer {
    name: String,
    messages: LazyCache<Vec<String>, MessageLoader>,
}

impl Customer {
    pub fn new(name: &str) -> Self {
        Self::with_loader(name, default_messages)
    }

    /// Customer whose history is a fixed list (e.g. from configuration).
    pub fn with_messages(name: &str, messages: Vec<String>) -> Self {
        Self::with_loader(name, move || {
            debug!(count = messages.len(), "loaded messages");
            Ok(messages.clone())
        })
    }

    pub fn with_loader<L>(name: &str, loader: L) -> Self
    where
        L: Fn() -> Result<Vec<String>, LoadError> + 'static,
    {
        let loader: MessageLoader = Box::new(loader);
        Self {
            name: name.to_string(),
            messages: LazyCache::new(loader),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message history, loading it on the first call.
    pub fn messages(&self) -> Result<&[String], LoadError> {
        self.messages.read().map(Vec::as_slice)
    }

    pub fn messages_loaded(&self) -> bool {
        self.messages.is_loaded()
    }
}
