//! Mock registry for testing.
//!
//! Provides a [`MockRegistry`] that serves canned replies and records every
//! lookup, so tests can simulate outages, slow responses and deprecations
//! and verify how many requests were made.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::error::{Result, StaleguardError};

use super::metadata::{parse_metadata, RegistryMetadata};
use super::source::MetadataSource;

/// Canned reply for one package.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this metadata.
    Metadata(RegistryMetadata),
    /// Fail as if the registry were unreachable.
    Unavailable(String),
    /// Run this raw body through the real document parser.
    Body(String),
}

/// In-memory [`MetadataSource`] with call counting.
#[derive(Debug, Default)]
pub struct MockRegistry {
    replies: HashMap<String, MockReply>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockRegistry {
    /// Create an empty registry. Unknown packages reply with HTTP 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve metadata for `meta.package_name`.
    pub fn with_metadata(mut self, meta: RegistryMetadata) -> Self {
        self.replies
            .insert(meta.package_name.clone(), MockReply::Metadata(meta));
        self
    }

    /// Fail lookups of `package` with the given message.
    pub fn with_failure(mut self, package: impl Into<String>, message: impl Into<String>) -> Self {
        self.replies
            .insert(package.into(), MockReply::Unavailable(message.into()));
        self
    }

    /// Serve a raw response body for `package`.
    pub fn with_body(mut self, package: impl Into<String>, body: impl Into<String>) -> Self {
        self.replies.insert(package.into(), MockReply::Body(body.into()));
        self
    }

    /// Sleep before answering lookups of `package`.
    pub fn with_delay(mut self, package: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(package.into(), delay);
        self
    }

    /// Number of lookups performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of lookups observed running at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Package names looked up, in completion order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|names| names.clone())
            .unwrap_or_default()
    }
}

impl MetadataSource for MockRegistry {
    fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now_running, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(package) {
            thread::sleep(*delay);
        }

        let result = match self.replies.get(package) {
            Some(MockReply::Metadata(meta)) => Ok(meta.clone()),
            Some(MockReply::Unavailable(message)) => Err(StaleguardError::RegistryUnavailable {
                package: package.to_string(),
                message: message.clone(),
            }),
            Some(MockReply::Body(body)) => parse_metadata(package, body),
            None => Err(StaleguardError::RegistryUnavailable {
                package: package.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            }),
        };

        if let Ok(mut names) = self.requested.lock() {
            names.push(package.to_string());
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
