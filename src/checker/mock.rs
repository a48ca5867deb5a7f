use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{GrammarChecker, GrammarResponse};

/// A canned checker for tests. Returns the same response every time and
/// records the texts it was asked about.
pub struct MockChecker {
    response: GrammarResponse,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
}

impl MockChecker {
    pub fn new(response: GrammarResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GrammarChecker for MockChecker {
    async fn check(&self, text: &str) -> Result<GrammarResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(self.response.clone())
    }
}
