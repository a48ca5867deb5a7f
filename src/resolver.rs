//! Cache-first article resolution: heuristic, lookup, verify, store.

use anyhow::Result;
use tracing::info;

use crate::article::default_article;
use crate::cache::CacheStore;
use crate::checker::{GrammarChecker, verify};

/// Outcome of resolving one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub word: String,
    pub article: String,
    /// True when the answer came from the cache and no request was made.
    pub cached: bool,
}

impl Resolution {
    /// The line printed on success.
    pub fn sentence(&self) -> String {
        format!(
            "The word '{}' should be preceded by '{}'.",
            self.word, self.article
        )
    }
}

pub async fn resolve(
    word: &str,
    cache: &CacheStore,
    checker: &dyn GrammarChecker,
) -> Result<Resolution> {
    let default = default_article(word)?;

    if let Some(article) = cache.lookup(word)? {
        return Ok(Resolution {
            word: word.to_string(),
            article,
            cached: true,
        });
    }

    info!(word, %default, "cache miss");
    let article = verify(checker, word, default).await?;
    cache.insert(word, &article)?;

    Ok(Resolution {
        word: word.to_string(),
        article,
        cached: false,
    })
}
