pub mod mock;
pub mod textgears;

use anyhow::{Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::article::Article;

/// Decoded grammar check. Fields the tool does not use are still decoded so
/// diagnostics can show the whole flagged error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GrammarResponse {
    pub status: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: GrammarReport,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GrammarReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GrammarError>,
}

/// One flagged span. `better` is ordered by preference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GrammarError {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    pub bad: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub better: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// TextGears sends `null` for absent objects and lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Remote grammar checking. TextGears in production, canned in tests.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn check(&self, text: &str) -> Result<GrammarResponse>;
}

/// Apply a grammar check to the heuristic default.
///
/// The first error whose `bad` text equals `default` exactly supplies the
/// replacement (its first suggestion). An unsuccessful check or no matching
/// error keeps the default. The result is always lowercase.
pub fn correct_article(response: &GrammarResponse, default: &str) -> Result<String> {
    let mut article = default;
    if response.status
        && let Some(error) = response.response.errors.iter().find(|e| e.bad == default)
    {
        let Some(better) = error.better.first() else {
            bail!(
                "grammar check flagged '{}' at offset {} without suggesting a replacement",
                error.bad,
                error.offset
            );
        };
        debug!(bad = %error.bad, better = %better, kind = %error.kind, "article corrected");
        article = better.as_str();
    }
    Ok(article.to_lowercase())
}

/// Verify `default` in front of `word` and return the confirmed article.
pub async fn verify(checker: &dyn GrammarChecker, word: &str, default: Article) -> Result<String> {
    let text = format!("{default} {word}");
    let response = checker.check(&text).await?;
    correct_article(&response, default.as_str())
}
