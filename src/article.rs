use std::fmt;

use anyhow::{Result, bail};

const VOWELS: &str = "aeiou";

/// The locally guessed article, before any remote verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Article {
    A,
    An,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::A => "A",
            Article::An => "An",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic default: `An` for a lowercase vowel start, `A` otherwise.
///
/// Only lowercase vowels count, so "Apple" gets `A`. The remote check is
/// what catches those.
pub fn default_article(word: &str) -> Result<Article> {
    let Some(first) = word.chars().next() else {
        bail!("word must not be empty");
    };
    if VOWELS.contains(first) {
        Ok(Article::An)
    } else {
        Ok(Article::A)
    }
}
