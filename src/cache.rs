//! Word to article cache backed by SQLite.
//!
//! Entries are write-once: a word is inserted after its first successful
//! verification and never updated or removed afterwards.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS cache (
    word    TEXT PRIMARY KEY,
    article TEXT
)";

/// Persistent cache of verified articles.
pub struct CacheStore {
    conn: Connection,
}

impl CacheStore {
    /// Create the database (and its parent directories) and the `cache`
    /// table if missing. Safe to run against an existing cache.
    pub fn initialize(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).with_context(|| {
                format!("failed to create cache directory {}", dir.display())
            })?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open cache database {}", path.display()))?;
        Self::with_schema(conn)
    }

    /// Open a cache previously created by [`CacheStore::initialize`].
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!(
                "cache database not found at {}; run with --init first",
                path.display()
            );
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open cache database {}", path.display()))?;
        Ok(Self { conn })
    }

    /// Ephemeral, already initialized store. Used by tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory cache")?;
        Self::with_schema(conn)
    }

    fn with_schema(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .context("failed to create cache table")?;
        Ok(Self { conn })
    }

    /// Exact-match lookup.
    pub fn lookup(&self, word: &str) -> Result<Option<String>> {
        let article = self
            .conn
            .query_row(
                "SELECT article FROM cache WHERE word = ?1",
                [word],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()
            .context("failed to query cache (was it initialized with --init?)")?
            .flatten();
        debug!(word, hit = article.is_some(), "cache lookup");
        Ok(article)
    }

    /// Store a newly verified article. Fails if `word` is already cached.
    pub fn insert(&self, word: &str, article: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO cache (word, article) VALUES (?1, ?2)",
                [word, article],
            )
            .with_context(|| format!("failed to insert '{word}' into cache"))?;
        debug!(word, article, "cached");
        Ok(())
    }
}
