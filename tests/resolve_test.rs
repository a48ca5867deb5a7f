use spellbee::cache::CacheStore;
use spellbee::checker::mock::MockChecker;
use spellbee::checker::{GrammarError, GrammarReport, GrammarResponse};
use spellbee::resolver::resolve;

fn correcting(bad: &str, better: &str) -> MockChecker {
    MockChecker::new(GrammarResponse {
        status: true,
        response: GrammarReport {
            errors: vec![GrammarError {
                bad: bad.to_string(),
                better: vec![better.to_string()],
                ..GrammarError::default()
            }],
        },
    })
}

fn failing() -> MockChecker {
    MockChecker::new(GrammarResponse::default())
}

#[tokio::test]
async fn umbrella_with_failed_check_keeps_heuristic() {
    let cache = CacheStore::in_memory().unwrap();
    let checker = failing();

    let resolution = resolve("umbrella", &cache, &checker).await.unwrap();

    assert_eq!(
        resolution.sentence(),
        "The word 'umbrella' should be preceded by 'an'."
    );
    assert!(!resolution.cached);
    assert_eq!(checker.texts(), vec!["An umbrella".to_string()]);
}

#[tokio::test]
async fn remote_correction_is_cached() {
    let cache = CacheStore::in_memory().unwrap();
    let checker = correcting("A", "An");

    let resolution = resolve("Apple", &cache, &checker).await.unwrap();

    assert_eq!(resolution.article, "an");
    assert_eq!(checker.texts(), vec!["A Apple".to_string()]);
    assert_eq!(cache.lookup("Apple").unwrap().as_deref(), Some("an"));
}

#[tokio::test]
async fn cache_hit_skips_remote_check() {
    let cache = CacheStore::in_memory().unwrap();
    let checker = correcting("An", "A");

    let first = resolve("unicorn", &cache, &checker).await.unwrap();
    let second = resolve("unicorn", &cache, &checker).await.unwrap();

    assert_eq!(first.article, "a");
    assert!(!first.cached);
    assert_eq!(second.article, "a");
    assert!(second.cached);
    assert_eq!(checker.calls(), 1);
}

#[tokio::test]
async fn preexisting_entry_is_returned_verbatim() {
    let cache = CacheStore::in_memory().unwrap();
    cache.insert("hour", "an").unwrap();
    let checker = failing();

    let resolution = resolve("hour", &cache, &checker).await.unwrap();

    assert_eq!(resolution.article, "an");
    assert_eq!(checker.calls(), 0);
}

#[tokio::test]
async fn empty_word_is_rejected_before_any_io() {
    let cache = CacheStore::in_memory().unwrap();
    let checker = failing();

    let err = resolve("", &cache, &checker).await.unwrap_err();

    assert!(err.to_string().contains("empty"));
    assert_eq!(checker.calls(), 0);
}

#[tokio::test]
async fn empty_suggestion_list_is_an_error_and_not_cached() {
    let cache = CacheStore::in_memory().unwrap();
    let checker = MockChecker::new(GrammarResponse {
        status: true,
        response: GrammarReport {
            errors: vec![GrammarError {
                bad: "A".to_string(),
                ..GrammarError::default()
            }],
        },
    });

    let err = resolve("Apple", &cache, &checker).await.unwrap_err();

    assert!(err.to_string().contains("without suggesting"));
    assert_eq!(checker.calls(), 1);
    assert!(cache.lookup("Apple").unwrap().is_none());
}

#[tokio::test]
async fn on_disk_cache_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");

    {
        let cache = CacheStore::initialize(&path).unwrap();
        resolve("egg", &cache, &failing()).await.unwrap();
    }

    let cache = CacheStore::open(&path).unwrap();
    let checker = correcting("An", "A");
    let resolution = resolve("egg", &cache, &checker).await.unwrap();

    assert_eq!(resolution.article, "an");
    assert!(resolution.cached);
    assert_eq!(checker.calls(), 0);
}
