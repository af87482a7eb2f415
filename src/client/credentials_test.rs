use super::credentials::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_sign_produces_zentao_token() {
    let credentials = Credentials::new("app1", "secret");
    let params = credentials.sign(1_700_000_000);

    assert_eq!(
        params,
        vec![
            ("code", "app1".to_string()),
            ("time", "1700000000".to_string()),
            ("token", "9c9e6f67a5e6a8e69549a85f1eb68d5f".to_string()),
        ]
    );
}

#[test]
fn test_debug_redacts_key() {
    let credentials = Credentials::new("app1", "secret");
    let rendered = format!("{:?}", credentials);
    assert!(rendered.contains("app1"));
    assert!(!rendered.contains("secret"));
}

#[test]
fn test_store_starts_empty_and_replaces_whole_pair() {
    let store = CredentialStore::default();
    assert!(store.snapshot().is_none());

    store.set(Credentials::new("app1", "secret"));
    store.set(Credentials::new("app2", "other"));

    assert_eq!(store.snapshot(), Some(Credentials::new("app2", "other")));
}

#[test]
fn test_store_snapshots_are_consistent_under_concurrent_writes() {
    let store = Arc::new(CredentialStore::new(Some(Credentials::new("a", "a-key"))));

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..500 {
                if i % 2 == 0 {
                    store.set(Credentials::new("b", "b-key"));
                } else {
                    store.set(Credentials::new("a", "a-key"));
                }
            }
        })
    };

    for _ in 0..500 {
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.key, format!("{}-key", snapshot.code));
    }

    writer.join().unwrap();
}

#[test]
fn test_mock_clock_drives_signing() {
    let mut clock = MockClock::new();
    clock.expect_now().times(1).return_const(1_700_000_000_i64);

    let credentials = Credentials::new("app1", "other");
    let params = credentials.sign(clock.now());
    assert_eq!(params[2].1, "d42b47c2a1a65978d541260e4638ede1");
}

#[test]
fn test_system_clock_is_recent() {
    // 2023-11-14, well before any plausible test run
    assert!(SystemClock.now() > 1_700_000_000);
}
