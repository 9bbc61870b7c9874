use std::collections::HashMap;
use std::time::Duration;

use movie_proxy::config::{Config, ConfigError, DEFAULT_OMDB_BASE_URL};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults_applied() {
    let config = Config::from_lookup(lookup(&[("OMDB_API_KEY", "abc123")])).unwrap();
    assert_eq!(config.omdb_api_key, "abc123");
    assert_eq!(config.omdb_base_url.as_str(), DEFAULT_OMDB_BASE_URL);
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.request_timeout, Duration::from_secs(10));
}

#[test]
fn test_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("OMDB_API_KEY", " abc123 "),
        ("OMDB_BASE_URL", "http://localhost:9000/"),
        ("BIND_ADDR", "127.0.0.1:3000"),
        ("OMDB_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(config.omdb_api_key, "abc123");
    assert_eq!(config.omdb_base_url.as_str(), "http://localhost:9000/");
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.request_timeout, Duration::from_secs(3));
}

#[test]
fn test_missing_api_key() {
    let cases: [&[(&str, &str)]; 3] = [&[], &[("OMDB_API_KEY", "")], &[("OMDB_API_KEY", "   ")]];
    for vars in cases {
        let err = Config::from_lookup(lookup(vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OMDB_API_KEY")));
    }
}

#[test]
fn test_invalid_values() {
    let cases = [
        ("OMDB_BASE_URL", "not a url"),
        ("BIND_ADDR", "localhost"),
        ("OMDB_TIMEOUT_SECS", "ten"),
        ("OMDB_TIMEOUT_SECS", "0"),
    ];
    for (key, value) in cases {
        let err = Config::from_lookup(lookup(&[("OMDB_API_KEY", "k"), (key, value)])).unwrap_err();
        match err {
            ConfigError::Invalid { key: got, .. } => assert_eq!(got, key),
            other => panic!("expected invalid {key}, got {other:?}"),
        }
    }
}
