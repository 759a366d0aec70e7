use super::*;
use proptest::prelude::*;

// Unit tests for configuration parsing

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert_eq!(config.notification.show_ms, 4000);
    assert_eq!(config.notification.exit_ms, 300);
    assert_eq!(config.history.max_entries, 50);
    assert!(config.ai.enabled);
    assert_eq!(config.ai.gemini.model, "gemini-1.5-flash");
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[clipboard]
backend = "osc52"

[notification]
show_ms = 2500
exit_ms = 150

[history]
max_entries = 20

[ai]
enabled = true
debounce_ms = 500

[ai.gemini]
api_key = "abc123"
model = "gemini-1.5-pro"
max_tokens = 1024
"#;
    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
    assert_eq!(config.notification.show_ms, 2500);
    assert_eq!(config.notification.exit_ms, 150);
    assert_eq!(config.history.max_entries, 20);
    assert_eq!(config.ai.debounce_ms, 500);
    assert_eq!(config.ai.gemini.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.ai.gemini.model, "gemini-1.5-pro");
    assert_eq!(config.ai.gemini.max_tokens, 1024);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.notification.show_ms, 4000);
    assert_eq!(config.history.max_entries, 50);
}

#[test]
fn test_partial_section_fills_defaults() {
    let toml = r#"
[notification]
show_ms = 1000
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.notification.show_ms, 1000);
    assert_eq!(config.notification.exit_ms, 300);
}

#[test]
fn test_invalid_backend_fails_to_parse() {
    let toml = r#"
[clipboard]
backend = "teleport"
"#;
    assert!(toml::from_str::<Config>(toml).is_err());
}

#[test]
fn test_config_path_under_home() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("gyanguru/config.toml")
            || path_str.ends_with("gyanguru\\config.toml")
    );
}

// For any valid clipboard backend value, parsing extracts it correctly.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
        let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", backend);
        let config: Config = toml::from_str(&toml_content).unwrap();

        let expected = match backend {
            "auto" => ClipboardBackend::Auto,
            "system" => ClipboardBackend::System,
            "osc52" => ClipboardBackend::Osc52,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.clipboard.backend, expected);
    }
}

// For any malformed TOML, parsing fails (and load_config would fall back to
// defaults with a warning).
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_malformed_toml_rejected(
        malformed in prop::sample::select(vec![
            "[notification\nshow_ms = 100",
            "[notification]\nshow_ms = fast",
            "[notification]\n show_ms",
            "notification]\nshow_ms = 100",
        ])
    ) {
        prop_assert!(toml::from_str::<Config>(malformed).is_err());
    }
}
