use respond::{RenderConfig, Renderer, Response};
use std::env;

// Note: these tests mutate process-wide environment variables.
// Run them with: cargo test -- --ignored --test-threads=1

#[test]
fn test_config_defaults_struct() {
    let config = RenderConfig::default();
    assert!(config.escape_html);
    assert_eq!(config.indent, 0);
}

#[test]
#[ignore] // Ignore by default due to env var conflicts when running in parallel
fn test_config_from_env_defaults() {
    unsafe {
        env::remove_var("RESPOND_ESCAPE_HTML");
        env::remove_var("RESPOND_INDENT");
    }

    let config = RenderConfig::from_env();
    assert_eq!(config, RenderConfig::default());
}

#[test]
#[ignore] // Ignore by default due to env var conflicts when running in parallel
fn test_config_from_env() {
    unsafe {
        env::set_var("RESPOND_ESCAPE_HTML", "false");
        env::set_var("RESPOND_INDENT", "4");
    }

    let config = RenderConfig::from_env();
    assert!(!config.escape_html);
    assert_eq!(config.indent, 4);

    let mut res = Response::new();
    Renderer::from_env().okay(&mut res, &["<b>"]);
    assert_eq!(res.body_str(), "[\n    \"<b>\"\n]\n");

    unsafe {
        env::remove_var("RESPOND_ESCAPE_HTML");
        env::remove_var("RESPOND_INDENT");
    }
}

#[test]
#[ignore] // Ignore by default due to env var conflicts when running in parallel
fn test_config_invalid_values_keep_defaults() {
    unsafe {
        env::set_var("RESPOND_ESCAPE_HTML", "sometimes");
        env::set_var("RESPOND_INDENT", "wide");
    }

    let config = RenderConfig::from_env();
    assert!(config.escape_html);
    assert_eq!(config.indent, 0);

    unsafe {
        env::remove_var("RESPOND_ESCAPE_HTML");
        env::remove_var("RESPOND_INDENT");
    }
}
