//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use xrlogo::config::AppConfig;
use xrlogo_core::LogoParams;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("XRLOGO_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("XRLOGO_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_overrides_logo_params() {
    std::env::set_var("XRLOGO_LOGO__HEIGHT", "1.25");
    std::env::set_var("XRLOGO_SPINNER__SPIN_SPEED", "2.0");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("XRLOGO_LOGO__HEIGHT");
    std::env::remove_var("XRLOGO_SPINNER__SPIN_SPEED");

    assert_eq!(config.logo.height, 1.25);
    assert_eq!(config.logo.width, LogoParams::WEBXR.width);
    assert_eq!(config.spinner.spin_speed, 2.0);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let config = AppConfig::load_from("config").unwrap();
    let builtin = AppConfig::default();

    assert_eq!(config.logo, LogoParams::WEBXR);
    assert_eq!(config.window.width, builtin.window.width);
    assert_eq!(config.camera.eye, builtin.camera.eye);
    assert_eq!(config.spinner.curve_tolerance, builtin.spinner.curve_tolerance);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, "WebXR Logo");
    assert_eq!(config.rendering.background_color, [0.02, 0.02, 0.04, 1.0]);
}

#[test]
#[serial]
fn test_invalid_env_value_is_an_error() {
    std::env::set_var("XRLOGO_WINDOW__WIDTH", "wide");
    let result = AppConfig::load();
    std::env::remove_var("XRLOGO_WINDOW__WIDTH");

    let err = result.unwrap_err();
    assert!(format!("{}", err).starts_with("Configuration error"));
}
