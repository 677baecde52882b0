// ABOUTME: Tests for logging configuration parsing from the environment
// ABOUTME: Env-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use wardrobe_stylist::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" Compact "), LogFormat::Compact);
    assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    std::env::remove_var("RUST_LOG");
    std::env::remove_var("LOG_FORMAT");
    std::env::remove_var("LOG_INCLUDE_LOCATION");
    std::env::remove_var("SERVICE_NAME");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    std::env::set_var("RUST_LOG", "debug");
    std::env::set_var("LOG_FORMAT", "json");
    std::env::set_var("SERVICE_NAME", "stylist-test");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "stylist-test");

    std::env::remove_var("RUST_LOG");
    std::env::remove_var("LOG_FORMAT");
    std::env::remove_var("SERVICE_NAME");
}

#[test]
fn test_with_level_replaces_env_level() {
    let config = LoggingConfig::default().with_level("warn");
    assert_eq!(config.level, "warn");
}
