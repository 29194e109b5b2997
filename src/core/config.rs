// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::generators::Policy;

// Defaults for the generator front ends
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub min_length: usize,
    pub max_length: usize,
    pub count: usize,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digit: bool,
    pub require_symbol: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            min_length: 16,
            max_length: 24,
            count: 1,
            require_lowercase: true,
            require_uppercase: true,
            require_digit: true,
            require_symbol: true,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from any key lookup; unparseable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(length) = lookup("PASSGEN_MIN_LENGTH").and_then(|v| v.trim().parse().ok()) {
            config.min_length = length;
        }

        if let Some(length) = lookup("PASSGEN_MAX_LENGTH").and_then(|v| v.trim().parse().ok()) {
            config.max_length = length;
        }

        if let Some(count) = lookup("PASSGEN_COUNT").and_then(|v| v.trim().parse().ok()) {
            config.count = count;
        }

        if let Some(flag) = lookup("PASSGEN_REQUIRE_LOWERCASE").and_then(|v| parse_flag(&v)) {
            config.require_lowercase = flag;
        }

        if let Some(flag) = lookup("PASSGEN_REQUIRE_UPPERCASE").and_then(|v| parse_flag(&v)) {
            config.require_uppercase = flag;
        }

        if let Some(flag) = lookup("PASSGEN_REQUIRE_DIGIT").and_then(|v| parse_flag(&v)) {
            config.require_digit = flag;
        }

        if let Some(flag) = lookup("PASSGEN_REQUIRE_SYMBOL").and_then(|v| parse_flag(&v)) {
            config.require_symbol = flag;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL").and_then(|v| parse_level(&v)) {
            config.log_level = level;
        }

        config
    }

    pub fn default_policy(&self) -> Policy {
        Policy::new(
            self.min_length,
            self.max_length,
            self.require_lowercase,
            self.require_uppercase,
            self.require_digit,
            self.require_symbol,
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
