//! Simple TOML parser for the door watch configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `doorwatch.toml`. It does NOT support the full TOML spec and needs no
//! allocator.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - `[monitor]` and `[pins]` section headers
//! - Comments (# ...)
//!
//! Keys that are missing keep their default value.

use super::types::{ConfigError, DoorwatchConfig, MonitorConfig, PinConfig, PinsConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Line is not `key = value`
    InvalidLine,
    /// Invalid value type
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Key not known in its section
    UnknownKey,
    /// Same GPIO assigned to more than one function
    PinConflict,
    /// Values parsed but inconsistent
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError::Invalid(err)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Monitor,
    Pins,
}

/// Parse TOML configuration into a validated [`DoorwatchConfig`]
pub fn parse_config(input: &str) -> Result<DoorwatchConfig, ParseError> {
    let mut config = DoorwatchConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        match section {
            Section::Monitor => apply_monitor(&mut config.monitor, key, value)?,
            Section::Pins => apply_pins(&mut config.pins, key, value)?,
            Section::Root => return Err(ParseError::UnknownKey),
        }
    }

    config.monitor.validate()?;
    if config.pins.has_conflicts() {
        return Err(ParseError::PinConflict);
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "monitor" => Ok(Section::Monitor),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Remove a trailing comment, unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_monitor(monitor: &mut MonitorConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "debounce_ms" => monitor.debounce_ms = parse_int(value)?,
        "grace_step_ms" => monitor.grace_step_ms = parse_int(value)?,
        "grace_steps" => monitor.grace_steps = parse_int(value)?,
        "alarm_blink_ms" => monitor.alarm_blink_ms = parse_int(value)?,
        "tick_interval_ms" => monitor.tick_interval_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_pins(pins: &mut PinsConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "contact" => pins.contact = parse_pin(value)?,
        "status_led" => pins.status_led = parse_pin(value)?,
        "alarm_led" => pins.alarm_led = parse_pin(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ParseError> {
    let mut acc: u64 = 0;
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '_' => continue,
            '0'..='9' => {
                acc = acc
                    .checked_mul(10)
                    .and_then(|a| a.checked_add(c as u64 - '0' as u64))
                    .ok_or(ParseError::InvalidValue)?;
                digits += 1;
            }
            _ => return Err(ParseError::InvalidValue),
        }
    }
    if digits == 0 {
        return Err(ParseError::InvalidValue);
    }
    T::try_from(acc).map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio4", "!gpio4", "^gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value)?;
    let mut inverted = false;
    let mut pull_up = false;

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let num = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = num.parse().map_err(|_| ParseError::InvalidPin)?;

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}
