//! Build script for doorwatch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates doorwatch.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest GPIO number on the RP2040
const MAX_GPIO: i64 = 29;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate doorwatch.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=doorwatch.toml");

    let config_path = Path::new("doorwatch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: doorwatch.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds doorwatch.toml as its configuration.        ║\n\
            ║  Please create one in the doorwatch-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read doorwatch.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => report(
            "Invalid TOML syntax in doorwatch.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_monitor(&config, &mut errors);
    validate_pins(&config, &mut errors);

    if !errors.is_empty() {
        report("Invalid configuration in doorwatch.toml", &errors);
    }

    println!("cargo:warning=doorwatch.toml validated successfully");
}

/// Fail the build with a boxed error message
fn report(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let truncated = if line.len() > 62 {
                    format!("{}...", &line[..59])
                } else {
                    line.clone()
                };
                format!("║  • {:<62} ║", truncated)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Read an optional integer field, checking its range
fn int_field(
    table: &toml::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.get(key) {
        None => None,
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => Some(*v),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
    }
}

/// Validate the [monitor] section
fn validate_monitor(config: &toml::Value, errors: &mut Vec<String>) {
    let monitor = match config.get("monitor") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[monitor] must be a table".to_string());
            return;
        }
        None => {
            println!("cargo:warning=doorwatch.toml has no [monitor] section, using defaults");
            return;
        }
    };

    for key in monitor.keys() {
        if ![
            "debounce_ms",
            "grace_step_ms",
            "grace_steps",
            "alarm_blink_ms",
            "tick_interval_ms",
        ]
        .contains(&key.as_str())
        {
            errors.push(format!("[monitor] unknown key '{}'", key));
        }
    }

    let u32_max = i64::from(u32::MAX);
    let debounce = int_field(monitor, "monitor", "debounce_ms", 0, u32_max, errors).unwrap_or(0);
    let step = int_field(monitor, "monitor", "grace_step_ms", 1, u32_max, errors).unwrap_or(1000);
    int_field(monitor, "monitor", "grace_steps", 0, 255, errors);
    let blink = int_field(monitor, "monitor", "alarm_blink_ms", 1, u32_max, errors).unwrap_or(250);
    let tick = int_field(monitor, "monitor", "tick_interval_ms", 1, u32_max, errors).unwrap_or(10);

    if tick > blink {
        errors.push("[monitor] tick_interval_ms must not exceed alarm_blink_ms".to_string());
    }
    if debounce > step {
        errors.push("[monitor] debounce_ms must not exceed grace_step_ms".to_string());
    }
}

/// Parse "gpioNN" with optional "!" / "^" prefixes
fn pin_number(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(['!', '^']);
    s.strip_prefix("gpio")?.parse().ok()
}

/// Validate the optional [pins] section
fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let pins = match config.get("pins") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[pins] must be a table".to_string());
            return;
        }
        None => return,
    };

    let mut used: Vec<(String, i64)> = Vec::new();
    for (name, value) in pins {
        if !["contact", "status_led", "alarm_led"].contains(&name.as_str()) {
            errors.push(format!("[pins] unknown pin '{}'", name));
            continue;
        }
        let pin = match value {
            toml::Value::String(s) => pin_number(s),
            _ => None,
        };
        match pin {
            Some(n) if n <= MAX_GPIO => {
                if let Some((other, _)) = used.iter().find(|(_, m)| *m == n) {
                    errors.push(format!("[pins] {} and {} both use gpio{}", other, name, n));
                }
                used.push((name.clone(), n));
            }
            Some(n) => errors.push(format!("[pins] {} gpio{} out of range (0-{})", name, n, MAX_GPIO)),
            None => errors.push(format!("[pins] {} must be a string like \"gpio4\"", name)),
        }
    }
}
