//! Build script for pixelvfo-app
//!
//! Validates vfo.toml at compile time. The file is embedded into the crate
//! as the default configuration: unknown keys, values outside their field
//! type, and inconsistent slot or tuning values fail the build. Screen
//! geometry is checked by `Layout::new` when the config is loaded.

use std::fs;
use std::path::Path;

/// Sections the embedded configuration must spell out
const REQUIRED_SECTIONS: [&str; 2] = ["slots", "tuning"];

/// Every accepted key with its allowed integer range, per section
const SECTIONS: [(&str, &[(&str, i64, i64)]); 4] = [
    (
        "ui",
        &[
            ("screen_width", 0, U16),
            ("screen_height", 0, U16),
            ("header_height", 0, U16),
            ("row_height", 0, U16),
            ("page_size", 0, U8),
            ("scroll_step", 0, U8),
            ("scroll_width", 0, U16),
            ("back_width", 0, U16),
            ("back_height", 0, U16),
            ("dialog_x", 0, U16),
            ("dialog_y", 0, U16),
            ("dialog_width", 0, U16),
            ("dialog_height", 0, U16),
            ("button_width", 0, U16),
            ("button_height", 0, U16),
        ],
    ),
    (
        "touch",
        &[
            ("raw_min_x", 0, U16),
            ("raw_max_x", 0, U16),
            ("raw_min_y", 0, U16),
            ("raw_max_y", 0, U16),
            ("move_delta", 0, U16),
        ],
    ),
    ("slots", &[("count", 1, MAX_SLOTS), ("base_address", 0, U32)]),
    (
        "tuning",
        &[
            ("default_frequency", 1, I32),
            ("min_frequency", 1, I32),
            ("max_frequency", 1, I32),
            ("default_digit", 0, MAX_DIGIT),
            ("default_brightness", 0, U8),
            ("max_brightness", 1, U8),
            ("max_clock_offset", 0, I32),
        ],
    ),
];

const U8: i64 = u8::MAX as i64;
const U16: i64 = u16::MAX as i64;
const U32: i64 = u32::MAX as i64;
const I32: i64 = i32::MAX as i64;

/// One slot menu holds every slot
const MAX_SLOTS: i64 = 16;
/// Tens of MHz
const MAX_DIGIT: i64 = 7;

/// Built-in values for keys vfo.toml may leave out
const DEFAULTS: [(&str, &str, i64); 6] = [
    ("tuning", "default_frequency", 14_025_000),
    ("tuning", "min_frequency", 1_000),
    ("tuning", "max_frequency", 60_000_000),
    ("tuning", "default_brightness", 8),
    ("tuning", "max_brightness", 10),
    ("slots", "count", 10),
];

fn main() {
    println!("cargo:rerun-if-changed=vfo.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let path = Path::new("vfo.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => panic!("\n  ERROR: failed to read vfo.toml: {}\n", e),
    };

    let config: toml::Table = match toml::from_str(&content) {
        Ok(table) => table,
        Err(e) => panic!("\n  ERROR: invalid TOML in vfo.toml:\n{}\n", e),
    };

    let mut errors = Vec::new();
    validate_required_sections(&config, &mut errors);
    validate_keys(&config, &mut errors);
    if errors.is_empty() {
        validate_tuning(&config, &mut errors);
    }

    if !errors.is_empty() {
        panic!(
            "\n  ERROR: vfo.toml is invalid:\n{}\n",
            errors
                .iter()
                .map(|e| format!("    - {}", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

fn validate_required_sections(config: &toml::Table, errors: &mut Vec<String>) {
    for section in REQUIRED_SECTIONS {
        if !config.get(section).is_some_and(toml::Value::is_table) {
            errors.push(format!("missing section [{}]", section));
        }
    }
}

/// Reject unknown sections and keys, non-integers, and out-of-range values
fn validate_keys(config: &toml::Table, errors: &mut Vec<String>) {
    for (name, value) in config {
        let known = SECTIONS.iter().find(|(section, _)| *section == name.as_str());
        let Some((_, fields)) = known else {
            errors.push(format!("unknown section [{}]", name));
            continue;
        };
        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };
        for (key, value) in table {
            let field = fields.iter().find(|(field, ..)| *field == key.as_str());
            let Some(&(_, min, max)) = field else {
                errors.push(format!("unknown key {}.{}", name, key));
                continue;
            };
            match value.as_integer() {
                Some(v) if (min..=max).contains(&v) => {}
                Some(v) => errors.push(format!(
                    "{}.{} = {} is outside {}..={}",
                    name, key, v, min, max
                )),
                None => errors.push(format!("{}.{} must be an integer", name, key)),
            }
        }
    }
}

/// Cross-field checks matching `VfoConfig::validate`
fn validate_tuning(config: &toml::Table, errors: &mut Vec<String>) {
    let min = value(config, "tuning", "min_frequency");
    let max = value(config, "tuning", "max_frequency");
    let default = value(config, "tuning", "default_frequency");
    if min >= max {
        errors.push(format!(
            "tuning.min_frequency ({}) must be below tuning.max_frequency ({})",
            min, max
        ));
    } else if !(min..=max).contains(&default) {
        errors.push(format!(
            "tuning.default_frequency ({}) is outside the band {}..={}",
            default, min, max
        ));
    }

    let level = value(config, "tuning", "default_brightness");
    let top = value(config, "tuning", "max_brightness");
    if level > top {
        errors.push(format!(
            "tuning.default_brightness ({}) exceeds tuning.max_brightness ({})",
            level, top
        ));
    }
}

/// Integer at `section.key`, or its built-in default
fn value(config: &toml::Table, section: &str, key: &str) -> i64 {
    config
        .get(section)
        .and_then(|table| table.get(key))
        .and_then(toml::Value::as_integer)
        .or_else(|| {
            DEFAULTS
                .iter()
                .find(|(s, k, _)| *s == section && *k == key)
                .map(|(.., v)| *v)
        })
        .unwrap_or_default()
}
