//! `atomix.toml` project configuration.
//!
//! The file describes token overrides in a nested, human-friendly shape that
//! [`flatten_config`] turns into the flat token key space:
//!
//! ```toml
//! prefix = "acme"
//! selector = ":root"
//!
//! [colors.primary]
//! main = "#7c3aed"
//! light = "#d0b2f5"
//! dark = "#3c1583"
//! 1 = "#f2e8fd"
//!
//! [colors]
//! brand = "#ff6600"
//!
//! [spacing]
//! 4 = "1rem"
//!
//! [tokens]
//! "body-bg" = "#fafafa"
//! ```
//!
//! Loading has two modes selected by [`LoadOptions::required`]: strict loads
//! report every failure, lenient loads log a warning and fall back to the
//! default configuration. A file that parses is then checked by
//! [`validate_config`]; strict loads reject the first problem found, lenient
//! loads log each one and keep the file.
use std::{
    fmt,
    path::{Path, PathBuf},
};

use derive_setters::Setters;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    color::Rgb,
    css::{CssVariableOptions, DEFAULT_PREFIX, DEFAULT_SELECTOR},
    tokens::{self, DesignTokens},
};

/// File name looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "atomix.toml";

/// Errors raised by strict configuration loads.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration TOML.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    /// The target has no filesystem to read from.
    #[error("loading config files is not supported on this target: {}", path.display())]
    Unsupported { path: PathBuf },
    /// A colour entry holds something that is not a CSS colour.
    #[error("invalid colour for `{name}.{key}`: {value}")]
    InvalidColor {
        name: String,
        key: String,
        value: String,
    },
    /// A top-level table or key this file format does not define.
    #[error("unknown config section `{section}`")]
    UnknownSection { section: String },
}

/// How [`load_config`] treats failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Setters)]
pub struct LoadOptions {
    /// Fail instead of falling back to the defaults.
    pub required: bool,
}

/// A scalar token value as written in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A string such as `"1rem"`.
    Text(String),
    /// An integer such as `1000`.
    Integer(i64),
    /// A float such as `1.5`.
    Float(f64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Integer(value) => write!(f, "{value}"),
            TokenValue::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A colour entry: either a single value or a scale table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorConfig {
    /// `brand = "#ff6600"`.
    Value(TokenValue),
    /// `[colors.primary]` with `main`, `light`, `dark` and `1`-`10`.
    Scale(IndexMap<String, TokenValue>),
}

/// Parsed `atomix.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AtomixConfig {
    /// Custom property prefix.
    pub prefix: Option<String>,
    /// Selector of the generated block.
    pub selector: Option<String>,
    /// Colour entries keyed by base token name.
    pub colors: IndexMap<String, ColorConfig>,
    /// Spacing steps, emitted as `spacing-<key>`.
    pub spacing: IndexMap<String, TokenValue>,
    /// Radii, emitted as `border-radius-<key>` (`md` is `border-radius`).
    pub radius: IndexMap<String, TokenValue>,
    /// Shadows, emitted as `box-shadow-<key>` (`md` is `box-shadow`).
    pub shadows: IndexMap<String, TokenValue>,
    /// Typography tokens, keyed by their token names.
    pub typography: IndexMap<String, TokenValue>,
    /// Raw token overrides, applied last.
    pub tokens: IndexMap<String, TokenValue>,
    /// Top-level entries not listed above, kept for [`validate_config`].
    #[serde(flatten)]
    pub unknown: IndexMap<String, toml::Value>,
}

impl AtomixConfig {
    /// CSS generation options with the configured prefix and selector.
    pub fn css_options(&self) -> CssVariableOptions {
        CssVariableOptions::default()
            .prefix(self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX))
            .selector(self.selector.as_deref().unwrap_or(DEFAULT_SELECTOR))
    }

    /// The default tokens with this configuration applied.
    pub fn to_tokens(&self) -> DesignTokens {
        tokens::create_tokens(flatten_config(self))
    }
}

/// Parses configuration text.
pub fn parse_config(text: &str) -> Result<AtomixConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Flattens the nested configuration into token overrides.
///
/// Colour scales map `main` to the base key, `light` to `-3`, `dark` to `-9`
/// and `1`-`10` to the matching step. Other scale keys are ignored.
pub fn flatten_config(config: &AtomixConfig) -> DesignTokens {
    let mut out = DesignTokens::new();

    for (name, color) in &config.colors {
        match color {
            ColorConfig::Value(value) => {
                out.insert(name.clone(), value.to_string());
            }
            ColorConfig::Scale(scale) => {
                for (key, value) in scale {
                    match scale_token(name, key) {
                        Some(token) => {
                            out.insert(token, value.to_string());
                        }
                        None => warn!(color = %name, key = %key, "ignoring unknown colour scale key"),
                    }
                }
            }
        }
    }
    for (key, value) in &config.spacing {
        out.insert(format!("spacing-{key}"), value.to_string());
    }
    for (key, value) in &config.radius {
        let token = if key == "md" {
            "border-radius".to_string()
        } else {
            format!("border-radius-{key}")
        };
        out.insert(token, value.to_string());
    }
    for (key, value) in &config.shadows {
        let token = if key == "md" {
            "box-shadow".to_string()
        } else {
            format!("box-shadow-{key}")
        };
        out.insert(token, value.to_string());
    }
    for (key, value) in config.typography.iter().chain(&config.tokens) {
        out.insert(key.clone(), value.to_string());
    }

    out
}

/// Checks a parsed configuration for values the flattening step would pass
/// through unchecked.
///
/// Reports colour entries that are not CSS colours and unknown top-level
/// sections, in file order. Unknown keys inside a colour scale are only
/// logged by [`flatten_config`].
pub fn validate_config(config: &AtomixConfig) -> Vec<ConfigError> {
    let mut issues: Vec<ConfigError> = config
        .unknown
        .keys()
        .map(|section| ConfigError::UnknownSection {
            section: section.clone(),
        })
        .collect();

    for (name, color) in &config.colors {
        let entries: Vec<(&str, &TokenValue)> = match color {
            ColorConfig::Value(value) => vec![("main", value)],
            ColorConfig::Scale(scale) => scale
                .iter()
                .filter(|(key, _)| scale_token(name, key).is_some())
                .map(|(key, value)| (key.as_str(), value))
                .collect(),
        };
        for (key, value) in entries {
            if !is_css_color(value) {
                issues.push(ConfigError::InvalidColor {
                    name: name.clone(),
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }
    issues
}

/// Hex colours, functional notations and named keywords.
fn is_css_color(value: &TokenValue) -> bool {
    let TokenValue::Text(text) = value else {
        return false;
    };
    let text = text.trim();
    if text.starts_with('#') {
        return Rgb::from_hex(text).is_some()
            || (text.len() == 9 && text[1..].bytes().all(|b| b.is_ascii_hexdigit()));
    }
    const FUNCTIONS: [&str; 7] = ["rgb(", "rgba(", "hsl(", "hsla(", "var(", "color-mix(", "oklch("];
    if FUNCTIONS.iter().any(|f| text.starts_with(f)) {
        return text.ends_with(')');
    }
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether configuration files can be read on this target.
pub const fn filesystem_available() -> bool {
    cfg!(not(target_family = "wasm"))
}

/// Loads `path` according to `options`.
///
/// With `required` unset, any failure is logged and
/// [`AtomixConfig::default`] is returned instead.
pub fn load_config(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<AtomixConfig, ConfigError> {
    let path = path.as_ref();
    match read_config(path) {
        Ok(config) => {
            let issues = validate_config(&config);
            if options.required {
                if let Some(first) = issues.into_iter().next() {
                    return Err(first);
                }
            } else {
                for issue in &issues {
                    warn!(path = %path.display(), error = %issue, "config problem");
                }
            }
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        Err(err) if options.required => Err(err),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to default config");
            Ok(AtomixConfig::default())
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn read_config(path: &Path) -> Result<AtomixConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

#[cfg(target_family = "wasm")]
fn read_config(path: &Path) -> Result<AtomixConfig, ConfigError> {
    Err(ConfigError::Unsupported {
        path: path.to_path_buf(),
    })
}

fn scale_token(name: &str, key: &str) -> Option<String> {
    match key {
        "main" => Some(name.to_string()),
        "light" => Some(format!("{name}-3")),
        "dark" => Some(format!("{name}-9")),
        step => match step.parse::<u8>() {
            Ok(n @ 1..=10) => Some(format!("{name}-{n}")),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r##"
prefix = "acme"

[colors]
brand = "#ff6600"

[colors.primary]
main = "#7c3aed"
light = "#d0b2f5"
dark = "#3c1583"
1 = "#f2e8fd"
"10" = "#2a0e60"
accent = "#000000"

[spacing]
4 = "1rem"

[radius]
md = "6px"
sm = "2px"

[shadows]
md = "none"

[typography]
"body-font-size" = "15px"
"font-weight-bold" = 650

[tokens]
"z-modal" = 2000
"body-bg" = "#fafafa"
"##;

    #[test]
    fn flattens_with_scale_suffixes() {
        let config = parse_config(SAMPLE).expect("valid config");
        let flat = flatten_config(&config);
        assert_eq!(flat["brand"], "#ff6600");
        assert_eq!(flat["primary"], "#7c3aed");
        assert_eq!(flat["primary-3"], "#d0b2f5");
        assert_eq!(flat["primary-9"], "#3c1583");
        assert_eq!(flat["primary-1"], "#f2e8fd");
        assert_eq!(flat["primary-10"], "#2a0e60");
        assert!(!flat.keys().any(|k| k.contains("accent")));
        assert_eq!(flat["spacing-4"], "1rem");
        assert_eq!(flat["border-radius"], "6px");
        assert_eq!(flat["border-radius-sm"], "2px");
        assert_eq!(flat["box-shadow"], "none");
        assert_eq!(flat["font-weight-bold"], "650");
        assert_eq!(flat["z-modal"], "2000");
    }

    #[test]
    fn config_applies_over_defaults() {
        let config = parse_config(SAMPLE).expect("valid config");
        let tokens = config.to_tokens();
        assert_eq!(tokens["body-bg"], "#fafafa");
        assert_eq!(tokens["primary-6"], "#7c3aed");
        assert_eq!(config.css_options().prefix, "acme");
        assert_eq!(config.css_options().selector, ":root");
    }

    #[test]
    fn empty_config_is_default() {
        let config = parse_config("").expect("empty config");
        assert_eq!(config, AtomixConfig::default());
        assert!(flatten_config(&config).is_empty());
    }

    #[test]
    fn scale_keys() {
        assert_eq!(scale_token("red", "main").as_deref(), Some("red"));
        assert_eq!(scale_token("red", "light").as_deref(), Some("red-3"));
        assert_eq!(scale_token("red", "dark").as_deref(), Some("red-9"));
        assert_eq!(scale_token("red", "7").as_deref(), Some("red-7"));
        assert_eq!(scale_token("red", "0"), None);
        assert_eq!(scale_token("red", "11"), None);
    }

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write config");
        let config = load_config(file.path(), LoadOptions::default().required(true))
            .expect("config loads");
        assert_eq!(config.prefix.as_deref(), Some("acme"));
    }

    #[test]
    fn missing_file_depends_on_required() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let err = load_config(&path, LoadOptions::default().required(true))
            .expect_err("strict load fails");
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("config file not found"));

        let config = load_config(&path, LoadOptions::default()).expect("lenient load");
        assert_eq!(config, AtomixConfig::default());
    }

    #[test]
    fn malformed_file_depends_on_required() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"prefix = [").expect("write config");

        let err = load_config(file.path(), LoadOptions { required: true })
            .expect_err("strict load fails");
        assert!(matches!(err, ConfigError::Parse { .. }));

        let config = load_config(file.path(), LoadOptions { required: false })
            .expect("lenient load");
        assert_eq!(config, AtomixConfig::default());
    }

    #[test]
    fn validation_flags_colours_and_sections() {
        let config = parse_config(
            r##"
[colors]
brand = "not a colour"
accent = "rebeccapurple"
muted = "rgba(0, 0, 0, 0.5)"

[colors.primary]
main = "#7c3aed"
light = 12
note = "ignored"

[animations]
fast = "100ms"
"##,
        )
        .expect("config parses");
        let issues = validate_config(&config);
        assert_eq!(issues.len(), 3);
        assert!(matches!(&issues[0], ConfigError::UnknownSection { section } if section == "animations"));
        assert!(matches!(&issues[1], ConfigError::InvalidColor { name, .. } if name == "brand"));
        assert!(matches!(
            &issues[2],
            ConfigError::InvalidColor { name, key, value } if name == "primary" && key == "light" && value == "12"
        ));
        assert!(validate_config(&parse_config(SAMPLE).expect("sample parses")).is_empty());
    }

    #[test]
    fn invalid_file_depends_on_required() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"prefix = \"acme\"\n[colors]\nbrand = \"#12\"\n")
            .expect("write config");

        let err = load_config(file.path(), LoadOptions::default().required(true))
            .expect_err("strict load fails");
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
        assert!(err.to_string().contains("brand.main"));

        let config = load_config(file.path(), LoadOptions::default()).expect("lenient load");
        assert_eq!(config.prefix.as_deref(), Some("acme"));
    }

    #[test]
    fn filesystem_is_available_natively() {
        assert!(filesystem_available());
    }
}
