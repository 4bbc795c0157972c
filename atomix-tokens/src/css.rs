//! CSS custom property generation.
//!
//! Every name is built from an explicit [`TokenNaming`] or
//! [`CssVariableOptions`] value; nothing here reads global state.
//!
//! ## Usage
//!
//! ```
//! use atomix_tokens::css::{CssVariableOptions, generate_css_block};
//!
//! let css = generate_css_block([("a", Some("1"))], &CssVariableOptions::default().prefix("x"));
//! assert_eq!(css, ":root {\n  --x-a: 1;\n}");
//! ```
use derive_setters::Setters;
use indexmap::IndexMap;

use crate::tokens::DesignTokens;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "atomix";
/// Selector used when none is configured.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Options for [`generate_css_variables`].
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct CssVariableOptions {
    /// Selector wrapping the declarations.
    pub selector: String,
    /// Variable name prefix, without dashes.
    pub prefix: String,
}

impl Default for CssVariableOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// How component variable names are assembled.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct TokenNaming {
    /// Leading name segment.
    #[setters(into)]
    pub prefix: String,
    /// Joins the name segments.
    #[setters(into)]
    pub separator: String,
    /// Whether the component name is part of the variable name.
    pub include_component: bool,
}

impl Default for TokenNaming {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            separator: "-".to_string(),
            include_component: true,
        }
    }
}

/// Property values of one component, grouped the way stylesheets use them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct ComponentVars {
    /// Component name such as `button`.
    pub component: String,
    /// Base properties.
    pub properties: IndexMap<String, String>,
    /// Per-part properties, e.g. `icon`.
    pub parts: IndexMap<String, IndexMap<String, String>>,
    /// Per-state properties, e.g. `hover`.
    pub states: IndexMap<String, IndexMap<String, String>>,
    /// Per-variant properties, e.g. `primary`.
    pub variants: IndexMap<String, IndexMap<String, String>>,
}

/// Renders `tokens` as a block of custom properties.
pub fn generate_css_variables(tokens: &DesignTokens, options: &CssVariableOptions) -> String {
    generate_css_block(
        tokens.iter().map(|(key, value)| (key.as_str(), Some(value.as_str()))),
        options,
    )
}

/// Renders `entries` as `<selector> {\n  --<prefix>-<key>: <value>;\n}`.
///
/// Entries without a value are skipped. Input order is kept.
pub fn generate_css_block<I, K, V>(entries: I, options: &CssVariableOptions) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let declarations = entries
        .into_iter()
        .filter_map(|(key, value)| {
            value.map(|value| {
                format!(
                    "  --{}-{}: {};",
                    options.prefix,
                    key.as_ref(),
                    value.as_ref()
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} {{\n{}\n}}", options.selector, declarations)
}

/// Maps every token to its `--<prefix>-<key>` custom property name.
pub fn tokens_to_css_vars(tokens: &DesignTokens, naming: &TokenNaming) -> IndexMap<String, String> {
    tokens
        .iter()
        .map(|(key, value)| {
            (
                format!("--{}{}{}", naming.prefix, naming.separator, key),
                value.clone(),
            )
        })
        .collect()
}

/// Maps SCSS-style names (`$primary_color`) to custom properties.
///
/// A leading `$` is dropped and underscores become the separator.
pub fn scss_tokens_to_css_vars<I, K, V>(tokens: I, naming: &TokenNaming) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    tokens
        .into_iter()
        .map(|(key, value)| {
            let key = key.as_ref();
            let key = key.strip_prefix('$').unwrap_or(key);
            let key = key.replace('_', &naming.separator);
            (
                format!("--{}{}{}", naming.prefix, naming.separator, key),
                value.into(),
            )
        })
        .collect()
}

/// Builds `--<prefix>-<component>-<property>`.
pub fn css_variable_name(component: &str, property: &str, naming: &TokenNaming) -> String {
    let mut parts = vec![naming.prefix.as_str()];
    if naming.include_component {
        parts.push(component);
    }
    parts.push(property);
    format!("--{}", parts.join(&naming.separator))
}

/// Expands a component's properties into named custom properties.
///
/// Base properties come first, then parts, states and variants; grouped
/// properties are named `<group>-<property>`.
pub fn component_css_vars(vars: &ComponentVars, naming: &TokenNaming) -> IndexMap<String, String> {
    let mut out: IndexMap<String, String> = vars
        .properties
        .iter()
        .map(|(key, value)| {
            (
                css_variable_name(&vars.component, key, naming),
                value.clone(),
            )
        })
        .collect();

    for groups in [&vars.parts, &vars.states, &vars.variants] {
        for (group, properties) in groups {
            for (key, value) in properties {
                out.insert(
                    css_variable_name(&vars.component, &format!("{group}-{key}"), naming),
                    value.clone(),
                );
            }
        }
    }
    out
}

/// Returns true for names of the form `--[a-z0-9-]+`.
pub fn is_valid_css_variable_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    })
}

/// Extracts `button` from `--atomix-button-bg`.
pub fn extract_component_name<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = name.strip_prefix("--")?.strip_prefix(prefix)?.strip_prefix('-')?;
    let (component, _) = rest.split_once('-')?;
    let valid = !component.is_empty()
        && component
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    valid.then_some(component)
}
