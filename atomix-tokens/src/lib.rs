//! Design tokens for Atomix.
//!
//! Tokens are flat, ordered name/value pairs. They start from
//! [`tokens::DEFAULT_TOKENS`], take overrides from code, a [`theme::Theme`] or
//! an `atomix.toml` file, and end up as a block of CSS custom properties.
//!
//! # Usage
//!
//! ```
//! use atomix_tokens::{
//!     css::{CssVariableOptions, generate_css_variables},
//!     tokens::create_tokens,
//! };
//!
//! let tokens = create_tokens([("primary", "#ABCDEF")]);
//! let css = generate_css_variables(&tokens, &CssVariableOptions::default());
//! assert!(css.starts_with(":root {\n  --atomix-primary: #ABCDEF;\n"));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod config;
pub mod css;
pub mod theme;
pub mod tokens;

pub use config::{AtomixConfig, ConfigError, LoadOptions, load_config};
pub use css::{CssVariableOptions, TokenNaming, generate_css_variables};
pub use theme::Theme;
pub use tokens::{DesignTokens, create_tokens, default_tokens};
