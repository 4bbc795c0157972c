use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use atomix_tokens::{
    AtomixConfig, LoadOptions, config::DEFAULT_CONFIG_FILE, generate_css_variables, load_config,
    tokens::merge_tokens,
};

use crate::output;

pub struct TokensOptions {
    pub config: Option<PathBuf>,
    pub required: bool,
    pub prefix: Option<String>,
    pub selector: Option<String>,
    pub overrides: Vec<(String, String)>,
    pub out: Option<PathBuf>,
}

pub fn execute(options: &TokensOptions) -> Result<()> {
    let css = generate(options)?;
    match &options.out {
        Some(path) => {
            fs::write(path, format!("{css}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::status("Wrote", path.display().to_string());
        }
        None => println!("{css}"),
    }
    Ok(())
}

pub fn generate(options: &TokensOptions) -> Result<String> {
    let config = load(options)?;

    let mut tokens = config.to_tokens();
    merge_tokens(&mut tokens, options.overrides.iter().cloned());

    let mut css_options = config.css_options();
    if let Some(prefix) = &options.prefix {
        css_options.prefix = prefix.clone();
    }
    if let Some(selector) = &options.selector {
        css_options.selector = selector.clone();
    }

    output::status(
        "Generated",
        format!(
            "{} variables ({} {})",
            tokens.len(),
            css_options.selector,
            css_options.prefix
        ),
    );
    Ok(generate_css_variables(&tokens, &css_options))
}

fn load(options: &TokensOptions) -> Result<AtomixConfig> {
    let path = match &options.config {
        Some(path) => path.clone(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                output::note(format!("no {DEFAULT_CONFIG_FILE} found, using default tokens"));
                return Ok(AtomixConfig::default());
            }
            path
        }
    };

    output::status("Loading", path.display().to_string());
    if !options.required && !path.exists() {
        output::warn(format!("{} not found, using default tokens", path.display()));
    }
    load_config(&path, LoadOptions::default().required(options.required))
        .with_context(|| format!("Failed to load {}", path.display()))
}
