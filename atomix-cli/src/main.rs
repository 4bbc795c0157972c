use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};

mod commands;
mod output;

use commands::{calendar, parse, tokens};

#[derive(Parser)]
#[command(name = "atomix")]
#[command(version, about = "Atomix design tokens and date picker helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the CSS custom properties block from design tokens
    Tokens(TokensArgs),
    /// Print a month as a 6x7 grid or as date picker markup
    Calendar(CalendarArgs),
    /// Parse date or date range text
    Parse(ParseArgs),
}

#[derive(Args)]
struct TokensArgs {
    /// Config file (defaults to ./atomix.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Fail when the config file cannot be loaded
    #[arg(long)]
    required: bool,
    /// Variable name prefix (overrides the config)
    #[arg(long)]
    prefix: Option<String>,
    /// Selector wrapping the declarations (overrides the config)
    #[arg(long)]
    selector: Option<String>,
    /// Override a single token, e.g. --set primary=#ff6600
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,
    /// Write the CSS to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct CalendarArgs {
    /// Month to show, as yyyy-MM (defaults to the current month)
    #[arg(short, long)]
    month: Option<String>,
    /// Prefix each week with its ISO week number
    #[arg(long)]
    week_numbers: bool,
    /// First day of the week
    #[arg(long, value_enum, default_value_t = FirstDay::Sun)]
    first_day: FirstDay,
    /// Print the date picker markup instead of the text grid
    #[arg(long)]
    html: bool,
}

#[derive(Args)]
struct ParseArgs {
    /// Text to parse
    text: String,
    /// Expected format
    #[arg(short, long, default_value = atomix_calendar::format::DEFAULT_FORMAT)]
    format: String,
    /// Parse "<start> - <end>" range text
    #[arg(long)]
    range: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstDay {
    Sun,
    Mon,
}

impl From<FirstDay> for atomix_calendar::Weekday {
    fn from(day: FirstDay) -> Self {
        match day {
            FirstDay::Sun => atomix_calendar::Weekday::Sun,
            FirstDay::Mon => atomix_calendar::Weekday::Mon,
        }
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("empty token name in `{raw}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,atomix=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Tokens(args) => tokens::execute(&tokens::TokensOptions {
            config: args.config,
            required: args.required,
            prefix: args.prefix,
            selector: args.selector,
            overrides: args.overrides,
            out: args.out,
        }),
        Commands::Calendar(args) => calendar::execute(&calendar::CalendarOptions {
            month: args.month,
            week_numbers: args.week_numbers,
            first_day: args.first_day.into(),
            html: args.html,
        }),
        Commands::Parse(args) => parse::execute(&args.text, &args.format, args.range),
    }
}

fn main() {
    init_tracing();
    let Cli { command } = Cli::parse();

    if let Err(err) = run(command) {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn key_value_pairs() {
        assert_eq!(
            parse_key_value("primary = #ff6600").expect("pair"),
            ("primary".to_string(), "#ff6600".to_string())
        );
        assert_eq!(
            parse_key_value("font-family-base=a=b").expect("pair").1,
            "a=b"
        );
        assert!(parse_key_value("primary").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([
            "atomix", "tokens", "--set", "a=1", "--set", "b=2", "--prefix", "x",
        ])
        .expect("valid args");
        let Commands::Tokens(args) = cli.command else {
            panic!("expected tokens");
        };
        assert_eq!(args.overrides.len(), 2);
        assert_eq!(args.prefix.as_deref(), Some("x"));

        let cli = Cli::try_parse_from(["atomix", "calendar", "--month", "2024-02", "--first-day", "mon"])
            .expect("valid args");
        assert!(matches!(cli.command, Commands::Calendar(CalendarArgs { first_day: FirstDay::Mon, .. })));
    }
}
