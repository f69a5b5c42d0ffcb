//! Command-line arguments

use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "streams-addons")]
#[command(about = "Discover and register addons for a Streams application")]
#[command(version, long_version = crate::long_version())]
#[command(after_help = " * can be specified multiple times or as a comma-separated list")]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Application base directory
    #[arg(short = 'b', long = "base-path", value_name = "DIR")]
    pub base_path: Option<PathBuf>,

    /// Active application reference (selects addons/<REF>/)
    #[arg(short = 'a', long = "application", value_name = "REF")]
    pub application: Option<String>,

    /// Core addon root override
    #[arg(long = "core-path", value_name = "DIR")]
    pub core_path: Option<PathBuf>,

    /// Shared addon root override
    #[arg(long = "shared-path", value_name = "DIR")]
    pub shared_path: Option<PathBuf>,

    /// Application addon root override
    #[arg(long = "application-path", value_name = "DIR")]
    pub application_path: Option<PathBuf>,

    /// Addon providers to run, e.g. FieldTypeServiceProvider*
    #[arg(short = 'p', long = "provider", value_name = "NAMES", action = ArgAction::Append)]
    pub providers: Vec<String>,

    /// Container binding mode for addons
    #[arg(long = "binding", value_name = "MODE", value_parser = ["singleton", "transient"])]
    pub binding: Option<String>,

    /// Addon slugs to skip (glob patterns)*
    #[arg(short = 'x', long = "exclude", value_name = "PATTERNS", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Namespace root for addon classes
    #[arg(long = "namespace-root", value_name = "NAMESPACE")]
    pub namespace_root: Option<String>,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Force colored output
    #[arg(short = 'g', long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Print the registration result as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// List compiled-in addon classes and exit
    #[arg(long = "classes")]
    pub list_classes: bool,
}

impl Args {
    /// Verbosity offset from `-v`/`-q` counts
    pub fn verbosity(&self) -> i8 {
        (self.verbose.min(i8::MAX as u8) as i8).saturating_sub(self.quiet.min(i8::MAX as u8) as i8)
    }

    /// Whether output should be colored: explicit flags first, then TTY detection
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            std::io::stdout().is_terminal()
        }
    }

    /// Providers with comma-separated entries expanded
    pub fn provider_list(&self) -> Vec<String> {
        parse_comma_separated(&self.providers)
    }

    /// Exclude patterns with comma-separated entries expanded
    pub fn exclude_list(&self) -> Vec<String> {
        parse_comma_separated(&self.exclude)
    }
}

/// Split comma-separated values, trim them, drop empties and duplicates while
/// keeping first-seen order
pub fn parse_comma_separated(values: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for item in values.iter().flat_map(|v| v.split(',')) {
        let item = item.trim();
        if !item.is_empty() && !result.iter().any(|r| r == item) {
            result.push(item.to_string());
        }
    }
    result
}
