//! Process entry: arguments, configuration, logging, bootstrap, output

use crate::addon::api::Application;
use crate::app::cli::args::Args;
use crate::app::cli::config::{load_config, resolve_settings, FileConfig};
use crate::app::cli::display::{render_addon_table, render_classes, render_json, render_summaries};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{init_logging, set_log_level, verbosity_to_level};
use clap::Parser;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Run the command line; returns the process exit code
pub fn startup() -> i32 {
    run(Args::parse())
}

/// Run with already parsed arguments
pub fn run(args: Args) -> i32 {
    let use_color = args.use_color();

    // The file may set the log level, so read it before the logger starts
    let loaded = load_config(args.config_file.as_deref());
    let file = match &loaded {
        Ok(Some(file)) => file.clone(),
        _ => FileConfig::default(),
    };

    let log_level = args
        .log_level
        .clone()
        .or_else(|| file.logging.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_format = args
        .log_format
        .clone()
        .or_else(|| file.logging.format.clone());
    let log_file = args
        .log_file
        .clone()
        .or_else(|| file.logging.file.clone())
        .map(|p| p.to_string_lossy().into_owned());

    if let Err(e) = init_logging(
        Some(&log_level),
        log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("FATAL: could not initialise logging: {}", e);
        return 1;
    }
    if args.verbosity() != 0 {
        let level = verbosity_to_level(&log_level, args.verbosity());
        if let Err(e) = set_log_level(level) {
            log::warn!("Could not apply verbosity: {}", e);
        }
    }

    if let Err(e) = &loaded {
        log_error_with_context(e, "Loading configuration");
        return 1;
    }

    let settings = match resolve_settings(&args, &file) {
        Ok(settings) => settings,
        Err(e) => {
            log_error_with_context(&e, "Resolving configuration");
            return 1;
        }
    };
    log::debug!("Settings: {:?}", settings);

    let mut app = match Application::new(settings) {
        Ok(app) => app,
        Err(e) => {
            log_error_with_context(&e, "Preparing addon bootstrap");
            return 1;
        }
    };

    if args.list_classes {
        print!("{}", render_classes(&app));
        return 0;
    }

    if let Err(e) = app.bootstrap() {
        log_error_with_context(&e, "Registering addons");
        return 1;
    }

    if args.json {
        match render_json(&app) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("FATAL: Rendering JSON: {}", e);
                return 1;
            }
        }
    } else {
        print!("{}", render_summaries(app.summaries()));
        print!("{}", render_addon_table(&app, use_color));
    }

    0
}
