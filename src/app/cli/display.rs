//! CLI display utilities for formatting registration results

use crate::addon::api::{AddonDescriptor, Application, RegistrationSummary, Tier};
use colored::Colorize;
use prettytable::{format, row, Table};
use serde::Serialize;

const NO_ADDONS: &str = "No addons registered.";

/// Tier label, colored by precedence when requested
fn tier_label(tier: Tier, use_color: bool) -> String {
    let label = tier.to_string();
    if !use_color {
        return label;
    }
    match tier {
        Tier::Core => label.blue().to_string(),
        Tier::Shared => label.cyan().to_string(),
        Tier::Application => label.green().to_string(),
    }
}

/// Table of currently bound addons, one row per abstract key
pub fn render_addon_table(app: &Application, use_color: bool) -> String {
    let addons: Vec<&AddonDescriptor> = app.addons().collect();
    if addons.is_empty() {
        return format!("{}\n", NO_ADDONS);
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["Key", "Type", "Slug", "Tier", "Class"]);

    for addon in addons {
        table.add_row(row![
            addon.abstract_key,
            addon.category_type(),
            addon.slug(),
            tier_label(addon.tier(), use_color),
            addon.identity.class_identity,
        ]);
    }

    table.to_string()
}

/// One line per provider: category, folder and count
pub fn render_summaries(summaries: &[RegistrationSummary]) -> String {
    summaries
        .iter()
        .map(|s| {
            let mut line = format!(
                "{}: {} {} registered from '{}'",
                s.provider,
                s.registered.len(),
                s.category_type,
                s.folder
            );
            if s.listener_failures > 0 {
                line.push_str(&format!(" ({} listener failures)", s.listener_failures));
            }
            line.push('\n');
            line
        })
        .collect()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    providers: &'a [RegistrationSummary],
    addons: Vec<&'a AddonDescriptor>,
}

/// Summaries and bound addons as pretty-printed JSON
pub fn render_json(app: &Application) -> serde_json::Result<String> {
    let report = JsonReport {
        providers: app.summaries(),
        addons: app.addons().collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Compiled-in and registered addon classes, sorted
pub fn render_classes(app: &Application) -> String {
    let classes = app.classes().classes();
    if classes.is_empty() {
        return "No addon classes available.\n".to_string();
    }
    classes.iter().map(|c| format!("{}\n", c)).collect()
}
