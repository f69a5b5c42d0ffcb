//! Tests for registration output

use crate::addon::api::{AddonSettings, Application};
use crate::app::cli::display::*;
use std::path::Path;
use tempfile::TempDir;

fn bootstrapped(base: &Path) -> Application {
    for (folder, slug) in [("field-types", "text"), ("blocks", "html")] {
        std::fs::create_dir_all(base.join("core").join(folder).join(slug).join("src")).unwrap();
    }
    let mut app = Application::new(AddonSettings::with_base_path(base)).unwrap();
    app.bootstrap().unwrap();
    app
}

#[test]
fn test_table_lists_bound_addons() {
    let base = TempDir::new().unwrap();
    let app = bootstrapped(base.path());

    let table = render_addon_table(&app, false);

    assert!(table.contains("Key"));
    assert!(table.contains("streams.block.html"));
    assert!(table.contains("streams.field-type.text"));
    assert!(table.contains("Anomaly\\Streams\\Addon\\Block\\Html\\HtmlBlock"));
    assert!(table.contains("core"));
    assert!(table.find("streams.block.html") < table.find("streams.field-type.text"));
}

#[test]
fn test_table_without_addons() {
    let base = TempDir::new().unwrap();
    let mut app = Application::new(AddonSettings::with_base_path(base.path())).unwrap();
    app.bootstrap().unwrap();

    assert_eq!(render_addon_table(&app, true), "No addons registered.\n");
}

#[test]
fn test_summaries_one_line_per_provider() {
    let base = TempDir::new().unwrap();
    let app = bootstrapped(base.path());

    let text = render_summaries(app.summaries());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "FieldTypeServiceProvider: 1 field-type registered from 'field-types'",
            "BlockServiceProvider: 1 block registered from 'blocks'",
        ]
    );
}

#[test]
fn test_json_report() {
    let base = TempDir::new().unwrap();
    let app = bootstrapped(base.path());

    let json: serde_json::Value = serde_json::from_str(&render_json(&app).unwrap()).unwrap();

    assert_eq!(json["providers"][0]["category_type"], "field-type");
    assert_eq!(json["providers"][1]["registered"][0], "streams.block.html");
    let addons = json["addons"].as_array().unwrap();
    assert_eq!(addons.len(), 2);
    assert_eq!(addons[0]["slug"], "html");
    assert_eq!(addons[0]["tier"], "core");
    assert_eq!(addons[0]["abstract_key"], "streams.block.html");
    assert_eq!(
        addons[1]["class_identity"],
        "Anomaly\\Streams\\Addon\\FieldType\\Text\\TextFieldType"
    );
}

#[test]
fn test_classes_listing_is_sorted() {
    let app = Application::new(AddonSettings::with_base_path("/site")).unwrap();
    let listing = render_classes(&app);
    let lines: Vec<&str> = listing.lines().collect();

    assert!(lines.contains(&"Anomaly\\Streams\\Addon\\Block\\Html\\HtmlBlock"));
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}
