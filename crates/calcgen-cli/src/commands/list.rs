//! Implementation of the `calcgen list` command.
//!
//! Prints the feature, library, and kind registries so users can discover
//! valid names without reading source. The data comes straight from the
//! domain registries; nothing here is hand-maintained.

use calcgen_core::domain::{CalculatorKind, Feature, Library, manifest};

use crate::{
    cli::{ListArgs, ListFormat, ListTopic, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match (args.topic, args.format) {
        (ListTopic::Features, ListFormat::Table) => features_table(&output),
        (ListTopic::Libraries, ListFormat::Table) => libraries_table(&output),
        (ListTopic::Kinds, ListFormat::Table) => kinds_table(&output),
        // Serialise to stdout directly (bypasses OutputManager because JSON
        // output must stay parseable even in non-TTY pipes).
        (ListTopic::Features, ListFormat::Json) => print_json(&features_json()),
        (ListTopic::Libraries, ListFormat::Json) => print_json(&libraries_json()),
        (ListTopic::Kinds, ListFormat::Json) => print_json(&kinds_json()),
    }
}

// ── table rendering ───────────────────────────────────────────────────────────

fn features_table(output: &OutputManager) -> CliResult<()> {
    output.header("Available features:")?;
    for feature in Feature::ALL {
        let mut line = format!("  {:<18} {}", feature.as_str(), feature.summary());

        let aliases = feature.aliases();
        if !aliases.is_empty() {
            line.push_str(&format!(" (alias: {})", aliases.join(", ")));
        }

        let implied = feature.implied_libraries();
        if !implied.is_empty() {
            let names: Vec<&str> = implied.iter().map(|l| l.as_str()).collect();
            line.push_str(&format!(" [{}]", names.join(", ")));
        }

        output.print(&line)?;
    }
    Ok(())
}

fn libraries_table(output: &OutputManager) -> CliResult<()> {
    output.header("Available libraries:")?;
    for library in Library::ALL {
        let requirement = pin_requirement(*library).unwrap_or("bundled with Python");
        output.print(&format!(
            "  {:<8} {:<44} {requirement}",
            library.as_str(),
            library.summary(),
        ))?;
    }
    Ok(())
}

fn kinds_table(output: &OutputManager) -> CliResult<()> {
    output.header("Available kinds:")?;
    for kind in CalculatorKind::ALL {
        output.print(&format!("  {:<12} {}", kind.as_str(), kind.summary()))?;
    }
    Ok(())
}

// ── json rendering ────────────────────────────────────────────────────────────

fn features_json() -> serde_json::Value {
    serde_json::Value::Array(
        Feature::ALL
            .iter()
            .map(|f| {
                serde_json::json!({
                    "name": f.as_str(),
                    "aliases": f.aliases(),
                    "summary": f.summary(),
                    "libraries": f
                        .implied_libraries()
                        .iter()
                        .map(|l| l.as_str())
                        .collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

fn libraries_json() -> serde_json::Value {
    serde_json::Value::Array(
        Library::ALL
            .iter()
            .map(|l| {
                serde_json::json!({
                    "name": l.as_str(),
                    "bundled": l.is_bundled(),
                    "requirement": pin_requirement(*l),
                    "summary": l.summary(),
                })
            })
            .collect(),
    )
}

fn kinds_json() -> serde_json::Value {
    serde_json::Value::Array(
        CalculatorKind::ALL
            .iter()
            .map(|k| {
                serde_json::json!({
                    "name": k.as_str(),
                    "summary": k.summary(),
                })
            })
            .collect(),
    )
}

fn print_json(value: &serde_json::Value) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".into());
    println!("{text}");
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The manifest requirement line for a library, or `None` when it ships with
/// Python.
fn pin_requirement(library: Library) -> Option<&'static str> {
    manifest::PINS
        .iter()
        .find(|pin| pin.library == library)
        .map(|pin| pin.requirement)
}

// ── tests ─────────────────────────────────────────────────────────────────────
