//! Implementation of the `calcgen generate` command.
//!
//! Responsibility: translate CLI arguments into a `Blueprint`, call the core
//! compose service, and display results.  No business logic lives here.

use tracing::{debug, info, instrument};

use calcgen_adapters::{LocalFilesystem, default_strategies};
use calcgen_core::{
    VERSION,
    application::ComposeService,
    domain::{
        AngleUnit, Artifact, Blueprint, CalculatorKind, Feature, GenerationMeta, Library, Theme,
        UiStyle,
    },
};

use crate::{
    cli::{AngleUnitArg, GenerateArgs, KindArg, StyleArg, ThemeArg, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `calcgen generate` command.
///
/// Dispatch sequence:
/// 1. Merge flags and config into a `Blueprint` (flag > config > preset)
/// 2. Early-exit if `--dry-run` (compose without writing)
/// 3. Execute generation via `ComposeService`
/// 4. Print output paths and run instructions
#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build the blueprint (merging + validation)
    let blueprint = build_blueprint(&args, &config)?;

    debug!(
        kind = %blueprint.kind(),
        features = blueprint.features().len(),
        libraries = blueprint.libraries().len(),
        style = %blueprint.ui().style,
        "Blueprint assembled"
    );

    let meta = GenerationMeta::new(VERSION, timestamp());
    let service = ComposeService::new(default_strategies(), Box::new(LocalFilesystem::new()));

    // 2. Dry run: compose in memory, describe, write nothing.
    if args.dry_run {
        let artifact = service.compose(blueprint, &meta).map_err(CliError::Core)?;
        return show_dry_run(&artifact, &output);
    }

    // 3. Compose and write to disk
    output.header(&format!("Generating '{}'...", blueprint.project_name()))?;
    info!(script = %blueprint.output_path().display(), "Generation started");

    let artifact = service.generate(blueprint, &meta).map_err(CliError::Core)?;

    info!(script = %artifact.script.path.display(), "Generation completed");

    // 4. Success + run instructions
    output.success(&format!(
        "Calculator written to {}",
        artifact.script.path.display(),
    ))?;
    match &artifact.manifest {
        Some(manifest) => {
            output.print(&format!("  Dependencies: {}", manifest.path.display()))?;
        }
        None => output.detail("no third-party dependencies required")?,
    }

    if !global.quiet {
        output.print("")?;
        output.print("Run it:")?;
        if let Some(manifest) = &artifact.manifest {
            output.print(&format!("  pip install -r {}", manifest.path.display()))?;
        }
        output.print(&format!("  python3 {}", artifact.script.path.display()))?;
    }

    Ok(())
}

/// Local wall-clock time in the header's `YYYY-MM-DD HH:MM:SS` format.
///
/// Sampled exactly once per invocation so the script header and any future
/// sibling outputs agree on the instant.
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

// ── Blueprint construction ────────────────────────────────────────────────────

/// Merge CLI flags over config defaults over the kind preset.
fn build_blueprint(args: &GenerateArgs, config: &AppConfig) -> CliResult<Blueprint> {
    let kind = resolve_kind(args.kind, config)?;
    let mut blueprint = Blueprint::preset(kind);

    if let Some(name) = &args.name {
        blueprint = blueprint.with_project_name(name.as_str());
    }
    if let Some(description) = &args.description {
        blueprint = blueprint.with_description(description.as_str());
    }
    if let Some(author) = args.author.as_ref().or(config.defaults.author.as_ref()) {
        blueprint = blueprint.with_author(author.as_str());
    }
    if let Some(output) = args.output.as_ref().or(config.defaults.output.as_ref()) {
        blueprint = blueprint.with_output_path(output.clone());
    }

    blueprint = blueprint
        .with_features(parse_features(&args.features)?)
        .with_libraries(parse_libraries(&args.libraries)?);

    if args.memory {
        blueprint = blueprint.with_feature(Feature::Memory);
    }
    if args.history {
        blueprint = blueprint.with_feature(Feature::History);
    }
    if args.no_math {
        blueprint = blueprint.without_library(Library::Math);
    }
    if args.no_interactive {
        blueprint = blueprint.with_interactive(false);
    }

    if let Some(style) = args.style {
        blueprint = blueprint.with_style(convert_style(style));
    }
    if let Some(theme) = args.theme {
        blueprint = blueprint.with_theme(convert_theme(theme));
    }
    if let Some(precision) = args.precision {
        blueprint = blueprint.with_precision(precision);
    }
    if let Some(unit) = args.angle_unit {
        blueprint = blueprint.with_angle_unit(convert_angle_unit(unit));
    }
    if args.no_banner {
        blueprint = blueprint.with_banner(false);
    }
    if args.no_help_text {
        blueprint = blueprint.with_help_text(false);
    }

    Ok(blueprint)
}

/// Kind resolution: `--kind` flag, then `defaults.kind` from config, then
/// basic.  A bad config value is a configuration error, not a user error —
/// the user may never have touched the file.
fn resolve_kind(flag: Option<KindArg>, config: &AppConfig) -> CliResult<CalculatorKind> {
    if let Some(kind) = flag {
        return Ok(convert_kind(kind));
    }
    match &config.defaults.kind {
        Some(name) => name
            .parse::<CalculatorKind>()
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid defaults.kind in configuration: {e}"),
                source: Some(Box::new(e)),
            }),
        None => Ok(CalculatorKind::Basic),
    }
}

/// Parse `--features` names through the domain parser so every synonym the
/// core accepts (`trig`, `stats`, ...) works on the command line too.
fn parse_features(names: &[String]) -> CliResult<Vec<Feature>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Feature>()
                .map_err(|e| CliError::Core(e.into()))
        })
        .collect()
}

fn parse_libraries(names: &[String]) -> CliResult<Vec<Library>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Library>()
                .map_err(|e| CliError::Core(e.into()))
        })
        .collect()
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_kind(kind: KindArg) -> CalculatorKind {
    match kind {
        KindArg::Basic => CalculatorKind::Basic,
        KindArg::Scientific => CalculatorKind::Scientific,
    }
}

fn convert_style(style: StyleArg) -> UiStyle {
    match style {
        StyleArg::Cli => UiStyle::Cli,
        StyleArg::Gui => UiStyle::Gui,
    }
}

fn convert_theme(theme: ThemeArg) -> Theme {
    match theme {
        ThemeArg::Light => Theme::Light,
        ThemeArg::Dark => Theme::Dark,
        ThemeArg::Colorful => Theme::Colorful,
    }
}

fn convert_angle_unit(unit: AngleUnitArg) -> AngleUnit {
    match unit {
        AngleUnitArg::Degrees => AngleUnit::Degrees,
        AngleUnitArg::Radians => AngleUnit::Radians,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_dry_run(artifact: &Artifact, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would write {} ({} lines)",
        artifact.script.path.display(),
        artifact.script.content.lines().count(),
    ))?;
    match &artifact.manifest {
        Some(manifest) => output.info(&format!(
            "Dry run: would write {} ({} entries)",
            manifest.path.display(),
            manifest.content.lines().count(),
        ))?,
        None => output.info("Dry run: no dependency manifest needed")?,
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> GenerateArgs {
        GenerateArgs {
            kind: None,
            name: None,
            description: None,
            author: None,
            output: None,
            features: vec![],
            libraries: vec![],
            memory: false,
            history: false,
            no_math: false,
            no_interactive: false,
            style: None,
            theme: None,
            precision: None,
            angle_unit: None,
            no_banner: false,
            no_help_text: false,
            dry_run: false,
        }
    }

    // ── merge precedence ──────────────────────────────────────────────────

    #[test]
    fn bare_invocation_is_the_basic_preset() {
        let blueprint = build_blueprint(&bare_args(), &AppConfig::default()).unwrap();
        assert_eq!(blueprint.kind(), CalculatorKind::Basic);
        assert_eq!(blueprint.project_name(), "Python Calculator");
        assert_eq!(blueprint.output_path(), std::path::Path::new("calculator.py"));
    }

    #[test]
    fn flag_beats_config_default_for_author() {
        let mut args = bare_args();
        args.author = Some("Flag Author".into());
        let mut config = AppConfig::default();
        config.defaults.author = Some("Config Author".into());

        let blueprint = build_blueprint(&args, &config).unwrap();
        assert_eq!(blueprint.author(), "Flag Author");
    }

    #[test]
    fn config_author_applies_when_flag_absent() {
        let mut config = AppConfig::default();
        config.defaults.author = Some("Config Author".into());

        let blueprint = build_blueprint(&bare_args(), &config).unwrap();
        assert_eq!(blueprint.author(), "Config Author");
    }

    #[test]
    fn config_kind_selects_the_scientific_preset() {
        let mut config = AppConfig::default();
        config.defaults.kind = Some("scientific".into());

        let blueprint = build_blueprint(&bare_args(), &config).unwrap();
        assert_eq!(blueprint.kind(), CalculatorKind::Scientific);
        assert!(blueprint.features().contains(Feature::Trigonometric));
    }

    #[test]
    fn bad_config_kind_is_a_configuration_error() {
        let mut config = AppConfig::default();
        config.defaults.kind = Some("quantum".into());

        let err = build_blueprint(&bare_args(), &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    // ── selections ────────────────────────────────────────────────────────

    #[test]
    fn feature_synonyms_parse_on_the_command_line() {
        let mut args = bare_args();
        args.features = vec!["trig".into(), "stats".into()];

        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert!(blueprint.features().contains(Feature::Trigonometric));
        assert!(blueprint.features().contains(Feature::Statistical));
    }

    #[test]
    fn unknown_feature_is_a_user_error() {
        let mut args = bare_args();
        args.features = vec!["quantum".into()];

        let err = build_blueprint(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("quantum"));
    }

    #[test]
    fn memory_and_history_shorthands_add_features() {
        let mut args = bare_args();
        args.memory = true;
        args.history = true;

        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert!(blueprint.features().contains(Feature::Memory));
        assert!(blueprint.features().contains(Feature::History));
    }

    #[test]
    fn no_math_drops_the_bundled_library() {
        let mut args = bare_args();
        args.no_math = true;

        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert!(!blueprint.libraries().contains(Library::Math));
    }

    // ── ui options ────────────────────────────────────────────────────────

    #[test]
    fn ui_flags_reach_the_blueprint() {
        let mut args = bare_args();
        args.style = Some(StyleArg::Gui);
        args.theme = Some(ThemeArg::Dark);
        args.precision = Some(4);
        args.angle_unit = Some(AngleUnitArg::Radians);
        args.no_banner = true;

        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        let ui = blueprint.ui();
        assert_eq!(ui.style, UiStyle::Gui);
        assert_eq!(ui.theme, Theme::Dark);
        assert_eq!(ui.precision, 4);
        assert_eq!(ui.angle_unit, AngleUnit::Radians);
        assert!(!ui.show_banner);
        assert!(ui.show_help);
    }

    #[test]
    fn out_of_range_precision_surfaces_through_validate() {
        let mut args = bare_args();
        args.precision = Some(0);

        // Building succeeds; the range check belongs to the domain.
        let blueprint = build_blueprint(&args, &AppConfig::default()).unwrap();
        assert!(blueprint.validate().is_err());
    }
}
