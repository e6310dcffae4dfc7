//! Implementation of the `calcgen wizard` command.
//!
//! A guided prompt sequence that assembles a `Blueprint` step by step and
//! ends in the same generation path as `calcgen generate`.  Compiled only
//! with the `interactive` cargo feature; builds without it get an error
//! explaining how to enable it.

#[cfg(not(feature = "interactive"))]
use crate::error::CliError;
use crate::{
    cli::global::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

#[cfg(feature = "interactive")]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    prompts::run(global, config, output)
}

#[cfg(not(feature = "interactive"))]
pub fn execute(_global: GlobalArgs, _config: AppConfig, _output: OutputManager) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
mod prompts {
    use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
    use tracing::{info, instrument};

    use calcgen_adapters::{LocalFilesystem, default_strategies};
    use calcgen_core::{
        VERSION,
        application::ComposeService,
        domain::{
            AngleUnit, Blueprint, CalculatorKind, Feature, GenerationMeta, Library, Theme, UiStyle,
        },
    };

    use crate::{
        cli::global::GlobalArgs,
        config::AppConfig,
        error::{CliError, CliResult},
        output::OutputManager,
    };

    /// Features the wizard offers as checkboxes.  The rest of the registry
    /// stays reachable through `generate --features`.
    const PROMPTED_FEATURES: &[Feature] = &[
        Feature::Memory,
        Feature::History,
        Feature::Trigonometric,
        Feature::Logarithmic,
        Feature::Statistical,
        Feature::LinearAlgebra,
        Feature::Plotting,
        Feature::EquationSolver,
        Feature::ComplexNumbers,
        Feature::UnitConversion,
    ];

    /// Libraries worth asking about; `math` ships with Python and is managed
    /// by the presets.
    const THIRD_PARTY: &[Library] = &[
        Library::Numpy,
        Library::Pandas,
        Library::Scipy,
        Library::Sympy,
        Library::Plotly,
    ];

    #[instrument(skip_all)]
    pub fn run(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
        let theme = ColorfulTheme::default();

        output.header("\u{1f9ee} Calculator generator wizard")?;
        output.print("Answer a few questions; defaults are shown in brackets.")?;
        output.print("")?;

        // 1. Kind first: it decides every later default.
        let kind = ask_kind(&theme)?;
        let mut blueprint = Blueprint::preset(kind);

        // 2. Project information
        blueprint = ask_project_info(&theme, blueprint, &config)?;

        // 3. Feature checkboxes (checked state replaces the preset's picks)
        blueprint = ask_features(&theme, blueprint)?;

        // 4. Library extras
        blueprint = ask_libraries(&theme, blueprint)?;

        // 5. UI options
        blueprint = ask_ui(&theme, blueprint)?;

        // 6. Output path
        blueprint = ask_output_path(&theme, blueprint)?;

        // 7. Summary and confirmation
        show_summary(&blueprint, &output)?;
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt("Generate with this configuration?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;
        if !confirmed {
            return Err(CliError::Cancelled);
        }

        // 8. Generate — identical path to `calcgen generate`
        let meta = GenerationMeta::new(VERSION, crate::commands::generate::timestamp());
        let service = ComposeService::new(default_strategies(), Box::new(LocalFilesystem::new()));

        info!(script = %blueprint.output_path().display(), "Wizard generation started");
        let artifact = service.generate(blueprint, &meta).map_err(CliError::Core)?;

        output.print("")?;
        output.success(&format!(
            "Calculator written to {}",
            artifact.script.path.display(),
        ))?;
        if let Some(manifest) = &artifact.manifest {
            output.print(&format!("  Dependencies: {}", manifest.path.display()))?;
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

    // ── prompt steps ──────────────────────────────────────────────────────

    fn ask_kind(theme: &ColorfulTheme) -> CliResult<CalculatorKind> {
        let labels: Vec<String> = CalculatorKind::ALL
            .iter()
            .map(|kind| format!("{} ({})", kind.as_str(), kind.summary()))
            .collect();

        let index = Select::with_theme(theme)
            .with_prompt("Calculator kind")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        Ok(CalculatorKind::ALL[index])
    }

    fn ask_project_info(
        theme: &ColorfulTheme,
        blueprint: Blueprint,
        config: &AppConfig,
    ) -> CliResult<Blueprint> {
        let name: String = Input::with_theme(theme)
            .with_prompt("Project name")
            .default(blueprint.project_name().to_owned())
            .interact_text()
            .map_err(prompt_err)?;

        let author_default = config
            .defaults
            .author
            .clone()
            .unwrap_or_else(|| blueprint.author().to_owned());
        let author: String = Input::with_theme(theme)
            .with_prompt("Author")
            .default(author_default)
            .interact_text()
            .map_err(prompt_err)?;

        let description: String = Input::with_theme(theme)
            .with_prompt("Description")
            .default(blueprint.description().to_owned())
            .interact_text()
            .map_err(prompt_err)?;

        Ok(blueprint
            .with_project_name(name)
            .with_author(author)
            .with_description(description))
    }

    fn ask_features(theme: &ColorfulTheme, mut blueprint: Blueprint) -> CliResult<Blueprint> {
        let labels: Vec<String> = PROMPTED_FEATURES
            .iter()
            .map(|f| format!("{:<18} {}", f.as_str(), f.summary()))
            .collect();
        let checked: Vec<bool> = PROMPTED_FEATURES
            .iter()
            .map(|f| blueprint.features().contains(*f))
            .collect();

        let picked = MultiSelect::with_theme(theme)
            .with_prompt("Features (space toggles, enter accepts)")
            .items(&labels)
            .defaults(&checked)
            .interact()
            .map_err(prompt_err)?;

        for (index, feature) in PROMPTED_FEATURES.iter().enumerate() {
            blueprint = if picked.contains(&index) {
                blueprint.with_feature(*feature)
            } else {
                blueprint.without_feature(*feature)
            };
        }
        Ok(blueprint)
    }

    fn ask_libraries(theme: &ColorfulTheme, mut blueprint: Blueprint) -> CliResult<Blueprint> {
        let labels: Vec<String> = THIRD_PARTY
            .iter()
            .map(|l| format!("{:<8} {}", l.as_str(), l.summary()))
            .collect();
        let checked: Vec<bool> = THIRD_PARTY
            .iter()
            .map(|l| blueprint.libraries().contains(*l))
            .collect();

        let picked = MultiSelect::with_theme(theme)
            .with_prompt("Libraries (feature-entailed ones are added automatically)")
            .items(&labels)
            .defaults(&checked)
            .interact()
            .map_err(prompt_err)?;

        for (index, library) in THIRD_PARTY.iter().enumerate() {
            blueprint = if picked.contains(&index) {
                blueprint.with_library(*library)
            } else {
                blueprint.without_library(*library)
            };
        }
        Ok(blueprint)
    }

    fn ask_ui(theme: &ColorfulTheme, mut blueprint: Blueprint) -> CliResult<Blueprint> {
        let style_labels = [
            "cli (text read-eval loop)",
            "gui (tkinter desktop window)",
        ];
        let style_index = Select::with_theme(theme)
            .with_prompt("Interface style")
            .items(&style_labels)
            .default(match blueprint.ui().style {
                UiStyle::Cli => 0,
                UiStyle::Gui => 1,
            })
            .interact()
            .map_err(prompt_err)?;
        let style = UiStyle::ALL[style_index];
        blueprint = blueprint.with_style(style);

        if style == UiStyle::Gui {
            let theme_labels: Vec<&str> = Theme::ALL.iter().map(|t| t.as_str()).collect();
            let theme_index = Select::with_theme(theme)
                .with_prompt("Window theme")
                .items(&theme_labels)
                .default(0)
                .interact()
                .map_err(prompt_err)?;
            blueprint = blueprint.with_theme(Theme::ALL[theme_index]);
        } else {
            let interactive = Confirm::with_theme(theme)
                .with_prompt("Include the interactive read-eval loop?")
                .default(blueprint.interactive())
                .interact()
                .map_err(prompt_err)?;
            blueprint = blueprint.with_interactive(interactive);
        }

        let precision: u8 = Input::with_theme(theme)
            .with_prompt("Decimal precision (1-20)")
            .default(blueprint.ui().precision)
            .validate_with(|value: &u8| {
                if (1..=20).contains(value) {
                    Ok(())
                } else {
                    Err("precision must be between 1 and 20")
                }
            })
            .interact_text()
            .map_err(prompt_err)?;
        blueprint = blueprint.with_precision(precision);

        let unit_labels: Vec<&str> = AngleUnit::ALL.iter().map(|u| u.as_str()).collect();
        let unit_index = Select::with_theme(theme)
            .with_prompt("Angle unit")
            .items(&unit_labels)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        blueprint = blueprint.with_angle_unit(AngleUnit::ALL[unit_index]);

        let banner = Confirm::with_theme(theme)
            .with_prompt("Show the startup banner?")
            .default(blueprint.ui().show_banner)
            .interact()
            .map_err(prompt_err)?;
        blueprint = blueprint.with_banner(banner);

        let help = Confirm::with_theme(theme)
            .with_prompt("Include the help command?")
            .default(blueprint.ui().show_help)
            .interact()
            .map_err(prompt_err)?;
        Ok(blueprint.with_help_text(help))
    }

    fn ask_output_path(theme: &ColorfulTheme, blueprint: Blueprint) -> CliResult<Blueprint> {
        let path: String = Input::with_theme(theme)
            .with_prompt("Output file")
            .default(blueprint.output_path().display().to_string())
            .interact_text()
            .map_err(prompt_err)?;
        Ok(blueprint.with_output_path(path))
    }

    // ── display helpers ───────────────────────────────────────────────────

    fn show_summary(blueprint: &Blueprint, output: &OutputManager) -> CliResult<()> {
        output.print("")?;
        output.header("Configuration")?;
        output.print(&format!("  Project:    {}", blueprint.project_name()))?;
        output.print(&format!("  Author:     {}", blueprint.author()))?;
        output.print(&format!("  Kind:       {}", blueprint.kind()))?;
        output.print(&format!("  Style:      {}", blueprint.ui().style))?;
        output.print(&format!("  Output:     {}", blueprint.output_path().display()))?;
        output.print(&format!("  Precision:  {}", blueprint.ui().precision))?;
        output.print(&format!("  Angle unit: {}", blueprint.ui().angle_unit))?;
        output.print(&format!("  Features:   {}", join(blueprint.features().iter())))?;
        output.print(&format!("  Libraries:  {}", join(blueprint.libraries().iter())))?;
        output.print("")?;
        Ok(())
    }

    fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
        let names: Vec<String> = items.map(|item| item.to_string()).collect();
        if names.is_empty() {
            "none".into()
        } else {
            names.join(", ")
        }
    }

    fn prompt_err(err: dialoguer::Error) -> CliError {
        CliError::PromptFailed {
            message: err.to_string(),
        }
    }

    // ── tests ─────────────────────────────────────────────────────────────

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn prompted_features_are_a_valid_subset() {
            for feature in PROMPTED_FEATURES {
                assert!(Feature::ALL.contains(feature));
            }
        }

        #[test]
        fn third_party_list_excludes_bundled_libraries() {
            for library in THIRD_PARTY {
                assert!(!library.is_bundled());
            }
            // math + the prompted five cover the whole registry
            assert_eq!(THIRD_PARTY.len() + 1, Library::ALL.len());
        }

        #[test]
        fn join_falls_back_to_none() {
            let empty: Vec<Library> = vec![];
            assert_eq!(join(empty.into_iter()), "none");
            assert_eq!(
                join([Library::Numpy, Library::Sympy].into_iter()),
                "numpy, sympy"
            );
        }
    }
}
