//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "calcgen",
    bin_name = "calcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9ee} Declarative Python calculator generator",
    long_about = "Calcgen turns a declarative description of a calculator \
                  into a ready-to-run Python script plus its dependency \
                  manifest.",
    after_help = "EXAMPLES:\n\
        \x20 calcgen generate --kind basic\n\
        \x20 calcgen generate --kind scientific --output sci_calc.py\n\
        \x20 calcgen generate --features trig,log,stats --memory\n\
        \x20 calcgen wizard\n\
        \x20 calcgen completions bash > /usr/share/bash-completion/completions/calcgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a calculator from flags.
    #[command(
        visible_alias = "gen",
        about = "Generate a calculator script",
        after_help = "EXAMPLES:\n\
            \x20 calcgen generate --kind basic\n\
            \x20 calcgen generate --kind scientific --theme dark --style gui\n\
            \x20 calcgen generate --features trigonometric,logarithmic --precision 6\n\
            \x20 calcgen generate --libraries numpy,sympy --features plotting --dry-run"
    )]
    Generate(GenerateArgs),

    /// Build the calculator description through interactive prompts.
    #[command(
        visible_alias = "interactive",
        about = "Answer prompts instead of passing flags"
    )]
    Wizard,

    /// List what can be generated.
    #[command(
        visible_alias = "ls",
        about = "List features, libraries, or calculator kinds",
        after_help = "EXAMPLES:\n\
            \x20 calcgen list features\n\
            \x20 calcgen list libraries --format json\n\
            \x20 calcgen list kinds"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 calcgen completions bash > ~/.local/share/bash-completion/completions/calcgen\n\
            \x20 calcgen completions zsh  > ~/.zfunc/_calcgen\n\
            \x20 calcgen completions fish > ~/.config/fish/completions/calcgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the calcgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 calcgen config show\n\
            \x20 calcgen config path\n\
            \x20 calcgen config init"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `calcgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Calculator kind to start from.
    #[arg(
        short = 't',
        long = "kind",
        alias = "type",
        value_name = "KIND",
        value_enum,
        help = "Calculator kind (basic, scientific)"
    )]
    pub kind: Option<KindArg>,

    /// Project name written into the script header.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Project description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Author recorded in the script header.
    #[arg(short = 'a', long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    /// Output file path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file path"
    )]
    pub output: Option<PathBuf>,

    /// Features to enable on top of the preset.
    #[arg(
        long = "features",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated features (e.g. trig,log,stats)"
    )]
    pub features: Vec<String>,

    /// Libraries to include on top of the preset.
    #[arg(
        long = "libraries",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated libraries (numpy,pandas,scipy,sympy,plotly)"
    )]
    pub libraries: Vec<String>,

    /// Shorthand for `--features memory`.
    #[arg(long = "memory", help = "Include memory functionality")]
    pub memory: bool,

    /// Shorthand for `--features history`.
    #[arg(long = "history", help = "Include calculation history")]
    pub history: bool,

    /// Drop the bundled math library from the selection.
    #[arg(long = "no-math", help = "Exclude the math library")]
    pub no_math: bool,

    /// Generate a calculator without the read-eval loop.
    #[arg(long = "no-interactive", help = "Skip the interactive loop")]
    pub no_interactive: bool,

    /// UI style.
    #[arg(long = "style", value_enum, value_name = "STYLE", help = "UI style (cli, gui)")]
    pub style: Option<StyleArg>,

    /// UI theme.
    #[arg(
        long = "theme",
        value_enum,
        value_name = "THEME",
        help = "UI theme (light, dark, colorful)"
    )]
    pub theme: Option<ThemeArg>,

    /// Decimal precision of displayed results.
    ///
    /// Validated by the domain layer, not clap, so the error message can
    /// name the accepted range.
    #[arg(long = "precision", value_name = "N", help = "Decimal precision (1-20)")]
    pub precision: Option<u8>,

    /// Angle unit for trigonometric functions.
    #[arg(
        long = "angle-unit",
        value_enum,
        value_name = "UNIT",
        help = "Angle unit (degrees, radians)"
    )]
    pub angle_unit: Option<AngleUnitArg>,

    /// Skip the startup banner in the generated program.
    #[arg(long = "no-banner", help = "Skip the startup banner")]
    pub no_banner: bool,

    /// Skip the help command in the generated program.
    #[arg(long = "no-help-text", help = "Skip the help command")]
    pub no_help_text: bool,

    /// Compose only; print a summary and write nothing.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `calcgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list.
    #[arg(value_enum, default_value = "features", help = "Registry to list")]
    pub topic: ListTopic,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Registries the `list` command can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTopic {
    /// Calculator features and the libraries they entail.
    Features,
    /// Libraries and their manifest pins.
    Libraries,
    /// Calculator kinds (presets).
    Kinds,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `calcgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `calcgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration.
    Show,
    /// Print the path to the active configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Calculator kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    Basic,
    /// Also accepted as `sci`.
    #[value(alias = "sci")]
    Scientific,
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Scientific => write!(f, "scientific"),
        }
    }
}

/// UI styles accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    Cli,
    Gui,
}

impl std::fmt::Display for StyleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::Gui => write!(f, "gui"),
        }
    }
}

/// Themes accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ThemeArg {
    Light,
    Dark,
    Colorful,
}

impl std::fmt::Display for ThemeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::Colorful => write!(f, "colorful"),
        }
    }
}

/// Angle units accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AngleUnitArg {
    /// Also accepted as `deg`.
    #[value(alias = "deg")]
    Degrees,
    /// Also accepted as `rad`.
    #[value(alias = "rad")]
    Radians,
}

impl std::fmt::Display for AngleUnitArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees => write!(f, "degrees"),
            Self::Radians => write!(f, "radians"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn kind_display() {
        assert_eq!(KindArg::Basic.to_string(), "basic");
        assert_eq!(KindArg::Scientific.to_string(), "scientific");
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "calcgen",
            "generate",
            "--kind",
            "scientific",
            "--theme",
            "dark",
            "--precision",
            "6",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.kind, Some(KindArg::Scientific));
        assert_eq!(args.theme, Some(ThemeArg::Dark));
        assert_eq!(args.precision, Some(6));
    }

    #[test]
    fn type_alias_still_works() {
        let cli = Cli::parse_from(["calcgen", "generate", "--type", "sci"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.kind, Some(KindArg::Scientific));
    }

    #[test]
    fn feature_lists_split_on_commas() {
        let cli = Cli::parse_from([
            "calcgen",
            "generate",
            "--features",
            "trig,log,stats",
            "--libraries",
            "numpy,sympy",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.features, vec!["trig", "log", "stats"]);
        assert_eq!(args.libraries, vec!["numpy", "sympy"]);
    }

    #[test]
    fn angle_unit_accepts_short_form() {
        let cli = Cli::parse_from(["calcgen", "generate", "--angle-unit", "rad"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.angle_unit, Some(AngleUnitArg::Radians));
    }

    #[test]
    fn list_defaults_to_features_table() {
        let cli = Cli::parse_from(["calcgen", "list"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.topic, ListTopic::Features);
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["calcgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
