//! End-to-end composition tests: core service wired to the real catalogs,
//! renderers, and the in-memory filesystem.

use std::path::Path;

use calcgen_adapters::{MemoryFilesystem, default_strategies};
use calcgen_core::application::{ApplicationError, ComposeService, ports::Filesystem};
use calcgen_core::domain::{
    Artifact, Blueprint, Feature, GenerationMeta, Library, Theme, UiStyle,
};
use calcgen_core::error::{CalcgenResult, ErrorCategory};

fn service() -> (ComposeService, MemoryFilesystem) {
    let filesystem = MemoryFilesystem::new();
    let service = ComposeService::new(default_strategies(), Box::new(filesystem.clone()));
    (service, filesystem)
}

fn meta() -> GenerationMeta {
    GenerationMeta::new("1.2.0", "2024-03-01 12:00:00")
}

fn compose(blueprint: Blueprint) -> Artifact {
    let (service, _) = service();
    service.compose(blueprint, &meta()).unwrap()
}

// ── Purity and determinism ───────────────────────────────────────────────────

#[test]
fn same_blueprint_and_meta_compose_byte_identical_artifacts() {
    let blueprint = Blueprint::scientific()
        .with_feature(Feature::Plotting)
        .with_theme(Theme::Dark);

    let first = compose(blueprint.clone());
    let second = compose(blueprint);

    assert_eq!(first.script.content, second.script.content);
    assert_eq!(
        first.manifest.map(|m| m.content),
        second.manifest.map(|m| m.content)
    );
}

#[test]
fn selection_order_never_changes_the_output() {
    let forward = Blueprint::basic()
        .with_features([Feature::Memory, Feature::Trigonometric, Feature::Statistical])
        .with_libraries([Library::Sympy, Library::Plotly]);
    let backward = Blueprint::basic()
        .with_libraries([Library::Plotly, Library::Sympy])
        .with_features([Feature::Statistical, Feature::Trigonometric, Feature::Memory]);

    assert_eq!(
        compose(forward).script.content,
        compose(backward).script.content
    );
}

#[test]
fn pre_resolving_a_blueprint_changes_nothing() {
    let blueprint = Blueprint::basic().with_feature(Feature::DataAnalysis);
    let direct = compose(blueprint.clone());
    let re_resolved = compose(blueprint.resolve().into_inner());
    assert_eq!(direct.script.content, re_resolved.script.content);
}

// ── Entailment ───────────────────────────────────────────────────────────────

#[test]
fn entailed_libraries_reach_imports_and_manifest() {
    // Statistical entails numpy; nobody selected it explicitly.
    let artifact = compose(Blueprint::basic().with_feature(Feature::Statistical));

    assert!(artifact.script.content.contains("import numpy as np"));
    let manifest = artifact.manifest.expect("numpy is a third-party pin");
    assert!(manifest.content.contains("numpy>=1.21.0"));
}

#[test]
fn plotting_feature_is_equivalent_to_selecting_plotly() {
    let via_feature = compose(Blueprint::basic().with_feature(Feature::Plotting));
    let via_library = compose(
        Blueprint::basic()
            .with_feature(Feature::Plotting)
            .with_library(Library::Plotly),
    );

    assert_eq!(via_feature.script.content, via_library.script.content);
    assert!(
        via_feature
            .script
            .content
            .contains("import plotly.graph_objects as go")
    );
    assert!(
        via_feature
            .manifest
            .expect("plotly is a third-party pin")
            .content
            .contains("plotly>=5.0.0")
    );
}

// ── Validation ───────────────────────────────────────────────────────────────

#[test]
fn precision_is_validated_at_the_boundaries() {
    let (service, _) = service();

    for bad in [0u8, 21] {
        let err = service
            .compose(Blueprint::basic().with_precision(bad), &meta())
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("precision"));
    }

    for good in [1u8, 20] {
        assert!(
            service
                .compose(Blueprint::basic().with_precision(good), &meta())
                .is_ok()
        );
    }
}

#[test]
fn blank_project_name_fails_before_any_assembly() {
    let (service, filesystem) = service();
    let err = service
        .generate(Blueprint::basic().with_project_name("  "), &meta())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(filesystem.list_files().is_empty());
}

#[test]
fn missing_strategy_is_a_configuration_error() {
    let service = ComposeService::new(Vec::new(), Box::new(MemoryFilesystem::new()));
    let err = service.compose(Blueprint::basic(), &meta()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(
        err.to_string()
            .contains("no render strategy configured for cli")
    );
}

// ── Script shape ─────────────────────────────────────────────────────────────

#[test]
fn header_records_provenance() {
    let artifact = compose(Blueprint::basic().with_author("Ada"));
    let script = &artifact.script.content;

    assert!(script.starts_with(
        "#!/usr/bin/env python3\n\"\"\"\nPython Calculator\nA customizable calculator application\n\nGenerated by calcgen\nAuthor: Ada\nVersion: 1.2.0\nGenerated: 2024-03-01 12:00:00\n\"\"\"\n\n"
    ));
    assert!(script.ends_with("calculator.run()\n"));
}

#[test]
fn imports_are_deduplicated() {
    let artifact = compose(Blueprint::basic().with_style(UiStyle::Gui));
    let count = artifact
        .script
        .content
        .lines()
        .filter(|line| *line == "import math")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn memory_feature_produces_the_memory_class_and_commands() {
    let artifact = compose(Blueprint::basic().with_feature(Feature::Memory));
    let script = &artifact.script.content;

    assert!(script.contains("class Memory:"));
    assert!(script.contains("elif user_input.lower().startswith('mem'):"));
    assert!(script.contains("self.handle_memory_commands(user_input)"));
    assert!(!script.contains("import numpy"));
    assert!(artifact.manifest.is_none(), "memory needs no third party");
}

#[test]
fn scientific_defaults_cover_the_full_stack() {
    let artifact = compose(Blueprint::scientific());
    let script = &artifact.script.content;

    for expected in [
        "def sin(x, angle_unit=\"degrees\"):",
        "def log(x, base=10):",
        "def mean(data):",
        "def matrix_multiply(a, b):",
        "class Memory:",
        "class History:",
        "import cmath",
    ] {
        assert!(script.contains(expected), "missing {expected}");
    }

    let manifest = artifact.manifest.expect("scientific pins numpy and friends");
    assert!(manifest.content.contains("numpy>=1.21.0"));
    assert!(manifest.content.contains("scipy>=1.7.0"));
    assert!(manifest.content.contains("sympy>=1.9.0"));
    assert!(!manifest.content.contains("pandas"));
    assert!(!manifest.content.contains("plotly"));
}

#[test]
fn dark_scientific_gui_renders_the_desktop_stack() {
    let artifact = compose(
        Blueprint::scientific()
            .with_style(UiStyle::Gui)
            .with_theme(Theme::Dark),
    );
    let script = &artifact.script.content;

    assert!(script.contains("import tkinter as tk"));
    assert!(script.contains("class CalculatorApp:"));
    assert!(script.contains("self.root.configure(bg='#2b2b2b')"));
    assert!(script.contains("for i in range(6):"));
    // Science row sits below the memory row in the scientific preset.
    assert!(script.contains(
        "self.trig_buttons['sin'].grid(row=1, column=0, padx=1, pady=1, sticky='nsew')"
    ));
    assert!(script.contains(
        "self.log_buttons['log'].grid(row=1, column=3, padx=1, pady=1, sticky='nsew')"
    ));
    assert!(script.contains("def main():"));
    assert!(!script.contains("interactive_mode"));
}

#[test]
fn gui_manifest_keeps_the_toolkit_note() {
    let scientific = compose(Blueprint::scientific().with_style(UiStyle::Gui));
    let manifest = scientific.manifest.expect("scientific pins third parties");
    assert!(manifest.content.contains("# tkinter (included with Python)"));

    // tkinter alone never earns a manifest.
    let basic = compose(Blueprint::basic().with_style(UiStyle::Gui));
    assert!(basic.manifest.is_none());
}

// ── Persistence ──────────────────────────────────────────────────────────────

#[test]
fn generate_writes_script_and_manifest_beside_each_other() {
    let (service, filesystem) = service();
    let blueprint = Blueprint::scientific().with_output_path("out/sci_calc.py");

    let artifact = service.generate(blueprint, &meta()).unwrap();

    assert_eq!(artifact.script.path, Path::new("out/sci_calc.py"));
    let script = filesystem.read_file(Path::new("out/sci_calc.py")).unwrap();
    assert!(script.starts_with("#!/usr/bin/env python3"));
    assert!(filesystem.is_executable(Path::new("out/sci_calc.py")));

    let manifest = filesystem
        .read_file(Path::new("out/requirements.txt"))
        .unwrap();
    assert!(manifest.ends_with('\n'));
    assert!(!filesystem.is_executable(Path::new("out/requirements.txt")));
}

#[test]
fn generate_accepts_a_bare_filename() {
    let (service, filesystem) = service();

    service.generate(Blueprint::basic(), &meta()).unwrap();

    assert!(filesystem.read_file(Path::new("calculator.py")).is_some());
    assert_eq!(filesystem.list_files().len(), 1);
}

#[test]
fn failed_manifest_write_leaves_the_script_behind() {
    let filesystem = MemoryFilesystem::new();
    let rejecting = ManifestRejectingFilesystem {
        inner: filesystem.clone(),
    };
    let service = ComposeService::new(default_strategies(), Box::new(rejecting));

    let err = service
        .generate(Blueprint::scientific().with_output_path("out/calc.py"), &meta())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Internal);
    // Writes are not transactional; the script survives the manifest failure.
    assert!(filesystem.read_file(Path::new("out/calc.py")).is_some());
    assert!(filesystem.read_file(Path::new("out/requirements.txt")).is_none());
}

/// Filesystem double that accepts everything except the manifest.
#[derive(Debug, Clone)]
struct ManifestRejectingFilesystem {
    inner: MemoryFilesystem,
}

impl Filesystem for ManifestRejectingFilesystem {
    fn create_dir_all(&self, path: &Path) -> CalcgenResult<()> {
        self.inner.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> CalcgenResult<()> {
        if path.file_name().is_some_and(|name| name == "requirements.txt") {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        self.inner.write_file(path, content)
    }

    fn set_executable(&self, path: &Path) -> CalcgenResult<()> {
        self.inner.set_executable(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }
}
