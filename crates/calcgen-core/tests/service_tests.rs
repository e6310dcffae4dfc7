//! Orchestration tests for `ComposeService` with in-test port doubles.
//!
//! The adapter crate owns the end-to-end tests against the real catalogs
//! and renderers; these pin down the service contract in isolation:
//! strategy dispatch, persistence ordering, and directory handling.

use std::path::Path;
use std::sync::{Arc, Mutex};

use calcgen_core::application::{
    ApplicationError, ComposeService, RenderStrategy,
    ports::{Filesystem, FragmentCatalog, MainRenderer},
};
use calcgen_core::domain::{
    Blueprint, Fragment, GenerationMeta, Library, MainSegment, Resolved, UiStyle,
};
use calcgen_core::error::{CalcgenError, CalcgenResult, ErrorCategory};

// ── port doubles ──────────────────────────────────────────────────────────────

struct FixedCatalog;

impl FragmentCatalog for FixedCatalog {
    fn fragments_for(&self, _resolved: &Resolved) -> Vec<Fragment> {
        vec![Fragment {
            name: "stub",
            body: "def stub():\n    return 0",
        }]
    }
}

struct FixedRenderer;

impl MainRenderer for FixedRenderer {
    fn render_main(&self, resolved: &Resolved) -> MainSegment {
        MainSegment {
            body: format!("def main():\n    print(\"{}\")", resolved.project_name()),
            entry: "if __name__ == \"__main__\":\n    main()".to_string(),
        }
    }
}

/// Records every filesystem call in order; all operations succeed.
#[derive(Clone, Default)]
struct RecordingFilesystem {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingFilesystem {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.calls.lock().unwrap().push(entry);
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> CalcgenResult<()> {
        self.record(format!("mkdir {}", path.display()));
        Ok(())
    }

    fn write_file(&self, path: &Path, _content: &str) -> CalcgenResult<()> {
        self.record(format!("write {}", path.display()));
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> CalcgenResult<()> {
        self.record(format!("chmod {}", path.display()));
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn cli_only_service(fs: RecordingFilesystem) -> ComposeService {
    let strategies = vec![RenderStrategy::new(
        UiStyle::Cli,
        Box::new(FixedCatalog),
        Box::new(FixedRenderer),
    )];
    ComposeService::new(strategies, Box::new(fs))
}

fn meta() -> GenerationMeta {
    GenerationMeta::new("0.0.0", "2024-01-01 00:00:00")
}

// ── compose ───────────────────────────────────────────────────────────────────

#[test]
fn compose_assembles_sections_in_order() {
    let service = cli_only_service(RecordingFilesystem::default());
    let artifact = service.compose(Blueprint::basic(), &meta()).unwrap();

    let content = &artifact.script.content;
    let header = content.find("#!/usr/bin/env python3").unwrap();
    let imports = content.find("import sys").unwrap();
    let fragment = content.find("def stub():").unwrap();
    let main = content.find("def main():").unwrap();
    let entry = content.find("if __name__ == \"__main__\":").unwrap();

    assert!(header < imports);
    assert!(imports < fragment);
    assert!(fragment < main);
    assert!(main < entry);
    assert!(content.ends_with('\n'));
}

#[test]
fn sections_are_separated_by_blank_lines() {
    let service = cli_only_service(RecordingFilesystem::default());
    let artifact = service.compose(Blueprint::basic(), &meta()).unwrap();

    assert!(artifact.script.content.contains("def stub():\n    return 0\n\ndef main():"));
}

#[test]
fn gui_blueprint_without_gui_strategy_is_rejected() {
    let service = cli_only_service(RecordingFilesystem::default());
    let err = service
        .compose(Blueprint::basic().with_style(UiStyle::Gui), &meta())
        .unwrap_err();

    assert!(matches!(
        err,
        CalcgenError::Application(ApplicationError::StrategyNotConfigured { .. })
    ));
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_persists_script_then_manifest() {
    let fs = RecordingFilesystem::default();
    let service = cli_only_service(fs.clone());

    let blueprint = Blueprint::basic()
        .with_output_path("out/calc.py")
        .with_library(Library::Numpy);
    service.generate(blueprint, &meta()).unwrap();

    assert_eq!(
        fs.calls(),
        vec![
            "mkdir out".to_string(),
            "write out/calc.py".to_string(),
            "chmod out/calc.py".to_string(),
            "write out/requirements.txt".to_string(),
        ],
    );
}

#[test]
fn bare_filename_skips_directory_creation() {
    let fs = RecordingFilesystem::default();
    let service = cli_only_service(fs.clone());

    service.generate(Blueprint::basic(), &meta()).unwrap();

    // basic uses only the bundled math library, so no manifest is written
    assert_eq!(
        fs.calls(),
        vec![
            "write calculator.py".to_string(),
            "chmod calculator.py".to_string(),
        ],
    );
}

#[test]
fn validation_failure_never_touches_the_filesystem() {
    let fs = RecordingFilesystem::default();
    let service = cli_only_service(fs.clone());

    let err = service
        .generate(Blueprint::basic().with_project_name(""), &meta())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(fs.calls().is_empty());
}
