//! Compose Service - main application orchestrator.
//!
//! This service coordinates the entire composition workflow:
//! 1. Validate and resolve the blueprint
//! 2. Select the render strategy for the UI style
//! 3. Assemble the script and manifest
//! 4. Persist through the filesystem port
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, FragmentCatalog, MainRenderer},
    },
    domain::{Artifact, Blueprint, GenerationMeta, OutputFile, Resolved, UiStyle, imports, manifest},
    error::CalcgenResult,
};

/// Name of the dependency manifest, written next to the script.
const MANIFEST_FILE: &str = "requirements.txt";

/// One UI style's catalog and renderer, registered with the service.
pub struct RenderStrategy {
    pub style: UiStyle,
    pub catalog: Box<dyn FragmentCatalog>,
    pub renderer: Box<dyn MainRenderer>,
}

impl RenderStrategy {
    pub fn new(
        style: UiStyle,
        catalog: Box<dyn FragmentCatalog>,
        renderer: Box<dyn MainRenderer>,
    ) -> Self {
        Self {
            style,
            catalog,
            renderer,
        }
    }
}

/// Main composition service.
///
/// Orchestrates blueprint resolution, script assembly, and persistence.
pub struct ComposeService {
    strategies: Vec<RenderStrategy>,
    filesystem: Box<dyn Filesystem>,
}

impl ComposeService {
    /// Create a new compose service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use calcgen_core::application::{ComposeService, RenderStrategy};
    ///
    /// let service = ComposeService::new(
    ///     strategies, // Vec<RenderStrategy>, one per UI style
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(strategies: Vec<RenderStrategy>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            strategies,
            filesystem,
        }
    }

    /// Compose a calculator without touching the filesystem.
    ///
    /// Pure given its inputs: the same blueprint and meta always yield a
    /// byte-identical artifact.
    #[instrument(skip_all, fields(blueprint = %blueprint))]
    pub fn compose(&self, blueprint: Blueprint, meta: &GenerationMeta) -> CalcgenResult<Artifact> {
        blueprint.validate()?;
        let resolved = blueprint.resolve();
        let strategy = self.strategy_for(resolved.ui().style)?;

        debug!(
            features = resolved.features().len(),
            libraries = resolved.libraries().len(),
            "Blueprint resolved"
        );

        let script_path = resolved.output_path().to_path_buf();
        let script = self.assemble_script(strategy, &resolved, meta);

        let manifest = manifest::render(&resolved).map(|content| {
            let path = manifest_path(&script_path);
            OutputFile::new(path, content)
        });

        info!(
            script = %script_path.display(),
            manifest = manifest.is_some(),
            "Composition complete"
        );

        Ok(Artifact {
            script: OutputFile::executable(script_path, script),
            manifest,
        })
    }

    /// Compose a calculator and write it to the filesystem.
    ///
    /// Writes are not transactional: the script may exist even if the
    /// manifest write fails. Existing files are overwritten.
    #[instrument(skip_all, fields(blueprint = %blueprint))]
    pub fn generate(&self, blueprint: Blueprint, meta: &GenerationMeta) -> CalcgenResult<Artifact> {
        let artifact = self.compose(blueprint, meta)?;

        // Ensure parent exists (bare filenames report an empty parent)
        if let Some(parent) = artifact.script.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem
            .write_file(&artifact.script.path, &artifact.script.content)?;
        if artifact.script.executable {
            self.filesystem.set_executable(&artifact.script.path)?;
        }

        if let Some(manifest) = &artifact.manifest {
            self.filesystem.write_file(&manifest.path, &manifest.content)?;
        }

        info!("Generation complete");
        Ok(artifact)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Look up the strategy registered for a UI style.
    fn strategy_for(&self, style: UiStyle) -> CalcgenResult<&RenderStrategy> {
        self.strategies
            .iter()
            .find(|strategy| strategy.style == style)
            .ok_or_else(|| ApplicationError::StrategyNotConfigured { style }.into())
    }

    /// Assemble the full script text in fixed section order:
    /// header, imports, fragments, main body, entry stanza.
    fn assemble_script(
        &self,
        strategy: &RenderStrategy,
        resolved: &Resolved,
        meta: &GenerationMeta,
    ) -> String {
        let mut sections: Vec<String> = Vec::new();

        sections.push(render_header(resolved, meta));
        sections.push(imports::import_lines(resolved).join("\n"));

        for fragment in strategy.catalog.fragments_for(resolved) {
            sections.push(fragment.body.to_string());
        }

        let main = strategy.renderer.render_main(resolved);
        sections.push(main.body);
        sections.push(main.entry);

        let mut script = sections.join("\n\n");
        script.push('\n');
        script
    }
}

/// Render the script header: shebang plus a provenance docstring.
fn render_header(resolved: &Resolved, meta: &GenerationMeta) -> String {
    format!(
        "#!/usr/bin/env python3\n\
         \"\"\"\n\
         {name}\n\
         {description}\n\
         \n\
         Generated by calcgen\n\
         Author: {author}\n\
         Version: {version}\n\
         Generated: {generated_at}\n\
         \"\"\"",
        name = resolved.project_name(),
        description = resolved.description(),
        author = resolved.author(),
        version = meta.tool_version,
        generated_at = meta.generated_at,
    )
}

/// The manifest lands next to the script.
fn manifest_path(script_path: &std::path::Path) -> PathBuf {
    match script_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(MANIFEST_FILE),
        _ => PathBuf::from(MANIFEST_FILE),
    }
}
