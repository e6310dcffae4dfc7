//! Composed output values.
//!
//! Composition produces an [`Artifact`]: the calculator script plus an
//! optional dependency manifest, each an [`OutputFile`] ready to persist.
//! Nothing here touches the filesystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Provenance stamped into the generated script header.
///
/// Callers supply the timestamp, so composing the same blueprint with the
/// same meta yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMeta {
    pub tool_version: String,
    /// Human-readable generation time, e.g. `2024-03-01 12:00:00`.
    pub generated_at: String,
}

impl GenerationMeta {
    pub fn new(tool_version: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            tool_version: tool_version.into(),
            generated_at: generated_at.into(),
        }
    }
}

/// The rendered main section of a script: the body plus the entry stanza
/// appended after all function and class definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainSegment {
    pub body: String,
    pub entry: String,
}

/// One file to be written, with its content and mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: String,
    pub executable: bool,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: true,
        }
    }
}

/// Everything one composition produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub script: OutputFile,
    pub manifest: Option<OutputFile>,
}

impl Artifact {
    /// Paths of every file the artifact will write.
    pub fn paths(&self) -> Vec<&std::path::Path> {
        let mut paths = vec![self.script.path.as_path()];
        if let Some(manifest) = &self.manifest {
            paths.push(manifest.path.as_path());
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_constructors_set_mode() {
        let script = OutputFile::executable("calculator.py", "#!/usr/bin/env python3\n");
        assert!(script.executable);
        let manifest = OutputFile::new("requirements.txt", "numpy>=1.21.0\n");
        assert!(!manifest.executable);
    }

    #[test]
    fn artifact_paths_include_manifest_when_present() {
        let artifact = Artifact {
            script: OutputFile::executable("calculator.py", ""),
            manifest: Some(OutputFile::new("requirements.txt", "")),
        };
        let paths: Vec<_> = artifact.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1], std::path::Path::new("requirements.txt"));

        let bare = Artifact {
            script: OutputFile::executable("calculator.py", ""),
            manifest: None,
        };
        assert_eq!(bare.paths().len(), 1);
    }
}
