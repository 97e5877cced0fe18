use std::collections::HashSet;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;

use crate::common::InputSource;
use crate::constants::discovery::{PIPELINE_EXTENSION, SKIPPED_DIRS};
use crate::constants::output::STDIN_NAME;
use crate::progress::ProgressReporter;

/// A single pipeline document to evaluate
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineInput {
    Stdin,
    File(PathBuf),
}

impl PipelineInput {
    pub fn display_name(&self) -> String {
        match self {
            PipelineInput::Stdin => STDIN_NAME.to_string(),
            PipelineInput::File(path) => path.display().to_string(),
        }
    }
}

pub struct PipelineDiscovery {
    seen: HashSet<PipelineInput>,
}

impl Default for PipelineDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineDiscovery {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Expand inputs into individual pipeline documents
    ///
    /// Missing paths and bad glob patterns are reported and skipped. Each
    /// document appears once, stdin first and files sorted by path.
    pub fn discover_all(
        &mut self,
        inputs: &[InputSource],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PipelineInput> {
        let mut found = Vec::new();

        for input in inputs {
            match input {
                InputSource::Stdin => self.push(PipelineInput::Stdin, &mut found),
                InputSource::Pattern(pattern) => {
                    self.discover_pattern(pattern, &mut found, progress)
                }
            }
        }

        found.sort();
        found
    }

    fn discover_pattern(
        &mut self,
        pattern: &str,
        found: &mut Vec<PipelineInput>,
        progress: Option<&ProgressReporter>,
    ) {
        let path = Path::new(pattern);

        if path.exists() {
            self.discover_path(path, found, progress);
            return;
        }

        if !is_glob(pattern) {
            eprintln!(
                "{} Path '{}' does not exist",
                style("⚠").yellow(),
                pattern
            );
            return;
        }

        match glob::glob(pattern) {
            Ok(paths) => {
                let mut matched = false;
                for entry in paths.filter_map(|e| e.ok()) {
                    matched = true;
                    self.discover_path(&entry, found, progress);
                }
                if !matched {
                    eprintln!(
                        "{} Pattern '{}' matched no files",
                        style("⚠").yellow(),
                        pattern
                    );
                }
            }
            Err(e) => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    style("⚠").yellow(),
                    pattern,
                    e
                );
            }
        }
    }

    fn discover_path(
        &mut self,
        path: &Path,
        found: &mut Vec<PipelineInput>,
        progress: Option<&ProgressReporter>,
    ) {
        if let Some(p) = progress {
            p.checking_path(path);
        }

        if path.is_file() {
            self.push(PipelineInput::File(path.to_path_buf()), found);
            return;
        }

        let files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                e.depth() == 0 || !SKIPPED_DIRS.iter().any(|skipped| name == *skipped)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && has_pipeline_extension(e.path()))
            .map(|e| e.into_path())
            .collect();

        for file in files {
            self.push(PipelineInput::File(file), found);
        }
    }

    fn push(&mut self, input: PipelineInput, found: &mut Vec<PipelineInput>) {
        if self.seen.insert(input.clone()) {
            found.push(input);
        }
    }
}

fn has_pipeline_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PIPELINE_EXTENSION))
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, r#"{"nodes": [], "edges": []}"#).unwrap();
    }

    #[test]
    fn test_walks_directories_for_json() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(&root.join("b.json"));
        write(&root.join("nested/a.json"));
        write(&root.join("node_modules/skip.json"));
        fs::write(root.join("notes.txt"), "not a pipeline").unwrap();

        let inputs = vec![InputSource::Pattern(root.display().to_string())];
        let found = PipelineDiscovery::new().discover_all(&inputs, None);

        assert_eq!(
            found,
            vec![
                PipelineInput::File(root.join("b.json")),
                PipelineInput::File(root.join("nested/a.json")),
            ]
        );
    }

    #[test]
    fn test_expands_globs_and_deduplicates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(&root.join("one.json"));
        write(&root.join("two.json"));

        let inputs = vec![
            InputSource::Pattern(root.join("*.json").display().to_string()),
            InputSource::Pattern(root.join("one.json").display().to_string()),
            InputSource::Stdin,
            InputSource::Stdin,
        ];
        let found = PipelineDiscovery::new().discover_all(&inputs, None);

        assert_eq!(
            found,
            vec![
                PipelineInput::Stdin,
                PipelineInput::File(root.join("one.json")),
                PipelineInput::File(root.join("two.json")),
            ]
        );
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let inputs = vec![InputSource::Pattern("/no/such/pipeline.json".to_string())];
        assert!(PipelineDiscovery::new().discover_all(&inputs, None).is_empty());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(PipelineInput::Stdin.display_name(), "<stdin>");
        assert_eq!(
            PipelineInput::File(PathBuf::from("p/a.json")).display_name(),
            "p/a.json"
        );
    }
}
