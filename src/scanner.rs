/*!
 * Directory traversal and per-file serialization
 */

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::classifier::{extension_of, is_sensitive, omission_reason};
use crate::config::Config;
use crate::patterns::IgnoreRuleSet;
use crate::settings::Settings;
use crate::types::{FileKind, FileRecord, ScanStatistics};
use crate::utils::display_path;
use crate::writer::MarkdownWriter;

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Static ignore and context-only lists
    settings: Settings,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: ScanStatistics,
    /// Name of the scanned root folder, prefix of every header path
    root_name: String,
    /// Canonical output path, skipped when it lies inside the tree
    output_path: Option<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, settings: Settings, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            settings,
            progress,
            statistics: ScanStatistics::default(),
            root_name: String::new(),
            output_path: None,
        }
    }

    /// Get scanner statistics
    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }

    /// Walk the target directory and write the whole document to `writer`.
    ///
    /// Returns the number of files written, which is also the total in the
    /// trailing statistics block.
    pub fn scan<W: Write>(&mut self, writer: &mut MarkdownWriter<W>) -> io::Result<usize> {
        let root = fs::canonicalize(&self.config.target_dir)?;
        self.root_name = root
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.output_path = fs::canonicalize(&self.config.output_file).ok();
        self.statistics = ScanStatistics::default();

        tracing::info!("Scanning: {}", root.display());

        writer.write_title(&self.root_name)?;
        let total = self.scan_directory(&root, Path::new(""), &IgnoreRuleSet::new(), writer)?;
        writer.write_statistics(total)?;

        Ok(total)
    }

    /// Serialize one directory level, recursing into subdirectories
    fn scan_directory<W: Write>(
        &mut self,
        abs_path: &Path,
        rel_path: &Path,
        inherited: &IgnoreRuleSet,
        writer: &mut MarkdownWriter<W>,
    ) -> io::Result<usize> {
        let rules = IgnoreRuleSet::merged(inherited, IgnoreRuleSet::load(abs_path));

        let mut entries: Vec<DirEntry> = Vec::new();
        for result in WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match result {
                Ok(entry) => entries.push(entry),
                // Depth 0 means the directory itself could not be listed
                Err(e) if e.depth() == 0 => {
                    tracing::warn!("Error reading directory {}: {}", abs_path.display(), e);
                    self.statistics.directory_errors += 1;
                    writer.write_directory_error(abs_path)?;
                    return Ok(0);
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", abs_path.display(), e);
                }
            }
        }

        let child_rules = rules.inheritable();
        let mut file_count = 0;

        for entry in entries {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let file_type = entry.file_type();

            if self.should_ignore(entry.path(), &entry_name, &rules) {
                tracing::debug!("Skipping {}", entry.path().display());
                self.statistics.excluded_entries += 1;
                continue;
            }

            let new_rel_path = rel_path.join(&entry_name);
            if file_type.is_dir() {
                file_count += self.scan_directory(entry.path(), &new_rel_path, &child_rules, writer)?;
            } else if file_type.is_file() {
                self.process_file(entry.path(), &entry_name, &new_rel_path, writer)?;
                file_count += 1;
            } else {
                tracing::debug!("Skipping special file {}", entry.path().display());
            }
        }

        Ok(file_count)
    }

    /// Classify a single file and write its block
    fn process_file<W: Write>(
        &mut self,
        abs_path: &Path,
        file_name: &str,
        rel_path: &Path,
        writer: &mut MarkdownWriter<W>,
    ) -> io::Result<()> {
        self.progress.inc(1);

        // Truncate if too long to avoid display issues
        let display_name = if file_name.len() > 40 {
            let start = file_name
                .char_indices()
                .rev()
                .nth(36)
                .map_or(0, |(i, _)| i);
            format!("...{}", &file_name[start..])
        } else {
            file_name.to_string()
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));

        let extension = extension_of(file_name);
        let kind = match omission_reason(abs_path, &extension, &self.settings) {
            Some(reason) => FileKind::Omitted(reason),
            None => match fs::read(abs_path) {
                Ok(bytes) => FileKind::Text(String::from_utf8_lossy(&bytes).trim().to_string()),
                Err(e) => {
                    tracing::warn!("Error reading file {}: {}", abs_path.display(), e);
                    FileKind::Unreadable
                }
            },
        };

        let record = FileRecord {
            path: display_path(&self.root_name, rel_path),
            extension,
            kind,
        };
        writer.write_file(&record)?;
        self.statistics.record(&record.kind);

        Ok(())
    }

    /// Check if an entry should be left out of the document entirely
    pub fn should_ignore(&self, path: &Path, name: &str, rules: &IgnoreRuleSet) -> bool {
        // Check static ignore names
        if self.settings.ignore.iter().any(|p| glob_match(p, name)) {
            return true;
        }

        if is_sensitive(name) {
            return true;
        }

        if rules.is_ignored(name) {
            return true;
        }

        // Don't process the output file itself
        if self.output_path.as_deref() == Some(path) {
            return true;
        }

        false
    }
}
