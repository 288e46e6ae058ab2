/*!
 * Core types and data structures for the dumpmd application
 */

/// Why a file's content was left out of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmissionReason {
    /// A NUL byte was found in the first kilobyte, or the file could not be sniffed
    Binary,
    /// The extension is configured as context-only
    ContextOnly,
}

/// Classification of a regular file and what gets written for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Text file with its trimmed content
    Text(String),
    /// Content omitted, only annotated
    Omitted(OmissionReason),
    /// Classified as text but reading the content failed
    Unreadable,
}

/// One serialized file, alive only while its block is written
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Display path: root folder name, then the relative path, `/`-separated
    pub path: String,
    /// Extension tag, `txt` when the name has none
    pub extension: String,
    /// Classification and content
    pub kind: FileKind,
}

/// Counters accumulated over a walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Every non-excluded regular file, the number reported in the document
    pub total_files: usize,
    /// Files embedded as fenced text
    pub text_files: usize,
    /// Files annotated as binary or context-only
    pub omitted_files: usize,
    /// Text files whose content could not be read
    pub unreadable_files: usize,
    /// Directories that could not be listed
    pub directory_errors: usize,
    /// Entries dropped by ignore rules, static names or the sensitive list
    pub excluded_entries: usize,
    /// Bytes of embedded (trimmed) text
    pub text_bytes: u64,
}

impl ScanStatistics {
    /// Fold one written file into the counters
    pub fn record(&mut self, kind: &FileKind) {
        self.total_files += 1;
        match kind {
            FileKind::Text(content) => {
                self.text_files += 1;
                self.text_bytes += content.len() as u64;
            }
            FileKind::Omitted(_) => self.omitted_files += 1,
            FileKind::Unreadable => self.unreadable_files += 1,
        }
    }
}
