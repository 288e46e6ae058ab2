/*!
 * dumpmd - Generate a Markdown snapshot of directory contents for LLM context
 *
 * This library walks a directory tree depth-first and writes every file that
 * survives the ignore rules into one Markdown document, embedding text and
 * annotating binary or context-only files.
 */

pub mod classifier;
pub mod config;
pub mod error;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod settings;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{DumpMdError, Result};
pub use patterns::{IgnoreRule, IgnoreRuleSet};
pub use report::{Reporter, ScanReport};
pub use scanner::Scanner;
pub use settings::Settings;
pub use types::{FileKind, FileRecord, OmissionReason, ScanStatistics};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
