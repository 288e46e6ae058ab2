/*!
 * Markdown writer implementation for dumpmd
 */

use std::io::{self, Write};
use std::path::Path;

use crate::types::{FileKind, FileRecord};

/// Separator closing every block
const BLOCK_END: &str = "\n\n---\n\n";

/// Markdown writer for directory contents
pub struct MarkdownWriter<W: Write> {
    out: W,
}

impl<W: Write> MarkdownWriter<W> {
    /// Create a new Markdown writer on top of `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the document title
    pub fn write_title(&mut self, root_name: &str) -> io::Result<()> {
        write!(self.out, "# Project Context: {}\n\n", root_name)
    }

    /// Write the block for one file
    pub fn write_file(&mut self, record: &FileRecord) -> io::Result<()> {
        match &record.kind {
            FileKind::Text(content) => {
                let fence = fence_for(&record.extension);
                write!(
                    self.out,
                    "> {}\n\n{}{}\n{}\n{}",
                    record.path, fence, record.extension, content, fence
                )?;
            }
            FileKind::Omitted(_) => {
                write!(
                    self.out,
                    "> {}\n> [Binary/Context File] Type: {} - Content omitted.",
                    record.path, record.extension
                )?;
            }
            FileKind::Unreadable => {
                write!(self.out, "> {}\n> [Error reading file]", record.path)?;
            }
        }
        self.out.write_all(BLOCK_END.as_bytes())
    }

    /// Write the placeholder for a directory that could not be listed
    pub fn write_directory_error(&mut self, dir: &Path) -> io::Result<()> {
        write!(self.out, "> [Error reading directory: {}]", dir.display())?;
        self.out.write_all(BLOCK_END.as_bytes())
    }

    /// Write the trailing statistics block
    pub fn write_statistics(&mut self, total_files: usize) -> io::Result<()> {
        write!(self.out, "# Statistics\n\n- Total Files: {}\n", total_files)
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

// Markdown files get quotes so their own backtick fences stay intact
fn fence_for(extension: &str) -> &'static str {
    if extension == "md" {
        "\"\"\""
    } else {
        "```"
    }
}
