/*!
 * Text/binary classification and name-based exclusion checks
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::settings::{Settings, DOTENV_PREFIX, SENSITIVE_EXTENSIONS};
use crate::types::OmissionReason;

/// Bytes read from the start of a file when sniffing
pub const SNIFF_LEN: usize = 1024;

/// Fallback extension tag
pub const DEFAULT_EXTENSION: &str = "txt";

/// Sniff the first kilobyte for a NUL byte.
///
/// Empty files count as text, files that cannot be read count as binary.
pub fn is_text_file(path: &Path) -> bool {
    let mut buffer = [0u8; SNIFF_LEN];
    let bytes_read = match File::open(path).and_then(|mut file| read_prefix(&mut file, &mut buffer)) {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!("Treating {} as binary: {}", path.display(), e);
            return false;
        }
    };

    !buffer[..bytes_read].contains(&0)
}

// `read` may return short counts before EOF
fn read_prefix(reader: &mut impl Read, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Extension tag for a file name, `txt` when there is none
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Dotenv files and key/certificate material
pub fn is_sensitive(name: &str) -> bool {
    name.starts_with(DOTENV_PREFIX) || SENSITIVE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Decide whether content must be omitted, and why
pub fn omission_reason(path: &Path, extension: &str, settings: &Settings) -> Option<OmissionReason> {
    if settings.is_context_only(extension) {
        return Some(OmissionReason::ContextOnly);
    }
    if !is_text_file(path) {
        return Some(OmissionReason::Binary);
    }
    None
}
