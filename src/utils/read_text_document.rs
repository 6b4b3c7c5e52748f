use crate::constants::{GZIP_DOCUMENT_EXTENSION, UNSUPPORTED_DOCUMENT_EXTENSIONS};
use crate::models::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a document from disk as plain UTF-8 text.
///
/// Gzip-compressed text (`.gz`) is decompressed on the fly. Legacy word processor formats
/// (`.doc`, `.docx`) are rejected; they must be converted to plain text before analysis.
pub fn read_text_document<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(Error::InputUnavailable(format!(
            "File not found or not a regular file: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_lowercase());

    if let Some(extension) = extension.as_deref() {
        if UNSUPPORTED_DOCUMENT_EXTENSIONS.contains(&extension) {
            return Err(Error::InputUnavailable(format!(
                "Unsupported .{} document {}; convert it to plain text first",
                extension,
                path.display()
            )));
        }
    }

    let mut file = File::open(path).map_err(|e| {
        Error::InputUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let mut bytes = Vec::new();

    let read_result = if extension.as_deref() == Some(GZIP_DOCUMENT_EXTENSION) {
        GzDecoder::new(file).read_to_end(&mut bytes)
    } else {
        file.read_to_end(&mut bytes)
    };

    read_result.map_err(|e| {
        Error::InputUnavailable(format!("Failed to read {}: {}", path.display(), e))
    })?;

    String::from_utf8(bytes).map_err(|e| {
        Error::InputUnavailable(format!("{} is not valid UTF-8 text: {}", path.display(), e))
    })
}
