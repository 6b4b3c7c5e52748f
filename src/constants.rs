/// Characters removed from tokens before they are counted as words.
pub const FORBIDDEN_CHARACTERS: &[char] = &[',', ';', ':', '.', '!', '?', '/', '-'];

/// File name used for the full statistics report when no destination is supplied.
pub const DEFAULT_OUTPUT_PATH: &str = "full_statistics.txt";

/// Display label for a classification pass in which no theme keyword matched.
pub const NO_THEME_FOUND: &str = "no theme found";

/// Title line written at the top of a full statistics report.
pub const FULL_REPORT_TITLE: &str = "Word statistics for the text:";

// Legacy binary document formats which have to be converted to plain text up front
pub const UNSUPPORTED_DOCUMENT_EXTENSIONS: &[&str] = &["doc", "docx"];

pub const GZIP_DOCUMENT_EXTENSION: &str = "gz";
