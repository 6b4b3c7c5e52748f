use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_DICTIONARY_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "test_dictionary.json"));

pub static TEST_COMPRESSED_DOCUMENT_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "compressed_document.txt.gz"));

pub const EXPECTED_THEME_DIRECTIVE: &str = "EXPECTED_THEME:";

pub const EXPECTED_TOP_DIRECTIVE: &str = "EXPECTED_TOP:";

pub const COMMENT_DIRECTIVE: &str = "COMMENT:";
