pub mod count_word_frequencies;
pub use count_word_frequencies::count_word_frequencies;

pub mod read_dictionary;
pub use read_dictionary::{read_dictionary_from_path, read_dictionary_from_string};

pub mod read_text_document;
pub use read_text_document::read_text_document;

pub mod sanitize_token;
pub use sanitize_token::sanitize_token;

pub mod sort_results;
pub use sort_results::{sort_results, top_n, top_n_themes, top_n_words};

pub mod tokenize;
pub use tokenize::tokenize;

pub mod write_report;
pub use write_report::{resolve_report_path, write_csv_report, write_report};
