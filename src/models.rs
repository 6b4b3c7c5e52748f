pub mod error;
pub use error::Error;

pub mod dictionary;
pub use dictionary::Dictionary;

pub mod theme_classifier;
pub use theme_classifier::{ThemeClassification, ThemeClassifier};

pub mod report_builder;
pub use report_builder::{ReportBuilder, ReportBuilderConfig};

pub mod text_analyzer;
pub use text_analyzer::TextAnalyzer;
