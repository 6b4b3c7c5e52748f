use crate::models::Error;
use crate::types::{FrequencyMap, RankedEntry};
use crate::utils::sort_results;
use csv::WriterBuilder;

pub struct ReportBuilderConfig {
    /// Labels longer than this many characters are cut in histograms.
    pub max_label_width: usize,
    /// Extra spaces added after the widest label before the histogram bar.
    pub label_column_padding: usize,
    pub histogram_marker: char,
    pub occurrences_suffix: &'static str,
}

/// Turns ranked entries and frequency maps into display lines.
///
/// The builder performs no I/O; see [`write_report`](crate::write_report) for writing the
/// lines to a file.
pub struct ReportBuilder<'a> {
    config: &'a ReportBuilderConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: &'a ReportBuilderConfig) -> Self {
        Self { config }
    }

    /// One `"<label>: <count> occurrences"` line per entry, in the given order.
    pub fn render_top(&self, ranked: &[RankedEntry]) -> Vec<String> {
        ranked
            .iter()
            .map(|(label, count)| self.render_occurrence_line(label, *count))
            .collect()
    }

    /// One histogram line per entry: the label, truncated and padded into a fixed-width
    /// column, then `" |"` and a bar of `count` markers.
    pub fn render_histogram(&self, ranked: &[RankedEntry]) -> Vec<String> {
        let column_width = self.config.max_label_width + self.config.label_column_padding;

        ranked
            .iter()
            .map(|(label, count)| {
                let truncated_label: String =
                    label.chars().take(self.config.max_label_width).collect();

                let bar: String = std::iter::repeat(self.config.histogram_marker)
                    .take(*count)
                    .collect();

                format!(
                    "{:<width$} |{}",
                    truncated_label,
                    bar,
                    width = column_width
                )
            })
            .collect()
    }

    /// One line per distinct word in the map.
    ///
    /// Lines are ordered by count (descending) and then by word, so the same document
    /// always yields the same report.
    pub fn render_full(&self, frequencies: &FrequencyMap) -> Vec<String> {
        self.render_top(&sort_results(frequencies))
    }

    /// The full frequency map as CSV with a `word,count` header, in the same order as
    /// [`render_full`](Self::render_full).
    pub fn render_full_csv(&self, frequencies: &FrequencyMap) -> Result<String, Error> {
        let mut writer = WriterBuilder::new()
            .has_headers(true)
            .from_writer(Vec::new());

        writer.write_record(["word", "count"])?;

        for (word, count) in sort_results(frequencies) {
            writer.write_record([word, count.to_string()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::IoError(e.into_error()))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::InputUnavailable(format!("CSV output is not UTF-8: {}", e)))
    }

    fn render_occurrence_line(&self, label: &str, count: usize) -> String {
        format!("{}: {} {}", label, count, self.config.occurrences_suffix)
    }
}
