use crate::models::ReportBuilderConfig;

pub const DEFAULT_REPORT_BUILDER_CONFIG: &ReportBuilderConfig = &ReportBuilderConfig {
    max_label_width: 20,
    label_column_padding: 5,
    histogram_marker: '*',
    occurrences_suffix: "occurrences",
};
