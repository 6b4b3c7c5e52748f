use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use std::path::PathBuf;
use theme_sniffer::{
    read_dictionary_from_path, read_text_document, resolve_report_path, write_csv_report,
    write_report, Error, ReportBuilder, TextAnalyzer, DEFAULT_REPORT_BUILDER_CONFIG,
};

#[derive(Parser)]
#[command(name = "theme-sniffer-cli")]
#[command(about = "Classify a text document by theme and report word frequencies")]
struct Cli {
    /// JSON dictionary of themes: [{"theme": "...", "words": ["..."]}]
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Plain text document to analyze (.txt or gzip-compressed .gz)
    document: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the theme of the document
    Theme,

    /// Print the most frequent words
    Top {
        /// Number of words to show
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        count: u64,

        /// Also print a histogram
        #[arg(long)]
        histogram: bool,
    },

    /// Write the full word statistics to a file
    Report {
        /// Destination file (defaults to full_statistics.txt)
        #[arg(short, long)]
        output: Option<String>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Lines)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Lines,
    Csv,
}

fn run(cli: Cli) -> Result<(), Error> {
    let text = read_text_document(&cli.document)?;
    let analyzer = TextAnalyzer::new(read_dictionary_from_path(&cli.dictionary)?);
    let report_builder = ReportBuilder::new(DEFAULT_REPORT_BUILDER_CONFIG);

    match cli.command {
        Command::Theme => {
            println!("Theme: {}", analyzer.classify_text(&text));
        }
        Command::Top { count, histogram } => {
            let count = usize::try_from(count).unwrap_or(usize::MAX);
            let top_words = analyzer.top_words(&text, count)?;

            println!("Top {} most frequent words:", count);
            for line in report_builder.render_top(&top_words) {
                println!("{}", line);
            }

            if histogram {
                println!("\nHistogram:");
                for line in report_builder.render_histogram(&top_words) {
                    println!("{}", line);
                }
            }
        }
        Command::Report { output, format } => {
            let output_path = resolve_report_path(output.as_deref());
            let frequencies = analyzer.word_frequencies(&text);

            let written_path = match format {
                ReportFormat::Lines => {
                    write_report(&output_path, &report_builder.render_full(&frequencies))?
                }
                ReportFormat::Csv => {
                    write_csv_report(&output_path, &report_builder.render_full_csv(&frequencies)?)?
                }
            };

            println!("Statistics written to: {}", written_path.display());
        }
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
