use theme_sniffer::{
    read_dictionary_from_string, ReportBuilder, TextAnalyzer, DEFAULT_REPORT_BUILDER_CONFIG,
};

fn main() {
    env_logger::init();

    let dictionary = read_dictionary_from_string(
        r#"[
            {"theme": "sports", "words": ["ball", "goal"]},
            {"theme": "tech", "words": ["code", "server"]}
        ]"#,
    )
    .unwrap();

    let text = "The goalkeeper wrote code for the ball game, and the ball went in the goal.";

    let analyzer = TextAnalyzer::new(dictionary);
    let report_builder = ReportBuilder::new(DEFAULT_REPORT_BUILDER_CONFIG);

    println!("Theme of the given text \"{}\": {}", text, analyzer.classify_text(text));

    let top_words = analyzer.top_words(text, 3).unwrap();
    for line in report_builder.render_histogram(&top_words) {
        println!("{}", line);
    }
}
