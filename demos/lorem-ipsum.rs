use textpdf::Document;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // a handful of marked-up paragraphs, long enough to need several pages
    let mut text = String::from("# Lorem Ipsum\n\n");
    for i in 1..=12 {
        text.push_str(&format!("## Section {i}\n\n"));
        text.push_str(&lipsum::lipsum_words(120));
        text.push_str("\n\n");
        text.push_str(&format!("> {}\n", lipsum::lipsum_title()));
        text.push_str(&format!("- {}\n", lipsum::lipsum_words(8)));
        text.push_str(&format!("- `{}`\n\n", lipsum::lipsum_words(3)));
    }

    let document = Document::from_text(&text);
    let out = std::fs::File::create("lorem-ipsum.pdf").unwrap();
    document.write(out).unwrap();
}
