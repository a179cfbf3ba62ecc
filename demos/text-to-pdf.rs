use std::path::PathBuf;
use textpdf::{layout::Layout, Document};

fn main() {
    env_logger::init();

    // usage: text-to-pdf <input.md> [layout.json]
    let mut args = std::env::args_os().skip(1);
    let input = PathBuf::from(args.next().expect("an input file to convert"));
    let layout = match args.next() {
        Some(path) => Layout::from_path(path).expect("can load layout"),
        None => Layout::default(),
    };

    let text = std::fs::read_to_string(&input).expect("can read input");
    let document = Document::from_text_with_layout(&text, &layout).expect("layout is usable");
    log::info!(
        "{} -> {} pages",
        input.display(),
        document.page_count()
    );

    // write next to the input, swapping the extension
    let out_path = input.with_extension("pdf");
    let out = std::fs::File::create(&out_path).expect("can create output file");
    document.write(out).expect("can write document");
    log::info!("wrote {}", out_path.display());
}
