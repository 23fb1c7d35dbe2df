use text_watermark::layout::Offsets;
use text_watermark::{Options, Watermark};

fn main() {
    env_logger::init();

    // usage: watermark <photo> <output.jpg> [row ...]
    let mut args = std::env::args().skip(1);
    let input = args.next().expect("path to a photo");
    let output = args.next().expect("path to write the watermarked jpeg to");
    let mut rows: Vec<String> = args.collect();
    if rows.is_empty() {
        rows = vec![
            "Копия документа изготовлена".to_string(),
            "в электронном виде и заверена 12:44 12.12.2021".to_string(),
            "Иванов Иван Иваныч - 789056634345".to_string(),
        ];
    }

    // a label across 90% of the photo's width and 10% of its height,
    // 20px in from the bottom-left corner
    let options = Options {
        watermark_height_ratio: 0.1,
        watermark_width_ratio: 0.9,
        watermark_offsets: Offsets::all(20),
        text_offsets: Offsets::all(20),
        opacity: 128,
        auto_orientation: true,
        row_spacing: 1.5,
        dpi: 100.0,
        ..Options::default()
    };
    let watermark = Watermark::new(
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf"),
        &options,
    )
    .expect("can build watermark");

    let photo = std::fs::read(&input).expect("can read photo");
    let stamped = watermark.add_from_text(&photo, &rows).expect("can watermark photo");
    std::fs::write(&output, stamped).expect("can write output");
}
