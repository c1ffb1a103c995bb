//! Lays out a sample photo set and prints the result as JSON.
//!
//! ```text
//! cargo run --example gallery -- [viewport_width] [naive|justified]
//! ```

use std::sync::Arc;

use masonry_rows::logging::{LogEvent, LogSink, LoggingResult};
use masonry_rows::{Item, LayoutConfig, LogLevel, Logger, MasonryEngine, Placement, Rect, Strategy};
use serde::Serialize;

/// Source photo dimensions, normalized to 300px wide thumbnails.
const PHOTOS: [(&str, f64, f64); 20] = [
    ("image-1767112234730_xoehkl.jpg", 2500.0, 1667.0),
    ("image-1767113275676_oe1xni.jpg", 2448.0, 3264.0),
    ("image-1767112236866_xmhtsr.jpg", 2500.0, 1667.0),
    ("image-1767112438435_gebcr5.jpg", 4434.0, 3729.0),
    ("image-1767112450944_o28d6i.jpg", 4000.0, 2670.0),
    ("image-1767112433651_lv7rgh.jpg", 2500.0, 1667.0),
    ("image-1767109525282_krfx4s.jpg", 2500.0, 1667.0),
    ("image-1767112447354_kgf6er.jpg", 4928.0, 3264.0),
    ("image-1767109129557_nmnivi.jpg", 2500.0, 1667.0),
    ("image-1767109523712_gkj21w.jpg", 2500.0, 1667.0),
    ("image-1767112227934_h8wjsw.jpg", 2500.0, 1667.0),
    ("image-1767112440868_fvbbqj.jpg", 3264.0, 1836.0),
    ("image-1767109489417_vqoumo.jpg", 2500.0, 1667.0),
    ("image-1767109521752_lp4fr4.jpg", 2500.0, 1667.0),
    ("image-1767112230503_xh8a6p.jpg", 2500.0, 1667.0),
    ("image-1767113096803_cjb3fd.jpg", 3264.0, 2448.0),
    ("image-1767113093689_h9zqpv.jpg", 1280.0, 831.0),
    ("image-1767113091714_gl2xoj.jpg", 2500.0, 1667.0),
    ("image-1767113173570_vgrj0o.jpg", 4608.0, 3072.0),
    ("image-1767113278265_xn0hun.jpg", 1280.0, 853.0),
];

struct StderrSink;

impl LogSink for StderrSink {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        eprintln!("{}", serde_json::to_string(event)?);
        Ok(())
    }
}

#[derive(Serialize)]
struct Tile<'a> {
    file: &'a str,
    placement: &'a Placement,
    content: Rect,
}

#[derive(Serialize)]
struct Output<'a> {
    strategy: Strategy,
    viewport_width: f64,
    total_height: f64,
    row_count: usize,
    tiles: Vec<Tile<'a>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let viewport_width: f64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 1024.0,
    };
    let strategy = match args.next().as_deref() {
        Some("naive") => Strategy::Naive,
        _ => Strategy::Justified,
    };

    let items: Vec<Item<&str>> = PHOTOS
        .iter()
        .map(|&(file, w, h)| Item::with_payload(300.0, 300.0 * h / w, file))
        .collect();

    let engine = MasonryEngine::new(
        LayoutConfig::default()
            .with_strategy(strategy)
            .with_target_height(200.0),
    )?
    .with_logger(Logger::from_arc(Arc::new(StderrSink)).with_min_level(LogLevel::Debug))
    .with_metrics();

    let result = engine.layout(viewport_width, &items)?;
    let content = engine.content_rects(&result);

    let tiles = result
        .pair_with(&items)
        .zip(content)
        .map(|((item, placement), content)| Tile {
            file: item.payload,
            placement,
            content,
        })
        .collect();

    let output = Output {
        strategy,
        viewport_width,
        total_height: result.total_height,
        row_count: result.row_count,
        tiles,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    engine.emit_metrics();
    Ok(())
}
