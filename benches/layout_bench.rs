//! Layout throughput bench for the page engine.
//!
//! Hand-rolled timing harness (no criterion): builds a large token queue per
//! mode, lays it out repeatedly, and reports pages/s and time per page.
//!
//! Run with: cargo bench --bench layout_bench

use std::hint::black_box;
use std::time::Instant;

use copybook::{
    normalize, LayoutConfig, LayoutEngine, NormalizeOptions, PracticeMode, StrokeData,
    StrokeLookup, TokenQueue,
};

const ITERATIONS: usize = 200;
const INPUT_CHARS: usize = 4096;

fn build_input() -> String {
    // Cycle a small repertoire with an occasional forced blank row.
    let repertoire = ['永', '字', '八', '法', '点', '横', '竖', '撇'];
    let mut text = String::with_capacity(INPUT_CHARS * 3);
    for i in 0..INPUT_CHARS {
        if i % 97 == 96 {
            text.push('#');
        } else {
            text.push(repertoire[i % repertoire.len()]);
        }
    }
    text
}

fn build_strokes() -> StrokeData {
    // Synthetic table: stroke counts in a realistic 4..=12 band.
    let mut table = String::new();
    let repertoire = ['永', '字', '八', '法', '点', '横', '竖', '撇'];
    for (i, ch) in repertoire.iter().enumerate() {
        let count = 4 + (i % 9);
        let strokes: Vec<String> = (0..count).map(|s| format!("\"M {}\"", s)).collect();
        table.push_str(&format!(
            "{{\"character\": \"{}\", \"strokes\": [{}]}}\n",
            ch,
            strokes.join(", ")
        ));
    }
    StrokeData::parse_str(&table).expect("synthetic stroke table should parse")
}

fn bench_mode<S: StrokeLookup>(name: &str, cfg: LayoutConfig, queue: &TokenQueue, strokes: &S) {
    let engine = LayoutEngine::new(cfg);

    // Warmup pass also tells us the page count per iteration.
    let pages_per_iter = engine
        .layout_queue(&mut queue.clone(), strokes)
        .expect("bench config should validate")
        .len();

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let pages = engine
            .layout_queue(&mut queue.clone(), strokes)
            .expect("bench config should validate");
        black_box(pages);
    }
    let elapsed = start.elapsed();

    let total_pages = pages_per_iter * ITERATIONS;
    let pages_per_sec = total_pages as f64 / elapsed.as_secs_f64();
    let micros_per_page = elapsed.as_micros() as f64 / total_pages as f64;
    println!(
        "{:<14} {:>5} pages/iter  {:>12.0} pages/s  {:>8.2} us/page",
        name, pages_per_iter, pages_per_sec, micros_per_page
    );
}

fn main() {
    let text = build_input();
    let strokes = build_strokes();
    let cfg = LayoutConfig {
        multipage: true,
        ..LayoutConfig::default()
    };
    let queue = normalize(
        &text,
        cfg.rows,
        &NormalizeOptions {
            multipage: true,
            ..NormalizeOptions::default()
        },
    );

    println!(
        "layout bench: {} input tokens, {}x{} grid, {} iterations",
        queue.remaining(),
        cfg.rows,
        cfg.cols,
        ITERATIONS
    );

    for (name, mode) in [
        ("full-trace", PracticeMode::FullTrace),
        ("half-trace", PracticeMode::HalfTrace),
        ("copy-only", PracticeMode::CopyOnly),
        ("stroke-order", PracticeMode::StrokeOrder),
    ] {
        let cfg = LayoutConfig {
            practice_mode: mode,
            ..cfg
        };
        bench_mode(name, cfg, &queue, &strokes);
    }
}
