//! Command-line surface for the copybook layout engine.
//!
//! Reads input text, runs normalization and layout, and prints each page as
//! either an ASCII cell map or one JSON object per line. This is a debug and
//! scripting surface; drawing real sheets is left to renderer integrations.
//!
//! Usage:
//!   copybook [OPTIONS] --text <TEXT>
//!   copybook [OPTIONS] --input <FILE>

use std::path::PathBuf;
use std::process::ExitCode;

use copybook::{
    normalize, CellKind, HandMode, LayoutConfig, LayoutEngine, NoStrokes, NormalizeOptions,
    PageGrid, PracticeMode, RestFillMode, StrokeData, StrokeLookup,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn hand_mode_from_str(s: &str) -> Option<HandMode> {
    match s {
        "left" => Some(HandMode::Left),
        "right" => Some(HandMode::Right),
        _ => None,
    }
}

fn practice_mode_from_str(s: &str) -> Option<PracticeMode> {
    match s {
        "full-trace" => Some(PracticeMode::FullTrace),
        "half-trace" => Some(PracticeMode::HalfTrace),
        "copy-only" => Some(PracticeMode::CopyOnly),
        "stroke-order" => Some(PracticeMode::StrokeOrder),
        _ => None,
    }
}

fn rest_fill_from_str(s: &str) -> Option<RestFillMode> {
    match s {
        "trace" => Some(RestFillMode::Trace),
        "empty" => Some(RestFillMode::Empty),
        _ => None,
    }
}

struct CliOptions {
    cfg: LayoutConfig,
    fill_single_page: bool,
    strokes_path: Option<PathBuf>,
    text: Option<String>,
    input: Option<PathBuf>,
    format: OutputFormat,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            cfg: LayoutConfig::default(),
            fill_single_page: false,
            strokes_path: None,
            text: None,
            input: None,
            format: OutputFormat::Text,
        }
    }
}

fn print_usage() {
    eprintln!("copybook - practice-sheet grid layout");
    eprintln!();
    eprintln!("Usage: copybook [OPTIONS] --text <TEXT>");
    eprintln!("       copybook [OPTIONS] --input <FILE>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --text <TEXT>        input characters ('#' forces a blank row)");
    eprintln!("  --input <FILE>       read input characters from a file");
    eprintln!("  --rows <N>           grid rows per page (default 15)");
    eprintln!("  --cols <N>           grid columns per page (default 12)");
    eprintln!("  --hand left|right    writing direction (default right)");
    eprintln!("  --mode full-trace|half-trace|copy-only|stroke-order");
    eprintln!("  --rest-fill trace|empty   fill after a stroke sequence (default trace)");
    eprintln!("  --multipage          emit pages until the input drains");
    eprintln!("  --fill-page          repeat short input to fill a single page");
    eprintln!("  --strokes <FILE>     JSON-lines stroke table for stroke-order mode");
    eprintln!("  --format text|json   output format (default text)");
    eprintln!("  --help               show this help");
    eprintln!();
    eprintln!("Text output cells: the character itself for a template, step digit");
    eprintln!("(index mod 10) for a stroke step, '~' trace, '_' empty box, '.' blank.");
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value_for = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--text" => opts.text = Some(value_for("--text")?),
            "--input" => opts.input = Some(PathBuf::from(value_for("--input")?)),
            "--rows" => {
                opts.cfg.rows = value_for("--rows")?
                    .parse()
                    .map_err(|_| "--rows expects a positive integer".to_string())?;
            }
            "--cols" => {
                opts.cfg.cols = value_for("--cols")?
                    .parse()
                    .map_err(|_| "--cols expects a positive integer".to_string())?;
            }
            "--hand" => {
                let value = value_for("--hand")?;
                opts.cfg.hand_mode = hand_mode_from_str(&value)
                    .ok_or_else(|| format!("unknown hand mode: {}", value))?;
            }
            "--mode" => {
                let value = value_for("--mode")?;
                opts.cfg.practice_mode = practice_mode_from_str(&value)
                    .ok_or_else(|| format!("unknown practice mode: {}", value))?;
            }
            "--rest-fill" => {
                let value = value_for("--rest-fill")?;
                opts.cfg.rest_fill = rest_fill_from_str(&value)
                    .ok_or_else(|| format!("unknown rest-fill mode: {}", value))?;
            }
            "--multipage" => opts.cfg.multipage = true,
            "--fill-page" => opts.fill_single_page = true,
            "--strokes" => opts.strokes_path = Some(PathBuf::from(value_for("--strokes")?)),
            "--format" => {
                let value = value_for("--format")?;
                opts.format = OutputFormat::from_str(&value)
                    .ok_or_else(|| format!("unknown output format: {}", value))?;
            }
            "--help" | "-h" => return Err(String::new()),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(opts)
}

fn cell_glyph(cell: Option<&copybook::CellAssignment>) -> String {
    match cell {
        None => ".".to_string(),
        Some(cell) => match cell.kind {
            CellKind::Template => cell.character.to_string(),
            CellKind::Step => cell
                .step_index
                .map(|index| (index % 10).to_string())
                .unwrap_or_else(|| "?".to_string()),
            CellKind::Trace => "~".to_string(),
            CellKind::Empty => "_".to_string(),
        },
    }
}

fn print_page_text(page: &PageGrid) {
    println!("--- page {} ---", page.page_number());
    for row in page.iter_rows() {
        let line: Vec<String> = row.iter().map(|cell| cell_glyph(cell.as_ref())).collect();
        println!("{}", line.join(" "));
    }
}

fn run_layout<S: StrokeLookup>(
    opts: &CliOptions,
    text: &str,
    strokes: &S,
) -> Result<(), String> {
    let queue = normalize(
        text,
        opts.cfg.rows,
        &NormalizeOptions {
            multipage: opts.cfg.multipage,
            fill_single_page: opts.fill_single_page,
            ..NormalizeOptions::default()
        },
    );
    let engine = LayoutEngine::new(opts.cfg);
    let pages = engine.pages(queue, strokes).map_err(|e| e.to_string())?;
    for page in pages {
        match opts.format {
            OutputFormat::Text => print_page_text(&page),
            OutputFormat::Json => {
                let line = serde_json::to_string(&page).map_err(|e| e.to_string())?;
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn run(opts: &CliOptions) -> Result<(), String> {
    let text = match (&opts.text, &opts.input) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?,
        (Some(_), Some(_)) => return Err("--text and --input are mutually exclusive".to_string()),
        (None, None) => return Err("one of --text or --input is required".to_string()),
    };

    match &opts.strokes_path {
        Some(path) => {
            let strokes = StrokeData::load(path)
                .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
            run_layout(opts, &text, &strokes)
        }
        None => run_layout(opts, &text, &NoStrokes),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
                eprintln!();
            }
            print_usage();
            return if message.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            };
        }
    };
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
