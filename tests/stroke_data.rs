//! Stroke-table loading against real files on disk.

use std::io::Write;

use copybook::{StrokeData, StrokeDataLimits, StrokeLookup};

const TABLE: &str = concat!(
    r#"{"character": "永", "strokes": ["M 1", "M 2", "M 3", "M 4", "M 5"]}"#,
    "\n",
    "\n",
    "this line is not json and must be tolerated\n",
    r#"{"character": "二", "strokes": ["M 1", "M 2"]}"#,
    "\n",
);

fn write_table(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("temp file should accept writes");
    file
}

#[test]
fn load_reads_table_and_skips_dirty_lines() {
    let file = write_table(TABLE);
    let data = StrokeData::load(file.path()).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data.stroke_count('永'), 5);
    assert_eq!(data.stroke_count('二'), 2);
    assert_eq!(data.strokes('永').unwrap()[0].as_ref(), "M 1");
}

#[test]
fn load_missing_file_is_an_io_error() {
    let err = StrokeData::load("no/such/strokes.txt").unwrap_err();
    assert!(matches!(err, copybook::StrokeDataError::Io(_)));
    assert!(err.to_string().contains("stroke table read failed"));
}

#[test]
fn load_with_limits_applies_entry_cap() {
    let file = write_table(TABLE);
    let limits = StrokeDataLimits {
        max_entries: 1,
        ..StrokeDataLimits::default()
    };
    let err = StrokeData::load_with_limits(file.path(), limits).unwrap_err();
    assert!(matches!(
        err,
        copybook::StrokeDataError::TooManyEntries { actual: 2, limit: 1 }
    ));
}

#[test]
fn from_reader_matches_parse_str() {
    let from_reader = StrokeData::from_reader(TABLE.as_bytes()).unwrap();
    let from_str = StrokeData::parse_str(TABLE).unwrap();
    assert_eq!(from_reader, from_str);
}
