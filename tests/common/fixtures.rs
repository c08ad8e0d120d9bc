//! Shared fixtures for integration tests.

use std::collections::BTreeMap;

use copybook::{LayoutConfig, StrokeLookup};

/// Fixed stroke table for tests; identifiers are synthetic path stubs.
pub struct FixedStrokes(BTreeMap<char, Box<[Box<str>]>>);

impl FixedStrokes {
    pub fn new(counts: &[(char, usize)]) -> Self {
        let mut map = BTreeMap::new();
        for &(ch, count) in counts {
            let strokes: Box<[Box<str>]> = (0..count)
                .map(|i| format!("M {}", i).into_boxed_str())
                .collect();
            map.insert(ch, strokes);
        }
        Self(map)
    }
}

impl StrokeLookup for FixedStrokes {
    fn strokes(&self, character: char) -> Option<&[Box<str>]> {
        self.0.get(&character).map(|s| &**s)
    }
}

/// Grid of the given shape with the rest of the config at defaults.
pub fn grid(rows: usize, cols: usize) -> LayoutConfig {
    LayoutConfig {
        rows,
        cols,
        ..LayoutConfig::default()
    }
}
