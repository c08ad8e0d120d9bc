//! Deterministic grid layout and pagination for handwriting practice sheets.
//!
//! A practice sheet ("copybook") is a fixed grid of square cells. Each row
//! teaches one character: a template cell holds the model character and the
//! remaining cells hold faint trace copies, empty practice boxes, or the
//! successive steps of a stroke-order decomposition. This crate turns raw
//! input text into a queue of layout tokens and drains that queue into one
//! [`PageGrid`] per page. It emits an abstract grid only: drawing glyphs,
//! ruling lines, and page furniture is the job of an external renderer that
//! consumes each page as it is produced.
//!
//! # Usage
//!
//! ```rust
//! use copybook::{normalize, LayoutConfig, LayoutEngine, NormalizeOptions, NoStrokes};
//!
//! # fn example() -> Result<(), copybook::LayoutError> {
//! let cfg = LayoutConfig {
//!     rows: 10,
//!     cols: 8,
//!     ..LayoutConfig::default()
//! };
//! let queue = normalize("永字八法", cfg.rows, &NormalizeOptions::default());
//! let engine = LayoutEngine::new(cfg);
//! for page in engine.pages(queue, NoStrokes)? {
//!     // hand the page to a renderer
//!     let _ = page.page_number();
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod layout;
pub mod queue;
pub mod strokes;

pub use error::LayoutError;
pub use grid::{CellAssignment, CellKind, PageGrid};
pub use layout::{HandMode, LayoutConfig, LayoutEngine, PageIter, PracticeMode, RestFillMode};
pub use queue::{normalize, NormalizeOptions, Token, TokenQueue, BLANK_ROW_MARKER};
pub use strokes::{NoStrokes, StrokeLookup};
#[cfg(feature = "std")]
pub use strokes::{StrokeData, StrokeDataError, StrokeDataLimits};
