//! Backend-agnostic page grid handed to renderers.
//!
//! A [`PageGrid`] is a `rows x cols` matrix of optional [`CellAssignment`]s
//! for exactly one page. The layout engine owns the grid while it is being
//! filled; once emitted it is immutable and the renderer maps each populated
//! cell to drawn output.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// What a populated cell asks the renderer to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// The model character shown once per practice row.
    Template,
    /// One step of a stroke-order decomposition (strokes `0..=step_index`).
    Step,
    /// A faint copy of the character intended to be traced over.
    Trace,
    /// A blank practice box that still belongs to a character's row.
    Empty,
}

/// Content of one grid cell: the character plus how to present it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAssignment {
    /// Presentation kind for this cell.
    pub kind: CellKind,
    /// The character this cell belongs to.
    pub character: char,
    /// 0-based stroke step, present only for [`CellKind::Step`] cells and
    /// always smaller than the character's total stroke count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_index: Option<usize>,
}

impl CellAssignment {
    /// Template cell for `character`.
    pub fn template(character: char) -> Self {
        Self {
            kind: CellKind::Template,
            character,
            step_index: None,
        }
    }

    /// Stroke-step cell showing strokes `0..=step_index` of `character`.
    pub fn step(character: char, step_index: usize) -> Self {
        Self {
            kind: CellKind::Step,
            character,
            step_index: Some(step_index),
        }
    }

    /// Trace cell for `character`.
    pub fn trace(character: char) -> Self {
        Self {
            kind: CellKind::Trace,
            character,
            step_index: None,
        }
    }

    /// Empty practice box associated with `character`.
    pub fn empty(character: char) -> Self {
        Self {
            kind: CellKind::Empty,
            character,
            step_index: None,
        }
    }
}

/// A `rows x cols` matrix of optional cell assignments for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGrid {
    page_number: usize,
    rows: usize,
    cols: usize,
    cells: Vec<Option<CellAssignment>>,
}

impl PageGrid {
    pub(crate) fn new(page_number: usize, rows: usize, cols: usize) -> Self {
        Self {
            page_number,
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// 1-based page number within the run.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Row count of the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count of the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Assignment at `(row, col)`, or `None` for blank or out-of-range cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellAssignment> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    /// One full row of optional assignments.
    ///
    /// Returns an empty slice for an out-of-range row.
    pub fn row(&self, row: usize) -> &[Option<CellAssignment>] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<CellAssignment>]> {
        self.cells.chunks_exact(self.cols.max(1))
    }

    /// Iterate populated cells as `(row, col, assignment)` in row-major order.
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize, &CellAssignment)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| {
                cell.as_ref().map(|assignment| (idx / cols, idx % cols, assignment))
            })
    }

    /// True when no cell on the page holds an assignment.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, assignment: CellAssignment) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = Some(assignment);
    }
}
