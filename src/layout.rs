//! Page layout engine: drains the token queue into practice-page grids.
//!
//! One page is built eagerly at a time. Rows fill top to bottom; each
//! character consumes one row in the simple practice modes or a wrapped run
//! of step cells in stroke-decomposition mode. A run emits pages until the
//! queue is empty, or exactly one page when `multipage` is off. Layout is
//! pure computation: the same queue, config, and stroke lookup always yield
//! the same page sequence.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::grid::{CellAssignment, PageGrid};
use crate::queue::{Token, TokenQueue};
use crate::strokes::StrokeLookup;

/// Writing direction: which grid edge holds the template column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandMode {
    /// Left-handed writing, right to left; template in the last column.
    Left,
    /// Right-handed writing, left to right; template in column 0.
    #[default]
    Right,
}

impl HandMode {
    fn template_col(self, cols: usize) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => cols - 1,
        }
    }

    fn step(self) -> isize {
        match self {
            Self::Right => 1,
            Self::Left => -1,
        }
    }

    fn wrap_col(self, cols: usize) -> isize {
        match self {
            Self::Right => 0,
            Self::Left => cols as isize - 1,
        }
    }
}

/// How practice cells next to the template are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    /// Every practice cell is a trace copy.
    #[default]
    FullTrace,
    /// Practice cells near the template are traces, the far half are empty.
    HalfTrace,
    /// Every practice cell is an empty box.
    CopyOnly,
    /// Practice cells show the stroke-order decomposition step by step.
    StrokeOrder,
}

/// Fill for the cells left over after a stroke sequence ends mid-row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestFillMode {
    /// Remaining cells become trace copies.
    #[default]
    Trace,
    /// Remaining cells become empty practice boxes.
    Empty,
}

/// Layout configuration for one generation run.
///
/// Immutable for the whole run: every page shares the same grid shape and
/// placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Grid rows per page.
    pub rows: usize,
    /// Grid columns per page.
    pub cols: usize,
    /// Writing direction.
    pub hand_mode: HandMode,
    /// Practice-cell strategy.
    pub practice_mode: PracticeMode,
    /// Fill for leftover cells after a completed stroke sequence.
    pub rest_fill: RestFillMode,
    /// Emit pages until the queue drains instead of stopping after one.
    pub multipage: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 12,
            hand_mode: HandMode::Right,
            practice_mode: PracticeMode::FullTrace,
            rest_fill: RestFillMode::Trace,
            multipage: false,
        }
    }
}

impl LayoutConfig {
    /// Reject unusable grid shapes before any page is built.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LayoutError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Deterministic layout engine that emits page grids.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
}

impl LayoutEngine {
    /// Create a layout engine.
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg }
    }

    /// Configuration for this engine.
    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// Drain `queue` into a collected page list.
    ///
    /// In single-page runs, tokens beyond the first page are not consumed;
    /// they stay in the queue for the caller to inspect or drop.
    pub fn layout_queue<S: StrokeLookup>(
        &self,
        queue: &mut TokenQueue,
        strokes: &S,
    ) -> Result<Vec<PageGrid>, LayoutError> {
        let mut pages = Vec::with_capacity(2);
        self.layout_with(queue, strokes, |page| pages.push(page))?;
        Ok(pages)
    }

    /// Drain `queue` and stream each page to a callback.
    pub fn layout_with<S, F>(
        &self,
        queue: &mut TokenQueue,
        strokes: &S,
        mut on_page: F,
    ) -> Result<(), LayoutError>
    where
        S: StrokeLookup,
        F: FnMut(PageGrid),
    {
        self.cfg.validate()?;
        let mut page_number = 1;
        loop {
            on_page(self.build_page(queue, strokes, page_number));
            page_number += 1;
            if queue.is_empty() {
                return Ok(());
            }
            if !self.cfg.multipage {
                log::warn!(
                    "single-page run complete with {} unplaced tokens",
                    queue.remaining()
                );
                return Ok(());
            }
        }
    }

    /// Lazy page sequence over an owned queue.
    ///
    /// Pages are built one at a time as the iterator is pulled; dropping the
    /// iterator abandons the run with no cleanup obligations. The sequence is
    /// finite (a non-empty multipage step always consumes at least one token)
    /// and always yields at least one page, even for an empty queue.
    pub fn pages<S: StrokeLookup>(
        &self,
        queue: TokenQueue,
        strokes: S,
    ) -> Result<PageIter<S>, LayoutError> {
        self.cfg.validate()?;
        Ok(PageIter {
            cfg: self.cfg,
            queue,
            strokes,
            next_page_number: 1,
            finished: false,
        })
    }

    /// Normalize `text` and lay it out in one call.
    ///
    /// Uses this engine's `rows` and `multipage` settings for normalization;
    /// `fill_single_page` controls short-input repetition on single pages.
    pub fn layout_text<S: StrokeLookup>(
        &self,
        text: &str,
        fill_single_page: bool,
        strokes: &S,
    ) -> Result<Vec<PageGrid>, LayoutError> {
        self.cfg.validate()?;
        let opts = crate::queue::NormalizeOptions {
            multipage: self.cfg.multipage,
            fill_single_page,
            ..crate::queue::NormalizeOptions::default()
        };
        let mut queue = crate::queue::normalize(text, self.cfg.rows, &opts);
        self.layout_queue(&mut queue, strokes)
    }

    fn build_page<S: StrokeLookup>(
        &self,
        queue: &mut TokenQueue,
        strokes: &S,
        page_number: usize,
    ) -> PageGrid {
        let mut grid = PageGrid::new(page_number, self.cfg.rows, self.cfg.cols);
        let mut current_row = 0;
        while current_row < self.cfg.rows {
            let Some(token) = queue.front() else {
                break;
            };
            queue.pop_front();
            match token {
                Token::BlankRow => {
                    current_row += 1;
                }
                Token::Character(ch) => {
                    current_row = match self.cfg.practice_mode {
                        PracticeMode::StrokeOrder => self.place_stroke_sequence(
                            &mut grid,
                            current_row,
                            ch,
                            strokes.stroke_count(ch),
                        ),
                        _ => {
                            self.place_practice_row(&mut grid, current_row, ch);
                            current_row + 1
                        }
                    };
                }
            }
        }
        grid
    }

    /// Simple practice row: template at the hand edge, the other columns
    /// filled by practice mode. Consumes exactly one row.
    fn place_practice_row(&self, grid: &mut PageGrid, row: usize, ch: char) {
        let cols = self.cfg.cols;
        let template_col = self.cfg.hand_mode.template_col(cols);
        grid.set(row, template_col, CellAssignment::template(ch));

        let empty_from = (cols - 1) / 2;
        for col in 0..cols {
            if col == template_col {
                continue;
            }
            let distance = col.abs_diff(template_col) - 1;
            let cell = match self.cfg.practice_mode {
                PracticeMode::HalfTrace if distance >= empty_from => CellAssignment::empty(ch),
                PracticeMode::HalfTrace => CellAssignment::trace(ch),
                PracticeMode::CopyOnly => CellAssignment::empty(ch),
                PracticeMode::FullTrace | PracticeMode::StrokeOrder => CellAssignment::trace(ch),
            };
            grid.set(row, col, cell);
        }
    }

    /// Stroke decomposition: template at the hand edge, then one step cell
    /// per stroke, wrapping onto later rows. Returns the next unused row.
    ///
    /// A sequence that runs past the last row is truncated on this page; the
    /// unplaced steps are dropped rather than re-laid on a fresh page.
    /// Callers needing every step on one page must check the stroke count
    /// against the remaining rows before queueing the character.
    fn place_stroke_sequence(
        &self,
        grid: &mut PageGrid,
        start_row: usize,
        ch: char,
        total_strokes: usize,
    ) -> usize {
        let rows = self.cfg.rows;
        let cols = self.cfg.cols;
        let template_col = self.cfg.hand_mode.template_col(cols);
        grid.set(start_row, template_col, CellAssignment::template(ch));

        let step = self.cfg.hand_mode.step();
        let mut write_row = start_row;
        let mut write_col = template_col as isize + step;
        let mut truncated = false;

        for step_index in 0..total_strokes {
            if write_col < 0 || write_col >= cols as isize {
                write_row += 1;
                write_col = self.cfg.hand_mode.wrap_col(cols);
            }
            if write_row >= rows {
                truncated = true;
                log::warn!(
                    "stroke sequence for {:?} truncated at step {} of {}: page is full",
                    ch,
                    step_index,
                    total_strokes
                );
                break;
            }
            grid.set(write_row, write_col as usize, CellAssignment::step(ch, step_index));
            write_col += step;
        }

        if !truncated && write_row < rows {
            while write_col >= 0 && write_col < cols as isize {
                let cell = match self.cfg.rest_fill {
                    RestFillMode::Trace => CellAssignment::trace(ch),
                    RestFillMode::Empty => CellAssignment::empty(ch),
                };
                grid.set(write_row, write_col as usize, cell);
                write_col += step;
            }
        }

        write_row + 1
    }
}

/// Lazy, finite page sequence produced by [`LayoutEngine::pages`].
#[derive(Clone, Debug)]
pub struct PageIter<S> {
    cfg: LayoutConfig,
    queue: TokenQueue,
    strokes: S,
    next_page_number: usize,
    finished: bool,
}

impl<S> PageIter<S> {
    /// Tokens not yet consumed by emitted pages.
    pub fn remaining_tokens(&self) -> usize {
        self.queue.remaining()
    }
}

impl<S: StrokeLookup> Iterator for PageIter<S> {
    type Item = PageGrid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let engine = LayoutEngine::new(self.cfg);
        let page = engine.build_page(&mut self.queue, &self.strokes, self.next_page_number);
        self.next_page_number += 1;
        if self.queue.is_empty() {
            self.finished = true;
        } else if !self.cfg.multipage {
            log::warn!(
                "single-page run complete with {} unplaced tokens",
                self.queue.remaining()
            );
            self.finished = true;
        }
        Some(page)
    }
}
