//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PositionRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface here, but [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them since observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write one snapshot: a row per boid, all with the same tick.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
