//! Parallel adjustment using Rayon.
//!
//! The buffer is split into blocks of whole rows and each block is
//! adjusted on a worker thread. Pixels are independent, so the output is
//! identical to [`crate::adjust::apply_inplace`] for any block size.
//!
//! # Example
//!
//! ```rust
//! use pixtone_ops::adjust::Adjustments;
//! use pixtone_ops::parallel;
//!
//! let mut pixels = vec![100u8; 1920 * 1080 * 4];
//! parallel::apply_inplace(&mut pixels, 1920, 1080, &Adjustments::new(30, 120, 10)).unwrap();
//! ```

use pixtone_core::{RasterBuffer, Result, pixel, validate_shape};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::adjust::{AdjustPlan, Adjustments};

/// Default number of rows per Rayon task.
pub const DEFAULT_ROWS_PER_TASK: usize = 16;

/// Partitioning for the parallel engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Rows handed to one task. 0 is treated as 1.
    pub rows_per_task: usize,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            rows_per_task: DEFAULT_ROWS_PER_TASK,
        }
    }
}

/// Parallel in-place adjustment with default partitioning.
///
/// # Errors
///
/// [`pixtone_core::Error::ShapeMismatch`] if the buffer does not match
/// `width x height`; the buffer is not touched.
pub fn apply_inplace(data: &mut [u8], width: u32, height: u32, adj: &Adjustments) -> Result<()> {
    apply_inplace_with(data, width, height, adj, ParallelOptions::default())
}

/// Parallel in-place adjustment with explicit partitioning.
pub fn apply_inplace_with(
    data: &mut [u8],
    width: u32,
    height: u32,
    adj: &Adjustments,
    options: ParallelOptions,
) -> Result<()> {
    trace!(
        width,
        height,
        rows_per_task = options.rows_per_task,
        "parallel::apply_inplace"
    );
    validate_shape(data.len(), width, height)?;

    let plan = AdjustPlan::new(adj);
    if plan.is_identity() {
        debug!("identity adjustments, leaving buffer unchanged");
        return Ok(());
    }
    run(&plan, data, width, options);
    Ok(())
}

/// Returns an adjusted copy of `src`, processed in parallel.
pub fn apply(src: &RasterBuffer, adj: &Adjustments) -> RasterBuffer {
    let plan = AdjustPlan::new(adj);
    let mut out = src.clone();
    if !plan.is_identity() {
        let width = out.width();
        run(&plan, out.data_mut(), width, ParallelOptions::default());
    }
    out
}

fn run(plan: &AdjustPlan, data: &mut [u8], width: u32, options: ParallelOptions) {
    let block = pixel::row_len(width) * options.rows_per_task.max(1);
    data.par_chunks_mut(block).for_each(|rows| plan.apply_slice(rows));
}
