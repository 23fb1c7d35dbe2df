use super::{widest_row, Offsets};
use crate::error::ensure_positive;
use crate::font::GlyphMetrics;
use crate::units::Pt;
use crate::WatermarkError;

/// The first size tried by the width search
pub const SEED_SIZE: Pt = Pt(4.0);

/// Each width-search step grows the candidate by this fraction of itself
pub const STEP_RATIO: f64 = 0.05;

/// The smallest size the width search can produce (one step back from the seed).
/// Degenerate boxes fall back to this size.
pub const MIN_SIZE: Pt = Pt(SEED_SIZE.0 - SEED_SIZE.0 * STEP_RATIO);

/// Everything that constrains the font size of a label besides its text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitParameters {
    /// Label width in pixels
    pub box_width: u32,
    /// Label height in pixels
    pub box_height: u32,
    /// Baseline-to-baseline distance as a multiple of the font's pixel size
    pub row_spacing: f64,
    pub dpi: f64,
    /// Upper bound on the fitted size
    pub max_size: Pt,
    /// `horizontal` is kept clear on both the left and the right; `vertical` is
    /// taken off the height once
    pub offsets: Offsets,
}

impl FitParameters {
    /// Check that spacing, DPI and the size cap are finite and strictly positive
    pub fn validate(&self) -> Result<(), WatermarkError> {
        ensure_positive("row_spacing", self.row_spacing)?;
        ensure_positive("dpi", self.dpi)?;
        ensure_positive("max_font_size", self.max_size.0)
    }

    /// Width left for the widest row, in pixels. Negative if the margins eat the box.
    pub fn available_width(&self) -> i64 {
        i64::from(self.box_width) - 2 * i64::from(self.offsets.horizontal)
    }

    /// Height shared by all rows, in pixels
    pub fn available_height(&self) -> f64 {
        f64::from(self.box_height) - f64::from(self.offsets.vertical)
    }
}

/// Find the largest font size, up to `params.max_size`, at which every row fits the
/// box width and all rows together fit the box height.
///
/// The result is always strictly positive and never above the cap: an empty block is
/// only bounded by the cap, while boxes too small for any text fall back to
/// [MIN_SIZE] (or the cap, if that is smaller).
pub fn fit<M: GlyphMetrics, S: AsRef<str>>(rows: &[S], metrics: &M, params: &FitParameters) -> Pt {
    let by_width = fit_by_width(rows, metrics, params);
    let by_height = fit_by_height(rows.len(), params);

    let size = by_width.min(by_height).min(params.max_size);
    let size = if size.0 > 0.0 {
        size
    } else {
        MIN_SIZE.min(params.max_size)
    };

    log::debug!(
        "fitted {} rows into {}x{}px: {size} (width allows {by_width}, height allows {by_height})",
        rows.len(),
        params.box_width,
        params.box_height,
    );
    size
}

/// Grow the font size geometrically from [SEED_SIZE] until the widest row overflows
/// the available width or the size passes the cap.
///
/// On overflow the size one step back is returned without measuring it again, so the
/// result can undershoot the true maximum by up to one step. Each step is
/// [STEP_RATIO] of the current candidate, which makes the exact sequence of candidates
/// (and therefore the result) part of the contract.
pub fn fit_by_width<M: GlyphMetrics, S: AsRef<str>>(
    rows: &[S],
    metrics: &M,
    params: &FitParameters,
) -> Pt {
    let available = params.available_width();

    let mut candidate = SEED_SIZE;
    for _ in 0..width_search_bound(params.max_size) {
        let step = candidate * STEP_RATIO;
        let widest = widest_row(rows, &metrics.face(candidate, params.dpi));
        log::trace!("width search: {candidate} has widest row {widest}px of {available}px");

        if widest > available {
            return candidate - step;
        }
        if candidate > params.max_size {
            return params.max_size;
        }
        candidate += step;
    }

    params.max_size
}

/// Candidates grow by a factor of `1 + STEP_RATIO` per iteration, so the cap is passed
/// after about `log(max / seed) / log(1 + STEP_RATIO)` iterations. Finite caps give a
/// finite bound; even `f64::MAX` needs fewer than 15,000 iterations.
fn width_search_bound(max_size: Pt) -> usize {
    let growth = (max_size.0 / SEED_SIZE.0).ln() / (1.0 + STEP_RATIO).ln();
    growth.max(0.0).ceil() as usize + 2
}

/// The size at which `row_count` rows exactly share the available height. Without rows
/// the height puts no bound on the size at all.
pub fn fit_by_height(row_count: usize, params: &FitParameters) -> Pt {
    if row_count == 0 {
        return Pt(f64::INFINITY);
    }

    let row_px = params.available_height() / row_count as f64 / params.row_spacing;
    Pt::from_px(row_px, params.dpi)
}
