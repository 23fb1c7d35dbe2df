//! Text layout for watermark labels.
//!
//! Labels are blocks of pre-wrapped rows, left aligned at a fixed horizontal offset,
//! with baselines spaced evenly down the label. The interesting part is choosing the
//! font size: [`fit`](crate::layout::fit) picks the largest size (up to a cap) at which
//! every row fits the label's width and all rows together fit its height.
//!
//! # Example
//!
//! ```
//! use text_watermark::layout::{fit, FitParameters, Offsets};
//! use text_watermark::{Font, Pt};
//!
//! let bytes = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf"))
//!     .expect("can read font");
//! let font = Font::load(bytes).expect("can load font");
//!
//! let params = FitParameters {
//!     box_width: 400,
//!     box_height: 100,
//!     row_spacing: 1.5,
//!     dpi: 100.0,
//!     max_size: Pt(200.0),
//!     offsets: Offsets::empty(),
//! };
//! let size = fit(&["Copy certified", "12:44 12.12.2021"], &font, &params);
//! assert!(size > Pt(0.0) && size <= Pt(200.0));
//! ```

mod fit;
mod offsets;
mod text;

pub use fit::*;
pub use offsets::*;
pub use text::*;
