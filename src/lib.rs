mod colour;
pub use colour::*;

mod composite;
pub use composite::*;

mod encode;
pub use encode::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod label;
pub use label::*;

/// Font-size fitting and row placement for labels
pub mod layout;

mod options;
pub use options::*;

mod units;
pub use units::*;

mod watermark;
pub use watermark::*;

/// Re-export the image crate, whose buffers and errors appear throughout the API
pub use image;
