//! Text normalization shared by extraction and the comparison engine.
//!
//! Every line and word comparison operates on [`normalize`]d text, while the
//! original text is kept around for display. [`is_numeric_noise`] and
//! [`split_into_lines`] are used by the extractors to decide what reaches the
//! engine in the first place.

mod normalize;
mod split;

pub use normalize::{is_numeric_noise, normalize};
pub use split::split_into_lines;
