//! # Iconset Icons
//!
//! Generated icon renderers. Each icon pairs a fixed [`Glyph`] with the
//! shared [`IconRenderParams`] contract from `iconset-core`.

pub mod filters_platform;

pub use filters_platform::{filters_platform, FILTERS_PLATFORM};
pub use iconset_core::{Dimension, Glyph, IconRenderParams, SvgNode};
