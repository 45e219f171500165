//! # Iconset Core
//!
//! Shared building blocks for the generated iconset icons: the optional
//! render parameters every icon accepts, the pre-authored glyph model, and the
//! SVG output node that icons produce.
//!
//! Rendering is a pure function from [`IconRenderParams`] to [`SvgNode`]. The
//! only fallible operations live at the edges (parsing view boxes and JSON
//! configuration) and report [`IconError`].

pub mod error;
pub mod geometry;
pub mod glyph;
pub mod params;
pub mod svg;

pub use error::IconError;
pub use geometry::ViewBox;
pub use glyph::Glyph;
pub use params::{Dimension, IconRenderParams, ResolvedParams, DEFAULT_SIZE};
pub use svg::{SvgNode, SvgPath};
