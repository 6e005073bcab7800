//! Growable polyline shapes: point normalization, attribute-table
//! resampling and incremental merge.
//!
//! A shape is an ordered run of 3D points where every point carries a width
//! pair (upper and lower half-width) and optionally a color. Callers rarely
//! supply exactly one attribute entry per point, so the resamplers in
//! [`widths`] and [`colors`] stretch or truncate the supplied tables to the
//! point count under a caller-selected distribution policy. [`builder`]
//! orchestrates the two modes of shape construction: creating fresh state
//! and extending existing state with a new batch of points.

mod builder;
mod colors;
mod points;
mod state;
mod widths;

pub use builder::{ShapeBuilder, ShapeOptions};
pub use colors::{ColorDistribution, resample_colors};
pub use points::{PointInput, normalize_points};
pub use state::ShapeState;
pub use widths::{WidthDistribution, resample_widths};

/// One RGB color entry, one per point.
pub type Color = [f64; 3];

/// Fill value for the upper half-width when a width table runs short.
pub const DEFAULT_WIDTH_UPPER: f64 = 1.0;
/// Fill value for the lower half-width when a width table runs short.
pub const DEFAULT_WIDTH_LOWER: f64 = 1.0;
/// Fill value for color tables that run short.
pub const DEFAULT_COLOR: Color = [1.0, 1.0, 1.0];

/// Faults reported by the engine facade. The resamplers themselves never
/// fail; undersized tables under the `None` policy are returned short, not
/// reported (callers check lengths).
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// An extend call referenced a shape id the engine does not hold.
    #[error("unknown shape instance {id}")]
    UnknownShape { id: u32 },
    /// The build options could not be deserialized.
    #[error("invalid shape options: {0}")]
    InvalidOptions(String),
}
