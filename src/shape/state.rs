//! Mutable state of a growable polyline shape.

use serde::Serialize;

use super::Color;
use crate::material::MaterialHandle;

/// The owned record of one growable shape: its points and the attribute
/// tables that were resampled against them.
///
/// The state owns its buffers exclusively. It is created once by
/// [`super::ShapeBuilder::create`], mutated in place by
/// [`super::ShapeBuilder::extend`] and dropped by the caller; there is no
/// finalization logic. The struct is not synchronized — one builder call at
/// a time per instance, by caller discipline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShapeState {
    /// Normalized point sequence.
    pub points: Vec<[f64; 3]>,
    /// Flat width table, two entries per point.
    pub widths: Vec<f64>,
    /// Color table, one entry per point. Empty when the shape was built
    /// without colors.
    pub colors: Vec<Color>,
    /// When set, collaborators defer expensive geometry rebuilds until the
    /// caller flushes. The engine only carries the flag; the deferral
    /// itself lives in the rendering collaborator.
    pub lazy: bool,
    /// Handle of the attached material, if any. The material is owned by
    /// the material collaborator; this is only the key used to push merged
    /// color updates back to it.
    #[serde(skip)]
    pub material: Option<MaterialHandle>,
}

impl ShapeState {
    /// Number of points currently in the shape.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whether a material with a color table is attached.
    #[must_use]
    pub fn has_material(&self) -> bool {
        self.material.is_some()
    }
}
