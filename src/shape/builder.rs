//! Shape construction: create fresh state or merge a new batch into
//! existing state.

use serde::Deserialize;

use crate::material::MaterialSink;

use super::colors::{ColorDistribution, resample_colors};
use super::points::{PointInput, normalize_points};
use super::state::ShapeState;
use super::widths::{WidthDistribution, resample_widths};
use super::{Color, DEFAULT_COLOR, DEFAULT_WIDTH_LOWER, DEFAULT_WIDTH_UPPER};

/// One build call's worth of caller input, as it arrives from the host.
///
/// Everything except `points` is optional on the wire; the serde defaults
/// here are the library-wide ones. `instance` names an existing shape and
/// switches the builder from Create to Extend mode — the field holds the
/// facade-level shape id, resolved to a [`ShapeState`] before the builder
/// runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeOptions {
    /// New geometry, flat or grouped.
    pub points: PointInput,
    /// Flat width-pair table; empty means "all defaults".
    #[serde(default)]
    pub widths: Vec<f64>,
    #[serde(default)]
    pub width_distribution: WidthDistribution,
    /// Color table. Omission skips all color work.
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default)]
    pub color_distribution: ColorDistribution,
    #[serde(default = "default_color")]
    pub default_color: Color,
    #[serde(default = "default_width_upper")]
    pub default_width_upper: f64,
    #[serde(default = "default_width_lower")]
    pub default_width_lower: f64,
    /// Existing shape id; presence selects Extend mode.
    #[serde(default)]
    pub instance: Option<u32>,
    /// Forwarded unchanged to the collaborators.
    #[serde(default, alias = "deferred")]
    pub lazy: bool,
    /// Create mode only; ignored when extending.
    #[serde(default = "default_true")]
    pub create_and_assign_material: bool,
}

fn default_color() -> Color {
    DEFAULT_COLOR
}

fn default_width_upper() -> f64 {
    DEFAULT_WIDTH_UPPER
}

fn default_width_lower() -> f64 {
    DEFAULT_WIDTH_LOWER
}

fn default_true() -> bool {
    true
}

/// Orchestrates normalization, resampling and the material handoff for one
/// shape mutation. Holds the material collaborator for the duration of the
/// call; the shape state stays with the caller.
pub struct ShapeBuilder<'a, M: MaterialSink> {
    sink: &'a mut M,
}

impl<'a, M: MaterialSink> ShapeBuilder<'a, M> {
    pub fn new(sink: &'a mut M) -> Self {
        Self { sink }
    }

    /// Create mode: build fresh shape state from one batch of input.
    ///
    /// Widths are always resampled against the normalized point count.
    /// Colors are only touched when the caller supplied a table; with
    /// `create_and_assign_material` set (the default) the resampled table
    /// is handed to the material collaborator and the returned handle is
    /// kept on the state.
    pub fn create(&mut self, options: &ShapeOptions) -> ShapeState {
        let (points, point_count) = normalize_points(&options.points);
        let widths = resample_widths(
            point_count,
            &options.widths,
            options.width_distribution,
            options.default_width_upper,
            options.default_width_lower,
        );

        let mut state = ShapeState {
            points,
            widths,
            colors: Vec::new(),
            lazy: options.lazy,
            material: None,
        };

        if let Some(colors) = &options.colors {
            let colors = resample_colors(
                point_count,
                colors,
                options.color_distribution,
                options.default_color,
            );
            if options.create_and_assign_material {
                state.material = Some(self.sink.attach_material(&colors));
            }
            state.colors = colors;
        }

        self.sink.notify_geometry_changed(options.lazy);
        state
    }

    /// Extend mode: merge one new batch into existing shape state.
    ///
    /// Only the new batch is normalized and resampled; the merged width
    /// table is a plain concatenation, never a re-resampling of the
    /// combined shape. New colors reach the material collaborator as one
    /// full-table update. A color batch on a shape without a material is
    /// dropped.
    pub fn extend(&mut self, state: &mut ShapeState, options: &ShapeOptions) {
        let (new_points, batch_count) = normalize_points(&options.points);
        let new_widths = resample_widths(
            batch_count,
            &options.widths,
            options.width_distribution,
            options.default_width_upper,
            options.default_width_lower,
        );

        state.widths.extend_from_slice(&new_widths);
        state.points.extend_from_slice(&new_points);
        state.lazy = options.lazy;

        if let Some(colors) = &options.colors {
            let new_colors = resample_colors(
                batch_count,
                colors,
                options.color_distribution,
                options.default_color,
            );
            if let Some(handle) = state.material {
                state.colors.extend_from_slice(&new_colors);
                self.sink.update_colors(handle, &state.colors, options.lazy);
            } else {
                log::debug!(
                    "extend dropped {} color entries: shape has no color material",
                    new_colors.len()
                );
            }
        }

        self.sink.notify_geometry_changed(options.lazy);
    }
}
