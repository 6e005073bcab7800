//! Flattens caller-supplied point input into a single point sequence.

use serde::Deserialize;

/// Point input as it arrives from the host: either one flat run of xyz
/// coordinates, or several such runs describing independent polylines that
/// share one shape.
///
/// The variants deserialize untagged, so a JS caller passes either
/// `[x, y, z, ...]` or `[[x, y, z, ...], ...]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PointInput {
    /// A flat run of coordinate triples.
    Flat(Vec<f64>),
    /// Several flat runs, one per polyline.
    Grouped(Vec<Vec<f64>>),
}

impl PointInput {
    /// Total number of points, computed before any flattening so the
    /// resamplers can size their output up front.
    ///
    /// A one-element [`PointInput::Grouped`] counts the same as the
    /// equivalent [`PointInput::Flat`] input.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Flat(coords) => coords.len() / 3,
            Self::Grouped(groups) => groups.iter().map(|group| group.len() / 3).sum(),
        }
    }
}

/// Flattens the input into one ordered point sequence and reports the total
/// point count.
///
/// Coordinate runs whose length is not a multiple of 3 are truncated to the
/// last whole triple. That input is malformed; truncation keeps the count
/// and the sequence consistent with each other.
#[must_use]
pub fn normalize_points(input: &PointInput) -> (Vec<[f64; 3]>, usize) {
    let count = input.point_count();
    let mut points = Vec::with_capacity(count);
    match input {
        PointInput::Flat(coords) => push_triples(coords, &mut points),
        PointInput::Grouped(groups) => {
            for group in groups {
                push_triples(group, &mut points);
            }
        }
    }
    (points, count)
}

fn push_triples(coords: &[f64], points: &mut Vec<[f64; 3]>) {
    let remainder = coords.len() % 3;
    if remainder != 0 {
        log::debug!("point input dropped {remainder} trailing coordinate(s)");
    }
    for triple in coords.chunks_exact(3) {
        points.push([triple[0], triple[1], triple[2]]);
    }
}
