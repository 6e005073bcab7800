//! Color-table resampling.
//!
//! Color tables hold one entry per point. The policy set mirrors the width
//! resampler, but the two are kept separate on purpose: their `StartEnd`
//! and `Even` arithmetic differs in documented off-by-one details, and this
//! engine preserves each variant exactly rather than unifying them.

use serde::Deserialize;

use super::Color;

/// Strategy for stretching an undersized color table across a shape's
/// points. Deserializes from the wire strings `"none"`, `"repeat"`,
/// `"even"`, `"start"`, `"end"` and `"startEnd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorDistribution {
    /// Return the table unpadded. The only policy under which the output
    /// may be shorter than the point count.
    None,
    /// Cyclically repeat the existing entries.
    Repeat,
    /// Stretch the existing entries evenly across the point count.
    Even,
    /// Keep existing entries at the start, pad the tail with defaults.
    #[default]
    Start,
    /// Pad the head with defaults, keep existing entries at the end.
    End,
    /// Keep both ends of the table and pad the middle with defaults.
    StartEnd,
}

/// Resamples `colors` to exactly `point_count` entries.
///
/// A table longer than needed is truncated; an exact fit is returned
/// as-is. An undersized table is distributed according to `policy` —
/// except under [`ColorDistribution::None`], which returns it unpadded and
/// leaves the length invariant unsatisfied.
#[must_use]
pub fn resample_colors(
    point_count: usize,
    colors: &[Color],
    policy: ColorDistribution,
    default_color: Color,
) -> Vec<Color> {
    if point_count <= colors.len() {
        // Exact fit or truncation; policy is irrelevant on this path.
        return colors[..point_count].to_vec();
    }
    let missing = point_count - colors.len();

    match policy {
        ColorDistribution::None => colors.to_vec(),
        ColorDistribution::Start => {
            let mut out = Vec::with_capacity(point_count);
            out.extend_from_slice(colors);
            out.extend(std::iter::repeat_n(default_color, missing));
            out
        }
        ColorDistribution::End => {
            let mut out = Vec::with_capacity(point_count);
            out.extend(std::iter::repeat_n(default_color, missing));
            out.extend_from_slice(colors);
            out
        }
        ColorDistribution::StartEnd => fill_start_end(point_count, colors, missing, default_color),
        ColorDistribution::Repeat => fill_repeat(point_count, colors, default_color),
        ColorDistribution::Even => fill_even(point_count, colors, default_color),
    }
}

/// Splits the table at its midpoint and fills the gap with `missing - 1`
/// defaults — one fewer than the width resampler inserts. The entry just
/// before the split is repeated once so the table still comes out at
/// `point_count` entries.
fn fill_start_end(
    point_count: usize,
    colors: &[Color],
    missing: usize,
    default_color: Color,
) -> Vec<Color> {
    let half_count = colors.len() / 2;
    let boundary = if half_count > 0 {
        colors[half_count - 1]
    } else {
        default_color
    };

    let mut out = Vec::with_capacity(point_count);
    out.extend_from_slice(&colors[..half_count]);
    out.push(boundary);
    out.extend(std::iter::repeat_n(default_color, missing - 1));
    out.extend_from_slice(&colors[half_count..]);
    out
}

fn fill_repeat(point_count: usize, colors: &[Color], default_color: Color) -> Vec<Color> {
    if colors.is_empty() {
        return vec![default_color; point_count];
    }
    (0..point_count).map(|slot| colors[slot % colors.len()]).collect()
}

fn fill_even(point_count: usize, colors: &[Color], default_color: Color) -> Vec<Color> {
    if point_count == 1 {
        // The stride below divides by point_count - 1; a single point takes
        // the leading entry (or the default) instead.
        return vec![colors.first().copied().unwrap_or(default_color)];
    }
    if colors.is_empty() {
        return vec![default_color; point_count];
    }

    // Unlike the width version this walks point_count - 1 slots; the last
    // source entry closes the table.
    let stride = colors.len() as f64 / (point_count - 1) as f64;
    let mut j = 0.0_f64;
    let mut out = Vec::with_capacity(point_count);
    for _ in 0..point_count - 1 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let src = (j.floor() as usize).min(colors.len() - 1);
        out.push(colors[src]);
        j += stride;
    }
    out.push(colors[colors.len() - 1]);
    out
}
