//! Width-table resampling.
//!
//! Width tables are flat: entry `2i` is the upper half-width and entry
//! `2i + 1` the lower half-width of point `i`. Resampling guarantees an
//! output of exactly `2 * point_count` entries for every policy except
//! [`WidthDistribution::None`], which returns an undersized table unpadded.

use serde::Deserialize;

/// Strategy for stretching an undersized width table across a shape's
/// points. Deserializes from the wire strings `"none"`, `"repeat"`,
/// `"even"`, `"start"`, `"end"` and `"startEnd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthDistribution {
    /// Return the table unpadded. Carried for parity with the color policy
    /// set; the length invariant does not hold under this variant.
    None,
    /// Cyclically repeat the existing pairs.
    Repeat,
    /// Stretch the existing pairs evenly across the point count.
    Even,
    /// Keep existing pairs at the start, pad the tail with default pairs.
    #[default]
    Start,
    /// Pad the head with default pairs, keep existing pairs at the end.
    End,
    /// Keep both ends of the table and fill the middle with the pair read
    /// at the table's midpoint.
    StartEnd,
}

/// Resamples `widths` to exactly `2 * point_count` entries.
///
/// A table longer than needed is truncated, never interpolated. A table of
/// exactly the right size is returned as-is. Only an undersized table is
/// distributed according to `policy`.
#[must_use]
pub fn resample_widths(
    point_count: usize,
    widths: &[f64],
    policy: WidthDistribution,
    default_upper: f64,
    default_lower: f64,
) -> Vec<f64> {
    let pair_count = widths.len() / 2;
    if point_count <= pair_count {
        // Exact fit or truncation; policy is irrelevant on this path.
        return widths[..point_count * 2].to_vec();
    }
    let missing = point_count - pair_count;

    match policy {
        WidthDistribution::None => widths.to_vec(),
        WidthDistribution::Start => {
            let mut out = Vec::with_capacity(point_count * 2);
            out.extend_from_slice(widths);
            push_pairs(&mut out, missing, default_upper, default_lower);
            out
        }
        WidthDistribution::End => {
            let mut out = Vec::with_capacity(point_count * 2);
            push_pairs(&mut out, missing, default_upper, default_lower);
            out.extend_from_slice(widths);
            out
        }
        WidthDistribution::StartEnd => {
            fill_start_end(point_count, widths, missing, default_upper, default_lower)
        }
        WidthDistribution::Repeat => {
            fill_repeat(point_count, widths, default_upper, default_lower)
        }
        WidthDistribution::Even => fill_even(point_count, widths, default_upper, default_lower),
    }
}

fn push_pairs(out: &mut Vec<f64>, pairs: usize, upper: f64, lower: f64) {
    for _ in 0..pairs {
        out.push(upper);
        out.push(lower);
    }
}

/// Keeps the pairs on either side of the table's flat midpoint and inserts
/// `missing` copies of the midpoint pair between them.
///
/// The midpoint pair is read as `(widths[half / 2 + 1], widths[half / 2])`,
/// upper and lower swapped relative to the source layout. The swap is the
/// behavior this engine is specified against, not an oversight here.
fn fill_start_end(
    point_count: usize,
    widths: &[f64],
    missing: usize,
    default_upper: f64,
    default_lower: f64,
) -> Vec<f64> {
    let half_count = widths.len() / 2;
    let head_pairs = half_count / 2;

    let (mid_upper, mid_lower) = if widths.len() >= 2 {
        let k = half_count / 2;
        let hi = (k + 1).min(widths.len() - 1);
        (widths[hi], widths[k])
    } else {
        (default_upper, default_lower)
    };

    let mut out = Vec::with_capacity(point_count * 2);
    out.extend_from_slice(&widths[..head_pairs * 2]);
    push_pairs(&mut out, missing, mid_upper, mid_lower);
    out.extend_from_slice(&widths[head_pairs * 2..]);
    out
}

fn fill_repeat(
    point_count: usize,
    widths: &[f64],
    default_upper: f64,
    default_lower: f64,
) -> Vec<f64> {
    let pair_count = widths.len() / 2;
    let mut out = Vec::with_capacity(point_count * 2);
    if pair_count == 0 {
        push_pairs(&mut out, point_count, default_upper, default_lower);
        return out;
    }
    for slot in 0..point_count {
        let src = (slot % pair_count) * 2;
        out.push(widths[src]);
        out.push(widths[src + 1]);
    }
    out
}

fn fill_even(
    point_count: usize,
    widths: &[f64],
    default_upper: f64,
    default_lower: f64,
) -> Vec<f64> {
    let pair_count = widths.len() / 2;
    if point_count == 1 {
        // The stride below divides by point_count - 1; a single point takes
        // the leading pair (or the defaults) instead.
        return if pair_count > 0 {
            widths[..2].to_vec()
        } else {
            vec![default_upper, default_lower]
        };
    }
    let mut out = Vec::with_capacity(point_count * 2);
    if pair_count == 0 {
        push_pairs(&mut out, point_count, default_upper, default_lower);
        return out;
    }

    let stride = widths.len() as f64 / ((point_count - 1) * 2) as f64;
    let mut j = 0.0_f64;
    for _ in 0..point_count {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let src = (j.floor() as usize).min(pair_count - 1) * 2;
        out.push(widths[src]);
        out.push(widths[src + 1]);
        j += stride;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{WidthDistribution, resample_widths};

    const UP: f64 = 1.0;
    const LO: f64 = 1.0;

    #[test]
    fn truncates_oversized_tables_under_any_policy() {
        let widths = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        for policy in [
            WidthDistribution::None,
            WidthDistribution::Repeat,
            WidthDistribution::Even,
            WidthDistribution::Start,
            WidthDistribution::End,
            WidthDistribution::StartEnd,
        ] {
            assert_eq!(
                resample_widths(2, &widths, policy, UP, LO),
                vec![1.0, 1.0, 2.0, 2.0],
            );
        }
    }

    #[test]
    fn exact_fit_is_returned_unchanged() {
        let widths = [4.0, 5.0, 6.0, 7.0];
        for policy in [
            WidthDistribution::None,
            WidthDistribution::Repeat,
            WidthDistribution::Even,
            WidthDistribution::Start,
            WidthDistribution::End,
            WidthDistribution::StartEnd,
        ] {
            assert_eq!(resample_widths(2, &widths, policy, UP, LO), widths.to_vec());
        }
    }

    #[test]
    fn start_appends_default_pairs() {
        let out = resample_widths(3, &[5.0, 5.0], WidthDistribution::Start, 1.0, 1.0);
        assert_eq!(out, vec![5.0, 5.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn end_prepends_default_pairs() {
        let out = resample_widths(3, &[5.0, 5.0], WidthDistribution::End, 1.0, 1.0);
        assert_eq!(out, vec![1.0, 1.0, 1.0, 1.0, 5.0, 5.0]);
    }

    #[test]
    fn start_end_fills_middle_with_swapped_midpoint_pair() {
        // half_count = 2, so the middle pair reads (widths[2], widths[1]).
        let out = resample_widths(4, &[1.0, 2.0, 3.0, 4.0], WidthDistribution::StartEnd, UP, LO);
        assert_eq!(out, vec![1.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn start_end_keeps_the_length_invariant_for_a_single_source_pair() {
        let out = resample_widths(3, &[7.0, 8.0], WidthDistribution::StartEnd, UP, LO);
        assert_eq!(out.len(), 6);
        // half_count = 1; the middle pair is (widths[1], widths[0]).
        assert_eq!(out, vec![8.0, 7.0, 8.0, 7.0, 7.0, 8.0]);
    }

    #[test]
    fn repeat_cycles_through_source_pairs() {
        let out = resample_widths(5, &[1.0, 2.0, 3.0, 4.0], WidthDistribution::Repeat, UP, LO);
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn even_stretches_pairs_across_the_point_count() {
        let out = resample_widths(4, &[1.0, 1.0, 9.0, 9.0], WidthDistribution::Even, UP, LO);
        assert_eq!(out.len(), 8);
        // stride = 4 / 6; slots read pair indices 0, 0, 1, 1.
        assert_eq!(out, vec![1.0, 1.0, 1.0, 1.0, 9.0, 9.0, 9.0, 9.0]);
    }

    #[test]
    fn even_with_a_single_point_takes_the_leading_pair() {
        let out = resample_widths(1, &[3.0, 4.0], WidthDistribution::Even, UP, LO);
        assert_eq!(out, vec![3.0, 4.0]);
        assert!(out.iter().all(|w| w.is_finite()));
    }

    #[test]
    fn even_with_a_single_point_and_no_table_takes_the_defaults() {
        let out = resample_widths(1, &[], WidthDistribution::Even, 2.5, 1.5);
        assert_eq!(out, vec![2.5, 1.5]);
    }

    #[test]
    fn empty_tables_fill_with_defaults_under_repeat() {
        let out = resample_widths(2, &[], WidthDistribution::Repeat, 0.5, 0.25);
        assert_eq!(out, vec![0.5, 0.25, 0.5, 0.25]);
    }

    #[test]
    fn none_returns_short_tables_unpadded() {
        let out = resample_widths(4, &[5.0, 5.0], WidthDistribution::None, UP, LO);
        assert_eq!(out, vec![5.0, 5.0]);
    }

    #[test]
    fn length_invariant_holds_for_every_padding_policy() {
        let widths = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for point_count in [0, 1, 2, 3, 4, 7, 12] {
            for policy in [
                WidthDistribution::Repeat,
                WidthDistribution::Even,
                WidthDistribution::Start,
                WidthDistribution::End,
                WidthDistribution::StartEnd,
            ] {
                let out = resample_widths(point_count, &widths, policy, UP, LO);
                assert_eq!(out.len(), point_count * 2, "{policy:?} at {point_count}");
            }
        }
    }

    #[test]
    fn zero_points_yields_an_empty_table() {
        let out = resample_widths(0, &[1.0, 2.0], WidthDistribution::Start, UP, LO);
        assert!(out.is_empty());
    }
}
