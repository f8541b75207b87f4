//! Circular interval arithmetic for the hue axis
//!
//! Hue is circular: value 179 is adjacent to value 0. An interval is held
//! as a (min, max) pair where `max < min` signals that the interval wraps
//! past 0 - that is a valid state, not an error. All distances are computed
//! modulo [`HUE_RANGE`].

use crate::color::HUE_RANGE;

/// Largest usable hue tolerance: half the circle, so that the interval
/// edges never cross more than halfway around.
pub const HUE_MAX_TOLERANCE: i32 = 89;

/// Which edge of a hue interval a sample is nearer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueEdge {
    /// The low edge of the interval.
    Min,
    /// The high edge of the interval.
    Max,
}

/// Compute the (min, max) hue interval for a center and tolerance.
///
/// The tolerance is clamped to [`HUE_MAX_TOLERANCE`]. The returned `max`
/// may be numerically smaller than `min`; that signals the interval wraps
/// past 0.
pub fn hue_bounds(center: i32, tolerance: i32) -> (i32, i32) {
    let t = tolerance.clamp(0, HUE_MAX_TOLERANCE);
    let max = (center + t) % HUE_RANGE;
    let min = (center + HUE_RANGE - t) % HUE_RANGE;
    (min, max)
}

/// Check whether a hue lies inside a (possibly wrapped) interval.
pub fn hue_contains(sample: i32, min: i32, max: i32) -> bool {
    if max >= min {
        min <= sample && sample <= max
    } else {
        sample >= min || sample <= max
    }
}

/// Circular distance from `min` around to `max`.
pub fn hue_span(min: i32, max: i32) -> i32 {
    (max + HUE_RANGE - min) % HUE_RANGE
}

/// Find the interval edge nearer to a sample, with its circular distance.
///
/// Both directions are measured modulo [`HUE_RANGE`]; ties go to the max
/// edge.
pub fn nearer_hue_edge(sample: i32, min: i32, max: i32) -> (HueEdge, i32) {
    let to_max = (sample + HUE_RANGE - max) % HUE_RANGE;
    let to_min = (min + HUE_RANGE - sample) % HUE_RANGE;
    if to_max <= to_min {
        (HueEdge::Max, to_max)
    } else {
        (HueEdge::Min, to_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_simple() {
        assert_eq!(hue_bounds(90, 10), (80, 100));
        assert_eq!(hue_bounds(0, 0), (0, 0));
    }

    #[test]
    fn test_bounds_wrap() {
        // center 2, tolerance 5 wraps below 0
        assert_eq!(hue_bounds(2, 5), (177, 7));
        // center 176, tolerance 10 wraps above 179
        assert_eq!(hue_bounds(176, 10), (166, 6));
    }

    #[test]
    fn test_bounds_tolerance_clamped() {
        // Tolerances above 89 behave exactly like 89
        assert_eq!(hue_bounds(90, 120), hue_bounds(90, 89));
        let (min, max) = hue_bounds(90, 89);
        assert_eq!((min, max), (1, 179));
    }

    #[test]
    fn test_max_tolerance_spans_178_values() {
        // At tolerance 89 the interval covers 179 of the 180 hue values,
        // i.e. a span of 178 steps from min to max.
        for center in 0..HUE_RANGE {
            let (min, max) = hue_bounds(center, HUE_MAX_TOLERANCE);
            assert_eq!(hue_span(min, max), 178, "center={center}");
        }
    }

    #[test]
    fn test_contains_matches_brute_force() {
        // Exhaustive check of containment against explicit circular
        // distance from the center, for every (center, tolerance, hue).
        for center in 0..HUE_RANGE {
            for tolerance in 0..=HUE_MAX_TOLERANCE {
                let (min, max) = hue_bounds(center, tolerance);
                for hue in 0..HUE_RANGE {
                    let d = (hue - center).rem_euclid(HUE_RANGE);
                    let circular = d.min(HUE_RANGE - d);
                    let expected = circular <= tolerance;
                    assert_eq!(
                        hue_contains(hue, min, max),
                        expected,
                        "center={center} tolerance={tolerance} hue={hue}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_contains_wrapped_interval() {
        let (min, max) = hue_bounds(2, 5);
        assert_eq!((min, max), (177, 7));
        assert!(hue_contains(179, min, max));
        assert!(hue_contains(0, min, max));
        assert!(hue_contains(7, min, max));
        assert!(!hue_contains(8, min, max));
        assert!(!hue_contains(176, min, max));
    }

    #[test]
    fn test_nearer_edge() {
        // Interval [80, 100]; 105 is nearer the max edge, 70 the min edge
        assert_eq!(nearer_hue_edge(105, 80, 100), (HueEdge::Max, 5));
        assert_eq!(nearer_hue_edge(70, 80, 100), (HueEdge::Min, 10));
    }

    #[test]
    fn test_nearer_edge_tie_goes_to_max() {
        // Sample exactly opposite the interval: both distances equal
        let (edge, _) = nearer_hue_edge(0, 85, 95);
        assert_eq!(edge, HueEdge::Max);
    }

    #[test]
    fn test_nearer_edge_across_wrap() {
        // Interval [170, 10]; hue 15 is 5 past max, 155 past min
        assert_eq!(nearer_hue_edge(15, 170, 10), (HueEdge::Max, 5));
        // hue 160 is 10 before min
        assert_eq!(nearer_hue_edge(160, 170, 10), (HueEdge::Min, 10));
    }

    #[test]
    fn test_span() {
        assert_eq!(hue_span(80, 100), 20);
        assert_eq!(hue_span(170, 10), 20);
        assert_eq!(hue_span(0, 0), 0);
    }
}
