//! Per-stop tweak tables.
//!
//! Each generator returns exactly one entry per [`STOPS`] element, in the
//! same order, so the assembler can zip them by index.

use serde::{Deserialize, Serialize};

use crate::convert::round_half_up;
use crate::stops::{BASE_STOP, STOPS, base_index};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub stop: u32,
    pub tweak: f64,
}

/// Signed steps from the base stop: negative on the light side.
fn steps_from_base(index: usize) -> f64 {
    index as f64 - base_index() as f64
}

/// Hue offsets in degrees, growing linearly away from the base stop.
pub fn create_hue_scale(spread: f64) -> Vec<ScaleEntry> {
    STOPS
        .iter()
        .enumerate()
        .map(|(i, &stop)| ScaleEntry {
            stop,
            tweak: spread * steps_from_base(i),
        })
        .collect()
}

/// Saturation offsets in percent; same sign on both sides of the base.
pub fn create_saturation_scale(spread: f64) -> Vec<ScaleEntry> {
    STOPS
        .iter()
        .enumerate()
        .map(|(i, &stop)| {
            let d = steps_from_base(i).abs();
            ScaleEntry {
                stop,
                tweak: round_half_up(spread * d * (1.0 + d / 10.0)),
            }
        })
        .collect()
}

/// Absolute lightness (or luminance) targets.
///
/// The lightest sentinel gets `max`, the darkest gets `min`, the base stop
/// gets `center` untouched, and everything in between is interpolated
/// linearly by stop key and rounded to a whole number.
pub fn create_distribution_values(min: f64, max: f64, center: f64) -> Vec<ScaleEntry> {
    let first = STOPS[0];
    let last = STOPS[STOPS.len() - 1];
    let light_span = f64::from(BASE_STOP - first) / 100.0;
    let dark_span = f64::from(last - BASE_STOP) / 100.0;

    STOPS
        .iter()
        .map(|&stop| {
            let tweak = if stop == first {
                max
            } else if stop == last {
                min
            } else if stop == BASE_STOP {
                center
            } else if stop < BASE_STOP {
                let diff = f64::from(BASE_STOP - stop) / 100.0;
                round_half_up((max - center) / light_span * diff + center)
            } else {
                let diff = f64::from(stop - BASE_STOP) / 100.0;
                round_half_up(center - (center - min) / dark_span * diff)
            };
            ScaleEntry { stop, tweak }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweaks(scale: &[ScaleEntry]) -> Vec<f64> {
        scale.iter().map(|e| e.tweak).collect()
    }

    #[test]
    fn every_scale_covers_every_stop() {
        for scale in [
            create_hue_scale(3.0),
            create_saturation_scale(2.0),
            create_distribution_values(0.0, 100.0, 50.0),
        ] {
            let stops: Vec<u32> = scale.iter().map(|e| e.stop).collect();
            assert_eq!(stops, STOPS.to_vec());
        }
    }

    #[test]
    fn zero_spread_is_flat() {
        assert!(tweaks(&create_hue_scale(0.0)).iter().all(|&t| t == 0.0));
        assert!(tweaks(&create_saturation_scale(0.0)).iter().all(|&t| t == 0.0));
    }

    #[test]
    fn hue_scale_is_signed_around_base() {
        assert_eq!(
            tweaks(&create_hue_scale(2.0)),
            vec![-12.0, -10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
    }

    #[test]
    fn saturation_scale_mirrors_around_base() {
        let t = tweaks(&create_saturation_scale(10.0));
        assert_eq!(t[base_index()], 0.0);
        assert_eq!(t[5], 11.0);
        assert_eq!(t[7], 11.0);
        assert_eq!(t[4], 24.0);
        assert_eq!(t[8], 24.0);
        assert_eq!(t[0], 96.0);
    }

    #[test]
    fn distribution_anchors_and_interpolates() {
        assert_eq!(
            tweaks(&create_distribution_values(0.0, 100.0, 45.3)),
            vec![100.0, 95.0, 89.0, 78.0, 67.0, 56.0, 45.3, 36.0, 27.0, 18.0, 9.0, 0.0]
        );
    }

    #[test]
    fn distribution_respects_narrow_bounds() {
        let t = tweaks(&create_distribution_values(20.0, 80.0, 50.0));
        assert_eq!(t[0], 80.0);
        assert_eq!(t[base_index()], 50.0);
        assert_eq!(t[STOPS.len() - 1], 20.0);
        assert!(t.windows(2).all(|w| w[0] >= w[1]));
    }
}
