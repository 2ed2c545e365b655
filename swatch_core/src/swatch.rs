//! Combines the seed's HSL with the tweak tables, one stop at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::convert::{hsl_to_hex, hsl_to_rgb, rgb_to_hsl, round_to};
use crate::error::Result;
use crate::palette::PaletteConfig;
use crate::scales::{create_distribution_values, create_hue_scale, create_saturation_scale};
use crate::stops::BASE_STOP;

/// One generated stop, with the intermediate values kept for graphing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    pub stop: u32,
    pub hex: String,
    pub h: f64,
    pub h_scale: f64,
    pub s: f64,
    pub s_scale: f64,
    pub l: f64,
}

/// Folds a tweaked hue back into `0..=360`.
///
/// Negative hues wrap to `360 + h - 1`. Large positive values lose 360 up to
/// twice; anything still out of range after that is reduced modulo 360.
pub fn wrap_hue(h: f64) -> f64 {
    let mut h = if h < 0.0 { 360.0 + h - 1.0 } else { h };
    if h > 720.0 {
        h -= 360.0;
    }
    if h > 360.0 {
        h -= 360.0;
    }
    if !(0.0..=360.0).contains(&h) {
        h = h.rem_euclid(360.0);
    }
    h
}

/// Integer lightness in `0..=99` whose color lands closest to `luminance`.
///
/// Scans from 99 down to 0 and only moves on a strictly smaller difference,
/// so ties keep the lighter candidate.
pub fn lightness_from_hsl_luminance(h: f64, s: f64, luminance: f64) -> f64 {
    let mut lowest_diff = 100.0;
    let mut best = 100u8;

    for l in (0..=99u8).rev() {
        let diff = (luminance - hsl_to_rgb(h, s, f64::from(l)).luminance()).abs();
        if diff < lowest_diff {
            best = l;
            lowest_diff = diff;
        }
    }

    trace!(h, s, luminance, lightness = best, "luminance search");
    f64::from(best)
}

/// Builds every stop, sentinels included, for `config`.
pub fn generate_palette(config: &PaletteConfig) -> Result<Vec<Swatch>> {
    config.validate()?;

    let seed = config.seed()?;
    let seed_hex = seed.to_hex_upper();
    let base = rgb_to_hsl(seed);

    let hue_scale = create_hue_scale(config.h);
    let saturation_scale = create_saturation_scale(config.s);

    let center = if config.use_lightness {
        base.l
    } else {
        round_to(seed.luminance(), 2)
    };
    let distribution = create_distribution_values(config.l_min, config.l_max, center);

    debug!(
        name = %config.name,
        seed = %seed_hex,
        use_lightness = config.use_lightness,
        center,
        "generating palette"
    );

    let swatches = hue_scale
        .iter()
        .zip(&saturation_scale)
        .zip(&distribution)
        .map(|((hue, sat), dist)| {
            let h = wrap_hue(base.h + hue.tweak);
            let s = (base.s + sat.tweak).min(100.0);
            let l = if config.use_lightness {
                dist.tweak
            } else {
                lightness_from_hsl_luminance(h, s, dist.tweak)
            };

            // HSL round-tripping can drift the seed by a unit; the base stop
            // always reports the seed itself.
            let hex = if hue.stop == BASE_STOP {
                seed_hex.clone()
            } else {
                hsl_to_hex(h, s, l).to_uppercase()
            };

            trace!(stop = hue.stop, %hex, h, s, l, "swatch");

            Swatch {
                stop: hue.stop,
                hex,
                h,
                h_scale: hue.tweak,
                s,
                s_scale: sat.tweak,
                l,
            }
        })
        .collect();

    Ok(swatches)
}
