//! Conversions between hex strings, RGB, HSL and WCAG relative luminance.
//!
//! Everything in here is pure. The lenient helpers (`hex_to_rgb`,
//! `hex_to_hsl`, `luminance_from_hex`) degrade to black on malformed input;
//! use [`parse_hex`] when a malformed seed should be reported instead.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#RRGGBB`, the normalized form used for every emitted swatch.
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn luminance(self) -> f64 {
        luminance_from_rgb(self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

/// Rounds half-way cases toward positive infinity, so `-2.5` becomes `-2`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to `precision` decimal places with [`round_half_up`].
pub fn round_to(value: f64, precision: i32) -> f64 {
    let multiplier = 10f64.powi(precision);
    round_half_up(value * multiplier) / multiplier
}

/// Strict hex parser: `RGB`, `#RGB`, `RRGGBB` or `#RRGGBB`, any case.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let invalid = || PaletteError::InvalidColorFormat(hex.to_string());

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        3 => {
            let nibble = |i: usize| channel(&digits[i..=i].repeat(2));
            Ok(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Ok(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Lenient hex parser: anything [`parse_hex`] rejects becomes black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let cmin = r.min(g).min(b);
    let cmax = r.max(g).max(b);
    let delta = cmax - cmin;

    let sector = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta) % 6.0
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut h = round_half_up(sector * 60.0);
    if h < 0.0 {
        h += 360.0;
    }

    let l = (cmax + cmin) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h,
        s: round_to(s * 100.0, 1),
        l: round_to(l * 100.0, 1),
    }
}

pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}

/// Chroma / intermediate / match construction over six 60° sectors.
///
/// A hue of exactly 360 lands in no sector, which drops the chroma terms.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    // float -> u8 casts saturate, which keeps negative saturation in range
    let to_byte = |v: f64| round_half_up((v + m) * 255.0) as u8;
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// WCAG 2.0 relative luminance on a 0..=100 scale.
pub fn luminance_from_rgb(r: u8, g: u8, b: u8) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c < 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    21.26 * linear(r) + 71.52 * linear(g) + 7.22 * linear(b)
}

pub fn luminance_from_hex(hex: &str) -> f64 {
    round_to(hex_to_rgb(hex).luminance(), 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_accepted_forms() -> anyhow::Result<()> {
        assert_eq!(parse_hex("#22C55E")?, Rgb::new(0x22, 0xC5, 0x5E));
        assert_eq!(parse_hex("22c55e")?, Rgb::new(0x22, 0xC5, 0x5E));
        assert_eq!(parse_hex("#fa0")?, Rgb::new(0xFF, 0xAA, 0x00));
        assert_eq!(parse_hex("FA0")?, Rgb::new(0xFF, 0xAA, 0x00));
        Ok(())
    }

    #[test]
    fn strict_parse_rejects_bad_lengths_and_digits() {
        let cases = [
            "", "#", "#12", "#1234", "12345", "#1234567", "#GGGGGG", "##123456", "#12é",
        ];
        for bad in cases {
            assert_eq!(
                parse_hex(bad),
                Err(PaletteError::InvalidColorFormat(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn lenient_parse_degrades_to_black() {
        assert_eq!(hex_to_rgb("not a color"), Rgb::default());
        assert_eq!(hex_to_hsl("#12"), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(luminance_from_hex("zzzzzz"), 0.0);
    }

    #[test]
    fn hex_to_hsl_known_values() {
        assert_eq!(hex_to_hsl("#22C55E"), Hsl::new(142.0, 70.6, 45.3));
        assert_eq!(hex_to_hsl("#FF0000"), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#0000FF"), Hsl::new(240.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#808080"), Hsl::new(0.0, 0.0, 50.2));
        // magenta: red is max and (g - b) is negative, so hue wraps
        assert_eq!(hex_to_hsl("#FF00FF").h, 300.0);
    }

    #[test]
    fn hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 25.0), "#000080");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn hue_of_exactly_360_drops_chroma() {
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), Rgb::new(0, 0, 0));
        assert_eq!(hsl_to_rgb(360.0, 50.0, 50.0), Rgb::new(64, 64, 64));
    }

    #[test]
    fn negative_saturation_stays_in_byte_range() {
        let rgb = hsl_to_rgb(200.0, -80.0, 50.0);
        assert_eq!(rgb, Rgb::new(230, 94, 25));
    }

    fn drift(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn round_trip_drifts_at_most_two_per_channel() {
        let mut worst = 0;
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let want = Rgb::new(r, g, b);
                    let got = rgb_to_hsl(want).to_rgb();
                    let d = drift(want, got);
                    assert!(d <= 2, "{want:?} -> {got:?}");
                    worst = worst.max(d);
                }
            }
        }
        // whole-degree hue rounding makes ±1 unattainable across the cube
        assert_eq!(worst, 2);
    }

    #[test]
    fn whole_degree_hue_costs_two_units_on_saturated_blue() -> anyhow::Result<()> {
        let hsl = hex_to_hsl("#0006E4");
        assert_eq!(hsl, Hsl::new(238.0, 100.0, 44.7));
        assert_eq!(hsl_to_hex(hsl.h, hsl.s, hsl.l), "#0008e4");

        let common = parse_hex("#22C55E")?;
        assert_eq!(rgb_to_hsl(common).to_rgb(), common);
        Ok(())
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(luminance_from_rgb(0, 0, 0), 0.0);
        assert!((luminance_from_rgb(255, 255, 255) - 100.0).abs() < 1e-9);
        assert_eq!(luminance_from_hex("#FFFFFF"), 100.0);
        assert_eq!(luminance_from_hex("#FF0000"), 21.26);
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_to(12.345_6, 2), 12.35);
    }
}
