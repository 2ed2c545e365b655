use serde::{Deserialize, Serialize};

use crate::convert::{Rgb, parse_hex};
use crate::error::{PaletteError, Result};

fn default_l_min() -> f64 {
    0.0
}

fn default_l_max() -> f64 {
    100.0
}

fn default_use_lightness() -> bool {
    true
}

/// Everything one generation call needs: the seed plus its tunables.
///
/// `id` and `name` are identity only; the algorithm never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Seed color, hex with or without `#`.
    pub value: String,

    /// Hue spread in degrees per stop.
    #[serde(default)]
    pub h: f64,
    /// Saturation spread factor.
    #[serde(default)]
    pub s: f64,

    #[serde(default = "default_l_min")]
    pub l_min: f64,
    #[serde(default = "default_l_max")]
    pub l_max: f64,

    /// true: distribute HSL lightness. false: distribute relative luminance
    /// and search for the lightness that hits it.
    #[serde(default = "default_use_lightness")]
    pub use_lightness: bool,
}

impl PaletteConfig {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            value: value.into(),
            h: 0.0,
            s: 0.0,
            l_min: default_l_min(),
            l_max: default_l_max(),
            use_lightness: default_use_lightness(),
        }
    }

    pub fn with_spread(mut self, h: f64, s: f64) -> Self {
        self.h = h;
        self.s = s;
        self
    }

    pub fn with_bounds(mut self, l_min: f64, l_max: f64) -> Self {
        self.l_min = l_min;
        self.l_max = l_max;
        self
    }

    pub fn with_lightness(mut self, use_lightness: bool) -> Self {
        self.use_lightness = use_lightness;
        self
    }

    /// Parsed seed; fails on anything that isn't `#RGB` / `#RRGGBB`.
    pub fn seed(&self) -> Result<Rgb> {
        parse_hex(&self.value)
    }

    /// Seed as `#RRGGBB`, the exact string the base stop must carry.
    pub fn normalized_value(&self) -> Result<String> {
        Ok(self.seed()?.to_hex_upper())
    }

    pub fn validate(&self) -> Result<()> {
        self.seed()?;

        if !self.h.is_finite() || !self.s.is_finite() {
            return Err(PaletteError::InvalidConfiguration(format!(
                "hue/saturation spread must be finite (h={}, s={})",
                self.h, self.s
            )));
        }

        for (label, v) in [("lMin", self.l_min), ("lMax", self.l_max)] {
            if !(0.0..=100.0).contains(&v) {
                return Err(PaletteError::InvalidConfiguration(format!(
                    "{label} must be within 0..=100, got {v}"
                )));
            }
        }

        if self.l_min > self.l_max {
            return Err(PaletteError::InvalidConfiguration(format!(
                "lMin ({}) is greater than lMax ({})",
                self.l_min, self.l_max
            )));
        }

        Ok(())
    }
}
