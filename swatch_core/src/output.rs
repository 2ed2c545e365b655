use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::Result;
use crate::palette::PaletteConfig;
use crate::stops::{is_sentinel, stop_label};
use crate::swatch::{Swatch, generate_palette};

/// A generated palette, keyed by the caller's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPalette {
    pub name: String,
    pub swatches: Vec<Swatch>,
}

impl GeneratedPalette {
    pub fn generate(config: &PaletteConfig) -> Result<Self> {
        Ok(Self {
            name: config.name.clone(),
            swatches: generate_palette(config)?,
        })
    }
}

/// stop key -> `#RRGGBB`
pub type StopMap = BTreeMap<u32, String>;

/// Drops sentinels and keeps only the hex of each stop.
///
/// Palettes sharing a name overwrite each other; the last one wins.
pub fn shape_output(palettes: &[GeneratedPalette]) -> BTreeMap<String, StopMap> {
    let mut shaped = BTreeMap::new();

    for palette in palettes {
        let stops: StopMap = palette
            .swatches
            .iter()
            .filter(|sw| !is_sentinel(sw.stop))
            .map(|sw| (sw.stop, sw.hex.to_uppercase()))
            .collect();

        if shaped.insert(palette.name.clone(), stops).is_some() {
            warn!(name = %palette.name, "duplicate palette name, keeping the last one");
        }
    }

    shaped
}

/// `c50` .. `c900` -> hex, in stop order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledPalette {
    entries: Vec<(String, String)>,
}

impl LabeledPalette {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, hex)| hex.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }
}

impl From<StopMap> for LabeledPalette {
    fn from(stops: StopMap) -> Self {
        Self {
            entries: stops
                .into_iter()
                .map(|(stop, hex)| (stop_label(stop), hex))
                .collect(),
        }
    }
}

impl Serialize for LabeledPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, hex) in &self.entries {
            map.serialize_entry(label, hex)?;
        }
        map.end()
    }
}

/// Default palette for `hex` keyed `c50` .. `c900`.
pub fn palette_from_hex(hex: &str) -> Result<LabeledPalette> {
    let value = hex.replace('#', "").to_uppercase();
    let config = PaletteConfig::new("name", value);
    let palette = GeneratedPalette::generate(&config)?;

    let stops = shape_output(std::slice::from_ref(&palette))
        .remove(&palette.name)
        .unwrap_or_default();

    Ok(stops.into())
}
