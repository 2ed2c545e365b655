use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub mod convert;
pub mod error;
pub mod output;
pub mod palette;
pub mod scales;
pub mod stops;
pub mod swatch;

pub use convert::{
    Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, luminance_from_hex,
    luminance_from_rgb, parse_hex,
};
pub use error::PaletteError;
pub use output::{GeneratedPalette, LabeledPalette, StopMap, palette_from_hex, shape_output};
pub use palette::PaletteConfig;
pub use stops::{BASE_STOP, STOPS};
pub use swatch::{Swatch, generate_palette};

/// A named collection of palette configs, the document we save/load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteLibrary {
    pub name: String,

    /// id -> config
    #[serde(default)]
    pub palettes: BTreeMap<String, PaletteConfig>,
}

impl PaletteLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            palettes: BTreeMap::new(),
        }
    }

    /// Save the library to JSON.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize library to json")?;
        fs::write(path.as_ref(), json).context("write library json file")?;
        Ok(())
    }

    /// Load the library from JSON.
    pub fn load_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref()).context("read library json file")?;
        let library =
            serde_json::from_str::<PaletteLibrary>(&text).context("parse library json")?;
        Ok(library)
    }

    pub fn add_palette(&mut self, config: PaletteConfig) -> anyhow::Result<()> {
        if self.palettes.contains_key(&config.id) {
            anyhow::bail!("Palette id '{}' already exists", config.id);
        }
        config
            .validate()
            .with_context(|| format!("palette '{}'", config.id))?;
        self.palettes.insert(config.id.clone(), config);
        Ok(())
    }

    pub fn remove_palette(&mut self, id: &str) -> anyhow::Result<PaletteConfig> {
        self.palettes
            .remove(id)
            .with_context(|| format!("unknown palette id '{id}'"))
    }

    pub fn list_palettes(&self) -> Vec<&PaletteConfig> {
        self.palettes.values().collect()
    }

    /// Generate every palette, in id order.
    pub fn generate_all(&self) -> anyhow::Result<Vec<GeneratedPalette>> {
        self.palettes
            .values()
            .map(|cfg| {
                GeneratedPalette::generate(cfg)
                    .with_context(|| format!("generate palette '{}'", cfg.id))
            })
            .collect()
    }

    /// name -> stop -> hex, sentinels removed.
    pub fn shaped(&self) -> anyhow::Result<BTreeMap<String, StopMap>> {
        Ok(shape_output(&self.generate_all()?))
    }
}

/// A helper: a small starter library.
pub fn default_palettes() -> Vec<PaletteConfig> {
    vec![
        PaletteConfig::new("green", "#22C55E"),
        PaletteConfig::new("blue", "#3B82F6").with_spread(2.0, 0.0),
        PaletteConfig::new("rose", "#F43F5E").with_lightness(false),
    ]
}
