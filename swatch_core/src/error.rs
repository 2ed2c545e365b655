use thiserror::Error;

/// Errors raised at the edges of palette generation.
///
/// The color converters themselves never fail; these are only produced by
/// the strict entry points ([`crate::parse_hex`], [`crate::generate_palette`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Hex string is not 3 or 6 hex digits (one leading `#` allowed).
    #[error("invalid color format: '{0}' (expected #RGB or #RRGGBB)")]
    InvalidColorFormat(String),

    /// Tunables that would produce a nonsensical scale.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
