mod color;
mod gradient;
mod swatch;

pub use color::{
    hex::{parse_channel, parse_hex, HexError},
    rgb::{mix, Rgb},
};
pub use gradient::{
    scale::{Preset, ScoreScale, MAX_SCORE, SCORE_LEVELS},
    sequence::{generate, Gradient},
    split::{section_lengths, Section, SectionSplit},
};
pub use swatch::{render_swatch, save_swatch};

#[derive(Debug, thiserror::Error)]
pub enum GradientError {
    #[error("invalid anchor color {input:?} at position {index}")]
    InvalidHexFormat {
        index: usize,
        input: String,
        #[source]
        source: HexError,
    },
    #[error("a gradient needs at least two anchors, got {0}")]
    InsufficientAnchors(usize),
    #[error("gradient length must be at least 1")]
    NonPositiveLength,
    #[error("legacy section split cannot lay out {length} entries over {sections} sections")]
    LegacySplit { sections: usize, length: usize },
    #[error("cannot draw {cells} colors {cell_width}px wide and {height}px high")]
    InvalidSwatchSize { cells: usize, cell_width: u32, height: u32 },
    #[error("failed to write swatch: {0}")]
    Image(#[from] image::ImageError),
}
