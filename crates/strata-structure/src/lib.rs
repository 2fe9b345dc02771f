//! Palette-based structure builder.
//!
//! Callers place labelled blocks at arbitrary integer coordinates through a
//! [`PaletteBuilder`], finalize it into a [`Document`] whose coordinates start
//! at the origin, and encode that document into the structure file format.
//!
//! ```no_run
//! use strata_structure::{encode, Attributes, PaletteBuilder};
//!
//! let mut builder = PaletteBuilder::default();
//! builder.add_block((0, 0, 0), "minecraft:stone")?;
//! let facing: Attributes = [("facing".to_string(), "up".to_string())].into_iter().collect();
//! builder.add_block_with((0, 1, 0), "minecraft:dropper", &facing)?;
//!
//! let bytes = encode("", &builder.finalize(), true)?;
//! # Ok::<(), strata_common::StrataError>(())
//! ```

pub mod bounds;
pub mod builder;
pub mod config;
pub mod document;
pub mod legend;
pub mod palette;
pub mod shapes;

pub use bounds::BoundingBox;
pub use builder::PaletteBuilder;
pub use config::{StructureConfig, DEFAULT_DATA_VERSION};
pub use document::{Document, Placement};
pub use legend::{place_layer, BlockSpec, Legend, PixelGrid, Rgba};
pub use palette::{Attributes, Palette, PaletteEntry};

use strata_common::Result;

/// Assembles `document` into its root compound and encodes it under
/// `root_name`, gzip-compressed when `compress` is set.
pub fn encode(root_name: &str, document: &Document, compress: bool) -> Result<Vec<u8>> {
    let root = document.to_compound()?;
    strata_nbt::encode(root_name, &root, compress)
}

pub fn encode_with(config: &StructureConfig, document: &Document) -> Result<Vec<u8>> {
    encode(&config.root_name, document, config.compress)
}
