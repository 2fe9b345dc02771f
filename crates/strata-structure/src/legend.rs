//! Colour legends: mapping RGBA pixels of a flat image layer onto block
//! states. Decoding the image itself is up to the caller.

use crate::builder::PaletteBuilder;
use crate::palette::Attributes;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use strata_common::{Result, StrataError};

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub name: String,
    #[serde(default)]
    pub properties: Attributes,
}

impl BlockSpec {
    pub fn new(name: &str, properties: &[(&str, &str)]) -> Self {
        BlockSpec {
            name: name.to_owned(),
            properties: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: HashMap<Rgba, BlockSpec>,
}

impl Default for Legend {
    fn default() -> Self {
        let mut legend = Legend::empty();
        legend.insert([255, 0, 0, 255], BlockSpec::new("minecraft:redstone_wire", &[]));
        legend.insert(
            [0, 255, 0, 255],
            BlockSpec::new(
                "minecraft:repeater",
                &[
                    ("facing", "east"),
                    ("delay", "1"),
                    ("locked", "false"),
                    ("powered", "false"),
                ],
            ),
        );
        legend.insert([0, 0, 255, 255], BlockSpec::new("minecraft:redstone_torch", &[]));
        legend.insert(
            [255, 255, 0, 255],
            BlockSpec::new(
                "minecraft:comparator",
                &[("facing", "east"), ("mode", "compare"), ("powered", "false")],
            ),
        );
        legend.insert([0, 0, 0, 255], BlockSpec::new("minecraft:stone", &[]));
        legend
    }
}

impl Legend {
    pub fn empty() -> Self {
        Legend {
            entries: HashMap::new(),
        }
    }

    /// Parses `{"#rrggbb[aa]": {"name": ..., "properties": {...}}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: IndexMap<String, BlockSpec> = serde_json::from_str(json)?;
        Self::from_specs(raw)
    }

    pub fn from_specs(specs: IndexMap<String, BlockSpec>) -> Result<Self> {
        let mut legend = Legend::empty();
        for (color, spec) in specs {
            legend.insert(parse_color(&color)?, spec);
        }
        Ok(legend)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn insert(&mut self, color: Rgba, spec: BlockSpec) -> Option<BlockSpec> {
        self.entries.insert(color, spec)
    }

    pub fn get(&self, color: &Rgba) -> Option<&BlockSpec> {
        self.entries.get(color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses `#rrggbb` (opaque) or `#rrggbbaa`. The leading `#` is optional.
pub fn parse_color(text: &str) -> Result<Rgba> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StrataError::ConfigError(format!(
            "Invalid color key: {}",
            text
        )));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| StrataError::ConfigError(format!("Invalid color key: {}", text)))
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// Row-major RGBA pixels, `width` per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(StrataError::ConfigError(format!(
                "Pixel grid {}x{} needs {} pixels, got {}",
                width,
                height,
                width.saturating_mul(height),
                pixels.len()
            )));
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, row: usize) -> Option<Rgba> {
        if x >= self.width || row >= self.height {
            return None;
        }
        self.pixels.get(row * self.width + x).copied()
    }
}

/// Places one block per legend-matched pixel at `(column, y, row)`. Colours
/// missing from the legend count as air; fully transparent pixels are
/// skipped when `skip_transparent` is set. Returns the number placed.
pub fn place_layer(
    builder: &mut PaletteBuilder,
    grid: &PixelGrid,
    legend: &Legend,
    y: i64,
    skip_transparent: bool,
) -> Result<usize> {
    let mut placed = 0;
    for row in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(color) = grid.get(x, row) else {
                continue;
            };
            if skip_transparent && color[3] == 0 {
                continue;
            }
            let Some(spec) = legend.get(&color) else {
                continue;
            };
            builder.add_block_with((x as i64, y, row as i64), &spec.name, &spec.properties)?;
            placed += 1;
        }
    }
    Ok(placed)
}
