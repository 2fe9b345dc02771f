use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use strata_common::{BlockPos, Result, StrataError};
use strata_nbt::{Compound, Tag, TagKind, TagList};
use strata_structure::legend::parse_color;
use strata_structure::{place_layer, Attributes, BlockSpec, Legend, PaletteBuilder, PixelGrid};

/// JSON description of a structure: single blocks, filled boxes and
/// colour-mapped layers, applied in that order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Blueprint {
    pub blocks: Vec<BlockEntry>,
    pub fills: Vec<FillEntry>,
    pub layers: Vec<LayerEntry>,
    /// Overrides the built-in legend for `layers`.
    pub legend: Option<IndexMap<String, BlockSpec>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockEntry {
    pub pos: BlockPos,
    pub name: String,
    #[serde(default)]
    pub properties: Attributes,
    /// Extra per-block data, converted with [`json_to_tag`].
    #[serde(default)]
    pub nbt: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillEntry {
    pub from: BlockPos,
    pub to: BlockPos,
    pub name: String,
    #[serde(default)]
    pub properties: Attributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerEntry {
    pub y: i64,
    pub width: usize,
    /// Row-major `#rrggbb[aa]` colours.
    pub pixels: Vec<String>,
    #[serde(default = "default_skip_transparent")]
    pub skip_transparent: bool,
}

fn default_skip_transparent() -> bool {
    true
}

impl LayerEntry {
    pub fn to_grid(&self) -> Result<PixelGrid> {
        if self.width == 0 || self.pixels.len() % self.width != 0 {
            return Err(StrataError::ConfigError(format!(
                "Layer at y={} has {} pixels, not a multiple of width {}",
                self.y,
                self.pixels.len(),
                self.width
            )));
        }
        let pixels = self
            .pixels
            .iter()
            .map(|p| parse_color(p))
            .collect::<Result<Vec<_>>>()?;
        PixelGrid::new(self.width, pixels.len() / self.width, pixels)
    }
}

impl Blueprint {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn legend(&self) -> Result<Legend> {
        match &self.legend {
            Some(specs) => Legend::from_specs(specs.clone()),
            None => Ok(Legend::default()),
        }
    }

    /// Feeds every entry into `builder`, returning the number of placements.
    pub fn apply(&self, builder: &mut PaletteBuilder) -> Result<usize> {
        let mut placed = 0;

        for block in &self.blocks {
            let extra = block.nbt.as_ref().map(json_to_tag).transpose()?;
            builder.add_placement(block.pos, &block.name, Some(&block.properties), extra)?;
            placed += 1;
        }

        for fill in &self.fills {
            placed += builder.fill(fill.from, fill.to, &fill.name, Some(&fill.properties))?;
        }

        if !self.layers.is_empty() {
            let legend = self.legend()?;
            for layer in &self.layers {
                let grid = layer.to_grid()?;
                placed += place_layer(builder, &grid, &legend, layer.y, layer.skip_transparent)?;
            }
        }

        Ok(placed)
    }
}

/// Converts JSON into a tag: integers become Int, strings String, arrays List
/// and objects Compound. Arrays must be homogeneous; an empty array becomes an
/// empty list of kind End.
pub fn json_to_tag(value: &Value) -> Result<Tag> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Tag::Int)
            .ok_or_else(|| StrataError::ConfigError(format!("Not a 32-bit integer: {}", n))),
        Value::String(s) => Ok(Tag::String(s.clone())),
        Value::Array(items) => {
            let tags = items.iter().map(json_to_tag).collect::<Result<Vec<_>>>()?;
            let kind = tags.first().map(Tag::kind).unwrap_or(TagKind::End);
            Ok(Tag::List(TagList::from_tags(kind, tags)?))
        }
        Value::Object(map) => {
            let mut compound = Compound::new();
            for (key, value) in map {
                compound.insert(key.clone(), json_to_tag(value)?);
            }
            Ok(Tag::Compound(compound))
        }
        Value::Bool(_) | Value::Null => Err(StrataError::ConfigError(format!(
            "No tag kind for JSON value {}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use strata_common::Extent;

    #[test]
    fn test_json_to_tag() {
        assert_eq!(json_to_tag(&json!(5)).unwrap(), Tag::Int(5));
        assert_eq!(json_to_tag(&json!("a")).unwrap(), Tag::from("a"));
        assert_eq!(
            json_to_tag(&json!([1, 2])).unwrap(),
            Tag::List(TagList::of_ints([1, 2]))
        );
        assert_eq!(
            json_to_tag(&json!([])).unwrap(),
            Tag::List(TagList::new(TagKind::End))
        );

        let tag = json_to_tag(&json!({"Text": "hi", "Lines": ["a", "b"]})).unwrap();
        let compound = tag.as_compound().unwrap();
        assert_eq!(compound["Text"].as_string(), Some("hi"));
        assert_eq!(compound["Lines"].as_list().unwrap().kind(), TagKind::String);
    }

    #[test]
    fn test_json_to_tag_errors() {
        assert_matches!(
            json_to_tag(&json!([1, "two"])),
            Err(StrataError::HeterogeneousList {
                expected: 3,
                found: 8
            })
        );
        assert_matches!(json_to_tag(&json!(1.5)), Err(StrataError::ConfigError(_)));
        assert_matches!(
            json_to_tag(&json!(i64::from(i32::MAX) + 1)),
            Err(StrataError::ConfigError(_))
        );
        assert_matches!(json_to_tag(&json!(true)), Err(StrataError::ConfigError(_)));
    }

    #[test]
    fn test_apply_all_sections() {
        let blueprint = Blueprint::from_json_str(
            r##"{
                "blocks": [
                    {"pos": [0, 0, 0], "name": "minecraft:stone"},
                    {"pos": [0, 1, 0], "name": "minecraft:oak_sign", "nbt": {"Text1": "1:1"}}
                ],
                "fills": [
                    {"from": [1, 0, 0], "to": [2, 0, 1], "name": "minecraft:orange_wool"}
                ],
                "layers": [
                    {"y": 2, "width": 2, "pixels": ["#ff0000", "#00000000", "#ffffff", "#000000"]}
                ]
            }"##,
        )
        .unwrap();

        let mut builder = PaletteBuilder::default();
        assert_eq!(blueprint.apply(&mut builder).unwrap(), 2 + 4 + 2);
        assert!(builder.placements()[1].extra.is_some());

        let labels: Vec<&str> = builder.palette().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "minecraft:stone",
                "minecraft:oak_sign",
                "minecraft:orange_wool",
                "minecraft:redstone_wire",
            ]
        );
        assert_eq!(builder.finalize().size, Extent::new(3, 3, 2));
    }

    #[test]
    fn test_custom_legend() {
        let blueprint = Blueprint::from_json_str(
            r##"{
                "legend": {"#ffffff": {"name": "minecraft:quartz_block"}},
                "layers": [{"y": 0, "width": 1, "pixels": ["#ffffff", "#ff0000"]}]
            }"##,
        )
        .unwrap();
        let mut builder = PaletteBuilder::default();
        assert_eq!(blueprint.apply(&mut builder).unwrap(), 1);
        assert_eq!(builder.palette().get(0).unwrap().label, "minecraft:quartz_block");
    }

    #[test]
    fn test_ragged_layer() {
        let layer = LayerEntry {
            y: 0,
            width: 2,
            pixels: vec!["#ffffff".to_string(); 3],
            skip_transparent: true,
        };
        assert_matches!(layer.to_grid(), Err(StrataError::ConfigError(_)));
    }

    #[test]
    fn test_unknown_section() {
        assert_matches!(
            Blueprint::from_json_str(r#"{"entities": []}"#),
            Err(StrataError::ConfigError(_))
        );
    }
}
