use indexmap::IndexMap;
use strata_nbt::{Compound, Tag};

/// Block-state properties in the order the caller supplied them.
pub type Attributes = IndexMap<String, String>;

/// Dedup key: the label plus the attribute pairs sorted by name, so two
/// attribute maps with the same contents intern to the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PaletteKey {
    label: String,
    attributes: Vec<(String, String)>,
}

impl PaletteKey {
    fn new(label: &str, attributes: &Attributes) -> Self {
        let mut pairs: Vec<(String, String)> = attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort();
        PaletteKey {
            label: label.to_owned(),
            attributes: pairs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub label: String,
    pub attributes: Attributes,
}

impl PaletteEntry {
    /// `{Name: label}`, plus `Properties` when there are any attributes.
    pub fn to_compound(&self) -> Compound {
        let mut compound = Compound::new();
        compound.insert("Name".to_string(), Tag::from(self.label.as_str()));
        if !self.attributes.is_empty() {
            let properties: Compound = self
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), Tag::from(v.as_str())))
                .collect();
            compound.insert("Properties".to_string(), Tag::Compound(properties));
        }
        compound
    }
}

/// Interned palette. Indices are assigned in first-seen order and never change.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: IndexMap<PaletteKey, PaletteEntry>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry's index and whether it was newly added.
    pub fn intern(&mut self, label: &str, attributes: &Attributes) -> (usize, bool) {
        let key = PaletteKey::new(label, attributes);
        if let Some(index) = self.entries.get_index_of(&key) {
            return (index, false);
        }

        let entry = PaletteEntry {
            label: label.to_owned(),
            attributes: attributes.clone(),
        };
        let (index, _) = self.entries.insert_full(key, entry);
        (index, true)
    }

    pub fn index_of(&self, label: &str, attributes: &Attributes) -> Option<usize> {
        self.entries.get_index_of(&PaletteKey::new(label, attributes))
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.values()
    }

    pub fn to_entries(&self) -> Vec<PaletteEntry> {
        self.iter().cloned().collect()
    }

    pub fn into_entries(self) -> Vec<PaletteEntry> {
        self.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_seen_order() {
        let mut palette = Palette::new();
        assert_eq!(palette.intern("stone", &Attributes::new()), (0, true));
        assert_eq!(palette.intern("dirt", &Attributes::new()), (1, true));
        assert_eq!(palette.intern("stone", &Attributes::new()), (0, false));
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(1).unwrap().label, "dirt");
    }

    #[test]
    fn test_attribute_order_ignored_for_dedup() {
        let mut palette = Palette::new();
        let a = attrs(&[("facing", "east"), ("delay", "1")]);
        let b = attrs(&[("delay", "1"), ("facing", "east")]);
        assert_eq!(palette.intern("repeater", &a), (0, true));
        assert_eq!(palette.intern("repeater", &b), (0, false));
        // The first-seen attribute order is what gets serialized.
        let keys: Vec<&str> = palette
            .get(0)
            .unwrap()
            .attributes
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["facing", "delay"]);
    }

    #[test]
    fn test_attributes_distinguish_entries() {
        let mut palette = Palette::new();
        palette.intern("dropper", &attrs(&[("facing", "up")]));
        palette.intern("dropper", &attrs(&[("facing", "down")]));
        palette.intern("dropper", &Attributes::new());
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.index_of("dropper", &attrs(&[("facing", "down")])), Some(1));
        assert_eq!(palette.index_of("dropper", &attrs(&[("facing", "north")])), None);
    }

    #[test]
    fn test_entry_compound() {
        let plain = PaletteEntry {
            label: "minecraft:stone".to_string(),
            attributes: Attributes::new(),
        };
        let compound = plain.to_compound();
        assert_eq!(compound.len(), 1);
        assert_eq!(compound["Name"].as_string(), Some("minecraft:stone"));

        let with_props = PaletteEntry {
            label: "minecraft:dropper".to_string(),
            attributes: attrs(&[("facing", "up")]),
        };
        let compound = with_props.to_compound();
        let properties = compound["Properties"].as_compound().unwrap();
        assert_eq!(properties["facing"].as_string(), Some("up"));
    }
}
