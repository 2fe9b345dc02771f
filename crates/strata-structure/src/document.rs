use crate::palette::PaletteEntry;
use strata_common::{BlockPos, Extent, Result, StrataError};
use strata_nbt::{Compound, NbtFile, Tag, TagList};

/// One positioned reference into the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub pos: BlockPos,
    pub state: usize,
    /// Per-placement data, written verbatim under `nbt`.
    pub extra: Option<Tag>,
}

impl Placement {
    pub fn to_compound(&self) -> Result<Compound> {
        let mut compound = Compound::new();
        compound.insert("pos".to_string(), Tag::List(position_list(self.pos)?));
        compound.insert("state".to_string(), Tag::Int(index_to_int(self.state)?));
        if let Some(extra) = &self.extra {
            compound.insert("nbt".to_string(), extra.clone());
        }
        Ok(compound)
    }
}

/// A finalized structure: origin-relative placements plus the palette they
/// index into.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub size: Extent,
    pub palette: Vec<PaletteEntry>,
    pub placements: Vec<Placement>,
    /// Reserved; always empty.
    pub entities: Vec<Compound>,
    pub data_version: i32,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Builds the root compound:
    /// `size`, `palette`, `blocks`, `entities`, `DataVersion`, in that order.
    pub fn to_compound(&self) -> Result<Compound> {
        let size = TagList::of_ints([
            to_int('x', self.size.dx)?,
            to_int('y', self.size.dy)?,
            to_int('z', self.size.dz)?,
        ]);
        let palette = TagList::of_compounds(self.palette.iter().map(PaletteEntry::to_compound));
        let blocks = TagList::of_compounds(
            self.placements
                .iter()
                .map(Placement::to_compound)
                .collect::<Result<Vec<_>>>()?,
        );
        let entities = TagList::of_compounds(self.entities.iter().cloned());

        let mut root = Compound::new();
        root.insert("size".to_string(), Tag::List(size));
        root.insert("palette".to_string(), Tag::List(palette));
        root.insert("blocks".to_string(), Tag::List(blocks));
        root.insert("entities".to_string(), Tag::List(entities));
        root.insert("DataVersion".to_string(), Tag::Int(self.data_version));
        Ok(root)
    }

    pub fn to_nbt_file(&self, root_name: &str) -> Result<NbtFile> {
        Ok(NbtFile::new(root_name.to_owned(), self.to_compound()?))
    }
}

fn position_list(pos: BlockPos) -> Result<TagList> {
    Ok(TagList::of_ints([
        to_int('x', pos.x)?,
        to_int('y', pos.y)?,
        to_int('z', pos.z)?,
    ]))
}

fn to_int(axis: char, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| StrataError::CoordinateOutOfRange { axis, value })
}

fn index_to_int(index: usize) -> Result<i32> {
    i32::try_from(index).map_err(|_| StrataError::IndexOutOfRange { index })
}
