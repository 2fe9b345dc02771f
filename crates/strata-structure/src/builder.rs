use crate::bounds::BoundingBox;
use crate::config::DEFAULT_DATA_VERSION;
use crate::document::{Document, Placement};
use crate::palette::{Attributes, Palette};
use strata_common::{BlockPos, Extent, Result, StrataError};
use strata_logger::{log, LogSeverity};
use strata_nbt::Tag;

/// Accumulates placements, interning each distinct (label, attributes) pair
/// into the palette and tracking the bounding box of everything placed.
///
/// Placements at an already used position are appended, not merged.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    palette: Palette,
    placements: Vec<Placement>,
    bounds: BoundingBox,
    data_version: i32,
}

impl Default for PaletteBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_VERSION)
    }
}

impl PaletteBuilder {
    pub fn new(data_version: i32) -> Self {
        PaletteBuilder {
            palette: Palette::new(),
            placements: Vec::new(),
            bounds: BoundingBox::new(),
            data_version,
        }
    }

    /// Places `label` at `pos` and returns its palette index. A position that
    /// would stretch the box past an i64 extent on any axis is rejected and
    /// leaves the builder untouched.
    pub fn add_placement(
        &mut self,
        pos: impl Into<BlockPos>,
        label: &str,
        attributes: Option<&Attributes>,
        extra: Option<Tag>,
    ) -> Result<usize> {
        if label.is_empty() {
            return Err(StrataError::InvalidLabel(label.to_owned()));
        }

        let pos = pos.into();
        self.bounds.check_include(pos)?;

        let empty = Attributes::new();
        let attributes = attributes.unwrap_or(&empty);
        let (state, added) = self.palette.intern(label, attributes);
        if added {
            log(
                format!("Palette entry {}: {} {:?}", state, label, attributes),
                LogSeverity::Debug,
            );
        }

        self.placements.push(Placement { pos, state, extra });
        self.bounds.include(pos);
        Ok(state)
    }

    pub fn add_block(&mut self, pos: impl Into<BlockPos>, label: &str) -> Result<usize> {
        self.add_placement(pos, label, None, None)
    }

    pub fn add_block_with(
        &mut self,
        pos: impl Into<BlockPos>,
        label: &str,
        attributes: &Attributes,
    ) -> Result<usize> {
        self.add_placement(pos, label, Some(attributes), None)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn data_version(&self) -> i32 {
        self.data_version
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Extent of the current bounding box, (0,0,0) when nothing is placed.
    pub fn size(&self) -> Extent {
        self.bounds.extent()
    }

    /// Shifts every placement so the minimum corner becomes the origin. After
    /// this the box is `(0,0,0)..=(size-1)`, so calling it again is a no-op.
    pub fn translate_to_origin(&mut self) -> Extent {
        let Some((min, max)) = self.bounds.range() else {
            return Extent::EMPTY;
        };

        if min != BlockPos::ORIGIN {
            for placement in &mut self.placements {
                placement.pos = placement.pos.offset_from(min);
            }
            self.bounds = BoundingBox::spanning(BlockPos::ORIGIN, max.offset_from(min));
        }
        self.bounds.extent()
    }

    /// Translates to the origin and snapshots the result. The builder stays
    /// usable; finalizing again without new placements yields the same document.
    pub fn finalize(&mut self) -> Document {
        let size = self.translate_to_origin();
        self.log_finalized(size);
        Document {
            size,
            palette: self.palette.to_entries(),
            placements: self.placements.clone(),
            entities: Vec::new(),
            data_version: self.data_version,
        }
    }

    /// Like `finalize`, but hands over the placements without copying.
    pub fn into_document(mut self) -> Document {
        let size = self.translate_to_origin();
        self.log_finalized(size);
        Document {
            size,
            palette: self.palette.into_entries(),
            placements: self.placements,
            entities: Vec::new(),
            data_version: self.data_version,
        }
    }

    fn log_finalized(&self, size: Extent) {
        log(
            format!(
                "Finalized structure {}x{}x{}: {} placements, {} palette entries",
                size.dx,
                size.dy,
                size.dz,
                self.placements.len(),
                self.palette.len()
            ),
            LogSeverity::Debug,
        );
    }
}
