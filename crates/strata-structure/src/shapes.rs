use crate::builder::PaletteBuilder;
use crate::palette::Attributes;
use std::cmp::Ordering;
use strata_common::{BlockPos, Result};

impl PaletteBuilder {
    /// Fills the inclusive cuboid between two corners, given in any order.
    /// Returns the number of placements made.
    pub fn fill(
        &mut self,
        a: impl Into<BlockPos>,
        b: impl Into<BlockPos>,
        label: &str,
        attributes: Option<&Attributes>,
    ) -> Result<usize> {
        let (a, b) = (a.into(), b.into());
        let (min, max) = (a.min(b), a.max(b));
        let mut placed = 0;
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.add_placement((x, y, z), label, attributes, None)?;
                    placed += 1;
                }
            }
        }
        Ok(placed)
    }

    /// Walks from `a` to `b`, stepping every axis that has not yet arrived by
    /// one per cell, and places each visited cell including both ends.
    pub fn line(
        &mut self,
        a: impl Into<BlockPos>,
        b: impl Into<BlockPos>,
        label: &str,
        attributes: Option<&Attributes>,
    ) -> Result<usize> {
        let (mut cur, end) = (a.into(), b.into());
        let mut placed = 0;
        loop {
            self.add_placement(cur, label, attributes, None)?;
            placed += 1;
            if cur == end {
                return Ok(placed);
            }
            cur.x += step(cur.x, end.x);
            cur.y += step(cur.y, end.y);
            cur.z += step(cur.z, end.z);
        }
    }
}

/// One unit from `from` towards `to`, or zero once arrived.
fn step(from: i64, to: i64) -> i64 {
    match to.cmp(&from) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use strata_common::{Extent, StrataError};

    #[test]
    fn test_fill_counts_and_order() {
        let mut builder = PaletteBuilder::default();
        let placed = builder
            .fill((2, 3, 1), (0, 1, 0), "minecraft:orange_wool", None)
            .unwrap();
        assert_eq!(placed, 3 * 3 * 2);
        assert_eq!(builder.palette().len(), 1);
        assert_eq!(builder.placements()[0].pos, BlockPos::new(0, 1, 0));
        assert_eq!(builder.placements()[1].pos, BlockPos::new(0, 1, 1));
        assert_eq!(builder.size(), Extent::new(3, 3, 2));
    }

    #[test]
    fn test_fill_single_cell() {
        let mut builder = PaletteBuilder::default();
        assert_eq!(builder.fill((4, 4, 4), (4, 4, 4), "a", None).unwrap(), 1);
    }

    #[test]
    fn test_line_axis_aligned() {
        let mut builder = PaletteBuilder::default();
        let placed = builder.line((0, 0, 0), (0, 0, -4), "wire", None).unwrap();
        assert_eq!(placed, 5);
        assert_eq!(builder.placements()[4].pos, BlockPos::new(0, 0, -4));
    }

    #[test]
    fn test_line_diagonal_then_straight() {
        let mut builder = PaletteBuilder::default();
        let placed = builder.line((0, 0, 0), (2, 0, 4), "wire", None).unwrap();
        let visited: Vec<BlockPos> = builder.placements().iter().map(|p| p.pos).collect();
        assert_eq!(placed, 5);
        assert_eq!(
            visited,
            vec![
                BlockPos::new(0, 0, 0),
                BlockPos::new(1, 0, 1),
                BlockPos::new(2, 0, 2),
                BlockPos::new(2, 0, 3),
                BlockPos::new(2, 0, 4),
            ]
        );
    }

    #[test]
    fn test_step_at_i64_bounds() {
        assert_eq!(step(i64::MIN, i64::MAX), 1);
        assert_eq!(step(i64::MAX, i64::MIN), -1);
        assert_eq!(step(i64::MIN, i64::MIN), 0);
    }

    #[test]
    fn test_line_near_i64_bounds() {
        let mut builder = PaletteBuilder::default();
        let placed = builder
            .line((i64::MIN, i64::MAX, 0), (i64::MIN + 2, i64::MAX - 1, 0), "wire", None)
            .unwrap();
        let visited: Vec<BlockPos> = builder.placements().iter().map(|p| p.pos).collect();
        assert_eq!(placed, 3);
        assert_eq!(
            visited,
            vec![
                BlockPos::new(i64::MIN, i64::MAX, 0),
                BlockPos::new(i64::MIN + 1, i64::MAX - 1, 0),
                BlockPos::new(i64::MIN + 2, i64::MAX - 1, 0),
            ]
        );
    }

    #[test]
    fn test_line_between_extreme_endpoints() {
        let mut builder = PaletteBuilder::default();
        builder.add_block((i64::MAX, 0, 0), "lamp").unwrap();

        // The first cell is already too far from the existing box.
        assert_matches!(
            builder.line((i64::MIN, 0, 0), (1, 0, 0), "wire", None),
            Err(StrataError::CoordinateOutOfRange { axis: 'x', .. })
        );
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_shapes_reject_empty_label() {
        let mut builder = PaletteBuilder::default();
        assert_matches!(
            builder.fill((0, 0, 0), (1, 1, 1), "", None),
            Err(StrataError::InvalidLabel(_))
        );
        assert_matches!(
            builder.line((0, 0, 0), (1, 1, 1), "", None),
            Err(StrataError::InvalidLabel(_))
        );
        assert!(builder.is_empty());
    }
}
