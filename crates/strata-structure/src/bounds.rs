use strata_common::{BlockPos, Extent, Result, StrataError};

/// Running axis-aligned bounds over every position ever included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    range: Option<(BlockPos, BlockPos)>,
}

impl BoundingBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box spanning `min..=max`; the corners are normalized first.
    pub fn spanning(a: BlockPos, b: BlockPos) -> Self {
        BoundingBox {
            range: Some((a.min(b), a.max(b))),
        }
    }

    /// Fails when including `pos` would stretch an axis past what an i64
    /// extent can hold.
    pub fn check_include(&self, pos: BlockPos) -> Result<()> {
        let Some((min, max)) = self.range else {
            return Ok(());
        };
        let (min, max) = (min.min(pos), max.max(pos));
        for (axis, lo, hi, value) in [
            ('x', min.x, max.x, pos.x),
            ('y', min.y, max.y, pos.y),
            ('z', min.z, max.z, pos.z),
        ] {
            match hi.checked_sub(lo) {
                Some(span) if span < i64::MAX => {}
                _ => return Err(StrataError::CoordinateOutOfRange { axis, value }),
            }
        }
        Ok(())
    }

    pub fn include(&mut self, pos: BlockPos) {
        self.range = Some(match self.range {
            None => (pos, pos),
            Some((min, max)) => (min.min(pos), max.max(pos)),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    pub fn min(&self) -> Option<BlockPos> {
        self.range.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<BlockPos> {
        self.range.map(|(_, max)| max)
    }

    pub fn range(&self) -> Option<(BlockPos, BlockPos)> {
        self.range
    }

    pub fn extent(&self) -> Extent {
        match self.range {
            None => Extent::EMPTY,
            Some((min, max)) => Extent::between(min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_empty() {
        let bounds = BoundingBox::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.min(), None);
        assert_eq!(bounds.extent(), Extent::EMPTY);
    }

    #[test]
    fn test_include_widens() {
        let mut bounds = BoundingBox::new();
        bounds.include(BlockPos::new(3, 3, 3));
        assert_eq!(bounds.extent(), Extent::new(1, 1, 1));

        bounds.include(BlockPos::new(-1, 5, 3));
        assert_eq!(bounds.min(), Some(BlockPos::new(-1, 3, 3)));
        assert_eq!(bounds.max(), Some(BlockPos::new(3, 5, 3)));
        assert_eq!(bounds.extent(), Extent::new(5, 3, 1));

        // Inner points never shrink the box.
        bounds.include(BlockPos::new(0, 4, 3));
        assert_eq!(bounds.extent(), Extent::new(5, 3, 1));
    }

    #[test]
    fn test_spanning_normalizes_corners() {
        let bounds = BoundingBox::spanning(BlockPos::new(2, 0, -1), BlockPos::new(0, 1, 1));
        assert_eq!(
            bounds.range(),
            Some((BlockPos::new(0, 0, -1), BlockPos::new(2, 1, 1)))
        );
    }

    #[test]
    fn test_check_include_span_limit() {
        let mut bounds = BoundingBox::new();
        assert!(bounds.check_include(BlockPos::new(i64::MIN, 0, 0)).is_ok());
        bounds.include(BlockPos::new(-1, 0, 0));

        assert!(bounds.check_include(BlockPos::new(i64::MAX - 2, 0, 0)).is_ok());
        assert_matches!(
            bounds.check_include(BlockPos::new(i64::MAX, 0, 0)),
            Err(StrataError::CoordinateOutOfRange {
                axis: 'x',
                value: i64::MAX
            })
        );
        assert_matches!(
            bounds.check_include(BlockPos::new(0, 0, i64::MIN)),
            Err(StrataError::CoordinateOutOfRange { axis: 'z', .. })
        );
    }
}
