//! Stackability index: which boxes may rest directly on each box.

use log::trace;

use crate::catalog::Dimensions;
use crate::error::SolveError;

/// For every catalog entry `i`, the ascending list of entries `j` with
/// `width(j) <= width(i)` and `depth(j) <= depth(i)`.
///
/// Every box is listed on top of itself. List order is the iteration order
/// of both engines and so decides ties between equally valued stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackabilityIndex {
    on_top: Vec<Vec<usize>>,
}

impl StackabilityIndex {
    /// Builds the relation in O(n²).
    ///
    /// Fails without returning a partial index if any list cannot be allocated.
    pub fn build(boxes: &[Dimensions]) -> Result<Self, SolveError> {
        let mut on_top = Vec::new();
        on_top
            .try_reserve_exact(boxes.len())
            .map_err(|source| SolveError::Allocation {
                structure: "stackability index",
                source,
            })?;

        for lower in boxes {
            let count = boxes.iter().filter(|upper| lower.supports(upper)).count();

            let mut uppers = Vec::new();
            uppers
                .try_reserve_exact(count)
                .map_err(|source| SolveError::Allocation {
                    structure: "stackability list",
                    source,
                })?;
            uppers.extend(
                boxes
                    .iter()
                    .enumerate()
                    .filter(|(_, upper)| lower.supports(upper))
                    .map(|(j, _)| j),
            );
            on_top.push(uppers);
        }

        trace!(
            "stackability index: {} boxes, {} pairs",
            on_top.len(),
            on_top.iter().map(Vec::len).sum::<usize>()
        );
        Ok(Self { on_top })
    }

    /// Boxes that may be placed directly on `lower`, in index order.
    #[inline]
    pub fn on_top_of(&self, lower: usize) -> &[usize] {
        &self.on_top[lower]
    }

    pub fn len(&self) -> usize {
        self.on_top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.on_top.is_empty()
    }

    /// Total number of (lower, upper) pairs in the relation.
    pub fn pair_count(&self) -> usize {
        self.on_top.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32, depth: u32) -> Dimensions {
        Dimensions::new(width, height, depth).unwrap()
    }

    #[test]
    fn test_index_lists_smaller_footprints_in_order() {
        let boxes = [dims(4, 2, 4), dims(2, 4, 4), dims(2, 2, 2), dims(2, 2, 2)];
        let index = StackabilityIndex::build(&boxes).unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(index.on_top_of(0), &[0, 1, 2, 3]);
        assert_eq!(index.on_top_of(1), &[1, 2, 3]);
        assert_eq!(index.on_top_of(2), &[2, 3]);
        assert_eq!(index.on_top_of(3), &[2, 3]);
        assert_eq!(index.pair_count(), 11);
    }

    #[test]
    fn test_every_box_stacks_on_itself() {
        let boxes = [dims(1, 1, 9), dims(9, 1, 1), dims(5, 5, 5)];
        let index = StackabilityIndex::build(&boxes).unwrap();

        for i in 0..boxes.len() {
            assert!(index.on_top_of(i).contains(&i), "box {} missing itself", i);
        }
        // Crossed footprints never stack on each other
        assert!(!index.on_top_of(0).contains(&1));
        assert!(!index.on_top_of(1).contains(&0));
    }

    #[test]
    fn test_height_is_ignored() {
        let boxes = [dims(3, 1, 3), dims(3, 100, 3)];
        let index = StackabilityIndex::build(&boxes).unwrap();
        assert_eq!(index.on_top_of(0), &[0, 1]);
        assert_eq!(index.on_top_of(1), &[0, 1]);
    }

    #[test]
    fn test_empty_catalog() {
        let index = StackabilityIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.pair_count(), 0);
    }
}
