//! Solver output: optimal value, winning stack and its checks.

use itertools::Itertools;

use crate::catalog::{Problem, Value};
use crate::error::StackViolation;

/// Orientation of a catalog entry relative to the box it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Dimensions as read from the input (even catalog index)
    AsGiven,
    /// Width and height swapped (odd catalog index)
    Swapped,
}

impl Rotation {
    /// 1 for the given orientation, 2 for the swapped one.
    pub fn number(self) -> u8 {
        match self {
            Rotation::AsGiven => 1,
            Rotation::Swapped => 2,
        }
    }
}

/// A stacked catalog entry expressed in terms of the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// 1-based position of the box in the input
    pub box_number: usize,
    pub rotation: Rotation,
}

impl Placement {
    /// Maps catalog index `2i` / `2i + 1` back to box `i + 1`.
    pub fn from_catalog_index(index: usize) -> Self {
        Self {
            box_number: index / 2 + 1,
            rotation: if index % 2 == 0 {
                Rotation::AsGiven
            } else {
                Rotation::Swapped
            },
        }
    }
}

/// The result of a solve: the optimal value and one stack achieving it.
///
/// The stack lists catalog indices from the base to the top and is empty
/// exactly when the value is zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    value: Value,
    stack: Vec<usize>,
}

impl Solution {
    pub fn new(value: Value, stack: Vec<usize>) -> Self {
        Self { value, stack }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// Catalog indices, base first.
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The stack as (box number, rotation) pairs, base first.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.stack.iter().map(|&index| Placement::from_catalog_index(index))
    }

    /// Sum of the stacked boxes' heights.
    ///
    /// # Panics
    ///
    /// Panics if the stack names a box outside the problem's catalog.
    pub fn total_height(&self, problem: &Problem) -> usize {
        self.stack.iter().map(|&index| problem.height_of(index)).sum()
    }

    /// Sum of the stacked boxes' values.
    ///
    /// # Panics
    ///
    /// Panics if the stack names a box outside the problem's catalog.
    pub fn total_value(&self, problem: &Problem) -> Value {
        self.stack
            .iter()
            .fold(0, |sum: Value, &index| sum.saturating_add(problem.value_of(index)))
    }

    /// Checks the stack against the rules of `problem`: known boxes, every box
    /// fitting on the one below, total height within the budget and values
    /// adding up to the reported optimum.
    pub fn verify(&self, problem: &Problem) -> Result<(), StackViolation> {
        let catalog = problem.boxes();

        if let Some((position, &index)) = self
            .stack
            .iter()
            .find_position(|&&index| index >= catalog.len() || index >= problem.values().len())
        {
            return Err(StackViolation::UnknownBox { position, index });
        }

        if let Some((position, (&lower, &upper))) = self
            .stack
            .iter()
            .tuple_windows()
            .find_position(|&(&lower, &upper)| !catalog[lower].supports(&catalog[upper]))
        {
            return Err(StackViolation::Unsupported {
                position: position + 1,
                lower,
                upper,
            });
        }

        let height = self.total_height(problem);
        if height > problem.max_height() {
            return Err(StackViolation::TooTall {
                height,
                limit: problem.max_height(),
            });
        }

        if self.value == 0 && !self.stack.is_empty() {
            return Err(StackViolation::ZeroValueStack {
                len: self.stack.len(),
            });
        }

        let actual = self.total_value(problem);
        if actual != self.value {
            return Err(StackViolation::ValueMismatch {
                reported: self.value,
                actual,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dimensions;

    fn scenario() -> Problem {
        // 0 = (4, 2, 4), 1 = (2, 4, 4), 2 = 3 = (2, 2, 2)
        Problem::with_rotations(
            4,
            [
                (Dimensions::new(4, 2, 4).unwrap(), 10),
                (Dimensions::new(2, 2, 2).unwrap(), 7),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_placements_follow_catalog_layout() {
        let placements: Vec<_> = Solution::new(0, vec![0, 1, 2, 5]).placements().collect();
        assert_eq!(
            placements,
            vec![
                Placement {
                    box_number: 1,
                    rotation: Rotation::AsGiven
                },
                Placement {
                    box_number: 1,
                    rotation: Rotation::Swapped
                },
                Placement {
                    box_number: 2,
                    rotation: Rotation::AsGiven
                },
                Placement {
                    box_number: 3,
                    rotation: Rotation::Swapped
                },
            ]
        );
        assert_eq!(Rotation::AsGiven.number(), 1);
        assert_eq!(Rotation::Swapped.number(), 2);
    }

    #[test]
    fn test_verify_accepts_valid_stacks() {
        let problem = scenario();
        assert_eq!(Solution::new(17, vec![0, 2]).verify(&problem), Ok(()));
        assert_eq!(Solution::new(20, vec![0, 0]).verify(&problem), Ok(()));
        assert_eq!(Solution::new(0, vec![]).verify(&problem), Ok(()));
    }

    #[test]
    fn test_verify_rejects_overhang() {
        assert_eq!(
            Solution::new(17, vec![2, 0]).verify(&scenario()),
            Err(StackViolation::Unsupported {
                position: 1,
                lower: 2,
                upper: 0
            })
        );
    }

    #[test]
    fn test_verify_rejects_tall_stack() {
        assert_eq!(
            Solution::new(21, vec![0, 2, 3]).verify(&scenario()),
            Err(StackViolation::TooTall {
                height: 6,
                limit: 4
            })
        );
    }

    #[test]
    fn test_verify_rejects_wrong_value() {
        assert_eq!(
            Solution::new(18, vec![0, 2]).verify(&scenario()),
            Err(StackViolation::ValueMismatch {
                reported: 18,
                actual: 17
            })
        );
        assert_eq!(
            Solution::new(10, vec![]).verify(&scenario()),
            Err(StackViolation::ValueMismatch {
                reported: 10,
                actual: 0
            })
        );
    }

    #[test]
    fn test_verify_rejects_unknown_box() {
        assert_eq!(
            Solution::new(10, vec![0, 4]).verify(&scenario()),
            Err(StackViolation::UnknownBox {
                position: 1,
                index: 4
            })
        );
    }

    #[test]
    fn test_verify_rejects_zero_value_stack() {
        let problem = Problem::with_rotations(3, [(Dimensions::new(1, 1, 1).unwrap(), 0)]).unwrap();
        assert_eq!(
            Solution::new(0, vec![0]).verify(&problem),
            Err(StackViolation::ZeroValueStack { len: 1 })
        );
    }
}
