//! Optimum selection over the final table row.

use crate::catalog::Value;

/// Best cell of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimum {
    pub value: Value,
    /// Column of the first cell holding `value`; None for an empty row.
    pub index: Option<usize>,
}

/// Returns the maximum of `row` and the first column reaching it.
///
/// An empty row yields `(0, None)`.
pub fn select_optimum(row: &[Value]) -> Optimum {
    row.iter().enumerate().fold(
        Optimum {
            value: 0,
            index: None,
        },
        |best, (column, &value)| {
            if best.index.is_none() || value > best.value {
                Optimum {
                    value,
                    index: Some(column),
                }
            } else {
                best
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_maximum_wins() {
        assert_eq!(
            select_optimum(&[3, 9, 1, 9]),
            Optimum {
                value: 9,
                index: Some(1)
            }
        );
    }

    #[test]
    fn test_all_zero_row_selects_first_column() {
        assert_eq!(
            select_optimum(&[0, 0, 0]),
            Optimum {
                value: 0,
                index: Some(0)
            }
        );
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(
            select_optimum(&[]),
            Optimum {
                value: 0,
                index: None
            }
        );
    }
}
