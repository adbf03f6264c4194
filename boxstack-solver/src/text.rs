//! Text formats read and written by the solver front ends.
//!
//! # Input
//!
//! Whitespace-separated integers (line breaks carry no meaning):
//!
//! ```text
//! n h
//! v_1 .. v_n
//! l_1 a_1 p_1
//! ..
//! l_n a_n p_n
//! ```
//!
//! `n` boxes, maximum stack height `h`, one value per box, then width (`l`),
//! height (`a`) and depth (`p`) of each box. Box `i` becomes catalog entries
//! `2i` (as given) and `2i + 1` (width and height swapped).
//!
//! # Output
//!
//! ```text
//! <optimal value>
//! <number of stacked boxes>
//! <box number> <rotation>     one line per box, base first
//! ```

use std::str::{FromStr, SplitWhitespace};

use itertools::Itertools;
use log::debug;

use crate::catalog::{Dimensions, Problem, Value};
use crate::error::ParseError;
use crate::solution::Solution;

/// Cursor over the input tokens, tracking positions for error messages.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    /// Number of tokens not read yet.
    fn remaining(&self) -> usize {
        self.inner.clone().count()
    }

    fn next_number<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T, ParseError> {
        let token = self.inner.next().ok_or_else(|| {
            ParseError::MissingData(format!("expected {} after token {}", what(), self.position))
        })?;
        self.position += 1;

        token.parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "token {} ({:?}) is not a valid {}",
                self.position,
                token,
                what()
            ))
        })
    }
}

/// Parses an instance, doubling every box into its two rotations.
///
/// Nothing is returned unless the whole instance was read.
pub fn parse_problem(input: &str) -> Result<Problem, ParseError> {
    let mut tokens = Tokens::new(input);

    let count: usize = tokens.next_number(|| "box count".to_string())?;
    let max_height: usize = tokens.next_number(|| "maximum height".to_string())?;
    let capacity = count
        .checked_mul(2)
        .ok_or_else(|| ParseError::InvalidFormat(format!("box count {} is too large", count)))?;

    // One value and three dimensions per box must follow before anything is reserved
    let needed = count
        .checked_mul(4)
        .ok_or_else(|| ParseError::InvalidFormat(format!("box count {} is too large", count)))?;
    let remaining = tokens.remaining();
    if remaining < needed {
        return Err(ParseError::MissingData(format!(
            "box count {} needs {} more tokens, found {}",
            count, needed, remaining
        )));
    }

    let mut problem = Problem::new(capacity, max_height)?;

    for number in 1..=count {
        let value: Value = tokens.next_number(|| format!("value of box {}", number))?;
        problem.add_value(value)?;
        problem.add_value(value)?;
    }

    for number in 1..=count {
        let width: u32 = tokens.next_number(|| format!("width of box {}", number))?;
        let height: u32 = tokens.next_number(|| format!("height of box {}", number))?;
        let depth: u32 = tokens.next_number(|| format!("depth of box {}", number))?;
        problem.add_rotations(Dimensions::new(width, height, depth)?)?;
    }

    let trailing = tokens.inner.count();
    if trailing > 0 {
        debug!("ignoring {} trailing tokens after box {}", trailing, count);
    }

    debug_assert!(problem.is_complete());
    Ok(problem)
}

/// Renders a solution in the output format.
pub fn render_solution(solution: &Solution) -> String {
    let header = [solution.value().to_string(), solution.len().to_string()];
    let placements = solution
        .placements()
        .map(|placement| format!("{} {}", placement.box_number, placement.rotation.number()));

    let mut out = header.into_iter().chain(placements).join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProblemError;

    #[test]
    fn test_parse_doubles_catalog() {
        let problem = parse_problem("2 10\n5\n8\n2 3 2\n4 1 6\n").unwrap();

        assert_eq!(problem.capacity(), 4);
        assert_eq!(problem.max_height(), 10);
        assert_eq!(problem.values(), &[5, 5, 8, 8]);
        assert_eq!(
            problem.boxes(),
            &[
                Dimensions::new(2, 3, 2).unwrap(),
                Dimensions::new(3, 2, 2).unwrap(),
                Dimensions::new(4, 1, 6).unwrap(),
                Dimensions::new(1, 4, 6).unwrap(),
            ]
        );
    }

    #[test]
    fn test_line_breaks_are_not_significant() {
        let compact = parse_problem("1 10 5 2 3 2").unwrap();
        let spread = parse_problem("1\n10\n\n5\n2\n3\n2").unwrap();
        assert_eq!(compact, spread);
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        assert!(parse_problem("1 10 5 2 3 2 99 99").is_ok());
    }

    #[test]
    fn test_missing_dimension() {
        let err = parse_problem("1 10 5 2 3").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingData("box count 1 needs 4 more tokens, found 3".to_string())
        );
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(matches!(
            parse_problem("x 10"),
            Err(ParseError::InvalidFormat(_))
        ));
        // Negative values and dimensions are rejected
        assert!(matches!(
            parse_problem("1 10 -5 2 3 2"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_problem("1 -1 5 2 3 2"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_problem() {
        assert_eq!(
            parse_problem("0 10"),
            Err(ParseError::Problem(ProblemError::InvalidCapacity(0)))
        );
        assert_eq!(
            parse_problem("1 10 5 2 0 2"),
            Err(ParseError::Problem(ProblemError::ZeroDimension { axis: "height" }))
        );
    }

    #[test]
    fn test_huge_count_without_data_fails_before_reserving() {
        assert_eq!(
            parse_problem("100000000 1"),
            Err(ParseError::MissingData(
                "box count 100000000 needs 400000000 more tokens, found 0".to_string()
            ))
        );
        assert!(matches!(
            parse_problem(&format!("{} 1", usize::MAX / 2)),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_problem(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_render_solution() {
        let solution = Solution::new(20, vec![0, 3, 2]);
        assert_eq!(render_solution(&solution), "20\n3\n1 1\n2 2\n2 1\n");
    }

    #[test]
    fn test_render_empty_solution() {
        assert_eq!(render_solution(&Solution::default()), "0\n0\n");
    }
}
