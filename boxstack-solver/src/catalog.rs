//! Box catalog: dimensions, values and the bounded problem instance

use crate::error::{ProblemError, SolveError};

/// Value carried by a box. Stacked values are summed.
pub type Value = u64;

/// Dimensions of a box as it is placed in a stack.
///
/// `height` is the vertical extent consumed from the height budget,
/// `width` and `depth` form the footprint used by the stability rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
    depth: u32,
}

impl Dimensions {
    /// Creates a box, rejecting zero-sized axes.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, ProblemError> {
        for (axis, size) in [("width", width), ("height", height), ("depth", depth)] {
            if size == 0 {
                return Err(ProblemError::ZeroDimension { axis });
            }
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The second orientation of this box: width and height swapped, depth kept.
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            depth: self.depth,
        }
    }

    /// Returns true if `upper` may rest directly on `self`.
    ///
    /// A box always supports a copy of itself.
    #[inline]
    pub fn supports(&self, upper: &Dimensions) -> bool {
        self.width >= upper.width && self.depth >= upper.depth
    }
}

/// A box stacking instance.
///
/// The catalog has a fixed capacity; boxes and values are appended
/// independently and the instance is only solvable once both lists
/// are full. Catalog entries are usable any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    capacity: usize,
    max_height: usize,
    boxes: Vec<Dimensions>,
    values: Vec<Value>,
}

impl Problem {
    /// Creates an empty instance with room for `capacity` catalog entries.
    pub fn new(capacity: usize, max_height: usize) -> Result<Self, ProblemError> {
        if capacity == 0 {
            return Err(ProblemError::InvalidCapacity(capacity));
        }

        let mut boxes = Vec::new();
        boxes.try_reserve_exact(capacity)?;
        let mut values = Vec::new();
        values.try_reserve_exact(capacity)?;

        Ok(Self {
            capacity,
            max_height,
            boxes,
            values,
        })
    }

    /// Builds a complete instance from original boxes, inserting both
    /// orientations of each one next to each other.
    ///
    /// Catalog entry `2i` is box `i` as given and `2i + 1` is its rotation;
    /// both carry the box's value.
    pub fn with_rotations<I>(max_height: usize, boxes: I) -> Result<Self, ProblemError>
    where
        I: IntoIterator<Item = (Dimensions, Value)>,
        I::IntoIter: ExactSizeIterator,
    {
        let boxes = boxes.into_iter();
        let mut problem = Self::new(boxes.len() * 2, max_height)?;
        for (dims, value) in boxes {
            problem.add_value(value)?;
            problem.add_value(value)?;
            problem.add_rotations(dims)?;
        }
        Ok(problem)
    }

    /// Appends a box, returning its catalog index.
    pub fn add_box(&mut self, dims: Dimensions) -> Result<usize, ProblemError> {
        if self.boxes.len() >= self.capacity {
            return Err(ProblemError::CatalogFull {
                capacity: self.capacity,
            });
        }
        self.boxes.push(dims);
        Ok(self.boxes.len() - 1)
    }

    /// Appends a box as given followed by its rotated twin.
    pub fn add_rotations(&mut self, dims: Dimensions) -> Result<(), ProblemError> {
        if self.capacity - self.boxes.len() < 2 {
            return Err(ProblemError::CatalogFull {
                capacity: self.capacity,
            });
        }
        self.boxes.push(dims);
        self.boxes.push(dims.rotated());
        Ok(())
    }

    /// Appends a value, returning the index it belongs to.
    pub fn add_value(&mut self, value: Value) -> Result<usize, ProblemError> {
        if self.values.len() >= self.capacity {
            return Err(ProblemError::ValuesFull {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(self.values.len() - 1)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn boxes(&self) -> &[Dimensions] {
        &self.boxes
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Height of catalog entry `index` as a table offset.
    #[inline]
    pub(crate) fn height_of(&self, index: usize) -> usize {
        self.boxes[index].height as usize
    }

    #[inline]
    pub(crate) fn value_of(&self, index: usize) -> Value {
        self.values[index]
    }

    pub fn is_complete(&self) -> bool {
        self.boxes.len() == self.capacity && self.values.len() == self.capacity
    }

    /// Fails unless every box and value slot has been filled.
    pub fn ensure_complete(&self) -> Result<(), SolveError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(SolveError::Incomplete {
                capacity: self.capacity,
                boxes: self.boxes.len(),
                values: self.values.len(),
            })
        }
    }
}
