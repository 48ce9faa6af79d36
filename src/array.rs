//! Two-dimensional integer array with checked `(row, column)` access.

use ndarray::Array2;
use std::error;
use std::fmt;
use std::mem;

/// Error from array construction and element access.
#[derive(Debug, Eq, PartialEq)]
pub enum ArrayError {
    InvalidArgument { rows: isize, columns: isize },
    OutOfRange {
        row: isize,
        column: isize,
        rows: usize,
        columns: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArrayError::InvalidArgument { rows, columns } => {
                if rows <= 0 {
                    write!(f, "Number of rows must be greater than 0, got {}", rows)
                } else if columns <= 0 {
                    write!(
                        f,
                        "Number of columns must be greater than 0, got {}",
                        columns
                    )
                } else {
                    write!(f, "A {}x{} array does not fit in memory", rows, columns)
                }
            }
            ArrayError::OutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "Subscript ({}, {}) out of range for a {}x{} array",
                row, column, rows, columns
            ),
        }
    }
}

impl error::Error for ArrayError {}

/// A `rows` by `columns` array of integers, zero-initialised and stored
/// row-major in a single owned buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct DoubleSubscriptedArray {
    data: Array2<i32>,
}

impl DoubleSubscriptedArray {
    /// Constructs a zero array. Both dimensions have to be positive and the
    /// buffer size in bytes has to fit in an `isize`.
    pub fn new(rows: isize, columns: isize) -> Result<DoubleSubscriptedArray, ArrayError> {
        if rows <= 0 || columns <= 0 {
            debug!("Rejected array dimensions {}x{}", rows, columns);
            return Err(ArrayError::InvalidArgument { rows, columns });
        }

        let bytes = (rows as usize)
            .checked_mul(columns as usize)
            .and_then(|n| n.checked_mul(mem::size_of::<i32>()));
        match bytes {
            Some(b) if b <= isize::max_value() as usize => {}
            _ => {
                debug!("Array dimensions {}x{} overflow", rows, columns);
                return Err(ArrayError::InvalidArgument { rows, columns });
            }
        }

        debug!("Allocating {}x{} array", rows, columns);
        Ok(DoubleSubscriptedArray {
            data: Array2::zeros((rows as usize, columns as usize)),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.data.dim().1
    }

    /// Maps a signed subscript to a buffer index, if it is inside the array.
    fn index(&self, row: isize, column: isize) -> Result<(usize, usize), ArrayError> {
        let (rows, columns) = self.data.dim();
        if row < 0 || column < 0 || row as usize >= rows || column as usize >= columns {
            trace!("Subscript ({}, {}) out of range", row, column);
            return Err(ArrayError::OutOfRange {
                row,
                column,
                rows,
                columns,
            });
        }
        Ok((row as usize, column as usize))
    }

    /// Returns a copy of the element at `(row, column)`.
    pub fn get(&self, row: isize, column: isize) -> Result<i32, ArrayError> {
        let i = self.index(row, column)?;
        Ok(self.data[i])
    }

    /// Returns a modifiable reference to the element at `(row, column)`.
    pub fn get_mut(&mut self, row: isize, column: isize) -> Result<&mut i32, ArrayError> {
        let i = self.index(row, column)?;
        Ok(&mut self.data[i])
    }

    pub fn set(&mut self, row: isize, column: isize, value: i32) -> Result<(), ArrayError> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }
}

impl Default for DoubleSubscriptedArray {
    /// A 10x10 zero array.
    fn default() -> Self {
        DoubleSubscriptedArray {
            data: Array2::zeros((10, 10)),
        }
    }
}

impl Clone for DoubleSubscriptedArray {
    fn clone(&self) -> Self {
        DoubleSubscriptedArray {
            data: self.data.clone(),
        }
    }

    /// Reuses the buffer when the shapes agree.
    fn clone_from(&mut self, source: &Self) {
        if self.data.dim() == source.data.dim() {
            self.data.assign(&source.data);
        } else {
            debug!(
                "Resizing array from {:?} to {:?}",
                self.data.dim(),
                source.data.dim()
            );
            self.data = source.data.clone();
        }
    }
}

impl fmt::Display for DoubleSubscriptedArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.data.outer_iter() {
            for e in row.iter() {
                write!(f, "{} ", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[test]
fn test_new_is_zeroed() {
    let a = DoubleSubscriptedArray::new(3, 4).unwrap();
    assert_eq!((a.rows(), a.columns()), (3, 4));
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(a.get(i, j), Ok(0));
        }
    }
}

#[test]
fn test_new_invalid_dimensions() {
    assert_eq!(
        DoubleSubscriptedArray::new(0, 4),
        Err(ArrayError::InvalidArgument {
            rows: 0,
            columns: 4
        })
    );
    assert_eq!(
        DoubleSubscriptedArray::new(2, -1),
        Err(ArrayError::InvalidArgument {
            rows: 2,
            columns: -1
        })
    );
    let e = DoubleSubscriptedArray::new(-3, -3).unwrap_err();
    assert_eq!(
        e.to_string(),
        "Number of rows must be greater than 0, got -3"
    );
}

#[test]
fn test_new_size_overflow() {
    for &(r, c) in &[
        (isize::max_value(), 2),
        (2, isize::max_value()),
        (isize::max_value(), isize::max_value()),
        (isize::max_value() / 2, 1),
    ] {
        assert_eq!(
            DoubleSubscriptedArray::new(r, c),
            Err(ArrayError::InvalidArgument { rows: r, columns: c })
        );
    }
    let e = DoubleSubscriptedArray::new(isize::max_value(), 2).unwrap_err();
    assert!(e.to_string().contains("does not fit in memory"));
}

#[test]
fn test_default_shape() {
    let a = DoubleSubscriptedArray::default();
    assert_eq!((a.rows(), a.columns()), (10, 10));
}

#[test]
fn test_out_of_range() {
    let mut a = DoubleSubscriptedArray::new(2, 3).unwrap();
    for &(r, c) in &[(-1, 0), (0, -1), (2, 0), (0, 3), (5, 5)] {
        assert_eq!(
            a.get(r, c),
            Err(ArrayError::OutOfRange {
                row: r,
                column: c,
                rows: 2,
                columns: 3
            })
        );
        assert!(a.get_mut(r, c).is_err());
    }
    assert!(a.get(1, 2).is_ok());
}

#[test]
fn test_get_mut_writes_through() {
    let mut a = DoubleSubscriptedArray::new(2, 2).unwrap();
    *a.get_mut(1, 0).unwrap() = 7;
    a.set(0, 1, -2).unwrap();
    assert_eq!(a.get(1, 0), Ok(7));
    assert_eq!(a.get(0, 1), Ok(-2));
    assert_eq!(a.get(0, 0), Ok(0));
}

#[test]
fn test_equality() {
    let mut a = DoubleSubscriptedArray::new(2, 2).unwrap();
    let b = DoubleSubscriptedArray::new(2, 2).unwrap();
    let c = DoubleSubscriptedArray::new(1, 4).unwrap();
    assert_eq!(a, b);
    assert!(a != c);
    a.set(1, 1, 1).unwrap();
    assert!(a != b);
}

#[test]
fn test_clone_from_resizes() {
    let mut source = DoubleSubscriptedArray::new(3, 2).unwrap();
    source.set(2, 1, 9).unwrap();

    let mut same = DoubleSubscriptedArray::new(3, 2).unwrap();
    same.clone_from(&source);
    assert_eq!(same, source);

    let mut other = DoubleSubscriptedArray::new(1, 1).unwrap();
    other.clone_from(&source);
    assert_eq!((other.rows(), other.columns()), (3, 2));
    assert_eq!(other, source);

    let copy = source.clone();
    source.set(0, 0, 1).unwrap();
    assert_eq!(copy.get(0, 0), Ok(0));
}

#[test]
fn test_display() {
    let mut a = DoubleSubscriptedArray::new(2, 3).unwrap();
    for i in 0..2 {
        for j in 0..3 {
            a.set(i, j, (i + j) as i32).unwrap();
        }
    }
    assert_eq!(a.to_string(), "0 1 2 \n1 2 3 \n");
}
