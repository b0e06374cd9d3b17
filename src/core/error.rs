//! Grid errors
//!
//! `IndexOutOfRange` is the raw address-translation failure. Checked reads and
//! flood fill re-signal it as `OutOfRange`, tagged with the access that failed.

use std::error::Error;
use std::fmt;

/// Which grid operation rejected its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Get,
    GetMut,
    Replace,
    FloodFill,
}

impl Access {
    pub fn name(self) -> &'static str {
        match self {
            Access::Get => "get",
            Access::GetMut => "get_mut",
            Access::Replace => "replace",
            Access::FloodFill => "flood_fill",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `y * width + x` fell outside `[0, len)`
    IndexOutOfRange { x: i32, y: i32, index: i64, len: usize },
    /// A checked operation was called with coordinates that failed validation
    OutOfRange {
        access: Access,
        x: i32,
        y: i32,
        source: Option<Box<GridError>>,
    },
    /// Restored buffer does not hold `width * height` elements
    ShapeMismatch { width: u32, height: u32, len: usize },
    /// A zero side, or `width * height` does not fit in `usize`
    InvalidDimensions { width: u32, height: u32 },
}

impl GridError {
    /// Re-signal an indexing failure as an access failure
    pub(crate) fn at(access: Access, x: i32, y: i32, cause: GridError) -> Self {
        GridError::OutOfRange {
            access,
            x,
            y,
            source: Some(Box::new(cause)),
        }
    }

    /// Offending coordinates, when the error carries any
    pub fn coords(&self) -> Option<(i32, i32)> {
        match *self {
            GridError::IndexOutOfRange { x, y, .. } | GridError::OutOfRange { x, y, .. } => {
                Some((x, y))
            }
            GridError::ShapeMismatch { .. } | GridError::InvalidDimensions { .. } => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            GridError::IndexOutOfRange { .. } | GridError::OutOfRange { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfRange { x, y, index, len } => write!(
                f,
                "index {} for ({}, {}) is outside of a grid of {} elements",
                index, x, y, len
            ),
            GridError::OutOfRange { access, x, y, .. } => write!(
                f,
                "{} at ({}, {}) is out of range, check your x and y",
                access, x, y
            ),
            GridError::ShapeMismatch { width, height, len } => write!(
                f,
                "buffer of {} elements does not fit a {}x{} grid",
                len, width, height
            ),
            GridError::InvalidDimensions { width, height } => {
                write!(f, "{}x{} is not a valid grid size", width, height)
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GridError::OutOfRange {
                source: Some(cause),
                ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
