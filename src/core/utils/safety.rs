//! Slot access for the grid's `unsafe` flat accessors.
//!
//! `Grid::get_unchecked`, `get_unchecked_mut` and `set_unchecked` promise the
//! caller skips bounds checks. Debug builds keep them anyway so a bad index
//! in a test panics at the slice instead of corrupting memory; release builds
//! go straight to `get_unchecked`.
//!
//! ```rust
//! use grid_array::fast;
//!
//! // 3x2 tile buffer, row-major
//! let mut tiles = vec![0u8; 6];
//! fast!(tiles, [4] = 7);        // write (1, 1)
//! *fast!(mut tiles, [5]) += 1;  // bump (2, 1)
//! assert_eq!(*fast!(tiles, [4]), 7);
//! assert_eq!(tiles, [0, 0, 0, 0, 7, 1]);
//! ```

/// `fast!(buf, [i])` reads, `fast!(mut buf, [i])` borrows mutably,
/// `fast!(buf, [i] = v)` writes. Callers must hold `i < buf.len()`.
#[macro_export]
macro_rules! fast {
    (mut $buf:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &mut $buf[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $buf.get_unchecked_mut($index) }
        }
    }};

    ($buf:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$buf[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $buf.get_unchecked($index) }
        }
    }};

    ($buf:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $buf[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$buf.get_unchecked_mut($index) = $val; }
        }
    }};
}
