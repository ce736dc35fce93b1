//! Console driver capability consumed by the editors.
//!
//! Coordinates are zero-based, `x` is the column and `y` the row.

use core::ops::{Deref, DerefMut};

use crate::error::ConeditError;
use crate::key::is_ascii_printable;

/// Screen layout of the console
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Geometry {
    pub columns: usize,
    pub rows: usize,
    /// First row of the main working area
    pub main_top: usize,
    /// First row of the status area below the main working area
    pub status_start: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 25,
            main_top: 2,
            status_start: 22,
        }
    }
}

/// Character-cell console with a blocking keyboard
pub trait Console {
    /// Block until a key is pressed and return its raw code
    fn read_key(&mut self) -> Result<u8, ConeditError>;

    /// Write character at the cursor and advance the cursor
    fn write_char(&mut self, c: u8) -> Result<(), ConeditError>;

    fn move_cursor_to(&mut self, x: usize, y: usize) -> Result<(), ConeditError>;

    /// Toggle highlight for subsequent writes
    fn set_reverse_video(&mut self, on: bool) -> Result<(), ConeditError>;

    /// Show or hide the text cursor, returning the previous state
    fn set_cursor_visible(&mut self, visible: bool) -> Result<bool, ConeditError>;

    /// Push buffered output to the screen
    fn flush(&mut self) -> Result<(), ConeditError> {
        Ok(())
    }

    fn is_printable(&self, code: u8) -> bool {
        is_ascii_printable(code)
    }

    fn geometry(&self) -> Geometry {
        Geometry::default()
    }

    fn write_str(&mut self, s: &[u8]) -> Result<(), ConeditError> {
        for &c in s {
            self.write_char(c)?;
        }

        Ok(())
    }

    fn write_str_at(&mut self, x: usize, y: usize, s: &[u8]) -> Result<(), ConeditError> {
        self.move_cursor_to(x, y)?;
        self.write_str(s)
    }

    /// Blank `width` cells starting at `x`, `y`
    fn clear_region(&mut self, x: usize, y: usize, width: usize) -> Result<(), ConeditError> {
        self.move_cursor_to(x, y)?;

        for _ in 0..width {
            self.write_char(b' ')?;
        }

        self.move_cursor_to(x, y)
    }

    /// Wait for any key and discard it
    fn wait_key(&mut self) -> Result<(), ConeditError> {
        self.read_key().map(|_| ())
    }

    /// Clear the main working area, keeping the two rows above the
    /// status area
    fn clear_main_area(&mut self) -> Result<(), ConeditError> {
        let geometry = self.geometry();

        for row in geometry.main_top..geometry.status_start.saturating_sub(2) {
            self.clear_region(0, row, geometry.columns)?;
        }

        Ok(())
    }

    /// Clear the main working area down to the status area
    fn clear_main_area_full(&mut self) -> Result<(), ConeditError> {
        let geometry = self.geometry();

        for row in geometry.main_top..geometry.status_start {
            self.clear_region(0, row, geometry.columns)?;
        }

        Ok(())
    }
}

/// Forces the cursor visible while alive.
///
/// Call [`CursorScope::release`] to restore the previous visibility and
/// observe errors. An unreleased scope restores it when dropped and
/// ignores failures.
pub struct CursorScope<'a, C: Console + ?Sized> {
    console: &'a mut C,
    previous: bool,
    released: bool,
}

impl<'a, C: Console + ?Sized> CursorScope<'a, C> {
    pub fn enter(console: &'a mut C) -> Result<Self, ConeditError> {
        let previous = console.set_cursor_visible(true)?;

        Ok(Self {
            console,
            previous,
            released: false,
        })
    }

    pub fn release(mut self) -> Result<(), ConeditError> {
        self.released = true;
        self.console.set_cursor_visible(self.previous).map(|_| ())
    }
}

impl<C: Console + ?Sized> Deref for CursorScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console + ?Sized> DerefMut for CursorScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console + ?Sized> Drop for CursorScope<'_, C> {
    fn drop(&mut self) {
        if !self.released {
            let _ = self.console.set_cursor_visible(self.previous);
        }
    }
}
