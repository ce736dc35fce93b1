//! Conedit is a `#[no_std]` input layer for small character consoles,
//! built around a 40 column screen. It provides three editors:
//!
//! - [`line_editor::edit_line`] – fixed capacity text field with
//!   overwrite-at-cursor editing
//! - [`number::edit_number`] – numeric field accepting decimal or, with
//!   a leading `$`, hexadecimal input
//! - [`menu::select_menu`] – vertical menu with a highlighted selection
//!
//! The editors are state machines drawing to any implementation of
//! [`console::Console`], which abstracts the keyboard and the character
//! screen. Keys are raw 8-bit codes (see [`key::Key`]), printable
//! characters are inserted as text.
//!
//! [`io::IO`] implements the console for VT100 compatible terminals on
//! top of [`embedded_io`], translating escape sequences into key codes.
//! It can be configured with [`builder::IOBuilder`]. With feature `std`
//! enabled, `IO::default()` wraps stdin and stdout.
//!
//! No allocation is needed. Line buffers are either static arrays or
//! borrowed slices.
//!
//! # Example
//! ```no_run
//! # #[cfg(feature = "std")]
//! # {
//! use conedit::io::{StdinWrapper, StdoutWrapper, IO};
//! use conedit::{console::Console, line_buffer::StaticLineBuffer};
//! use conedit::{line_editor::edit_line, menu::select_menu, number::edit_number};
//! use std::fmt::Write;
//! use termion::raw::IntoRawMode;
//!
//! let _raw = std::io::stdout().into_raw_mode().unwrap();
//! let mut io = IO::new(StdinWrapper::new(), StdoutWrapper::new());
//!
//! let choice = select_menu(&mut io, &["Read", "Write"], 0, 2, 2).unwrap();
//!
//! let mut buffer = StaticLineBuffer::<16>::from_str_static("DISK");
//! let name = edit_line(&mut io, &mut buffer, 2, 5).unwrap();
//! write!(io, "\x1b[7;3H{} {}", choice, String::from_utf8_lossy(name)).unwrap();
//!
//! let address = edit_number(&mut io, 0x0801, 5, 2, 9).unwrap();
//! write!(io, "\x1b[11;3H{:#x}", address).unwrap();
//! io.flush().unwrap();
//! # }
//! ```

#![no_std]

#[cfg(any(test, doc, feature = "std"))]
#[macro_use]
extern crate std;
pub mod builder;
pub mod console;
pub mod editor;
pub mod error;
mod input;
pub mod io;
pub mod key;
pub mod line_buffer;
pub mod line_editor;
pub mod menu;
pub mod number;

#[cfg(test)]
pub(crate) mod testlib;
