//! [`Console`] for VT100 compatible terminals over a byte stream.
//!
//! Keystrokes are passed through as raw key codes, so a keyboard that
//! already speaks the native codes works unchanged. For ordinary
//! terminals the usual sequences are translated: arrow keys,
//! Insert/Delete (`ESC [ 2~` / `ESC [ 3~`), Backspace and line feed.
//!
//! Use [`crate::builder::IOBuilder`] to change geometry or the
//! printability predicate.
use embedded_io::Error;

use crate::console::{Console, Geometry};
use crate::error::ConeditError;
use crate::input::{Action, Parser};
use crate::key::Key;

#[derive(Debug, Copy, Clone)]
pub(crate) struct UintToBytes<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> UintToBytes<N> {
    pub(crate) fn from_uint(mut n: usize) -> Option<Self> {
        if n < 10_usize.pow(N as u32) {
            let mut bytes = [0; N];

            for i in (0..N).rev() {
                bytes[i] = 0x30 + (n % 10) as u8;
                n /= 10;

                if n == 0 {
                    break;
                }
            }

            Some(Self { bytes })
        } else {
            None
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        let start = self.bytes.iter().take_while(|&&b| b == 0).count();
        &self.bytes[start..]
    }
}

pub struct IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    input: R,
    output: W,
    parser: Parser,
    geometry: Geometry,
    printable: fn(u8) -> bool,
    cursor_visible: bool,
}

impl<R, W> IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    /// Create IO wrapper from input and output with default settings
    pub fn new(input: R, output: W) -> Self {
        crate::builder::IOBuilder::new(input, output).build()
    }

    pub(crate) fn from_parts(
        input: R,
        output: W,
        geometry: Geometry,
        printable: fn(u8) -> bool,
        cursor_visible: bool,
    ) -> Self {
        Self {
            input,
            output,
            parser: Parser::new(),
            geometry,
            printable,
            cursor_visible,
        }
    }

    /// Consume wrapper and return input and output as tuple
    pub fn take(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn write(&mut self, buf: &[u8]) -> Result<(), ConeditError> {
        self.output
            .write_all(buf)
            .map_err(|e| ConeditError::WriteError(e.kind()))
    }

    fn read_byte(&mut self) -> Result<u8, ConeditError> {
        let mut buf = [0u8; 1];

        let len = self
            .input
            .read(&mut buf)
            .map_err(|e| ConeditError::ReadError(e.kind()))?;

        if len == 0 {
            Err(ConeditError::Aborted)
        } else {
            Ok(buf[0])
        }
    }

    fn write_uint(&mut self, n: usize) -> Result<(), ConeditError> {
        let n = UintToBytes::<4>::from_uint(n)
            .ok_or(ConeditError::WriteError(embedded_io::ErrorKind::InvalidInput))?;

        self.write(n.as_bytes())
    }
}

impl<R, W> Console for IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    fn flush(&mut self) -> Result<(), ConeditError> {
        self.output
            .flush()
            .map_err(|e| ConeditError::WriteError(e.kind()))
    }

    fn read_key(&mut self) -> Result<u8, ConeditError> {
        self.flush()?;

        loop {
            let byte = self.read_byte()?;

            match self.parser.advance(byte) {
                Action::Byte(b'\n') => break Ok(Key::Return.into()),
                Action::Byte(0x08) | Action::Byte(0x7f) => break Ok(Key::Delete.into()),
                Action::Byte(b) => break Ok(b),
                Action::ControlSequenceIntroducer(csi) => {
                    if let Some(key) = csi.key() {
                        break Ok(key.into());
                    }
                }
                Action::EscapeSequence(_) | Action::Ignore => (),
            }
        }
    }

    fn write_char(&mut self, c: u8) -> Result<(), ConeditError> {
        self.write(&[c])
    }

    fn write_str(&mut self, s: &[u8]) -> Result<(), ConeditError> {
        self.write(s)
    }

    fn move_cursor_to(&mut self, x: usize, y: usize) -> Result<(), ConeditError> {
        self.write(b"\x1b[")?;
        self.write_uint(y + 1)?;
        self.write(b";")?;
        self.write_uint(x + 1)?;
        self.write(b"H")
    }

    fn set_reverse_video(&mut self, on: bool) -> Result<(), ConeditError> {
        let sgr: &[u8] = if on { b"\x1b[7m" } else { b"\x1b[27m" };

        self.write(sgr)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<bool, ConeditError> {
        let mode: &[u8] = if visible { b"\x1b[?25h" } else { b"\x1b[?25l" };

        self.write(mode)?;

        Ok(core::mem::replace(&mut self.cursor_visible, visible))
    }

    fn is_printable(&self, code: u8) -> bool {
        (self.printable)(code)
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }
}

impl<R, W> core::fmt::Write for IO<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write(s.as_bytes()).or(Err(core::fmt::Error))
    }
}

#[cfg(feature = "std")]
pub mod std_io {
    //! IO implementation for `std`. Requires feature `std`.

    use super::*;
    use std::io::{Read, Stdin, Stdout, Write};

    impl Default for IO<StdinWrapper, StdoutWrapper> {
        fn default() -> Self {
            Self::new(StdinWrapper::new(), StdoutWrapper::new())
        }
    }

    /// Wrapper for std::io::stdin
    pub struct StdinWrapper(Stdin);

    impl StdinWrapper {
        pub fn new() -> Self {
            Self(std::io::stdin())
        }

        pub fn new_with(val: Stdin) -> Self {
            Self(val)
        }
    }

    impl Default for StdinWrapper {
        fn default() -> Self {
            Self::new()
        }
    }

    impl embedded_io::ErrorType for StdinWrapper {
        type Error = embedded_io::ErrorKind;
    }

    impl embedded_io::Read for StdinWrapper {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            self.0.read(buf).map_err(|e| e.kind().into())
        }
    }

    /// Wrapper for std::io::stdout
    pub struct StdoutWrapper(Stdout);

    impl StdoutWrapper {
        pub fn new() -> Self {
            Self(std::io::stdout())
        }

        pub fn new_with(val: Stdout) -> Self {
            Self(val)
        }
    }

    impl Default for StdoutWrapper {
        fn default() -> Self {
            Self::new()
        }
    }

    impl embedded_io::ErrorType for StdoutWrapper {
        type Error = embedded_io::ErrorKind;
    }

    impl embedded_io::Write for StdoutWrapper {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.write(buf).map_err(|e| e.kind().into())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.flush().map_err(|e| e.kind().into())
        }
    }
}

#[cfg(feature = "std")]
pub use std_io::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::IOBuilder;
    use crate::line_buffer::StaticLineBuffer;
    use crate::line_editor::edit_line;
    use crate::menu::select_menu;
    use crate::number::edit_number;
    use crate::testlib::{channel_io, MockTerminal};
    use std::string::String;
    use std::thread;
    use std::vec::Vec;

    fn output_as_string(rx: &crossbeam::channel::Receiver<u8>) -> String {
        String::from_utf8(rx.try_iter().collect()).unwrap()
    }

    #[test]
    fn uint_to_bytes() {
        assert_eq!(UintToBytes::<4>::from_uint(0).unwrap().as_bytes(), b"0");
        assert_eq!(UintToBytes::<4>::from_uint(25).unwrap().as_bytes(), b"25");
        assert_eq!(UintToBytes::<4>::from_uint(9999).unwrap().as_bytes(), b"9999");
        assert!(UintToBytes::<4>::from_uint(10000).is_none());
    }

    #[test]
    fn output_sequences() {
        let (keyboard, display, _keyboard_tx, display_rx) = channel_io();
        let mut io = IO::new(keyboard, display);

        io.move_cursor_to(3, 5).unwrap();
        io.write_char(b'a').unwrap();
        io.set_reverse_video(true).unwrap();
        io.write_str_at(0, 0, b"menu").unwrap();
        io.set_reverse_video(false).unwrap();
        io.flush().unwrap();

        assert_eq!(
            output_as_string(&display_rx),
            "\x1b[6;4Ha\x1b[7m\x1b[1;1Hmenu\x1b[27m"
        );

        assert_eq!(io.set_cursor_visible(false), Ok(true));
        assert_eq!(io.set_cursor_visible(true), Ok(false));
        io.flush().unwrap();

        assert_eq!(output_as_string(&display_rx), "\x1b[?25l\x1b[?25h");

        assert!(io.move_cursor_to(0, 10000).is_err());
    }

    #[test]
    fn key_translation() {
        let input: &[u8] =
            b"a\n\r\x7f\x08\x1b[A\x1b[B\x1b[C\x1b[D\x1b[2~\x1b[3~\x1b[5~\x1bOx\x91\x03";
        let (_, display, _, _) = channel_io();
        let mut io = IO::new(input, display);

        let keys: Vec<u8> = core::iter::from_fn(|| io.read_key().ok()).collect();

        assert_eq!(
            keys,
            [b'a', 0x0d, 0x0d, 0x14, 0x14, 0x91, 0x11, 0x1d, 0x9d, 0x94, 0x14, b'x', 0x91, 0x03]
        );

        assert_eq!(io.read_key(), Err(ConeditError::Aborted));
    }

    #[test]
    fn line_editor() {
        let (keyboard, display, keyboard_tx, display_rx) = channel_io();

        let handle = thread::spawn(move || {
            let mut io = IOBuilder::new(keyboard, display)
                .with_cursor_visible(false)
                .build();
            let mut buffer = StaticLineBuffer::<10>::from_str_static("ABC");

            edit_line(&mut io, &mut buffer, 2, 1).map(|s| s.to_vec())
        });

        for &b in b"\x1b[C\x1b[C\x1b[CXY\x7f\r" {
            keyboard_tx.send(b).unwrap();
        }

        assert_eq!(handle.join().unwrap(), Ok(b"ABCX".to_vec()));

        let mut terminal = MockTerminal::new(40, 25);
        terminal.advance_all(display_rx.try_iter());

        assert_eq!(terminal.screen.row_as_string(1), "  ABCX");
        assert_eq!((terminal.screen.x, terminal.screen.y), (6, 1));
        assert!(!terminal.screen.cursor_visible);
    }

    #[test]
    fn menu_and_number() {
        let (keyboard, display, keyboard_tx, display_rx) = channel_io();

        let handle = thread::spawn(move || {
            let mut io = IO::new(keyboard, display);

            let index = select_menu(&mut io, &["One", "Two", "Three"], 0, 1, 2)?;
            let number = edit_number(&mut io, 0x10, 5, 1, 10)?;

            Ok::<_, ConeditError>((index, number))
        });

        for &b in b"\x1b[A\x1b[A\r\x1b[D99\r" {
            keyboard_tx.send(b).unwrap();
        }

        assert_eq!(handle.join().unwrap(), Ok((1, 99010)));

        let mut terminal = MockTerminal::new(40, 25);
        terminal.advance_all(display_rx.try_iter());

        assert_eq!(terminal.screen.row_as_string(2), " One");
        assert_eq!(terminal.screen.row_as_string(3), " Two");
        assert_eq!(terminal.screen.row_as_string(4), " Three");
        assert!(terminal.screen.is_reverse(1, 3));
        assert!(!terminal.screen.is_reverse(1, 2));
        assert!(!terminal.screen.is_reverse(1, 4));

        assert_eq!(terminal.screen.row_as_string(10), " 99010");
        assert!(terminal.screen.cursor_visible);
    }

    #[test]
    fn field_keys_ignore_printability() {
        let (_, display, _, _display_rx) = channel_io();
        let input: &[u8] = b"2\x1b[D42\r";
        let mut io = IOBuilder::new(input, display)
            .with_printable(|c| c.is_ascii_uppercase())
            .build();

        assert_eq!(select_menu(&mut io, &["A", "B", "C"], 0, 0, 0), Ok(1));
        assert_eq!(edit_number(&mut io, 0, 2, 0, 5), Ok(42));
    }

    #[test]
    fn eight_bit_text() {
        let (_, display, _, _display_rx) = channel_io();
        let input: &[u8] = b"A\xc1\r";
        let mut io = IOBuilder::new(input, display)
            .with_printable(|c| (0x20..0x7f).contains(&c) || c >= 0xc0)
            .build();
        let mut buffer = StaticLineBuffer::<8>::new_static();

        assert_eq!(edit_line(&mut io, &mut buffer, 0, 0), Ok(&b"A\xc1"[..]));
        assert_eq!(buffer.as_str(), Err(ConeditError::InvalidText));
    }

    #[test]
    fn aborted() {
        let (keyboard, display, keyboard_tx, _display_rx) = channel_io();

        let handle = thread::spawn(move || {
            let mut io = IO::new(keyboard, display);
            let mut buffer = StaticLineBuffer::<10>::new_static();

            edit_line(&mut io, &mut buffer, 0, 0).map(|s| s.to_vec())
        });

        keyboard_tx.send(b'a').unwrap();
        drop(keyboard_tx);

        assert_eq!(handle.join().unwrap(), Err(ConeditError::Aborted));
    }
}
