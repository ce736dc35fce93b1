use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::console::{Console, Geometry};
use crate::error::ConeditError;
use crate::input::{Action, Parser, CSI};
use crate::key::Key;

pub trait AsKeys {
    fn as_keys(self) -> Vec<u8>;
}

impl AsKeys for &str {
    fn as_keys(self) -> Vec<u8> {
        self.bytes().collect()
    }
}

impl AsKeys for &[u8] {
    fn as_keys(self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> AsKeys for &[u8; N] {
    fn as_keys(self) -> Vec<u8> {
        self.to_vec()
    }
}

impl AsKeys for Key {
    fn as_keys(self) -> Vec<u8> {
        vec![self.into()]
    }
}

impl<const N: usize> AsKeys for [Key; N] {
    fn as_keys(self) -> Vec<u8> {
        self.into_iter().map(u8::from).collect()
    }
}

/// Key sequence mixing text and key codes
pub struct KeyBuilder {
    keys: Vec<u8>,
}

impl KeyBuilder {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn add(mut self, keys: impl AsKeys) -> Self {
        self.keys.extend(keys.as_keys());
        self
    }
}

impl AsKeys for KeyBuilder {
    fn as_keys(self) -> Vec<u8> {
        self.keys
    }
}

/// Cell grid shared by the mock console and the mock terminal
pub struct Screen {
    cells: Vec<Vec<char>>,
    reverse: Vec<Vec<bool>>,
    pub x: usize,
    pub y: usize,
    pub reverse_video: bool,
    pub cursor_visible: bool,
    columns: usize,
    rows: usize,
}

impl Screen {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec!['\0'; columns]; rows],
            reverse: vec![vec![false; columns]; rows],
            x: 0,
            y: 0,
            reverse_video: false,
            cursor_visible: false,
            columns,
            rows,
        }
    }

    pub fn put(&mut self, c: u8) {
        self.cells[self.y][self.x] = c as char;
        self.reverse[self.y][self.x] = self.reverse_video;

        self.x += 1;

        if self.x == self.columns {
            self.x = 0;
            self.y = (self.y + 1).min(self.rows - 1);
        }
    }

    pub fn move_to(&mut self, x: usize, y: usize) {
        self.x = x.min(self.columns - 1);
        self.y = y.min(self.rows - 1);
    }

    pub fn row_as_string(&self, row: usize) -> String {
        let s: String = self.cells[row]
            .iter()
            .map(|&c| if c == '\0' { ' ' } else { c })
            .collect();

        s.trim_end().into()
    }

    pub fn is_reverse(&self, x: usize, y: usize) -> bool {
        self.reverse[y][x]
    }
}

pub struct MockConsole {
    screen: Screen,
    keys: VecDeque<u8>,
    geometry: Geometry,
}

impl MockConsole {
    pub fn new() -> Self {
        let geometry = Geometry::default();

        Self {
            screen: Screen::new(geometry.columns, geometry.rows),
            keys: VecDeque::new(),
            geometry,
        }
    }

    pub fn with_keys(keys: impl AsKeys) -> Self {
        let mut this = Self::new();
        this.push_keys(keys);
        this
    }

    pub fn push_keys(&mut self, keys: impl AsKeys) {
        self.keys.extend(keys.as_keys());
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.screen.x, self.screen.y)
    }

    pub fn cursor_visible(&self) -> bool {
        self.screen.cursor_visible
    }

    pub fn reverse_video(&self) -> bool {
        self.screen.reverse_video
    }

    pub fn row_as_string(&self, row: usize) -> String {
        self.screen.row_as_string(row)
    }

    pub fn is_reverse(&self, x: usize, y: usize) -> bool {
        self.screen.is_reverse(x, y)
    }
}

impl Console for MockConsole {
    fn read_key(&mut self) -> Result<u8, ConeditError> {
        self.keys.pop_front().ok_or(ConeditError::Aborted)
    }

    fn write_char(&mut self, c: u8) -> Result<(), ConeditError> {
        self.screen.put(c);
        Ok(())
    }

    fn move_cursor_to(&mut self, x: usize, y: usize) -> Result<(), ConeditError> {
        self.screen.move_to(x, y);
        Ok(())
    }

    fn set_reverse_video(&mut self, on: bool) -> Result<(), ConeditError> {
        self.screen.reverse_video = on;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<bool, ConeditError> {
        let previous = self.screen.cursor_visible;
        self.screen.cursor_visible = visible;
        Ok(previous)
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }
}

/// Terminal interpreting the VT100 output of [`crate::io::IO`]
pub struct MockTerminal {
    parser: Parser,
    pub screen: Screen,
}

impl MockTerminal {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            parser: Parser::new(),
            screen: Screen::new(columns, rows),
        }
    }

    pub fn advance(&mut self, byte: u8) {
        match self.parser.advance(byte) {
            Action::Ignore => (),
            Action::Byte(b) => self.screen.put(b),
            Action::ControlSequenceIntroducer(csi) => match csi {
                CSI::CUP(row, column) => self.screen.move_to(column - 1, row - 1),
                CSI::SGR(7) => self.screen.reverse_video = true,
                CSI::SGR(0) | CSI::SGR(27) => self.screen.reverse_video = false,
                CSI::SM(25) => self.screen.cursor_visible = true,
                CSI::RM(25) => self.screen.cursor_visible = false,
                csi => unimplemented!("{:?}", csi),
            },
            Action::EscapeSequence(esc) => unimplemented!("{:?}", esc),
        }
    }

    pub fn advance_all(&mut self, bytes: impl IntoIterator<Item = u8>) {
        for b in bytes {
            self.advance(b);
        }
    }
}

pub struct MockKeyboard {
    rx: Receiver<u8>,
}

impl embedded_io::ErrorType for MockKeyboard {
    type Error = core::convert::Infallible;
}

impl embedded_io::Read for MockKeyboard {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.rx.recv() {
            Ok(byte) => {
                buf[0] = byte;
                Ok(1)
            }
            Err(_) => Ok(0),
        }
    }
}

pub struct MockDisplay {
    buffer: Vec<u8>,
    tx: Sender<u8>,
}

impl embedded_io::ErrorType for MockDisplay {
    type Error = core::convert::Infallible;
}

impl embedded_io::Write for MockDisplay {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.buffer.extend(buf.iter());
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        for b in self.buffer.drain(0..) {
            self.tx.send(b).unwrap();
        }

        Ok(())
    }
}

/// Channel backed keyboard and display. Returns the streams and the
/// test side ends: key sender and output receiver.
pub fn channel_io() -> (MockKeyboard, MockDisplay, Sender<u8>, Receiver<u8>) {
    let (keyboard_tx, keyboard_rx) = unbounded();
    let (display_tx, display_rx) = unbounded();

    (
        MockKeyboard { rx: keyboard_rx },
        MockDisplay {
            buffer: Vec::new(),
            tx: display_tx,
        },
        keyboard_tx,
        display_rx,
    )
}
