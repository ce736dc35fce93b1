//! Fixed width numeric field.
//!
//! The field is edited as text. It starts out as the preset rendered in
//! hex (`$02a`) and the first character decides how the text is parsed
//! on commit: `$` for hexadecimal, a digit for decimal. Left and Delete
//! both just step back, the field never shrinks.

use log::debug;

use crate::console::Console;
use crate::editor::{run, Editor, Status};
use crate::error::ConeditError;
use crate::key::{Action, Key};

const FIELD_SIZE: usize = 12;

/// Widest accepted field, in characters
pub const MAX_WIDTH: usize = FIELD_SIZE - 1;

const HEX_MARKER: u8 = b'$';

/// Parse the longest run of `radix` digits after optional leading
/// spaces. Saturates at `u32::MAX`, no digits parse to zero.
pub fn parse_uint(text: &[u8], radix: u32) -> u32 {
    let mut value: u32 = 0;

    for digit in text
        .iter()
        .skip_while(|&&b| b == b' ')
        .map_while(|&b| (b as char).to_digit(radix))
    {
        value = match value.checked_mul(radix).and_then(|v| v.checked_add(digit)) {
            Some(value) => value,
            None => return u32::MAX,
        };
    }

    value
}

pub struct NumberEdit {
    field: [u8; FIELD_SIZE],
    width: usize,
    x: usize,
    y: usize,
    pos: usize,
}

impl NumberEdit {
    /// `width` counts the `$` marker and is clamped to `1..=MAX_WIDTH`
    pub fn new(preset: u32, width: usize, x: usize, y: usize) -> Self {
        let width = width.clamp(1, MAX_WIDTH);
        let mut field = [0; FIELD_SIZE];

        let significant = (8 - preset.leading_zeros() as usize / 4).max(1);
        let digits = significant.max(width - 1);

        field[0] = HEX_MARKER;

        for i in 0..digits {
            let shift = 4 * (digits - 1 - i);
            let nibble = if shift < 32 { (preset >> shift) & 0xf } else { 0 };

            field[1 + i] = b"0123456789abcdef"[nibble as usize];
        }

        Self {
            field,
            width,
            x,
            y,
            pos: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn text(&self) -> &[u8] {
        let len = self.field.iter().position(|&b| b == 0).unwrap_or(FIELD_SIZE);

        &self.field[..len]
    }

    pub fn is_hex(&self) -> bool {
        self.field[0] == HEX_MARKER
    }

    pub fn value(&self) -> u32 {
        let text = self.text();

        if self.is_hex() {
            parse_uint(&text[1..], 16)
        } else {
            parse_uint(text, 10)
        }
    }

    fn accepts(&self, c: u8) -> bool {
        if self.pos >= self.width {
            false
        } else if self.pos == 0 {
            c == HEX_MARKER || c.is_ascii_digit()
        } else if self.is_hex() {
            c.is_ascii_hexdigit() || c == b' '
        } else {
            c.is_ascii_digit() || c == b' '
        }
    }

    fn move_cursor<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), ConeditError> {
        console.move_cursor_to(self.x + self.pos, self.y)
    }
}

impl Editor for NumberEdit {
    type Output = u32;

    fn start<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), ConeditError> {
        console.write_str_at(self.x, self.y, self.text())?;
        self.move_cursor(console)
    }

    fn advance<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        action: Action,
    ) -> Result<Status<u32>, ConeditError> {
        match action {
            Action::Key(Key::Delete) | Action::Key(Key::Left) => {
                if self.pos > 0 {
                    self.pos -= 1;
                    self.move_cursor(console)?;
                }
            }
            Action::Key(Key::Right) => {
                if self.pos < self.width && self.field[self.pos] != 0 {
                    self.pos += 1;
                    self.move_cursor(console)?;
                }
            }
            Action::Key(Key::Return) => return Ok(Status::Done(self.value())),
            Action::Print(c) | Action::Char(c) => {
                if self.accepts(c) {
                    self.field[self.pos] = c;
                    self.pos += 1;
                    console.write_char(c)?;
                }
            }
            Action::Key(_) => (),
        }

        Ok(Status::Continue)
    }
}

/// Edit a number in a field `width` characters wide at column `x`, row
/// `y`, starting from `preset`.
pub fn edit_number<C>(
    console: &mut C,
    preset: u32,
    width: usize,
    x: usize,
    y: usize,
) -> Result<u32, ConeditError>
where
    C: Console + ?Sized,
{
    let value = run(console, NumberEdit::new(preset, width, x, y))?;

    debug!("number committed: {}", value);

    Ok(value)
}
