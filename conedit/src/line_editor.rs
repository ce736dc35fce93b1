//! In-place editor for a single line of printable text.
//!
//! Typing writes at the cursor, overwriting the character under it, and
//! advances the cursor. Delete removes the character left of the cursor
//! and closes the gap. Return is the only way out.

use log::debug;

use crate::console::Console;
use crate::editor::{run, Editor, Status};
use crate::error::ConeditError;
use crate::key::{Action, Key};
use crate::line_buffer::{Buffer, LineBuffer};

pub struct LineEdit<'a, B: Buffer> {
    buffer: &'a mut LineBuffer<B>,
    x: usize,
    y: usize,
    pos: usize,
}

impl<'a, B: Buffer> LineEdit<'a, B> {
    pub fn new(buffer: &'a mut LineBuffer<B>, x: usize, y: usize) -> Self {
        let pos = buffer.len();

        Self { buffer, x, y, pos }
    }

    /// Cursor offset into the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    fn move_cursor<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), ConeditError> {
        console.move_cursor_to(self.x + self.pos, self.y)
    }

    fn delete<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), ConeditError> {
        self.pos -= 1;
        self.buffer.remove(self.pos);

        console.move_cursor_to(self.x + self.pos, self.y)?;

        // Redraw the shifted tail and blank the rest of the field
        for i in self.pos..self.buffer.max_len() {
            console.write_char(self.buffer.get(i).unwrap_or(b' '))?;
        }

        self.move_cursor(console)
    }
}

impl<B: Buffer> Editor for LineEdit<'_, B> {
    type Output = ();

    fn start<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), ConeditError> {
        console.write_str_at(self.x, self.y, self.buffer.as_bytes())?;
        self.move_cursor(console)
    }

    fn advance<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        action: Action,
    ) -> Result<Status<()>, ConeditError> {
        match action {
            Action::Print(c) => {
                if self.pos < self.buffer.max_len() && self.buffer.put(self.pos, c) {
                    self.pos += 1;
                    console.write_char(c)?;
                }
            }
            Action::Key(Key::Left) => {
                if self.pos > 0 {
                    self.pos -= 1;
                    self.move_cursor(console)?;
                }
            }
            Action::Key(Key::Right) => {
                if self.buffer.get(self.pos).is_some() {
                    self.pos += 1;
                    self.move_cursor(console)?;
                }
            }
            Action::Key(Key::Delete) => {
                if self.pos > 0 {
                    self.delete(console)?;
                }
            }
            Action::Key(Key::Return) => return Ok(Status::Done(())),
            Action::Key(_) | Action::Char(_) => (),
        }

        Ok(Status::Continue)
    }
}

/// Edit `buffer` in place at column `x`, row `y` and return the
/// committed text.
///
/// The text holds whatever codes the console accepts as printable, so
/// it is returned as bytes. Use [`LineBuffer::as_str`] for UTF-8.
///
/// The field is `buffer.max_len()` cells wide. The cursor is forced
/// visible while editing and restored afterwards.
///
/// # Example
/// ```
/// # use conedit::console::Console;
/// # use conedit::error::ConeditError;
/// # struct Keys(&'static [u8]);
/// # impl Console for Keys {
/// #     fn read_key(&mut self) -> Result<u8, ConeditError> {
/// #         let (&k, rest) = self.0.split_first().ok_or(ConeditError::Aborted)?;
/// #         self.0 = rest;
/// #         Ok(k)
/// #     }
/// #     fn write_char(&mut self, _: u8) -> Result<(), ConeditError> { Ok(()) }
/// #     fn move_cursor_to(&mut self, _: usize, _: usize) -> Result<(), ConeditError> { Ok(()) }
/// #     fn set_reverse_video(&mut self, _: bool) -> Result<(), ConeditError> { Ok(()) }
/// #     fn set_cursor_visible(&mut self, _: bool) -> Result<bool, ConeditError> { Ok(false) }
/// # }
/// use conedit::line_buffer::StaticLineBuffer;
/// use conedit::line_editor::edit_line;
///
/// let mut console = Keys(b"DE\r");
/// let mut name = StaticLineBuffer::<16>::from_str_static("ABC");
///
/// assert_eq!(edit_line(&mut console, &mut name, 6, 3), Ok(&b"ABCDE"[..]));
/// ```
pub fn edit_line<'b, C, B>(
    console: &mut C,
    buffer: &'b mut LineBuffer<B>,
    x: usize,
    y: usize,
) -> Result<&'b [u8], ConeditError>
where
    C: Console + ?Sized,
    B: Buffer,
{
    run(console, LineEdit::new(&mut *buffer, x, y))?;

    let buffer: &'b LineBuffer<B> = buffer;

    debug!("line committed: {} of {} bytes", buffer.len(), buffer.max_len());

    Ok(buffer.as_bytes())
}
