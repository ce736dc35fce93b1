//! Vertical menu with a highlighted selection.
//!
//! The whole menu is redrawn after every keystroke. Up and Down wrap
//! around, Return commits the highlighted item and the digits `1`-`9`
//! pick an item directly.

use log::debug;

use crate::console::Console;
use crate::editor::{run, Editor, Status};
use crate::error::ConeditError;
use crate::key::{Action, Key};

pub struct Menu<'a> {
    items: &'a [&'a str],
    sel: usize,
    x: usize,
    y: usize,
}

impl<'a> Menu<'a> {
    /// An initial selection past the last item selects the last item
    pub fn new(items: &'a [&'a str], sel: usize, x: usize, y: usize) -> Result<Self, ConeditError> {
        if items.is_empty() {
            return Err(ConeditError::EmptyMenu);
        }

        Ok(Self {
            items,
            sel: sel.min(items.len() - 1),
            x,
            y,
        })
    }

    pub fn selection(&self) -> usize {
        self.sel
    }

    fn draw<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), ConeditError> {
        for (i, item) in self.items.iter().enumerate() {
            console.set_reverse_video(i == self.sel)?;
            console.write_str_at(self.x, self.y + i, item.as_bytes())?;
            console.set_reverse_video(false)?;
        }

        Ok(())
    }

    fn up(&mut self) {
        self.sel = if self.sel == 0 {
            self.items.len() - 1
        } else {
            self.sel - 1
        };
    }

    fn down(&mut self) {
        self.sel = if self.sel >= self.items.len() - 1 {
            0
        } else {
            self.sel + 1
        };
    }
}

impl Editor for Menu<'_> {
    type Output = usize;

    const SHOW_CURSOR: bool = false;

    fn start<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), ConeditError> {
        self.draw(console)
    }

    fn advance<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        action: Action,
    ) -> Result<Status<usize>, ConeditError> {
        match action {
            Action::Print(c @ b'1'..=b'9') | Action::Char(c @ b'1'..=b'9') => {
                let index = (c - b'1') as usize;

                if index < self.items.len() {
                    return Ok(Status::Done(index));
                }
            }
            Action::Key(Key::Return) => return Ok(Status::Done(self.sel)),
            Action::Key(Key::Up) => self.up(),
            Action::Key(Key::Down) => self.down(),
            _ => (),
        }

        self.draw(console)?;

        Ok(Status::Continue)
    }
}

/// Show `items` one per row from column `x`, row `y` with `sel`
/// highlighted and return the index of the chosen item.
pub fn select_menu<C>(
    console: &mut C,
    items: &[&str],
    sel: usize,
    x: usize,
    y: usize,
) -> Result<usize, ConeditError>
where
    C: Console + ?Sized,
{
    let index = run(console, Menu::new(items, sel, x, y)?)?;

    debug!("menu item {} selected", index);

    Ok(index)
}
