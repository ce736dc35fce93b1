//! State machine shared by the editors.
//!
//! Each editor is IO-free apart from the [`Console`] it renders to: it
//! is started once and then advanced with one [`Action`] per keystroke
//! until it yields [`Status::Done`]. [`run`] owns the blocking loop.

use log::{debug, trace};

use crate::console::{Console, CursorScope};
use crate::error::ConeditError;
use crate::key::Action;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Status<T> {
    Continue,
    Done(T),
}

pub trait Editor {
    type Output;

    /// Force the text cursor visible while editing
    const SHOW_CURSOR: bool = true;

    /// Draw initial state and place the cursor
    fn start<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), ConeditError>;

    /// Handle a single keystroke
    fn advance<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        action: Action,
    ) -> Result<Status<Self::Output>, ConeditError>;
}

fn drive<C, E>(console: &mut C, mut editor: E) -> Result<E::Output, ConeditError>
where
    C: Console + ?Sized,
    E: Editor,
{
    debug!("{} started", core::any::type_name::<E>());

    editor.start(console)?;

    loop {
        let code = console.read_key()?;
        let action = Action::classify(code, |c| console.is_printable(c));

        trace!("key {:#04x} -> {:?}", code, action);

        if let Status::Done(output) = editor.advance(console, action)? {
            break Ok(output);
        }
    }
}

/// Run editor until it commits
pub fn run<C, E>(console: &mut C, editor: E) -> Result<E::Output, ConeditError>
where
    C: Console + ?Sized,
    E: Editor,
{
    let output = if E::SHOW_CURSOR {
        let mut scope = CursorScope::enter(console)?;
        let output = drive(&mut *scope, editor)?;

        scope.release()?;

        output
    } else {
        drive(console, editor)?
    };

    console.flush()?;

    Ok(output)
}
