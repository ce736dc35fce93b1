use conedit::console::Console;
use conedit::error::ConeditError;
use conedit::io::{StdinWrapper, StdoutWrapper, IO};
use conedit::line_buffer::StaticLineBuffer;
use conedit::line_editor::edit_line;
use conedit::menu::select_menu;
use conedit::number::edit_number;
use std::fmt::Write;
use std::io;
use termion::raw::IntoRawMode;

const ITEMS: [&str; 4] = ["Edit name", "Edit address", "Clear", "Quit"];

fn status(io: &mut IO<StdinWrapper, StdoutWrapper>, text: &str) -> Result<(), ConeditError> {
    let geometry = io.geometry();

    io.clear_region(0, geometry.status_start, geometry.columns)?;
    io.write_str_at(0, geometry.status_start, text.as_bytes())
}

fn run(io: &mut IO<StdinWrapper, StdoutWrapper>) -> Result<(), ConeditError> {
    let mut name = StaticLineBuffer::<20>::from_str_static("UNTITLED");
    let mut address = 0x0801;
    let mut sel = 0;

    io.write(b"\x1b[2J")?;
    io.write_str_at(0, 0, b"conedit demo")?;

    loop {
        io.clear_main_area_full()?;
        status(io, "Up/Down and Return, or 1-4")?;

        sel = select_menu(io, &ITEMS, sel, 2, 3)?;

        match sel {
            0 => {
                status(io, "Type over the name, Return to accept")?;
                io.write_str_at(2, 9, b"Name:")?;
                edit_line(io, &mut name, 8, 9)?;
            }
            1 => {
                status(io, "Decimal, or $ for hexadecimal")?;
                io.write_str_at(2, 9, b"Address:")?;
                address = edit_number(io, address, 5, 11, 9)?;
            }
            2 => {
                name.clear();
                address = 0;
            }
            _ => break,
        }

        let line = format!("{} at {:#06x} ({})", String::from_utf8_lossy(name.as_bytes()), address, address);

        status(io, &line)?;
        io.wait_key()?;
    }

    io.clear_main_area_full()?;
    io.move_cursor_to(0, 0)?;
    io.flush()
}

fn main() {
    let _raw = io::stdout().into_raw_mode().unwrap();
    let mut io = IO::new(StdinWrapper::new(), StdoutWrapper::new());

    if let Err(err) = run(&mut io) {
        write!(io, "\x1b[2J\x1b[1;1HError: {}\n\r", err).unwrap();
        io.flush().unwrap();
    }
}
