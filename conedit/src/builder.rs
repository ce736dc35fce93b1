//! Builder for the terminal console

use crate::{console::Geometry, io::IO, key::is_ascii_printable};

/// Builder for [`IO`].
///
/// # Example
/// ```no_run
/// # use embedded_io::{ErrorType, Read, Write};
/// # use core::convert::Infallible;
/// # struct MyIO {}
/// # impl ErrorType for MyIO {
/// #     type Error = Infallible;
/// # }
/// # impl Write for MyIO {
/// #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { unimplemented!() }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { unimplemented!() }
/// # }
/// # impl Read for MyIO {
/// #     fn read(&mut self, buf: &mut[u8]) -> Result<usize, Self::Error> { unimplemented!() }
/// # }
/// use conedit::builder::IOBuilder;
/// use conedit::console::Geometry;
///
/// let console = IOBuilder::new(MyIO {}, MyIO {})
///     .with_geometry(Geometry {
///         columns: 80,
///         rows: 24,
///         main_top: 1,
///         status_start: 22,
///     })
///     .with_printable(|c| c.is_ascii_graphic() || c == b' ')
///     .build();
/// ```
pub struct IOBuilder<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    input: R,
    output: W,
    geometry: Geometry,
    printable: fn(u8) -> bool,
    cursor_visible: bool,
}

impl<R, W> IOBuilder<R, W>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    /// Create builder for a 40 column console accepting printable ASCII
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            geometry: Geometry::default(),
            printable: is_ascii_printable,
            cursor_visible: true,
        }
    }

    pub fn with_geometry(self, geometry: Geometry) -> Self {
        Self { geometry, ..self }
    }

    /// Predicate deciding which key codes are inserted as text
    pub fn with_printable(self, printable: fn(u8) -> bool) -> Self {
        Self { printable, ..self }
    }

    /// Cursor visibility of the terminal when the console is built
    pub fn with_cursor_visible(self, cursor_visible: bool) -> Self {
        Self {
            cursor_visible,
            ..self
        }
    }

    pub fn build(self) -> IO<R, W> {
        IO::from_parts(
            self.input,
            self.output,
            self.geometry,
            self.printable,
            self.cursor_visible,
        )
    }
}
