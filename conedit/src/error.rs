//! Error types

/// Enum to hold various error types
///
/// Invalid keystrokes are never errors. Editors absorb them silently;
/// only the console driver or a misused API can fail.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ConeditError {
    /// Input stream ended while waiting for a key
    Aborted,
    /// Menu was called without any items
    EmptyMenu,
    /// Buffer text is not valid UTF-8
    InvalidText,
    ReadError(embedded_io::ErrorKind),
    WriteError(embedded_io::ErrorKind),
}

impl embedded_io::Error for ConeditError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match *self {
            ConeditError::Aborted => embedded_io::ErrorKind::Interrupted,
            ConeditError::EmptyMenu => embedded_io::ErrorKind::InvalidInput,
            ConeditError::InvalidText => embedded_io::ErrorKind::InvalidData,
            ConeditError::ReadError(kind) => kind,
            ConeditError::WriteError(kind) => kind,
        }
    }
}

impl core::fmt::Display for ConeditError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConeditError::Aborted => f.write_str("input aborted"),
            ConeditError::EmptyMenu => f.write_str("menu has no items"),
            ConeditError::InvalidText => f.write_str("buffer is not valid UTF-8"),
            ConeditError::ReadError(kind) => write!(f, "read error: {:?}", kind),
            ConeditError::WriteError(kind) => write!(f, "write error: {:?}", kind),
        }
    }
}
