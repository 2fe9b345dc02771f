use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum StrataError {
    IoError(std::io::Error),
    /// Empty or otherwise unusable palette label.
    InvalidLabel(String),
    /// UTF-8 payload does not fit the 2-byte length prefix.
    StringTooLong { len: usize },
    /// Kind byte outside integer, string, list and compound.
    UnsupportedValueKind(u8),
    /// List element whose kind differs from the list's declared kind.
    HeterogeneousList { expected: u8, found: u8 },
    /// Coordinate or extent that does not fit a 4-byte integer payload.
    CoordinateOutOfRange { axis: char, value: i64 },
    /// Palette index that does not fit a 4-byte integer payload.
    IndexOutOfRange { index: usize },
    ConfigError(String),
}

impl fmt::Display for StrataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrataError::IoError(err) => write!(f, "IO error: {}", err),
            StrataError::InvalidLabel(label) => write!(f, "Invalid label: {:?}", label),
            StrataError::StringTooLong { len } => {
                write!(f, "String too long: {} bytes (max {})", len, u16::MAX)
            }
            StrataError::UnsupportedValueKind(kind) => {
                write!(f, "Unsupported value kind: {}", kind)
            }
            StrataError::HeterogeneousList { expected, found } => write!(
                f,
                "Heterogeneous list: expected kind {}, found kind {}",
                expected, found
            ),
            StrataError::CoordinateOutOfRange { axis, value } => {
                write!(f, "Coordinate out of range on {} axis: {}", axis, value)
            }
            StrataError::IndexOutOfRange { index } => {
                write!(f, "Palette index out of range: {}", index)
            }
            StrataError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl Error for StrataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StrataError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StrataError {
    fn from(err: std::io::Error) -> Self {
        StrataError::IoError(err)
    }
}

impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        StrataError::ConfigError(err.to_string())
    }
}
