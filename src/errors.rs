use std::error::Error;
use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, SvgeqError>;

#[derive(Debug)]
pub enum SvgeqError {
    IoError(std::io::Error),
    ParseError(String),
    DocumentError(String),
    /// A segment contains non-finite coordinate data
    InvalidGeometry(String),
    /// A segment kind with no defined conversion (Arc, or anything future)
    UnsupportedSegment(String),
    /// Compositor invoked with an empty group; a caller bug
    EmptyGroup,
    MessageError(String),
    OtherError(Box<dyn std::error::Error>),
}

impl fmt::Display for SvgeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgeqError::IoError(source) => write!(f, "IO error: {}", source),
            SvgeqError::ParseError(reason) => write!(f, "Parse error: {}", reason),
            SvgeqError::DocumentError(reason) => write!(f, "Document error: {}", reason),
            SvgeqError::InvalidGeometry(reason) => write!(f, "Invalid geometry: {}", reason),
            SvgeqError::UnsupportedSegment(reason) => {
                write!(f, "Unsupported segment: {}", reason)
            }
            SvgeqError::EmptyGroup => write!(f, "Empty composite group"),
            SvgeqError::MessageError(reason) => write!(f, "{}", reason),
            SvgeqError::OtherError(source) => write!(f, "{}", source),
        }
    }
}

impl Error for SvgeqError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SvgeqError::IoError(source) => Some(source),
            SvgeqError::OtherError(source) => Some(&**source),
            _ => None,
        }
    }
}

impl SvgeqError {
    pub fn from_err<T>(err: T) -> SvgeqError
    where
        T: std::error::Error + 'static,
    {
        SvgeqError::OtherError(Box::new(err))
    }

    /// Attach a (1-based) path index to this error's message.
    pub fn in_path(self, index: usize) -> Self {
        self.locate(&format!("path {}", index))
    }

    /// Attach a (1-based) segment index to this error's message.
    pub fn in_segment(self, index: usize) -> Self {
        self.locate(&format!("segment {}", index))
    }

    fn locate(self, context: &str) -> Self {
        match self {
            SvgeqError::ParseError(reason) => {
                SvgeqError::ParseError(format!("{}: {}", context, reason))
            }
            SvgeqError::InvalidGeometry(reason) => {
                SvgeqError::InvalidGeometry(format!("{}: {}", context, reason))
            }
            SvgeqError::UnsupportedSegment(reason) => {
                SvgeqError::UnsupportedSegment(format!("{}: {}", context, reason))
            }
            SvgeqError::MessageError(reason) => {
                SvgeqError::MessageError(format!("{}: {}", context, reason))
            }
            other => other,
        }
    }
}

impl From<std::io::Error> for SvgeqError {
    fn from(err: std::io::Error) -> SvgeqError {
        SvgeqError::IoError(err)
    }
}

impl From<ParseFloatError> for SvgeqError {
    fn from(err: ParseFloatError) -> SvgeqError {
        SvgeqError::ParseError(format!("float: {}", err))
    }
}

impl From<&str> for SvgeqError {
    fn from(err: &str) -> SvgeqError {
        SvgeqError::MessageError(err.to_string())
    }
}
