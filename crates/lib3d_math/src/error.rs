use core::fmt;

/// Math error, only returned by the checked constructors and accessors
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Error {
    /// A component was NaN or infinite
    NonFinite { component: char, value: f64 },
    /// A row, column or component index was out of range
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonFinite { component, value }  => f.write_fmt(format_args!("Non-finite value for component '{component}': {value}")),
            Error::IndexOutOfRange { index, len } => f.write_fmt(format_args!("Index {index} is out of range, expected an index below {len}")),
        }
    }
}

impl std::error::Error for Error {
}

pub type Result<T> = core::result::Result<T, Error>;
