use std::fmt;

/// A single argument spliced into a message template.
///
/// Each variant carries a value that knows how to render itself as text; the
/// formatter only ever asks for that text, so a template never needs to know
/// the argument's type.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl LogArg {
    /// Captures any printable value by rendering it once, up front.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for LogArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(value: $t) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(value: $t) -> Self {
                Self::UInt(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

// isize/usize/i128/u128 have no lossless `From` into 64 bits on every target.
impl From<isize> for LogArg {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl From<usize> for LogArg {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::UInt)
    }
}

impl From<i128> for LogArg {
    fn from(value: i128) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl From<u128> for LogArg {
    fn from(value: u128) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::UInt)
    }
}

impl From<f32> for LogArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for LogArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LogArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for LogArg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}
