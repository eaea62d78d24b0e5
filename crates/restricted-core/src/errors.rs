use std::fmt;

use thiserror::Error;

/// Raised when a representation is well formed but fails the type's validity predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {type_name} value")]
pub struct ValidationError {
    /// Name of the restricted type that rejected the value.
    pub type_name: &'static str,
    /// Offending representation, rendered for diagnostics.
    pub value: String,
}

impl ValidationError {
    /// Creates a validation error for `value`.
    pub fn new(type_name: &'static str, value: impl fmt::Debug) -> Self {
        Self {
            type_name,
            value: format!("{:?}", value),
        }
    }
}

/// Lexical reasons text could not be decoded into a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// Input was empty where a value was required.
    #[error("input is empty")]
    Empty,
    /// Input exceeds the type's maximum serialized length.
    #[error("input length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// Fixed-length representation received the wrong number of characters.
    #[error("expected {expected} characters, found {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },
    /// A character that is not legal at this position.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// Input ended before the representation was complete.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// Bytes were not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// Number does not fit the representation.
    #[error("number out of range")]
    NumberOutOfRange,
    /// More fractional digits than the representation can hold exactly.
    #[error("more than {max_fraction_digits} fractional digits")]
    ExcessPrecision {
        /// Fractional digits the representation holds.
        max_fraction_digits: u32,
    },
    /// Unit abbreviation not recognized.
    #[error("unknown unit")]
    UnknownUnit,
}

/// Raised when input text cannot be decoded into the underlying representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{context}' is not a valid {type_name}: {kind} at position {position}")]
pub struct FormatError {
    /// Name of the restricted type being parsed.
    pub type_name: &'static str,
    /// Character offset where decoding stopped (byte offset for invalid UTF-8).
    pub position: usize,
    /// What went wrong.
    #[source]
    pub kind: FormatErrorKind,
    /// Leading portion of the input, for diagnostics.
    pub context: String,
}

/// Maximum number of characters of offending input kept in a [`FormatError`].
pub const FORMAT_ERROR_CONTEXT_CHARS: usize = 32;

impl FormatError {
    /// Creates a format error, keeping a bounded excerpt of the input.
    pub fn new(
        type_name: &'static str,
        position: usize,
        kind: FormatErrorKind,
        input: &str,
    ) -> Self {
        let mut context: String = input.chars().take(FORMAT_ERROR_CONTEXT_CHARS).collect();
        if input.chars().nth(FORMAT_ERROR_CONTEXT_CHARS).is_some() {
            context.push_str("...");
        }
        Self {
            type_name,
            position,
            kind,
            context,
        }
    }
}

/// Raised when an operation needing a constructed value meets the uninitialized sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{type_name} value has not been initialized")]
pub struct UninitializedValueError {
    /// Name of the restricted type.
    pub type_name: &'static str,
}

/// Failure from the throwing parse entry points; the two kinds stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text could not be decoded.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Text decoded but failed the validity predicate.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ParseError {
    /// Returns `true` for lexical failures.
    pub fn is_format(&self) -> bool {
        matches!(self, ParseError::Format(_))
    }

    /// Returns `true` for domain failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, ParseError::Validation(_))
    }
}

/// Failure from writing a value into a caller-supplied buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIntoError {
    /// Buffer is shorter than the formatted value; nothing was written.
    #[error("buffer holds {available} units but {required} are required")]
    InsufficientBuffer {
        /// Units (bytes or chars) the value needs.
        required: usize,
        /// Units the buffer offers.
        available: usize,
    },
    /// The value was never constructed.
    #[error(transparent)]
    Uninitialized(#[from] UninitializedValueError),
    /// The format selector is not recognized by this type.
    #[error("format '{format}' is not supported by {type_name}")]
    UnsupportedFormat {
        /// Name of the restricted type.
        type_name: &'static str,
        /// Rejected selector.
        format: String,
    },
    /// The output sink rejected the text.
    #[error("output sink rejected the formatted text")]
    Sink,
}

/// Umbrella error for callers that mix construction, parsing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Validity predicate rejected the value.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Text could not be decoded.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Operation on the uninitialized sentinel.
    #[error(transparent)]
    Uninitialized(#[from] UninitializedValueError),
    /// Arithmetic left the representation's range or was undefined (e.g. division by zero).
    #[error("{operation} on {type_name} is out of range or undefined")]
    Arithmetic {
        /// Name of the restricted type.
        type_name: &'static str,
        /// Operation that failed (`add`, `div`, ...).
        operation: &'static str,
    },
}

impl From<ParseError> for ValueError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Format(e) => ValueError::Format(e),
            ParseError::Validation(e) => ValueError::Validation(e),
        }
    }
}
