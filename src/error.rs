//! # Error Types
//!
//! This module defines the error types used throughout the decoder.
//!
//! Errors are split by the layer that detects them:
//! - [`FieldError`] is returned by the field parsers and the per-sentence field decoders.
//! - [`FramingError`] describes malformed control-character sequences in the byte stream.
//! - [`Error`] is what the byte-level decoder reports when it abandons a sentence.
//! - [`CommandError`] is returned when framing or sending an outbound command fails.

/// Outcome of a single field that could not be decoded.
///
/// A field decoder returns `Ok(())` when the field was accepted. Both variants
/// abort the whole sentence; they only differ in what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field text is not in the expected format (not a number, wrong width, ...).
    #[error("malformed field")]
    Syntax,

    /// The field is well-formed but its value is out of range or not a known code.
    #[error("field value rejected")]
    Rejected,
}

/// A structural delimiter (`$`, `,`, `*`, `<CR>`, `<LF>`) arrived out of order,
/// or a byte that can never appear in a sentence was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FramingError {
    /// A `,` or `*` was received outside of the sentence body.
    #[error("unexpected {0:?} outside of the sentence body")]
    MisplacedDelimiter(char),

    /// A second `<CR>` was received for the same sentence.
    #[error("duplicate carriage return")]
    DuplicateCarriageReturn,

    /// A `<LF>` was received before the `<CR>` terminating the sentence.
    #[error("line feed without carriage return")]
    MissingCarriageReturn,

    /// A non-printable byte was received inside a sentence.
    #[error("non-printable byte 0x{0:02X}")]
    NonPrintable(u8),

    /// The checksum field is not made of exactly two hexadecimal digits.
    #[error("malformed checksum field")]
    MalformedChecksum,

    /// The sentence has more fields than a field index can count.
    #[error("too many fields")]
    TooManyFields,
}

/// Represents all the reasons a sentence can be abandoned by the decoder.
///
/// Whatever the variant, the in-progress message is dropped, the decoder goes
/// back to waiting for the next `$`, and the matching diagnostic counter is
/// incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sentence framing is invalid.
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence body)
    /// and the checksum found in the sentence.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// A field decoder refused the content of a field.
    #[error("field {index}: {error}")]
    Field {
        /// Index of the offending field (0 is the tag)
        index: u8,
        /// What the field decoder reported
        error: FieldError,
    },
}

/// Errors raised while framing or writing an outbound command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The payload contains a byte that cannot be sent inside a sentence.
    #[error("invalid byte 0x{0:02X} in command payload")]
    InvalidByte(u8),

    /// The framed command would exceed the maximum sentence length.
    #[error("framed command is {0} bytes long")]
    TooLong(usize),

    /// The transport refused the write.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
