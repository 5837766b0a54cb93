//! # Byte-Level Decoder
//!
//! This module provides the incremental NMEA 0183 decoder. It consumes the raw
//! byte stream of a receiver one byte at a time and hands each complete field to
//! the sentence decoder selected by the tag:
//!
//! ```text
//!  $ttttt,field1,field2,...,fieldN*hh<CR><LF>
//!   \___/ \____________________/  \/
//!    tag         fields          checksum
//! ```
//!
//! The decoder never backtracks and holds a single field of text at a time, so
//! both the time spent per byte and the memory used are bounded whatever the
//! stream contains. After any error it discards bytes until the next `$`.

use crate::{
    error::{Error, FramingError},
    field::parse_checksum,
    identifier,
    pool::MessagePool,
    sentences::{DecodeField, NmeaMessage},
};

/// Default capacity, in bytes, of the field accumulator.
pub const FIELD_CAPACITY: usize = 32;

/// Defines how thoroughly field values are checked.
///
/// Field values are always checked against the range of the type they are
/// stored in. The stricter level also checks them against the range the
/// protocol allows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Validation {
    #[default]
    /// Values must fit the type they are stored in.
    Basic,

    /// Values must also be within their documented domain:
    /// - `PUBX,00` satellite counts at most 24
    /// - `PUBX,41` baud rate above 0
    /// - GGA DGPS station id at most 1023
    /// - GSV elevation at most 90, azimuth below 360, SNR at most 99
    Strict,
}

/// Outcome of feeding one byte to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The byte was consumed, the sentence is still in progress.
    Decoding,
    /// The byte completed a sentence, which has been published to the pool.
    Decoded,
    /// The byte completed a sentence that was skipped: unknown tag, no slot
    /// available in the pool, or a field longer than the accumulator.
    Unhandled,
    /// The byte was discarded while waiting for the start of a sentence.
    Syncing,
    /// The sentence was abandoned.
    Error(Error),
}

/// Diagnostic counters, never reset by the decoder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecoderStats {
    /// Sentences abandoned because of a framing or field error
    pub parsing_errors: u32,
    /// Sentences abandoned because of a checksum mismatch
    pub checksum_errors: u32,
    /// Sentences skipped because a field did not fit in the accumulator
    pub buffer_full: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Body,
    Checksum,
}

/// Fixed-capacity accumulator for the text of the current field.
///
/// Only printable ASCII bytes are ever pushed, so the content is always valid UTF-8.
#[derive(Debug, Default)]
struct FieldBuffer<const N: usize> {
    bytes: heapless::Vec<u8, N>,
}

impl<const N: usize> FieldBuffer<N> {
    /// Appends a byte, returning `false` when the buffer is full.
    fn push(&mut self, byte: u8) -> bool {
        self.bytes.push(byte).is_ok()
    }

    fn clear(&mut self) {
        self.bytes.clear();
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// The sentence being decoded, with the pool slot it will be published in.
///
/// `message` stays `None` until the tag has been resolved.
struct InFlight<S> {
    slot: S,
    message: Option<NmeaMessage>,
}

/// Builder for [`NmeaDecoder`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{NmeaDecoderBuilder, NmeaMessage, Validation};
///
/// // Default settings, 32 bytes per field
/// let decoder = NmeaDecoderBuilder::new().build(Vec::<NmeaMessage>::new());
///
/// // Domain checks enabled, 82 bytes per field
/// let strict = NmeaDecoderBuilder::new()
///     .validation(Validation::Strict)
///     .build_with_capacity::<82, _>(Vec::<NmeaMessage>::new());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct NmeaDecoderBuilder {
    /// Validation level for field values.
    validation: Validation,
}

impl NmeaDecoderBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Validation: [`Validation::Basic`]
    /// - Field capacity: [`FIELD_CAPACITY`]
    pub fn new() -> Self {
        NmeaDecoderBuilder {
            validation: Validation::Basic,
        }
    }

    /// Sets the validation level for field values.
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Builds a decoder publishing to `pool`, with the default field capacity.
    pub fn build<P: MessagePool>(self, pool: P) -> NmeaDecoder<P> {
        self.build_with_capacity::<FIELD_CAPACITY, P>(pool)
    }

    /// Builds a decoder publishing to `pool`, accepting fields of up to `N` bytes.
    ///
    /// A sentence with a longer field is skipped and counted in
    /// [`DecoderStats::buffer_full`].
    pub fn build_with_capacity<const N: usize, P: MessagePool>(self, pool: P) -> NmeaDecoder<P, N> {
        NmeaDecoder {
            pool,
            validation: self.validation,
            phase: Phase::Idle,
            cr_seen: false,
            checksum: 0,
            field_index: 0,
            buffer: FieldBuffer::default(),
            overflowed: false,
            current: None,
            stats: DecoderStats::default(),
        }
    }
}

impl Default for NmeaDecoderBuilder {
    fn default() -> Self {
        NmeaDecoderBuilder::new()
    }
}

/// Incremental decoder for one serial channel.
///
/// Bytes are fed with [`decode_byte`](NmeaDecoder::decode_byte). On each `$`
/// a slot is requested from the pool; once the sentence is complete and its
/// checksum verified, the decoded [`NmeaMessage`] is published in that slot.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{DecodeStatus, NmeaDecoder, NmeaMessage, Sentence};
///
/// let mut decoder = NmeaDecoder::new(Vec::<NmeaMessage>::new());
///
/// let input = b"$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C\r\n";
/// let status = decoder.decode(input).last();
///
/// assert_eq!(status, Some(DecodeStatus::Decoded));
/// assert!(matches!(decoder.pool()[0].sentence, Sentence::GLL(_)));
/// ```
pub struct NmeaDecoder<P: MessagePool, const N: usize = FIELD_CAPACITY> {
    pool: P,
    validation: Validation,
    phase: Phase,
    cr_seen: bool,
    checksum: u8,
    field_index: u8,
    buffer: FieldBuffer<N>,
    overflowed: bool,
    current: Option<InFlight<P::Slot>>,
    stats: DecoderStats,
}

impl<P: MessagePool> NmeaDecoder<P> {
    /// Creates a decoder with default settings, see [`NmeaDecoderBuilder`].
    pub fn new(pool: P) -> Self {
        NmeaDecoderBuilder::new().build(pool)
    }
}

impl<P: MessagePool, const N: usize> NmeaDecoder<P, N> {
    /// Decodes one byte of the stream.
    pub fn decode_byte(&mut self, byte: u8) -> DecodeStatus {
        if self.phase == Phase::Idle && byte != b'$' {
            return DecodeStatus::Syncing;
        }

        match self.step(byte) {
            Ok(status) => status,
            Err(error) => self.abort(error),
        }
    }

    /// Decodes a run of bytes, yielding the status of each one.
    pub fn decode<'a>(&'a mut self, bytes: &'a [u8]) -> impl Iterator<Item = DecodeStatus> + 'a {
        bytes.iter().map(move |&byte| self.decode_byte(byte))
    }

    /// Abandons the sentence in progress, if any, and waits for the next `$`.
    ///
    /// Counters are kept.
    pub fn reset(&mut self) {
        self.current = None;
        self.phase = Phase::Idle;
        self.cr_seen = false;
        self.checksum = 0;
        self.field_index = 0;
        self.overflowed = false;
        self.buffer.clear();
    }

    /// Diagnostic counters.
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Validation level for field values.
    pub fn validation(&self) -> Validation {
        self.validation
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut P {
        &mut self.pool
    }

    pub fn into_pool(self) -> P {
        self.pool
    }

    fn step(&mut self, byte: u8) -> Result<DecodeStatus, Error> {
        match byte {
            b'$' => self.start(),
            b',' => {
                self.end_field(',')?;
                self.checksum ^= byte;
                self.field_index = self
                    .field_index
                    .checked_add(1)
                    .ok_or(FramingError::TooManyFields)?;
                self.buffer.clear();
            }
            b'*' => {
                self.end_field('*')?;
                self.buffer.clear();
                self.phase = Phase::Checksum;
            }
            b'\r' => {
                if self.cr_seen {
                    return Err(FramingError::DuplicateCarriageReturn.into());
                }
                match self.phase {
                    Phase::Checksum => self.verify_checksum()?,
                    _ => self.end_field('\r')?,
                }
                self.cr_seen = true;
            }
            b'\n' => {
                if !self.cr_seen {
                    return Err(FramingError::MissingCarriageReturn.into());
                }
                return Ok(self.finish());
            }
            0x20..=0x7E => self.accept(byte),
            _ => return Err(FramingError::NonPrintable(byte).into()),
        }

        Ok(DecodeStatus::Decoding)
    }

    fn start(&mut self) {
        // Release the slot of an interrupted sentence before asking for a new one.
        self.reset();
        self.phase = Phase::Body;

        self.current = self.pool.prepare().map(|slot| InFlight {
            slot,
            message: None,
        });
        if self.current.is_none() {
            log::trace!("No slot available, skipping sentence");
        }
    }

    fn accept(&mut self, byte: u8) {
        if self.phase == Phase::Body && !self.cr_seen {
            self.checksum ^= byte;
        }

        if !self.buffer.push(byte) && !self.overflowed {
            self.overflowed = true;
            self.stats.buffer_full = self.stats.buffer_full.saturating_add(1);
            if self.current.take().is_some() {
                log::debug!(
                    "Field {} longer than {} bytes, skipping sentence",
                    self.field_index,
                    N
                );
            }
        }
    }

    /// Hands the accumulated field to the sentence decoder.
    fn end_field(&mut self, delimiter: char) -> Result<(), Error> {
        if self.phase != Phase::Body || self.cr_seen {
            return Err(FramingError::MisplacedDelimiter(delimiter).into());
        }

        let index = self.field_index;
        let field = self.buffer.as_str();
        let Some(in_flight) = &mut self.current else {
            return Ok(());
        };

        if index == 0 {
            in_flight.message = identifier::resolve(field);
        }
        let Some(message) = &mut in_flight.message else {
            log::trace!("Skipping unhandled sentence {field:?}");
            self.current = None;
            return Ok(());
        };

        message
            .sentence
            .decode_field(field, index, self.validation)
            .map_err(|error| Error::Field { index, error })
    }

    fn verify_checksum(&self) -> Result<(), Error> {
        let found =
            parse_checksum(self.buffer.as_str()).map_err(|_| FramingError::MalformedChecksum)?;

        if found != self.checksum {
            return Err(Error::ChecksumMismatch {
                expected: self.checksum,
                found,
            });
        }

        Ok(())
    }

    fn finish(&mut self) -> DecodeStatus {
        let current = self.current.take();
        self.reset();

        match current {
            Some(InFlight {
                slot,
                message: Some(message),
            }) => {
                log::trace!("Decoded {:?} from {:?}", message.sentence_id, message.talker);
                self.pool.publish(slot, message);
                DecodeStatus::Decoded
            }
            _ => DecodeStatus::Unhandled,
        }
    }

    fn abort(&mut self, error: Error) -> DecodeStatus {
        match error {
            Error::ChecksumMismatch { .. } => {
                self.stats.checksum_errors = self.stats.checksum_errors.saturating_add(1);
            }
            Error::Framing(_) | Error::Field { .. } => {
                self.stats.parsing_errors = self.stats.parsing_errors.saturating_add(1);
            }
        }

        log::debug!("Dropping sentence: {error}");
        self.reset();
        DecodeStatus::Error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_buffer() {
        let mut buffer = FieldBuffer::<4>::default();
        for byte in *b"GPGG" {
            assert!(buffer.push(byte));
        }
        assert!(!buffer.push(b'A'));
        assert_eq!(buffer.as_str(), "GPGG");

        buffer.clear();
        assert_eq!(buffer.as_str(), "");
    }

    #[test]
    fn test_builder_defaults() {
        let decoder = NmeaDecoderBuilder::default().build(Vec::<NmeaMessage>::new());
        assert_eq!(decoder.validation(), Validation::Basic);
        assert_eq!(decoder.stats(), DecoderStats::default());

        let decoder = NmeaDecoderBuilder::new()
            .validation(Validation::Strict)
            .build_with_capacity::<8, _>(Vec::<NmeaMessage>::new());
        assert_eq!(decoder.validation(), Validation::Strict);
        assert!(decoder.into_pool().is_empty());
    }
}
