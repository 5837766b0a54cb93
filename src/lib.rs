//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences as they stream out of a GNSS receiver,
//! one byte at a time:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n`
//!
//! The decoder is meant to sit right behind a serial port:
//! - Every byte is processed once, in constant time, with no backtracking
//! - Memory is bounded: a single field of text is held at a time
//! - Checksums are verified and the decoder resynchronizes on the next `$` after any error
//! - Decoded messages are handed to a user-provided [`MessagePool`]
//!
//! Supported sentences are GGA, GLL, GSA, GST, GSV, RMC and VTG, along with the
//! MediaTek `PGACK`/`PMTK` and u-blox `PUBX` proprietary sentences. Each family
//! can be left out with its Cargo feature.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{DecodeStatus, NmeaDecoder, NmeaMessage, Sentence};
//!
//! let mut decoder = NmeaDecoder::new(Vec::<NmeaMessage>::new());
//!
//! let stream = b"garbage$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
//! for byte in stream {
//!     if decoder.decode_byte(*byte) == DecodeStatus::Decoded {
//!         println!("Decoded {:?}", decoder.pool().last());
//!     }
//! }
//!
//! let Sentence::GGA(gga) = &decoder.pool()[0].sentence else {
//!     panic!("Expected a GGA sentence");
//! };
//! assert_eq!(gga.satellite_count, Some(8));
//! ```

pub mod command;
mod decoder;
pub mod error;
pub mod field;
pub mod identifier;
mod pool;
pub mod sentences;

pub use decoder::{
    DecodeStatus, DecoderStats, FIELD_CAPACITY, NmeaDecoder, NmeaDecoderBuilder, Validation,
};
pub use error::{CommandError, Error, FieldError, FramingError};
pub use pool::MessagePool;
pub use sentences::{NmeaMessage, Sentence};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(all(
    test,
    feature = "gga",
    feature = "gll",
    feature = "gsa",
    feature = "gst",
    feature = "gsv",
    feature = "rmc",
    feature = "vtg",
    feature = "pgack",
    feature = "pmtk",
    feature = "pubx",
))]
mod tests {
    mod framing;
    mod pubx;
    mod recovery;
    mod sentences;
    mod support;
}
