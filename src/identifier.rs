//! # Talker and Sentence Identifiers
//!
//! Standard NMEA tags are made of a 2-character talker code followed by a
//! 3-character sentence code. Both are packed into integers by reading them as
//! base 36 numbers (`0-9A-Z`), so that dispatching on a sentence is a plain
//! `match` on an integer rather than a string comparison.
//!
//! Proprietary tags (`PGACK`, `PMTK...`, `PUBX`) do not follow that layout. They
//! are recognized by their literal text and given synthetic identifiers above
//! the largest value a 3-character base 36 code can take (`ZZZ` = 46655).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sentences::{NmeaMessage, Sentence};

/// Packs an upper-case alphanumeric code into its base 36 value.
///
/// Returns [`None`] for an empty code, a character outside `0-9A-Z`, or a
/// value that does not fit in a `u16`.
///
/// ```rust
/// use nmea0183_decoder::identifier::base36;
///
/// assert_eq!(base36("GP"), Some(601));
/// assert_eq!(base36("GGA"), Some(21322));
/// assert_eq!(base36("gp"), None);
/// ```
pub fn base36(code: &str) -> Option<u16> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u16, |value, c| {
        let digit = match c {
            b'0'..=b'9' => c - b'0',
            b'A'..=b'Z' => c - b'A' + 10,
            _ => return None,
        };
        value.checked_mul(36)?.checked_add(u16::from(digit))
    })
}

/// Identifier of the subsystem that emitted a sentence (`GP`, `GL`, ...).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TalkerId(pub u16);

impl TalkerId {
    /// BeiDou
    pub const BD: TalkerId = TalkerId(409);
    /// Galileo
    pub const GA: TalkerId = TalkerId(586);
    /// BeiDou
    pub const GB: TalkerId = TalkerId(587);
    /// GLONASS
    pub const GL: TalkerId = TalkerId(597);
    /// Combined GNSS solution
    pub const GN: TalkerId = TalkerId(599);
    /// GPS
    pub const GP: TalkerId = TalkerId(601);
    /// QZSS
    pub const QZ: TalkerId = TalkerId(971);

    /// u-blox proprietary sentences
    pub const UBLOX: TalkerId = TalkerId(60001);
    /// MediaTek proprietary sentences
    pub const MTK: TalkerId = TalkerId(60002);

    /// Builds the identifier of a 2-character talker code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.len() {
            2 => base36(code).map(TalkerId),
            _ => None,
        }
    }
}

/// Identifier of the sentence type (`GGA`, `RMC`, ...).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SentenceId(pub u16);

impl SentenceId {
    /// Global Positioning System Fix Data
    pub const GGA: SentenceId = SentenceId(21322);
    /// Geographic Position - Latitude/Longitude
    pub const GLL: SentenceId = SentenceId(21513);
    /// GPS DOP and active satellites
    pub const GSA: SentenceId = SentenceId(21754);
    /// GPS Pseudorange Noise Statistics
    pub const GST: SentenceId = SentenceId(21773);
    /// Satellites in view
    pub const GSV: SentenceId = SentenceId(21775);
    /// Recommended Minimum Navigation Information
    pub const RMC: SentenceId = SentenceId(35796);
    /// Track made good and Ground speed
    pub const VTG: SentenceId = SentenceId(41236);
    /// Time & Date
    pub const ZDA: SentenceId = SentenceId(45838);

    /// MediaTek acknowledgement
    pub const PGACK: SentenceId = SentenceId(60011);
    /// MediaTek packet
    pub const PMTK: SentenceId = SentenceId(60012);
    /// MediaTek channel status
    pub const MCHN: SentenceId = SentenceId(60013);
    /// u-blox proprietary sentence
    pub const PUBX: SentenceId = SentenceId(60021);

    /// Builds the identifier of a 3-character sentence code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.len() {
            3 => base36(code).map(SentenceId),
            _ => None,
        }
    }
}

/// Resolves a sentence tag (field 0, without the leading `$`) to an empty
/// message whose payload variant decodes the remaining fields.
///
/// Returns [`None`] when the tag is not a compiled-in sentence.
pub(crate) fn resolve(tag: &str) -> Option<NmeaMessage> {
    resolve_standard(tag).or_else(|| resolve_proprietary(tag))
}

fn resolve_standard(tag: &str) -> Option<NmeaMessage> {
    if tag.len() != 5 {
        return None;
    }

    let talker = TalkerId::from_code(tag.get(..2)?)?;
    let sentence_id = SentenceId::from_code(tag.get(2..)?)?;

    let sentence = match sentence_id {
        #[cfg(feature = "gga")]
        SentenceId::GGA => Sentence::GGA(Default::default()),
        #[cfg(feature = "gll")]
        SentenceId::GLL => Sentence::GLL(Default::default()),
        #[cfg(feature = "gsa")]
        SentenceId::GSA => Sentence::GSA(Default::default()),
        #[cfg(feature = "gst")]
        SentenceId::GST => Sentence::GST(Default::default()),
        #[cfg(feature = "gsv")]
        SentenceId::GSV => Sentence::GSV(Default::default()),
        #[cfg(feature = "rmc")]
        SentenceId::RMC => Sentence::RMC(Default::default()),
        #[cfg(feature = "vtg")]
        SentenceId::VTG => Sentence::VTG(Default::default()),
        _ => return None,
    };

    Some(NmeaMessage {
        talker,
        sentence_id,
        sentence,
    })
}

fn resolve_proprietary(tag: &str) -> Option<NmeaMessage> {
    #[cfg(feature = "pgack")]
    if tag == "PGACK" {
        return Some(NmeaMessage {
            talker: TalkerId::MTK,
            sentence_id: SentenceId::PGACK,
            sentence: Sentence::PGACK(Default::default()),
        });
    }

    #[cfg(feature = "pmtk")]
    if tag.starts_with("PMTK") {
        return Some(NmeaMessage {
            talker: TalkerId::MTK,
            sentence_id: SentenceId::PMTK,
            sentence: Sentence::PMTK(Default::default()),
        });
    }

    #[cfg(feature = "pubx")]
    if tag == "PUBX" {
        return Some(NmeaMessage {
            talker: TalkerId::UBLOX,
            sentence_id: SentenceId::PUBX,
            sentence: Sentence::PUBX(None),
        });
    }

    let _ = tag;
    None
}
