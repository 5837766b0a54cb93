//! # Sentence Field Decoders
//!
//! One payload type per supported sentence family. Each payload is filled in
//! place, one field at a time, as the byte-level decoder reaches field
//! boundaries: the decoder never holds more than one field of text.
//!
//! The set of families is chosen at compile time through Cargo features
//! (`gga`, `gll`, `gsa`, `gst`, `gsv`, `rmc`, `vtg`, `pgack`, `pmtk`, `pubx`).

#[cfg(not(any(
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
)))]
compile_error!("at least one sentence family feature must be enabled");

/// Declares an enum decoded from a fixed set of field codes.
///
/// An empty field decodes to `None`, an unknown code is [`FieldError::Rejected`].
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Decodes the code transmitted in `field`.
            pub fn from_field(field: &str) -> $crate::field::FieldResult<Option<Self>> {
                match field {
                    "" => Ok(None),
                    $($code => Ok(Some(Self::$variant)),)*
                    _ => Err($crate::FieldError::Rejected),
                }
            }

            /// Returns the code used on the wire.
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }
        }
    };
}

#[cfg(feature = "gga")]
mod gga;
#[cfg(feature = "gll")]
mod gll;
#[cfg(feature = "gsa")]
mod gsa;
#[cfg(feature = "gst")]
mod gst;
#[cfg(feature = "gsv")]
mod gsv;
#[cfg(any(feature = "pgack", feature = "pmtk"))]
mod mediatek;
#[cfg(feature = "pubx")]
mod pubx;
#[cfg(feature = "rmc")]
mod rmc;
#[cfg(feature = "vtg")]
mod vtg;

#[cfg(feature = "gga")]
pub use gga::GGA;
#[cfg(feature = "gll")]
pub use gll::GLL;
#[cfg(feature = "gsa")]
pub use gsa::GSA;
#[cfg(feature = "gst")]
pub use gst::GST;
#[cfg(feature = "gsv")]
pub use gsv::{GSV, Satellite};
#[cfg(feature = "pgack")]
pub use mediatek::PGACK;
#[cfg(feature = "pmtk")]
pub use mediatek::{AckFlag, PMTK, SystemMessage};
#[cfg(feature = "pubx")]
pub use pubx::{NavigationStatus, PUBX, PubxConfig, PubxPosition, PubxRate, PubxTime};
#[cfg(feature = "rmc")]
pub use rmc::RMC;
#[cfg(feature = "vtg")]
pub use vtg::VTG;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, Validation,
    field::FieldResult,
    identifier::{SentenceId, TalkerId},
};

/// Decodes one field of a sentence into the payload.
///
/// `index` 0 is the sentence tag. Returning an error aborts the whole sentence.
pub(crate) trait DecodeField {
    fn decode_field(&mut self, field: &str, index: u8, validation: Validation) -> FieldResult<()>;
}

/// A decoded NMEA sentence, as handed to the [`MessagePool`](crate::MessagePool).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct NmeaMessage {
    /// Talker that emitted the sentence
    pub talker: TalkerId,
    /// Sentence identifier
    pub sentence_id: SentenceId,
    /// Decoded content
    pub sentence: Sentence,
}

/// Payload of every compiled-in sentence family.
///
/// | Variant          | Sentence Type                              |
/// |------------------|--------------------------------------------|
/// | GGA([`GGA`])     | Global Positioning System Fix Data         |
/// | GLL([`GLL`])     | Geographic Position - Latitude/Longitude   |
/// | GSA([`GSA`])     | GPS DOP and active satellites              |
/// | GST([`GST`])     | GPS Pseudorange Noise Statistics           |
/// | GSV([`GSV`])     | Satellites in View                         |
/// | RMC([`RMC`])     | Recommended Minimum Navigation Information |
/// | VTG([`VTG`])     | Track made good and Ground speed           |
/// | PGACK([`PGACK`]) | MediaTek acknowledgement                   |
/// | PMTK([`PMTK`])   | MediaTek packet                            |
/// | PUBX([`PUBX`])   | u-blox proprietary sentence                |
///
/// `PUBX` stays `None` when the sentence ends before its message type field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    #[cfg(feature = "gga")]
    /// Global Positioning System Fix Data
    GGA(GGA),
    #[cfg(feature = "gll")]
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    #[cfg(feature = "gsa")]
    /// GPS DOP and active satellites
    GSA(GSA),
    #[cfg(feature = "gst")]
    /// GPS Pseudorange Noise Statistics
    GST(GST),
    #[cfg(feature = "gsv")]
    /// Satellites in View
    GSV(GSV),
    #[cfg(feature = "rmc")]
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    #[cfg(feature = "vtg")]
    /// Track made good and Ground speed
    VTG(VTG),
    #[cfg(feature = "pgack")]
    /// MediaTek acknowledgement
    PGACK(PGACK),
    #[cfg(feature = "pmtk")]
    /// MediaTek packet
    PMTK(PMTK),
    #[cfg(feature = "pubx")]
    /// u-blox proprietary sentence
    PUBX(Option<PUBX>),
}

impl DecodeField for Sentence {
    fn decode_field(&mut self, field: &str, index: u8, validation: Validation) -> FieldResult<()> {
        match self {
            #[cfg(feature = "gga")]
            Sentence::GGA(gga) => gga.decode_field(field, index, validation),
            #[cfg(feature = "gll")]
            Sentence::GLL(gll) => gll.decode_field(field, index, validation),
            #[cfg(feature = "gsa")]
            Sentence::GSA(gsa) => gsa.decode_field(field, index, validation),
            #[cfg(feature = "gst")]
            Sentence::GST(gst) => gst.decode_field(field, index, validation),
            #[cfg(feature = "gsv")]
            Sentence::GSV(gsv) => gsv.decode_field(field, index, validation),
            #[cfg(feature = "rmc")]
            Sentence::RMC(rmc) => rmc.decode_field(field, index, validation),
            #[cfg(feature = "vtg")]
            Sentence::VTG(vtg) => vtg.decode_field(field, index, validation),
            #[cfg(feature = "pgack")]
            Sentence::PGACK(pgack) => pgack.decode_field(field, index, validation),
            #[cfg(feature = "pmtk")]
            Sentence::PMTK(pmtk) => pmtk.decode_field(field, index, validation),
            #[cfg(feature = "pubx")]
            Sentence::PUBX(pubx) => pubx::decode_field(pubx, field, index, validation),
        }
    }
}

impl NmeaMessage {
    /// Writes a one-line summary of the message to the `info` log level.
    pub fn log(&self) {
        match &self.sentence {
            #[cfg(feature = "gga")]
            Sentence::GGA(gga) => log::info!(
                "GGA: time={:?} lat={:?} lng={:?} alt={:?} fix={:?} sats={:?} hdop={:?}",
                gga.fix_time,
                gga.latitude,
                gga.longitude,
                gga.altitude,
                gga.fix_quality,
                gga.satellite_count,
                gga.hdop
            ),
            #[cfg(feature = "gll")]
            Sentence::GLL(gll) => log::info!(
                "GLL: time={:?} lat={:?} lng={:?} status={:?}",
                gll.fix_time,
                gll.latitude,
                gll.longitude,
                gll.status
            ),
            #[cfg(feature = "gsa")]
            Sentence::GSA(gsa) => log::info!(
                "GSA: mode={:?}/{:?} sats={:?} pdop={:?} hdop={:?} vdop={:?}",
                gsa.selection_mode,
                gsa.fix_mode,
                gsa.satellites,
                gsa.pdop,
                gsa.hdop,
                gsa.vdop
            ),
            #[cfg(feature = "gst")]
            Sentence::GST(gst) => log::info!(
                "GST: time={:?} rms={:?} lat={:?} lng={:?} alt={:?}",
                gst.time,
                gst.rms_deviation,
                gst.latitude_deviation,
                gst.longitude_deviation,
                gst.altitude_deviation
            ),
            #[cfg(feature = "gsv")]
            Sentence::GSV(gsv) => log::info!(
                "GSV: {:?}/{:?} in view={:?}",
                gsv.message_number,
                gsv.total_messages,
                gsv.satellites_in_view
            ),
            #[cfg(feature = "rmc")]
            Sentence::RMC(rmc) => log::info!(
                "RMC: {:?} {:?} lat={:?} lng={:?} speed={:?} m/s track={:?} status={:?}",
                rmc.fix_date,
                rmc.fix_time,
                rmc.latitude,
                rmc.longitude,
                rmc.speed,
                rmc.track_true,
                rmc.status
            ),
            #[cfg(feature = "vtg")]
            Sentence::VTG(vtg) => log::info!(
                "VTG: track={:?} magnetic={:?} speed={:?} m/s",
                vtg.track_true,
                vtg.track_magnetic,
                vtg.speed
            ),
            #[cfg(feature = "pgack")]
            Sentence::PGACK(pgack) => {
                log::info!("PGACK: command={:?} status={:?}", pgack.command, pgack.status)
            }
            #[cfg(feature = "pmtk")]
            Sentence::PMTK(pmtk) => log::info!("PMTK: {:?}", pmtk),
            #[cfg(feature = "pubx")]
            Sentence::PUBX(pubx) => pubx::log(pubx.as_ref()),
        }
    }
}

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        "A" => Valid,
        /// V - Invalid
        "V" => Invalid,
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// C - Quectel Querk, "Caution"
        "C" => Caution,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// F - RTK Float mode
        "F" => FloatRtk,
        /// M - Manual Input Mode
        "M" => Manual,
        /// N - Data Not Valid
        "N" => DataNotValid,
        /// P - Precise
        "P" => Precise,
        /// R - RTK Integer mode
        "R" => FixedRtk,
        /// S - Simulated Mode
        "S" => Simulator,
        /// U - Quectel Querk, "Unsafe"
        "U" => Unsafe,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        "0" => NoFix,
        /// 1 - GPS fix
        "1" => GPSFix,
        /// 2 - Differential GPS fix
        "2" => DGPSFix,
        /// 3 - PPS fix
        "3" => PPSFix,
        /// 4 - Real Time Kinematic
        "4" => RTK,
        /// 5 - Float RTK
        "5" => FloatRTK,
        /// 6 - estimated (dead reckoning)
        "6" => Estimated,
        /// 7 - Manual input mode
        "7" => Manual,
        /// 8 - Simulation mode
        "8" => Simulation,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        "A" => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

/// Checks a unit field, which must be empty or carry `unit`.
#[cfg(any(feature = "gga", feature = "vtg"))]
pub(crate) fn expect_unit(field: &str, unit: &str) -> FieldResult<()> {
    if field.is_empty() || field == unit {
        Ok(())
    } else {
        Err(FieldError::Syntax)
    }
}

#[cfg(any(feature = "rmc", feature = "vtg"))]
pub(crate) fn knots_to_mps(knots: f32) -> f32 {
    knots * (1852.0 / 3600.0)
}

#[cfg(any(feature = "pubx", feature = "vtg"))]
pub(crate) fn kmph_to_mps(kmph: f32) -> f32 {
    kmph / 3.6
}
