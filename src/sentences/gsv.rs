#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, Validation,
    field::{FieldResult, parse_unsigned},
    sentences::DecodeField,
};

/// Satellite information carried by a GSV sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite ID number
    pub prn: Option<u8>,
    /// Elevation in degrees (0-90)
    pub elevation: Option<u8>,
    /// Azimuth in degrees to true north (0-359)
    pub azimuth: Option<u16>,
    /// Signal-to-noise ratio in dB-Hz (0-99), empty when not tracking
    pub snr: Option<u8>,
}

/// GSV - Satellites in view
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...*hh<CR><LF>
/// ```
///
/// Fields 4 to 19 hold up to four blocks of (PRN, elevation, azimuth, SNR).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GSV {
    /// Total number of GSV messages in this cycle
    pub total_messages: Option<u8>,
    /// Message number of this sentence
    pub message_number: Option<u8>,
    /// Total number of satellites in view
    pub satellites_in_view: Option<u8>,
    /// Satellites described in this sentence
    pub satellites: [Satellite; 4],
}

impl DecodeField for GSV {
    fn decode_field(&mut self, field: &str, index: u8, validation: Validation) -> FieldResult<()> {
        let strict = validation == Validation::Strict;

        match index {
            1 => self.total_messages = parse_unsigned(field)?,
            2 => self.message_number = parse_unsigned(field)?,
            3 => self.satellites_in_view = parse_unsigned(field)?,
            4..=19 => {
                let satellite = &mut self.satellites[usize::from((index - 4) / 4)];
                match (index - 4) % 4 {
                    0 => satellite.prn = parse_unsigned(field)?,
                    1 => {
                        satellite.elevation = parse_unsigned(field)?;
                        if strict && satellite.elevation.is_some_and(|e| e > 90) {
                            return Err(FieldError::Rejected);
                        }
                    }
                    2 => {
                        satellite.azimuth = parse_unsigned(field)?;
                        if strict && satellite.azimuth.is_some_and(|a| a >= 360) {
                            return Err(FieldError::Rejected);
                        }
                    }
                    _ => {
                        satellite.snr = parse_unsigned(field)?;
                        if strict && satellite.snr.is_some_and(|s| s > 99) {
                            return Err(FieldError::Rejected);
                        }
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }
}
