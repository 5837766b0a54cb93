#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, Validation,
    field::{FieldResult, parse_float, parse_unsigned},
    sentences::{DecodeField, FixMode, SelectionMode},
};

/// Number of PRN slots carried by a GSA sentence.
pub const GSA_SATELLITE_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Empty PRN slots are skipped, `satellites` only holds the PRNs that were transmitted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GSA {
    /// Selection mode
    pub selection_mode: Option<SelectionMode>,
    /// Fix mode
    pub fix_mode: Option<FixMode>,
    /// PRNs of the satellites used for the fix
    pub satellites: heapless::Vec<u8, GSA_SATELLITE_SLOTS>,
    /// Position Dilution of Precision
    pub pdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
}

impl DecodeField for GSA {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match index {
            1 => self.selection_mode = SelectionMode::from_field(field)?,
            2 => self.fix_mode = FixMode::from_field(field)?,
            3..=14 => {
                if let Some(prn) = parse_unsigned(field)? {
                    self.satellites.push(prn).map_err(|_| FieldError::Rejected)?;
                }
            }
            15 => self.pdop = parse_float(field)?,
            16 => self.hdop = parse_float(field)?,
            17 => self.vdop = parse_float(field)?,
            _ => {}
        }

        Ok(())
    }
}
