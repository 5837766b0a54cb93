#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Validation,
    field::{FieldResult, apply_hemisphere, parse_coordinate, parse_time},
    sentences::{DecodeField, FaaMode, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GLL {
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: Option<Status>,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
}

impl DecodeField for GLL {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match index {
            1 => self.latitude = parse_coordinate(field)?,
            2 => apply_hemisphere(field, &mut self.latitude)?,
            3 => self.longitude = parse_coordinate(field)?,
            4 => apply_hemisphere(field, &mut self.longitude)?,
            5 => self.fix_time = parse_time(field)?,
            6 => self.status = Status::from_field(field)?,
            7 => self.faa_mode = FaaMode::from_field(field)?,
            _ => {}
        }

        Ok(())
    }
}
