#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Validation,
    field::{
        FieldResult, apply_hemisphere, parse_coordinate, parse_date, parse_float, parse_time,
    },
    sentences::{DecodeField, FaaMode, Status, knots_to_mps},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: Option<Status>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Speed over ground in meters per second
    pub speed: Option<f32>,
    /// Track made good, degrees true
    pub track_true: Option<f32>,
    /// Fix date
    pub fix_date: Option<time::Date>,
    /// Magnetic variation in degrees, negative when West
    pub magnetic_variation: Option<f32>,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
}

impl DecodeField for RMC {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match index {
            1 => self.fix_time = parse_time(field)?,
            2 => self.status = Status::from_field(field)?,
            3 => self.latitude = parse_coordinate(field)?,
            4 => apply_hemisphere(field, &mut self.latitude)?,
            5 => self.longitude = parse_coordinate(field)?,
            6 => apply_hemisphere(field, &mut self.longitude)?,
            7 => self.speed = parse_float(field)?.map(knots_to_mps),
            8 => self.track_true = parse_float(field)?,
            9 => self.fix_date = parse_date(field)?,
            10 => self.magnetic_variation = parse_float(field)?,
            11 => apply_hemisphere(field, &mut self.magnetic_variation)?,
            12 => self.faa_mode = FaaMode::from_field(field)?,
            _ => {}
        }

        Ok(())
    }
}
