#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Validation,
    field::{FieldResult, parse_float, parse_time},
    sentences::DecodeField,
};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2 3 4 5 6 7 8
///         |         | | | | | | |
///  $--GST,hhmmss.ss,x,x,x,x,x,x,x*hh<CR><LF>
/// ```
///
/// Deviations are in meters, the orientation in degrees from true north.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GST {
    /// UTC time of the associated GGA fix
    pub time: Option<time::Time>,
    /// Total RMS standard deviation of ranges inputs to the navigation solution
    pub rms_deviation: Option<f32>,
    /// Standard deviation of semi-major axis of error ellipse
    pub semi_major_deviation: Option<f32>,
    /// Standard deviation of semi-minor axis of error ellipse
    pub semi_minor_deviation: Option<f32>,
    /// Orientation of semi-major axis of error ellipse
    pub semi_major_orientation: Option<f32>,
    /// Standard deviation of latitude error
    pub latitude_deviation: Option<f32>,
    /// Standard deviation of longitude error
    pub longitude_deviation: Option<f32>,
    /// Standard deviation of altitude error
    pub altitude_deviation: Option<f32>,
}

impl DecodeField for GST {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match index {
            1 => self.time = parse_time(field)?,
            2 => self.rms_deviation = parse_float(field)?,
            3 => self.semi_major_deviation = parse_float(field)?,
            4 => self.semi_minor_deviation = parse_float(field)?,
            5 => self.semi_major_orientation = parse_float(field)?,
            6 => self.latitude_deviation = parse_float(field)?,
            7 => self.longitude_deviation = parse_float(field)?,
            8 => self.altitude_deviation = parse_float(field)?,
            _ => {}
        }

        Ok(())
    }
}
