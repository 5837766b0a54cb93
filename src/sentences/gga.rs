#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, Validation,
    field::{
        FieldResult, apply_hemisphere, parse_coordinate, parse_float, parse_time, parse_unsigned,
    },
    sentences::{DecodeField, Quality, expect_unit},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// GPS Quality Indicator
    pub fix_quality: Option<Quality>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: Option<f32>,
    /// Age of Differential GPS data in seconds, null field when DGPS is not used
    pub age_of_dgps: Option<f32>,
    /// Differential reference station ID (0-1023)
    pub ref_station_id: Option<u16>,
}

impl DecodeField for GGA {
    fn decode_field(&mut self, field: &str, index: u8, validation: Validation) -> FieldResult<()> {
        match index {
            1 => self.fix_time = parse_time(field)?,
            2 => self.latitude = parse_coordinate(field)?,
            3 => apply_hemisphere(field, &mut self.latitude)?,
            4 => self.longitude = parse_coordinate(field)?,
            5 => apply_hemisphere(field, &mut self.longitude)?,
            6 => self.fix_quality = Quality::from_field(field)?,
            7 => self.satellite_count = parse_unsigned(field)?,
            8 => self.hdop = parse_float(field)?,
            9 => self.altitude = parse_float(field)?,
            10 | 12 => expect_unit(field, "M")?,
            11 => self.geoidal_separation = parse_float(field)?,
            13 => self.age_of_dgps = parse_float(field)?,
            14 => {
                let id = parse_unsigned::<u16>(field)?;
                if validation == Validation::Strict && id.is_some_and(|id| id > 1023) {
                    return Err(FieldError::Rejected);
                }
                self.ref_station_id = id;
            }
            _ => {}
        }

        Ok(())
    }
}
