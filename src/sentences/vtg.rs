#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Validation,
    field::{FieldResult, parse_float},
    sentences::{DecodeField, FaaMode, expect_unit, kmph_to_mps, knots_to_mps},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The speed is stored in meters per second. When both ground speeds are
/// transmitted the km/h value, which comes last, wins.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VTG {
    /// Course over ground, degrees true
    pub track_true: Option<f32>,
    /// Course over ground, degrees magnetic
    pub track_magnetic: Option<f32>,
    /// Speed over ground in meters per second
    pub speed: Option<f32>,
    /// FAA mode indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
}

impl DecodeField for VTG {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match index {
            1 => self.track_true = parse_float(field)?,
            2 => expect_unit(field, "T")?,
            3 => self.track_magnetic = parse_float(field)?,
            4 => expect_unit(field, "M")?,
            5 => {
                if let Some(knots) = parse_float(field)? {
                    self.speed = Some(knots_to_mps(knots));
                }
            }
            6 => expect_unit(field, "N")?,
            7 => {
                if let Some(kmph) = parse_float(field)? {
                    self.speed = Some(kmph_to_mps(kmph));
                }
            }
            8 => expect_unit(field, "K")?,
            9 => self.faa_mode = FaaMode::from_field(field)?,
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldError;

    fn decode(fields: &str) -> FieldResult<VTG> {
        let mut vtg = VTG::default();
        for (index, field) in fields.split(',').enumerate() {
            vtg.decode_field(field, index as u8, Validation::Basic)?;
        }
        Ok(vtg)
    }

    #[test]
    fn test_vtg_fields() {
        let vtg = decode("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A").unwrap();

        assert_eq!(vtg.track_true, Some(54.7));
        assert_eq!(vtg.track_magnetic, Some(34.4));
        assert!((vtg.speed.unwrap() - 2.8333).abs() < 1e-3);
        assert_eq!(vtg.faa_mode, Some(FaaMode::Autonomous));
    }

    #[test]
    fn test_vtg_knots_only() {
        let vtg = decode("GPVTG,,T,,M,10.0,N,,K").unwrap();

        assert_eq!(vtg.track_true, None);
        assert!((vtg.speed.unwrap() - 5.1444).abs() < 1e-3);
    }

    #[test]
    fn test_vtg_bad_unit() {
        assert_eq!(
            decode("GPVTG,054.7,T,034.4,M,005.5,K,010.2,K").unwrap_err(),
            FieldError::Syntax
        );
    }
}
