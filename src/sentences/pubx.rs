//! # u-blox PUBX Sentences
//!
//! `PUBX` multiplexes several messages behind one tag. Field 1 carries the
//! message type, which selects the layout of every following field:
//!
//! ```text
//!        1  2
//!        |  |
//!  $PUBX,xx,...*hh<CR><LF>
//! ```
//!
//! | Code | Message                             |
//! |------|-------------------------------------|
//! | 00   | [`PubxPosition`] - Lat/Long position |
//! | 03   | Satellite status (not decoded)      |
//! | 04   | [`PubxTime`] - Time of day and clock |
//! | 40   | [`PubxRate`] - Output rates          |
//! | 41   | [`PubxConfig`] - Port configuration  |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, Validation,
    field::{
        FieldResult, apply_hemisphere, parse_coordinate, parse_date, parse_flag, parse_float,
        parse_time, parse_unsigned,
    },
    sentences::{DecodeField, kmph_to_mps},
};

const MAX_SATELLITES_USED: u8 = 24;

field_enum! {
    /// Navigation status reported by `PUBX,00`
    pub enum NavigationStatus {
        /// NF - No fix
        "NF" => NoFix,
        /// DR - Dead reckoning only solution
        "DR" => DeadReckoning,
        /// G2 - Stand alone 2D solution
        "G2" => Standalone2D,
        /// G3 - Stand alone 3D solution
        "G3" => Standalone3D,
        /// D2 - Differential 2D solution
        "D2" => Differential2D,
        /// D3 - Differential 3D solution
        "D3" => Differential3D,
        /// RK - Combined GPS and dead reckoning solution
        "RK" => GpsAndDeadReckoning,
        /// TT - Time only solution
        "TT" => TimeOnly,
    }
}

/// A decoded `PUBX` message, selected by the message type of field 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum PUBX {
    /// PUBX,41 - Set protocols and baud rate
    Config(PubxConfig),
    /// PUBX,00 - Lat/Long position data
    Position(PubxPosition),
    /// PUBX,40 - Set NMEA message output rate
    Rate(PubxRate),
    /// PUBX,03 - Satellite status, never decoded
    SvStatus,
    /// PUBX,04 - Time of day and clock information
    Time(PubxTime),
}

impl PUBX {
    /// Message type code, as transmitted in field 1.
    pub fn message_type(&self) -> u8 {
        match self {
            PUBX::Position(_) => 0,
            PUBX::SvStatus => 3,
            PUBX::Time(_) => 4,
            PUBX::Rate(_) => 40,
            PUBX::Config(_) => 41,
        }
    }

    fn from_field(field: &str) -> FieldResult<Self> {
        let code = parse_unsigned::<u8>(field)?.ok_or(FieldError::Syntax)?;

        match code {
            0 => Ok(PUBX::Position(PubxPosition::default())),
            3 => Ok(PUBX::SvStatus),
            4 => Ok(PUBX::Time(PubxTime::default())),
            40 => Ok(PUBX::Rate(PubxRate::default())),
            41 => Ok(PUBX::Config(PubxConfig::default())),
            _ => Err(FieldError::Rejected),
        }
    }
}

/// Decodes one field of a `PUBX` sentence.
///
/// The payload stays `None` until field 1 has selected the message type.
pub(crate) fn decode_field(
    pubx: &mut Option<PUBX>,
    field: &str,
    index: u8,
    validation: Validation,
) -> FieldResult<()> {
    match (index, pubx) {
        (0, _) => Ok(()),
        (1, pubx) => {
            *pubx = Some(PUBX::from_field(field)?);
            Ok(())
        }
        (_, Some(PUBX::Config(config))) => config.decode_field(field, index, validation),
        (_, Some(PUBX::Position(position))) => position.decode_field(field, index, validation),
        (_, Some(PUBX::Rate(rate))) => rate.decode_field(field, index, validation),
        (_, Some(PUBX::Time(time))) => time.decode_field(field, index, validation),
        (_, Some(PUBX::SvStatus)) | (_, None) => Err(FieldError::Rejected),
    }
}

/// PUBX,41 - Set protocols and baud rate
///
/// ```text
///        1  2 3    4    5     6
///        |  | |    |    |     |
///  $PUBX,41,x,xxxx,xxxx,xxxxx,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PubxConfig {
    /// Port identifier
    pub port: Option<u8>,
    /// Input protocol mask
    pub in_proto: Option<u16>,
    /// Output protocol mask
    pub out_proto: Option<u16>,
    /// Baud rate in bits per second
    pub baudrate: Option<u32>,
    /// Autobauding enabled
    pub autobauding: Option<bool>,
}

impl DecodeField for PubxConfig {
    fn decode_field(&mut self, field: &str, index: u8, validation: Validation) -> FieldResult<()> {
        debug_assert!(index >= 2);

        match index {
            2 => self.port = parse_unsigned(field)?,
            3 => self.in_proto = parse_unsigned(field)?,
            4 => self.out_proto = parse_unsigned(field)?,
            5 => {
                let baudrate = parse_unsigned::<u32>(field)?;
                if validation == Validation::Strict && baudrate == Some(0) {
                    return Err(FieldError::Rejected);
                }
                self.baudrate = baudrate;
            }
            6 => self.autobauding = parse_flag(field)?,
            _ => return Err(FieldError::Rejected),
        }

        Ok(())
    }
}

/// PUBX,00 - Lat/Long position data
///
/// ```text
///        1  2         3         4 5          6 7     8  9   10  11  12  13  14 15  16  17  18 19 20
///        |  |         |         | |          | |     |  |   |   |   |   |   |  |   |   |   |  |  |
///  $PUBX,00,hhmmss.ss,ddmm.mmmm,a,dddmm.mmmm,a,x.xxx,aa,x.x,x.x,x.x,x.x,x.x,x,x.x,x.x,x.x,x,x,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PubxPosition {
    /// Fix time in UTC
    pub time: Option<time::Time>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Altitude above user datum ellipsoid in meters
    pub altitude: Option<f32>,
    /// Navigation status
    pub status: Option<NavigationStatus>,
    /// Horizontal accuracy estimate in meters
    pub horizontal_accuracy: Option<f32>,
    /// Vertical accuracy estimate in meters
    pub vertical_accuracy: Option<f32>,
    /// Speed over ground in meters per second
    pub speed: Option<f32>,
    /// Course over ground in degrees
    pub track: Option<f32>,
    /// Vertical velocity in meters per second, positive downwards
    pub vertical_velocity: Option<f32>,
    /// Age of differential corrections in seconds
    pub dgps_age: Option<u16>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Time Dilution of Precision
    pub tdop: Option<f32>,
    /// Number of GPS satellites used in the navigation solution
    pub gps_satellites: Option<u8>,
    /// Number of GLONASS satellites used in the navigation solution
    pub glonass_satellites: Option<u8>,
    /// Dead reckoning used
    pub dead_reckoning: Option<bool>,
}

fn parse_satellites_used(field: &str, validation: Validation) -> FieldResult<Option<u8>> {
    let count = parse_unsigned::<u8>(field)?;
    if validation == Validation::Strict && count.is_some_and(|count| count > MAX_SATELLITES_USED) {
        return Err(FieldError::Rejected);
    }
    Ok(count)
}

impl DecodeField for PubxPosition {
    fn decode_field(&mut self, field: &str, index: u8, validation: Validation) -> FieldResult<()> {
        debug_assert!(index >= 2);

        match index {
            2 => self.time = parse_time(field)?,
            3 => self.latitude = parse_coordinate(field)?,
            4 => apply_hemisphere(field, &mut self.latitude)?,
            5 => self.longitude = parse_coordinate(field)?,
            6 => apply_hemisphere(field, &mut self.longitude)?,
            7 => self.altitude = parse_float(field)?,
            8 => self.status = NavigationStatus::from_field(field)?,
            9 => self.horizontal_accuracy = parse_float(field)?,
            10 => self.vertical_accuracy = parse_float(field)?,
            11 => self.speed = parse_float(field)?.map(kmph_to_mps),
            12 => self.track = parse_float(field)?,
            13 => self.vertical_velocity = parse_float(field)?,
            14 => self.dgps_age = parse_unsigned(field)?,
            15 => self.vdop = parse_float(field)?,
            16 => self.hdop = parse_float(field)?,
            17 => self.tdop = parse_float(field)?,
            18 => self.gps_satellites = parse_satellites_used(field, validation)?,
            19 => self.glonass_satellites = parse_satellites_used(field, validation)?,
            20 => self.dead_reckoning = parse_flag(field)?,
            _ => return Err(FieldError::Rejected),
        }

        Ok(())
    }
}

/// PUBX,40 - Set NMEA message output rate
///
/// ```text
///        1  2 3 4 5 6
///        |  | | | | |
///  $PUBX,40,x,x,x,x,x*hh<CR><LF>
/// ```
///
/// Rates are expressed in navigation cycles, 0 disables the output on that port.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PubxRate {
    /// Output rate on the DDC (I2C) port
    pub ddc: Option<u8>,
    /// Output rate on USART 1
    pub usart1: Option<u8>,
    /// Output rate on USART 2
    pub usart2: Option<u8>,
    /// Output rate on USB
    pub usb: Option<u8>,
    /// Output rate on SPI
    pub spi: Option<u8>,
}

impl DecodeField for PubxRate {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        debug_assert!(index >= 2);

        let rate = match index {
            2 => &mut self.ddc,
            3 => &mut self.usart1,
            4 => &mut self.usart2,
            5 => &mut self.usb,
            6 => &mut self.spi,
            _ => return Err(FieldError::Rejected),
        };
        *rate = parse_unsigned(field)?;

        Ok(())
    }
}

/// PUBX,04 - Time of day and clock information
///
/// ```text
///        1  2         3      4         5    6   7       8        9  10
///        |  |         |      |         |    |   |       |        |  |
///  $PUBX,04,hhmmss.ss,ddmmyy,xxxxxx.xx,xxxx,xxx,xxxxxxx,xxx.xxxx,xx,*hh<CR><LF>
/// ```
///
/// Only the UTC time and date are decoded, the clock fields are skipped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PubxTime {
    /// UTC time
    pub time: Option<time::Time>,
    /// UTC date
    pub date: Option<time::Date>,
}

impl DecodeField for PubxTime {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        debug_assert!(index >= 2);

        match index {
            2 => self.time = parse_time(field)?,
            3 => self.date = parse_date(field)?,
            _ => {}
        }

        Ok(())
    }
}

pub(crate) fn log(pubx: Option<&PUBX>) {
    let Some(pubx) = pubx else {
        log::info!("PUBX: <no message type>");
        return;
    };
    let code = pubx.message_type();

    match pubx {
        PUBX::Config(config) => log::info!(
            "PUBX[{code:02}|config]: port={:?} in={:?} out={:?} baudrate={:?} autobauding={:?}",
            config.port,
            config.in_proto,
            config.out_proto,
            config.baudrate,
            config.autobauding
        ),
        PUBX::Position(position) => {
            log::info!("PUBX[{code:02}|position]: time={:?}", position.time);
            log::info!(
                "PUBX[{code:02}|position]: lat={:?} lng={:?} alt={:?}",
                position.latitude,
                position.longitude,
                position.altitude
            );
            log::info!(
                "PUBX[{code:02}|position]: track={:?} speed={:?} m/s",
                position.track,
                position.speed
            );
            log::info!(
                "PUBX[{code:02}|position]: hdop={:?} vdop={:?} tdop={:?}",
                position.hdop,
                position.vdop,
                position.tdop
            );
            log::info!(
                "PUBX[{code:02}|position]: hacc={:?} vacc={:?}",
                position.horizontal_accuracy,
                position.vertical_accuracy
            );
        }
        PUBX::Rate(rate) => log::info!(
            "PUBX[{code:02}|rate]: ddc={:?} usart1={:?} usart2={:?} usb={:?} spi={:?}",
            rate.ddc,
            rate.usart1,
            rate.usart2,
            rate.usb,
            rate.spi
        ),
        PUBX::SvStatus => log::info!("PUBX[{code:02}|svstatus]: <not decoded>"),
        PUBX::Time(time) => log::info!(
            "PUBX[{code:02}|time]: date={:?} time={:?}",
            time.date,
            time.time
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(fields: &str, validation: Validation) -> FieldResult<Option<PUBX>> {
        let mut pubx = None;
        for (index, field) in fields.split(',').enumerate() {
            decode_field(&mut pubx, field, index as u8, validation)?;
        }
        Ok(pubx)
    }

    #[test]
    fn test_pubx_position() {
        let pubx = decode(
            "PUBX,00,081350.00,4717.113210,N,00833.915187,E,546.589,G3,2.1,2.0,0.007,77.52,0.007,,0.92,1.19,0.77,9,0,0",
            Validation::Strict,
        )
        .unwrap();

        let Some(PUBX::Position(position)) = pubx else {
            panic!("Expected a position message, got {pubx:?}");
        };
        assert_eq!(position.time, Some(time::Time::from_hms(8, 13, 50).unwrap()));
        assert!((position.latitude.unwrap() - 47.285220).abs() < 1e-5);
        assert!((position.longitude.unwrap() - 8.565253).abs() < 1e-5);
        assert_eq!(position.altitude, Some(546.589));
        assert_eq!(position.status, Some(NavigationStatus::Standalone3D));
        assert_eq!(position.horizontal_accuracy, Some(2.1));
        assert_eq!(position.vertical_accuracy, Some(2.0));
        assert!((position.speed.unwrap() - 0.007 / 3.6).abs() < 1e-6);
        assert_eq!(position.track, Some(77.52));
        assert_eq!(position.dgps_age, None);
        assert_eq!(position.vdop, Some(0.92));
        assert_eq!(position.hdop, Some(1.19));
        assert_eq!(position.tdop, Some(0.77));
        assert_eq!(position.gps_satellites, Some(9));
        assert_eq!(position.glonass_satellites, Some(0));
        assert_eq!(position.dead_reckoning, Some(false));
    }

    #[test]
    fn test_pubx_position_limits() {
        let base = "PUBX,00,081350.00,4717.113210,N,00833.915187,E,546.589,G3,2.1,2.0,0.007,77.52,0.007,,0.92,1.19,0.77";

        let too_many = format!("{base},30,0,0");
        assert!(decode(&too_many, Validation::Basic).is_ok());
        assert_eq!(decode(&too_many, Validation::Strict), Err(FieldError::Rejected));

        let extra_field = format!("{base},9,0,0,1");
        assert_eq!(decode(&extra_field, Validation::Basic), Err(FieldError::Rejected));

        let bad_status = base.replace("G3", "XX");
        assert_eq!(decode(&bad_status, Validation::Basic), Err(FieldError::Rejected));
    }

    #[test]
    fn test_pubx_time() {
        let pubx = decode(
            "PUBX,04,073731.00,091202,113851.00,1196,15D,1930035,-2660.664,43,",
            Validation::Basic,
        )
        .unwrap();

        let Some(PUBX::Time(clock)) = pubx else {
            panic!("Expected a time message, got {pubx:?}");
        };
        assert_eq!(clock.time, Some(time::Time::from_hms(7, 37, 31).unwrap()));
        assert_eq!(
            clock.date,
            Some(time::Date::from_calendar_date(2002, time::Month::December, 9).unwrap())
        );
    }

    #[test]
    fn test_pubx_rate_and_config() {
        let pubx = decode("PUBX,40,1,0,2,0,0", Validation::Basic).unwrap();
        assert_eq!(
            pubx,
            Some(PUBX::Rate(PubxRate {
                ddc: Some(1),
                usart1: Some(0),
                usart2: Some(2),
                usb: Some(0),
                spi: Some(0),
            }))
        );
        assert_eq!(decode("PUBX,40,1,0,2,0,0,0", Validation::Basic), Err(FieldError::Rejected));

        let pubx = decode("PUBX,41,1,0007,0003,19200,0", Validation::Strict).unwrap();
        assert_eq!(
            pubx,
            Some(PUBX::Config(PubxConfig {
                port: Some(1),
                in_proto: Some(7),
                out_proto: Some(3),
                baudrate: Some(19200),
                autobauding: Some(false),
            }))
        );
        assert!(decode("PUBX,41,1,0007,0003,0,0", Validation::Basic).is_ok());
        assert_eq!(
            decode("PUBX,41,1,0007,0003,0,0", Validation::Strict),
            Err(FieldError::Rejected)
        );
    }

    #[test]
    fn test_pubx_message_types() {
        assert_eq!(decode("PUBX", Validation::Basic), Ok(None));
        assert_eq!(decode("PUBX,03", Validation::Basic), Ok(Some(PUBX::SvStatus)));
        assert_eq!(decode("PUBX,03,11", Validation::Basic), Err(FieldError::Rejected));
        assert_eq!(decode("PUBX,99,1", Validation::Basic), Err(FieldError::Rejected));
        assert_eq!(decode("PUBX,,1", Validation::Basic), Err(FieldError::Syntax));
        assert_eq!(decode("PUBX,0x,1", Validation::Basic), Err(FieldError::Syntax));

        for code in [0, 3, 4, 40, 41] {
            let pubx = decode(&format!("PUBX,{code:02}"), Validation::Basic).unwrap().unwrap();
            assert_eq!(pubx.message_type(), code);
        }
    }
}
