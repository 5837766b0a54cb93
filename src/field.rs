//! # Field Parsers
//!
//! Pure functions turning the text of one comma-delimited field into a typed value.
//!
//! Every parser consumes the whole field or fails, and never produces a partial
//! value. An empty field is not an error: NMEA receivers leave fields blank when
//! the value is unknown, so the parsers return `Ok(None)` for it.

use core::ops::Neg;

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    number::complete::{double, float},
    sequence::preceded,
};
use time::{Date, Month, Time};

use crate::error::FieldError;

/// Result of decoding a single field.
pub type FieldResult<T> = Result<T, FieldError>;

/// Runs `parser` over the whole field, mapping any nom failure to [`FieldError::Syntax`].
fn complete<'a, O, P>(parser: P, field: &'a str) -> FieldResult<O>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    all_consuming(parser)
        .parse(field)
        .map(|(_, output)| output)
        .map_err(|_| FieldError::Syntax)
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        str::parse::<u8>,
    )
    .parse(i)
}

/// Copies the field into a bounded string, failing if it does not fit.
pub fn parse_string<const N: usize>(field: &str) -> FieldResult<heapless::String<N>> {
    let mut value = heapless::String::new();
    value.push_str(field).map_err(|_| FieldError::Rejected)?;
    Ok(value)
}

/// Extracts a single character.
pub fn parse_char(field: &str) -> FieldResult<Option<char>> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(FieldError::Syntax),
    }
}

/// Parses a base 10 unsigned integer and narrows it to `T`.
///
/// Values that do not fit in `T` are [`FieldError::Rejected`].
///
/// ```rust
/// use nmea0183_decoder::{FieldError, field::parse_unsigned};
///
/// assert_eq!(parse_unsigned::<u8>("42"), Ok(Some(42)));
/// assert_eq!(parse_unsigned::<u8>(""), Ok(None));
/// assert_eq!(parse_unsigned::<u8>("256"), Err(FieldError::Rejected));
/// assert_eq!(parse_unsigned::<u8>(" 4"), Err(FieldError::Syntax));
/// ```
pub fn parse_unsigned<T: TryFrom<u64>>(field: &str) -> FieldResult<Option<T>> {
    if field.is_empty() {
        return Ok(None);
    }

    let value = complete(nom::character::complete::u64, field)?;
    T::try_from(value).map(Some).map_err(|_| FieldError::Rejected)
}

/// Parses a base 10 signed integer and narrows it to `T`.
pub fn parse_signed<T: TryFrom<i64>>(field: &str) -> FieldResult<Option<T>> {
    if field.is_empty() {
        return Ok(None);
    }

    let value = complete(nom::character::complete::i64, field)?;
    T::try_from(value).map(Some).map_err(|_| FieldError::Rejected)
}

/// Parses a numeric flag, any value above zero being `true`.
pub fn parse_flag(field: &str) -> FieldResult<Option<bool>> {
    Ok(parse_unsigned::<u64>(field)?.map(|value| value > 0))
}

/// Parses a decimal number.
pub fn parse_float(field: &str) -> FieldResult<Option<f32>> {
    if field.is_empty() {
        return Ok(None);
    }

    let value = complete(float, field)?;
    if !value.is_finite() {
        return Err(FieldError::Syntax);
    }

    Ok(Some(value))
}

/// Parses a latitude (`ddmm.mmmm`) or longitude (`dddmm.mmmm`) into decimal degrees.
///
/// The result is always positive, the hemisphere is carried by the next field
/// and applied with [`apply_hemisphere`].
///
/// ```rust
/// use nmea0183_decoder::field::parse_coordinate;
///
/// let latitude = parse_coordinate("4807.038").unwrap().unwrap();
/// assert!((latitude - 48.1173).abs() < 1e-4);
/// ```
pub fn parse_coordinate(field: &str) -> FieldResult<Option<f64>> {
    if field.is_empty() {
        return Ok(None);
    }

    let raw = complete(double, field)?;
    if !raw.is_finite() || raw.is_sign_negative() {
        return Err(FieldError::Syntax);
    }

    let degrees = (raw / 100.0).trunc();
    let minutes = raw - degrees * 100.0;
    if minutes >= 60.0 {
        return Err(FieldError::Rejected);
    }

    Ok(Some(degrees + minutes / 60.0))
}

/// Applies an `N`/`S`/`E`/`W` indicator to a previously parsed value.
///
/// `S` and `W` negate the value, `N`, `E` and an empty field leave it untouched.
pub fn apply_hemisphere<T>(field: &str, value: &mut Option<T>) -> FieldResult<()>
where
    T: Neg<Output = T> + Copy,
{
    match field {
        "" | "N" | "E" => Ok(()),
        "S" | "W" => {
            if let Some(value) = value {
                *value = -*value;
            }
            Ok(())
        }
        _ => Err(FieldError::Syntax),
    }
}

/// Parses a `ddmmyy` date.
///
/// Two-digit years from 83 to 99 belong to the 20th century, the others to the 21st.
pub fn parse_date(field: &str) -> FieldResult<Option<Date>> {
    if field.is_empty() {
        return Ok(None);
    }

    let (day, month, year) = complete((two_digits, two_digits, two_digits), field)?;
    let month = Month::try_from(month).map_err(|_| FieldError::Rejected)?;
    let year = match year {
        83..=99 => 1900 + i32::from(year),
        _ => 2000 + i32::from(year),
    };

    Date::from_calendar_date(year, month, day)
        .map(Some)
        .map_err(|_| FieldError::Rejected)
}

/// Parses a `hhmmss[.sss]` UTC time, keeping up to microsecond precision.
pub fn parse_time(field: &str) -> FieldResult<Option<Time>> {
    if field.is_empty() {
        return Ok(None);
    }

    let (hour, minute, second, fraction) = complete(
        (
            two_digits,
            two_digits,
            two_digits,
            opt(preceded(char('.'), digit1)),
        ),
        field,
    )?;
    let microsecond = fraction.map_or(0, fraction_to_micros);

    Time::from_hms_micro(hour, minute, second, microsecond)
        .map(Some)
        .map_err(|_| FieldError::Rejected)
}

fn fraction_to_micros(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(core::iter::repeat(b'0'))
        .take(6)
        .fold(0, |micros, digit| micros * 10 + u32::from(digit - b'0'))
}

/// Parses the two hexadecimal digits following `*`.
pub fn parse_checksum(field: &str) -> FieldResult<u8> {
    complete(
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
            |hex: &str| u8::from_str_radix(hex, 16),
        ),
        field,
    )
}
