//! MediaTek proprietary sentences.
//!
//! PMTK packets carry their packet type in the tag itself (`PMTK001`), so the
//! tag field is decoded like any other field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "pmtk")]
use crate::FieldError;
use crate::{
    Validation,
    field::{FieldResult, parse_unsigned},
    sentences::DecodeField,
};

/// PGACK - MediaTek acknowledgement
///
/// ```text
///         1   2
///         |   |
///  $PGACK,xxx,x*hh<CR><LF>
/// ```
#[cfg(feature = "pgack")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PGACK {
    /// Identifier of the acknowledged command
    pub command: Option<u16>,
    /// Status code reported for the command
    pub status: Option<u8>,
}

#[cfg(feature = "pgack")]
impl DecodeField for PGACK {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match index {
            1 => self.command = parse_unsigned(field)?,
            2 => self.status = parse_unsigned(field)?,
            _ => {}
        }

        Ok(())
    }
}

#[cfg(feature = "pmtk")]
field_enum! {
    /// Outcome of a command, as reported by `PMTK001`
    pub enum AckFlag {
        /// 0 - Invalid packet
        "0" => Invalid,
        /// 1 - Unsupported packet type
        "1" => Unsupported,
        /// 2 - Valid packet, but action failed
        "2" => Failed,
        /// 3 - Valid packet, and action succeeded
        "3" => Succeeded,
    }
}

#[cfg(feature = "pmtk")]
field_enum! {
    /// System message reported by `PMTK010`
    pub enum SystemMessage {
        /// 000 - Unknown
        "000" => Unknown,
        /// 001 - Startup
        "001" => Startup,
        /// 002 - Notification for the host to aid EPO
        "002" => EpoRequest,
        /// 003 - Transition to normal mode is successfully done
        "003" => NormalMode,
    }
}

/// PMTK - MediaTek packet
///
/// ```text
///          1   2
///          |   |
///  $PMTKttt,x,...*hh<CR><LF>
/// ```
///
/// `ttt` is the packet type. Only the acknowledgement (`001`) and the system
/// message (`010`) are decoded, other packets keep their type only.
#[cfg(feature = "pmtk")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PMTK {
    /// PMTK001 - Acknowledgement of a command
    Ack {
        /// Packet type of the acknowledged command
        command: Option<u16>,
        /// Outcome of the command
        flag: Option<AckFlag>,
    },
    /// PMTK010 - System message
    System(Option<SystemMessage>),
    /// Any other packet type
    Packet(u16),
}

#[cfg(feature = "pmtk")]
impl Default for PMTK {
    fn default() -> Self {
        PMTK::Packet(0)
    }
}

#[cfg(feature = "pmtk")]
impl PMTK {
    /// Packet type taken from the tag.
    pub fn packet_type(&self) -> u16 {
        match self {
            PMTK::Ack { .. } => 1,
            PMTK::System(_) => 10,
            PMTK::Packet(packet_type) => *packet_type,
        }
    }

    fn from_tag(tag: &str) -> FieldResult<Self> {
        let digits = tag.strip_prefix("PMTK").ok_or(FieldError::Syntax)?;
        let packet_type = parse_unsigned::<u16>(digits)?.ok_or(FieldError::Syntax)?;

        Ok(match packet_type {
            1 => PMTK::Ack {
                command: None,
                flag: None,
            },
            10 => PMTK::System(None),
            _ => PMTK::Packet(packet_type),
        })
    }
}

#[cfg(feature = "pmtk")]
impl DecodeField for PMTK {
    fn decode_field(&mut self, field: &str, index: u8, _: Validation) -> FieldResult<()> {
        match (self, index) {
            (pmtk, 0) => *pmtk = PMTK::from_tag(field)?,
            (PMTK::Ack { command, .. }, 1) => *command = parse_unsigned(field)?,
            (PMTK::Ack { flag, .. }, 2) => *flag = AckFlag::from_field(field)?,
            (PMTK::System(message), 1) => *message = SystemMessage::from_field(field)?,
            _ => {}
        }

        Ok(())
    }
}
