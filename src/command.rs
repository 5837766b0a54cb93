//! # Outbound Commands
//!
//! Receivers are configured with sentences of the same shape as the ones they
//! emit. This module frames a command payload (`PUBX,41,1,0007,0003,19200,0`)
//! into a complete sentence and writes it to the receiver:
//!
//! ```text
//!  $PUBX,41,1,0007,0003,19200,0*25<CR><LF>
//! ```

use std::{
    io::Write,
    thread,
    time::{Duration, Instant},
};

use crate::error::CommandError;

/// Maximum length of a sentence, from `$` to `<LF>` included.
pub const MAX_SENTENCE_LEN: usize = 82;

/// Minimum gap between two consecutive commands.
pub const COMMAND_PACING: Duration = Duration::from_millis(10);

/// Calculates the NMEA 0183 checksum of a payload.
///
/// The checksum is the XOR of every byte between `$` and `*`.
///
/// ```rust
/// use nmea0183_decoder::command::checksum;
///
/// assert_eq!(checksum(b"PMTK000"), 0x32);
/// ```
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Frames a payload into a complete sentence: `$<payload>*<HH><CR><LF>`.
///
/// # Errors
///
/// * [`CommandError::InvalidByte`] if the payload contains a non-printable
///   byte, a `$` or a `*`
/// * [`CommandError::TooLong`] if the framed sentence exceeds [`MAX_SENTENCE_LEN`]
///
/// ```rust
/// use nmea0183_decoder::command::frame_command;
///
/// let sentence = frame_command("PMTK000").unwrap();
/// assert_eq!(sentence, "$PMTK000*32\r\n");
/// ```
pub fn frame_command(payload: &str) -> Result<String, CommandError> {
    if let Some(&byte) = payload
        .as_bytes()
        .iter()
        .find(|&&byte| !(0x20..=0x7E).contains(&byte) || byte == b'$' || byte == b'*')
    {
        return Err(CommandError::InvalidByte(byte));
    }

    // '$' + payload + '*' + two hex digits + CR LF
    let len = payload.len() + 6;
    if len > MAX_SENTENCE_LEN {
        return Err(CommandError::TooLong(len));
    }

    Ok(format!(
        "${payload}*{:02X}\r\n",
        checksum(payload.as_bytes())
    ))
}

/// Writes framed commands to a receiver, keeping them at least
/// [`COMMAND_PACING`] apart.
///
/// A command sent too early waits for the remainder of the gap before being written.
///
/// ```rust
/// use nmea0183_decoder::command::CommandSender;
///
/// let mut sender = CommandSender::new(Vec::new());
/// sender.send("PUBX,40,GLL,0,0,0,0").unwrap();
/// assert_eq!(sender.get_ref(), b"$PUBX,40,GLL,0,0,0,0*5C\r\n");
/// ```
#[derive(Debug)]
pub struct CommandSender<W: Write> {
    writer: W,
    pacing: Duration,
    last_sent: Option<Instant>,
}

impl<W: Write> CommandSender<W> {
    /// Creates a sender with the default [`COMMAND_PACING`].
    pub fn new(writer: W) -> Self {
        CommandSender {
            writer,
            pacing: COMMAND_PACING,
            last_sent: None,
        }
    }

    /// Sets the minimum gap between two consecutive commands.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Frames `payload` and writes it, waiting first if the previous command
    /// was sent less than the pacing gap ago.
    pub fn send(&mut self, payload: &str) -> Result<(), CommandError> {
        let sentence = frame_command(payload)?;

        if let Some(last_sent) = self.last_sent {
            let elapsed = last_sent.elapsed();
            if elapsed < self.pacing {
                thread::sleep(self.pacing - elapsed);
            }
        }

        self.writer.write_all(sentence.as_bytes())?;
        self.writer.flush()?;
        self.last_sent = Some(Instant::now());

        log::info!("Sent command {}", sentence.trim_end());
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_command() {
        let sentence = frame_command("PUBX,41,1,0007,0003,19200,0").unwrap();
        assert_eq!(sentence, "$PUBX,41,1,0007,0003,19200,0*25\r\n");

        assert_eq!(frame_command("").unwrap(), "$*00\r\n");
    }

    #[test]
    fn test_frame_command_errors() {
        assert!(matches!(
            frame_command("PMTK$000"),
            Err(CommandError::InvalidByte(b'$'))
        ));
        assert!(matches!(
            frame_command("PMTK*000"),
            Err(CommandError::InvalidByte(b'*'))
        ));
        assert!(matches!(
            frame_command("PMTK\r000"),
            Err(CommandError::InvalidByte(b'\r'))
        ));
        assert!(matches!(
            frame_command("PMTKé"),
            Err(CommandError::InvalidByte(0xC3))
        ));

        let longest = "A".repeat(MAX_SENTENCE_LEN - 6);
        assert!(frame_command(&longest).is_ok());
        assert!(matches!(
            frame_command(&format!("{longest}A")),
            Err(CommandError::TooLong(83))
        ));
    }

    #[test]
    fn test_sender_pacing() {
        let pacing = Duration::from_millis(20);
        let mut sender = CommandSender::new(Vec::new()).with_pacing(pacing);

        let start = Instant::now();
        sender.send("PMTK000").unwrap();
        sender.send("PMTK000").unwrap();
        sender.send("PMTK000").unwrap();
        assert!(start.elapsed() >= pacing * 2);

        assert_eq!(sender.into_inner(), b"$PMTK000*32\r\n".repeat(3));
    }

    #[test]
    fn test_sender_rejects_before_writing() {
        let mut sender = CommandSender::new(Vec::new());
        assert!(sender.send("PMTK*").is_err());
        assert!(sender.get_ref().is_empty());
    }
}
