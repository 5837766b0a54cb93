use crate::{DecodeStatus, MessagePool, NmeaDecoder, NmeaMessage, command::checksum};

/// Frames a payload into the bytes of a complete sentence.
///
/// Unlike outbound commands, received sentences are not held to the 82 byte limit.
pub fn sentence(payload: &str) -> Vec<u8> {
    with_checksum(payload, &format!("{:02X}", checksum(payload.as_bytes())))
}

/// Feeds every byte and returns the status of the last one.
pub fn feed<P: MessagePool, const N: usize>(
    decoder: &mut NmeaDecoder<P, N>,
    bytes: &[u8],
) -> DecodeStatus {
    let statuses: Vec<_> = decoder.decode(bytes).collect();
    *statuses.last().expect("no bytes fed")
}

/// Feeds a whole sentence and returns every status but `Decoding`.
pub fn outcomes<P: MessagePool, const N: usize>(
    decoder: &mut NmeaDecoder<P, N>,
    bytes: &[u8],
) -> Vec<DecodeStatus> {
    decoder
        .decode(bytes)
        .filter(|status| *status != DecodeStatus::Decoding)
        .collect()
}

/// Decodes a single sentence with a fresh decoder and returns the message.
pub fn decode_one(payload: &str) -> NmeaMessage {
    let mut decoder = NmeaDecoder::new(Vec::<NmeaMessage>::new());
    let status = feed(&mut decoder, &sentence(payload));
    assert_eq!(status, DecodeStatus::Decoded, "Failed: {payload:?}");

    let mut messages = decoder.into_pool();
    assert_eq!(messages.len(), 1);
    messages.remove(0)
}

/// Frames a payload with the given checksum text instead of the computed one.
pub fn with_checksum(payload: &str, checksum: &str) -> Vec<u8> {
    format!("${payload}*{checksum}\r\n").into_bytes()
}
