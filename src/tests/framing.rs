use crate::{
    DecodeStatus, DecoderStats, Error, FramingError, NmeaDecoder, NmeaMessage,
    tests::support::{feed, outcomes, sentence, with_checksum},
};

const GGA: &str = "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";
const GLL: &str = "GPGLL,4916.45,N,12311.12,W,225444,A,A";

fn decoder() -> NmeaDecoder<Vec<NmeaMessage>> {
    NmeaDecoder::new(Vec::new())
}

#[test]
fn test_valid_sentence() {
    let mut decoder = decoder();
    let bytes = sentence(GGA);
    assert_eq!(bytes.last(), Some(&b'\n'));
    assert!(bytes.ends_with(b"*47\r\n"));

    let statuses: Vec<_> = decoder.decode(&bytes).collect();
    let (last, rest) = statuses.split_last().unwrap();
    assert_eq!(*last, DecodeStatus::Decoded);
    assert!(rest.iter().all(|status| *status == DecodeStatus::Decoding));

    assert_eq!(decoder.pool().len(), 1);
    assert_eq!(decoder.stats(), DecoderStats::default());
}

#[test]
fn test_checksum_is_optional() {
    let mut decoder = decoder();
    let bytes = format!("${GLL}\r\n");

    assert_eq!(feed(&mut decoder, bytes.as_bytes()), DecodeStatus::Decoded);
}

#[test]
fn test_checksum_lower_case() {
    let mut decoder = decoder();

    assert_eq!(feed(&mut decoder, &with_checksum(GLL, "5c")), DecodeStatus::Decoded);
    assert_eq!(feed(&mut decoder, &with_checksum(GLL, "5C")), DecodeStatus::Decoded);
}

#[test]
fn test_checksum_mismatch() {
    let mut decoder = decoder();

    let statuses = outcomes(&mut decoder, &with_checksum(GGA, "00"));
    assert_eq!(
        statuses[0],
        DecodeStatus::Error(Error::ChecksumMismatch {
            expected: 0x47,
            found: 0x00
        })
    );
    assert!(decoder.pool().is_empty());
    assert_eq!(
        decoder.stats(),
        DecoderStats {
            checksum_errors: 1,
            ..Default::default()
        }
    );
}

#[test]
fn test_checksum_single_bit_flips() {
    let bytes = sentence(GGA);
    let star = bytes.iter().position(|&byte| byte == b'*').unwrap();

    for position in 1..star {
        for bit in 0..8 {
            let mut corrupted = bytes.clone();
            corrupted[position] ^= 1 << bit;

            let mut decoder = decoder();
            let statuses = outcomes(&mut decoder, &corrupted);
            assert!(
                !statuses.contains(&DecodeStatus::Decoded),
                "Decoded with byte {position} bit {bit} flipped: {:?}",
                String::from_utf8_lossy(&corrupted)
            );
            assert!(decoder.pool().is_empty());
        }
    }
}

#[test]
fn test_framing_errors() {
    let cases: [(&[u8], FramingError); 9] = [
        (b"$GPGGA\r\r\n", FramingError::DuplicateCarriageReturn),
        (b"$GPGGA\n", FramingError::MissingCarriageReturn),
        (b"$GPGGA*47\n", FramingError::MissingCarriageReturn),
        (b"$GPGGA\r,\n", FramingError::MisplacedDelimiter(',')),
        (b"$GPGGA*4*7\r\n", FramingError::MisplacedDelimiter('*')),
        (b"$GPGGA,\x01\r\n", FramingError::NonPrintable(0x01)),
        (b"$GPGGA*4\r\n", FramingError::MalformedChecksum),
        (b"$GPGGA*4G\r\n", FramingError::MalformedChecksum),
        (b"$GPGGA*\r\n", FramingError::MalformedChecksum),
    ];

    let mut decoder = decoder();
    for (count, (input, expected)) in cases.into_iter().enumerate() {
        let statuses = outcomes(&mut decoder, input);
        assert_eq!(
            statuses.first(),
            Some(&DecodeStatus::Error(Error::Framing(expected))),
            "Failed: {:?}",
            String::from_utf8_lossy(input)
        );
        assert!(
            statuses[1..].iter().all(|status| *status == DecodeStatus::Syncing),
            "Failed: {:?}",
            String::from_utf8_lossy(input)
        );
        assert_eq!(decoder.stats().parsing_errors as usize, count + 1);
    }

    assert!(decoder.pool().is_empty());
    assert_eq!(decoder.stats().checksum_errors, 0);
}

#[test]
fn test_too_many_fields() {
    let mut decoder = decoder();

    let mut bytes = b"$GPZZZ".to_vec();
    bytes.extend(",".repeat(255).bytes());
    bytes.extend(b"\r\n");
    assert_eq!(outcomes(&mut decoder, &bytes), [DecodeStatus::Unhandled]);

    let mut bytes = b"$GPZZZ".to_vec();
    bytes.extend(",".repeat(256).bytes());
    bytes.extend(b"\r\n");
    assert_eq!(
        outcomes(&mut decoder, &bytes),
        [
            DecodeStatus::Error(Error::Framing(FramingError::TooManyFields)),
            DecodeStatus::Syncing,
            DecodeStatus::Syncing,
        ]
    );
}

#[test]
fn test_syncing_outside_sentence() {
    let mut decoder = decoder();

    let statuses: Vec<_> = decoder.decode(b"GPGGA,1,2*47\r\n\x00\xff").collect();
    assert!(statuses.iter().all(|status| *status == DecodeStatus::Syncing));
    assert_eq!(decoder.stats(), DecoderStats::default());
}

#[test]
fn test_text_after_carriage_return() {
    let mut decoder = decoder();

    let mut bytes = sentence(GLL);
    bytes.insert(bytes.len() - 1, b'X');
    assert_eq!(feed(&mut decoder, &bytes), DecodeStatus::Decoded);
}

#[test]
fn test_empty_sentence() {
    let mut decoder = decoder();

    assert_eq!(outcomes(&mut decoder, b"$\r\n"), [DecodeStatus::Unhandled]);
    assert_eq!(outcomes(&mut decoder, b"$*00\r\n"), [DecodeStatus::Unhandled]);
    assert_eq!(decoder.stats(), DecoderStats::default());
}
