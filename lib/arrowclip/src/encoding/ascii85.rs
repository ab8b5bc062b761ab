use byteorder::{BigEndian, ByteOrder};

use super::{DecodeError, DecodeResult};

const DIGIT_MIN: u8 = b'!';
const DIGIT_MAX: u8 = b'u';
const ZERO_GROUP: u8 = b'z';
const RADIX: u32 = 85;
const GROUP_BYTES: usize = 4;
const GROUP_DIGITS: usize = 5;

fn malformed(message: impl Into<String>, offset: usize) -> DecodeError {
    DecodeError::MalformedTextEncoding {
        message: message.into(),
        offset,
    }
}

/// Encodes `bytes` as ascii85 without delimiters or line breaks.
///
/// A trailing group of fewer than four bytes is zero-padded and only its
/// first `n + 1` digits are written. When `fold_zero_groups` is set, a
/// complete group of four zero bytes is written as a single `z`.
pub fn encode(bytes: &[u8], fold_zero_groups: bool) -> String {
    let mut text = String::with_capacity(bytes.len().div_ceil(GROUP_BYTES) * GROUP_DIGITS);

    for chunk in bytes.chunks(GROUP_BYTES) {
        let mut group = [0u8; GROUP_BYTES];
        group[..chunk.len()].copy_from_slice(chunk);
        let mut value = BigEndian::read_u32(&group);

        if fold_zero_groups && value == 0 && chunk.len() == GROUP_BYTES {
            text.push(ZERO_GROUP as char);
            continue;
        }

        let mut digits = [0u8; GROUP_DIGITS];
        for digit in digits.iter_mut().rev() {
            *digit = DIGIT_MIN + (value % RADIX) as u8;
            value /= RADIX;
        }
        for digit in &digits[..chunk.len() + 1] {
            text.push(*digit as char);
        }
    }

    text
}

fn group_value(digits: &[u8; GROUP_DIGITS], offset: usize) -> DecodeResult<u32> {
    let value = digits
        .iter()
        .fold(0u64, |acc, digit| acc * RADIX as u64 + *digit as u64);
    u32::try_from(value).map_err(|_| malformed("group value exceeds 32 bits", offset))
}

/// Decodes ascii85 text produced by [`encode`] with either folding mode.
///
/// ASCII whitespace is skipped anywhere in the input. Offsets in errors are
/// byte positions within `text`.
pub fn decode(text: &str) -> DecodeResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len() / GROUP_DIGITS * GROUP_BYTES + GROUP_BYTES);
    let mut digits = [0u8; GROUP_DIGITS];
    let mut digit_count = 0;
    let mut group_start = 0;

    for (offset, byte) in text.bytes().enumerate() {
        match byte {
            _ if byte.is_ascii_whitespace() => continue,
            ZERO_GROUP if digit_count == 0 => bytes.extend_from_slice(&[0; GROUP_BYTES]),
            ZERO_GROUP => return Err(malformed("'z' inside a group", offset)),
            DIGIT_MIN..=DIGIT_MAX => {
                if digit_count == 0 {
                    group_start = offset;
                }
                digits[digit_count] = byte - DIGIT_MIN;
                digit_count += 1;

                if digit_count == GROUP_DIGITS {
                    let value = group_value(&digits, group_start)?;
                    bytes.extend_from_slice(&value.to_be_bytes());
                    digit_count = 0;
                }
            }
            _ => {
                return Err(malformed(
                    format!("invalid character 0x{:02X}", byte),
                    offset,
                ))
            }
        }
    }

    match digit_count {
        0 => (),
        1 => return Err(malformed("final group has a single digit", group_start)),
        _ => {
            digits[digit_count..].fill(DIGIT_MAX - DIGIT_MIN);
            let value = group_value(&digits, group_start)?;
            bytes.extend_from_slice(&value.to_be_bytes()[..digit_count - 1]);
        }
    }

    Ok(bytes)
}
