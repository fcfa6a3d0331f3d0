//! Strict UTF-8 codec covering the original 1 to 6 byte forms.
//!
//! Decoding never substitutes: a bad lead byte, a broken continuation or a
//! truncated tail fails the whole call. Overlong forms are accepted and
//! decode to their scalar value.

use crate::error::UtfError;

/// Upper bounds (exclusive) of the scalars each sequence length can carry.
const LIMITS: [u32; 5] = [0x80, 0x800, 0x1_0000, 0x20_0000, 0x400_0000];
const MAX_SCALAR: u32 = 0x7FFF_FFFF;

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Sequence length and payload bits announced by a lead byte.
fn lead_info(byte: u8) -> Option<(usize, u32)> {
    match byte {
        0x00..=0x7F => Some((1, byte as u32)),
        0xC0..=0xDF => Some((2, (byte & 0x1F) as u32)),
        0xE0..=0xEF => Some((3, (byte & 0x0F) as u32)),
        0xF0..=0xF7 => Some((4, (byte & 0x07) as u32)),
        0xF8..=0xFB => Some((5, (byte & 0x03) as u32)),
        0xFC..=0xFD => Some((6, (byte & 0x01) as u32)),
        _ => None,
    }
}

pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, UtfError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        let (len, mut scalar) =
            lead_info(lead).ok_or(UtfError::InvalidLeadByte { offset: i, byte: lead })?;
        let available = bytes.len() - i;
        if available < len {
            return Err(UtfError::Truncated {
                offset: i,
                needed: len,
                available,
            });
        }
        for (k, &byte) in bytes[i + 1..i + len].iter().enumerate() {
            if !is_continuation(byte) {
                return Err(UtfError::InvalidContinuation {
                    offset: i + 1 + k,
                    byte,
                });
            }
            scalar = (scalar << 6) | (byte & 0x3F) as u32;
        }
        out.push(scalar);
        i += len;
    }
    Ok(out)
}

/// Length of the shortest sequence that can carry `scalar`.
pub fn encoded_len(scalar: u32) -> Result<usize, UtfError> {
    if scalar > MAX_SCALAR {
        return Err(UtfError::ScalarOutOfRange(scalar));
    }
    Ok(LIMITS
        .iter()
        .position(|&limit| scalar < limit)
        .map_or(6, |p| p + 1))
}

pub fn encode(scalars: &[u32]) -> Result<Vec<u8>, UtfError> {
    let mut out = Vec::with_capacity(scalars.len());
    for &scalar in scalars {
        let len = encoded_len(scalar)?;
        if len == 1 {
            out.push(scalar as u8);
            continue;
        }
        let lead_mark: u8 = !(0xFFu8 >> len);
        out.push(lead_mark | (scalar >> (6 * (len - 1))) as u8);
        for k in (0..len - 1).rev() {
            out.push(0x80 | ((scalar >> (6 * k)) & 0x3F) as u8);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_widths() {
        let text = "A5-MiniTV 小电视";
        let scalars: Vec<u32> = text.chars().map(|c| c as u32).collect();
        assert_eq!(decode(text.as_bytes()).unwrap(), scalars);
        assert_eq!(encode(&scalars).unwrap(), text.as_bytes());
    }

    #[test]
    fn lead_marks_match_length() {
        assert_eq!(encode(&[0x7F]).unwrap(), vec![0x7F]);
        assert_eq!(encode(&[0x80]).unwrap(), vec![0xC2, 0x80]);
        assert_eq!(encode(&[0x20_0000]).unwrap()[0], 0xF8);
        assert_eq!(encode(&[0x400_0000]).unwrap()[0], 0xFC);
    }

    #[test]
    fn rejects_continuation_as_lead() {
        assert_eq!(
            decode(&[0x41, 0x80]),
            Err(UtfError::InvalidLeadByte {
                offset: 1,
                byte: 0x80
            })
        );
    }

    #[test]
    fn rejects_fe_and_ff() {
        assert!(matches!(
            decode(&[0xFE]),
            Err(UtfError::InvalidLeadByte { byte: 0xFE, .. })
        ));
        assert!(matches!(
            decode(&[0xFF, 0x80]),
            Err(UtfError::InvalidLeadByte { byte: 0xFF, .. })
        ));
    }

    #[test]
    fn rejects_truncated_tail() {
        assert_eq!(
            decode(&[0x41, 0xE5, 0xB0]),
            Err(UtfError::Truncated {
                offset: 1,
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn rejects_broken_continuation() {
        assert_eq!(
            decode(&[0xC3, 0x41]),
            Err(UtfError::InvalidContinuation {
                offset: 1,
                byte: 0x41
            })
        );
    }

    #[test]
    fn encode_rejects_out_of_range() {
        assert_eq!(
            encode(&[0x8000_0000]),
            Err(UtfError::ScalarOutOfRange(0x8000_0000))
        );
    }
}
