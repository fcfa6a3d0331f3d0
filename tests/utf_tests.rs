use minitv::error::UtfError;
use minitv::utf::{decode, encode, encoded_len};

#[test]
fn every_length_class_round_trips() {
    let scalars = [
        0x00, 0x41, 0x7F, 0x80, 0x7FF, 0x800, 0x4E2D, 0xFFFF, 0x1_0000, 0x1F600, 0x10_FFFF,
        0x1F_FFFF, 0x20_0000, 0x3FF_FFFF, 0x400_0000, 0x7FFF_FFFF,
    ];
    let bytes = encode(&scalars).unwrap();
    assert_eq!(decode(&bytes).unwrap(), scalars);
}

#[test]
fn matches_std_for_modern_text() {
    let text = "A5 MiniTV: \u{4E2D}\u{6587} \u{1F3AC}";
    let scalars: Vec<u32> = text.chars().map(u32::from).collect();
    assert_eq!(decode(text.as_bytes()).unwrap(), scalars);
    assert_eq!(encode(&scalars).unwrap(), text.as_bytes());
}

#[test]
fn shortest_form_thresholds() {
    let lens: Vec<usize> = [0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x1_0000, 0x1F_FFFF, 0x20_0000, 0x3FF_FFFF, 0x400_0000]
        .iter()
        .map(|&s| encoded_len(s).unwrap())
        .collect();
    assert_eq!(lens, vec![1, 2, 2, 3, 3, 4, 4, 5, 5, 6]);
    assert_eq!(encoded_len(0x8000_0000), Err(UtfError::ScalarOutOfRange(0x8000_0000)));
}

#[test]
fn five_byte_form_decodes() {
    assert_eq!(decode(&[0xF8, 0x88, 0x80, 0x80, 0x80]).unwrap(), vec![0x20_0000]);
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        decode(b"ok\x80"),
        Err(UtfError::InvalidLeadByte { offset: 2, byte: 0x80 })
    );
    assert_eq!(
        decode(&[0xFE]),
        Err(UtfError::InvalidLeadByte { offset: 0, byte: 0xFE })
    );
    assert_eq!(
        decode(&[0xE4, 0xB8]),
        Err(UtfError::Truncated { offset: 0, needed: 3, available: 2 })
    );
    assert_eq!(
        decode(&[0x41, 0xC3, 0x41]),
        Err(UtfError::InvalidContinuation { offset: 2, byte: 0x41 })
    );
}

#[test]
fn empty_input_is_empty() {
    assert_eq!(decode(&[]).unwrap(), Vec::<u32>::new());
    assert_eq!(encode(&[]).unwrap(), Vec::<u8>::new());
}
