// Generated from an 8x16 ASCII bitmap font, re-cut to 22px rows with
// per-glyph width trimming. Regenerate rather than edit by hand.

pub(crate) const GLYPH_HEIGHT: usize = 22;
pub(crate) const STRIP_STRIDE: usize = 99;

pub(crate) static GLYPH_SCALARS: [u32; 95] = [
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x2B,
    0x2C, 0x2D, 0x2E, 0x2F, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
    0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, 0x40, 0x41, 0x42, 0x43,
    0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F,
    0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, 0x5B,
    0x5C, 0x5D, 0x5E, 0x5F, 0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67,
    0x68, 0x69, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0x73,
    0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x7B, 0x7C, 0x7D, 0x7E,
];

pub(crate) static GLYPH_WIDTHS: [u8; 95] = [
    6, 6, 8, 9, 9, 9, 9, 5, 6, 6, 10, 8, 5, 9, 4, 9,
    9, 8, 9, 9, 9, 9, 9, 9, 9, 9, 4, 5, 8, 8, 8, 9,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 6, 9, 9, 9, 9, 9, 9,
    9, 9, 9, 9, 8, 9, 9, 9, 9, 8, 9, 6, 9, 6, 9, 10,
    6, 9, 9, 9, 9, 9, 8, 9, 9, 6, 8, 9, 6, 9, 9, 9,
    9, 9, 9, 9, 9, 9, 8, 9, 9, 9, 9, 8, 4, 8, 9,
];

pub(crate) static GLYPH_STRIP: [u8; STRIP_STRIDE * GLYPH_HEIGHT] = [
    // row 0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 1
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 2
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 3
    0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 4
    0x00, 0x06, 0x60, 0x00, 0x60, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 5
    0x00, 0xC6, 0x60, 0x01, 0xF0, 0x00, 0x38, 0x30, 0xCC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70,
    0x30, 0x7C, 0x3E, 0x03, 0x1F, 0xC3, 0x87, 0xF1, 0xF0, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00,
    0x02, 0x0F, 0xC1, 0xE3, 0xE1, 0xFC, 0xFE, 0x1E, 0x31, 0x9E, 0x0F, 0x39, 0x9E, 0x0C, 0x66, 0x31,
    0xF1, 0xF8, 0x7C, 0x7E, 0x1F, 0x1F, 0x98, 0xCC, 0x66, 0x33, 0x19, 0x99, 0xFC, 0xF0, 0x01, 0xE3,
    0x60, 0x00, 0x60, 0x01, 0xC0, 0x00, 0x0E, 0x00, 0x07, 0x00, 0x0E, 0x03, 0x01, 0x9C, 0x0E, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x39,
    0x9C, 0x0E, 0xC0,
    // row 6
    0x01, 0xE6, 0x63, 0x63, 0x18, 0x00, 0x6C, 0x31, 0x86, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xD8,
    0x70, 0xC6, 0x63, 0x07, 0x18, 0x06, 0x06, 0x33, 0x19, 0x8C, 0x00, 0x06, 0x00, 0x60, 0x63, 0x1F,
    0x07, 0x06, 0x63, 0x31, 0xB0, 0xCC, 0x66, 0x33, 0x31, 0x8C, 0x06, 0x19, 0x8C, 0x0E, 0xE7, 0x33,
    0x18, 0xCC, 0xC6, 0x33, 0x31, 0x9F, 0x98, 0xCC, 0x66, 0x33, 0x19, 0x99, 0x8C, 0xC2, 0x00, 0x66,
    0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0x06, 0x00, 0x0D, 0x80, 0x06, 0x03, 0x01, 0x8C, 0x06, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x61,
    0x86, 0x1B, 0x80,
    // row 7
    0x01, 0xE2, 0x43, 0x63, 0x09, 0x84, 0x6C, 0x63, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09, 0x8C,
    0xF0, 0x06, 0x03, 0x0F, 0x18, 0x0C, 0x00, 0x33, 0x19, 0x8C, 0xC6, 0x0C, 0x00, 0x30, 0x63, 0x31,
    0x8D, 0x86, 0x66, 0x11, 0x98, 0xC4, 0x62, 0x61, 0x31, 0x8C, 0x06, 0x19, 0x8C, 0x0F, 0xE7, 0xB3,
    0x18, 0xCC, 0xC6, 0x33, 0x31, 0x96, 0x98, 0xCC, 0x66, 0x31, 0xB1, 0x99, 0x0C, 0xC3, 0x00, 0x60,
    0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x06, 0x00, 0x0C, 0x80, 0x06, 0x00, 0x00, 0x0C, 0x06, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x61,
    0x86, 0x00, 0x00,
    // row 8
    0x01, 0xE0, 0x07, 0xF3, 0x01, 0x8C, 0x38, 0x03, 0x03, 0x19, 0x83, 0x00, 0x00, 0x00, 0x19, 0x8C,
    0x30, 0x0C, 0x03, 0x1B, 0x18, 0x0C, 0x00, 0x33, 0x19, 0x8C, 0xC6, 0x18, 0x7E, 0x18, 0x06, 0x31,
    0x98, 0xC6, 0x66, 0x01, 0x98, 0xD0, 0x68, 0x60, 0x31, 0x8C, 0x06, 0x1B, 0x0C, 0x0F, 0xE7, 0xF3,
    0x18, 0xCC, 0xC6, 0x33, 0x18, 0x06, 0x18, 0xCC, 0x66, 0x31, 0xF1, 0x98, 0x18, 0xC1, 0x80, 0x60,
    0x00, 0x00, 0x01, 0xE0, 0xF0, 0x7C, 0x1E, 0x1F, 0x0C, 0x0E, 0xC6, 0xC7, 0x03, 0x8C, 0xC6, 0x3B,
    0x1B, 0x87, 0xC6, 0xE1, 0xD9, 0xB8, 0x7C, 0x7E, 0x33, 0x19, 0x98, 0xCC, 0x66, 0x33, 0xF8, 0x61,
    0x86, 0x00, 0x00,
    // row 9
    0x00, 0xC0, 0x03, 0x61, 0xF0, 0x18, 0x76, 0x03, 0x03, 0x0F, 0x03, 0x00, 0x00, 0x00, 0x31, 0xAC,
    0x30, 0x18, 0x1E, 0x33, 0x1F, 0x8F, 0xC0, 0x61, 0xF0, 0xFC, 0x00, 0x30, 0x00, 0x0C, 0x0C, 0x37,
    0x98, 0xC7, 0xC6, 0x01, 0x98, 0xF0, 0x78, 0x60, 0x3F, 0x8C, 0x06, 0x1E, 0x0C, 0x0D, 0x66, 0xF3,
    0x18, 0xF8, 0xC6, 0x3E, 0x0E, 0x06, 0x18, 0xCC, 0x66, 0xB0, 0xE0, 0xF0, 0x30, 0xC0, 0xC0, 0x60,
    0x00, 0x00, 0x00, 0x30, 0xD8, 0xC6, 0x36, 0x31, 0x9E, 0x19, 0x87, 0x63, 0x01, 0x8D, 0x86, 0x3F,
    0x8C, 0xCC, 0x63, 0x33, 0x30, 0xEC, 0xC6, 0x18, 0x33, 0x19, 0x98, 0xC6, 0xC6, 0x33, 0x31, 0xC0,
    0x03, 0x80, 0x00,
    // row 10
    0x00, 0xC0, 0x03, 0x60, 0x18, 0x30, 0xDC, 0x03, 0x03, 0x3F, 0xCF, 0xC0, 0x7F, 0x00, 0x61, 0xAC,
    0x30, 0x30, 0x03, 0x3F, 0x80, 0xCC, 0x60, 0xC3, 0x18, 0x0C, 0x00, 0x60, 0x00, 0x06, 0x0C, 0x37,
    0x9F, 0xC6, 0x66, 0x01, 0x98, 0xD0, 0x68, 0x6F, 0x31, 0x8C, 0x06, 0x1E, 0x0C, 0x0C, 0x66, 0x73,
    0x18, 0xC0, 0xC6, 0x36, 0x03, 0x06, 0x18, 0xCC, 0x66, 0xB0, 0xE0, 0x60, 0x60, 0xC0, 0x60, 0x60,
    0x00, 0x00, 0x01, 0xF0, 0xCC, 0xC0, 0x66, 0x3F, 0x8C, 0x19, 0x86, 0x63, 0x01, 0x8F, 0x06, 0x35,
    0x8C, 0xCC, 0x63, 0x33, 0x30, 0xCC, 0x60, 0x18, 0x33, 0x19, 0x9A, 0xC3, 0x86, 0x30, 0x60, 0x61,
    0x86, 0x00, 0x00,
    // row 11
    0x00, 0xC0, 0x03, 0x60, 0x18, 0x60, 0xCC, 0x03, 0x03, 0x0F, 0x03, 0x00, 0x00, 0x00, 0xC1, 0x8C,
    0x30, 0x60, 0x03, 0x03, 0x00, 0xCC, 0x61, 0x83, 0x18, 0x0C, 0x00, 0x30, 0x7E, 0x0C, 0x0C, 0x37,
    0x98, 0xC6, 0x66, 0x01, 0x98, 0xC0, 0x60, 0x63, 0x31, 0x8C, 0x66, 0x1B, 0x0C, 0x0C, 0x66, 0x33,
    0x18, 0xC0, 0xC6, 0x33, 0x01, 0x86, 0x18, 0xCC, 0x66, 0xB1, 0xF0, 0x60, 0xC0, 0xC0, 0x30, 0x60,
    0x00, 0x00, 0x03, 0x30, 0xCC, 0xC0, 0x66, 0x30, 0x0C, 0x19, 0x86, 0x63, 0x01, 0x8F, 0x06, 0x35,
    0x8C, 0xCC, 0x63, 0x33, 0x30, 0xC0, 0x38, 0x18, 0x33, 0x19, 0x9A, 0xC3, 0x86, 0x30, 0xC0, 0x61,
    0x86, 0x00, 0x00,
    // row 12
    0x00, 0x00, 0x07, 0xF2, 0x18, 0xC0, 0xCC, 0x03, 0x03, 0x19, 0x83, 0x06, 0x00, 0x01, 0x81, 0x8C,
    0x30, 0xC0, 0x03, 0x03, 0x00, 0xCC, 0x61, 0x83, 0x18, 0x0C, 0xC6, 0x18, 0x00, 0x18, 0x00, 0x37,
    0x18, 0xC6, 0x66, 0x11, 0x98, 0xC4, 0x60, 0x63, 0x31, 0x8C, 0x66, 0x19, 0x8C, 0x4C, 0x66, 0x33,
    0x18, 0xC0, 0xD6, 0x33, 0x31, 0x86, 0x18, 0xC6, 0xC7, 0xF1, 0xB0, 0x61, 0x84, 0xC0, 0x18, 0x60,
    0x00, 0x00, 0x03, 0x30, 0xCC, 0xC0, 0x66, 0x30, 0x0C, 0x19, 0x86, 0x63, 0x01, 0x8D, 0x86, 0x35,
    0x8C, 0xCC, 0x63, 0x33, 0x30, 0xC0, 0x0C, 0x18, 0x33, 0x19, 0x9A, 0xC3, 0x86, 0x31, 0x80, 0x61,
    0x86, 0x00, 0x00,
    // row 13
    0x00, 0xC0, 0x03, 0x63, 0x19, 0x8C, 0xCC, 0x01, 0x86, 0x00, 0x00, 0x06, 0x00, 0x33, 0x00, 0xD8,
    0x30, 0xC6, 0x63, 0x03, 0x18, 0xCC, 0x61, 0x83, 0x18, 0x18, 0xC6, 0x0C, 0x00, 0x30, 0x0C, 0x30,
    0x18, 0xC6, 0x63, 0x31, 0xB0, 0xCC, 0x60, 0x33, 0x31, 0x8C, 0x66, 0x19, 0x8C, 0xCC, 0x66, 0x33,
    0x18, 0xC0, 0xDE, 0x33, 0x31, 0x86, 0x18, 0xC3, 0x87, 0x73, 0x18, 0x61, 0x8C, 0xC0, 0x08, 0x60,
    0x00, 0x00, 0x03, 0x30, 0xCC, 0xC6, 0x66, 0x31, 0x8C, 0x19, 0x86, 0x63, 0x01, 0x8C, 0xC6, 0x35,
    0x8C, 0xCC, 0x63, 0x33, 0x30, 0xC0, 0xC6, 0x1B, 0x33, 0x0F, 0x1F, 0xC6, 0xC6, 0x33, 0x18, 0x61,
    0x86, 0x00, 0x00,
    // row 14
    0x00, 0xC0, 0x03, 0x61, 0xF1, 0x0C, 0x76, 0x00, 0xCC, 0x00, 0x00, 0x06, 0x00, 0x32, 0x00, 0x70,
    0xFC, 0xFE, 0x3E, 0x07, 0x8F, 0x87, 0xC1, 0x81, 0xF0, 0xF0, 0x0C, 0x06, 0x00, 0x60, 0x0C, 0x1F,
    0x18, 0xCF, 0xC1, 0xE3, 0xE1, 0xFC, 0xF0, 0x1D, 0x31, 0x9E, 0x3C, 0x39, 0x9F, 0xCC, 0x66, 0x31,
    0xF1, 0xE0, 0x7C, 0x73, 0x1F, 0x0F, 0x0F, 0x81, 0x03, 0x63, 0x18, 0xF1, 0xFC, 0xF0, 0x01, 0xE0,
    0x00, 0x00, 0x01, 0xD8, 0xF8, 0x7C, 0x3B, 0x1F, 0x1E, 0x0F, 0x8E, 0x67, 0x81, 0x9C, 0xCF, 0x31,
    0x8C, 0xC7, 0xC3, 0xE1, 0xF1, 0xE0, 0x7C, 0x0E, 0x1D, 0x86, 0x0D, 0x8C, 0x63, 0xF3, 0xF8, 0x39,
    0x9C, 0x00, 0x00,
    // row 15
    0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x80, 0x00, 0x19, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x03, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 16
    0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x19, 0x80, 0x00, 0x19, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x03, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 17
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x07, 0x80, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xC0, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 18
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 19
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 20
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    // row 21
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
];
