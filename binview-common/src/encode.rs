//! Implements byte-level encoding of fixed-width source elements.

/// A source element that encodes to a fixed number of big-endian bytes.
pub trait Element: Copy {
    /// The number of bytes one element encodes to.
    const BYTE_SIZE: usize;

    /// Appends the big-endian encoding of the element to the buffer.
    fn write_be(self, out: &mut Vec<u8>);
}

macro_rules! element_write_be {
    ($($num:ident,)*) => {
        $(
            impl Element for $num {
                const BYTE_SIZE: usize = std::mem::size_of::<$num>();

                fn write_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

element_write_be! {
    u8,
    i16,
    u16,
    i32,
    i64,
    f32,
    f64,
}

/// Packs booleans into bytes, most significant bit first.
///
/// A trailing partial byte has its unused low bits set to zero.
pub fn pack_bits(values: &[bool]) -> Vec<u8> {
    let mut out = vec![0; values.len().div_ceil(8)];

    for (i, &value) in values.iter().enumerate() {
        if value {
            out[i / 8] |= 1 << (7 - i % 8);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded<T: Element>(values: &[T]) -> Vec<u8> {
        let mut out = Vec::new();
        for &value in values {
            value.write_be(&mut out);
        }
        out
    }

    #[test]
    fn ints_encode_big_endian() {
        assert_eq!(
            encoded(&[1i32, -1, 256, 0]),
            [
                0x00, 0x00, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x01, 0x00, 0x00,
                0x00, 0x00, 0x00,
            ]
        );
        assert_eq!(encoded(&[0x1234i16, -2]), [0x12, 0x34, 0xFF, 0xFE]);
        assert_eq!(encoded(&[u16::from(b'A')]), [0x00, 0x41]);
        assert_eq!(
            encoded(&[1i64]),
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn floats_encode_ieee754_big_endian() {
        assert_eq!(encoded(&[1.0f32]), [0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(
            encoded(&[-2.0f64]),
            [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn bytes_encode_identically() {
        assert_eq!(encoded(&[0x00u8, 0x7F, 0xFF]), [0x00, 0x7F, 0xFF]);
    }

    #[test]
    fn bits_pack_msb_first() {
        assert_eq!(
            pack_bits(&[true, false, true, true, false, false, false, true]),
            [0b1011_0001]
        );
    }

    #[test]
    fn trailing_bits_are_zero() {
        assert_eq!(pack_bits(&[true, true, true]), [0b1110_0000]);
        assert_eq!(pack_bits(&[false; 9]), [0b0000_0000, 0b0000_0000]);
        assert_eq!(pack_bits(&[]), Vec::<u8>::new());
    }
}
