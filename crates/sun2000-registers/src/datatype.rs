use thiserror::Error;
use types::RawRegisterValue;

/// Wire encoding of a register. All numeric kinds are big-endian, 32-bit values
/// span two registers with the high word first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Opaque block of arbitrary length (curves, packed settings).
    Multidata,
    I16,
    U16,
    I32,
    U32,
    /// Fixed-length ASCII padded with NUL bytes.
    Str,
    Bitfield16,
    Bitfield32,
}

/// How a client sees a value of a given [`DataType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Opaque,
    Numeric,
    Textual,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{data_type:?} needs {expected} registers, got {actual}")]
    TooShort {
        data_type: DataType,
        expected: usize,
        actual: usize,
    },
}

impl DataType {
    pub const fn kind(self) -> ValueKind {
        match self {
            DataType::Multidata => ValueKind::Opaque,
            DataType::I16 | DataType::U16 | DataType::I32 | DataType::U32 => ValueKind::Numeric,
            DataType::Str | DataType::Bitfield16 | DataType::Bitfield32 => ValueKind::Textual,
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self.kind(), ValueKind::Numeric)
    }

    /// Minimum number of registers needed to decode a value.
    pub const fn min_words(self) -> usize {
        match self {
            DataType::I16 | DataType::U16 | DataType::Bitfield16 => 1,
            DataType::I32 | DataType::U32 | DataType::Bitfield32 => 2,
            DataType::Multidata | DataType::Str => 0,
        }
    }

    pub fn decode(self, words: &[u16]) -> Result<RawRegisterValue, DecodeError> {
        let expected = self.min_words();
        if words.len() < expected {
            return Err(DecodeError::TooShort {
                data_type: self,
                expected,
                actual: words.len(),
            });
        }

        let value = match self {
            DataType::Multidata => RawRegisterValue::Bytes(to_bytes(words)),
            DataType::I16 => RawRegisterValue::Integer(i64::from(words[0] as i16)),
            DataType::U16 => RawRegisterValue::Integer(i64::from(words[0])),
            DataType::I32 => RawRegisterValue::Integer(i64::from(join_words(words) as i32)),
            DataType::U32 => RawRegisterValue::Integer(i64::from(join_words(words))),
            DataType::Str => {
                let bytes = to_bytes(words);
                let text = String::from_utf8_lossy(&bytes);
                RawRegisterValue::Text(text.trim_matches('\0').to_string())
            }
            DataType::Bitfield16 => RawRegisterValue::Text(format!("{:016b}", words[0])),
            DataType::Bitfield32 => RawRegisterValue::Text(format!("{:032b}", join_words(words))),
        };
        Ok(value)
    }
}

fn join_words(words: &[u16]) -> u32 {
    (u32::from(words[0]) << 16) | u32::from(words[1])
}

fn to_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_values_keep_their_sign() {
        assert_eq!(DataType::I16.decode(&[0xFFFE]), Ok(RawRegisterValue::Integer(-2)));
        assert_eq!(
            DataType::I32.decode(&[0xFFFF, 0xFFF6]),
            Ok(RawRegisterValue::Integer(-10))
        );
        assert_eq!(DataType::U16.decode(&[0xFFFE]), Ok(RawRegisterValue::Integer(65_534)));
    }

    #[test]
    fn thirty_two_bit_values_are_high_word_first() {
        assert_eq!(
            DataType::U32.decode(&[0x0008, 0x5EBE]),
            Ok(RawRegisterValue::Integer(548_542))
        );
    }

    #[test]
    fn strings_drop_nul_padding() {
        let words = [0x5355, 0x4E32, 0x3030, 0x3000, 0x0000];
        assert_eq!(
            DataType::Str.decode(&words),
            Ok(RawRegisterValue::Text("SUN2000".to_string()))
        );
    }

    #[test]
    fn bitfields_render_as_binary_digits() {
        assert_eq!(
            DataType::Bitfield16.decode(&[0x0006]),
            Ok(RawRegisterValue::Text("0000000000000110".to_string()))
        );
        let RawRegisterValue::Text(bits) = DataType::Bitfield32.decode(&[0x8000, 0x0001]).unwrap()
        else {
            panic!("bitfield must decode to text");
        };
        assert_eq!(bits.len(), 32);
        assert!(bits.starts_with('1') && bits.ends_with('1'));
    }

    #[test]
    fn multidata_keeps_every_byte() {
        assert_eq!(
            DataType::Multidata.decode(&[0x0004, 0x03A2]),
            Ok(RawRegisterValue::Bytes(vec![0x00, 0x04, 0x03, 0xA2]))
        );
    }

    #[test]
    fn short_reads_are_rejected() {
        assert_eq!(
            DataType::U32.decode(&[1]),
            Err(DecodeError::TooShort {
                data_type: DataType::U32,
                expected: 2,
                actual: 1,
            })
        );
    }
}
