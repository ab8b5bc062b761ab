use byteorder::{ByteOrder, LittleEndian};

use super::{DecodeError, DecodeResult};

const CONTINUATION_BIT: u8 = 0b1000_0000;
const GROUP_MASK: u8 = 0b0111_1111;
const GROUP_BITS: u32 = 7;

/// Appends little-endian primitives and varints to an owned buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> ByteWriter {
        ByteWriter::default()
    }

    pub fn with_capacity(capacity: usize) -> ByteWriter {
        ByteWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        LittleEndian::write_u32(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_f64(&mut self, value: f64) {
        let mut bytes = [0u8; 8];
        LittleEndian::write_f64(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
    }

    /// Writes `value` as 7-bit groups, least significant group first. Every
    /// byte except the last has its top bit set.
    pub fn write_varint(&mut self, mut value: u64) {
        loop {
            let group = (value & GROUP_MASK as u64) as u8;
            value >>= GROUP_BITS;
            if value == 0 {
                self.buf.push(group);
                return;
            }
            self.buf.push(group | CONTINUATION_BIT);
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads little-endian primitives and varints from a borrowed buffer,
/// failing with [`DecodeError::Truncated`] instead of reading past its end.
#[derive(Debug)]
pub struct ByteReader<'a> {
    source: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(source: &'a [u8]) -> ByteReader<'a> {
        ByteReader { source, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.source.len() - self.offset
    }

    fn take(&mut self, needed: usize) -> DecodeResult<&'a [u8]> {
        if needed > self.remaining() {
            return Err(DecodeError::Truncated {
                needed,
                offset: self.offset,
                len: self.source.len(),
            });
        }
        let bytes = &self.source[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    /// Reads groups until one without the continuation bit. The number of
    /// groups is unbounded; zero groups past bit 63 are accepted, but any set
    /// bit that would not fit in a u64 is an overflow.
    pub fn read_varint(&mut self) -> DecodeResult<u64> {
        let start = self.offset;
        let mut value: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let byte = self.read_u8()?;
            let group = (byte & GROUP_MASK) as u64;
            if group != 0 {
                if shift >= u64::BITS || (group << shift) >> shift != group {
                    return Err(DecodeError::VarintOverflow { offset: start });
                }
                value |= group << shift;
            }
            if byte & CONTINUATION_BIT == 0 {
                return Ok(value);
            }
            shift = shift.saturating_add(GROUP_BITS);
        }
    }
}
