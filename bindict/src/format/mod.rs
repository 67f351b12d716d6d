//! Byte-level primitives for the compiled dictionary format.
//!
//! Every reader takes a cursor into the shared dictionary buffer and advances
//! it past whatever it consumed. Running off the end of the buffer is reported
//! as [`DecodeError::OutOfBounds`] carrying the offset the read started at.

mod flags;

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

pub use self::flags::{AttributeFlags, NodeFlags};
use crate::constants::{CHARACTER_ARRAY_TERMINATOR, MINIMAL_ONE_BYTE_CHARACTER_VALUE};
use crate::error::DecodeError;
use crate::types::{CodePoint, DictOffset, Weight};

/// Read-only cursor over a dictionary buffer.
pub type DictCursor<'a> = Cursor<&'a [u8]>;

#[inline(always)]
pub(crate) fn cursor_at(buf: &[u8], pos: DictOffset) -> DictCursor<'_> {
    let mut cursor = Cursor::new(buf);
    cursor.set_position(pos as u64);
    cursor
}

#[inline(always)]
fn offset(cursor: &DictCursor<'_>) -> DictOffset {
    cursor.position() as DictOffset
}

/// Reads a one-byte flags field.
#[inline(always)]
pub fn read_flags(cursor: &mut DictCursor<'_>) -> Result<u8, DecodeError> {
    let start = offset(cursor);
    cursor
        .read_u8()
        .map_err(|e| DecodeError::from_io(e, start))
}

#[inline(always)]
pub fn read_attribute_flags(cursor: &mut DictCursor<'_>) -> Result<AttributeFlags, DecodeError> {
    read_flags(cursor).map(AttributeFlags::from_byte)
}

/// Reads one code point, returning `None` when the sequence terminator is hit.
/// The terminator is consumed.
///
/// Bytes from `0x20` upwards are one-byte code points. A lower lead byte is
/// the high part of a three-byte code point, whose remaining 16 bits follow in
/// big-endian order.
pub fn read_code_point(cursor: &mut DictCursor<'_>) -> Result<Option<CodePoint>, DecodeError> {
    let start = offset(cursor);
    let lead = cursor
        .read_u8()
        .map_err(|e| DecodeError::from_io(e, start))?;

    if lead == CHARACTER_ARRAY_TERMINATOR {
        return Ok(None);
    }

    if lead < MINIMAL_ONE_BYTE_CHARACTER_VALUE {
        let low = cursor
            .read_u16::<BigEndian>()
            .map_err(|e| DecodeError::from_io(e, start))?;
        return Ok(Some((CodePoint::from(lead) << 16) | CodePoint::from(low)));
    }

    Ok(Some(CodePoint::from(lead)))
}

/// Weight of a shortcut entry, embedded in its flags.
#[inline(always)]
pub fn attribute_weight(flags: AttributeFlags) -> Weight {
    flags.weight()
}

/// Reads the length header of a shortcut list. The value counts the whole
/// list in bytes, header included.
#[inline(always)]
pub fn read_shortcut_list_size(cursor: &mut DictCursor<'_>) -> Result<u16, DecodeError> {
    let start = offset(cursor);
    cursor
        .read_u16::<BigEndian>()
        .map_err(|e| DecodeError::from_io(e, start))
}
