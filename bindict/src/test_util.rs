//! Writes shortcut lists the way the dictionary compiler does.
use byteorder::{BigEndian, WriteBytesExt};

use crate::constants::{
    CHARACTER_ARRAY_TERMINATOR, MINIMAL_ONE_BYTE_CHARACTER_VALUE, SHORTCUT_LIST_SIZE_SIZE,
};
use crate::format::AttributeFlags;
use crate::types::Weight;

pub(crate) struct Entry<'a> {
    pub word: &'a str,
    pub weight: Weight,
}

impl<'a> Entry<'a> {
    pub fn new(word: &'a str, weight: Weight) -> Entry<'a> {
        Entry { word, weight }
    }
}

pub(crate) fn encode_code_points(out: &mut Vec<u8>, word: &str) {
    for c in word.chars() {
        let c = c as u32;
        if c >= u32::from(MINIMAL_ONE_BYTE_CHARACTER_VALUE) && c <= 0xFF {
            out.push(c as u8);
        } else {
            out.push((c >> 16) as u8);
            out.write_u16::<BigEndian>((c & 0xFFFF) as u16).unwrap();
        }
    }
    out.push(CHARACTER_ARRAY_TERMINATOR);
}

/// Size header followed by one entry per item, every entry but the last
/// flagged has-next.
pub(crate) fn encode_shortcut_list(entries: &[Entry<'_>]) -> Vec<u8> {
    let mut body = vec![];
    for (i, entry) in entries.iter().enumerate() {
        assert!(entry.weight <= AttributeFlags::WEIGHT_MASK.bits());
        let mut flags = entry.weight;
        if i + 1 < entries.len() {
            flags |= AttributeFlags::HAS_NEXT.bits();
        }
        body.push(flags);
        encode_code_points(&mut body, entry.word);
    }

    let mut out = vec![];
    out.write_u16::<BigEndian>((body.len() + SHORTCUT_LIST_SIZE_SIZE) as u16)
        .unwrap();
    out.extend(body);
    out
}
