/// Width in bytes of the length header that precedes a shortcut list.
pub const SHORTCUT_LIST_SIZE_SIZE: usize = 2;

/// Marks the end of a code point sequence.
pub const CHARACTER_ARRAY_TERMINATOR: u8 = 0x1F;

/// Bytes below this value start a three-byte code point.
pub const MINIMAL_ONE_BYTE_CHARACTER_VALUE: u8 = 0x20;

/// Default cap on decoded word length.
pub const MAX_WORD_LENGTH: usize = 48;

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn test_SHORTCUT_LIST_SIZE_SIZE() {
        use std::mem;

        assert!(SHORTCUT_LIST_SIZE_SIZE == mem::size_of::<u16>());
    }

    #[test]
    fn test_CHARACTER_ARRAY_TERMINATOR() {
        assert!(CHARACTER_ARRAY_TERMINATOR < MINIMAL_ONE_BYTE_CHARACTER_VALUE);
    }
}
