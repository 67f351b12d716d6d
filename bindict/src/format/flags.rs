use bitflags::bitflags;

use crate::types::Weight;

bitflags! {
    /// Capability bits stored in the flags byte of a dictionary node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Width of the children address; read by the trie walker.
        const ADDRESS_TYPE_MASK = 0xC0;
        const HAS_MULTIPLE_CHARS = 0x20;
        const IS_TERMINAL = 0x10;
        const HAS_SHORTCUT_TARGETS = 0x08;
        const HAS_BIGRAMS = 0x04;
        const IS_NOT_A_WORD = 0x02;
        const IS_BLACKLISTED = 0x01;
    }
}

impl NodeFlags {
    /// Keeps unknown bits, as compiled dictionaries may set bits this crate
    /// does not interpret.
    #[inline(always)]
    pub fn from_byte(byte: u8) -> NodeFlags {
        NodeFlags::from_bits_retain(byte)
    }

    #[inline(always)]
    pub fn has_shortcuts(self) -> bool {
        self.contains(NodeFlags::HAS_SHORTCUT_TARGETS)
    }

    #[inline(always)]
    pub fn is_blacklisted(self) -> bool {
        self.contains(NodeFlags::IS_BLACKLISTED)
    }

    #[inline(always)]
    pub fn is_not_a_word(self) -> bool {
        self.contains(NodeFlags::IS_NOT_A_WORD)
    }

    #[inline(always)]
    pub fn is_terminal(self) -> bool {
        self.contains(NodeFlags::IS_TERMINAL)
    }

    #[inline(always)]
    pub fn has_bigrams(self) -> bool {
        self.contains(NodeFlags::HAS_BIGRAMS)
    }

    #[inline(always)]
    pub fn has_multiple_chars(self) -> bool {
        self.contains(NodeFlags::HAS_MULTIPLE_CHARS)
    }
}

impl From<u8> for NodeFlags {
    fn from(byte: u8) -> Self {
        NodeFlags::from_byte(byte)
    }
}

bitflags! {
    /// Flags byte heading each entry of a shortcut list. The low seven bits
    /// carry the entry weight.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeFlags: u8 {
        const HAS_NEXT = 0x80;
        const WEIGHT_MASK = 0x7F;
    }
}

impl AttributeFlags {
    #[inline(always)]
    pub fn from_byte(byte: u8) -> AttributeFlags {
        AttributeFlags::from_bits_retain(byte)
    }

    #[inline(always)]
    pub fn has_next(self) -> bool {
        self.contains(AttributeFlags::HAS_NEXT)
    }

    #[inline(always)]
    pub fn weight(self) -> Weight {
        self.bits() & AttributeFlags::WEIGHT_MASK.bits()
    }
}
