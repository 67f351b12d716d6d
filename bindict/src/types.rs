/// One decoded character unit. Three-byte code points reach up to 0x1FFFFF,
/// so not every value is a valid `char`.
pub type CodePoint = u32;

/// Weight of a shortcut entry, taken from its attribute flags.
pub type Weight = u8;

/// Byte offset into a dictionary buffer.
pub type DictOffset = usize;
