//! Shortcut targets attached to a terminal node.
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::MAX_WORD_LENGTH;
use crate::error::DecodeError;
use crate::format::{self, DictCursor, NodeFlags};
use crate::types::{CodePoint, DictOffset, Weight};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A decoded shortcut entry
pub struct ShortcutTarget {
    /// the code points of the target word, capped at the requested depth
    code_points: Vec<CodePoint>,
    /// weight stored alongside the entry
    weight: Weight,
}

impl ShortcutTarget {
    pub fn new(code_points: Vec<CodePoint>, weight: Weight) -> ShortcutTarget {
        ShortcutTarget {
            code_points,
            weight,
        }
    }

    pub fn code_points(&self) -> &[CodePoint] {
        &self.code_points
    }

    pub fn into_code_points(self) -> Vec<CodePoint> {
        self.code_points
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// The target as a string. Code points outside the range of `char` become
    /// U+FFFD.
    pub fn word(&self) -> SmolStr {
        self.code_points
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

/// Lazily decodes the shortcut list of one terminal node.
///
/// The list is a chain of entries, each a flags byte followed by a
/// terminated code point sequence. The has-next bit of each entry's flags is
/// the only thing that decides whether another entry follows; the length
/// header in front of the list is never consulted here.
///
/// Once [`has_next_shortcut_target`](Self::has_next_shortcut_target) returns
/// false the iterator is exhausted. Asking it for further targets is a no-op
/// that returns `Ok(None)` and leaves the cursor where it is. The same holds
/// after a decode error.
#[derive(Debug, Clone)]
pub struct ShortcutIterator<'a> {
    cursor: DictCursor<'a>,
    has_next: bool,
    max_depth: usize,
}

impl<'a> ShortcutIterator<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: DictOffset, flags: NodeFlags) -> ShortcutIterator<'a> {
        log::debug!(
            "shortcut iterator at {} (has shortcuts: {})",
            pos,
            flags.has_shortcuts()
        );

        ShortcutIterator {
            cursor: format::cursor_at(buf, pos),
            has_next: flags.has_shortcuts(),
            max_depth: MAX_WORD_LENGTH,
        }
    }

    /// Sets the depth used when driving this as an [`Iterator`].
    pub fn with_max_depth(mut self, max_depth: usize) -> ShortcutIterator<'a> {
        self.max_depth = max_depth;
        self
    }

    #[inline(always)]
    pub fn has_next_shortcut_target(&self) -> bool {
        self.has_next
    }

    /// Current cursor offset into the dictionary buffer.
    #[inline(always)]
    pub fn offset(&self) -> DictOffset {
        self.cursor.position() as DictOffset
    }

    /// Decodes the next entry, keeping at most `max_depth` code points of its
    /// word. The rest of the word is still read so that the cursor lands on the
    /// following entry.
    pub fn next_shortcut_target(
        &mut self,
        max_depth: usize,
    ) -> Result<Option<ShortcutTarget>, DecodeError> {
        let mut code_points = Vec::with_capacity(max_depth.min(MAX_WORD_LENGTH));
        let weight = self.decode_entry(max_depth, |c| code_points.push(c))?;
        Ok(weight.map(|weight| ShortcutTarget::new(code_points, weight)))
    }

    /// Decodes the next entry into `out`, treating its length as the maximum
    /// depth. Returns the number of code points written and the weight.
    pub fn next_shortcut_target_into(
        &mut self,
        out: &mut [CodePoint],
    ) -> Result<Option<(usize, Weight)>, DecodeError> {
        let mut written = 0;
        let weight = self.decode_entry(out.len(), |c| {
            out[written] = c;
            written += 1;
        })?;
        Ok(weight.map(|weight| (written, weight)))
    }

    fn decode_entry<F>(&mut self, max_depth: usize, push: F) -> Result<Option<Weight>, DecodeError>
    where
        F: FnMut(CodePoint),
    {
        if !self.has_next {
            return Ok(None);
        }

        let result = self.read_entry(max_depth, push);
        if result.is_err() {
            self.has_next = false;
        }
        result.map(Some)
    }

    fn read_entry<F>(&mut self, max_depth: usize, mut push: F) -> Result<Weight, DecodeError>
    where
        F: FnMut(CodePoint),
    {
        let start = self.offset();
        let flags = format::read_attribute_flags(&mut self.cursor)?;
        self.has_next = flags.has_next();

        let mut written = 0;
        let mut skipped = 0;
        while let Some(code_point) = format::read_code_point(&mut self.cursor)? {
            if written < max_depth {
                push(code_point);
                written += 1;
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            log::warn!(
                "shortcut at {}: kept {} code points, skipped {}",
                start,
                written,
                skipped
            );
        }

        let weight = format::attribute_weight(flags);
        log::trace!(
            "shortcut at {}: len:{} weight:{} has_next:{}",
            start,
            written,
            weight,
            self.has_next
        );

        Ok(weight)
    }
}

impl<'a> Iterator for ShortcutIterator<'a> {
    type Item = Result<ShortcutTarget, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let max_depth = self.max_depth;
        self.next_shortcut_target(max_depth).transpose()
    }
}

impl<'a> FusedIterator for ShortcutIterator<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{encode_shortcut_list, Entry};

    fn iter(buf: &[u8]) -> ShortcutIterator<'_> {
        ShortcutIterator::new(buf, 2, NodeFlags::HAS_SHORTCUT_TARGETS)
    }

    #[test]
    fn exhausted_without_shortcut_flag() {
        let buf = encode_shortcut_list(&[Entry::new("ok", 120)]);
        let mut it = ShortcutIterator::new(&buf, 2, NodeFlags::IS_TERMINAL);

        assert!(!it.has_next_shortcut_target());
        assert_eq!(it.next_shortcut_target(MAX_WORD_LENGTH).unwrap(), None);
        assert_eq!(it.offset(), 2);
        assert!(it.next().is_none());
    }

    #[test]
    fn two_entries() {
        let buf = encode_shortcut_list(&[Entry::new("ok", 120), Entry::new("okay", 80)]);
        let mut it = iter(&buf);
        let mut out = [0; MAX_WORD_LENGTH];

        assert!(it.has_next_shortcut_target());
        let (len, weight) = it.next_shortcut_target_into(&mut out).unwrap().unwrap();
        assert_eq!(len, 2);
        assert_eq!(weight, 120);
        assert_eq!(&out[..len], &['o' as u32, 'k' as u32]);
        assert!(it.has_next_shortcut_target());

        let (len, weight) = it.next_shortcut_target_into(&mut out).unwrap().unwrap();
        assert_eq!(len, 4);
        assert_eq!(weight, 80);
        assert!(!it.has_next_shortcut_target());
        assert_eq!(it.offset(), buf.len());
    }

    #[test]
    fn truncates_but_consumes_whole_entry() {
        let buf = encode_shortcut_list(&[Entry::new("hello", 10), Entry::new("hi", 20)]);
        let mut it = iter(&buf);
        let mut out = [0; 3];

        let (len, weight) = it.next_shortcut_target_into(&mut out).unwrap().unwrap();
        assert_eq!(len, 3);
        assert_eq!(weight, 10);
        assert_eq!(out, ['h' as u32, 'e' as u32, 'l' as u32]);
        // header + flags + 5 code points + terminator
        assert_eq!(it.offset(), 2 + 1 + 5 + 1);

        let target = it.next_shortcut_target(3).unwrap().unwrap();
        assert_eq!(target.word(), "hi");
        assert_eq!(target.weight(), 20);
        assert!(!it.has_next_shortcut_target());
    }

    #[test]
    fn zero_depth_writes_nothing() {
        let buf = encode_shortcut_list(&[Entry::new("abc", 7)]);
        let mut it = iter(&buf);
        let mut out: [CodePoint; 0] = [];

        assert_eq!(it.next_shortcut_target_into(&mut out).unwrap(), Some((0, 7)));
        assert_eq!(it.offset(), buf.len());
    }

    #[test]
    fn iterator_uses_max_depth() {
        let buf = encode_shortcut_list(&[Entry::new("cat", 100), Entry::new("kat", 50)]);
        let words = iter(&buf)
            .with_max_depth(2)
            .map(|t| t.unwrap().word())
            .collect::<Vec<_>>();

        assert_eq!(words, vec!["ca", "ka"]);
    }

    #[test]
    fn error_ends_iteration() {
        let mut buf = encode_shortcut_list(&[Entry::new("cat", 100), Entry::new("kat", 50)]);
        // drop the terminator of the last entry
        buf.pop();
        let mut it = iter(&buf);

        assert!(it.next().unwrap().is_ok());
        match it.next() {
            Some(Err(DecodeError::OutOfBounds { offset })) => assert_eq!(offset, buf.len()),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!it.has_next_shortcut_target());
        assert!(it.next().is_none());
    }

    #[test]
    fn multi_byte_words() {
        // é fits one byte, ā and 😀 take the three-byte form
        let buf = encode_shortcut_list(&[Entry::new("né😀", 9), Entry::new("ā\u{1}", 4)]);
        let mut it = iter(&buf);

        let first = it.next_shortcut_target(MAX_WORD_LENGTH).unwrap().unwrap();
        assert_eq!(first.word(), "né😀");
        assert_eq!(first.code_points(), &[0x6E, 0xE9, 0x1F600]);
        assert_eq!(first.weight(), 9);
        // header + flags + n + é + three-byte 😀 + terminator
        assert_eq!(it.offset(), 2 + 1 + 1 + 1 + 3 + 1);

        let second = it.next_shortcut_target(1).unwrap().unwrap();
        assert_eq!(second.code_points(), &[0x101]);
        assert_eq!(second.weight(), 4);
        assert!(!it.has_next_shortcut_target());
        assert_eq!(it.offset(), buf.len());
    }

    #[test]
    fn word_replaces_invalid_chars() {
        let target = ShortcutTarget::new(vec!['a' as u32, 0xD800, 0x1F600], 1);
        assert_eq!(target.word(), "a\u{FFFD}\u{1F600}");
    }
}
