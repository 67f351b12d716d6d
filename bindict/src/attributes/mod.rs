//! Attributes of a terminal node, read without exposing the node layout.
//!
//! A terminal with shortcuts carries a shortcut list laid out as
//!
//! ```text
//! [size: u16 BE][flags][code point]*[0x1F] ... [flags][code point]*[0x1F]
//! ```
//!
//! There are two ways to find the end of the list: follow the has-next bit
//! of each entry's flags, or jump by the size header. Decoding always uses
//! the former and skipping always uses the latter. Nothing in a compiled
//! dictionary guarantees they agree; [`TerminalAttributes::check_shortcut_chain`]
//! reports whether they do.

pub mod shortcut;

use serde::Serialize;

pub use self::shortcut::{ShortcutIterator, ShortcutTarget};
use crate::config::DecoderConfig;
use crate::constants::SHORTCUT_LIST_SIZE_SIZE;
use crate::error::DecodeError;
use crate::format::{self, NodeFlags};
use crate::types::DictOffset;

#[derive(Debug, Clone, Copy)]
pub struct TerminalAttributes<'a> {
    buf: &'a [u8],
    flags: NodeFlags,
    start: DictOffset,
}

impl<'a> TerminalAttributes<'a> {
    /// `pos` is the offset of the node's shortcut list, if it has one. The
    /// flags and offset are trusted as they come from the trie walker.
    pub fn new<F: Into<NodeFlags>>(buf: &'a [u8], flags: F, pos: DictOffset) -> Self {
        TerminalAttributes {
            buf,
            flags: flags.into(),
            start: pos,
        }
    }

    #[inline(always)]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    #[inline(always)]
    pub fn position(&self) -> DictOffset {
        self.start
    }

    pub fn shortcut_iterator(&self) -> ShortcutIterator<'a> {
        // The size header only exists for skipping; decoding follows the chain.
        // Saturates so an offset at the top of the range stays past the buffer.
        let pos = self.start.saturating_add(SHORTCUT_LIST_SIZE_SIZE);
        ShortcutIterator::new(self.buf, pos, self.flags)
    }

    /// Like [`shortcut_iterator`](Self::shortcut_iterator) with the configured
    /// depth. With `check_chain` set the list is checked against its size
    /// header first, and a mismatch is returned as
    /// [`DecodeError::InconsistentChain`].
    pub fn shortcut_iterator_with_config(
        &self,
        config: &DecoderConfig,
    ) -> Result<ShortcutIterator<'a>, DecodeError> {
        if config.check_chain {
            let report = self.check_shortcut_chain()?;
            if !report.is_consistent() {
                return Err(DecodeError::InconsistentChain {
                    offset: self.start,
                    declared_size: report.declared_size,
                    decoded_size: report.decoded_size,
                });
            }
        }

        Ok(self.shortcut_iterator().with_max_depth(config.max_word_length))
    }

    #[inline(always)]
    pub fn is_blacklisted_or_not_a_word(&self) -> bool {
        self.flags.intersects(NodeFlags::IS_BLACKLISTED | NodeFlags::IS_NOT_A_WORD)
    }

    /// Value of the size header, or `None` if the node has no shortcuts.
    pub fn shortcut_list_size(&self) -> Result<Option<u16>, DecodeError> {
        if !self.flags.has_shortcuts() {
            return Ok(None);
        }

        let mut cursor = format::cursor_at(self.buf, self.start);
        format::read_shortcut_list_size(&mut cursor).map(Some)
    }

    /// Offset just past the shortcut list, found through the size header.
    pub fn skip_shortcuts(&self) -> Result<DictOffset, DecodeError> {
        let size = self.shortcut_list_size()?.unwrap_or(0);
        self.start
            .checked_add(DictOffset::from(size))
            .ok_or(DecodeError::OutOfBounds { offset: self.start })
    }

    /// Decodes the whole list and compares where it ends with what the size
    /// header claims.
    pub fn check_shortcut_chain(&self) -> Result<ChainReport, DecodeError> {
        let declared_size = DictOffset::from(self.shortcut_list_size()?.unwrap_or(0));

        if !self.flags.has_shortcuts() {
            return Ok(ChainReport {
                entries: 0,
                declared_size,
                decoded_size: 0,
            });
        }

        let mut it = self.shortcut_iterator();
        let mut entries = 0;
        while it.next_shortcut_target(0)?.is_some() {
            entries += 1;
        }

        let report = ChainReport {
            entries,
            declared_size,
            decoded_size: it.offset() - self.start,
        };

        if !report.is_consistent() {
            log::warn!(
                "shortcut list at {}: header says {} bytes, chain spans {}",
                self.start,
                report.declared_size,
                report.decoded_size
            );
        }

        Ok(report)
    }
}

/// Result of [`TerminalAttributes::check_shortcut_chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    /// Number of entries reached by following has-next bits
    pub entries: usize,
    /// List size according to its header, header included
    pub declared_size: usize,
    /// List size according to the has-next chain, header included
    pub decoded_size: usize,
}

impl ChainReport {
    pub fn is_consistent(&self) -> bool {
        self.declared_size == self.decoded_size
    }
}
