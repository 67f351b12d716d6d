//! Owning holder for a compiled dictionary buffer.
use std::fmt;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::attributes::TerminalAttributes;
use crate::error::DictionaryError;
use crate::format::NodeFlags;
use crate::types::DictOffset;
use crate::vfs::{self, Filesystem};

enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Read-only dictionary bytes, either memory-mapped or held in memory.
/// Shareable across threads; decoders borrow from it.
pub struct DictionaryBuffer {
    backing: Backing,
}

impl fmt::Debug for DictionaryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.backing {
            Backing::Mapped(_) => "mapped",
            Backing::Owned(_) => "owned",
        };
        write!(f, "DictionaryBuffer {{ {}, {} bytes }}", kind, self.len())
    }
}

impl DictionaryBuffer {
    pub fn open<P, FS>(fs: &FS, path: P) -> Result<DictionaryBuffer, DictionaryError>
    where
        P: AsRef<Path>,
        FS: Filesystem,
    {
        let file = fs.open_file(&path).map_err(DictionaryError::Io)?;

        // Zero-length files cannot be mapped.
        if vfs::File::is_empty(&file).map_err(DictionaryError::Io)? {
            return Ok(DictionaryBuffer::from_bytes(vec![]));
        }

        let mmap = unsafe { vfs::File::memory_map(&file) }.map_err(DictionaryError::Memmap)?;
        log::debug!(
            "mapped {} bytes from {}",
            mmap.len(),
            path.as_ref().display()
        );

        Ok(DictionaryBuffer {
            backing: Backing::Mapped(mmap),
        })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> DictionaryBuffer {
        DictionaryBuffer {
            backing: Backing::Owned(bytes),
        }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Owned(bytes) => &bytes[..],
        }
    }

    /// Attributes of the terminal whose flags and shortcut list offset the
    /// trie walker found.
    pub fn terminal_attributes<F: Into<NodeFlags>>(
        &self,
        flags: F,
        pos: DictOffset,
    ) -> TerminalAttributes<'_> {
        TerminalAttributes::new(self.as_bytes(), flags, pos)
    }
}

impl Deref for DictionaryBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}
