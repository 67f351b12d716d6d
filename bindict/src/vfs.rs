use memmap2::{Mmap, MmapOptions};
use std::fmt::Debug;
use std::io::{Read, Result};
use std::path::Path;

pub trait Filesystem {
    type File: File;

    fn open_file<P: AsRef<Path>>(&self, path: P) -> Result<Self::File>;
}

pub trait File: Read + Debug {
    fn len(&self) -> Result<u64>;
    fn is_empty(&self) -> Result<bool>;
    /// # Safety
    ///
    /// The file must not be modified while the map is alive.
    unsafe fn memory_map(&self) -> Result<Mmap>;
}

impl File for std::fs::File {
    fn len(&self) -> Result<u64> {
        self.metadata().map(|m| m.len())
    }

    fn is_empty(&self) -> Result<bool> {
        self.len().map(|x| x == 0)
    }

    unsafe fn memory_map(&self) -> Result<Mmap> {
        MmapOptions::new().map(self)
    }
}

pub struct Fs;

impl Filesystem for Fs {
    type File = std::fs::File;

    #[inline(always)]
    fn open_file<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        std::fs::File::open(&path)
    }
}
