/*! Attribute decoding for compiled predictive-text dictionaries.

A compiled dictionary is a trie laid out in one flat buffer. Terminal nodes
may carry attributes after their character data: a list of shortcut targets
(alternate spellings offered as suggestions, each with a weight) and flags
that exclude the word from normal suggestion output.

This crate reads those attributes given the node flags and the offset a trie
walker found. It never walks the trie, scores words or writes dictionaries.

# Usage examples

```no_run
use bindict::dictionary::DictionaryBuffer;
use bindict::vfs::Fs;

let dict = DictionaryBuffer::open(&Fs, "main.dict")?;
let attrs = dict.terminal_attributes(0x18u8, 1024);

if !attrs.is_blacklisted_or_not_a_word() {
    for target in attrs.shortcut_iterator() {
        let target = target?;
        println!("{} ({})", target.word(), target.weight());
    }
}
# Ok::<(), Box<dyn std::error::Error>>(())
```

The `bindict-tools` binary in the same repository inspects dictionary files
with this library.
*/

pub mod attributes;
pub mod config;
pub mod constants;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod types;
pub mod vfs;

#[cfg(test)]
pub(crate) mod test_util;

pub use crate::attributes::{ChainReport, ShortcutIterator, ShortcutTarget, TerminalAttributes};
pub use crate::config::DecoderConfig;
pub use crate::error::{DecodeError, DictionaryError};
pub use crate::format::{AttributeFlags, NodeFlags};

/// Initialises `env_logger` from the environment; later calls are ignored.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
