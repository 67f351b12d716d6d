use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_WORD_LENGTH;
use crate::error::DictionaryError;
use crate::vfs::Filesystem;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Code points kept per decoded word; longer words are cut.
    pub max_word_length: usize,
    /// Compare each shortcut list against its size header before decoding it.
    pub check_chain: bool,
}

impl Default for DecoderConfig {
    fn default() -> DecoderConfig {
        DecoderConfig {
            max_word_length: MAX_WORD_LENGTH,
            check_chain: false,
        }
    }
}

impl DecoderConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<DecoderConfig, DictionaryError> {
        serde_json::from_reader(reader).map_err(DictionaryError::Config)
    }

    pub fn from_path<P, FS>(fs: &FS, path: P) -> Result<DecoderConfig, DictionaryError>
    where
        P: AsRef<Path>,
        FS: Filesystem,
    {
        let file = fs.open_file(path).map_err(DictionaryError::Io)?;
        DecoderConfig::from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_word_length, 48);
        assert!(!config.check_chain);
    }

    #[test]
    fn partial_json() {
        let config = DecoderConfig::from_reader(&br#"{ "max_word_length": 12 }"#[..]).unwrap();
        assert_eq!(config.max_word_length, 12);
        assert!(!config.check_chain);
    }

    #[test]
    fn bad_json() {
        match DecoderConfig::from_reader(&b"{ max_word_length"[..]) {
            Err(DictionaryError::Config(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "check_chain": true }}"#).unwrap();

        let config = DecoderConfig::from_path(&crate::vfs::Fs, file.path()).unwrap();
        assert!(config.check_chain);
        assert_eq!(config.max_word_length, 48);
    }
}
