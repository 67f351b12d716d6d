use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use structopt::StructOpt;

use bindict::dictionary::DictionaryBuffer;
use bindict::types::DictOffset;
use bindict::vfs::Fs;
use bindict::{DecoderConfig, NodeFlags, ShortcutTarget};

fn parse_number(s: &str) -> Result<u64, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn parse_offset(s: &str) -> Result<DictOffset, String> {
    parse_number(s)
        .map_err(|e| e.to_string())
        .map(|v| v as DictOffset)
}

fn parse_flags(s: &str) -> Result<u8, String> {
    let v = parse_number(s).map_err(|e| e.to_string())?;
    u8::try_from(v).map_err(|_| format!("flags must fit in one byte, got {}", v))
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bindict",
    about = "Inspect terminal attributes in compiled dictionaries."
)]
enum Opts {
    #[structopt(about = "List the shortcut targets of a terminal node")]
    Shortcuts {
        #[structopt(parse(from_os_str))]
        path: PathBuf,

        #[structopt(short, long, parse(try_from_str = parse_offset), help = "Offset of the shortcut list")]
        offset: DictOffset,

        #[structopt(short, long, parse(try_from_str = parse_flags), help = "Node flags byte")]
        flags: u8,

        #[structopt(short, long, help = "Maximum code points per target")]
        max_depth: Option<usize>,

        #[structopt(short, long, parse(from_os_str), help = "JSON decoder configuration")]
        config: Option<PathBuf>,

        #[structopt(long)]
        json: bool,
    },

    #[structopt(about = "Compare a shortcut list's size header with its entry chain")]
    Check {
        #[structopt(parse(from_os_str))]
        path: PathBuf,

        #[structopt(short, long, parse(try_from_str = parse_offset))]
        offset: DictOffset,

        #[structopt(short, long, parse(try_from_str = parse_flags))]
        flags: u8,
    },

    #[structopt(about = "Explain a node flags byte")]
    Flags {
        #[structopt(parse(try_from_str = parse_flags))]
        flags: u8,
    },
}

#[derive(Serialize)]
struct ShortcutsOutput<'a> {
    offset: DictOffset,
    flags: u8,
    blacklisted_or_not_a_word: bool,
    shortcuts: &'a [ShortcutEntry],
}

#[derive(Serialize)]
struct ShortcutEntry {
    word: String,
    weight: u8,
    code_points: Vec<u32>,
}

impl From<ShortcutTarget> for ShortcutEntry {
    fn from(target: ShortcutTarget) -> Self {
        ShortcutEntry {
            word: target.word().to_string(),
            weight: target.weight(),
            code_points: target.into_code_points(),
        }
    }
}

fn load_config(path: Option<&Path>, max_depth: Option<usize>) -> anyhow::Result<DecoderConfig> {
    let mut config = match path {
        Some(path) => DecoderConfig::from_path(&Fs, path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DecoderConfig::default(),
    };

    if let Some(max_depth) = max_depth {
        config.max_word_length = max_depth;
    }

    Ok(config)
}

fn open(path: &Path) -> anyhow::Result<DictionaryBuffer> {
    DictionaryBuffer::open(&Fs, path).with_context(|| format!("opening {}", path.display()))
}

fn list_shortcuts(
    path: &Path,
    offset: DictOffset,
    flags: u8,
    config: &DecoderConfig,
    json: bool,
) -> anyhow::Result<()> {
    let dict = open(path)?;
    let attrs = dict.terminal_attributes(flags, offset);

    let shortcuts = attrs
        .shortcut_iterator_with_config(config)?
        .map(|t| t.map(ShortcutEntry::from))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("decoding shortcuts at offset {}", offset))?;

    if json {
        let output = ShortcutsOutput {
            offset,
            flags,
            blacklisted_or_not_a_word: attrs.is_blacklisted_or_not_a_word(),
            shortcuts: &shortcuts,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if attrs.is_blacklisted_or_not_a_word() {
        println!("(blacklisted or not a word)");
    }

    if shortcuts.is_empty() {
        println!("No shortcuts.");
    }

    for entry in &shortcuts {
        println!("{}\t{}", entry.word, entry.weight);
    }

    Ok(())
}

fn check(path: &Path, offset: DictOffset, flags: u8) -> anyhow::Result<()> {
    let dict = open(path)?;
    let report = dict.terminal_attributes(flags, offset).check_shortcut_chain()?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_consistent() {
        anyhow::bail!(
            "shortcut list at {} is inconsistent: header {} bytes, chain {} bytes",
            offset,
            report.declared_size,
            report.decoded_size
        );
    }

    Ok(())
}

fn explain_flags(flags: u8) {
    let flags = NodeFlags::from_byte(flags);

    println!("{:#04x}", flags.bits());
    println!("terminal:           {}", flags.is_terminal());
    println!("multiple chars:     {}", flags.has_multiple_chars());
    println!("shortcut targets:   {}", flags.has_shortcuts());
    println!("bigrams:            {}", flags.has_bigrams());
    println!("not a word:         {}", flags.is_not_a_word());
    println!("blacklisted:        {}", flags.is_blacklisted());
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::from_args();

    match opts {
        Opts::Shortcuts {
            path,
            offset,
            flags,
            max_depth,
            config,
            json,
        } => {
            let config = load_config(config.as_deref(), max_depth)?;
            list_shortcuts(&path, offset, flags, &config, json)
        }
        Opts::Check {
            path,
            offset,
            flags,
        } => check(&path, offset, flags),
        Opts::Flags { flags } => {
            explain_flags(flags);
            Ok(())
        }
    }
}
