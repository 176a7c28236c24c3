//! Loaded program images and the instruction word stream over them.

use std::path::Path;

use eyre::{Context, Result, bail};
use rvdec::{IsCompressed, Xlen};

use crate::{elf, ihex};

/// A contiguous run of bytes starting at `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub base: u64,
    pub bytes: Vec<u8>,
}

impl Segment {
    /// The address one past the last byte.
    ///
    /// Saturates for a segment reaching the last byte of the address space.
    /// Loaders reject segments that would wrap past it.
    pub fn end(&self) -> u64 {
        self.base.saturating_add(self.bytes.len() as u64)
    }

    pub fn contains(&self, address: u64) -> bool {
        address >= self.base && address - self.base < self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Detect the format from the file contents
    Auto,
    /// Intel HEX
    Hex,
    /// ELF executable or object file
    Elf,
}

impl InputFormat {
    fn detect(content: &[u8]) -> Result<Self> {
        if content.starts_with(b"\x7fELF") {
            return Ok(InputFormat::Elf);
        }
        match content.iter().find(|byte| !byte.is_ascii_whitespace()) {
            Some(b':') => Ok(InputFormat::Hex),
            _ => bail!("unrecognized input format (expected Intel HEX or ELF)"),
        }
    }
}

/// The code of a program, sorted by address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub segments: Vec<Segment>,
    pub entry: Option<u64>,
    /// The register width the file declares, if any.
    pub xlen: Option<Xlen>,
}

/// One instruction-sized piece of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub address: u64,
    /// The parcel, or the full little-endian word for 32-bit encodings.
    pub bits: u32,
    /// The number of bytes taken from the image. The listing refuses to decode
    /// a word whose encoding claims a different length.
    pub len: u8,
}

pub fn load(path: &Path, format: InputFormat) -> Result<Image> {
    let content = std::fs::read(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    parse(&content, format)
}

pub fn parse(content: &[u8], format: InputFormat) -> Result<Image> {
    let format = match format {
        InputFormat::Auto => InputFormat::detect(content)?,
        format => format,
    };
    tracing::debug!(?format, len = content.len(), "parsing input");

    match format {
        InputFormat::Hex => {
            let text = std::str::from_utf8(content).wrap_err("Intel HEX file is not valid text")?;
            let file = ihex::parse(text)?;
            Ok(Image {
                segments: file.segments,
                entry: file.entry.map(u64::from),
                xlen: None,
            })
        }
        InputFormat::Elf | InputFormat::Auto => {
            let elf = elf::Elf { content };
            let header = elf.header()?;
            let segments = elf.code_segments(&header)?;
            tracing::debug!(
                class = ?header.class,
                e_type = header.e_type,
                segments = segments.len(),
                "read ELF file"
            );
            Ok(Image {
                segments,
                entry: Some(header.e_entry),
                xlen: Some(header.class.xlen()),
            })
        }
    }
}

impl Image {
    /// Splits the image into instruction words, in address order.
    ///
    /// With `from`, decoding starts at that address and everything below it is
    /// skipped. A segment boundary always restarts decoding at the next segment's
    /// base, and a trailing fragment too short for its instruction is dropped.
    pub fn words(&self, from: Option<u64>) -> Result<Vec<Word>> {
        if let Some(from) = from
            && !self.segments.iter().any(|segment| segment.contains(from))
        {
            bail!("start address {from:#x} is not inside the image");
        }

        let mut words = Vec::new();
        for segment in &self.segments {
            let start = match from {
                Some(from) if segment.contains(from) => (from - segment.base) as usize,
                Some(from) if segment.base < from => continue,
                _ => 0,
            };
            segment_words(segment, start, &mut words);
        }
        Ok(words)
    }
}

fn segment_words(segment: &Segment, start: usize, words: &mut Vec<Word>) {
    let bytes = &segment.bytes;
    let mut pos = start;

    while pos < bytes.len() {
        let address = segment.base.wrapping_add(pos as u64);
        let len = IsCompressed::from_first_byte(bytes[pos]).len() as usize;
        let Some(parcel) = bytes.get(pos..pos + len) else {
            tracing::warn!(
                address = format_args!("{address:#x}"),
                remaining = bytes.len() - pos,
                "dropping truncated instruction at end of segment"
            );
            break;
        };
        let bits = parcel
            .iter()
            .rev()
            .fold(0u32, |bits, byte| (bits << 8) | *byte as u32);
        words.push(Word {
            address,
            bits,
            len: len as u8,
        });
        pos += len;
    }
}
