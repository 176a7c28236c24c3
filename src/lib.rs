//! Disassembler for RISC-V code stored in Intel HEX or ELF files.
//!
//! Decoding itself lives in [`rvdec`]. This crate loads the input into an
//! [`image::Image`], splits it into instruction words and renders the listing.

use eyre::{OptionExt, Result};
use rvdec::Xlen;

pub mod elf;
pub mod ihex;
pub mod image;
pub mod listing;

/// Disassembles a loaded image.
///
/// `xlen` overrides the width declared by the file. With `from_entry`, the
/// listing starts at the image's entry point.
pub fn disassemble(
    image: &image::Image,
    xlen: Option<Xlen>,
    from_entry: bool,
    options: listing::Options,
) -> Result<Vec<String>> {
    let xlen = xlen
        .or(image.xlen)
        .ok_or_eyre("the input does not declare a width, pass --isa")?;
    let from = if from_entry {
        Some(image.entry.ok_or_eyre("the input has no entry point")?)
    } else {
        None
    };

    let words = image.words(from)?;
    Ok(listing::disassemble(&words, xlen, options))
}
