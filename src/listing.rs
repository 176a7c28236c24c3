//! Turning a word stream into the disassembly listing.

use std::io::{self, Write};

use owo_colors::{AnsiColors, OwoColorize};
use rayon::prelude::*;
use rvdec::{Decoded, Xlen, decode_at};

use crate::image::Word;

pub const HEADER: &str = "OFFSET\t\tCOMMAND";

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Keep lines for words that do not decode.
    pub show_illegal: bool,
    pub color: bool,
}

/// Decodes every word and renders one line per instruction, in input order.
///
/// Words are decoded in parallel. Illegal words are dropped unless
/// [`Options::show_illegal`] is set. A word whose `len` disagrees with the
/// length its low bits encode is dropped with a warning.
pub fn disassemble(words: &[Word], xlen: Xlen, options: Options) -> Vec<String> {
    let lines = words
        .par_iter()
        .map(|word| {
            let inst = decode_at(word.bits, word.address, xlen);
            if inst.len() != word.len as u32 {
                tracing::warn!(
                    address = format_args!("{:#x}", word.address),
                    len = word.len,
                    "word length does not match its encoding, skipping"
                );
                return None;
            }
            if inst.is_illegal() && !options.show_illegal {
                return None;
            }
            Some(if options.color {
                colored_line(&inst)
            } else {
                inst.render_line()
            })
        })
        .collect::<Vec<_>>();

    let skipped = lines.iter().filter(|line| line.is_none()).count();
    if skipped > 0 {
        tracing::debug!(skipped, "skipped words");
    }
    tracing::debug!(words = words.len(), %xlen, "disassembled");

    lines.into_iter().flatten().collect()
}

pub fn write_listing(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn colored_line(inst: &Decoded) -> String {
    let address = format!("{:#010x}", inst.address);
    let text = inst.render();
    let (mnemonic, operands) = text.split_once('\t').unwrap_or((text.as_str(), ""));

    let mnemonic = if inst.is_illegal() {
        mnemonic.red().bold().to_string()
    } else {
        hash_color(inst.opcode.mnemonic(), mnemonic)
    };

    if operands.is_empty() {
        format!("{}\t{mnemonic}", address.dimmed())
    } else {
        format!("{}\t{mnemonic}\t{operands}", address.dimmed())
    }
}

/// Colors `text` with a color picked by hashing `key`, so the same
/// instruction always gets the same color.
fn hash_color(key: &str, text: &str) -> String {
    use std::hash::{Hash, Hasher};
    let mut w = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut w);
    let hash = w.finish();
    let arr = [
        AnsiColors::Green,
        AnsiColors::Yellow,
        AnsiColors::Blue,
        AnsiColors::Magenta,
        AnsiColors::Cyan,
        AnsiColors::BrightGreen,
        AnsiColors::BrightBlue,
        AnsiColors::BrightMagenta,
    ];
    text.color(arr[(hash % arr.len() as u64) as usize]).to_string()
}

#[cfg(test)]
mod tests {
    use rvdec::Xlen;

    use super::{HEADER, Options, disassemble, write_listing};
    use crate::image::Word;

    fn words() -> Vec<Word> {
        vec![
            Word {
                address: 0x8000_0000,
                bits: 0x1101,
                len: 2,
            },
            Word {
                address: 0x8000_0002,
                bits: 0x0000,
                len: 2,
            },
            Word {
                address: 0x8000_0004,
                bits: 0x0000_8067,
                len: 4,
            },
        ]
    }

    #[test]
    fn plain_listing() {
        let lines = disassemble(&words(), Xlen::Rv64, Options::default());
        assert_eq!(
            lines,
            vec![
                "0x80000000\taddi\tsp,sp,-32",
                "0x80000004\tjalr\tzero,ra,0",
            ]
        );

        let mut out = Vec::new();
        write_listing(&mut out, &lines).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            format!("{HEADER}\n0x80000000\taddi\tsp,sp,-32\n0x80000004\tjalr\tzero,ra,0\n")
        );
    }

    #[test]
    fn illegal_words_on_request() {
        let options = Options {
            show_illegal: true,
            ..Options::default()
        };
        let lines = disassemble(&words(), Xlen::Rv64, options);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0x80000002\tillegal\t0x0000");
    }

    #[test]
    fn length_must_match_encoding() {
        let options = Options {
            show_illegal: true,
            ..Options::default()
        };
        let words = [
            // a 32-bit encoding cut to one parcel
            Word {
                address: 0,
                bits: 0x0013,
                len: 2,
            },
            // a compressed encoding claiming four bytes
            Word {
                address: 2,
                bits: 0x8082,
                len: 4,
            },
            Word {
                address: 6,
                bits: 0x8082,
                len: 2,
            },
        ];
        let lines = disassemble(&words, Xlen::Rv32, options);
        assert_eq!(lines, vec!["0x00000006	jr	ra"]);
    }

    #[test]
    fn order_is_preserved() {
        let words = (0..10_000u64)
            .map(|i| Word {
                address: i * 4,
                bits: 0x0000_0013 | ((i as u32 & 0x7ff) << 20),
                len: 4,
            })
            .collect::<Vec<_>>();
        let lines = disassemble(&words, Xlen::Rv32, Options::default());
        assert_eq!(lines.len(), words.len());
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{:#010x}\t", i * 4)), "{line}");
        }
    }

    #[test]
    fn colored_listing_keeps_text() {
        let options = Options {
            show_illegal: true,
            color: true,
        };
        let lines = disassemble(&words(), Xlen::Rv64, options);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\x1b["), "{:?}", lines[0]);
        assert!(lines[0].contains("addi"));
        assert!(lines[0].ends_with("\tsp,sp,-32"), "{:?}", lines[0]);
        assert!(lines[1].contains("illegal"));
    }
}
