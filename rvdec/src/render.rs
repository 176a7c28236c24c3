//! Turning a [`Decoded`] instruction back into assembly text.
//!
//! Each [`Format`] is a fixed sequence of [`Token`]s, interpreted left to right.
//! Output goes through [`std::fmt::Write`], so any growable sink works and the
//! length of a line is never bounded up front.

use std::fmt::{self, Display, Write};

use crate::{Decoded, FReg, IsCompressed, Reg, csr};

/// One element of a render template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Mnemonic,
    /// `.aq`, `.rl` or `.aqrl`, only for the bits that are set
    Ordering,
    Tab,
    Comma,
    Open,
    Close,
    Rd,
    Rs1,
    Rs2,
    Frd,
    Frs1,
    Frs2,
    Frs3,
    /// The `rs1` field printed as an unsigned 5-bit constant
    Zimm,
    /// The immediate in signed decimal
    Imm,
    /// `address + imm` in hex
    Target,
    Csr,
    /// Rounding mode, always printed after the last operand
    Rm,
    Pred,
    Succ,
    /// The raw instruction bits in hex
    Word,
}

/// Operand layout of an instruction, named after its operands in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    None,
    Illegal,
    Rs1,
    Offset,
    PredSucc,
    RdImm,
    RdOffset,
    RdRs1,
    RdRs1Rs2,
    RdRs1Imm,
    RdOffsetRs1,
    Rs1Offset,
    Rs2OffsetRs1,
    Rs1Rs2Offset,
    RdCsrRs1,
    RdCsrZimm,
    AmoRdRs1,
    AmoRdRs2Rs1,
    FrdOffsetRs1,
    Frs2OffsetRs1,
    FrdRs1,
    RdFrs1,
    RdFrs1Frs2,
    FrdFrs1Frs2,
    FrdFrs1Rm,
    FrdRs1Rm,
    RdFrs1Rm,
    FrdFrs1Frs2Rm,
    FrdFrs1Frs2Frs3Rm,
}

impl Format {
    pub fn tokens(self) -> &'static [Token] {
        use Token::*;
        match self {
            Format::None => &[Mnemonic],
            Format::Illegal => &[Mnemonic, Tab, Word],
            Format::Rs1 => &[Mnemonic, Tab, Rs1],
            Format::Offset => &[Mnemonic, Tab, Target],
            Format::PredSucc => &[Mnemonic, Tab, Pred, Comma, Succ],
            Format::RdImm => &[Mnemonic, Tab, Rd, Comma, Imm],
            Format::RdOffset => &[Mnemonic, Tab, Rd, Comma, Target],
            Format::RdRs1 => &[Mnemonic, Tab, Rd, Comma, Rs1],
            Format::RdRs1Rs2 => &[Mnemonic, Tab, Rd, Comma, Rs1, Comma, Rs2],
            Format::RdRs1Imm => &[Mnemonic, Tab, Rd, Comma, Rs1, Comma, Imm],
            Format::RdOffsetRs1 => &[Mnemonic, Tab, Rd, Comma, Imm, Open, Rs1, Close],
            Format::Rs1Offset => &[Mnemonic, Tab, Rs1, Comma, Target],
            Format::Rs2OffsetRs1 => &[Mnemonic, Tab, Rs2, Comma, Imm, Open, Rs1, Close],
            Format::Rs1Rs2Offset => &[Mnemonic, Tab, Rs1, Comma, Rs2, Comma, Target],
            Format::RdCsrRs1 => &[Mnemonic, Tab, Rd, Comma, Csr, Comma, Rs1],
            Format::RdCsrZimm => &[Mnemonic, Tab, Rd, Comma, Csr, Comma, Zimm],
            Format::AmoRdRs1 => &[Mnemonic, Ordering, Tab, Rd, Comma, Open, Rs1, Close],
            Format::AmoRdRs2Rs1 => &[
                Mnemonic, Ordering, Tab, Rd, Comma, Rs2, Comma, Open, Rs1, Close,
            ],
            Format::FrdOffsetRs1 => &[Mnemonic, Tab, Frd, Comma, Imm, Open, Rs1, Close],
            Format::Frs2OffsetRs1 => &[Mnemonic, Tab, Frs2, Comma, Imm, Open, Rs1, Close],
            Format::FrdRs1 => &[Mnemonic, Tab, Frd, Comma, Rs1],
            Format::RdFrs1 => &[Mnemonic, Tab, Rd, Comma, Frs1],
            Format::RdFrs1Frs2 => &[Mnemonic, Tab, Rd, Comma, Frs1, Comma, Frs2],
            Format::FrdFrs1Frs2 => &[Mnemonic, Tab, Frd, Comma, Frs1, Comma, Frs2],
            Format::FrdFrs1Rm => &[Mnemonic, Tab, Frd, Comma, Frs1, Rm],
            Format::FrdRs1Rm => &[Mnemonic, Tab, Frd, Comma, Rs1, Rm],
            Format::RdFrs1Rm => &[Mnemonic, Tab, Rd, Comma, Frs1, Rm],
            Format::FrdFrs1Frs2Rm => &[Mnemonic, Tab, Frd, Comma, Frs1, Comma, Frs2, Rm],
            Format::FrdFrs1Frs2Frs3Rm => &[
                Mnemonic, Tab, Frd, Comma, Frs1, Comma, Frs2, Comma, Frs3, Rm,
            ],
        }
    }
}

impl Decoded {
    /// Writes the mnemonic and operands of this instruction into `out`.
    pub fn render_into(&self, out: &mut impl Write) -> fmt::Result {
        for token in self.opcode.format().tokens() {
            match token {
                Token::Mnemonic => out.write_str(self.opcode.mnemonic())?,
                Token::Ordering => write!(out, "{}", self.ordering())?,
                Token::Tab => out.write_char('\t')?,
                Token::Comma => out.write_char(',')?,
                Token::Open => out.write_char('(')?,
                Token::Close => out.write_char(')')?,
                Token::Rd => write!(out, "{}", Reg(self.rd))?,
                Token::Rs1 => write!(out, "{}", Reg(self.rs1))?,
                Token::Rs2 => write!(out, "{}", Reg(self.rs2))?,
                Token::Frd => write!(out, "{}", FReg(self.rd))?,
                Token::Frs1 => write!(out, "{}", FReg(self.rs1))?,
                Token::Frs2 => write!(out, "{}", FReg(self.rs2))?,
                Token::Frs3 => write!(out, "{}", FReg(self.rs3))?,
                Token::Zimm => write!(out, "{}", self.rs1)?,
                Token::Imm => write!(out, "{}", self.imm)?,
                Token::Target => write!(out, "{:#x}", self.target())?,
                Token::Csr => match csr::name(self.csr()) {
                    Some(name) => out.write_str(name)?,
                    None => write!(out, "{:#05x}", self.csr())?,
                },
                Token::Rm => write!(out, ",{}", self.rounding_mode())?,
                Token::Pred => write!(out, "{}", self.fence_pred())?,
                Token::Succ => write!(out, "{}", self.fence_succ())?,
                Token::Word => match self.is_compressed {
                    IsCompressed::Yes => write!(out, "{:#06x}", self.word)?,
                    IsCompressed::No => write!(out, "{:#010x}", self.word)?,
                },
            }
        }
        Ok(())
    }

    /// Mnemonic and operands, e.g. `jalr\tzero,ra,0`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The rendered instruction prefixed with its address.
    pub fn render_line(&self) -> String {
        format!("{:#010x}\t{self}", self.address)
    }
}

impl Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f)
    }
}
