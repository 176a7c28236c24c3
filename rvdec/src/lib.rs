//! RISC-V instruction decoder and disassembly renderer.
//!
//! Covers the compressed (RVC) encodings and the base integer, M, A, F, D, Q and
//! Zfh extensions for RV32, RV64 and RV128.
//!
//! ```rust
//! // ret
//! let inst = rvdec::decode(0x0000_8067, rvdec::Xlen::Rv32);
//! assert_eq!(inst.opcode, rvdec::Opcode::Jalr);
//! assert_eq!(inst.render(), "jalr\tzero,ra,0");
//!
//! // c.addi sp, sp, -32
//! let inst = rvdec::decode_at(0x1101, 0x8000_0000, rvdec::Xlen::Rv64);
//! assert_eq!(inst.len(), 2);
//! assert_eq!(inst.render_line(), "0x80000000\taddi\tsp,sp,-32");
//! ```
//!
//! Decoding never fails. Reserved and unallocated encodings classify as
//! [`Opcode::Illegal`]; callers decide whether to print or skip them.

use std::fmt::{Debug, Display};
use std::str::FromStr;

mod classify;
mod code;
mod codec;
pub mod csr;
mod opcode;
mod render;

pub use classify::classify;
pub use codec::{Codec, Operands};
pub use opcode::{Entry, Opcode};
pub use render::{Format, Token};

/// The integer register width of the target.
///
/// Several encodings mean different instructions depending on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Xlen {
    Rv32,
    Rv64,
    Rv128,
}

impl Xlen {
    pub fn bits(self) -> u32 {
        match self {
            Xlen::Rv32 => 32,
            Xlen::Rv64 => 64,
            Xlen::Rv128 => 128,
        }
    }

    /// Mask applied to computed target addresses.
    fn address_mask(self) -> u64 {
        match self {
            Xlen::Rv32 => u32::MAX as u64,
            Xlen::Rv64 | Xlen::Rv128 => u64::MAX,
        }
    }
}

impl Display for Xlen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rv{}", self.bits())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseXlenError {
    pub input: String,
}

impl Display for ParseXlenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid ISA width '{}', expected one of rv32, rv64, rv128",
            self.input
        )
    }
}

impl std::error::Error for ParseXlenError {}

impl FromStr for Xlen {
    type Err = ParseXlenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rv32" | "32" => Ok(Xlen::Rv32),
            "rv64" | "64" => Ok(Xlen::Rv64),
            "rv128" | "128" => Ok(Xlen::Rv128),
            _ => Err(ParseXlenError {
                input: s.to_owned(),
            }),
        }
    }
}

/// An integer register, displayed with its ABI name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reg(pub u32);

impl Reg {
    pub const RA: Reg = Reg(1);
    pub const SP: Reg = Reg(2);
}

impl Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.0;
        match n {
            0 => write!(f, "zero"),
            1 => write!(f, "ra"),
            2 => write!(f, "sp"),
            3 => write!(f, "gp"),
            4 => write!(f, "tp"),
            5..=7 => write!(f, "t{}", n - 5),
            8 => write!(f, "s0"),
            9 => write!(f, "s1"),
            10..=17 => write!(f, "a{}", n - 10),
            18..=27 => write!(f, "s{}", n - 18 + 2),
            28..=31 => write!(f, "t{}", n - 28 + 3),
            _ => write!(f, "x{n}"),
        }
    }
}

/// A floating-point register, displayed with its ABI name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FReg(pub u32);

impl Display for FReg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.0;
        match n {
            0..=7 => write!(f, "ft{n}"),
            8..=9 => write!(f, "fs{}", n - 8),
            10..=17 => write!(f, "fa{}", n - 10),
            18..=27 => write!(f, "fs{}", n - 18 + 2),
            28..=31 => write!(f, "ft{}", n - 28 + 8),
            _ => write!(f, "f{n}"),
        }
    }
}

/// Whether the decoded instruction was a compressed instruction or not.
/// If it was compressed, only the first two bytes were used.
/// If it was not compressed, all four bytes are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsCompressed {
    No,
    Yes,
}

impl IsCompressed {
    pub fn from_word(word: u32) -> Self {
        if (word & 0b11) != 0b11 {
            IsCompressed::Yes
        } else {
            IsCompressed::No
        }
    }

    /// Little-endian encodings carry the quadrant in the first byte.
    pub fn from_first_byte(byte: u8) -> Self {
        Self::from_word(byte as u32)
    }

    /// Instruction length in bytes.
    pub fn len(self) -> u32 {
        match self {
            IsCompressed::Yes => 2,
            IsCompressed::No => 4,
        }
    }
}

/// One side of a fence: which kinds of access it orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FenceSet {
    pub device_input: bool,
    pub device_output: bool,
    pub memory_read: bool,
    pub memory_write: bool,
}

impl FenceSet {
    /// Reads the 4-bit `iorw` mask, `i` being the most significant bit.
    pub fn from_bits(bits: u32) -> Self {
        FenceSet {
            device_input: bits & 0b1000 != 0,
            device_output: bits & 0b0100 != 0,
            memory_read: bits & 0b0010 != 0,
            memory_write: bits & 0b0001 != 0,
        }
    }
}

impl Display for FenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.device_input {
            write!(f, "i")?;
        }
        if self.device_output {
            write!(f, "o")?;
        }
        if self.memory_read {
            write!(f, "r")?;
        }
        if self.memory_write {
            write!(f, "w")?;
        }
        Ok(())
    }
}

/// An atomic memory ordering for instructions from the A extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmoOrdering {
    /// No bits.
    Relaxed,
    /// `aq`
    Acquire,
    /// `rl`
    Release,
    /// `aq`, `rl`
    SeqCst,
}

impl AmoOrdering {
    pub fn from_aq_rl(aq: bool, rl: bool) -> Self {
        match (aq, rl) {
            (false, false) => Self::Relaxed,
            (true, false) => Self::Acquire,
            (false, true) => Self::Release,
            (true, true) => Self::SeqCst,
        }
    }
}

impl Display for AmoOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmoOrdering::Relaxed => write!(f, ""),
            AmoOrdering::Acquire => write!(f, ".aq"),
            AmoOrdering::Release => write!(f, ".rl"),
            AmoOrdering::SeqCst => write!(f, ".aqrl"),
        }
    }
}

/// The `rm` field of floating-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even
    Rne,
    /// Round towards zero
    Rtz,
    /// Round down
    Rdn,
    /// Round up
    Rup,
    /// Round to nearest, ties to max magnitude
    Rmm,
    /// Use the mode in `frm`
    Dyn,
    /// 101 and 110 are reserved
    Invalid(u32),
}

impl RoundingMode {
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0b111 {
            0b000 => RoundingMode::Rne,
            0b001 => RoundingMode::Rtz,
            0b010 => RoundingMode::Rdn,
            0b011 => RoundingMode::Rup,
            0b100 => RoundingMode::Rmm,
            0b111 => RoundingMode::Dyn,
            other => RoundingMode::Invalid(other),
        }
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::Rne => write!(f, "rne"),
            RoundingMode::Rtz => write!(f, "rtz"),
            RoundingMode::Rdn => write!(f, "rdn"),
            RoundingMode::Rup => write!(f, "rup"),
            RoundingMode::Rmm => write!(f, "rmm"),
            RoundingMode::Dyn => write!(f, "dyn"),
            RoundingMode::Invalid(_) => write!(f, "inv"),
        }
    }
}

/// A fully decoded instruction.
///
/// Register fields are plain indices; whether an index names an integer or a
/// floating-point register depends on the opcode and is resolved by its
/// [`Format`] when rendering. Fields an opcode does not use are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded {
    pub opcode: Opcode,
    pub xlen: Xlen,
    /// Address the word was loaded from.
    pub address: u64,
    /// The raw word. Only the low 16 bits are meaningful for compressed instructions.
    pub word: u32,
    pub is_compressed: IsCompressed,
    pub rd: u32,
    pub rs1: u32,
    pub rs2: u32,
    pub rs3: u32,
    /// Offset, constant, shift amount or CSR number, depending on the codec.
    pub imm: i32,
    pub rm: u32,
    pub pred: u32,
    pub succ: u32,
    pub aq: bool,
    pub rl: bool,
}

impl Decoded {
    /// Classifies `word` and extracts its operands with the opcode's codec.
    pub fn new(word: u32, address: u64, xlen: Xlen) -> Self {
        let is_compressed = IsCompressed::from_word(word);
        let word = match is_compressed {
            IsCompressed::Yes => word & 0xffff,
            IsCompressed::No => word,
        };
        let opcode = classify(word, xlen);
        let Operands {
            rd,
            rs1,
            rs2,
            rs3,
            imm,
            rm,
            pred,
            succ,
            aq,
            rl,
        } = opcode.codec().decode(word);

        Decoded {
            opcode,
            xlen,
            address,
            word,
            is_compressed,
            rd,
            rs1,
            rs2,
            rs3,
            imm,
            rm,
            pred,
            succ,
            aq,
            rl,
        }
    }

    pub fn is_illegal(&self) -> bool {
        self.opcode == Opcode::Illegal
    }

    /// Instruction length in bytes, 2 or 4.
    pub fn len(&self) -> u32 {
        self.is_compressed.len()
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        RoundingMode::from_bits(self.rm)
    }

    pub fn ordering(&self) -> AmoOrdering {
        AmoOrdering::from_aq_rl(self.aq, self.rl)
    }

    pub fn fence_pred(&self) -> FenceSet {
        FenceSet::from_bits(self.pred)
    }

    pub fn fence_succ(&self) -> FenceSet {
        FenceSet::from_bits(self.succ)
    }

    /// The CSR number of Zicsr instructions.
    pub fn csr(&self) -> u32 {
        (self.imm as u32) & 0xfff
    }

    /// `address + imm`, wrapped to the target's address width.
    pub fn target(&self) -> u64 {
        self.address.wrapping_add_signed(self.imm as i64) & self.xlen.address_mask()
    }
}

/// Decodes a word located at address 0.
pub fn decode(word: u32, xlen: Xlen) -> Decoded {
    Decoded::new(word, 0, xlen)
}

/// Decodes a word located at `address`.
pub fn decode_at(word: u32, address: u64, xlen: Xlen) -> Decoded {
    Decoded::new(word, address, xlen)
}

#[cfg(test)]
mod tests;
