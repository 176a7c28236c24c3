//! Operand extraction, one variant per encoding layout.

use crate::Reg;
use crate::code::{InstCode, InstCodeC};

/// Describes where an instruction keeps its operands.
///
/// Standard layouts (`U`, `I`, `R`, ...) follow the base ISA formats. The
/// compressed ones are named after the RVC format plus the instruction family
/// that gives the immediate its scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// No operands.
    None,
    U,
    /// `jal`
    Uj,
    I,
    /// 32-bit shifts, `shamt[4:0]`
    ISh5,
    /// XLEN shifts, `shamt[6:0]`
    ISh7,
    /// Zicsr, `imm` holds the CSR number
    ICsr,
    S,
    /// Conditional branches
    Sb,
    R,
    /// `R` with a rounding mode
    RM,
    /// Fused multiply-add, `R4` with a rounding mode
    R4M,
    /// AMOs, `R` with ordering bits
    RA,
    /// `lr`, `RA` without `rs2`
    RL,
    /// `fence`
    RF,
    /// `c.beqz`, `c.bnez`
    Cb,
    /// `c.andi`
    CbImm,
    /// `c.srli`, `c.srai`
    CbSh6,
    /// `c.addi`, `c.addiw`
    Ci,
    /// `c.slli`
    CiSh6,
    Ci16sp,
    CiLwsp,
    CiLdsp,
    CiLqsp,
    CiLi,
    CiLui,
    Ciw4spn,
    /// `c.j`
    Cj,
    /// `c.jal`
    CjJal,
    ClLw,
    ClLd,
    ClLq,
    /// `c.add`
    Cr,
    CrMv,
    CrJalr,
    CrJr,
    /// `c.sub` and the other two-register ALU forms
    Cs,
    CsSw,
    CsSd,
    CsSq,
    CssSwsp,
    CssSdsp,
    CssSqsp,
}

/// The operand fields of a single instruction.
///
/// Fields that the codec does not define are left at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Operands {
    pub rd: u32,
    pub rs1: u32,
    pub rs2: u32,
    pub rs3: u32,
    pub imm: i32,
    pub rm: u32,
    pub pred: u32,
    pub succ: u32,
    pub aq: bool,
    pub rl: bool,
}

impl Codec {
    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            Codec::Cb
                | Codec::CbImm
                | Codec::CbSh6
                | Codec::Ci
                | Codec::CiSh6
                | Codec::Ci16sp
                | Codec::CiLwsp
                | Codec::CiLdsp
                | Codec::CiLqsp
                | Codec::CiLi
                | Codec::CiLui
                | Codec::Ciw4spn
                | Codec::Cj
                | Codec::CjJal
                | Codec::ClLw
                | Codec::ClLd
                | Codec::ClLq
                | Codec::Cr
                | Codec::CrMv
                | Codec::CrJalr
                | Codec::CrJr
                | Codec::Cs
                | Codec::CsSw
                | Codec::CsSd
                | Codec::CsSq
                | Codec::CssSwsp
                | Codec::CssSdsp
                | Codec::CssSqsp
        )
    }

    /// Extracts the operands of `word` according to this layout.
    ///
    /// Compressed layouts only look at the low 16 bits.
    pub fn decode(self, word: u32) -> Operands {
        if self.is_compressed() {
            self.decode_compressed(InstCodeC(word as u16))
        } else {
            self.decode_standard(InstCode(word))
        }
    }

    fn decode_standard(self, code: InstCode) -> Operands {
        let zero = Operands::default();
        match self {
            Codec::U => Operands {
                rd: code.rd(),
                imm: code.imm_u(),
                ..zero
            },
            Codec::Uj => Operands {
                rd: code.rd(),
                imm: code.imm_j(),
                ..zero
            },
            Codec::I => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                imm: code.imm_i(),
                ..zero
            },
            Codec::ISh5 => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                imm: code.shamt5() as i32,
                ..zero
            },
            Codec::ISh7 => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                imm: code.shamt7() as i32,
                ..zero
            },
            Codec::ICsr => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                imm: code.csr() as i32,
                ..zero
            },
            Codec::S => Operands {
                rs1: code.rs1(),
                rs2: code.rs2(),
                imm: code.imm_s(),
                ..zero
            },
            Codec::Sb => Operands {
                rs1: code.rs1(),
                rs2: code.rs2(),
                imm: code.imm_b(),
                ..zero
            },
            Codec::R => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                rs2: code.rs2(),
                ..zero
            },
            Codec::RM => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                rs2: code.rs2(),
                rm: code.rm(),
                ..zero
            },
            Codec::R4M => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                rs2: code.rs2(),
                rs3: code.rs3(),
                rm: code.rm(),
                ..zero
            },
            Codec::RA => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                rs2: code.rs2(),
                aq: code.aq(),
                rl: code.rl(),
                ..zero
            },
            Codec::RL => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                aq: code.aq(),
                rl: code.rl(),
                ..zero
            },
            Codec::RF => Operands {
                rd: code.rd(),
                rs1: code.rs1(),
                pred: code.pred(),
                succ: code.succ(),
                ..zero
            },
            _ => zero,
        }
    }

    fn decode_compressed(self, code: InstCodeC) -> Operands {
        let zero = Operands::default();
        match self {
            Codec::Cb => Operands {
                rs1: code.rs1_short(),
                imm: code.imm_b(),
                ..zero
            },
            Codec::CbImm => Operands {
                rd: code.rs1_short(),
                rs1: code.rs1_short(),
                imm: code.imm_ci(),
                ..zero
            },
            Codec::CbSh6 => Operands {
                rd: code.rs1_short(),
                rs1: code.rs1_short(),
                imm: code.shamt() as i32,
                ..zero
            },
            Codec::Ci => Operands {
                rd: code.rd(),
                rs1: code.rd(),
                imm: code.imm_ci(),
                ..zero
            },
            Codec::CiSh6 => Operands {
                rd: code.rd(),
                rs1: code.rd(),
                imm: code.shamt() as i32,
                ..zero
            },
            Codec::Ci16sp => Operands {
                rd: Reg::SP.0,
                rs1: Reg::SP.0,
                imm: code.imm_addi16sp(),
                ..zero
            },
            Codec::CiLwsp => Operands {
                rd: code.rd(),
                rs1: Reg::SP.0,
                imm: code.imm_lwsp() as i32,
                ..zero
            },
            Codec::CiLdsp => Operands {
                rd: code.rd(),
                rs1: Reg::SP.0,
                imm: code.imm_ldsp() as i32,
                ..zero
            },
            Codec::CiLqsp => Operands {
                rd: code.rd(),
                rs1: Reg::SP.0,
                imm: code.imm_lqsp() as i32,
                ..zero
            },
            Codec::CiLi => Operands {
                rd: code.rd(),
                imm: code.imm_ci(),
                ..zero
            },
            Codec::CiLui => Operands {
                rd: code.rd(),
                imm: code.imm_lui(),
                ..zero
            },
            Codec::Ciw4spn => Operands {
                rd: code.rs2_short(),
                rs1: Reg::SP.0,
                imm: code.imm_addi4spn() as i32,
                ..zero
            },
            Codec::Cj => Operands {
                imm: code.imm_j(),
                ..zero
            },
            Codec::CjJal => Operands {
                rd: Reg::RA.0,
                imm: code.imm_j(),
                ..zero
            },
            Codec::ClLw => Operands {
                rd: code.rs2_short(),
                rs1: code.rs1_short(),
                imm: code.imm_w() as i32,
                ..zero
            },
            Codec::ClLd => Operands {
                rd: code.rs2_short(),
                rs1: code.rs1_short(),
                imm: code.imm_d() as i32,
                ..zero
            },
            Codec::ClLq => Operands {
                rd: code.rs2_short(),
                rs1: code.rs1_short(),
                imm: code.imm_q() as i32,
                ..zero
            },
            Codec::Cr => Operands {
                rd: code.rd(),
                rs1: code.rd(),
                rs2: code.rs2(),
                ..zero
            },
            // c.mv rd, rs2 expands to add rd, x0, rs2 and is shown as `mv rd,rs2`.
            Codec::CrMv => Operands {
                rd: code.rd(),
                rs1: code.rs2(),
                ..zero
            },
            Codec::CrJalr => Operands {
                rd: Reg::RA.0,
                rs1: code.rd(),
                ..zero
            },
            Codec::CrJr => Operands {
                rs1: code.rd(),
                ..zero
            },
            Codec::Cs => Operands {
                rd: code.rs1_short(),
                rs1: code.rs1_short(),
                rs2: code.rs2_short(),
                ..zero
            },
            Codec::CsSw => Operands {
                rs1: code.rs1_short(),
                rs2: code.rs2_short(),
                imm: code.imm_w() as i32,
                ..zero
            },
            Codec::CsSd => Operands {
                rs1: code.rs1_short(),
                rs2: code.rs2_short(),
                imm: code.imm_d() as i32,
                ..zero
            },
            Codec::CsSq => Operands {
                rs1: code.rs1_short(),
                rs2: code.rs2_short(),
                imm: code.imm_q() as i32,
                ..zero
            },
            Codec::CssSwsp => Operands {
                rs1: Reg::SP.0,
                rs2: code.rs2(),
                imm: code.imm_swsp() as i32,
                ..zero
            },
            Codec::CssSdsp => Operands {
                rs1: Reg::SP.0,
                rs2: code.rs2(),
                imm: code.imm_sdsp() as i32,
                ..zero
            },
            Codec::CssSqsp => Operands {
                rs1: Reg::SP.0,
                rs2: code.rs2(),
                imm: code.imm_sqsp() as i32,
                ..zero
            },
            _ => zero,
        }
    }
}
