//! Every instruction the decoder knows, with its mnemonic, operand codec and
//! render format.
//!
//! The enum and the table are generated from the same list, so an opcode
//! without an entry cannot exist.

use crate::codec::Codec;
use crate::render::Format;

/// A row of the opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub mnemonic: &'static str,
    pub codec: Codec,
    pub format: Format,
}

macro_rules! opcodes {
    ($($name:ident => $mnemonic:literal, $codec:ident, $format:ident;)*) => {
        /// The identity of a decoded instruction.
        ///
        /// Compressed instructions get their own variants (prefixed with `C`)
        /// even where they print like their 32-bit expansion.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Opcode {
            $($name,)*
        }

        impl Opcode {
            pub const ALL: &'static [Opcode] = &[$(Opcode::$name,)*];

            pub fn entry(self) -> Entry {
                match self {
                    $(Opcode::$name => Entry {
                        mnemonic: $mnemonic,
                        codec: Codec::$codec,
                        format: Format::$format,
                    },)*
                }
            }
        }
    };
}

opcodes! {
    Illegal => "illegal", None, Illegal;

    // quadrant 0
    CAddi4spn => "addi", Ciw4spn, RdRs1Imm;
    CFld => "fld", ClLd, FrdOffsetRs1;
    CLq => "lq", ClLq, RdOffsetRs1;
    CLw => "lw", ClLw, RdOffsetRs1;
    CFlw => "flw", ClLw, FrdOffsetRs1;
    CLd => "ld", ClLd, RdOffsetRs1;
    CFsd => "fsd", CsSd, Frs2OffsetRs1;
    CSq => "sq", CsSq, Rs2OffsetRs1;
    CSw => "sw", CsSw, Rs2OffsetRs1;
    CFsw => "fsw", CsSw, Frs2OffsetRs1;
    CSd => "sd", CsSd, Rs2OffsetRs1;

    // quadrant 1
    CNop => "nop", None, None;
    CAddi => "addi", Ci, RdRs1Imm;
    CJal => "jal", CjJal, RdOffset;
    CAddiw => "addiw", Ci, RdRs1Imm;
    CLi => "addi", CiLi, RdRs1Imm;
    CAddi16sp => "addi", Ci16sp, RdRs1Imm;
    CLui => "lui", CiLui, RdImm;
    CSrli => "srli", CbSh6, RdRs1Imm;
    CSrai => "srai", CbSh6, RdRs1Imm;
    CAndi => "andi", CbImm, RdRs1Imm;
    CSub => "sub", Cs, RdRs1Rs2;
    CXor => "xor", Cs, RdRs1Rs2;
    COr => "or", Cs, RdRs1Rs2;
    CAnd => "and", Cs, RdRs1Rs2;
    CSubw => "subw", Cs, RdRs1Rs2;
    CAddw => "addw", Cs, RdRs1Rs2;
    CJ => "j", Cj, Offset;
    CBeqz => "beqz", Cb, Rs1Offset;
    CBnez => "bnez", Cb, Rs1Offset;

    // quadrant 2
    CSlli => "slli", CiSh6, RdRs1Imm;
    CFldsp => "fld", CiLdsp, FrdOffsetRs1;
    CLqsp => "lq", CiLqsp, RdOffsetRs1;
    CLwsp => "lw", CiLwsp, RdOffsetRs1;
    CFlwsp => "flw", CiLwsp, FrdOffsetRs1;
    CLdsp => "ld", CiLdsp, RdOffsetRs1;
    CJr => "jr", CrJr, Rs1;
    CMv => "mv", CrMv, RdRs1;
    CEbreak => "ebreak", None, None;
    CJalr => "jalr", CrJalr, RdRs1Imm;
    CAdd => "add", Cr, RdRs1Rs2;
    CFsdsp => "fsd", CssSdsp, Frs2OffsetRs1;
    CSqsp => "sq", CssSqsp, Rs2OffsetRs1;
    CSwsp => "sw", CssSwsp, Rs2OffsetRs1;
    CFswsp => "fsw", CssSwsp, Frs2OffsetRs1;
    CSdsp => "sd", CssSdsp, Rs2OffsetRs1;

    // RV32I
    Lui => "lui", U, RdImm;
    Auipc => "auipc", U, RdOffset;
    Jal => "jal", Uj, RdOffset;
    Jalr => "jalr", I, RdRs1Imm;
    Beq => "beq", Sb, Rs1Rs2Offset;
    Bne => "bne", Sb, Rs1Rs2Offset;
    Blt => "blt", Sb, Rs1Rs2Offset;
    Bge => "bge", Sb, Rs1Rs2Offset;
    Bltu => "bltu", Sb, Rs1Rs2Offset;
    Bgeu => "bgeu", Sb, Rs1Rs2Offset;
    Lb => "lb", I, RdOffsetRs1;
    Lh => "lh", I, RdOffsetRs1;
    Lw => "lw", I, RdOffsetRs1;
    Lbu => "lbu", I, RdOffsetRs1;
    Lhu => "lhu", I, RdOffsetRs1;
    Sb => "sb", S, Rs2OffsetRs1;
    Sh => "sh", S, Rs2OffsetRs1;
    Sw => "sw", S, Rs2OffsetRs1;
    Addi => "addi", I, RdRs1Imm;
    Slti => "slti", I, RdRs1Imm;
    Sltiu => "sltiu", I, RdRs1Imm;
    Xori => "xori", I, RdRs1Imm;
    Ori => "ori", I, RdRs1Imm;
    Andi => "andi", I, RdRs1Imm;
    Slli => "slli", ISh7, RdRs1Imm;
    Srli => "srli", ISh7, RdRs1Imm;
    Srai => "srai", ISh7, RdRs1Imm;
    Add => "add", R, RdRs1Rs2;
    Sub => "sub", R, RdRs1Rs2;
    Sll => "sll", R, RdRs1Rs2;
    Slt => "slt", R, RdRs1Rs2;
    Sltu => "sltu", R, RdRs1Rs2;
    Xor => "xor", R, RdRs1Rs2;
    Srl => "srl", R, RdRs1Rs2;
    Sra => "sra", R, RdRs1Rs2;
    Or => "or", R, RdRs1Rs2;
    And => "and", R, RdRs1Rs2;
    Fence => "fence", RF, PredSucc;
    Ecall => "ecall", None, None;
    Ebreak => "ebreak", None, None;

    // RV64I
    Lwu => "lwu", I, RdOffsetRs1;
    Ld => "ld", I, RdOffsetRs1;
    Sd => "sd", S, Rs2OffsetRs1;
    Addiw => "addiw", I, RdRs1Imm;
    Slliw => "slliw", ISh5, RdRs1Imm;
    Srliw => "srliw", ISh5, RdRs1Imm;
    Sraiw => "sraiw", ISh5, RdRs1Imm;
    Addw => "addw", R, RdRs1Rs2;
    Subw => "subw", R, RdRs1Rs2;
    Sllw => "sllw", R, RdRs1Rs2;
    Srlw => "srlw", R, RdRs1Rs2;
    Sraw => "sraw", R, RdRs1Rs2;

    // Zifencei, Zicsr, Zawrs and privileged
    FenceI => "fence.i", None, None;
    Csrrw => "csrrw", ICsr, RdCsrRs1;
    Csrrs => "csrrs", ICsr, RdCsrRs1;
    Csrrc => "csrrc", ICsr, RdCsrRs1;
    Csrrwi => "csrrwi", ICsr, RdCsrZimm;
    Csrrsi => "csrrsi", ICsr, RdCsrZimm;
    Csrrci => "csrrci", ICsr, RdCsrZimm;
    WrsNto => "wrs.nto", None, None;
    WrsSto => "wrs.sto", None, None;
    Sret => "sret", None, None;
    Mret => "mret", None, None;
    Wfi => "wfi", None, None;

    // M
    Mul => "mul", R, RdRs1Rs2;
    Mulh => "mulh", R, RdRs1Rs2;
    Mulhsu => "mulhsu", R, RdRs1Rs2;
    Mulhu => "mulhu", R, RdRs1Rs2;
    Div => "div", R, RdRs1Rs2;
    Divu => "divu", R, RdRs1Rs2;
    Rem => "rem", R, RdRs1Rs2;
    Remu => "remu", R, RdRs1Rs2;
    Mulw => "mulw", R, RdRs1Rs2;
    Divw => "divw", R, RdRs1Rs2;
    Divuw => "divuw", R, RdRs1Rs2;
    Remw => "remw", R, RdRs1Rs2;
    Remuw => "remuw", R, RdRs1Rs2;

    // A
    LrW => "lr.w", RL, AmoRdRs1;
    ScW => "sc.w", RA, AmoRdRs2Rs1;
    AmoswapW => "amoswap.w", RA, AmoRdRs2Rs1;
    AmoaddW => "amoadd.w", RA, AmoRdRs2Rs1;
    AmoxorW => "amoxor.w", RA, AmoRdRs2Rs1;
    AmoandW => "amoand.w", RA, AmoRdRs2Rs1;
    AmoorW => "amoor.w", RA, AmoRdRs2Rs1;
    AmominW => "amomin.w", RA, AmoRdRs2Rs1;
    AmomaxW => "amomax.w", RA, AmoRdRs2Rs1;
    AmominuW => "amominu.w", RA, AmoRdRs2Rs1;
    AmomaxuW => "amomaxu.w", RA, AmoRdRs2Rs1;
    LrD => "lr.d", RL, AmoRdRs1;
    ScD => "sc.d", RA, AmoRdRs2Rs1;
    AmoswapD => "amoswap.d", RA, AmoRdRs2Rs1;
    AmoaddD => "amoadd.d", RA, AmoRdRs2Rs1;
    AmoxorD => "amoxor.d", RA, AmoRdRs2Rs1;
    AmoandD => "amoand.d", RA, AmoRdRs2Rs1;
    AmoorD => "amoor.d", RA, AmoRdRs2Rs1;
    AmominD => "amomin.d", RA, AmoRdRs2Rs1;
    AmomaxD => "amomax.d", RA, AmoRdRs2Rs1;
    AmominuD => "amominu.d", RA, AmoRdRs2Rs1;
    AmomaxuD => "amomaxu.d", RA, AmoRdRs2Rs1;

    // F
    Flw => "flw", I, FrdOffsetRs1;
    Fsw => "fsw", S, Frs2OffsetRs1;
    FmaddS => "fmadd.s", R4M, FrdFrs1Frs2Frs3Rm;
    FmsubS => "fmsub.s", R4M, FrdFrs1Frs2Frs3Rm;
    FnmsubS => "fnmsub.s", R4M, FrdFrs1Frs2Frs3Rm;
    FnmaddS => "fnmadd.s", R4M, FrdFrs1Frs2Frs3Rm;
    FaddS => "fadd.s", RM, FrdFrs1Frs2Rm;
    FsubS => "fsub.s", RM, FrdFrs1Frs2Rm;
    FmulS => "fmul.s", RM, FrdFrs1Frs2Rm;
    FdivS => "fdiv.s", RM, FrdFrs1Frs2Rm;
    FsqrtS => "fsqrt.s", RM, FrdFrs1Rm;
    FsgnjS => "fsgnj.s", R, FrdFrs1Frs2;
    FsgnjnS => "fsgnjn.s", R, FrdFrs1Frs2;
    FsgnjxS => "fsgnjx.s", R, FrdFrs1Frs2;
    FminS => "fmin.s", R, FrdFrs1Frs2;
    FmaxS => "fmax.s", R, FrdFrs1Frs2;
    FcvtWS => "fcvt.w.s", RM, RdFrs1Rm;
    FcvtWuS => "fcvt.wu.s", RM, RdFrs1Rm;
    FmvXW => "fmv.x.w", R, RdFrs1;
    FeqS => "feq.s", R, RdFrs1Frs2;
    FltS => "flt.s", R, RdFrs1Frs2;
    FleS => "fle.s", R, RdFrs1Frs2;
    FclassS => "fclass.s", R, RdFrs1;
    FcvtSW => "fcvt.s.w", RM, FrdRs1Rm;
    FcvtSWu => "fcvt.s.wu", RM, FrdRs1Rm;
    FmvWX => "fmv.w.x", R, FrdRs1;
    FcvtLS => "fcvt.l.s", RM, RdFrs1Rm;
    FcvtLuS => "fcvt.lu.s", RM, RdFrs1Rm;
    FcvtSL => "fcvt.s.l", RM, FrdRs1Rm;
    FcvtSLu => "fcvt.s.lu", RM, FrdRs1Rm;

    // D
    Fld => "fld", I, FrdOffsetRs1;
    Fsd => "fsd", S, Frs2OffsetRs1;
    FmaddD => "fmadd.d", R4M, FrdFrs1Frs2Frs3Rm;
    FmsubD => "fmsub.d", R4M, FrdFrs1Frs2Frs3Rm;
    FnmsubD => "fnmsub.d", R4M, FrdFrs1Frs2Frs3Rm;
    FnmaddD => "fnmadd.d", R4M, FrdFrs1Frs2Frs3Rm;
    FaddD => "fadd.d", RM, FrdFrs1Frs2Rm;
    FsubD => "fsub.d", RM, FrdFrs1Frs2Rm;
    FmulD => "fmul.d", RM, FrdFrs1Frs2Rm;
    FdivD => "fdiv.d", RM, FrdFrs1Frs2Rm;
    FsqrtD => "fsqrt.d", RM, FrdFrs1Rm;
    FsgnjD => "fsgnj.d", R, FrdFrs1Frs2;
    FsgnjnD => "fsgnjn.d", R, FrdFrs1Frs2;
    FsgnjxD => "fsgnjx.d", R, FrdFrs1Frs2;
    FminD => "fmin.d", R, FrdFrs1Frs2;
    FmaxD => "fmax.d", R, FrdFrs1Frs2;
    FcvtSD => "fcvt.s.d", RM, FrdFrs1Rm;
    FcvtDS => "fcvt.d.s", RM, FrdFrs1Rm;
    FeqD => "feq.d", R, RdFrs1Frs2;
    FltD => "flt.d", R, RdFrs1Frs2;
    FleD => "fle.d", R, RdFrs1Frs2;
    FclassD => "fclass.d", R, RdFrs1;
    FcvtWD => "fcvt.w.d", RM, RdFrs1Rm;
    FcvtWuD => "fcvt.wu.d", RM, RdFrs1Rm;
    FcvtDW => "fcvt.d.w", RM, FrdRs1Rm;
    FcvtDWu => "fcvt.d.wu", RM, FrdRs1Rm;
    FcvtLD => "fcvt.l.d", RM, RdFrs1Rm;
    FcvtLuD => "fcvt.lu.d", RM, RdFrs1Rm;
    FmvXD => "fmv.x.d", R, RdFrs1;
    FcvtDL => "fcvt.d.l", RM, FrdRs1Rm;
    FcvtDLu => "fcvt.d.lu", RM, FrdRs1Rm;
    FmvDX => "fmv.d.x", R, FrdRs1;

    // Q
    Flq => "flq", I, FrdOffsetRs1;
    Fsq => "fsq", S, Frs2OffsetRs1;
    FmaddQ => "fmadd.q", R4M, FrdFrs1Frs2Frs3Rm;
    FmsubQ => "fmsub.q", R4M, FrdFrs1Frs2Frs3Rm;
    FnmsubQ => "fnmsub.q", R4M, FrdFrs1Frs2Frs3Rm;
    FnmaddQ => "fnmadd.q", R4M, FrdFrs1Frs2Frs3Rm;
    FaddQ => "fadd.q", RM, FrdFrs1Frs2Rm;
    FsubQ => "fsub.q", RM, FrdFrs1Frs2Rm;
    FmulQ => "fmul.q", RM, FrdFrs1Frs2Rm;
    FdivQ => "fdiv.q", RM, FrdFrs1Frs2Rm;
    FsqrtQ => "fsqrt.q", RM, FrdFrs1Rm;
    FsgnjQ => "fsgnj.q", R, FrdFrs1Frs2;
    FsgnjnQ => "fsgnjn.q", R, FrdFrs1Frs2;
    FsgnjxQ => "fsgnjx.q", R, FrdFrs1Frs2;
    FminQ => "fmin.q", R, FrdFrs1Frs2;
    FmaxQ => "fmax.q", R, FrdFrs1Frs2;
    FcvtSQ => "fcvt.s.q", RM, FrdFrs1Rm;
    FcvtQS => "fcvt.q.s", RM, FrdFrs1Rm;
    FcvtDQ => "fcvt.d.q", RM, FrdFrs1Rm;
    FcvtQD => "fcvt.q.d", RM, FrdFrs1Rm;
    FeqQ => "feq.q", R, RdFrs1Frs2;
    FltQ => "flt.q", R, RdFrs1Frs2;
    FleQ => "fle.q", R, RdFrs1Frs2;
    FclassQ => "fclass.q", R, RdFrs1;
    FcvtWQ => "fcvt.w.q", RM, RdFrs1Rm;
    FcvtWuQ => "fcvt.wu.q", RM, RdFrs1Rm;
    FcvtQW => "fcvt.q.w", RM, FrdRs1Rm;
    FcvtQWu => "fcvt.q.wu", RM, FrdRs1Rm;
    FcvtLQ => "fcvt.l.q", RM, RdFrs1Rm;
    FcvtLuQ => "fcvt.lu.q", RM, RdFrs1Rm;
    FcvtQL => "fcvt.q.l", RM, FrdRs1Rm;
    FcvtQLu => "fcvt.q.lu", RM, FrdRs1Rm;

    // Zfh
    Flh => "flh", I, FrdOffsetRs1;
    Fsh => "fsh", S, Frs2OffsetRs1;
    FmaddH => "fmadd.h", R4M, FrdFrs1Frs2Frs3Rm;
    FmsubH => "fmsub.h", R4M, FrdFrs1Frs2Frs3Rm;
    FnmsubH => "fnmsub.h", R4M, FrdFrs1Frs2Frs3Rm;
    FnmaddH => "fnmadd.h", R4M, FrdFrs1Frs2Frs3Rm;
    FaddH => "fadd.h", RM, FrdFrs1Frs2Rm;
    FsubH => "fsub.h", RM, FrdFrs1Frs2Rm;
    FmulH => "fmul.h", RM, FrdFrs1Frs2Rm;
    FdivH => "fdiv.h", RM, FrdFrs1Frs2Rm;
    FsqrtH => "fsqrt.h", RM, FrdFrs1Rm;
    FsgnjH => "fsgnj.h", R, FrdFrs1Frs2;
    FsgnjnH => "fsgnjn.h", R, FrdFrs1Frs2;
    FsgnjxH => "fsgnjx.h", R, FrdFrs1Frs2;
    FminH => "fmin.h", R, FrdFrs1Frs2;
    FmaxH => "fmax.h", R, FrdFrs1Frs2;
    FcvtSH => "fcvt.s.h", RM, FrdFrs1Rm;
    FcvtHS => "fcvt.h.s", RM, FrdFrs1Rm;
    FcvtDH => "fcvt.d.h", RM, FrdFrs1Rm;
    FcvtHD => "fcvt.h.d", RM, FrdFrs1Rm;
    FcvtQH => "fcvt.q.h", RM, FrdFrs1Rm;
    FcvtHQ => "fcvt.h.q", RM, FrdFrs1Rm;
    FeqH => "feq.h", R, RdFrs1Frs2;
    FltH => "flt.h", R, RdFrs1Frs2;
    FleH => "fle.h", R, RdFrs1Frs2;
    FclassH => "fclass.h", R, RdFrs1;
    FcvtWH => "fcvt.w.h", RM, RdFrs1Rm;
    FcvtWuH => "fcvt.wu.h", RM, RdFrs1Rm;
    FmvXH => "fmv.x.h", R, RdFrs1;
    FcvtHW => "fcvt.h.w", RM, FrdRs1Rm;
    FcvtHWu => "fcvt.h.wu", RM, FrdRs1Rm;
    FmvHX => "fmv.h.x", R, FrdRs1;
    FcvtLH => "fcvt.l.h", RM, RdFrs1Rm;
    FcvtLuH => "fcvt.lu.h", RM, RdFrs1Rm;
    FcvtHL => "fcvt.h.l", RM, FrdRs1Rm;
    FcvtHLu => "fcvt.h.lu", RM, FrdRs1Rm;
}

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        self.entry().mnemonic
    }

    pub fn codec(self) -> Codec {
        self.entry().codec
    }

    pub fn format(self) -> Format {
        self.entry().format
    }

    /// Whether this is one of the 16-bit RVC instructions.
    pub fn is_compressed(self) -> bool {
        self.codec().is_compressed() || matches!(self, Opcode::CNop | Opcode::CEbreak)
    }
}
