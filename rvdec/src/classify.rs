//! Mapping raw words to an [`Opcode`].
//!
//! The tree follows the encoding: quadrant first, then the major opcode (or
//! `funct3` for compressed words), then whatever sub-fields disambiguate the
//! group. Every level falls through to [`Opcode::Illegal`].

use crate::Xlen;
use crate::code::{InstCode, InstCodeC};
use crate::opcode::Opcode;

/// Identifies the instruction in `word`.
///
/// If the low two bits are not `11`, only the low 16 bits are looked at.
/// The same compressed encoding may name different instructions depending
/// on `xlen`.
pub fn classify(word: u32, xlen: Xlen) -> Opcode {
    match word & 0b11 {
        0b00 => quadrant0(InstCodeC(word as u16), xlen),
        0b01 => quadrant1(InstCodeC(word as u16), xlen),
        0b10 => quadrant2(InstCodeC(word as u16), xlen),
        _ => standard(InstCode(word), xlen),
    }
}

fn quadrant0(code: InstCodeC, xlen: Xlen) -> Opcode {
    match code.funct3() {
        // also rejects the all-zero parcel
        0b000 if code.imm_addi4spn() == 0 => Opcode::Illegal,
        0b000 => Opcode::CAddi4spn,
        0b001 => match xlen {
            Xlen::Rv32 | Xlen::Rv64 => Opcode::CFld,
            Xlen::Rv128 => Opcode::CLq,
        },
        0b010 => Opcode::CLw,
        0b011 => match xlen {
            Xlen::Rv32 => Opcode::CFlw,
            Xlen::Rv64 | Xlen::Rv128 => Opcode::CLd,
        },
        0b101 => match xlen {
            Xlen::Rv32 | Xlen::Rv64 => Opcode::CFsd,
            Xlen::Rv128 => Opcode::CSq,
        },
        0b110 => Opcode::CSw,
        0b111 => match xlen {
            Xlen::Rv32 => Opcode::CFsw,
            Xlen::Rv64 | Xlen::Rv128 => Opcode::CSd,
        },
        _ => Opcode::Illegal,
    }
}

fn quadrant1(code: InstCodeC, xlen: Xlen) -> Opcode {
    match code.funct3() {
        0b000 => match code.rd() {
            0 => Opcode::CNop,
            _ => Opcode::CAddi,
        },
        0b001 => match xlen {
            Xlen::Rv32 => Opcode::CJal,
            Xlen::Rv64 | Xlen::Rv128 if code.rd() == 0 => Opcode::Illegal,
            Xlen::Rv64 | Xlen::Rv128 => Opcode::CAddiw,
        },
        0b010 => Opcode::CLi,
        0b011 => match code.rd() {
            2 if code.imm_addi16sp() == 0 => Opcode::Illegal,
            2 => Opcode::CAddi16sp,
            _ if code.imm_lui() == 0 => Opcode::Illegal,
            _ => Opcode::CLui,
        },
        0b100 => match code.funct2() {
            // shamt[5] is reserved on rv32
            0b00 | 0b01 if xlen == Xlen::Rv32 && code.bit12() == 1 => Opcode::Illegal,
            0b00 => Opcode::CSrli,
            0b01 => Opcode::CSrai,
            0b10 => Opcode::CAndi,
            _ => match (code.bit12(), code.extract(5..=6)) {
                (0, 0b00) => Opcode::CSub,
                (0, 0b01) => Opcode::CXor,
                (0, 0b10) => Opcode::COr,
                (0, 0b11) => Opcode::CAnd,
                (1, 0b00) if xlen != Xlen::Rv32 => Opcode::CSubw,
                (1, 0b01) if xlen != Xlen::Rv32 => Opcode::CAddw,
                _ => Opcode::Illegal,
            },
        },
        0b101 => Opcode::CJ,
        0b110 => Opcode::CBeqz,
        0b111 => Opcode::CBnez,
        _ => Opcode::Illegal,
    }
}

fn quadrant2(code: InstCodeC, xlen: Xlen) -> Opcode {
    match code.funct3() {
        0b000 if xlen == Xlen::Rv32 && code.bit12() == 1 => Opcode::Illegal,
        0b000 => Opcode::CSlli,
        0b001 => match xlen {
            Xlen::Rv32 | Xlen::Rv64 => Opcode::CFldsp,
            Xlen::Rv128 if code.rd() == 0 => Opcode::Illegal,
            Xlen::Rv128 => Opcode::CLqsp,
        },
        0b010 if code.rd() == 0 => Opcode::Illegal,
        0b010 => Opcode::CLwsp,
        0b011 => match xlen {
            Xlen::Rv32 => Opcode::CFlwsp,
            Xlen::Rv64 | Xlen::Rv128 if code.rd() == 0 => Opcode::Illegal,
            Xlen::Rv64 | Xlen::Rv128 => Opcode::CLdsp,
        },
        0b100 => match (code.bit12(), code.rd(), code.rs2()) {
            (0, 0, 0) => Opcode::Illegal,
            (0, _, 0) => Opcode::CJr,
            (0, _, _) => Opcode::CMv,
            (_, 0, 0) => Opcode::CEbreak,
            (_, _, 0) => Opcode::CJalr,
            (_, _, _) => Opcode::CAdd,
        },
        0b101 => match xlen {
            Xlen::Rv32 | Xlen::Rv64 => Opcode::CFsdsp,
            Xlen::Rv128 => Opcode::CSqsp,
        },
        0b110 => Opcode::CSwsp,
        0b111 => match xlen {
            Xlen::Rv32 => Opcode::CFswsp,
            Xlen::Rv64 | Xlen::Rv128 => Opcode::CSdsp,
        },
        _ => Opcode::Illegal,
    }
}

fn standard(code: InstCode, xlen: Xlen) -> Opcode {
    let wide = xlen != Xlen::Rv32;
    match code.major() {
        0b00000 => load(code, wide),
        0b00001 => load_fp(code),
        0b00011 => misc_mem(code),
        0b00100 => op_imm(code, xlen),
        0b00101 => Opcode::Auipc,
        0b00110 if wide => op_imm_32(code),
        0b01000 => store(code, wide),
        0b01001 => store_fp(code),
        0b01011 => amo(code, wide),
        0b01100 => op(code),
        0b01101 => Opcode::Lui,
        0b01110 if wide => op_32(code),
        0b10000 => by_fmt(code, [Opcode::FmaddS, Opcode::FmaddD, Opcode::FmaddH, Opcode::FmaddQ]),
        0b10001 => by_fmt(code, [Opcode::FmsubS, Opcode::FmsubD, Opcode::FmsubH, Opcode::FmsubQ]),
        0b10010 => by_fmt(
            code,
            [Opcode::FnmsubS, Opcode::FnmsubD, Opcode::FnmsubH, Opcode::FnmsubQ],
        ),
        0b10011 => by_fmt(
            code,
            [Opcode::FnmaddS, Opcode::FnmaddD, Opcode::FnmaddH, Opcode::FnmaddQ],
        ),
        0b10100 => op_fp(code, wide),
        0b11000 => branch(code),
        0b11001 if code.funct3() == 0 => Opcode::Jalr,
        0b11011 => Opcode::Jal,
        0b11100 => system(code),
        _ => Opcode::Illegal,
    }
}

/// Picks by the floating-point `fmt` field, ordered single, double, half, quad.
fn by_fmt(code: InstCode, [s, d, h, q]: [Opcode; 4]) -> Opcode {
    match code.fmt() {
        0b00 => s,
        0b01 => d,
        0b10 => h,
        _ => q,
    }
}

fn load(code: InstCode, wide: bool) -> Opcode {
    match code.funct3() {
        0b000 => Opcode::Lb,
        0b001 => Opcode::Lh,
        0b010 => Opcode::Lw,
        0b011 if wide => Opcode::Ld,
        0b100 => Opcode::Lbu,
        0b101 => Opcode::Lhu,
        0b110 if wide => Opcode::Lwu,
        _ => Opcode::Illegal,
    }
}

fn load_fp(code: InstCode) -> Opcode {
    match code.funct3() {
        0b001 => Opcode::Flh,
        0b010 => Opcode::Flw,
        0b011 => Opcode::Fld,
        0b100 => Opcode::Flq,
        _ => Opcode::Illegal,
    }
}

fn store(code: InstCode, wide: bool) -> Opcode {
    match code.funct3() {
        0b000 => Opcode::Sb,
        0b001 => Opcode::Sh,
        0b010 => Opcode::Sw,
        0b011 if wide => Opcode::Sd,
        _ => Opcode::Illegal,
    }
}

fn store_fp(code: InstCode) -> Opcode {
    match code.funct3() {
        0b001 => Opcode::Fsh,
        0b010 => Opcode::Fsw,
        0b011 => Opcode::Fsd,
        0b100 => Opcode::Fsq,
        _ => Opcode::Illegal,
    }
}

fn misc_mem(code: InstCode) -> Opcode {
    match code.funct3() {
        0b000 => Opcode::Fence,
        0b001 => Opcode::FenceI,
        _ => Opcode::Illegal,
    }
}

/// `slli`/`srli`/`srai` keep the shift amount in the low bits of the
/// immediate and the operation in `imm[11:7]`; the shift amount may only be
/// as wide as the register.
fn shift_imm(code: InstCode, xlen: Xlen, logical: Opcode, arithmetic: Opcode) -> Opcode {
    let fits = match xlen {
        Xlen::Rv32 => code.extract(25..=26) == 0,
        Xlen::Rv64 => code.extract(26..=26) == 0,
        Xlen::Rv128 => true,
    };
    if !fits {
        return Opcode::Illegal;
    }
    match code.funct5() {
        0b00000 => logical,
        0b01000 => arithmetic,
        _ => Opcode::Illegal,
    }
}

fn op_imm(code: InstCode, xlen: Xlen) -> Opcode {
    match code.funct3() {
        0b000 => Opcode::Addi,
        0b001 => shift_imm(code, xlen, Opcode::Slli, Opcode::Illegal),
        0b010 => Opcode::Slti,
        0b011 => Opcode::Sltiu,
        0b100 => Opcode::Xori,
        0b101 => shift_imm(code, xlen, Opcode::Srli, Opcode::Srai),
        0b110 => Opcode::Ori,
        _ => Opcode::Andi,
    }
}

fn op_imm_32(code: InstCode) -> Opcode {
    match (code.funct3(), code.funct7()) {
        (0b000, _) => Opcode::Addiw,
        (0b001, 0b0000000) => Opcode::Slliw,
        (0b101, 0b0000000) => Opcode::Srliw,
        (0b101, 0b0100000) => Opcode::Sraiw,
        _ => Opcode::Illegal,
    }
}

fn op(code: InstCode) -> Opcode {
    match (code.funct7(), code.funct3()) {
        (0b0000000, 0b000) => Opcode::Add,
        (0b0000000, 0b001) => Opcode::Sll,
        (0b0000000, 0b010) => Opcode::Slt,
        (0b0000000, 0b011) => Opcode::Sltu,
        (0b0000000, 0b100) => Opcode::Xor,
        (0b0000000, 0b101) => Opcode::Srl,
        (0b0000000, 0b110) => Opcode::Or,
        (0b0000000, 0b111) => Opcode::And,
        (0b0100000, 0b000) => Opcode::Sub,
        (0b0100000, 0b101) => Opcode::Sra,
        (0b0000001, 0b000) => Opcode::Mul,
        (0b0000001, 0b001) => Opcode::Mulh,
        (0b0000001, 0b010) => Opcode::Mulhsu,
        (0b0000001, 0b011) => Opcode::Mulhu,
        (0b0000001, 0b100) => Opcode::Div,
        (0b0000001, 0b101) => Opcode::Divu,
        (0b0000001, 0b110) => Opcode::Rem,
        (0b0000001, 0b111) => Opcode::Remu,
        _ => Opcode::Illegal,
    }
}

fn op_32(code: InstCode) -> Opcode {
    match (code.funct7(), code.funct3()) {
        (0b0000000, 0b000) => Opcode::Addw,
        (0b0000000, 0b001) => Opcode::Sllw,
        (0b0000000, 0b101) => Opcode::Srlw,
        (0b0100000, 0b000) => Opcode::Subw,
        (0b0100000, 0b101) => Opcode::Sraw,
        (0b0000001, 0b000) => Opcode::Mulw,
        (0b0000001, 0b100) => Opcode::Divw,
        (0b0000001, 0b101) => Opcode::Divuw,
        (0b0000001, 0b110) => Opcode::Remw,
        (0b0000001, 0b111) => Opcode::Remuw,
        _ => Opcode::Illegal,
    }
}

fn amo(code: InstCode, wide: bool) -> Opcode {
    // (word, doubleword)
    let (w, d) = match code.funct5() {
        0b00010 if code.rs2() != 0 => return Opcode::Illegal,
        0b00010 => (Opcode::LrW, Opcode::LrD),
        0b00011 => (Opcode::ScW, Opcode::ScD),
        0b00001 => (Opcode::AmoswapW, Opcode::AmoswapD),
        0b00000 => (Opcode::AmoaddW, Opcode::AmoaddD),
        0b00100 => (Opcode::AmoxorW, Opcode::AmoxorD),
        0b01100 => (Opcode::AmoandW, Opcode::AmoandD),
        0b01000 => (Opcode::AmoorW, Opcode::AmoorD),
        0b10000 => (Opcode::AmominW, Opcode::AmominD),
        0b10100 => (Opcode::AmomaxW, Opcode::AmomaxD),
        0b11000 => (Opcode::AmominuW, Opcode::AmominuD),
        0b11100 => (Opcode::AmomaxuW, Opcode::AmomaxuD),
        _ => return Opcode::Illegal,
    };
    match code.funct3() {
        0b010 => w,
        0b011 if wide => d,
        _ => Opcode::Illegal,
    }
}

fn branch(code: InstCode) -> Opcode {
    match code.funct3() {
        0b000 => Opcode::Beq,
        0b001 => Opcode::Bne,
        0b100 => Opcode::Blt,
        0b101 => Opcode::Bge,
        0b110 => Opcode::Bltu,
        0b111 => Opcode::Bgeu,
        _ => Opcode::Illegal,
    }
}

fn system(code: InstCode) -> Opcode {
    match code.funct3() {
        0b000 if code.rd() != 0 || code.rs1() != 0 => Opcode::Illegal,
        0b000 => match code.csr() {
            0x000 => Opcode::Ecall,
            0x001 => Opcode::Ebreak,
            0x00d => Opcode::WrsNto,
            0x01d => Opcode::WrsSto,
            0x102 => Opcode::Sret,
            0x302 => Opcode::Mret,
            0x105 => Opcode::Wfi,
            _ => Opcode::Illegal,
        },
        0b001 => Opcode::Csrrw,
        0b010 => Opcode::Csrrs,
        0b011 => Opcode::Csrrc,
        0b101 => Opcode::Csrrwi,
        0b110 => Opcode::Csrrsi,
        0b111 => Opcode::Csrrci,
        _ => Opcode::Illegal,
    }
}

fn op_fp(code: InstCode, wide: bool) -> Opcode {
    use Opcode::*;

    match code.funct5() {
        0b00000 => by_fmt(code, [FaddS, FaddD, FaddH, FaddQ]),
        0b00001 => by_fmt(code, [FsubS, FsubD, FsubH, FsubQ]),
        0b00010 => by_fmt(code, [FmulS, FmulD, FmulH, FmulQ]),
        0b00011 => by_fmt(code, [FdivS, FdivD, FdivH, FdivQ]),
        0b01011 if code.rs2() == 0 => by_fmt(code, [FsqrtS, FsqrtD, FsqrtH, FsqrtQ]),
        0b00100 => match code.funct3() {
            0b000 => by_fmt(code, [FsgnjS, FsgnjD, FsgnjH, FsgnjQ]),
            0b001 => by_fmt(code, [FsgnjnS, FsgnjnD, FsgnjnH, FsgnjnQ]),
            0b010 => by_fmt(code, [FsgnjxS, FsgnjxD, FsgnjxH, FsgnjxQ]),
            _ => Illegal,
        },
        0b00101 => match code.funct3() {
            0b000 => by_fmt(code, [FminS, FminD, FminH, FminQ]),
            0b001 => by_fmt(code, [FmaxS, FmaxD, FmaxH, FmaxQ]),
            _ => Illegal,
        },
        // destination precision in fmt, source precision in rs2
        0b01000 => match (code.fmt(), code.rs2()) {
            (0b00, 0b01) => FcvtSD,
            (0b00, 0b10) => FcvtSH,
            (0b00, 0b11) => FcvtSQ,
            (0b01, 0b00) => FcvtDS,
            (0b01, 0b10) => FcvtDH,
            (0b01, 0b11) => FcvtDQ,
            (0b10, 0b00) => FcvtHS,
            (0b10, 0b01) => FcvtHD,
            (0b10, 0b11) => FcvtHQ,
            (0b11, 0b00) => FcvtQS,
            (0b11, 0b01) => FcvtQD,
            (0b11, 0b10) => FcvtQH,
            _ => Illegal,
        },
        0b10100 => match code.funct3() {
            0b000 => by_fmt(code, [FleS, FleD, FleH, FleQ]),
            0b001 => by_fmt(code, [FltS, FltD, FltH, FltQ]),
            0b010 => by_fmt(code, [FeqS, FeqD, FeqH, FeqQ]),
            _ => Illegal,
        },
        0b11000 => match code.rs2() {
            0b00000 => by_fmt(code, [FcvtWS, FcvtWD, FcvtWH, FcvtWQ]),
            0b00001 => by_fmt(code, [FcvtWuS, FcvtWuD, FcvtWuH, FcvtWuQ]),
            0b00010 if wide => by_fmt(code, [FcvtLS, FcvtLD, FcvtLH, FcvtLQ]),
            0b00011 if wide => by_fmt(code, [FcvtLuS, FcvtLuD, FcvtLuH, FcvtLuQ]),
            _ => Illegal,
        },
        0b11010 => match code.rs2() {
            0b00000 => by_fmt(code, [FcvtSW, FcvtDW, FcvtHW, FcvtQW]),
            0b00001 => by_fmt(code, [FcvtSWu, FcvtDWu, FcvtHWu, FcvtQWu]),
            0b00010 if wide => by_fmt(code, [FcvtSL, FcvtDL, FcvtHL, FcvtQL]),
            0b00011 if wide => by_fmt(code, [FcvtSLu, FcvtDLu, FcvtHLu, FcvtQLu]),
            _ => Illegal,
        },
        0b11100 if code.rs2() == 0 => match (code.funct3(), code.fmt()) {
            (0b000, 0b00) => FmvXW,
            (0b000, 0b01) if wide => FmvXD,
            (0b000, 0b10) => FmvXH,
            (0b001, _) => by_fmt(code, [FclassS, FclassD, FclassH, FclassQ]),
            _ => Illegal,
        },
        0b11110 if code.rs2() == 0 && code.funct3() == 0 => match code.fmt() {
            0b00 => FmvWX,
            0b01 if wide => FmvDX,
            0b10 => FmvHX,
            _ => Illegal,
        },
        _ => Illegal,
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::Opcode;
    use crate::Xlen::{self, Rv32, Rv64, Rv128};

    #[track_caller]
    fn check(word: u32, xlen: Xlen, expected: Opcode) {
        assert_eq!(
            classify(word, xlen),
            expected,
            "{word:#010x} on {xlen} should be {expected:?}"
        );
    }

    #[test]
    fn base_integer() {
        check(0x00008067, Rv32, Opcode::Jalr);
        check(0x00000013, Rv32, Opcode::Addi);
        check(0x12345537, Rv32, Opcode::Lui);
        check(0x00000517, Rv32, Opcode::Auipc);
        check(0x001000ef, Rv32, Opcode::Jal);
        check(0xfeb50ce3, Rv32, Opcode::Beq);
        check(0xfeb12e23, Rv32, Opcode::Sw);
        check(0x00c58533, Rv32, Opcode::Add);
        check(0x40c58533, Rv32, Opcode::Sub);
        check(0x02c58533, Rv32, Opcode::Mul);
        check(0x0ff0000f, Rv32, Opcode::Fence);
        check(0x0000100f, Rv32, Opcode::FenceI);
        check(0x00000073, Rv32, Opcode::Ecall);
        check(0x00100073, Rv32, Opcode::Ebreak);
        check(0x30200073, Rv32, Opcode::Mret);
        check(0x00d00073, Rv32, Opcode::WrsNto);
        check(0x01d00073, Rv32, Opcode::WrsSto);
    }

    #[test]
    fn funct_fields_are_checked_exactly() {
        // add with a stray funct7 bit
        check(0x00c58533 | (1 << 26), Rv32, Opcode::Illegal);
        // subw with a stray funct7 bit
        check(0x40c5853b | (1 << 27), Rv64, Opcode::Illegal);
        // fence with funct3 = 010
        check(0x0ff0200f, Rv32, Opcode::Illegal);
        // ecall with rd != 0
        check(0x000000f3, Rv32, Opcode::Illegal);
        // jalr with funct3 != 0
        check(0x00009067, Rv32, Opcode::Illegal);
    }

    #[test]
    fn shift_amounts_fit_the_register() {
        // slli a0, a0, 31
        check(0x01f51513, Rv32, Opcode::Slli);
        // slli a0, a0, 32
        check(0x02051513, Rv32, Opcode::Illegal);
        check(0x02051513, Rv64, Opcode::Slli);
        // slli a0, a0, 64
        check(0x04051513, Rv64, Opcode::Illegal);
        check(0x04051513, Rv128, Opcode::Slli);
        // srai a0, a0, 3
        check(0x40355513, Rv32, Opcode::Srai);
        // srai with a reserved imm[10]
        check(0x40355513 | (1 << 29), Rv64, Opcode::Illegal);
    }

    #[test]
    fn wide_only_encodings() {
        // ld a0, 8(a1)
        check(0x0085b503, Rv32, Opcode::Illegal);
        check(0x0085b503, Rv64, Opcode::Ld);
        // lwu a0, 8(a1)
        check(0x0085e503, Rv32, Opcode::Illegal);
        check(0x0085e503, Rv64, Opcode::Lwu);
        // sd a1, 8(sp)
        check(0x00b13423, Rv32, Opcode::Illegal);
        check(0x00b13423, Rv128, Opcode::Sd);
        // addiw a0, a0, 1
        check(0x0015051b, Rv32, Opcode::Illegal);
        check(0x0015051b, Rv64, Opcode::Addiw);
        // addw a0, a1, a2
        check(0x00c5853b, Rv32, Opcode::Illegal);
        check(0x00c5853b, Rv64, Opcode::Addw);
        // amoadd.d a0, a2, (a1)
        check(0x00c5b52f, Rv32, Opcode::Illegal);
        check(0x00c5b52f, Rv64, Opcode::AmoaddD);
    }

    #[test]
    fn atomics() {
        check(0x1005a52f, Rv32, Opcode::LrW);
        // lr.w with rs2 != 0
        check(0x10c5a52f, Rv32, Opcode::Illegal);
        check(0x18c5a52f, Rv32, Opcode::ScW);
        check(0x06c5a52f, Rv32, Opcode::AmoaddW);
        check(0xe0c5a52f, Rv32, Opcode::AmomaxuW);
    }

    #[test]
    fn floating_point() {
        check(0x0085a507, Rv32, Opcode::Flw);
        check(0x0085b507, Rv32, Opcode::Fld);
        check(0x0085c507, Rv32, Opcode::Flq);
        check(0x00859507, Rv32, Opcode::Flh);
        check(0x00c5f553, Rv32, Opcode::FaddS);
        check(0x02c5f553, Rv32, Opcode::FaddD);
        check(0x04c5f553, Rv32, Opcode::FaddH);
        check(0x06c5f553, Rv32, Opcode::FaddQ);
        check(0xe0058553, Rv32, Opcode::FmvXW);
        check(0xf0058553, Rv32, Opcode::FmvWX);
        check(0xe2058553, Rv32, Opcode::Illegal);
        check(0xe2058553, Rv64, Opcode::FmvXD);
        check(0xe0059553, Rv32, Opcode::FclassS);
        // fcvt.d.s fa0, fa1
        check(0x42058553, Rv32, Opcode::FcvtDS);
        // fcvt.s.d fa0, fa1
        check(0x40158553, Rv32, Opcode::FcvtSD);
        // fcvt.s.s is not a conversion
        check(0x40058553, Rv32, Opcode::Illegal);
        // fcvt.l.s needs rv64
        check(0xc0258553, Rv32, Opcode::Illegal);
        check(0xc0258553, Rv64, Opcode::FcvtLS);
    }

    #[test]
    fn fused_ops_follow_fmt() {
        // fmsub.{s,d,h,q} fa0, fa1, fa2, fa3
        check(0x68c58547, Rv32, Opcode::FmsubS);
        check(0x6ac58547, Rv32, Opcode::FmsubD);
        check(0x6cc58547, Rv32, Opcode::FmsubH);
        check(0x6ec58547, Rv32, Opcode::FmsubQ);
        check(0x6cc5854b, Rv32, Opcode::FnmsubH);
        check(0x6ec5854f, Rv32, Opcode::FnmaddQ);
    }

    #[test]
    fn compressed_width_aliases() {
        // funct3 = 001 in quadrant 0
        check(0x2588, Rv32, Opcode::CFld);
        check(0x2588, Rv64, Opcode::CFld);
        check(0x2588, Rv128, Opcode::CLq);
        // funct3 = 011 in quadrant 0
        check(0x6588, Rv32, Opcode::CFlw);
        check(0x6588, Rv64, Opcode::CLd);
        check(0x6588, Rv128, Opcode::CLd);
        // funct3 = 001 in quadrant 1
        check(0x2505, Rv32, Opcode::CJal);
        check(0x2505, Rv64, Opcode::CAddiw);
        // funct3 = 011 in quadrant 2
        check(0x6522, Rv32, Opcode::CFlwsp);
        check(0x6522, Rv64, Opcode::CLdsp);
        // funct3 = 111 in quadrant 2
        check(0xe406, Rv32, Opcode::CFswsp);
        check(0xe406, Rv64, Opcode::CSdsp);
        // funct3 = 101 in quadrant 2
        check(0xa406, Rv64, Opcode::CFsdsp);
        check(0xa406, Rv128, Opcode::CSqsp);
    }

    #[test]
    fn compressed_reserved() {
        check(0x0000, Rv32, Opcode::Illegal);
        // c.addi4spn with a zero immediate
        check(0x0004, Rv32, Opcode::Illegal);
        // c.addi16sp with a zero immediate
        check(0x6101, Rv32, Opcode::Illegal);
        // c.lui with a zero immediate
        check(0x6501, Rv32, Opcode::Illegal);
        // c.lwsp zero, 0(sp)
        check(0x4002, Rv32, Opcode::Illegal);
        // c.jr zero
        check(0x8002, Rv32, Opcode::Illegal);
        // c.addiw zero, 1
        check(0x2005, Rv64, Opcode::Illegal);
        // c.srli a0, 32 is reserved on rv32 only
        check(0x9101, Rv32, Opcode::Illegal);
        check(0x9101, Rv64, Opcode::CSrli);
        // c.subw on rv32
        check(0x9d0d, Rv32, Opcode::Illegal);
        check(0x9d0d, Rv64, Opcode::CSubw);
        // reserved ALU sub-op
        check(0x9d4d, Rv64, Opcode::Illegal);
    }

    #[test]
    fn compressed_common() {
        check(0x0001, Rv32, Opcode::CNop);
        check(0x1101, Rv32, Opcode::CAddi);
        check(0x4505, Rv32, Opcode::CLi);
        check(0x617d, Rv32, Opcode::CAddi16sp);
        check(0x6505, Rv32, Opcode::CLui);
        check(0x0808, Rv32, Opcode::CAddi4spn);
        check(0x41c8, Rv32, Opcode::CLw);
        check(0xc1c8, Rv32, Opcode::CSw);
        check(0x8d0d, Rv32, Opcode::CSub);
        check(0x8d2d, Rv32, Opcode::CXor);
        check(0x8d4d, Rv32, Opcode::COr);
        check(0x8d6d, Rv32, Opcode::CAnd);
        check(0x8905, Rv32, Opcode::CAndi);
        check(0x8505, Rv32, Opcode::CSrai);
        check(0xbffd, Rv32, Opcode::CJ);
        check(0xd965, Rv32, Opcode::CBeqz);
        check(0xe119, Rv32, Opcode::CBnez);
        check(0x050a, Rv32, Opcode::CSlli);
        check(0x4532, Rv32, Opcode::CLwsp);
        check(0xce06, Rv32, Opcode::CSwsp);
        check(0x8082, Rv32, Opcode::CJr);
        check(0x852e, Rv32, Opcode::CMv);
        check(0x9002, Rv32, Opcode::CEbreak);
        check(0x9502, Rv32, Opcode::CJalr);
        check(0x952e, Rv32, Opcode::CAdd);
    }

    #[test]
    fn longer_encodings_are_illegal() {
        // 48-bit, 64-bit and larger prefixes
        check(0x0000_001f, Rv64, Opcode::Illegal);
        check(0x0000_003f, Rv64, Opcode::Illegal);
        check(0x0000_007f, Rv64, Opcode::Illegal);
    }
}
