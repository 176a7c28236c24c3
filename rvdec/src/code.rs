//! Bit-field views over raw instruction words.
//!
//! Every immediate is described as a list of `(source bits, destination shift)`
//! pairs and gathered with [`InstCode::immediate_s`] / [`InstCodeC::immediate_s`].
//! Bits that an encoding never stores (the low zero bit of branch and jump
//! offsets, the scaled low bits of compressed loads) are simply never written,
//! so they stay zero.

use std::ops::RangeInclusive;

/// Sign-extends the low `size` bits of `value` using an arithmetic shift.
pub(crate) fn sign_extend(value: u32, size: u32) -> i32 {
    let right = u32::BITS - size;
    ((value << right) as i32) >> right
}

/// A 32-bit (quadrant `11`) instruction word.
#[derive(Clone, Copy)]
pub(crate) struct InstCode(pub(crate) u32);

impl InstCode {
    pub(crate) fn extract(self, range: RangeInclusive<u32>) -> u32 {
        let end_span = 32 - (range.end() + 1);
        (self.0 << (end_span)) >> (end_span + range.start())
    }
    fn immediate_u(self, mappings: &[(RangeInclusive<u32>, u32)]) -> u32 {
        let mut imm = 0;
        for (from, to) in mappings {
            let value = self.extract(from.clone());
            imm |= value << to;
        }
        imm
    }
    fn immediate_s(self, mappings: &[(RangeInclusive<u32>, u32)]) -> i32 {
        let mut imm = 0;
        let mut size = 0;
        for (from, to) in mappings {
            let value = self.extract(from.clone());
            imm |= value << to;
            let this_size = from.end() - from.start() + 1;
            size = size.max(*to + this_size);
        }
        sign_extend(imm, size)
    }

    /// Major opcode, bits 6:2 (the quadrant bits are implied).
    pub(crate) fn major(self) -> u32 {
        self.extract(2..=6)
    }
    pub(crate) fn funct3(self) -> u32 {
        self.extract(12..=14)
    }
    pub(crate) fn funct7(self) -> u32 {
        self.extract(25..=31)
    }
    /// Upper five bits of funct7: the AMO operation and the OP-FP operation.
    pub(crate) fn funct5(self) -> u32 {
        self.extract(27..=31)
    }
    /// Floating-point precision: 00 single, 01 double, 10 half, 11 quad.
    pub(crate) fn fmt(self) -> u32 {
        self.extract(25..=26)
    }
    pub(crate) fn rd(self) -> u32 {
        self.extract(7..=11)
    }
    pub(crate) fn rs1(self) -> u32 {
        self.extract(15..=19)
    }
    pub(crate) fn rs2(self) -> u32 {
        self.extract(20..=24)
    }
    pub(crate) fn rs3(self) -> u32 {
        self.extract(27..=31)
    }
    pub(crate) fn rm(self) -> u32 {
        self.funct3()
    }
    pub(crate) fn aq(self) -> bool {
        self.extract(26..=26) == 1
    }
    pub(crate) fn rl(self) -> bool {
        self.extract(25..=25) == 1
    }
    pub(crate) fn pred(self) -> u32 {
        self.extract(24..=27)
    }
    pub(crate) fn succ(self) -> u32 {
        self.extract(20..=23)
    }
    /// The 12-bit CSR number, which sits where the I-type immediate would.
    pub(crate) fn csr(self) -> u32 {
        self.extract(20..=31)
    }
    pub(crate) fn shamt5(self) -> u32 {
        self.extract(20..=24)
    }
    pub(crate) fn shamt7(self) -> u32 {
        self.extract(20..=26)
    }

    pub(crate) fn imm_i(self) -> i32 {
        self.immediate_s(&[(20..=31, 0)])
    }
    pub(crate) fn imm_s(self) -> i32 {
        self.immediate_s(&[(25..=31, 5), (7..=11, 0)])
    }
    pub(crate) fn imm_b(self) -> i32 {
        self.immediate_s(&[(31..=31, 12), (7..=7, 11), (25..=30, 5), (8..=11, 1)])
    }
    pub(crate) fn imm_u(self) -> i32 {
        self.immediate_u(&[(12..=31, 12)]) as i32
    }
    pub(crate) fn imm_j(self) -> i32 {
        self.immediate_s(&[(31..=31, 20), (21..=30, 1), (20..=20, 11), (12..=19, 12)])
    }
}

/// A 16-bit compressed instruction parcel.
#[derive(Clone, Copy)]
pub(crate) struct InstCodeC(pub(crate) u16);

impl InstCodeC {
    pub(crate) fn extract(self, range: RangeInclusive<u32>) -> u32 {
        let end_span = u16::BITS - (range.end() + 1);
        ((self.0 << (end_span)) >> (end_span + range.start())) as u32
    }
    fn immediate_u(self, mappings: &[(RangeInclusive<u32>, u32)]) -> u32 {
        let mut imm = 0;
        for (from, to) in mappings {
            let value = self.extract(from.clone());
            imm |= value << to;
        }
        imm
    }
    fn immediate_s(self, mappings: &[(RangeInclusive<u32>, u32)]) -> i32 {
        let mut imm = 0;
        let mut size = 0;
        for (from, to) in mappings {
            debug_assert!(from.start() <= from.end());
            let value = self.extract(from.clone());
            imm |= value << to;
            let this_size = from.end() - from.start() + 1;
            size = size.max(*to + this_size);
        }
        sign_extend(imm, size)
    }

    pub(crate) fn funct3(self) -> u32 {
        self.extract(13..=15)
    }
    pub(crate) fn funct2(self) -> u32 {
        self.extract(10..=11)
    }
    pub(crate) fn bit12(self) -> u32 {
        self.extract(12..=12)
    }
    /// rd/rs1 (7..=11)
    pub(crate) fn rd(self) -> u32 {
        self.extract(7..=11)
    }
    /// rs2 (2..=6)
    pub(crate) fn rs2(self) -> u32 {
        self.extract(2..=6)
    }
    /// rs1'/rd' (7..=9)
    pub(crate) fn rs1_short(self) -> u32 {
        // map to x8..=x15
        self.extract(7..=9) + 8
    }
    /// rs2'/rd' (2..=4)
    pub(crate) fn rs2_short(self) -> u32 {
        // map to x8..=x15
        self.extract(2..=4) + 8
    }

    /// CI: addi, addiw, li, andi
    pub(crate) fn imm_ci(self) -> i32 {
        self.immediate_s(&[(2..=6, 0), (12..=12, 5)])
    }
    /// CI shift amount, unsigned.
    pub(crate) fn shamt(self) -> u32 {
        self.immediate_u(&[(2..=6, 0), (12..=12, 5)])
    }
    pub(crate) fn imm_lui(self) -> i32 {
        self.immediate_s(&[(2..=6, 12), (12..=12, 17)])
    }
    pub(crate) fn imm_addi16sp(self) -> i32 {
        self.immediate_s(&[(2..=2, 5), (3..=4, 7), (5..=5, 6), (6..=6, 4), (12..=12, 9)])
    }
    pub(crate) fn imm_lwsp(self) -> u32 {
        self.immediate_u(&[(12..=12, 5), (4..=6, 2), (2..=3, 6)])
    }
    pub(crate) fn imm_ldsp(self) -> u32 {
        self.immediate_u(&[(12..=12, 5), (5..=6, 3), (2..=4, 6)])
    }
    pub(crate) fn imm_lqsp(self) -> u32 {
        self.immediate_u(&[(12..=12, 5), (6..=6, 4), (2..=5, 6)])
    }
    pub(crate) fn imm_swsp(self) -> u32 {
        self.immediate_u(&[(9..=12, 2), (7..=8, 6)])
    }
    pub(crate) fn imm_sdsp(self) -> u32 {
        self.immediate_u(&[(10..=12, 3), (7..=9, 6)])
    }
    pub(crate) fn imm_sqsp(self) -> u32 {
        self.immediate_u(&[(11..=12, 4), (7..=10, 6)])
    }
    pub(crate) fn imm_addi4spn(self) -> u32 {
        self.immediate_u(&[(5..=5, 3), (6..=6, 2), (7..=10, 6), (11..=12, 4)])
    }
    /// CL/CS word offset
    pub(crate) fn imm_w(self) -> u32 {
        self.immediate_u(&[(10..=12, 3), (5..=5, 6), (6..=6, 2)])
    }
    /// CL/CS doubleword offset
    pub(crate) fn imm_d(self) -> u32 {
        self.immediate_u(&[(10..=12, 3), (5..=6, 6)])
    }
    /// CL/CS quadword offset
    pub(crate) fn imm_q(self) -> u32 {
        self.immediate_u(&[(11..=12, 4), (10..=10, 8), (5..=6, 6)])
    }
    pub(crate) fn imm_j(self) -> i32 {
        self.immediate_s(&[
            (2..=2, 5),
            (3..=5, 1),
            (6..=6, 7),
            (7..=7, 6),
            (8..=8, 10),
            (9..=10, 8),
            (11..=11, 4),
            (12..=12, 11),
        ])
    }
    pub(crate) fn imm_b(self) -> i32 {
        self.immediate_s(&[(2..=2, 5), (3..=4, 1), (5..=6, 6), (10..=11, 3), (12..=12, 8)])
    }
}
