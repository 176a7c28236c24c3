use std::collections::HashSet;

use crate::{Codec, Decoded, IsCompressed, Opcode, Xlen, decode, decode_at};

const XLENS: [Xlen; 3] = [Xlen::Rv32, Xlen::Rv64, Xlen::Rv128];

/// Checks everything that must hold for any decoded word, legal or not.
#[track_caller]
fn check_invariants(inst: &Decoded) {
    let word = inst.word;
    let expected_len = if word & 0b11 == 0b11 { 4 } else { 2 };
    assert_eq!(inst.len(), expected_len, "{word:#x}");
    assert_eq!(inst.is_compressed, IsCompressed::from_word(word));

    if !inst.is_illegal() {
        assert_eq!(inst.opcode.is_compressed(), expected_len == 2, "{word:#x}");
    }

    for reg in [inst.rd, inst.rs1, inst.rs2, inst.rs3] {
        assert!(reg < 32, "{word:#x}: register {reg}");
    }

    let short = 8..=15;
    match inst.opcode.codec() {
        Codec::ClLw | Codec::ClLd | Codec::ClLq => {
            assert!(short.contains(&inst.rd) && short.contains(&inst.rs1), "{word:#x}");
        }
        Codec::CsSw | Codec::CsSd | Codec::CsSq => {
            assert!(short.contains(&inst.rs1) && short.contains(&inst.rs2), "{word:#x}");
        }
        Codec::Cs => {
            assert!(short.contains(&inst.rd) && short.contains(&inst.rs2), "{word:#x}");
            assert_eq!(inst.rd, inst.rs1);
        }
        Codec::Cb => assert!(short.contains(&inst.rs1), "{word:#x}"),
        Codec::CbImm | Codec::CbSh6 | Codec::Ciw4spn => {
            assert!(short.contains(&inst.rd), "{word:#x}")
        }
        Codec::Sb | Codec::Uj | Codec::Cj | Codec::CjJal => {
            assert_eq!(inst.imm % 2, 0, "{word:#x}: odd offset {}", inst.imm)
        }
        _ => {}
    }

    let text = inst.render();
    assert!(text.starts_with(inst.opcode.mnemonic()), "{word:#x}: {text}");
    assert!(!text.ends_with('\t'), "{word:#x}: {text:?}");
    assert_eq!(text, inst.render());
}

#[test]
fn every_parcel() {
    for xlen in XLENS {
        for parcel in 0..=u16::MAX {
            if parcel & 0b11 == 0b11 {
                continue;
            }
            let inst = decode(parcel as u32, xlen);
            check_invariants(&inst);
        }
    }
}

#[test]
fn upper_half_is_ignored_for_compressed() {
    for xlen in XLENS {
        for parcel in (0..=u16::MAX).step_by(7).filter(|p| p & 0b11 != 0b11) {
            let low = decode(parcel as u32, xlen);
            let high = decode(0xa5a5_0000 | parcel as u32, xlen);
            assert_eq!(low, high, "{parcel:#06x}");
        }
    }
}

#[test]
fn every_opcode_is_reachable() {
    let mut seen = HashSet::new();
    for xlen in XLENS {
        for parcel in 0..=u16::MAX {
            seen.insert(crate::classify(parcel as u32, xlen));
        }
        // every major opcode and funct3, funct7 and rs2 combination
        for fields in 0u32..(1 << 20) {
            let major = fields & 0b11111;
            let funct3 = (fields >> 5) & 0b111;
            let rs2_funct7 = fields >> 8;
            let word = (rs2_funct7 << 20) | (funct3 << 12) | (major << 2) | 0b11;
            seen.insert(crate::classify(word, xlen));
        }
    }
    for op in Opcode::ALL {
        assert!(seen.contains(op), "{op:?} is never produced");
    }
}

#[test]
fn compressed_fields_are_consistent_with_expansion() {
    // c.addi4spn a0, sp, 16 is addi a0, sp, 16
    let short = decode(0x0808, Xlen::Rv32);
    let long = decode(0x01010513, Xlen::Rv32);
    assert_eq!(short.render(), long.render());

    // c.lw a0, 4(a1) is lw a0, 4(a1)
    let short = decode(0x41c8, Xlen::Rv32);
    let long = decode(0x0045a503, Xlen::Rv32);
    assert_eq!(short.render(), long.render());
}

#[test]
fn nop_is_only_the_zero_register_form() {
    assert_eq!(decode(0x0001, Xlen::Rv32).opcode, Opcode::CNop);
    // c.addi a0, 0
    assert_eq!(decode(0x0501, Xlen::Rv32).opcode, Opcode::CAddi);
}

#[test]
fn decoded_record_fields() {
    let inst = decode_at(0x00008067, 0x8000_0000, Xlen::Rv32);
    assert_eq!(inst.opcode, Opcode::Jalr);
    assert_eq!((inst.rd, inst.rs1, inst.imm), (0, 1, 0));
    assert_eq!(inst.address, 0x8000_0000);
    assert_eq!(inst.len(), 4);
    assert!(!inst.is_illegal());

    let inst = decode(0x0000, Xlen::Rv64);
    assert!(inst.is_illegal());
    assert_eq!(inst.len(), 2);
}

#[test]
fn register_names() {
    use crate::{FReg, Reg};
    let int = (0..32).map(|i| Reg(i).to_string()).collect::<Vec<_>>();
    assert_eq!(int[0], "zero");
    assert_eq!(int[8], "s0");
    assert_eq!(int[17], "a7");
    assert_eq!(int[27], "s11");
    assert_eq!(int[31], "t6");
    let float = (0..32).map(|i| FReg(i).to_string()).collect::<Vec<_>>();
    assert_eq!(float[0], "ft0");
    assert_eq!(float[8], "fs0");
    assert_eq!(float[10], "fa0");
    assert_eq!(float[27], "fs11");
    assert_eq!(float[31], "ft11");
    assert_eq!(float.iter().collect::<HashSet<_>>().len(), 32);
}

#[test]
fn xlen_from_str() {
    assert_eq!("rv32".parse::<Xlen>(), Ok(Xlen::Rv32));
    assert_eq!("RV64".parse::<Xlen>(), Ok(Xlen::Rv64));
    assert_eq!("128".parse::<Xlen>(), Ok(Xlen::Rv128));
    let err = "rv16".parse::<Xlen>().unwrap_err();
    assert_eq!(err.input, "rv16");
    assert_eq!(Xlen::Rv128.to_string(), "rv128");
}

#[test]
#[cfg_attr(not(slow_tests), ignore)]
fn exhaustive_decode() {
    use rayon::prelude::*;

    for xlen in XLENS {
        (0..=u32::MAX)
            .into_par_iter()
            .filter(|word| word & 0b11 == 0b11)
            .for_each(|word| check_invariants(&decode(word, xlen)));
    }
}
