use ethernity_core::Error;
use ethernity_disasm::{
    disassemble, disassemble_hex, opcodes::OpcodeTable, parse_instructions, sniff_source,
};

/// Deterministic pseudo-random bytecode, biased towards push opcodes.
fn sample_code(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let b = (state >> 33) as u8;
            if b % 4 == 0 { 0x60 + (b % 32) } else { b }
        })
        .collect()
}

#[test]
fn scenario_push1() {
    let res = disassemble_hex("6001", false).unwrap();
    assert_eq!(res.assembly, vec!["0000: PUSH1 0x01"]);
    assert_eq!(res.tokens, vec!["PUSH1"]);
    let res = disassemble_hex("6001", true).unwrap();
    assert_eq!(res.tokens, vec!["PUSH1_0x01"]);
}

#[test]
fn scenario_truncated_push1() {
    let res = disassemble(&[0x60], false);
    assert_eq!(res.assembly_text(), "0000: PUSH1 0x  ; TRUNCATED (0/1)");
    assert_eq!(res.tokens, vec!["PUSH1"]);
}

#[test]
fn scenario_stop_and_unknown() {
    assert_eq!(disassemble(&[0x00], false).assembly, vec!["0000: STOP"]);
    let res = disassemble(&[0xab], false);
    assert_eq!(res.assembly, vec!["0000: UNKNOWN_0xab"]);
    assert_eq!(res.tokens, vec!["UNKNOWN_0xab"]);
}

#[test]
fn scenario_empty_input() {
    let (asm, tokens) = disassemble(&[], true).into_parts();
    assert!(asm.is_empty());
    assert!(tokens.is_empty());
}

#[test]
fn scenario_prefixed_mixed_case_text() {
    let (_, hex) = sniff_source(b"0X6001");
    assert_eq!(
        disassemble_hex(&hex, true).unwrap(),
        disassemble(&[0x60, 0x01], true)
    );
}

#[test]
fn invalid_hex_is_rejected() {
    let err = disassemble_hex("60xy00", false).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { len: 6, .. }));
}

#[test]
fn instructions_tile_the_input() {
    for seed in 0..64 {
        let code = sample_code(seed, 1 + (seed as usize * 7) % 200);
        let insts = parse_instructions(&code);
        let mut expected = 0;
        for ins in &insts {
            assert_eq!(ins.pos, expected);
            expected += ins.size();
        }
        assert_eq!(expected, code.len());

        let res = disassemble(&code, true);
        assert_eq!(res.assembly.len(), insts.len());
        assert_eq!(res.tokens.len(), insts.len());
    }
}

#[test]
fn truncation_only_at_the_end() {
    for seed in 0..64 {
        let code = sample_code(seed, 50);
        let insts = parse_instructions(&code);
        for (idx, ins) in insts.iter().enumerate() {
            let remaining = code.len() - ins.pos - 1;
            let short = ins.is_push() && remaining < ins.declared_width();
            assert_eq!(ins.truncated, short);
            if ins.truncated {
                assert_eq!(idx, insts.len() - 1);
                assert_eq!(ins.immediate.as_deref(), Some(&code[ins.pos + 1..]));
            }
        }
    }
}

#[test]
fn push_mnemonic_reflects_declared_width() {
    for op in 0x60..=0x7fu8 {
        let n = (op - 0x5f) as usize;
        let res = disassemble(&[op, 0xee], false);
        assert_eq!(res.tokens, vec![format!("PUSH{}", n)]);
        let expected = if n == 1 {
            "0000: PUSH1 0xee".to_string()
        } else {
            format!("0000: PUSH{} 0xee  ; TRUNCATED (1/{})", n, n)
        };
        assert_eq!(res.assembly, vec![expected]);
    }
}

#[test]
fn decode_is_deterministic() {
    let code = sample_code(7, 300);
    assert_eq!(disassemble(&code, true), disassemble(&code, true));
    assert_eq!(disassemble(&code, false), disassemble(&code, false));
}

#[test]
fn unassigned_bytes_decode_to_sentinel() {
    let table = OpcodeTable::global();
    for op in 0..=255u8 {
        if table.is_known(op) {
            continue;
        }
        let res = disassemble(&[op], false);
        assert_eq!(res.tokens, vec![format!("UNKNOWN_0x{:02x}", op)]);
    }
}

#[test]
fn tokens_follow_push_flag() {
    let code = hex::decode("6080604052348015600e575f80fd5b50").unwrap();
    let bare = disassemble(&code, false);
    let fused = disassemble(&code, true);
    assert_eq!(
        bare.tokens,
        vec![
            "PUSH1", "PUSH1", "MSTORE", "CALLVALUE", "DUP1", "ISZERO", "PUSH1", "JUMPI",
            "UNKNOWN_0x5f", "DUP1", "REVERT", "JUMPDEST", "POP",
        ]
    );
    assert_eq!(&fused.tokens[..3], &["PUSH1_0x80", "PUSH1_0x40", "MSTORE"]);
    assert_eq!(fused.tokens[6], "PUSH1_0x0e");
    assert_eq!(bare.assembly, fused.assembly);
}
