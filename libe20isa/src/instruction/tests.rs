use crate::Word;

use super::*;

#[test]
fn fields_have_fixed_offsets() {
    let word = 0b000_001_010_011_0100;

    assert_eq!(fields::opcode(word), 0);
    assert_eq!(fields::reg_a(word), 1);
    assert_eq!(fields::reg_b(word), 2);
    assert_eq!(fields::reg_c(word), 3);
    assert_eq!(fields::funct(word), 4);
}

#[test]
fn signed_immediates_round_trip() {
    for value in -64..=63 {
        let word = (value as Word) & 0x7f;
        assert_eq!(fields::imm_signed(word), value);
    }
}

#[test]
fn unsigned_immediates_are_not_sign_extended() {
    let word = 0b111_1111;

    assert_eq!(fields::imm_unsigned(word), 127);
    assert_eq!(fields::imm_signed(word), -1);
}

#[test]
fn decodes_one_of_each_class() {
    let cases = [
        (0b000_001_010_011_0001, Instruction::Sub { src_a: 1, src_b: 2, dst: 3 }),
        (0b001_000_001_0000101, Instruction::Addi { src: 0, dst: 1, imm: 5 }),
        (0b010_0000000000000, Instruction::J { target: 0 }),
        (0b011_0000000001010, Instruction::Jal { target: 10 }),
        (0b100_001_010_1111111, Instruction::Lw { addr: 1, dst: 2, imm: -1 }),
        (0b101_001_010_0000010, Instruction::Sw { addr: 1, src: 2, imm: 2 }),
        (0b110_011_100_0000001, Instruction::Jeq { src_a: 3, src_b: 4, rel: 1 }),
        (0b111_001_010_1000000, Instruction::Slti { src: 1, dst: 2, imm: 64 }),
    ];

    for (word, expected) in cases {
        assert_eq!(Instruction::decode(word), expected);
    }
}

#[test]
fn spare_function_selectors_all_decode_as_jr() {
    for funct in 5..=15 {
        let word = 0b000_110_000_000_0000 | funct;
        assert_eq!(Instruction::decode(word), Instruction::Jr { src: 6 });
    }
}

#[test]
fn encode_is_the_inverse_of_decode() {
    let instructions = [
        Instruction::Add { src_a: 1, src_b: 2, dst: 3 },
        Instruction::Slt { src_a: 7, src_b: 0, dst: 1 },
        Instruction::Jr { src: 5 },
        Instruction::Addi { src: 1, dst: 2, imm: -64 },
        Instruction::J { target: 8191 },
        Instruction::Jal { target: 0 },
        Instruction::Lw { addr: 3, dst: 4, imm: 63 },
        Instruction::Sw { addr: 3, src: 4, imm: -1 },
        Instruction::Jeq { src_a: 6, src_b: 7, rel: -10 },
        Instruction::Slti { src: 1, dst: 2, imm: 127 },
    ];

    for instruction in instructions {
        assert_eq!(Instruction::decode(instruction.encode()), instruction);
    }
}

#[test]
fn jr_encodes_with_its_canonical_selector() {
    assert_eq!(Instruction::Jr { src: 5 }.encode(), 0b000_101_000_000_1000);
}

#[test]
fn displays_e20_assembly() {
    let cases: [(Word, &str); 5] = [
        (0b000_001_010_011_0000, "add $3, $1, $2"),
        (0b000_101_000_000_1000, "jr $5"),
        (0b100_001_010_1111100, "lw $2, -4($1)"),
        (0b011_0000000001010, "jal 10"),
        (0b111_001_010_0000011, "slti $2, $1, 3"),
    ];

    for (word, rendered) in cases {
        assert_eq!(Instruction::decode(word).to_string(), rendered);
    }
}
