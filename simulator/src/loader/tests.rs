use libe20isa::MEM_SIZE;

use super::{load_machine_code, LoadError};

#[test]
fn loads_a_valid_listing() {
    let source = "ram[0] = 16'b0010000010000101;  // movi $1,5\n\
                  ram[1] = 16'b0100000000000001;  // halt\n";

    assert_eq!(load_machine_code(source).unwrap(), vec![0x2085, 0x4001]);
}

#[test]
fn an_empty_file_is_an_empty_program() {
    assert_eq!(load_machine_code("").unwrap(), vec![]);
}

#[test]
fn rejects_garbage_lines() {
    let err = load_machine_code("movi $1,5").unwrap_err();

    assert!(matches!(err, LoadError::MalformedLine(_)));
}

#[test]
fn rejects_blank_lines() {
    let source = "ram[0] = 16'b0000000000000000;\n\n";

    assert!(matches!(
        load_machine_code(source).unwrap_err(),
        LoadError::MalformedLine(_)
    ));
}

#[test]
fn rejects_payloads_that_are_not_16_binary_digits() {
    for line in [
        "ram[0] = 16'b00100000100001;",    // too short
        "ram[0] = 16'b00100000100001010;", // too long
        "ram[0] = 16'b0010000010000102;",  // not binary
    ] {
        assert!(
            matches!(load_machine_code(line).unwrap_err(), LoadError::MalformedLine(_)),
            "accepted {:?}",
            line
        );
    }
}

#[test]
fn rejects_out_of_sequence_addresses() {
    let source = "ram[0] = 16'b0000000000000000;\nram[2] = 16'b0000000000000000;";

    assert_eq!(
        load_machine_code(source).unwrap_err(),
        LoadError::AddressOutOfSequence(2)
    );
}

#[test]
fn rejects_addresses_that_do_not_start_at_zero() {
    let source = "ram[1] = 16'b0000000000000000;";

    assert_eq!(
        load_machine_code(source).unwrap_err(),
        LoadError::AddressOutOfSequence(1)
    );
}

#[test]
fn rejects_a_program_bigger_than_memory() {
    let source: String = (0..=MEM_SIZE)
        .map(|addr| format!("ram[{}] = 16'b0000000000000000;\n", addr))
        .collect();

    assert_eq!(load_machine_code(&source).unwrap_err(), LoadError::ProgramTooBig);
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(
        LoadError::MalformedLine("x".to_string()).to_string(),
        "Can't parse line: x"
    );
    assert_eq!(
        LoadError::AddressOutOfSequence(2).to_string(),
        "Memory addresses encountered out of sequence: 2"
    );
    assert_eq!(
        LoadError::ProgramTooBig.to_string(),
        "Program too big for memory"
    );
}
