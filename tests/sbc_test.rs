//! Tests for the SBC (Subtract with Carry) instruction.
//!
//! The carry flag follows the borrow rule: C is set after the operation
//! iff no borrow occurred, i.e. A was at least operand + borrow-in.

use ricoh2a03::{CPU, FLAG_C};

fn setup(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    for (i, &byte) in program.iter().enumerate() {
        cpu.bus_mut().write(0x0600 + i as u16, byte).unwrap();
    }
    cpu.set_pc(0x0600);
    cpu
}

// ========== Basic Operation ==========

#[test]
fn test_sbc_immediate_basic() {
    let mut cpu = setup(&[0xE9, 0x05]); // SBC #$05
    cpu.set_a(0x10);
    cpu.set_flag(FLAG_C, true); // no incoming borrow

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0B);
    assert!(cpu.flag_c()); // no borrow occurred
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_sbc_with_incoming_borrow() {
    let mut cpu = setup(&[0xE9, 0x05]);
    cpu.set_a(0x10);
    cpu.set_flag(FLAG_C, false); // borrow in

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0A); // 0x10 - 0x05 - 1
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_to_zero() {
    let mut cpu = setup(&[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag(FLAG_C, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

// ========== Borrow and Overflow ==========

#[test]
fn test_sbc_borrow_clears_carry() {
    // SEC; LDA #$50; SBC #$F0: subtrahend is larger, so a borrow occurs
    let mut cpu = setup(&[0x38, 0xA9, 0x50, 0xE9, 0xF0]);

    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0x60);
    assert!(!cpu.flag_c()); // borrow
    assert!(!cpu.flag_v()); // +80 - (-16) = +96 fits in a signed byte
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_sbc_signed_overflow() {
    // SEC; LDA #$D0; SBC #$70: -48 - 112 = -160 underflows signed range
    let mut cpu = setup(&[0x38, 0xA9, 0xD0, 0xE9, 0x70]);

    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0x60);
    assert!(cpu.flag_c()); // unsigned: 0xD0 >= 0x70, no borrow
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_sbc_overflow_positive_minus_negative() {
    // +80 - (-112) = +192: overflow into the negative range
    let mut cpu = setup(&[0x38, 0xA9, 0x50, 0xE9, 0x90]);

    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0xC0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c()); // 0x50 < 0x90 unsigned, borrow
}

#[test]
fn test_sbc_equal_operands_with_borrow_in() {
    // A - A - 1 wraps to 0xFF with a borrow out
    let mut cpu = setup(&[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag(FLAG_C, false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

// ========== Addressing Modes ==========

#[test]
fn test_sbc_zero_page() {
    let mut cpu = setup(&[0xE5, 0x10]); // SBC $10
    cpu.bus_mut().write(0x0010, 0x01).unwrap();
    cpu.set_a(0x03);
    cpu.set_flag(FLAG_C, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn test_sbc_indirect_indexed() {
    let mut cpu = setup(&[0xF1, 0x20]); // SBC ($20),Y
    cpu.bus_mut().write(0x0020, 0x00).unwrap();
    cpu.bus_mut().write(0x0021, 0x10).unwrap();
    cpu.set_y(0x05);
    cpu.bus_mut().write(0x1005, 0x02).unwrap();
    cpu.set_a(0x09);
    cpu.set_flag(FLAG_C, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.pc(), 0x0602);
}
