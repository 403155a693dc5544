//! Tests for the flag manipulation instructions CLC, SEC, CLI, SEI, CLD,
//! SED, CLV.

use ricoh2a03::{CPU, FLAG_C, FLAG_D, FLAG_I, FLAG_V};

fn setup(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    for (i, &byte) in program.iter().enumerate() {
        cpu.bus_mut().write(0x0600 + i as u16, byte).unwrap();
    }
    cpu.set_pc(0x0600);
    cpu
}

#[test]
fn test_clc_sec() {
    let mut cpu = setup(&[0x38, 0x18]); // SEC; CLC

    cpu.step().unwrap();
    assert!(cpu.flag_c());

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_cli_sei() {
    let mut cpu = setup(&[0x58, 0x78]); // CLI; SEI

    // Reset state has I set
    assert!(cpu.flag_i());

    cpu.step().unwrap();
    assert!(!cpu.flag_i());

    cpu.step().unwrap();
    assert!(cpu.flag_i());
}

#[test]
fn test_cld_sed() {
    let mut cpu = setup(&[0xF8, 0xD8]); // SED; CLD

    cpu.step().unwrap();
    assert!(cpu.flag_d());

    cpu.step().unwrap();
    assert!(!cpu.flag_d());
}

#[test]
fn test_clv() {
    let mut cpu = setup(&[0xB8]); // CLV
    cpu.set_flag(FLAG_V, true);

    cpu.step().unwrap();

    assert!(!cpu.flag_v());
}

#[test]
fn test_flag_ops_touch_only_their_flag() {
    let mut cpu = setup(&[0x38]); // SEC
    cpu.set_flag(FLAG_D, true);
    cpu.set_flag(FLAG_V, true);
    let status_before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.status(), status_before | FLAG_C);
    assert!(cpu.flag(FLAG_D));
    assert!(cpu.flag(FLAG_V));
    assert!(cpu.flag(FLAG_I));
}
