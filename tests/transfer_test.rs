//! Tests for the register transfer instructions TAX, TAY, TXA, TYA, TSX,
//! TXS.

use ricoh2a03::CPU;

fn setup(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    for (i, &byte) in program.iter().enumerate() {
        cpu.bus_mut().write(0x0600 + i as u16, byte).unwrap();
    }
    cpu.set_pc(0x0600);
    cpu
}

#[test]
fn test_tax_copies_and_sets_flags() {
    let mut cpu = setup(&[0xAA]); // TAX
    cpu.set_a(0x80);
    cpu.set_x(0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x0601);
}

#[test]
fn test_tay_zero_flag() {
    let mut cpu = setup(&[0xA8]); // TAY
    cpu.set_a(0x00);
    cpu.set_y(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup(&[0x8A, 0x98]); // TXA; TYA
    cpu.set_x(0x42);
    cpu.set_y(0x99);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x99);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup(&[0xBA]); // TSX

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup(&[0x9A]); // TXS
    cpu.set_x(0x00); // would set Z if TXS updated flags
    let status_before = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), status_before);
}

#[test]
fn test_txs_tsx_round_trip() {
    let mut cpu = setup(&[0x9A, 0xBA]); // TXS; TSX
    cpu.set_x(0x42);

    cpu.step().unwrap();
    cpu.set_x(0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.sp(), 0x42);
}
