//! Whole-program tests running several instructions end to end.

use ricoh2a03::CPU;

fn setup(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    for (i, &byte) in program.iter().enumerate() {
        cpu.bus_mut().write(0x0600 + i as u16, byte).unwrap();
    }
    cpu.set_pc(0x0600);
    cpu
}

/// Run until PC reaches `stop`, with a step cap so a broken program
/// fails the test instead of spinning.
fn run_until(cpu: &mut CPU, stop: u16) {
    for _ in 0..10_000 {
        if cpu.pc() == stop {
            return;
        }
        cpu.step().unwrap();
    }
    panic!("program did not reach 0x{:04X}", stop);
}

#[test]
fn test_sum_one_to_five() {
    // LDA #$00
    // LDX #$05
    // loop: STX $10
    //       CLC
    //       ADC $10
    //       DEX
    //       BNE loop
    let mut cpu = setup(&[
        0xA9, 0x00, // LDA #$00
        0xA2, 0x05, // LDX #$05
        0x86, 0x10, // STX $10
        0x18, // CLC
        0x65, 0x10, // ADC $10
        0xCA, // DEX
        0xD0, 0xF8, // BNE -8
    ]);

    run_until(&mut cpu, 0x060C);

    assert_eq!(cpu.a(), 15); // 5+4+3+2+1
    assert_eq!(cpu.x(), 0x00);
}

#[test]
fn test_memory_fill_loop() {
    // Fill 0x0020..0x0028 with 0xAA
    // LDA #$AA
    // LDX #$08
    // loop: DEX
    //       STA $20,X
    //       BNE loop
    let mut cpu = setup(&[
        0xA9, 0xAA, // LDA #$AA
        0xA2, 0x08, // LDX #$08
        0xCA, // DEX
        0x95, 0x20, // STA $20,X
        0xD0, 0xFB, // BNE -5
    ]);

    run_until(&mut cpu, 0x0609);

    for addr in 0x0020..0x0028 {
        assert_eq!(cpu.bus().read(addr).unwrap(), 0xAA, "addr 0x{:04X}", addr);
    }
}

#[test]
fn test_subroutine_with_argument_in_a() {
    // main:  LDA #$07
    //        JSR double   ; 0x0610
    //        STA $10
    //        (stop)
    // double: ASL A
    //         RTS
    let mut cpu = setup(&[
        0xA9, 0x07, // LDA #$07
        0x20, 0x10, 0x06, // JSR $0610
        0x85, 0x10, // STA $10
    ]);
    cpu.bus_mut().write(0x0610, 0x0A).unwrap(); // ASL A
    cpu.bus_mut().write(0x0611, 0x60).unwrap(); // RTS

    run_until(&mut cpu, 0x0607);

    assert_eq!(cpu.bus().read(0x0010).unwrap(), 0x0E);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_indirect_jump_dispatch_table() {
    // Jump through a pointer table entry at 0x0020
    let mut cpu = setup(&[0x6C, 0x20, 0x00]); // JMP ($0020)
    cpu.bus_mut().write(0x0020, 0x00).unwrap();
    cpu.bus_mut().write(0x0021, 0x07).unwrap(); // handler at 0x0700
    cpu.bus_mut().write(0x0700, 0xE8).unwrap(); // INX

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0700);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x01);
}

#[test]
fn test_compare_and_branch_selects_larger() {
    // Put max($30, $31) into $32
    //        LDA $30
    //        CMP $31
    //        BCS keep      ; A >= operand
    //        LDA $31
    // keep:  STA $32
    let program = [
        0xA5, 0x30, // LDA $30
        0xC5, 0x31, // CMP $31
        0xB0, 0x02, // BCS +2
        0xA5, 0x31, // LDA $31
        0x85, 0x32, // STA $32
    ];

    for (first, second, expected) in [(0x10u8, 0x20u8, 0x20u8), (0x20, 0x10, 0x20), (0x15, 0x15, 0x15)] {
        let mut cpu = setup(&program);
        cpu.bus_mut().write(0x0030, first).unwrap();
        cpu.bus_mut().write(0x0031, second).unwrap();

        run_until(&mut cpu, 0x060A);

        assert_eq!(
            cpu.bus().read(0x0032).unwrap(),
            expected,
            "max({:#04X}, {:#04X})",
            first,
            second
        );
    }
}
