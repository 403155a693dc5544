//! Property-based tests for CPU invariants.
//!
//! These use proptest to check that the step function maintains its
//! contracts across arbitrary opcodes, operands and register states.

use proptest::prelude::*;
use ricoh2a03::{Bus, RamDevice, CPU, FLAG_C, FLAG_U, OPCODE_TABLE};

/// CPU with every address mapped, so only decode faults are possible.
fn setup_full_memory() -> CPU {
    let mut bus = Bus::new();
    bus.mount(0x0000, Box::new(RamDevice::new(0x8000))).unwrap();
    bus.mount(0x8000, Box::new(RamDevice::new(0x8000))).unwrap();
    CPU::with_bus(bus)
}

/// All documented opcodes.
fn documented_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.documented())
        .map(|(i, _)| i as u8)
        .collect()
}

/// Documented opcodes that advance PC by opcode size plus operand size
/// (excludes everything that sets PC directly).
fn linear_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            m.documented()
                && !matches!(
                    m.mnemonic,
                    "BCC" | "BCS" | "BEQ" | "BNE" | "BMI" | "BPL" | "BVC" | "BVS" | "JMP"
                        | "JSR" | "RTS" | "RTI" | "BRK"
                )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    /// Every documented opcode completes against fully-mapped memory, for
    /// any operand bytes and register state.
    #[test]
    fn prop_step_is_total_over_documented_opcodes(
        opcode in prop::sample::select(documented_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        a in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
        sp in any::<u8>(),
    ) {
        let mut cpu = setup_full_memory();
        cpu.bus_mut().write(0x0600, opcode).unwrap();
        cpu.bus_mut().write(0x0601, operand1).unwrap();
        cpu.bus_mut().write(0x0602, operand2).unwrap();
        cpu.set_pc(0x0600);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_sp(sp);

        prop_assert!(cpu.step().is_ok());
    }

    /// Linear instructions advance PC by exactly 1 + operand size.
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(linear_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
    ) {
        let mut cpu = setup_full_memory();
        let metadata = &OPCODE_TABLE[opcode as usize];
        let expected = 1 + metadata.addressing_mode.operand_size();

        cpu.bus_mut().write(0x0600, opcode).unwrap();
        cpu.bus_mut().write(0x0601, operand1).unwrap();
        cpu.bus_mut().write(0x0602, operand2).unwrap();
        cpu.set_pc(0x0600);

        cpu.step().unwrap();

        prop_assert_eq!(
            cpu.pc(),
            0x0600 + expected,
            "opcode 0x{:02X} ({}) should advance {} bytes",
            opcode,
            metadata.mnemonic,
            expected
        );
    }

    /// The conventional bit 5 of the status register survives every
    /// documented instruction, including the stack pulls that rewrite P.
    #[test]
    fn prop_status_bit_five_always_set(
        opcode in prop::sample::select(documented_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        stack_byte in any::<u8>(),
    ) {
        let mut cpu = setup_full_memory();
        cpu.bus_mut().write(0x0600, opcode).unwrap();
        cpu.bus_mut().write(0x0601, operand1).unwrap();
        cpu.bus_mut().write(0x0602, operand2).unwrap();
        // Seed the stack so PLP/RTI pull arbitrary values
        cpu.bus_mut().write(0x01FE, stack_byte).unwrap();
        cpu.set_pc(0x0600);

        cpu.step().unwrap();

        prop_assert!(cpu.status() & FLAG_U != 0);
    }

    /// Z and N always describe the loaded value.
    #[test]
    fn prop_lda_immediate_sets_zn_from_value(value in any::<u8>()) {
        let mut cpu = setup_full_memory();
        cpu.bus_mut().write(0x0600, 0xA9).unwrap();
        cpu.bus_mut().write(0x0601, value).unwrap();
        cpu.set_pc(0x0600);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_n(), value >= 0x80);
    }

    /// ADC agrees with a 16-bit reference model for result and C/V/Z/N.
    #[test]
    fn prop_adc_matches_reference(
        a in any::<u8>(),
        m in any::<u8>(),
        carry_in in any::<bool>(),
    ) {
        let mut cpu = setup_full_memory();
        cpu.bus_mut().write(0x0600, 0x69).unwrap();
        cpu.bus_mut().write(0x0601, m).unwrap();
        cpu.set_pc(0x0600);
        cpu.set_a(a);
        cpu.set_flag(FLAG_C, carry_in);

        cpu.step().unwrap();

        let sum = a as u16 + m as u16 + carry_in as u16;
        let expected = sum as u8;
        prop_assert_eq!(cpu.a(), expected);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_z(), expected == 0);
        prop_assert_eq!(cpu.flag_n(), expected >= 0x80);
        prop_assert_eq!(
            cpu.flag_v(),
            (a ^ expected) & (m ^ expected) & 0x80 != 0
        );
    }

    /// SBC agrees with the borrow-rule reference model.
    #[test]
    fn prop_sbc_matches_reference(
        a in any::<u8>(),
        m in any::<u8>(),
        carry_in in any::<bool>(),
    ) {
        let mut cpu = setup_full_memory();
        cpu.bus_mut().write(0x0600, 0xE9).unwrap();
        cpu.bus_mut().write(0x0601, m).unwrap();
        cpu.set_pc(0x0600);
        cpu.set_a(a);
        cpu.set_flag(FLAG_C, carry_in);

        cpu.step().unwrap();

        let borrow = !carry_in as u8;
        let expected = a.wrapping_sub(m).wrapping_sub(borrow);
        prop_assert_eq!(cpu.a(), expected);
        prop_assert_eq!(cpu.flag_c(), a as u16 >= m as u16 + borrow as u16);
        prop_assert_eq!(cpu.flag_z(), expected == 0);
        prop_assert_eq!(cpu.flag_n(), expected >= 0x80);
    }

    /// PHA then PLA restores A and leaves SP where it started.
    #[test]
    fn prop_pha_pla_round_trip(a in any::<u8>(), sp in any::<u8>()) {
        let mut cpu = setup_full_memory();
        cpu.bus_mut().write(0x0600, 0x48).unwrap(); // PHA
        cpu.bus_mut().write(0x0601, 0x68).unwrap(); // PLA
        cpu.set_pc(0x0600);
        cpu.set_a(a);
        cpu.set_sp(sp);

        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.flag_z(), a == 0);
        prop_assert_eq!(cpu.flag_n(), a >= 0x80);
    }
}
