//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logic and comparison operations:
//! ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY.
//!
//! Decimal mode is not honored: the D flag can be set and cleared but ADC
//! and SBC always operate in binary, matching the NES CPU.

use crate::cpu::{FLAG_C, FLAG_N, FLAG_V, FLAG_Z};
use crate::{ExecutionError, CPU, OPCODE_TABLE};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags: C set on unsigned overflow of the 9-bit sum, V set on signed
/// overflow, Z and N from the result.
pub(crate) fn execute_adc(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;

    let a = cpu.a;
    let carry_in = if cpu.flag_c() { 1u16 } else { 0 };

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    // Carry: the 9-bit sum did not fit in a byte
    cpu.set_flag(FLAG_C, sum > 0xFF);

    // Overflow: both inputs share a sign bit that differs from the result's
    cpu.set_flag(FLAG_V, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.set_zn(result);
    cpu.a = result;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the borrow (the inverted carry flag) from the
/// accumulator.
///
/// Flags: C set iff no borrow occurred (A >= operand + borrow-in), V set
/// on signed overflow, Z and N from the result.
pub(crate) fn execute_sbc(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;

    let a = cpu.a;
    let borrow = if cpu.flag_c() { 0u8 } else { 1 };

    let result = a.wrapping_sub(value).wrapping_sub(borrow);

    // Carry: no borrow out of bit 7
    cpu.set_flag(FLAG_C, (a as u16) >= value as u16 + borrow as u16);

    // Overflow: A and the operand have opposite signs and the result's
    // sign no longer matches A
    cpu.set_flag(FLAG_V, (a ^ value) & (a ^ result) & 0x80 != 0);

    cpu.set_zn(result);
    cpu.a = result;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags: Z and N from the result.
pub(crate) fn execute_and(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    let result = cpu.a & value;

    cpu.set_zn(result);
    cpu.a = result;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags: Z and N from the result.
pub(crate) fn execute_ora(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    let result = cpu.a | value;

    cpu.set_zn(result);
    cpu.a = result;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags: Z and N from the result.
pub(crate) fn execute_eor(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    let result = cpu.a ^ value;

    cpu.set_zn(result);
    cpu.a = result;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests accumulator bits against memory without modifying either. Z is
/// set from `A & M`; N and V are copied from bits 7 and 6 of the operand.
pub(crate) fn execute_bit(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;

    cpu.set_flag(FLAG_Z, cpu.a & value == 0);
    cpu.set_flag(FLAG_N, value & 0x80 != 0);
    cpu.set_flag(FLAG_V, value & 0x40 != 0);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Compare a register against the operand.
///
/// C is set iff register >= operand, Z iff they are equal, N from bit 7 of
/// the wrapped difference. The register is not modified.
fn compare(cpu: &mut CPU, register: u8, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    let diff = register.wrapping_sub(value);

    cpu.set_flag(FLAG_C, register >= value);
    cpu.set_zn(diff);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let register = cpu.a;
    compare(cpu, register, opcode)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let register = cpu.x;
    compare(cpu, register, opcode)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let register = cpu.y;
    compare(cpu, register, opcode)
}
