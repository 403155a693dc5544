//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations: ASL, LSR, ROL,
//! ROR.
//!
//! Each comes in an accumulator form and read-modify-write memory forms.
//! The bit leaving the byte always lands in the carry flag; rotates feed
//! the previous carry back in at the other end.

use crate::addressing::AddressingMode;
use crate::cpu::FLAG_C;
use crate::{ExecutionError, CPU, OPCODE_TABLE};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Shifts the operand one bit left; bit 7 moves into the carry flag and
/// bit 0 becomes 0. Z and N from the result.
pub(crate) fn execute_asl(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.set_flag(FLAG_C, value & 0x80 != 0);

        let result = value << 1;
        cpu.a = result;
        result
    } else {
        // Memory form: resolve once, read, shift, write back
        let addr = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.read_byte(addr)?;
        cpu.set_flag(FLAG_C, value & 0x80 != 0);

        let result = value << 1;
        cpu.write_byte(addr, result)?;
        result
    };

    cpu.set_zn(result);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Shifts the operand one bit right; bit 0 moves into the carry flag and
/// bit 7 becomes 0, so N is always cleared. Z from the result.
pub(crate) fn execute_lsr(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.set_flag(FLAG_C, value & 0x01 != 0);

        let result = value >> 1;
        cpu.a = result;
        result
    } else {
        let addr = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.read_byte(addr)?;
        cpu.set_flag(FLAG_C, value & 0x01 != 0);

        let result = value >> 1;
        cpu.write_byte(addr, result)?;
        result
    };

    cpu.set_zn(result);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Shifts left with the old carry entering at bit 0 and the old bit 7
/// becoming the new carry. Z and N from the result.
pub(crate) fn execute_rol(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let carry_in = if cpu.flag(FLAG_C) { 0x01u8 } else { 0x00 };

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.set_flag(FLAG_C, value & 0x80 != 0);

        let result = (value << 1) | carry_in;
        cpu.a = result;
        result
    } else {
        let addr = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.read_byte(addr)?;
        cpu.set_flag(FLAG_C, value & 0x80 != 0);

        let result = (value << 1) | carry_in;
        cpu.write_byte(addr, result)?;
        result
    };

    cpu.set_zn(result);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Shifts right with the old carry entering at bit 7 and the old bit 0
/// becoming the new carry. Z and N from the result.
pub(crate) fn execute_ror(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let carry_in = if cpu.flag(FLAG_C) { 0x80u8 } else { 0x00 };

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;
        cpu.set_flag(FLAG_C, value & 0x01 != 0);

        let result = (value >> 1) | carry_in;
        cpu.a = result;
        result
    } else {
        let addr = cpu.operand_address(metadata.addressing_mode)?;
        let value = cpu.read_byte(addr)?;
        cpu.set_flag(FLAG_C, value & 0x01 != 0);

        let result = (value >> 1) | carry_in;
        cpu.write_byte(addr, result)?;
        result
    };

    cpu.set_zn(result);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}
