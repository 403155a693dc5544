//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations on memory
//! (INC, DEC) and on the index registers (INX, INY, DEX, DEY).
//!
//! The memory forms are read-modify-write: the effective address is
//! resolved once, read, and written back, in that order. All results wrap
//! modulo 256 and update Z and N.

use crate::{ExecutionError, CPU, OPCODE_TABLE};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.read_byte(addr)?;

    let result = value.wrapping_add(1);
    cpu.write_byte(addr, result)?;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.operand_address(metadata.addressing_mode)?;
    let value = cpu.read_byte(addr)?;

    let result = value.wrapping_sub(1);
    cpu.write_byte(addr, result)?;
    cpu.set_zn(result);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    let x = cpu.x;
    cpu.set_zn(x);
    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    let y = cpu.y;
    cpu.set_zn(y);
    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    let x = cpu.x;
    cpu.set_zn(x);
    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    let y = cpu.y;
    cpu.set_zn(y);
    Ok(())
}
