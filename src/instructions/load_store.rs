//! # Load and Store Instructions
//!
//! This module implements register loads (LDA, LDX, LDY) and stores (STA,
//! STX, STY).
//!
//! Loads set Z and N from the loaded value; stores change no flags.

use crate::{ExecutionError, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    cpu.a = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    cpu.x = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_read(metadata.addressing_mode)?;
    cpu.y = value;
    cpu.set_zn(value);

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.a;
    cpu.operand_write(metadata.addressing_mode, value)?;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.x;
    cpu.operand_write(metadata.addressing_mode, value)?;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.y;
    cpu.operand_write(metadata.addressing_mode, value)?;

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}
