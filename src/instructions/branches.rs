//! # Branch Instructions
//!
//! This module implements the eight conditional branches: BCC, BCS, BEQ,
//! BNE, BMI, BPL, BVC, BVS.
//!
//! All branches use relative addressing with a signed 8-bit offset taken
//! from the address after the operand byte. A taken branch sets PC to the
//! resolved target; an untaken branch falls through past the operand. No
//! flags are affected.

use crate::cpu::{FLAG_C, FLAG_N, FLAG_V, FLAG_Z};
use crate::{ExecutionError, CPU, OPCODE_TABLE};

/// Resolve the relative target and either take the branch or fall through.
fn branch_if(cpu: &mut CPU, opcode: u8, taken: bool) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.operand_address(metadata.addressing_mode)?;

    if taken {
        cpu.set_pc(target);
    } else {
        cpu.advance_pc(metadata.addressing_mode);
    }

    Ok(())
}

/// Executes BCC (Branch if Carry Clear).
pub(crate) fn execute_bcc(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = !cpu.flag(FLAG_C);
    branch_if(cpu, opcode, taken)
}

/// Executes BCS (Branch if Carry Set).
pub(crate) fn execute_bcs(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = cpu.flag(FLAG_C);
    branch_if(cpu, opcode, taken)
}

/// Executes BEQ (Branch if Equal, i.e. zero flag set).
pub(crate) fn execute_beq(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = cpu.flag(FLAG_Z);
    branch_if(cpu, opcode, taken)
}

/// Executes BNE (Branch if Not Equal, i.e. zero flag clear).
pub(crate) fn execute_bne(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = !cpu.flag(FLAG_Z);
    branch_if(cpu, opcode, taken)
}

/// Executes BMI (Branch if Minus, i.e. negative flag set).
pub(crate) fn execute_bmi(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = cpu.flag(FLAG_N);
    branch_if(cpu, opcode, taken)
}

/// Executes BPL (Branch if Plus, i.e. negative flag clear).
pub(crate) fn execute_bpl(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = !cpu.flag(FLAG_N);
    branch_if(cpu, opcode, taken)
}

/// Executes BVC (Branch if Overflow Clear).
pub(crate) fn execute_bvc(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = !cpu.flag(FLAG_V);
    branch_if(cpu, opcode, taken)
}

/// Executes BVS (Branch if Overflow Set).
pub(crate) fn execute_bvs(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let taken = cpu.flag(FLAG_V);
    branch_if(cpu, opcode, taken)
}
