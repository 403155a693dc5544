//! # Status Flag Manipulation Instructions
//!
//! This module implements the instructions that directly set or clear
//! processor status flags: CLC, SEC, CLI, SEI, CLD, SED, CLV.
//!
//! All of them use implied addressing and change exactly one flag. SED and
//! CLD toggle the decimal flag even though decimal arithmetic is unwired,
//! so software can still observe the bit.

use crate::cpu::{FLAG_C, FLAG_D, FLAG_I, FLAG_V};
use crate::{ExecutionError, CPU};

/// Executes CLC (Clear Carry Flag).
pub(crate) fn execute_clc(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_C, false);
    Ok(())
}

/// Executes SEC (Set Carry Flag).
pub(crate) fn execute_sec(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_C, true);
    Ok(())
}

/// Executes CLI (Clear Interrupt Disable).
pub(crate) fn execute_cli(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_I, false);
    Ok(())
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn execute_sei(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_I, true);
    Ok(())
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn execute_cld(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_D, false);
    Ok(())
}

/// Executes SED (Set Decimal Mode).
pub(crate) fn execute_sed(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_D, true);
    Ok(())
}

/// Executes CLV (Clear Overflow Flag). There is no matching set form.
pub(crate) fn execute_clv(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.set_flag(FLAG_V, false);
    Ok(())
}
