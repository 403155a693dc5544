//! # Stack Operations
//!
//! This module implements the stack push and pull instructions: PHA, PHP,
//! PLA, PLP.
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward. A push writes
//! to `0x0100 | SP` and then decrements SP; a pull increments SP first and
//! reads from the new position.

use crate::{ExecutionError, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: none.
pub(crate) fn execute_pha(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let a = cpu.a;
    cpu.push(a)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has the B flag and bit 5 set; the live status register
/// is unchanged.
pub(crate) fn execute_php(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let status = cpu.status_for_push();
    cpu.push(status)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags: Z and N from the pulled value.
pub(crate) fn execute_pla(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let value = cpu.pull()?;
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// The pulled value lands in the status register with B cleared and bit 5
/// forced set; those two bits only exist in pushed copies.
pub(crate) fn execute_plp(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let value = cpu.pull()?;
    cpu.set_status_from_pull(value);
    Ok(())
}
