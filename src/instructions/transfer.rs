//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies: TAX, TAY, TXA, TYA,
//! TSX, TXS.
//!
//! All transfers set Z and N from the copied value except TXS, which
//! changes no flags (the stack pointer is not a result byte).

use crate::{ExecutionError, CPU};

/// Executes TAX (Transfer Accumulator to X).
pub(crate) fn execute_tax(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.x = cpu.a;
    let value = cpu.x;
    cpu.set_zn(value);
    Ok(())
}

/// Executes TAY (Transfer Accumulator to Y).
pub(crate) fn execute_tay(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.y = cpu.a;
    let value = cpu.y;
    cpu.set_zn(value);
    Ok(())
}

/// Executes TXA (Transfer X to Accumulator).
pub(crate) fn execute_txa(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.a = cpu.x;
    let value = cpu.a;
    cpu.set_zn(value);
    Ok(())
}

/// Executes TYA (Transfer Y to Accumulator).
pub(crate) fn execute_tya(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.a = cpu.y;
    let value = cpu.a;
    cpu.set_zn(value);
    Ok(())
}

/// Executes TSX (Transfer Stack Pointer to X).
pub(crate) fn execute_tsx(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.x = cpu.sp;
    let value = cpu.x;
    cpu.set_zn(value);
    Ok(())
}

/// Executes TXS (Transfer X to Stack Pointer).
///
/// Flags affected: none.
pub(crate) fn execute_txs(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    cpu.sp = cpu.x;
    Ok(())
}
