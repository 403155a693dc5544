//! # Control Flow Instructions
//!
//! This module implements control flow operations: JMP, JSR, RTS, RTI,
//! BRK, NOP.
//!
//! These instructions set PC directly (except NOP) and therefore do not
//! use the usual operand-size advancement.

use crate::cpu::FLAG_I;
use crate::{ExecutionError, CPU, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the effective address. The indirect form carries the NMOS
/// page-wrap quirk, which the operand resolver reproduces.
///
/// Flags affected: none.
pub(crate) fn execute_jmp(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.operand_address(metadata.addressing_mode)?;
    cpu.set_pc(target);

    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of this instruction (the return
/// address minus one) high byte first, then jumps to the absolute target.
/// RTS undoes the minus-one when it returns.
pub(crate) fn execute_jsr(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.operand_address(metadata.addressing_mode)?;

    // PC sits at the operand's first byte; the instruction ends one byte
    // before PC + operand size.
    let return_minus_one = cpu
        .pc()
        .wrapping_add(metadata.addressing_mode.operand_size())
        .wrapping_sub(1);

    cpu.push_word(return_minus_one)?;
    cpu.set_pc(target);

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the saved address (low byte first) and resumes at the following
/// byte.
pub(crate) fn execute_rts(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let return_minus_one = cpu.pull_word()?;
    cpu.set_pc(return_minus_one.wrapping_add(1));

    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B cleared, bit 5 forced set), then pulls PC
/// low byte first. Unlike RTS, the restored PC is used as-is.
pub(crate) fn execute_rti(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let status = cpu.pull()?;
    cpu.set_status_from_pull(status);

    let pc = cpu.pull_word()?;
    cpu.set_pc(pc);

    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK behaves as a two-byte instruction: the byte after the opcode is a
/// padding byte. The sequence is:
/// 1. Push PC + 1 (the address after the padding byte), high byte first
/// 2. Push the status register with B and bit 5 set in the pushed copy
/// 3. Set the interrupt-disable flag
/// 4. Load PC from the IRQ/BRK vector at 0xFFFE/0xFFFF
///
/// The live B flag is not changed; only the pushed copy carries it.
pub(crate) fn execute_brk(cpu: &mut CPU, _opcode: u8) -> Result<(), ExecutionError> {
    let return_address = cpu.pc().wrapping_add(1);

    cpu.push_word(return_address)?;
    let status = cpu.status_for_push();
    cpu.push(status)?;

    cpu.set_flag(FLAG_I, true);

    let vector = cpu.read_irq_vector()?;
    cpu.set_pc(vector);

    Ok(())
}

/// Executes the NOP (No Operation) instruction.
///
/// Changes nothing; the opcode byte was already consumed by the fetch.
pub(crate) fn execute_nop(cpu: &mut CPU, opcode: u8) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.advance_pc(metadata.addressing_mode);
    Ok(())
}
