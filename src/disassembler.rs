//! # Disassembler
//!
//! Table-driven decoding of a single instruction into assembler-style
//! text, for debuggers and trace logs. Decoding never executes anything;
//! it only reads the opcode and operand bytes through the bus.

use crate::addressing::AddressingMode;
use crate::bytes::word;
use crate::memory::{Bus, BusError};
use crate::opcodes::OPCODE_TABLE;

/// Disassembles the instruction at `addr` into a string like `LDA #$05`
/// or `JMP ($1234)`.
///
/// Undocumented opcodes render as `???`. Relative branches show the
/// resolved target address rather than the raw offset.
///
/// # Errors
///
/// Fails if the opcode or operand bytes fall outside all mounts.
///
/// # Examples
///
/// ```
/// use ricoh2a03::{disassemble, CPU};
///
/// let mut cpu = CPU::new();
/// cpu.bus_mut().write(0x0600, 0xA9).unwrap();
/// cpu.bus_mut().write(0x0601, 0x05).unwrap();
///
/// assert_eq!(disassemble(cpu.bus(), 0x0600).unwrap(), "LDA #$05");
/// ```
pub fn disassemble(bus: &Bus, addr: u16) -> Result<String, BusError> {
    let opcode = bus.read(addr)?;
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mnemonic = metadata.mnemonic;

    let text = match metadata.addressing_mode {
        AddressingMode::Implied => mnemonic.to_string(),
        AddressingMode::Accumulator => format!("{} A", mnemonic),
        AddressingMode::Immediate => {
            format!("{} #${:02X}", mnemonic, bus.read(addr.wrapping_add(1))?)
        }
        AddressingMode::ZeroPage => {
            format!("{} ${:02X}", mnemonic, bus.read(addr.wrapping_add(1))?)
        }
        AddressingMode::ZeroPageX => {
            format!("{} ${:02X},X", mnemonic, bus.read(addr.wrapping_add(1))?)
        }
        AddressingMode::ZeroPageY => {
            format!("{} ${:02X},Y", mnemonic, bus.read(addr.wrapping_add(1))?)
        }
        AddressingMode::Relative => {
            let offset = bus.read(addr.wrapping_add(1))? as u16;
            let after = addr.wrapping_add(2);
            let target = if offset >= 0x80 {
                after.wrapping_add(offset).wrapping_sub(0x100)
            } else {
                after.wrapping_add(offset)
            };
            format!("{} ${:04X}", mnemonic, target)
        }
        AddressingMode::Absolute => {
            format!("{} ${:04X}", mnemonic, read_operand_word(bus, addr)?)
        }
        AddressingMode::AbsoluteX => {
            format!("{} ${:04X},X", mnemonic, read_operand_word(bus, addr)?)
        }
        AddressingMode::AbsoluteY => {
            format!("{} ${:04X},Y", mnemonic, read_operand_word(bus, addr)?)
        }
        AddressingMode::Indirect => {
            format!("{} (${:04X})", mnemonic, read_operand_word(bus, addr)?)
        }
        AddressingMode::IndirectX => {
            format!("{} (${:02X},X)", mnemonic, bus.read(addr.wrapping_add(1))?)
        }
        AddressingMode::IndirectY => {
            format!("{} (${:02X}),Y", mnemonic, bus.read(addr.wrapping_add(1))?)
        }
    };

    Ok(text)
}

fn read_operand_word(bus: &Bus, addr: u16) -> Result<u16, BusError> {
    let low = bus.read(addr.wrapping_add(1))?;
    let high = bus.read(addr.wrapping_add(2))?;
    Ok(word(low, high))
}
