//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for instruction decoding.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining
//! 105 undocumented opcodes are marked with the `"???"` mnemonic and are
//! rejected by `step` with `ExecutionError::UnknownOpcode`.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// Metadata for a single 6502 opcode.
///
/// Each entry pairs the instruction mnemonic with its addressing mode. The
/// mnemonic drives dispatch (and disassembly); the mode drives operand
/// resolution and PC advancement.
///
/// # Examples
///
/// ```
/// use ricoh2a03::{AddressingMode, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (`"???"` for undocumented opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,
}

impl OpcodeMetadata {
    /// Whether this opcode is part of the documented instruction set.
    pub fn documented(&self) -> bool {
        self.mnemonic != "???"
    }
}

const fn op(mnemonic: &'static str, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
    }
}

/// Placeholder for undocumented opcodes.
const ILL: OpcodeMetadata = op("???", Implied);

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use ricoh2a03::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
///
/// // Undocumented opcodes carry the placeholder mnemonic
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, "???");
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Implied),       // 0x00
    op("ORA", IndirectX),     // 0x01
    ILL,                      // 0x02
    ILL,                      // 0x03
    ILL,                      // 0x04
    op("ORA", ZeroPage),      // 0x05
    op("ASL", ZeroPage),      // 0x06
    ILL,                      // 0x07
    op("PHP", Implied),       // 0x08
    op("ORA", Immediate),     // 0x09
    op("ASL", Accumulator),   // 0x0A
    ILL,                      // 0x0B
    ILL,                      // 0x0C
    op("ORA", Absolute),      // 0x0D
    op("ASL", Absolute),      // 0x0E
    ILL,                      // 0x0F
    op("BPL", Relative),      // 0x10
    op("ORA", IndirectY),     // 0x11
    ILL,                      // 0x12
    ILL,                      // 0x13
    ILL,                      // 0x14
    op("ORA", ZeroPageX),     // 0x15
    op("ASL", ZeroPageX),     // 0x16
    ILL,                      // 0x17
    op("CLC", Implied),       // 0x18
    op("ORA", AbsoluteY),     // 0x19
    ILL,                      // 0x1A
    ILL,                      // 0x1B
    ILL,                      // 0x1C
    op("ORA", AbsoluteX),     // 0x1D
    op("ASL", AbsoluteX),     // 0x1E
    ILL,                      // 0x1F
    op("JSR", Absolute),      // 0x20
    op("AND", IndirectX),     // 0x21
    ILL,                      // 0x22
    ILL,                      // 0x23
    op("BIT", ZeroPage),      // 0x24
    op("AND", ZeroPage),      // 0x25
    op("ROL", ZeroPage),      // 0x26
    ILL,                      // 0x27
    op("PLP", Implied),       // 0x28
    op("AND", Immediate),     // 0x29
    op("ROL", Accumulator),   // 0x2A
    ILL,                      // 0x2B
    op("BIT", Absolute),      // 0x2C
    op("AND", Absolute),      // 0x2D
    op("ROL", Absolute),      // 0x2E
    ILL,                      // 0x2F
    op("BMI", Relative),      // 0x30
    op("AND", IndirectY),     // 0x31
    ILL,                      // 0x32
    ILL,                      // 0x33
    ILL,                      // 0x34
    op("AND", ZeroPageX),     // 0x35
    op("ROL", ZeroPageX),     // 0x36
    ILL,                      // 0x37
    op("SEC", Implied),       // 0x38
    op("AND", AbsoluteY),     // 0x39
    ILL,                      // 0x3A
    ILL,                      // 0x3B
    ILL,                      // 0x3C
    op("AND", AbsoluteX),     // 0x3D
    op("ROL", AbsoluteX),     // 0x3E
    ILL,                      // 0x3F
    op("RTI", Implied),       // 0x40
    op("EOR", IndirectX),     // 0x41
    ILL,                      // 0x42
    ILL,                      // 0x43
    ILL,                      // 0x44
    op("EOR", ZeroPage),      // 0x45
    op("LSR", ZeroPage),      // 0x46
    ILL,                      // 0x47
    op("PHA", Implied),       // 0x48
    op("EOR", Immediate),     // 0x49
    op("LSR", Accumulator),   // 0x4A
    ILL,                      // 0x4B
    op("JMP", Absolute),      // 0x4C
    op("EOR", Absolute),      // 0x4D
    op("LSR", Absolute),      // 0x4E
    ILL,                      // 0x4F
    op("BVC", Relative),      // 0x50
    op("EOR", IndirectY),     // 0x51
    ILL,                      // 0x52
    ILL,                      // 0x53
    ILL,                      // 0x54
    op("EOR", ZeroPageX),     // 0x55
    op("LSR", ZeroPageX),     // 0x56
    ILL,                      // 0x57
    op("CLI", Implied),       // 0x58
    op("EOR", AbsoluteY),     // 0x59
    ILL,                      // 0x5A
    ILL,                      // 0x5B
    ILL,                      // 0x5C
    op("EOR", AbsoluteX),     // 0x5D
    op("LSR", AbsoluteX),     // 0x5E
    ILL,                      // 0x5F
    op("RTS", Implied),       // 0x60
    op("ADC", IndirectX),     // 0x61
    ILL,                      // 0x62
    ILL,                      // 0x63
    ILL,                      // 0x64
    op("ADC", ZeroPage),      // 0x65
    op("ROR", ZeroPage),      // 0x66
    ILL,                      // 0x67
    op("PLA", Implied),       // 0x68
    op("ADC", Immediate),     // 0x69
    op("ROR", Accumulator),   // 0x6A
    ILL,                      // 0x6B
    op("JMP", Indirect),      // 0x6C
    op("ADC", Absolute),      // 0x6D
    op("ROR", Absolute),      // 0x6E
    ILL,                      // 0x6F
    op("BVS", Relative),      // 0x70
    op("ADC", IndirectY),     // 0x71
    ILL,                      // 0x72
    ILL,                      // 0x73
    ILL,                      // 0x74
    op("ADC", ZeroPageX),     // 0x75
    op("ROR", ZeroPageX),     // 0x76
    ILL,                      // 0x77
    op("SEI", Implied),       // 0x78
    op("ADC", AbsoluteY),     // 0x79
    ILL,                      // 0x7A
    ILL,                      // 0x7B
    ILL,                      // 0x7C
    op("ADC", AbsoluteX),     // 0x7D
    op("ROR", AbsoluteX),     // 0x7E
    ILL,                      // 0x7F
    ILL,                      // 0x80
    op("STA", IndirectX),     // 0x81
    ILL,                      // 0x82
    ILL,                      // 0x83
    op("STY", ZeroPage),      // 0x84
    op("STA", ZeroPage),      // 0x85
    op("STX", ZeroPage),      // 0x86
    ILL,                      // 0x87
    op("DEY", Implied),       // 0x88
    ILL,                      // 0x89
    op("TXA", Implied),       // 0x8A
    ILL,                      // 0x8B
    op("STY", Absolute),      // 0x8C
    op("STA", Absolute),      // 0x8D
    op("STX", Absolute),      // 0x8E
    ILL,                      // 0x8F
    op("BCC", Relative),      // 0x90
    op("STA", IndirectY),     // 0x91
    ILL,                      // 0x92
    ILL,                      // 0x93
    op("STY", ZeroPageX),     // 0x94
    op("STA", ZeroPageX),     // 0x95
    op("STX", ZeroPageY),     // 0x96
    ILL,                      // 0x97
    op("TYA", Implied),       // 0x98
    op("STA", AbsoluteY),     // 0x99
    op("TXS", Implied),       // 0x9A
    ILL,                      // 0x9B
    ILL,                      // 0x9C
    op("STA", AbsoluteX),     // 0x9D
    ILL,                      // 0x9E
    ILL,                      // 0x9F
    op("LDY", Immediate),     // 0xA0
    op("LDA", IndirectX),     // 0xA1
    op("LDX", Immediate),     // 0xA2
    ILL,                      // 0xA3
    op("LDY", ZeroPage),      // 0xA4
    op("LDA", ZeroPage),      // 0xA5
    op("LDX", ZeroPage),      // 0xA6
    ILL,                      // 0xA7
    op("TAY", Implied),       // 0xA8
    op("LDA", Immediate),     // 0xA9
    op("TAX", Implied),       // 0xAA
    ILL,                      // 0xAB
    op("LDY", Absolute),      // 0xAC
    op("LDA", Absolute),      // 0xAD
    op("LDX", Absolute),      // 0xAE
    ILL,                      // 0xAF
    op("BCS", Relative),      // 0xB0
    op("LDA", IndirectY),     // 0xB1
    ILL,                      // 0xB2
    ILL,                      // 0xB3
    op("LDY", ZeroPageX),     // 0xB4
    op("LDA", ZeroPageX),     // 0xB5
    op("LDX", ZeroPageY),     // 0xB6
    ILL,                      // 0xB7
    op("CLV", Implied),       // 0xB8
    op("LDA", AbsoluteY),     // 0xB9
    op("TSX", Implied),       // 0xBA
    ILL,                      // 0xBB
    op("LDY", AbsoluteX),     // 0xBC
    op("LDA", AbsoluteX),     // 0xBD
    op("LDX", AbsoluteY),     // 0xBE
    ILL,                      // 0xBF
    op("CPY", Immediate),     // 0xC0
    op("CMP", IndirectX),     // 0xC1
    ILL,                      // 0xC2
    ILL,                      // 0xC3
    op("CPY", ZeroPage),      // 0xC4
    op("CMP", ZeroPage),      // 0xC5
    op("DEC", ZeroPage),      // 0xC6
    ILL,                      // 0xC7
    op("INY", Implied),       // 0xC8
    op("CMP", Immediate),     // 0xC9
    op("DEX", Implied),       // 0xCA
    ILL,                      // 0xCB
    op("CPY", Absolute),      // 0xCC
    op("CMP", Absolute),      // 0xCD
    op("DEC", Absolute),      // 0xCE
    ILL,                      // 0xCF
    op("BNE", Relative),      // 0xD0
    op("CMP", IndirectY),     // 0xD1
    ILL,                      // 0xD2
    ILL,                      // 0xD3
    ILL,                      // 0xD4
    op("CMP", ZeroPageX),     // 0xD5
    op("DEC", ZeroPageX),     // 0xD6
    ILL,                      // 0xD7
    op("CLD", Implied),       // 0xD8
    op("CMP", AbsoluteY),     // 0xD9
    ILL,                      // 0xDA
    ILL,                      // 0xDB
    ILL,                      // 0xDC
    op("CMP", AbsoluteX),     // 0xDD
    op("DEC", AbsoluteX),     // 0xDE
    ILL,                      // 0xDF
    op("CPX", Immediate),     // 0xE0
    op("SBC", IndirectX),     // 0xE1
    ILL,                      // 0xE2
    ILL,                      // 0xE3
    op("CPX", ZeroPage),      // 0xE4
    op("SBC", ZeroPage),      // 0xE5
    op("INC", ZeroPage),      // 0xE6
    ILL,                      // 0xE7
    op("INX", Implied),       // 0xE8
    op("SBC", Immediate),     // 0xE9
    op("NOP", Implied),       // 0xEA
    ILL,                      // 0xEB
    op("CPX", Absolute),      // 0xEC
    op("SBC", Absolute),      // 0xED
    op("INC", Absolute),      // 0xEE
    ILL,                      // 0xEF
    op("BEQ", Relative),      // 0xF0
    op("SBC", IndirectY),     // 0xF1
    ILL,                      // 0xF2
    ILL,                      // 0xF3
    ILL,                      // 0xF4
    op("SBC", ZeroPageX),     // 0xF5
    op("INC", ZeroPageX),     // 0xF6
    ILL,                      // 0xF7
    op("SED", Implied),       // 0xF8
    op("SBC", AbsoluteY),     // 0xF9
    ILL,                      // 0xFA
    ILL,                      // 0xFB
    ILL,                      // 0xFC
    op("SBC", AbsoluteX),     // 0xFD
    op("INC", AbsoluteX),     // 0xFE
    ILL,                      // 0xFF
];
