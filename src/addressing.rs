//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502
//! processor. Each mode determines how the CPU interprets operand bytes and
//! calculates effective addresses; the resolution itself lives on the CPU
//! (`operand_address`, `operand_read`, `operand_write`).

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// after the operand byte.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    ///
    /// Carries the NMOS page-wrap quirk: when the pointer's low byte is
    /// 0xFF the dereference never crosses into the next page. The whole
    /// target word, low and high byte, is read starting at the pointer's
    /// own page base, so JMP ($01FF) takes its target from 0x0100 and
    /// 0x0101.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes the mode consumes from the instruction
    /// stream, not counting the opcode byte itself.
    ///
    /// After an instruction executes, PC advances by exactly this amount
    /// (control-flow instructions set PC directly instead).
    ///
    /// # Examples
    ///
    /// ```
    /// use ricoh2a03::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Implied.operand_size(), 0);
    /// assert_eq!(AddressingMode::Immediate.operand_size(), 1);
    /// assert_eq!(AddressingMode::Absolute.operand_size(), 2);
    /// ```
    pub fn operand_size(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
