//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page
//!   (0x0100-0x01FF)
//! - **Status register** (P): packed byte holding the C, Z, I, D, B, V and
//!   N flags, with bit 5 held set by convention
//! - **Bus**: the mountable memory system all loads and stores go through
//!
//! ## Execution Model
//!
//! `step()` executes exactly one instruction: it fetches the opcode at PC,
//! advances PC past it, looks the opcode up in `OPCODE_TABLE` and runs the
//! instruction body. The body reads its operands at the incremented PC and
//! finishes by advancing PC by the addressing mode's operand size;
//! control-flow instructions set PC directly instead.
//!
//! A step is atomic from the host's point of view. Within a step, memory
//! reads and writes happen in the order the instruction specifies, which
//! side-effectful devices can observe.

use crate::bytes::{bit_set, high_byte, low_byte, word};
use crate::memory::Bus;
use crate::{AddressingMode, ExecutionError, RamDevice, OPCODE_TABLE};

/// Carry flag mask (bit 0).
pub const FLAG_C: u8 = 0x01;
/// Zero flag mask (bit 1).
pub const FLAG_Z: u8 = 0x02;
/// Interrupt-disable flag mask (bit 2).
pub const FLAG_I: u8 = 0x04;
/// Decimal-mode flag mask (bit 3). Exposed but not honored, as on the NES.
pub const FLAG_D: u8 = 0x08;
/// Break flag mask (bit 4). Only meaningful in pushed status copies.
pub const FLAG_B: u8 = 0x10;
/// Unused flag mask (bit 5), held set by convention.
pub const FLAG_U: u8 = 0x20;
/// Overflow flag mask (bit 6).
pub const FLAG_V: u8 = 0x40;
/// Negative flag mask (bit 7).
pub const FLAG_N: u8 = 0x80;

/// Base address of the stack page. The physical stack address is
/// `STACK_BASE | SP`.
const STACK_BASE: u16 = 0x0100;

/// IRQ/BRK vector location; BRK loads PC from here.
const IRQ_VECTOR: u16 = 0xFFFE;

/// 6502 CPU state and execution context.
///
/// The struct contains all processor state plus the memory bus it executes
/// against. It is constructed once per machine and mutated only through
/// `step` and the explicit setters.
///
/// # Examples
///
/// ```
/// use ricoh2a03::CPU;
///
/// let cpu = CPU::new();
///
/// // Power-on state
/// assert_eq!(cpu.a(), 0x00);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), 0x24); // I and the always-set bit
/// assert_eq!(cpu.pc(), 0x0000);
/// ```
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 | sp gives the full stack address)
    pub(crate) sp: u8,

    /// Packed status register (NV-BDIZC)
    pub(crate) p: u8,

    /// Program counter (address of the next instruction)
    pub(crate) pc: u16,

    /// Memory bus
    pub(crate) bus: Bus,
}

impl CPU {
    /// Creates a CPU in the power-on reset state with 8 KiB of RAM mounted
    /// at `[0x0000, 0x1FFF]`.
    ///
    /// Reset state: A = X = Y = 0, SP = 0xFD, P = 0x24 (interrupt-disable
    /// plus the always-set bit), PC = 0, RAM zeroed. PC initialization is
    /// left to the host; a NES host typically reads its own reset vector
    /// and calls `set_pc`.
    pub fn new() -> Self {
        let mut bus = Bus::new();
        bus.mount(0x0000, Box::new(RamDevice::new(0x2000)))
            .unwrap_or_else(|_| unreachable!("empty bus cannot overlap"));
        Self::with_bus(bus)
    }

    /// Creates a CPU in the power-on reset state over a caller-assembled
    /// bus.
    ///
    /// Use this when the machine maps its own devices (cartridge space,
    /// I/O registers, mirror-aware RAM). No mounting is performed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use ricoh2a03::{Bus, CPU, RamDevice, RomDevice};
    ///
    /// let mut bus = Bus::new();
    /// bus.mount(0x0000, Box::new(RamDevice::new(0x2000))).unwrap();
    /// bus.mount(0x8000, Box::new(RomDevice::new(vec![0xEA; 0x4000]))).unwrap();
    ///
    /// let mut cpu = CPU::with_bus(bus);
    /// cpu.set_pc(0x8000);
    /// cpu.step().unwrap(); // NOP out of ROM
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn with_bus(bus: Bus) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            p: FLAG_I | FLAG_U,
            pc: 0x0000,
            bus,
        }
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC and advance PC past it
    /// 2. Look up the instruction in the opcode table
    /// 3. Fail on undocumented opcodes
    /// 4. Run the instruction body, which resolves operands, applies
    ///    effects and leaves PC at the next instruction
    ///
    /// # Errors
    ///
    /// - `ExecutionError::UnknownOpcode` for undocumented opcode bytes
    /// - `ExecutionError::Bus` when any access lands outside all mounts
    /// - `ExecutionError::IllegalAddressingMode` if an instruction body
    ///   performs an access its mode cannot express (indicates a table
    ///   bug, not a ROM bug)
    ///
    /// The CPU is left exactly as the faulting access found it; a failed
    /// step must not be retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use ricoh2a03::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.bus_mut().write(0x0000, 0xE8).unwrap(); // INX
    ///
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.x(), 0x01);
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        // Fetch opcode at PC; the opcode byte is consumed here, operand
        // bytes are consumed by the instruction body.
        let opcode = self.read_byte(self.pc)?;
        self.pc = self.pc.wrapping_add(1);

        // Decode: look up in opcode table
        let metadata = &OPCODE_TABLE[opcode as usize];

        use crate::instructions::{
            alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
        };

        match metadata.mnemonic {
            "ADC" => alu::execute_adc(self, opcode)?,
            "AND" => alu::execute_and(self, opcode)?,
            "ASL" => shifts::execute_asl(self, opcode)?,
            "BCC" => branches::execute_bcc(self, opcode)?,
            "BCS" => branches::execute_bcs(self, opcode)?,
            "BEQ" => branches::execute_beq(self, opcode)?,
            "BIT" => alu::execute_bit(self, opcode)?,
            "BMI" => branches::execute_bmi(self, opcode)?,
            "BNE" => branches::execute_bne(self, opcode)?,
            "BPL" => branches::execute_bpl(self, opcode)?,
            "BRK" => control::execute_brk(self, opcode)?,
            "BVC" => branches::execute_bvc(self, opcode)?,
            "BVS" => branches::execute_bvs(self, opcode)?,
            "CLC" => flags::execute_clc(self, opcode)?,
            "CLD" => flags::execute_cld(self, opcode)?,
            "CLI" => flags::execute_cli(self, opcode)?,
            "CLV" => flags::execute_clv(self, opcode)?,
            "CMP" => alu::execute_cmp(self, opcode)?,
            "CPX" => alu::execute_cpx(self, opcode)?,
            "CPY" => alu::execute_cpy(self, opcode)?,
            "DEC" => inc_dec::execute_dec(self, opcode)?,
            "DEX" => inc_dec::execute_dex(self, opcode)?,
            "DEY" => inc_dec::execute_dey(self, opcode)?,
            "EOR" => alu::execute_eor(self, opcode)?,
            "INC" => inc_dec::execute_inc(self, opcode)?,
            "INX" => inc_dec::execute_inx(self, opcode)?,
            "INY" => inc_dec::execute_iny(self, opcode)?,
            "JMP" => control::execute_jmp(self, opcode)?,
            "JSR" => control::execute_jsr(self, opcode)?,
            "LDA" => load_store::execute_lda(self, opcode)?,
            "LDX" => load_store::execute_ldx(self, opcode)?,
            "LDY" => load_store::execute_ldy(self, opcode)?,
            "LSR" => shifts::execute_lsr(self, opcode)?,
            "NOP" => control::execute_nop(self, opcode)?,
            "ORA" => alu::execute_ora(self, opcode)?,
            "PHA" => stack::execute_pha(self, opcode)?,
            "PHP" => stack::execute_php(self, opcode)?,
            "PLA" => stack::execute_pla(self, opcode)?,
            "PLP" => stack::execute_plp(self, opcode)?,
            "ROL" => shifts::execute_rol(self, opcode)?,
            "ROR" => shifts::execute_ror(self, opcode)?,
            "RTI" => control::execute_rti(self, opcode)?,
            "RTS" => control::execute_rts(self, opcode)?,
            "SBC" => alu::execute_sbc(self, opcode)?,
            "SEC" => flags::execute_sec(self, opcode)?,
            "SED" => flags::execute_sed(self, opcode)?,
            "SEI" => flags::execute_sei(self, opcode)?,
            "STA" => load_store::execute_sta(self, opcode)?,
            "STX" => load_store::execute_stx(self, opcode)?,
            "STY" => load_store::execute_sty(self, opcode)?,
            "TAX" => transfer::execute_tax(self, opcode)?,
            "TAY" => transfer::execute_tay(self, opcode)?,
            "TSX" => transfer::execute_tsx(self, opcode)?,
            "TXA" => transfer::execute_txa(self, opcode)?,
            "TXS" => transfer::execute_txs(self, opcode)?,
            "TYA" => transfer::execute_tya(self, opcode)?,
            _ => {
                // Undocumented opcode; the fetch is not undone, matching
                // hardware where the byte was already consumed.
                return Err(ExecutionError::UnknownOpcode(opcode));
            }
        }

        Ok(())
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is `0x0100 | SP`; the stack grows downward
    /// from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status register (NV-BDIZC layout).
    pub fn status(&self) -> u8 {
        self.p
    }

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the packed status register. Bit 5 is forced set to keep the
    /// register in its conventional form.
    pub fn set_status(&mut self, value: u8) {
        self.p = value | FLAG_U;
    }

    /// Returns a shared reference to the memory bus.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This is how hosts and tests seed memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use ricoh2a03::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.bus_mut().write(0x0600, 0xEA).unwrap();
    /// assert_eq!(cpu.bus().read(0x0600).unwrap(), 0xEA);
    /// ```
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    // ========== Status Flags ==========

    /// Tests a status flag by mask (`FLAG_C`, `FLAG_Z`, ...).
    pub fn flag(&self, mask: u8) -> bool {
        bit_set(self.p, mask)
    }

    /// Sets or clears a status flag by mask.
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        if on {
            self.p |= mask;
        } else {
            self.p &= !mask;
        }
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag(FLAG_C)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag(FLAG_Z)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag(FLAG_I)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag(FLAG_D)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag(FLAG_V)
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag(FLAG_N)
    }

    /// Set Z and N from a result byte: Z iff zero, N iff bit 7.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set_flag(FLAG_Z, value == 0);
        self.set_flag(FLAG_N, bit_set(value, 0x80));
    }

    /// Status byte as pushed by PHP and BRK: B and bit 5 set in the copy.
    pub(crate) fn status_for_push(&self) -> u8 {
        self.p | FLAG_B | FLAG_U
    }

    /// Install a status byte pulled from the stack: B cleared, bit 5 set.
    pub(crate) fn set_status_from_pull(&mut self, value: u8) {
        self.p = (value | FLAG_U) & !FLAG_B;
    }

    // ========== I/O Primitives ==========

    /// Read one byte through the bus.
    pub fn read_byte(&self, addr: u16) -> Result<u8, ExecutionError> {
        Ok(self.bus.read(addr)?)
    }

    /// Write one byte through the bus.
    pub fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        Ok(self.bus.write(addr, value)?)
    }

    /// Read a little-endian word: low byte at `addr`, high byte at
    /// `addr + 1`. The low byte is read first, which side-effectful
    /// devices can observe.
    pub fn read_word(&self, addr: u16) -> Result<u16, ExecutionError> {
        let low = self.read_byte(addr)?;
        let high = self.read_byte(addr.wrapping_add(1))?;
        Ok(word(low, high))
    }

    /// Read a little-endian word from the zero page, with the pointer's
    /// high byte wrapping within the page: the word at 0xFF combines
    /// `mem[0xFF]` and `mem[0x00]`.
    pub(crate) fn read_word_zero_page(&self, zp: u8) -> Result<u16, ExecutionError> {
        let low = self.read_byte(zp as u16)?;
        let high = self.read_byte(zp.wrapping_add(1) as u16)?;
        Ok(word(low, high))
    }

    // ========== Stack Operations ==========

    /// Push a byte: write to `0x0100 | SP`, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.write_byte(STACK_BASE | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pull a byte: increment SP, then read from `0x0100 | SP`.
    pub(crate) fn pull(&mut self) -> Result<u8, ExecutionError> {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(STACK_BASE | self.sp as u16)
    }

    /// Push a word, high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) -> Result<(), ExecutionError> {
        self.push(high_byte(value))?;
        self.push(low_byte(value))
    }

    /// Pull a word, low byte then high byte.
    pub(crate) fn pull_word(&mut self) -> Result<u16, ExecutionError> {
        let low = self.pull()?;
        let high = self.pull()?;
        Ok(word(low, high))
    }

    /// Read the IRQ/BRK vector at 0xFFFE/0xFFFF.
    pub(crate) fn read_irq_vector(&self) -> Result<u16, ExecutionError> {
        self.read_word(IRQ_VECTOR)
    }

    // ========== Operand Resolution ==========

    /// Resolves the effective address for the current instruction's
    /// operand. PC must point at the first operand byte (where `step`
    /// leaves it).
    ///
    /// Implied and Accumulator have no address and fail; Immediate
    /// resolves to PC itself so that reading through the mode yields the
    /// operand byte.
    pub(crate) fn operand_address(
        &self,
        mode: AddressingMode,
    ) -> Result<u16, ExecutionError> {
        match mode {
            AddressingMode::Immediate => Ok(self.pc),
            AddressingMode::ZeroPage => {
                // 8-bit address into page zero
                Ok(self.read_byte(self.pc)? as u16)
            }
            AddressingMode::ZeroPageX => {
                // Index wraps within the zero page
                let base = self.read_byte(self.pc)?;
                Ok(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.read_byte(self.pc)?;
                Ok(base.wrapping_add(self.y) as u16)
            }
            AddressingMode::Relative => {
                // Signed offset from the address after the operand byte
                let offset = self.read_byte(self.pc)? as u16;
                let after = self.pc.wrapping_add(1);
                if offset >= 0x80 {
                    Ok(after.wrapping_add(offset).wrapping_sub(0x100))
                } else {
                    Ok(after.wrapping_add(offset))
                }
            }
            AddressingMode::Absolute => self.read_word(self.pc),
            AddressingMode::AbsoluteX => {
                Ok(self.read_word(self.pc)?.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Ok(self.read_word(self.pc)?.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.read_word(self.pc)?;
                // NMOS page-wrap quirk: a pointer whose low byte is 0xFF
                // never crosses into the next page; the dereference wraps
                // to the pointer's own page base.
                if low_byte(ptr) == 0xFF {
                    self.read_word(ptr & 0xFF00)
                } else {
                    self.read_word(ptr)
                }
            }
            AddressingMode::IndirectX => {
                // (ZP + X), wrap within the zero page, then dereference
                let zp = self.read_byte(self.pc)?.wrapping_add(self.x);
                self.read_word_zero_page(zp)
            }
            AddressingMode::IndirectY => {
                // ZP dereference, then + Y
                let zp = self.read_byte(self.pc)?;
                Ok(self.read_word_zero_page(zp)?.wrapping_add(self.y as u16))
            }
            AddressingMode::Implied | AddressingMode::Accumulator => {
                Err(ExecutionError::IllegalAddressingMode(mode))
            }
        }
    }

    /// Reads the operand value through the addressing mode. Accumulator
    /// mode reads the A register; Implied has no operand and fails.
    pub(crate) fn operand_read(&self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Accumulator => Ok(self.a),
            AddressingMode::Implied => Err(ExecutionError::IllegalAddressingMode(mode)),
            _ => self.read_byte(self.operand_address(mode)?),
        }
    }

    /// Writes a value through the addressing mode. Accumulator mode writes
    /// the A register; Implied, Immediate and Relative cannot be written
    /// through and fail.
    pub(crate) fn operand_write(
        &mut self,
        mode: AddressingMode,
        value: u8,
    ) -> Result<(), ExecutionError> {
        match mode {
            AddressingMode::Accumulator => {
                self.a = value;
                Ok(())
            }
            AddressingMode::Implied
            | AddressingMode::Immediate
            | AddressingMode::Relative => Err(ExecutionError::IllegalAddressingMode(mode)),
            _ => {
                let addr = self.operand_address(mode)?;
                self.write_byte(addr, value)
            }
        }
    }

    /// Advance PC past the current instruction's operand bytes.
    pub(crate) fn advance_pc(&mut self, mode: AddressingMode) {
        self.pc = self.pc.wrapping_add(mode.operand_size());
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
