//! # Addressing Modes
//!
//! This module defines the addressing modes understood by the simulator. Each mode
//! determines how many operand bytes follow an opcode and how the effective address
//! is derived from them.

/// 6502 addressing mode enumeration.
///
/// Only the modes used by the supported instruction subset are modelled. Opcodes
/// whose real encoding needs another mode (`LDA $1234,X`, `JMP ($1234)`, ...) are
/// simply absent from the opcode table.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Also covers the accumulator forms `LSR A` and `ASL A`.
    ///
    /// Examples: INX, RTS, BRK
    Implicit,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BNE label (offset is relative to the address after the operand)
    Relative,

    /// 8-bit constant operand in instruction.
    ///
    /// The effective address is the location of the operand byte itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wraps within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Full 16-bit address, little-endian.
    ///
    /// Example: JMP $1234
    Absolute,

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
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Absolute => 2,
            AddressingMode::Relative
            | AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
        }
    }
}
