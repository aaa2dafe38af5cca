//! # Opcode Metadata Table
//!
//! This module contains the 256-slot opcode table that serves as the single source
//! of truth for instruction decoding.
//!
//! The table is assembled at compile time from [`INSTRUCTIONS`], a flat list of
//! `(opcode, mnemonic, addressing mode)` triples using the NMOS 6502 encoding. Slots
//! that no entry claims stay `None`; fetching such an opcode is a fatal decode error.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::{
    Absolute, Immediate, Implicit, IndirectX, IndirectY, Relative, ZeroPage, ZeroPageX,
};

/// Instruction mnemonics supported by the simulator.
///
/// Every variant has at least one opcode in [`OPCODE_TABLE`] and exactly one
/// operation body in the `instructions` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Clc,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Pla,
    Rts,
    Sbc,
    Sec,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
}

impl Mnemonic {
    /// Three-letter assembler name, upper case.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Pla => "PLA",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Txa => "TXA",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use snake6502::{opcodes::lookup, AddressingMode, Mnemonic};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The opcode byte this entry decodes.
    pub opcode: u8,

    /// Operation executed for this opcode.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

/// Every supported `(opcode, mnemonic, mode)` triple.
pub const INSTRUCTIONS: &[(u8, Mnemonic, AddressingMode)] = &[
    // Loads
    (0xA9, Mnemonic::Lda, Immediate),
    (0xA5, Mnemonic::Lda, ZeroPage),
    (0xB5, Mnemonic::Lda, ZeroPageX),
    (0xAD, Mnemonic::Lda, Absolute),
    (0xA1, Mnemonic::Lda, IndirectX),
    (0xB1, Mnemonic::Lda, IndirectY),
    (0xA2, Mnemonic::Ldx, Immediate),
    (0xA6, Mnemonic::Ldx, ZeroPage),
    (0xAE, Mnemonic::Ldx, Absolute),
    (0xA0, Mnemonic::Ldy, Immediate),
    (0xA4, Mnemonic::Ldy, ZeroPage),
    (0xB4, Mnemonic::Ldy, ZeroPageX),
    (0xAC, Mnemonic::Ldy, Absolute),
    // Stores
    (0x85, Mnemonic::Sta, ZeroPage),
    (0x95, Mnemonic::Sta, ZeroPageX),
    (0x8D, Mnemonic::Sta, Absolute),
    (0x81, Mnemonic::Sta, IndirectX),
    (0x91, Mnemonic::Sta, IndirectY),
    (0x86, Mnemonic::Stx, ZeroPage),
    (0x8E, Mnemonic::Stx, Absolute),
    (0x84, Mnemonic::Sty, ZeroPage),
    (0x94, Mnemonic::Sty, ZeroPageX),
    (0x8C, Mnemonic::Sty, Absolute),
    // Increments and decrements
    (0xE6, Mnemonic::Inc, ZeroPage),
    (0xF6, Mnemonic::Inc, ZeroPageX),
    (0xEE, Mnemonic::Inc, Absolute),
    (0xC6, Mnemonic::Dec, ZeroPage),
    (0xD6, Mnemonic::Dec, ZeroPageX),
    (0xCE, Mnemonic::Dec, Absolute),
    (0xE8, Mnemonic::Inx, Implicit),
    (0xC8, Mnemonic::Iny, Implicit),
    (0xCA, Mnemonic::Dex, Implicit),
    (0x88, Mnemonic::Dey, Implicit),
    // Arithmetic
    (0x69, Mnemonic::Adc, Immediate),
    (0x65, Mnemonic::Adc, ZeroPage),
    (0x75, Mnemonic::Adc, ZeroPageX),
    (0x6D, Mnemonic::Adc, Absolute),
    (0x61, Mnemonic::Adc, IndirectX),
    (0x71, Mnemonic::Adc, IndirectY),
    (0xE9, Mnemonic::Sbc, Immediate),
    (0xE5, Mnemonic::Sbc, ZeroPage),
    (0xF5, Mnemonic::Sbc, ZeroPageX),
    (0xED, Mnemonic::Sbc, Absolute),
    (0xE1, Mnemonic::Sbc, IndirectX),
    (0xF1, Mnemonic::Sbc, IndirectY),
    // Logic
    (0x29, Mnemonic::And, Immediate),
    (0x25, Mnemonic::And, ZeroPage),
    (0x35, Mnemonic::And, ZeroPageX),
    (0x2D, Mnemonic::And, Absolute),
    (0x21, Mnemonic::And, IndirectX),
    (0x31, Mnemonic::And, IndirectY),
    (0x09, Mnemonic::Ora, Immediate),
    (0x05, Mnemonic::Ora, ZeroPage),
    (0x15, Mnemonic::Ora, ZeroPageX),
    (0x0D, Mnemonic::Ora, Absolute),
    (0x01, Mnemonic::Ora, IndirectX),
    (0x11, Mnemonic::Ora, IndirectY),
    (0x49, Mnemonic::Eor, Immediate),
    (0x45, Mnemonic::Eor, ZeroPage),
    (0x55, Mnemonic::Eor, ZeroPageX),
    (0x4D, Mnemonic::Eor, Absolute),
    (0x41, Mnemonic::Eor, IndirectX),
    (0x51, Mnemonic::Eor, IndirectY),
    (0x24, Mnemonic::Bit, ZeroPage),
    (0x2C, Mnemonic::Bit, Absolute),
    // Comparisons
    (0xC9, Mnemonic::Cmp, Immediate),
    (0xC5, Mnemonic::Cmp, ZeroPage),
    (0xD5, Mnemonic::Cmp, ZeroPageX),
    (0xCD, Mnemonic::Cmp, Absolute),
    (0xC1, Mnemonic::Cmp, IndirectX),
    (0xD1, Mnemonic::Cmp, IndirectY),
    (0xE0, Mnemonic::Cpx, Immediate),
    (0xE4, Mnemonic::Cpx, ZeroPage),
    (0xEC, Mnemonic::Cpx, Absolute),
    (0xC0, Mnemonic::Cpy, Immediate),
    (0xC4, Mnemonic::Cpy, ZeroPage),
    (0xCC, Mnemonic::Cpy, Absolute),
    // Shifts
    (0x4A, Mnemonic::Lsr, Implicit),
    (0x46, Mnemonic::Lsr, ZeroPage),
    (0x56, Mnemonic::Lsr, ZeroPageX),
    (0x4E, Mnemonic::Lsr, Absolute),
    (0x0A, Mnemonic::Asl, Implicit),
    (0x06, Mnemonic::Asl, ZeroPage),
    (0x16, Mnemonic::Asl, ZeroPageX),
    (0x0E, Mnemonic::Asl, Absolute),
    // Branches
    (0x90, Mnemonic::Bcc, Relative),
    (0xB0, Mnemonic::Bcs, Relative),
    (0xF0, Mnemonic::Beq, Relative),
    (0xD0, Mnemonic::Bne, Relative),
    (0x30, Mnemonic::Bmi, Relative),
    (0x10, Mnemonic::Bpl, Relative),
    // Control flow
    (0x4C, Mnemonic::Jmp, Absolute),
    (0x20, Mnemonic::Jsr, Absolute),
    (0x60, Mnemonic::Rts, Implicit),
    (0x00, Mnemonic::Brk, Implicit),
    (0xEA, Mnemonic::Nop, Implicit),
    // Stack
    (0x48, Mnemonic::Pha, Implicit),
    (0x68, Mnemonic::Pla, Implicit),
    // Transfers
    (0xAA, Mnemonic::Tax, Implicit),
    (0xA8, Mnemonic::Tay, Implicit),
    (0x8A, Mnemonic::Txa, Implicit),
    (0x98, Mnemonic::Tya, Implicit),
    // Flags
    (0x18, Mnemonic::Clc, Implicit),
    (0x38, Mnemonic::Sec, Implicit),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < INSTRUCTIONS.len() {
        let (opcode, mnemonic, addressing_mode) = INSTRUCTIONS[i];
        if table[opcode as usize].is_some() {
            panic!("opcode listed twice in INSTRUCTIONS");
        }
        table[opcode as usize] = Some(OpcodeMetadata {
            opcode,
            mnemonic,
            addressing_mode,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        });
        i += 1;
    }
    table
}

/// 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use snake6502::OPCODE_TABLE;
///
/// let brk = OPCODE_TABLE[0x00].unwrap();
/// assert_eq!(brk.mnemonic.as_str(), "BRK");
///
/// // 0x02 is an illegal opcode on the NMOS 6502
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Decodes an opcode byte, returning `None` for opcodes outside the supported set.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}
