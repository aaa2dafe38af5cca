//! # 6502 Interpreter Core
//!
//! A MOS 6502 interpreter that covers enough of the instruction set, plus the
//! memory-mapped screen, keyboard and random ports, to run the classic 32×32 Snake
//! demo unmodified.
//!
//! ## Quick Start
//!
//! ```rust
//! use snake6502::{CPU, FlatMemory, Framebuffer, MappedIo};
//!
//! // LDA #$05; STA $0200; BRK  (paint the top-left pixel green)
//! let program = [0xA9, 0x05, 0x8D, 0x00, 0x02, 0x00];
//!
//! let bus = MappedIo::new(FlatMemory::new(), Framebuffer::new());
//! let mut cpu = CPU::with_program(bus, &program);
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.bus().host().pixel(0, 0), 5);
//! ```
//!
//! ## Architecture
//!
//! - **Memory**: byte store behind the `MemoryBus` trait, wrapped by `Memory` which
//!   adds the program counter and stack
//! - **Registers**: A/X/Y with Carry, Negative and Zero derived on every write
//! - **Operand resolution**: addressing mode + operand bytes → effective address
//! - **Memory-mapped I/O**: `MappedIo` decorates any bus with the screen, keyboard
//!   and random ports, talking to an `IoHost`
//! - **Dispatch**: a static opcode table feeding a single match over mnemonics
//!
//! Everything is single-threaded and deterministic apart from the random port,
//! which can be seeded.
//!
//! ## Modules
//!
//! - `cpu` - Execution loop and processor state
//! - `memory` - MemoryBus trait, flat storage, PC/stack bookkeeping
//! - `registers` - Register file and flag derivation
//! - `operand` - Effective address resolution
//! - `io` - Memory-mapped I/O decorator and headless framebuffer
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration

pub mod addressing;
pub mod cpu;
pub mod io;
pub mod memory;
pub mod opcodes;
pub mod operand;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

use thiserror::Error;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CpuState, CPU};
pub use io::{Framebuffer, IoHost, MappedIo};
pub use memory::{FlatMemory, Memory, MemoryBus, PROGRAM_ORIGIN};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Flag, Register, Registers};

/// Errors that can occur during CPU execution.
///
/// Any of these leaves the CPU halted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the opcode table.
    #[error("invalid opcode 0x{opcode:02X} at 0x{address:04X}")]
    InvalidOpcode { opcode: u8, address: u16 },

    /// An operation needed an effective address but its mode supplied none.
    #[error("{mnemonic} needs an operand address (pc 0x{address:04X})")]
    MissingOperand { mnemonic: Mnemonic, address: u16 },

    /// `step` was called after the CPU halted.
    #[error("CPU is halted")]
    Halted,
}

pub type Result<T> = std::result::Result<T, ExecutionError>;
