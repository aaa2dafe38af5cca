//! # Instruction Implementations
//!
//! Operation bodies for every [`Mnemonic`], organized by category. Each body receives
//! an [`Operation`] holding the memory, the registers and the effective address
//! already resolved by the dispatcher.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **alu**: ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY
//! - **shifts**: LSR, ASL
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL
//! - **control**: JMP, JSR, RTS, BRK, NOP
//! - **stack**: PHA, PLA
//! - **transfer**: TAX, TAY, TXA, TYA
//! - **flags**: CLC, SEC

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::memory::{Memory, MemoryBus};
use crate::opcodes::Mnemonic;
use crate::registers::{Flag, Register, Registers};
use crate::{ExecutionError, Result};

/// What the dispatcher should do after an operation body returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Halt,
}

/// Everything an operation body may touch while it runs.
pub(crate) struct Operation<'a, B: MemoryBus> {
    pub(crate) mnemonic: Mnemonic,
    pub(crate) memory: &'a mut Memory<B>,
    pub(crate) registers: &'a mut Registers,
    pub(crate) address: Option<u16>,
}

impl<B: MemoryBus> Operation<'_, B> {
    /// The effective address, which every non-implicit instruction needs.
    pub(crate) fn address(&self) -> Result<u16> {
        self.address.ok_or_else(|| ExecutionError::MissingOperand {
            mnemonic: self.mnemonic,
            address: self.memory.pc(),
        })
    }

    /// The byte at the effective address.
    pub(crate) fn operand(&self) -> Result<u8> {
        Ok(self.memory.read(self.address()?))
    }

    pub(crate) fn get(&self, register: Register) -> u8 {
        self.registers.get(register)
    }
}

/// Runs the operation body bound to `op.mnemonic`.
pub(crate) fn execute<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<Flow> {
    match op.mnemonic {
        Mnemonic::Lda => load_store::load(op, Register::A)?,
        Mnemonic::Ldx => load_store::load(op, Register::X)?,
        Mnemonic::Ldy => load_store::load(op, Register::Y)?,
        Mnemonic::Sta => load_store::store(op, Register::A)?,
        Mnemonic::Stx => load_store::store(op, Register::X)?,
        Mnemonic::Sty => load_store::store(op, Register::Y)?,

        Mnemonic::Inc => inc_dec::step_memory(op, 1)?,
        Mnemonic::Dec => inc_dec::step_memory(op, -1)?,
        Mnemonic::Inx => inc_dec::step_register(op, Register::X, 1),
        Mnemonic::Iny => inc_dec::step_register(op, Register::Y, 1),
        Mnemonic::Dex => inc_dec::step_register(op, Register::X, -1),
        Mnemonic::Dey => inc_dec::step_register(op, Register::Y, -1),

        Mnemonic::Adc => alu::adc(op)?,
        Mnemonic::Sbc => alu::sbc(op)?,
        Mnemonic::And => alu::and(op)?,
        Mnemonic::Ora => alu::ora(op)?,
        Mnemonic::Eor => alu::eor(op)?,
        Mnemonic::Bit => alu::bit(op)?,
        Mnemonic::Cmp => alu::compare(op, Register::A)?,
        Mnemonic::Cpx => alu::compare(op, Register::X)?,
        Mnemonic::Cpy => alu::compare(op, Register::Y)?,

        Mnemonic::Lsr => shifts::lsr(op)?,
        Mnemonic::Asl => shifts::asl(op)?,

        Mnemonic::Bcc => branches::branch_if(op, Flag::Carry, false)?,
        Mnemonic::Bcs => branches::branch_if(op, Flag::Carry, true)?,
        Mnemonic::Bne => branches::branch_if(op, Flag::Zero, false)?,
        Mnemonic::Beq => branches::branch_if(op, Flag::Zero, true)?,
        Mnemonic::Bpl => branches::branch_if(op, Flag::Negative, false)?,
        Mnemonic::Bmi => branches::branch_if(op, Flag::Negative, true)?,

        Mnemonic::Jmp => control::jmp(op)?,
        Mnemonic::Jsr => control::jsr(op)?,
        Mnemonic::Rts => control::rts(op),
        Mnemonic::Nop => {}
        Mnemonic::Brk => return Ok(Flow::Halt),

        Mnemonic::Pha => stack::pha(op),
        Mnemonic::Pla => stack::pla(op),

        Mnemonic::Tax => transfer::transfer(op, Register::A, Register::X),
        Mnemonic::Tay => transfer::transfer(op, Register::A, Register::Y),
        Mnemonic::Txa => transfer::transfer(op, Register::X, Register::A),
        Mnemonic::Tya => transfer::transfer(op, Register::Y, Register::A),

        Mnemonic::Clc => flags::clc(op),
        Mnemonic::Sec => flags::sec(op),
    }
    Ok(Flow::Continue)
}
