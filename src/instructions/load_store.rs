//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: Load a register from memory (updates N and Z)
//! - STA, STX, STY: Store a register to memory (no flags affected)

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::Result;

/// Loads the byte at the effective address into `register`.
///
/// Flags follow from the register write: Z if the value is zero, N if bit 7 is set.
pub(super) fn load<B: MemoryBus>(op: &mut Operation<'_, B>, register: Register) -> Result<()> {
    let value = op.operand()?;
    op.registers.set(register, value as u16);
    Ok(())
}

/// Stores `register` at the effective address.
pub(super) fn store<B: MemoryBus>(op: &mut Operation<'_, B>, register: Register) -> Result<()> {
    let addr = op.address()?;
    let value = op.get(register);
    op.memory.write(addr, value);
    Ok(())
}
