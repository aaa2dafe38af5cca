//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Adjust a memory cell by one
//! - INX, INY, DEX, DEY: Adjust an index register by one
//!
//! All of them wrap at the 8-bit boundary and update Z and N; Carry is untouched.

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::Result;

/// Adds `delta` to the memory cell at the effective address.
pub(super) fn step_memory<B: MemoryBus>(op: &mut Operation<'_, B>, delta: i16) -> Result<()> {
    let addr = op.address()?;
    let value = op.memory.read(addr) as u16;
    let result = op.registers.normalize(value.wrapping_add_signed(delta));
    op.memory.write(addr, result);
    Ok(())
}

/// Adds `delta` to `register`.
pub(super) fn step_register<B: MemoryBus>(
    op: &mut Operation<'_, B>,
    register: Register,
    delta: i16,
) {
    let value = op.get(register) as u16;
    op.registers.set(register, value.wrapping_add_signed(delta));
}
