//! # Stack Operations
//!
//! - PHA: Push Accumulator
//! - PLA: Pull Accumulator (updates N and Z)
//!
//! The stack lives at 0x0100-0x01FF and grows downward.

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Register;

pub(super) fn pha<B: MemoryBus>(op: &mut Operation<'_, B>) {
    let a = op.get(Register::A);
    op.memory.push_byte(a);
}

pub(super) fn pla<B: MemoryBus>(op: &mut Operation<'_, B>) {
    let value = op.memory.pull_byte();
    op.registers.set(Register::A, value as u16);
}
