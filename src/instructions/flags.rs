//! # Status Flag Instructions
//!
//! CLC and SEC, the only instructions that write Carry without computing anything.

use super::Operation;
use crate::memory::MemoryBus;

pub(super) fn clc<B: MemoryBus>(op: &mut Operation<'_, B>) {
    op.registers.clear_carry();
}

pub(super) fn sec<B: MemoryBus>(op: &mut Operation<'_, B>) {
    op.registers.set_carry();
}
