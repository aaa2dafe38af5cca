//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA. The destination write goes through normalization, so Z and
//! N reflect the transferred value.

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Register;

/// Copies `from` into `to`.
pub(super) fn transfer<B: MemoryBus>(op: &mut Operation<'_, B>, from: Register, to: Register) {
    let value = op.get(from);
    op.registers.set(to, value as u16);
}
