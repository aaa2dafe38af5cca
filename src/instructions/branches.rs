//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI and BPL. Each tests one flag against an expected value
//! and jumps to the relative target when they match. No flags are affected.

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Flag;
use crate::Result;

/// Branches to the effective address when `flag` equals `expected`.
pub(super) fn branch_if<B: MemoryBus>(
    op: &mut Operation<'_, B>,
    flag: Flag,
    expected: bool,
) -> Result<()> {
    let target = op.address()?;
    let taken = op.registers.flag(flag) == expected;
    op.memory.branch(taken, target);
    Ok(())
}
