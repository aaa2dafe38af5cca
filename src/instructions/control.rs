//! # Control Flow Instructions
//!
//! - JMP: Jump to address
//! - JSR: Jump to subroutine
//! - RTS: Return from subroutine
//!
//! BRK and NOP have no body; the dispatcher handles them directly.
//!
//! JSR pushes the program counter as it stands after the operand bytes, and RTS
//! restores it unchanged. The 6502's off-by-one return address is not reproduced,
//! so both only make sense as a pair.

use super::Operation;
use crate::memory::MemoryBus;
use crate::Result;

pub(super) fn jmp<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let target = op.address()?;
    op.memory.jump(target);
    Ok(())
}

pub(super) fn jsr<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let target = op.address()?;
    op.memory.call_subroutine(target);
    Ok(())
}

pub(super) fn rts<B: MemoryBus>(op: &mut Operation<'_, B>) {
    op.memory.return_from_subroutine();
}
