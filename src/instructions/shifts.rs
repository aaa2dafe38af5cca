//! # Shift Instructions
//!
//! - LSR: Logical Shift Right
//! - ASL: Arithmetic Shift Left
//!
//! Without an effective address (opcodes 0x4A, 0x0A) the accumulator is shifted;
//! otherwise the memory cell is read, shifted and written back. The bit shifted out
//! lands in Carry.

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::Result;

pub(super) fn lsr<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    shift(op, |value| ((value as u16) >> 1, value & 0x01 != 0))
}

pub(super) fn asl<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    shift(op, |value| ((value as u16) << 1, value & 0x80 != 0))
}

/// Applies `f`, which returns the unnormalized result and the carry-out.
fn shift<B: MemoryBus>(op: &mut Operation<'_, B>, f: impl Fn(u8) -> (u16, bool)) -> Result<()> {
    match op.address {
        None => {
            let (result, carry) = f(op.get(Register::A));
            op.registers.set_carry_if(carry);
            op.registers.set(Register::A, result);
        }
        Some(addr) => {
            let (result, carry) = f(op.memory.read(addr));
            op.registers.set_carry_if(carry);
            let result = op.registers.normalize(result);
            op.memory.write(addr, result);
        }
    }
    Ok(())
}
