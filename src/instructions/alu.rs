//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and comparison operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! Decimal mode is not modelled; all arithmetic is binary.

use super::Operation;
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::Result;

/// ADC: `A = A + M + C`.
///
/// Carry is set when the unsigned sum exceeds 0xFF.
pub(super) fn adc<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let value = op.operand()? as u16;
    let a = op.get(Register::A) as u16;

    let sum = a + value + op.registers.carry_bit();
    op.registers.set_carry_if(sum > 0xFF);
    op.registers.set(Register::A, sum);

    Ok(())
}

/// SBC: `A = A - M - (1 - C)`.
///
/// Carry ends up set when no borrow was needed.
pub(super) fn sbc<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let value = op.operand()? as i16;
    let a = op.get(Register::A) as i16;
    let borrow = 1 - op.registers.carry_bit() as i16;

    let difference = a - value - borrow;
    op.registers.set_carry_if(difference >= 0);
    // Negative differences wrap to their two's-complement byte
    op.registers.set(Register::A, difference as u16);

    Ok(())
}

pub(super) fn and<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let value = op.operand()?;
    let result = op.get(Register::A) & value;
    op.registers.set(Register::A, result as u16);
    Ok(())
}

pub(super) fn ora<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let value = op.operand()?;
    let result = op.get(Register::A) | value;
    op.registers.set(Register::A, result as u16);
    Ok(())
}

pub(super) fn eor<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let value = op.operand()?;
    let result = op.get(Register::A) ^ value;
    op.registers.set(Register::A, result as u16);
    Ok(())
}

/// BIT: Z from `A & M`, N from bit 7 of M. The accumulator is not modified.
pub(super) fn bit<B: MemoryBus>(op: &mut Operation<'_, B>) -> Result<()> {
    let value = op.operand()?;
    let a = op.get(Register::A);
    op.registers.test_bits(a, value);
    Ok(())
}

/// CMP/CPX/CPY: compares `register` with memory.
///
/// Carry is set when `register >= M`. N and Z come from the wrapped difference,
/// which is then discarded.
pub(super) fn compare<B: MemoryBus>(op: &mut Operation<'_, B>, register: Register) -> Result<()> {
    let value = op.operand()?;
    let reg = op.get(register);

    op.registers.set_carry_if(reg >= value);
    op.registers.normalize(reg.wrapping_sub(value) as u16);

    Ok(())
}
