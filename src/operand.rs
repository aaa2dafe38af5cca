//! # Operand Resolution
//!
//! Turns an addressing mode plus the operand bytes following an opcode into an
//! effective address.
//!
//! Operand bytes are consumed with [`Memory::fetch_next`], so after [`resolve`]
//! returns the program counter points at the next instruction.
//!
//! Zero-page arithmetic (`$zp,X`, the pointer reads of `($zp,X)` and `($zp),Y`)
//! wraps within the zero page as on real hardware.

use crate::addressing::AddressingMode;
use crate::memory::{to_word, Memory, MemoryBus};
use crate::registers::{Register, Registers};

/// Interprets a relative-branch operand as a signed offset.
///
/// Bytes 0x00-0x7F are forward offsets; 0x80-0xFF are `-(255 - offset + 1)`.
///
/// ```
/// use snake6502::operand::relative_offset;
///
/// assert_eq!(relative_offset(0x0D), 13);
/// assert_eq!(relative_offset(0x80), -128);
/// assert_eq!(relative_offset(0xFF), -1);
/// ```
pub fn relative_offset(offset: u8) -> i16 {
    if offset >= 0x80 {
        -(255 - offset as i16 + 1)
    } else {
        offset as i16
    }
}

/// Reads a pointer stored at `zp` and `zp + 1`, wrapping within the zero page.
fn zero_page_pointer<B: MemoryBus>(memory: &Memory<B>, zp: u8) -> u16 {
    let lo = memory.read(zp as u16);
    let hi = memory.read(zp.wrapping_add(1) as u16);
    to_word(lo, hi)
}

/// Computes the effective address for `mode`, consuming its operand bytes.
///
/// Returns `None` for [`AddressingMode::Implicit`].
///
/// # Examples
///
/// ```
/// use snake6502::{operand, AddressingMode, FlatMemory, Memory, Registers};
///
/// let mut memory = Memory::new(FlatMemory::new());
/// memory.load(&[0x00, 0x02]); // operand bytes of `$0200`
///
/// let addr = operand::resolve(AddressingMode::Absolute, &mut memory, &Registers::new());
/// assert_eq!(addr, Some(0x0200));
/// assert_eq!(memory.pc(), 0x0602);
/// ```
pub fn resolve<B: MemoryBus>(
    mode: AddressingMode,
    memory: &mut Memory<B>,
    registers: &Registers,
) -> Option<u16> {
    let address = match mode {
        AddressingMode::Implicit => return None,
        AddressingMode::Relative => {
            let offset = relative_offset(memory.fetch_next());
            memory.pc().wrapping_add_signed(offset)
        }
        AddressingMode::Immediate => {
            let addr = memory.pc();
            memory.fetch_next();
            addr
        }
        AddressingMode::ZeroPage => memory.fetch_next() as u16,
        AddressingMode::ZeroPageX => {
            let base = memory.fetch_next();
            base.wrapping_add(registers.get(Register::X)) as u16
        }
        AddressingMode::Absolute => {
            let lo = memory.fetch_next();
            let hi = memory.fetch_next();
            to_word(lo, hi)
        }
        AddressingMode::IndirectX => {
            let zp = memory.fetch_next().wrapping_add(registers.get(Register::X));
            zero_page_pointer(memory, zp)
        }
        AddressingMode::IndirectY => {
            let zp = memory.fetch_next();
            zero_page_pointer(memory, zp).wrapping_add(registers.get(Register::Y) as u16)
        }
    };
    Some(address)
}
