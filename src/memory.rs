//! # Memory
//!
//! This module provides the byte store the simulator runs on and the bookkeeping that
//! sits on top of it.
//!
//! - [`MemoryBus`]: the raw 16-bit address / 8-bit value interface. Plain storage
//!   ([`FlatMemory`]) and the memory-mapped I/O decorator ([`crate::io::MappedIo`])
//!   both implement it.
//! - [`Memory`]: wraps a bus together with the program counter and stack pointer, and
//!   owns program loading, instruction fetch, branching, subroutine linkage and the
//!   stack discipline.
//!
//! ## Design Principles
//!
//! Every 16-bit value is a legal address. Program counter and stack pointer
//! arithmetic wraps with fixed-width modular arithmetic, exactly like the hardware;
//! nothing in this module can fail.

use log::debug;

/// Address where programs are loaded and execution starts.
pub const PROGRAM_ORIGIN: u16 = 0x0600;

/// First byte of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value at power-on; the stack grows downward from 0x01FF.
pub const STACK_RESET: u8 = 0xFF;

/// Memory bus trait for reading and writing bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads. Implementations with
///   side-effecting reads (random ports, input latches) use interior mutability.
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use snake6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address. Must never panic.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM initialized to 0x00.
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// Combines a little-endian byte pair into a 16-bit word.
///
/// ```
/// assert_eq!(snake6502::memory::to_word(0x34, 0x12), 0x1234);
/// ```
pub fn to_word(lo: u8, hi: u8) -> u16 {
    u16::from_le_bytes([lo, hi])
}

/// Splits a 16-bit word into its `(low, high)` bytes.
///
/// ```
/// assert_eq!(snake6502::memory::to_bytes(0x1234), (0x34, 0x12));
/// ```
pub fn to_bytes(word: u16) -> (u8, u8) {
    let [lo, hi] = word.to_le_bytes();
    (lo, hi)
}

/// Addressable memory plus program counter and stack pointer.
///
/// `Memory` is the only path through which instructions touch the bus, so anything
/// layered into `B` (such as memory-mapped I/O) sees stack traffic and instruction
/// fetches as well as explicit loads and stores.
///
/// # Examples
///
/// ```
/// use snake6502::{FlatMemory, Memory};
///
/// let mut memory = Memory::new(FlatMemory::new());
/// memory.load(&[0xA9, 0x02]);
///
/// assert_eq!(memory.pc(), 0x0600);
/// assert_eq!(memory.fetch_next(), 0xA9);
/// assert_eq!(memory.fetch_next(), 0x02);
/// assert_eq!(memory.pc(), 0x0602);
/// ```
pub struct Memory<B: MemoryBus> {
    bus: B,

    /// Address of the next byte to fetch
    pc: u16,

    /// Offset into the stack page (0x0100 + sp is the next free slot)
    sp: u8,
}

impl<B: MemoryBus> Memory<B> {
    /// Wraps `bus` with the program counter at [`PROGRAM_ORIGIN`] and an empty stack.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            pc: PROGRAM_ORIGIN,
            sp: STACK_RESET,
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Copies `program` into memory starting at [`PROGRAM_ORIGIN`].
    ///
    /// The program counter is left untouched. Bytes that would run past 0xFFFF wrap
    /// around to the bottom of the address space.
    pub fn load(&mut self, program: &[u8]) {
        let mut addr = PROGRAM_ORIGIN;
        for &byte in program {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the byte at the program counter and advances past it.
    ///
    /// Opcode and operand consumption both go through here, so instruction length
    /// always equals the number of calls made while decoding it.
    pub fn fetch_next(&mut self) -> u8 {
        let byte = self.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    pub fn jump(&mut self, addr: u16) {
        self.pc = addr;
    }

    /// Jumps to `addr` when `condition` holds; otherwise does nothing.
    pub fn branch(&mut self, condition: bool, addr: u16) {
        if condition {
            self.jump(addr);
        }
    }

    /// Writes `value` at `0x0100 + sp`, then decrements the stack pointer.
    pub fn push_byte(&mut self, value: u8) {
        self.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments the stack pointer, then reads the byte at `0x0100 + sp`.
    pub fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes the current program counter (low byte first) and jumps to `addr`.
    pub fn call_subroutine(&mut self, addr: u16) {
        let (lo, hi) = to_bytes(self.pc);
        self.push_byte(lo);
        self.push_byte(hi);
        debug!("call ${:04X} from ${:04X}", addr, self.pc);
        self.jump(addr);
    }

    /// Pulls the return address pushed by [`Memory::call_subroutine`] back into the
    /// program counter.
    pub fn return_from_subroutine(&mut self) {
        let hi = self.pull_byte();
        let lo = self.pull_byte();
        let addr = to_word(lo, hi);
        debug!("return to ${:04X} from ${:04X}", addr, self.pc);
        self.jump(addr);
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer.
    ///
    /// Note: The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Sets the stack pointer directly.
    ///
    /// Intended for tests and debugging; programs move it only via push and pull.
    pub fn set_sp(&mut self, sp: u8) {
        self.sp = sp;
    }

    /// Returns the underlying bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns the underlying bus mutably.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
