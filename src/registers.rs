//! # Registers and Flags
//!
//! The accumulator and index registers plus the Carry, Negative and Zero flags.
//!
//! Flags are derived state. Negative and Zero only change through
//! [`Registers::normalize`] (which every register write goes through), and Carry
//! only through the dedicated carry operations. There is no raw flag setter.

/// General-purpose 8-bit registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
}

/// Condition flags tracked by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Set on unsigned overflow, cleared on borrow
    Carry,
    /// Bit 7 of the last normalized result
    Negative,
    /// Last normalized result was zero
    Zero,
}

/// Register file of the simulated processor.
///
/// # Examples
///
/// ```
/// use snake6502::{Flag, Register, Registers};
///
/// let mut regs = Registers::new();
///
/// // Writes are truncated to 8 bits and update N/Z
/// regs.set(Register::A, 0x180);
/// assert_eq!(regs.get(Register::A), 0x80);
/// assert!(regs.flag(Flag::Negative));
/// assert!(!regs.flag(Flag::Zero));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    a: u8,
    x: u8,
    y: u8,
    carry: bool,
    negative: bool,
    zero: bool,
}

impl Registers {
    /// All registers and flags zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    /// Normalizes `value` and stores the result in `register`.
    ///
    /// Returns the stored byte.
    pub fn set(&mut self, register: Register, value: u16) -> u8 {
        let value = self.normalize(value);
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
        }
        value
    }

    /// Truncates `number` to 8 bits and recomputes Zero and Negative from it.
    ///
    /// Returns the truncated value. Instructions that leave their result in memory
    /// rather than a register call this directly to get the same flag behaviour.
    pub fn normalize(&mut self, number: u16) -> u8 {
        let value = (number & 0xFF) as u8;
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
        value
    }

    /// Sets Zero from `a & m` and Negative from bit 7 of `m`, as BIT does.
    pub fn test_bits(&mut self, a: u8, m: u8) {
        self.zero = a & m == 0;
        self.negative = m & 0x80 != 0;
    }

    pub fn set_carry(&mut self) {
        self.carry = true;
    }

    pub fn clear_carry(&mut self) {
        self.carry = false;
    }

    pub fn set_carry_if(&mut self, condition: bool) {
        self.carry = condition;
    }

    /// Returns the current value of `flag`.
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Carry => self.carry,
            Flag::Negative => self.negative,
            Flag::Zero => self.zero,
        }
    }

    /// Carry as 0 or 1, for arithmetic.
    pub fn carry_bit(&self) -> u16 {
        u16::from(self.carry)
    }
}
