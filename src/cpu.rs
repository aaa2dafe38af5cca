//! # CPU State and Execution
//!
//! This module contains the CPU struct that owns memory and registers and runs the
//! fetch-decode-execute loop.
//!
//! ## Execution Model
//!
//! Each [`CPU::step`]:
//! 1. Fetches the opcode at PC via [`Memory::fetch_next`]
//! 2. Looks up its mnemonic and addressing mode in the opcode table
//! 3. Resolves the effective address, consuming operand bytes
//! 4. Runs the operation body for the mnemonic
//!
//! The CPU is either [`CpuState::Running`] or [`CpuState::Halted`]. BRK halts it
//! normally; an opcode missing from the table halts it with
//! [`ExecutionError::InvalidOpcode`]. Once halted it stays halted.

use log::{info, trace, warn};

use crate::instructions::{self, Flow, Operation};
use crate::memory::{Memory, MemoryBus};
use crate::opcodes::lookup;
use crate::operand;
use crate::registers::{Flag, Register, Registers};
use crate::{ExecutionError, Result};

/// Whether the CPU will execute further instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpuState {
    Running,
    Halted,
}

/// Simulated processor: memory, registers and the execution loop.
///
/// # Type Parameters
///
/// * `B` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use snake6502::{CPU, CpuState, FlatMemory};
///
/// // LDA #$02; STA $02; BRK
/// let mut cpu = CPU::with_program(FlatMemory::new(), &[0xA9, 0x02, 0x85, 0x02, 0x00]);
///
/// let steps = cpu.run().unwrap();
/// assert_eq!(steps, 3);
/// assert_eq!(cpu.state(), CpuState::Halted);
/// assert_eq!(cpu.memory().read(0x02), 2);
/// ```
pub struct CPU<B: MemoryBus> {
    pub(crate) memory: Memory<B>,
    pub(crate) registers: Registers,
    pub(crate) state: CpuState,

    /// Instructions executed so far
    pub(crate) steps: u64,
}

impl<B: MemoryBus> CPU<B> {
    /// Creates a running CPU over `bus`.
    ///
    /// The program counter starts at [`crate::memory::PROGRAM_ORIGIN`], the stack
    /// pointer at 0xFF, and all registers and flags are zero.
    pub fn new(bus: B) -> Self {
        Self {
            memory: Memory::new(bus),
            registers: Registers::new(),
            state: CpuState::Running,
            steps: 0,
        }
    }

    /// Creates a CPU and loads `program` at the program origin.
    pub fn with_program(bus: B, program: &[u8]) -> Self {
        let mut cpu = Self::new(bus);
        cpu.memory.load(program);
        cpu
    }

    /// Executes one instruction.
    ///
    /// Returns the state after the instruction: `Halted` if it was BRK. Only
    /// instructions that complete are counted in [`CPU::steps`].
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::Halted`] if the CPU had already halted
    /// - [`ExecutionError::InvalidOpcode`] if the fetched byte is not in the table;
    ///   the CPU halts
    /// - [`ExecutionError::MissingOperand`] if an operation needed an address its
    ///   mode does not provide; the CPU halts
    pub fn step(&mut self) -> Result<CpuState> {
        if self.state == CpuState::Halted {
            return Err(ExecutionError::Halted);
        }

        let address = self.memory.pc();
        let opcode = self.memory.fetch_next();

        let Some(metadata) = lookup(opcode) else {
            self.state = CpuState::Halted;
            warn!("invalid opcode ${:02X} at ${:04X}", opcode, address);
            return Err(ExecutionError::InvalidOpcode { opcode, address });
        };

        let effective =
            operand::resolve(metadata.addressing_mode, &mut self.memory, &self.registers);

        trace!(
            "${:04X}: {:02X} {} {:?} -> {:04X?}",
            address,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            effective
        );

        let flow = instructions::execute(&mut Operation {
            mnemonic: metadata.mnemonic,
            memory: &mut self.memory,
            registers: &mut self.registers,
            address: effective,
        });

        match flow {
            Ok(Flow::Continue) => self.steps += 1,
            Ok(Flow::Halt) => {
                self.steps += 1;
                self.state = CpuState::Halted;
                info!("halted at ${:04X} after {} instructions", address, self.steps);
            }
            Err(err) => {
                self.state = CpuState::Halted;
                warn!("{}", err);
                return Err(err);
            }
        }

        Ok(self.state)
    }

    /// Runs until the CPU halts.
    ///
    /// Returns the number of instructions executed by this call, including the
    /// final BRK. Never returns for programs that loop forever; use
    /// [`CPU::run_for`] to drive those in slices.
    pub fn run(&mut self) -> Result<u64> {
        let start = self.steps;
        while self.step()? == CpuState::Running {}
        Ok(self.steps - start)
    }

    /// Runs at most `max_steps` instructions, stopping early on halt.
    ///
    /// Returns the number of instructions executed. Calling this on a halted CPU
    /// executes nothing and returns 0.
    pub fn run_for(&mut self, max_steps: u64) -> Result<u64> {
        let start = self.steps;
        while self.state == CpuState::Running && self.steps - start < max_steps {
            self.step()?;
        }
        Ok(self.steps - start)
    }

    // ========== State Getters ==========

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// Total instructions executed since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.registers.get(Register::A)
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.registers.get(Register::X)
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.registers.get(Register::Y)
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.memory.pc()
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.memory.sp()
    }

    pub fn flag_c(&self) -> bool {
        self.registers.flag(Flag::Carry)
    }

    pub fn flag_n(&self) -> bool {
        self.registers.flag(Flag::Negative)
    }

    pub fn flag_z(&self) -> bool {
        self.registers.flag(Flag::Zero)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory<B> {
        &self.memory
    }

    // ========== Setters (tests, debuggers, hosts) ==========

    /// Mutable access to the register file.
    ///
    /// Flags still only change through the register file's own operations.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    /// Mutable access to memory, including PC and stack pointer.
    pub fn memory_mut(&mut self) -> &mut Memory<B> {
        &mut self.memory
    }

    /// Sets A, updating N and Z as any register write does.
    pub fn set_a(&mut self, value: u8) {
        self.registers.set(Register::A, value as u16);
    }

    pub fn set_x(&mut self, value: u8) {
        self.registers.set(Register::X, value as u16);
    }

    pub fn set_y(&mut self, value: u8) {
        self.registers.set(Register::Y, value as u16);
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.memory.jump(addr);
    }

    /// Shorthand for `self.memory().bus()`.
    pub fn bus(&self) -> &B {
        self.memory.bus()
    }

    /// Shorthand for `self.memory_mut().bus_mut()`.
    pub fn bus_mut(&mut self) -> &mut B {
        self.memory.bus_mut()
    }
}
