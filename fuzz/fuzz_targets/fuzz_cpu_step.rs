//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary register state and memory image, then runs a bounded
//! number of instructions through the memory-mapped I/O bus. Any panic is a bug.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snake6502::{FlatMemory, Framebuffer, MappedIo, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    carry: bool,
    key: u8,
    seed: u64,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the program origin
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut host = Framebuffer::new();
    host.press_key(input.cpu_state.key);
    let bus = MappedIo::with_seed(FlatMemory::new(), host, input.cpu_state.seed);

    let mut cpu = CPU::with_program(bus, &input.memory.program);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        cpu.memory_mut().write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        cpu.memory_mut().write(0x0100 + i as u16, byte);
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.memory_mut().set_sp(input.cpu_state.sp);
    cpu.registers_mut().set_carry_if(input.cpu_state.carry);

    // Errors (invalid opcodes) are expected; panics are not
    let before = cpu.steps();
    let result = cpu.run_for(input.steps as u64);

    if let Ok(executed) = result {
        assert!(executed <= input.steps as u64);
        assert_eq!(cpu.steps() - before, executed);
    } else {
        assert!(cpu.is_halted());
    }
});
