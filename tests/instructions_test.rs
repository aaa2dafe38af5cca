//! Tests for the operation bodies, exercised through complete programs.
//!
//! Every program ends in BRK so `run()` returns once the instructions under test
//! have executed.

use snake6502::{CpuState, FlatMemory, CPU};

/// Helper: loads `program` at 0x0600 and runs it to the final BRK
fn run_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::with_program(FlatMemory::new(), program);
    cpu.run().unwrap();
    assert_eq!(cpu.state(), CpuState::Halted);
    cpu
}

// ========== Loads and Stores ==========

#[test]
fn test_lda_immediate_flags() {
    let cpu = run_program(&[0xA9, 0x00, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    let cpu = run_program(&[0xA9, 0x80, 0x00]);
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_ldx_ldy() {
    // LDX #$11; LDY #$22; BRK
    let cpu = run_program(&[0xA2, 0x11, 0xA0, 0x22, 0x00]);
    assert_eq!(cpu.x(), 0x11);
    assert_eq!(cpu.y(), 0x22);
}

#[test]
fn test_ldy_zero_page_x() {
    // LDX #$01; LDY $10,X; BRK
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xA2, 0x01, 0xB4, 0x10, 0x00]);
    cpu.memory_mut().write(0x0011, 0x3C);
    cpu.run().unwrap();

    assert_eq!(cpu.y(), 0x3C);
}

#[test]
fn test_stores_do_not_touch_flags() {
    // Z is left set by LDY #$00 and must survive the three stores
    let cpu = run_program(&[
        0xA9, 0x07, // LDA #$07
        0xA2, 0x08, // LDX #$08
        0xA0, 0x00, // LDY #$00 (Z=1)
        0x85, 0x10, // STA $10
        0x86, 0x11, // STX $11
        0x84, 0x12, // STY $12
        0x00,
    ]);
    assert_eq!(cpu.memory().read(0x10), 0x07);
    assert_eq!(cpu.memory().read(0x11), 0x08);
    assert_eq!(cpu.memory().read(0x12), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_sta_absolute_and_zero_page_x() {
    let cpu = run_program(&[
        0xA9, 0x99, // LDA #$99
        0x8D, 0x34, 0x12, // STA $1234
        0xA2, 0x03, // LDX #$03
        0x95, 0x40, // STA $40,X
        0x00,
    ]);
    assert_eq!(cpu.memory().read(0x1234), 0x99);
    assert_eq!(cpu.memory().read(0x0043), 0x99);
}

#[test]
fn test_sta_indexed_indirect() {
    let mut cpu = CPU::with_program(
        FlatMemory::new(),
        &[
            0xA9, 0x05, // LDA #$05
            0xA2, 0x00, // LDX #$00
            0x81, 0x10, // STA ($10,X)
            0x00,
        ],
    );
    cpu.memory_mut().write(0x10, 0x00);
    cpu.memory_mut().write(0x11, 0x02);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x0200), 0x05);
}

// ========== Increments and Decrements ==========

#[test]
fn test_inc_dec_memory_wraps() {
    let mut cpu = CPU::with_program(
        FlatMemory::new(),
        &[
            0xE6, 0x10, // INC $10
            0xC6, 0x11, // DEC $11
            0x00,
        ],
    );
    cpu.memory_mut().write(0x10, 0xFF);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x10), 0x00);
    assert_eq!(cpu.memory().read(0x11), 0xFF);
    // Flags reflect the last result
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_inc_sets_zero_on_wrap() {
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xEE, 0x00, 0x03, 0x00]);
    cpu.memory_mut().write(0x0300, 0xFF);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x0300), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_index_register_steps() {
    // LDX #$FF; INX; LDY #$00; DEY; BRK
    let cpu = run_program(&[0xA2, 0xFF, 0xE8, 0xA0, 0x00, 0x88, 0x00]);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag_n());

    // LDX #$02; DEX; DEX; INY; BRK
    let cpu = run_program(&[0xA2, 0x02, 0xCA, 0xCA, 0xC8, 0x00]);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x01);
}

#[test]
fn test_inc_does_not_touch_carry() {
    // SEC; LDX #$FF; INX; BRK
    let cpu = run_program(&[0x38, 0xA2, 0xFF, 0xE8, 0x00]);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

// ========== ADC / SBC ==========

#[test]
fn test_adc_without_carry() {
    // CLC; LDA #$10; ADC #$20; BRK
    let cpu = run_program(&[0x18, 0xA9, 0x10, 0x69, 0x20, 0x00]);
    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_with_carry_in() {
    // SEC; LDA #$10; ADC #$20; BRK
    let cpu = run_program(&[0x38, 0xA9, 0x10, 0x69, 0x20, 0x00]);
    assert_eq!(cpu.a(), 0x31);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_out() {
    // LDA #$FF; ADC #$01; BRK
    let cpu = run_program(&[0xA9, 0xFF, 0x69, 0x01, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_zero_page() {
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xA9, 0x40, 0x65, 0x10, 0x00]);
    cpu.memory_mut().write(0x10, 0x45);
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x85);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbc_no_borrow() {
    // SEC; LDA #$10; SBC #$01; BRK
    let cpu = run_program(&[0x38, 0xA9, 0x10, 0xE9, 0x01, 0x00]);
    assert_eq!(cpu.a(), 0x0F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_with_borrow_in() {
    // CLC; LDA #$10; SBC #$01; BRK
    let cpu = run_program(&[0x18, 0xA9, 0x10, 0xE9, 0x01, 0x00]);
    assert_eq!(cpu.a(), 0x0E);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_underflow() {
    // SEC; LDA #$00; SBC #$01; BRK
    let cpu = run_program(&[0x38, 0xA9, 0x00, 0xE9, 0x01, 0x00]);
    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_equal_operands() {
    // SEC; LDA #$42; SBC #$42; BRK
    let cpu = run_program(&[0x38, 0xA9, 0x42, 0xE9, 0x42, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

// ========== Logic ==========

#[test]
fn test_and_ora_eor() {
    // LDA #$F0; AND #$3C; BRK
    let cpu = run_program(&[0xA9, 0xF0, 0x29, 0x3C, 0x00]);
    assert_eq!(cpu.a(), 0x30);

    // LDA #$F0; ORA #$0F; BRK
    let cpu = run_program(&[0xA9, 0xF0, 0x09, 0x0F, 0x00]);
    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_n());

    // LDA #$FF; EOR #$FF; BRK
    let cpu = run_program(&[0xA9, 0xFF, 0x49, 0xFF, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_and_masks_random_byte_like_snake() {
    // LDA #$FE; AND #$03; BRK
    let cpu = run_program(&[0xA9, 0xFE, 0x29, 0x03, 0x00]);
    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn test_bit() {
    let mut cpu = CPU::with_program(
        FlatMemory::new(),
        &[
            0xA9, 0x01, // LDA #$01
            0x24, 0x10, // BIT $10
            0x00,
        ],
    );
    cpu.memory_mut().write(0x10, 0x80);
    cpu.run().unwrap();

    assert!(cpu.flag_z()); // 0x01 & 0x80 == 0
    assert!(cpu.flag_n()); // bit 7 of memory
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_absolute_nonzero() {
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xA9, 0x03, 0x2C, 0x00, 0x03, 0x00]);
    cpu.memory_mut().write(0x0300, 0x02);
    cpu.run().unwrap();

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

// ========== Comparisons ==========

#[test]
fn test_cmp_greater() {
    // LDA #$42; CMP #$30; BRK
    let cpu = run_program(&[0xA9, 0x42, 0xC9, 0x30, 0x00]);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_equal() {
    let cpu = run_program(&[0xA9, 0x42, 0xC9, 0x42, 0x00]);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    // 0x10 - 0x20 = 0xF0
    let cpu = run_program(&[0xA9, 0x10, 0xC9, 0x20, 0x00]);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_carry_independent_of_sign() {
    // A = 0x01 < 0xFF, but the wrapped difference 0x02 is positive
    let cpu = run_program(&[0xA9, 0x01, 0xC9, 0xFF, 0x00]);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_n());

    // A = 0xFF >= 0x01, difference 0xFE is negative
    let cpu = run_program(&[0xA9, 0xFF, 0xC9, 0x01, 0x00]);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpx_cpy() {
    // LDX #$05; CPX #$05; BRK
    let cpu = run_program(&[0xA2, 0x05, 0xE0, 0x05, 0x00]);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());

    // LDY #$04; CPY #$05; BRK
    let cpu = run_program(&[0xA0, 0x04, 0xC0, 0x05, 0x00]);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cpx_zero_page() {
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xA2, 0x20, 0xE4, 0x10, 0x00]);
    cpu.memory_mut().write(0x10, 0x10);
    cpu.run().unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.x(), 0x20);
}

// ========== Shifts ==========

#[test]
fn test_lsr_accumulator() {
    // LDA #$03; LSR A; BRK
    let cpu = run_program(&[0xA9, 0x03, 0x4A, 0x00]);
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());

    // LDA #$01; LSR A -> zero
    let cpu = run_program(&[0xA9, 0x01, 0x4A, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_lsr_memory() {
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0x46, 0x10, 0x00]);
    cpu.memory_mut().write(0x10, 0x82);
    cpu.run().unwrap();

    assert_eq!(cpu.memory().read(0x10), 0x41);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_asl() {
    // LDA #$81; ASL A; BRK
    let cpu = run_program(&[0xA9, 0x81, 0x0A, 0x00]);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());

    let mut cpu = CPU::with_program(FlatMemory::new(), &[0x06, 0x10, 0x00]);
    cpu.memory_mut().write(0x10, 0x40);
    cpu.run().unwrap();
    assert_eq!(cpu.memory().read(0x10), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

// ========== Branches ==========

#[test]
fn test_countdown_loop() {
    // LDX #$05; loop: DEX; BNE loop; BRK
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00]);
    let steps = cpu.run().unwrap();

    assert_eq!(cpu.x(), 0);
    assert_eq!(steps, 1 + 5 * 2 + 1);
}

#[test]
fn test_beq_forward() {
    // LDA #$00; BEQ +2; LDA #$01; BRK
    let cpu = run_program(&[0xA9, 0x00, 0xF0, 0x02, 0xA9, 0x01, 0x00]);
    assert_eq!(cpu.a(), 0x00);

    // LDA #$05; BEQ +2 (not taken); LDA #$01; BRK
    let cpu = run_program(&[0xA9, 0x05, 0xF0, 0x02, 0xA9, 0x01, 0x00]);
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_carry_branches() {
    // SEC; BCS +2; LDX #$01; BRK
    let cpu = run_program(&[0x38, 0xB0, 0x02, 0xA2, 0x01, 0x00]);
    assert_eq!(cpu.x(), 0x00);

    // SEC; BCC +2 (not taken); LDX #$01; BRK
    let cpu = run_program(&[0x38, 0x90, 0x02, 0xA2, 0x01, 0x00]);
    assert_eq!(cpu.x(), 0x01);
}

#[test]
fn test_sign_branches() {
    // LDA #$80; BMI +2; LDY #$01; BRK
    let cpu = run_program(&[0xA9, 0x80, 0x30, 0x02, 0xA0, 0x01, 0x00]);
    assert_eq!(cpu.y(), 0x00);

    // LDA #$80; BPL +2 (not taken); LDY #$01; BRK
    let cpu = run_program(&[0xA9, 0x80, 0x10, 0x02, 0xA0, 0x01, 0x00]);
    assert_eq!(cpu.y(), 0x01);
}

#[test]
fn test_branch_does_not_change_flags() {
    // LDA #$00; BEQ +0; BRK
    let cpu = run_program(&[0xA9, 0x00, 0xF0, 0x00, 0x00]);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

// ========== Jumps and Subroutines ==========

#[test]
fn test_jmp_absolute() {
    // JMP $0606; LDA #$01; BRK; LDA #$02; BRK
    let cpu = run_program(&[0x4C, 0x06, 0x06, 0xA9, 0x01, 0x00, 0xA9, 0x02, 0x00]);
    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn test_jsr_rts() {
    let cpu = run_program(&[
        0x20, 0x06, 0x06, // 0600: JSR $0606
        0x00, // 0603: BRK
        0xEA, 0xEA, // 0604: padding
        0xA9, 0x09, // 0606: LDA #$09
        0x60, // 0608: RTS
    ]);
    assert_eq!(cpu.a(), 0x09);
    assert_eq!(cpu.pc(), 0x0604);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_nested_jsr() {
    let cpu = run_program(&[
        0x20, 0x04, 0x06, // 0600: JSR $0604
        0x00, // 0603: BRK
        0x20, 0x08, 0x06, // 0604: JSR $0608
        0x60, // 0607: RTS
        0xE8, // 0608: INX
        0x60, // 0609: RTS
    ]);
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== Stack, Transfers, Flags ==========

#[test]
fn test_pha_pla() {
    // LDA #$80; PHA; LDA #$00; PLA; BRK
    let cpu = run_program(&[0xA9, 0x80, 0x48, 0xA9, 0x00, 0x68, 0x00]);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.memory().read(0x01FF), 0x80);
}

#[test]
fn test_transfers() {
    // LDA #$42; TAX; TAY; LDA #$00; TXA; BRK
    let cpu = run_program(&[0xA9, 0x42, 0xAA, 0xA8, 0xA9, 0x00, 0x8A, 0x00]);
    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.y(), 0x42);
    assert_eq!(cpu.a(), 0x42);

    // LDY #$00; LDA #$05; TYA; BRK
    let cpu = run_program(&[0xA0, 0x00, 0xA9, 0x05, 0x98, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_clc_sec() {
    let cpu = run_program(&[0x38, 0x00]);
    assert!(cpu.flag_c());

    let cpu = run_program(&[0x38, 0x18, 0x00]);
    assert!(!cpu.flag_c());
}

#[test]
fn test_nop_only_advances_pc() {
    let mut cpu = CPU::with_program(FlatMemory::new(), &[0xEA, 0x00]);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.a(), 0);
    assert!(!cpu.flag_z());
}
