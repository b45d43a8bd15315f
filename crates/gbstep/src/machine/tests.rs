use super::*;
use crate::memory::Memory;
use crate::{Error, Flags};

fn machine_with(seed: &[u8], init: CpuInit, program: &[u8]) -> Machine<SeededMemory> {
    let mut machine = Machine::with_seed(seed.to_vec(), init).unwrap();
    for (i, &byte) in program.iter().enumerate() {
        machine
            .memory_mut()
            .preload(init.pc.wrapping_add(i as u16), byte);
    }
    machine
}

#[test]
fn step_accumulates_clock() {
    let init = CpuInit::builder().pc(0x0100).build();
    // NOP; LD BC,d16; JP a16
    let mut machine = machine_with(&[0x00], init, &[0x00, 0x01, 0x34, 0x12, 0xC3, 0x00, 0x01]);

    let nop = machine.step().unwrap();
    assert_eq!(nop.cycles, 1);
    assert_eq!(nop.clock, 1);

    let ld = machine.step().unwrap();
    assert_eq!(ld.cycles, 3);
    assert_eq!(ld.clock, 4);
    assert_eq!(ld.registers.bc(), 0x1234);

    let jp = machine.step().unwrap();
    assert_eq!(jp.clock, 4 + jp.cycles as u64);
    assert_eq!(machine.registers().pc, 0x0100);
    assert_eq!(machine.clock(), jp.clock);
    assert_eq!(machine.t_cycles(), jp.clock * 4);
}

#[test]
fn report_trace_covers_only_the_last_step() {
    let init = CpuInit::builder().h(0xC0).build();
    // LD A,(HL); LD (HL),A
    let mut machine = machine_with(&[0x00], init, &[0x7E, 0x77]);

    let first = machine.step().unwrap();
    assert_eq!(first.trace.len(), 2);

    let second = machine.step().unwrap();
    assert_eq!(
        second.trace,
        vec![
            MemoryRecord::read8(0x0001, 0x77),
            MemoryRecord::write8(0xC000, 0x00),
        ]
    );
    assert_eq!(machine.trace(), second.trace.as_slice());
}

#[test]
fn illegal_opcode_leaves_clock_unchanged() {
    let init = CpuInit::builder().pc(0x0200).build();
    let mut machine = machine_with(&[0x00], init, &[0x00, 0xDD]);

    machine.step().unwrap();
    assert_eq!(machine.clock(), 1);

    let err = machine.step().unwrap_err();
    assert_eq!(
        err,
        Error::IllegalOpcode {
            opcode: 0xDD,
            pc: 0x0201,
        }
    );
    assert_eq!(machine.clock(), 1);
    assert_eq!(machine.registers().pc, 0x0202);
    assert_eq!(machine.trace(), &[MemoryRecord::read8(0x0201, 0xDD)]);
}

#[test]
fn fixed_memory_overrun_propagates() {
    let init = CpuInit::builder().pc(0x0002).build();
    // LD A,(a16) whose operand runs past the image.
    let mut machine = Machine::with_image(vec![0x00, 0x00, 0xFA, 0x00], init).unwrap();

    let err = machine.step().unwrap_err();
    assert_eq!(err, Error::OutOfRange { address: 4, len: 4 });
    assert_eq!(machine.clock(), 0);
}

#[test]
fn push_straddling_image_end_leaves_memory_intact() {
    // PUSH BC with SP two past the end: the word would cover 0x0003..=0x0004.
    let init = CpuInit::builder().sp(0x0005).b(0x12).c(0x34).build();
    let mut machine = Machine::with_image(vec![0xC5, 0x00, 0x00, 0x00], init).unwrap();

    let err = machine.step().unwrap_err();
    assert_eq!(err, Error::OutOfRange { address: 4, len: 4 });
    assert_eq!(machine.memory().as_bytes(), &[0xC5, 0x00, 0x00, 0x00]);
    assert_eq!(machine.trace(), &[MemoryRecord::read8(0x0000, 0xC5)]);
    assert_eq!(machine.clock(), 0);
}

#[test]
fn empty_seed_and_image_are_rejected() {
    assert_eq!(
        Machine::with_seed(Vec::new(), CpuInit::default()).unwrap_err(),
        Error::EmptySeed
    );
    assert_eq!(
        Machine::with_image(Vec::new(), CpuInit::default()).unwrap_err(),
        Error::EmptyImage
    );
}

#[test]
fn identical_inputs_give_identical_reports() {
    let seed = [0x3E, 0x42, 0xC6, 0x10, 0xE0, 0x80, 0xCB, 0x37];
    let init = CpuInit::builder().pc(0x4000).sp(0xFFFE).carry(true).build();

    let mut left = Machine::with_seed(seed.to_vec(), init).unwrap();
    let mut right = Machine::with_seed(seed.to_vec(), init).unwrap();

    for _ in 0..16 {
        let a = left.step();
        let b = right.step();
        assert_eq!(a, b);
        if a.is_err() {
            break;
        }
    }
    assert_eq!(left, right);
}

#[test]
fn json_snapshot_resumes_identically() {
    let seed = [0x04, 0x05, 0x3C, 0x87, 0x17, 0xC5, 0x00];
    let init = CpuInit::builder().a(0x81).sp(0xD000).build();
    let mut machine = Machine::with_seed(seed.to_vec(), init).unwrap();
    machine.step().unwrap();
    machine.step().unwrap();

    let json = serde_json::to_string(&machine).unwrap();
    let mut restored: Machine<SeededMemory> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.clock(), machine.clock());
    assert_eq!(restored.registers(), machine.registers());

    for _ in 0..4 {
        assert_eq!(restored.step(), machine.step());
    }
}

#[test]
fn with_clock_restores_state() {
    let mut registers = Registers::default();
    registers.pc = 0x0100;
    registers.set_flag(Flags::C, true);
    let memory = SeededMemory::new(vec![0x00]).unwrap();

    let mut machine = Machine::with_clock(memory, registers, 1_000);
    let report = machine.step().unwrap();
    assert_eq!(report.clock, 1_001);
    assert!(machine.registers().flag(Flags::C));

    let (registers, memory, clock) = machine.into_parts();
    assert_eq!(registers.pc, 0x0101);
    assert_eq!(memory.peek(0x0100), Some(0x00));
    assert_eq!(clock, 1_001);
}

#[test]
fn ime_accessors() {
    let mut machine = machine_with(&[0x00], CpuInit::default(), &[0xFB, 0xF3]);
    assert!(!machine.ime());
    machine.step().unwrap();
    assert!(machine.ime());
    machine.step().unwrap();
    assert!(!machine.ime());

    machine.set_ime(true);
    assert!(machine.registers().ime);
}

#[test]
fn every_legal_opcode_runs_on_seeded_memory() {
    for opcode in 0..=255u8 {
        let init = CpuInit::builder().pc(0x8000).sp(0xC000).build();
        let mut machine = machine_with(&[0x5A, 0xA5, 0x01], init, &[opcode]);
        let result = machine.step();
        if crate::Instruction::decode(opcode).is_illegal() {
            assert!(result.is_err(), "opcode {opcode:02X}");
        } else {
            let report = result.unwrap_or_else(|err| panic!("opcode {opcode:02X}: {err}"));
            assert!(report.cycles > 0, "opcode {opcode:02X}");
            assert_eq!(report.trace[0], MemoryRecord::read8(0x8000, opcode));
        }
    }
}
