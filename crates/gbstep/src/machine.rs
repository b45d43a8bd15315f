//! A CPU paired with its memory and the running cycle clock.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::cpu::{Cpu, CpuInit, Executed, Registers};
use crate::cpu::timing::T_CYCLES_PER_M_CYCLE;
use crate::memory::{FixedMemory, Memory, MemoryRecord, SeededMemory};
use crate::Result;

/// Result of one [`Machine::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub instruction: Executed,
    /// Cost of this instruction in machine cycles.
    pub cycles: u8,
    /// Clock after the instruction, in machine cycles.
    pub clock: u64,
    pub registers: Registers,
    /// Accesses made by this instruction, in order.
    pub trace: Vec<MemoryRecord>,
}

/// Single-step execution host.
///
/// Serializing a machine snapshots registers, memory contents and the clock;
/// the access trace of the last step is not part of the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine<M: Memory> {
    cpu: Cpu,
    memory: M,
    clock: u64,
}

impl<M: Memory> Machine<M> {
    pub fn new(memory: M, init: CpuInit) -> Self {
        let cpu = Cpu::new(init);
        log::debug!(
            "machine created: PC=0x{:04X} SP=0x{:04X} AF=0x{:04X}",
            cpu.regs.pc,
            cpu.regs.sp,
            cpu.regs.af()
        );
        Self {
            cpu,
            memory,
            clock: 0,
        }
    }

    /// Restore a machine mid-run with an existing clock value.
    pub fn with_clock(memory: M, registers: Registers, clock: u64) -> Self {
        log::debug!(
            "machine restored: PC=0x{:04X} clock={clock}",
            registers.pc
        );
        Self {
            cpu: Cpu { regs: registers },
            memory,
            clock,
        }
    }

    /// Execute exactly one instruction.
    ///
    /// On error the clock is left unchanged.
    pub fn step(&mut self) -> Result<StepReport> {
        self.memory.begin_instruction();
        let executed = self.cpu.step(&mut self.memory)?;
        self.clock += executed.cycles as u64;

        Ok(StepReport {
            instruction: executed,
            cycles: executed.cycles,
            clock: self.clock,
            registers: self.cpu.regs,
            trace: self.memory.trace().to_vec(),
        })
    }

    #[inline]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline]
    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    #[inline]
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.cpu.regs
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.cpu.regs.ime
    }

    #[inline]
    pub fn set_ime(&mut self, enabled: bool) {
        self.cpu.regs.ime = enabled;
    }

    /// Elapsed machine cycles.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Elapsed clock in T-states.
    #[inline]
    pub fn t_cycles(&self) -> u64 {
        self.clock * T_CYCLES_PER_M_CYCLE
    }

    #[inline]
    pub fn memory(&self) -> &M {
        &self.memory
    }

    #[inline]
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Accesses made by the most recent step.
    #[inline]
    pub fn trace(&self) -> &[MemoryRecord] {
        self.memory.trace()
    }

    pub fn into_parts(self) -> (Registers, M, u64) {
        (self.cpu.regs, self.memory, self.clock)
    }
}

impl Machine<SeededMemory> {
    pub fn with_seed(seed: impl Into<Vec<u8>>, init: CpuInit) -> Result<Self> {
        Ok(Self::new(SeededMemory::new(seed)?, init))
    }
}

impl Machine<FixedMemory> {
    pub fn with_image(image: impl Into<Vec<u8>>, init: CpuInit) -> Result<Self> {
        Ok(Self::new(FixedMemory::new(image)?, init))
    }
}
