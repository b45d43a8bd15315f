//! Instruction-level Game Boy (LR35902) CPU core.
//!
//! [`Machine::step`] runs exactly one instruction and reports its cycle cost
//! together with the ordered trace of every memory access it made.

pub mod cpu;
mod error;
pub mod machine;
pub mod memory;

pub use cpu::{CbInstruction, Cpu, CpuInit, Executed, Flags, Instruction, Registers};
pub use error::{Error, Result};
pub use machine::{Machine, StepReport};
pub use memory::{AccessKind, AccessTrace, FixedMemory, Memory, MemoryRecord, SeededMemory, WordOrder};
