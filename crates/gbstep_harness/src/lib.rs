//! Host side of the single-step conformance protocol.
//!
//! A host supplies a start state (registers plus a seed sequence), the core
//! runs exactly one instruction on a fresh seeded machine, and the host gets
//! back the finish state (registers, clock and memory access trace).

pub mod json;
pub mod protocol;

use gbstep::{Machine, SeededMemory, WordOrder};

pub use protocol::{FinishState, ProtocolError, StartState};

/// Run one instruction from `start` and collect the finish state.
pub fn run(start: &StartState, word_order: WordOrder) -> gbstep::Result<FinishState> {
    let memory = SeededMemory::with_word_order(start.seed.clone(), word_order)?;
    let mut machine = Machine::new(memory, start.registers);
    let report = machine.step()?;
    log::debug!(
        "{} at PC=0x{:04X}: {} cycles, {} accesses",
        report.instruction,
        report.instruction.pc,
        report.cycles,
        report.trace.len()
    );
    Ok(FinishState {
        registers: report.registers,
        clock: report.clock,
        trace: report.trace,
    })
}
