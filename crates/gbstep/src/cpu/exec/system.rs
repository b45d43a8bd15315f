use crate::cpu::{Cpu, Timing};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    /// HALT costs its cycles and nothing else; there is no low-power state.
    pub(super) fn exec_halt(&mut self) -> Result<Timing> {
        Ok(Timing::Base)
    }

    /// STOP is two bytes long. The padding byte is fetched and ignored.
    pub(super) fn exec_stop<M: Memory>(&mut self, mem: &mut M) -> Result<Timing> {
        let _ = self.fetch8(mem)?;
        Ok(Timing::Base)
    }

    pub(super) fn exec_di(&mut self) -> Result<Timing> {
        self.regs.ime = false;
        Ok(Timing::Base)
    }

    /// EI takes effect immediately.
    pub(super) fn exec_ei(&mut self) -> Result<Timing> {
        self.regs.ime = true;
        Ok(Timing::Base)
    }
}
