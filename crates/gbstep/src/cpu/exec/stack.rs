use crate::cpu::{Cpu, Reg16Stack, Timing};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    pub(super) fn exec_push<M: Memory>(&mut self, mem: &mut M, rr: Reg16Stack) -> Result<Timing> {
        let value = self.read_stack_pair(rr);
        self.push_u16(mem, value)?;
        Ok(Timing::Base)
    }

    /// `POP AF` drops the low nibble of F.
    pub(super) fn exec_pop<M: Memory>(&mut self, mem: &mut M, rr: Reg16Stack) -> Result<Timing> {
        let value = self.pop_u16(mem)?;
        self.write_stack_pair(rr, value);
        Ok(Timing::Base)
    }
}
