use crate::cpu::{Cond, Cpu, Timing};
use crate::memory::Memory;
use crate::Result;

#[inline]
fn branch(taken: bool) -> Timing {
    if taken {
        Timing::Taken
    } else {
        Timing::Base
    }
}

impl Cpu {
    /// `JR [cc,]r8`. The displacement is always fetched; it is relative to
    /// the address after the instruction.
    pub(super) fn exec_jr<M: Memory>(&mut self, mem: &mut M, cc: Option<Cond>) -> Result<Timing> {
        let offset = self.fetch8(mem)? as i8;
        let take = self.condition(cc);
        if take {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        }
        Ok(branch(take && cc.is_some()))
    }

    pub(super) fn exec_jp<M: Memory>(&mut self, mem: &mut M, cc: Option<Cond>) -> Result<Timing> {
        let addr = self.fetch16(mem)?;
        let take = self.condition(cc);
        if take {
            self.regs.pc = addr;
        }
        Ok(branch(take && cc.is_some()))
    }

    pub(super) fn exec_jp_hl(&mut self) -> Result<Timing> {
        self.regs.pc = self.regs.hl();
        Ok(Timing::Base)
    }

    pub(super) fn exec_call<M: Memory>(&mut self, mem: &mut M, cc: Option<Cond>) -> Result<Timing> {
        let addr = self.fetch16(mem)?;
        let take = self.condition(cc);
        if take {
            let ret = self.regs.pc;
            self.push_u16(mem, ret)?;
            self.regs.pc = addr;
        }
        Ok(branch(take && cc.is_some()))
    }

    pub(super) fn exec_ret<M: Memory>(&mut self, mem: &mut M, cc: Option<Cond>) -> Result<Timing> {
        let take = self.condition(cc);
        if take {
            self.regs.pc = self.pop_u16(mem)?;
        }
        Ok(branch(take && cc.is_some()))
    }

    pub(super) fn exec_reti<M: Memory>(&mut self, mem: &mut M) -> Result<Timing> {
        self.regs.pc = self.pop_u16(mem)?;
        self.regs.ime = true;
        Ok(Timing::Base)
    }

    pub(super) fn exec_rst<M: Memory>(&mut self, mem: &mut M, vector: u8) -> Result<Timing> {
        let ret = self.regs.pc;
        self.push_u16(mem, ret)?;
        self.regs.pc = vector as u16;
        Ok(Timing::Base)
    }
}
