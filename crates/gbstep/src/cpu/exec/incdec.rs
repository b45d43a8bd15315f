use crate::cpu::{Cpu, Reg16, Reg8, Timing};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    pub(super) fn exec_inc8<M: Memory>(&mut self, mem: &mut M, reg: Reg8) -> Result<Timing> {
        let value = self.read_reg8(mem, reg)?;
        let result = self.alu_inc8(value);
        self.write_reg8(mem, reg, result)?;
        Ok(Timing::Base)
    }

    pub(super) fn exec_dec8<M: Memory>(&mut self, mem: &mut M, reg: Reg8) -> Result<Timing> {
        let value = self.read_reg8(mem, reg)?;
        let result = self.alu_dec8(value);
        self.write_reg8(mem, reg, result)?;
        Ok(Timing::Base)
    }

    // 16-bit INC/DEC leave the flags alone.
    pub(super) fn exec_inc16(&mut self, rr: Reg16) -> Result<Timing> {
        let value = self.read_reg16(rr).wrapping_add(1);
        self.write_reg16(rr, value);
        Ok(Timing::Base)
    }

    pub(super) fn exec_dec16(&mut self, rr: Reg16) -> Result<Timing> {
        let value = self.read_reg16(rr).wrapping_sub(1);
        self.write_reg16(rr, value);
        Ok(Timing::Base)
    }
}
