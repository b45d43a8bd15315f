use crate::cpu::{Cpu, Indirect, Reg16, Reg8, Timing};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    pub(super) fn exec_ld_rr_d16<M: Memory>(&mut self, mem: &mut M, rr: Reg16) -> Result<Timing> {
        let value = self.fetch16(mem)?;
        self.write_reg16(rr, value);
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_r_d8<M: Memory>(&mut self, mem: &mut M, reg: Reg8) -> Result<Timing> {
        let value = self.fetch8(mem)?;
        self.write_reg8(mem, reg, value)?;
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_r_r<M: Memory>(
        &mut self,
        mem: &mut M,
        dst: Reg8,
        src: Reg8,
    ) -> Result<Timing> {
        let value = self.read_reg8(mem, src)?;
        self.write_reg8(mem, dst, value)?;
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_a16_sp<M: Memory>(&mut self, mem: &mut M) -> Result<Timing> {
        let addr = self.fetch16(mem)?;
        mem.write16(addr, self.regs.sp)?;
        Ok(Timing::Base)
    }

    /// `LDH (a8),A` when `store`, else `LDH A,(a8)`.
    pub(super) fn exec_ldh_a8<M: Memory>(&mut self, mem: &mut M, store: bool) -> Result<Timing> {
        let offset = self.fetch8(mem)? as u16;
        let addr = 0xFF00u16.wrapping_add(offset);
        if store {
            mem.write8(addr, self.regs.a)?;
        } else {
            self.regs.a = mem.read8(addr)?;
        }
        Ok(Timing::Base)
    }

    /// `LD (C),A` when `store`, else `LD A,(C)`.
    pub(super) fn exec_ldh_c<M: Memory>(&mut self, mem: &mut M, store: bool) -> Result<Timing> {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        if store {
            mem.write8(addr, self.regs.a)?;
        } else {
            self.regs.a = mem.read8(addr)?;
        }
        Ok(Timing::Base)
    }

    /// `LD (a16),A` when `store`, else `LD A,(a16)`.
    pub(super) fn exec_ld_a16_a<M: Memory>(&mut self, mem: &mut M, store: bool) -> Result<Timing> {
        let addr = self.fetch16(mem)?;
        if store {
            mem.write8(addr, self.regs.a)?;
        } else {
            self.regs.a = mem.read8(addr)?;
        }
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_indirect_a<M: Memory>(
        &mut self,
        mem: &mut M,
        ind: Indirect,
    ) -> Result<Timing> {
        let addr = self.indirect_addr(ind);
        mem.write8(addr, self.regs.a)?;
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_a_indirect<M: Memory>(
        &mut self,
        mem: &mut M,
        ind: Indirect,
    ) -> Result<Timing> {
        let addr = self.indirect_addr(ind);
        self.regs.a = mem.read8(addr)?;
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_hl_sp_r8<M: Memory>(&mut self, mem: &mut M) -> Result<Timing> {
        let imm = self.fetch8(mem)?;
        let value = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(value);
        Ok(Timing::Base)
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> Result<Timing> {
        self.regs.sp = self.regs.hl();
        Ok(Timing::Base)
    }
}
