use crate::cpu::{AluOp, Cpu, Flags, Reg16, Reg8, RotOp, Timing};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    /// ALU operation on A with an 8-bit register or `(HL)` operand.
    pub(super) fn exec_alu_reg<M: Memory>(
        &mut self,
        mem: &mut M,
        op: AluOp,
        src: Reg8,
    ) -> Result<Timing> {
        let value = self.read_reg8(mem, src)?;
        self.alu(op, value);
        Ok(Timing::Base)
    }

    /// ALU operation on A with an immediate `d8` operand.
    pub(super) fn exec_alu_imm<M: Memory>(&mut self, mem: &mut M, op: AluOp) -> Result<Timing> {
        let value = self.fetch8(mem)?;
        self.alu(op, value);
        Ok(Timing::Base)
    }

    pub(super) fn exec_add_hl_rr(&mut self, rr: Reg16) -> Result<Timing> {
        let value = self.read_reg16(rr);
        self.alu_add16_hl(value);
        Ok(Timing::Base)
    }

    pub(super) fn exec_add_sp_r8<M: Memory>(&mut self, mem: &mut M) -> Result<Timing> {
        let imm = self.fetch8(mem)?;
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Ok(Timing::Base)
    }

    /// RLCA/RRCA/RLA/RRA: like the CB rotates on A, but Z is always cleared.
    pub(super) fn exec_rotate_a(&mut self, op: RotOp) -> Result<Timing> {
        self.regs.a = self.alu_rotate(op, self.regs.a);
        self.regs.set_flag(Flags::Z, false);
        Ok(Timing::Base)
    }

    pub(super) fn exec_daa(&mut self) -> Result<Timing> {
        self.alu_daa();
        Ok(Timing::Base)
    }

    pub(super) fn exec_cpl(&mut self) -> Result<Timing> {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(Flags::N, true);
        self.regs.set_flag(Flags::H, true);
        Ok(Timing::Base)
    }

    pub(super) fn exec_scf(&mut self) -> Result<Timing> {
        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, false);
        self.regs.set_flag(Flags::C, true);
        Ok(Timing::Base)
    }

    pub(super) fn exec_ccf(&mut self) -> Result<Timing> {
        let carry = self.regs.flag(Flags::C);
        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, false);
        self.regs.set_flag(Flags::C, !carry);
        Ok(Timing::Base)
    }
}
