mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{CbInstruction, Cpu, Instruction, Timing};
use crate::memory::Memory;
use crate::{Error, Result};

impl Cpu {
    /// Execute a decoded base instruction and report which cycle table
    /// applies.
    ///
    /// `pc` is the address the opcode was fetched from.
    pub(super) fn execute<M: Memory>(
        &mut self,
        mem: &mut M,
        pc: u16,
        instruction: Instruction,
    ) -> Result<Timing> {
        match instruction {
            Instruction::Nop => Ok(Timing::Base),

            // Loads.
            Instruction::LdR16Imm(rr) => self.exec_ld_rr_d16(mem, rr),
            Instruction::LdIndA(ind) => self.exec_ld_indirect_a(mem, ind),
            Instruction::LdAInd(ind) => self.exec_ld_a_indirect(mem, ind),
            Instruction::LdImm16Sp => self.exec_ld_a16_sp(mem),
            Instruction::LdR8Imm(r) => self.exec_ld_r_d8(mem, r),
            Instruction::Ld8 { dst, src } => self.exec_ld_r_r(mem, dst, src),
            Instruction::LdhImmA => self.exec_ldh_a8(mem, true),
            Instruction::LdhAImm => self.exec_ldh_a8(mem, false),
            Instruction::LdhCA => self.exec_ldh_c(mem, true),
            Instruction::LdhAC => self.exec_ldh_c(mem, false),
            Instruction::LdImm16A => self.exec_ld_a16_a(mem, true),
            Instruction::LdAImm16 => self.exec_ld_a16_a(mem, false),
            Instruction::LdHlSpImm => self.exec_ld_hl_sp_r8(mem),
            Instruction::LdSpHl => self.exec_ld_sp_hl(),

            // Increment/decrement.
            Instruction::Inc16(rr) => self.exec_inc16(rr),
            Instruction::Dec16(rr) => self.exec_dec16(rr),
            Instruction::Inc8(r) => self.exec_inc8(mem, r),
            Instruction::Dec8(r) => self.exec_dec8(mem, r),

            // Arithmetic and logic.
            Instruction::Alu(op, src) => self.exec_alu_reg(mem, op, src),
            Instruction::AluImm(op) => self.exec_alu_imm(mem, op),
            Instruction::AddHl(rr) => self.exec_add_hl_rr(rr),
            Instruction::AddSpImm => self.exec_add_sp_r8(mem),
            Instruction::RotateA(op) => self.exec_rotate_a(op),
            Instruction::Daa => self.exec_daa(),
            Instruction::Cpl => self.exec_cpl(),
            Instruction::Scf => self.exec_scf(),
            Instruction::Ccf => self.exec_ccf(),

            // Control flow.
            Instruction::Jr(cc) => self.exec_jr(mem, cc),
            Instruction::Jp(cc) => self.exec_jp(mem, cc),
            Instruction::JpHl => self.exec_jp_hl(),
            Instruction::Call(cc) => self.exec_call(mem, cc),
            Instruction::Ret(cc) => self.exec_ret(mem, cc),
            Instruction::Reti => self.exec_reti(mem),
            Instruction::Rst(vector) => self.exec_rst(mem, vector),

            // Stack.
            Instruction::Push(rr) => self.exec_push(mem, rr),
            Instruction::Pop(rr) => self.exec_pop(mem, rr),

            // Miscellaneous.
            Instruction::Halt => self.exec_halt(),
            Instruction::Stop => self.exec_stop(mem),
            Instruction::Di => self.exec_di(),
            Instruction::Ei => self.exec_ei(),

            Instruction::Prefix => {
                let cb = self.fetch8(mem)?;
                self.exec_cb(mem, CbInstruction::decode(cb))?;
                Ok(Timing::Cb(cb))
            }

            // Pandocs documents a set of "opcode holes" (D3, DB, DD, E3, E4,
            // EB, EC, ED, F4, FC, FD) that hard-lock the CPU until power-off.
            // They are reported instead of being run as NOPs.
            Instruction::Illegal(opcode) => {
                log::error!(
                    "GB CPU illegal opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                Err(Error::IllegalOpcode { opcode, pc })
            }
        }
    }
}
