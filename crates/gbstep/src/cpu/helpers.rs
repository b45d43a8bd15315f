use super::{Cond, Cpu, Flags, Indirect, Reg16, Reg16Stack, Reg8};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    /// Read an 8-bit register or the byte at HL.
    #[inline]
    pub(super) fn read_reg8<M: Memory>(&mut self, mem: &mut M, reg: Reg8) -> Result<u8> {
        Ok(match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlInd => mem.read8(self.regs.hl())?,
            Reg8::A => self.regs.a,
        })
    }

    /// Write an 8-bit register or the byte at HL.
    #[inline]
    pub(super) fn write_reg8<M: Memory>(&mut self, mem: &mut M, reg: Reg8, value: u8) -> Result<()> {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlInd => mem.write8(self.regs.hl(), value)?,
            Reg8::A => self.regs.a = value,
        }
        Ok(())
    }

    #[inline]
    pub(super) fn read_reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn read_stack_pair(&self, reg: Reg16Stack) -> u16 {
        match reg {
            Reg16Stack::BC => self.regs.bc(),
            Reg16Stack::DE => self.regs.de(),
            Reg16Stack::HL => self.regs.hl(),
            Reg16Stack::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_stack_pair(&mut self, reg: Reg16Stack, value: u16) {
        match reg {
            Reg16Stack::BC => self.regs.set_bc(value),
            Reg16Stack::DE => self.regs.set_de(value),
            Reg16Stack::HL => self.regs.set_hl(value),
            Reg16Stack::AF => self.regs.set_af(value),
        }
    }

    /// Resolve `(BC)`, `(DE)`, `(HL+)` or `(HL-)`, applying the HL
    /// post-increment/decrement.
    #[inline]
    pub(super) fn indirect_addr(&mut self, ind: Indirect) -> u16 {
        match ind {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cc: Option<Cond>) -> bool {
        match cc {
            None => true,
            Some(Cond::NZ) => !self.regs.flag(Flags::Z),
            Some(Cond::Z) => self.regs.flag(Flags::Z),
            Some(Cond::NC) => !self.regs.flag(Flags::C),
            Some(Cond::C) => self.regs.flag(Flags::C),
        }
    }

    #[inline]
    pub(super) fn fetch8<M: Memory>(&mut self, mem: &mut M) -> Result<u8> {
        let value = mem.read8(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    /// Fetch a 16-bit immediate as one word access at PC.
    #[inline]
    pub(super) fn fetch16<M: Memory>(&mut self, mem: &mut M) -> Result<u16> {
        let value = mem.read16(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(2);
        Ok(value)
    }

    /// Push a word. The stack grows downward; the word lands at the new SP.
    #[inline]
    pub(super) fn push_u16<M: Memory>(&mut self, mem: &mut M, value: u16) -> Result<()> {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        mem.write16(self.regs.sp, value)
    }

    #[inline]
    pub(super) fn pop_u16<M: Memory>(&mut self, mem: &mut M) -> Result<u16> {
        let value = mem.read16(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        Ok(value)
    }
}
