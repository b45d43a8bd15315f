mod alu;
mod cb;
mod decode;
mod exec;
mod helpers;
mod regs;
pub mod timing;


use std::fmt;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::memory::Memory;
use crate::Result;

pub use decode::{AluOp, CbInstruction, Cond, Indirect, Instruction, Reg16, Reg16Stack, Reg8, RotOp};
pub use regs::{Flags, Registers};
pub use timing::Timing;

/// Initial register values for a new CPU.
///
/// Every field defaults to zero / cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct CpuInit {
    #[builder(default)]
    pub a: u8,
    #[builder(default)]
    pub b: u8,
    #[builder(default)]
    pub c: u8,
    #[builder(default)]
    pub d: u8,
    #[builder(default)]
    pub e: u8,
    #[builder(default)]
    pub h: u8,
    #[builder(default)]
    pub l: u8,
    #[builder(default)]
    pub sp: u16,
    #[builder(default)]
    pub pc: u16,
    #[builder(default)]
    pub zero: bool,
    #[builder(default)]
    pub subtract: bool,
    #[builder(default)]
    pub half_carry: bool,
    #[builder(default)]
    pub carry: bool,
    #[builder(default)]
    pub ime: bool,
}

impl From<CpuInit> for Registers {
    fn from(init: CpuInit) -> Self {
        let mut regs = Registers {
            a: init.a,
            b: init.b,
            c: init.c,
            d: init.d,
            e: init.e,
            h: init.h,
            l: init.l,
            flags: Flags::empty(),
            sp: init.sp,
            pc: init.pc,
            ime: init.ime,
        };
        regs.set_flag(Flags::Z, init.zero);
        regs.set_flag(Flags::N, init.subtract);
        regs.set_flag(Flags::H, init.half_carry);
        regs.set_flag(Flags::C, init.carry);
        regs
    }
}

impl From<Registers> for CpuInit {
    fn from(regs: Registers) -> Self {
        Self {
            a: regs.a,
            b: regs.b,
            c: regs.c,
            d: regs.d,
            e: regs.e,
            h: regs.h,
            l: regs.l,
            sp: regs.sp,
            pc: regs.pc,
            zero: regs.flag(Flags::Z),
            subtract: regs.flag(Flags::N),
            half_carry: regs.flag(Flags::H),
            carry: regs.flag(Flags::C),
            ime: regs.ime,
        }
    }
}

/// Game Boy CPU core.
///
/// There is no HALT/STOP low-power state and no interrupt dispatch: each
/// [`Cpu::step`] runs one complete instruction, and everything that
/// survives between steps lives in [`Registers`] and memory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpu {
    pub regs: Registers,
}

/// What a single [`Cpu::step`] executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Executed {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub instruction: Instruction,
    /// Decoded second byte when `opcode` is 0xCB.
    pub cb: Option<CbInstruction>,
    pub timing: Timing,
    /// Cost in machine cycles.
    pub cycles: u8,
}

impl Executed {
    #[inline]
    pub fn branch_taken(&self) -> bool {
        self.timing == Timing::Taken
    }

    #[inline]
    pub fn cb_opcode(&self) -> Option<u8> {
        match self.timing {
            Timing::Cb(cb) => Some(cb),
            _ => None,
        }
    }
}

impl fmt::Display for Executed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cb {
            Some(cb) => cb.fmt(f),
            None => self.instruction.fmt(f),
        }
    }
}

impl Cpu {
    pub fn new(init: CpuInit) -> Self {
        Self { regs: init.into() }
    }

    /// Fetch, decode and execute exactly one instruction.
    ///
    /// On error the instruction is abandoned where it failed: registers and
    /// memory keep the effects of the accesses that already succeeded.
    pub fn step<M: Memory>(&mut self, mem: &mut M) -> Result<Executed> {
        let pc = self.regs.pc;
        let opcode = self.fetch8(mem)?;
        let instruction = Instruction::decode(opcode);
        let timing = self.execute(mem, pc, instruction)?;
        let cycles = timing::cycles_for(opcode, timing);
        let cb = match timing {
            Timing::Cb(cb) => Some(CbInstruction::decode(cb)),
            _ => None,
        };

        let executed = Executed {
            pc,
            opcode,
            instruction,
            cb,
            timing,
            cycles,
        };
        log::trace!(
            "PC=0x{pc:04X} op=0x{opcode:02X} {executed} cycles={cycles} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X}",
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            sp = self.regs.sp,
        );
        Ok(executed)
    }
}
