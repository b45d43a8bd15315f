use super::{CbInstruction, Cpu, Flags};
use crate::memory::Memory;
use crate::Result;

impl Cpu {
    /// Execute a CB-prefixed instruction (bit operations, shifts and
    /// rotates). `(HL)` targets read the byte, then write it back unless the
    /// operation is BIT.
    pub(super) fn exec_cb<M: Memory>(&mut self, mem: &mut M, cb: CbInstruction) -> Result<()> {
        let target = cb.target();
        let value = self.read_reg8(mem, target)?;

        match cb {
            CbInstruction::Rotate(op, _) => {
                let result = self.alu_rotate(op, value);
                self.write_reg8(mem, target, result)
            }
            CbInstruction::Bit(bit, _) => {
                // Preserve C, set H=1, N=0.
                self.regs.set_flag(Flags::Z, value & (1 << bit) == 0);
                self.regs.set_flag(Flags::N, false);
                self.regs.set_flag(Flags::H, true);
                Ok(())
            }
            CbInstruction::Res(bit, _) => self.write_reg8(mem, target, value & !(1 << bit)),
            CbInstruction::Set(bit, _) => self.write_reg8(mem, target, value | (1 << bit)),
        }
    }
}
