use super::{AluOp, Cpu, Flags, RotOp};

impl Cpu {
    /// Apply an 8-bit accumulator operation.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;

        self.regs.flags = Flags::empty();
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::H, half & 0x10 != 0);
        self.regs.set_flag(Flags::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.subtract(value, use_carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    fn alu_cp(&mut self, value: u8) {
        self.subtract(value, false);
    }

    fn subtract(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.regs.flag(Flags::C));

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.flags = Flags::N;
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::H, half < 0);
        self.regs.set_flag(Flags::C, full < 0);
        result
    }

    #[inline]
    fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.regs.flags = Flags::H;
        self.regs.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.regs.flags = Flags::empty();
        self.regs.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.regs.flags = Flags::empty();
        self.regs.set_flag(Flags::Z, result == 0);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N and A to compute a correction value. Updates A, Z, H, C;
    /// leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.regs.flag(Flags::C) { 0x60 } else { 0x00 };
        if self.regs.flag(Flags::H) {
            adjust |= 0x06;
        }

        if !self.regs.flag(Flags::N) {
            // After an addition.
            if a & 0x0F > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.set_flag(Flags::C, adjust >= 0x60);
        self.regs.set_flag(Flags::H, false);
        self.regs.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL). C is unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, value & 0x0F == 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::N, true);
        self.regs.set_flag(Flags::H, value & 0x0F == 0);
        result
    }

    /// `ADD HL,rr`: Z is unaffected, N cleared, H from bit 11, C from bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.regs.set_flag(Flags::N, false);
        self.regs.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.regs.set_flag(Flags::C, hl as u32 + value as u32 > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Add a signed 8-bit immediate to a 16-bit base, as `ADD SP,r8` and
    /// `LD HL,SP+r8` do.
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte addition.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.flags = Flags::empty();
        self.regs.set_flag(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.regs.set_flag(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Rotate/shift `value` and set Z, N, H, C for the CB-space forms.
    pub(super) fn alu_rotate(&mut self, op: RotOp, value: u8) -> u8 {
        let carry_in = self.regs.flag(Flags::C);
        let (result, carry_out) = match op {
            RotOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            RotOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            RotOp::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            RotOp::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            RotOp::Sla => (value << 1, value & 0x80 != 0),
            RotOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            RotOp::Swap => (value.rotate_left(4), false),
            RotOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.regs.flags = Flags::empty();
        self.regs.set_flag(Flags::Z, result == 0);
        self.regs.set_flag(Flags::C, carry_out);
        result
    }
}
