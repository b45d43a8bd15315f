//! Opcode decoding for the base and CB-prefixed instruction spaces.
//!
//! Every opcode byte maps to exactly one variant; the unused slots decode to
//! [`Instruction::Illegal`]. The field split follows the usual LR35902 opcode
//! tables: `x = op[7:6]`, `y = op[5:3]`, `z = op[2:0]`, `p = y >> 1`,
//! `q = y & 1`.

use std::fmt;

/// 8-bit operand: a register or the byte at HL.
///
/// The discriminants match the register order used by the opcode tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B = 0,
    C = 1,
    D = 2,
    E = 3,
    H = 4,
    L = 5,
    HlInd = 6,
    A = 7,
}

impl Reg8 {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlInd,
            _ => Reg8::A,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlInd => "(HL)",
            Reg8::A => "A",
        }
    }
}

/// Register pair used by 16-bit loads and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        }
    }
}

/// Register pair used by PUSH/POP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16Stack {
    BC,
    DE,
    HL,
    AF,
}

impl Reg16Stack {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Reg16Stack::BC,
            1 => Reg16Stack::DE,
            2 => Reg16Stack::HL,
            _ => Reg16Stack::AF,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Reg16Stack::BC => "BC",
            Reg16Stack::DE => "DE",
            Reg16Stack::HL => "HL",
            Reg16Stack::AF => "AF",
        }
    }
}

/// Address operand of `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirect {
    BC,
    DE,
    /// `(HL+)`: post-increment.
    HlInc,
    /// `(HL-)`: post-decrement.
    HlDec,
}

impl Indirect {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        }
    }
}

/// Branch condition on Z or C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        }
    }
}

/// 8-bit accumulator operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    /// Mnemonic prefix including the implicit `A,` where assemblers spell it.
    const fn prefix(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }

    const fn flag_effects(self) -> &'static str {
        match self {
            AluOp::Add | AluOp::Adc => "Z0HC",
            AluOp::Sub | AluOp::Sbc | AluOp::Cp => "Z1HC",
            AluOp::And => "Z010",
            AluOp::Xor | AluOp::Or => "Z000",
        }
    }
}

/// Rotate/shift operation of the CB space. The first four also exist as
/// single-byte accumulator forms (RLCA, RRCA, RLA, RRA).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl RotOp {
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => RotOp::Rlc,
            1 => RotOp::Rrc,
            2 => RotOp::Rl,
            3 => RotOp::Rr,
            4 => RotOp::Sla,
            5 => RotOp::Sra,
            6 => RotOp::Swap,
            _ => RotOp::Srl,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            RotOp::Rlc => "RLC",
            RotOp::Rrc => "RRC",
            RotOp::Rl => "RL",
            RotOp::Rr => "RR",
            RotOp::Sla => "SLA",
            RotOp::Sra => "SRA",
            RotOp::Swap => "SWAP",
            RotOp::Srl => "SRL",
        }
    }
}

/// Instruction of the base (unprefixed) opcode space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    LdR16Imm(Reg16),
    LdIndA(Indirect),
    LdAInd(Indirect),
    LdImm16Sp,
    Inc16(Reg16),
    Dec16(Reg16),
    Inc8(Reg8),
    Dec8(Reg8),
    LdR8Imm(Reg8),
    /// RLCA/RRCA/RLA/RRA; only the first four [`RotOp`]s occur.
    RotateA(RotOp),
    Stop,
    Jr(Option<Cond>),
    AddHl(Reg16),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Ld8 { dst: Reg8, src: Reg8 },
    Halt,
    Alu(AluOp, Reg8),
    AluImm(AluOp),
    Ret(Option<Cond>),
    Reti,
    Pop(Reg16Stack),
    Push(Reg16Stack),
    Jp(Option<Cond>),
    JpHl,
    Call(Option<Cond>),
    /// Restart to the fixed vector `0x00..=0x38`.
    Rst(u8),
    LdhImmA,
    LdhAImm,
    LdhCA,
    LdhAC,
    LdImm16A,
    LdAImm16,
    AddSpImm,
    LdHlSpImm,
    LdSpHl,
    Di,
    Ei,
    /// 0xCB: the next byte selects a [`CbInstruction`].
    Prefix,
    Illegal(u8),
}

impl Instruction {
    pub const fn decode(opcode: u8) -> Self {
        let x = opcode >> 6;
        let y = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let p = y >> 1;
        let q = y & 0x01;

        match (x, z) {
            (0, 0) => match y {
                0 => Instruction::Nop,
                1 => Instruction::LdImm16Sp,
                2 => Instruction::Stop,
                3 => Instruction::Jr(None),
                _ => Instruction::Jr(Some(Cond::from_index(y - 4))),
            },
            (0, 1) if q == 0 => Instruction::LdR16Imm(Reg16::from_index(p)),
            (0, 1) => Instruction::AddHl(Reg16::from_index(p)),
            (0, 2) if q == 0 => Instruction::LdIndA(Indirect::from_index(p)),
            (0, 2) => Instruction::LdAInd(Indirect::from_index(p)),
            (0, 3) if q == 0 => Instruction::Inc16(Reg16::from_index(p)),
            (0, 3) => Instruction::Dec16(Reg16::from_index(p)),
            (0, 4) => Instruction::Inc8(Reg8::from_index(y)),
            (0, 5) => Instruction::Dec8(Reg8::from_index(y)),
            (0, 6) => Instruction::LdR8Imm(Reg8::from_index(y)),
            (0, _) => match y {
                0..=3 => Instruction::RotateA(RotOp::from_index(y)),
                4 => Instruction::Daa,
                5 => Instruction::Cpl,
                6 => Instruction::Scf,
                _ => Instruction::Ccf,
            },

            (1, _) if opcode == 0x76 => Instruction::Halt,
            (1, _) => Instruction::Ld8 {
                dst: Reg8::from_index(y),
                src: Reg8::from_index(z),
            },

            (2, _) => Instruction::Alu(AluOp::from_index(y), Reg8::from_index(z)),

            (_, 0) => match y {
                0..=3 => Instruction::Ret(Some(Cond::from_index(y))),
                4 => Instruction::LdhImmA,
                5 => Instruction::AddSpImm,
                6 => Instruction::LdhAImm,
                _ => Instruction::LdHlSpImm,
            },
            (_, 1) if q == 0 => Instruction::Pop(Reg16Stack::from_index(p)),
            (_, 1) => match p {
                0 => Instruction::Ret(None),
                1 => Instruction::Reti,
                2 => Instruction::JpHl,
                _ => Instruction::LdSpHl,
            },
            (_, 2) => match y {
                0..=3 => Instruction::Jp(Some(Cond::from_index(y))),
                4 => Instruction::LdhCA,
                5 => Instruction::LdImm16A,
                6 => Instruction::LdhAC,
                _ => Instruction::LdAImm16,
            },
            (_, 3) => match y {
                0 => Instruction::Jp(None),
                1 => Instruction::Prefix,
                6 => Instruction::Di,
                7 => Instruction::Ei,
                _ => Instruction::Illegal(opcode),
            },
            (_, 4) if y < 4 => Instruction::Call(Some(Cond::from_index(y))),
            (_, 4) => Instruction::Illegal(opcode),
            (_, 5) if q == 0 => Instruction::Push(Reg16Stack::from_index(p)),
            (_, 5) if p == 0 => Instruction::Call(None),
            (_, 5) => Instruction::Illegal(opcode),
            (_, 6) => Instruction::AluImm(AluOp::from_index(y)),
            _ => Instruction::Rst(y * 8),
        }
    }

    #[inline]
    pub const fn is_illegal(self) -> bool {
        matches!(self, Instruction::Illegal(_))
    }

    /// Whether the cycle cost depends on a flag condition.
    #[inline]
    pub const fn is_conditional(self) -> bool {
        matches!(
            self,
            Instruction::Jr(Some(_))
                | Instruction::Jp(Some(_))
                | Instruction::Call(Some(_))
                | Instruction::Ret(Some(_))
        )
    }

    /// Effect on Z, N, H, C in opcode-table notation: `-` unchanged, `0`/`1`
    /// forced, a letter when the flag is computed from the result.
    pub const fn flag_effects(self) -> &'static str {
        match self {
            Instruction::Inc8(_) => "Z0H-",
            Instruction::Dec8(_) => "Z1H-",
            Instruction::RotateA(_) => "000C",
            Instruction::AddHl(_) => "-0HC",
            Instruction::Daa => "Z-0C",
            Instruction::Cpl => "-11-",
            Instruction::Scf => "-001",
            Instruction::Ccf => "-00C",
            Instruction::Alu(op, _) | Instruction::AluImm(op) => op.flag_effects(),
            Instruction::Pop(Reg16Stack::AF) => "ZNHC",
            Instruction::AddSpImm | Instruction::LdHlSpImm => "00HC",
            _ => "----",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Nop => f.write_str("NOP"),
            Instruction::LdR16Imm(rr) => write!(f, "LD {},d16", rr.name()),
            Instruction::LdIndA(ind) => write!(f, "LD {},A", ind.name()),
            Instruction::LdAInd(ind) => write!(f, "LD A,{}", ind.name()),
            Instruction::LdImm16Sp => f.write_str("LD (a16),SP"),
            Instruction::Inc16(rr) => write!(f, "INC {}", rr.name()),
            Instruction::Dec16(rr) => write!(f, "DEC {}", rr.name()),
            Instruction::Inc8(r) => write!(f, "INC {}", r.name()),
            Instruction::Dec8(r) => write!(f, "DEC {}", r.name()),
            Instruction::LdR8Imm(r) => write!(f, "LD {},d8", r.name()),
            Instruction::RotateA(op) => write!(f, "{}A", op.name()),
            Instruction::Stop => f.write_str("STOP"),
            Instruction::Jr(None) => f.write_str("JR r8"),
            Instruction::Jr(Some(cc)) => write!(f, "JR {},r8", cc.name()),
            Instruction::AddHl(rr) => write!(f, "ADD HL,{}", rr.name()),
            Instruction::Daa => f.write_str("DAA"),
            Instruction::Cpl => f.write_str("CPL"),
            Instruction::Scf => f.write_str("SCF"),
            Instruction::Ccf => f.write_str("CCF"),
            Instruction::Ld8 { dst, src } => write!(f, "LD {},{}", dst.name(), src.name()),
            Instruction::Halt => f.write_str("HALT"),
            Instruction::Alu(op, r) => write!(f, "{}{}", op.prefix(), r.name()),
            Instruction::AluImm(op) => write!(f, "{}d8", op.prefix()),
            Instruction::Ret(None) => f.write_str("RET"),
            Instruction::Ret(Some(cc)) => write!(f, "RET {}", cc.name()),
            Instruction::Reti => f.write_str("RETI"),
            Instruction::Pop(rr) => write!(f, "POP {}", rr.name()),
            Instruction::Push(rr) => write!(f, "PUSH {}", rr.name()),
            Instruction::Jp(None) => f.write_str("JP a16"),
            Instruction::Jp(Some(cc)) => write!(f, "JP {},a16", cc.name()),
            Instruction::JpHl => f.write_str("JP HL"),
            Instruction::Call(None) => f.write_str("CALL a16"),
            Instruction::Call(Some(cc)) => write!(f, "CALL {},a16", cc.name()),
            Instruction::Rst(vector) => write!(f, "RST {vector:02X}H"),
            Instruction::LdhImmA => f.write_str("LDH (a8),A"),
            Instruction::LdhAImm => f.write_str("LDH A,(a8)"),
            Instruction::LdhCA => f.write_str("LD (C),A"),
            Instruction::LdhAC => f.write_str("LD A,(C)"),
            Instruction::LdImm16A => f.write_str("LD (a16),A"),
            Instruction::LdAImm16 => f.write_str("LD A,(a16)"),
            Instruction::AddSpImm => f.write_str("ADD SP,r8"),
            Instruction::LdHlSpImm => f.write_str("LD HL,SP+r8"),
            Instruction::LdSpHl => f.write_str("LD SP,HL"),
            Instruction::Di => f.write_str("DI"),
            Instruction::Ei => f.write_str("EI"),
            Instruction::Prefix => f.write_str("PREFIX CB"),
            Instruction::Illegal(opcode) => write!(f, "ILLEGAL {opcode:02X}"),
        }
    }
}

/// Instruction of the CB-prefixed opcode space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CbInstruction {
    Rotate(RotOp, Reg8),
    Bit(u8, Reg8),
    Res(u8, Reg8),
    Set(u8, Reg8),
}

impl CbInstruction {
    pub const fn decode(opcode: u8) -> Self {
        let y = (opcode >> 3) & 0x07;
        let target = Reg8::from_index(opcode);
        match opcode >> 6 {
            0 => CbInstruction::Rotate(RotOp::from_index(y), target),
            1 => CbInstruction::Bit(y, target),
            2 => CbInstruction::Res(y, target),
            _ => CbInstruction::Set(y, target),
        }
    }

    #[inline]
    pub const fn target(self) -> Reg8 {
        match self {
            CbInstruction::Rotate(_, r)
            | CbInstruction::Bit(_, r)
            | CbInstruction::Res(_, r)
            | CbInstruction::Set(_, r) => r,
        }
    }

    pub const fn flag_effects(self) -> &'static str {
        match self {
            CbInstruction::Rotate(RotOp::Swap, _) => "Z000",
            CbInstruction::Rotate(..) => "Z00C",
            CbInstruction::Bit(..) => "Z01-",
            CbInstruction::Res(..) | CbInstruction::Set(..) => "----",
        }
    }
}

impl fmt::Display for CbInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CbInstruction::Rotate(op, r) => write!(f, "{} {}", op.name(), r.name()),
            CbInstruction::Bit(bit, r) => write!(f, "BIT {bit},{}", r.name()),
            CbInstruction::Res(bit, r) => write!(f, "RES {bit},{}", r.name()),
            CbInstruction::Set(bit, r) => write!(f, "SET {bit},{}", r.name()),
        }
    }
}
