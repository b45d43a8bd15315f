//! Per-opcode cycle costs, in machine cycles (1 M-cycle = 4 T-states).

/// T-states per machine cycle.
pub const T_CYCLES_PER_M_CYCLE: u64 = 4;

/// Placeholder for the opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC,
/// FD). Hardware locks up on these, so they have no cost; they fail with
/// `Error::IllegalOpcode` before the tables are consulted.
pub const ILLEGAL_CYCLES: u8 = 0;

/// Placeholder for 0xCB in the base tables; prefixed instructions are costed
/// from [`CB_CYCLES`] by their second byte.
pub const PREFIX_CYCLES: u8 = 0;

const X: u8 = ILLEGAL_CYCLES;
const P: u8 = PREFIX_CYCLES;

/// Cost of every base opcode when no conditional branch is taken.
#[rustfmt::skip]
pub const BASE_CYCLES: [u8; 256] = [
//  x0 x1 x2 x3 x4 x5 x6 x7 x8 x9 xA xB xC xD xE xF
    1, 3, 2, 2, 1, 1, 2, 1, 5, 2, 2, 2, 1, 1, 2, 1, // 0x
    1, 3, 2, 2, 1, 1, 2, 1, 3, 2, 2, 2, 1, 1, 2, 1, // 1x
    2, 3, 2, 2, 1, 1, 2, 1, 2, 2, 2, 2, 1, 1, 2, 1, // 2x
    2, 3, 2, 2, 3, 3, 3, 1, 2, 2, 2, 2, 1, 1, 2, 1, // 3x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 4x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 5x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 6x
    2, 2, 2, 2, 2, 2, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, // 7x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 8x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 9x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // Ax
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // Bx
    2, 3, 3, 4, 3, 4, 2, 4, 2, 4, 3, P, 3, 6, 2, 4, // Cx
    2, 3, 3, X, 3, 4, 2, 4, 2, 4, 3, X, 3, X, 2, 4, // Dx
    3, 3, 2, X, X, 4, 2, 4, 4, 1, 4, X, X, X, 2, 4, // Ex
    3, 3, 2, 1, X, 4, 2, 4, 3, 2, 4, 1, X, X, 2, 4, // Fx
];

/// Cost of every base opcode when its branch condition holds.
///
/// Only JR cc, RET cc, JP cc and CALL cc differ from [`BASE_CYCLES`].
#[rustfmt::skip]
pub const TAKEN_CYCLES: [u8; 256] = [
//  x0 x1 x2 x3 x4 x5 x6 x7 x8 x9 xA xB xC xD xE xF
    1, 3, 2, 2, 1, 1, 2, 1, 5, 2, 2, 2, 1, 1, 2, 1, // 0x
    1, 3, 2, 2, 1, 1, 2, 1, 3, 2, 2, 2, 1, 1, 2, 1, // 1x
    3, 3, 2, 2, 1, 1, 2, 1, 3, 2, 2, 2, 1, 1, 2, 1, // 2x
    3, 3, 2, 2, 3, 3, 3, 1, 3, 2, 2, 2, 1, 1, 2, 1, // 3x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 4x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 5x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 6x
    2, 2, 2, 2, 2, 2, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, // 7x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 8x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 9x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // Ax
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // Bx
    5, 3, 4, 4, 6, 4, 2, 4, 5, 4, 4, P, 6, 6, 2, 4, // Cx
    5, 3, 4, X, 6, 4, 2, 4, 5, 4, 4, X, 6, X, 2, 4, // Dx
    3, 3, 2, X, X, 4, 2, 4, 4, 1, 4, X, X, X, 2, 4, // Ex
    3, 3, 2, 1, X, 4, 2, 4, 3, 2, 4, 1, X, X, 2, 4, // Fx
];

/// Cost of every CB-prefixed opcode, indexed by the byte after 0xCB.
///
/// Register forms take 2, `(HL)` read-modify-write forms 4 and the
/// read-only `BIT b,(HL)` 3.
#[rustfmt::skip]
pub const CB_CYCLES: [u8; 256] = [
//  x0 x1 x2 x3 x4 x5 x6 x7 x8 x9 xA xB xC xD xE xF
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // 0x
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // 1x
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // 2x
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // 3x
    2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 3, 2, // 4x
    2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 3, 2, // 5x
    2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 3, 2, // 6x
    2, 2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 3, 2, // 7x
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // 8x
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // 9x
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // Ax
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // Bx
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // Cx
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // Dx
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // Ex
    2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 4, 2, // Fx
];

/// Which table an executed instruction is costed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timing {
    Base,
    Taken,
    /// CB-prefixed; carries the second opcode byte.
    Cb(u8),
}

/// Resolve the cost of an executed instruction.
///
/// CB-prefixed beats branch-taken, which beats the base table.
#[inline]
pub const fn cycles_for(opcode: u8, timing: Timing) -> u8 {
    match timing {
        Timing::Cb(cb) => CB_CYCLES[cb as usize],
        Timing::Taken => TAKEN_CYCLES[opcode as usize],
        Timing::Base => BASE_CYCLES[opcode as usize],
    }
}
