//! Line-oriented text protocol.
//!
//! Start state:
//!
//! ```text
//! A|B|C|D|E|H|L|SP|PC|Z|N|H|C|IME:::s0|s1|...|sn
//! ```
//!
//! Finish state:
//!
//! ```text
//! A|B|C|D|E|F|H|L|SP|PC|Z|N|H|C|IME|CLOCK:::k|addr|value:k|addr|value:...
//! ```
//!
//! All numbers are decimal and booleans are `0`/`1`. Record kinds are
//! `0` Read8, `1` Read16, `2` Write8 and `3` Write16.

#[cfg(test)]
mod tests;

use std::str::FromStr;

use gbstep::{AccessKind, CpuInit, Flags, MemoryRecord, Registers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SECTION_SEPARATOR: &str = ":::";
const FIELD_SEPARATOR: &str = "|";
const RECORD_SEPARATOR: &str = ":";

const START_FIELDS: [&str; 14] = [
    "A", "B", "C", "D", "E", "H", "L", "SP", "PC", "Z", "N", "H", "C", "IME",
];
const FINISH_FIELDS: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "H", "L", "SP", "PC", "Z", "N", "H", "C", "IME", "CLOCK",
];

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("missing ':::' between registers and {what}")]
    MissingSection { what: &'static str },

    #[error("expected {expected} register fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid value {value:?} for field {field}")]
    InvalidField { field: &'static str, value: String },

    #[error("F={f} disagrees with flag fields (expected {expected})")]
    FlagMismatch { f: u8, expected: u8 },

    #[error("malformed access record {0:?}")]
    InvalidRecord(String),

    #[error("unknown access record kind {0}")]
    UnknownRecordKind(u8),

    #[error("seed sequence is empty")]
    EmptySeed,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Registers and seed for one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartState {
    pub registers: CpuInit,
    pub seed: Vec<u8>,
}

/// Registers, clock and access trace after one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishState {
    pub registers: Registers,
    pub clock: u64,
    pub trace: Vec<MemoryRecord>,
}

pub const fn record_kind_code(kind: AccessKind) -> u8 {
    match kind {
        AccessKind::Read8 => 0,
        AccessKind::Read16 => 1,
        AccessKind::Write8 => 2,
        AccessKind::Write16 => 3,
    }
}

pub fn record_kind_from_code(code: u8) -> Result<AccessKind, ProtocolError> {
    match code {
        0 => Ok(AccessKind::Read8),
        1 => Ok(AccessKind::Read16),
        2 => Ok(AccessKind::Write8),
        3 => Ok(AccessKind::Write16),
        other => Err(ProtocolError::UnknownRecordKind(other)),
    }
}

#[inline]
fn bit(value: bool) -> String {
    u8::from(value).to_string()
}

fn parse<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ProtocolError> {
    raw.trim().parse().map_err(|_| ProtocolError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool, ProtocolError> {
    match raw.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ProtocolError::InvalidField {
            field,
            value: raw.to_string(),
        }),
    }
}

fn split_sections<'a>(
    line: &'a str,
    what: &'static str,
) -> Result<(Vec<&'a str>, &'a str), ProtocolError> {
    let (registers, rest) = line
        .trim_end_matches(['\r', '\n'])
        .split_once(SECTION_SEPARATOR)
        .ok_or(ProtocolError::MissingSection { what })?;
    Ok((registers.split(FIELD_SEPARATOR).collect(), rest))
}

fn check_count(fields: &[&str], expected: usize) -> Result<(), ProtocolError> {
    if fields.len() != expected {
        return Err(ProtocolError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

pub fn encode_start(state: &StartState) -> String {
    let r = &state.registers;
    let registers = [
        r.a.to_string(),
        r.b.to_string(),
        r.c.to_string(),
        r.d.to_string(),
        r.e.to_string(),
        r.h.to_string(),
        r.l.to_string(),
        r.sp.to_string(),
        r.pc.to_string(),
        bit(r.zero),
        bit(r.subtract),
        bit(r.half_carry),
        bit(r.carry),
        bit(r.ime),
    ]
    .join(FIELD_SEPARATOR);
    let seed: Vec<String> = state.seed.iter().map(u8::to_string).collect();
    format!("{registers}{SECTION_SEPARATOR}{}", seed.join(FIELD_SEPARATOR))
}

pub fn decode_start(line: &str) -> Result<StartState, ProtocolError> {
    let (f, seed) = split_sections(line, "seed")?;
    check_count(&f, START_FIELDS.len())?;

    let registers = CpuInit {
        a: parse("A", f[0])?,
        b: parse("B", f[1])?,
        c: parse("C", f[2])?,
        d: parse("D", f[3])?,
        e: parse("E", f[4])?,
        h: parse("H", f[5])?,
        l: parse("L", f[6])?,
        sp: parse("SP", f[7])?,
        pc: parse("PC", f[8])?,
        zero: parse_bool("Z", f[9])?,
        subtract: parse_bool("N", f[10])?,
        half_carry: parse_bool("H flag", f[11])?,
        carry: parse_bool("C flag", f[12])?,
        ime: parse_bool("IME", f[13])?,
    };

    let seed = seed
        .split(FIELD_SEPARATOR)
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse("seed", s))
        .collect::<Result<Vec<u8>, _>>()?;
    if seed.is_empty() {
        return Err(ProtocolError::EmptySeed);
    }

    Ok(StartState { registers, seed })
}

pub fn encode_finish(state: &FinishState) -> String {
    let r = &state.registers;
    let registers = [
        r.a.to_string(),
        r.b.to_string(),
        r.c.to_string(),
        r.d.to_string(),
        r.e.to_string(),
        r.f().to_string(),
        r.h.to_string(),
        r.l.to_string(),
        r.sp.to_string(),
        r.pc.to_string(),
        bit(r.flag(Flags::Z)),
        bit(r.flag(Flags::N)),
        bit(r.flag(Flags::H)),
        bit(r.flag(Flags::C)),
        bit(r.ime),
        state.clock.to_string(),
    ]
    .join(FIELD_SEPARATOR);
    let records: Vec<String> = state
        .trace
        .iter()
        .map(|rec| {
            format!(
                "{}|{}|{}",
                record_kind_code(rec.kind),
                rec.address,
                rec.value
            )
        })
        .collect();
    format!(
        "{registers}{SECTION_SEPARATOR}{}",
        records.join(RECORD_SEPARATOR)
    )
}

pub fn decode_finish(line: &str) -> Result<FinishState, ProtocolError> {
    let (f, records) = split_sections(line, "trace")?;
    check_count(&f, FINISH_FIELDS.len())?;

    let mut registers = Registers {
        a: parse("A", f[0])?,
        b: parse("B", f[1])?,
        c: parse("C", f[2])?,
        d: parse("D", f[3])?,
        e: parse("E", f[4])?,
        h: parse("H", f[6])?,
        l: parse("L", f[7])?,
        sp: parse("SP", f[8])?,
        pc: parse("PC", f[9])?,
        ime: parse_bool("IME", f[14])?,
        ..Registers::default()
    };
    registers.set_flag(Flags::Z, parse_bool("Z", f[10])?);
    registers.set_flag(Flags::N, parse_bool("N", f[11])?);
    registers.set_flag(Flags::H, parse_bool("H flag", f[12])?);
    registers.set_flag(Flags::C, parse_bool("C flag", f[13])?);

    let packed: u8 = parse("F", f[5])?;
    if packed != registers.f() {
        return Err(ProtocolError::FlagMismatch {
            f: packed,
            expected: registers.f(),
        });
    }
    let clock = parse("CLOCK", f[15])?;

    let trace = records
        .split(RECORD_SEPARATOR)
        .filter(|s| !s.trim().is_empty())
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FinishState {
        registers,
        clock,
        trace,
    })
}

fn decode_record(raw: &str) -> Result<MemoryRecord, ProtocolError> {
    let parts: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    let [kind, address, value] = parts[..] else {
        return Err(ProtocolError::InvalidRecord(raw.to_string()));
    };
    let kind = record_kind_from_code(parse("record kind", kind)?)?;
    let record = MemoryRecord {
        kind,
        address: parse("record address", address)?,
        value: parse("record value", value)?,
    };
    if !record_value_fits(&record) {
        return Err(ProtocolError::InvalidRecord(raw.to_string()));
    }
    Ok(record)
}

/// Byte records carry byte values; word records any `u16`.
pub(crate) fn record_value_fits(record: &MemoryRecord) -> bool {
    record.kind.is_word() || record.value <= 0xFF
}
