//! JSON rendition of the start and finish records.

use serde_json::Value;

use crate::protocol::{record_value_fits, FinishState, ProtocolError, StartState};

pub fn encode_start(state: &StartState) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(state)?)
}

pub fn decode_start(line: &str) -> Result<StartState, ProtocolError> {
    let state: StartState = serde_json::from_str(line)?;
    if state.seed.is_empty() {
        return Err(ProtocolError::EmptySeed);
    }
    Ok(state)
}

pub fn encode_finish(state: &FinishState) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(state)?)
}

/// Decode a finish record, applying the same checks as the text decoder.
///
/// `Registers` deserialization truncates F, so a packed F with low bits set
/// is caught on the raw value first.
pub fn decode_finish(line: &str) -> Result<FinishState, ProtocolError> {
    let value: Value = serde_json::from_str(line)?;
    let packed = value
        .pointer("/registers/flags")
        .and_then(Value::as_u64)
        .and_then(|f| u8::try_from(f).ok());
    if let Some(f) = packed {
        if f & 0x0F != 0 {
            return Err(ProtocolError::FlagMismatch {
                f,
                expected: f & 0xF0,
            });
        }
    }

    let state: FinishState = serde_json::from_value(value)?;
    if let Some(record) = state.trace.iter().find(|r| !record_value_fits(r)) {
        return Err(ProtocolError::InvalidRecord(format!("{record:?}")));
    }
    Ok(state)
}
