mod fixed;
mod seeded;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::Result;

pub use fixed::FixedMemory;
pub use seeded::SeededMemory;

/// Kind of a primitive memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    Read8,
    Write8,
    Read16,
    Write16,
}

impl AccessKind {
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(self, AccessKind::Read16 | AccessKind::Write16)
    }
}

/// One entry of the access trace.
///
/// Reads carry the value that was read, writes the value written. A word
/// access is a single record at its base address covering both bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub kind: AccessKind,
    pub address: u16,
    pub value: u16,
}

impl MemoryRecord {
    pub const fn read8(address: u16, value: u8) -> Self {
        Self {
            kind: AccessKind::Read8,
            address,
            value: value as u16,
        }
    }

    pub const fn write8(address: u16, value: u8) -> Self {
        Self {
            kind: AccessKind::Write8,
            address,
            value: value as u16,
        }
    }

    pub const fn read16(address: u16, value: u16) -> Self {
        Self {
            kind: AccessKind::Read16,
            address,
            value,
        }
    }

    pub const fn write16(address: u16, value: u16) -> Self {
        Self {
            kind: AccessKind::Write16,
            address,
            value,
        }
    }
}

/// Ordered, append-only log of the accesses made since the last
/// [`Memory::begin_instruction`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessTrace {
    records: Vec<MemoryRecord>,
}

impl AccessTrace {
    #[inline]
    pub fn push(&mut self, record: MemoryRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[inline]
    pub fn records(&self) -> &[MemoryRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Byte order used to compose 16-bit accesses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    /// Low byte at `address`, high byte at `address + 1` (hardware order).
    #[default]
    Little,
    /// High byte at `address`, low byte at `address + 1`.
    Big,
}

impl WordOrder {
    /// Combine the bytes at `address` and `address + 1`.
    #[inline]
    pub fn compose(self, first: u8, second: u8) -> u16 {
        match self {
            WordOrder::Little => u16::from_le_bytes([first, second]),
            WordOrder::Big => u16::from_be_bytes([first, second]),
        }
    }

    /// Split a word into the bytes for `address` and `address + 1`.
    #[inline]
    pub fn split(self, value: u16) -> [u8; 2] {
        match self {
            WordOrder::Little => value.to_le_bytes(),
            WordOrder::Big => value.to_be_bytes(),
        }
    }
}

/// Addressable byte space seen by the CPU.
///
/// Backends supply the untraced `load`/`store` primitives and own an
/// [`AccessTrace`]; the traced `read*`/`write*` operations the CPU uses are
/// provided on top of them. A record is appended only when the access
/// succeeds, and a failed access leaves memory unchanged.
pub trait Memory {
    /// Read a byte without recording it.
    fn load(&mut self, address: u16) -> Result<u8>;

    /// Write a byte without recording it.
    fn store(&mut self, address: u16, value: u8) -> Result<()>;

    /// Fail the way `load`/`store` would for `address`, without touching it.
    fn check(&self, _address: u16) -> Result<()> {
        Ok(())
    }

    fn access_trace(&self) -> &AccessTrace;

    fn access_trace_mut(&mut self) -> &mut AccessTrace;

    fn word_order(&self) -> WordOrder {
        WordOrder::Little
    }

    /// Records accumulated since the current instruction began.
    fn trace(&self) -> &[MemoryRecord] {
        self.access_trace().records()
    }

    /// Hook called once per instruction before any access is made.
    fn begin_instruction(&mut self) {
        self.access_trace_mut().clear();
    }

    fn read8(&mut self, address: u16) -> Result<u8> {
        let value = self.load(address)?;
        self.access_trace_mut()
            .push(MemoryRecord::read8(address, value));
        Ok(value)
    }

    fn write8(&mut self, address: u16, value: u8) -> Result<()> {
        self.store(address, value)?;
        self.access_trace_mut()
            .push(MemoryRecord::write8(address, value));
        Ok(())
    }

    fn read16(&mut self, address: u16) -> Result<u16> {
        let first = self.load(address)?;
        let second = self.load(address.wrapping_add(1))?;
        let value = self.word_order().compose(first, second);
        self.access_trace_mut()
            .push(MemoryRecord::read16(address, value));
        Ok(value)
    }

    fn write16(&mut self, address: u16, value: u16) -> Result<()> {
        let [first, second] = self.word_order().split(value);
        // Both bytes land or neither does.
        self.check(address)?;
        self.check(address.wrapping_add(1))?;
        self.store(address, first)?;
        self.store(address.wrapping_add(1), second)?;
        self.access_trace_mut()
            .push(MemoryRecord::write16(address, value));
        Ok(())
    }
}
