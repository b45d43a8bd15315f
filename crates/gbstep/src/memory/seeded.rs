use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AccessTrace, Memory, WordOrder};
use crate::{Error, Result};

/// Sparse memory that fills untouched addresses from a seed sequence.
///
/// The first touch of an unmapped address takes the byte under a circular
/// cursor over `seed` (then advances and wraps) and memoizes it, so two
/// implementations given the same seed agree on every address they touch,
/// whatever order they touch them in. The fill value never depends on the
/// address itself.
///
/// Writes materialize the address first and then always overwrite it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeededMemoryState")]
pub struct SeededMemory {
    seed: Vec<u8>,
    cursor: usize,
    cells: BTreeMap<u16, u8>,
    word_order: WordOrder,
    #[serde(skip)]
    trace: AccessTrace,
}

#[derive(Deserialize)]
struct SeededMemoryState {
    seed: Vec<u8>,
    #[serde(default)]
    cursor: usize,
    #[serde(default)]
    cells: BTreeMap<u16, u8>,
    #[serde(default)]
    word_order: WordOrder,
}

impl TryFrom<SeededMemoryState> for SeededMemory {
    type Error = Error;

    fn try_from(state: SeededMemoryState) -> Result<Self> {
        let mut memory = Self::with_word_order(state.seed, state.word_order)?;
        if state.cursor >= memory.seed.len() {
            return Err(Error::CursorOutOfRange {
                cursor: state.cursor,
                len: memory.seed.len(),
            });
        }
        memory.cursor = state.cursor;
        memory.cells = state.cells;
        Ok(memory)
    }
}

impl SeededMemory {
    pub fn new(seed: impl Into<Vec<u8>>) -> Result<Self> {
        Self::with_word_order(seed, WordOrder::default())
    }

    pub fn with_word_order(seed: impl Into<Vec<u8>>, word_order: WordOrder) -> Result<Self> {
        let seed = seed.into();
        if seed.is_empty() {
            return Err(Error::EmptySeed);
        }
        Ok(Self {
            seed,
            cursor: 0,
            cells: BTreeMap::new(),
            word_order,
            trace: AccessTrace::default(),
        })
    }

    /// Pre-populate an address without consuming the seed.
    pub fn preload(&mut self, address: u16, value: u8) {
        self.cells.insert(address, value);
    }

    /// Current value at `address` if it has been materialized.
    #[inline]
    pub fn peek(&self, address: u16) -> Option<u8> {
        self.cells.get(&address).copied()
    }

    #[inline]
    pub fn materialized(&self) -> &BTreeMap<u16, u8> {
        &self.cells
    }

    #[inline]
    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    /// Index of the seed byte the next fresh address will receive.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn materialize(&mut self, address: u16) -> u8 {
        if let Some(&value) = self.cells.get(&address) {
            return value;
        }
        let value = self.seed[self.cursor];
        self.cursor += 1;
        if self.cursor == self.seed.len() {
            self.cursor = 0;
        }
        self.cells.insert(address, value);
        value
    }
}

impl Memory for SeededMemory {
    fn load(&mut self, address: u16) -> Result<u8> {
        Ok(self.materialize(address))
    }

    fn store(&mut self, address: u16, value: u8) -> Result<()> {
        self.materialize(address);
        self.cells.insert(address, value);
        Ok(())
    }

    fn access_trace(&self) -> &AccessTrace {
        &self.trace
    }

    fn access_trace_mut(&mut self) -> &mut AccessTrace {
        &mut self.trace
    }

    fn word_order(&self) -> WordOrder {
        self.word_order
    }
}
