use serde::{Deserialize, Serialize};

use super::{AccessTrace, Memory, WordOrder};
use crate::{Error, Result};

const ADDRESS_SPACE: usize = 0x10000;

/// Flat byte buffer sized to its initial image.
///
/// There is no mirroring or wrap-around: any address at or past the end of
/// the image fails with [`Error::OutOfRange`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FixedMemoryState")]
pub struct FixedMemory {
    bytes: Vec<u8>,
    word_order: WordOrder,
    #[serde(skip)]
    trace: AccessTrace,
}

#[derive(Deserialize)]
struct FixedMemoryState {
    bytes: Vec<u8>,
    #[serde(default)]
    word_order: WordOrder,
}

impl TryFrom<FixedMemoryState> for FixedMemory {
    type Error = Error;

    fn try_from(state: FixedMemoryState) -> Result<Self> {
        Self::with_word_order(state.bytes, state.word_order)
    }
}

impl FixedMemory {
    pub fn new(image: impl Into<Vec<u8>>) -> Result<Self> {
        Self::with_word_order(image, WordOrder::default())
    }

    pub fn with_word_order(image: impl Into<Vec<u8>>, word_order: WordOrder) -> Result<Self> {
        let bytes = image.into();
        if bytes.is_empty() {
            return Err(Error::EmptyImage);
        }
        if bytes.len() > ADDRESS_SPACE {
            return Err(Error::ImageTooLarge { len: bytes.len() });
        }
        Ok(Self {
            bytes,
            word_order,
            trace: AccessTrace::default(),
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn slot(&self, address: u16) -> Result<usize> {
        let index = address as usize;
        if index < self.bytes.len() {
            Ok(index)
        } else {
            Err(Error::OutOfRange {
                address,
                len: self.bytes.len(),
            })
        }
    }
}

impl Memory for FixedMemory {
    fn check(&self, address: u16) -> Result<()> {
        self.slot(address).map(drop)
    }

    fn load(&mut self, address: u16) -> Result<u8> {
        let index = self.slot(address)?;
        Ok(self.bytes[index])
    }

    fn store(&mut self, address: u16, value: u8) -> Result<()> {
        let index = self.slot(address)?;
        self.bytes[index] = value;
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
