//! Fixed-length digit buffer backing the segmented code input.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Default number of slots in a one-time code
pub use fin_shared::config::flow::DEFAULT_CODE_LENGTH as CODE_LENGTH;

/// Ordered, fixed-length sequence of single-digit slots
///
/// The length never changes after construction and every slot is either
/// empty or holds exactly one ASCII digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCodeBuffer")]
pub struct CodeBuffer {
    slots: Vec<Option<char>>,
}

// Unchecked wire form, validated on the way in
#[derive(Deserialize)]
struct RawCodeBuffer {
    slots: Vec<Option<char>>,
}

impl TryFrom<RawCodeBuffer> for CodeBuffer {
    type Error = ValidationError;

    fn try_from(raw: RawCodeBuffer) -> Result<Self, Self::Error> {
        if let Some(digit) = raw.slots.iter().flatten().find(|c| !c.is_ascii_digit()) {
            return Err(ValidationError::InvalidDigit {
                value: digit.to_string(),
            });
        }
        Ok(Self { slots: raw.slots })
    }
}

impl CodeBuffer {
    /// Creates an empty buffer with `length` slots
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True iff no slot is empty
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of filled slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Digit held by a slot, `None` when empty or out of range
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Read-only view of all slots in order
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Writes a digit into a slot
    pub fn write(&mut self, index: usize, digit: char) -> Result<(), ValidationError> {
        if !digit.is_ascii_digit() {
            return Err(ValidationError::InvalidDigit {
                value: digit.to_string(),
            });
        }
        let length = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ValidationError::InvalidSlotIndex { index, length })?;
        *slot = Some(digit);
        Ok(())
    }

    /// Empties a slot
    pub fn clear_slot(&mut self, index: usize) -> Result<(), ValidationError> {
        let length = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ValidationError::InvalidSlotIndex { index, length })?;
        *slot = None;
        Ok(())
    }

    /// Empties every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Concatenation of all filled slots in order
    ///
    /// Only meaningful once the buffer is complete.
    pub fn as_string(&self) -> String {
        self.slots.iter().flatten().collect()
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}
