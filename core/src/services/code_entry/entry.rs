//! Digit buffer with auto-advance and auto-retreat focus policy

use serde::Serialize;

use fin_shared::validation::is_single_digit;

use crate::domain::entities::code_buffer::{CodeBuffer, CODE_LENGTH};
use crate::errors::ValidationError;

/// Focus movement produced by an entry intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum FocusChange {
    Unchanged,
    MovedTo(usize),
}

/// Segmented one-time-code input state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedCodeEntry {
    buffer: CodeBuffer,
    cursor: usize,
}

impl SegmentedCodeEntry {
    /// Creates an empty entry with `length` slots and the cursor on slot 0
    pub fn new(length: usize) -> Self {
        Self {
            buffer: CodeBuffer::new(length),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Slot that should hold input focus
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &CodeBuffer {
        &self.buffer
    }

    pub fn is_complete(&self) -> bool {
        self.buffer.is_complete()
    }

    /// The assembled code; only meaningful when complete
    pub fn as_string(&self) -> String {
        self.buffer.as_string()
    }

    /// Writes or clears a slot
    ///
    /// An empty `value` clears the slot and keeps focus on it. A single digit
    /// fills the slot and advances focus unless it is the last slot.
    pub fn try_set_digit(
        &mut self,
        index: usize,
        value: &str,
    ) -> Result<FocusChange, ValidationError> {
        self.check_index(index)?;

        if value.is_empty() {
            self.buffer.clear_slot(index)?;
            return Ok(self.move_cursor(index));
        }

        match value.chars().next() {
            Some(digit) if is_single_digit(value) => {
                self.buffer.write(index, digit)?;
                Ok(self.move_cursor(self.next_index(index)))
            }
            _ => Err(ValidationError::InvalidDigit {
                value: value.to_string(),
            }),
        }
    }

    /// Like [`try_set_digit`](Self::try_set_digit), but malformed input is a no-op
    pub fn set_digit(&mut self, index: usize, value: &str) -> FocusChange {
        self.try_set_digit(index, value).unwrap_or_else(|e| {
            tracing::debug!(
                index = index,
                error = %e,
                event = "otp_digit_rejected",
                "Ignoring digit input"
            );
            FocusChange::Unchanged
        })
    }

    /// Handles a backspace on a slot
    ///
    /// On an already empty slot past the first, focus retreats to the previous
    /// slot without touching it, so a second backspace clears that slot.
    /// Otherwise the slot is cleared and keeps focus.
    pub fn try_backspace(&mut self, index: usize) -> Result<FocusChange, ValidationError> {
        self.check_index(index)?;

        if self.buffer.get(index).is_none() && index > 0 {
            return Ok(self.move_cursor(index - 1));
        }
        self.buffer.clear_slot(index)?;
        Ok(self.move_cursor(index))
    }

    pub fn backspace(&mut self, index: usize) -> FocusChange {
        self.try_backspace(index).unwrap_or_else(|e| {
            tracing::debug!(
                index = index,
                error = %e,
                event = "otp_backspace_rejected",
                "Ignoring backspace"
            );
            FocusChange::Unchanged
        })
    }

    /// Spreads the digits of pasted text over consecutive slots from `start`
    ///
    /// Non-digit characters are skipped and digits past the last slot are
    /// dropped. Focus lands after the last written slot, clamped to the last slot.
    pub fn try_paste(&mut self, start: usize, text: &str) -> Result<FocusChange, ValidationError> {
        self.check_index(start)?;

        let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(ValidationError::InvalidDigit {
                value: text.to_string(),
            });
        }

        let mut written = 0;
        for (index, digit) in (start..self.len()).zip(digits) {
            self.buffer.write(index, digit)?;
            written += 1;
        }
        let last = start + written - 1;
        Ok(self.move_cursor(self.next_index(last)))
    }

    pub fn paste(&mut self, start: usize, text: &str) -> FocusChange {
        self.try_paste(start, text).unwrap_or_else(|e| {
            tracing::debug!(
                index = start,
                error = %e,
                event = "otp_paste_rejected",
                "Ignoring pasted text"
            );
            FocusChange::Unchanged
        })
    }

    /// Empties every slot and returns focus to the first slot
    pub fn clear(&mut self) -> FocusChange {
        self.buffer.clear();
        self.move_cursor(0)
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ValidationError::InvalidSlotIndex {
                index,
                length: self.len(),
            })
        }
    }

    fn next_index(&self, index: usize) -> usize {
        if index + 1 < self.len() {
            index + 1
        } else {
            index
        }
    }

    fn move_cursor(&mut self, to: usize) -> FocusChange {
        if self.cursor == to {
            FocusChange::Unchanged
        } else {
            self.cursor = to;
            FocusChange::MovedTo(to)
        }
    }
}

impl Default for SegmentedCodeEntry {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}
