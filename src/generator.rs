//! Random shortcode generation
//!
//! Draws uniformly random alphanumeric codes and probes a caller-supplied
//! existence predicate until a free code is found. The retry loop is
//! iterative and bounded; running out of attempts surfaces
//! `KeyspaceExhausted` instead of spinning.

use std::iter;

use crate::errors::{MinilinkError, Result};

/// Characters a generated shortcode is drawn from.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
    max_attempts: usize,
}

impl CodeGenerator {
    pub fn new(length: usize, max_attempts: usize) -> Self {
        Self {
            length,
            max_attempts,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draw one random alphanumeric code of the configured length.
    ///
    /// Pure draw, no collision checking.
    pub fn random_code(&self) -> String {
        iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
            .take(self.length)
            .collect()
    }

    /// Produce a code for which `exists` returns false.
    ///
    /// Read-only probe: never inserts. Gives up after the configured
    /// attempt bound.
    pub fn generate<F>(&self, exists: F) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        for _ in 0..self.max_attempts {
            let code = self.random_code();
            if !exists(&code) {
                return Ok(code);
            }
        }

        Err(MinilinkError::keyspace_exhausted(format!(
            "No free code of length {} found after {} attempts",
            self.length, self.max_attempts
        )))
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(6, 32)
    }
}
