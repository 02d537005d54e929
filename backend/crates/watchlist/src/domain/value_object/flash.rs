//! Flash Message Value Object
//!
//! One-shot user-visible notices. They accumulate on the session record
//! and are drained by the next rendered page.

use serde::{Deserialize, Serialize};

/// Display category for a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

/// A pending one-shot notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub message: String,
    pub level: FlashLevel,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Danger,
        }
    }
}
