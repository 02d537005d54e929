//! Theme Value Object
//!
//! UI display preference. The rendering layer only ever sees "dark" or
//! "light"; an unset preference renders as dark.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[display("dark")]
    Dark,
    #[display("light")]
    Light,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
