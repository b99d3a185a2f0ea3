//! Corpus types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary message class. The discriminant is the class index used by the
/// classifiers and the metric tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "NORMAL")]
    Normal = 0,
    #[serde(rename = "SPAM")]
    Spam = 1,
}

impl Label {
    /// Both classes in index order
    pub const ALL: [Label; 2] = [Label::Normal, Label::Spam];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Label> {
        match index {
            0 => Some(Label::Normal),
            1 => Some(Label::Spam),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Normal => "NORMAL",
            Label::Spam => "SPAM",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled training message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub text: String,
    pub label: Label,
}

impl Sample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}
