//! Ledger entry model
//!
//! One user-recorded expense. Entries start blank and are filled in one
//! field at a time, the way a row of the expense table is edited.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::{Amount, AmountParseError};

/// A single expense record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Free-form date label (not parsed)
    #[serde(default)]
    pub date: String,

    /// What the money was spent on
    #[serde(default)]
    pub description: String,

    /// Category label; the empty string is a valid category
    #[serde(default)]
    pub category: String,

    /// Amount spent
    #[serde(default)]
    pub amount: Amount,
}

impl LedgerEntry {
    /// Create a blank entry, as produced by the "add expense" action
    pub fn blank() -> Self {
        Self::default()
    }

    /// Create a filled entry
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            amount,
        }
    }

    /// Read a field as the text shown in its input box
    pub fn field_text(&self, field: EntryField) -> String {
        match field {
            EntryField::Date => self.date.clone(),
            EntryField::Description => self.description.clone(),
            EntryField::Category => self.category.clone(),
            EntryField::Amount => self.amount.to_input_text(),
        }
    }

    /// Replace one field from raw input text
    ///
    /// Text fields are stored verbatim. The amount is parsed; on a parse
    /// error the entry is left untouched.
    pub fn set_field(&mut self, field: EntryField, raw: &str) -> Result<(), AmountParseError> {
        match field {
            EntryField::Date => self.date = raw.to_string(),
            EntryField::Description => self.description = raw.to_string(),
            EntryField::Category => self.category = raw.to_string(),
            EntryField::Amount => self.amount = Amount::parse(raw)?,
        }
        Ok(())
    }
}

/// Editable columns of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Date,
    Description,
    Category,
    Amount,
}

impl EntryField {
    /// All fields in table column order
    pub const ALL: [EntryField; 4] = [
        EntryField::Date,
        EntryField::Description,
        EntryField::Category,
        EntryField::Amount,
    ];

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Amount => "Amount",
        }
    }

    /// Next field, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Previous field, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
            Self::Amount => Self::Category,
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "description" | "desc" => Ok(Self::Description),
            "category" | "cat" => Ok(Self::Category),
            "amount" => Ok(Self::Amount),
            other => Err(format!("Unknown entry field: {}", other)),
        }
    }
}
