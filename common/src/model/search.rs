use std::fmt;
use std::str::FromStr;

use super::booking::UnknownField;

/// The two filters offered by the search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Free text matched by the server against first name, surname and email.
    Term,
    /// A calendar date (`YYYY-MM-DD`) falling within a stay.
    Date,
}

impl SearchField {
    pub fn name(self) -> &'static str {
        match self {
            SearchField::Term => "term",
            SearchField::Date => "date",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "term" => Ok(SearchField::Term),
            "date" => Ok(SearchField::Date),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Values currently shown in the search inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub date: String,
}

impl SearchQuery {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Term => &self.term,
            SearchField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: SearchField, value: String) {
        match field {
            SearchField::Term => self.term = value,
            SearchField::Date => self.date = value,
        }
    }

    pub fn clear(&mut self) {
        self.term.clear();
        self.date.clear();
    }
}
