use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A grouped unit of renovation scope (e.g. "Kitchen Cabinets") that schedule
/// tasks may reference for label decoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPackage {
    pub id: Uuid,
    pub number: u32,
    pub name: String,
}

impl WorkPackage {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            name: name.into(),
        }
    }

    /// Short badge text, e.g. "WP3".
    pub fn badge(&self) -> String {
        format!("WP{}", self.number)
    }
}

/// A contractor that tasks may be assigned to. Display decoration only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contractor {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub trade: String,
}

impl Contractor {
    pub fn new(name: impl Into<String>, trade: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            company: None,
            trade: trade.into(),
        }
    }

    /// "Name (Company)" when a company is set, just the name otherwise.
    pub fn display_name(&self) -> String {
        match &self.company {
            Some(company) => format!("{} ({})", self.name, company),
            None => self.name.clone(),
        }
    }
}
