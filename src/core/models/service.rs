//! Student service model

use serde::{Deserialize, Serialize};

use crate::core::filter::Filterable;

/// A student-portal service tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Stable identifier
    pub id: String,
    /// Tile title (e.g., "Check Results")
    pub title: String,
    /// One-line description
    pub description: String,
    /// Grouping used by the category selector (e.g., "academic", "finance")
    pub category: String,
    /// Blocked for guests when set
    pub requires_auth: bool,
    /// Title of the notice shown when the service is opened
    pub notice_title: String,
    /// Body of that notice
    pub notice_message: String,
}

impl Filterable for Service {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A service category selector entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    /// Selector value matched against [`Service::category`]
    pub id: String,
    /// Display name
    pub name: String,
}

impl ServiceCategory {
    /// Create a category entry
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
