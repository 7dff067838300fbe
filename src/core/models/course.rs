//! Course model

use serde::{Deserialize, Serialize};

use crate::core::filter::Filterable;

/// A course offered by the institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable identifier (e.g., "1")
    pub id: String,

    /// Course title (e.g., "Diploma in Computer Science")
    pub title: String,

    /// Department id (e.g., "ict", "engineering")
    pub department: String,

    /// Programme duration (e.g., "3 Years")
    pub duration: String,

    /// Award level (e.g., "Diploma", "Certificate")
    pub level: String,

    /// Short description
    pub description: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Stable identifier
    /// * `title` - Course title
    /// * `department` - Department id the course belongs to
    #[must_use]
    pub fn new(id: &str, title: &str, department: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            department: department.to_string(),
            duration: String::new(),
            level: String::new(),
            description: String::new(),
        }
    }

    /// Set the duration and level
    #[must_use]
    pub fn with_award(mut self, duration: &str, level: &str) -> Self {
        self.duration = duration.to_string();
        self.level = level.to_string();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

impl Filterable for Course {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn category(&self) -> &str {
        &self.department
    }
}

/// A department selector entry (`"all"` is the wildcard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Selector value matched against [`Course::department`]
    pub id: String,

    /// Display name
    pub name: String,
}

impl Department {
    /// Create a department entry
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
