//! News article model

use serde::{Deserialize, Serialize};

use crate::core::filter::Filterable;

/// A news article shown on the news and home screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Stable identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// One-paragraph summary
    pub summary: String,
    /// Article body
    pub content: String,
    /// Publication date, `YYYY-MM-DD`
    pub date: String,
    /// Category id (e.g., "admissions", "sports")
    pub category: String,
    /// Publishing office
    pub author: String,
    /// Reading time label (e.g., "3 min read")
    pub read_time: String,
}

impl NewsArticle {
    /// Text handed to the share sheet
    #[must_use]
    pub fn share_message(&self, institution: &str) -> String {
        format!(
            "{}\n\n{}\n\nRead more in the {institution} app.",
            self.title, self.summary
        )
    }
}

impl Filterable for NewsArticle {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.summary, &self.content]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A news category selector entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCategory {
    /// Selector value matched against [`NewsArticle::category`]
    pub id: String,
    /// Display name
    pub name: String,
}

impl NewsCategory {
    /// Create a category entry
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_message_layout() {
        let article = NewsArticle {
            id: "4".to_string(),
            title: "Inter-College Football Championship".to_string(),
            summary: "Our team advances to the finals.".to_string(),
            content: String::new(),
            date: "2024-01-08".to_string(),
            category: "sports".to_string(),
            author: "Sports Department".to_string(),
            read_time: "2 min read".to_string(),
        };

        assert_eq!(
            article.share_message("Kisii Polytechnic"),
            "Inter-College Football Championship\n\nOur team advances to the finals.\n\nRead more in the Kisii Polytechnic app."
        );
    }
}
