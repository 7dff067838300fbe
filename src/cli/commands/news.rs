//! News screen: articles, categories and sharing

use crate::console::Console;
use campus_portal::actions::share_article;
use campus_portal::catalog;
use campus_portal::filter::{count_label, FilterState};
use campus_portal::warn;

/// Handle `news`
pub fn list(state: &FilterState) {
    if !catalog::news_categories()
        .iter()
        .any(|c| c.id == state.category)
    {
        warn!("Unknown news category '{}'", state.category);
    }

    let articles = catalog::news();
    let visible = state.apply(&articles);

    println!("\n=== News ===\n");
    println!("{}\n", count_label(visible.len(), "article", ""));
    for article in visible {
        println!(
            "[{}] {} ({})",
            article.id,
            article.title,
            catalog::news_category_name(&article.category)
        );
        println!("    {} · {} · {}", article.date, article.author, article.read_time);
        println!("    {}", article.summary);
    }

    println!("\n--- Announcements ---");
    for notice in catalog::announcements() {
        println!("  • {notice}");
    }
}

/// Handle `share`
pub fn share(id: &str, console: &Console) -> Result<(), String> {
    let article = catalog::news()
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| format!("No news article with id '{id}'"))?;

    if share_article(&article, console) {
        Ok(())
    } else {
        Err(format!("Could not share '{}'", article.title))
    }
}
