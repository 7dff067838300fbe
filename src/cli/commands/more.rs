//! More screen: contacts and menu entries

use crate::console::Console;
use campus_portal::actions::{open_contact, open_menu_item};
use campus_portal::catalog;
use campus_portal::models::ContactKind;

/// Handle `contacts`
pub fn contacts() {
    println!("\n=== {} ===\n", catalog::INSTITUTION_NAME);
    for contact in catalog::contacts() {
        println!("  {:<9} {}", contact.kind.to_string(), contact.value);
    }
}

/// Handle `contact`
pub fn contact(kind: &str, console: &Console) -> Result<(), String> {
    let kind = ContactKind::parse(kind).ok_or_else(|| {
        format!("Unknown contact kind '{kind}' (expected phone, email, website or location)")
    })?;
    let contact = catalog::contacts()
        .into_iter()
        .find(|c| c.kind == kind)
        .ok_or_else(|| format!("No {kind} contact listed"))?;

    if open_contact(&contact, console, console) {
        Ok(())
    } else {
        Err(format!("Could not open {}", contact.url))
    }
}

/// Handle `menu`
pub fn menu() {
    println!("\n=== More ===\n");
    for item in catalog::menu_items() {
        println!("  [{}] {}", item.id, item.title);
    }
}

/// Handle `menu-item`
pub fn menu_item(id: &str, console: &Console) -> Result<(), String> {
    let item = catalog::menu_items()
        .into_iter()
        .find(|m| m.id == id)
        .ok_or_else(|| format!("No menu entry with id '{id}'"))?;
    open_menu_item(&item, console, console);
    Ok(())
}
