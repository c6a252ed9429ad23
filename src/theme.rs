use crate::constants::{THEME_ATTR, THEME_TOGGLE_ID};
use folio_core::constants::THEME_STORAGE_KEY;
use folio_core::theme::Theme;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn stored() -> Theme {
    let value = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(value.as_deref())
}

pub fn current(document: &web::Document) -> Theme {
    let value = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR));
    Theme::from_stored(value.as_deref())
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
    if let Some(s) = storage() {
        _ = s.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
    if let Some(icon) = document
        .get_element_by_id(THEME_TOGGLE_ID)
        .and_then(|button| button.query_selector("i").ok().flatten())
    {
        icon.set_class_name(theme.icon_class());
    }
}

pub fn init(document: &web::Document) {
    let theme = stored();
    apply(document, theme);
    log::info!("[theme] {}", theme.as_str());
}

pub fn toggle(document: &web::Document) {
    let next = current(document).toggled();
    apply(document, next);
    log::info!("[theme] switched to {}", next.as_str());
}
