use crate::constants::{MENU_TOGGLE, NAV_RIGHT, OPEN_CLASS, THEME_TOGGLE_ID};
use crate::dom;
use crate::theme;
use web_sys as web;

pub fn wire_nav(document: &web::Document) {
    wire_menu_toggle(document);
    wire_theme_toggle(document);
}

fn wire_menu_toggle(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query(document, MENU_TOGGLE),
        dom::query(document, NAV_RIGHT),
    ) else {
        return;
    };
    dom::add_click_listener(&toggle, move || {
        _ = nav.class_list().toggle(OPEN_CLASS);
    });
}

fn wire_theme_toggle(document: &web::Document) {
    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        log::warn!("[theme] #{} not found", THEME_TOGGLE_ID);
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(&button, move || theme::toggle(&doc));
}
