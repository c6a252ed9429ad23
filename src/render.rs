use crate::constants::*;
use crate::dom;
use crate::template;
use folio_core::content::Portfolio;
use web_sys as web;

/// Fill the page from the portfolio content. Missing containers are skipped.
pub fn mount_content(document: &web::Document, portfolio: &Portfolio) {
    dom::set_text_by_id(document, HERO_NAME_ID, &portfolio.name);
    if let Some(role) = portfolio.primary_role() {
        dom::set_text_by_id(document, HERO_ROLE_ID, role);
    }
    dom::set_text_by_id(document, BIO_ID, &portfolio.bio);
    if let Some(email) = &portfolio.email {
        if let Some(el) = document.get_element_by_id(EMAIL_ID) {
            el.set_text_content(Some(email));
            _ = el.set_attribute("href", &format!("mailto:{email}"));
        }
    }

    set_html(document, PROJECTS_ROW, &template::project_cards(&portfolio.projects));
    set_html(
        document,
        CAROUSEL_DOTS,
        &template::carousel_dots(portfolio.projects.len()),
    );
    set_html(document, SKILLS_LIST, &template::skill_rows(&portfolio.skill_progress));
    set_html(
        document,
        EDUCATION_LIST,
        &template::education_cards(&portfolio.education),
    );
    set_html(document, SOCIAL_LINKS, &template::social_links(&portfolio.social));
    fill_level_bars(document);

    log::info!(
        "[content] rendered {} projects, {} skills",
        portfolio.projects.len(),
        portfolio.skill_progress.len()
    );
}

fn set_html(document: &web::Document, selector: &str, html: &str) {
    match dom::query(document, selector) {
        Some(el) => el.set_inner_html(html),
        None => log::debug!("[content] no {} on page", selector),
    }
}

fn fill_level_bars(document: &web::Document) {
    for bar in dom::query_all(document, LEVEL_BAR) {
        if let Some(width) = bar.get_attribute("data-width") {
            dom::set_style(&bar, "width", &width);
        }
    }
}
