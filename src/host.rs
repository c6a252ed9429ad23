//! DOM-backed carousel host.
//!
//! Reads geometry with `getBoundingClientRect`/`scrollWidth` and writes a
//! single `translateX` on the card row plus a few state classes.

use crate::constants::*;
use crate::dom;
use folio_core::{CarouselError, CarouselHost, Layout, SectionBox};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomHost {
    window: web::Window,
    section: web::Element,
    row: web::HtmlElement,
    dots: Vec<web::Element>,
    helper: Option<web::Element>,
    fallback_gap: f64,
}

impl DomHost {
    /// Bind to the rendered work section. Fails when the section or the
    /// card row is absent, which disables the carousel.
    pub fn attach(document: &web::Document, fallback_gap: f64) -> Result<Self, CarouselError> {
        let window = web::window().ok_or(CarouselError::MissingElement("window"))?;
        let section =
            dom::query(document, WORK_SECTION).ok_or(CarouselError::MissingElement(WORK_SECTION))?;
        let row = dom::query(document, PROJECTS_ROW)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or(CarouselError::MissingElement(PROJECTS_ROW))?;
        // offsets are animated by the controller, not by CSS
        _ = row.style().set_property("transition", "none");
        let dots = dom::query_all(document, CAROUSEL_DOT);
        let helper = dom::query(document, SCROLL_HELPER);
        log::info!(
            "[carousel] attached: dots={} helper={}",
            dots.len(),
            helper.is_some()
        );
        Ok(Self {
            window,
            section,
            row,
            dots,
            helper,
            fallback_gap,
        })
    }

    pub fn section_element(&self) -> &web::Element {
        &self.section
    }

    /// Gap between cards as laid out, falling back to the configured value
    /// when the computed style is `normal` or unreadable.
    fn row_gap(&self) -> f64 {
        self.window
            .get_computed_style(&self.row)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("column-gap").ok())
            .and_then(|v| v.trim().trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(self.fallback_gap)
    }
}

impl CarouselHost for DomHost {
    fn viewport_width(&self) -> f64 {
        dom::viewport_size(&self.window).0
    }

    fn measure(&self) -> Result<Layout, CarouselError> {
        let cards = dom::query_all_in(&self.row, PROJECT_CARD);
        let first = cards.first().ok_or(CarouselError::ZeroCards)?;
        let card_width = first.get_bounding_client_rect().width();
        Layout::new(
            cards.len(),
            card_width,
            self.row_gap(),
            f64::from(self.row.scroll_width()),
            self.viewport_width(),
        )
    }

    fn section(&self) -> Result<SectionBox, CarouselError> {
        if !self.section.is_connected() {
            return Err(CarouselError::MissingElement(WORK_SECTION));
        }
        let rect = self.section.get_bounding_client_rect();
        Ok(SectionBox {
            top: rect.top(),
            height: rect.height(),
            viewport_height: dom::viewport_size(&self.window).1,
        })
    }

    fn set_offset(&mut self, offset_px: f64) {
        _ = self
            .row
            .style()
            .set_property("transform", &format!("translateX({offset_px}px)"));
    }

    fn set_active_dot(&mut self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, i == index);
        }
    }

    fn set_helper_visible(&mut self, visible: bool) {
        if let Some(helper) = &self.helper {
            _ = helper.class_list().toggle_with_force(HIDDEN_CLASS, !visible);
        }
    }
}
