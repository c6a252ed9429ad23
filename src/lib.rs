#![cfg(target_arch = "wasm32")]
use folio_core::content::Portfolio;
use folio_core::{CarouselConfig, CarouselController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod render;
mod template;
mod theme;
mod timers;

static PORTFOLIO_JSON: &str = include_str!("../assets/portfolio.json");

pub(crate) type SharedCarousel = Rc<RefCell<CarouselController<host::DomHost>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    theme::init(&document);
    events::wire_nav(&document);
    timers::wire_clock(&document);
    timers::start_typewriter(&document);

    // cards and dots must exist before the carousel measures them
    match Portfolio::from_json(PORTFOLIO_JSON) {
        Ok(portfolio) => render::mount_content(&document, &portfolio),
        Err(e) => log::warn!("[content] bundled portfolio rejected: {}", e),
    }

    let config = carousel_config(&document);
    let host = match host::DomHost::attach(&document, config.card_gap_px) {
        Ok(h) => h,
        Err(e) => {
            log::info!("[carousel] disabled: {}", e);
            return Ok(());
        }
    };
    let touch_target = host.section_element().clone();
    let carousel: SharedCarousel = Rc::new(RefCell::new(CarouselController::mount(host, config)));
    events::wire_carousel(&carousel, &document, &touch_target);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        carousel,
        origin: Instant::now(),
    })));
    Ok(())
}

/// Defaults, overridden by the section's `data-carousel-config` JSON if valid.
fn carousel_config(document: &web::Document) -> CarouselConfig {
    let overrides = dom::query(document, constants::WORK_SECTION)
        .and_then(|el| el.get_attribute(constants::CAROUSEL_CONFIG_ATTR));
    match overrides {
        None => CarouselConfig::default(),
        Some(json) => CarouselConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[carousel] ignoring config override: {}", e);
            CarouselConfig::default()
        }),
    }
}
