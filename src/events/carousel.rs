use crate::constants::{CAROUSEL_DOT, DOT_INDEX_ATTR};
use crate::dom;
use crate::SharedCarousel;
use folio_core::CarouselInput;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_carousel(
    carousel: &SharedCarousel,
    document: &web::Document,
    touch_target: &web::Element,
) {
    wire_scroll(carousel);
    wire_resize(carousel);
    wire_touch(carousel, touch_target);
    wire_dots(carousel, document);
}

// Scroll only marks the controller dirty; the frame loop applies it.
fn wire_scroll(carousel: &SharedCarousel) {
    let c = carousel.clone();
    let closure = Closure::wrap(Box::new(move || {
        c.borrow_mut().dispatch(CarouselInput::Scroll);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// `load` remeasures once images and web fonts have settled the card widths.
fn wire_resize(carousel: &SharedCarousel) {
    let c = carousel.clone();
    let closure = Closure::wrap(Box::new(move || {
        c.borrow_mut().dispatch(CarouselInput::Resize);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        for event in ["resize", "load"] {
            _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

#[inline]
fn first_touch(list: &web::TouchList) -> Option<(f64, f64)> {
    list.get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

fn wire_touch(carousel: &SharedCarousel, target: &web::Element) {
    let c = carousel.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev.touches()) {
            c.borrow_mut().dispatch(CarouselInput::TouchStart { x, y });
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref());
    start.forget();

    // non-passive so a horizontal swipe can hold the page still
    let c = carousel.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some((x, y)) = first_touch(&ev.touches()) else {
            return;
        };
        let response = c.borrow_mut().dispatch(CarouselInput::TouchMove { x, y });
        if response.prevent_default {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        moved.as_ref().unchecked_ref(),
        &opts,
    );
    moved.forget();

    let c = carousel.clone();
    let end = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let input = match first_touch(&ev.changed_touches()) {
            Some((x, _)) => CarouselInput::TouchEnd { x },
            None => CarouselInput::TouchCancel,
        };
        c.borrow_mut().dispatch(input);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref());
    end.forget();

    let c = carousel.clone();
    let cancel = Closure::wrap(Box::new(move || {
        c.borrow_mut().dispatch(CarouselInput::TouchCancel);
    }) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("touchcancel", cancel.as_ref().unchecked_ref());
    cancel.forget();
}

fn wire_dots(carousel: &SharedCarousel, document: &web::Document) {
    for (position, dot) in dom::query_all(document, CAROUSEL_DOT).into_iter().enumerate() {
        let index = dot
            .get_attribute(DOT_INDEX_ATTR)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(position);
        let c = carousel.clone();
        dom::add_click_listener(&dot, move || {
            log::debug!("[carousel] dot {} clicked", index);
            // ignored by the controller in Wide mode
            c.borrow_mut().dispatch(CarouselInput::GoTo(index));
        });
    }
}
