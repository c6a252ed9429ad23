use crate::constants::{FUN_FACT_ID, TIME_ID};
use crate::dom;
use folio_core::clock::format_clock;
use folio_core::constants::{CLOCK_REFRESH_MS, TYPEWRITER_START_DELAY_MS};
use folio_core::typewriter::Typewriter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn update_clock(document: &web::Document) {
    let now = js_sys::Date::new_0();
    dom::set_text_by_id(
        document,
        TIME_ID,
        &format_clock(now.get_hours(), now.get_minutes()),
    );
}

pub fn wire_clock(document: &web::Document) {
    if document.get_element_by_id(TIME_ID).is_none() {
        return;
    }
    update_clock(document);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || update_clock(&doc)) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            CLOCK_REFRESH_MS,
        );
    }
    closure.forget();
}

fn schedule(callback: &Closure<dyn FnMut()>, delay_ms: f64) {
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.round() as i32,
        );
    }
}

/// Self-rescheduling typewriter on the hero fun-fact line.
pub fn start_typewriter(document: &web::Document) {
    let Some(el) = document.get_element_by_id(FUN_FACT_ID) else {
        return;
    };
    let writer = Rc::new(RefCell::new(Typewriter::default()));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(step) = writer.borrow_mut().step(js_sys::Math::random()) else {
            return;
        };
        el.set_text_content(Some(&step.text));
        if let Some(cb) = tick_clone.borrow().as_ref() {
            schedule(cb, step.delay_ms);
        }
    }) as Box<dyn FnMut()>));
    let first = tick.borrow();
    if let Some(cb) = first.as_ref() {
        schedule(cb, TYPEWRITER_START_DELAY_MS);
    }
}
