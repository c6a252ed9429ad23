use crate::SharedCarousel;
use folio_core::CarouselInput;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub carousel: SharedCarousel,
    pub origin: Instant,
}

impl FrameContext {
    /// One paint: coalesced scroll update plus a snap animation step.
    pub fn frame(&mut self) {
        let now_ms = self.origin.elapsed().as_secs_f64() * 1000.0;
        self.carousel
            .borrow_mut()
            .dispatch(CarouselInput::Frame { now_ms });
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let first = tick.borrow();
    if let (Some(w), Some(cb)) = (web::window(), first.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
