// Host-side tests for the carousel controller against a recording fake host.

mod common;

use common::{approx_eq, FakeHost};
use folio_core::{
    AxisLock, CarouselConfig, CarouselController, CarouselInput, DragState, ViewportClass,
};

fn mount(host: FakeHost) -> CarouselController<FakeHost> {
    CarouselController::mount(host, CarouselConfig::default())
}

/// Run the snap animation to completion.
fn settle(c: &mut CarouselController<FakeHost>) {
    c.tick(0.0);
    c.tick(10_000.0);
    assert!(!c.is_animating());
}

fn axis(c: &CarouselController<FakeHost>) -> Option<AxisLock> {
    match c.state().drag {
        DragState::Dragging(d) => Some(d.axis),
        DragState::Idle => None,
    }
}

#[test]
fn mount_compact_anchors_first_card() {
    let c = mount(FakeHost::compact());
    assert_eq!(c.class(), ViewportClass::Compact);
    assert_eq!(c.state().active_index, 0);
    assert_eq!(c.host().last_offset(), Some(0.0));
    assert_eq!(c.host().active_dots(), vec![0]);
    assert!(c.host().helper_visible);
}

#[test]
fn go_to_index_lands_on_card_boundary() {
    // 3 cards, 300px wide, 32px gap
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    settle(&mut c);
    assert_eq!(c.state().offset, -664.0);
    assert_eq!(c.host().last_offset(), Some(-664.0));
    assert_eq!(c.state().active_index, 2);
    assert_eq!(c.host().active_dots(), vec![2]);
}

#[test]
fn go_to_index_is_exact_for_every_card_count() {
    for n in 1..=6 {
        let host = FakeHost {
            card_count: n,
            dots: vec![false; n],
            ..FakeHost::compact()
        };
        let mut c = mount(host);
        for i in 0..n {
            c.go_to_index(i);
            settle(&mut c);
            assert_eq!(c.state().offset, -(i as f64) * 332.0, "n={n} i={i}");
            assert_eq!(c.host().active_dots(), vec![i], "n={n} i={i}");
        }
    }
}

#[test]
fn go_to_index_clamps_past_last_card() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(9);
    settle(&mut c);
    assert_eq!(c.state().active_index, 2);
    assert_eq!(c.state().offset, -664.0);
}

#[test]
fn snap_animation_decelerates() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    c.tick(0.0);
    assert_eq!(c.state().offset, 0.0);
    c.tick(200.0);
    // halfway in time is three quarters of the distance
    assert!(approx_eq(c.state().offset, -664.0 * 0.75));
    assert!(c.is_animating());
    c.tick(400.0);
    assert_eq!(c.state().offset, -664.0);
    assert!(!c.is_animating());
}

#[test]
fn newer_go_to_index_supersedes_running_snap() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    c.tick(0.0);
    c.tick(100.0);
    c.go_to_index(1);
    assert_eq!(c.animation_target(), Some(-332.0));
    settle(&mut c);
    assert_eq!(c.state().offset, -332.0);
    assert_eq!(c.host().active_dots(), vec![1]);
}

#[test]
fn touch_start_cancels_running_snap() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    c.tick(0.0);
    c.tick(100.0);
    let mid = c.state().offset;
    c.on_touch_start(200.0, 300.0);
    assert!(!c.is_animating());
    c.tick(500.0);
    assert_eq!(c.state().offset, mid);
}

#[test]
fn long_left_swipe_advances_one_card() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(1);
    settle(&mut c);

    c.on_touch_start(300.0, 400.0);
    c.on_touch_move(260.0, 402.0);
    c.on_touch_move(220.0, 405.0);
    c.on_touch_end(220.0);

    assert_eq!(c.state().active_index, 2);
    assert_eq!(c.animation_target(), Some(-664.0));
    assert_eq!(c.state().drag, DragState::Idle);
}

#[test]
fn short_swipe_snaps_back() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(1);
    settle(&mut c);

    c.on_touch_start(300.0, 400.0);
    c.on_touch_move(285.0, 400.0);
    c.on_touch_move(270.0, 400.0);
    assert_eq!(c.state().offset, -332.0 - 30.0);
    c.on_touch_end(270.0);

    assert_eq!(c.state().active_index, 1);
    assert_eq!(c.animation_target(), Some(-332.0));
    settle(&mut c);
    assert_eq!(c.state().offset, -332.0);
}

#[test]
fn swipe_exactly_at_threshold_does_not_advance() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(300.0, 400.0);
    c.on_touch_move(250.0, 400.0);
    c.on_touch_end(250.0);
    assert_eq!(c.state().active_index, 0);
}

#[test]
fn right_swipe_on_first_card_stays_put() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(100.0, 400.0);
    c.on_touch_move(200.0, 400.0);
    c.on_touch_end(200.0);
    assert_eq!(c.state().active_index, 0);
    assert_eq!(c.animation_target(), Some(0.0));
}

#[test]
fn right_swipe_goes_back_one_card() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    settle(&mut c);
    c.on_touch_start(100.0, 400.0);
    c.on_touch_move(190.0, 400.0);
    c.on_touch_end(190.0);
    assert_eq!(c.state().active_index, 1);
}

#[test]
fn drag_past_last_card_is_damped() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    settle(&mut c);
    c.on_touch_start(200.0, 300.0);
    c.on_touch_move(160.0, 300.0);
    // 40px past the end becomes 12px of overscroll
    assert!(approx_eq(c.state().offset, -664.0 - 12.0));
}

#[test]
fn drag_before_first_card_is_damped_and_capped() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(0.0, 300.0);
    c.on_touch_move(100.0, 300.0);
    assert!(approx_eq(c.state().offset, 30.0));
    c.on_touch_move(1000.0, 300.0);
    assert!(approx_eq(c.state().offset, 120.0));
}

#[test]
fn drag_offset_is_continuous_and_bounded() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(500.0, 300.0);
    let mut xs: Vec<f64> = (511..=900).map(f64::from).collect();
    xs.extend((-1000..900).rev().map(f64::from));

    let mut prev: Option<(f64, f64)> = None;
    for x in xs {
        c.on_touch_move(x, 300.0);
        let offset = c.state().offset;
        assert!(offset <= 120.0 + 1e-9, "x={x} offset={offset}");
        assert!(offset >= -664.0 - 120.0 - 1e-9, "x={x} offset={offset}");
        if let Some((px, poff)) = prev {
            assert!((offset - poff).abs() <= (x - px).abs() + 1e-9, "jump at x={x}");
        }
        prev = Some((x, offset));
    }
}

#[test]
fn small_moves_stay_in_dead_zone() {
    let mut c = mount(FakeHost::compact());
    let before = c.host().offsets.len();
    c.on_touch_start(200.0, 300.0);
    let r = c.on_touch_move(208.0, 306.0);
    assert!(!r.prevent_default);
    assert_eq!(axis(&c), Some(AxisLock::Unknown));
    assert_eq!(c.host().offsets.len(), before);
}

#[test]
fn vertical_gesture_passes_through() {
    let mut c = mount(FakeHost::compact());
    let before = c.host().offsets.len();
    c.on_touch_start(200.0, 300.0);
    let r = c.on_touch_move(203.0, 340.0);
    assert!(!r.prevent_default);
    assert_eq!(axis(&c), Some(AxisLock::Vertical));

    // sideways travel later in the same gesture doesn't re-decide
    let r = c.on_touch_move(60.0, 345.0);
    assert!(!r.prevent_default);
    assert_eq!(axis(&c), Some(AxisLock::Vertical));
    assert_eq!(c.host().offsets.len(), before);

    c.on_touch_end(60.0);
    assert_eq!(c.state().active_index, 0);
    assert!(c.host().helper_visible);
}

#[test]
fn horizontal_lock_holds_for_whole_gesture() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(200.0, 300.0);
    let r = c.on_touch_move(180.0, 302.0);
    assert!(r.prevent_default);
    assert_eq!(axis(&c), Some(AxisLock::Horizontal));

    let r = c.on_touch_move(175.0, 500.0);
    assert!(r.prevent_default);
    assert_eq!(axis(&c), Some(AxisLock::Horizontal));
    assert_eq!(c.state().offset, -25.0);
}

#[test]
fn touch_cancel_always_snaps_back() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(1);
    settle(&mut c);
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(100.0, 300.0);
    c.on_touch_cancel();
    assert_eq!(c.state().active_index, 1);
    assert_eq!(c.animation_target(), Some(-332.0));
    assert_eq!(c.state().drag, DragState::Idle);
}

#[test]
fn touch_cancel_keeps_helper_visible() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(285.0, 300.0);
    assert_eq!(c.state().offset, -15.0);
    c.on_touch_cancel();
    assert_eq!(c.state().active_index, 0);
    assert_eq!(c.animation_target(), Some(0.0));
    assert!(!c.state().helper_dismissed);
    assert!(c.host().helper_visible);
    assert_eq!(c.host().helper_writes, 0);
}

#[test]
fn vertical_gesture_resettles_an_interrupted_snap() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(1);
    c.tick(0.0);
    c.tick(100.0);
    c.on_touch_start(200.0, 300.0);
    c.on_touch_move(200.0, 360.0);
    c.on_touch_end(200.0);
    assert_eq!(c.animation_target(), Some(-332.0));
    settle(&mut c);
    assert_eq!(c.state().offset, -332.0);
}

#[test]
fn helper_dismissed_once_by_user_input_only() {
    let mut c = mount(FakeHost::compact());
    c.on_resize();
    c.on_resize();
    assert_eq!(c.host().helper_writes, 0);
    assert!(!c.state().helper_dismissed);

    c.go_to_index(1);
    assert!(c.state().helper_dismissed);
    assert!(!c.host().helper_visible);
    assert_eq!(c.host().helper_writes, 1);

    c.go_to_index(2);
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(200.0, 300.0);
    c.on_touch_end(200.0);
    assert_eq!(c.host().helper_writes, 1);
}

#[test]
fn resize_resnaps_without_resetting_index() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    settle(&mut c);

    c.host_mut().card_width = 280.0;
    c.on_resize();
    assert_eq!(c.state().active_index, 2);
    assert_eq!(c.state().offset, -2.0 * 312.0);
    assert_eq!(c.host().active_dots(), vec![2]);
}

#[test]
fn resize_is_idempotent() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(1);
    settle(&mut c);
    c.host_mut().card_width = 310.0;
    c.on_resize();
    let once = c.state().clone();
    c.on_resize();
    assert_eq!(c.state(), &once);

    let mut w = mount(FakeHost {
        section_top: -300.0,
        ..FakeHost::wide()
    });
    w.on_resize();
    let once = w.state().offset;
    w.on_resize();
    assert_eq!(w.state().offset, once);
}

#[test]
fn resize_mid_drag_waits_for_gesture_end() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(250.0, 300.0);
    assert_eq!(c.state().offset, -50.0);

    c.host_mut().card_width = 200.0;
    let writes = c.host().offsets.len();
    c.on_resize();
    assert_eq!(c.host().offsets.len(), writes);
    assert_eq!(c.layout().map(|l| l.card_width), Some(300.0));

    c.on_touch_move(240.0, 300.0);
    assert_eq!(c.state().offset, -60.0);
    c.on_touch_end(240.0);
    assert_eq!(c.layout().map(|l| l.card_width), Some(200.0));
    assert_eq!(c.state().active_index, 1);
    assert_eq!(c.animation_target(), Some(-232.0));
}

#[test]
fn crossing_breakpoint_mid_drag_drops_gesture() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(250.0, 300.0);

    c.host_mut().viewport_width = 1280.0;
    c.host_mut().content_width = 3000.0;
    c.on_resize();
    assert_eq!(c.class(), ViewportClass::Compact);

    // far enough to advance had the gesture survived
    c.on_touch_end(100.0);
    assert_eq!(c.class(), ViewportClass::Wide);
    assert_eq!(c.state().drag, DragState::Idle);
    assert_eq!(c.state().active_index, 0);
    assert!(!c.is_animating());
    // section is still below the fold
    assert_eq!(c.state().offset, 0.0);
}

#[test]
fn dot_click_mid_drag_takes_over_the_gesture() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(250.0, 300.0);
    assert_eq!(c.state().offset, -50.0);

    c.go_to_index(2);
    assert_eq!(c.state().drag, DragState::Idle);
    assert_eq!(c.animation_target(), Some(-664.0));
    let from = c.host().offsets.len();

    c.tick(0.0);
    let r = c.on_touch_move(240.0, 300.0);
    assert!(!r.prevent_default);
    c.tick(200.0);
    c.on_touch_end(240.0);
    c.tick(300.0);
    assert_eq!(c.state().active_index, 2);
    assert_eq!(c.animation_target(), Some(-664.0));

    // only the snap writes from here on, heading steadily toward the target
    let written = &c.host().offsets[from..];
    assert_eq!(written.len(), 3);
    assert!(written.windows(2).all(|w| w[1] < w[0]));

    settle(&mut c);
    assert_eq!(c.state().offset, -664.0);
}

#[test]
fn dot_click_mid_drag_applies_deferred_resize() {
    let mut c = mount(FakeHost::compact());
    c.on_touch_start(300.0, 300.0);
    c.on_touch_move(250.0, 300.0);
    c.host_mut().card_width = 200.0;
    c.on_resize();
    assert_eq!(c.layout().map(|l| l.card_width), Some(300.0));

    c.go_to_index(1);
    assert_eq!(c.layout().map(|l| l.card_width), Some(200.0));
    assert_eq!(c.animation_target(), Some(-232.0));
    c.on_touch_end(100.0);
    assert_eq!(c.state().active_index, 1);
}

#[test]
fn wide_mode_ignores_touch_and_dots() {
    let mut c = mount(FakeHost::wide());
    assert_eq!(c.class(), ViewportClass::Wide);
    let writes = c.host().offsets.len();
    c.on_touch_start(300.0, 300.0);
    assert_eq!(c.state().drag, DragState::Idle);
    let r = c.on_touch_move(100.0, 300.0);
    assert!(!r.prevent_default);
    c.go_to_index(2);
    assert!(!c.is_animating());
    assert_eq!(c.state().active_index, 0);
    assert_eq!(c.host().offsets.len(), writes);
}

#[test]
fn wide_scroll_progress_is_accelerated() {
    // section 2000px, viewport 800px, scrolled 600px in
    let c = mount(FakeHost {
        section_top: -600.0,
        ..FakeHost::wide()
    });
    let max_scroll = 3000.0 - 1280.0 + 100.0;
    let progress = (600.0_f64 / 1200.0 / 0.7).min(1.0);
    assert!(approx_eq(progress, 0.714_285_714_285_714_3));
    assert!(approx_eq(c.state().offset, -progress * max_scroll));
}

#[test]
fn wide_scroll_before_within_and_after_section() {
    let mut c = mount(FakeHost::wide());
    assert_eq!(c.state().offset, 0.0);

    // past 70% of the range the traverse is complete
    c.host_mut().section_top = -1000.0;
    c.on_scroll();
    assert!(approx_eq(c.state().offset, -1820.0));

    c.host_mut().section_top = -5000.0;
    c.on_scroll();
    assert!(approx_eq(c.state().offset, -1820.0));

    c.host_mut().section_top = 50.0;
    c.on_scroll();
    assert_eq!(c.state().offset, 0.0);
}

#[test]
fn narrow_row_never_moves_in_wide_mode() {
    let c = mount(FakeHost {
        content_width: 600.0,
        section_top: -1100.0,
        ..FakeHost::wide()
    });
    assert_eq!(c.state().offset, 0.0);
}

#[test]
fn scroll_bursts_coalesce_into_one_update_per_frame() {
    let mut c = mount(FakeHost::wide());
    let reads = c.host().section_reads.get();
    for i in 0..5 {
        c.host_mut().section_top = -100.0 * f64::from(i);
        c.dispatch(CarouselInput::Scroll);
    }
    assert_eq!(c.host().section_reads.get(), reads);
    c.dispatch(CarouselInput::Frame { now_ms: 16.0 });
    assert_eq!(c.host().section_reads.get(), reads + 1);
    // latest position wins
    let expected = -(400.0 / 1200.0 / 0.7) * 1820.0;
    assert!(approx_eq(c.state().offset, expected));

    c.dispatch(CarouselInput::Frame { now_ms: 32.0 });
    assert_eq!(c.host().section_reads.get(), reads + 1);
}

#[test]
fn scroll_is_ignored_in_compact_mode() {
    let mut c = mount(FakeHost::compact());
    let writes = c.host().offsets.len();
    c.host_mut().section_top = -600.0;
    c.request_scroll();
    c.tick(16.0);
    assert_eq!(c.host().offsets.len(), writes);
}

#[test]
fn wide_resize_recomputes_max_scroll() {
    let mut c = mount(FakeHost {
        section_top: -2000.0,
        ..FakeHost::wide()
    });
    assert!(approx_eq(c.state().offset, -1820.0));
    c.host_mut().content_width = 2500.0;
    c.on_resize();
    assert!(approx_eq(c.state().offset, -1320.0));
}

#[test]
fn crossing_into_compact_reanchors_to_nearest_card() {
    let mut c = mount(FakeHost {
        section_top: -240.0,
        ..FakeHost::wide()
    });
    assert!(approx_eq(c.state().offset, -520.0));

    c.host_mut().viewport_width = 500.0;
    c.on_resize();
    assert_eq!(c.class(), ViewportClass::Compact);
    assert_eq!(c.state().active_index, 2);
    assert_eq!(c.state().offset, -664.0);
    assert_eq!(c.host().active_dots(), vec![2]);
    assert!(!c.state().helper_dismissed);
}

#[test]
fn crossing_into_wide_follows_scroll_again() {
    let mut c = mount(FakeHost::compact());
    c.go_to_index(2);
    c.tick(0.0);
    c.host_mut().viewport_width = 1280.0;
    c.host_mut().content_width = 3000.0;
    c.on_resize();
    assert_eq!(c.class(), ViewportClass::Wide);
    assert!(!c.is_animating());
    // section is still below the fold
    assert_eq!(c.state().offset, 0.0);
}

#[test]
fn zero_cards_degrades_to_no_op() {
    let host = FakeHost {
        card_count: 0,
        dots: Vec::new(),
        ..FakeHost::compact()
    };
    let mut c = mount(host);
    assert!(c.layout().is_none());
    c.go_to_index(1);
    c.on_touch_start(10.0, 10.0);
    c.on_touch_move(-100.0, 10.0);
    c.on_touch_end(-100.0);
    c.on_resize();
    settle(&mut c);
    assert!(c.host().offsets.is_empty());

    let mut w = mount(FakeHost {
        card_count: 0,
        section_top: -600.0,
        ..FakeHost::wide()
    });
    w.on_scroll();
    assert!(w.host().offsets.is_empty());
}

#[test]
fn missing_elements_degrade_to_no_op() {
    let mut c = mount(FakeHost {
        section_present: false,
        ..FakeHost::wide()
    });
    c.on_scroll();
    assert!(c.host().offsets.is_empty());

    let mut c = mount(FakeHost {
        row_present: false,
        ..FakeHost::compact()
    });
    c.go_to_index(1);
    c.on_touch_start(0.0, 0.0);
    assert!(c.host().offsets.is_empty());
}

#[test]
fn degenerate_section_pins_progress_at_zero() {
    let mut c = mount(FakeHost {
        section_height: 800.0,
        section_top: -10.0,
        ..FakeHost::wide()
    });
    assert_eq!(c.state().offset, 0.0);
    c.host_mut().section_height = 400.0;
    c.on_scroll();
    assert!(c.state().offset.is_finite());
    assert_eq!(c.state().offset, 0.0);
}

#[test]
fn dispatch_routes_gestures() {
    let mut c = mount(FakeHost::compact());
    c.dispatch(CarouselInput::TouchStart { x: 300.0, y: 300.0 });
    let r = c.dispatch(CarouselInput::TouchMove { x: 200.0, y: 300.0 });
    assert!(r.prevent_default);
    let r = c.dispatch(CarouselInput::TouchEnd { x: 200.0 });
    assert!(!r.prevent_default);
    assert_eq!(c.state().active_index, 1);

    c.dispatch(CarouselInput::GoTo(0));
    c.dispatch(CarouselInput::Frame { now_ms: 0.0 });
    c.dispatch(CarouselInput::Frame { now_ms: 1000.0 });
    assert_eq!(c.state().offset, 0.0);

    c.dispatch(CarouselInput::TouchStart { x: 300.0, y: 300.0 });
    c.dispatch(CarouselInput::TouchMove { x: 100.0, y: 300.0 });
    c.dispatch(CarouselInput::TouchCancel);
    assert_eq!(c.state().active_index, 0);
}
