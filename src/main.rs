//! Goa or No entry point
//!
//! Wires the pure core (evade/confetti) to the DOM: event listeners,
//! animation-frame loops, canvas painting, and the optional telemetry POST.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, HtmlVideoElement,
        PointerEvent,
    };

    use goa_or_no::confetti::{self, ConfettiSim};
    use goa_or_no::consts::*;
    use goa_or_no::device::DeviceType;
    use goa_or_no::evade::{EvasionController, Layout, Rect};
    use goa_or_no::share;
    use goa_or_no::telemetry::{Answer, Telemetry};

    /// Page state shared between event handlers and frame loops
    struct Page {
        evasion: EvasionController,
        confetti: ConfettiSim,
        telemetry: Telemetry,
        confetti_running: bool,
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn current_device() -> DeviceType {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        DeviceType::classify(width)
    }

    /// Container-local measurements for a placement decision, taken fresh
    /// on every press
    fn measure_layout(container: &Element, no_btn: &Element, yes_btn: &Element) -> Layout {
        let c = container.get_bounding_client_rect();
        let b = no_btn.get_bounding_client_rect();
        let y = yes_btn.get_bounding_client_rect();
        Layout {
            origin: Vec2::new((b.left() - c.left()) as f32, (b.top() - c.top()) as f32),
            container: Vec2::new(c.width() as f32, c.height() as f32),
            control: Vec2::new(b.width() as f32, b.height() as f32),
            accept: Rect::from_coords(
                (y.left() - c.left()) as f32,
                (y.top() - c.top()) as f32,
                y.width() as f32,
                y.height() as f32,
            ),
        }
    }

    /// Switch the decline button out of normal flow, anchored where it
    /// currently sits, and make the card its positioning context. Runs once,
    /// on the first press.
    fn pin_for_evasion(container: &HtmlElement, no_btn: &HtmlElement, origin: Vec2) {
        let _ = container.style().set_property("position", "relative");
        let style = no_btn.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", &format!("{}px", origin.x));
        let _ = style.set_property("top", &format!("{}px", origin.y));
        let _ = style.set_property("margin", "0");
    }

    fn apply_position(no_btn: &HtmlElement, pos: Vec2) {
        let style = no_btn.style();
        let _ = style.set_property("left", &format!("{}px", pos.x));
        let _ = style.set_property("top", &format!("{}px", pos.y));
    }

    /// Add a presentational class and schedule its removal
    fn flash_class(el: &Element, class: &'static str, duration_ms: i32) {
        let _ = el.class_list().add_1(class);
        let el = el.clone();
        let closure = Closure::once(move || {
            let _ = el.class_list().remove_1(class);
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                duration_ms,
            );
        }
        closure.forget();
    }

    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }

    fn render_confetti(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, sim: &ConfettiSim) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        for p in sim.particles() {
            let [r, g, b] = p.color;
            ctx.save();
            let _ = ctx.translate(p.pos.x as f64, p.pos.y as f64);
            let _ = ctx.rotate(p.rotation.to_radians() as f64);
            ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, {:.3})", p.alpha()));
            let half = p.radius as f64;
            ctx.fill_rect(-half, -half, half * 2.0, half * 2.0);
            ctx.restore();
        }
    }

    /// Self-rescheduling frame loop for the decline button's jump tween
    fn schedule_jump_frame(page: Rc<RefCell<Page>>, no_btn: HtmlElement) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            jump_frame(page, no_btn, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn jump_frame(page: Rc<RefCell<Page>>, no_btn: HtmlElement, time: f64) {
        let keep_going = {
            let mut p = page.borrow_mut();
            match p.evasion.step(time) {
                Some(pos) => {
                    apply_position(&no_btn, pos);
                    p.evasion.is_moving()
                }
                None => false,
            }
        };
        if keep_going {
            schedule_jump_frame(page, no_btn);
        }
    }

    /// Self-rescheduling frame loop for the confetti burst; stops once the
    /// sim drains so no idle redraws are left behind
    fn schedule_confetti_frame(
        page: Rc<RefCell<Page>>,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    ) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            confetti_frame(page, canvas, ctx);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn confetti_frame(page: Rc<RefCell<Page>>, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) {
        let active = {
            let mut p = page.borrow_mut();
            p.confetti.tick();
            render_confetti(&ctx, &canvas, &p.confetti);
            let active = p.confetti.is_active();
            p.confetti_running = active;
            active
        };
        if active {
            schedule_confetti_frame(page, canvas, ctx);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Goa or No starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let yes_btn: HtmlElement = document
            .get_element_by_id("yes-btn")
            .expect("no #yes-btn")
            .dyn_into()
            .expect("#yes-btn is not an element");
        let no_btn: HtmlElement = document
            .get_element_by_id("no-btn")
            .expect("no #no-btn")
            .dyn_into()
            .expect("#no-btn is not an element");
        let tease_text = document.get_element_by_id("tease-text").expect("no #tease-text");
        let intro_section: HtmlElement = document
            .get_element_by_id("intro-section")
            .expect("no #intro-section")
            .dyn_into()
            .expect("#intro-section is not an element");
        let trip_section: HtmlElement = document
            .get_element_by_id("trip-section")
            .expect("no #trip-section")
            .dyn_into()
            .expect("#trip-section is not an element");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("confetti-canvas")
            .expect("no #confetti-canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("canvas context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        let video: Option<HtmlVideoElement> = document
            .get_element_by_id("goa-video")
            .and_then(|el| el.dyn_into().ok());
        let share_btn = document.get_element_by_id("share-whatsapp");

        resize_canvas(&canvas);

        let seed = js_sys::Date::now() as u64;
        let page = Rc::new(RefCell::new(Page {
            evasion: EvasionController::new(seed),
            confetti: ConfettiSim::new(seed.wrapping_add(1)),
            telemetry: Telemetry::from_document(&document),
            confetti_running: false,
        }));

        log::info!(
            "Page initialized (seed {seed}, telemetry {})",
            if page.borrow().telemetry.is_enabled() { "on" } else { "off" }
        );

        // Keep the confetti surface sized to the viewport
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                resize_canvas(&canvas);
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Decline button: jump away instead of committing
        {
            let page = page.clone();
            let no_btn_el = no_btn.clone();
            let yes_btn_el = yes_btn.clone();
            let container = intro_section.clone();
            let tease = tease_text.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();

                let mut p = page.borrow_mut();
                // Extra taps mid-jump are dropped entirely
                if p.evasion.is_moving() {
                    return;
                }

                let layout = measure_layout(&container, &no_btn_el, &yes_btn_el);
                if !p.evasion.is_activated() {
                    pin_for_evasion(&container, &no_btn_el, layout.origin);
                }

                let Some(jump) = p.evasion.relocate(&layout, now_ms()) else {
                    return;
                };
                tease.set_text_content(Some(jump.message));
                flash_class(&no_btn_el, "shake", SHAKE_DURATION_MS);
                log::info!("Declined (attempt {})", jump.attempt);

                p.telemetry.send(Answer::No, current_device());
                drop(p);
                schedule_jump_frame(page.clone(), no_btn_el.clone());
            });
            let _ = no_btn
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Accept button: celebrate and reveal the trip
        {
            let page = page.clone();
            let yes_btn_el = yes_btn.clone();
            let intro = intro_section.clone();
            let trip = trip_section.clone();
            let canvas = canvas.clone();
            let ctx = ctx.clone();
            let video = video.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                flash_class(&yes_btn_el, "clicked", YES_CLICK_FLASH_MS);

                let device = current_device();
                page.borrow().telemetry.send(Answer::Yes, device);

                let _ = intro.class_list().add_1("hidden");
                let _ = trip.class_list().remove_1("hidden");
                // Force a reflow so the visibility transition actually plays
                let _ = trip.offset_width();
                let _ = trip.class_list().add_1("visible");

                if let Some(ref video) = video {
                    video.set_current_time(0.0);
                    match video.play() {
                        Ok(promise) => {
                            wasm_bindgen_futures::spawn_local(async move {
                                if let Err(err) =
                                    wasm_bindgen_futures::JsFuture::from(promise).await
                                {
                                    log::warn!("Video play failed: {err:?}");
                                }
                            });
                        }
                        Err(err) => log::warn!("Video play error: {err:?}"),
                    }
                }

                let count = confetti::burst_count(device);
                if count == 0 {
                    return;
                }
                let origin = Vec2::new(
                    canvas.width() as f32 / 2.0,
                    canvas.height() as f32 / 3.0,
                );
                let start_loop = {
                    let mut p = page.borrow_mut();
                    p.confetti.burst(origin, count);
                    let already_running = p.confetti_running;
                    p.confetti_running = true;
                    !already_running
                };
                if start_loop {
                    schedule_confetti_frame(page.clone(), canvas.clone(), ctx.clone());
                }
            });
            let _ = yes_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Share button (optional in the markup)
        if let Some(btn) = share_btn {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if let Some(window) = web_sys::window() {
                    share::open_whatsapp_share(&window);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        log::info!("Goa or No running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Goa or No (native) starting...");
    log::info!("The page needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning evasion sampler smoke test...");
    smoke_test_evasion();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_evasion() {
    use glam::Vec2;
    use goa_or_no::evade::{EvasionController, Layout, Rect};

    let layout = Layout {
        origin: Vec2::new(200.0, 150.0),
        container: Vec2::new(400.0, 200.0),
        control: Vec2::new(80.0, 36.0),
        accept: Rect::from_coords(100.0, 150.0, 96.0, 36.0),
    };

    let mut ctrl = EvasionController::new(42);
    let mut now = 0.0;
    for _ in 0..10 {
        let jump = ctrl.relocate(&layout, now).expect("controller idle");
        assert!(jump.to.x >= 12.0 && jump.to.x <= 308.0);
        assert!(jump.to.y >= 12.0 && jump.to.y <= 152.0);
        now += 300.0;
        while ctrl.step(now).is_some() {}
        println!("  jump {} -> ({:.0}, {:.0}): {}", jump.attempt, jump.to.x, jump.to.y, jump.message);
    }
    println!("✓ Evasion sampler smoke test passed!");
}
