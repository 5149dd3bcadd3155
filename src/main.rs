//! Evil Circle entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, Result, anyhow};
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, KeyboardEvent};

    use evil_circle::hud::apply_events;
    use evil_circle::renderer::CanvasSurface;
    use evil_circle::sim::{Arena, SimEvent, SimState, tick};
    use evil_circle::KeyDirection;

    /// Element whose text shows the live ball count
    const COUNTER_ELEMENT_ID: &str = "ball-count";

    struct Game {
        state: SimState,
        surface: CanvasSurface,
        counter: Option<Element>,
    }

    impl Game {
        /// Run one frame. Returns true when the evil circle was just created.
        fn frame(&mut self) -> bool {
            let events = tick(&mut self.state, &mut self.surface);
            if let Some(counter) = self.counter.as_mut() {
                apply_events(counter, &events);
            }
            events.contains(&SimEvent::EvilCircleSpawned)
        }
    }

    fn js_error(value: JsValue) -> anyhow::Error {
        anyhow!("{:?}", value)
    }

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow!("Failed to init logger: {}", e))?;

        log::info!("Evil Circle starting...");

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .map_err(js_error)?
            .context("no canvas")?
            .dyn_into()
            .map_err(|_| anyhow!("not a canvas"))?;

        // Canvas size is fixed at startup; resizes are not tracked
        let width = window
            .inner_width()
            .map_err(js_error)?
            .as_f64()
            .context("innerWidth is not a number")?;
        let height = window
            .inner_height()
            .map_err(js_error)?
            .as_f64()
            .context("innerHeight is not a number")?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(js_error)?
            .context("2d context unavailable")?
            .dyn_into()
            .map_err(|_| anyhow!("context is not a CanvasRenderingContext2d"))?;

        let counter = document.get_element_by_id(COUNTER_ELEMENT_ID);
        if counter.is_none() {
            log::warn!("No #{} element, ball count will not be shown", COUNTER_ELEMENT_ID);
        }

        let arena = Arena::new(width as u32 as f32, height as u32 as f32);
        let state = SimState::new(js_sys::Date::now() as u64, arena);
        log::info!(
            "Simulation initialized with seed {} on a {}x{} canvas",
            state.seed,
            state.arena.width,
            state.arena.height
        );

        let game = Rc::new(RefCell::new(Game {
            state,
            surface: CanvasSurface::new(ctx),
            counter,
        }));

        request_animation_frame(game);

        log::info!("Evil Circle running!");
        Ok(())
    }

    /// Bind the arrow keys to the evil circle (called once, when it appears)
    fn setup_controls(game: Rc<RefCell<Game>>) -> Result<()> {
        let window = web_sys::window().context("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            #[allow(deprecated)]
            let code = event.key_code();
            if let Some(direction) = KeyDirection::from_event(code, &event.key()) {
                game.borrow_mut().state.handle_key(direction);
            }
        });
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
        log::info!("Arrow keys bound to the evil circle");
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let evil_circle_spawned = game.borrow_mut().frame();

        if evil_circle_spawned {
            if let Err(e) = setup_controls(game.clone()) {
                log::error!("Failed to bind controls: {:#}", e);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| JsError::new(&format!("{:#}", e)).into())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Evil Circle (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a canvas and report what happened
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use evil_circle::hud::{TextCounter, apply_events};
    use evil_circle::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
    use evil_circle::renderer::RecordingSurface;
    use evil_circle::sim::{Arena, SimEvent, SimState, tick};
    use evil_circle::KeyDirection;

    const FRAMES: u64 = 600;
    const KEY_EVERY: u64 = 5;
    const KEY_SCRIPT: [u32; 8] = [
        KEY_RIGHT, KEY_RIGHT, KEY_DOWN, KEY_DOWN, KEY_LEFT, KEY_LEFT, KEY_UP, KEY_UP,
    ];

    let mut state = SimState::new(rand::random(), Arena::new(800.0, 600.0));
    let mut surface = RecordingSurface::default();
    let mut counter = TextCounter::default();
    let mut draw_calls = 0usize;
    let mut eaten = 0usize;

    log::info!("Headless run: seed {} for {} frames", state.seed, FRAMES);

    for frame in 0..FRAMES {
        if frame % KEY_EVERY == 0 {
            let code = KEY_SCRIPT[(frame / KEY_EVERY) as usize % KEY_SCRIPT.len()];
            if let Some(direction) = KeyDirection::from_key_code(code) {
                state.handle_key(direction);
            }
        }

        let events = tick(&mut state, &mut surface);
        apply_events(&mut counter, &events);
        for event in &events {
            if let SimEvent::BallEaten { index } = event {
                log::debug!("Ball {} eaten on frame {}", index, state.frame);
                eaten += 1;
            }
        }

        draw_calls += surface.commands.len();
        surface.clear();
    }

    log::info!(
        "Done after {} frames: {} of {} balls left (counter shows {}), {} eaten, {} draw calls",
        state.frame,
        state.active_count(),
        state.balls.len(),
        counter.text,
        eaten,
        draw_calls
    );
    if counter.value() != state.active_count() as i64 {
        log::error!("Counter drifted from the active ball count");
    }
}
