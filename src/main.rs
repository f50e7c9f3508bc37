//! Ute Lander entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement};

    use ute_lander::audio::{self, AudioManager, SoundEffect};
    use ute_lander::consts::{MAX_SUBSTEPS, SIM_DT};
    use ute_lander::input::{self, KeyAction};
    use ute_lander::renderer::{RenderState, scene};
    use ute_lander::sim::{Flow, GameEvent, Session, TickInput, Variant};
    use ute_lander::ui::{self, TextLine};
    use ute_lander::{AssetLoadError, GameError, Settings};

    /// Base overlay font size in CSS pixels
    const FONT_PX: f32 = 20.0;

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        /// Arrow keys currently held
        held: TickInput,
        accumulator: f32,
        last_time: f64,
        canvas: HtmlCanvasElement,
        overlay: Element,
        /// What the overlay currently shows, so the DOM is only touched on change
        shown: Vec<TextLine>,
        running: bool,
    }

    impl Game {
        /// Run simulation steps for the elapsed time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            let mut events = Vec::new();
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                events.extend(self.session.update(&self.held));
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps > 0 {
                self.play_events(&events);
            }
        }

        fn play_events(&mut self, events: &[GameEvent]) {
            // The jumper's thrust is a single kick, the lander's a held burn
            let burning = audio::thrust_active(events);
            match self.session.variant {
                Variant::Lander => self.audio.set_thrust(burning),
                Variant::Jumper if burning => self.audio.play(SoundEffect::Thrust),
                Variant::Jumper => {}
            }
            for effect in events.iter().filter_map(SoundEffect::for_event) {
                self.audio.play(effect);
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene::build(&self.session, time);
                match render_state.render(&vertices, self.session.camera) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Rebuild the text overlay when its content changed
        fn update_overlay(&mut self, document: &Document) {
            let lines = ui::overlay(&self.session, &self.settings);
            if lines == self.shown {
                return;
            }

            self.overlay.set_inner_html("");
            for line in &lines {
                let Ok(el) = document.create_element("div") else {
                    continue;
                };
                let style = format!(
                    "position:absolute;left:{}px;top:{}px;font-size:{}px;white-space:nowrap",
                    line.pos.x,
                    line.pos.y,
                    FONT_PX * line.scale
                );
                let _ = el.set_attribute("style", &style);
                el.set_text_content(Some(&line.text));
                let _ = self.overlay.append_child(&el);
            }
            self.shown = lines;
        }

        fn key_down(&mut self, key: &str, repeat: bool) {
            match input::key_down(&mut self.held, key, repeat) {
                KeyAction::Session(key) => {
                    if self.session.handle_key(key) == Flow::Quit {
                        self.quit();
                    }
                }
                KeyAction::ToggleMute => {
                    self.settings.muted = !self.settings.muted;
                    self.audio.set_volume(self.settings.effective_volume());
                    self.settings.save();
                }
                KeyAction::ToggleTelemetry => {
                    self.settings.show_telemetry = !self.settings.show_telemetry;
                    self.settings.save();
                }
                KeyAction::Held | KeyAction::Ignore => {}
            }
        }

        /// Close the game window: stop the loop and hide the canvas
        fn quit(&mut self) {
            self.running = false;
            self.audio.set_thrust(false);
            self.overlay.set_inner_html("");
            let _ = self.canvas.set_attribute("style", "display:none");
            log::info!("Ute Lander closed");
        }
    }

    fn missing(what: &str) -> GameError {
        AssetLoadError::Missing(what.to_string()).into()
    }

    pub async fn run() -> Result<(), GameError> {
        log::info!("Ute Lander starting...");

        let window = web_sys::window().ok_or_else(|| missing("window"))?;
        let document = window.document().ok_or_else(|| missing("document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| missing("#canvas"))?
            .dyn_into()
            .map_err(|_| missing("#canvas (not a canvas)"))?;
        let overlay = document
            .get_element_by_id("overlay")
            .ok_or_else(|| missing("#overlay"))?;

        let variant = canvas
            .get_attribute("data-game")
            .and_then(|name| Variant::from_name(&name))
            .unwrap_or_default();
        let session = Session::from_builtin(variant)?;
        log::info!("Loaded {} ({}x{} tiles)", variant.title(), session.map.width, session.map.height);

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Graphics(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Graphics(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| GameError::Graphics(e.to_string()))?;

        let settings = Settings::load();
        let audio = AudioManager::new(settings.effective_volume());

        let game = Rc::new(RefCell::new(Game {
            session,
            settings,
            render_state: Some(render_state),
            audio,
            held: TickInput::default(),
            accumulator: 0.0,
            last_time: 0.0,
            canvas,
            overlay,
            shown: Vec::new(),
            running: true,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Ute Lander running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                if key.starts_with("Arrow") {
                    event.prevent_default();
                }
                game.borrow_mut().key_down(&key, event.repeat());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                input::set_held(&mut game.borrow_mut().held, &event.key(), false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drop held keys when the window loses focus, or the ute burns forever
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().held = TickInput::default();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if !g.running {
                return;
            }

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_overlay(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run().await {
        log::error!("Ute Lander failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Ute Lander (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    match native::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use ute_lander::sim::{GameEvent, Player, Session, TickInput, TileMap, Variant};
    use ute_lander::{GameError, Settings};

    const LEVEL_DIR: &str = "assets/levels";
    const SETTINGS_FILE: &str = "ute_lander.json";
    /// Upper bound on a demo run
    const DEMO_FRAMES: u64 = 20_000;

    pub fn run() -> Result<(), GameError> {
        let settings = Settings::load_from(SETTINGS_FILE)?;
        log::info!("Effective volume {:.2}", settings.effective_volume());

        // Load everything before simulating anything
        let mut sessions = Vec::new();
        for variant in [Variant::Lander, Variant::Jumper] {
            let path = Path::new(LEVEL_DIR).join(variant.level_file());
            let map = TileMap::load(&path, variant.has_collectibles())?;
            sessions.push(Session::new(variant, map));
        }

        for mut session in sessions {
            demo(&mut session);
            if let Some(best) = session.scoreboard.top_score() {
                log::info!("{} best score: {}", session.variant.title(), best);
            }
            match serde_json::to_string_pretty(&session.scoreboard) {
                Ok(json) => println!("{}", json),
                Err(e) => log::warn!("Could not serialize scoreboard: {}", e),
            }
        }
        Ok(())
    }

    /// Crude autopilot: fall straight down, burning whenever the descent
    /// gets faster than a safe landing allows
    fn autopilot(player: &Player) -> TickInput {
        TickInput {
            thrust: player.vel.y > 1.0,
            ..Default::default()
        }
    }

    fn demo(session: &mut Session) {
        // The jumper is already playing
        if session.variant.has_menus() {
            session.start_game();
        }
        let mut touchdowns = 0;
        let mut gems = 0;

        while session.frame < DEMO_FRAMES {
            // The jumper never ends its own session; a couple of tries is plenty
            if session.variant == Variant::Jumper && touchdowns >= 2 {
                break;
            }
            let input = match session.variant {
                Variant::Lander => autopilot(&session.player),
                Variant::Jumper => TickInput::default(),
            };
            for event in session.update(&input) {
                match event {
                    GameEvent::Landed { bonus } => {
                        touchdowns += 1;
                        log::info!("[frame {}] landed, bonus {}", session.frame, bonus);
                    }
                    GameEvent::Crashed => {
                        touchdowns += 1;
                        log::info!("[frame {}] crashed", session.frame);
                    }
                    GameEvent::Collected => gems += 1,
                    GameEvent::SessionEnded(entry) => {
                        log::info!(
                            "Session over: player {} scored {}",
                            entry.player_id,
                            entry.score
                        );
                        return;
                    }
                    GameEvent::Thrust | GameEvent::Respawned => {}
                }
            }
        }

        log::info!(
            "{} demo stopped after {} frames: {} touchdowns, {} gems, score {}",
            session.variant.title(),
            session.frame,
            touchdowns,
            gems,
            session.player.score
        );
    }
}
