//! RecallFlip terminal runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `recallflip::term`. The game itself is driven by a monotonic
//! millisecond clock and never sleeps; this loop only waits for input.

use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use recallflip::config::AppConfig;
use recallflip::core::{Game, GameSnapshot};
use recallflip::input::{
    handle_key_event, handle_mouse_event, GridCursor, InputAction, PointerEvent,
};
use recallflip::logging;
use recallflip::term::{
    BoardLayout, Control, FrameBuffer, GameView, Hit, RenderThrottle, TerminalPresenter,
    TerminalRenderer, ViewState, Viewport,
};
use recallflip::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::parse();
    logging::init(&config)?;
    info!(
        seed = ?config.seed,
        resolve_delay_ms = config.resolve_delay_ms,
        sound = config.sound(),
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "terminal loop failed");
    }
    result
}

enum Flow {
    Continue,
    Quit,
}

struct App {
    game: Game,
    cursor: GridCursor,
    view: ViewState,
    presenter: TerminalPresenter,
}

impl App {
    fn new(config: &AppConfig) -> Self {
        let game = Game::new(config.game_config());
        let cursor = GridCursor::new(game.config().columns, game.deck().len() as u8);
        Self {
            game,
            cursor,
            view: ViewState::default(),
            presenter: TerminalPresenter::new(config.sound()),
        }
    }

    fn layout(&self, viewport: Viewport) -> BoardLayout {
        BoardLayout::compute(
            viewport.width,
            viewport.height,
            self.game.config().columns,
            self.game.deck().len() as u8,
        )
    }

    fn on_key(&mut self, action: InputAction, now_ms: u64) -> Flow {
        match action {
            InputAction::Quit => return Flow::Quit,
            InputAction::Restart => {
                self.game.apply_action(GameAction::Restart, now_ms);
            }
            InputAction::Move(dir) => {
                self.cursor.step(dir);
            }
            InputAction::Select => {
                if let Some(id) = self.cursor.card_id() {
                    self.game.apply_action(GameAction::Select(id), now_ms);
                }
            }
        }
        Flow::Continue
    }

    fn on_pointer(&mut self, pointer: PointerEvent, viewport: Viewport, now_ms: u64) -> Flow {
        let layout = self.layout(viewport);
        let controls_visible = self.game.phase().is_complete();

        match pointer {
            PointerEvent::Down { x, y } => match layout.hit_test(x, y, controls_visible) {
                Some(Hit::Card(id)) => {
                    self.cursor.focus(id);
                    self.game.apply_action(GameAction::Select(id), now_ms);
                }
                Some(Hit::Control(Control::Restart)) => {
                    self.game.apply_action(GameAction::Restart, now_ms);
                }
                Some(Hit::Control(Control::Quit)) => return Flow::Quit,
                None => {}
            },
            PointerEvent::Moved { x, y } => {
                self.view.hover = match layout.hit_test(x, y, controls_visible) {
                    Some(Hit::Control(control)) => Some(control),
                    _ => None,
                };
            }
        }
        Flow::Continue
    }
}

fn frame_fingerprint(snap: &GameSnapshot, view: &ViewState) -> u64 {
    let mut h = std::collections::hash_map::DefaultHasher::new();
    snap.fingerprint().hash(&mut h);
    view.hash(&mut h);
    h.finish()
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);

    let view = GameView::new();
    let mut throttle = RenderThrottle::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let now_ms = clock.elapsed().as_millis() as u64;
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let flow = match event::read()? {
                // Key repeat and release are ignored.
                Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                    Some(action) => app.on_key(action, now_ms),
                    None => Flow::Continue,
                },
                Event::Mouse(mouse) => match handle_mouse_event(mouse) {
                    Some(pointer) => app.on_pointer(pointer, viewport, now_ms),
                    None => Flow::Continue,
                },
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                    Flow::Continue
                }
                _ => Flow::Continue,
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = clock.elapsed().as_millis() as u64;
            app.game.tick(now_ms);
        }

        app.game.dispatch_events(&mut app.presenter);
        if app.presenter.take_bells() {
            term.bell();
        }

        // Render.
        let now_ms = clock.elapsed().as_millis() as u64;
        app.view.focus = app.cursor.card_id();
        app.game.snapshot_into(now_ms, &mut snap);
        let is_static = snap.is_static() && !app.presenter.is_dirty();
        if throttle.should_render(now_ms, frame_fingerprint(&snap, &app.view), is_static) {
            view.render_into(&snap, app.view, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            app.presenter.clear_dirty();
        }
    }

    app.game.shutdown();
    info!(
        games = app.game.session().total_games(),
        best_ms = ?app.game.session().best_time_ms(),
        "quit"
    );
    Ok(())
}
