use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Command, GameConfig, GameEngine, GameRng, GameState};
use crate::input::{CommandSource, InputHandler, KeyAction, VoiceSource};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::score::ScoreLedger;

/// Interactive play: wires the engine to a terminal, a score ledger and an
/// optional voice command source.
///
/// The tick timer is re-armed from the engine's current interval whenever it
/// changes, so the speed curve takes effect immediately.
pub struct PlaySession {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    voice: Option<VoiceSource>,
    pending_command: Option<Command>,
    should_quit: bool,
}

impl PlaySession {
    pub fn new(
        config: GameConfig,
        ledger: Box<dyn ScoreLedger>,
        voice: Option<VoiceSource>,
    ) -> Self {
        let rng = Box::new(GameRng::from_entropy());
        let mut engine = GameEngine::new(config, rng, ledger);
        let state = engine.reset();
        let renderer = Renderer::new(voice.is_some());

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            voice,
            pending_command: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut current_interval = self.state.current_interval();
        let mut tick_timer = interval(current_interval);

        // Render at 30 FPS independent of the game speed
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Re-arm the tick timer after every score-changing event.
            if self.state.current_interval() != current_interval {
                current_interval = self.state.current_interval();
                tick_timer = interval(current_interval);
                tick_timer.reset();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Command(command) => {
                    self.pending_command = Some(command);
                }
                KeyAction::PauseToggle => {
                    self.engine.toggle_pause(&mut self.state);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn tick(&mut self) {
        // Keyboard input wins the slot for this tick; otherwise ask the
        // voice source. The engine validates either way.
        let command = self
            .pending_command
            .take()
            .or_else(|| self.voice.as_mut().and_then(|v| v.poll()));

        let result = self.engine.tick(&mut self.state, command);

        if result.cause.is_some() {
            self.metrics.on_game_over(self.state.score);
        }
        if result.restarted {
            self.metrics.on_game_start();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
