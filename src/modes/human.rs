use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::config::AppConfig;
use crate::game::GameController;
use crate::input::{InputHandler, KeyAction};
use crate::persistence::BestScoreStore;
use crate::render::Renderer;

pub struct HumanMode {
    controller: GameController,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    /// Load the best score and start the first game
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = BestScoreStore::new(&config.best_score_path);
        let best = store.load()?;
        info!("loaded best score {} from {:?}", best, store.path());

        Ok(Self::with_controller(GameController::new(
            best,
            store.notifier(),
        )))
    }

    pub fn with_controller(controller: GameController) -> Self {
        Self {
            controller,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
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

    /// Draw, then block until the next key; one input is fully applied
    /// before the next is read
    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        while !self.is_finished() {
            terminal
                .draw(|frame| {
                    self.renderer.render(frame, &self.controller);
                })
                .context("Failed to draw frame")?;

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }
        }

        info!(
            "leaving with score {} (best {})",
            self.controller.score(),
            self.controller.best_score()
        );
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.should_quit || self.controller.state().is_terminal()
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(action) => {
                    self.controller.handle_input(action);
                }
                KeyAction::ForceQuit => {
                    self.should_quit = true;
                }
            }
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
