use color_eyre::Result;
use ratatui::{crossterm::event::Event as CrosstermEvent, DefaultTerminal};

use super::{App, AppMode};
use crate::util::io::event::Event;

impl App {
    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    // Only the splash and the typing indicators animate
                    needs_redraw = self.tick() || self.voice.is_processing() || self.telegram.is_processing();
                }
                Event::Crossterm(event) => {
                    if let CrosstermEvent::Key(key_event) = event {
                        self.handle_key_events(key_event)?;
                    }
                    needs_redraw = true;
                }
                Event::App(app_event) => {
                    self.handle_app_event(app_event).await?;
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Handles the tick event of the terminal. Returns true while the splash is up.
    pub fn tick(&mut self) -> bool {
        if self.mode != AppMode::Splash {
            return false;
        }
        if self.start_time.elapsed() >= self.config.splash_duration() {
            self.dismiss_splash();
        }
        true
    }
}
