use crate::core::game::{Control, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw, wait for a key, repeat. Nothing happens between key presses so
    /// the loop just blocks on the next event.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.game.handle_input(key) == Control::Quit {
                    break;
                }
            }
        }

        Ok(self.game)
    }
}
