/// Core interface between the engine loop and a playable game
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// What the engine should do after a key has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Main game trait that all front-ends drive.
/// Games react to one key at a time and draw their whole screen on demand.
pub trait Game {
    /// Handle a single key press
    fn handle_input(&mut self, key: KeyEvent) -> Control;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut Frame);
}
