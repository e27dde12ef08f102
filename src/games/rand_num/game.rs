use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::ThreadRng;
use rand_core::RngCore;
use ratatui::Frame;

use super::renderer;
use super::session::Session;
use crate::core::game::{Control, Game};

const MAX_INPUT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    Cards,
}

/// Terminal front-end: turns key presses into session calls.
pub struct NumberGame<R: RngCore = ThreadRng> {
    pub(crate) session: Session<R>,
    pub(crate) input: String,
    pub(crate) focus: Focus,
    pub(crate) card_cursor: usize,
    /// Blocking validation notice. While set, the only thing a key does is dismiss it.
    pub(crate) notice: Option<String>,
}

impl<R: RngCore> NumberGame<R> {
    pub fn new(session: Session<R>) -> Self {
        Self {
            session,
            input: String::new(),
            focus: Focus::Field,
            card_cursor: 0,
            notice: None,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn reset(&mut self) {
        self.session.reset_game();
        self.input.clear();
        self.focus = Focus::Field;
        self.card_cursor = 0;
        self.notice = None;
    }

    fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        if let Err(err) = self.session.submit_text_guess(&raw) {
            let range = self.session.range();
            self.notice = Some(format!(
                "{err}.\nPlease enter a number between {} and {}.",
                range.min, range.max
            ));
        }
    }

    fn pick_card(&mut self) {
        let cards = self.session.cards();
        if let Some(&(value, _)) = cards.get(self.card_cursor) {
            self.session.select_option(value);
            // fresh cards after a miss, start from the left again
            self.card_cursor = 0;
        }
    }

    fn has_cards(&self) -> bool {
        !self.session.cards().is_empty()
    }
}

impl<R: RngCore> Game for NumberGame<R> {
    fn handle_input(&mut self, key: KeyEvent) -> Control {
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return Control::Continue;
        }

        if key.code == KeyCode::Esc {
            return Control::Quit;
        }
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.reset();
            return Control::Continue;
        }

        if self.session.is_over() {
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                self.reset();
            }
            return Control::Continue;
        }

        match (self.focus, key.code) {
            (_, KeyCode::Tab) if self.has_cards() => {
                self.focus = match self.focus {
                    Focus::Field => Focus::Cards,
                    Focus::Cards => Focus::Field,
                };
            }
            (Focus::Cards, KeyCode::Left) => {
                self.card_cursor = self.card_cursor.saturating_sub(1);
            }
            (Focus::Cards, KeyCode::Right) => {
                let last = self.session.cards().len().saturating_sub(1);
                self.card_cursor = (self.card_cursor + 1).min(last);
            }
            (Focus::Cards, KeyCode::Enter | KeyCode::Char(' ')) => self.pick_card(),
            (Focus::Cards, KeyCode::Char(c)) if c.is_ascii_digit() => {
                self.focus = Focus::Field;
                self.input.push(c);
            }
            (Focus::Field, KeyCode::Char(c)) if !c.is_control() => {
                if self.input.chars().count() < MAX_INPUT {
                    self.input.push(c);
                }
            }
            (Focus::Field, KeyCode::Backspace) => {
                self.input.pop();
            }
            (Focus::Field, KeyCode::Enter) => self.submit(),
            _ => {}
        }
        Control::Continue
    }

    fn render(&self, frame: &mut Frame) {
        renderer::render(frame, self);
    }
}
