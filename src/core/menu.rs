use ratatui::{
    widgets::{Block, Borders, List, ListItem, Paragraph},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    Frame,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use anyhow::Result;

use crate::games::rand_num::Variant;

pub const VARIANTS: [Variant; 2] = [Variant::Text, Variant::MultipleChoice];

pub struct VariantMenu {
    pub selected_index: usize,
}

impl VariantMenu {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Returns `None` when the player backs out.
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<Option<Variant>> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(choice) = self.handle_key(key) {
                    return Ok(choice);
                }
            }
        }
    }

    /// `Some(..)` ends the menu.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Option<Variant>> {
        match key.code {
            KeyCode::Enter => return Some(Some(VARIANTS[self.selected_index])),
            KeyCode::Up => self.selected_index = self.selected_index.saturating_sub(1),
            KeyCode::Down => {
                self.selected_index = (self.selected_index + 1).min(VARIANTS.len() - 1)
            }
            KeyCode::Char('q') | KeyCode::Esc => return Some(None),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" NUMBER GUESSING ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(ratatui::layout::Alignment::Center),
            chunks[0]
        );

        let items: Vec<ListItem> = VARIANTS.iter().enumerate().map(|(i, v)| {
            let style = if i == self.selected_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let blurb = match v {
                Variant::Text => "type your guesses",
                Variant::MultipleChoice => "type, or pick one of the cards",
            };
            ListItem::new(format!(" » {} : {}", v.label(), blurb)).style(style)
        }).collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" MODE ").borders(Borders::ALL)),
            chunks[1]
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Play  [Q] Quit")
                .alignment(ratatui::layout::Alignment::Center),
            chunks[2]
        );
    }
}

impl Default for VariantMenu {
    fn default() -> Self {
        Self::new()
    }
}
