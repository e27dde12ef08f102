/// Number guessing renderer - draws the session, owns no game logic
use rand_core::RngCore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::evaluator::Outcome;
use super::game::{Focus, NumberGame};
use super::session::{CardState, TIME_FORMAT};

pub fn render<R: RngCore>(frame: &mut Frame, game: &NumberGame<R>) {
    let session = &game.session;
    let has_cards = !session.cards().is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(if has_cards { 3 } else { 0 }),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let range = session.range();
    frame.render_widget(
        Paragraph::new(format!(
            "Attempts: {}   Started: {}   Finished: {}",
            session.attempts(),
            session.started_display(),
            session.finished_display()
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " GUESS THE NUMBER ({}-{}) · {} ",
            range.min,
            range.max,
            session.variant().label()
        ))),
        chunks[0],
    );

    let status_style = if session.is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(session.status(), status_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    if has_cards {
        render_cards(frame, game, chunks[2]);
    }

    let field_active = !session.is_over() && game.focus == Focus::Field;
    frame.render_widget(
        Paragraph::new(format!("> {}", game.input)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your guess ")
                .border_style(active_border(field_active)),
        ),
        chunks[3],
    );
    if field_active && game.notice.is_none() {
        let x = chunks[3].x + 3 + game.input.chars().count() as u16;
        frame.set_cursor_position((x, chunks[3].y + 1));
    }

    render_log(frame, game, chunks[4]);

    let hints = if session.is_over() {
        "[R/Enter] Play again  [Esc] Quit"
    } else if has_cards {
        "[Enter] Guess  [Tab] Cards/Field  [←/→] Choose card  [Ctrl+R] New game  [Esc] Quit"
    } else {
        "[Enter] Guess  [Ctrl+R] New game  [Esc] Quit"
    };
    frame.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[5],
    );

    if let Some(notice) = &game.notice {
        let area = centered(frame.area(), 50, 7);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(format!("{notice}\n\n[Enter] OK"))
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Invalid guess ")
                        .border_style(Style::default().fg(Color::Red)),
                ),
            area,
        );
    }
}

fn render_cards<R: RngCore>(frame: &mut Frame, game: &NumberGame<R>, area: Rect) {
    let cards = game.session.cards();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (i, (value, state)) in cards.iter().enumerate() {
        let under_cursor =
            game.focus == Focus::Cards && i == game.card_cursor && *state == CardState::Open;
        let style = match state {
            CardState::Winner => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            CardState::Disabled => Style::default().fg(Color::DarkGray),
            CardState::Open if under_cursor => {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            }
            CardState::Open => Style::default(),
        };
        frame.render_widget(
            Paragraph::new(value.to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(active_border(under_cursor)),
                ),
            slots[i],
        );
    }
}

fn render_log<R: RngCore>(frame: &mut Frame, game: &NumberGame<R>, area: Rect) {
    let rows: Vec<Row> = game
        .session
        .log()
        .entries()
        .map(|entry| {
            let color = match entry.outcome {
                Outcome::TooLow => Color::Blue,
                Outcome::TooHigh => Color::Red,
                Outcome::Correct => Color::Green,
            };
            let result = Span::styled(entry.outcome.message(), Style::default().fg(color));
            Row::new(vec![
                Cell::from(entry.attempt_number.to_string()),
                Cell::from(entry.guessed_value.to_string()),
                Cell::from(Line::from(result)),
                Cell::from(entry.logged_at.format(TIME_FORMAT).to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["#", "Guess", "Result", "Time"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(" History "));

    frame.render_widget(table, area);
}

fn active_border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::game::Game;
    use crate::games::rand_num::{Session, Variant};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen<R: RngCore>(game: &NumberGame<R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| game.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn game(variant: Variant) -> NumberGame<StdRng> {
        let session =
            Session::with_rng(&GameConfig::default(), variant, StdRng::seed_from_u64(2)).unwrap();
        NumberGame::new(session)
    }

    #[test]
    fn shows_waiting_placeholder_and_history() {
        let mut g = game(Variant::Text);
        let guess = if g.session().target() == 1 { 2 } else { 1 };
        for c in guess.to_string().chars() {
            g.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        g.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let text = screen(&g);
        assert!(text.contains("Attempts: 1"));
        assert!(text.contains("waiting"));
        assert!(text.contains("History"));
        assert!(text.contains("Too low!"));
    }

    #[test]
    fn draws_every_card() {
        let g = game(Variant::MultipleChoice);
        let text = screen(&g);
        for value in g.session().options().unwrap().values() {
            assert!(text.contains(&value.to_string()));
        }
    }

    #[test]
    fn shows_notice_popup() {
        let mut g = game(Variant::Text);
        g.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        g.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(screen(&g).contains("Invalid guess"));
    }
}
