use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::evaluator::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub attempt_number: u32,
    pub guessed_value: i64,
    pub outcome: Outcome,
    pub logged_at: DateTime<Local>,
}

/// Guess history for one game, newest first. Entries are never edited.
#[derive(Debug, Clone, Default)]
pub struct GuessLog {
    entries: VecDeque<LogEntry>,
}

impl GuessLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u32, value: i64, outcome: Outcome) -> LogEntry {
        LogEntry {
            attempt_number: n,
            guessed_value: value,
            outcome,
            logged_at: Local::now(),
        }
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = GuessLog::new();
        log.add_entry(entry(1, 25, Outcome::TooHigh));
        log.add_entry(entry(2, 10, Outcome::TooLow));
        log.add_entry(entry(3, 10, Outcome::TooLow));

        let numbers: Vec<u32> = log.entries().map(|e| e.attempt_number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(log.latest().map(|e| e.attempt_number), Some(3));
    }

    #[test]
    fn keeps_repeated_guesses() {
        let mut log = GuessLog::new();
        for n in 1..=100 {
            log.add_entry(entry(n, 5, Outcome::TooLow));
        }
        assert_eq!(log.len(), 100);
    }
}
