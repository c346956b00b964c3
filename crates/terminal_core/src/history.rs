use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Unchanged,
    Load(String),
    /// Left browsing mode; the input should be emptied.
    Reset,
}

/// Submitted lines, most recent first. The cursor walks the log without
/// mutating it; `None` means "not browsing".
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.cursor = None;
    }

    pub fn navigate(&mut self, direction: Direction) -> Navigation {
        match (direction, self.cursor) {
            (Direction::Up, cursor) => {
                let next = cursor.map_or(0, |index| index + 1);
                match self.entries.get(next) {
                    Some(line) => {
                        self.cursor = Some(next);
                        Navigation::Load(line.clone())
                    }
                    None => Navigation::Unchanged,
                }
            }
            (Direction::Down, Some(0)) => {
                self.cursor = None;
                Navigation::Reset
            }
            (Direction::Down, Some(index)) => {
                self.cursor = Some(index - 1);
                Navigation::Load(self.entries[index - 1].clone())
            }
            (Direction::Down, None) => Navigation::Unchanged,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(lines: &[&str]) -> HistoryLog {
        let mut log = HistoryLog::new();
        for line in lines {
            log.record(*line);
        }
        log
    }

    #[test]
    fn newest_entry_comes_first() {
        let log = log_of(&["help", "about", "echo a b"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0), Some("echo a b"));
        assert_eq!(log.get(2), Some("help"));
    }

    #[test]
    fn up_walks_toward_older_entries_and_stops_at_the_end() {
        let mut log = log_of(&["help", "about"]);
        assert_eq!(log.navigate(Direction::Up), Navigation::Load("about".into()));
        assert_eq!(log.navigate(Direction::Up), Navigation::Load("help".into()));
        assert_eq!(log.navigate(Direction::Up), Navigation::Unchanged);
        assert_eq!(log.cursor(), Some(1));
    }

    #[test]
    fn down_returns_to_not_browsing_from_newest() {
        let mut log = log_of(&["help", "about"]);
        log.navigate(Direction::Up);
        log.navigate(Direction::Up);
        assert_eq!(log.navigate(Direction::Down), Navigation::Load("about".into()));
        assert_eq!(log.navigate(Direction::Down), Navigation::Reset);
        assert_eq!(log.cursor(), None);
        assert_eq!(log.navigate(Direction::Down), Navigation::Unchanged);
    }

    #[test]
    fn empty_log_ignores_navigation() {
        let mut log = HistoryLog::new();
        assert_eq!(log.navigate(Direction::Up), Navigation::Unchanged);
        assert_eq!(log.navigate(Direction::Down), Navigation::Unchanged);
    }

    #[test]
    fn recording_resets_cursor_without_dropping_entries() {
        let mut log = log_of(&["help", "about"]);
        log.navigate(Direction::Up);
        log.record("pwd");
        assert_eq!(log.cursor(), None);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["pwd", "about", "help"]);
    }
}
