//! Live backend log page
//!
//! Lines are kept while their combined length stays within the configured
//! character budget; the oldest lines go first.

use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogStreamStatus {
    #[default]
    Idle,
    Connecting,
    Streaming,
    Closed {
        reason: Option<String>,
    },
}

impl LogStreamStatus {
    pub fn label(&self) -> String {
        match self {
            LogStreamStatus::Idle => "Idle".to_string(),
            LogStreamStatus::Connecting => "Connecting...".to_string(),
            LogStreamStatus::Streaming => "Streaming".to_string(),
            LogStreamStatus::Closed { reason: None } => "Closed".to_string(),
            LogStreamStatus::Closed {
                reason: Some(reason),
            } => format!("Closed: {}", reason),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self,
            LogStreamStatus::Connecting | LogStreamStatus::Streaming
        )
    }
}

#[derive(Debug, Clone)]
pub struct LogViewState {
    lines: VecDeque<String>,
    total_chars: usize,
    max_chars: usize,
    pub status: LogStreamStatus,
    /// Identifies the current connection; events of older ones are ignored
    pub generation: u64,
    /// Lines scrolled up from the bottom; 0 follows new output
    pub scroll_offset: usize,
}

impl LogViewState {
    pub fn new(max_chars: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            total_chars: 0,
            max_chars,
            status: LogStreamStatus::Idle,
            generation: 0,
            scroll_offset: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let len = line.chars().count();
        let line = if len > self.max_chars {
            line.chars().skip(len - self.max_chars).collect()
        } else {
            line.to_string()
        };
        self.total_chars += line.chars().count();
        self.lines.push_back(line);

        while self.total_chars > self.max_chars {
            match self.lines.pop_front() {
                Some(dropped) => self.total_chars -= dropped.chars().count(),
                None => break,
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.total_chars = 0;
        self.scroll_offset = 0;
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.lines.iter().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn scroll_up(&mut self, by: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + by).min(max);
    }

    pub fn scroll_down(&mut self, by: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(by);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Start a new connection attempt, returning its generation
    pub fn begin_connect(&mut self) -> u64 {
        self.generation += 1;
        self.status = LogStreamStatus::Connecting;
        self.generation
    }
}
