//! Event log ring buffer.
//!
//! The controller records lifecycle events and handled clicks here; hosts
//! drain it into their own logger (`defmt` on the device, `log` in the
//! simulator). Nothing in this crate depends on a particular logging backend.
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("started");
//! while let Some(line) = log.pop() {
//!     info!("{}", line.as_str());
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Log Configuration
// =============================================================================

/// Maximum number of lines kept before the oldest is dropped.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

/// One log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Ring Buffer
// =============================================================================

/// Ring buffer of recent log lines.
pub struct EventLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
}

/// Appends characters until the line is full.
struct LineWriter<'a> {
    line: &'a mut LogLine,
}

impl Write for LineWriter<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.line.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl EventLog {
    /// Create a new empty log.
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Push a message, truncated to [`LOG_LINE_LENGTH`].
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        self.push_fmt(format_args!("{msg}"));
    }

    /// Push a formatted message, truncated to [`LOG_LINE_LENGTH`].
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line = LogLine::new();
        let _ = LineWriter { line: &mut line }.write_fmt(args);
        self.buffer.push_back(line).ok();
    }

    /// Take the oldest line.
    pub fn pop(&mut self) -> Option<LogLine> { self.buffer.pop_front() }

    /// Iterate over lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("first");
        log.push("second");
        assert_eq!(log.len(), 2);

        assert_eq!(log.pop().as_deref(), Some("first"));
        assert_eq!(log.pop().as_deref(), Some("second"));
        assert!(log.pop().is_none());
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..LOG_BUFFER_SIZE {
            log.push_fmt(format_args!("{i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("0"));

        log.push("new");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
        assert_eq!(log.iter().last(), Some("new"));
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let mut log = EventLog::new();
        log.push("This is a very long message that exceeds the maximum line length limit");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(stored.starts_with("This is a very long message"));
    }

    #[test]
    fn test_push_fmt() {
        let mut log = EventLog::new();
        log.push_fmt(format_args!("{}: {}F / {}C", "up", 33, 0));
        assert_eq!(log.iter().next(), Some("up: 33F / 0C"));
    }
}
