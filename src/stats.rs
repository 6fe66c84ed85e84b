//! Aggregate counts over message sets.

use crate::message::{Message, Severity};

/// Message counts by severity for one file or a whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub fatal: usize,
    pub warn: usize,
    pub info: usize,
}

impl Statistics {
    /// Tally severities over a set of messages.
    pub fn tally<'a>(messages: impl IntoIterator<Item = &'a Message>) -> Self {
        messages
            .into_iter()
            .fold(Self::default(), |acc, message| acc.count(message.severity))
    }

    fn count(mut self, severity: Severity) -> Self {
        match severity {
            Severity::Error => self.fatal += 1,
            Severity::Warning => self.warn += 1,
            Severity::Info => self.info += 1,
        }
        self
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            fatal: self.fatal + other.fatal,
            warn: self.warn + other.warn,
            info: self.info + other.info,
        }
    }

    pub fn total(&self) -> usize {
        self.fatal + self.warn + self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_by_severity() {
        let messages = vec![
            Message::error("e1"),
            Message::error("e2"),
            Message::warning("w"),
            Message::info("i"),
        ];
        let stats = Statistics::tally(&messages);
        assert_eq!(
            stats,
            Statistics {
                fatal: 2,
                warn: 1,
                info: 1
            }
        );
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_tally_empty() {
        let stats = Statistics::tally(&[]);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_merge() {
        let a = Statistics {
            fatal: 1,
            warn: 2,
            info: 0,
        };
        let b = Statistics {
            fatal: 0,
            warn: 1,
            info: 3,
        };
        assert_eq!(
            a.merge(b),
            Statistics {
                fatal: 1,
                warn: 3,
                info: 3
            }
        );
    }
}
