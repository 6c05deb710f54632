// PDK Manager - core/model.rs
//
// Core data types shared across layers: the two editable platform files and
// the in-window console buffer.

use crate::util::constants;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

// =============================================================================
// Editable files
// =============================================================================

/// One of the two platform files the edit pane can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableFile {
    /// `config.mk`, reset from `defaultConfig.txt`.
    ConfigMk,
    /// `constraints.sdk`, reset from `defaultConstraints.txt`.
    ConstraintsSdk,
}

impl EditableFile {
    /// Both files, in the order their buttons are laid out.
    pub const ALL: [EditableFile; 2] = [EditableFile::ConfigMk, EditableFile::ConstraintsSdk];

    /// File name inside the platform directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::ConfigMk => constants::CONFIG_MK,
            Self::ConstraintsSdk => constants::CONSTRAINTS_SDK,
        }
    }

    /// Template in the workspace root this file is reset from.
    pub fn template_name(self) -> &'static str {
        match self {
            Self::ConfigMk => constants::DEFAULT_CONFIG_TEMPLATE,
            Self::ConstraintsSdk => constants::DEFAULT_CONSTRAINTS_TEMPLATE,
        }
    }
}

impl fmt::Display for EditableFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// =============================================================================
// Console
// =============================================================================

/// Severity of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warning,
    Error,
}

impl ConsoleLevel {
    /// Short label shown in front of non-info lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// A single line in the console panel.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub timestamp: DateTime<Local>,
    pub level: ConsoleLevel,
    pub message: String,
}

/// Append-only console buffer capped at `MAX_CONSOLE_LINES`.
#[derive(Debug)]
pub struct ConsoleLog {
    lines: VecDeque<ConsoleLine>,
    capacity: usize,
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::with_capacity(constants::MAX_CONSOLE_LINES)
    }
}

impl ConsoleLog {
    /// Create an empty console that keeps at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, evicting the oldest once the cap is reached.
    pub fn push(&mut self, level: ConsoleLevel, message: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(ConsoleLine {
            timestamp: Local::now(),
            level,
            message: message.into(),
        });
    }

    pub fn lines(&self) -> impl Iterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&ConsoleLine> {
        self.lines.back()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whole console as plain text, one `HH:MM:SS message` line per entry.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.timestamp.format("%H:%M:%S").to_string());
            out.push(' ');
            if line.level != ConsoleLevel::Info {
                out.push_str(line.level.label());
                out.push_str(": ");
            }
            out.push_str(&line.message);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_file_names_and_templates() {
        assert_eq!(EditableFile::ConfigMk.file_name(), "config.mk");
        assert_eq!(EditableFile::ConfigMk.template_name(), "defaultConfig.txt");
        assert_eq!(EditableFile::ConstraintsSdk.file_name(), "constraints.sdk");
        assert_eq!(
            EditableFile::ConstraintsSdk.template_name(),
            "defaultConstraints.txt"
        );
        assert_eq!(EditableFile::ConstraintsSdk.to_string(), "constraints.sdk");
    }

    #[test]
    fn test_console_drops_oldest_at_capacity() {
        let mut console = ConsoleLog::with_capacity(3);
        for i in 0..5 {
            console.push(ConsoleLevel::Info, format!("line {i}"));
        }
        let messages: Vec<_> = console.lines().map(|l| l.message.as_str()).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(console.last().map(|l| l.message.as_str()), Some("line 4"));
    }

    #[test]
    fn test_console_text_marks_non_info_lines() {
        let mut console = ConsoleLog::default();
        console.push(ConsoleLevel::Info, "Makefile updated");
        console.push(ConsoleLevel::Error, "boom");
        let text = console.to_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" Makefile updated"));
        assert!(!lines[0].contains("INFO"));
        assert!(lines[1].ends_with(" ERROR: boom"));
    }

    #[test]
    fn test_console_zero_capacity_still_keeps_latest() {
        let mut console = ConsoleLog::with_capacity(0);
        console.push(ConsoleLevel::Warning, "a");
        console.push(ConsoleLevel::Warning, "b");
        assert_eq!(console.len(), 1);
        assert_eq!(console.last().map(|l| l.message.as_str()), Some("b"));
    }
}
