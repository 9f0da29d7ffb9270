//! Multi-select list of source files shown before a review.

use std::ops::Range;

/// Pseudo-entry at the top of the list that toggles every file.
pub const ALL_FILES_OPTION: &str = "📚 All Files";

const DEFAULT_VISIBLE: usize = 15;
const MIN_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    Up,
    Down,
    Toggle,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorStatus {
    Pending,
    Confirmed(Vec<String>),
    Cancelled,
}

/// Cursor and checkbox state for the file picker.
#[derive(Debug, Clone)]
pub struct FileSelector {
    files: Vec<String>,
    checked: Vec<bool>,
    cursor: usize,
    height: u16,
    status: SelectorStatus,
}

impl FileSelector {
    #[must_use]
    pub fn new(files: Vec<String>) -> Self {
        let checked = vec![false; files.len()];
        Self {
            files,
            checked,
            cursor: 0,
            height: 0,
            status: SelectorStatus::Pending,
        }
    }

    /// Number of rows including the "All Files" entry.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.files.len() + 1
    }

    /// Label for row `index`.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(ALL_FILES_OPTION),
            _ => self.files.get(index - 1).map(String::as_str),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn status(&self) -> &SelectorStatus {
        &self.status
    }

    /// Whether row `index` shows a ticked checkbox.
    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        match index {
            0 => self.all_checked(),
            _ => self.checked.get(index - 1).copied().unwrap_or(false),
        }
    }

    #[must_use]
    pub fn all_checked(&self) -> bool {
        !self.checked.is_empty() && self.checked.iter().all(|c| *c)
    }

    /// Checked files in their original order.
    #[must_use]
    pub fn selected_files(&self) -> Vec<String> {
        self.files
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(file, _)| file.clone())
            .collect()
    }

    pub fn resize(&mut self, height: u16) {
        self.height = height;
    }

    /// How many rows fit on screen at the current terminal height.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        let visible = if self.height > 20 {
            usize::from(self.height) - 15
        } else {
            DEFAULT_VISIBLE
        };
        visible.max(MIN_VISIBLE)
    }

    /// Rows currently scrolled into view; always contains the cursor.
    #[must_use]
    pub fn visible_rows(&self) -> Range<usize> {
        let max = self.max_visible();
        let offset = (self.cursor + 1).saturating_sub(max);
        offset..self.entry_count().min(offset + max)
    }

    /// Apply one action. Once confirmed or cancelled, further actions are ignored.
    pub fn apply(&mut self, action: SelectorAction) -> &SelectorStatus {
        if self.status != SelectorStatus::Pending {
            return &self.status;
        }
        match action {
            SelectorAction::Up => self.cursor = self.cursor.saturating_sub(1),
            SelectorAction::Down => {
                if self.cursor + 1 < self.entry_count() {
                    self.cursor += 1;
                }
            }
            SelectorAction::Toggle => self.toggle(),
            SelectorAction::Confirm => {
                self.status = SelectorStatus::Confirmed(self.selected_files());
            }
            SelectorAction::Cancel => self.status = SelectorStatus::Cancelled,
        }
        &self.status
    }

    /// The confirmed selection; empty when cancelled or still pending.
    #[must_use]
    pub fn into_selection(self) -> Vec<String> {
        match self.status {
            SelectorStatus::Confirmed(files) => files,
            SelectorStatus::Pending | SelectorStatus::Cancelled => Vec::new(),
        }
    }

    fn toggle(&mut self) {
        if self.cursor == 0 {
            let value = !self.all_checked();
            self.checked.iter_mut().for_each(|c| *c = value);
        } else if let Some(checked) = self.checked.get_mut(self.cursor - 1) {
            *checked = !*checked;
        }
    }
}
