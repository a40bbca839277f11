//! Per-page state owned by [`crate::state::AppState`]

pub mod account_edit;
pub mod accounts;
pub mod job_edit;
pub mod jobs;
pub mod logs;
pub mod template_edit;
pub mod templates;

pub use account_edit::{AccountEditState, AccountField};
pub use accounts::AccountListState;
pub use job_edit::{JobEditState, JobField};
pub use jobs::JobListState;
pub use logs::{LogStreamStatus, LogViewState};
pub use template_edit::{TemplateEditState, TemplateField};
pub use templates::TemplateListState;

/// Selection over a list of records with a server-assigned id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList<T> {
    pub items: Vec<T>,
    pub selected: usize,
    /// A fetch is in flight
    pub loading: bool,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            loading: false,
        }
    }
}

impl<T> RecordList<T> {
    /// Replace the whole collection with a fetch result
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.clamp_selection();
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }

    /// Remove every item matching `pred`, returning how many went
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        self.clamp_selection();
        before - self.items.len()
    }

    pub fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| pred(item))
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| pred(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_clamped_after_removal() {
        let mut list = RecordList::default();
        list.replace(vec![1, 2, 3]);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(&3));

        assert_eq!(list.remove_where(|n| *n == 3), 1);
        assert_eq!(list.selected(), Some(&2));

        list.remove_where(|_| true);
        assert_eq!(list.selected, 0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_selection_bounds() {
        let mut list = RecordList::default();
        list.select_next();
        assert_eq!(list.selected, 0);
        list.replace(vec!['a', 'b']);
        list.select_previous();
        assert_eq!(list.selected, 0);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected, 1);
    }
}
