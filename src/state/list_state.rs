//! ListState - Employee List View State
//!
//! Snapshot of everything the list view renders: the cached full result
//! set, the visible page, the pager descriptor, the search state, and the
//! record bound to the create/edit form. Both collections are replaced
//! wholesale on fetch, never patched incrementally.

use crate::domain::employee::Employee;
use crate::domain::pager::{paginate, Pager};

/// State for the employee list view
#[derive(Debug, Clone)]
pub struct ListState {
    /// Raw search input as typed
    pub query: String,
    /// Active server-side name filter, only set once the trimmed query
    /// exceeds the minimum length
    pub active_match: Option<String>,
    /// Current page (1-based)
    pub page_index: usize,
    /// Records per page
    pub page_size: usize,
    /// Full result set from the last fetch
    pub full_list: Vec<Employee>,
    /// Windowed subset currently displayed
    pub visible_list: Vec<Employee>,
    /// Pager descriptor for the current window
    pub pager: Pager,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Record bound to the create/edit form
    pub draft: Option<Employee>,
    /// Last search value that made it through the debounce, for
    /// repeated-identical suppression
    pub(crate) last_debounced: Option<String>,
}

impl ListState {
    /// Create an empty state for the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            active_match: None,
            page_index: 1,
            page_size,
            full_list: Vec::new(),
            visible_list: Vec::new(),
            pager: Pager::default(),
            loading: false,
            draft: None,
            last_debounced: None,
        }
    }

    /// Replace the full result set and recompute the visible window
    pub fn apply_fetch(&mut self, employees: Vec<Employee>) {
        self.full_list = employees;
        self.recompute_visible();
        self.loading = false;
    }

    /// Move to `page` if it differs from the current one.
    ///
    /// Returns false (and mutates nothing) when `page` is already current.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == self.page_index {
            return false;
        }
        self.page_index = page;
        self.recompute_visible();
        true
    }

    /// Recompute the pager and slice the visible page out of the cached
    /// full list. The page index is pulled back in range when the list
    /// shrank under it (e.g. after a filter or delete).
    pub fn recompute_visible(&mut self) {
        self.pager = paginate(self.full_list.len(), self.page_index.max(1), self.page_size, 0);

        if self.pager.current_page > 0 {
            self.page_index = self.pager.current_page;
        }

        self.visible_list = if self.pager.start_index >= 0
            && self.pager.end_index >= self.pager.start_index
        {
            let start = self.pager.start_index as usize;
            let end = self.pager.end_index as usize;
            self.full_list[start..=end].to_vec()
        } else {
            Vec::new()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees(count: usize) -> Vec<Employee> {
        (1..=count)
            .map(|i| Employee {
                id: Some(i as i64),
                name: format!("Employee {i}"),
                ..Employee::default()
            })
            .collect()
    }

    #[test]
    fn test_apply_fetch_slices_first_page() {
        let mut state = ListState::new(2);
        state.apply_fetch(employees(5));

        assert_eq!(state.full_list.len(), 5);
        assert_eq!(state.visible_list.len(), 2);
        assert_eq!(state.visible_list[0].id, Some(1));
        assert_eq!(state.pager.total_pages, 3);
        assert!(!state.loading);
    }

    #[test]
    fn test_set_page_slices_that_page_only() {
        let mut state = ListState::new(2);
        state.apply_fetch(employees(5));

        assert!(state.set_page(2));
        let ids: Vec<_> = state.visible_list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(3), Some(4)]);

        assert!(state.set_page(3));
        let ids: Vec<_> = state.visible_list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(5)]);
    }

    #[test]
    fn test_set_page_same_page_is_noop() {
        let mut state = ListState::new(2);
        state.apply_fetch(employees(5));
        let before = state.visible_list.clone();

        assert!(!state.set_page(1));
        assert_eq!(state.visible_list, before);
    }

    #[test]
    fn test_page_index_clamps_when_list_shrinks() {
        let mut state = ListState::new(2);
        state.apply_fetch(employees(5));
        state.set_page(3);

        state.apply_fetch(employees(2));
        assert_eq!(state.page_index, 1);
        assert_eq!(state.visible_list.len(), 2);
    }

    #[test]
    fn test_empty_fetch_clears_visible() {
        let mut state = ListState::new(2);
        state.apply_fetch(employees(3));
        state.apply_fetch(Vec::new());

        assert!(state.visible_list.is_empty());
        assert_eq!(state.pager.total_pages, 0);
        assert_eq!(state.pager.end_index, -1);
    }
}
