//! Employee List Controller
//!
//! Orchestrates the employee list view: fetching the collection from the
//! directory, debounced search, client-side pagination over the cached
//! result set, and the create/update/delete/toggle operations. The
//! presentation layer calls the operations and drains the event channel;
//! it never touches `ListState` directly.
//!
//! Every fetch carries a sequence number so that a slow response which has
//! been superseded by a newer one is discarded instead of overwriting the
//! cache. The loading flag follows the newest in-flight fetch: set when it
//! is issued, cleared when it completes or fails.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, error, warn};

use crate::domain::config::AppConfig;
use crate::domain::employee::Employee;
use crate::eventing::app_event::AppEvent;
use crate::helpers::search::{derive_match, MatchIntent};
use crate::services::employees::EmployeeDirectory;
use crate::state::list_state::ListState;

/// What happened to a search input after the debounce window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A newer input arrived within the debounce window
    Superseded,
    /// Identical to the previous debounced value
    Unchanged,
    /// Trimmed input at or under the minimum length; list left alone
    TooShort,
    /// Filter state updated and a refresh was issued
    Refreshed,
}

/// How a draft was persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Created,
    Updated,
}

/// Controller for the employee list page
pub struct EmployeeListController<D> {
    directory: D,
    state: Mutex<ListState>,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    /// Generation tag for fetches; stale responses are discarded
    fetch_seq: AtomicU64,
    /// Generation tag for pending search inputs; only the newest survives
    search_seq: AtomicU64,
    debounce: Duration,
}

impl<D: EmployeeDirectory> EmployeeListController<D> {
    /// Create a controller over the given directory
    pub fn new(directory: D, config: &AppConfig) -> Self {
        let (tx, rx) = unbounded();
        Self {
            directory,
            state: Mutex::new(ListState::new(config.page_size)),
            tx,
            rx,
            fetch_seq: AtomicU64::new(0),
            search_seq: AtomicU64::new(0),
            debounce: Duration::from_millis(config.search_debounce_ms),
        }
    }

    /// Get the event receiver for the presentation layer
    pub fn events(&self) -> Receiver<AppEvent> {
        self.rx.clone()
    }

    /// Clone of the current list state
    pub fn snapshot(&self) -> ListState {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().expect("list state lock poisoned")
    }

    fn emit(&self, event: AppEvent) {
        if self.tx.send(event).is_err() {
            warn!("event channel disconnected");
        }
    }

    fn emit_list_updated(&self, state: &ListState) {
        self.emit(AppEvent::ListUpdated {
            employees: state.visible_list.clone(),
            pager: state.pager.clone(),
        });
    }

    fn set_loading(&self, loading: bool) {
        self.state().loading = loading;
        self.emit(AppEvent::LoadingChanged { loading });
    }

    /// Reload the collection from the directory using the active filter.
    ///
    /// If a newer fetch is issued while this one is in flight, its response
    /// is discarded; the newer fetch owns the loading flag.
    pub async fn refresh(&self) -> crate::error::Result<()> {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let active_match = self.state().active_match.clone();

        self.set_loading(true);

        let result = self.directory.fetch_all(active_match.as_deref()).await;

        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding superseded fetch response");
            return Ok(());
        }

        match result {
            Ok(employees) => {
                debug!(count = employees.len(), "employee collection fetched");
                let snapshot = {
                    let mut state = self.state();
                    state.apply_fetch(employees);
                    state.clone()
                };
                self.emit_list_updated(&snapshot);
                self.emit(AppEvent::LoadingChanged { loading: false });
                Ok(())
            }
            Err(e) => {
                error!("failed to fetch employee collection: {e}");
                self.set_loading(false);
                self.emit(AppEvent::error("Failed to load employees."));
                Err(e)
            }
        }
    }

    /// Apply a search input.
    ///
    /// The input is held for the debounce window; if another input arrives
    /// meanwhile this one is superseded. Empty input clears the filter and
    /// reloads; input that trims to the minimum length or shorter is a
    /// no-op; anything longer becomes the active name filter.
    pub async fn search(&self, text: &str) -> SearchOutcome {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state().query = text.to_string();

        tokio::time::sleep(self.debounce).await;

        if self.search_seq.load(Ordering::SeqCst) != seq {
            return SearchOutcome::Superseded;
        }

        {
            let mut state = self.state();
            if state.last_debounced.as_deref() == Some(text) {
                return SearchOutcome::Unchanged;
            }
            state.last_debounced = Some(text.to_string());
        }

        match derive_match(text) {
            MatchIntent::Clear => {
                self.state().active_match = None;
            }
            MatchIntent::TooShort => return SearchOutcome::TooShort,
            MatchIntent::Filter(term) => {
                self.state().active_match = Some(term);
            }
        }

        let _ = self.refresh().await;
        SearchOutcome::Refreshed
    }

    /// Move the list to `page`.
    ///
    /// A no-op when `page` is already current: no state mutation and no
    /// events. Otherwise the visible window is re-sliced from the cached
    /// list; no request is issued and the loading flag is untouched.
    pub fn change_page(&self, page: usize) -> bool {
        let snapshot = {
            let mut state = self.state();
            if !state.set_page(page) {
                return false;
            }
            state.clone()
        };
        self.emit_list_updated(&snapshot);
        true
    }

    /// Persist the draft: update when its id matches a record in the full
    /// cached collection, create otherwise.
    pub async fn save(&self, draft: Employee) -> crate::error::Result<SaveAction> {
        let exists = draft
            .id
            .is_some_and(|id| self.state().full_list.iter().any(|e| e.id == Some(id)));

        let result = if exists {
            self.directory.update(&draft).await.map(|_| SaveAction::Updated)
        } else {
            self.directory.create(&draft).await.map(|_| SaveAction::Created)
        };

        match result {
            Ok(action) => {
                self.state().draft = None;
                let message = match action {
                    SaveAction::Updated => "Updated successfully.",
                    SaveAction::Created => "Added successfully.",
                };
                self.emit(AppEvent::success(message));
                self.emit(AppEvent::DialogDismissed);
                let _ = self.refresh().await;
                Ok(action)
            }
            Err(e) => {
                error!("failed to save employee: {e}");
                self.emit(AppEvent::error("Something went wrong."));
                Err(e)
            }
        }
    }

    /// Delete a record by id and reload the list
    pub async fn delete(&self, id: i64) -> crate::error::Result<()> {
        match self.directory.delete(id).await {
            Ok(()) => {
                self.emit(AppEvent::success("Employee deleted."));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("failed to delete employee {id}: {e}");
                self.emit(AppEvent::error("Something went wrong."));
                Err(e)
            }
        }
    }

    /// Flip a record's active flag and persist it through `save`
    pub async fn toggle_status(&self, mut employee: Employee) -> crate::error::Result<SaveAction> {
        employee.status = !employee.status;
        self.state().draft = Some(employee.clone());
        self.save(employee).await
    }

    /// Bind a record to the edit form
    pub fn begin_edit(&self, employee: Employee) {
        self.state().draft = Some(employee);
    }

    /// Clear the form draft
    pub fn reset_draft(&self) {
        self.state().draft = None;
    }

    /// Clear the search query and the active filter
    pub fn clear_filter(&self) {
        let mut state = self.state();
        state.query.clear();
        state.active_match = None;
        state.last_debounced = None;
    }
}
