// ── Entity controller ──
//
// One instance per entity screen. Owns the list state, mediates every
// user intent against the API client, and publishes snapshots + notices
// for the presentation surface. The state itself is pure (see `state`);
// this module is the async half that produces events.

pub mod state;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{broadcast, watch};
use tracing::warn;

use depot_api::ApiClient;

use crate::resource::{FetchQuery, Resource};
use self::state::{ListEvent, ListState, apply};

const NOTICE_CHANNEL_SIZE: usize = 32;

// ── Notices ─────────────────────────────────────────────────────────

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient user-facing message emitted by a controller (rendered as
/// a toast by the TUI). Full error detail goes to the tracing log, never
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

// ── Controller ──────────────────────────────────────────────────────

/// List/search/CRUD synchronization controller for one entity.
///
/// Cheaply cloneable via `Arc`; all methods take `&self` so operations
/// can run from spawned tasks. Consumers subscribe to state snapshots
/// through a `watch` channel and to notices through a `broadcast`
/// channel.
pub struct EntityController<R: Resource> {
    inner: Arc<Inner<R>>,
}

impl<R: Resource> Clone for EntityController<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<R: Resource> {
    client: Arc<ApiClient>,
    state: Mutex<ListState<R::Entity, R::Draft>>,
    snapshot: watch::Sender<ListState<R::Entity, R::Draft>>,
    notices: broadcast::Sender<Notice>,
    /// Fetch sequence counter; completions older than the newest start
    /// are dropped by the state machine.
    seq: AtomicU64,
}

impl<R: Resource> EntityController<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (snapshot, _) = watch::channel(ListState::default());
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        Self {
            inner: Arc::new(Inner {
                client,
                state: Mutex::new(ListState::default()),
                snapshot,
                notices,
                seq: AtomicU64::new(0),
            }),
        }
    }

    /// Current state (cheap clone of the snapshot).
    pub fn state(&self) -> ListState<R::Entity, R::Draft> {
        self.lock().clone()
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<ListState<R::Entity, R::Draft>> {
        self.inner.snapshot.subscribe()
    }

    /// Subscribe to user-facing notices.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.inner.notices.subscribe()
    }

    // ── Fetching ─────────────────────────────────────────────────────

    /// Re-fetch the list with the current search term and pagination.
    ///
    /// On failure the prior items stay untouched and a failure notice is
    /// emitted. The loading flag always clears for the newest request,
    /// success or failure; completions of superseded requests are
    /// discarded.
    pub async fn refresh(&self) {
        let seq = self.next_seq();
        let query = {
            let state = self.lock();
            FetchQuery {
                page: state.page.page,
                page_size: state.page.page_size,
                keyword: keyword_of(&state.search_term),
            }
        };
        self.dispatch(ListEvent::FetchStarted { seq });

        // Full-list resources have no keyword parameter on their listing;
        // an active filter is preserved by re-running the search endpoint.
        let result = match query.keyword {
            Some(ref keyword) if !R::PAGED => {
                R::search(&self.inner.client, keyword).await.map(|items| {
                    crate::resource::Fetched {
                        items,
                        counters: None,
                    }
                })
            }
            _ => R::fetch(&self.inner.client, &query).await,
        };

        match result {
            Ok(fetched) => {
                self.dispatch(ListEvent::FetchSucceeded {
                    seq,
                    items: fetched.items,
                    counters: fetched.counters,
                });
            }
            Err(e) => {
                warn!(resource = R::NAME, error = %e, "list fetch failed");
                if self.dispatch(ListEvent::FetchFailed { seq }) {
                    self.notify(Notice::error(format!("Failed to load {}s", R::NAME)));
                }
            }
        }
    }

    /// Run a search. A blank or whitespace-only term behaves exactly as
    /// [`refresh`](Self::refresh) with no filter. Paged resources re-fetch
    /// with the keyword from page 0; full-list resources call their
    /// dedicated search endpoint.
    pub async fn run_search(&self, term: &str) {
        let trimmed = term.trim().to_owned();
        self.dispatch(ListEvent::SearchTermSet(trimmed.clone()));

        if trimmed.is_empty() {
            self.refresh().await;
            return;
        }

        if R::PAGED {
            self.dispatch(ListEvent::PageRequested { page: 0 });
            self.refresh().await;
            return;
        }

        let seq = self.next_seq();
        self.dispatch(ListEvent::FetchStarted { seq });
        match R::search(&self.inner.client, &trimmed).await {
            Ok(items) => {
                self.dispatch(ListEvent::FetchSucceeded {
                    seq,
                    items,
                    counters: None,
                });
            }
            Err(e) => {
                warn!(resource = R::NAME, term = %trimmed, error = %e, "search failed");
                if self.dispatch(ListEvent::FetchFailed { seq }) {
                    self.notify(Notice::error(format!("Failed to search {}s", R::NAME)));
                }
            }
        }
    }

    /// Jump to a page and re-fetch (paged resources).
    pub async fn goto_page(&self, page: u32) {
        self.dispatch(ListEvent::PageRequested { page });
        self.refresh().await;
    }

    /// Change the page size (resets to page 0) and re-fetch.
    pub async fn set_page_size(&self, page_size: u32) {
        self.dispatch(ListEvent::PageSizeSet { page_size });
        self.refresh().await;
    }

    // ── Form lifecycle ───────────────────────────────────────────────

    /// Open the form: seeded from `existing` for an edit, or reset to an
    /// empty draft for a create.
    pub fn open_form(&self, existing: Option<&R::Entity>) {
        let existing =
            existing.map(|entity| (R::key(entity).to_owned(), R::draft_from(entity)));
        self.dispatch(ListEvent::FormOpened { existing });
    }

    /// Close the form and reset the draft.
    pub fn close_form(&self) {
        self.dispatch(ListEvent::FormClosed);
    }

    /// Replace the in-progress draft (called on every form edit).
    pub fn set_draft(&self, draft: R::Draft) {
        self.dispatch(ListEvent::DraftChanged(draft));
    }

    /// Submit the open form: update when a record is being edited,
    /// create otherwise. Success closes the form and re-fetches with the
    /// current page + search preserved; failure leaves the form open with
    /// the draft intact.
    pub async fn submit(&self) {
        let (editing_key, draft) = {
            let state = self.lock();
            (state.editing_key.clone(), state.draft.clone())
        };

        let result = match editing_key {
            Some(ref key) => R::update(&self.inner.client, key, &draft).await.map(|_| ()),
            None => R::create(&self.inner.client, &draft).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                let verb = if editing_key.is_some() { "updated" } else { "created" };
                self.dispatch(ListEvent::FormClosed);
                self.notify(Notice::success(format!("{} {verb}", R::LABEL)));
                self.refresh().await;
            }
            Err(e) => {
                warn!(resource = R::NAME, error = %e, "save failed");
                self.notify(Notice::error(format!("Failed to save {}", R::NAME)));
            }
        }
    }

    /// Delete a record. Callers must have confirmed with the user first;
    /// the controller performs no prompt of its own. Success re-fetches;
    /// failure only notifies and leaves the items untouched.
    pub async fn remove(&self, key: &str) {
        match R::delete(&self.inner.client, key).await {
            Ok(()) => {
                self.notify(Notice::success(format!("{} deleted", R::LABEL)));
                self.refresh().await;
            }
            Err(e) => {
                warn!(resource = R::NAME, key, error = %e, "delete failed");
                self.notify(Notice::error(format!("Failed to delete {}", R::NAME)));
            }
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn lock(&self) -> std::sync::MutexGuard<'_, ListState<R::Entity, R::Draft>> {
        self.inner.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn next_seq(&self) -> u64 {
        self.inner.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Apply an event and publish the new snapshot. Returns whether the
    /// event was applied (stale fetch completions are discarded).
    fn dispatch(&self, event: ListEvent<R::Entity, R::Draft>) -> bool {
        let mut state = self.lock();
        let applied = apply(&mut state, event);
        if applied {
            self.inner.snapshot.send_replace(state.clone());
        }
        applied
    }

    fn notify(&self, notice: Notice) {
        // No receivers is fine (CLI-style one-shot use).
        let _ = self.inner.notices.send(notice);
    }
}

fn keyword_of(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
