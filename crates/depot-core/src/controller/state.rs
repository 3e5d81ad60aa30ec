// ── Pure list-state machine ──
//
// Every screen-visible fact about a list lives in `ListState`; every
// mutation arrives as a `ListEvent` through `apply`. No I/O here — the
// async half of the controller produces events, this module folds them.
//
// Fetches carry a monotonically increasing sequence number. A completion
// (success or failure) older than the newest started fetch is discarded
// wholesale, so a slow superseded request can never overwrite newer items
// or flicker the loading flag.

use crate::resource::PageCounters;

/// Pagination counters as tracked by a controller. Meaningful only for
/// server-paged resources; full-list variants keep the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Zero-based page index requested next.
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
            total_items: 0,
            total_pages: 0,
        }
    }
}

/// Complete state of one entity screen.
#[derive(Debug, Clone)]
pub struct ListState<T, D> {
    pub items: Vec<T>,
    pub loading: bool,
    pub search_term: String,
    pub page: PageState,
    /// The in-progress form draft. Holds the default value while the
    /// form is closed.
    pub draft: D,
    /// Key of the record being edited; `None` means the open form (if
    /// any) is in create mode.
    pub editing_key: Option<String>,
    pub form_open: bool,
    /// Sequence number of the newest started fetch.
    latest_seq: u64,
}

impl<T, D: Default> Default for ListState<T, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search_term: String::new(),
            page: PageState::default(),
            draft: D::default(),
            editing_key: None,
            form_open: false,
            latest_seq: 0,
        }
    }
}

impl<T, D> ListState<T, D> {
    /// Whether an open form is editing an existing record.
    pub fn is_editing(&self) -> bool {
        self.editing_key.is_some()
    }
}

/// Every transition of a `ListState`.
#[derive(Debug, Clone)]
pub enum ListEvent<T, D> {
    FetchStarted {
        seq: u64,
    },
    FetchSucceeded {
        seq: u64,
        items: Vec<T>,
        counters: Option<PageCounters>,
    },
    FetchFailed {
        seq: u64,
    },
    SearchTermSet(String),
    PageRequested {
        page: u32,
    },
    PageSizeSet {
        page_size: u32,
    },
    /// Open the form: `Some((key, draft))` seeds an edit, `None` resets
    /// to an empty create draft. The sole transition into editing mode.
    FormOpened {
        existing: Option<(String, D)>,
    },
    /// Close the form and reset the draft. The sole transition back.
    FormClosed,
    DraftChanged(D),
}

/// Fold one event into the state. Returns `false` when the event was a
/// stale fetch completion and was discarded without touching anything.
pub fn apply<T, D: Default>(state: &mut ListState<T, D>, event: ListEvent<T, D>) -> bool {
    match event {
        ListEvent::FetchStarted { seq } => {
            state.latest_seq = state.latest_seq.max(seq);
            state.loading = true;
        }
        ListEvent::FetchSucceeded {
            seq,
            items,
            counters,
        } => {
            if seq < state.latest_seq {
                return false;
            }
            state.items = items;
            if let Some(counters) = counters {
                state.page = PageState {
                    page: counters.page,
                    page_size: counters.page_size,
                    total_items: counters.total_items,
                    total_pages: counters.total_pages,
                };
            }
            state.loading = false;
        }
        ListEvent::FetchFailed { seq } => {
            if seq < state.latest_seq {
                return false;
            }
            // Prior items stay on screen; only the spinner stops.
            state.loading = false;
        }
        ListEvent::SearchTermSet(term) => {
            state.search_term = term;
        }
        ListEvent::PageRequested { page } => {
            state.page.page = page;
        }
        ListEvent::PageSizeSet { page_size } => {
            state.page.page_size = page_size;
            state.page.page = 0;
        }
        ListEvent::FormOpened { existing } => {
            state.form_open = true;
            match existing {
                Some((key, draft)) => {
                    state.editing_key = Some(key);
                    state.draft = draft;
                }
                None => {
                    state.editing_key = None;
                    state.draft = D::default();
                }
            }
        }
        ListEvent::FormClosed => {
            state.form_open = false;
            state.editing_key = None;
            state.draft = D::default();
        }
        ListEvent::DraftChanged(draft) => {
            state.draft = draft;
        }
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    type State = ListState<&'static str, String>;

    fn fetched(seq: u64, items: Vec<&'static str>) -> ListEvent<&'static str, String> {
        ListEvent::FetchSucceeded {
            seq,
            items,
            counters: None,
        }
    }

    #[test]
    fn fetch_cycle_replaces_items_and_clears_loading() {
        let mut state = State::default();
        apply(&mut state, ListEvent::FetchStarted { seq: 1 });
        assert!(state.loading);

        assert!(apply(&mut state, fetched(1, vec!["a", "b"])));
        assert_eq!(state.items, vec!["a", "b"]);
        assert!(!state.loading);
    }

    #[test]
    fn failed_fetch_keeps_prior_items() {
        let mut state = State::default();
        apply(&mut state, ListEvent::FetchStarted { seq: 1 });
        apply(&mut state, fetched(1, vec!["a"]));

        apply(&mut state, ListEvent::FetchStarted { seq: 2 });
        assert!(apply(&mut state, ListEvent::FetchFailed { seq: 2 }));
        assert_eq!(state.items, vec!["a"]);
        assert!(!state.loading);
    }

    #[test]
    fn stale_success_is_discarded() {
        let mut state = State::default();
        apply(&mut state, ListEvent::FetchStarted { seq: 1 });
        apply(&mut state, ListEvent::FetchStarted { seq: 2 });

        // Newer fetch resolves first.
        assert!(apply(&mut state, fetched(2, vec!["new"])));
        // The superseded fetch resolves late; nothing may change.
        assert!(!apply(&mut state, fetched(1, vec!["old"])));
        assert_eq!(state.items, vec!["new"]);
        assert!(!state.loading);
    }

    #[test]
    fn stale_failure_does_not_flicker_loading() {
        let mut state = State::default();
        apply(&mut state, ListEvent::FetchStarted { seq: 1 });
        apply(&mut state, ListEvent::FetchStarted { seq: 2 });

        assert!(!apply(&mut state, ListEvent::FetchFailed { seq: 1 }));
        // The newest fetch is still in flight.
        assert!(state.loading);

        assert!(apply(&mut state, fetched(2, vec!["x"])));
        assert!(!state.loading);
    }

    #[test]
    fn page_counters_update_from_server_response() {
        let mut state = State::default();
        apply(&mut state, ListEvent::FetchStarted { seq: 1 });
        apply(
            &mut state,
            ListEvent::FetchSucceeded {
                seq: 1,
                items: vec!["a"],
                counters: Some(PageCounters {
                    page: 2,
                    page_size: 10,
                    total_items: 25,
                    total_pages: 3,
                }),
            },
        );
        assert_eq!(state.page.page, 2);
        assert_eq!(state.page.total_items, 25);
        assert_eq!(state.page.total_pages, 3);
    }

    #[test]
    fn open_then_close_restores_default_draft() {
        let mut state = State::default();
        apply(
            &mut state,
            ListEvent::FormOpened {
                existing: Some(("k1".into(), "seeded".into())),
            },
        );
        assert!(state.form_open);
        assert_eq!(state.editing_key.as_deref(), Some("k1"));
        assert_eq!(state.draft, "seeded");

        apply(&mut state, ListEvent::FormClosed);
        assert!(!state.form_open);
        assert_eq!(state.editing_key, None);
        assert_eq!(state.draft, String::default());
    }

    #[test]
    fn opening_for_create_clears_previous_edit_residue() {
        let mut state = State::default();
        apply(
            &mut state,
            ListEvent::FormOpened {
                existing: Some(("k1".into(), "seeded".into())),
            },
        );
        apply(&mut state, ListEvent::FormOpened { existing: None });
        assert_eq!(state.editing_key, None);
        assert_eq!(state.draft, String::default());
        assert!(state.form_open);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = State::default();
        apply(&mut state, ListEvent::PageRequested { page: 3 });
        apply(&mut state, ListEvent::PageSizeSet { page_size: 25 });
        assert_eq!(state.page.page, 0);
        assert_eq!(state.page.page_size, 25);
    }

    #[test]
    fn loading_never_blocks_form_transitions() {
        let mut state = State::default();
        apply(&mut state, ListEvent::FetchStarted { seq: 1 });
        apply(&mut state, ListEvent::FormOpened { existing: None });
        apply(&mut state, ListEvent::DraftChanged("typed".into()));
        assert!(state.loading);
        assert_eq!(state.draft, "typed");
    }
}
