//! Channel list models and pure state transitions for testing outside wasm.
//!
//! The visible page is always derived from the full fetched collection:
//! `visible = paginate(filter(rows, search), page_size, page)`. Refreshes
//! replace the collection wholesale; nothing here merges partial updates.

use std::collections::BTreeSet;
use telepost_api_models::{Channel, ParseMode};

/// Page size options offered by the list screen.
pub const PAGE_SIZES: [usize; 3] = [25, 50, 100];

/// Poll period for the unconditional list refresh, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// UI-friendly channel snapshot used across list helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelRow {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Telegram destination identifier.
    pub chat_id: i64,
    /// Content rendering mode.
    pub parse_mode: ParseMode,
    /// Publishing interval in minutes.
    pub interval: u32,
    /// Whether the backend scheduler currently posts to this channel.
    pub active: bool,
}

impl From<Channel> for ChannelRow {
    fn from(value: Channel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            chat_id: value.chat_id,
            parse_mode: value.parse_mode,
            interval: value.interval,
            active: value.active,
        }
    }
}

/// Selection set used for bulk channel actions.
pub type SelectionSet = BTreeSet<i64>;

/// Current channel list slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelsState {
    /// Full fetched collection, replaced wholesale on every refresh.
    pub rows: Vec<ChannelRow>,
    /// Free-text filter over name, chat id, and id.
    pub search: String,
    /// Rows per page, one of [`PAGE_SIZES`].
    pub page_size: usize,
    /// Current page, 1-based.
    pub page: usize,
    /// Multi-select set for bulk actions.
    pub selected: SelectionSet,
    /// Ids copied out of `selected` while the delete dialog is open.
    pub pending_delete: SelectionSet,
    /// Whether the delete confirmation dialog is open.
    pub confirm_open: bool,
}

impl Default for ChannelsState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            search: String::new(),
            page_size: PAGE_SIZES[0],
            page: 1,
            selected: SelectionSet::new(),
            pending_delete: SelectionSet::new(),
            confirm_open: false,
        }
    }
}

fn row_matches(row: &ChannelRow, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle)
        || row.chat_id.to_string().contains(needle)
        || row.id.to_string().contains(needle)
}

/// Replace the collection with a fresh snapshot.
///
/// Selection entries for rows that vanished are dropped; the current page is
/// clamped so shrinking data never strands the view past the last page.
pub fn set_rows(state: &mut ChannelsState, rows: Vec<ChannelRow>) {
    state.rows = rows;
    let live: BTreeSet<i64> = state.rows.iter().map(|row| row.id).collect();
    state.selected.retain(|id| live.contains(id));
    clamp_page(state);
}

/// Rows passing the current free-text filter, in fetch order.
///
/// Matching is a case-insensitive substring test against the name, the chat
/// id rendered as text, and the id rendered as text; any hit includes the row.
#[must_use]
pub fn filtered_rows(state: &ChannelsState) -> Vec<&ChannelRow> {
    let needle = state.search.trim().to_lowercase();
    state
        .rows
        .iter()
        .filter(|row| needle.is_empty() || row_matches(row, &needle))
        .collect()
}

/// Number of pages for the filtered collection; zero when it is empty.
#[must_use]
pub fn page_count(state: &ChannelsState) -> usize {
    filtered_rows(state).len().div_ceil(state.page_size)
}

/// The filtered rows belonging to the current page.
#[must_use]
pub fn visible_rows(state: &ChannelsState) -> Vec<ChannelRow> {
    filtered_rows(state)
        .into_iter()
        .skip((state.page - 1) * state.page_size)
        .take(state.page_size)
        .cloned()
        .collect()
}

/// Whether the previous-page control is enabled.
#[must_use]
pub const fn has_prev_page(state: &ChannelsState) -> bool {
    state.page > 1
}

/// Whether the next-page control is enabled.
#[must_use]
pub fn has_next_page(state: &ChannelsState) -> bool {
    state.page < page_count(state)
}

/// Move one page back; no wraparound at the lower bound.
pub fn prev_page(state: &mut ChannelsState) {
    if has_prev_page(state) {
        state.page -= 1;
    }
}

/// Move one page forward; no wraparound at the upper bound.
pub fn next_page(state: &mut ChannelsState) {
    if has_next_page(state) {
        state.page += 1;
    }
}

/// Replace the free-text filter and return to the first page.
pub fn set_search(state: &mut ChannelsState, search: String) {
    state.search = search;
    state.page = 1;
}

/// Switch the page size; unknown sizes are ignored, the filter is kept.
pub fn set_page_size(state: &mut ChannelsState, size: usize) {
    if PAGE_SIZES.contains(&size) {
        state.page_size = size;
        clamp_page(state);
    }
}

fn clamp_page(state: &mut ChannelsState) {
    let pages = page_count(state);
    if pages > 0 && state.page > pages {
        state.page = pages;
    }
    if state.page == 0 {
        state.page = 1;
    }
}

/// Toggle the presence of an id in the selection set.
pub fn toggle_selection(state: &mut ChannelsState, id: i64) {
    if !state.selected.remove(&id) {
        state.selected.insert(id);
    }
}

/// Begin the bulk delete flow.
///
/// Copies the selection into the pending set and opens the confirmation
/// dialog; returns `false` without any state change when nothing is selected
/// so the caller can report the error.
pub fn request_delete(state: &mut ChannelsState) -> bool {
    if state.selected.is_empty() {
        return false;
    }
    state.pending_delete = state.selected.clone();
    state.confirm_open = true;
    true
}

/// Ids awaiting deletion, in stable order.
#[must_use]
pub fn pending_delete_ids(state: &ChannelsState) -> Vec<i64> {
    state.pending_delete.iter().copied().collect()
}

/// Close the delete flow after the per-id calls completed.
pub fn finish_delete(state: &mut ChannelsState) {
    state.pending_delete.clear();
    state.confirm_open = false;
}

/// Abort the delete flow, leaving the selection untouched.
pub fn cancel_delete(state: &mut ChannelsState) {
    state.pending_delete.clear();
    state.confirm_open = false;
}

/// The target of the edit action, defined only for a single selection.
#[must_use]
pub fn edit_target(state: &ChannelsState) -> Option<i64> {
    if state.selected.len() == 1 {
        state.selected.iter().next().copied()
    } else {
        None
    }
}

/// Per-id arguments for the bulk status toggle: each selected channel is
/// flipped relative to its own current state.
#[must_use]
pub fn toggle_targets(state: &ChannelsState) -> Vec<(i64, bool)> {
    state
        .rows
        .iter()
        .filter(|row| state.selected.contains(&row.id))
        .map(|row| (row.id, !row.active))
        .collect()
}

/// Tally of a bulk action, fed into the single aggregate toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Number of per-id calls issued.
    pub total: usize,
    /// Number of those calls that failed.
    pub failed: usize,
}

impl BulkOutcome {
    /// Whether every per-id call succeeded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Run one backend call per item, strictly sequentially.
///
/// A failure is counted and the remaining items are still attempted; there
/// is no rollback of the calls that already landed. The caller reconciles
/// with a refetch afterwards.
pub async fn run_bulk<T, F, Fut, E>(items: Vec<T>, mut op: F) -> BulkOutcome
where
    F: FnMut(T) -> Fut,
    Fut: std::future::Future<Output = Result<(), E>>,
{
    let total = items.len();
    let mut failed = 0;
    for item in items {
        if op(item).await.is_err() {
            failed += 1;
        }
    }
    BulkOutcome { total, failed }
}

/// Drop selection and dialog state when the screen unmounts.
///
/// The fetched rows are kept so returning to the list renders instantly
/// before the next refresh lands.
pub fn reset_transient(state: &mut ChannelsState) {
    state.selected.clear();
    state.pending_delete.clear();
    state.confirm_open = false;
}

#[cfg(test)]
mod tests {
    use super::{
        ChannelRow, ChannelsState, PAGE_SIZES, cancel_delete, edit_target, filtered_rows,
        finish_delete, has_next_page, has_prev_page, next_page, page_count, pending_delete_ids,
        prev_page, request_delete, reset_transient, run_bulk, set_page_size, set_rows, set_search,
        toggle_selection, toggle_targets, visible_rows,
    };
    use std::cell::RefCell;
    use std::future::{Future, ready};
    use std::task::{Context, Poll, Waker};
    use telepost_api_models::ParseMode;

    fn drive<F: Future>(fut: F) -> F::Output {
        let mut fut = std::pin::pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    fn row(id: i64, name: &str, chat_id: i64, active: bool) -> ChannelRow {
        ChannelRow {
            id,
            name: name.to_string(),
            chat_id,
            parse_mode: ParseMode::Html,
            interval: 240,
            active,
        }
    }

    fn populated(count: i64) -> ChannelsState {
        let mut state = ChannelsState::default();
        let rows = (1..=count)
            .map(|id| row(id, &format!("channel {id}"), -1_000 - id, id % 2 == 0))
            .collect();
        set_rows(&mut state, rows);
        state
    }

    #[test]
    fn filter_is_case_insensitive_and_spans_fields() {
        let mut state = ChannelsState::default();
        set_rows(
            &mut state,
            vec![
                row(1, "Daily News", -100, true),
                row(2, "memes", -200, false),
                row(77, "quiet", -300, false),
            ],
        );

        set_search(&mut state, "NEWS".into());
        let lower: Vec<i64> = filtered_rows(&state).iter().map(|r| r.id).collect();
        set_search(&mut state, "news".into());
        let upper: Vec<i64> = filtered_rows(&state).iter().map(|r| r.id).collect();
        assert_eq!(lower, upper);
        assert_eq!(lower, vec![1]);

        // chat_id and id are matched as text.
        set_search(&mut state, "-200".into());
        assert_eq!(filtered_rows(&state).len(), 1);
        set_search(&mut state, "77".into());
        assert_eq!(filtered_rows(&state)[0].id, 77);
    }

    #[test]
    fn visible_never_exceeds_page_size() {
        let state = populated(60);
        assert_eq!(state.page_size, PAGE_SIZES[0]);
        assert!(visible_rows(&state).len() <= state.page_size);
        assert_eq!(visible_rows(&state).len(), 25);
        assert_eq!(page_count(&state), 3);
    }

    #[test]
    fn visible_is_empty_only_past_the_last_page() {
        let mut state = populated(30);
        assert!(!visible_rows(&state).is_empty());
        state.page = 2;
        assert_eq!(visible_rows(&state).len(), 5);
        state.page = 3;
        assert!(visible_rows(&state).is_empty());
        assert!(state.page > page_count(&state));
    }

    #[test]
    fn page_size_change_keeps_filter_and_recounts() {
        let mut state = populated(60);
        set_search(&mut state, "channel".into());
        set_page_size(&mut state, 50);
        assert_eq!(state.search, "channel");
        assert_eq!(page_count(&state), 2);
        // Unknown sizes are ignored.
        set_page_size(&mut state, 33);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn shrinking_data_clamps_the_page() {
        let mut state = populated(60);
        state.page = 3;
        set_rows(&mut state, vec![row(1, "only", -1, true)]);
        assert_eq!(state.page, 1);
        assert!(!has_next_page(&state));
        assert!(!has_prev_page(&state));
    }

    #[test]
    fn navigation_stops_at_the_bounds() {
        let mut state = populated(60);
        prev_page(&mut state);
        assert_eq!(state.page, 1);
        next_page(&mut state);
        next_page(&mut state);
        assert_eq!(state.page, 3);
        next_page(&mut state);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn double_toggle_restores_selection() {
        let mut state = populated(3);
        toggle_selection(&mut state, 2);
        assert!(state.selected.contains(&2));
        toggle_selection(&mut state, 2);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn refresh_drops_selection_of_vanished_rows() {
        let mut state = populated(3);
        toggle_selection(&mut state, 1);
        toggle_selection(&mut state, 3);
        set_rows(&mut state, vec![row(3, "survivor", -3, true)]);
        assert_eq!(state.selected.iter().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn request_delete_requires_a_selection() {
        let mut state = populated(3);
        assert!(!request_delete(&mut state));
        assert!(state.pending_delete.is_empty());
        assert!(!state.confirm_open);

        toggle_selection(&mut state, 1);
        toggle_selection(&mut state, 3);
        assert!(request_delete(&mut state));
        assert!(state.confirm_open);
        assert_eq!(pending_delete_ids(&state), vec![1, 3]);
    }

    #[test]
    fn cancel_keeps_selection_finish_clears_pending() {
        let mut state = populated(3);
        toggle_selection(&mut state, 2);
        assert!(request_delete(&mut state));
        cancel_delete(&mut state);
        assert!(!state.confirm_open);
        assert!(state.pending_delete.is_empty());
        assert!(state.selected.contains(&2));

        assert!(request_delete(&mut state));
        finish_delete(&mut state);
        assert!(!state.confirm_open);
        assert!(state.pending_delete.is_empty());
    }

    #[test]
    fn edit_needs_exactly_one_selection() {
        let mut state = populated(3);
        assert_eq!(edit_target(&state), None);
        toggle_selection(&mut state, 2);
        assert_eq!(edit_target(&state), Some(2));
        toggle_selection(&mut state, 3);
        assert_eq!(edit_target(&state), None);
    }

    #[test]
    fn toggle_targets_flip_each_row_relative_to_itself() {
        let mut state = ChannelsState::default();
        set_rows(
            &mut state,
            vec![row(1, "on", -1, true), row(2, "off", -2, false)],
        );
        toggle_selection(&mut state, 1);
        toggle_selection(&mut state, 2);
        assert_eq!(toggle_targets(&state), vec![(1, false), (2, true)]);
    }

    #[test]
    fn bulk_run_attempts_every_id_past_a_failure() {
        let attempted = RefCell::new(Vec::new());
        let outcome = drive(run_bulk(vec![1_i64, 3, 7], |id| {
            attempted.borrow_mut().push(id);
            ready(if id == 3 { Err("down") } else { Ok(()) })
        }));
        // The failure on 3 does not stop 7 from being attempted.
        assert_eq!(*attempted.borrow(), vec![1, 3, 7]);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.failed, 1);
        assert!(!outcome.is_clean());
    }

    #[test]
    fn bulk_run_is_clean_when_everything_lands() {
        let outcome = drive(run_bulk(vec![(1_i64, true), (2, false)], |_| {
            ready(Ok::<(), ()>(()))
        }));
        assert_eq!(outcome.total, 2);
        assert!(outcome.is_clean());
    }

    #[test]
    fn unmount_reset_clears_transient_state_only() {
        let mut state = populated(3);
        toggle_selection(&mut state, 1);
        assert!(request_delete(&mut state));
        reset_transient(&mut state);
        assert!(state.selected.is_empty());
        assert!(state.pending_delete.is_empty());
        assert!(!state.confirm_open);
        assert_eq!(state.rows.len(), 3);
    }
}
