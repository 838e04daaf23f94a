//! Board model types for testable state management.
//!
//! This module separates state (`BoardState`) from view (`BoardViewModel`),
//! keeping the grouping, sorting, and state-transition logic as pure
//! functions that can be unit tested without the iocraft framework.

use std::collections::HashMap;

use unicase::UniCase;

use crate::prefs::Preferences;
use crate::remote::BoardData;
use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::select::Selectable;
use crate::types::{GroupKey, Priority, SortKey, Ticket, User, avatar_url};
use crate::utils::initials;

/// A derived column: the raw grouping-key value and the tickets under it.
/// Recomputed on every relevant state change, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub title: String,
    pub tickets: Vec<Ticket>,
}

/// Where the board is in its load lifecycle.
///
/// A failed fetch is terminal for the session: no retry is scheduled and
/// the board stays on its empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Raw state that changes during the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// Payload from the one startup fetch; `None` until it succeeds.
    pub data: Option<BoardData>,
    pub phase: LoadPhase,
    /// Active grouping key.
    pub group: GroupKey,
    /// Active sort key.
    pub sort: SortKey,
    /// Index of the selected column.
    pub current_column: usize,
    /// Index of the selected card within the column.
    pub current_row: usize,
}

impl BoardState {
    pub fn with_prefs(prefs: Preferences) -> Self {
        Self {
            group: prefs.group,
            sort: prefs.sort,
            ..Default::default()
        }
    }

    /// Current column list, recomputed from scratch.
    pub fn columns(&self) -> Vec<Column> {
        self.data
            .as_ref()
            .map(|data| compute_columns(data, self.group, self.sort))
            .unwrap_or_default()
    }
}

/// All actions the board reducer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    // Fetch lifecycle
    /// The startup fetch succeeded.
    DataLoaded(BoardData),
    /// The startup fetch failed; the session stays unloaded.
    FetchFailed,

    // Preference changes (the two selection inputs)
    NextGroupKey,
    PrevGroupKey,
    NextSortKey,
    PrevSortKey,

    // Navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    /// Quit the application. Handled by the component, not the reducer.
    Quit,
}

/// Partition tickets into buckets keyed by the chosen field.
///
/// Bucket order is first-seen order while scanning tickets in their fetched
/// order, which fixes the left-to-right column order on screen. No bucket
/// is created for key values that never occur. Every ticket lands in
/// exactly one bucket.
pub fn group_tickets(tickets: &[Ticket], key: GroupKey) -> Vec<(String, Vec<Ticket>)> {
    let mut buckets: Vec<(String, Vec<Ticket>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let bucket_key = key.bucket_key(ticket);
        match index.get(&bucket_key) {
            Some(&i) => buckets[i].1.push(ticket.clone()),
            None => {
                index.insert(bucket_key.clone(), buckets.len());
                buckets.push((bucket_key, vec![ticket.clone()]));
            }
        }
    }

    buckets
}

/// Order tickets in place by the chosen key.
///
/// `Priority` sorts descending (urgent first), `Title` ascending and
/// case-insensitively. `None` leaves the order untouched, which is a
/// defined fallback rather than an error. The sort is stable: ties keep
/// their fetched order.
pub fn sort_tickets(key: Option<SortKey>, tickets: &mut [Ticket]) {
    match key {
        Some(SortKey::Priority) => {
            tickets.sort_by(|a, b| b.priority.as_num().cmp(&a.priority.as_num()));
        }
        Some(SortKey::Title) => {
            tickets.sort_by(|a, b| UniCase::new(&a.title).cmp(&UniCase::new(&b.title)));
        }
        None => {}
    }
}

/// Group then sort: the full column recomputation.
///
/// Grouping output is consumed exactly once, by the sort pass below; the
/// buckets are moved, never shared, so there is no aliasing between a
/// pre-sort and post-sort view of a column.
pub fn compute_columns(data: &BoardData, group: GroupKey, sort: SortKey) -> Vec<Column> {
    group_tickets(&data.tickets, group)
        .into_iter()
        .map(|(title, mut tickets)| {
            sort_tickets(Some(sort), &mut tickets);
            Column { title, tickets }
        })
        .collect()
}

/// Resolve a raw grouping-key value into a column header.
///
/// A matching user id wins, then an integer priority's label; anything else
/// renders verbatim (unknown statuses and unknown user ids included).
pub fn column_title(raw: &str, users: &[User]) -> String {
    if let Some(user) = users.iter().find(|u| u.id == raw) {
        return user.name.clone();
    }
    if let Some(priority) = Priority::from_raw_key(raw) {
        return priority.label().to_string();
    }
    raw.to_string()
}

/// Pure state transition (reducer pattern).
///
/// Recomputation is implicit: columns are derived from `data`/`group`/
/// `sort` on demand, so any transition that touches those always yields a
/// column list reflecting the latest committed values.
pub fn reduce_board_state(mut state: BoardState, action: BoardAction) -> BoardState {
    match action {
        BoardAction::DataLoaded(data) => {
            state.data = Some(data);
            state.phase = LoadPhase::Ready;
            state.current_column = 0;
            state.current_row = 0;
        }
        BoardAction::FetchFailed => {
            state.phase = LoadPhase::Failed;
        }

        BoardAction::NextGroupKey => {
            state.group = state.group.next();
            state.current_column = 0;
            state.current_row = 0;
        }
        BoardAction::PrevGroupKey => {
            state.group = state.group.prev();
            state.current_column = 0;
            state.current_row = 0;
        }
        BoardAction::NextSortKey => {
            state.sort = state.sort.next();
            state.current_row = 0;
        }
        BoardAction::PrevSortKey => {
            state.sort = state.sort.prev();
            state.current_row = 0;
        }

        BoardAction::MoveLeft => {
            state.current_column = state.current_column.saturating_sub(1);
            clamp_row(&mut state);
        }
        BoardAction::MoveRight => {
            let max_col = state.columns().len().saturating_sub(1);
            state.current_column = (state.current_column + 1).min(max_col);
            clamp_row(&mut state);
        }
        BoardAction::MoveUp => {
            state.current_row = state.current_row.saturating_sub(1);
        }
        BoardAction::MoveDown => {
            let max_row = column_len(&state, state.current_column).saturating_sub(1);
            state.current_row = (state.current_row + 1).min(max_row);
        }

        // Requires system context, handled by the component.
        BoardAction::Quit => {}
    }
    state
}

fn clamp_row(state: &mut BoardState) {
    let max_row = column_len(state, state.current_column).saturating_sub(1);
    if state.current_row > max_row {
        state.current_row = max_row;
    }
}

fn column_len(state: &BoardState, column: usize) -> usize {
    state
        .columns()
        .get(column)
        .map(|c| c.tickets.len())
        .unwrap_or(0)
}

// ============================================================================
// View model
// ============================================================================

/// Computed view model for rendering.
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    pub columns: Vec<ColumnViewModel>,
    /// Display label for the active group key ("Status" / "User" / "Priority").
    pub group_label: &'static str,
    /// Display label for the active sort key ("Priority" / "Title").
    pub sort_label: &'static str,
    pub total_tickets: usize,
    pub empty_state: Option<EmptyStateKind>,
}

/// View model for a single column.
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    /// Resolved header (user name, priority label, or raw value).
    pub title: String,
    pub ticket_count: usize,
    pub is_active: bool,
    pub cards: Vec<CardViewModel>,
    /// Tickets hidden above/below the visible window.
    pub hidden_above: usize,
    pub hidden_below: usize,
}

/// View model for a single ticket card.
#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub ticket: Ticket,
    /// Initials badge when the assignee resolves in the avatar table.
    pub avatar: Option<String>,
    pub is_selected: bool,
}

pub fn group_key_label(key: GroupKey) -> &'static str {
    match key {
        GroupKey::Status => "Status",
        GroupKey::UserId => "User",
        GroupKey::Priority => "Priority",
    }
}

pub fn sort_key_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Priority => "Priority",
        SortKey::Title => "Title",
    }
}

/// Pure function: compute the view model from state.
///
/// `column_height` is the number of cards that fit in one column; the
/// visible window is centered on the selected row.
pub fn compute_board_view_model(state: &BoardState, column_height: usize) -> BoardViewModel {
    let columns = state.columns();
    let users: &[User] = state.data.as_ref().map(|d| d.users.as_slice()).unwrap_or(&[]);
    let total_tickets: usize = columns.iter().map(|c| c.tickets.len()).sum();

    let empty_state = match state.phase {
        LoadPhase::Loading => Some(EmptyStateKind::Loading),
        LoadPhase::Failed => Some(EmptyStateKind::FetchFailed),
        LoadPhase::Ready if total_tickets == 0 => Some(EmptyStateKind::NoTickets),
        LoadPhase::Ready => None,
    };

    let column_vms: Vec<ColumnViewModel> = columns
        .iter()
        .enumerate()
        .map(|(col_idx, column)| {
            let is_active = state.current_column == col_idx;
            let total = column.tickets.len();
            let selected_row = if is_active { state.current_row } else { 0 };
            let start = visible_window_start(selected_row, column_height, total);
            let end = (start + column_height.max(1)).min(total);

            let cards: Vec<CardViewModel> = column.tickets[start..end]
                .iter()
                .enumerate()
                .map(|(offset, ticket)| CardViewModel {
                    avatar: resolve_avatar(ticket, users),
                    is_selected: is_active && start + offset == state.current_row,
                    ticket: ticket.clone(),
                })
                .collect();

            ColumnViewModel {
                title: column_title(&column.title, users),
                ticket_count: total,
                is_active,
                cards,
                hidden_above: start,
                hidden_below: total.saturating_sub(end),
            }
        })
        .collect();

    BoardViewModel {
        columns: column_vms,
        group_label: group_key_label(state.group),
        sort_label: sort_key_label(state.sort),
        total_tickets,
        empty_state,
    }
}

/// First visible row, keeping the selected row centered when possible.
fn visible_window_start(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }
    let half = column_height / 2;
    let ideal = selected_row.saturating_sub(half);
    let max_start = total_items.saturating_sub(column_height);
    ideal.min(max_start)
}

fn resolve_avatar(ticket: &Ticket, users: &[User]) -> Option<String> {
    avatar_url(&ticket.user_id)?;
    let badge = users
        .iter()
        .find(|u| u.id == ticket.user_id)
        .map(|u| initials(&u.name))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| initials(&ticket.user_id));
    Some(badge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, title: &str, priority: u8, user: &str, status: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            tag: vec![],
            priority: Priority::from(priority),
            user_id: user.to_string(),
            status: status.to_string(),
        }
    }

    fn sample_tickets() -> Vec<Ticket> {
        vec![
            ticket("t1", "Banana", 1, "usr-1", "Todo"),
            ticket("t2", "apple", 4, "usr-2", "In progress"),
            ticket("t3", "Cherry", 2, "usr-1", "Todo"),
            ticket("t4", "Dates", 0, "usr-3", "Backlog"),
            ticket("t5", "Elder", 3, "usr-2", "Todo"),
        ]
    }

    #[test]
    fn test_grouping_column_order_is_first_seen() {
        let buckets = group_tickets(&sample_tickets(), GroupKey::Status);
        let keys: Vec<&str> = buckets.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Todo", "In progress", "Backlog"]);
    }

    #[test]
    fn test_grouping_no_empty_buckets() {
        let buckets = group_tickets(&sample_tickets(), GroupKey::Priority);
        // Priority levels present: 1, 4, 2, 0, 3 - all five, first-seen order
        let keys: Vec<&str> = buckets.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["1", "4", "2", "0", "3"]);
        assert!(buckets.iter().all(|(_, tickets)| !tickets.is_empty()));
    }

    #[test]
    fn test_grouping_preserves_fetch_order_within_bucket() {
        let buckets = group_tickets(&sample_tickets(), GroupKey::Status);
        let todo: Vec<&str> = buckets[0].1.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(todo, vec!["t1", "t3", "t5"]);
    }

    #[test]
    fn test_sort_priority_descending() {
        let mut tickets = sample_tickets();
        sort_tickets(Some(SortKey::Priority), &mut tickets);
        let nums: Vec<u8> = tickets.iter().map(|t| t.priority.as_num()).collect();
        assert_eq!(nums, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_sort_priority_stable_on_ties() {
        let mut tickets = vec![
            ticket("a", "first", 2, "usr-1", "Todo"),
            ticket("b", "second", 2, "usr-1", "Todo"),
            ticket("c", "third", 2, "usr-1", "Todo"),
        ];
        sort_tickets(Some(SortKey::Priority), &mut tickets);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let mut tickets = vec![
            ticket("t1", "Banana", 0, "", ""),
            ticket("t2", "apple", 0, "", ""),
            ticket("t3", "Cherry", 0, "", ""),
        ];
        sort_tickets(Some(SortKey::Title), &mut tickets);
        let titles: Vec<&str> = tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_none_is_noop() {
        let mut tickets = sample_tickets();
        let before = tickets.clone();
        sort_tickets(None, &mut tickets);
        assert_eq!(tickets, before);
    }

    #[test]
    fn test_column_title_resolution() {
        let users = vec![
            User {
                id: "usr-1".to_string(),
                name: "Anoop Sharma".to_string(),
            },
            // A user whose id happens to look like a priority; the user
            // match must win.
            User {
                id: "3".to_string(),
                name: "Numeric".to_string(),
            },
        ];
        assert_eq!(column_title("usr-1", &users), "Anoop Sharma");
        assert_eq!(column_title("3", &users), "Numeric");
        assert_eq!(column_title("4", &users), "Urgent");
        assert_eq!(column_title("0", &users), "No priority");
        assert_eq!(column_title("Todo", &users), "Todo");
        assert_eq!(column_title("usr-99", &users), "usr-99");
    }

    #[test]
    fn test_key_cycles_cover_all_values() {
        let mut key = GroupKey::Status;
        let mut seen = vec![key];
        for _ in 0..2 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(
            seen,
            vec![GroupKey::Status, GroupKey::UserId, GroupKey::Priority]
        );
        assert_eq!(GroupKey::Priority.next(), GroupKey::Status);
        assert_eq!(GroupKey::Status.prev(), GroupKey::Priority);
        assert_eq!(SortKey::Priority.next(), SortKey::Title);
        assert_eq!(SortKey::Title.next(), SortKey::Priority);
    }

    #[test]
    fn test_reduce_fetch_failed_is_terminal_unloaded() {
        let state = BoardState::default();
        let state = reduce_board_state(state, BoardAction::FetchFailed);
        assert_eq!(state.phase, LoadPhase::Failed);
        assert!(state.data.is_none());
        assert!(state.columns().is_empty());
    }

    #[test]
    fn test_reduce_navigation_clamps() {
        let data = BoardData {
            tickets: sample_tickets(),
            users: vec![],
        };
        let state = reduce_board_state(BoardState::default(), BoardAction::DataLoaded(data));
        // Three status columns; can't move left of 0
        let state = reduce_board_state(state, BoardAction::MoveLeft);
        assert_eq!(state.current_column, 0);
        // Move right twice lands on the last column, third stays put
        let state = reduce_board_state(state, BoardAction::MoveRight);
        let state = reduce_board_state(state, BoardAction::MoveRight);
        let state = reduce_board_state(state, BoardAction::MoveRight);
        assert_eq!(state.current_column, 2);
        // Backlog has one ticket; row stays at 0
        let state = reduce_board_state(state, BoardAction::MoveDown);
        assert_eq!(state.current_row, 0);
    }

    #[test]
    fn test_reduce_group_change_resets_selection() {
        let data = BoardData {
            tickets: sample_tickets(),
            users: vec![],
        };
        let state = reduce_board_state(BoardState::default(), BoardAction::DataLoaded(data));
        let state = reduce_board_state(state, BoardAction::MoveRight);
        let state = reduce_board_state(state, BoardAction::NextGroupKey);
        assert_eq!(state.group, GroupKey::UserId);
        assert_eq!(state.current_column, 0);
        assert_eq!(state.current_row, 0);
    }

    #[test]
    fn test_view_model_empty_states() {
        let state = BoardState::default();
        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::Loading));

        let state = reduce_board_state(state, BoardAction::FetchFailed);
        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::FetchFailed));

        let state = reduce_board_state(
            BoardState::default(),
            BoardAction::DataLoaded(BoardData::default()),
        );
        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::NoTickets));
    }

    #[test]
    fn test_view_model_selection_and_avatar() {
        let data = BoardData {
            tickets: sample_tickets(),
            users: vec![User {
                id: "usr-1".to_string(),
                name: "Anoop Sharma".to_string(),
            }],
        };
        let state = reduce_board_state(BoardState::default(), BoardAction::DataLoaded(data));
        let vm = compute_board_view_model(&state, 10);
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.total_tickets, 5);
        assert!(vm.columns[0].is_active);
        assert!(vm.columns[0].cards[0].is_selected);
        assert!(!vm.columns[1].is_active);

        // Todo sorted by priority: t5 (3) first with usr-2, which has an
        // avatar but no user record, so the badge falls back to the id.
        let first = &vm.columns[0].cards[0];
        assert_eq!(first.ticket.id, "t5");
        assert!(first.avatar.is_some());

        // Grouping by user resolves the column header to the display name.
        let state = reduce_board_state(state, BoardAction::NextGroupKey);
        let vm = compute_board_view_model(&state, 10);
        assert_eq!(vm.columns[0].title, "Anoop Sharma");
        assert_eq!(vm.group_label, "User");
    }

    #[test]
    fn test_view_model_window_indicators() {
        let tickets: Vec<Ticket> = (0..12)
            .map(|i| ticket(&format!("t{i}"), &format!("Item {i}"), 2, "", "Todo"))
            .collect();
        let data = BoardData {
            tickets,
            users: vec![],
        };
        let mut state = reduce_board_state(BoardState::default(), BoardAction::DataLoaded(data));
        state.current_row = 11;
        let vm = compute_board_view_model(&state, 4);
        let col = &vm.columns[0];
        assert_eq!(col.ticket_count, 12);
        assert_eq!(col.cards.len(), 4);
        assert_eq!(col.hidden_above, 8);
        assert_eq!(col.hidden_below, 0);
        assert!(col.cards.last().unwrap().is_selected);
    }
}
