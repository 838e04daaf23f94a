//! Interactive board view (`plank board`)
//!
//! Renders the fetched tickets as columns for the active grouping key,
//! sorted by the active sort key, with selectors for both in the header.

pub mod handlers;
pub mod model;

use iocraft::prelude::*;

use crate::prefs::{PrefStore, Preferences};
use crate::remote::QuicksellClient;
use crate::tui::components::{
    EmptyState, Footer, Select, Selectable, TicketCard, board_shortcuts, empty_shortcuts,
};
use crate::tui::hooks::use_board_loader;
use crate::tui::theme::theme;
use crate::types::{GroupKey, SortKey};

use handlers::key_to_action;
use model::{BoardAction, BoardState, compute_board_view_model, reduce_board_state};

/// Props for the Board component
#[derive(Default, Props)]
pub struct BoardProps {
    /// Preference store; `None` falls back to the default location
    pub store: Option<PrefStore>,
    /// Board source; `None` falls back to the default endpoint
    pub source: Option<QuicksellClient>,
}

/// Main board component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Plank      10 tickets  Group: ◀ Status ▶ |
/// +--------+--------+--------+--------+------+
/// |  Todo  |  In p. | Backlog|  Done  | Canc |
/// |   3    |   1    |   2    |   5    |  1   |
/// +--------+--------+--------+--------+------+
/// | Card1  | Card1  | Card1  | Card1  | Card |
/// | Card2  | ...    | Card2  | Card2  | ...  |
/// +--------+--------+--------+--------+------+
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Board<'a>(props: &BoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let store = props.store.clone().unwrap_or_default();
    let source = props.source.clone().unwrap_or_default();

    // Preferences are read once at startup and written back on change.
    let initial_prefs: State<Preferences> = hooks.use_state(|| store.load());
    let state: State<BoardState> =
        hooks.use_state(|| BoardState::with_prefs(initial_prefs.get()));
    let mut persisted: State<(GroupKey, SortKey)> =
        hooks.use_state(|| (initial_prefs.get().group, initial_prefs.get().sort));
    let should_exit = hooks.use_state(|| false);

    // Async load handler with minimum 100ms display time to prevent UI flicker
    let load_handler: Handler<()> =
        hooks.use_async_handler(use_board_loader(state, source.clone()));

    // Trigger the one startup fetch on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    // Keyboard event handling
    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut state = state;
                let mut should_exit = should_exit;
                if let Some(action) = key_to_action(code, modifiers) {
                    if action == BoardAction::Quit {
                        should_exit.set(true);
                    } else {
                        let next = reduce_board_state(state.read().clone(), action);
                        state.set(next);
                    }
                }
            }
            _ => {}
        }
    });

    // Persist preference changes as they happen. A write failure degrades
    // to in-memory preferences for the rest of the session.
    let (group, sort) = {
        let s = state.read();
        (s.group, s.sort)
    };
    if persisted.get() != (group, sort) {
        persisted.set((group, sort));
        if let Err(e) = store.save(&Preferences { group, sort }) {
            tracing::warn!("failed to persist preferences: {e}");
        }
    }

    // Exit if requested
    if should_exit.get() {
        system.exit();
    }

    // Each card takes up to 6 lines (border, id, title, tag); reserve rows
    // for the header, column headers, and footer.
    let available_height = height.saturating_sub(5);
    let cards_per_column = (available_height / 6).max(1) as usize;

    let vm = compute_board_view_model(&state.read(), cards_per_column);

    let ncols = vm.columns.len().max(1) as u32;
    let card_width = (width as u32 / ncols).saturating_sub(2);

    let shortcuts = if vm.empty_state.is_some() {
        empty_shortcuts()
    } else {
        board_shortcuts()
    };

    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header with group/sort selectors
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: "Plank - Board",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    Text(
                        content: format!("{} tickets", vm.total_tickets),
                        color: theme.text_dimmed,
                    )
                    Select(label: "Group".to_string(), value: group.display())
                    Select(label: "Sort".to_string(), value: sort.display())
                }
            }

            #(if let Some(kind) = vm.empty_state {
                // Full-screen empty state
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind: kind)
                    }
                })
            } else {
                None
            })

            #(if vm.empty_state.is_none() {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                        overflow: Overflow::Hidden,
                    ) {
                        // Column headers
                        View(
                            width: 100pct,
                            height: 2,
                            flex_direction: FlexDirection::Row,
                            margin_top: 1,
                        ) {
                            #(vm.columns.iter().map(|col| {
                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        flex_direction: FlexDirection::Column,
                                        align_items: AlignItems::Center,
                                        border_edges: Edges::Bottom,
                                        border_style: BorderStyle::Single,
                                        border_color: if col.is_active { theme.border_focused } else { theme.border },
                                    ) {
                                        Text(
                                            content: col.title.clone(),
                                            color: if col.is_active { theme.text } else { theme.text_dimmed },
                                            weight: if col.is_active { Weight::Bold } else { Weight::Normal },
                                        )
                                        Text(
                                            content: col.ticket_count.to_string(),
                                            color: theme.text_dimmed,
                                        )
                                    }
                                }
                            }))
                        }

                        // Column content
                        View(
                            flex_grow: 1.0,
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            overflow: Overflow::Hidden,
                        ) {
                            #(vm.columns.iter().map(|col| {
                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        height: 100pct,
                                        flex_direction: FlexDirection::Column,
                                        padding_left: 1,
                                        padding_right: 1,
                                        border_edges: Edges::Right,
                                        border_style: BorderStyle::Single,
                                        border_color: theme.border,
                                        overflow: Overflow::Hidden,
                                    ) {
                                        // "More above" indicator
                                        #(if col.hidden_above > 0 {
                                            Some(element! {
                                                View(height: 1, padding_left: 1) {
                                                    Text(
                                                        content: format!("  {} more above", col.hidden_above),
                                                        color: theme.text_dimmed,
                                                    )
                                                }
                                            })
                                        } else {
                                            None
                                        })

                                        // Visible cards
                                        #(col.cards.iter().map(|card| {
                                            element! {
                                                View(margin_top: 1) {
                                                    TicketCard(
                                                        ticket: card.ticket.clone(),
                                                        avatar: card.avatar.clone(),
                                                        is_selected: card.is_selected,
                                                        width: Some(card_width),
                                                    )
                                                }
                                            }
                                        }))

                                        // Spacer to push "more below" to bottom
                                        View(flex_grow: 1.0)

                                        // "More below" indicator
                                        #(if col.hidden_below > 0 {
                                            Some(element! {
                                                View(height: 1, padding_left: 1) {
                                                    Text(
                                                        content: format!("  {} more below", col.hidden_below),
                                                        color: theme.text_dimmed,
                                                    )
                                                }
                                            })
                                        } else {
                                            None
                                        })
                                    }
                                }
                            }))
                        }
                    }
                })
            } else {
                None
            })

            // Footer
            Footer(shortcuts: shortcuts)
        }
    }
}
