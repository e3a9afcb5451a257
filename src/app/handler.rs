use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::modal::{ApplyOutcome, GateButton};
use crate::app::state::*;
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::CatalogLoaded(items) => {
            state.catalog = CatalogState::Ready(items);
            state.dirty = true;
            vec![]
        }
        AppEvent::CatalogFailed(error) => {
            state.catalog = CatalogState::Failed(error);
            state.dirty = true;
            vec![]
        }
        AppEvent::FiltersChanged { entries, options } => {
            tracing::info!(entries, options, "committed filters changed");
            state.last_changed = Some(Local::now().format("%H:%M:%S").to_string());
            state.clamp_page_cursor();
            state.clamp_json_scroll();
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Confirmation prompt captures all input while open
    if state.modal.gate.is_open() {
        return handle_confirm_key(state, key);
    }

    if state.modal.visible {
        return handle_modal_key(state, key);
    }

    handle_page_key(state, key)
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('f') | KeyCode::Enter => {
            match state.catalog {
                CatalogState::Ready(_) => state.modal.open(&state.store),
                CatalogState::Loading => {
                    let text = state.tr.t("loading").to_string();
                    state.set_status(text, StatusKind::Info);
                }
                CatalogState::Failed(_) => {
                    let text = state.tr.t("error loading filters").to_string();
                    state.set_status(text, StatusKind::Error);
                }
            }
            vec![]
        }
        KeyCode::Up => {
            state.page_cursor = state.page_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let len = state.store.with_filters(|f| f.len());
            if state.page_cursor + 1 < len {
                state.page_cursor += 1;
            }
            vec![]
        }
        KeyCode::Delete | KeyCode::Backspace => {
            let selected = state
                .store
                .with_filters(|f| f.entries().get(state.page_cursor).map(|e| e.id.clone()));
            if let Some(filter_id) = selected {
                state.store.update_filter_option(&filter_id, Vec::<String>::new());
                state.clamp_page_cursor();
            }
            vec![]
        }
        KeyCode::Char('x') => {
            state.store.reset_filters();
            state.page_cursor = 0;
            vec![]
        }
        KeyCode::Char('e') => vec![Action::ExportFilters],
        KeyCode::Char('d') => {
            state.show_debug = !state.show_debug;
            vec![]
        }
        KeyCode::PageUp => {
            state.json_scroll = state.json_scroll.saturating_sub(10);
            vec![]
        }
        KeyCode::PageDown => {
            state.json_scroll = state.json_scroll.saturating_add(10);
            state.clamp_json_scroll();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = state.option_row_count();
    match key.code {
        KeyCode::Esc => state.modal.cancel(&state.store),
        KeyCode::Up | KeyCode::Char('k') => state.modal.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.modal.move_down(total),
        KeyCode::Home => state.modal.move_home(),
        KeyCode::End => state.modal.move_end(total),
        KeyCode::Char(' ') => {
            if let CatalogState::Ready(ref items) = state.catalog {
                state.modal.toggle_at_cursor(items);
            }
        }
        KeyCode::Char('c') => state.modal.clear_all(),
        KeyCode::Char('r') => state.modal.reset_all(),
        KeyCode::Enter | KeyCode::Char('a') => {
            let confirm = state.config.ui.confirm_before_apply;
            if state.modal.request_apply(&state.store, confirm) == ApplyOutcome::Committed {
                let text = state.tr.t("Filters applied").to_string();
                state.set_status(text, StatusKind::Info);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_confirm_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let confirmed = match key.code {
        KeyCode::Esc | KeyCode::Char('n') => {
            state.modal.cancel_confirm();
            false
        }
        KeyCode::Char('y') => state.modal.confirm_apply(&state.store),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            state.modal.gate.toggle_focus();
            false
        }
        KeyCode::Enter => match state.modal.gate.focused() {
            GateButton::Confirm => state.modal.confirm_apply(&state.store),
            GateButton::Cancel => {
                state.modal.cancel_confirm();
                false
            }
        },
        _ => false,
    };
    if confirmed {
        let text = state.tr.t("Filters applied").to_string();
        state.set_status(text, StatusKind::Info);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::filter::reducer::is_selected;
    use crate::filter::{FilterItem, FilterOption, FilterStore, SearchRequestFilter, SelectedFilter};

    fn catalog() -> Vec<FilterItem> {
        let opt = |id: &str| FilterOption {
            id: id.into(),
            name: id.into(),
            description: None,
        };
        vec![
            FilterItem {
                id: "price".into(),
                name: "Price".into(),
                description: None,
                options: vec![opt("cheap"), opt("mid")],
            },
            FilterItem {
                id: "meal".into(),
                name: "Meal".into(),
                description: None,
                options: vec![opt("bb"), opt("ai")],
            },
        ]
    }

    fn ready_state(store: FilterStore) -> AppState {
        let mut state = AppState::new(AppConfig::default(), store);
        handle_event(&mut state, AppEvent::CatalogLoaded(catalog()));
        state
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn price_cheap() -> SearchRequestFilter {
        SearchRequestFilter::from(vec![SelectedFilter::new("price", ["cheap"])])
    }

    #[test]
    fn test_cancel_discards_staged_edits() {
        let store = FilterStore::new();
        store.set_filters(price_cheap());
        let mut state = ready_state(store.clone());

        press(&mut state, KeyCode::Char('f'));
        assert!(state.modal.visible);
        // cursor 2 is meal/bb
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.modal.is_selected("meal", "bb"));
        press(&mut state, KeyCode::Esc);

        assert!(!state.modal.visible);
        assert_eq!(store.get_filters(), price_cheap());
    }

    #[test]
    fn test_apply_and_confirm_commits_staged() {
        let store = FilterStore::new();
        let mut state = ready_state(store.clone());

        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Enter);
        assert!(state.modal.gate.is_open());
        assert!(store.get_filters().is_empty());

        let staged = state.modal.staged().clone();
        press(&mut state, KeyCode::Char('y'));

        assert_eq!(store.get_filters(), staged);
        assert!(is_selected(&store.get_filters(), "price", "mid"));
        assert!(!state.modal.visible);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_enter_on_default_button_cancels_gate() {
        let store = FilterStore::new();
        let mut state = ready_state(store.clone());

        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);

        assert!(!state.modal.gate.is_open());
        assert!(state.modal.visible);
        assert!(store.get_filters().is_empty());

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert!(is_selected(&store.get_filters(), "price", "cheap"));
    }

    #[test]
    fn test_direct_apply_when_confirmation_disabled() {
        let store = FilterStore::new();
        let mut config = AppConfig::default();
        config.ui.confirm_before_apply = false;
        let mut state = AppState::new(config, store.clone());
        handle_event(&mut state, AppEvent::CatalogLoaded(catalog()));

        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char('a'));

        assert!(!state.modal.gate.is_open());
        assert!(is_selected(&store.get_filters(), "price", "cheap"));
    }

    #[test]
    fn test_modal_requires_ready_catalog() {
        let mut state = AppState::new(AppConfig::default(), FilterStore::new());
        press(&mut state, KeyCode::Char('f'));
        assert!(!state.modal.visible);

        handle_event(&mut state, AppEvent::CatalogFailed("boom".into()));
        press(&mut state, KeyCode::Enter);
        assert!(!state.modal.visible);
        assert_eq!(
            state.status_message.as_ref().map(|m| m.kind),
            Some(StatusKind::Error)
        );
    }

    #[test]
    fn test_clear_key_empties_staged() {
        let store = FilterStore::new();
        store.set_filters(price_cheap());
        let mut state = ready_state(store.clone());

        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Char('c'));
        assert!(state.modal.staged().is_empty());
        press(&mut state, KeyCode::Char('r'));
        assert!(state.modal.staged().is_empty());
        assert_eq!(store.get_filters(), price_cheap());
    }

    #[test]
    fn test_page_delete_removes_committed_entry() {
        let store = FilterStore::new();
        store.set_filters(SearchRequestFilter::from(vec![
            SelectedFilter::new("price", ["cheap"]),
            SelectedFilter::new("meal", ["bb"]),
        ]));
        let mut state = ready_state(store.clone());

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Delete);
        assert_eq!(store.get_filters(), price_cheap());
        assert_eq!(state.page_cursor, 0);

        press(&mut state, KeyCode::Char('x'));
        assert!(store.get_filters().is_empty());
    }

    #[test]
    fn test_page_actions() {
        let mut state = ready_state(FilterStore::new());
        assert_eq!(press(&mut state, KeyCode::Char('e')), vec![Action::ExportFilters]);
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);

        let show_debug = state.show_debug;
        press(&mut state, KeyCode::Char('d'));
        assert_ne!(state.show_debug, show_debug);
    }

    #[test]
    fn test_ctrl_c_quits_even_inside_modal() {
        let mut state = ready_state(FilterStore::new());
        press(&mut state, KeyCode::Char('f'));
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_page_down_stops_at_end_of_json() {
        let store = FilterStore::new();
        store.set_filters(price_cheap());
        let mut state = ready_state(store.clone());

        for _ in 0..5 {
            press(&mut state, KeyCode::PageDown);
        }
        assert_eq!(state.json_scroll, state.max_json_scroll());
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.json_scroll, 0);

        for _ in 0..5 {
            press(&mut state, KeyCode::PageDown);
        }
        store.reset_filters();
        handle_event(&mut state, AppEvent::FiltersChanged { entries: 0, options: 0 });
        assert_eq!(state.json_scroll, 0);
    }

    #[test]
    fn test_filters_changed_records_time() {
        let mut state = ready_state(FilterStore::new());
        assert!(state.last_changed.is_none());
        handle_event(&mut state, AppEvent::FiltersChanged { entries: 1, options: 2 });
        assert!(state.last_changed.is_some());
    }
}
