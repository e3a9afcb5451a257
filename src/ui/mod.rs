mod confirm_dialog;
mod filter_modal;
mod layout;
mod page;
mod status_bar;
mod theme;

use crate::app::state::{AppState, CatalogState};
use ratatui::prelude::*;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let page_layout = layout::compute_layout(area, state.show_debug);

    page::render_title(frame, page_layout.title, state);

    let body = Rect::new(
        area.x,
        page_layout.open_button.y,
        area.width,
        page_layout.status_bar.y.saturating_sub(page_layout.open_button.y),
    );
    match &state.catalog {
        CatalogState::Loading => {
            page::render_notice(frame, body, state.tr.t("loading"), None, Theme::description());
        }
        CatalogState::Failed(error) => {
            page::render_notice(
                frame,
                body,
                state.tr.t("error loading filters"),
                Some(error.as_str()),
                Theme::error(),
            );
        }
        CatalogState::Ready(_) => {
            page::render_open_button(frame, page_layout.open_button, state);
            page::render_selected_list(frame, page_layout.selected_list, state);
            page::render_json(frame, page_layout.json_panel, state);
            if let Some(debug_area) = page_layout.debug_panel {
                page::render_debug(frame, debug_area, state);
            }
        }
    }

    status_bar::render(frame, page_layout.status_bar, state);
    status_bar::render_help(frame, page_layout.help_bar, state);

    filter_modal::render(frame, state);
    confirm_dialog::render(frame, state);
}
