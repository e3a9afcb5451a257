use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct PageLayout {
    pub title: Rect,
    pub open_button: Rect,
    pub selected_list: Rect,
    pub json_panel: Rect,
    pub debug_panel: Option<Rect>,
    pub status_bar: Rect,
    pub help_bar: Rect,
}

pub fn compute_layout(area: Rect, show_debug: bool) -> PageLayout {
    let debug_height = if show_debug { 5 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(3),            // Open filter button
            Constraint::Min(5),               // Selected filters
            Constraint::Length(debug_height), // Debug info
            Constraint::Length(1),            // Status bar
            Constraint::Length(1),            // Key help
        ])
        .split(area);

    // Selected filters: entry list | JSON
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(28), Constraint::Min(30)])
        .split(main_chunks[2]);

    PageLayout {
        title: main_chunks[0],
        open_button: main_chunks[1],
        selected_list: body[0],
        json_panel: body[1],
        debug_panel: show_debug.then_some(main_chunks[3]),
        status_bar: main_chunks[4],
        help_bar: main_chunks[5],
    }
}

/// Center a popup of `pct_w`% x `pct_h`% of `area`, growing to at least
/// `min_w` x `min_h` while leaving a small margin.
pub fn centered_popup(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = percent_of(area.width, pct_w)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = percent_of(area.height, pct_h)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

fn percent_of(value: u16, pct: u16) -> u16 {
    (u32::from(value) * u32::from(pct) / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_panel_optional() {
        let area = Rect::new(0, 0, 100, 40);
        assert!(compute_layout(area, true).debug_panel.is_some());
        assert!(compute_layout(area, false).debug_panel.is_none());
    }

    #[test]
    fn test_centered_popup_fits_small_terminal() {
        let area = Rect::new(0, 0, 50, 12);
        let popup = centered_popup(area, 70, 80, 60, 20);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 46);
        assert_eq!(popup.height, 10);
    }
}
