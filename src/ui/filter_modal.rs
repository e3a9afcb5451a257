use crate::app::state::AppState;
use crate::filter::FilterItem;
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.modal.visible {
        return;
    }
    let Some(catalog) = state.catalog_items() else {
        return;
    };

    let popup_area = centered_popup(frame.area(), 70, 85, 60, 20);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", state.tr.t("Filter Options")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Theme::panel_bg());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 4 || inner.width < 20 {
        return;
    }

    // List | separator | buttons
    let list_h = inner.height.saturating_sub(2);
    let list_area = Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), list_h);

    let (lines, cursor_line) = catalog_lines(
        catalog,
        state,
        list_area.width as usize,
        state.config.ui.show_descriptions,
    );
    let offset = scroll_offset(cursor_line, lines.len(), list_h as usize);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(list_h as usize).collect();
    frame.render_widget(Paragraph::new(visible), list_area);

    let total_lines = catalog_line_count(catalog, state.config.ui.show_descriptions);
    if total_lines > list_h as usize {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            list_h,
        );
        let mut scrollbar_state =
            ScrollbarState::new(total_lines.saturating_sub(list_h as usize)).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Style::default().fg(Theme::ACCENT_TEAL))
                .track_style(Style::default().fg(Theme::BORDER_DIM)),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }

    // Separator
    let sep_area = Rect::new(inner.x, inner.y + list_h, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(Theme::BORDER_DIM),
        ))),
        sep_area,
    );

    // Footer: staged count + buttons
    let footer_area = Rect::new(inner.x, inner.y + list_h + 1, inner.width, 1);
    let staged = state.modal.staged();
    let footer = Line::from(vec![
        Span::styled(
            format!(" {} {} ", state.tr.t("Selected options:"), staged.total_options()),
            Theme::description(),
        ),
        Span::raw("  "),
        Span::styled(format!(" {} [Esc] ", state.tr.t("Cancel")), Theme::button()),
        Span::raw(" "),
        Span::styled(
            format!(" {} [Enter] ", state.tr.t("Apply")),
            Theme::button_primary(),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

/// Build every line of the option list and report which line carries the
/// cursor.
fn catalog_lines<'a>(
    catalog: &'a [FilterItem],
    state: &AppState,
    width: usize,
    show_descriptions: bool,
) -> (Vec<Line<'a>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    let mut row = 0;

    for (i, item) in catalog.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(item.name.as_str(), Theme::heading())));
        if show_descriptions {
            if let Some(ref desc) = item.description {
                lines.push(Line::from(Span::styled(desc.as_str(), Theme::description())));
            }
        }

        for option in &item.options {
            let checked = state.modal.is_selected(&item.id, &option.id);
            let is_cursor = row == state.modal.cursor;
            if is_cursor {
                cursor_line = lines.len();
            }

            let mark = if checked { "[x]" } else { "[ ]" };
            let label = truncate(&option.name, width.saturating_sub(7));
            let style = if is_cursor {
                Theme::cursor()
            } else if checked {
                Theme::checked()
            } else {
                Theme::text()
            };
            let pointer = if is_cursor { "▶ " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{} {}", pointer, mark, label),
                style,
            )));

            if show_descriptions {
                if let Some(ref desc) = option.description {
                    lines.push(Line::from(Span::styled(
                        format!("      {}", truncate(desc, width.saturating_sub(6))),
                        Theme::muted(),
                    )));
                }
            }
            row += 1;
        }
    }

    (lines, cursor_line)
}

fn catalog_line_count(catalog: &[FilterItem], show_descriptions: bool) -> usize {
    catalog
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let spacer = usize::from(i > 0);
            let header = 1 + usize::from(show_descriptions && item.description.is_some());
            let options: usize = item
                .options
                .iter()
                .map(|o| 1 + usize::from(show_descriptions && o.description.is_some()))
                .sum();
            spacer + header + options
        })
        .sum()
}

/// First visible line so that `cursor_line` stays on screen, with one line of
/// context below it when there is room.
fn scroll_offset(cursor_line: usize, total: usize, height: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let wanted_bottom = (cursor_line + 2).min(total);
    wanted_bottom.saturating_sub(height)
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
