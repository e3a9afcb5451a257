//! The filter page behind the modal: title, open button, committed filters
//! (as an entry list and as JSON) and the debug panel.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

pub fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Line::from(Span::styled(
        state.tr.t("WinWinTravel"),
        Theme::title(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

pub fn render_open_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.modal.visible {
        Theme::button()
    } else {
        Theme::button_primary()
    };
    let label = format!("  {}  [f]  ", state.tr.t("Open Filter"));
    let width = (label.chars().count() as u16 + 2).min(area.width);
    let button_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y,
        width,
        area.height.min(3),
    );
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Style::default().fg(Theme::ACCENT_BLUE)),
        );
    frame.render_widget(button, button_area);
}

pub fn render_selected_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.tr.t("Selected Filters")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let items: Vec<ListItem> = state.store.with_filters(|filters| {
        if filters.is_empty() {
            return vec![ListItem::new(Span::styled(
                format!(" {}", state.tr.t("No filters selected")),
                Theme::muted(),
            ))];
        }
        filters
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let name = state
                    .catalog_items()
                    .and_then(|c| c.iter().find(|item| item.id == entry.id))
                    .map(|item| item.name.as_str())
                    .unwrap_or(entry.id.as_str());
                let text = format!(" {} ({})", name, entry.options_ids.len());
                let style = if i == state.page_cursor && !state.modal.visible {
                    Theme::cursor()
                } else {
                    Theme::text()
                };
                ListItem::new(Span::styled(text, style))
            })
            .collect()
    });

    frame.render_widget(List::new(items).block(block), area);
}

pub fn render_json(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.tr.t("Selected Filters (JSON)")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let json = state.store.with_filters(|f| f.to_pretty_json());
    let paragraph = match json {
        Ok(text) => Paragraph::new(
            text.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Theme::json())))
                .collect::<Vec<_>>(),
        ),
        Err(e) => Paragraph::new(Span::styled(e.to_string(), Theme::error())),
    };
    frame.render_widget(
        paragraph.block(block).scroll((state.json_scroll, 0)),
        area,
    );
}

pub fn render_debug(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.tr.t("Debug Information")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_BLUE));

    let (entries, options) = state
        .store
        .with_filters(|f| (f.len(), f.total_options()));

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {} ", state.tr.t("Number of selected filters:")),
            Theme::description(),
        ),
        Span::styled(entries.to_string(), Theme::text()),
    ])];
    if entries > 0 {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", state.tr.t("Total selected options:")),
                Theme::description(),
            ),
            Span::styled(options.to_string(), Theme::text()),
        ]));
    }
    if let Some(ref at) = state.last_changed {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", state.tr.t("Last change:")), Theme::description()),
            Span::styled(at.clone(), Theme::muted()),
            Span::styled(
                format!("  (#{})", state.store.revision()),
                Theme::muted(),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Full-page message shown while the catalog is loading or after it failed.
pub fn render_notice(frame: &mut Frame, area: Rect, text: &str, detail: Option<&str>, style: Style) {
    let mut lines = vec![Line::from(Span::styled(text.to_string(), style))];
    if let Some(detail) = detail {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(detail.to_string(), Theme::muted())));
    }
    let height = (lines.len() as u16).min(area.height);
    let notice_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height) / 2,
        area.width,
        height,
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        notice_area,
    );
}
