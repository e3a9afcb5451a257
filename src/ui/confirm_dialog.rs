use crate::app::modal::GateButton;
use crate::app::state::AppState;
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.modal.gate.is_open() {
        return;
    }

    let popup_area = centered_popup(frame.area(), 40, 30, 44, 9);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", state.tr.t("Confirm Changes")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_AMBER))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        return;
    }

    let text_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
    let description = Paragraph::new(Span::styled(
        state
            .tr
            .t("Are you sure you want to apply these filter changes?"),
        Theme::text(),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(description, text_area);

    let focused = state.modal.gate.focused();
    let button_style = |button: GateButton| {
        if button == focused {
            Theme::button_primary()
        } else {
            Theme::button()
        }
    };
    let buttons = Line::from(vec![
        Span::styled(
            format!(" {} [n] ", state.tr.t("Cancel")),
            button_style(GateButton::Cancel),
        ),
        Span::raw("   "),
        Span::styled(
            format!(" {} [y] ", state.tr.t("Confirm")),
            button_style(GateButton::Confirm),
        ),
    ])
    .alignment(Alignment::Center);
    let buttons_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    frame.render_widget(Paragraph::new(buttons), buttons_area);
}
