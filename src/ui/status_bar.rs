use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let (text, style) = match state.status_message {
        Some(ref msg) if msg.kind == StatusKind::Error => (
            msg.text.clone(),
            Style::default().fg(Theme::ACCENT_RED).bg(Theme::BORDER_DIM),
        ),
        _ => (state.status_line(), Theme::status_bar()),
    };
    parts.push(Span::styled(format!(" {} ", text), style));

    // Mode indicator
    let mode = if state.modal.gate.is_open() {
        "CONFIRM"
    } else if state.modal.visible {
        "FILTERS"
    } else {
        "PAGE"
    };
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + mode.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", mode),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BORDER_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

pub fn render_help(frame: &mut Frame, area: Rect, state: &AppState) {
    let keys: &[(&str, &str)] = if state.modal.gate.is_open() {
        &[("y", "Confirm"), ("n/Esc", "Cancel"), ("←→", "Choose")]
    } else if state.modal.visible {
        &[
            ("↑↓", "Move"),
            ("Space", "Toggle"),
            ("c", "Clear all"),
            ("r", "Reset"),
            ("Enter", "Apply"),
            ("Esc", "Cancel"),
        ]
    } else {
        &[
            ("f", "Open Filter"),
            ("↑↓", "Select"),
            ("Del", "Remove"),
            ("x", "Reset"),
            ("e", "Export"),
            ("d", "Debug"),
            ("q", "Quit"),
        ]
    };

    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(
            format!(" {} ", state.tr.t(label)),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
