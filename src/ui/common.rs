//! Common UI components around the chart.
//!
//! This module contains the header bar, algorithm tabs, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, StatusKind};
use crate::data::duration::format_speed;
use crate::sort::Algorithm;

/// Render the header bar.
///
/// Displays: run state indicator, array size, step delay, elapsed-time readout.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status_label, status_style) = if app.is_sorting() {
        ("sorting", Style::default().fg(app.theme.active))
    } else if app.last_failure.is_some() {
        (
            "failed",
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )
    } else if app.data.is_some() {
        ("ready", Style::default().fg(app.theme.committed))
    } else {
        ("no data", Style::default().add_modifier(Modifier::DIM))
    };

    let size = match app.data {
        Some(ref data) => format!("{} values", data.len()),
        None => "-".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("SORTSCOPE ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(status_label, status_style),
        Span::raw(" │ "),
        Span::raw(size),
        Span::raw(" │ Delay: "),
        Span::styled(
            format!("{}/step", format_speed(app.speed())),
            Style::default().fg(app.theme.highlight),
        ),
        Span::raw(" │ "),
        Span::styled(app.readout(), Style::default().add_modifier(Modifier::BOLD)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the algorithm tabs.
///
/// Highlights the algorithm the next run will use.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| Line::from(format!(" {}:{} ", i + 1, a.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.algorithm.index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows a temporary status message if one is pending, otherwise the controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some((msg, kind)) = app.get_status_message() {
        let style = match kind {
            StatusKind::Error => Style::default().fg(app.theme.error),
            StatusKind::Info => Style::default().fg(app.theme.highlight),
        };
        let paragraph = Paragraph::new(format!(" {} ", msg)).style(style);
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.is_sorting() {
        " x:cancel +/-:delay g:new data ?:help q:quit"
    } else if app.data.is_some() {
        " Enter:start g:new data ←→:algorithm +/-:delay e:export ?:help q:quit"
    } else {
        " g:generate data ←→:algorithm +/-:delay ?:help q:quit"
    };

    let paragraph = Paragraph::new(controls).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the chart.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Algorithm",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Previous/next"),
        Line::from("  Tab         Next"),
        Line::from("  1-4         Select directly"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Playback",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  g           Generate data"),
        Line::from("  Enter/Space Start sorting"),
        Line::from("  x           Cancel sorting"),
        Line::from("  +/- ↑/↓     Longer/shorter delay"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  e           Export to JSON"),
        Line::from("  q/Esc       Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
