//! Bar chart rendering.
//!
//! Redraws the whole chart from one snapshot: bar height is the value, bar
//! color comes from the snapshot's highlight tag.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::sort::Snapshot;

/// Render the chart for the current frame, or a hint when there is no data.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.algorithm.label()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref snapshot) = app.frame else {
        render_hint(frame, inner, "Press g to generate data");
        return;
    };
    if snapshot.is_empty() {
        render_hint(frame, inner, "Nothing to sort");
        return;
    }

    frame.render_widget(bar_chart(snapshot, app, inner.width), inner);
}

fn render_hint(frame: &mut Frame, area: Rect, text: &str) {
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y, area.width, area.height.min(1));
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, line_area);
}

fn bar_chart<'a>(snapshot: &Snapshot<u32>, app: &App, width: u16) -> BarChart<'a> {
    let bars: Vec<Bar> = snapshot
        .bars()
        .map(|(value, tag)| {
            Bar::default()
                .value(u64::from(*value))
                .text_value(String::new())
                .style(app.theme.bar_style(tag))
        })
        .collect();

    let (bar_width, bar_gap) = bar_layout(width, snapshot.len());
    // Fixed scale so bars keep their height from frame to frame
    let max = snapshot
        .values
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(app.settings.max_value);

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(max))
}

/// Widest bars (with a one-column gap when it fits) that put `count` bars in `width`.
///
/// Falls back to one-column bars with no gap when space is tight; bars past
/// the right edge are clipped.
pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);

    // Each bar takes `bar_width + gap`, except the last which has no gap
    let with_gap = (width.saturating_add(1)) / count;
    if with_gap >= 2 {
        return (with_gap - 1, 1);
    }
    ((width / count).max(1), 0)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::data::DataGenerator;
    use crate::settings::Settings;
    use crate::ui::Theme;

    #[test]
    fn test_bar_layout_with_gap() {
        // 60 bars in 180 columns: 2 wide + 1 gap
        assert_eq!(bar_layout(180, 60), (2, 1));
        assert_eq!(bar_layout(119, 60), (1, 1));
    }

    #[test]
    fn test_bar_layout_tight() {
        assert_eq!(bar_layout(80, 60), (1, 0));
        assert_eq!(bar_layout(20, 60), (1, 0));
        assert_eq!(bar_layout(10, 0), (1, 0));
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_hint_without_data() {
        let settings = Settings::default();
        let generator = DataGenerator::seeded(settings.array_len, settings.value_range(), 1);
        let app = App::new(settings, generator, Theme::dark());

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| render(f, &app, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Bubble Sort"));
        assert!(text.contains("Press g to generate data"));
    }

    #[test]
    fn test_render_bars_with_tag_colors() {
        let settings = Settings::default();
        let generator = DataGenerator::seeded(settings.array_len, settings.value_range(), 1);
        let mut app = App::new(settings, generator, Theme::dark());
        app.frame = Some(Snapshot::marking(
            vec![100, 100],
            &[1],
            crate::sort::Highlight::Active,
        ));

        let mut terminal = Terminal::new(TestBackend::new(10, 6)).unwrap();
        terminal.draw(|f| render(f, &app, f.area())).unwrap();

        // Inner area is 8x4 starting at (1, 1); full-height bars cover every row
        let buffer = terminal.backend().buffer();
        let (bar_width, bar_gap) = bar_layout(8, 2);
        let row = 2;
        let first = buffer[(1, row)].fg;
        let second = buffer[(1 + bar_width + bar_gap, row)].fg;
        assert_eq!(first, app.theme.neutral);
        assert_eq!(second, app.theme.active);
    }
}
