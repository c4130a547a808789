use crate::app::App;
use crate::ui::theme::{rgb, Palette};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge};
use ratatui::Frame;
use skillchart_core::chart::level_color;
use skillchart_core::locale::level_label;
use skillchart_core::{text, UiText};

pub fn render_score_card(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let summary = app.board.summary();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", text(UiText::YourScore, locale)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .gauge_style(Style::default().fg(palette.accent).bg(palette.inactive))
        .percent(u16::try_from(summary.percentage.min(100)).unwrap_or(100))
        .label(Span::styled(
            format!("{} / {}  ({}%)", summary.total, summary.max, summary.percentage),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, layout[0]);

    render_level_bars(app, f, layout[1], palette);
}

/// Achieved weight per level, as a share of what the level could score.
fn render_level_bars(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let breakdown = app.board.breakdown();

    let bars: Vec<Bar<'_>> = breakdown
        .iter()
        .map(|score| {
            let color = rgb(level_color(score.level, 0.5).to_rgb());
            Bar::default()
                .value(u64::from(score.percentage()))
                .text_value(format!("{}/{}", score.achieved, score.possible))
                .label(TextLine::from(level_label(score.level, locale)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(palette.highlight_fg)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_width = area.width.saturating_sub(2).saturating_sub(3) / 4;

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ", text(UiText::Level, locale)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(1)
        .bar_width(bar_width.clamp(3, 12));

    f.render_widget(chart, area);
}
