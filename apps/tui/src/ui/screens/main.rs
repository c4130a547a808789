use crate::app::App;
use crate::ui::theme::Palette;
use crate::ui::widgets::chart::{render_chart_panel, render_chart_tabs};
use crate::ui::widgets::score::render_score_card;
use crate::ui::widgets::tables::render_skill_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use skillchart_core::{text, UiText};

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_settings(&app.settings);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Categories
            Constraint::Min(8),    // Score, chart and checklist
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0], &palette);
    render_category_tabs(app, f, main_layout[1], &palette);
    render_content_section(app, f, main_layout[2], &palette);
    render_status_section(app, f, main_layout[3], &palette);
    render_shortcuts(f, main_layout[4], &palette);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            format!("{} ", text(UiText::AppTitle, locale)),
            Style::default()
                .fg(palette.border)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            text(UiText::Subtitle, locale),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );

    f.render_widget(title, area);
}

fn render_category_tabs(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let titles = app
        .board
        .catalog()
        .categories()
        .iter()
        .enumerate()
        .map(|(index, category)| {
            TextLine::from(format!("{} {}", index + 1, category.label(locale)))
        })
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .select(app.board.category_index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(1),
            Constraint::Min(6),
        ])
        .split(horizontal_split[0]);

    render_score_card(app, f, left_split[0], palette);
    render_chart_tabs(app, f, left_split[1], palette);
    render_chart_panel(app, f, left_split[2], palette);
    render_skill_table(app, f, horizontal_split[1], palette);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(palette.accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            if app.animation_paused {
                "Animation paused"
            } else {
                ""
            },
            Style::default().fg(palette.muted),
        ))
    } else {
        let style = if app.status_is_error {
            Style::default().fg(palette.error)
        } else {
            Style::default().fg(palette.success)
        };

        Text::from(Span::styled(app.status_message.as_str(), style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn shortcuts_line(palette: &Palette) -> TextLine<'static> {
    let key = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(palette.muted);

    let pairs = [
        ("Space", "toggle"),
        ("a", "all"),
        ("←/→", "category"),
        ("c", "chart"),
        ("l", "language"),
        ("d", "dark"),
        ("s/e", "export"),
        ("?", "help"),
        ("q", "quit"),
    ];

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (shortcut, action) in pairs {
        spans.push(Span::styled(shortcut, key));
        spans.push(Span::styled(format!(" {action}  "), label));
    }
    TextLine::from(spans)
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let shortcuts_paragraph = Paragraph::new(shortcuts_line(palette)).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}
