use crate::app::App;
use crate::cli::CliArgs;
use crate::ui::theme::Palette;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use skillchart_core::{text, UiText};

const KEYS: [(&str, &str); 14] = [
    ("?/F1", "Toggle this help popup"),
    ("↑/↓", "Move through the checklist"),
    ("PgUp/PgDn", "Move a page at a time"),
    ("Home/End", "Jump to the first or last skill"),
    ("Space/Enter", "Toggle the selected skill"),
    ("a", "Activate or deactivate every skill"),
    ("←/→ Tab", "Previous or next category"),
    ("1-9", "Jump to a category"),
    ("c", "Switch between rose and flower chart"),
    ("l", "Switch language (English/Korean)"),
    ("d", "Toggle dark mode"),
    ("p", "Pause or resume animations"),
    ("s / e", "Export the chart as SVG / the score as JSON"),
    ("q", "Quit"),
];

fn build_help_lines(app: &App, palette: &Palette) -> Vec<TextLine<'static>> {
    let locale = app.locale();
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(vec![Span::styled(
            format!(
                "{} - {}",
                text(UiText::AppTitle, locale),
                text(UiText::Subtitle, locale)
            ),
            Style::default()
                .fg(palette.border)
                .add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "Mark the skills you have. Each level weighs more than the one below it and the chart grows with your score.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    lines.extend(KEYS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(format!("  {keys}"), key_style),
            Span::raw(format!(" - {action}")),
        ])
    }));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![Span::styled(
        "Command line:",
        Style::default().add_modifier(Modifier::BOLD),
    )]));
    lines.extend(
        CliArgs::help_text()
            .lines()
            .map(|line| TextLine::from(line.to_string())),
    );

    lines
}

pub fn render_help_popup(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_settings(&app.settings);
    let popup_area = centered_rect(80, 80, f.area());
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines(app, &palette)))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(palette.muted),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}
