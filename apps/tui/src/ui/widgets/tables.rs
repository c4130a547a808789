use crate::app::App;
use crate::ui::theme::{rgb, Palette};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use skillchart_core::chart::level_color;
use skillchart_core::locale::level_label;
use skillchart_core::{describe, text, UiText};

/// First row to show so that `selected_index` stays visible.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

pub fn render_skill_table(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let skills = app.board.skills();

    if skills.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));
        let paragraph = Paragraph::new(text(UiText::NoSkills, locale))
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(text(UiText::Active, locale)),
        Cell::from(text(UiText::Level, locale)),
        Cell::from(text(UiText::Weight, locale)),
        Cell::from(text(UiText::Description, locale)),
    ])
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = skills.len();
    // Borders plus header
    let max_visible_rows = usize::from(area.height.saturating_sub(3)).max(1);
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_row);

    let rows = skills
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, skill)| {
            let style = if index == app.selected_row {
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg)
                    .add_modifier(Modifier::BOLD)
            } else if skill.active {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.muted)
            };

            let level = skill.level.map_or("-", |level| level_label(level, locale));
            let level_style = skill.level.map_or(style, |level| {
                if index == app.selected_row {
                    style
                } else {
                    style.fg(rgb(level_color(level, 0.5).to_rgb()))
                }
            });

            Row::new(vec![
                Cell::from(if skill.active { "[x]" } else { "[ ]" }),
                Cell::from(level).style(level_style),
                Cell::from(skill.weight.to_string()),
                Cell::from(describe(skill, locale).to_string()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} of {} ", app.selected_row + 1, total_rows))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::scroll_offset;

    #[test]
    fn no_scroll_when_everything_fits() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn keeps_selection_on_the_last_visible_row() {
        assert_eq!(scroll_offset(30, 10, 9), 0);
        assert_eq!(scroll_offset(30, 10, 10), 1);
        assert_eq!(scroll_offset(30, 10, 29), 20);
    }
}
