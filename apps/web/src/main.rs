mod animation;
mod state;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table,
        Tabs, Wrap,
    },
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use skillchart_core::catalog::CatalogDocument;
use skillchart_core::chart::canvas::{FLOWER_BOUNDS, ROSE_BOUNDS};
use skillchart_core::chart::rose::CENTER;
use skillchart_core::chart::svg::flower_label;
use skillchart_core::chart::{
    flower_strokes, level_color, rose_strokes, square_cells, FlowerChart, Ink, Reveal, Rgb,
    RoseChart,
};
use skillchart_core::locale::level_label;
use skillchart_core::{describe, text, Catalog, ChartStyle, UiText};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::animation::AnimationMode;
use crate::state::{window_start, WebState};

const CATALOG_URL: &str = "catalog.json";

#[derive(Clone, Copy)]
struct Colors {
    background: Color,
    text: Color,
    muted: Color,
    border: Color,
    accent: Color,
    inactive: Color,
}

const fn colors(dark_mode: bool) -> Colors {
    if dark_mode {
        Colors {
            background: Color::Rgb(17, 24, 39),
            text: Color::Rgb(229, 231, 235),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(75, 85, 99),
            accent: Color::Rgb(96, 165, 250),
            inactive: Color::Rgb(55, 65, 81),
        }
    } else {
        Colors {
            background: Color::Rgb(255, 255, 255),
            text: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(203, 213, 225),
            accent: Color::Rgb(37, 99, 235),
            inactive: Color::Rgb(226, 232, 240),
        }
    }
}

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn main() -> io::Result<()> {
    let catalog = Catalog::builtin().map_err(io::Error::other)?;
    let state = Rc::new(RefCell::new(WebState::new(catalog)));

    spawn_local(fetch_catalog(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| state.borrow_mut().handle_key(event.code)
    });

    terminal.draw_web(move |f| {
        let mut state = state.borrow_mut();
        state.tick(js_sys::Date::now() / 1000.0);
        render_dashboard(&state, f);
    });

    Ok(())
}

fn render_dashboard(state: &WebState, f: &mut Frame<'_>) {
    let palette = colors(state.settings.dark_mode);
    let locale = state.settings.locale;
    let area = f.area();

    let block = Block::default()
        .title(format!(
            " {} - {} ",
            text(UiText::AppTitle, locale),
            text(UiText::Subtitle, locale)
        ))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(inner);

    render_category_tabs(state, &palette, f, main_layout[0]);
    render_score(state, &palette, f, main_layout[1]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[2]);

    render_chart_panel(state, &palette, f, content[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(content[1]);

    render_level_chart(state, &palette, f, side[0]);
    render_skill_rows(state, &palette, f, side[1]);
    render_footer(state, &palette, f, main_layout[3]);

    if state.show_help {
        render_help(&palette, f, area);
    }
}

fn render_category_tabs(state: &WebState, palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let locale = state.settings.locale;
    let titles = state
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
        .select(state.board.category_index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_score(state: &WebState, palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let locale = state.settings.locale;
    let summary = state.board.summary();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(text(UiText::YourScore, locale))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .gauge_style(Style::default().fg(palette.accent).bg(palette.inactive))
        .percent(u16::try_from(summary.percentage.min(100)).unwrap_or(100))
        .label(format!(
            "{} / {}  ({}%)",
            summary.total, summary.max, summary.percentage
        ));

    f.render_widget(gauge, area);
}

const fn ink_color(ink: Ink, palette: &Colors) -> Color {
    match ink {
        Ink::Color(color) => rgb(color),
        Ink::Inactive => palette.muted,
        Ink::Guide => palette.border,
    }
}

fn square_area(area: Rect) -> Rect {
    let (width, height) = square_cells(area.width, area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_chart_panel(state: &WebState, palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let locale = state.settings.locale;
    let summary = state.board.summary();
    let flower = FlowerChart::layout(&summary);
    let title = match state.settings.chart_style {
        ChartStyle::Rose => text(UiText::RoseChart, locale).to_string(),
        ChartStyle::Flower => flower_label(&flower, locale),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.board.skills().is_empty() {
        let paragraph = Paragraph::new(text(UiText::NoSkills, locale))
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));
        f.render_widget(paragraph, inner);
        return;
    }

    let (strokes, bounds) = match state.settings.chart_style {
        ChartStyle::Rose => {
            let chart = RoseChart::layout(state.board.skills());
            let reveal = Reveal::new(state.board.last_change());
            (
                rose_strokes(&chart, &reveal, state.reveal.elapsed_ms()),
                ROSE_BOUNDS,
            )
        }
        ChartStyle::Flower => (flower_strokes(&flower), FLOWER_BOUNDS),
    };
    let pulse = state.animation_counter.sin().mul_add(0.08, 1.0);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.background)
            .paint(|ctx| {
                for stroke in &strokes {
                    let color = ink_color(stroke.ink, palette);
                    for ((x1, y1), (x2, y2)) in stroke.segments() {
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        });
                    }
                }
                ctx.layer();
                ctx.draw(&Circle {
                    x: CENTER,
                    y: CENTER,
                    radius: 20.0 * pulse,
                    color: palette.accent,
                });
                if state.settings.chart_style == ChartStyle::Rose {
                    ctx.print(
                        CENTER - 8.0,
                        CENTER,
                        Span::styled(
                            format!("{}%", summary.percentage),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            })
            .x_bounds(bounds)
            .y_bounds(bounds),
        square_area(inner),
    );
}

fn render_level_chart(state: &WebState, palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let locale = state.settings.locale;
    let breakdown = state.board.breakdown();

    let bars = breakdown
        .iter()
        .map(|score| {
            let color = rgb(level_color(score.level, 0.5).to_rgb());
            Bar::default()
                .value(u64::from(score.percentage()))
                .text_value(format!("{}/{}", score.achieved, score.possible))
                .label(TextLine::from(level_label(score.level, locale)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(palette.background).bg(color))
        })
        .collect::<Vec<_>>();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(text(UiText::Level, locale))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max(100);

    f.render_widget(chart, area);
}

fn render_skill_rows(state: &WebState, palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let locale = state.settings.locale;
    let skills = state.board.skills();

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

    let visible = usize::from(area.height.saturating_sub(3)).max(1);
    let offset = window_start(skills.len(), visible, state.selected_row);

    let rows = skills
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, skill)| {
            let style = if index == state.selected_row {
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if skill.active {
                Style::default().fg(palette.text)
            } else {
                Style::default().fg(palette.muted)
            };

            Row::new(vec![
                Cell::from(if skill.active { "[x]" } else { "[ ]" }),
                Cell::from(skill.level.map_or("-", |level| level_label(level, locale))),
                Cell::from(skill.weight.to_string()),
                Cell::from(describe(skill, locale).to_string()),
            ])
            .style(style)
        })
        .collect::<Vec<_>>();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(
                "{} {} / {}",
                state.board.category().map_or("", |category| category.label(locale)),
                state.selected_row.min(skills.len().saturating_sub(1)) + 1,
                skills.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );

    f.render_widget(table, area);
}

fn render_footer(state: &WebState, palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![
        Span::styled("Space", Style::default().fg(palette.accent)),
        Span::raw(" toggle  "),
        Span::styled("a", Style::default().fg(palette.accent)),
        Span::raw(" all  "),
        Span::styled("←/→ 1-9", Style::default().fg(palette.accent)),
        Span::raw(" category  "),
        Span::styled("c l d p", Style::default().fg(palette.accent)),
        Span::raw(" chart/language/theme/pause  "),
        Span::styled("?", Style::default().fg(palette.accent)),
        Span::raw(" help"),
    ];
    if state.animation_mode == AnimationMode::Paused {
        spans.push(Span::styled("  Animation paused", Style::default().fg(palette.muted)));
    }
    if !state.fetched_catalog {
        spans.push(Span::styled("  built-in catalog", Style::default().fg(palette.muted)));
    }

    let paragraph = Paragraph::new(TextLine::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));
    f.render_widget(paragraph, area);
}

fn render_help(palette: &Colors, f: &mut Frame<'_>, area: Rect) {
    let width = area.width * 3 / 5;
    let height = 14.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines = [
        ("↑/↓ PgUp/PgDn", "move through the checklist"),
        ("Space/Enter", "toggle the selected skill"),
        ("a", "activate or deactivate every skill"),
        ("←/→ Tab 1-9", "switch category"),
        ("c", "rose or flower chart"),
        ("l", "English / 한국어"),
        ("d", "dark mode"),
        ("p", "pause animations"),
        ("Esc ?", "close this help"),
    ]
    .into_iter()
    .map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("  {keys}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {action}")),
        ])
    })
    .collect::<Vec<_>>();

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title("Help & Keyboard Shortcuts")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .style(Style::default().bg(palette.background).fg(palette.text)),
            )
            .wrap(Wrap { trim: true }),
        popup,
    );
}

async fn fetch_catalog(store: Rc<RefCell<WebState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init(CATALOG_URL, &opts) else {
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return;
    };

    // No catalog.json next to the page means the built-in list stays.
    if !response.ok() {
        return;
    }

    let Ok(body) = response.json() else {
        web_sys::console::error_1(&"catalog.json body is not JSON".into());
        return;
    };

    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body).await else {
        web_sys::console::error_1(&"Failed to read catalog.json body".into());
        return;
    };

    let document = match serde_wasm_bindgen::from_value::<CatalogDocument>(json) {
        Ok(document) => document,
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse catalog.json: {error}").into());
            return;
        }
    };

    match Catalog::from_document(document) {
        Ok(catalog) => store.borrow_mut().replace_catalog(catalog),
        Err(error) => {
            web_sys::console::error_1(&format!("Invalid catalog.json: {error}").into());
        }
    }
}
