use crate::app::App;
use crate::ui::theme::{rgb, Palette};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use skillchart_core::chart::canvas::{FLOWER_BOUNDS, ROSE_BOUNDS};
use skillchart_core::chart::rose::{CENTER, CENTER_RADIUS};
use skillchart_core::chart::svg::flower_label;
use skillchart_core::chart::{
    flower_strokes, rose_strokes, square_cells, FlowerChart, Ink, RoseChart, Stroke,
};
use skillchart_core::{text, ChartStyle, UiText};

const fn ink_color(ink: Ink, palette: &Palette) -> Color {
    match ink {
        Ink::Color(color) => rgb(color),
        Ink::Inactive => palette.inactive,
        Ink::Guide => palette.border,
    }
}

fn draw_strokes(ctx: &mut Context<'_>, strokes: &[Stroke], palette: &Palette) {
    for stroke in strokes {
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
}

/// Centers the largest round-looking canvas inside `area`.
fn square_area(area: Rect) -> Rect {
    let (width, height) = square_cells(area.width, area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let titles = ChartStyle::ALL
        .iter()
        .map(|style| TextLine::from(style.label(locale)))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.settings.chart_style.index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

pub fn render_chart_panel(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let locale = app.locale();
    let title = match app.settings.chart_style {
        ChartStyle::Rose => text(UiText::RoseChart, locale).to_string(),
        ChartStyle::Flower => flower_label(&FlowerChart::layout(&app.board.summary()), locale),
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 4 {
        return;
    }

    if app.board.skills().is_empty() {
        let paragraph = Paragraph::new(text(UiText::NoSkills, locale))
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));
        f.render_widget(paragraph, inner);
        return;
    }

    match app.settings.chart_style {
        ChartStyle::Rose => render_rose(app, f, square_area(inner), palette),
        ChartStyle::Flower => render_flower(app, f, square_area(inner), palette),
    }
}

fn render_rose(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let chart = RoseChart::layout(app.board.skills());
    let strokes = rose_strokes(&chart, &app.reveal(), app.reveal_elapsed_ms);
    let pulse = app.animation_counter.sin().mul_add(0.06, 0.94);
    let label = format!("{}%", app.board.summary().percentage);
    let label_x = CENTER - 4.0 * label.len() as f64;

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.background)
            .paint(|ctx| {
                draw_strokes(ctx, &strokes, palette);
                ctx.layer();

                ctx.draw(&Circle {
                    x: CENTER,
                    y: CENTER,
                    radius: (CENTER_RADIUS - 2.0) * pulse,
                    color: palette.accent,
                });
                ctx.print(
                    label_x,
                    CENTER,
                    Span::styled(
                        label.clone(),
                        Style::default()
                            .fg(palette.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            })
            .x_bounds(ROSE_BOUNDS)
            .y_bounds(ROSE_BOUNDS),
        area,
    );
}

fn render_flower(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let strokes = flower_strokes(&FlowerChart::layout(&app.board.summary()));
    let pulse = app.animation_counter.sin().mul_add(0.1, 1.0);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.background)
            .paint(|ctx| {
                draw_strokes(ctx, &strokes, palette);
                ctx.layer();

                ctx.draw(&Circle {
                    x: CENTER,
                    y: CENTER,
                    radius: 18.0 * pulse,
                    color: Color::Rgb(255, 165, 0),
                });
                ctx.draw(&Circle {
                    x: CENTER,
                    y: CENTER,
                    radius: 10.0,
                    color: Color::Rgb(139, 69, 19),
                });
            })
            .x_bounds(FLOWER_BOUNDS)
            .y_bounds(FLOWER_BOUNDS),
        area,
    );
}
