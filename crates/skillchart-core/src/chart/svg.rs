//! Standalone SVG documents for the rose and flower charts. The markup is
//! what an exporter rasterizes, and what a browser front end can inline.

use std::fmt::Write;

use crate::board::BatchOutcome;
use crate::chart::color::{level_color, INACTIVE_STROKE};
use crate::chart::flower::FlowerChart;
use crate::chart::reveal::{RevealTiming, TRANSITION_MS};
use crate::chart::rose::{
    RoseChart, CENTER, CENTER_RADIUS, INACTIVE_ROTATION_DEG, INACTIVE_SCALE, OUTER_RADIUS, VIEWBOX,
};
use crate::locale::{level_label, text, Locale, UiText};
use crate::score::ScoreSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgTheme {
    pub background: &'static str,
    pub guide: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
}

impl SvgTheme {
    pub const fn light() -> Self {
        Self {
            background: "#ffffff",
            guide: "#e5e7eb",
            text: "#1f2937",
            muted_text: "#6b7280",
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: "#111827",
            guide: "#374151",
            text: "#f9fafb",
            muted_text: "#9ca3af",
        }
    }

    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    pub theme: SvgTheme,
    pub locale: Locale,
    pub timing: RevealTiming,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::light(),
            locale: Locale::default(),
            timing: RevealTiming::Instant,
        }
    }
}

pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn open_document(out: &mut String, title: &str, theme: &SvgTheme) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{VIEWBOX}" height="{VIEWBOX}" viewBox="0 0 {VIEWBOX} {VIEWBOX}" role="img" aria-label="{}">"#,
        escape_xml(title)
    );
    let _ = writeln!(
        out,
        r#"<circle cx="{CENTER}" cy="{CENTER}" r="{OUTER_RADIUS}" fill="{}" stroke="{}" stroke-width="1"/>"#,
        theme.background, theme.guide
    );
}

/// Rose chart with the center "toggle all" control, titled after
/// `next_batch`. Petal transitions are left to CSS; `options.timing` only
/// sets each petal's `transition-delay`.
pub fn render_rose_svg(
    chart: &RoseChart,
    summary: &ScoreSummary,
    next_batch: BatchOutcome,
    options: &SvgOptions,
) -> String {
    let theme = &options.theme;
    let title = format!(
        "{} {} / {} ({}%)",
        text(UiText::YourScore, options.locale),
        summary.total,
        summary.max,
        summary.percentage
    );

    let mut out = String::new();
    open_document(&mut out, &title, theme);
    let _ = writeln!(
        out,
        "<style>.wedge{{transform-origin:{CENTER}px {CENTER}px;transition:transform {TRANSITION_MS}ms cubic-bezier(.2,.8,.2,1),fill-opacity {TRANSITION_MS}ms ease,stroke {TRANSITION_MS}ms ease;}}\
         .toggle-all{{cursor:pointer;}}</style>"
    );

    for ring in &chart.rings {
        let _ = writeln!(
            out,
            r#"<circle class="ring ring-{}" cx="{CENTER}" cy="{CENTER}" r="{:.2}" fill="none" stroke="{}" stroke-width="0.6" stroke-dasharray="2 3"><title>{}</title></circle>"#,
            ring.level.as_str(),
            ring.outer_radius,
            theme.guide,
            escape_xml(level_label(ring.level, options.locale))
        );
    }

    out.push_str("<g class=\"wedges\">\n");
    for wedge in &chart.wedges {
        let color = level_color(wedge.level, wedge.shade);
        let delay = options.timing.delay_ms(wedge.order);
        let (state, fill_opacity, stroke, transform) = if wedge.active {
            ("active", 0.85, color.to_string(), "scale(1) rotate(0deg)".to_string())
        } else {
            (
                "inactive",
                0.08,
                INACTIVE_STROKE.hex(),
                format!("scale({INACTIVE_SCALE}) rotate({INACTIVE_ROTATION_DEG}deg)"),
            )
        };

        let _ = writeln!(
            out,
            r#"<path class="wedge wedge-{} {state}" data-position="{}" d="{}" fill="{color}" fill-opacity="{fill_opacity}" stroke="{stroke}" stroke-width="0.8" style="transform:{transform};transition-delay:{delay}ms"/>"#,
            wedge.level.as_str(),
            wedge.position,
            wedge.path_data(),
        );
    }
    out.push_str("</g>\n");

    let action = match next_batch {
        BatchOutcome::Activated => UiText::ActivateAll,
        BatchOutcome::Deactivated => UiText::DeactivateAll,
    };
    let _ = writeln!(
        out,
        r#"<g class="toggle-all" role="button" data-action="toggle-all"><title>{}</title><circle cx="{CENTER}" cy="{CENTER}" r="{:.2}" fill="{}" stroke="{}" stroke-width="1.5"/>"#,
        escape_xml(text(action, options.locale)),
        CENTER_RADIUS - 2.0,
        theme.background,
        theme.guide
    );
    let _ = writeln!(
        out,
        r#"<text x="{CENTER}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="15" font-weight="700" fill="{}">{}%</text>"#,
        CENTER + 3.0,
        theme.text,
        summary.percentage
    );
    let _ = writeln!(
        out,
        r#"<text x="{CENTER}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="7" fill="{}">{} / {}</text></g>"#,
        CENTER + 13.0,
        theme.muted_text,
        summary.total,
        summary.max
    );
    out.push_str("</svg>\n");
    out
}

pub fn flower_label(flower: &FlowerChart, locale: Locale) -> String {
    format!(
        "{} {} • {} {}",
        flower.layers,
        text(UiText::Layers, locale),
        flower.petal_count(),
        text(UiText::Petals, locale)
    )
}

pub fn render_flower_svg(flower: &FlowerChart, options: &SvgOptions) -> String {
    let theme = &options.theme;
    let label = flower_label(flower, options.locale);

    let mut out = String::new();
    open_document(&mut out, &label, theme);

    out.push_str("<defs>\n");
    for petal in &flower.petals {
        let _ = writeln!(
            out,
            r#"<linearGradient id="petal-{layer}-{index}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{color}" stop-opacity="0.9"/><stop offset="50%" stop-color="{color}" stop-opacity="1"/><stop offset="100%" stop-color="{color}" stop-opacity="0.7"/></linearGradient>"#,
            layer = petal.layer,
            index = petal.index,
            color = petal.color,
        );
    }
    out.push_str(
        r##"<radialGradient id="flower-center"><stop offset="0%" stop-color="#FFD700"/><stop offset="70%" stop-color="#FFA500"/><stop offset="100%" stop-color="#FF8C00"/></radialGradient>"##,
    );
    out.push_str("\n</defs>\n");

    for petal in &flower.petals {
        let depth = petal.layer as f64;
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="url(#petal-{}-{})" stroke="{}" stroke-width="0.5" opacity="{:.2}" style="filter:drop-shadow(0 {}px {}px rgba(0,0,0,{:.2}))"/>"#,
            petal.path_data(),
            petal.layer,
            petal.index,
            petal.color,
            petal.opacity,
            2 + petal.layer,
            3 + petal.layer * 2,
            depth.mul_add(0.05, 0.15)
        );
    }

    let _ = writeln!(
        out,
        r#"<circle cx="{CENTER}" cy="{CENTER}" r="18" fill="url(#flower-center)" style="filter:drop-shadow(0 3px 8px rgba(0,0,0,0.3))"/>"#
    );
    for dot in 0..12 {
        let angle = f64::from(dot * 30).to_radians();
        let _ = writeln!(
            out,
            r##"<circle cx="{:.2}" cy="{:.2}" r="1.5" fill="#8B4513" opacity="0.6"/>"##,
            10.0_f64.mul_add(angle.cos(), CENTER),
            10.0_f64.mul_add(angle.sin(), CENTER)
        );
    }
    let _ = writeln!(
        out,
        r#"<text x="{CENTER}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="10" fill="{}">{}</text>"#,
        VIEWBOX - 6.0,
        theme.muted_text,
        escape_xml(&label)
    );
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillRecord;
    use crate::domain::Level;

    const ACTIVATE: BatchOutcome = BatchOutcome::Activated;

    fn skills() -> Vec<SkillRecord> {
        vec![
            SkillRecord::new(Level::Beginner, "syntax", true),
            SkillRecord::new(Level::Beginner, "stdlib", true),
            SkillRecord::new(Level::Beginner, "venv", true),
            SkillRecord::new(Level::Advanced, "profiling", false),
        ]
    }

    #[test]
    fn rose_svg_has_one_path_per_skill_and_center_control() {
        let skills = skills();
        let chart = RoseChart::layout(&skills);
        let summary = ScoreSummary::from_skills(&skills);
        let svg = render_rose_svg(&chart, &summary, ACTIVATE, &SvgOptions::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("class=\"wedge ").count(), 4);
        assert_eq!(svg.matches(" active\"").count(), 3);
        assert_eq!(svg.matches(" inactive\"").count(), 1);
        assert!(svg.contains("data-action=\"toggle-all\""));
        assert!(svg.contains(">43%<"));
        assert!(svg.contains("transform:scale(0.6) rotate(-12deg)"));
        assert!(svg.contains("3 / 7"));
    }

    #[test]
    fn staggered_timing_sets_increasing_delays() {
        let skills = skills();
        let chart = RoseChart::layout(&skills);
        let summary = ScoreSummary::from_skills(&skills);
        let options = SvgOptions {
            timing: RevealTiming::Staggered { step_ms: 45 },
            ..SvgOptions::default()
        };
        let svg = render_rose_svg(&chart, &summary, ACTIVATE, &options);
        assert!(svg.contains("transition-delay:0ms"));
        assert!(svg.contains("transition-delay:135ms"));

        let instant = render_rose_svg(&chart, &summary, ACTIVATE, &SvgOptions::default());
        assert_eq!(instant.matches("transition-delay:0ms").count(), 4);
    }

    #[test]
    fn rose_svg_is_deterministic() {
        let skills = skills();
        let chart = RoseChart::layout(&skills);
        let summary = ScoreSummary::from_skills(&skills);
        let options = SvgOptions::default();
        assert_eq!(
            render_rose_svg(&chart, &summary, ACTIVATE, &options),
            render_rose_svg(&RoseChart::layout(&skills), &summary, ACTIVATE, &options)
        );
    }

    #[test]
    fn dark_theme_and_locale_change_chrome_only() {
        let skills = skills();
        let chart = RoseChart::layout(&skills);
        let summary = ScoreSummary::from_skills(&skills);
        let options = SvgOptions {
            theme: SvgTheme::dark(),
            locale: Locale::Ko,
            timing: RevealTiming::Instant,
        };
        let svg = render_rose_svg(&chart, &summary, ACTIVATE, &options);
        assert!(svg.contains("#111827"));
        assert!(svg.contains("내 점수"));
        assert!(svg.contains("초급"));
    }

    #[test]
    fn flower_svg_lists_gradients_and_label() {
        let summary = ScoreSummary::from_skills(&skills());
        let flower = FlowerChart::layout(&summary);
        let svg = render_flower_svg(&flower, &SvgOptions::default());

        assert_eq!(svg.matches("<linearGradient").count(), flower.petal_count());
        assert!(svg.contains("3 layers • 21 petals"));
        assert!(svg.contains("url(#flower-center)"));
    }

    #[test]
    fn escape_xml_handles_markup() {
        assert_eq!(escape_xml("R&D <\"ops\">"), "R&amp;D &lt;&quot;ops&quot;&gt;");
    }
}
