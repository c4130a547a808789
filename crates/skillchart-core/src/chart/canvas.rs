//! Polylines for character-cell canvases (terminal Braille, ratzilla DOM).
//! Both front ends paint these directly; only the color lookup is theirs.

use crate::chart::color::{level_color, Rgb};
use crate::chart::flower::FlowerChart;
use crate::chart::reveal::Reveal;
use crate::chart::rose::{collapse, polar, Point, RoseChart, VIEWBOX};

/// Points sampled per quadratic segment of a wedge or petal.
pub const OUTLINE_SAMPLES: usize = 8;
const GUIDE_SEGMENTS: u32 = 48;
/// The flower's outer layers reach past the rose's viewbox.
pub const FLOWER_MARGIN: f64 = 40.0;
pub const ROSE_BOUNDS: [f64; 2] = [0.0, VIEWBOX];
pub const FLOWER_BOUNDS: [f64; 2] = [-FLOWER_MARGIN, VIEWBOX + FLOWER_MARGIN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Color(Rgb),
    Inactive,
    Guide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<(f64, f64)>,
    pub ink: Ink,
}

impl Stroke {
    /// Consecutive point pairs, ready for a canvas line primitive.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Canvas y grows upwards, chart space grows downwards.
pub fn to_canvas(point: Point) -> (f64, f64) {
    (point.x, VIEWBOX - point.y)
}

/// Largest `(width, height)` in cells that keeps circles round when a cell
/// is twice as tall as it is wide.
pub fn square_cells(width: u16, height: u16) -> (u16, u16) {
    let fitted_width = width.min(height.saturating_mul(2));
    (fitted_width, (fitted_width / 2).min(height))
}

/// Ring guides, then one outline per wedge. Wedges not yet revealed, or
/// inactive, are drawn collapsed.
pub fn rose_strokes(chart: &RoseChart, reveal: &Reveal<'_>, elapsed_ms: u64) -> Vec<Stroke> {
    let step_deg = 360.0 / f64::from(GUIDE_SEGMENTS);
    let guides = chart.rings.iter().map(|ring| Stroke {
        points: (0..=GUIDE_SEGMENTS)
            .map(|step| to_canvas(polar(ring.outer_radius, f64::from(step) * step_deg)))
            .collect(),
        ink: Ink::Guide,
    });

    let wedges = chart.wedges.iter().map(|wedge| {
        let outline = wedge.outline(OUTLINE_SAMPLES);
        if reveal.display_active(wedge, elapsed_ms) {
            Stroke {
                points: outline.into_iter().map(to_canvas).collect(),
                ink: Ink::Color(level_color(wedge.level, wedge.shade).to_rgb()),
            }
        } else {
            Stroke {
                points: outline
                    .into_iter()
                    .map(|point| to_canvas(collapse(point)))
                    .collect(),
                ink: Ink::Inactive,
            }
        }
    });

    guides.chain(wedges).collect()
}

/// Petal outlines, outermost layer first.
pub fn flower_strokes(flower: &FlowerChart) -> Vec<Stroke> {
    flower
        .petals
        .iter()
        .map(|petal| Stroke {
            points: petal
                .outline(OUTLINE_SAMPLES)
                .into_iter()
                .map(to_canvas)
                .collect(),
            ink: Ink::Color(petal.color.to_rgb()),
        })
        .collect()
}
