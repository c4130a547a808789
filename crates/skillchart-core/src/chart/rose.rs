//! Nightingale-rose layout: one concentric ring per level, one petal per
//! skill. Angles are in degrees, 0° at twelve o'clock, increasing clockwise.
//! Points are in SVG space (y grows downwards) inside a `VIEWBOX` square.

use std::fmt;
use std::ops::Range;

use crate::catalog::SkillRecord;
use crate::chart::random::jitter;
use crate::domain::Level;

pub const VIEWBOX: f64 = 300.0;
pub const CENTER: f64 = VIEWBOX / 2.0;
/// Radius of the "toggle all" control in the middle of the chart.
pub const CENTER_RADIUS: f64 = 28.0;
pub const RING_BAND: f64 = 28.0;
pub const OUTER_RADIUS: f64 = CENTER_RADIUS + RING_BAND * 4.0;
/// Extra angle each petal is drawn with beyond its allocated span.
pub const WEDGE_OVERLAP_DEG: f64 = 6.0;
/// Each ring starts this much further round than the one inside it.
pub const RING_ROTATION_DEG: f64 = 15.0;
const MAX_EXTENT_DEG: f64 = 359.0;
/// Inactive petals shrink towards the center and turn back slightly.
pub const INACTIVE_SCALE: f64 = 0.6;
pub const INACTIVE_ROTATION_DEG: f64 = -12.0;

const JITTER_RADIUS: u8 = 0;
const JITTER_TIP: u8 = 1;
const JITTER_BULGE: u8 = 2;
const JITTER_SHADE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2},{:.2}", self.x, self.y)
    }
}

pub fn polar(radius: f64, angle_deg: f64) -> Point {
    let angle = angle_deg.to_radians();
    Point {
        x: radius.mul_add(angle.sin(), CENTER),
        y: (-radius).mul_add(angle.cos(), CENTER),
    }
}

/// Applies the inactive transform (`scale` then `rotate` about the center)
/// to a point, for canvases that cannot use CSS transforms.
pub fn collapse(point: Point) -> Point {
    let (sin, cos) = INACTIVE_ROTATION_DEG.to_radians().sin_cos();
    let dx = (point.x - CENTER) * INACTIVE_SCALE;
    let dy = (point.y - CENTER) * INACTIVE_SCALE;
    Point {
        x: dx.mul_add(cos, -dy * sin) + CENTER,
        y: dx.mul_add(sin, dy * cos) + CENTER,
    }
}

fn quadratic(from: Point, control: Point, to: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point {
        x: (u * u).mul_add(from.x, (2.0 * u * t).mul_add(control.x, t * t * to.x)),
        y: (u * u).mul_add(from.y, (2.0 * u * t).mul_add(control.y, t * t * to.y)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub level: Level,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub total_weight: u64,
    /// Indices into `RoseChart::wedges`.
    pub wedges: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Index of the record in the category list; also the jitter seed.
    pub position: usize,
    /// Rendering order across the whole chart.
    pub order: usize,
    pub level: Level,
    pub weight: u32,
    pub start_deg: f64,
    pub span_deg: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub tip_offset_deg: f64,
    pub bulge: f64,
    pub shade: f64,
    pub active: bool,
}

impl Wedge {
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.span_deg
    }

    pub fn mid_deg(&self) -> f64 {
        self.span_deg.mul_add(0.5, self.start_deg)
    }

    pub fn tip_deg(&self) -> f64 {
        self.mid_deg() + self.tip_offset_deg
    }

    /// Drawn angular range including the overlap.
    pub fn edges_deg(&self) -> (f64, f64) {
        let extent = (self.span_deg + WEDGE_OVERLAP_DEG).min(MAX_EXTENT_DEG);
        let mid = self.mid_deg();
        (extent.mul_add(-0.5, mid), extent.mul_add(0.5, mid))
    }

    fn control_radius(&self) -> f64 {
        let reach = 0.35_f64.mul_add(self.bulge, 0.55);
        (self.outer_radius - self.inner_radius).mul_add(reach, self.inner_radius)
    }

    fn anchors(&self) -> [Point; 5] {
        let (start, end) = self.edges_deg();
        let control = self.control_radius();
        [
            polar(self.inner_radius, start),
            polar(control, start),
            polar(self.outer_radius, self.tip_deg()),
            polar(control, end),
            polar(self.inner_radius, end),
        ]
    }

    /// SVG path: two quadratic curves out to the tip and back, closed along
    /// the inner radius.
    pub fn path_data(&self) -> String {
        let [base_start, control_start, tip, control_end, base_end] = self.anchors();
        let (start, end) = self.edges_deg();
        let large_arc = u8::from(end - start > 180.0);
        let radius = self.inner_radius;

        format!(
            "M {base_start} Q {control_start} {tip} Q {control_end} {base_end} \
             A {radius:.2} {radius:.2} 0 {large_arc} 0 {base_start} Z"
        )
    }

    /// Closed polyline approximating `path_data`, for canvases without curves.
    pub fn outline(&self, samples: usize) -> Vec<Point> {
        let samples = samples.max(2);
        let [base_start, control_start, tip, control_end, base_end] = self.anchors();
        let (start, end) = self.edges_deg();
        let steps = samples as f64;

        let mut points = Vec::with_capacity(samples * 3 + 1);
        for step in 0..samples {
            points.push(quadratic(base_start, control_start, tip, step as f64 / steps));
        }
        for step in 0..samples {
            points.push(quadratic(tip, control_end, base_end, step as f64 / steps));
        }
        for step in 0..=samples {
            let angle = (start - end).mul_add(step as f64 / steps, end);
            points.push(polar(self.inner_radius, angle));
        }
        points
    }
}

/// Geometry for one category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoseChart {
    pub rings: Vec<Ring>,
    pub wedges: Vec<Wedge>,
}

/// Share of the ring band a wedge reaches, between 0.72 and 1.0.
fn radial_reach(position: usize) -> f64 {
    0.28_f64.mul_add(jitter(position, JITTER_RADIUS), 0.72)
}

impl RoseChart {
    pub fn layout(skills: &[SkillRecord]) -> Self {
        let mut rings = Vec::with_capacity(Level::ALL.len());
        let mut wedges = Vec::with_capacity(skills.len());

        for level in Level::ALL {
            let inner_radius = (level.index() as f64).mul_add(RING_BAND, CENTER_RADIUS);
            let outer_radius = inner_radius + RING_BAND;

            let members: Vec<(usize, &SkillRecord)> = skills
                .iter()
                .enumerate()
                .filter(|(_, skill)| skill.level == Some(level))
                .collect();
            let total_weight: u64 = members
                .iter()
                .map(|(_, skill)| u64::from(skill.weight))
                .sum();

            let first = wedges.len();
            let mut cursor = level.index() as f64 * RING_ROTATION_DEG;

            for (position, skill) in &members {
                let span_deg = if total_weight == 0 {
                    360.0 / members.len() as f64
                } else {
                    f64::from(skill.weight) / total_weight as f64 * 360.0
                };

                wedges.push(Wedge {
                    position: *position,
                    order: wedges.len(),
                    level,
                    weight: skill.weight,
                    start_deg: cursor,
                    span_deg,
                    inner_radius,
                    outer_radius: RING_BAND.mul_add(radial_reach(*position), inner_radius),
                    tip_offset_deg: (jitter(*position, JITTER_TIP) - 0.5) * span_deg * 0.25,
                    bulge: jitter(*position, JITTER_BULGE),
                    shade: jitter(*position, JITTER_SHADE),
                    active: skill.active,
                });
                cursor += span_deg;
            }

            rings.push(Ring {
                level,
                inner_radius,
                outer_radius,
                total_weight,
                wedges: first..wedges.len(),
            });
        }

        Self { rings, wedges }
    }

    pub fn ring(&self, level: Level) -> Option<&Ring> {
        self.rings.iter().find(|ring| ring.level == level)
    }

    pub fn ring_wedges(&self, level: Level) -> &[Wedge] {
        self.ring(level)
            .and_then(|ring| self.wedges.get(ring.wedges.clone()))
            .unwrap_or_default()
    }

    pub fn span_total(&self, level: Level) -> f64 {
        self.ring_wedges(level).iter().map(|wedge| wedge.span_deg).sum()
    }

    pub fn wedge_for_position(&self, position: usize) -> Option<&Wedge> {
        self.wedges.iter().find(|wedge| wedge.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: Level, weight: u32, active: bool) -> SkillRecord {
        SkillRecord {
            level: Some(level),
            description: "skill".into(),
            weight,
            active,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn spans_are_proportional_to_weight() {
        let skills = vec![
            skill(Level::Advanced, 4, true),
            skill(Level::Advanced, 4, false),
            skill(Level::Advanced, 8, true),
        ];
        let chart = RoseChart::layout(&skills);
        let spans: Vec<f64> = chart
            .ring_wedges(Level::Advanced)
            .iter()
            .map(|wedge| wedge.span_deg)
            .collect();

        assert_close(spans[0], 90.0);
        assert_close(spans[1], 90.0);
        assert_close(spans[2], 180.0);
        assert_close(chart.span_total(Level::Advanced), 360.0);
    }

    #[test]
    fn every_level_gets_a_ring_even_when_empty() {
        let chart = RoseChart::layout(&[skill(Level::Beginner, 1, true)]);
        assert_eq!(chart.rings.len(), 4);
        assert!(chart.ring_wedges(Level::Expert).is_empty());
        assert_close(chart.span_total(Level::Beginner), 360.0);
    }

    #[test]
    fn zero_weight_ring_is_split_evenly() {
        let skills = vec![skill(Level::Expert, 0, true), skill(Level::Expert, 0, true)];
        let chart = RoseChart::layout(&skills);
        assert_close(chart.wedges[0].span_deg, 180.0);
        assert_close(chart.span_total(Level::Expert), 360.0);
    }

    #[test]
    fn unknown_levels_are_skipped() {
        let mut skills = vec![skill(Level::Beginner, 1, true)];
        skills.push(SkillRecord {
            level: None,
            description: "?".into(),
            weight: 5,
            active: true,
        });
        let chart = RoseChart::layout(&skills);
        assert_eq!(chart.wedges.len(), 1);
        assert!(chart.wedge_for_position(1).is_none());
    }

    #[test]
    fn wedges_stay_inside_their_band() {
        let skills: Vec<SkillRecord> = Level::ALL
            .iter()
            .flat_map(|level| (0..5).map(move |_| skill(*level, level.weight(), true)))
            .collect();
        let chart = RoseChart::layout(&skills);

        for wedge in &chart.wedges {
            let ring = chart.ring(wedge.level).unwrap();
            assert!(wedge.outer_radius > ring.inner_radius);
            assert!(wedge.outer_radius <= ring.outer_radius + 1e-9);
            assert!(wedge.tip_offset_deg.abs() <= wedge.span_deg * 0.125 + 1e-9);
        }
        assert!(chart.wedges.iter().all(|wedge| wedge.outer_radius <= OUTER_RADIUS));
    }

    #[test]
    fn layout_is_stable_across_unrelated_toggles() {
        let mut skills = vec![
            skill(Level::Beginner, 1, true),
            skill(Level::Beginner, 1, true),
            skill(Level::Expert, 8, false),
        ];
        let before = RoseChart::layout(&skills);
        skills[2].active = true;
        let after = RoseChart::layout(&skills);

        assert_eq!(before.wedges[0], after.wedges[0]);
        assert_eq!(before.wedges[1], after.wedges[1]);
        assert_eq!(before.wedges[2].path_data(), after.wedges[2].path_data());
        assert!(after.wedges[2].active);
    }

    #[test]
    fn rendering_order_runs_ring_by_ring() {
        let skills = vec![
            skill(Level::Expert, 8, false),
            skill(Level::Beginner, 1, true),
            skill(Level::Intermediate, 2, true),
        ];
        let chart = RoseChart::layout(&skills);
        let positions: Vec<usize> = chart.wedges.iter().map(|wedge| wedge.position).collect();
        assert_eq!(positions, vec![1, 2, 0]);
        let orders: Vec<usize> = chart.wedges.iter().map(|wedge| wedge.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn single_wedge_extent_is_capped_below_full_circle() {
        let chart = RoseChart::layout(&[skill(Level::Beginner, 1, true)]);
        let (start, end) = chart.wedges[0].edges_deg();
        assert!(end - start < 360.0);
        assert!(chart.wedges[0].path_data().contains(" 0 1 0 "));
    }

    #[test]
    fn outline_is_closed() {
        let chart = RoseChart::layout(&[
            skill(Level::Advanced, 4, true),
            skill(Level::Advanced, 4, true),
        ]);
        let outline = chart.wedges[0].outline(8);
        let first = outline.first().unwrap();
        let last = outline.last().unwrap();
        assert!((first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9);
        assert_eq!(outline.len(), 8 * 3 + 1);
    }

    #[test]
    fn huge_weights_still_fill_the_ring() {
        let chart = RoseChart::layout(&[
            skill(Level::Expert, 3_000_000_000, true),
            skill(Level::Expert, 3_000_000_000, false),
        ]);
        let ring = chart.ring(Level::Expert).unwrap();
        assert_eq!(ring.total_weight, 6_000_000_000);
        assert_close(chart.wedges[0].span_deg, 180.0);
        assert_close(chart.span_total(Level::Expert), 360.0);
    }

    #[test]
    fn collapse_shrinks_and_turns_counter_clockwise() {
        assert_close(collapse(polar(0.0, 0.0)).x, CENTER);
        let moved = collapse(polar(100.0, 90.0));
        let distance = (moved.x - CENTER).hypot(moved.y - CENTER);
        assert_close(distance, 60.0);
        assert!(moved.y < CENTER);
    }

    #[test]
    fn polar_zero_degrees_points_up() {
        let top = polar(10.0, 0.0);
        assert_close(top.x, CENTER);
        assert_close(top.y, CENTER - 10.0);
        let right = polar(10.0, 90.0);
        assert_close(right.x, CENTER + 10.0);
        assert_close(right.y, CENTER);
    }
}
