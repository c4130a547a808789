//! The flower: a score-driven decoration that grows more petal layers as the
//! percentage climbs. Unlike the rose it does not map petals to skills.
//! Angles here follow the screen convention (0° pointing right, clockwise).

use std::f64::consts::FRAC_PI_2;

use crate::chart::color::Hsl;
use crate::chart::rose::{Point, CENTER};
use crate::score::ScoreSummary;

pub const MAX_LAYERS: usize = 7;
const PERCENT_PER_LAYER: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub layer: usize,
    pub index: usize,
    pub angle_deg: f64,
    pub base: Point,
    pub length: f64,
    pub width: f64,
    pub color: Hsl,
    pub opacity: f64,
}

impl Petal {
    fn offset(&self, distance: f64, angle: f64) -> Point {
        Point {
            x: distance.mul_add(angle.cos(), self.base.x),
            y: distance.mul_add(angle.sin(), self.base.y),
        }
    }

    fn anchors(&self) -> [Point; 3] {
        let angle = self.angle_deg.to_radians();
        [
            self.offset(self.width, angle + FRAC_PI_2),
            self.offset(self.length, angle),
            self.offset(self.width, angle - FRAC_PI_2),
        ]
    }

    pub fn path_data(&self) -> String {
        let [left, tip, right] = self.anchors();
        let base = self.base;
        format!("M {base} Q {left} {tip} Q {right} {base} Z")
    }

    pub fn outline(&self, samples: usize) -> Vec<Point> {
        let samples = samples.max(2);
        let [left, tip, right] = self.anchors();
        let steps = samples as f64;
        let curve = |from: Point, control: Point, to: Point, t: f64| {
            let u = 1.0 - t;
            Point {
                x: (u * u).mul_add(from.x, (2.0 * u * t).mul_add(control.x, t * t * to.x)),
                y: (u * u).mul_add(from.y, (2.0 * u * t).mul_add(control.y, t * t * to.y)),
            }
        };

        let mut points = Vec::with_capacity(samples * 2 + 1);
        for step in 0..samples {
            points.push(curve(self.base, left, tip, step as f64 / steps));
        }
        for step in 0..=samples {
            points.push(curve(tip, right, self.base, step as f64 / steps));
        }
        points
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowerChart {
    pub layers: usize,
    /// Outermost layer first so inner layers paint on top.
    pub petals: Vec<Petal>,
}

pub fn layer_count(percentage: f64) -> usize {
    let layers = (percentage / PERCENT_PER_LAYER).ceil();
    if layers.is_nan() || layers < 1.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let layers = layers as usize;
    layers.min(MAX_LAYERS)
}

impl FlowerChart {
    pub fn layout(summary: &ScoreSummary) -> Self {
        let percentage = summary.ratio() * 100.0;
        let layers = layer_count(percentage);
        let mut petals = Vec::new();

        for layer in (0..layers).rev() {
            let depth = layer as f64;
            let petals_in_layer = 8_usize.saturating_sub(layer).max(5);
            let layer_radius = depth.mul_add(15.0, 35.0);
            let length = depth.mul_add(5.0, 25.0);
            let width = depth.mul_add(3.0, 12.0);
            let rotation = depth * 15.0;
            let step = 360.0 / petals_in_layer as f64;

            for index in 0..petals_in_layer {
                let angle_deg = step.mul_add(index as f64, rotation);
                let angle = angle_deg.to_radians();
                petals.push(Petal {
                    layer,
                    index,
                    angle_deg,
                    base: Point {
                        x: layer_radius.mul_add(angle.cos(), CENTER),
                        y: layer_radius.mul_add(angle.sin(), CENTER),
                    },
                    length,
                    width,
                    color: Hsl::new(
                        step.mul_add(index as f64, depth * 50.0) % 360.0,
                        (percentage / 100.0).mul_add(30.0, 65.0),
                        depth.mul_add(5.0, 45.0),
                    ),
                    opacity: depth.mul_add(-0.05, 0.9),
                });
            }
        }

        Self { layers, petals }
    }

    pub fn petal_count(&self) -> usize {
        self.petals.len()
    }
}
