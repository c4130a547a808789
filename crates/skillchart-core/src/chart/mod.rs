pub mod canvas;
pub mod color;
pub mod flower;
pub mod random;
pub mod reveal;
pub mod rose;
pub mod svg;

pub use canvas::{flower_strokes, rose_strokes, square_cells, Ink, Stroke};
pub use color::{hsl_to_rgb, level_color, Hsl, Rgb};
pub use flower::{layer_count, FlowerChart, Petal};
pub use random::{jitter, seeded_random};
pub use reveal::{Reveal, RevealTiming, BATCH_STEP_MS, TRANSITION_MS};
pub use rose::{collapse, polar, Point, Ring, RoseChart, Wedge};
pub use svg::{render_flower_svg, render_rose_svg, SvgOptions, SvgTheme};
