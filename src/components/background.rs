//! Decorative animated backgrounds.
//!
//! A background is picked by variant name and intensity. [`layout`] turns
//! that choice into a fixed list of [`Shape`]s, each carrying its own
//! hand-tuned [`Motion`]; the component only renders what it is given.

use std::f32::consts::TAU;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use yew::prelude::*;

use crate::hooks::use_pointer_in;
use crate::motion::{num, Easing, Motion};

const PRIMARY: &str = "hsl(142, 76%, 50%)";
const ACCENT: &str = "hsl(180, 100%, 50%)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundVariant {
    Dots,
    Grid,
    Blobs,
    Particles,
    Circuit,
    Waves,
    Network,
    Quantum,
}

impl BackgroundVariant {
    pub const ALL: [BackgroundVariant; 8] = [
        BackgroundVariant::Dots,
        BackgroundVariant::Grid,
        BackgroundVariant::Blobs,
        BackgroundVariant::Particles,
        BackgroundVariant::Circuit,
        BackgroundVariant::Waves,
        BackgroundVariant::Network,
        BackgroundVariant::Quantum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BackgroundVariant::Dots => "dots",
            BackgroundVariant::Grid => "grid",
            BackgroundVariant::Blobs => "blobs",
            BackgroundVariant::Particles => "particles",
            BackgroundVariant::Circuit => "circuit",
            BackgroundVariant::Waves => "waves",
            BackgroundVariant::Network => "network",
            BackgroundVariant::Quantum => "quantum",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown background variant `{0}`")]
pub struct UnknownVariant(pub String);

impl FromStr for BackgroundVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub fn opacity(self) -> f32 {
        match self {
            Intensity::Low => 0.03,
            Intensity::Medium => 0.05,
            Intensity::High => 0.08,
        }
    }

    /// Base blur radius in px; stronger backgrounds blur less.
    pub fn blur(self) -> f32 {
        match self {
            Intensity::Low => 100.0,
            Intensity::Medium => 80.0,
            Intensity::High => 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// Soft blurred disc.
    Orb { size: f32, color: &'static str, alpha: f32, blur: f32 },
    /// Small solid disc.
    Dot { size: f32, color: &'static str },
    /// Thin outlined circle, centred on its anchor.
    Ring { size: f32, color: &'static str },
    /// Full-bleed square grid.
    GridPattern { cell: f32, opacity: f32 },
    /// Full-height vertical light line.
    Beam { color: &'static str },
    /// SVG path across the whole background.
    Stroke { path: String, color: &'static str, width: f32, blur: f32 },
    /// SVG line between two points given in percent.
    Segment { from: (f32, f32), to: (f32, f32), color: &'static str, blur: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Anchor in percent of the container, or `None` for full-bleed shapes.
    pub at: Option<(f32, f32)>,
    /// Whether the anchor is the shape's centre rather than its top-left.
    pub centered: bool,
    pub opacity: f32,
    pub motion: Option<Motion>,
    /// Nudge the shape towards the pointer.
    pub follows_pointer: bool,
}

impl Shape {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            at: None,
            centered: false,
            opacity: 1.0,
            motion: None,
            follows_pointer: false,
        }
    }

    fn at(mut self, left: f32, top: f32) -> Self {
        self.at = Some((left, top));
        self
    }

    fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn animate(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    fn follows_pointer(mut self) -> Self {
        self.follows_pointer = true;
        self
    }

    fn is_svg(&self) -> bool {
        matches!(self.kind, ShapeKind::Stroke { .. } | ShapeKind::Segment { .. })
    }
}

/// The shapes making up `variant`. The same seed always yields the same layout.
pub fn layout(variant: BackgroundVariant, intensity: Intensity, seed: u64) -> Vec<Shape> {
    let mut rng = SmallRng::seed_from_u64(seed);
    match variant {
        BackgroundVariant::Blobs => blobs(intensity),
        BackgroundVariant::Dots => dots(&mut rng),
        BackgroundVariant::Grid => grid(intensity),
        BackgroundVariant::Circuit => circuit(&mut rng),
        BackgroundVariant::Waves => waves(),
        BackgroundVariant::Network => network(&mut rng),
        BackgroundVariant::Quantum => quantum(&mut rng),
        BackgroundVariant::Particles => Vec::new(),
    }
}

fn blobs(intensity: Intensity) -> Vec<Shape> {
    let blur = intensity.blur();
    vec![
        Shape::new(ShapeKind::Orb { size: 600.0, color: ACCENT, alpha: 0.3, blur: blur + 20.0 })
            .at(70.0, 0.0)
            .opacity(0.4)
            .animate(
                Motion::new(25.0)
                    .x(&[0.0, 150.0, 0.0])
                    .y(&[0.0, -100.0, 0.0])
                    .scale(&[1.0, 1.3, 1.0])
                    .rotate(&[0.0, 10.0, 0.0]),
            ),
        Shape::new(ShapeKind::Orb { size: 500.0, color: PRIMARY, alpha: 0.25, blur: blur + 15.0 })
            .at(-10.0, 50.0)
            .opacity(0.35)
            .animate(
                Motion::new(30.0)
                    .x(&[0.0, -100.0, 0.0])
                    .y(&[0.0, 120.0, 0.0])
                    .scale(&[1.0, 1.2, 1.0])
                    .rotate(&[0.0, -15.0, 0.0])
                    .delay(2.0),
            ),
        Shape::new(ShapeKind::Orb { size: 384.0, color: PRIMARY, alpha: 0.2, blur: blur + 10.0 })
            .at(33.0, 50.0)
            .centered()
            .opacity(0.3)
            .follows_pointer()
            .animate(Motion::new(20.0).scale(&[1.0, 1.15, 1.0]).delay(1.0)),
        Shape::new(ShapeKind::Stroke {
            path: "M 0 200 Q 400 100 800 200 T 1600 200".to_string(),
            color: PRIMARY,
            width: 2.0,
            blur: 2.0,
        })
        .opacity(0.15)
        .animate(Motion::new(8.0).draw(&[0.0, 1.0, 0.0])),
    ]
}

fn dots(rng: &mut SmallRng) -> Vec<Shape> {
    (0..50)
        .map(|_| {
            let left = rng.gen_range(0.0..100.0);
            let top = rng.gen_range(0.0..100.0);
            let duration = 3.0 + rng.gen_range(0.0..2.0);
            let delay = rng.gen_range(0.0..2.0);
            Shape::new(ShapeKind::Dot { size: 4.0, color: "rgba(0, 255, 136, 0.2)" })
                .at(left, top)
                .animate(
                    Motion::new(duration)
                        .scale(&[0.5, 1.0, 0.5])
                        .opacity(&[0.2, 0.5, 0.2])
                        .delay(delay),
                )
        })
        .collect()
}

fn grid(intensity: Intensity) -> Vec<Shape> {
    let line = |left: f32, color: &'static str, delay: f32| {
        Shape::new(ShapeKind::Beam { color })
            .at(left, 0.0)
            .animate(Motion::new(4.0).opacity(&[0.02, 0.05, 0.02]).delay(delay))
    };
    vec![
        Shape::new(ShapeKind::GridPattern { cell: 50.0, opacity: intensity.opacity() * 0.4 }),
        line(25.0, PRIMARY, 0.0),
        line(75.0, ACCENT, 2.0),
    ]
}

fn circuit(rng: &mut SmallRng) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(22);
    for i in 0..5 {
        let y = 20.0 + i as f32 * 20.0;
        shapes.push(
            Shape::new(ShapeKind::Segment { from: (0.0, y), to: (100.0, y), color: PRIMARY, blur: 1.0 })
                .opacity(0.15)
                .animate(
                    Motion::new(4.0 + i as f32)
                        .draw(&[0.0, 1.0, 0.0])
                        .opacity(&[0.1, 0.3, 0.1])
                        .delay(i as f32 * 0.5),
                ),
        );
    }
    for i in 0..5 {
        let x = 15.0 + i as f32 * 20.0;
        shapes.push(
            Shape::new(ShapeKind::Segment { from: (x, 0.0), to: (x, 100.0), color: ACCENT, blur: 1.0 })
                .opacity(0.15)
                .animate(
                    Motion::new(5.0 + i as f32)
                        .draw(&[0.0, 1.0, 0.0])
                        .opacity(&[0.1, 0.3, 0.1])
                        .delay(i as f32 * 0.7),
                ),
        );
    }
    for i in 0..12 {
        let left = 15.0 + (i % 5) as f32 * 20.0;
        let top = 20.0 + (i / 5) as f32 * 20.0;
        let duration = 2.0 + rng.gen_range(0.0..1.0);
        let delay = rng.gen_range(0.0..2.0);
        shapes.push(
            Shape::new(ShapeKind::Dot { size: 8.0, color: PRIMARY })
                .at(left, top)
                .animate(
                    Motion::new(duration)
                        .scale(&[1.0, 1.5, 1.0])
                        .opacity(&[0.3, 0.8, 0.3])
                        .delay(delay),
                ),
        );
    }
    shapes
}

fn wave_outline(wave: u32, crest: f32, reach: f32, trough: f32) -> String {
    let w = wave as f32;
    let base = 50.0 + w * 10.0;
    format!(
        "M 0 {} Q {} {} {} {} T {} {}",
        num(base),
        num(crest + w * 100.0),
        num(trough + w * 10.0),
        num(reach + w * 200.0),
        num(base + (trough - 30.0)),
        num(reach + 800.0 + w * 400.0),
        num(base),
    )
}

fn waves() -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(6);
    for wave in 0..3u32 {
        let rest = wave_outline(wave, 200.0, 400.0, 30.0);
        let swell = wave_outline(wave, 250.0, 450.0, 50.0);
        let color = if wave == 1 { ACCENT } else { PRIMARY };
        shapes.push(
            Shape::new(ShapeKind::Stroke { path: rest.clone(), color, width: 2.0, blur: 2.0 })
                .opacity(0.2 - wave as f32 * 0.05)
                .animate(Motion::new(8.0 + wave as f32 * 2.0).morph(vec![rest.clone(), swell, rest])),
        );
    }
    let tints = [(PRIMARY, 0.3), (ACCENT, 0.3), (PRIMARY, 0.2)];
    for (i, (color, alpha)) in tints.into_iter().enumerate() {
        let i = i as f32;
        shapes.push(
            Shape::new(ShapeKind::Orb { size: 128.0, color, alpha, blur: 60.0 })
                .at(20.0 + i * 30.0, 30.0 + i * 20.0)
                .animate(
                    Motion::new(15.0 + i * 5.0)
                        .x(&[0.0, 100.0, -50.0, 0.0])
                        .y(&[0.0, -80.0, 50.0, 0.0])
                        .scale(&[1.0, 1.2, 0.8, 1.0])
                        .delay(i * 2.0),
                ),
        );
    }
    shapes
}

fn network(rng: &mut SmallRng) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(24);
    for i in 0..15 {
        let angle = i as f32 / 15.0 * TAU;
        let radius = (200.0 + (i % 3) as f32 * 100.0) / 10.0;
        let duration = 2.0 + rng.gen_range(0.0..2.0);
        let delay = rng.gen_range(0.0..2.0);
        shapes.push(
            Shape::new(ShapeKind::Dot { size: 12.0, color: PRIMARY })
                .at(50.0 + angle.cos() * radius, 50.0 + angle.sin() * radius)
                .animate(
                    Motion::new(duration)
                        .scale(&[1.0, 1.5, 1.0])
                        .opacity(&[0.4, 0.9, 0.4])
                        .delay(delay),
                ),
        );
    }
    let ring = |i: u32| {
        let angle = i as f32 / 8.0 * TAU;
        (50.0 + angle.cos() * 20.0, 50.0 + angle.sin() * 20.0)
    };
    for i in 0..8u32 {
        shapes.push(
            Shape::new(ShapeKind::Segment { from: ring(i), to: ring(i + 1), color: PRIMARY, blur: 1.0 })
                .opacity(0.1)
                .animate(Motion::new(3.0).opacity(&[0.1, 0.3, 0.1]).delay(i as f32 * 0.3)),
        );
    }
    shapes.push(
        Shape::new(ShapeKind::Orb { size: 384.0, color: PRIMARY, alpha: 0.1, blur: 120.0 })
            .at(50.0, 50.0)
            .centered()
            .animate(Motion::new(6.0).scale(&[1.0, 1.2, 1.0]).opacity(&[0.2, 0.4, 0.2])),
    );
    shapes
}

fn quantum(rng: &mut SmallRng) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(25);
    for _ in 0..20 {
        let left = rng.gen_range(0.0..100.0);
        let top = rng.gen_range(0.0..100.0);
        let dx = rng.gen_range(-100.0..100.0);
        let dy = rng.gen_range(-100.0..100.0);
        let duration = 3.0 + rng.gen_range(0.0..2.0);
        let delay = rng.gen_range(0.0..3.0);
        shapes.push(
            Shape::new(ShapeKind::Dot { size: 4.0, color: PRIMARY })
                .at(left, top)
                .animate(
                    Motion::new(duration)
                        .x(&[0.0, dx])
                        .y(&[0.0, dy])
                        .scale(&[0.0, 1.5, 0.0])
                        .opacity(&[0.0, 1.0, 0.0])
                        .delay(delay),
                ),
        );
    }
    for wave in 0..3 {
        let w = wave as f32;
        shapes.push(
            Shape::new(ShapeKind::Ring { size: 400.0 + w * 200.0, color: PRIMARY })
                .at(50.0, 50.0)
                .centered()
                .opacity(0.1)
                .animate(
                    Motion::new(4.0 + w)
                        .scale(&[0.5, 2.0, 0.5])
                        .opacity(&[0.5, 0.0, 0.5])
                        .easing(Easing::EaseOut)
                        .delay(w * 1.5),
                ),
        );
    }
    for (i, color) in [PRIMARY, ACCENT].into_iter().enumerate() {
        let i = i as f32;
        shapes.push(
            Shape::new(ShapeKind::Orb { size: 256.0, color, alpha: 0.2, blur: 80.0 })
                .at(30.0 + i * 40.0, 40.0 + i * 20.0)
                .animate(
                    Motion::new(20.0 + i * 5.0)
                        .x(&[0.0, 150.0, -100.0, 0.0])
                        .y(&[0.0, -100.0, 120.0, 0.0]),
                ),
        );
    }
    shapes
}

fn with_alpha(color: &str, alpha: f32) -> String {
    match color.strip_prefix("hsl(").and_then(|c| c.strip_suffix(')')) {
        Some(channels) => format!("hsla({}, {})", channels, num(alpha)),
        None => color.to_string(),
    }
}

fn anchor_style(shape: &Shape) -> String {
    let mut style = String::from("position: absolute;");
    match shape.at {
        Some((left, top)) => style.push_str(&format!(" left: {}%; top: {}%;", num(left), num(top))),
        None => style.push_str(" inset: 0;"),
    }
    if shape.centered {
        let half = num(half_size(&shape.kind));
        style.push_str(&format!(" margin-left: -{half}px; margin-top: -{half}px;"));
    }
    style.push_str(&format!(" opacity: {};", num(shape.opacity)));
    style
}

fn body_style(shape: &Shape, animation: Option<String>) -> String {
    let mut style = match &shape.kind {
        ShapeKind::Orb { size, color, alpha, blur } => format!(
            "width: {s}px; height: {s}px; border-radius: 9999px; background: {}; filter: blur({}px);",
            with_alpha(color, *alpha),
            num(*blur),
            s = num(*size),
        ),
        ShapeKind::Dot { size, color } => format!(
            "width: {s}px; height: {s}px; border-radius: 9999px; background: {};",
            color,
            s = num(*size),
        ),
        ShapeKind::Ring { size, color } => format!(
            "width: {s}px; height: {s}px; border-radius: 9999px; border: 1px solid {};",
            color,
            s = num(*size),
        ),
        ShapeKind::GridPattern { cell, opacity } => format!(
            "position: absolute; inset: 0; opacity: {}; background-size: {c}px {c}px; \
             background-image: linear-gradient(to right, #fff 1px, transparent 1px), \
             linear-gradient(to bottom, #fff 1px, transparent 1px);",
            num(*opacity),
            c = num(*cell),
        ),
        ShapeKind::Beam { color } => format!(
            "width: 1px; height: 100vh; background: linear-gradient(to bottom, transparent, {}, transparent);",
            with_alpha(color, 0.3)
        ),
        ShapeKind::Stroke { .. } | ShapeKind::Segment { .. } => String::new(),
    };
    if let Some(animation) = animation {
        style.push_str(&format!(" animation: {};", animation));
    }
    style
}

fn half_size(kind: &ShapeKind) -> f32 {
    match kind {
        ShapeKind::Orb { size, .. } | ShapeKind::Dot { size, .. } | ShapeKind::Ring { size, .. } => size / 2.0,
        _ => 0.0,
    }
}

fn render_svg(shape: &Shape, animation: Option<String>) -> Html {
    let style = animation.map(|a| format!("animation: {};", a));
    let inner = match &shape.kind {
        ShapeKind::Stroke { path, color, width, blur } => html! {
            <path
                d={path.clone()}
                stroke={*color}
                stroke-width={num(*width)}
                fill="none"
                pathLength="1"
                stroke-dasharray="1"
                style={format!("filter: blur({}px); {}", num(*blur), style.unwrap_or_default())}
            />
        },
        ShapeKind::Segment { from, to, color, blur } => html! {
            <line
                x1={format!("{}%", num(from.0))}
                y1={format!("{}%", num(from.1))}
                x2={format!("{}%", num(to.0))}
                y2={format!("{}%", num(to.1))}
                stroke={*color}
                stroke-width="1"
                pathLength="1"
                stroke-dasharray="1"
                style={format!("filter: blur({}px); {}", num(*blur), style.unwrap_or_default())}
            />
        },
        _ => html! {},
    };
    html! {
        <svg class="bg-svg" style={format!("opacity: {};", num(shape.opacity))}>
            { inner }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedBackgroundProps {
    #[prop_or(AttrValue::Static("blobs"))]
    pub variant: AttrValue,
    #[prop_or_default]
    pub intensity: Intensity,
    #[prop_or(7)]
    pub seed: u64,
}

#[function_component(AnimatedBackground)]
pub fn animated_background(props: &AnimatedBackgroundProps) -> Html {
    let container = use_node_ref();
    let pointer = use_pointer_in(container.clone());
    let scope = use_memo(|_| next_scope(), ());

    let shapes = use_memo(
        |(variant, intensity, seed)| match variant.parse::<BackgroundVariant>() {
            Ok(variant) => layout(variant, *intensity, *seed),
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        },
        (props.variant.clone(), props.intensity, props.seed),
    );

    if shapes.is_empty() {
        return html! {};
    }

    let mut keyframes = String::new();
    let rendered: Html = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let animation = shape.motion.as_ref().map(|motion| {
                let name = format!("bg{}-{}", scope, i);
                keyframes.push_str(&motion.keyframes(&name));
                motion.animation(&name)
            });
            if shape.is_svg() {
                return render_svg(shape, animation);
            }
            let mut anchor = anchor_style(shape);
            if shape.follows_pointer {
                let (px, py) = pointer;
                anchor.push_str(&format!(
                    " transform: translate({}px, {}px); transition: transform 1.2s ease-out;",
                    num((px * 80.0 - 40.0) as f32),
                    num((py * 80.0 - 40.0) as f32),
                ));
            }
            html! {
                <div style={anchor}>
                    <div style={body_style(shape, animation)}></div>
                </div>
            }
        })
        .collect();

    html! {
        <div ref={container} class="animated-background" aria-hidden="true">
            <style>{ keyframes }</style>
            { rendered }
            <style>
                {r#"
                .animated-background {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .animated-background .bg-svg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }
                "#}
            </style>
        </div>
    }
}

fn next_scope() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};
    static SCOPES: AtomicU32 = AtomicU32::new(0);
    SCOPES.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_name_parses() {
        for variant in BackgroundVariant::ALL {
            assert_eq!(variant.name().parse::<BackgroundVariant>(), Ok(variant));
        }
    }

    #[test]
    fn unknown_variant_is_an_error() {
        assert_eq!(
            "aurora".parse::<BackgroundVariant>(),
            Err(UnknownVariant("aurora".into()))
        );
        assert!("Blobs".parse::<BackgroundVariant>().is_err());
    }

    #[test]
    fn authored_variants_lay_out_their_shapes() {
        let count = |v| layout(v, Intensity::Medium, 1).len();
        assert_eq!(count(BackgroundVariant::Blobs), 4);
        assert_eq!(count(BackgroundVariant::Dots), 50);
        assert_eq!(count(BackgroundVariant::Grid), 3);
        assert_eq!(count(BackgroundVariant::Circuit), 22);
        assert_eq!(count(BackgroundVariant::Waves), 6);
        assert_eq!(count(BackgroundVariant::Network), 24);
        assert_eq!(count(BackgroundVariant::Quantum), 25);
    }

    #[test]
    fn particles_has_no_authored_layout() {
        assert!(layout(BackgroundVariant::Particles, Intensity::High, 1).is_empty());
    }

    #[test]
    fn layout_is_stable_for_a_seed() {
        for variant in BackgroundVariant::ALL {
            assert_eq!(
                layout(variant, Intensity::Low, 42),
                layout(variant, Intensity::Low, 42)
            );
        }
        assert_ne!(
            layout(BackgroundVariant::Dots, Intensity::Low, 1),
            layout(BackgroundVariant::Dots, Intensity::Low, 2)
        );
    }

    #[test]
    fn scattered_shapes_stay_inside_the_container() {
        for shape in layout(BackgroundVariant::Dots, Intensity::Medium, 9) {
            let (left, top) = shape.at.unwrap();
            assert!((0.0..100.0).contains(&left));
            assert!((0.0..100.0).contains(&top));
        }
    }

    #[test]
    fn intensity_controls_blob_blur() {
        let blur_of = |intensity| match &layout(BackgroundVariant::Blobs, intensity, 0)[0].kind {
            ShapeKind::Orb { blur, .. } => *blur,
            other => panic!("unexpected shape {:?}", other),
        };
        assert_eq!(blur_of(Intensity::Low), 120.0);
        assert_eq!(blur_of(Intensity::Medium), 100.0);
        assert_eq!(blur_of(Intensity::High), 80.0);
    }

    #[test]
    fn intensity_table() {
        assert_eq!(Intensity::default(), Intensity::Medium);
        assert_eq!((Intensity::Low.opacity(), Intensity::Low.blur()), (0.03, 100.0));
        assert_eq!((Intensity::Medium.opacity(), Intensity::Medium.blur()), (0.05, 80.0));
        assert_eq!((Intensity::High.opacity(), Intensity::High.blur()), (0.08, 60.0));
    }

    #[test]
    fn only_the_central_blob_follows_the_pointer() {
        let followers: Vec<usize> = layout(BackgroundVariant::Blobs, Intensity::Medium, 0)
            .iter()
            .enumerate()
            .filter(|(_, s)| s.follows_pointer)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(followers, vec![2]);
    }

    #[test]
    fn wave_outlines_morph_back_to_rest() {
        let shapes = layout(BackgroundVariant::Waves, Intensity::Medium, 0);
        let motion = shapes[0].motion.as_ref().unwrap();
        assert_eq!(motion.morph.len(), 3);
        assert_eq!(motion.morph[0], motion.morph[2]);
        assert_eq!(motion.morph[0], "M 0 50 Q 200 30 400 50 T 1200 50");
        assert_eq!(motion.morph[1], "M 0 50 Q 250 50 450 70 T 1250 50");
    }

    #[test]
    fn hsl_colors_gain_alpha() {
        assert_eq!(with_alpha(PRIMARY, 0.25), "hsla(142, 76%, 50%, 0.25)");
        assert_eq!(with_alpha("#fff", 0.5), "#fff");
    }
}
