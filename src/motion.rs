//! Motion primitives shared by the decorative components.
//!
//! Everything here is plain data that renders to CSS: a [`Motion`] is a set of
//! keyframe tracks plus timing, emitted as an `@keyframes` block and an
//! `animation` shorthand; a [`Reveal`] is the one-shot hidden-to-shown
//! transition used when content scrolls into view.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Bezier(f32, f32, f32, f32),
}

/// The curve every reveal on the site uses.
pub const REVEAL: Easing = Easing::Bezier(0.22, 1.0, 0.36, 1.0);

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::Bezier(a, b, c, d) => write!(
                f,
                "cubic-bezier({}, {}, {}, {})",
                num(*a),
                num(*b),
                num(*c),
                num(*d)
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    /// Horizontal offset in px.
    X,
    /// Vertical offset in px.
    Y,
    Scale,
    /// Rotation in degrees.
    Rotate,
    Opacity,
    /// Fraction of an SVG stroke drawn, 0..=1. Needs `pathLength="1"` on the element.
    Draw,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub values: Vec<f32>,
}

impl Track {
    /// Keyframe positions in percent, evenly spaced over the cycle.
    fn stops(&self) -> Vec<f32> {
        stops_for(self.values.len())
    }

    fn value_at(&self, pct: f32) -> Option<f32> {
        match self.values.len() {
            0 => None,
            1 => Some(self.values[0]),
            n => {
                let pos = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f32;
                let lo = pos.floor() as usize;
                let hi = (lo + 1).min(n - 1);
                let t = pos - lo as f32;
                Some(self.values[lo] + (self.values[hi] - self.values[lo]) * t)
            }
        }
    }
}

fn stops_for(len: usize) -> Vec<f32> {
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n).map(|i| i as f32 * 100.0 / (n - 1) as f32).collect(),
    }
}

/// Endlessly looping keyframe animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    pub tracks: Vec<Track>,
    /// SVG path outlines to morph between, evenly spaced like the tracks.
    pub morph: Vec<String>,
    /// Seconds.
    pub duration: f32,
    /// Seconds.
    pub delay: f32,
    pub easing: Easing,
}

impl Motion {
    pub fn new(duration: f32) -> Self {
        Self {
            tracks: Vec::new(),
            morph: Vec::new(),
            duration,
            delay: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    pub fn x(self, values: &[f32]) -> Self {
        self.track(Property::X, values)
    }

    pub fn y(self, values: &[f32]) -> Self {
        self.track(Property::Y, values)
    }

    pub fn scale(self, values: &[f32]) -> Self {
        self.track(Property::Scale, values)
    }

    pub fn rotate(self, values: &[f32]) -> Self {
        self.track(Property::Rotate, values)
    }

    pub fn opacity(self, values: &[f32]) -> Self {
        self.track(Property::Opacity, values)
    }

    pub fn draw(self, values: &[f32]) -> Self {
        self.track(Property::Draw, values)
    }

    pub fn morph(mut self, outlines: Vec<String>) -> Self {
        self.morph = outlines;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn track(mut self, property: Property, values: &[f32]) -> Self {
        self.tracks.retain(|t| t.property != property);
        self.tracks.push(Track {
            property,
            values: values.to_vec(),
        });
        self
    }

    fn get(&self, property: Property) -> Option<&Track> {
        self.tracks.iter().find(|t| t.property == property)
    }

    /// Union of every track's keyframe positions, ascending.
    pub fn stops(&self) -> Vec<f32> {
        let mut stops: Vec<f32> = self
            .tracks
            .iter()
            .flat_map(Track::stops)
            .chain(stops_for(self.morph.len()))
            .collect();
        stops.sort_by(|a, b| a.total_cmp(b));
        stops.dedup_by(|a, b| (*a - *b).abs() < 0.01);
        stops
    }

    /// The `@keyframes` block for this motion, or an empty string when it
    /// animates nothing.
    pub fn keyframes(&self, name: &str) -> String {
        let stops = self.stops();
        if stops.is_empty() {
            return String::new();
        }
        let mut css = format!("@keyframes {} {{\n", name);
        for pct in stops {
            css.push_str(&format!("  {}% {{ {}}}\n", num(pct), self.declarations_at(pct)));
        }
        css.push_str("}\n");
        css
    }

    fn declarations_at(&self, pct: f32) -> String {
        let mut out = String::new();

        let has_transform = [Property::X, Property::Y, Property::Scale, Property::Rotate]
            .iter()
            .any(|p| self.get(*p).is_some());
        if has_transform {
            let at = |p: Property, default: f32| {
                self.get(p).and_then(|t| t.value_at(pct)).unwrap_or(default)
            };
            out.push_str(&format!(
                "transform: translate({}px, {}px) scale({}) rotate({}deg); ",
                num(at(Property::X, 0.0)),
                num(at(Property::Y, 0.0)),
                num(at(Property::Scale, 1.0)),
                num(at(Property::Rotate, 0.0)),
            ));
        }
        if let Some(opacity) = self.get(Property::Opacity).and_then(|t| t.value_at(pct)) {
            out.push_str(&format!("opacity: {}; ", num(opacity)));
        }
        if let Some(drawn) = self.get(Property::Draw).and_then(|t| t.value_at(pct)) {
            out.push_str(&format!("stroke-dashoffset: {}; ", num(1.0 - drawn)));
        }
        if let Some(outline) = self.morph_at(pct) {
            out.push_str(&format!("d: path(\"{}\"); ", outline));
        }
        out
    }

    fn morph_at(&self, pct: f32) -> Option<&str> {
        stops_for(self.morph.len())
            .iter()
            .position(|s| (s - pct).abs() < 0.01)
            .map(|i| self.morph[i].as_str())
    }

    /// The `animation` shorthand that plays the keyframes named `name`.
    pub fn animation(&self, name: &str) -> String {
        format!(
            "{} {}s {} {}s infinite both",
            name,
            num(self.duration),
            self.easing,
            num(self.delay),
        )
    }
}

/// A static visual state an element transitions between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::SHOWN
        }
    }

    pub const fn offset_y(self, y: f32) -> Pose {
        Pose { y, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Pose {
        Pose { scale, ..self }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            num(self.opacity),
            num(self.x),
            num(self.y),
            num(self.scale)
        )
    }
}

/// One-shot transition from `from` to [`Pose::SHOWN`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub from: Pose,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Reveal {
    pub fn new(from: Pose) -> Self {
        Self {
            from,
            duration: 0.6,
            delay: 0.0,
            easing: REVEAL,
        }
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    /// Inline style for the element, hidden until `visible` flips.
    pub fn style(&self, visible: bool) -> String {
        let pose = if visible { Pose::SHOWN } else { self.from };
        let timing = format!("{}s {} {}s", num(self.duration), self.easing, num(self.delay));
        format!(
            "{} transition: opacity {timing}, transform {timing};",
            pose.style()
        )
    }
}

/// Shortest decimal form of `v`, rounded to thousandths.
pub fn num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_renders_css_timing_functions() {
        assert_eq!(Easing::EaseInOut.to_string(), "ease-in-out");
        assert_eq!(REVEAL.to_string(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }

    #[test]
    fn stops_merge_tracks_of_different_lengths() {
        let motion = Motion::new(4.0).scale(&[1.0, 1.3, 1.0]).x(&[0.0, 100.0, -50.0, 0.0]);
        let stops: Vec<String> = motion.stops().into_iter().map(num).collect();
        assert_eq!(stops, vec!["0", "33.333", "50", "66.667", "100"]);
    }

    #[test]
    fn keyframes_interpolate_missing_stops() {
        let motion = Motion::new(4.0).scale(&[1.0, 2.0, 1.0]).opacity(&[0.0, 1.0]);
        let css = motion.keyframes("pulse");
        assert!(css.starts_with("@keyframes pulse {"));
        assert!(css.contains("50% { transform: translate(0px, 0px) scale(2) rotate(0deg); opacity: 0.5; }"));
        assert!(css.contains("100% { transform: translate(0px, 0px) scale(1) rotate(0deg); opacity: 1; }"));
    }

    #[test]
    fn opacity_only_motion_skips_transform() {
        let css = Motion::new(3.0).opacity(&[0.1, 0.3, 0.1]).keyframes("glow");
        assert!(!css.contains("transform"));
        assert!(css.contains("0% { opacity: 0.1; }"));
    }

    #[test]
    fn draw_track_drives_dash_offset() {
        let css = Motion::new(8.0).draw(&[0.0, 1.0, 0.0]).keyframes("trace");
        assert!(css.contains("0% { stroke-dashoffset: 1; }"));
        assert!(css.contains("50% { stroke-dashoffset: 0; }"));
    }

    #[test]
    fn morph_emits_outline_only_on_its_own_stops() {
        let motion = Motion::new(8.0)
            .morph(vec!["M 0 0 L 1 1".into(), "M 0 1 L 1 0".into()])
            .opacity(&[0.2, 0.4, 0.2]);
        let css = motion.keyframes("wave");
        assert!(css.contains("0% { opacity: 0.2; d: path(\"M 0 0 L 1 1\"); }"));
        assert!(css.contains("50% { opacity: 0.4; }"));
        assert!(css.contains("100% { opacity: 0.2; d: path(\"M 0 1 L 1 0\"); }"));
    }

    #[test]
    fn empty_motion_has_no_keyframes() {
        assert_eq!(Motion::new(1.0).keyframes("nothing"), "");
    }

    #[test]
    fn animation_shorthand_reflects_timing() {
        let looping = Motion::new(25.0).delay(2.0);
        assert_eq!(looping.animation("orb"), "orb 25s ease-in-out 2s infinite both");
        let ring = Motion::new(4.5).easing(Easing::EaseOut);
        assert_eq!(ring.animation("ring"), "ring 4.5s ease-out 0s infinite both");
    }

    #[test]
    fn reveal_switches_pose_but_keeps_transition() {
        let reveal = Reveal::new(Pose::hidden().offset_y(30.0)).delay(0.15);
        let hidden = reveal.style(false);
        let shown = reveal.style(true);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 30px) scale(1);"));
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
        assert!(shown.contains("opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1) 0.15s"));
    }
}
