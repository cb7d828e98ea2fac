use yew::prelude::*;

use crate::motion::Motion;

#[derive(Properties, PartialEq)]
pub struct FlowingColorsProps {
    /// Three colours: main glow, secondary glow, highlight.
    #[prop_or(vec![AttrValue::Static("#00ff88"), AttrValue::Static("#4dde80"), AttrValue::Static("#00ffd1")])]
    pub colors: Vec<AttrValue>,
}

struct Glow {
    size: u32,
    blur: u32,
    opacity: f32,
    anchor: &'static str,
    motion: Motion,
}

fn glows() -> [Glow; 3] {
    [
        Glow {
            size: 800,
            blur: 120,
            opacity: 0.4,
            anchor: "top: -20%; left: -10%;",
            motion: Motion::new(20.0)
                .x(&[0.0, 100.0, -50.0, 0.0])
                .y(&[0.0, -80.0, 50.0, 0.0])
                .scale(&[1.0, 1.2, 0.9, 1.0]),
        },
        Glow {
            size: 700,
            blur: 100,
            opacity: 0.35,
            anchor: "top: 30%; right: -15%;",
            motion: Motion::new(25.0)
                .x(&[0.0, -120.0, 80.0, 0.0])
                .y(&[0.0, 100.0, -60.0, 0.0])
                .scale(&[1.0, 1.3, 0.8, 1.0])
                .delay(2.0),
        },
        Glow {
            size: 600,
            blur: 110,
            opacity: 0.3,
            anchor: "bottom: -10%; left: 20%;",
            motion: Motion::new(18.0)
                .x(&[0.0, 80.0, -100.0, 0.0])
                .y(&[0.0, -120.0, 70.0, 0.0])
                .scale(&[1.0, 1.1, 1.2, 1.0])
                .delay(4.0),
        },
    ]
}

fn stream(base: u32, outlines: [&str; 3], duration: f32, delay: f32) -> Motion {
    let rest = format!("M 0 {b} Q {} T 1200 {b}", outlines[0], b = base);
    Motion::new(duration)
        .morph(vec![
            rest.clone(),
            format!("M 0 {b} Q {} T 1200 {b}", outlines[1], b = base),
            format!("M 0 {b} Q {} T 1200 {b}", outlines[2], b = base),
            rest,
        ])
        .delay(delay)
}

/// Slow-moving colour field used behind closing calls to action.
#[function_component(FlowingColors)]
pub fn flowing_colors(props: &FlowingColorsProps) -> Html {
    let color = |i: usize| {
        props
            .colors
            .get(i)
            .or_else(|| props.colors.first())
            .map(|c| c.to_string())
            .unwrap_or_else(|| "#00ff88".to_string())
    };

    let mut keyframes = String::new();
    let orbs: Html = glows()
        .into_iter()
        .enumerate()
        .map(|(i, glow)| {
            let name = format!("flow-glow-{}", i);
            keyframes.push_str(&glow.motion.keyframes(&name));
            html! {
                <div
                    class="flow-glow"
                    style={format!(
                        "width: {s}px; height: {s}px; filter: blur({}px); opacity: {}; {} background: radial-gradient(circle, {} 0%, transparent 70%); animation: {};",
                        glow.blur,
                        glow.opacity,
                        glow.anchor,
                        color(i),
                        glow.motion.animation(&name),
                        s = glow.size,
                    )}
                />
            }
        })
        .collect();

    let first = stream(400, ["300 200 600 400", "350 250 650 450", "250 150 550 350"], 15.0, 0.0);
    let second = stream(500, ["400 300 800 500", "450 350 850 550", "350 250 750 450"], 18.0, 3.0);
    keyframes.push_str(&first.keyframes("flow-stream-0"));
    keyframes.push_str(&second.keyframes("flow-stream-1"));

    let mesh = format!(
        "background: radial-gradient(circle at 20% 30%, {a}40 0%, transparent 50%), radial-gradient(circle at 80% 70%, {b}40 0%, transparent 50%), radial-gradient(circle at 50% 50%, {c}30 0%, transparent 60%); mix-blend-mode: screen;",
        a = color(0),
        b = color(1),
        c = color(2),
    );

    html! {
        <div class="flowing-colors" aria-hidden="true">
            <style>{ keyframes }</style>
            { orbs }
            <div class="flow-streams">
                <svg viewBox="0 0 1200 800" preserveAspectRatio="none">
                    <defs>
                        <linearGradient id="flow-stream-0" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color={color(0)} stop-opacity="0.6" />
                            <stop offset="50%" stop-color={color(1)} stop-opacity="0.4" />
                            <stop offset="100%" stop-color={color(2)} stop-opacity="0.6" />
                        </linearGradient>
                        <linearGradient id="flow-stream-1" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color={color(2)} stop-opacity="0.5" />
                            <stop offset="50%" stop-color={color(0)} stop-opacity="0.3" />
                            <stop offset="100%" stop-color={color(1)} stop-opacity="0.5" />
                        </linearGradient>
                    </defs>
                    <path
                        d={first.morph[0].clone()}
                        stroke="url(#flow-stream-0)"
                        stroke-width="3"
                        fill="none"
                        style={format!("filter: blur(2px); animation: {};", first.animation("flow-stream-0"))}
                    />
                    <path
                        d={second.morph[0].clone()}
                        stroke="url(#flow-stream-1)"
                        stroke-width="2"
                        fill="none"
                        style={format!("filter: blur(1.5px); animation: {};", second.animation("flow-stream-1"))}
                    />
                </svg>
            </div>
            <div class="flow-mesh" style={mesh}></div>
            <style>
                {r#"
                .flowing-colors {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .flow-glow {
                    position: absolute;
                    border-radius: 9999px;
                }
                .flow-streams {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                }
                .flow-streams svg {
                    width: 100%;
                    height: 100%;
                }
                .flow-mesh {
                    position: absolute;
                    inset: 0;
                    opacity: 0.3;
                }
                "#}
            </style>
        </div>
    }
}
