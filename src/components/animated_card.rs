use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::hooks::{normalize, use_in_view};
use crate::motion::{num, Motion, Pose, Reveal};

/// Card rotation `(rotate_x, rotate_y)` in degrees for a pointer sitting at
/// `(x, y)`, both measured from the card centre as a fraction of its size.
pub fn tilt(x: f32, y: f32, intensity: f32) -> (f32, f32) {
    let x = x.clamp(-0.5, 0.5);
    let y = y.clamp(-0.5, 0.5);
    (-y * 2.0 * intensity, x * 2.0 * intensity)
}

fn card_reveal(delay: f32) -> Reveal {
    Reveal::new(Pose::hidden().offset_y(30.0)).delay(delay)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: f32,
    #[prop_or(15.0)]
    pub tilt_intensity: f32,
    #[prop_or_default]
    pub glow_on_hover: bool,
}

/// Reveals once scrolled into view and leans towards the pointer while hovered.
#[function_component(AnimatedCard)]
pub fn animated_card(props: &AnimatedCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());
    let rotation = use_state_eq(|| (0.0f32, 0.0f32));

    let onmousemove = {
        let node = node.clone();
        let rotation = rotation.clone();
        let intensity = props.tilt_intensity;
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = node.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                let x = normalize(e.client_x() as f64, rect.left(), rect.width()) - 0.5;
                let y = normalize(e.client_y() as f64, rect.top(), rect.height()) - 0.5;
                rotation.set(tilt(x as f32, y as f32, intensity));
            }
        })
    };

    let onmouseleave = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.set((0.0, 0.0)))
    };

    let (rx, ry) = *rotation;
    let tilt_style = format!(
        "transform: perspective(1000px) rotateX({}deg) rotateY({}deg); transform-style: preserve-3d; transition: transform 0.2s ease-out; height: 100%;",
        num(rx),
        num(ry)
    );

    html! {
        <div
            ref={node}
            class="animated-card"
            style={card_reveal(props.delay).style(visible)}
            {onmousemove}
            {onmouseleave}
        >
            <div class={classes!("tilt", props.glow_on_hover.then_some("glow-on-hover"))} style={tilt_style}>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .animated-card .glow-on-hover:hover {
                    scale: 1.02;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: f32,
    #[prop_or(10.0)]
    pub float_intensity: f32,
}

/// Reveals like [`AnimatedCard`], then bobs up and down forever.
#[function_component(FloatingCard)]
pub fn floating_card(props: &FloatingCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());

    let name = format!("float-{}", num(props.float_intensity).replace('.', "_"));
    let float = Motion::new(3.0)
        .y(&[0.0, -props.float_intensity, 0.0])
        .delay(props.delay);

    html! {
        <div ref={node} style={card_reveal(props.delay).style(visible)}>
            <style>{ float.keyframes(&name) }</style>
            <div style={format!("animation: {}; height: 100%;", float.animation(&name))}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_means_no_tilt() {
        assert_eq!(tilt(0.0, 0.0, 15.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_full_intensity() {
        assert_eq!(tilt(-0.5, -0.5, 15.0), (15.0, -15.0));
        assert_eq!(tilt(0.5, 0.5, 8.0), (-8.0, 8.0));
    }

    #[test]
    fn pointer_outside_the_card_is_clamped() {
        assert_eq!(tilt(3.0, -2.0, 10.0), (10.0, 10.0));
    }

    #[test]
    fn cards_rise_into_place() {
        let hidden = card_reveal(0.3).style(false);
        assert!(hidden.contains("translate(0px, 30px)"));
        assert!(hidden.contains(" 0.3s"));
    }
}
