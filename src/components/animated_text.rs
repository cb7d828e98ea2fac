use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::{Pose, Reveal};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextVariant {
    #[default]
    Fade,
    Slide,
    Scale,
    Stagger,
}

impl TextVariant {
    pub fn initial_pose(self) -> Pose {
        match self {
            TextVariant::Fade => Pose::hidden(),
            TextVariant::Slide => Pose::hidden().offset_y(30.0),
            TextVariant::Scale => Pose::hidden().scaled(0.9),
            TextVariant::Stagger => Pose::hidden().offset_y(20.0),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: TextVariant,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());
    let reveal = Reveal::new(props.variant.initial_pose()).delay(props.delay);

    html! {
        <div ref={node} class={props.class.clone()} style={reveal.style(visible)}>
            { for props.children.iter() }
        </div>
    }
}

/// Words of `text` paired with the second at which each starts revealing.
pub fn stagger(text: &str, delay: f32) -> Vec<(&str, f32)> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| (word, delay + i as f32 * 0.05))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct StaggerTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f32,
}

/// Reveals `text` one word at a time.
#[function_component(StaggerText)]
pub fn stagger_text(props: &StaggerTextProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());

    html! {
        <span ref={node} class={classes!("stagger-text", props.class.clone())}>
            {
                for stagger(&props.text, props.delay).into_iter().map(|(word, delay)| {
                    let reveal = Reveal::new(TextVariant::Stagger.initial_pose())
                        .duration(0.3)
                        .delay(delay);
                    html! {
                        <span class="stagger-word" style={reveal.style(visible)}>{ word }</span>
                    }
                })
            }
            <style>
                {r#"
                .stagger-text {
                    display: block;
                }
                .stagger-word {
                    display: inline-block;
                    margin-right: 0.5rem;
                }
                "#}
            </style>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_reveal_fifty_millis_apart() {
        let words = stagger("Let's talk about trading", 0.4);
        let names: Vec<&str> = words.iter().map(|(w, _)| *w).collect();
        assert_eq!(names, vec!["Let's", "talk", "about", "trading"]);
        let last = words[3].1;
        assert!((last - 0.55).abs() < 1e-6);
    }

    #[test]
    fn extra_spaces_do_not_create_empty_words() {
        assert_eq!(stagger("  in   action ", 0.0).len(), 2);
    }

    #[test]
    fn variants_start_from_distinct_poses() {
        assert_eq!(TextVariant::default(), TextVariant::Fade);
        assert_eq!(TextVariant::Fade.initial_pose().y, 0.0);
        assert_eq!(TextVariant::Slide.initial_pose().y, 30.0);
        assert_eq!(TextVariant::Scale.initial_pose().scale, 0.9);
        assert_eq!(TextVariant::Stagger.initial_pose().y, 20.0);
    }
}
