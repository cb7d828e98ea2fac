use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedText, TextVariant};
use crate::components::flowing_colors::FlowingColors;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    #[prop_or(AttrValue::Static("Ready to Trade Like an "))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("Institution?"))]
    pub highlight: AttrValue,
    #[prop_or(AttrValue::Static(
        "Join professional traders who have upgraded their infrastructure. Start with Terminal, unlock Quant strategies, and scale with Syndicate."
    ))]
    pub lead: AttrValue,
    #[prop_or(AttrValue::Static("Get Started Free →"))]
    pub primary_label: AttrValue,
    #[prop_or(Route::SignupDemo)]
    pub primary: Route,
    #[prop_or(AttrValue::Static("Contact Sales"))]
    pub secondary_label: AttrValue,
    #[prop_or(Route::Contact)]
    pub secondary: Route,
    #[prop_or(Some(AttrValue::Static(
        "No credit card required • Free tier available • Enterprise plans available"
    )))]
    pub note: Option<AttrValue>,
}

/// Closing call to action over a flowing colour field.
#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    html! {
        <section class="section cta">
            <FlowingColors />
            <div class="container">
                <AnimatedText variant={TextVariant::Slide} class="cta-content">
                    <h2>
                        { props.title.clone() }
                        <span class="gradient-text">{ props.highlight.clone() }</span>
                    </h2>
                    <p class="lead">{ props.lead.clone() }</p>
                    <div class="btn-row">
                        <Link<Route> to={props.primary.clone()} classes="btn btn-primary">
                            { props.primary_label.clone() }
                        </Link<Route>>
                        <Link<Route> to={props.secondary.clone()} classes="btn btn-outline">
                            { props.secondary_label.clone() }
                        </Link<Route>>
                    </div>
                    if let Some(note) = &props.note {
                        <p class="cta-note">{ note.clone() }</p>
                    }
                </AnimatedText>
            </div>
            <style>
                {r#"
                .cta {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 0;
                }
                .cta .container {
                    position: relative;
                    z-index: 1;
                }
                .cta-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .cta-content h2 {
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    margin: 0 0 1.5rem;
                }
                .cta-content .lead {
                    margin: 0 auto 2.5rem;
                    max-width: 42rem;
                }
                .cta-note {
                    margin-top: 1.5rem;
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                "#}
            </style>
        </section>
    }
}
