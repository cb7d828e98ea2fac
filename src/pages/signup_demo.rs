use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader};
use crate::components::field::{Field, FieldKind};
use crate::components::hero::PageHero;
use crate::content::Card;
use crate::forms::DemoRequest;
use crate::hooks::use_form;

const DEMO_FEATURES: &[(&str, Card)] = &[
    ("⚡", Card { title: "Real-time Execution", description: "Experience our terminal with live market data" }),
    ("📈", Card { title: "Advanced Strategies", description: "Test our quant strategies with paper trading" }),
    ("🛡", Card { title: "Risk Management", description: "See how we protect your capital" }),
];

#[function_component(SignupDemo)]
pub fn signup_demo() -> Html {
    let form = use_form::<DemoRequest>("Demo request");
    let state = &*form.state;
    let form_ref = use_node_ref();

    let scroll_to_form = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match form_ref.cast::<HtmlElement>() {
                Some(element) => element.scroll_into_view(),
                None => log::warn!("Demo form is not mounted"),
            }
        })
    };

    html! {
        <div class="signup-demo-page">
            <PageHero
                icon="🚀"
                eyebrow="Request Demo"
                title="See TA Quant"
                highlight="in action"
                lead="Get a personalized demo of our trading platform. See how professional traders use our tools to execute strategies and manage risk."
            />

            <section class="section">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="What you'll see in the demo"
                        lead="Get hands-on experience with our platform's key features"
                    />
                    <div class="grid cols-3">
                        { for DEMO_FEATURES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.15} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container narrow" ref={form_ref}>
                    <AnimatedCard delay={0.2} tilt_intensity={0.0}>
                        <div class="glass form-card">
                            if state.is_submitted() {
                                <div class="demo-received">
                                    <div class="demo-received-icon">{"✔"}</div>
                                    <h3>{"Demo Request Received!"}</h3>
                                    <p>{"We'll be in touch within 24 hours to schedule your personalized demo."}</p>
                                </div>
                            } else {
                                <div>
                                    <h2>{"Request your demo"}</h2>
                                    <p class="lead">{"Fill out the form below and we'll schedule a personalized demo for you."}</p>
                                </div>
                                <form class="demo-form" onsubmit={form.on_submit.clone()}>
                                    <div class="field-row">
                                        <Field id="name" label="Full Name" placeholder="John Doe" required={true}
                                            value={state.value("name")} on_input={form.on_input.clone()} />
                                        <Field id="email" label="Email" kind={FieldKind::Email} placeholder="john@example.com" required={true}
                                            value={state.value("email")} on_input={form.on_input.clone()} />
                                    </div>
                                    <Field id="company" label="Company / Trading Firm" placeholder="Your company name"
                                        value={state.value("company")} on_input={form.on_input.clone()} />
                                    <Field id="phone" label="Phone Number" kind={FieldKind::Tel} placeholder="+1 (555) 000-0000"
                                        value={state.value("phone")} on_input={form.on_input.clone()} />
                                    if let Some(error) = &form.error {
                                        <p class="form-error">{ error.to_string() }</p>
                                    }
                                    <button type="submit" class="btn btn-primary">{"Request Demo →"}</button>
                                </form>
                            }
                        </div>
                    </AnimatedCard>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="blobs" />
                <div class="container narrow">
                    <AnimatedCard delay={0.2}>
                        <div class="glass card demo-cta">
                            <h2>{"Ready to transform your trading?"}</h2>
                            <p class="lead">{"Join professional traders who trust TA Quant for their execution and strategy needs."}</p>
                            <button class="btn btn-primary" onclick={scroll_to_form}>{"🚀 Request Demo"}</button>
                        </div>
                    </AnimatedCard>
                </div>
            </section>

            <style>
                {r#"
                .demo-form {
                    display: grid;
                    gap: 1.5rem;
                }
                .demo-received {
                    text-align: center;
                    padding: 3rem 0;
                }
                .demo-received-icon {
                    display: grid;
                    place-items: center;
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 9999px;
                    background: rgba(74, 222, 128, 0.1);
                    color: var(--primary);
                    font-size: 2rem;
                }
                .demo-received p {
                    color: var(--muted);
                }
                .demo-cta {
                    text-align: center;
                    padding: 4rem 2.5rem;
                }
                "#}
            </style>
        </div>
    }
}
