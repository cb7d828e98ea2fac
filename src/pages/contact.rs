use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::animated_text::AnimatedText;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader};
use crate::components::field::{Field, FieldKind};
use crate::components::hero::PageHero;
use crate::config;
use crate::content::{mailto, Card};
use crate::forms::ContactForm;
use crate::hooks::use_form;

struct Method {
    icon: &'static str,
    card: Card,
    address: &'static str,
}

const METHODS: &[Method] = &[
    Method {
        icon: "✉",
        card: Card { title: "Email", description: "For general inquiries and support" },
        address: config::HELLO_EMAIL,
    },
    Method {
        icon: "💬",
        card: Card { title: "Sales", description: "Interested in enterprise plans?" },
        address: config::SALES_EMAIL,
    },
    Method {
        icon: "💡",
        card: Card { title: "Partnerships", description: "Let's build something together" },
        address: config::PARTNERS_EMAIL,
    },
];

const WISHLIST: &[(&str, Card)] = &[
    ("⚡", Card { title: "New Exchange Integration", description: "Request support for an exchange we don't currently support" }),
    ("💡", Card { title: "Feature Request", description: "Have an idea for a feature? We'd love to hear it" }),
    ("❤", Card { title: "Strategy Request", description: "Want a specific trading strategy added to TA Quant?" }),
    ("💬", Card { title: "Bug Report", description: "Found something that's not working? Let us know" }),
];

const CATEGORIES: &[&str] = &[
    "General question",
    "New Exchange Integration",
    "Feature Request",
    "Strategy Request",
    "Bug Report",
];

const SOCIAL: &[(&str, &str)] = &[
    ("Twitter", "https://x.com/taquant"),
    ("GitHub", "https://github.com/taquant"),
    ("LinkedIn", "https://www.linkedin.com/company/taquant"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_form::<ContactForm>("Contact form");
    let state = &*form.state;

    html! {
        <div class="contact-page">
            <PageHero
                icon="💬"
                eyebrow="Get In Touch"
                title="Let's talk"
                highlight="about trading"
                lead="Have questions? Feature requests? Just want to say hi? We're here and we'd love to hear from you."
            />

            <section class="section">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title="Ways to reach us" lead="Pick the method that works best for you." />
                    <div class="grid cols-3">
                        { for METHODS.iter().enumerate().map(|(i, method)| html! {
                            <IconCard icon={method.icon} card={method.card} delay={i as f32 * 0.1}>
                                <a class="contact-address" href={mailto(method.address, method.card.title)}>
                                    { method.address }
                                </a>
                            </IconCard>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container narrow">
                    <SectionHeader
                        title="Send us a message"
                        lead="Fill out the form below and we'll get back to you as soon as we can."
                    />
                    <AnimatedCard delay={0.4} tilt_intensity={0.0}>
                        <form class="glass form-card" onsubmit={form.on_submit.clone()}>
                            if state.is_submitted() {
                                <div class="form-banner">{"✔ Thanks! We'll get back to you soon."}</div>
                            }
                            <div class="field-row">
                                <Field id="name" label="Name" placeholder="Your name" required={true}
                                    value={state.value("name")} on_input={form.on_input.clone()} />
                                <Field id="email" label="Email" kind={FieldKind::Email} placeholder="your@email.com" required={true}
                                    value={state.value("email")} on_input={form.on_input.clone()} />
                            </div>
                            <Field id="subject" label="Subject" placeholder="What's this about?" required={true}
                                value={state.value("subject")} on_input={form.on_input.clone()} />
                            <Field id="category" label="Category" options={CATEGORIES}
                                value={state.value("category")} on_input={form.on_input.clone()} />
                            <Field id="message" label="Message" kind={FieldKind::TextArea} placeholder="Tell us what's on your mind..." required={true}
                                value={state.value("message")} on_input={form.on_input.clone()} />
                            if let Some(error) = &form.error {
                                <p class="form-error">{ error.to_string() }</p>
                            }
                            <button type="submit" class="btn btn-primary">{"Send Message ➤"}</button>
                        </form>
                    </AnimatedCard>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="blobs" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Feature wishlist"
                        lead="Have an idea? Request a feature, exchange integration, or strategy. We're always listening."
                    />
                    <div class="grid cols-4">
                        { for WISHLIST.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                    <AnimatedText delay={0.6} class="wishlist-note">
                        <p>
                            {"Use the form above or email us directly at "}
                            <a href={mailto(config::WISHLIST_EMAIL, "Wishlist")}>{ config::WISHLIST_EMAIL }</a>
                        </p>
                    </AnimatedText>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Connect with us"
                        lead="Follow along for updates, trading insights, and behind-the-scenes content."
                    />
                    <div class="btn-row">
                        { for SOCIAL.iter().map(|(label, href)| html! {
                            <a class="btn btn-outline" href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>
                                { *label }
                            </a>
                        }) }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .contact-address {
                    display: inline-block;
                    margin-top: 1rem;
                    color: var(--primary);
                    font-weight: 500;
                    text-decoration: none;
                }
                .contact-address:hover {
                    text-decoration: underline;
                }
                .wishlist-note {
                    margin-top: 3rem;
                    text-align: center;
                    color: var(--muted);
                }
                .wishlist-note a {
                    color: var(--primary);
                }
                "#}
            </style>
        </div>
    }
}
