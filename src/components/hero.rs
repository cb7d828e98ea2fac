use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedText, StaggerText, TextVariant};
use crate::components::background::AnimatedBackground;
use crate::content::Stat;
use crate::motion::{Pose, Reveal};
use crate::Route;

const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Exchanges" },
    Stat { value: "<100ms", label: "Latency" },
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "24/7", label: "Support" },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <AnimatedBackground variant="blobs" />
            <div class="hero-beam left"></div>
            <div class="hero-beam right"></div>

            <div class="container hero-content">
                <AnimatedText variant={TextVariant::Slide}>
                    <div class="eyebrow glass">{"⚡ Institutional-Grade Infrastructure"}</div>
                </AnimatedText>

                <AnimatedText variant={TextVariant::Slide} delay={0.1}>
                    <h1 class="hero-title">
                        {"The Operating System for "}
                        <span class="gradient-text">{"Professional Crypto Trading"}</span>
                    </h1>
                </AnimatedText>

                <AnimatedText variant={TextVariant::Slide} delay={0.2}>
                    <p class="lead">
                        {"Unified execution, quantitative intelligence, and performance-driven marketing. Everything serious traders need in one integrated platform."}
                    </p>
                </AnimatedText>

                <AnimatedText variant={TextVariant::Slide} delay={0.3} class="btn-row">
                    <Link<Route> to={Route::SignupDemo} classes="btn btn-primary">{"Start Trading →"}</Link<Route>>
                    <Link<Route> to={Route::Terminal} classes="btn btn-outline">{"▶ Watch Demo"}</Link<Route>>
                </AnimatedText>

                <AnimatedText variant={TextVariant::Slide} delay={0.4} class="hero-stats">
                    { for STATS.iter().enumerate().map(|(i, stat)| {
                        let reveal = Reveal::new(Pose::hidden().scaled(0.8))
                            .duration(0.5)
                            .delay(0.5 + i as f32 * 0.1);
                        html! {
                            <div class="hero-stat" style={reveal.style(true)}>
                                <div class="hero-stat-value">{ stat.value }</div>
                                <div class="hero-stat-label">{ stat.label }</div>
                            </div>
                        }
                    }) }
                </AnimatedText>

                <AnimatedText variant={TextVariant::Slide} delay={0.6} class="hero-trust">
                    <span>{"🛡 SOC 2 Compliant"}</span>
                    <span>{"📈 Enterprise Ready"}</span>
                    <span>{"Trusted by Professional Traders Worldwide"}</span>
                </AnimatedText>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding-top: 5rem;
                }
                .hero-beam {
                    position: absolute;
                    top: 0;
                    width: 1px;
                    height: 100%;
                    opacity: 0.1;
                }
                .hero-beam.left {
                    left: 25%;
                    background: linear-gradient(to bottom, transparent, var(--primary), transparent);
                }
                .hero-beam.right {
                    right: 25%;
                    background: linear-gradient(to bottom, transparent, var(--accent), transparent);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    text-align: center;
                }
                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin: 1.5rem 0;
                }
                .hero-content .btn-row {
                    justify-content: center;
                    margin: 2.5rem 0 4rem;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .hero-stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .hero-stat-label {
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                .hero-trust {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    margin-top: 5rem;
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .hero-stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub icon: AttrValue,
    pub eyebrow: AttrValue,
    /// Headline, revealed word by word.
    pub title: AttrValue,
    /// Second headline line, rendered with the brand gradient.
    pub highlight: AttrValue,
    pub lead: AttrValue,
    #[prop_or(AttrValue::Static("blobs"))]
    pub background: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Opening section shared by every page other than home.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <AnimatedBackground variant={props.background.clone()} />
            <div class="container">
                <AnimatedText delay={0.2} class="page-hero-badge">
                    <span class="page-hero-icon">{ props.icon.clone() }</span>
                    <span class="eyebrow">{ props.eyebrow.clone() }</span>
                </AnimatedText>
                <h1>
                    <StaggerText text={props.title.clone()} delay={0.4} />
                    <StaggerText text={props.highlight.clone()} class="gradient-text" delay={0.7} />
                </h1>
                <AnimatedText variant={TextVariant::Slide} delay={1.0}>
                    <p class="lead">{ props.lead.clone() }</p>
                </AnimatedText>
                if !props.children.is_empty() {
                    <AnimatedText variant={TextVariant::Slide} delay={1.2} class="btn-row">
                        { for props.children.iter() }
                    </AnimatedText>
                }
            </div>
        </section>
    }
}
