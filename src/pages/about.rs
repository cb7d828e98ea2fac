use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::animated_text::{AnimatedText, TextVariant};
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader, StatGrid};
use crate::components::hero::PageHero;
use crate::content::{Card, Stat};
use crate::Route;

const VALUES: &[(&str, Card)] = &[
    ("🎯", Card { title: "Performance First", description: "Every decision is measured against trading outcomes. We optimize for real results, not vanity metrics." }),
    ("👥", Card { title: "Trader-Centric Design", description: "Built by traders, for traders. Every feature addresses real pain points in professional trading workflows." }),
    ("💡", Card { title: "Innovation Through Integration", description: "We believe the future of trading is unified. Execution, intelligence, and amplification work best together." }),
    ("🏆", Card { title: "Radical Transparency", description: "All strategies are verified, all performance is audited, all metrics are real. No black boxes." }),
];

const TEAM: &[Stat] = &[
    Stat { value: "40+", label: "Engineering" },
    Stat { value: "15+", label: "Quantitative Research" },
    Stat { value: "20+", label: "Trading Operations" },
    Stat { value: "5", label: "Global Offices" },
];

const VISION: &[&str] = &[
    "Leveling the playing field for all traders",
    "Accelerating crypto market maturation",
    "Enabling global access to professional tools",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <PageHero
                icon="🏛"
                eyebrow="About TA Quant"
                title="Building the Future of"
                highlight="Professional Trading"
                lead="We're on a mission to democratize institutional-grade trading infrastructure, making professional tools accessible to every serious trader."
            />

            <section class="section tinted">
                <div class="container about-mission">
                    <AnimatedText variant={TextVariant::Slide}>
                        <h2>{"The Problem We're Solving"}</h2>
                        <p>{"The cryptocurrency trading infrastructure market suffers from severe fragmentation. Professional traders must choose between inadequate retail platforms and prohibitively expensive institutional tools."}</p>
                        <p>{"Quantitative trading remains inaccessible due to technical barriers, while marketing effectiveness in crypto cannot be measured beyond vanity metrics."}</p>
                        <p class="about-emphasis">{"TA Quant unifies execution, intelligence, and amplification into one integrated platform: the operating system for professional crypto trading."}</p>
                    </AnimatedText>
                    <AnimatedCard delay={0.2} tilt_intensity={6.0}>
                        <div class="card glass">
                            <h3>{"Our Vision"}</h3>
                            <p>{"We envision TA Quant as the comprehensive infrastructure platform where every serious trader, fund, and project operates by default."}</p>
                            <ul class="check-list">
                                { for VISION.iter().map(|line| html! { <li>{ *line }</li> }) }
                            </ul>
                        </div>
                    </AnimatedCard>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="network" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title="Our Values" lead="The principles that guide every decision we make." />
                    <div class="grid cols-4">
                        { for VALUES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <SectionHeader
                        title="Our Team"
                        lead="A world-class team of engineers, quants, and trading professionals building the future of crypto infrastructure."
                    />
                    <StatGrid stats={TEAM} />
                    <div class="btn-row team-join">
                        <Link<Route> to={Route::Careers} classes="btn btn-primary">{"Join Our Team →"}</Link<Route>>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .about-mission {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-mission p {
                    color: var(--muted);
                    line-height: 1.7;
                }
                .about-mission .about-emphasis {
                    color: var(--foreground);
                    font-weight: 500;
                }
                .team-join {
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .about-mission {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
