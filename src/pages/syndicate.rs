use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_text::{AnimatedText, TextVariant};
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::cta::Cta;
use crate::components::features::{BulletCard, IconCard, SectionHeader, StatGrid};
use crate::components::hero::PageHero;
use crate::content::{BulletGroup, Card, Gradient, Stat};
use crate::Route;

const PROBLEMS: &[&str] = &[
    "Marketing measured by impressions, not outcomes",
    "KOL campaigns lack accountability and attribution",
    "No way to connect marketing spend to trading volume",
    "Fake followers and wrong audience targeting",
];

const SOLUTIONS: &[&str] = &[
    "Volume attribution through exchange API integration",
    "Verified KOLs with authentic audiences and engagement",
    "Performance-based pricing aligned with results",
    "Complete transparency from impressions to trades",
];

const FEATURES: &[(&str, Card)] = &[
    ("📈", Card { title: "Volume Attribution", description: "Transform impressions into measurable trading volume. Track full-funnel attribution from marketing exposure to actual trades through exchange API integration." }),
    ("👥", Card { title: "Verified KOL Network", description: "Access verified Key Opinion Leaders across multiple countries with authentic audiences, engagement validation, and proven conversion tracking." }),
    ("🎯", Card { title: "Performance-Based Campaigns", description: "Pay for results, not impressions. Campaigns are measured by attributed trading volume and ROI, ensuring marketing budgets drive real outcomes." }),
    ("📊", Card { title: "Multi-Touch Attribution", description: "Comprehensive attribution tracking combining UTM parameters, exchange API integration, on-chain monitoring, and data-driven attribution models." }),
    ("🏆", Card { title: "Trading Competitions", description: "White-label competition platform with customizable configuration, real-time leaderboards, fraud prevention, and automated prize distribution." }),
    ("🌐", Card { title: "Narrative Intelligence", description: "Automated narrative identification, competitive intelligence, sentiment monitoring, and strategic positioning guidance for optimal campaign timing." }),
];

const ATTRIBUTION: &[(&str, Card)] = &[
    ("🎯", Card { title: "UTM Tracking", description: "Comprehensive parameter tracking across all marketing touchpoints" }),
    ("📊", Card { title: "Exchange API Integration", description: "Authoritative trading volume data through direct exchange partnerships" }),
    ("🛡", Card { title: "On-Chain Attribution", description: "Wallet tracking and transaction volume attribution for DeFi protocols" }),
    ("📉", Card { title: "Multi-Touch Models", description: "First-touch, last-touch, linear, time-decay, and data-driven attribution" }),
];

const KOL_TIERS: &[(&str, BulletGroup)] = &[
    (
        "Top-tier influencers with massive reach and proven track records",
        BulletGroup { category: "Tier 1", items: &["Highest volume potential", "Premium placement", "Dedicated support"] },
    ),
    (
        "Established influencers with strong engagement and niche expertise",
        BulletGroup { category: "Tier 2", items: &["High engagement rates", "Targeted audiences", "Cost-effective reach"] },
    ),
    (
        "Emerging influencers with authentic communities and growth potential",
        BulletGroup { category: "Tier 3", items: &["Authentic engagement", "Lower costs", "Early access to trends"] },
    ),
];

const METRICS: &[Stat] = &[
    Stat { value: "Volume", label: "Attributed Trading" },
    Stat { value: "ROI", label: "Return on Investment" },
    Stat { value: "Global", label: "KOL Network" },
    Stat { value: "Real-Time", label: "Analytics" },
];

#[function_component(Syndicate)]
pub fn syndicate() -> Html {
    html! {
        <div class="syndicate-page">
            <PageHero
                icon="📣"
                eyebrow="TA Syndicate"
                title="Marketing Attribution"
                highlight="That Actually Matters"
                lead="Transform crypto marketing from impressions to measurable trading volume. Performance-based campaigns with verified KOL network and transparent ROI tracking."
                background="waves"
            >
                <Link<Route> to={Route::SignupDemo} classes="btn btn-primary">{"Launch Campaign →"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="btn btn-outline">{"View Case Studies"}</Link<Route>>
            </PageHero>

            <section class="section tinted">
                <div class="container narrow wide">
                    <div class="grid cols-2">
                        <AnimatedText variant={TextVariant::Slide} class="card glass problem-list">
                            <h3>{"The Problem"}</h3>
                            <ul>
                                { for PROBLEMS.iter().map(|p| html! { <li>{ *p }</li> }) }
                            </ul>
                        </AnimatedText>
                        <AnimatedText variant={TextVariant::Slide} delay={0.2} class="card glass solution-list">
                            <h3>{"The Solution"}</h3>
                            <ul class="check-list">
                                { for SOLUTIONS.iter().map(|s| html! { <li>{ *s }</li> }) }
                            </ul>
                        </AnimatedText>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        title="Complete Marketing Attribution Platform"
                        lead="Everything you need to run performance-driven crypto marketing campaigns with measurable results."
                    />
                    <div class="grid cols-3">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} gradient={Gradient::AMBER} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="network" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Multi-Layer Attribution Tracking"
                        lead="Connect marketing touchpoints to trading outcomes through comprehensive attribution infrastructure."
                    />
                    <div class="grid cols-4">
                        { for ATTRIBUTION.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        title="Verified KOL Network"
                        lead="Access verified influencers across multiple countries with authentic audiences and proven conversion tracking."
                    />
                    <div class="grid cols-3">
                        { for KOL_TIERS.iter().enumerate().map(|(i, (summary, tier))| html! {
                            <BulletCard group={*tier} icon="👥" summary={*summary} delay={i as f32 * 0.15} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <SectionHeader
                        title="Campaign Performance Metrics"
                        lead="Real-time tracking of campaign effectiveness with complete transparency."
                    />
                    <StatGrid stats={METRICS} />
                </div>
            </section>

            <Cta
                title="Ready to Measure "
                highlight="Real Marketing Results?"
                lead="Stop paying for impressions. Start measuring trading volume. Launch your first performance-based campaign with TA Syndicate."
                primary_label="Get Started →"
                note={None::<AttrValue>}
            />

            <style>
                {r#"
                .problem-list h3 {
                    color: #ef4444;
                }
                .problem-list ul {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 12px;
                    color: var(--muted);
                }
                .problem-list li::before {
                    content: "×";
                    color: #ef4444;
                    margin-right: 12px;
                }
                .solution-list {
                    border-color: rgba(74, 222, 128, 0.5);
                }
                .solution-list h3 {
                    color: var(--primary);
                }
                "#}
            </style>
        </div>
    }
}
