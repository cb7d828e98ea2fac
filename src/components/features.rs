//! The home page product overview, plus the header and icon card that most
//! content sections are assembled from.

use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::animated_text::{AnimatedText, TextVariant};
use crate::content::{BulletGroup, Card, Gradient, Stat};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <AnimatedText variant={TextVariant::Slide} delay={0.2} class="section-header">
            if let Some(eyebrow) = &props.eyebrow {
                <span class="eyebrow">{ eyebrow.clone() }</span>
            }
            <h2>{ props.title.clone() }</h2>
            if let Some(lead) = &props.lead {
                <p class="lead">{ lead.clone() }</p>
            }
        </AnimatedText>
    }
}

#[derive(Properties, PartialEq)]
pub struct IconCardProps {
    pub icon: AttrValue,
    pub card: Card,
    #[prop_or(Gradient::PRIMARY)]
    pub gradient: Gradient,
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub children: Children,
}

/// Glass card with a gradient icon tile, a title and a description. Any
/// children render underneath the description.
#[function_component(IconCard)]
pub fn icon_card(props: &IconCardProps) -> Html {
    html! {
        <AnimatedCard delay={props.delay} tilt_intensity={8.0}>
            <div class="card glass icon-card">
                <div class="icon-tile" style={props.gradient.css()}>{ props.icon.clone() }</div>
                <h3>{ props.card.title }</h3>
                <p>{ props.card.description }</p>
                { for props.children.iter() }
            </div>
        </AnimatedCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct BulletCardProps {
    pub group: BulletGroup,
    #[prop_or(AttrValue::Static("✔"))]
    pub icon: AttrValue,
    #[prop_or_default]
    pub summary: Option<AttrValue>,
    #[prop_or_default]
    pub delay: f32,
}

/// Titled checklist, used for capability and benefit groups.
#[function_component(BulletCard)]
pub fn bullet_card(props: &BulletCardProps) -> Html {
    html! {
        <AnimatedCard delay={props.delay} tilt_intensity={6.0}>
            <div class="card glass bullet-card">
                <div class="bullet-card-heading">
                    <span class="icon-tile small">{ props.icon.clone() }</span>
                    <h3>{ props.group.category }</h3>
                </div>
                if let Some(summary) = &props.summary {
                    <p>{ summary.clone() }</p>
                }
                <ul class="check-list">
                    { for props.group.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </div>
        </AnimatedCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: &'static [Stat],
}

/// Row of headline figures that pop in one after another.
#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="grid cols-4 stat-grid">
            { for props.stats.iter().enumerate().map(|(i, stat)| html! {
                <AnimatedText variant={TextVariant::Scale} delay={i as f32 * 0.1} class="stat">
                    <div class="stat-value gradient-text">{ stat.value }</div>
                    <div class="stat-label">{ stat.label }</div>
                </AnimatedText>
            }) }
        </div>
    }
}

struct Product {
    icon: &'static str,
    name: &'static str,
    tagline: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    gradient: Gradient,
}

const PRODUCTS: &[Product] = &[
    Product {
        icon: "⌨",
        name: "Terminal",
        tagline: "Execution Infrastructure",
        description: "Multi-exchange trading with smart order routing, advanced order types, and real-time analytics. Sub-100ms latency across 50+ exchanges.",
        features: &["Smart Order Routing", "50+ Exchanges", "Advanced Orders", "Real-time Analytics"],
        gradient: Gradient::PRIMARY,
    },
    Product {
        icon: "🧠",
        name: "TA Quant",
        tagline: "Trading Intelligence",
        description: "Verified quantitative strategies with transparent backtesting. Deploy hedge fund-grade algorithms without coding expertise.",
        features: &["Verified Strategies", "No-Code Automation", "ML Integration", "Risk Management"],
        gradient: Gradient::VIOLET,
    },
    Product {
        icon: "📣",
        name: "TA Syndicate",
        tagline: "Marketing Attribution",
        description: "Transform impressions into measurable trading volume. Performance-based campaigns with verified KOL network.",
        features: &["Volume Attribution", "KOL Network", "Campaign Analytics", "ROI Tracking"],
        gradient: Gradient::AMBER,
    },
];

const ADVANTAGES: &[(&str, Card)] = &[
    ("▤", Card { title: "Unified Platform", description: "Execution, intelligence, and amplification in one integrated ecosystem" }),
    ("⚡", Card { title: "Sub-100ms Latency", description: "Institutional-grade performance with real-time data processing" }),
    ("🛡", Card { title: "Enterprise Security", description: "SOC 2 compliant with AES-256 encryption and multi-factor auth" }),
    ("📈", Card { title: "Proven Strategies", description: "Backtested algorithms with transparent performance metrics" }),
    ("🌐", Card { title: "Global Coverage", description: "50+ exchange integrations with multi-region infrastructure" }),
    ("🔒", Card { title: "Risk Controls", description: "Multi-layer risk management with real-time monitoring" }),
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="section tinted">
            <div class="container">
                <SectionHeader
                    eyebrow="Products"
                    title="Three Products, One Ecosystem"
                    lead="Each product creates value independently while generating network effects that compound across the entire platform."
                />

                <div class="grid cols-3">
                    { for PRODUCTS.iter().enumerate().map(|(i, product)| html! {
                        <IconCard
                            icon={product.icon}
                            card={Card { title: product.name, description: product.description }}
                            gradient={product.gradient}
                            delay={i as f32 * 0.15}
                        >
                            <span class="product-tagline">{ product.tagline }</span>
                            <ul class="check-list">
                                { for product.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                            </ul>
                        </IconCard>
                    }) }
                </div>

                <div class="advantages">
                    <SectionHeader
                        title="Why TA Quant?"
                        lead="Built from the ground up for professional traders who demand institutional-grade infrastructure."
                    />
                    <div class="grid cols-3">
                        { for ADVANTAGES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .product-tagline {
                    display: inline-block;
                    margin: 1rem 0 0.5rem;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: var(--primary);
                }
                .advantages {
                    margin-top: 6rem;
                }
                "#}
            </style>
        </section>
    }
}
