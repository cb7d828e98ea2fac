use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_card::FloatingCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::cta::Cta;
use crate::components::features::{BulletCard, IconCard, SectionHeader};
use crate::components::hero::PageHero;
use crate::content::{BulletGroup, Card, Stat};
use crate::Route;

const FEATURES: &[(&str, Card)] = &[
    ("🌐", Card { title: "50+ Exchange Integrations", description: "Access liquidity across all major crypto exchanges from a single unified interface. Trade on Binance, Coinbase, Kraken, OKX, Bybit, and dozens more without managing multiple accounts." }),
    ("⚡", Card { title: "Sub-100ms Data Latency", description: "Institutional-grade performance with real-time market data processing. Sub-100ms data latency and sub-500ms order execution ensure you never miss an opportunity." }),
    ("📈", Card { title: "Smart Order Routing", description: "Intelligent algorithms analyze liquidity across exchanges in real-time, routing orders to minimize slippage and execution costs." }),
    ("▤", Card { title: "Advanced Order Types", description: "Deploy sophisticated order types unavailable on individual exchanges: TWAP, VWAP, iceberg orders, conditional orders, basket orders, and trailing stops." }),
    ("📊", Card { title: "Unified Portfolio Management", description: "Track positions, P&L, and risk metrics across all exchanges in real-time, including VaR, portfolio Greeks, correlation analysis, and scenario testing." }),
    ("🛡", Card { title: "Enterprise Security", description: "SOC 2 compliant infrastructure with AES-256 encryption, TLS 1.3, multi-factor authentication, IP whitelisting, and comprehensive audit logging." }),
];

const CAPABILITIES: &[BulletGroup] = &[
    BulletGroup {
        category: "Execution Performance",
        items: &[
            "Sub-100ms market data latency",
            "Sub-500ms order execution",
            "900+ orders per second capability",
            "Real-time order book reconstruction",
        ],
    },
    BulletGroup {
        category: "Order Types",
        items: &[
            "TWAP and VWAP execution",
            "Iceberg and hidden orders",
            "Conditional multi-trigger orders",
            "Basket orders for portfolio rebalancing",
        ],
    },
    BulletGroup {
        category: "Risk Management",
        items: &[
            "Real-time position monitoring",
            "Value at Risk (VaR) calculation",
            "Portfolio Greeks for derivatives",
            "Margin utilization tracking",
        ],
    },
    BulletGroup {
        category: "API & Integration",
        items: &[
            "RESTful APIs for all functions",
            "WebSocket streams for real-time data",
            "FIX protocol for enterprise clients",
            "Python SDK for easy integration",
        ],
    },
];

const METRICS: &[(&str, Stat)] = &[
    ("⚡", Stat { value: "<100ms", label: "Data Latency" }),
    ("🖥", Stat { value: "<500ms", label: "Order Execution" }),
    ("📶", Stat { value: "900+", label: "Orders/Second" }),
    ("🌐", Stat { value: "50+", label: "Exchanges" }),
];

#[function_component(Terminal)]
pub fn terminal() -> Html {
    html! {
        <div class="terminal-page">
            <PageHero
                icon="⌨"
                eyebrow="Terminal"
                title="Institutional-grade"
                highlight="execution infrastructure"
                lead="Trade across 50+ exchanges from one place. Smart routing, advanced orders, real-time analytics. Everything you need, nothing you don't."
            >
                <Link<Route> to={Route::SignupDemo} classes="btn btn-primary">{"Start Trading →"}</Link<Route>>
                <Link<Route> to={Route::Developers} classes="btn btn-outline">{"View Documentation"}</Link<Route>>
            </PageHero>

            <section class="section tinted">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Everything you need to trade professionally"
                        lead="We've combined the best execution infrastructure with analytics and risk tools that actually make sense."
                    />
                    <div class="grid cols-3">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Professional trading capabilities"
                        lead="Features that used to be exclusive to hedge funds. Now available to anyone who's serious about trading."
                    />
                    <div class="grid cols-2">
                        { for CAPABILITIES.iter().enumerate().map(|(i, group)| html! {
                            <BulletCard group={*group} icon="📶" delay={i as f32 * 0.15} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="blobs" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title="Performance benchmarks" lead="Real numbers. No marketing fluff." />
                    <div class="grid cols-4">
                        { for METRICS.iter().enumerate().map(|(i, (icon, stat))| html! {
                            <FloatingCard delay={i as f32 * 0.1} float_intensity={8.0}>
                                <div class="card glass stat">
                                    <div class="page-hero-icon">{ *icon }</div>
                                    <div class="stat-value gradient-text">{ stat.value }</div>
                                    <div class="stat-label">{ stat.label }</div>
                                </div>
                            </FloatingCard>
                        }) }
                    </div>
                </div>
            </section>

            <Cta
                title="Ready to upgrade your "
                highlight="trading infrastructure?"
                lead="Join traders who've moved beyond single-exchange platforms. Start with Terminal and see what you've been missing."
                note={None::<AttrValue>}
            />
        </div>
    }
}
