//! One template behind the three `/solutions/*` routes; only the copy and
//! the call-to-action target differ between audiences.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::cta::Cta;
use crate::components::features::{BulletCard, IconCard, SectionHeader};
use crate::components::hero::PageHero;
use crate::content::{BulletGroup, Card};
use crate::storage::{pricing_target, Solution};
use crate::Route;

struct SolutionContent {
    icon: &'static str,
    eyebrow: &'static str,
    title: &'static str,
    highlight: &'static str,
    lead: &'static str,
    secondary_label: &'static str,
    features_title: &'static str,
    features_lead: &'static str,
    features: &'static [(&'static str, Card)],
    benefits_title: &'static str,
    benefits_lead: &'static str,
    benefits: &'static [BulletGroup],
    cta_title: &'static str,
    cta_lead: &'static str,
    cta_label: &'static str,
}

const TRADERS: SolutionContent = SolutionContent {
    icon: "👤",
    eyebrow: "For Pro Traders",
    title: "Trade like a pro",
    highlight: "without the complexity",
    lead: "Access professional trading tools, verified strategies, and advanced analytics. Trade across 50+ exchanges with institutional-grade execution.",
    secondary_label: "Request Demo",
    features_title: "Everything you need to trade professionally",
    features_lead: "Professional trading infrastructure that gives you an edge in the markets. No coding required, just powerful tools and strategies.",
    features: &[
        ("⚡", Card { title: "Lightning-Fast Execution", description: "Execute trades across 50+ exchanges with sub-500ms latency. Never miss an opportunity with real-time market data and instant order execution." }),
        ("🧠", Card { title: "Quant Strategies", description: "Access verified quantitative trading strategies with transparent backtesting. Deploy hedge fund-grade algorithms without coding expertise." }),
        ("📊", Card { title: "Advanced Analytics", description: "Track your performance with comprehensive analytics, P&L tracking, and trade history. Understand what's working and optimize your approach." }),
        ("🎯", Card { title: "Smart Order Routing", description: "Automatically route orders to the best exchange for optimal execution. Minimize slippage and maximize your trading profits." }),
        ("🛡", Card { title: "Risk Management", description: "Set position limits, stop losses, and risk parameters. Protect your capital with built-in risk controls and real-time monitoring." }),
        ("👛", Card { title: "Unified Portfolio", description: "Manage all your positions across exchanges from one dashboard. See your complete portfolio, P&L, and risk metrics in real-time." }),
    ],
    benefits_title: "Why pro traders choose TA Quant",
    benefits_lead: "Join thousands of professional traders using TA Quant to execute better trades.",
    benefits: &[
        BulletGroup { category: "Trading Tools", items: &["Access to 50+ exchanges", "Advanced order types (TWAP, VWAP, iceberg)", "Smart order routing", "Real-time market data"] },
        BulletGroup { category: "Strategy Access", items: &["Verified quant strategies", "Transparent backtesting results", "Strategy performance metrics", "Easy strategy deployment"] },
        BulletGroup { category: "Risk & Analytics", items: &["Real-time position monitoring", "P&L tracking and reporting", "Risk limit controls", "Trade history and analysis"] },
        BulletGroup { category: "Support & Community", items: &["24/7 platform support", "Trading community access", "Educational resources", "Regular platform updates"] },
    ],
    cta_title: "Ready to level up ",
    cta_lead: "Join professional traders using TA Quant for better execution and strategy access. Start with a free demo and see the difference.",
    cta_label: "Request Demo 🚀",
};

const FUNDS: SolutionContent = SolutionContent {
    icon: "🏢",
    eyebrow: "For Hedge Funds",
    title: "Institutional infrastructure",
    highlight: "for hedge funds",
    lead: "Execute large positions, manage complex portfolios, and scale your fund with infrastructure built for institutional traders. Trusted by funds managing billions.",
    secondary_label: "Learn More",
    features_title: "Built for institutional scale",
    features_lead: "Enterprise-grade infrastructure designed for hedge funds managing large positions and complex trading strategies.",
    features: &[
        ("🎯", Card { title: "Large Position Execution", description: "Execute massive positions across multiple exchanges with minimal market impact. Use TWAP, VWAP, and iceberg orders to manage large trades discreetly." }),
        ("📊", Card { title: "Advanced Risk Management", description: "Institutional-grade risk controls with real-time VaR, portfolio Greeks, stress testing, and scenario analysis." }),
        ("📈", Card { title: "Performance Attribution", description: "Deep dive into what's driving returns with comprehensive performance attribution, trade cost analysis, and strategy-level reporting." }),
        ("⚡", Card { title: "Ultra-Low Latency", description: "Sub-100ms data latency and sub-500ms execution ensure you capture alpha before it disappears, with co-located infrastructure." }),
        ("🛡", Card { title: "Regulatory Compliance", description: "SOC 2 compliant with comprehensive audit trails, trade reporting, and compliance tools. Meet regulatory requirements with confidence." }),
        ("◔", Card { title: "Multi-Strategy Support", description: "Manage multiple strategies simultaneously across different exchanges and asset classes. Unified portfolio view with strategy-level P&L and risk metrics." }),
    ],
    benefits_title: "Why hedge funds trust TA Quant",
    benefits_lead: "Proven infrastructure trusted by leading crypto hedge funds managing billions in assets.",
    benefits: &[
        BulletGroup { category: "Execution Infrastructure", items: &["Sub-100ms market data latency", "Sub-500ms order execution", "Co-located exchange connections", "Advanced order types and algorithms"] },
        BulletGroup { category: "Risk & Compliance", items: &["Real-time position monitoring", "Value at Risk (VaR) calculations", "Portfolio Greeks and sensitivity analysis", "Comprehensive audit logging"] },
        BulletGroup { category: "Analytics & Reporting", items: &["Performance attribution analysis", "Trade cost analysis (TCA)", "Strategy-level reporting", "Custom reporting and exports"] },
        BulletGroup { category: "Enterprise Features", items: &["Dedicated account management", "Custom integrations and APIs", "White-glove onboarding", "24/7 priority support"] },
    ],
    cta_title: "Ready to scale ",
    cta_lead: "Join leading crypto hedge funds using TA Quant for execution and risk management. Let's discuss how we can support your fund's growth.",
    cta_label: "Contact Sales →",
};

const DATA_ENGINES: SolutionContent = SolutionContent {
    icon: "🗄",
    eyebrow: "For Data Engines",
    title: "High-performance market data",
    highlight: "for your platform",
    lead: "Access normalized market data from 50+ exchanges with sub-100ms latency. Build your trading platform, analytics tool, or research system on reliable infrastructure.",
    secondary_label: "View API Docs",
    features_title: "Everything you need for data infrastructure",
    features_lead: "High-performance market data infrastructure that scales with your platform. Reliable, fast, and easy to integrate.",
    features: &[
        ("🗄", Card { title: "Real-Time Market Data", description: "Access normalized market data from 50+ exchanges in real-time. Sub-100ms latency with WebSocket streams and REST APIs for historical data." }),
        ("⚡", Card { title: "High-Performance Infrastructure", description: "Built for scale with distributed architecture, horizontal scaling, and 99.99% uptime SLA." }),
        ("🔗", Card { title: "Unified Data API", description: "Single API to access data from all exchanges. Normalized data formats, consistent schemas, and comprehensive documentation make integration seamless." }),
        ("📊", Card { title: "Historical Data Access", description: "Access years of historical market data, order book snapshots, and trade history. Perfect for backtesting, research, and analysis." }),
        ("🛡", Card { title: "Enterprise Reliability", description: "SOC 2 compliant infrastructure with redundant systems, automatic failover, and comprehensive monitoring." }),
        ("🖥", Card { title: "Custom Data Processing", description: "Process and transform data in real-time with custom pipelines. Aggregate, filter, and enrich data streams to match your exact requirements." }),
    ],
    benefits_title: "Why data platforms choose TA Quant",
    benefits_lead: "Reliable, high-performance market data infrastructure trusted by leading platforms.",
    benefits: &[
        BulletGroup { category: "Data Coverage", items: &["50+ exchange integrations", "Real-time order book data", "Trade history and tick data", "Historical data archives"] },
        BulletGroup { category: "Performance", items: &["Sub-100ms data latency", "Millions of messages per second", "99.99% uptime SLA", "Horizontal scaling"] },
        BulletGroup { category: "Integration", items: &["RESTful APIs", "WebSocket streams", "FIX protocol support", "Comprehensive SDKs"] },
        BulletGroup { category: "Support & Reliability", items: &["Dedicated support team", "Redundant infrastructure", "Automatic failover", "24/7 monitoring"] },
    ],
    cta_title: "Ready to power ",
    cta_lead: "Join leading platforms using TA Quant for reliable market data infrastructure. Let's discuss how we can support your platform's data needs.",
    cta_label: "Contact Sales →",
};

fn content(solution: Solution) -> &'static SolutionContent {
    match solution {
        Solution::Traders => &TRADERS,
        Solution::Funds => &FUNDS,
        Solution::DataEngines => &DATA_ENGINES,
    }
}

/// Highlighted tail of the closing headline.
fn cta_highlight(solution: Solution) -> &'static str {
    match solution {
        Solution::Traders => "your trading?",
        Solution::Funds => "your hedge fund?",
        Solution::DataEngines => "your data platform?",
    }
}

/// Where the secondary hero button leads.
fn secondary_target(solution: Solution) -> Route {
    match solution {
        Solution::Traders => Route::SignupDemo,
        Solution::Funds => Route::About,
        Solution::DataEngines => Route::Developers,
    }
}

#[derive(Properties, PartialEq)]
pub struct SolutionPageProps {
    pub solution: Solution,
}

#[function_component(SolutionPage)]
pub fn solution_page(props: &SolutionPageProps) -> Html {
    let page = content(props.solution);
    // Traders self-serve; funds and data engines talk to sales.
    let primary = pricing_target(Some(props.solution));

    html! {
        <div class="solution-page">
            <PageHero
                icon={page.icon}
                eyebrow={page.eyebrow}
                title={page.title}
                highlight={page.highlight}
                lead={page.lead}
            >
                <Link<Route> to={primary.clone()} classes="btn btn-primary">{"Get Started →"}</Link<Route>>
                <Link<Route> to={secondary_target(props.solution)} classes="btn btn-outline">
                    { page.secondary_label }
                </Link<Route>>
            </PageHero>

            <section class="section tinted">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title={page.features_title} lead={page.features_lead} />
                    <div class="grid cols-3">
                        { for page.features.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title={page.benefits_title} lead={page.benefits_lead} />
                    <div class="grid cols-2">
                        { for page.benefits.iter().enumerate().map(|(i, group)| html! {
                            <BulletCard group={*group} delay={i as f32 * 0.15} />
                        }) }
                    </div>
                </div>
            </section>

            <Cta
                title={page.cta_title}
                highlight={cta_highlight(props.solution)}
                lead={page.cta_lead}
                primary_label={page.cta_label}
                primary={primary.clone()}
                secondary_label="View Pricing"
                secondary={Route::Pricing}
                note={None::<AttrValue>}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_audience_has_full_content() {
        for solution in Solution::ALL {
            let page = content(solution);
            assert_eq!(page.features.len(), 6, "{:?}", solution);
            assert_eq!(page.benefits.len(), 4, "{:?}", solution);
            assert!(page.benefits.iter().all(|g| g.items.len() == 4));
        }
    }
}
