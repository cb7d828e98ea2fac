use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader, StatGrid};
use crate::components::hero::PageHero;
use crate::content::{Card, Gradient, Stat};

struct StackGroup {
    icon: &'static str,
    category: &'static str,
    gradient: Gradient,
    items: &'static [Card],
}

const STACK: &[StackGroup] = &[
    StackGroup {
        icon: "</>",
        category: "Frontend",
        gradient: Gradient::CYAN,
        items: &[
            Card { title: "React + TypeScript", description: "Responsive, modular web interface" },
            Card { title: "React Flow", description: "Real-time automation flow visualization" },
            Card { title: "TradingView", description: "Professional charting and analytics" },
            Card { title: "tRPC + WebSocket", description: "Type-safe, low-latency communication" },
        ],
    },
    StackGroup {
        icon: "🖥",
        category: "Backend",
        gradient: Gradient::VIOLET,
        items: &[
            Card { title: "Rust Engine", description: "Ultra-fast order execution and processing" },
            Card { title: "Python (FastAPI)", description: "AI orchestration and analytics" },
            Card { title: "Node.js + tRPC", description: "Service unification and API coordination" },
            Card { title: "High-Frequency Scripts", description: "900+ orders per second capability" },
        ],
    },
    StackGroup {
        icon: "🧠",
        category: "AI & Automation",
        gradient: Gradient::AMBER,
        items: &[
            Card { title: "LangChain / LangGraph", description: "Multi-agent orchestration" },
            Card { title: "Multiple AI Providers", description: "Analysis and forecasting models" },
            Card { title: "Visual Flow Builder", description: "No-code automation pipelines" },
            Card { title: "ML Models", description: "Price prediction and regime classification" },
        ],
    },
    StackGroup {
        icon: "🌐",
        category: "Infrastructure",
        gradient: Gradient::EMERALD,
        items: &[
            Card { title: "AWS + GCP", description: "Multi-cloud scalability and uptime" },
            Card { title: "Kubernetes", description: "Container orchestration" },
            Card { title: "Prometheus + Grafana", description: "Real-time observability" },
            Card { title: "Multi-Region Deploy", description: "Global low-latency access" },
        ],
    },
];

const ARCHITECTURE: &[(&str, Card)] = &[
    ("⚡", Card { title: "Sub-100ms Latency", description: "Market data processing with institutional-grade speed through optimized data pipelines and co-located infrastructure." }),
    ("🗄", Card { title: "Scalable Data Layer", description: "PostgreSQL for relational data, TimescaleDB for time-series, Redis for caching, and MongoDB for unstructured data." }),
    ("▤", Card { title: "Microservices Architecture", description: "Loosely coupled components communicating through Kafka and RabbitMQ for independent scaling and isolated failure domains." }),
    ("🛡", Card { title: "Enterprise Security", description: "AES-256 encryption, TLS 1.3, multi-factor authentication, and comprehensive audit logging." }),
    ("📶", Card { title: "99.9% Uptime Target", description: "Distributed architecture with automatic failover, health monitoring, and redundant systems across regions." }),
    ("🔒", Card { title: "SOC 2 Compliance", description: "Enterprise-grade security controls, KYC/AML readiness, GDPR compliance, and comprehensive audit trails." }),
];

const BENCHMARKS: &[Stat] = &[
    Stat { value: "<100ms", label: "Data Latency" },
    Stat { value: "<500ms", label: "Order Execution" },
    Stat { value: "900+", label: "Orders/Second" },
    Stat { value: "50+", label: "Exchange APIs" },
];

#[function_component(Technology)]
pub fn technology() -> Html {
    html! {
        <div class="technology-page">
            <PageHero
                icon="⚙"
                eyebrow="Technology"
                title="Built for"
                highlight="Institutional Performance"
                lead="A modular, high-performance technology stack designed to deliver institutional-grade speed, reliability, and intelligence."
                background="circuit"
            />

            <section class="section tinted">
                <div class="container">
                    <SectionHeader
                        title="Our Technology Stack"
                        lead="Purpose-built infrastructure combining speed, scalability, and intelligence."
                    />
                    <div class="grid cols-2">
                        { for STACK.iter().enumerate().map(|(i, group)| html! {
                            <AnimatedCard delay={i as f32 * 0.1} tilt_intensity={6.0}>
                                <div class="card glass stack-group">
                                    <div class="stack-heading">
                                        <span class="icon-tile" style={group.gradient.css()}>{ group.icon }</span>
                                        <h3>{ group.category }</h3>
                                    </div>
                                    <ul>
                                        { for group.items.iter().map(|item| html! {
                                            <li>
                                                <strong>{ item.title }</strong>
                                                <span>{ item.description }</span>
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            </AnimatedCard>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="circuit" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Architecture Highlights"
                        lead="Enterprise-grade infrastructure designed for reliability, security, and scale."
                    />
                    <div class="grid cols-3">
                        { for ARCHITECTURE.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <SectionHeader
                        title="Performance Benchmarks"
                        lead="Real numbers that matter for professional trading operations."
                    />
                    <StatGrid stats={BENCHMARKS} />
                </div>
            </section>

            <style>
                {r#"
                .stack-heading {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                }
                .stack-heading .icon-tile {
                    margin: 0;
                }
                .stack-heading h3 {
                    margin: 0;
                }
                .stack-group ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 0.9rem;
                }
                .stack-group li {
                    display: grid;
                    gap: 0.2rem;
                }
                .stack-group li span {
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
