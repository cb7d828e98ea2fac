use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::cta::Cta;
use crate::components::features::{IconCard, SectionHeader, StatGrid};
use crate::components::hero::PageHero;
use crate::content::{Card, Gradient, Stat};
use crate::Route;

const STRATEGIES: &[(&str, Card, Gradient)] = &[
    ("📈", Card { title: "Trend Following", description: "Identify and capture sustained directional movements using moving averages, momentum analysis, and breakout detection." }, Gradient::CYAN),
    ("📊", Card { title: "Mean Reversion", description: "Exploit temporary price dislocations through Bollinger Band reversals, RSI divergences, and statistical arbitrage." }, Gradient::VIOLET),
    ("▤", Card { title: "Market Making", description: "Provide liquidity with grid trading and dynamic quote-based market making strategies." }, Gradient::EMERALD),
    ("⚡", Card { title: "Arbitrage", description: "Capture price discrepancies across exchanges, funding rate opportunities, and triangle arbitrage." }, Gradient::RED),
    ("🎯", Card { title: "Volatility Trading", description: "Trade volatility breakouts and implement straddle positions based on volatility regime analysis." }, Gradient::VIOLET),
    ("🧠", Card { title: "Sentiment & Alternative Data", description: "Leverage social sentiment, on-chain analytics, and funding rate data for edge detection." }, Gradient::AMBER),
];

const FEATURES: &[(&str, Card)] = &[
    ("✔", Card { title: "Verified Strategies", description: "Every strategy undergoes rigorous validation including 3+ years of backtesting, paper trading, and live performance verification before marketplace launch." }),
    ("</>", Card { title: "No-Code Automation", description: "Deploy sophisticated strategies without programming. Customize risk parameters, execution preferences, and market selection through intuitive interfaces." }),
    ("📉", Card { title: "Transparent Backtesting", description: "Institutional-grade backtesting engine with 5+ years of minute-level OHLCV data, realistic execution simulation, and comprehensive performance attribution." }),
    ("🛡", Card { title: "Multi-Layer Risk Management", description: "Strategy-level, portfolio-level, and exchange-level controls with real-time monitoring, drawdown management, and automatic position sizing." }),
    ("✨", Card { title: "Machine Learning Integration", description: "ML-enhanced strategies using LSTM and transformer models, regime classification, sentiment analysis, and alternative data integration." }),
    ("📊", Card { title: "Performance Attribution", description: "Complete transparency with daily performance reports, strategy fact sheets, alpha/beta separation, and execution quality analysis." }),
];

/// Gates a strategy passes, in order, before it is listed.
const VERIFICATION: &[Card] = &[
    Card { title: "Development", description: "Strategy logic development and initial testing" },
    Card { title: "Backtesting", description: "Minimum 3 years of historical data validation" },
    Card { title: "Paper Trading", description: "Live market simulation without real capital" },
    Card { title: "Limited Deployment", description: "Small-scale live trading with monitoring" },
    Card { title: "Marketplace Launch", description: "Full availability after demonstrated success" },
];

const BACKTESTING: &[Stat] = &[
    Stat { value: "5+", label: "Years of Data" },
    Stat { value: "500+", label: "Cryptocurrencies" },
    Stat { value: "Minute", label: "Data Granularity" },
    Stat { value: "Realistic", label: "Execution Simulation" },
];

#[function_component(Quant)]
pub fn quant() -> Html {
    html! {
        <div class="quant-page">
            <PageHero
                icon="🧠"
                eyebrow="TA Quant"
                title="Trading Intelligence"
                highlight="Without the Complexity"
                lead="Deploy verified quantitative strategies with transparent backtesting. Access hedge fund-grade algorithms without coding expertise."
                background="quantum"
            >
                <a href="#strategies" class="btn btn-primary">{"Explore Strategies →"}</a>
                <Link<Route> to={Route::Developers} classes="btn btn-outline">{"View Documentation"}</Link<Route>>
            </PageHero>

            <section class="section tinted" id="strategies">
                <div class="container">
                    <SectionHeader
                        title="Strategy Categories"
                        lead="Access proven quantitative strategies across multiple trading approaches, each verified through rigorous testing."
                    />
                    <div class="grid cols-3">
                        { for STRATEGIES.iter().enumerate().map(|(i, (icon, card, gradient))| html! {
                            <IconCard icon={*icon} card={*card} gradient={*gradient} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        title="Why Choose TA Quant?"
                        lead="Institutional-grade quantitative trading made accessible through verified strategies and transparent performance."
                    />
                    <div class="grid cols-3">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="network" intensity={Intensity::Low} />
                <div class="container narrow wide">
                    <SectionHeader
                        title="Strategy Verification Process"
                        lead="Every strategy undergoes rigorous validation before marketplace availability."
                    />
                    <ol class="verification">
                        { for VERIFICATION.iter().enumerate().map(|(i, step)| html! {
                            <li>
                                <AnimatedCard delay={i as f32 * 0.1} tilt_intensity={4.0}>
                                    <div class="card glass verification-step">
                                        <span class="verification-index">{ (i + 1).to_string() }</span>
                                        <div>
                                            <h3>{ step.title }</h3>
                                            <p>{ step.description }</p>
                                        </div>
                                        <span class="verification-check">{"✔"}</span>
                                    </div>
                                </AnimatedCard>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeader
                        title="Backtesting Infrastructure"
                        lead="Institutional-grade historical data and realistic execution simulation."
                    />
                    <StatGrid stats={BACKTESTING} />
                </div>
            </section>

            <Cta
                title="Start Trading with "
                highlight="Verified Strategies"
                lead="Access hedge fund-grade quantitative strategies without coding. Deploy, customize, and scale with transparent performance tracking."
                primary_label="Browse Strategy Marketplace →"
                secondary_label="Learn More"
                secondary={Route::Technology}
                note={None::<AttrValue>}
            />

            <style>
                {r#"
                .verification {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 1rem;
                }
                .verification-step {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }
                .verification-step h3 {
                    margin: 0 0 0.25rem;
                }
                .verification-step p {
                    margin: 0;
                }
                .verification-index {
                    display: grid;
                    place-items: center;
                    flex-shrink: 0;
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: #000;
                    font-weight: 700;
                }
                .verification-check {
                    margin-left: auto;
                    color: var(--accent);
                    font-size: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
