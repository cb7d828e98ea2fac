use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::SectionHeader;

const FAQS: &[(&str, &str)] = &[
    (
        "What is TA Quant?",
        "TA Quant is an integrated platform combining execution, intelligence, and amplification for professional crypto trading. We provide three interconnected products: Terminal for multi-exchange execution, TA Quant for systematic trading intelligence, and TA Syndicate for performance-driven marketing attribution.",
    ),
    (
        "How does Terminal differ from regular exchange platforms?",
        "Terminal provides institutional-grade trading infrastructure with 50+ exchange integrations, smart order routing to minimize slippage, advanced order types (TWAP, VWAP, iceberg orders), unified portfolio management across all exchanges, and sub-100ms data latency with sub-500ms order execution. Unlike single-exchange platforms, Terminal gives you access to liquidity across the entire crypto market from one interface.",
    ),
    (
        "Do I need programming skills to use TA Quant strategies?",
        "No. TA Quant democratizes algorithmic trading by providing verified quantitative strategies that you can deploy without coding. Our no-code automation framework allows you to customize risk parameters, execution preferences, and market selection through an intuitive interface. However, we also provide APIs and SDKs for developers who want to build custom strategies.",
    ),
    (
        "How does TA Syndicate measure marketing effectiveness?",
        "TA Syndicate transforms crypto marketing from impression-based metrics to measurable trading volume attribution. We use multi-touch attribution tracking combining UTM parameters, exchange API integration, and on-chain monitoring to connect marketing touchpoints to actual trading activity. Campaigns are measured by attributed trading volume and ROI, not just followers or impressions.",
    ),
    (
        "What exchanges does Terminal support?",
        "Terminal integrates with 50+ exchanges including Tier 1 exchanges (Binance, Coinbase, Kraken, OKX, Bybit), Tier 2 exchanges, regional exchanges, and derivatives-focused platforms. We continuously expand our exchange coverage based on user demand and market developments.",
    ),
    (
        "Are the trading strategies verified and tested?",
        "Yes. Every strategy undergoes rigorous validation including development, backtesting (minimum 3 years of historical data), paper trading, limited live deployment, and full marketplace launch only after demonstrated success. We provide transparent backtesting results, performance attribution, and complete audit trails for all strategies.",
    ),
    (
        "What security measures are in place?",
        "TA Quant implements enterprise-grade security including multi-factor authentication, AES-256 encryption for data at rest, TLS 1.3 for all communications, role-based access controls, IP whitelisting, and comprehensive audit logging. We're targeting SOC 2 Type II certification and maintain GDPR compliance with KYC/AML readiness.",
    ),
    (
        "How does smart order routing work?",
        "Our smart order routing algorithms analyze liquidity across exchanges in real-time, calculating optimal order splits based on available depth, fees, slippage prediction, and exchange latency. Orders are intelligently routed to minimize total execution cost while ensuring fast fills. Machine learning models continuously improve routing decisions based on historical performance.",
    ),
    (
        "Can I use Terminal, Quant, and Syndicate separately?",
        "Yes, each product creates value independently. However, they're designed to work together, creating powerful network effects. Terminal users generate execution data that improves Quant strategies, Quant strategies drive trading volume that strengthens Terminal's exchange relationships, and Syndicate campaigns bring new users to both Terminal and Quant. The integrated ecosystem provides unified analytics and seamless workflows.",
    ),
    (
        "What pricing models do you offer?",
        "Our pricing aligns with user success. Terminal pricing scales with trading activity, TA Quant charges performance fees on profits, and TA Syndicate earns based on attributed results. We offer free tiers for Terminal and Quant, with enterprise plans available for high-volume users. Contact sales for custom pricing based on your needs.",
    ),
    (
        "Do you support derivatives trading?",
        "Yes, Terminal supports derivatives trading including perpetual futures, options, and other derivative products across multiple exchanges. Our risk management system includes portfolio Greeks (delta, gamma, vega, theta) for derivatives positions, margin utilization tracking, and advanced risk analytics.",
    ),
    (
        "How do I get started?",
        "Getting started is simple. Sign up for a free account to access Terminal's basic features. You can connect your exchange accounts via API keys (read-only initially for security), explore the TA Quant strategy marketplace, or contact our team to discuss Syndicate campaigns. No credit card required for the free tier.",
    ),
];

/// Single-open accordion: clicking the open item closes it, clicking any
/// other item opens that one instead.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", "glass", props.open.then_some("open"))}>
            <button class="faq-question" {onclick} aria-expanded={props.open.to_string()}>
                <span>{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="section faq">
            <AnimatedBackground variant="dots" intensity={Intensity::Low} />
            <div class="container">
                <SectionHeader
                    eyebrow="Questions?"
                    title="Common questions, honest answers"
                    lead="We've tried to answer everything, but if something's missing, just ask."
                />
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle(*open, i)))
                        };
                        html! {
                            <AnimatedCard delay={i as f32 * 0.05} tilt_intensity={0.0}>
                                <FaqItem question={*question} open={*open == Some(i)} {on_toggle}>
                                    <p>{ *answer }</p>
                                </FaqItem>
                            </AnimatedCard>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq {
                    position: relative;
                    overflow: hidden;
                }
                .faq .container {
                    position: relative;
                    z-index: 1;
                }
                .faq-list {
                    display: grid;
                    gap: 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .faq-item {
                    border-radius: 1rem;
                    padding: 0 1.75rem;
                    transition: border-color 0.2s ease;
                }
                .faq-item.open,
                .faq-item:hover {
                    border-color: rgba(74, 222, 128, 0.3);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem 0;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font: inherit;
                    font-weight: 600;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: var(--primary);
                }
                .faq-answer p {
                    margin: 0;
                    padding-bottom: 1.5rem;
                    color: var(--muted);
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_item_closes_the_other() {
        assert_eq!(toggle(None, 3), Some(3));
        assert_eq!(toggle(Some(3), 5), Some(5));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn twelve_questions() {
        assert_eq!(FAQS.len(), 12);
    }
}
