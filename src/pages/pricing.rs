use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::animated_text::AnimatedText;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader};
use crate::components::hero::PageHero;
use crate::content::{Card, Gradient};
use crate::storage::{last_solution, pricing_target};
use crate::Route;

/// Protocol fee before any staking discount, in thousandths of a percent.
const BASE_FEE_MILLIPCT: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeTier {
    pub min_stake: u32,
    pub discount_pct: u32,
}

pub const FEE_TIERS: &[FeeTier] = &[
    FeeTier { min_stake: 0, discount_pct: 0 },
    FeeTier { min_stake: 1_000, discount_pct: 50 },
    FeeTier { min_stake: 10_000, discount_pct: 75 },
];

impl FeeTier {
    /// The best tier a stake of `stake` TAQ qualifies for.
    pub fn for_stake(stake: u32) -> FeeTier {
        FEE_TIERS
            .iter()
            .rev()
            .find(|tier| stake >= tier.min_stake)
            .copied()
            .unwrap_or(FEE_TIERS[0])
    }

    pub fn fee_millipct(self) -> u32 {
        BASE_FEE_MILLIPCT * (100 - self.discount_pct) / 100
    }

    pub fn fee_label(self) -> String {
        let fee = self.fee_millipct();
        let fraction = format!("{:03}", fee % 1000);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            format!("{}%", fee / 1000)
        } else {
            format!("{}.{}%", fee / 1000, fraction)
        }
    }

    pub fn stake_label(self) -> String {
        format!("{} TAQ", group_thousands(self.min_stake))
    }
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

struct AccessTier {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    gradient: Gradient,
    stake: &'static str,
    min_stake: u32,
    requirements: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const ACCESS_TIERS: &[AccessTier] = &[
    AccessTier {
        icon: "⚡",
        name: "Community",
        description: "Free tier for everyone. Connect your wallet to get started.",
        gradient: Gradient::PRIMARY,
        stake: "0 TAQ",
        min_stake: 0,
        requirements: "Connect wallet",
        features: &[
            "Terminal: Basic execution features",
            "3 verified strategies",
            "Community support",
            "Basic portfolio tracking",
            "Standard protocol fees (0.1%)",
        ],
        cta: "Connect Wallet",
        popular: false,
    },
    AccessTier {
        icon: "🪙",
        name: "Staker",
        description: "Stake tokens for enhanced access and fee reductions",
        gradient: Gradient::VIOLET,
        stake: "1,000+ TAQ",
        min_stake: 1_000,
        requirements: "Stake 1,000+ TAQ tokens",
        features: &[
            "50% protocol fee reduction",
            "Full strategy library access",
            "Priority support",
            "Governance voting rights",
            "Protocol revenue share",
            "Early access to new features",
            "Advanced risk management",
        ],
        cta: "Stake Tokens",
        popular: true,
    },
    AccessTier {
        icon: "🏢",
        name: "Whale",
        description: "Maximum benefits for large stakers and institutions",
        gradient: Gradient::AMBER,
        stake: "10,000+ TAQ",
        min_stake: 10_000,
        requirements: "Stake 10,000+ TAQ tokens",
        features: &[
            "75% protocol fee reduction",
            "Early access to new strategies",
            "Dedicated support channels",
            "Enhanced governance voting weight",
            "Higher revenue share percentage",
            "NFT membership pass (exclusive)",
            "Custom integrations",
            "White-label options",
        ],
        cta: "Stake Tokens",
        popular: false,
    },
];

struct PricingModel {
    icon: &'static str,
    card: Card,
    model: &'static str,
    gradient: Gradient,
    features: &'static [&'static str],
}

const PRICING_MODELS: &[PricingModel] = &[
    PricingModel {
        icon: "⚡",
        card: Card {
            title: "Terminal",
            description: "Small fee per trade (0.05-0.1%). Staking TAQ tokens reduces fees up to 75%",
        },
        model: "Protocol Fees",
        gradient: Gradient::PRIMARY,
        features: &[
            "Stake TAQ tokens for fee discounts",
            "Earn protocol revenue share",
            "Governance voting rights",
            "Fee reduction scales with stake amount",
        ],
    },
    PricingModel {
        icon: "📈",
        card: Card {
            title: "TA Quant",
            description: "10-20% of profits. No profits, no fees. Stakers get priority access to new strategies",
        },
        model: "Performance Share",
        gradient: Gradient::VIOLET,
        features: &[
            "Strategy performance fees",
            "Early access to new strategies",
            "Strategy governance participation",
            "Token rewards for top performers",
        ],
    },
    PricingModel {
        icon: "👥",
        card: Card {
            title: "TA Syndicate",
            description: "Pay based on attributed volume. KOLs earn in tokens + stablecoins",
        },
        model: "Attribution Fees",
        gradient: Gradient::AMBER,
        features: &[
            "Token-based payouts",
            "Verification NFTs for KOLs",
            "Revenue sharing for top performers",
            "DAO governance participation",
        ],
    },
];

const WEB3_BENEFITS: &[(&str, Card)] = &[
    ("🪙", Card { title: "Token Staking", description: "Stake TAQ tokens to unlock features and reduce fees. The more you stake, the more you save." }),
    ("📈", Card { title: "Revenue Sharing", description: "Earn a share of protocol revenue proportional to your stake. Real yield, not promises." }),
    ("👥", Card { title: "Governance Rights", description: "Vote on platform decisions, strategy additions, and protocol upgrades. Your stake, your voice." }),
    ("✨", Card { title: "NFT Membership", description: "Exclusive NFT passes for top stakers unlock premium features and early access." }),
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let target = use_state(|| pricing_target(last_solution()));

    html! {
        <div class="pricing-page">
            <PageHero
                icon="🪙"
                eyebrow="Pricing"
                title="Web3-native pricing"
                highlight="that rewards participation"
                lead="Stake tokens, reduce fees, earn yield. The more you participate, the more you benefit. No subscriptions, no lock-ins, just aligned incentives."
            />

            <section class="section">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="How pricing works"
                        lead="Each product uses a web3-native model that aligns incentives with success."
                    />
                    <div class="grid cols-3">
                        { for PRICING_MODELS.iter().enumerate().map(|(i, model)| html! {
                            <IconCard icon={model.icon} card={model.card} gradient={model.gradient} delay={i as f32 * 0.15}>
                                <span class="pricing-model">{ model.model }</span>
                                <ul class="check-list">
                                    { for model.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                                </ul>
                            </IconCard>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Access tiers"
                        lead="Stake TAQ tokens to unlock features and reduce fees. No monthly subscriptions."
                    />
                    <div class="grid cols-3 tiers">
                        { for ACCESS_TIERS.iter().enumerate().map(|(i, tier)| html! {
                            <AnimatedCard delay={i as f32 * 0.15} tilt_intensity={if tier.popular { 10.0 } else { 8.0 }} glow_on_hover={tier.popular}>
                                <div class={classes!("card", "glass", "tier", tier.popular.then_some("popular"))}>
                                    if tier.popular {
                                        <span class="tier-badge">{"Most Popular"}</span>
                                    }
                                    <div class="icon-tile" style={tier.gradient.css()}>{ tier.icon }</div>
                                    <h3>{ tier.name }</h3>
                                    <p>{ tier.description }</p>
                                    <div class="tier-stake gradient-text">{ tier.stake }</div>
                                    <div class="tier-requirements">
                                        { format!("{} · {} protocol fee", tier.requirements, FeeTier::for_stake(tier.min_stake).fee_label()) }
                                    </div>
                                    <ul class="check-list">
                                        { for tier.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                                    </ul>
                                    <Link<Route>
                                        to={(*target).clone()}
                                        classes={classes!("btn", if tier.popular { "btn-primary" } else { "btn-outline" })}
                                    >
                                        { format!("{} →", tier.cta) }
                                    </Link<Route>>
                                </div>
                            </AnimatedCard>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="blobs" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Why web3-native pricing?"
                        lead="Traditional subscriptions don't align incentives. Token staking does."
                    />
                    <div class="grid cols-4">
                        { for WEB3_BENEFITS.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container narrow">
                    <SectionHeader
                        title="Protocol fee structure"
                        lead="Transparent, predictable fees that decrease as you stake more."
                    />
                    <AnimatedCard delay={0.4} tilt_intensity={0.0}>
                        <div class="card glass">
                            <h4>{"Fee Reduction Tiers"}</h4>
                            <div class="fee-table">
                                { for FEE_TIERS.iter().map(|tier| html! {
                                    <div class="fee-row">
                                        <span>{ tier.stake_label() }</span>
                                        <span class="fee-discount">{ format!("{}% off", tier.discount_pct) }</span>
                                        <span class="fee-value">{ tier.fee_label() }</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </AnimatedCard>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="blobs" />
                <div class="container narrow">
                    <AnimatedText>
                        <div class="card glass pricing-cta">
                            <h2>{"Ready to stake and save?"}</h2>
                            <p class="lead">{"Connect your wallet to get started, or stake tokens to unlock premium features and reduce fees."}</p>
                            <div class="btn-row">
                                <Link<Route> to={(*target).clone()} classes="btn btn-primary">{"Connect Wallet"}</Link<Route>>
                                <Link<Route> to={Route::Technology} classes="btn btn-outline">{"Learn About Staking"}</Link<Route>>
                            </div>
                        </div>
                    </AnimatedText>
                </div>
            </section>

            <style>
                {r#"
                .pricing-model {
                    display: inline-block;
                    margin: 1rem 0 0.5rem;
                    font-size: 0.8rem;
                    font-weight: 600;
                    color: var(--accent);
                }
                .tier {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                }
                .tier.popular {
                    border-color: rgba(74, 222, 128, 0.5);
                    transform: scale(1.05);
                }
                .tier-badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: #000;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .tier-stake {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin-top: 1rem;
                }
                .tier-requirements {
                    font-size: 0.8rem;
                    color: var(--muted);
                    margin-bottom: 1.5rem;
                }
                .tier .check-list {
                    flex: 1;
                    margin-bottom: 2rem;
                }
                .fee-table {
                    display: grid;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .fee-row {
                    display: grid;
                    grid-template-columns: 1fr auto auto;
                    gap: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.6rem;
                    background: rgba(255, 255, 255, 0.02);
                    border: 1px solid var(--border);
                }
                .fee-discount {
                    color: var(--accent);
                }
                .fee-value {
                    font-weight: 700;
                    color: var(--primary);
                }
                .pricing-cta {
                    text-align: center;
                    padding: 4rem 2.5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_table_matches_published_rates() {
        let rows: Vec<(String, u32, String)> = FEE_TIERS
            .iter()
            .map(|t| (t.stake_label(), t.discount_pct, t.fee_label()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("0 TAQ".to_string(), 0, "0.1%".to_string()),
                ("1,000 TAQ".to_string(), 50, "0.05%".to_string()),
                ("10,000 TAQ".to_string(), 75, "0.025%".to_string()),
            ]
        );
    }

    #[test]
    fn stake_picks_highest_qualifying_tier() {
        assert_eq!(FeeTier::for_stake(0).discount_pct, 0);
        assert_eq!(FeeTier::for_stake(999).discount_pct, 0);
        assert_eq!(FeeTier::for_stake(1_000).discount_pct, 50);
        assert_eq!(FeeTier::for_stake(250_000).discount_pct, 75);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
