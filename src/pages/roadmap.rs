use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::animated_text::{AnimatedText, TextVariant};
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::hero::PageHero;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Current,
    Upcoming,
}

struct Phase {
    icon: &'static str,
    name: &'static str,
    status: Status,
    timeline: &'static str,
    description: &'static str,
    /// Milestones and whether each has shipped.
    items: &'static [(&'static str, bool)],
}

const PHASES: &[Phase] = &[
    Phase {
        icon: "🚀",
        name: "Launch Phase",
        status: Status::Current,
        timeline: "Q1 2025",
        description: "Core platform launch with essential integrations",
        items: &[
            ("Complete core exchange integrations", true),
            ("Deploy verified quantitative strategies", true),
            ("Expand KOL network globally", false),
            ("Demonstrate attribution capabilities", false),
        ],
    },
    Phase {
        icon: "▤",
        name: "Scale Phase",
        status: Status::Upcoming,
        timeline: "Q2-Q3 2025",
        description: "Platform expansion and mobile experience",
        items: &[
            ("Mobile applications (iOS & Android)", false),
            ("Enhanced analytics dashboard", false),
            ("Strategy library expansion", false),
            ("Self-serve campaign platform", false),
        ],
    },
    Phase {
        icon: "🛡",
        name: "Enterprise Phase",
        status: Status::Upcoming,
        timeline: "Q4 2025",
        description: "Enterprise-grade features and compliance",
        items: &[
            ("White-label solutions", false),
            ("AI trading assistants", false),
            ("Advanced derivatives support", false),
            ("SOC 2 Type II certification", false),
        ],
    },
    Phase {
        icon: "🧠",
        name: "Innovation Phase",
        status: Status::Upcoming,
        timeline: "2026",
        description: "DeFi integration and advanced ML capabilities",
        items: &[
            ("DeFi protocol integration", false),
            ("Traditional finance bridges", false),
            ("OTC and prime services", false),
            ("Advanced ML capabilities", false),
        ],
    },
    Phase {
        icon: "🌐",
        name: "Platform Phase",
        status: Status::Upcoming,
        timeline: "2026+",
        description: "Global expansion and ecosystem development",
        items: &[
            ("Developer marketplace", false),
            ("Global geographic expansion", false),
            ("Decentralized governance", false),
            ("Industry-defining position", false),
        ],
    },
];

impl Phase {
    fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|(_, shipped)| *shipped).count();
        (done, self.items.len())
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let last = PHASES.len() - 1;

    html! {
        <div class="roadmap-page">
            <PageHero
                icon="🗺"
                eyebrow="Roadmap"
                title="Building the"
                highlight="Future of Trading"
                lead="Our phased development approach ensures we deliver stable, tested features while continuously innovating toward our vision."
            />

            <section class="section">
                <div class="container timeline">
                    { for PHASES.iter().enumerate().map(|(i, phase)| {
                        let current = phase.status == Status::Current;
                        let (done, total) = phase.progress();
                        html! {
                            <div class="timeline-entry">
                                if i != last {
                                    <div class="timeline-line"></div>
                                }
                                <div class={classes!("timeline-dot", current.then_some("current"))}>
                                    { if current { "●" } else { "○" } }
                                </div>
                                <AnimatedCard delay={i as f32 * 0.1} tilt_intensity={5.0}>
                                    <div class={classes!("card", "glass", "phase", current.then_some("current"))}>
                                        <div class="phase-heading">
                                            <span class="phase-icon">{ phase.icon }</span>
                                            <div>
                                                <h3>{ phase.name }</h3>
                                                <span class="phase-timeline">{ phase.timeline }</span>
                                            </div>
                                            if current {
                                                <span class="phase-badge">{"In Progress"}</span>
                                            }
                                        </div>
                                        <p>{ phase.description }</p>
                                        <ul class="phase-items">
                                            { for phase.items.iter().map(|(text, shipped)| html! {
                                                <li class={classes!(shipped.then_some("done"))}>
                                                    <span>{ if *shipped { "✔" } else { "○" } }</span>
                                                    { *text }
                                                </li>
                                            }) }
                                        </ul>
                                        <div class="phase-progress">{ format!("{}/{} milestones shipped", done, total) }</div>
                                    </div>
                                </AnimatedCard>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="quantum" intensity={Intensity::Low} />
                <div class="container narrow wide">
                    <AnimatedText variant={TextVariant::Scale} class="card glass roadmap-vision">
                        <h2>{"Our Long-Term Vision"}</h2>
                        <p class="lead">
                            {"TA Quant aims to become the comprehensive infrastructure platform, the Bloomberg Terminal for crypto, where every serious trader, fund, and project operates by default."}
                        </p>
                    </AnimatedText>
                </div>
            </section>

            <style>
                {r#"
                .timeline {
                    max-width: 56rem;
                }
                .timeline-entry {
                    position: relative;
                    padding-left: 4rem;
                    padding-bottom: 3rem;
                }
                .timeline-line {
                    position: absolute;
                    left: 1.2rem;
                    top: 2.5rem;
                    bottom: 0;
                    width: 2px;
                    background: linear-gradient(to bottom, var(--primary), var(--border));
                }
                .timeline-dot {
                    position: absolute;
                    left: 0;
                    top: 0.5rem;
                    display: grid;
                    place-items: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: var(--card);
                    border: 1px solid var(--border);
                    color: var(--muted);
                }
                .timeline-dot.current {
                    background: var(--primary);
                    color: #000;
                    box-shadow: 0 0 24px rgba(74, 222, 128, 0.5);
                }
                .phase.current {
                    border-color: rgba(74, 222, 128, 0.5);
                }
                .phase-heading {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .phase-heading h3 {
                    margin: 0;
                }
                .phase-icon {
                    font-size: 1.5rem;
                }
                .phase-timeline {
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                .phase-badge {
                    margin-left: auto;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(74, 222, 128, 0.15);
                    color: var(--primary);
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .phase-items {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.6rem;
                    color: var(--muted);
                }
                .phase-items li {
                    display: flex;
                    gap: 0.6rem;
                }
                .phase-items li.done {
                    color: var(--foreground);
                }
                .phase-items li.done span {
                    color: var(--primary);
                }
                .phase-progress {
                    margin-top: 1rem;
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                .roadmap-vision {
                    text-align: center;
                    padding: 3rem;
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
    fn exactly_one_phase_is_in_progress() {
        let current: Vec<&str> = PHASES
            .iter()
            .filter(|p| p.status == Status::Current)
            .map(|p| p.name)
            .collect();
        assert_eq!(current, vec!["Launch Phase"]);
    }

    #[test]
    fn progress_counts_shipped_milestones() {
        assert_eq!(PHASES[0].progress(), (2, 4));
        assert_eq!(PHASES[1].progress(), (0, 4));
    }
}
