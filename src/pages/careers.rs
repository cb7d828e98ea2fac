use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::animated_text::AnimatedText;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader};
use crate::components::hero::PageHero;
use crate::config;
use crate::content::{mailto, Card};

struct Position {
    title: &'static str,
    department: &'static str,
    location: &'static str,
    kind: &'static str,
    description: &'static str,
}

const POSITIONS: &[Position] = &[
    Position {
        title: "Senior Rust Engineer",
        department: "Engineering",
        location: "Remote / San Francisco",
        kind: "Full-time",
        description: "Build ultra-fast execution engines and smart routing algorithms. You'll work on systems handling 900+ orders per second.",
    },
    Position {
        title: "Quantitative Researcher",
        department: "Research",
        location: "Remote / New York",
        kind: "Full-time",
        description: "Develop and backtest trading strategies. Work with ML models, alternative data, and institutional-grade infrastructure.",
    },
    Position {
        title: "Frontend Engineer",
        department: "Engineering",
        location: "Remote",
        kind: "Full-time",
        description: "Build beautiful, performant trading interfaces. A passion for great UX required.",
    },
    Position {
        title: "DevOps Engineer",
        department: "Infrastructure",
        location: "Remote / London",
        kind: "Full-time",
        description: "Keep our infrastructure running at 99.9% uptime. Kubernetes, AWS, monitoring, and automation are your playground.",
    },
    Position {
        title: "Product Designer",
        department: "Design",
        location: "Remote",
        kind: "Full-time",
        description: "Design interfaces that traders actually want to use. You'll work closely with engineers and traders to ship great products.",
    },
    Position {
        title: "Marketing Lead",
        department: "Growth",
        location: "Remote / Singapore",
        kind: "Full-time",
        description: "Tell our story to traders worldwide. You'll work on content, campaigns, and building our community.",
    },
];

const VALUES: &[(&str, Card)] = &[
    ("</>", Card { title: "Build for traders", description: "We're traders ourselves. Every feature we build solves a real problem we've faced." }),
    ("⚡", Card { title: "Move fast", description: "Ship quickly, iterate based on feedback. No bureaucracy, no red tape." }),
    ("🛡", Card { title: "Security first", description: "We handle billions in trading volume. Security and reliability aren't optional." }),
    ("🌐", Card { title: "Remote-first", description: "Work from anywhere. We're distributed across 5 countries and counting." }),
];

const BENEFITS: &[&str] = &[
    "Competitive salary + equity",
    "Unlimited PTO",
    "Top-tier health insurance",
    "Learning & development budget",
    "Home office stipend",
    "Annual team meetups",
    "Crypto-friendly payroll",
    "401k matching",
];

pub fn application_subject(role: Option<&str>) -> String {
    match role {
        Some(title) => format!("Application: {}", title),
        None => "General Application".to_string(),
    }
}

fn apply_link(role: Option<&str>) -> String {
    mailto(config::CAREERS_EMAIL, &application_subject(role))
}

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <div class="careers-page">
            <PageHero
                icon="💼"
                eyebrow="Join Us"
                title="Build the future of"
                highlight="crypto trading"
                lead="We're building infrastructure that traders actually want to use. If that sounds interesting, we'd love to talk."
            >
                <a href="#open-positions" class="btn btn-primary">{"View Open Roles →"}</a>
                <a href={apply_link(None)} class="btn btn-outline">{"General Application"}</a>
            </PageHero>

            <section class="section" id="open-positions">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader
                        title="Open positions"
                        lead="We're growing fast. Here's what we're looking for right now."
                    />
                    <div class="positions">
                        { for POSITIONS.iter().enumerate().map(|(i, position)| html! {
                            <AnimatedCard delay={i as f32 * 0.1} tilt_intensity={8.0}>
                                <div class="card glass position">
                                    <div class="position-body">
                                        <h3>{ position.title }</h3>
                                        <div class="position-meta">
                                            <span class="position-department">{ position.department }</span>
                                            <span>{ format!("📍 {}", position.location) }</span>
                                            <span>{ format!("🕒 {}", position.kind) }</span>
                                        </div>
                                        <p>{ position.description }</p>
                                    </div>
                                    <a href={apply_link(Some(position.title))} class="btn btn-outline">{"Apply now →"}</a>
                                </div>
                            </AnimatedCard>
                        }) }
                    </div>
                    <AnimatedText delay={0.8} class="careers-general">
                        <p>{"Don't see a role that fits? We're always looking for great people."}</p>
                        <a href={apply_link(None)} class="btn btn-outline">{"Send General Application"}</a>
                    </AnimatedText>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title="What we value" lead="The principles that guide how we work and what we build." />
                    <div class="grid cols-4">
                        { for VALUES.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="blobs" intensity={Intensity::Low} />
                <div class="container narrow wide">
                    <SectionHeader
                        title="Benefits & perks"
                        lead="We take care of our team so you can focus on building great things."
                    />
                    <AnimatedCard delay={0.4} tilt_intensity={0.0}>
                        <ul class="card glass check-list benefits">
                            { for BENEFITS.iter().map(|benefit| html! { <li>{ *benefit }</li> }) }
                        </ul>
                    </AnimatedCard>
                </div>
            </section>

            <section class="section">
                <AnimatedBackground variant="blobs" />
                <div class="container narrow">
                    <AnimatedCard delay={0.2}>
                        <div class="card glass careers-cta">
                            <h2>{"Ready to join us?"}</h2>
                            <p class="lead">{"We're building something special. If you want to be part of it, let's talk."}</p>
                            <div class="btn-row">
                                <a href="#open-positions" class="btn btn-primary">{"View Open Roles"}</a>
                                <a href={apply_link(None)} class="btn btn-outline">{"General Application"}</a>
                            </div>
                        </div>
                    </AnimatedCard>
                </div>
            </section>

            <style>
                {r#"
                .positions {
                    display: grid;
                    gap: 1.25rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .position {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .position h3 {
                    margin: 0 0 0.5rem;
                }
                .position-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.85rem;
                    color: var(--muted);
                    margin-bottom: 0.75rem;
                }
                .position-department {
                    color: var(--primary);
                    font-weight: 600;
                }
                .careers-general {
                    margin-top: 3rem;
                    text-align: center;
                    color: var(--muted);
                }
                .benefits {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                }
                .careers-cta {
                    text-align: center;
                    padding: 4rem 2.5rem;
                }
                @media (max-width: 768px) {
                    .position {
                        flex-direction: column;
                        align-items: flex-start;
                    }
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
    fn role_applications_name_the_role() {
        assert_eq!(
            application_subject(Some("Senior Rust Engineer")),
            "Application: Senior Rust Engineer"
        );
        assert_eq!(application_subject(None), "General Application");
    }

    #[test]
    fn apply_link_targets_careers_inbox() {
        assert_eq!(
            apply_link(Some("DevOps Engineer")),
            "mailto:careers@taquant.io?subject=Application%3A%20DevOps%20Engineer"
        );
    }
}
