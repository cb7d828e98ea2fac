use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::features::SectionHeader;
use crate::content::Card;

struct Problem {
    icon: &'static str,
    card: Card,
    image: &'static str,
}

const PROBLEMS: &[Problem] = &[
    Problem {
        icon: "⚠",
        card: Card {
            title: "Fragmented Infrastructure",
            description: "Managing multiple exchange accounts, different APIs, and fragmented liquidity. No unified view of your portfolio.",
        },
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop&q=80",
    },
    Problem {
        icon: "</>",
        card: Card {
            title: "Quant Barrier",
            description: "Building algorithmic trading systems requires deep technical expertise. Most traders can't access proven strategies.",
        },
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=600&h=400&fit=crop&q=80",
    },
    Problem {
        icon: "📈",
        card: Card {
            title: "Vanity Marketing",
            description: "Marketing measured by impressions, not outcomes. No way to connect campaigns to actual trading volume.",
        },
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop&q=80",
    },
];

#[function_component(ProblemsSection)]
pub fn problems_section() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="The 3 problems we solve"
                    lead="Professional crypto trading is broken. Here's how we're fixing it."
                />
                <div class="grid cols-3">
                    { for PROBLEMS.iter().enumerate().map(|(i, problem)| html! {
                        <AnimatedCard delay={i as f32 * 0.15} tilt_intensity={8.0}>
                            <div class="card glass image-card">
                                <div class="image-card-media">
                                    <img src={problem.image} alt={problem.card.title} />
                                    <span class="image-card-badge">{ problem.icon }</span>
                                </div>
                                <div class="image-card-body">
                                    <h3>{ problem.card.title }</h3>
                                    <p>{ problem.card.description }</p>
                                </div>
                            </div>
                        </AnimatedCard>
                    }) }
                </div>
            </div>
        </section>
    }
}
