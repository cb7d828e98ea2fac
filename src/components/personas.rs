use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::features::SectionHeader;
use crate::components::navbar::on_follow;
use crate::content::{Card, Gradient};
use crate::Route;

struct Persona {
    icon: &'static str,
    card: Card,
    route: Route,
    gradient: Gradient,
    image: &'static str,
}

const PERSONAS: &[Persona] = &[
    Persona {
        icon: "👤",
        card: Card {
            title: "Pro Traders",
            description: "Multi-exchange execution, advanced orders, unified portfolio management.",
        },
        route: Route::SolutionsTraders,
        gradient: Gradient::PRIMARY,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop&q=80",
    },
    Persona {
        icon: "🏢",
        card: Card {
            title: "Funds & Desks",
            description: "FIX protocol, APIs, governance, audit trails, enterprise security.",
        },
        route: Route::SolutionsFunds,
        gradient: Gradient::VIOLET,
        image: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?w=600&h=400&fit=crop&q=80",
    },
    Persona {
        icon: "📈",
        card: Card {
            title: "Exchanges & Projects",
            description: "Performance campaigns measured in trading outcomes, not impressions.",
        },
        route: Route::Syndicate,
        gradient: Gradient::AMBER,
        image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=600&h=400&fit=crop&q=80",
    },
    Persona {
        icon: "👥",
        card: Card {
            title: "KOLs & Agencies",
            description: "Verified network, performance-based payouts, transparent attribution.",
        },
        route: Route::Syndicate,
        gradient: Gradient::EMERALD,
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop&q=80",
    },
];

#[function_component(PersonasSection)]
pub fn personas_section() -> Html {
    html! {
        <section class="section tinted">
            <div class="container">
                <SectionHeader
                    title="Built for different needs"
                    lead="Whether you're trading solo or running a fund, we've got you covered."
                />
                <div class="grid cols-4">
                    { for PERSONAS.iter().enumerate().map(|(i, persona)| {
                        let route = persona.route.clone();
                        html! {
                            <AnimatedCard delay={i as f32 * 0.1} tilt_intensity={8.0} glow_on_hover={true}>
                                <div onclick={Callback::from(move |_: MouseEvent| on_follow(&route))}>
                                    <Link<Route> to={persona.route.clone()} classes="card glass image-card persona">
                                        <div class="image-card-media">
                                            <img src={persona.image} alt={persona.card.title} />
                                            <span class="image-card-badge" style={persona.gradient.css()}>{ persona.icon }</span>
                                        </div>
                                        <div class="image-card-body">
                                            <h3>{ persona.card.title }</h3>
                                            <p>{ persona.card.description }</p>
                                            <span class="learn-more">{"Learn more →"}</span>
                                        </div>
                                    </Link<Route>>
                                </div>
                            </AnimatedCard>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
