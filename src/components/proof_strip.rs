use yew::prelude::*;

use crate::components::animated_card::FloatingCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::SectionHeader;
use crate::content::{Gradient, Stat};

const PROOFS: &[(&str, Stat, Gradient)] = &[
    ("⚡", Stat { value: "<100ms", label: "Data Latency" }, Gradient::CYAN),
    ("🛡", Stat { value: "99.9%", label: "Uptime Target" }, Gradient::EMERALD),
    ("🌐", Stat { value: "50+", label: "Exchanges" }, Gradient::VIOLET),
    ("✔", Stat { value: "100+", label: "Verified Strategies" }, Gradient::AMBER),
    ("📈", Stat { value: "$1B+", label: "Attributed Volume" }, Gradient::PRIMARY),
];

#[function_component(ProofStrip)]
pub fn proof_strip() -> Html {
    html! {
        <section class="section proof-strip">
            <AnimatedBackground variant="grid" intensity={Intensity::Low} />
            <div class="container">
                <SectionHeader title="Numbers that matter" />
                <div class="grid cols-5">
                    { for PROOFS.iter().enumerate().map(|(i, (icon, stat, gradient))| html! {
                        <FloatingCard delay={i as f32 * 0.1} float_intensity={5.0}>
                            <div class="card glass proof">
                                <div class="icon-tile" style={gradient.css()}>{ *icon }</div>
                                <div class="proof-value gradient-text">{ stat.value }</div>
                                <div class="proof-label">{ stat.label }</div>
                            </div>
                        </FloatingCard>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .proof-strip {
                    position: relative;
                    overflow: hidden;
                }
                .proof-strip .container {
                    position: relative;
                    z-index: 1;
                }
                .proof {
                    text-align: center;
                }
                .proof .icon-tile {
                    margin: 0 auto 0.75rem;
                }
                .proof-value {
                    font-size: 1.75rem;
                    font-weight: 700;
                }
                .proof-label {
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                "#}
            </style>
        </section>
    }
}
