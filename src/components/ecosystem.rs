use yew::prelude::*;

use crate::components::animated_text::{AnimatedText, TextVariant};
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::SectionHeader;

const STAGES: &[(&str, &str, &str)] = &[
    ("🗄", "Terminal", "Execution data"),
    ("🧠", "TA Quant", "Better strategies"),
    ("📣", "Syndicate", "More volume"),
];

#[function_component(EcosystemSection)]
pub fn ecosystem_section() -> Html {
    let last = STAGES.len() - 1;

    html! {
        <section class="section ecosystem">
            <AnimatedBackground variant="blobs" intensity={Intensity::Low} />
            <div class="container">
                <SectionHeader
                    title="How the ecosystem compounds"
                    lead="Each product makes the others better. The more you use, the more value you get."
                />
                <div class="ecosystem-flow">
                    { for STAGES.iter().enumerate().map(|(i, (icon, name, output))| html! {
                        <>
                            <AnimatedText variant={TextVariant::Scale} delay={i as f32 * 0.2} class="ecosystem-stage glass">
                                <div class="ecosystem-icon">{ *icon }</div>
                                <h3>{ *name }</h3>
                                <p>{ *output }</p>
                            </AnimatedText>
                            if i < last {
                                <div class="ecosystem-arrow">{"→"}</div>
                            }
                        </>
                    }) }
                </div>
                <AnimatedText delay={0.8} class="ecosystem-loop">
                    <span class="glass">{"📈 Better execution → Better strategies → More volume → Better execution"}</span>
                </AnimatedText>
            </div>
            <style>
                {r#"
                .ecosystem {
                    position: relative;
                    overflow: hidden;
                }
                .ecosystem .container {
                    position: relative;
                    z-index: 1;
                }
                .ecosystem-flow {
                    display: grid;
                    grid-template-columns: 1fr auto 1fr auto 1fr;
                    align-items: center;
                    gap: 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .ecosystem-stage {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    text-align: center;
                }
                .ecosystem-stage h3 {
                    margin: 0.75rem 0 0.4rem;
                }
                .ecosystem-stage p {
                    margin: 0;
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                .ecosystem-icon {
                    font-size: 1.5rem;
                }
                .ecosystem-arrow {
                    font-size: 2rem;
                    color: var(--primary);
                }
                .ecosystem-loop {
                    margin-top: 2rem;
                    text-align: center;
                }
                .ecosystem-loop span {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.85rem;
                    color: var(--muted);
                }
                @media (max-width: 768px) {
                    .ecosystem-flow {
                        grid-template-columns: 1fr;
                    }
                    .ecosystem-arrow {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
