use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::ecosystem::EcosystemSection;
use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::personas::PersonasSection;
use crate::components::problems::ProblemsSection;
use crate::components::proof_strip::ProofStrip;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <ProblemsSection />
            <Features />
            <EcosystemSection />
            <ProofStrip />
            <PersonasSection />
            <Faq />
            <Cta />
        </div>
    }
}
