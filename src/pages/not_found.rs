use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background::{AnimatedBackground, Intensity};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    log::warn!("No page for {}", path);

    html! {
        <section class="page-hero not-found">
            <AnimatedBackground variant="quantum" intensity={Intensity::Low} />
            <div class="container narrow">
                <h1 class="gradient-text">{"404"}</h1>
                <p class="lead">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to Home"}</Link<Route>>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
