use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod forms;
mod hooks;
mod motion;
mod storage;

mod components {
    pub mod animated_card;
    pub mod animated_text;
    pub mod background;
    pub mod cta;
    pub mod dropdown;
    pub mod ecosystem;
    pub mod faq;
    pub mod features;
    pub mod field;
    pub mod flowing_colors;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod personas;
    pub mod problems;
    pub mod proof_strip;
}
mod pages {
    pub mod about;
    pub mod careers;
    pub mod contact;
    pub mod developers;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
    pub mod quant;
    pub mod roadmap;
    pub mod signup_demo;
    pub mod solutions;
    pub mod syndicate;
    pub mod technology;
    pub mod terminal;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    about::About,
    careers::Careers,
    contact::Contact,
    developers::Developers,
    home::Home,
    not_found::NotFound,
    pricing::Pricing,
    quant::Quant,
    roadmap::Roadmap,
    signup_demo::SignupDemo,
    solutions::SolutionPage,
    syndicate::Syndicate,
    technology::Technology,
    terminal::Terminal,
};
use storage::Solution;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/technology")]
    Technology,
    #[at("/roadmap")]
    Roadmap,
    #[at("/terminal")]
    Terminal,
    #[at("/quant")]
    Quant,
    #[at("/syndicate")]
    Syndicate,
    #[at("/pricing")]
    Pricing,
    #[at("/developers")]
    Developers,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[at("/signup-demo")]
    SignupDemo,
    #[at("/solutions/traders")]
    SolutionsTraders,
    #[at("/solutions/funds")]
    SolutionsFunds,
    #[at("/solutions/data-engines")]
    SolutionsDataEngines,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Technology => {
            info!("Rendering Technology page");
            html! { <Technology /> }
        },
        Route::Roadmap => {
            info!("Rendering Roadmap page");
            html! { <Roadmap /> }
        },
        Route::Terminal => {
            info!("Rendering Terminal page");
            html! { <Terminal /> }
        },
        Route::Quant => {
            info!("Rendering Quant page");
            html! { <Quant /> }
        },
        Route::Syndicate => {
            info!("Rendering Syndicate page");
            html! { <Syndicate /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Developers => {
            info!("Rendering Developers page");
            html! { <Developers /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::SignupDemo => {
            info!("Rendering SignupDemo page");
            html! { <SignupDemo /> }
        },
        Route::SolutionsTraders | Route::SolutionsFunds | Route::SolutionsDataEngines => {
            match Solution::from_route(&routes) {
                Some(solution) => {
                    info!("Rendering Solutions ({}) page", solution.slug());
                    html! { <SolutionPage solution={solution} /> }
                }
                None => html! { <NotFound /> },
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="site">
                <Navbar />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_path_maps_to_its_view() {
        let table = [
            ("/", Route::Home),
            ("/about", Route::About),
            ("/technology", Route::Technology),
            ("/roadmap", Route::Roadmap),
            ("/terminal", Route::Terminal),
            ("/quant", Route::Quant),
            ("/syndicate", Route::Syndicate),
            ("/pricing", Route::Pricing),
            ("/developers", Route::Developers),
            ("/careers", Route::Careers),
            ("/contact", Route::Contact),
            ("/signup-demo", Route::SignupDemo),
            ("/solutions/traders", Route::SolutionsTraders),
            ("/solutions/funds", Route::SolutionsFunds),
            ("/solutions/data-engines", Route::SolutionsDataEngines),
        ];
        for (path, route) in table {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        for path in ["/nope", "/solutions", "/solutions/whales", "/about/team"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{}", path);
        }
    }

    #[test]
    fn robots_blocks_every_crawler() {
        let robots = include_str!("../robots.txt");
        let lines: Vec<&str> = robots.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["User-agent: *", "Disallow: /"]);
    }
}
