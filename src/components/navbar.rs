use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dropdown::Dropdown;
use crate::config;
use crate::hooks::use_scrolled;
use crate::storage::{remember_solution, Solution};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub description: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavEntry {
    Link(NavLink),
    Menu {
        label: &'static str,
        items: &'static [NavLink],
    },
}

const fn link(label: &'static str, route: Route) -> NavLink {
    NavLink {
        label,
        route,
        description: None,
    }
}

const fn described(label: &'static str, route: Route, description: &'static str) -> NavLink {
    NavLink {
        label,
        route,
        description: Some(description),
    }
}

const PRODUCTS: &[NavLink] = &[
    described("Terminal", Route::Terminal, "Execution Infrastructure"),
    described("TA Quant", Route::Quant, "Trading Intelligence"),
    described("TA Syndicate", Route::Syndicate, "Marketing Attribution"),
];

const SOLUTIONS: &[NavLink] = &[
    described("Pro Traders", Route::SolutionsTraders, "Institutional tools for individuals"),
    described("Hedge Funds", Route::SolutionsFunds, "Multi-venue execution at scale"),
    described("Data Engines", Route::SolutionsDataEngines, "Normalized market data feeds"),
];

const RESOURCES: &[NavLink] = &[
    described("Technology", Route::Technology, "How the platform is built"),
    described("Roadmap", Route::Roadmap, "What ships next"),
    described("Developers", Route::Developers, "API and SDK reference"),
];

const COMPANY: &[NavLink] = &[
    link("About", Route::About),
    link("Careers", Route::Careers),
    link("Contact", Route::Contact),
];

pub const NAV: &[NavEntry] = &[
    NavEntry::Link(link("Home", Route::Home)),
    NavEntry::Menu { label: "Products", items: PRODUCTS },
    NavEntry::Menu { label: "Solutions", items: SOLUTIONS },
    NavEntry::Link(link("Pricing", Route::Pricing)),
    NavEntry::Link(link("Developers", Route::Developers)),
    NavEntry::Menu { label: "Resources", items: RESOURCES },
    NavEntry::Menu { label: "Company", items: COMPANY },
];

/// Whether a link to `target` should be highlighted while at `current`.
/// The home link only matches the root itself.
pub fn is_active(current: &str, target: &str) -> bool {
    let current = current.trim_end_matches('/');
    let target = target.trim_end_matches('/');
    if target.is_empty() {
        return current.is_empty();
    }
    current == target
        || current
            .strip_prefix(target)
            .map_or(false, |rest| rest.starts_with('/'))
}

impl NavEntry {
    pub fn is_active(&self, current: &str) -> bool {
        match self {
            NavEntry::Link(link) => is_active(current, &link.route.to_path()),
            NavEntry::Menu { items, .. } => items
                .iter()
                .any(|item| is_active(current, &item.route.to_path())),
        }
    }
}

/// Side effects of following a nav link: solution pages are remembered so
/// the pricing page can point its calls to action at the right place.
pub fn on_follow(route: &Route) {
    if let Some(solution) = Solution::from_route(route) {
        remember_solution(solution);
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_scrolled(config::SCROLL_THRESHOLD_PX);
    let menu_open = use_state(|| false);
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            path.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let desktop: Html = NAV
        .iter()
        .map(|entry| match entry {
            NavEntry::Link(item) => {
                let route = item.route.clone();
                html! {
                    <div class="nav-item" onclick={Callback::from(move |_: MouseEvent| on_follow(&route))}>
                        <Link<Route>
                            to={item.route.clone()}
                            classes={classes!("nav-link", entry.is_active(&path).then_some("active"))}
                        >
                            { item.label }
                        </Link<Route>>
                    </div>
                }
            }
            NavEntry::Menu { label, items } => html! {
                <Dropdown label={*label} items={*items} active={entry.is_active(&path)} />
            },
        })
        .collect();

    let mobile: Html = NAV
        .iter()
        .flat_map(|entry| match entry {
            NavEntry::Link(item) => std::slice::from_ref(item),
            NavEntry::Menu { items, .. } => *items,
        })
        .map(|item| {
            let route = item.route.clone();
            let active = is_active(&path, &item.route.to_path());
            html! {
                <div onclick={Callback::from(move |_: MouseEvent| on_follow(&route))}>
                    <Link<Route> to={item.route.clone()} classes={classes!("mobile-link", active.then_some("active"))}>
                        { item.label }
                    </Link<Route>>
                </div>
            }
        })
        .collect();

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{ config::BRAND_MARK }</span>
                    <span class="logo-text">{ config::BRAND }</span>
                </Link<Route>>

                <div class="nav-links">{ desktop }</div>

                <div class="nav-actions">
                    <Link<Route> to={Route::Contact} classes="btn btn-ghost">{"Sign In"}</Link<Route>>
                    <Link<Route> to={Route::SignupDemo} classes="btn btn-primary">{"Get Demo"}</Link<Route>>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu glass-strong">
                    { mobile }
                    <Link<Route> to={Route::SignupDemo} classes="btn btn-primary">{"Get Demo"}</Link<Route>>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: background 0.3s ease, padding 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(10, 10, 10, 0.85);
                    backdrop-filter: blur(16px);
                    border-bottom-color: var(--border);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    text-decoration: none;
                    color: var(--foreground);
                    font-weight: 700;
                }
                .logo-mark {
                    display: grid;
                    place-items: center;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 0.6rem;
                    background: linear-gradient(135deg, var(--primary), var(--accent));
                    color: #000;
                    font-size: 0.9rem;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .nav-link {
                    padding: 0.5rem 0.9rem;
                    border-radius: 0.5rem;
                    color: var(--muted);
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.2s ease, background 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: var(--foreground);
                    background: rgba(255, 255, 255, 0.05);
                }
                .nav-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    margin: 0.75rem 1rem 0;
                    padding: 1rem;
                    border-radius: 1rem;
                }
                .mobile-link {
                    display: block;
                    padding: 0.6rem 0.75rem;
                    color: var(--muted);
                    text-decoration: none;
                    border-radius: 0.5rem;
                }
                .mobile-link.active {
                    color: var(--primary);
                    background: rgba(255, 255, 255, 0.04);
                }
                @media (max-width: 1024px) {
                    .nav-links,
                    .nav-actions {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_only_matches_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/pricing", "/"));
    }

    #[test]
    fn section_links_match_nested_paths() {
        assert!(is_active("/pricing", "/pricing"));
        assert!(is_active("/pricing/", "/pricing"));
        assert!(!is_active("/pricing-old", "/pricing"));
    }

    #[test]
    fn menu_is_active_when_any_item_is() {
        let solutions = NAV
            .iter()
            .find(|entry| matches!(entry, NavEntry::Menu { label: "Solutions", .. }))
            .unwrap();
        assert!(solutions.is_active("/solutions/funds"));
        assert!(!solutions.is_active("/quant"));
    }

    #[test]
    fn every_solution_is_reachable_from_the_nav() {
        let routes: Vec<Route> = NAV
            .iter()
            .flat_map(|entry| match entry {
                NavEntry::Link(item) => vec![item.route.clone()],
                NavEntry::Menu { items, .. } => items.iter().map(|i| i.route.clone()).collect(),
            })
            .collect();
        for solution in Solution::ALL {
            assert!(routes.contains(&solution.route()));
        }
    }
}
