use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::{on_follow, NavLink};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    pub label: &'static str,
    pub items: &'static [NavLink],
    #[prop_or_default]
    pub active: bool,
}

/// Hover menu for one group of desktop nav links.
#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let open = use_state_eq(|| false);

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <div class="dropdown" onmouseenter={show} onmouseleave={hide.clone()}>
            <button class={classes!("nav-link", "dropdown-trigger", props.active.then_some("active"))}>
                { props.label }
                <span class={classes!("chevron", (*open).then_some("open"))}>{"▾"}</span>
            </button>
            if *open {
                <div class="dropdown-panel glass-strong" onclick={hide}>
                    { for props.items.iter().map(|item| {
                        let route = item.route.clone();
                        html! {
                            <div onclick={Callback::from(move |_: MouseEvent| on_follow(&route))}>
                                <Link<Route> to={item.route.clone()} classes="dropdown-item">
                                    <span class="dropdown-title">{ item.label }</span>
                                    if let Some(description) = item.description {
                                        <span class="dropdown-description">{ description }</span>
                                    }
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            }
            <style>
                {r#"
                .dropdown {
                    position: relative;
                }
                .dropdown-trigger {
                    display: flex;
                    align-items: center;
                    gap: 0.3rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                }
                .chevron {
                    font-size: 0.75rem;
                    transition: transform 0.2s ease;
                }
                .chevron.open {
                    transform: rotate(180deg);
                }
                .dropdown-panel {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    min-width: 16rem;
                    margin-top: 0.5rem;
                    padding: 0.5rem;
                    border-radius: 0.9rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                }
                .dropdown-item {
                    display: flex;
                    flex-direction: column;
                    gap: 0.15rem;
                    padding: 0.65rem 0.8rem;
                    border-radius: 0.6rem;
                    text-decoration: none;
                    color: var(--foreground);
                }
                .dropdown-item:hover {
                    background: rgba(255, 255, 255, 0.06);
                }
                .dropdown-title {
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .dropdown-description {
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                "#}
            </style>
        </div>
    }
}
