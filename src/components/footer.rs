use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::mailto;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum Target {
    Page(Route),
    Mail(&'static str),
}

struct Column {
    title: &'static str,
    links: &'static [(&'static str, Target)],
}

const COLUMNS: &[Column] = &[
    Column {
        title: "Products",
        links: &[
            ("Terminal", Target::Page(Route::Terminal)),
            ("TA Quant", Target::Page(Route::Quant)),
            ("TA Syndicate", Target::Page(Route::Syndicate)),
            ("Pricing", Target::Page(Route::Pricing)),
        ],
    },
    Column {
        title: "Company",
        links: &[
            ("About", Target::Page(Route::About)),
            ("Roadmap", Target::Page(Route::Roadmap)),
            ("Technology", Target::Page(Route::Technology)),
            ("Careers", Target::Page(Route::Careers)),
        ],
    },
    Column {
        title: "Resources",
        links: &[
            ("Documentation", Target::Page(Route::Developers)),
            ("Book a Demo", Target::Page(Route::SignupDemo)),
            ("Support", Target::Page(Route::Contact)),
        ],
    },
    Column {
        title: "Legal",
        links: &[
            ("Privacy", Target::Mail("Privacy request")),
            ("Terms", Target::Mail("Terms of service")),
            ("Security", Target::Mail("Security disclosure")),
            ("Contact", Target::Page(Route::Contact)),
        ],
    },
];

const SOCIAL: &[(&str, &str)] = &[
    ("X", "https://x.com/taquant"),
    ("GitHub", "https://github.com/taquant"),
    ("Telegram", "https://t.me/taquant"),
    ("Discord", "https://discord.gg/taquant"),
];

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="nav-logo">
                            <span class="logo-mark">{ config::BRAND_MARK }</span>
                            <span class="logo-text">{ config::BRAND }</span>
                        </Link<Route>>
                        <p>{"Institutional-grade crypto trading infrastructure, intelligence and attribution."}</p>
                        <div class="social-links">
                            { for SOCIAL.iter().map(|(label, href)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer">{ *label }</a>
                            }) }
                        </div>
                    </div>
                    { for COLUMNS.iter().map(|column| html! {
                        <div class="footer-column">
                            <h4>{ column.title }</h4>
                            <ul>
                                { for column.links.iter().map(|(label, target)| html! {
                                    <li>{
                                        match target {
                                            Target::Page(route) => html! {
                                                <Link<Route> to={route.clone()}>{ *label }</Link<Route>>
                                            },
                                            Target::Mail(subject) => html! {
                                                <a href={mailto(config::HELLO_EMAIL, subject)}>{ *label }</a>
                                            },
                                        }
                                    }</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <span>{ copyright(year) }</span>
                    <span>{ format!("Managed by {}", config::BRAND) }</span>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid var(--border);
                    padding: 4rem 0 2rem;
                    background: rgba(255, 255, 255, 0.01);
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr repeat(4, 1fr);
                    gap: 2.5rem;
                }
                .footer-brand p {
                    color: var(--muted);
                    margin: 1rem 0;
                    max-width: 20rem;
                    line-height: 1.6;
                }
                .social-links {
                    display: flex;
                    gap: 1rem;
                }
                .social-links a,
                .footer-column a {
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .social-links a:hover,
                .footer-column a:hover {
                    color: var(--primary);
                }
                .footer-column h4 {
                    margin: 0 0 1rem;
                    font-size: 0.95rem;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 0.6rem;
                }
                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                    color: var(--muted);
                    font-size: 0.85rem;
                }
                @media (max-width: 900px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .footer-bottom {
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_brand_and_year() {
        assert_eq!(copyright(2026), "© 2026 TA Quant. All rights reserved.");
    }

    #[test]
    fn no_column_is_empty() {
        for column in COLUMNS {
            assert!(!column.links.is_empty(), "{} is empty", column.title);
        }
    }
}
