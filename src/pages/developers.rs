use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::background::{AnimatedBackground, Intensity};
use crate::components::features::{IconCard, SectionHeader};
use crate::components::hero::PageHero;
use crate::config;
use crate::content::{Card, Gradient};
use crate::Route;

const API_FEATURES: &[(&str, Card, Gradient)] = &[
    ("⌨", Card { title: "REST APIs", description: "Comprehensive REST endpoints for all platform functions" }, Gradient::PRIMARY),
    ("⚡", Card { title: "WebSocket Streams", description: "Real-time data streams for market data and account activity" }, Gradient::VIOLET),
    ("</>", Card { title: "FIX Protocol", description: "Enterprise-standard protocol for institutional clients" }, Gradient::AMBER),
    ("🔗", Card { title: "Webhooks", description: "Event-driven integrations with customizable webhooks" }, Gradient::EMERALD),
];

const EXTRAS: &[(&str, Card)] = &[
    ("⚡", Card { title: "Rate Limits", description: "Generous rate limits with automatic throttling. Enterprise plans available for higher limits." }),
    ("🛡", Card { title: "Sandbox Environment", description: "Test your integrations with our paper trading sandbox before going live." }),
    ("📖", Card { title: "Documentation", description: "Comprehensive docs with examples, guides, and API references." }),
];

pub const QUICK_START: &str = r#"import taquant

# Initialize client
client = taquant.Client(
    api_key="your_api_key",
    api_secret="your_secret"
)

# Place an order
order = client.orders.create(
    symbol="BTC/USDT",
    side="buy",
    amount=0.1,
    order_type="limit",
    price=50000
)

# Stream market data
for ticker in client.stream.tickers("BTC/USDT"):
    print(f"Price: {ticker.price}")"#;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no document to copy from")]
    NoDocument,
    #[error("browser refused the copy: {0}")]
    Refused(String),
}

/// Copies `text` through a detached textarea and the document's copy
/// command, which works without the async clipboard permission.
fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::NoDocument)?;
    let body = document.body().ok_or(ClipboardError::NoDocument)?;
    let refused = |e: wasm_bindgen::JsValue| ClipboardError::Refused(format!("{:?}", e));

    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(refused)?
        .unchecked_into();
    area.set_value(text);
    body.append_child(&area).map_err(refused)?;
    area.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(ClipboardError::NoDocument)
        .and_then(|html| html.exec_command("copy").map_err(refused));
    body.remove_child(&area).map_err(refused)?;

    if copied? {
        Ok(())
    } else {
        Err(ClipboardError::Refused("copy command unsupported".into()))
    }
}

#[function_component(Developers)]
pub fn developers() -> Html {
    let copied = use_state_eq(|| false);
    let revert = use_mut_ref(|| None::<Timeout>);

    let copy_code = {
        let copied = copied.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(err) = copy_to_clipboard(QUICK_START) {
                log::warn!("Could not copy quick start: {}", err);
                return;
            }
            copied.set(true);
            let copied = copied.clone();
            *revert.borrow_mut() = Some(Timeout::new(config::COPY_ACK_MS, move || copied.set(false)));
        })
    };

    html! {
        <div class="developers-page">
            <PageHero
                icon="</>"
                eyebrow="Developers"
                title="Build on TA Quant"
                highlight="Developer APIs"
                lead="REST, WebSocket, FIX, and Python SDKs. Everything you need to integrate TA Quant into your trading infrastructure."
            />

            <section class="section">
                <AnimatedBackground variant="grid" intensity={Intensity::Low} />
                <div class="container">
                    <SectionHeader title="API Overview" lead="Multiple ways to integrate, depending on your needs." />
                    <div class="grid cols-4">
                        { for API_FEATURES.iter().enumerate().map(|(i, (icon, card, gradient))| html! {
                            <IconCard icon={*icon} card={*card} gradient={*gradient} delay={i as f32 * 0.1} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <AnimatedBackground variant="dots" intensity={Intensity::Low} />
                <div class="container narrow wide">
                    <SectionHeader title="Quick Start" lead="Get up and running in minutes with our Python SDK." />
                    <AnimatedCard delay={0.4} tilt_intensity={0.0}>
                        <div class="glass code-card">
                            <div class="code-header">
                                <span>{"</> Python SDK Example"}</span>
                                <button class="btn btn-ghost" onclick={copy_code}>
                                    { if *copied { "✔ Copied" } else { "⧉ Copy" } }
                                </button>
                            </div>
                            <pre><code>{ QUICK_START }</code></pre>
                        </div>
                    </AnimatedCard>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="grid cols-3">
                        { for EXTRAS.iter().enumerate().map(|(i, (icon, card))| html! {
                            <IconCard icon={*icon} card={*card} delay={i as f32 * 0.15} />
                        }) }
                    </div>
                    <div class="btn-row docs-link">
                        <Link<Route> to={Route::Technology} classes="btn btn-primary">{"View Full Documentation →"}</Link<Route>>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .code-card {
                    border-radius: 1.25rem;
                    overflow: hidden;
                }
                .code-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.75rem 1.5rem;
                    border-bottom: 1px solid var(--border);
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 0.85rem;
                }
                .code-card pre {
                    margin: 0;
                    padding: 1.5rem;
                    overflow-x: auto;
                    font-size: 0.85rem;
                    line-height: 1.6;
                }
                .docs-link {
                    margin-top: 3rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_start_is_a_complete_snippet() {
        assert!(QUICK_START.starts_with("import taquant"));
        assert!(QUICK_START.contains("client.orders.create("));
        assert!(QUICK_START.trim_end().ends_with(r#"print(f"Price: {ticker.price}")"#));
    }
}
