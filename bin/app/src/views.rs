//! Page components.

use crate::about::AboutContent;
use crate::device::use_device;
use leptos::prelude::*;

/// The landing page.
#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Welcome"</h1>
            <p>"Pick a page from the menu to get started."</p>
        </section>
    }
}

#[component]
pub fn CodeView() -> impl IntoView {
    view! {
        <section class="code-page">
            <h1>"Code"</h1>
            <p>"Small experiments and the source behind them."</p>
        </section>
    }
}

/// The game page. Controls differ between touch and keyboard devices.
#[component]
pub fn GameView() -> impl IntoView {
    let device = use_device();

    view! {
        <section class="game-page">
            <h1>"Game"</h1>
            <Show
                when=move || device.is_mobile.get()
                fallback=|| view! { <p class="controls">"Use the arrow keys to move."</p> }
            >
                <p class="controls">"Swipe to move."</p>
            </Show>
        </section>
    }
}

/// The About page, rendered from fetched content.
#[component]
pub fn AboutView(content: AboutContent) -> impl IntoView {
    let paragraphs = content
        .paragraphs
        .into_iter()
        .map(|text| view! { <p>{text}</p> })
        .collect_view();

    view! {
        <section class="about-page">
            <h1>{content.title}</h1>
            {paragraphs}
        </section>
    }
}

/// Shown for fragments no route claims.
#[component]
pub fn NotFoundView(#[prop(optional, into)] path: Option<String>) -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            {path.map(|path| view! { <p class="path">{path}</p> })}
            <a href="#/">"Back to the home page"</a>
        </section>
    }
}

/// Shown when a page could not be loaded.
#[component]
pub fn LoadFailedView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <section class="error-page">
            <h1>"This page could not be loaded"</h1>
            <p class="error">{message}</p>
            <p>"Follow the link again to retry."</p>
        </section>
    }
}

/// Shown when the route table is invalid.
#[component]
pub fn ConfigErrorView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <section class="error-page">
            <h1>"Site configuration error"</h1>
            <p class="error">{message}</p>
        </section>
    }
}
