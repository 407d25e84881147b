pub mod config;
pub mod data;
pub mod magazine;
pub mod pagination;
pub mod sections;
pub mod transition;

use config::{MagazineConfig, SiteConfig};
use data::{load_catalog, WorkCatalog};
use log::error;
use magazine::FeaturedWork;
use sections::{About, Contact, Footer, Header, Hero};
use wasm_bindgen::prelude::wasm_bindgen;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum CatalogStatus {
    Ready(WorkCatalog),
    Error(String),
}

impl CatalogStatus {
    fn load() -> Self {
        match load_catalog() {
            Ok(catalog) => Self::Ready(catalog),
            Err(err) => {
                error!("Failed to load work catalog: {}", err);
                Self::Error(err.to_string())
            }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_state(CatalogStatus::load);
    let site = use_state(SiteConfig::default);
    let magazine_config = use_state(|| MagazineConfig::default().validated());

    let showcase = match &*catalog {
        CatalogStatus::Ready(works) => html! {
            <FeaturedWork catalog={works.clone()} site={(*site).clone()} config={*magazine_config} />
        },
        CatalogStatus::Error(message) => html! {
            <section id="featured-work" class="featured-work section">
                <div class="container">
                    <p class="error">{ format!("Projects are unavailable: {message}") }</p>
                </div>
            </section>
        },
    };

    html! {
        <div class="app">
            <Header site={(*site).clone()} />
            <main>
                <Hero site={(*site).clone()} />
                { showcase }
                <About />
                <Contact />
            </main>
            <Footer site={(*site).clone()} />
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
