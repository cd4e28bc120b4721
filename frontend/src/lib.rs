pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod routes;

use yew::prelude::*;
use yew_router::history::{AnyHistory, BrowserHistory};
use yew_router::prelude::*;
use crate::base::Base;
use crate::components::ReplaceRedirect;
use crate::hooks::{use_decision, RouteBase};
use crate::pages::ViewSlot;
use crate::routes::Decision;
pub use crate::routes::{Route, View};

/// Builds the browser-backed history the router owns for the app lifetime.
pub fn make_history() -> AnyHistory {
    AnyHistory::Browser(BrowserHistory::new())
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// History to route against; the browser history when absent.
    #[prop_or_default]
    pub history: Option<AnyHistory>,
    /// Overrides the configured base URL.
    #[prop_or_default]
    pub basename: Option<AttrValue>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let history = {
        let history = props.history.clone();
        use_state(move || history.unwrap_or_else(make_history))
    };
    let basename = props
        .basename
        .clone()
        .or_else(|| config::base_url().map(AttrValue::from));

    html! {
        <Router history={(*history).clone()} basename={basename.clone()}>
            <ContextProvider<RouteBase> context={RouteBase(basename)}>
                <Base>
                    <RouteSlot />
                </Base>
            </ContextProvider<RouteBase>>
        </Router>
    }
}

/// Mounts the view for the current location, or applies its redirect.
#[function_component(RouteSlot)]
pub fn route_slot() -> Html {
    match use_decision() {
        Decision::Redirect(route) => {
            log::info!("Redirecting to {}", route.to_path());
            html! { <ReplaceRedirect to={route} /> }
        }
        Decision::Render(View::NotFound) => {
            log::warn!("No route declared for the current location");
            html! { <ViewSlot view={View::NotFound} /> }
        }
        Decision::Render(view) => {
            log::debug!("Rendering {:?}", view);
            html! { <ViewSlot {view} /> }
        }
    }
}
