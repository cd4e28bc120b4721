use yew::prelude::*;
use yew_router::prelude::*;
use crate::config;
use crate::routes::{self, Decision, View};

/// Base URL the router was mounted under.
#[derive(Clone, PartialEq, Default)]
pub struct RouteBase(pub Option<AttrValue>);

/// Render decision for the current browser location.
#[hook]
pub fn use_decision() -> Decision {
    let base = use_context::<RouteBase>().unwrap_or_default();
    match use_location() {
        Some(location) => routes::decide_path(config::strip_base(base.0.as_deref(), location.path())),
        None => {
            log::error!("Route lookup outside a router");
            Decision::Render(View::NotFound)
        }
    }
}
