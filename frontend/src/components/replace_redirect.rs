use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ReplaceRedirectProps {
    pub to: Route,
}

/// Swaps the current history entry for `to` without rendering anything,
/// so back/forward skip the redirecting path.
#[function_component(ReplaceRedirect)]
pub fn replace_redirect(props: &ReplaceRedirectProps) -> Html {
    let navigator = use_navigator();
    let to = props.to;

    use_effect_with(to, move |to| {
        match navigator {
            Some(navigator) => navigator.replace(to),
            None => log::error!("Redirect to {} rendered outside a router", to.to_path()),
        }
        || ()
    });

    Html::default()
}
