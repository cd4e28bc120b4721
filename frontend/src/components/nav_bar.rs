use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::use_decision;
use crate::routes::{self, Route, NAV_ROUTES};
use crate::styles;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let current = use_decision();

    html! {
        <nav class={styles::NAV}>
            <div class={styles::NAV_INNER}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::Recommend} classes={styles::NAV_BRAND}>{"诗词"}</Link<Route>>
                    <div class={styles::NAV_ITEMS}>
                        { for NAV_ROUTES.iter().map(|route| {
                            let classes = if routes::decide(*route) == current {
                                classes!(styles::NAV_LINK, styles::NAV_LINK_ACTIVE)
                            } else {
                                classes!(styles::NAV_LINK)
                            };
                            let title = routes::resolve(*route)
                                .map(|resolved| resolved.view.title())
                                .unwrap_or_default();
                            html! {
                                <Link<Route> to={*route} {classes}>{title}</Link<Route>>
                            }
                        })}
                    </div>
                </div>
            </div>
        </nav>
    }
}
