use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::{Route, View};
use crate::styles;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class={styles::CONTAINER_LG}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{View::NotFound.title()}</h1>
                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{location}</p>
                <div class="mt-6">
                    <Link<Route> to={Route::Recommend} classes={styles::BUTTON_PRIMARY}>
                        {"返回推荐"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
