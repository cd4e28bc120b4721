use yew::prelude::*;
use crate::routes::View;
use crate::styles;

#[function_component(Forum)]
pub fn forum() -> Html {
    html! {
        <div class={styles::CONTAINER_LG}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{View::Forum.title()}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"与诗友交流赏析心得。"}</p>
            </div>
        </div>
    }
}
