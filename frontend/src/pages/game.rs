use yew::prelude::*;
use crate::routes::View;
use crate::styles;

#[function_component(PoetryGame)]
pub fn game() -> Html {
    html! {
        <div class={styles::CONTAINER_LG}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{View::Game.title()}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"看上句，填下句，检验你的诗词功底。"}</p>
            </div>
        </div>
    }
}
