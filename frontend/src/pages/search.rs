use yew::prelude::*;
use crate::routes::View;
use crate::styles;

#[function_component(PoetrySearch)]
pub fn search() -> Html {
    html! {
        <div class={styles::CONTAINER_LG}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{View::Search.title()}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"按标题、作者或诗句检索诗词。"}</p>
            </div>
        </div>
    }
}
