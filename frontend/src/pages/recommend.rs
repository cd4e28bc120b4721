use yew::prelude::*;
use crate::routes::View;
use crate::styles;

#[function_component(PoetryRecommend)]
pub fn recommend() -> Html {
    html! {
        <div class={styles::CONTAINER_LG}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{View::Recommend.title()}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"每日为你挑选的诗词佳作。"}</p>
            </div>
        </div>
    }
}
