use yew::prelude::*;
use crate::routes::View;
use crate::styles;

#[function_component(FeiHuaLing)]
pub fn feihua() -> Html {
    html! {
        <div class={styles::CONTAINER_LG}>
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{View::FeiHua.title()}</h1>
                <p class={classes!(styles::TEXT_BODY, "mt-2")}>{"轮流说出含有同一个字的诗句，接不上者为负。"}</p>
            </div>
        </div>
    }
}
