pub mod recommend;
pub mod search;
pub mod game;
pub mod feihua;
pub mod forum;
pub mod not_found;

use yew::prelude::*;
use crate::base::use_document_title;
use crate::routes::View;
use recommend::PoetryRecommend;
use search::PoetrySearch;
use game::PoetryGame;
use feihua::FeiHuaLing;
use forum::Forum;
use not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct ViewSlotProps {
    pub view: View,
}

/// Render slot the router mounts the resolved view into.
#[function_component(ViewSlot)]
pub fn view_slot(props: &ViewSlotProps) -> Html {
    use_document_title(props.view);

    match props.view {
        View::Recommend => html! { <PoetryRecommend /> },
        View::Search => html! { <PoetrySearch /> },
        View::Game => html! { <PoetryGame /> },
        View::FeiHua => html! { <FeiHuaLing /> },
        View::Forum => html! { <Forum /> },
        View::NotFound => html! { <NotFound /> },
    }
}
