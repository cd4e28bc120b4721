use yew::prelude::*;
use web_sys::window;
use crate::components::NavBar;
use crate::routes::View;
use crate::styles;

const SITE_NAME: &str = "诗词";

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class="min-h-screen bg-stone-100 dark:bg-stone-950">
            <NavBar />
            <main class={styles::MAIN}>
                { props.children.clone() }
            </main>
        </div>
    }
}

pub fn document_title(view: View) -> String {
    format!("{} - {}", view.title(), SITE_NAME)
}

/// Keeps `document.title` in step with the mounted view.
#[hook]
pub fn use_document_title(view: View) {
    use_effect_with(view, |view| {
        if let Some(document) = window().and_then(|w| w.document()) {
            document.set_title(&document_title(*view));
        }
        || ()
    });
}
