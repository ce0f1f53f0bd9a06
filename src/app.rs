use dioxus::prelude::*;

use crate::{
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::QuotePage,
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::app_css()}" }
        Shell { QuotePage {} }
        Toast {}
    }
}
