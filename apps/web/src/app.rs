use crate::assets::STYLESHEET;
use dioxus::prelude::*;
use doran_domain::config::BootstrapConfig;

/// Top-level component. Its contents belong to the product UI; this is the shell it lives in.
#[component]
pub(crate) fn DoranMvpWire() -> Element {
    let config = use_context::<BootstrapConfig>();

    rsx! {
        if config.stylesheet {
            style { {STYLESHEET} }
        }
        div { class: "wire",
            h1 { "{config.title}" }
            main {}
        }
    }
}
