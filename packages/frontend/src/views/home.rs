use dioxus::prelude::*;

/// The landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "home",
            h1 { "Podscraper" }
            p { "Your podcasts, in one place." }
        }
    }
}
