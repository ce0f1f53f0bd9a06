use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

/// Static chrome around the quote form: nav bar, hero banner, footer.
/// Pure layout; every piece of state lives with the form page.
#[component]
pub fn Shell(children: Element) -> Element {
    let footer_label = format!("{APP_NAME} {}", version_label());

    rsx! {
        div { class: "app-shell",
            nav { class: "top-nav",
                div { class: "dot-logo",
                    span { class: "dot" }
                    span { class: "dot" }
                    span { class: "dot" }
                }
                div { class: "nav-links",
                    a { class: "active", href: "#", "HOME" }
                    a { href: "#", "ABOUT" }
                    a { href: "#", "SERVICES" }
                    a { href: "#", "PORTFOLIO" }
                    a { href: "#", "CONTACT" }
                }
            }

            main { class: "main-content",
                div { class: "hero-text",
                    h1 { class: "hero-title", "QUOTE GENIE" }
                    div { class: "subtitle-grid",
                        span { "PREDICTIVE PRICING" }
                        span { "EASY TO NAVIGATE" }
                        span { "INSTANT QUOTES" }
                        span { "MORE PROFIT" }
                    }
                }
                {children}
            }

            footer { class: "simple-footer",
                span { class: "footer-icon", "★" }
                span { class: "footer-icon", "📍" }
                span { class: "footer-icon", "📄" }
                span { class: "footer-version", "{footer_label}" }
            }
        }
    }
}
