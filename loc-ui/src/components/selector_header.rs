//! Header component with title and optional hint.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectorHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub hint: String,
}

#[component]
pub fn SelectorHeader(props: SelectorHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0;",
                "{props.title}"
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.hint}"
                }
            }
        }
    }
}
