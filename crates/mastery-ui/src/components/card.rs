//! Card container

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) => format!("card {}", extra),
        None => "card".to_string(),
    };

    rsx! {
        section { class: "{class}",
            if let Some(title) = &props.title {
                h3 { class: "card-title", "{title}" }
            }
            div { class: "card-content", {props.children} }
        }
    }
}
