//! Alert Component

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AlertVariant {
    #[default]
    Error,
    Info,
}

impl AlertVariant {
    pub fn class(&self) -> &'static str {
        match self {
            AlertVariant::Error => "alert alert--error",
            AlertVariant::Info => "alert alert--info",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AlertVariant::Error => "Error",
            AlertVariant::Info => "Note",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AlertProps {
    pub message: String,
    #[props(default)]
    pub variant: AlertVariant,
}

#[component]
pub fn Alert(props: AlertProps) -> Element {
    let title = props.variant.title();

    rsx! {
        div { class: props.variant.class(), role: "alert",
            p { class: "alert-title", "{title}" }
            p { class: "alert-message", "{props.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_variants() {
        assert_eq!(AlertVariant::default(), AlertVariant::Error);
        assert_eq!(AlertVariant::Error.title(), "Error");
        assert_eq!(AlertVariant::Info.class(), "alert alert--info");
    }
}
