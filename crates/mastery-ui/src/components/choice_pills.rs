//! Choice Pills Component
//!
//! A wrapped row of toggle pills for picking up to N options. Once the limit
//! is reached, unselected pills are disabled; selected ones stay clickable so
//! they can be removed.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ChoicePillsProps {
    pub options: Vec<String>,
    /// Currently selected options, in selection order
    pub selected: Vec<String>,
    pub on_toggle: EventHandler<String>,
    /// Selection limit; unselected pills are disabled once reached
    pub limit: usize,
    #[props(default)]
    pub label: Option<String>,
}

/// Pill state for one option
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PillState {
    Selected,
    Available,
    Disabled,
}

impl PillState {
    pub fn of(option: &str, selected: &[String], limit: usize) -> Self {
        if selected.iter().any(|s| s == option) {
            PillState::Selected
        } else if selected.len() >= limit {
            PillState::Disabled
        } else {
            PillState::Available
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PillState::Selected => "pill selected",
            PillState::Available => "pill",
            PillState::Disabled => "pill disabled",
        }
    }
}

#[component]
pub fn ChoicePills(props: ChoicePillsProps) -> Element {
    let count = props.selected.len();

    rsx! {
        div { class: "choice-pills-wrapper",
            if let Some(label) = &props.label {
                p { class: "input-label", "{label}" }
            }
            div {
                class: "choice-pills",
                role: "group",
                for option in props.options.iter() {
                    {
                        let state = PillState::of(option, &props.selected, props.limit);
                        let value = option.clone();
                        let on_toggle = props.on_toggle;
                        rsx! {
                            button {
                                class: state.class(),
                                "aria-pressed": if state == PillState::Selected { "true" } else { "false" },
                                disabled: state == PillState::Disabled,
                                onclick: move |_| on_toggle.call(value.clone()),
                                "{option}"
                            }
                        }
                    }
                }
            }
            p { class: "input-hint", "{count} of {props.limit} selected" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn selected_pill_stays_enabled_when_full() {
        let sel = selected(&["a", "b", "c"]);
        assert_eq!(PillState::of("b", &sel, 3), PillState::Selected);
        assert_eq!(PillState::of("d", &sel, 3), PillState::Disabled);
    }

    #[test]
    fn available_below_limit() {
        let sel = selected(&["a"]);
        assert_eq!(PillState::of("d", &sel, 3), PillState::Available);
        assert_eq!(PillState::Available.class(), "pill");
    }
}
