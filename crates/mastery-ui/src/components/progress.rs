//! Progress Bar Component

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// 1-based position
    pub position: usize,
    pub total: usize,
    /// Fill percentage, 0..=100
    pub percent: u32,
}

/// "Progress: Step 2 of 6"
pub fn progress_label(position: usize, total: usize) -> String {
    format!("Progress: Step {} of {}", position, total)
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = props.percent.min(100);
    let label = progress_label(props.position, props.total);

    rsx! {
        div { class: "progress",
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuenow": "{width}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "progress-fill", style: "width: {width}%;" }
            }
            p { class: "progress-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_format() {
        assert_eq!(progress_label(2, 6), "Progress: Step 2 of 6");
    }
}
