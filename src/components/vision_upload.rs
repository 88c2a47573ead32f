//! Vision Image Upload Component
//!
//! Native file picker restricted to image types. The chosen file is read and
//! decoded off the UI thread, then pinned to the goal on the vision board.

use dioxus::prelude::*;
use mastery_core::{encode_file, VisionImageFormat};
use rfd::FileDialog;

use crate::context::use_wizard;

/// Upload button for one goal's vision image
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     VisionUpload { goal: "Start a business".to_string() }
/// }
/// ```
#[component]
pub fn VisionUpload(
    /// Goal the image is pinned to
    goal: String,
    #[props(default = "Upload Image".to_string())]
    label: String,
) -> Element {
    let mut wizard = use_wizard();
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_upload = move |_| {
        uploading.set(true);
        error.set(None);
        let goal = goal.clone();

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &VisionImageFormat::EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match encode_file(&path).await {
                    Ok(image) => {
                        wizard.write().store_vision_image(&goal, image);
                    }
                    Err(e) => {
                        tracing::warn!(goal = %goal, path = %path.display(), "Upload failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {}", e)));
                }
            }
            uploading.set(false);
        });
    };

    rsx! {
        div { class: "image-upload",
            button {
                class: "image-upload-btn",
                onclick: handle_upload,
                disabled: uploading(),
                if uploading() { "Uploading..." } else { "{label}" }
            }

            if let Some(err) = error() {
                div { class: "image-upload__error", "\u{26A0}\u{FE0F} {err}" }
            }
        }
    }
}
