use crate::components::{Icon, PageRemote};
use crate::controller::{DropOverlay, DroppedFile, LeaveTarget};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// A file from a browser drop event.
struct BrowserFile(FileData);

impl DroppedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        self.0
            .read_bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| e.to_string())
    }
}

/// Whole-page drop target. Dropped files go to the upload intake.
#[component]
pub fn DropZone(children: Element) -> Element {
    let remote = use_context::<PageRemote>();
    let mut overlay = use_signal(DropOverlay::default);
    let visible = overlay().visible;

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        overlay.write().drop();

        let files: Vec<BrowserFile> = evt.files().into_iter().map(BrowserFile).collect();
        if files.is_empty() {
            return;
        }
        let remote = remote.clone();
        spawn(async move {
            remote.handle_drop(files).await;
        });
    };

    rsx! {
        div {
            class: "drop-region",
            ondragover: move |evt: DragEvent| {
                // Without this the browser navigates to the dropped file.
                evt.prevent_default();
                if !overlay.peek().visible {
                    overlay.write().drag_over();
                }
            },
            ondrop: on_drop,
            {children}
            if visible {
                div {
                    class: "drop-overlay",
                    ondragleave: move |_| overlay.write().drag_leave(LeaveTarget::Overlay),
                    div { class: "drop-card",
                        Icon { name: "upload".to_string(), class: "drop-icon".to_string() }
                        p { "Drop audio files to upload" }
                    }
                }
            }
        }
    }
}
