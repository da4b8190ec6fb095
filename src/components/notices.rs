use crate::components::{Icon, SignalBinding};
use crate::controller::NoticeLevel;
use dioxus::prelude::*;

#[component]
pub fn NoticeTray() -> Element {
    let binding = use_context::<SignalBinding>();
    let mut notices = binding.notices;
    let board = notices();

    rsx! {
        if !board.is_empty() {
            div { class: "notice-tray",
                for entry in board.entries().iter() {
                    div {
                        key: "{entry.id}",
                        class: match entry.notice.level {
                            NoticeLevel::Info => "notice info",
                            NoticeLevel::Warning => "notice warning",
                            NoticeLevel::Error => "notice error",
                        },
                        span { "{entry.notice.text}" }
                        button {
                            r#type: "button",
                            class: "icon-button small",
                            onclick: {
                                let id = entry.id;
                                move |_| {
                                    notices.write().dismiss(id);
                                }
                            },
                            Icon { name: "x".to_string(), class: "icon".to_string() }
                        }
                    }
                }
            }
        }
    }
}
