use crate::api::TransportCommand;
use crate::components::{Icon, PageRemote, SignalBinding};
use crate::controller::{ToggleIcon, LOADING_TEXT};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
enum TransportAction {
    Prev,
    Toggle,
    Next,
    Stop,
    Random,
    Refresh,
}

fn spawn_action(remote: PageRemote, action: TransportAction) {
    spawn(async move {
        // Failures are logged and rendered by the controller.
        let _ = match action {
            TransportAction::Prev => remote.transport.prev_song().await,
            TransportAction::Toggle => remote.transport.toggle_play_pause().await.map(|_| ()),
            TransportAction::Next => remote.transport.next_song().await,
            TransportAction::Stop => remote.transport.send(TransportCommand::Stop).await,
            TransportAction::Random => remote.transport.send(TransportCommand::Play).await,
            TransportAction::Refresh => remote.transport.refresh_status().await,
        };
    });
}

/// Status line plus transport buttons.
#[component]
pub fn TransportBar() -> Element {
    let binding = use_context::<SignalBinding>();
    let remote = use_context::<PageRemote>();
    let panel = (binding.panel)();

    let toggle_icon = match panel.toggle {
        ToggleIcon::Play => "play",
        ToggleIcon::Pause => "pause",
    };
    let toggle_label = match panel.toggle {
        ToggleIcon::Play => "Resume",
        ToggleIcon::Pause => "Pause",
    };
    let loading = panel.text == LOADING_TEXT;

    let button = |action: TransportAction| {
        let remote = remote.clone();
        move |_: MouseEvent| spawn_action(remote.clone(), action)
    };

    rsx! {
        section { class: "transport",
            div { id: "status", class: "status-line",
                if loading {
                    Icon { name: "loader".to_string(), class: "status-spinner".to_string() }
                }
                span { "{panel.text}" }
                button {
                    r#type: "button",
                    class: "icon-button small",
                    title: "Refresh status",
                    onclick: button(TransportAction::Refresh),
                    Icon { name: "refresh".to_string(), class: "icon".to_string() }
                }
            }
            div { class: "controls",
                button {
                    r#type: "button",
                    class: "icon-button",
                    title: "Random song",
                    onclick: button(TransportAction::Random),
                    Icon { name: "shuffle".to_string(), class: "icon".to_string() }
                }
                button {
                    r#type: "button",
                    class: "icon-button",
                    title: "Previous",
                    onclick: button(TransportAction::Prev),
                    Icon { name: "prev".to_string(), class: "icon".to_string() }
                }
                button {
                    id: "toggle-btn",
                    r#type: "button",
                    class: "icon-button primary",
                    title: "{toggle_label}",
                    onclick: button(TransportAction::Toggle),
                    Icon { name: toggle_icon.to_string(), class: "icon".to_string() }
                }
                button {
                    r#type: "button",
                    class: "icon-button",
                    title: "Next",
                    onclick: button(TransportAction::Next),
                    Icon { name: "next".to_string(), class: "icon".to_string() }
                }
                button {
                    r#type: "button",
                    class: "icon-button",
                    title: "Stop",
                    onclick: button(TransportAction::Stop),
                    Icon { name: "stop".to_string(), class: "icon".to_string() }
                }
            }
        }
    }
}
