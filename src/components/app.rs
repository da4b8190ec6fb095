use crate::api::MediaServerClient;
use crate::components::{
    DropZone, LibraryGrid, NoticeTray, PageRemote, SignalBinding, TransportBar,
};
use crate::config::ClientSettings;
use crate::controller::{timer, GridState, NoticeBoard, Remote, StatusPanel};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::info;

#[component]
pub fn AppShell() -> Element {
    let settings = use_hook(ClientSettings::load);
    let grid = use_signal(GridState::default);
    let panel = use_signal(StatusPanel::default);
    let notices = use_signal(NoticeBoard::default);
    let binding = SignalBinding {
        grid,
        panel,
        notices,
    };

    let remote: PageRemote = use_hook(|| {
        info!(server = %settings.server_url, "connecting to media server");
        let client =
            MediaServerClient::new(&settings.server_url, settings.accept_legacy_catalog);
        Rc::new(Remote::new(client, binding, &settings))
    });

    // Provide state via context
    use_context_provider(|| binding);
    use_context_provider(|| remote.clone());

    {
        let remote = remote.clone();
        use_future(move || {
            let remote = remote.clone();
            async move {
                remote.start().await;
            }
        });
    }

    // Status auto-refresh; never touches the playing flag.
    {
        let remote = remote.clone();
        let poll_interval = settings.status_poll_interval();
        use_future(move || {
            let remote = remote.clone();
            async move {
                let Some(interval) = poll_interval else {
                    return;
                };
                loop {
                    timer::sleep(interval).await;
                    let _ = remote.transport.refresh_status().await;
                }
            }
        });
    }

    rsx! {
        DropZone {
            div { class: "app-shell",
                header { class: "page-header",
                    h1 { class: "page-title", "TuneGrid" }
                }
                TransportBar {}
                LibraryGrid {}
            }
        }
        NoticeTray {}
    }
}
