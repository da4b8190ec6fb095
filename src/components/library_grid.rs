use crate::components::{Icon, PageRemote, SignalBinding};
use crate::controller::{Card, CardArt};
use dioxus::prelude::*;

#[component]
pub fn LibraryGrid() -> Element {
    let binding = use_context::<SignalBinding>();
    let grid = (binding.grid)();

    rsx! {
        if grid.empty_visible {
            div { id: "empty-message", class: "empty-library",
                Icon { name: "music".to_string(), class: "empty-icon".to_string() }
                p { "No songs yet. Drop audio files anywhere on the page to add them." }
            }
        }
        div { id: "song-grid", class: "song-grid",
            for card in grid.cards.iter() {
                SongCard { key: "{card.filename}", card: card.clone() }
            }
        }
    }
}

#[component]
fn SongCard(card: Card) -> Element {
    let remote = use_context::<PageRemote>();

    let on_play = {
        let remote = remote.clone();
        let filename = card.filename.clone();
        move |_| {
            let remote = remote.clone();
            let filename = filename.clone();
            spawn(async move {
                let _ = remote.transport.play_song(&filename).await;
            });
        }
    };

    let on_art_loaded = {
        let remote = remote.clone();
        let filename = card.filename.clone();
        move |_| remote.library.art_loaded(&filename)
    };

    let art_class = if card.art_loaded { "cover loaded" } else { "cover" };

    rsx! {
        div { class: "song-card", onclick: on_play,
            div { class: "art",
                {
                    match &card.art {
                        CardArt::Image { src } => rsx! {
                            img {
                                src: "{src}",
                                alt: "cover for {card.title}",
                                loading: "lazy",
                                class: "{art_class}",
                                onload: on_art_loaded,
                            }
                        },
                        CardArt::Glyph => rsx! {
                            Icon { name: "music".to_string(), class: "art-glyph".to_string() }
                        },
                    }
                }
            }
            div { class: "info",
                div { class: "title", title: "{card.tooltip}", "{card.title}" }
                div { class: "artist", "{card.artist}" }
            }
        }
    }
}
