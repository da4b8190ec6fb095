use crate::api::{ApiError, Catalog, MediaBackend, Track};
use crate::config::ClientSettings;
use crate::controller::binding::{Card, CardArt, ViewBinding};
use tracing::{error, info};

/// Read path: fetches the catalog and rebuilds the grid from scratch.
pub struct LibraryRenderer<B, V> {
    backend: B,
    view: V,
    default_art_url: String,
    asset_base: String,
}

impl<B: MediaBackend, V: ViewBinding> LibraryRenderer<B, V> {
    pub fn new(backend: B, view: V, settings: &ClientSettings) -> Self {
        Self {
            backend,
            view,
            default_art_url: settings.default_art_url.clone(),
            asset_base: settings.server_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the catalog and renders it, returning the number of cards.
    ///
    /// On failure the grid keeps whatever it showed before and the error is
    /// logged; calling again is the retry.
    pub async fn load_library(&self) -> Result<usize, ApiError> {
        let response = match self.backend.fetch_catalog().await {
            Ok(response) => response,
            Err(err) => {
                error!("library load failed, keeping the current grid: {err}");
                return Err(err);
            }
        };

        match response.catalog {
            Catalog::Empty => {
                self.view.update_grid(|grid| {
                    grid.clear();
                    grid.show_empty();
                });
                info!("library is empty");
                Ok(0)
            }
            Catalog::Tracks(tracks) => {
                let cards: Vec<Card> = tracks.iter().map(|track| self.card_for(track)).collect();
                let count = cards.len();
                self.view.update_grid(move |grid| {
                    grid.hide_empty();
                    grid.replace_cards(cards);
                });
                info!(tracks = count, "library rendered");
                Ok(count)
            }
        }
    }

    /// Completion callback for a card's lazily loaded artwork.
    pub fn art_loaded(&self, filename: &str) {
        self.view.update_grid(|grid| {
            grid.mark_art_loaded(filename);
        });
    }

    fn card_for(&self, track: &Track) -> Card {
        let title = track.display_title();
        let art = match track.custom_art(&self.default_art_url) {
            Some(path) => CardArt::Image {
                src: self.resolve_art(path),
            },
            None => CardArt::Glyph,
        };

        Card {
            filename: track.filename.clone(),
            tooltip: title.clone(),
            title,
            artist: track.display_artist().to_string(),
            art,
            art_loaded: false,
        }
    }

    fn resolve_art(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:")
        {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.asset_base, path)
        } else {
            format!("{}/{}", self.asset_base, path)
        }
    }
}
