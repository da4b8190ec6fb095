use crate::api::{ApiError, MediaBackend, PlaybackEffect, TransportCommand};
use crate::controller::binding::{ToggleIcon, ViewBinding};
use std::cell::Cell;
use tracing::{debug, error, warn};

pub const LOADING_TEXT: &str = "⏳ Loading...";

/// Local belief about the server's playback. It follows the last command that
/// succeeded, not the server, so it drifts when a track ends on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
}

/// Issues transport commands and keeps the status text and toggle icon in
/// step with their responses.
///
/// Requests are not sequenced: when two are in flight the one that resolves
/// last writes the status, even if it was issued first.
pub struct TransportController<B, V> {
    backend: B,
    view: V,
    state: Cell<PlaybackState>,
}

impl<B: MediaBackend, V: ViewBinding> TransportController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            state: Cell::new(PlaybackState::default()),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state.get().is_playing
    }

    /// Song-started notification.
    pub fn mark_started(&self) {
        self.state.set(PlaybackState { is_playing: true });
        self.view.update_status(|panel| panel.toggle = ToggleIcon::Pause);
    }

    /// Song-stopped notification.
    pub fn mark_stopped(&self) {
        self.state.set(PlaybackState { is_playing: false });
        self.view.update_status(|panel| panel.toggle = ToggleIcon::Play);
    }

    fn apply(&self, effect: PlaybackEffect) {
        match effect {
            PlaybackEffect::Starts => self.mark_started(),
            PlaybackEffect::Halts => self.mark_stopped(),
            PlaybackEffect::Unchanged => {}
        }
    }

    /// Generic dispatch: shows a loading line, then the server's reply.
    pub async fn send(&self, command: TransportCommand) -> Result<(), ApiError> {
        self.view
            .update_status(|panel| panel.text = LOADING_TEXT.to_string());
        self.settle(&command).await
    }

    pub async fn play_song(&self, filename: &str) -> Result<(), ApiError> {
        self.settle(&TransportCommand::PlaySong(filename.to_string()))
            .await
    }

    pub async fn next_song(&self) -> Result<(), ApiError> {
        self.settle(&TransportCommand::Next).await
    }

    pub async fn prev_song(&self) -> Result<(), ApiError> {
        self.settle(&TransportCommand::Prev).await
    }

    async fn settle(&self, command: &TransportCommand) -> Result<(), ApiError> {
        match self.backend.dispatch(command).await {
            Ok(text) => {
                self.view.update_status(|panel| panel.text = text);
                self.apply(command.effect());
                Ok(())
            }
            Err(err) => {
                error!(path = %command.path(), "transport command failed: {err}");
                let line = format!("⚠ {err}");
                self.view.update_status(|panel| panel.text = line);
                Err(err)
            }
        }
    }

    /// Pauses when playing, resumes when paused. State and icon change only
    /// after the server accepted the command; a failure leaves both as they
    /// were. Returns the new playing flag.
    pub async fn toggle_play_pause(&self) -> Result<bool, ApiError> {
        let command = if self.is_playing() {
            TransportCommand::Pause
        } else {
            TransportCommand::Resume
        };

        if let Err(err) = self.backend.dispatch(&command).await {
            error!(path = %command.path(), "toggle failed, keeping current state: {err}");
            return Err(err);
        }

        self.apply(command.effect());
        debug!(playing = self.is_playing(), "toggle settled");

        // The toggle's own reply is not shown; the status line is re-read.
        let _ = self.refresh_status().await;
        Ok(self.is_playing())
    }

    /// Re-reads the status line. Never touches the playing flag.
    pub async fn refresh_status(&self) -> Result<(), ApiError> {
        match self.backend.fetch_status().await {
            Ok(text) => {
                self.view.update_status(|panel| panel.text = text);
                Ok(())
            }
            Err(err) => {
                warn!("status refresh failed: {err}");
                Err(err)
            }
        }
    }
}
