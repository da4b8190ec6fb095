//! View-independent core of the remote: catalog rendering, transport, and
//! upload intake. The UI supplies a [`ViewBinding`]; the network side is a
//! [`MediaBackend`].

pub mod binding;
pub mod library;
pub mod timer;
pub mod transport;
pub mod upload;


pub use binding::*;
pub use library::LibraryRenderer;
pub use transport::{TransportController, LOADING_TEXT};
pub use upload::{
    AllowedExtensions, BatchReport, DropOverlay, DroppedFile, FileOutcome, LeaveTarget,
    UploadIntake,
};

use crate::api::MediaBackend;
use crate::config::ClientSettings;

/// The three controllers of one page, sharing a backend and a view.
pub struct Remote<B, V> {
    pub library: LibraryRenderer<B, V>,
    pub transport: TransportController<B, V>,
    pub uploads: UploadIntake<B, V>,
}

impl<B, V> Remote<B, V>
where
    B: MediaBackend + Clone,
    V: ViewBinding + Clone,
{
    pub fn new(backend: B, view: V, settings: &ClientSettings) -> Self {
        Self {
            library: LibraryRenderer::new(backend.clone(), view.clone(), settings),
            transport: TransportController::new(backend.clone(), view.clone()),
            uploads: UploadIntake::new(backend, view, settings),
        }
    }

    /// Page start: render the catalog and show the current status.
    pub async fn start(&self) {
        let _ = self.library.load_library().await;
        let _ = self.transport.refresh_status().await;
    }

    pub async fn handle_drop<F: DroppedFile>(&self, files: Vec<F>) -> BatchReport {
        self.uploads.process_drop(files, &self.library).await
    }
}
