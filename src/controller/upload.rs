use crate::api::{ApiError, MediaBackend};
use crate::config::ClientSettings;
use crate::controller::binding::{Notice, ViewBinding};
use crate::controller::library::LibraryRenderer;
use crate::controller::timer;
use futures_util::future::join_all;
use std::time::Duration;
use tracing::{error, info, warn};

/// A file handed over by a drop event. Reading is deferred so rejected files
/// are never read.
#[allow(async_fn_in_trait)]
pub trait DroppedFile {
    fn name(&self) -> String;

    async fn read_bytes(&self) -> Result<Vec<u8>, String>;
}

/// Which element a drag-leave event fired on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveTarget {
    Overlay,
    /// Something inside the drop region; leaving it does not leave the region.
    Child,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropOverlay {
    pub visible: bool,
}

impl DropOverlay {
    pub fn drag_over(&mut self) {
        self.visible = true;
    }

    pub fn drag_leave(&mut self, target: LeaveTarget) {
        if target == LeaveTarget::Overlay {
            self.visible = false;
        }
    }

    pub fn drop(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions(Vec<String>);

impl AllowedExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        )
    }

    pub fn accepts(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_ascii_lowercase();
                self.0.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Failed the extension check; no request was made.
    Skipped { error: ApiError },
    Uploaded {
        message: Option<String>,
        indexed: bool,
    },
    /// The server answered `success: false`.
    Refused { message: Option<String> },
    Failed { error: ApiError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettledFile {
    pub filename: String,
    pub outcome: FileOutcome,
}

/// One settled entry per dropped file, in drop order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub files: Vec<SettledFile>,
}

impl BatchReport {
    /// Files a request was attempted for.
    pub fn attempted(&self) -> usize {
        self.files
            .iter()
            .filter(|file| !matches!(file.outcome, FileOutcome::Skipped { .. }))
            .count()
    }

    pub fn uploaded(&self) -> usize {
        self.files
            .iter()
            .filter(|file| matches!(file.outcome, FileOutcome::Uploaded { .. }))
            .count()
    }

    /// True when something was uploaded and the server acknowledged every
    /// upload as already indexed.
    pub fn all_indexed(&self) -> bool {
        let indexed: Vec<bool> = self
            .files
            .iter()
            .filter_map(|file| match file.outcome {
                FileOutcome::Uploaded { indexed, .. } => Some(indexed),
                _ => None,
            })
            .collect();
        !indexed.is_empty() && indexed.iter().all(|flag| *flag)
    }
}

pub struct UploadIntake<B, V> {
    backend: B,
    view: V,
    extensions: AllowedExtensions,
    refresh_delay: Duration,
}

impl<B: MediaBackend, V: ViewBinding> UploadIntake<B, V> {
    pub fn new(backend: B, view: V, settings: &ClientSettings) -> Self {
        Self {
            backend,
            view,
            extensions: AllowedExtensions::new(&settings.allowed_extensions),
            refresh_delay: settings.refresh_delay(),
        }
    }

    /// Handles one drop: uploads the batch, then re-reads the catalog once
    /// every file has settled. The refresh waits `refresh_delay` unless the
    /// server reported every upload as indexed.
    pub async fn process_drop<F, LB, LV>(
        &self,
        files: Vec<F>,
        library: &LibraryRenderer<LB, LV>,
    ) -> BatchReport
    where
        F: DroppedFile,
        LB: MediaBackend,
        LV: ViewBinding,
    {
        if files.is_empty() {
            return BatchReport::default();
        }

        let report = self.upload_batch(files).await;
        info!(
            dropped = report.files.len(),
            attempted = report.attempted(),
            uploaded = report.uploaded(),
            "upload batch settled"
        );

        if report.attempted() > 0 {
            if !report.all_indexed() {
                timer::sleep(self.refresh_delay).await;
            }
            // A failed reload is logged by the renderer.
            let _ = library.load_library().await;
        }
        report
    }

    /// Validates and uploads every file independently. Uploads run
    /// concurrently with no cap; one failure never stops the others.
    pub async fn upload_batch<F: DroppedFile>(&self, files: Vec<F>) -> BatchReport {
        let jobs = files.iter().map(|file| self.settle_file(file));
        BatchReport {
            files: join_all(jobs).await,
        }
    }

    async fn settle_file<F: DroppedFile>(&self, file: &F) -> SettledFile {
        let filename = file.name();

        if !self.extensions.accepts(&filename) {
            warn!(%filename, "skipping unsupported file");
            self.view
                .notify(Notice::warning(format!("Skipped {filename}: unsupported file type")));
            let error = ApiError::UnsupportedFile {
                filename: filename.clone(),
            };
            return SettledFile {
                filename,
                outcome: FileOutcome::Skipped { error },
            };
        }

        let outcome = match self.upload_file(file, &filename).await {
            Ok(receipt) if receipt.success => {
                info!(%filename, "uploaded");
                self.view.notify(Notice::info(format!("Uploaded {filename}")));
                FileOutcome::Uploaded {
                    message: receipt.message,
                    indexed: receipt.indexed,
                }
            }
            Ok(receipt) => {
                let reason = receipt.message.clone().unwrap_or_else(|| "no reason given".into());
                warn!(%filename, %reason, "server refused upload");
                self.view
                    .notify(Notice::error(format!("Upload of {filename} refused: {reason}")));
                FileOutcome::Refused {
                    message: receipt.message,
                }
            }
            Err(err) => {
                error!(%filename, "upload failed: {err}");
                self.view
                    .notify(Notice::error(format!("Upload of {filename} failed")));
                FileOutcome::Failed { error: err }
            }
        };

        SettledFile { filename, outcome }
    }

    async fn upload_file<F: DroppedFile>(
        &self,
        file: &F,
        filename: &str,
    ) -> Result<crate::api::UploadReceipt, ApiError> {
        let bytes = file
            .read_bytes()
            .await
            .map_err(|message| ApiError::FileRead {
                filename: filename.to_string(),
                message,
            })?;
        self.backend.upload(filename, bytes).await
    }
}
