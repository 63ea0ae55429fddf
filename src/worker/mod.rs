//! Background engine worker
//!
//! Runs conversions on a dedicated thread so an interactive caller stays
//! responsive. Each request carries a whole batch of files and gets back
//! either the complete table or the engine's error; there are no partial
//! results and no mid-run cancellation.

use std::io;
use std::thread::{self, JoinHandle};

use biome_engine::{BiomeTable, EngineError, EngineOptions, SourceFile};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TryRecvError};
use tracing::debug;

/// Errors crossing the worker boundary
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("failed to spawn engine worker: {0}")]
    Spawn(#[from] io::Error),

    #[error("engine worker stopped before replying")]
    Disconnected,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

struct ConversionRequest {
    files: Vec<SourceFile>,
    options: EngineOptions,
    reply: Sender<Result<BiomeTable, EngineError>>,
}

/// A conversion submitted to the worker
#[derive(Debug)]
pub struct PendingConversion {
    reply: Receiver<Result<BiomeTable, EngineError>>,
}

impl PendingConversion {
    /// Block until the conversion finishes
    pub fn wait(self) -> Result<BiomeTable, WorkerError> {
        let result = self.reply.recv().map_err(|_| WorkerError::Disconnected)?;
        Ok(result?)
    }

    /// Poll without blocking; `None` while the run is still going
    pub fn try_wait(&self) -> Option<Result<BiomeTable, WorkerError>> {
        match self.reply.try_recv() {
            Ok(result) => Some(result.map_err(WorkerError::from)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(WorkerError::Disconnected)),
        }
    }
}

/// Owns the engine thread; dropping it stops the thread.
pub struct EngineWorker {
    requests: Option<Sender<ConversionRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl EngineWorker {
    /// Start the worker thread
    pub fn spawn() -> Result<Self, WorkerError> {
        let (requests, incoming) = unbounded::<ConversionRequest>();

        let handle = thread::Builder::new()
            .name("biome-engine".into())
            .spawn(move || {
                while let Ok(request) = incoming.recv() {
                    debug!(files = request.files.len(), "engine worker received batch");
                    let result = biome_engine::convert(&request.files, &request.options);
                    // The caller may have given up on the reply
                    let _ = request.reply.send(result);
                }
            })?;

        Ok(Self {
            requests: Some(requests),
            handle: Some(handle),
        })
    }

    /// Queue a batch for conversion
    pub fn submit(
        &self,
        files: Vec<SourceFile>,
        options: EngineOptions,
    ) -> Result<PendingConversion, WorkerError> {
        let (reply, receiver) = bounded(1);
        let requests = self.requests.as_ref().ok_or(WorkerError::Disconnected)?;
        requests
            .send(ConversionRequest {
                files,
                options,
                reply,
            })
            .map_err(|_| WorkerError::Disconnected)?;
        Ok(PendingConversion { reply: receiver })
    }

    /// Submit a batch and wait for the result
    pub fn convert(
        &self,
        files: Vec<SourceFile>,
        options: EngineOptions,
    ) -> Result<BiomeTable, WorkerError> {
        self.submit(files, options)?.wait()
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
