use crate::controllers::data::frame_data::FrameData;
use crate::controllers::data::render_job::RenderJob;
use crate::controllers::explorer::render_job;
use crate::core::actions::cancellation::QuitFlag;
use crate::core::actions::render_frame::RenderFrameError;
use crate::core::data::viewport::Viewport;
use crate::core::palette::palette::Palette;
use log::{debug, info};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

pub type RenderOutcome = Result<FrameData, RenderFrameError>;

struct SharedState {
    pending: Mutex<Option<RenderJob>>,
    finished: Mutex<Option<RenderOutcome>>,
    wake: Condvar,
    rendering: AtomicBool,
    quit: QuitFlag,
}

// the guarded values stay valid even if a holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Renders frames on a dedicated thread so the event loop keeps running.
///
/// Holds at most one pending job and one finished outcome. Submitting while
/// a job is pending replaces it. Requesting quit aborts the frame in flight
/// at its next row.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn spawn(viewport: Viewport, palette: Arc<Palette>) -> io::Result<Self> {
        let shared = Arc::new(SharedState {
            pending: Mutex::new(None),
            finished: Mutex::new(None),
            wake: Condvar::new(),
            rendering: AtomicBool::new(false),
            quit: QuitFlag::default(),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("render".into())
            .spawn(move || Self::worker_loop(&worker_shared, viewport, &palette))?;

        info!("render worker started");

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    pub fn submit(&self, job: RenderJob) {
        *lock(&self.shared.pending) = Some(job);
        self.shared.wake.notify_one();
    }

    /// Takes the latest finished frame or error, if any.
    pub fn take_finished(&self) -> Option<RenderOutcome> {
        lock(&self.shared.finished).take()
    }

    /// True while a job is queued or being rendered.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        // the worker flips `rendering` under this lock
        let pending = lock(&self.shared.pending);
        pending.is_some() || self.is_rendering()
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.shared.rendering.load(Ordering::Acquire)
    }

    /// The flag polled by every row of the frame in flight.
    #[must_use]
    pub fn quit_flag(&self) -> QuitFlag {
        self.shared.quit.clone()
    }

    /// Cancels the frame in flight and waits for the thread to exit.
    pub fn shutdown(&mut self) {
        self.shared.quit.request();
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
            info!("render worker stopped");
        }
    }

    fn worker_loop(shared: &SharedState, viewport: Viewport, palette: &Arc<Palette>) {
        loop {
            let job = {
                let mut pending = lock(&shared.pending);
                loop {
                    if shared.quit.is_requested() {
                        return;
                    }

                    if let Some(job) = pending.take() {
                        shared.rendering.store(true, Ordering::Release);
                        break job;
                    }

                    pending = shared
                        .wake
                        .wait(pending)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let outcome = render_job(viewport, palette, job, &shared.quit);
            if outcome.as_ref().is_err_and(RenderFrameError::is_cancelled) {
                debug!("frame {} cancelled", job.frame);
            }

            shared.rendering.store(false, Ordering::Release);
            *lock(&shared.finished) = Some(outcome);
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
