// src/gui/task.rs
//
// Background requests. The blocking client runs on a worker thread, the
// result comes back over a channel and the UI thread polls it each frame.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;

use crate::api::ApiResult;

/// One in-flight request.
pub struct Task<T> {
    rx: Receiver<ApiResult<T>>,
    label: &'static str,
}

impl<T: Send + 'static> Task<T> {
    pub fn spawn<F>(ctx: &egui::Context, label: &'static str, f: F) -> Self
    where
        F: FnOnce() -> ApiResult<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        logd!("Task: start {}", label);
        thread::spawn(move || {
            let res = f();
            if let Err(e) = &res {
                loge!("Task: {} failed: {}", label, e);
            }
            let _ = tx.send(res);
            ctx.request_repaint();
        });
        Self { rx, label }
    }

    /// `Some` exactly once, when the worker finishes. Errors are already
    /// rendered to display strings.
    pub fn poll(&self) -> Option<Result<T, String>> {
        match self.rx.try_recv() {
            Ok(res) => Some(res.map_err(|e| e.to_string())),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(format!("{}: worker stopped", self.label))),
        }
    }
}

/// A value that is fetched once and then shown.
pub enum Load<T> {
    Idle,
    Pending(Task<T>),
    Ready(T),
    Failed(String),
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Idle
    }
}

impl<T: Send + 'static> Load<T> {
    pub fn start<F>(&mut self, ctx: &egui::Context, label: &'static str, f: F)
    where
        F: FnOnce() -> ApiResult<T> + Send + 'static,
    {
        *self = Load::Pending(Task::spawn(ctx, label, f));
    }

    /// Returns true on the frame the result lands.
    pub fn poll(&mut self) -> bool {
        let Load::Pending(task) = self else { return false };
        match task.poll() {
            Some(Ok(v)) => {
                *self = Load::Ready(v);
                true
            }
            Some(Err(e)) => {
                *self = Load::Failed(e);
                true
            }
            None => false,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Load::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Load::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Load::Pending(_))
    }
}

/// Spinner while pending, red text on failure.
pub fn show_state<T: Send + 'static>(ui: &mut egui::Ui, load: &Load<T>) {
    match load {
        Load::Pending(_) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("불러오는 중...");
            });
        }
        Load::Failed(e) => {
            ui.colored_label(ui.visuals().error_fg_color, e);
        }
        _ => {}
    }
}
