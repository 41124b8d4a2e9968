// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Liveness/readiness owned by the process supervisor and shared with the
/// health endpoints by reference, instead of process-global flags.
#[derive(Debug)]
pub struct HealthState {
    live: AtomicBool,
    ready: AtomicBool,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            live: AtomicBool::new(true),
            ready: AtomicBool::new(false),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    pub fn set_live(&self, live: bool) {
        self.live.store(live, Ordering::Relaxed);
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Relaxed);
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub health: Arc<HealthState>,
}
