use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Armed flag plus the in-flight cycle flag.
///
/// 启用标志与进行中周期标志。
///
/// Both flags are plain atomics. `try_begin_cycle` is the single place a
/// cycle is admitted, so at most one [`CycleGuard`] exists at a time.
#[derive(Debug, Default)]
pub struct TriggerState {
    armed: AtomicBool,
    busy: Arc<AtomicBool>,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Claim the in-flight slot. Returns `None` if a cycle is already running.
    pub fn try_begin_cycle(&self) -> Option<CycleGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| CycleGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

/// Releases the in-flight slot when dropped.
#[derive(Debug)]
pub struct CycleGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}
