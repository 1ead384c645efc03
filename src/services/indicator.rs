use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Busy marker for a piece of UI chrome (a loading spinner, the export
/// button). Visible while any [`IndicatorGuard`] handed out by [`Indicator::show`]
/// is alive, so every exit path of the guarded operation clears it.
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    active: Arc<AtomicUsize>,
}

impl Indicator {
    pub fn show(&self) -> IndicatorGuard {
        self.active.fetch_add(1, Ordering::SeqCst);
        IndicatorGuard {
            active: self.active.clone(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }
}

#[derive(Debug)]
pub struct IndicatorGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for IndicatorGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}
