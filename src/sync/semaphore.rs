use std::sync::atomic::{AtomicUsize, Ordering};

const SPIN_BEFORE_YIELD: usize = 256;

/// Counting semaphore on one cache line.
/// `release` publishes everything written before it to the thread whose
/// `acquire` consumes the permit.
#[repr(align(64))]
#[derive(Debug, Default)]
pub struct Semaphore {
    permits: AtomicUsize,
}

impl Semaphore {
    pub fn new(permits: usize) -> Self {
        Semaphore {
            permits: AtomicUsize::new(permits),
        }
    }

    pub fn release(&self) {
        self.permits.fetch_add(1, Ordering::Release);
    }

    /// Take one permit, spinning and then yielding until one is available.
    pub fn acquire(&self) {
        let mut spin = 0;
        loop {
            if self.try_acquire() {
                return;
            }
            std::hint::spin_loop();
            spin += 1;
            if spin >= SPIN_BEFORE_YIELD {
                spin = 0;
                std::thread::yield_now();
            }
        }
    }

    pub fn try_acquire(&self) -> bool {
        let mut permits = self.permits.load(Ordering::Relaxed);
        while permits > 0 {
            match self.permits.compare_exchange_weak(
                permits,
                permits - 1,
                Ordering::Acquire,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(actual) => permits = actual,
            }
        }
        false
    }
}
