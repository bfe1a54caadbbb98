use std::sync::{Mutex, OnceLock};

type ProgressFn = Box<dyn Fn(u64, u64) + Send + 'static>;

static HASH_PROGRESS_CB: OnceLock<Mutex<Option<ProgressFn>>> = OnceLock::new();

/// Registers a callback receiving `(bytes_done, bytes_total)` while files are hashed.
/// `bytes_total` is 0 when the size is unknown. A later call replaces the earlier callback.
pub fn set_hash_progress_callback(cb: impl Fn(u64, u64) + Send + 'static) {
    let slot = HASH_PROGRESS_CB.get_or_init(|| Mutex::new(None));
    if let Ok(mut g) = slot.lock() {
        *g = Some(Box::new(cb));
    }
}

pub fn clear_hash_progress_callback() {
    if let Some(m) = HASH_PROGRESS_CB.get() {
        if let Ok(mut g) = m.lock() {
            *g = None;
        }
    }
}

pub fn emit_hash_progress(done: u64, total: u64) {
    if let Some(m) = HASH_PROGRESS_CB.get() {
        if let Ok(g) = m.lock() {
            if let Some(cb) = &*g {
                cb(done, total);
            }
        }
    }
}
