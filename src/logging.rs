#[allow(unused_imports)]
use log::{info, warn};


pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if console_log::init_with_level(log::Level::Warn).is_err() {
                // Already initialised by an earlier App in the same page.
                return;
            }
        } else {
            // Tolerates repeated calls (tests, multiple Apps).
            let _ = env_logger::try_init();
        }
    }
}


pub fn printlog(log_str: &str) {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            warn!("{}", log_str);
        } else {
            info!("{}", log_str);
        }
    }
}
