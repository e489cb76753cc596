#[cfg(web_sys_unstable_apis)]
mod webxr;

#[cfg(web_sys_unstable_apis)]
pub use webxr::run_experience;

#[cfg(not(web_sys_unstable_apis))]
pub async fn run_experience() {
    crate::logging::init_logging();
    log::error!("built without --cfg=web_sys_unstable_apis, WebXR is unavailable");
}
