//! Console logging that compiles to nothing off-wasm.

#[cfg(target_arch = "wasm32")]
pub(crate) fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn console_log(_msg: &str) {}

#[cfg(target_arch = "wasm32")]
pub(crate) fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn console_warn(_msg: &str) {}
