//! WASM-facing entry points for the QR to STL pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The host calls [`init`] once after loading the module and
//! enables its convert button only when that succeeds. Native tests use the
//! `*_internal` helpers, which take an explicit [`ModuleLifecycle`] and return
//! Rust error types instead of `JsValue`.
//!
//! ```
//! use qr_stl_wasm::{init_internal, qr2stl_internal, ModuleLifecycle};
//!
//! let lifecycle = ModuleLifecycle::new();
//! init_internal(&lifecycle).unwrap();
//! let stl = qr2stl_internal(&lifecycle, "A", "1", "50", "2").unwrap();
//! assert_eq!(stl.len(), 136_284);
//! ```

pub mod lifecycle;

pub use lifecycle::{LifecycleError, LoadState, ModuleLifecycle};

use config::constants::{DEFAULT_BASE_HEIGHT, DEFAULT_BASE_SIZE, DEFAULT_PIXEL_SIZE};
use qr_stl::{ConvertError, GeometryParams};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Load state of this module instance.
static LIFECYCLE: ModuleLifecycle = ModuleLifecycle::new();

/// Errors surfaced to the host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Finishes loading the module: installs the panic hook and runs a warm-up
/// conversion.
///
/// # Errors
/// Returns a JavaScript error value when the warm-up fails, when called
/// again after a failure, or when called re-entrantly during loading.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // await wasmModule();
/// // init();
/// // button.disabled = false;
/// ```
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    init_internal(&LIFECYCLE).map_err(to_js)
}

/// Host-only helper behind [`init`].
pub fn init_internal(lifecycle: &ModuleLifecycle) -> Result<(), LifecycleError> {
    lifecycle.initialize(|| {
        install_panic_hook();
        warm_up()
    })
}

fn install_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn warm_up() -> Result<(), String> {
    let params = GeometryParams::new(DEFAULT_BASE_HEIGHT, DEFAULT_BASE_SIZE, DEFAULT_PIXEL_SIZE)
        .map_err(|err| err.to_string())?;
    qr_stl::convert_with_params("", &params)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Returns `"uninitialized"`, `"loading"`, `"ready"` or `"failed"`.
#[wasm_bindgen]
pub fn load_state() -> String {
    LIFECYCLE.state().name().to_string()
}

/// Converts text into binary STL bytes (a `Uint8Array` in JavaScript).
///
/// The numeric parameters are taken as strings, exactly as read from form
/// fields.
///
/// # Errors
/// Returns a JavaScript error containing a human-readable message when the
/// module is not ready, a parameter is invalid, or the text is too long.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const stl = qr2stl(text, baseHeight, baseSize, pixelSize);
/// // const blob = new Blob([stl], { type: "application/octet-stream" });
/// ```
#[wasm_bindgen]
pub fn qr2stl(
    input: &str,
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<Vec<u8>, JsValue> {
    qr2stl_internal(&LIFECYCLE, input, base_height, base_size, pixel_size).map_err(to_js)
}

/// Host-only helper behind [`qr2stl`].
pub fn qr2stl_internal(
    lifecycle: &ModuleLifecycle,
    input: &str,
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<Vec<u8>, HostError> {
    lifecycle.ensure_ready()?;
    Ok(qr_stl::convert(input, base_height, base_size, pixel_size)?)
}

/// Converts text and returns the conversion report as JSON.
///
/// # Errors
/// Same as [`qr2stl`].
#[wasm_bindgen]
pub fn conversion_report(
    input: &str,
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<String, JsValue> {
    conversion_report_internal(&LIFECYCLE, input, base_height, base_size, pixel_size)
        .map_err(to_js)
}

/// Host-only helper behind [`conversion_report`].
pub fn conversion_report_internal(
    lifecycle: &ModuleLifecycle,
    input: &str,
    base_height: &str,
    base_size: &str,
    pixel_size: &str,
) -> Result<String, HostError> {
    lifecycle.ensure_ready()?;
    let conversion = qr_stl::convert_with_report(input, base_height, base_size, pixel_size)?;
    Ok(serde_json::to_string(&conversion.report)?)
}

#[cfg(test)]
mod tests;
