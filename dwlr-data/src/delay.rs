//! Async sleep for the simulated network latency.
//!
//! In the browser this awaits a `setTimeout`-backed promise; natively it
//! uses the tokio timer.

use log::warn;
use std::fmt::Debug;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use wasm_bindgen::JsValue;

    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                    .is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            warn!("setTimeout unavailable, skipping {}ms delay", millis);
            warn_on_err("resolving the delay", resolve.call0(&JsValue::NULL));
        }
    });
    warn_on_err(
        "waiting for the delay",
        wasm_bindgen_futures::JsFuture::from(promise).await,
    );
}

/// Log a failed JS call and carry on; a broken timer only shortens the delay.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn warn_on_err<T, E: Debug>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} failed: {:?}", what, e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::{sleep, warn_on_err};
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_sleep_waits() {
        let started = Instant::now();
        sleep(Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_warn_on_err() {
        assert_eq!(warn_on_err::<_, String>("ok call", Ok(3)), Some(3));
        assert_eq!(warn_on_err::<u8, _>("failing call", Err("no window")), None);
    }
}
