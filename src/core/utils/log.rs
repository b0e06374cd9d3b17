//! Console logging
//!
//! On wasm32 messages go to the host console through `web_sys::console`.
//! Native builds (tests, native callers) have no console to talk to, so the
//! macros only type-check their arguments there.

/// Log an info line to the host console
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the host console
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_are_silent_off_wasm() {
        let width = 3;
        console_log!("grid {}x{}", width, width);
        console_warn!("restore failed: {}", "shape");
    }
}
