//! Per-handler error containment.

use std::fmt::Display;

/// Runs one event handler, logging and swallowing its error.
///
/// Returns the handler's value on success. The caller's event loop keeps
/// going either way.
pub fn guard<T, E: Display>(handler: &str, f: impl FnOnce() -> Result<T, E>) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} error: {}", handler, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_passes_value_and_swallows_error() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(guard("ok", || Ok::<_, String>(3)), Some(3));
        assert_eq!(guard("fails", || Err::<u8, _>("boom")), None);
    }
}
