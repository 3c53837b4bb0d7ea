//! Exit code constants for the alibi CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Catalog failure (built-in template catalog is malformed)
//! - 3: Persistence failure (history log could not be written or read)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Catalog failure: a category resolved to zero tones or zero templates.
pub const CATALOG_FAILURE: i32 = 2;

/// Persistence failure: history directory or log file I/O error.
pub const PERSIST_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CATALOG_FAILURE, PERSIST_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
