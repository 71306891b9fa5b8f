//! Stack growth guard.
//!
//! Script text is user input, and `analyze` and `run` both recurse once per
//! level of call nesting. A script like `neg(neg(neg(...)))` nested a few
//! hundred thousand deep would otherwise blow the native stack.
//!
//! Wrap each recursive step in [`ensure_sufficient_stack`]. On native
//! targets it switches to a freshly allocated segment when less than
//! `RED_ZONE` bytes remain; on wasm it just calls the closure.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining stack in bytes, if the platform can tell.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mirrors how the evaluator walks nested calls: one frame per level.
    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn passes_through_result() {
        assert_eq!(ensure_sufficient_stack(|| "done"), "done");
    }

    #[test]
    fn survives_deep_nesting() {
        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn reports_remaining_stack_on_native() {
        if cfg!(not(target_arch = "wasm32")) {
            assert!(remaining_stack().is_some_and(|n| n > 0));
        }
    }
}
