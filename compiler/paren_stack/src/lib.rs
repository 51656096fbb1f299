//! Stack growth for recursive reading and evaluation.
//!
//! Both the reader and the evaluator recurse once per nesting level of the
//! input, so an expression like `((((...))))` a few hundred thousand levels
//! deep would exhaust a fixed-size native stack. Wrapping each recursive
//! step in [`ensure_sufficient_stack`] moves execution onto a freshly
//! allocated segment whenever the remaining stack drops below the red zone.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn read_list(&mut self) -> Result<Node, ParseError> {
///     ensure_sufficient_stack(|| self.read_children())
/// }
/// ```
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
