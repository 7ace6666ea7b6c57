// macros.rs - Logging shims over the `log` facade.
//
// With the `log` feature disabled these expand to nothing, so the arguments
// must not carry side effects.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::trace!(target: "text_matcher", $($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::debug!(target: "text_matcher", $($arg)*);
    }};
}
