/// Returns the version of the `detailing` workspace.
pub fn detailing_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Asserts that an expression matches a pattern, optionally with a guard.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => (),
            ref val => ::core::panic!(
                "{val:?} does not match {}",
                ::core::stringify!($pat $(if $guard)?)
            ),
        }
    };
}
