/// Forwards to the `tracing` macro of the given level if the `tracing`
/// feature is enabled and expands to nothing otherwise.
///
/// ```ignore
/// log_event!(debug, time = 1000, "slider break");
/// ```
#[cfg(feature = "tracing")]
macro_rules! log_event {
    ( $level:ident, $( $arg:tt )+ ) => {
        tracing::$level!($( $arg )+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_event {
    ( $level:ident, $( $arg:tt )+ ) => {
        ()
    };
}
