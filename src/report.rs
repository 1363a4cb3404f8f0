//! Leveled report sink contract.
//!
//! Purely observational: nothing in the motion core branches on whether a
//! sink is wired up, let alone on what it does with a message.

use core::fmt;

/// Leveled, printf-style diagnostic output.
///
/// Implementations receive preformatted `fmt::Arguments` rather than a
/// format string directly — use the [`report_info!`], [`report_debug!`],
/// [`report_result!`] and [`report_error!`] macros at call sites instead of
/// invoking these methods by hand.
pub trait ReportSink {
    /// Routine informational message (e.g. "moving X axis 10mm").
    fn info(&mut self, args: fmt::Arguments);
    /// Verbose diagnostic message, typically compiled out in release builds.
    fn debug(&mut self, args: fmt::Arguments);
    /// Terminal outcome of an operation (e.g. "X axis homed").
    fn result(&mut self, args: fmt::Arguments);
    /// Error condition.
    fn error(&mut self, args: fmt::Arguments);
}

/// A sink that discards everything. Useful for tests and for builds with no
/// logging backend wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn info(&mut self, _args: fmt::Arguments) {}
    fn debug(&mut self, _args: fmt::Arguments) {}
    fn result(&mut self, _args: fmt::Arguments) {}
    fn error(&mut self, _args: fmt::Arguments) {}
}

/// `std`-backed sink: info/debug/result to stdout, error to stderr.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl ReportSink for StdoutSink {
    fn info(&mut self, args: fmt::Arguments) {
        println!("[info] {}", args);
    }

    fn debug(&mut self, args: fmt::Arguments) {
        println!("[debug] {}", args);
    }

    fn result(&mut self, args: fmt::Arguments) {
        println!("[result] {}", args);
    }

    fn error(&mut self, args: fmt::Arguments) {
        eprintln!("[error] {}", args);
    }
}

/// `defmt`-backed sink for embedded targets.
///
/// `defmt`'s macros require a format string known at compile time, so this
/// forwards the already-rendered message as a runtime string via `{=str}`.
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl ReportSink for DefmtSink {
    fn info(&mut self, args: fmt::Arguments) {
        let mut buf: heapless::String<128> = heapless::String::new();
        if fmt::Write::write_fmt(&mut buf, args).is_ok() {
            defmt::info!("{=str}", buf.as_str());
        }
    }

    fn debug(&mut self, args: fmt::Arguments) {
        let mut buf: heapless::String<128> = heapless::String::new();
        if fmt::Write::write_fmt(&mut buf, args).is_ok() {
            defmt::debug!("{=str}", buf.as_str());
        }
    }

    fn result(&mut self, args: fmt::Arguments) {
        let mut buf: heapless::String<128> = heapless::String::new();
        if fmt::Write::write_fmt(&mut buf, args).is_ok() {
            defmt::info!("{=str}", buf.as_str());
        }
    }

    fn error(&mut self, args: fmt::Arguments) {
        let mut buf: heapless::String<128> = heapless::String::new();
        if fmt::Write::write_fmt(&mut buf, args).is_ok() {
            defmt::error!("{=str}", buf.as_str());
        }
    }
}

/// Emit an informational message on a [`ReportSink`].
#[macro_export]
macro_rules! report_info {
    ($sink:expr, $($arg:tt)*) => {
        $crate::report::ReportSink::info(&mut $sink, format_args!($($arg)*))
    };
}

/// Emit a debug message on a [`ReportSink`].
#[macro_export]
macro_rules! report_debug {
    ($sink:expr, $($arg:tt)*) => {
        $crate::report::ReportSink::debug(&mut $sink, format_args!($($arg)*))
    };
}

/// Emit a result message on a [`ReportSink`].
#[macro_export]
macro_rules! report_result {
    ($sink:expr, $($arg:tt)*) => {
        $crate::report::ReportSink::result(&mut $sink, format_args!($($arg)*))
    };
}

/// Emit an error message on a [`ReportSink`].
#[macro_export]
macro_rules! report_error {
    ($sink:expr, $($arg:tt)*) => {
        $crate::report::ReportSink::error(&mut $sink, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        info_calls: u32,
        error_calls: u32,
    }

    impl ReportSink for CountingSink {
        fn info(&mut self, _args: fmt::Arguments) {
            self.info_calls += 1;
        }
        fn debug(&mut self, _args: fmt::Arguments) {}
        fn result(&mut self, _args: fmt::Arguments) {}
        fn error(&mut self, _args: fmt::Arguments) {
            self.error_calls += 1;
        }
    }

    #[test]
    fn macros_forward_to_sink() {
        let mut sink = CountingSink::default();
        report_info!(sink, "moving {} mm", 10.0);
        report_error!(sink, "oops");
        assert_eq!(sink.info_calls, 1);
        assert_eq!(sink.error_calls, 1);
    }

    #[test]
    fn null_sink_discards() {
        let mut sink = NullSink;
        report_info!(sink, "ignored");
        report_debug!(sink, "ignored");
        report_result!(sink, "ignored");
        report_error!(sink, "ignored");
    }
}
