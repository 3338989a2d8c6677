//! Formatter steps for the standard Go toolchain.

use gosmith_codegen::FormatterStep;

/// `gofmt` with extra arguments, e.g. `gofmt(["-s"])`.
pub fn gofmt<I, S>(args: I) -> FormatterStep
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FormatterStep::new("gofmt").args(args)
}

/// `goimports` with extra arguments.
pub fn goimports<I, S>(args: I) -> FormatterStep
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FormatterStep::new("goimports").args(args)
}

/// `gofmt -e`, run before the configured steps when syntax checking is on.
/// Only its exit status matters; the formatted output is discarded.
pub fn syntax_checker() -> FormatterStep {
    FormatterStep::new("gofmt").arg("-e")
}
