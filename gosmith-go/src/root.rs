//! The document root: top-level statements plus post-render formatting.

use gosmith_codegen::{Body, FormatConfig, FormatterStep, Result, apply_formatter, run_pipeline};
use tracing::debug;

use crate::presets;

/// A whole Go source file.
///
/// Statements render one after another at the requested level. After a
/// successful render the text optionally goes through a `gofmt -e`
/// syntax check and then through each configured formatter step in
/// order.
#[derive(Debug, Clone, Default)]
pub struct Root {
    body: Body,
    config: FormatConfig,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `gofmt -e` over the rendered text before any formatter step.
    #[must_use]
    pub fn enable_syntax_checking(&self) -> Self {
        self.with_config(self.config.with_syntax_check(true))
    }

    #[must_use]
    pub fn disable_syntax_checking(&self) -> Self {
        self.with_config(self.config.with_syntax_check(false))
    }

    /// Append a formatter step.
    #[must_use]
    pub fn formatter(&self, step: FormatterStep) -> Self {
        self.with_config(self.config.with_step(step))
    }

    /// Append formatter steps in order.
    #[must_use]
    pub fn formatters(&self, steps: impl IntoIterator<Item = FormatterStep>) -> Self {
        self.with_config(self.config.with_steps(steps))
    }

    #[must_use]
    pub fn gofmt<I, S>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formatter(presets::gofmt(args))
    }

    #[must_use]
    pub fn goimports<I, S>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formatter(presets::goimports(args))
    }

    /// Replace the whole formatter configuration, e.g. one loaded with
    /// [`FormatConfig::open`].
    #[must_use]
    pub fn with_config(&self, config: FormatConfig) -> Self {
        Self {
            body: self.body.clone(),
            config,
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Render every statement at `indent_level`, then run the syntax check
    /// and formatter steps. The first failure wins and no partial output
    /// is returned.
    pub fn render(&self, indent_level: usize) -> Result<String> {
        let span = tracing::debug_span!(
            "render_root",
            statements = self.body.len(),
            steps = self.config.steps.len(),
            syntax_check = self.config.syntax_check,
        );
        let _enter = span.enter();

        let code = self.body.render(indent_level)?;
        debug!(bytes = code.len(), "rendered statements");

        if self.config.syntax_check {
            apply_formatter(&presets::syntax_checker(), &code)?;
        }
        run_pipeline(&self.config.steps, code)
    }
}

body_mutators!(Root);
