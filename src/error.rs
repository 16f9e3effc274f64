use std::cell::Cell;

use crate::object::Object;
use crate::token::{Token, Type};

/// Accumulates parse/resolve/runtime errors for one `Lox` driver instance.
///
/// Two flags only, mirroring the had_error/had_runtime_error contract: owned
/// and threaded by shared reference instead of process-wide statics, since
/// each pipeline stage only ever reads or sets them, never holds an
/// exclusive borrow across a call into another stage.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    had_error: Cell<bool>,
    had_runtime_error: Cell<bool>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error.get()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error.get()
    }

    /// Resets both flags. Used between REPL lines.
    pub fn reset(&self) {
        self.had_error.set(false);
        self.had_runtime_error.set(false);
    }

    /// Reports a bare scanner error (no token exists yet).
    pub fn error(&self, line: usize, message: &str) {
        eprintln!("[line {line}] Error: {message}");
        self.had_error.set(true);
    }

    /// Reports a parse/resolve error anchored on a token.
    pub fn token_error(&self, token: &Token, message: &str) {
        if token.r#type == Type::EOF {
            eprintln!("[line {}] Error at end: {message}", token.line);
        } else {
            eprintln!("[line {}] Error at '{}': {message}", token.line, token.lexeme);
        }
        self.had_error.set(true);
    }

    pub fn runtime_error(&self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message, error.token.line);
        self.had_runtime_error.set(true);
    }
}

/// Implemented by every stage-specific error so it can report itself through
/// a shared `ErrorReporter` without the reporting call site matching on kind.
pub trait Error {
    fn report(&self, reporter: &ErrorReporter);
}

/// An error encountered while scanning, before any token exists.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn report(&self, reporter: &ErrorReporter) {
        reporter.error(self.line, &self.message);
    }
}

/// An error encountered while parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn report(&self, reporter: &ErrorReporter) {
        reporter.token_error(&self.token, &self.message);
    }
}

/// An error encountered while resolving.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn report(&self, reporter: &ErrorReporter) {
        reporter.token_error(&self.token, &self.message);
    }
}

/// An error encountered while evaluating.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn report(&self, reporter: &ErrorReporter) {
        reporter.runtime_error(self);
    }
}

/// The non-local control transfer used to implement `return`. Never an
/// error in the diagnostic sense; never reaches the top-level catch.
#[derive(Debug, Clone)]
pub enum Unwind {
    Return(Object),
}

/// The result type threaded through statement execution: either a `return`
/// unwind in flight or a genuine runtime error. Letting both flow through
/// the same `?`-composable type means `execute`/`evaluate` don't need to be
/// matched by hand at every call site.
#[derive(Debug, Clone)]
pub enum ExecError {
    Unwind(Unwind),
    Runtime(RuntimeError),
}

impl From<Unwind> for ExecError {
    fn from(value: Unwind) -> Self {
        ExecError::Unwind(value)
    }
}

impl From<RuntimeError> for ExecError {
    fn from(value: RuntimeError) -> Self {
        ExecError::Runtime(value)
    }
}
