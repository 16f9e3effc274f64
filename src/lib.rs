#![allow(clippy::needless_return)]

//! Lox is a dynamically typed language with lexical scoping and first-class
//! functions, implemented here as a tree-walk interpreter with a
//! hand-written recursive descent parser.
//!
//! ## Scanning
//! The first step in the interpreter is scanning: converting a string of
//! characters into a list of tokens. For example, the string `1 + 2` would
//! be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as a state
//! machine over the characters in the source code. It reports lexical
//! errors as a [`ScanError`](error::ScanError) — unterminated strings,
//! unterminated numbers, unexpected characters — and keeps scanning past
//! one so a source file with several mistakes reports all of them at once.
//!
//! ## Parsing
//! The second step is parsing: converting the token list into an abstract
//! syntax tree. The parser is implemented in the [`parser`](parser) module
//! as a recursive descent parser with precedence climbing.
//! [`Expressions`](expr::Expr) produce a value, an [`Object`](object::Object);
//! [`statements`](stmt::Stmt) perform a side effect and produce nothing.
//!
//! For example, the string `print 1 + 2;` parses to:
//! ```text
//! Print(Binary(Literal(1), Plus, Literal(2)))
//! ```
//! The parser reports syntax errors as a [`ParseError`](error::ParseError)
//! and recovers at the next statement boundary (`synchronize`), so the
//! user can fix several mistakes in one pass rather than one at a time.
//!
//! ## Resolving
//! The third step is resolving: a static pre-pass over the AST that binds
//! each variable reference to a lexical scope distance, implemented in the
//! [`resolver`](resolver) module. It reports semantically-invalid-but-
//! syntactically-fine programs as a [`ResolveError`](error::ResolveError),
//! for example redeclaring a name already bound in the same scope:
//! ```text
//! {
//!    var a = 1;
//!    var a = 2;
//! }
//! ```
//!
//! ## Interpreting
//! The final step is interpreting: walking the AST and evaluating it,
//! implemented in the [`interpreter`](interpreter) module. The interpreter
//! manages the chain of [`environment`](environment)s that map names to
//! values and reports failures at this stage as a
//! [`RuntimeError`](error::RuntimeError) — for example, adding a string to
//! a number is syntactically and semantically fine up to this point, but
//! fails the moment it's evaluated:
//! ```text
//! var a = "123";
//! var b = a + 123;
//! ```

use std::io::Write;
use std::{fs, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::ErrorReporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Top-level driver tying the pipeline stages to one shared error sink and
/// one long-lived interpreter (so top-level declarations in a REPL session
/// persist across lines).
pub struct Lox {
    reporter: ErrorReporter,
    interpreter: Interpreter,
}

impl Lox {
    pub fn new() -> Self {
        Lox { reporter: ErrorReporter::new(), interpreter: Interpreter::new() }
    }

    /// Runs a script file, writing program output to `out`, and exits the
    /// process with 65 on a compile-time error or 70 on a runtime error.
    pub fn run_file(&mut self, path: &str, out: impl Write + 'static) {
        self.interpreter.set_output(Box::new(out));

        let contents = fs::read_to_string(path).expect("script path should be readable");

        self.run(&contents);

        if self.reporter.had_error() {
            process::exit(65);
        }
        if self.reporter.had_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs an interactive read-eval-print loop. Each line is a complete
    /// program; errors are reported but never exit the REPL, and the error
    /// flags reset before the next line. `Ctrl-D` (EOF) exits cleanly.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("line editor should initialize");

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    self.reporter.reset();
                }
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(error) => {
                    eprintln!("Error: {error}");
                    break;
                }
            }
        }
    }

    fn run(&mut self, source: &str) {
        let scanner = Scanner::new(source);
        let (tokens, scan_errors) = scanner.scan_tokens();
        for error in &scan_errors {
            self.reporter.error(error.line, &error.message);
        }

        if self.reporter.had_error() {
            return;
        }

        let mut parser = Parser::new(tokens);
        let (statements, parse_errors) = parser.parse();
        for error in &parse_errors {
            self.reporter.token_error(&error.token, &error.message);
        }

        if self.reporter.had_error() {
            return;
        }

        let resolver = Resolver::new(&mut self.interpreter);
        let resolve_errors = resolver.resolve(&statements);
        for error in &resolve_errors {
            self.reporter.token_error(&error.token, &error.message);
        }

        if self.reporter.had_error() {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            self.reporter.runtime_error(&error);
        }
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}
