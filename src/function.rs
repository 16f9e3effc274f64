use std::cell::RefCell;
use std::fmt::{self, Debug, Display};
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{ExecError, RuntimeError, Unwind};
use crate::interpreter::Interpreter;
use crate::object::{Callable, Object};
use crate::stmt::FunctionData;
use crate::token::{Token, Type};

/// A user-defined function or method. `closure` is the environment in
/// effect where the function was *declared*, not where it's called from —
/// this is what makes closures close over mutable bindings.
#[derive(Debug, Clone)]
pub struct LoxFunction {
    declaration: Rc<FunctionData>,
    closure: Rc<RefCell<Environment>>,
    is_initializer: bool,
}

impl LoxFunction {
    pub fn new(declaration: Rc<FunctionData>, closure: Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        LoxFunction { declaration, closure, is_initializer }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    /// Produces a fresh function whose closure wraps the original one with
    /// `this` bound to `instance`. The original function is untouched —
    /// every `instance.method` read allocates a new bound function.
    pub fn bind(&self, instance: Object) -> LoxFunction {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));
        environment.define("this", instance);

        LoxFunction {
            declaration: Rc::clone(&self.declaration),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }
}

impl Callable for LoxFunction {
    fn call(&self, interpreter: &mut Interpreter, _token: &Token, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        let result = interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(environment)));

        let this_token = || Token::new(Type::Identifier, "this".to_owned(), None, self.declaration.name.line);

        match result {
            Ok(()) => {
                if self.is_initializer {
                    self.closure.borrow().get_at(0, &this_token())
                } else {
                    Ok(Object::Nil)
                }
            }
            Err(ExecError::Unwind(Unwind::Return(value))) => {
                if self.is_initializer {
                    self.closure.borrow().get_at(0, &this_token())
                } else {
                    Ok(value)
                }
            }
            Err(ExecError::Runtime(error)) => Err(error),
        }
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

impl Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

/// A function implemented in the host language rather than in Lox.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub function: fn(&mut Interpreter, &Token, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, token: &Token, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, token, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// The natives registered into every fresh `globals` environment:
    /// wall-clock time, and the `str`/`num` conversions.
    pub fn get_globals() -> Vec<NativeFunction> {
        vec![
            NativeFunction {
                name: "clock",
                arity: 0,
                function: |_, _, _| {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .expect("system clock is after the Unix epoch");
                    Ok(Object::Number(now.as_secs_f64()))
                },
            },
            NativeFunction {
                name: "str",
                arity: 1,
                function: |_, _, mut arguments| Ok(Object::Str(arguments.remove(0).to_string())),
            },
            NativeFunction {
                name: "num",
                arity: 1,
                function: |_, token, mut arguments| {
                    let argument = arguments.remove(0);
                    match argument {
                        Object::Number(_) => Ok(argument),
                        Object::Str(ref s) => s.trim().parse::<f64>().map(Object::Number).map_err(|_| RuntimeError {
                            token: token.clone(),
                            message: "Cannot convert to number.".to_string(),
                        }),
                        _ => Err(RuntimeError { token: token.clone(), message: "Cannot convert to number.".to_string() }),
                    }
                },
            },
        ]
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
