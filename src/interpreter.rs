use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::class::LoxClass;
use crate::environment::Environment;
use crate::error::{ExecError, RuntimeError, Unwind};
use crate::expr::{Expr, ExprVisitor};
use crate::function::{LoxFunction, NativeFunction};
use crate::object::{Callable, Object};
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::{Token, Type};

type EvalResult = Result<Object, ExecError>;
type ExecResult = Result<(), ExecError>;

/// The tree-walking evaluator. Holds two environment handles: `globals`,
/// the fixed root frame holding natives and top-level declarations, and
/// `environment`, the currently active frame — the same `Rc` as `globals`
/// except while executing inside a block or function call. `output` is
/// where `print` writes; it defaults to stdout but a host (the CLI driver,
/// or a test harness) can redirect it.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<u64, usize>,
    output: RefCell<Box<dyn Write>>,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));
        for native in NativeFunction::get_globals() {
            globals.borrow_mut().define(native.name, Object::NativeFunction(Rc::new(native)));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output: RefCell::new(Box::new(io::stdout())),
        }
    }

    /// Redirects where `print` statements write. Used by the CLI driver to
    /// inject a caller-supplied sink instead of the process's real stdout.
    pub fn set_output(&mut self, output: Box<dyn Write>) {
        self.output = RefCell::new(output);
    }

    /// Recorded by the resolver: expression node id → scope distance.
    pub fn resolve(&mut self, id: u64, distance: usize) {
        self.locals.insert(id, distance);
    }

    /// Runs a parsed program, reporting (but not propagating) the first
    /// runtime error it hits.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(ExecError::Runtime(error)) => return Err(error),
                Err(ExecError::Unwind(_)) => unreachable!("return outside a function body is rejected by the resolver"),
            }
        }
        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    /// Executes a block's statements against a fresh environment, then
    /// restores the previous environment on every exit path — normal
    /// completion, a propagating `return`, or a runtime error — mirroring a
    /// plain try/finally rather than relying on a `Drop` guard.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    fn lookup_variable(&mut self, name: &Token, id: u64) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn is_number(&self, object: &Object) -> Option<f64> {
        match object {
            Object::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<EvalResult> for Interpreter {
    fn visit_literal_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Literal(literal) = expr else { unreachable!() };
        Ok(literal.value.clone())
    }

    fn visit_grouping_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Grouping(grouping) = expr else { unreachable!() };
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Unary(unary) = expr else { unreachable!() };

        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Minus => {
                let n = self
                    .is_number(&right)
                    .ok_or_else(|| RuntimeError { token: unary.operator.clone(), message: "Operand must be a number.".to_string() })?;
                Ok(Object::Number(-n))
            }
            Type::Bang => Ok(Object::Bool(!right.is_truthy())),
            _ => unreachable!("unary operator is either '-' or '!'"),
        }
        .map_err(ExecError::from)
    }

    fn visit_binary_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Binary(binary) = expr else { unreachable!() };

        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let numbers = |error: &str| -> Result<(f64, f64), RuntimeError> {
            match (self.is_number(&left), self.is_number(&right)) {
                (Some(l), Some(r)) => Ok((l, r)),
                _ => Err(RuntimeError { token: binary.operator.clone(), message: error.to_string() }),
            }
        };

        let result: Result<Object, RuntimeError> = match binary.operator.r#type {
            Type::Minus => numbers("Operands must be numbers.").map(|(l, r)| Object::Number(l - r)),
            Type::Slash => {
                let (l, r) = numbers("Operands must be numbers.")?;
                if r == 0.0 {
                    Err(RuntimeError { token: binary.operator.clone(), message: "Division by zero error.".to_string() })
                } else {
                    Ok(Object::Number(l / r))
                }
            }
            Type::Star => numbers("Operands must be numbers.").map(|(l, r)| Object::Number(l * r)),
            Type::Greater => numbers("Operands must be numbers.").map(|(l, r)| Object::Bool(l > r)),
            Type::GreaterEqual => numbers("Operands must be numbers.").map(|(l, r)| Object::Bool(l >= r)),
            Type::Less => numbers("Operands must be numbers.").map(|(l, r)| Object::Bool(l < r)),
            Type::LessEqual => numbers("Operands must be numbers.").map(|(l, r)| Object::Bool(l <= r)),
            Type::Plus => match (&left, &right) {
                (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
                (Object::Str(l), Object::Str(r)) => Ok(Object::Str(format!("{l}{r}"))),
                _ => Err(RuntimeError {
                    token: binary.operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }),
            },
            Type::BangEqual => Ok(Object::Bool(left != right)),
            Type::EqualEqual => Ok(Object::Bool(left == right)),
            _ => unreachable!("not a binary operator"),
        };

        result.map_err(ExecError::from)
    }

    fn visit_logical_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Logical(logical) = expr else { unreachable!() };

        let left = self.evaluate(&logical.left)?;

        if logical.operator.r#type == Type::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&logical.right)
    }

    fn visit_variable_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Variable(variable) = expr else { unreachable!() };
        self.lookup_variable(&variable.name, variable.id).map_err(ExecError::from)
    }

    fn visit_assign_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Assign(assign) = expr else { unreachable!() };

        let value = self.evaluate(&assign.value)?;

        match self.locals.get(&assign.id) {
            Some(&distance) => {
                self.environment.borrow_mut().assign_at(distance, &assign.name, value.clone());
            }
            None => {
                self.globals.borrow_mut().assign(&assign.name, value.clone()).map_err(ExecError::from)?;
            }
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Call(call) = expr else { unreachable!() };

        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Object::Function(f) => f.arity(),
            Object::NativeFunction(f) => f.arity(),
            Object::Class(c) => c.arity(),
            _ => {
                return Err(ExecError::from(RuntimeError {
                    token: call.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                }));
            }
        };

        if arguments.len() != arity {
            return Err(ExecError::from(RuntimeError {
                token: call.paren.clone(),
                message: format!("Expected {} arguments but got {}.", arity, arguments.len()),
            }));
        }

        let result = match callee {
            Object::Function(f) => f.call(self, &call.paren, arguments),
            Object::NativeFunction(f) => f.call(self, &call.paren, arguments),
            Object::Class(c) => c.instantiate(self, &call.paren, arguments),
            _ => unreachable!("non-callables are rejected above"),
        };

        result.map_err(ExecError::from)
    }

    fn visit_get_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Get(get) = expr else { unreachable!() };

        let object = self.evaluate(&get.object)?;

        let Object::Instance(instance) = &object else {
            return Err(ExecError::from(RuntimeError {
                token: get.name.clone(),
                message: "Only instances have properties.".to_string(),
            }));
        };

        instance.borrow().get(&get.name, &object).map_err(ExecError::from)
    }

    fn visit_set_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Set(set) = expr else { unreachable!() };

        let object = self.evaluate(&set.object)?;

        let Object::Instance(instance) = &object else {
            return Err(ExecError::from(RuntimeError {
                token: set.name.clone(),
                message: "Only instances have fields.".to_string(),
            }));
        };

        let value = self.evaluate(&set.value)?;
        instance.borrow_mut().set(&set.name, value.clone());
        Ok(value)
    }

    fn visit_this_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::This(this) = expr else { unreachable!() };
        self.lookup_variable(&this.keyword, this.id).map_err(ExecError::from)
    }

    fn visit_super_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Super(super_expr) = expr else { unreachable!() };

        let distance = *self.locals.get(&super_expr.id).expect("resolver always records 'super' references");

        let superclass = self.environment.borrow().get_at(distance, &super_expr.keyword).map_err(ExecError::from)?;
        let Object::Class(superclass) = superclass else { unreachable!("'super' always resolves to a class") };

        let this_token = Token::new(Type::This, "this".to_owned(), None, super_expr.keyword.line);
        let instance = self.environment.borrow().get_at(distance - 1, &this_token).map_err(ExecError::from)?;

        let method = superclass.find_method(&super_expr.method.lexeme).ok_or_else(|| RuntimeError {
            token: super_expr.method.clone(),
            message: format!("Undefined property '{}'.", super_expr.method.lexeme),
        })?;

        Ok(Object::Function(Rc::new(method.bind(instance))))
    }

    fn visit_array_expr(&mut self, expr: &Expr) -> EvalResult {
        let Expr::Array(array) = expr else { unreachable!() };

        let mut values = Vec::with_capacity(array.values.len());
        for value in &array.values {
            values.push(self.evaluate(value)?);
        }

        Ok(Object::Array(Rc::new(RefCell::new(values))))
    }
}

impl StmtVisitor<ExecResult> for Interpreter {
    fn visit_expression_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Expression(data) = stmt else { unreachable!() };
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Print(data) = stmt else { unreachable!() };
        let value = self.evaluate(&data.expr)?;
        writeln!(self.output.borrow_mut(), "{value}").expect("output sink should be writable");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Var(data) = stmt else { unreachable!() };

        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::Nil,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Block(data) = stmt else { unreachable!() };

        let environment = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
    }

    fn visit_if_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::If(data) = stmt else { unreachable!() };

        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::While(data) = stmt else { unreachable!() };

        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }

        Ok(())
    }

    fn visit_function_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Function(data) = stmt else { unreachable!() };

        let function = LoxFunction::new(Rc::new(data.clone()), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Object::Function(Rc::new(function)));
        Ok(())
    }

    fn visit_return_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Return(data) = stmt else { unreachable!() };

        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::Nil,
        };

        Err(ExecError::from(Unwind::Return(value)))
    }

    fn visit_class_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        let Stmt::Class(data) = stmt else { unreachable!() };

        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                let Object::Class(class) = value else {
                    let Expr::Variable(variable) = expr else { unreachable!() };
                    return Err(ExecError::from(RuntimeError {
                        token: variable.name.clone(),
                        message: "Superclass must be a class.".to_string(),
                    }));
                };
                Some(class)
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::Nil);

        let method_environment = if let Some(superclass) = &superclass {
            let environment = Environment::new(Some(Rc::clone(&self.environment)));
            let environment = Rc::new(RefCell::new(environment));
            environment.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
            environment
        } else {
            Rc::clone(&self.environment)
        };

        let mut methods = HashMap::new();
        for method in &data.methods {
            let Stmt::Function(function_data) = method else { unreachable!() };
            let is_initializer = function_data.name.lexeme == "init";
            let function = LoxFunction::new(Rc::new(function_data.clone()), Rc::clone(&method_environment), is_initializer);
            methods.insert(function_data.name.lexeme.clone(), Rc::new(function));
        }

        let class = LoxClass::new(data.name.lexeme.clone(), superclass, methods);

        self.environment.borrow_mut().assign(&data.name, Object::Class(Rc::new(class))).map_err(ExecError::from)?;

        Ok(())
    }
}
