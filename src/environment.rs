use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A lexical scope frame: a local name→value mapping plus an optional link
/// to the enclosing frame. Shared via `Rc<RefCell<_>>` because closures hold
/// their defining environment alive and several closures may alias the same
/// frame; cycles (a method's closure reaching back through `this`) are fine
/// since the process exits without needing to break them.
#[derive(Debug, Clone)]
pub struct Environment {
    pub enclosing: Option<Rc<RefCell<Environment>>>,
    variables: HashMap<String, Object>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment {
            enclosing,
            variables: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: &str, value: Object) {
        self.variables.insert(name.to_string(), value);
    }

    /// Walks exactly `distance` enclosing links.
    fn ancestor(&self, distance: usize) -> Rc<RefCell<Environment>> {
        let mut environment = self
            .enclosing
            .clone()
            .expect("resolver-recorded distance implies an enclosing environment");

        for _ in 1..distance {
            let parent = environment
                .borrow()
                .enclosing
                .clone()
                .expect("resolver-recorded distance implies an enclosing environment");
            environment = parent;
        }

        environment
    }

    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.variables.contains_key(&name.lexeme) {
            self.variables.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    pub fn assign_at(&mut self, distance: usize, name: &Token, value: Object) {
        if distance > 0 {
            self.ancestor(distance)
                .borrow_mut()
                .variables
                .insert(name.lexeme.clone(), value);
        } else {
            self.variables.insert(name.lexeme.clone(), value);
        }
    }

    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(variable) = self.variables.get(&name.lexeme) {
            return Ok(variable.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    pub fn get_at(&self, distance: usize, name: &Token) -> Result<Object, RuntimeError> {
        let read = |variables: &HashMap<String, Object>| {
            variables.get(&name.lexeme).cloned().ok_or_else(|| RuntimeError {
                token: name.clone(),
                message: format!("Undefined variable '{}'.", name.lexeme),
            })
        };

        if distance > 0 {
            read(&self.ancestor(distance).borrow().variables)
        } else {
            read(&self.variables)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::Type;

    fn token(name: &str) -> Token {
        Token::new(Type::Identifier, name.to_string(), None, 1)
    }

    #[test]
    fn define_and_get() {
        let mut env = Environment::default();
        env.define("a", Object::Number(1.0));
        assert_eq!(env.get(&token("a")), Ok(Object::Number(1.0)));
    }

    #[test]
    fn get_undefined_errors() {
        let env = Environment::default();
        assert!(env.get(&token("missing")).is_err());
    }

    #[test]
    fn get_at_walks_ancestors() {
        let global = Rc::new(RefCell::new(Environment::default()));
        global.borrow_mut().define("a", Object::Number(1.0));

        let local = Environment::new(Some(Rc::clone(&global)));
        assert_eq!(local.get_at(1, &token("a")), Ok(Object::Number(1.0)));
    }

    #[test]
    fn assign_walks_to_defining_scope() {
        let global = Rc::new(RefCell::new(Environment::default()));
        global.borrow_mut().define("a", Object::Number(1.0));

        let mut local = Environment::new(Some(Rc::clone(&global)));
        local.assign(&token("a"), Object::Number(2.0)).unwrap();

        assert_eq!(global.borrow().get(&token("a")), Ok(Object::Number(2.0)));
    }
}
