#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        global in variable is OK
        "before"
        "after"
    }

    tests! {
        uninitialized in variable is OK
        "nil"
    }

    tests! {
        shadow in variable is OK
        "shadow"
        "global"
    }

    tests! {
        duplicate_local in variable is ERR
        "[line 3] Error at 'a': Already variable with this name in this scope."
    }

    tests! {
        use_local_in_initializer in variable is ERR
        "[line 3] Error at 'a': Can't read local variable in its own initializer."
    }

    tests! {
        use_keyword_as_var in variable is ERR
        "[line 2] Error at 'this': Expect variable name."
    }

    tests! {
        undefined in variable is ERR
        "Undefined variable 'notDefined'."
        "[line 1]"
    }
}
