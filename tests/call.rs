#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        not_callable in call is ERR
        "Can only call functions and classes."
        "[line 2]"
    }

    tests! {
        arity_mismatch in call is ERR
        "Expected 2 arguments but got 1."
        "[line 4]"
    }
}
