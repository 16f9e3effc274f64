#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        default in constructor is OK
        "Foo instance"
    }

    tests! {
        arguments in constructor is OK
        "init"
        "1"
        "2"
    }

    tests! {
        early_return in constructor is OK
        "init"
        "Foo instance"
    }

    tests! {
        call_init_explicitly in constructor is OK
        "Foo.init() ran"
    }

    tests! {
        wrong_arity in constructor is ERR
        "Expected 2 arguments but got 1."
        "[line 5]"
    }

    tests! {
        return_value in constructor is ERR
        "[line 3] Error at 'return': Can't return a value from an initializer."
    }
}
