#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        binding in method is OK
        "Jane"
    }

    tests! {
        not_found in method is ERR
        "Undefined property 'unknown'."
        "[line 4]"
    }

    tests! {
        print_bound_method in method is OK
        "<fn method>"
    }

    tests! {
        wrong_arity in method is ERR
        "Expected 2 arguments but got 1."
        "[line 7]"
    }
}
