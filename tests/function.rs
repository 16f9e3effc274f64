#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        empty_body in function is OK
        "nil"
    }

    tests! {
        print_repr in function is OK
        "<fn foo>"
        "<native fn>"
    }

    tests! {
        recursion in function is OK
        "21"
    }

    tests! {
        mutual_recursion in function is OK
        "true"
        "false"
    }

    tests! {
        wrong_arity in function is ERR
        "Expected 2 arguments but got 3."
        "[line 5]"
    }

    tests! {
        local_function in function is OK
        "42"
    }
}
