#[macro_use]
mod common;

#[cfg(test)]
mod assignment {
    tests! {
        global in assignment is OK
        "before"
        "after"
    }

    tests! {
        local in assignment is OK
        "before"
        "after"
    }

    tests! {
        undefined in assignment is ERR
        "Undefined variable 'a'."
        "[line 1]"
    }

    tests! {
        invalid_target in assignment is ERR
        "[line 1] Error at '=': Invalid assignment target."
    }
}
