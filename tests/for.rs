#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        basic in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        scope in for is OK
        "0"
        "outer"
    }

    tests! {
        missing_clauses in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        closure_in_body in for is OK
        "0"
        "1"
        "2"
    }
}
