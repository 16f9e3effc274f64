#[macro_use]
mod common;

#[cfg(test)]
mod array {
    tests! {
        literal in array is OK
        "[1, 2, 3]"
    }

    tests! {
        empty in array is OK
        "[]"
    }

    tests! {
        mixed_types in array is OK
        "[1, two, true, nil]"
    }

    tests! {
        nested in array is OK
        "[[1, 2], [3, 4]]"
    }

    tests! {
        expression_elements in array is OK
        "[3, 2]"
    }
}
