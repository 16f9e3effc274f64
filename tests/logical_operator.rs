#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        and in logical_operator is OK
        "false"
        "2"
        "false"
    }

    tests! {
        or in logical_operator is OK
        "1"
        "1"
        "false"
    }

    tests! {
        short_circuit in logical_operator is OK
    }
}
