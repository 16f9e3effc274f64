#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "987654"
        "0"
        "123.456"
        "0.001"
    }

    tests! {
        leading_dot in number is ERR
        "[line 2] Error at '.': Expect expression."
    }

    tests! {
        trailing_dot in number is ERR
        "[line 2] Error: Unterminated number."
    }

    tests! {
        nan_equality in number is OK
        "false"
        "true"
        "false"
    }
}
