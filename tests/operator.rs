#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        arithmetic in operator is OK
        "3"
        "4"
        "12"
        "4"
        "-5"
    }

    tests! {
        comparison in operator is OK
        "true"
        "false"
        "true"
        "true"
        "false"
        "true"
        "false"
    }

    tests! {
        string_concat in operator is OK
        "foobar"
        "true"
        "false"
    }

    tests! {
        not in operator is OK
        "false"
        "true"
        "true"
        "false"
    }

    tests! {
        equality_cross_type in operator is OK
        "false"
        "false"
        "false"
    }

    tests! {
        division_by_zero in operator is ERR
        "Division by zero error."
        "[line 1]"
    }

    tests! {
        plus_type_error in operator is ERR
        "Operands must be two numbers or two strings."
        "[line 1]"
    }

    tests! {
        negate_type_error in operator is ERR
        "Operand must be a number."
        "[line 1]"
    }
}
