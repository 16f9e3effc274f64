#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file in misc is OK
    }

    tests! {
        native_clock in misc is OK
        "true"
    }

    tests! {
        str_num in misc is OK
        "42"
        "true"
        "4.5"
        "10"
    }

    tests! {
        num_conversion_error in misc is ERR
        "Cannot convert to number."
        "[line 1]"
    }

    tests! {
        unexpected_character in misc is ERR
        "[line 3] Error: Unexpected character '|'."
    }
}
