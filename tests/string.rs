#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literals in string is OK
        "()"
        "a string"
        "A~¶Þॐஃ"
    }

    tests! {
        multiline in string is OK
        "1"
        "2"
        "3"
    }

    tests! {
        concatenation in string is OK
        "Hello, world!"
    }

    tests! {
        unterminated in string is ERR
        "[line 2] Error: Unterminated string."
    }
}
