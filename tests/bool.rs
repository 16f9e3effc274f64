#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        truthiness in bool is OK
        "true"
        "false"
        "false"
        "true"
        "true"
    }

    tests! {
        equality in bool is OK
        "true"
        "false"
        "false"
        "false"
        "true"
    }
}
