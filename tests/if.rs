#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        basic in if is OK
        "then"
        "else"
        "no braces"
    }

    tests! {
        dangling_else in if is OK
        "good"
    }

    tests! {
        truthiness in if is OK
        "falsy: false"
        "falsy: nil"
        "truthy: 0"
        "truthy: empty string"
        "truthy: true"
    }
}
