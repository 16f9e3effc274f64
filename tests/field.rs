#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        get_set in field is OK
        "grape"
        "yes"
        "strawberry"
    }

    tests! {
        undefined_property in field is ERR
        "Undefined property 'bar'."
        "[line 3]"
    }

    tests! {
        get_on_non_instance in field is ERR
        "Only instances have properties."
        "[line 2]"
    }

    tests! {
        set_on_non_instance in field is ERR
        "Only instances have fields."
        "[line 2]"
    }

    tests! {
        call_function_field in field is OK
        "Hello, world!"
    }
}
