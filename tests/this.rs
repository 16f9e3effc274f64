#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        closure in this is OK
        "Foo"
    }

    tests! {
        this_in_method in this is OK
        "Foo instance"
    }

    tests! {
        this_at_top_level in this is ERR
        "[line 1] Error at 'this': Can't use 'this' outside of a class."
    }

    tests! {
        this_in_top_level_function in this is ERR
        "[line 2] Error at 'this': Can't use 'this' outside of a class."
    }
}
