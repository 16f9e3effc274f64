#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        empty in class is OK
        "Foo"
    }

    tests! {
        instance in class is OK
        "Foo instance"
    }

    tests! {
        inherit_self in class is ERR
        "[line 1] Error at 'Foo': A class can't inherit from itself."
    }

    tests! {
        method in class is OK
        "The German chocolate cake is delicious!"
    }
}
