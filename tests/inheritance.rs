#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        basic in inheritance is OK
        "Fry until golden brown."
    }

    tests! {
        override_method in inheritance is OK
        "Fry until golden brown."
        "Pipe full of custard and coat with chocolate."
    }

    tests! {
        inherited_init in inheritance is OK
        "42"
    }

    tests! {
        superclass_must_be_class in inheritance is ERR
        "Superclass must be a class."
        "[line 3]"
    }
}
