#[macro_use]
mod common;

#[cfg(test)]
mod _super {
    tests! {
        call_same_method in super is OK
        "Derived.foo()"
        "Base.foo()"
    }

    tests! {
        indirectly_inherited in super is OK
        "C.foo()"
        "A.foo()"
    }

    tests! {
        this_in_superclass_method in super is OK
        "hello"
    }

    tests! {
        no_superclass in super is ERR
        "[line 3] Error at 'super': Can't use 'super' in a class with no superclass."
    }

    tests! {
        outside_class in super is ERR
        "[line 1] Error at 'super': Can't use 'super' outside of a class."
    }
}
