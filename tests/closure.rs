#[macro_use]
mod common;

#[cfg(test)]
mod closure {
    tests! {
        counter in closure is OK
        "1"
        "2"
    }

    tests! {
        shared_state in closure is OK
        "3"
    }

    tests! {
        nested_closure in closure is OK
        "outside"
    }

    tests! {
        shadow_reassign in closure is OK
        "global"
        "global"
    }
}
