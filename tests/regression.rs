#[macro_use]
mod common;

#[cfg(test)]
mod regression {
    tests! {
        shadowing_closure in regression is OK
        "global"
        "global"
    }

    tests! {
        return_through_nested_blocks in regression is OK
        "3"
    }
}
