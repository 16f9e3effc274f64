use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A `Write` sink backed by a shared buffer, so a test can hand ownership of
/// one end to `Lox::run_file` (which takes its output sink by value) while
/// keeping a handle to read back what was written.
#[derive(Clone)]
pub struct SharedBuf(pub Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Runs a fixture under `tests/target/<scope>/<file>.lox` and asserts on its
/// result. `OK` cases run the interpreter in-process and diff captured
/// stdout. `ERR` cases spawn the real `lox` binary (a compile/runtime error
/// calls `process::exit`, so it can't be driven in-process) and diff stderr.
#[macro_export]
macro_rules! tests {
    ($file:ident in $scope:ident is OK $($expected:expr)*) => {
        #[test]
        fn $file() {
            use std::cell::RefCell;
            use std::rc::Rc;

            use lox::Lox;

            use $crate::common::SharedBuf;

            let mut expected_lines: Vec<&str> = vec![$($expected),*];
            let expected = if expected_lines.is_empty() {
                String::new()
            } else {
                expected_lines.push("");
                expected_lines.join("\n")
            };

            let buf = Rc::new(RefCell::new(Vec::new()));
            let mut lox = Lox::new();
            lox.run_file(
                &format!("tests/target/{}/{}.lox", stringify!($scope), stringify!($file)),
                SharedBuf(Rc::clone(&buf)),
            );

            let output = buf.borrow().clone();
            assert_eq!(expected, String::from_utf8(output).unwrap());
        }
    };

    ($file:ident in $scope:ident is ERR $($expected:expr)+) => {
        #[test]
        fn $file() {
            use assert_cmd::Command;

            let output = vec![$($expected),+].join("\n");
            let file = format!("tests/target/{}/{}.lox", stringify!($scope), stringify!($file));

            Command::cargo_bin("lox").unwrap()
                .arg(file)
                .assert()
                .stderr(format!("{output}\n"))
                .failure();
        }
    };
}
