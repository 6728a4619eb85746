//! Standard stream bundle.

use std::io::{Read, Write};

/// The three standard streams a command may use.
///
/// On the hook path `stdout` carries only the decision JSON; everything
/// meant for the operator goes to `stderr`.
pub struct Streams<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    /// Bundle explicit streams.
    pub fn new(
        stdin: &'a mut dyn Read,
        stdout: &'a mut dyn Write,
        stderr: &'a mut dyn Write,
    ) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
        }
    }
}
