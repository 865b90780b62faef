// util.rs

use std::io::{ErrorKind, Result, Write};

/// Writes `s` and a newline. A reader that went away (`calc-shell demo | head`)
/// is not an error.
pub fn write_line<W: Write + ?Sized, S: AsRef<str>>(w: &mut W, s: S) -> Result<()> {
    ignore_broken_pipe(writeln!(w, "{}", s.as_ref()))
}

pub fn flush<W: Write + ?Sized>(w: &mut W) -> Result<()> {
    ignore_broken_pipe(w.flush())
}

fn ignore_broken_pipe(res: Result<()>) -> Result<()> {
    match res {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn broken_pipe_is_swallowed() {
        assert!(write_line(&mut ClosedPipe, "5 + 3 = 8").is_ok());
        assert!(flush(&mut ClosedPipe).is_ok());
    }

    #[test]
    fn other_errors_surface() {
        let mut buf = [0u8; 2];
        let mut short = &mut buf[..];
        assert!(write_line(&mut short, "too long").is_err());
    }
}
