use std::io::Write;

use crate::config::DemoConfig;
use crate::director::MealDirector;
use crate::error::DemoError;

/// Builds the configured meal and writes its rendering as a single line.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let kind = config.kind();
    tracing::info!(?kind, "assembling meal");

    let mut builder = kind.builder();
    let meal = MealDirector::new().create_meal(builder.as_mut());

    writeln!(out, "{meal}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_one_line() {
        let mut out = Vec::new();
        run(&DemoConfig::new(true), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_run_reports_write_failure() {
        let result = run(&DemoConfig::default(), &mut FailingWriter);
        assert!(matches!(result, Err(DemoError::Output(_))));
    }
}
