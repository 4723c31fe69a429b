use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write meal: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_read_display() {
        let error = DemoError::ConfigRead {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = error.to_string();
        assert!(display.contains("/tmp/missing.toml"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_output_from_io() {
        let error: DemoError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(error, DemoError::Output(_)));
        assert!(error.to_string().contains("pipe closed"));
    }
}
