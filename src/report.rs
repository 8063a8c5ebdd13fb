//! Computes the shape dimensions and prints them.
//!
//! The square is reached through its bundle, while its name comes in through a
//! separate named import of the same module. The triangle has no bundle, so
//! its `dimension` is imported by name, twice, under two different aliases.

use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use crate::shapes::square::NAME;
use crate::shapes::triangle::dimension as triangle_dimension;
use crate::shapes::triangle::dimension as triangle_dimension_with_any_name;
use crate::shapes::{Float, SQUARE};
use crate::Error;

/// Length used for every input that is not given.
pub const DEFAULT_LENGTH: Float = 2.0;

/// The literals the dimensions are computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub width: Float,
    pub height: Float,
    /// Used for all three sides of the triangle.
    pub side: Float,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            width: DEFAULT_LENGTH,
            height: DEFAULT_LENGTH,
            side: DEFAULT_LENGTH,
        }
    }
}

/// Builds the report lines, in print order.
#[must_use]
pub fn lines(inputs: &Inputs) -> [String; 4] {
    let square_dimensions = (SQUARE.dimension)(inputs.width, inputs.height);
    let triangle_dimensions = triangle_dimension(inputs.side, inputs.side, inputs.side);
    let triangle_dimensions2 =
        triangle_dimension_with_any_name(inputs.side, inputs.side, inputs.side);

    [
        square_dimensions.to_string(),
        NAME.to_string(),
        triangle_dimensions.to_string(),
        triangle_dimensions2.to_string(),
    ]
}

/// Writes the report, one line per value.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write<W: Write>(out: &mut W, lines: &[String]) -> Result<(), Error> {
    for line in lines {
        writeln!(out, "{line}")?;
    }

    out.flush()?;
    Ok(())
}

/// Writes the log file: `0` and the report lines on success, `-1` on failure.
///
/// # Errors
/// Returns an error if the log file cannot be created or written.
pub fn write_log(path: &Path, lines: Option<&[String]>) -> Result<(), Error> {
    let to_file_error = |source: io::Error| Error::File {
        path: path.to_path_buf(),
        source,
    };

    let mut log = File::create(path).map_err(to_file_error)?;

    let full = match lines {
        Some(lines) => {
            let mut full = String::from("0");
            for line in lines {
                full.push('\n');
                full.push_str(line);
            }
            full
        }
        None => String::from("-1"),
    };

    log.write_all(full.as_bytes()).map_err(to_file_error)
}

#[cfg(test)]
mod tests {
    use std::{fs, io, path::PathBuf, process};

    use super::{lines, write, write_log, Inputs};
    use crate::Error;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dimensions-{}-{name}", process::id()))
    }

    #[test]
    fn test_default_report() {
        let lines = lines(&Inputs::default());
        let mut out = Vec::new();
        write(&mut out, &lines).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "4\nSQUARE\n12\n12\n");
    }

    #[test]
    fn test_custom_inputs() {
        let lines = lines(&Inputs {
            width: 3.0,
            height: 1.5,
            side: 0.5,
        });

        assert_eq!(lines, ["4.5", "SQUARE", "0.75", "0.75"]);
    }

    #[test]
    fn test_aliases_agree() {
        for side in [0.0, 1.0, -2.5, 1e3] {
            let [_, _, first, second] = lines(&Inputs {
                side,
                ..Inputs::default()
            });
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_nan_is_printed() {
        let lines = lines(&Inputs {
            width: f64::NAN,
            ..Inputs::default()
        });

        assert_eq!(lines[0], "NaN");
        assert_eq!(lines[2], "12");
    }

    #[test]
    fn test_report_is_repeatable() {
        assert_eq!(lines(&Inputs::default()), lines(&Inputs::default()));
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure() {
        let result = write(&mut Broken, &lines(&Inputs::default()));
        assert!(matches!(result, Err(Error::Output(_))));
    }

    #[test]
    fn test_log_success() {
        let path = temp_path("success.log");
        write_log(&path, Some(&lines(&Inputs::default()))).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "0\n4\nSQUARE\n12\n12");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_failure() {
        let path = temp_path("failure.log");
        write_log(&path, None).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "-1");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_unwritable() {
        let path = temp_path("missing-dir").join("run.log");
        let result = write_log(&path, None);

        assert!(matches!(result, Err(Error::File { path: p, .. }) if p == path));
    }
}
