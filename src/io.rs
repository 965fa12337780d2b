use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::error::Error;

/// Reads a program from a file.
///
/// The lines of the file are joined with single spaces, so line breaks carry
/// no meaning but tokens on adjacent lines stay apart.
///
/// # Errors
/// Returns [`Error::SourceAccess`] if the file cannot be read.
pub fn read_program(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::SourceAccess { path:
                                                                                        path.to_path_buf(),
                                                                                    source })?;

    Ok(contents.lines().collect::<Vec<_>>().join(" "))
}

/// Writes returned values, one per line, in the order they were produced.
///
/// Values are printed as decimal floating-point numbers, always with a
/// fractional part.
///
/// # Example
/// ```
/// use shunt::io::write_results;
///
/// let mut out = Vec::new();
/// write_results(&mut out, &[14.0, 0.5, f64::INFINITY]).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "14.0\n0.5\ninf\n");
/// ```
pub fn write_results(writer: &mut impl Write, results: &[f64]) -> io::Result<()> {
    for value in results {
        writeln!(writer, "{value:?}")?;
    }
    writer.flush()
}
