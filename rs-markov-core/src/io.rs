use std::fs;
use std::io;
use std::path::Path;

/// Reads a training file and joins its lines into a single string.
///
/// - Reads the entire file into memory
/// - Drops invalid UTF-8 bytes instead of failing the load
///   (the replacement characters are discarded later by corpus cleaning)
/// - Trims each line and skips empty ones
/// - Joins the remaining lines with ` separator ` so that line boundaries
///   survive as ordinary corpus tokens
pub(crate) fn read_joined<P: AsRef<Path>>(filename: P, separator: &str) -> io::Result<String> {
	let bytes = fs::read(filename)?;
	let contents = String::from_utf8_lossy(&bytes);

	let lines: Vec<&str> = contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.collect();

	Ok(lines.join(&format!(" {separator} ")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn joins_lines_with_separator() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "first line").unwrap();
		writeln!(file).unwrap();
		writeln!(file, "  second line  ").unwrap();

		let joined = read_joined(file.path(), "endofline").unwrap();
		assert_eq!(joined, "first line endofline second line");
	}

	#[test]
	fn tolerates_invalid_utf8() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"caf\xFF au lait").unwrap();

		let joined = read_joined(file.path(), "endofline").unwrap();
		assert!(joined.starts_with("caf"));
		assert!(joined.ends_with("au lait"));
	}

	#[test]
	fn missing_file_is_an_error() {
		assert!(read_joined("no/such/file.txt", "endofline").is_err());
	}
}
