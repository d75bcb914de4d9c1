use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::error::{PpaError, Result};
use crate::record::{ParseError, Record};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Loads every record of a dataset file, in file order.
///
/// Blank and whitespace-only lines are skipped. Line numbers reported in
/// errors are 1-based and count every physical line, skipped ones included.
///
/// # Errors
/// - `MissingFile` if the path does not exist
/// - `Io` for any other read failure
/// - `MalformedRecord` / `InvalidLabel` on the first line that fails to parse
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
	let path = path.as_ref();
	let lines = read_file(path).map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => PpaError::MissingFile { path: path.to_path_buf() },
		_ => PpaError::Io { path: path.to_path_buf(), source },
	})?;

	let mut records = Vec::with_capacity(lines.len());
	for (index, line) in lines.iter().enumerate() {
		if line.trim().is_empty() {
			continue;
		}
		let record = Record::parse_line(line).map_err(|err| match err {
			ParseError::Label(label) => PpaError::InvalidLabel {
				path: path.to_path_buf(),
				line: index + 1,
				label,
			},
			other => PpaError::MalformedRecord {
				path: path.to_path_buf(),
				line: index + 1,
				reason: other.to_string(),
			},
		})?;
		records.push(record);
	}

	debug!("Loaded {} records from {}", records.len(), path.display());
	Ok(records)
}
