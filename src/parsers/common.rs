use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Buffered whole-file read with pre-sized allocation.
pub fn read_source(file_path: &Path) -> Result<String> {
    let file = File::open(file_path)?;
    let metadata = file.metadata()?;
    let file_size = metadata.len() as usize;

    let mut reader =
        BufReader::with_capacity(if file_size < 8192 { file_size } else { 8192 }, file);

    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;
    Ok(content)
}
