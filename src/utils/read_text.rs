use crate::models::Error;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads the whole file at `path` into memory.
///
/// Files whose name ends in `.gz` are gunzipped on the fly. Bytes which are
/// not valid UTF-8 are replaced rather than rejected, since they can only
/// ever act as word separators.
pub fn read_text_from_path<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    let is_gzipped = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    info!("Reading {} (gzipped: {})", path.display(), is_gzipped);

    if is_gzipped {
        read_text_from_reader(GzDecoder::new(file))
    } else {
        read_text_from_reader(file)
    }
}

/// Reads `reader` to the end, e.g. standard input.
pub fn read_text_from_reader<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
