use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const GZIP_MAGIC: &[u8; 2] = b"\x1f\x8b";

#[derive(Debug, PartialEq)]
pub enum Compression {
    None,
    GZ,
}

/// Peek at the start of `reader` without consuming anything.
pub(crate) fn detect_compression<R: BufRead>(reader: &mut R) -> io::Result<Compression> {
    let buf = reader.fill_buf()?;
    if buf.len() >= 2 && &buf[0..2] == GZIP_MAGIC {
        Ok(Compression::GZ)
    } else {
        Ok(Compression::None)
    }
}

pub fn is_stdin<P: AsRef<Path>>(path: P) -> bool {
    let p = path.as_ref();
    p == Path::new("-") || p == Path::new("stdin") || p == Path::new("/dev/stdin")
}

/// Wrap an already-open reader, transparently decompressing gzip (including
/// multi-member bgzip) input.
pub fn from_reader<R: Read + 'static>(reader: R) -> io::Result<Box<dyn BufRead>> {
    let mut reader = BufReader::new(reader);
    match detect_compression(&mut reader)? {
        Compression::GZ => {
            log::debug!("input is gzip compressed");
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
        }
        Compression::None => Ok(Box::new(reader)),
    }
}

/// Open `path` for line reading. `-` and `stdin` read standard input.
pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if is_stdin(path) {
        from_reader(io::stdin())
    } else {
        let fh = File::open(path).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        from_reader(fh)
    }
}
