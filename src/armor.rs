#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! armor wraps binary OpenPGP packets in ASCII armor using sequoia's armor writer.

use std::io::{self, Write};

use sequoia_openpgp::armor::{Kind, Writer};

/// armor_encode formats data as an ASCII armored private key block.
pub fn armor_encode(data: &[u8]) -> io::Result<String> {
    let mut w = Writer::new(Vec::new(), Kind::SecretKey)?;
    w.write_all(data)?;
    let buf = w.finalize()?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
