//! Tagged tree model and its big-endian binary encoding.
//!
//! Only integer, string, list and compound tags are modelled. Encoding always
//! goes through an in-memory buffer, so a failed encode never leaves partial
//! output in the caller's writer.

pub mod tag;
pub mod write;

pub use tag::{Compound, Tag, TagKind, TagList};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use strata_common::Result;
use strata_logger::{log, LogSeverity};

/// Encodes `root` as a named compound tag, gzip-wrapping the whole stream when
/// `compress` is set.
pub fn encode(root_name: &str, root: &Compound, compress: bool) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer.push(TagKind::Compound.id());
    write::write_string(&mut buffer, root_name)?;
    write::write_compound(&mut buffer, root)?;

    let raw_len = buffer.len();
    if compress {
        buffer = gzip(&buffer)?;
    }

    log(
        format!(
            "Encoded root '{}': {} bytes ({} written, gzip: {})",
            root_name,
            raw_len,
            buffer.len(),
            compress
        ),
        LogSeverity::Debug,
    );
    Ok(buffer)
}

fn gzip(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

// NBTFile pairs a root compound with its name
#[derive(Debug, Clone, PartialEq)]
pub struct NbtFile {
    pub name: String,
    pub root: Compound,
}

impl NbtFile {
    pub fn new(name: String, root: Compound) -> Self {
        NbtFile { name, root }
    }

    pub fn to_bytes(&self, compress: bool) -> Result<Vec<u8>> {
        encode(&self.name, &self.root, compress)
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes(false)?)?;
        Ok(())
    }

    pub fn write_gzip<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes(true)?)?;
        Ok(())
    }
}
