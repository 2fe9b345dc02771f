use crate::tag::{Compound, Tag, TagKind};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};
use strata_common::{Result, StrataError};

/// Writes a length-prefixed UTF-8 string. The prefix is an unsigned 16-bit
/// byte count, so longer strings are rejected instead of truncated.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    let len = u16::try_from(value.len())
        .map_err(|_| StrataError::StringTooLong { len: value.len() })?;
    writer.write_u16::<BigEndian>(len)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Writes a named tag: kind byte, name, payload.
pub fn write_named<W: Write>(writer: &mut W, name: &str, tag: &Tag) -> Result<()> {
    writer.write_u8(tag.get_type_id())?;
    write_string(writer, name)?;
    write_payload(writer, tag)
}

/// Writes a compound's entries in insertion order followed by the end marker.
pub fn write_compound<W: Write>(writer: &mut W, compound: &Compound) -> Result<()> {
    for (name, tag) in compound {
        write_named(writer, name, tag)?;
    }
    writer.write_u8(TagKind::End.id())?;
    Ok(())
}

pub fn write_payload<W: Write>(writer: &mut W, tag: &Tag) -> Result<()> {
    match tag {
        Tag::Int(v) => writer.write_i32::<BigEndian>(*v)?,
        Tag::String(v) => write_string(writer, v)?,
        Tag::List(list) => {
            let len = i32::try_from(list.len()).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("List of {} elements exceeds the 4-byte count", list.len()),
                )
            })?;
            writer.write_u8(list.kind().id())?;
            writer.write_i32::<BigEndian>(len)?;
            for item in list {
                write_payload(writer, item)?;
            }
        }
        Tag::Compound(compound) => write_compound(writer, compound)?,
    }
    Ok(())
}
