//! Conversion dispatcher: resolve formats, read, write.

use std::path::Path;

use crate::error::Result;
use crate::format::Format;
use crate::value::Value;
use crate::{json, xml, yaml};

type ReadFn = fn(&Path) -> Result<Value>;
type WriteFn = fn(&Value, &Path) -> Result<()>;

/// Reader/writer pair for one format.
struct Codec {
    read: ReadFn,
    write: WriteFn,
}

/// Codec lookup table, indexed by the [`Format`] discriminant. Resolved
/// once; "unsupported format" is decided at token resolution, not here.
static CODECS: [Codec; 3] = [
    Codec {
        read: json::read,
        write: json::write,
    },
    Codec {
        read: yaml::read,
        write: yaml::write,
    },
    Codec {
        read: xml::read,
        write: xml::write,
    },
];

fn codec(format: Format) -> &'static Codec {
    &CODECS[format as usize]
}

/// Convert the file at `input` into `output`.
///
/// Reads `input` as `from`, then writes the resulting value to `output` as
/// `to`. The intermediate value lives only for the duration of this call.
/// Errors from either side propagate unchanged; a failure on the read side
/// leaves `output` untouched. No temp-file-then-rename strategy is used, so
/// an I/O failure during the write can leave a partial output file.
pub fn convert(input: &Path, output: &Path, from: Format, to: Format) -> Result<()> {
    let value = (codec(from).read)(input)?;
    (codec(to).write)(&value, output)
}

/// Convert with formats inferred from the file extensions unless
/// overridden.
///
/// Both formats are resolved before any file is opened, so an unsupported
/// format never creates the output file.
pub fn convert_paths(
    input: &Path,
    output: &Path,
    input_format: Option<Format>,
    output_format: Option<Format>,
) -> Result<()> {
    let from = match input_format {
        Some(format) => format,
        None => Format::from_path(input)?,
    };
    let to = match output_format {
        Some(format) => format,
        None => Format::from_path(output)?,
    };
    convert(input, output, from, to)
}
