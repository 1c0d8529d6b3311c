use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::topology::Face;

use super::{ExportParams, ExportTarget};

/// Encodes faces as text.
///
/// Layout: the signature line, then for each face its vertex lines
/// (`x y z`) followed by an index line `f i j k ... ` listing the face's
/// 1-based positions in the global vertex order. Indices never reset
/// between faces. An empty slice encodes to an empty string, without the
/// signature.
#[must_use]
pub fn encode_obj(faces: &[Face], params: &ExportParams) -> String {
    if faces.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&params.signature);
    out.push('\n');

    let mut emitted = 0usize;
    for face in faces {
        for vertex in face {
            out.push_str(&vertex.to_string());
            out.push('\n');
        }
        out.push_str("f ");
        for index in emitted + 1..=emitted + face.len() {
            out.push_str(&index.to_string());
            out.push(' ');
        }
        out.push('\n');
        emitted += face.len();
    }
    out
}

/// Writes the encoding of `faces` to `writer`.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_obj<W: Write>(writer: &mut W, faces: &[Face], params: &ExportParams) -> Result<()> {
    writer.write_all(encode_obj(faces, params).as_bytes())?;
    Ok(())
}

/// Writes `faces` to the file named by `target`, creating or truncating it.
///
/// An empty face slice produces an empty file. Returns the written path.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_obj(faces: &[Face], target: &ExportTarget, params: &ExportParams) -> Result<PathBuf> {
    let path = target.path(&params.extension);
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, faces, params)?;
    writer.flush()?;

    debug!(path = %path.display(), faces = faces.len(), "wrote mesh");
    Ok(path)
}
