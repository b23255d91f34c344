use crate::error::{VqeError, VqeResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One CSV record.
pub trait CsvRow {
    const HEADER: &'static str;

    fn write_record<W: Write>(&self, w: &mut W) -> io::Result<()>;
}

pub fn write_csv<P, R>(path: P, rows: &[R]) -> VqeResult<()>
where
    P: AsRef<Path>,
    R: CsvRow,
{
    let path = path.as_ref();
    write_rows(path, rows).map_err(|source| VqeError::Output {
        path: path.display().to_string(),
        source,
    })
}

fn write_rows<R: CsvRow>(path: &Path, rows: &[R]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", R::HEADER)?;
    for row in rows {
        row.write_record(&mut w)?;
    }
    w.flush()
}
