//! The inspection run: open, resolve, read, print, close.

use std::io::Write;

use tracing::{debug, warn};

use crate::attribute::AttrInfo;
use crate::config::InspectConfig;
use crate::error::Error;
use crate::NcFile;

/// What a successful run read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Full path of the resolved group.
    pub group: String,
    /// Full path of the resolved variable.
    pub variable: String,
    /// Declared type and length of the attribute.
    pub attribute: AttrInfo,
    /// Attribute values, in declared order.
    pub values: Vec<String>,
}

/// Run one inspection, writing one line per step to `out`.
///
/// Stops at the first failing step. The file is closed before returning on
/// every path once it has been opened; if a step failed, that step's error
/// is returned even when closing fails too.
pub fn inspect<W: Write>(config: &InspectConfig, out: &mut W) -> Result<Report, Error> {
    let file = NcFile::open(&config.path)?;
    let outcome = read_attribute(&file, config, out);
    let closed = file.close();

    let report = match (outcome, closed) {
        (Ok(report), Ok(())) => report,
        (Ok(_), Err(e)) => return Err(e),
        (Err(e), Ok(())) => return Err(e),
        (Err(e), Err(close_err)) => {
            warn!(error = %close_err, "closing after a failed step also failed");
            return Err(e);
        }
    };

    writeln!(
        out,
        "*** SUCCESS reading example file {}!",
        config.path.display()
    )?;
    Ok(report)
}

fn read_attribute<W: Write>(
    file: &NcFile,
    config: &InspectConfig,
    out: &mut W,
) -> Result<Report, Error> {
    let group = file.group(&config.group)?;
    writeln!(out, "*** group {}", group.name())?;

    let var = group.variable(&config.variable)?;
    writeln!(out, "*** variable {}", var.path())?;

    let info = var.attribute_info(&config.attribute)?;
    writeln!(
        out,
        "*** attribute {} type={} ({}) len={}",
        info.name,
        info.nc_type,
        info.nc_type.code(),
        info.len
    )?;

    let values = var.read_string_attr(&info)?;
    for (k, value) in values.iter().enumerate() {
        writeln!(out, "   {}:{}[{}] = '{}'", var.name(), info.name, k, value)?;
    }
    debug!(count = values.len(), "printed attribute values");

    Ok(Report {
        group: group.name(),
        variable: var.path(),
        values: values.to_vec(),
        attribute: info,
    })
}
