//! Read and print one string attribute of a NetCDF-4 variable.
//!
//! NetCDF-4 files are HDF5 files following specific conventions: NetCDF
//! groups are HDF5 groups, variables are HDF5 datasets and attributes are
//! HDF5 attributes. This crate wraps the `hdf5` bindings in lifetime-bound
//! handles and runs one linear inspection over them:
//! open, resolve group, resolve variable, query the attribute, fetch its
//! strings, print them, close.
//!
//! # Example
//!
//! ```no_run
//! use ncinspect::NcFile;
//!
//! let file = NcFile::open("IASI_20120229022657Z.atm_prof_rtv.h5").unwrap();
//! {
//!     let group = file.group("All_Data").unwrap();
//!     let var = group.variable("CAPE").unwrap();
//!     let info = var.attribute_info("units").unwrap();
//!     for units in var.read_string_attr(&info).unwrap().iter() {
//!         println!("{units}");
//!     }
//! }
//! file.close().unwrap();
//! ```

pub mod attribute;
pub mod config;
pub mod error;
pub mod group;
pub mod inspect;
pub mod types;
pub mod variable;

pub use attribute::{AttrInfo, StringAttr};
pub use config::{Cli, InspectConfig};
pub use error::{Error, ErrorKind, FAILURE_EXIT_CODE};
pub use group::NcGroup;
pub use inspect::{inspect, Report};
pub use types::NcType;
pub use variable::NcVariable;

use std::path::{Path, PathBuf};

use tracing::debug;

/// A NetCDF-4 file opened read-only.
///
/// Groups and variables borrow from the file, so [`NcFile::close`] cannot be
/// called while any of them is still alive.
pub struct NcFile {
    hdf5: hdf5::File,
    path: PathBuf,
}

impl NcFile {
    /// Open a file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let hdf5 = match hdf5::File::open(&path) {
            Ok(f) => f,
            Err(source) => return Err(Error::Open { path, source }),
        };
        debug!(path = %path.display(), "opened file read-only");
        Ok(Self { hdf5, path })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The root group.
    pub fn root(&self) -> Result<NcGroup<'_>, Error> {
        let root = self
            .hdf5
            .group("/")
            .map_err(|source| Error::GroupNotFound {
                name: "/".to_string(),
                source: Some(source),
            })?;
        Ok(NcGroup::new(root))
    }

    /// Get a group by name.
    ///
    /// Names containing `/` are resolved one component at a time from the
    /// root, so `Data/Level2` addresses a nested group. An empty name or `/`
    /// is the root group.
    pub fn group(&self, name: &str) -> Result<NcGroup<'_>, Error> {
        let mut group = self.root()?;
        for component in name.split('/').filter(|c| !c.is_empty()) {
            group = group.group(component)?;
        }
        debug!(group = %group.name(), "resolved group");
        Ok(group)
    }

    /// Close the file, releasing its handle.
    pub fn close(self) -> Result<(), Error> {
        let path = self.path;
        self.hdf5.close().map_err(Error::Close)?;
        debug!(path = %path.display(), "closed file");
        Ok(())
    }
}

impl std::fmt::Debug for NcFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NcFile").field("path", &self.path).finish()
    }
}
