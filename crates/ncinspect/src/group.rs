//! NetCDF-4 group representation.
//!
//! NetCDF-4 uses HDF5 groups as NetCDF groups. Each group can contain
//! variables, attributes, and subgroups.

use std::marker::PhantomData;

use tracing::debug;

use crate::error::Error;
use crate::variable::NcVariable;
use crate::NcFile;

/// A NetCDF-4 group corresponding to an HDF5 group.
pub struct NcGroup<'f> {
    /// Underlying HDF5 group.
    hdf5_group: hdf5::Group,
    /// Ties the group to the open file.
    _file: PhantomData<&'f NcFile>,
}

impl<'f> NcGroup<'f> {
    pub(crate) fn new(hdf5_group: hdf5::Group) -> Self {
        Self {
            hdf5_group,
            _file: PhantomData,
        }
    }

    /// Full path of the group within the file (`/` for the root).
    pub fn name(&self) -> String {
        self.hdf5_group.name()
    }

    /// Names of the links (subgroups and variables) in this group.
    pub fn member_names(&self) -> hdf5::Result<Vec<String>> {
        self.hdf5_group.member_names()
    }

    /// Get a direct subgroup by name.
    pub fn group(&self, name: &str) -> Result<NcGroup<'f>, Error> {
        if !self.hdf5_group.link_exists(name) {
            self.log_members(name);
            return Err(Error::GroupNotFound {
                name: self.child_path(name),
                source: None,
            });
        }
        let hdf5_group = self
            .hdf5_group
            .group(name)
            .map_err(|source| Error::GroupNotFound {
                name: self.child_path(name),
                source: Some(source),
            })?;
        Ok(NcGroup::new(hdf5_group))
    }

    /// Get a variable of this group by name.
    pub fn variable(&self, name: &str) -> Result<NcVariable<'f>, Error> {
        if !self.hdf5_group.link_exists(name) {
            self.log_members(name);
            return Err(Error::VariableNotFound {
                path: self.child_path(name),
                source: None,
            });
        }
        let dataset = self
            .hdf5_group
            .dataset(name)
            .map_err(|source| Error::VariableNotFound {
                path: self.child_path(name),
                source: Some(source),
            })?;
        debug!(group = %self.name(), variable = name, "resolved variable");
        Ok(NcVariable::new(name.to_string(), dataset))
    }

    fn child_path(&self, name: &str) -> String {
        let parent = self.name();
        if parent.ends_with('/') {
            format!("{parent}{name}")
        } else {
            format!("{parent}/{name}")
        }
    }

    fn log_members(&self, missing: &str) {
        if let Ok(members) = self.member_names() {
            debug!(group = %self.name(), missing, ?members, "lookup failed");
        }
    }
}

impl std::fmt::Debug for NcGroup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NcGroup")
            .field("name", &self.name())
            .finish()
    }
}
