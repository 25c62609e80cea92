//! NetCDF-4 variable representation.
//!
//! Variables in NetCDF-4 are HDF5 datasets. Only the attribute read path is
//! exposed here; variable data is never read.

use std::marker::PhantomData;

use hdf5::types::{TypeDescriptor, VarLenAscii, VarLenUnicode};
use tracing::debug;

use crate::attribute::{AttrInfo, StringAttr};
use crate::error::Error;
use crate::types::{descriptor_to_nctype, NcType};
use crate::NcFile;

/// A NetCDF-4 variable backed by an HDF5 dataset.
pub struct NcVariable<'f> {
    /// Variable name within its group.
    name: String,
    /// Underlying HDF5 dataset.
    dataset: hdf5::Dataset,
    _file: PhantomData<&'f NcFile>,
}

impl<'f> NcVariable<'f> {
    pub(crate) fn new(name: String, dataset: hdf5::Dataset) -> Self {
        Self {
            name,
            dataset,
            _file: PhantomData,
        }
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the variable within the file.
    pub fn path(&self) -> String {
        self.dataset.name()
    }

    /// Names of all attributes attached to this variable.
    pub fn attribute_names(&self) -> hdf5::Result<Vec<String>> {
        self.dataset.attr_names()
    }

    /// Declared type and length of the attribute `name`.
    ///
    /// For fixed-length strings (`NC_CHAR`) the length is the character
    /// count, matching `nc_inq_att`.
    pub fn attribute_info(&self, name: &str) -> Result<AttrInfo, Error> {
        let attr = self.open_attr(name)?;
        let desc = self.descriptor(&attr, name)?;
        let len = match desc {
            TypeDescriptor::FixedAscii(size) | TypeDescriptor::FixedUnicode(size) => {
                size * attr.size()
            }
            _ => attr.size(),
        };
        let info = AttrInfo {
            name: name.to_string(),
            nc_type: descriptor_to_nctype(&desc),
            len,
        };
        debug!(
            variable = %self.name,
            attribute = name,
            nc_type = %info.nc_type,
            len = info.len,
            "queried attribute"
        );
        Ok(info)
    }

    /// Read the values of a string attribute described by `info`.
    ///
    /// The declared type must be `NC_STRING`, and the library must return
    /// exactly `info.len` values.
    pub fn read_string_attr(&self, info: &AttrInfo) -> Result<StringAttr, Error> {
        if info.nc_type != NcType::String {
            return Err(self.type_mismatch(&info.name, info.nc_type));
        }
        let attr = self.open_attr(&info.name)?;
        let read_err = |source: hdf5::Error| Error::Read {
            variable: self.name.clone(),
            name: info.name.clone(),
            source,
        };
        let values = match self.descriptor(&attr, &info.name)? {
            TypeDescriptor::VarLenUnicode => attr
                .read_raw::<VarLenUnicode>()
                .map(StringAttr::from_unicode)
                .map_err(read_err)?,
            TypeDescriptor::VarLenAscii => attr
                .read_raw::<VarLenAscii>()
                .map(StringAttr::from_ascii)
                .map_err(read_err)?,
            other => return Err(self.type_mismatch(&info.name, descriptor_to_nctype(&other))),
        };
        if values.len() != info.len {
            return Err(Error::LengthMismatch {
                variable: self.name.clone(),
                name: info.name.clone(),
                expected: info.len,
                actual: values.len(),
            });
        }
        Ok(values)
    }

    fn open_attr(&self, name: &str) -> Result<hdf5::Attribute, Error> {
        self.dataset.attr(name).map_err(|source| {
            if let Ok(available) = self.attribute_names() {
                debug!(variable = %self.name, missing = name, ?available, "lookup failed");
            }
            Error::AttributeNotFound {
                variable: self.name.clone(),
                name: name.to_string(),
                source: Some(source),
            }
        })
    }

    fn descriptor(&self, attr: &hdf5::Attribute, name: &str) -> Result<TypeDescriptor, Error> {
        attr.dtype()
            .and_then(|dtype| dtype.to_descriptor())
            .map_err(|source| Error::Read {
                variable: self.name.clone(),
                name: name.to_string(),
                source,
            })
    }

    fn type_mismatch(&self, name: &str, found: NcType) -> Error {
        Error::TypeMismatch {
            variable: self.name.clone(),
            name: name.to_string(),
            found,
        }
    }
}

impl std::fmt::Debug for NcVariable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NcVariable")
            .field("name", &self.name)
            .finish()
    }
}
