//! Attribute metadata and string attribute values.

use std::borrow::Cow;

use hdf5::types::{VarLenAscii, VarLenUnicode};

use crate::types::NcType;

/// Declared type and length of a variable attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrInfo {
    /// Attribute name.
    pub name: String,
    /// Declared NetCDF type.
    pub nc_type: NcType,
    /// Declared length, as `nc_inq_att` reports it: the element count
    /// (1 for a scalar attribute), except for `NC_CHAR` where it is the
    /// total number of characters across all elements.
    pub len: usize,
}

/// Values of a string attribute, in declared order.
///
/// Each value's text is allocated by the HDF5 library, which does not check
/// it against the declared character set; bytes that are not UTF-8 are
/// returned with U+FFFD replacement characters. Dropping a
/// `StringAttr` frees every value through the library's deallocator first
/// and only then frees the slot buffer, on every path including early
/// returns.
pub struct StringAttr {
    slots: Slots,
}

enum Slots {
    Ascii(Vec<VarLenAscii>),
    Unicode(Vec<VarLenUnicode>),
}

impl StringAttr {
    pub(crate) fn from_ascii(values: Vec<VarLenAscii>) -> Self {
        Self {
            slots: Slots::Ascii(values),
        }
    }

    pub(crate) fn from_unicode(values: Vec<VarLenUnicode>) -> Self {
        Self {
            slots: Slots::Unicode(values),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match &self.slots {
            Slots::Ascii(v) => v.len(),
            Slots::Unicode(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Cow<'_, str>> {
        let bytes = match &self.slots {
            Slots::Ascii(v) => v.get(index).map(|s| s.as_bytes()),
            Slots::Unicode(v) => v.get(index).map(|s| s.as_bytes()),
        };
        bytes.map(String::from_utf8_lossy)
    }

    /// Iterate over the values in declared order.
    pub fn iter(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Copy the values out of library-owned memory.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(Cow::into_owned).collect()
    }
}

impl std::fmt::Debug for StringAttr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
