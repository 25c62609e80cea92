//! NetCDF-4 data type mapping.
//!
//! Maps HDF5 type descriptors to NetCDF type tags and their numeric codes.

use hdf5::types::{FloatSize, IntSize, TypeDescriptor};

/// NetCDF-4 data types corresponding to the standard NetCDF type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NcType {
    /// NC_NAT: no NetCDF equivalent
    Nat,
    /// NC_BYTE: signed 8-bit integer
    Byte,
    /// NC_CHAR: fixed-length string / character data
    Char,
    /// NC_SHORT: signed 16-bit integer
    Short,
    /// NC_INT: signed 32-bit integer
    Int,
    /// NC_FLOAT: 32-bit floating point
    Float,
    /// NC_DOUBLE: 64-bit floating point
    Double,
    /// NC_UBYTE: unsigned 8-bit integer
    UByte,
    /// NC_USHORT: unsigned 16-bit integer
    UShort,
    /// NC_UINT: unsigned 32-bit integer
    UInt,
    /// NC_INT64: signed 64-bit integer
    Int64,
    /// NC_UINT64: unsigned 64-bit integer
    UInt64,
    /// NC_STRING: variable-length string
    String,
    /// NC_VLEN: variable-length array
    Vlen,
    /// NC_ENUM: enumeration
    Enum,
    /// NC_COMPOUND: compound (struct) type
    Compound,
}

impl NcType {
    /// The numeric type code used by the NetCDF C library (`nc_type`).
    pub fn code(self) -> i32 {
        match self {
            NcType::Nat => 0,
            NcType::Byte => 1,
            NcType::Char => 2,
            NcType::Short => 3,
            NcType::Int => 4,
            NcType::Float => 5,
            NcType::Double => 6,
            NcType::UByte => 7,
            NcType::UShort => 8,
            NcType::UInt => 9,
            NcType::Int64 => 10,
            NcType::UInt64 => 11,
            NcType::String => 12,
            NcType::Vlen => 13,
            NcType::Enum => 15,
            NcType::Compound => 16,
        }
    }
}

impl std::fmt::Display for NcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NcType::Nat => write!(f, "NC_NAT"),
            NcType::Byte => write!(f, "NC_BYTE"),
            NcType::Char => write!(f, "NC_CHAR"),
            NcType::Short => write!(f, "NC_SHORT"),
            NcType::Int => write!(f, "NC_INT"),
            NcType::Float => write!(f, "NC_FLOAT"),
            NcType::Double => write!(f, "NC_DOUBLE"),
            NcType::UByte => write!(f, "NC_UBYTE"),
            NcType::UShort => write!(f, "NC_USHORT"),
            NcType::UInt => write!(f, "NC_UINT"),
            NcType::Int64 => write!(f, "NC_INT64"),
            NcType::UInt64 => write!(f, "NC_UINT64"),
            NcType::String => write!(f, "NC_STRING"),
            NcType::Vlen => write!(f, "NC_VLEN"),
            NcType::Enum => write!(f, "NC_ENUM"),
            NcType::Compound => write!(f, "NC_COMPOUND"),
        }
    }
}

/// Map an HDF5 type descriptor to a NetCDF type.
pub fn descriptor_to_nctype(desc: &TypeDescriptor) -> NcType {
    match desc {
        TypeDescriptor::Integer(IntSize::U1) => NcType::Byte,
        TypeDescriptor::Integer(IntSize::U2) => NcType::Short,
        TypeDescriptor::Integer(IntSize::U4) => NcType::Int,
        TypeDescriptor::Integer(IntSize::U8) => NcType::Int64,
        TypeDescriptor::Unsigned(IntSize::U1) => NcType::UByte,
        TypeDescriptor::Unsigned(IntSize::U2) => NcType::UShort,
        TypeDescriptor::Unsigned(IntSize::U4) => NcType::UInt,
        TypeDescriptor::Unsigned(IntSize::U8) => NcType::UInt64,
        TypeDescriptor::Float(FloatSize::U4) => NcType::Float,
        TypeDescriptor::Float(FloatSize::U8) => NcType::Double,
        // HDF5 booleans are stored as an enum over a byte.
        TypeDescriptor::Boolean | TypeDescriptor::Enum(_) => NcType::Enum,
        TypeDescriptor::Compound(_) => NcType::Compound,
        TypeDescriptor::FixedAscii(_) | TypeDescriptor::FixedUnicode(_) => NcType::Char,
        TypeDescriptor::VarLenAscii | TypeDescriptor::VarLenUnicode => NcType::String,
        TypeDescriptor::VarLenArray(_) => NcType::Vlen,
        _ => NcType::Nat,
    }
}
