//! Fixture files shaped like NetCDF-4 products, written with the hdf5 crate.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::str::FromStr;

use hdf5::types::{FixedAscii, VarLenAscii, VarLenUnicode};

/// Write a variable-length UTF-8 string attribute with one value per entry.
pub fn write_strings(ds: &hdf5::Dataset, name: &str, values: &[&str]) {
    let values: Vec<VarLenUnicode> = values
        .iter()
        .map(|s| VarLenUnicode::from_str(s).unwrap())
        .collect();
    let attr = ds
        .new_attr::<VarLenUnicode>()
        .shape(values.len())
        .create(name)
        .unwrap();
    attr.write_raw(values.as_slice()).unwrap();
}

/// Create a sounding retrieval file: `/All_Data/CAPE` with a `units`
/// attribute, plus attributes of other types for the failure paths.
///
/// `CAPE` carries:
/// - `units`: NC_STRING scalar-like, one value `J/kg`
/// - `flag_meanings`: NC_STRING, three values
/// - `standard_name`: ASCII variable-length string
/// - `_FillValue`: NC_FLOAT
/// - `axis`: fixed-length string of 8 characters (NC_CHAR)
/// - `display_units`: ASCII-tagged string holding Latin-1 `°C`
pub fn make_sounding_file(dir: &Path) -> PathBuf {
    let path = dir.join("IASI_atm_prof_rtv.h5");
    let file = hdf5::File::create(&path).unwrap();

    let group = file.create_group("All_Data").unwrap();
    let cape = group
        .new_dataset_builder()
        .with_data(&[1200.5f32, 850.0, 0.0, -9999.0])
        .create("CAPE")
        .unwrap();
    write_strings(&cape, "units", &["J/kg"]);
    write_strings(&cape, "flag_meanings", &["good", "suspect", "missing"]);

    let name = VarLenAscii::from_ascii("atmosphere_convective_available_potential_energy")
        .unwrap();
    cape.new_attr::<VarLenAscii>()
        .create("standard_name")
        .unwrap()
        .write_scalar(&name)
        .unwrap();
    cape.new_attr::<f32>()
        .create("_FillValue")
        .unwrap()
        .write_scalar(&-9999.0f32)
        .unwrap();
    cape.new_attr::<FixedAscii<8>>()
        .create("axis")
        .unwrap()
        .write_scalar(&FixedAscii::<8>::from_ascii("Z").unwrap())
        .unwrap();
    // HDF5 stores the bytes without checking them against the character set.
    let latin1 = unsafe { VarLenAscii::from_ascii_unchecked(b"\xb0C") };
    cape.new_attr::<VarLenAscii>()
        .create("display_units")
        .unwrap()
        .write_scalar(&latin1)
        .unwrap();

    // A second group without CAPE.
    let geo = file.create_group("Geolocation").unwrap();
    let lat = geo
        .new_dataset_builder()
        .with_data(&[-30.0f64, 0.0, 30.0])
        .create("Latitude")
        .unwrap();
    write_strings(&lat, "units", &["degrees_north"]);

    // Nested groups and a root-level variable.
    let level2 = file.create_group("Data").unwrap().create_group("Level2").unwrap();
    let temp = level2
        .new_dataset_builder()
        .with_data(&[273.15f64, 280.0])
        .create("temperature")
        .unwrap();
    write_strings(&temp, "units", &["K"]);

    let pressure = file
        .new_dataset_builder()
        .with_data(&[1013.25f64, 1012.0])
        .create("pressure")
        .unwrap();
    write_strings(&pressure, "units", &["hPa"]);

    path
}

/// A file that exists but is not HDF5.
pub fn make_text_file(dir: &Path) -> PathBuf {
    let path = dir.join("notes.txt");
    std::fs::write(&path, "netcdf example {\n  dimensions:\n    x = 6 ;\n}\n").unwrap();
    path
}

/// Whether the file can be reopened read-write, i.e. no read-only handle
/// from an earlier run is still open in this process.
pub fn reopens_read_write(path: &Path) -> bool {
    hdf5::File::open_rw(path).is_ok()
}
