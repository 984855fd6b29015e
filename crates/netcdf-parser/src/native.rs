//! Thin helpers over the native netcdf library.
//!
//! libnetcdf reads both classic NetCDF and HDF5-backed files, so simulation
//! output written with plain HDF5 tools opens through the same path. Root
//! group attributes are read from the file itself; per-variable attributes
//! such as `_FillValue` from the variable.

use std::sync::Once;

use netcdf::AttributeValue;

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose diagnostics even when a lookup failure
/// is handled on the Rust side (for example probing an optional attribute).
/// Call once early in `main()`, before any file is opened. Safe to call
/// repeatedly.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and null handlers are a
        // documented way of disabling the default error stack printer.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Check if the root group has an attribute with the given name.
pub(crate) fn has_global_attr(file: &netcdf::File, name: &str) -> bool {
    file.attributes().any(|attr| attr.name() == name)
}

/// Read a numeric root attribute as a list of f64, scalar or array.
///
/// Returns `None` when the attribute is absent or not numeric.
pub(crate) fn get_global_f64_values(file: &netcdf::File, name: &str) -> Option<Vec<f64>> {
    if !has_global_attr(file, name) {
        return None;
    }
    let value = file.attribute(name)?.value().ok()?;
    numeric_values(value)
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
pub(crate) fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Helper to get f32 attribute.
pub(crate) fn get_f32_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f32::try_from(attr_value).ok()
}

fn numeric_values(value: AttributeValue) -> Option<Vec<f64>> {
    use AttributeValue as V;

    let values = match value {
        V::Double(v) => vec![v],
        V::Doubles(v) => v,
        V::Float(v) => vec![f64::from(v)],
        V::Floats(v) => v.into_iter().map(f64::from).collect(),
        V::Int(v) => vec![f64::from(v)],
        V::Ints(v) => v.into_iter().map(f64::from).collect(),
        V::Uint(v) => vec![f64::from(v)],
        V::Uints(v) => v.into_iter().map(f64::from).collect(),
        V::Short(v) => vec![f64::from(v)],
        V::Shorts(v) => v.into_iter().map(f64::from).collect(),
        V::Ushort(v) => vec![f64::from(v)],
        V::Ushorts(v) => v.into_iter().map(f64::from).collect(),
        V::Longlong(v) => vec![v as f64],
        V::Longlongs(v) => v.into_iter().map(|x| x as f64).collect(),
        V::Ulonglong(v) => vec![v as f64],
        V::Ulonglongs(v) => v.into_iter().map(|x| x as f64).collect(),
        _ => return None,
    };
    Some(values)
}
