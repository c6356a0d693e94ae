mod classes;
mod convert;

pub use classes::{PyAscii, PyUtf16, PyUtf32, PyUtf8};

use pyo3::prelude::*;

#[pymodule]
pub fn unitscan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAscii>()?;
    m.add_class::<PyUtf8>()?;
    m.add_class::<PyUtf16>()?;
    m.add_class::<PyUtf32>()?;
    Ok(())
}
