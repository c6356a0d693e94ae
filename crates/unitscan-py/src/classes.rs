use pyo3::prelude::*;

use ::unitscan::{
    is_ascii, is_utf32, is_utf8, search_ascii, search_utf16_planes, search_utf32, search_utf8,
    validate_ascii, validate_utf16_planes, validate_utf32, validate_utf8, ByteOrder,
};

use crate::convert::{options, planes as parse_planes, spans, validation_err};

/// `unitscan.ASCII`: 7-bit ASCII checks and search.
#[pyclass(name = "ASCII", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyAscii;

#[pymethods]
impl PyAscii {
    /// True when every byte is below 0x80.
    #[staticmethod]
    pub fn is_ascii(bytes: &[u8]) -> bool {
        is_ascii(bytes)
    }

    /// Raises `ValueError` describing the first non-ASCII byte.
    #[staticmethod]
    pub fn validate(bytes: &[u8]) -> PyResult<()> {
        validate_ascii(bytes).map_err(validation_err)
    }

    /// Byte spans of `pattern` in `source` as `(start, end)` tuples.
    #[staticmethod]
    #[pyo3(signature = (source, pattern, all_matches, overlapping = false, limit = None))]
    pub fn search_pattern(
        source: &[u8],
        pattern: &[u8],
        all_matches: bool,
        overlapping: bool,
        limit: Option<usize>,
    ) -> PyResult<Vec<(usize, usize)>> {
        spans(search_ascii(source, pattern, options(all_matches, overlapping, limit)))
    }
}

/// `unitscan.UTF8`.
#[pyclass(name = "UTF8", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyUtf8;

#[pymethods]
impl PyUtf8 {
    /// True for well-formed UTF-8.
    #[staticmethod]
    pub fn is_utf8(bytes: &[u8]) -> bool {
        is_utf8(bytes)
    }

    /// Raises `ValueError` describing the first malformed sequence.
    #[staticmethod]
    pub fn validate(bytes: &[u8]) -> PyResult<()> {
        validate_utf8(bytes).map_err(validation_err)
    }

    /// Byte spans of `pattern` in `source`; `limit` counts bytes.
    #[staticmethod]
    #[pyo3(signature = (source, pattern, all_matches, overlapping = false, limit = None))]
    pub fn search_pattern(
        source: &[u8],
        pattern: &[u8],
        all_matches: bool,
        overlapping: bool,
        limit: Option<usize>,
    ) -> PyResult<Vec<(usize, usize)>> {
        spans(search_utf8(source, pattern, options(all_matches, overlapping, limit)))
    }
}

/// `unitscan.UTF16`. `little_endian` selects the byte order; there is no
/// BOM detection. `planes` is one of `"all"`, `"basic"` or `"supplementary"`.
#[pyclass(name = "UTF16", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyUtf16;

#[pymethods]
impl PyUtf16 {
    /// True for well-formed UTF-16 using only characters from `planes`.
    #[staticmethod]
    #[pyo3(signature = (bytes, little_endian, planes = "all"))]
    pub fn is_utf16(bytes: &[u8], little_endian: bool, planes: &str) -> PyResult<bool> {
        let planes = parse_planes(planes)?;
        Ok(validate_utf16_planes(bytes, ByteOrder::from_little_endian(little_endian), planes).is_ok())
    }

    /// Raises `ValueError` describing the first malformed or disallowed unit.
    #[staticmethod]
    #[pyo3(signature = (bytes, little_endian, planes = "all"))]
    pub fn validate(bytes: &[u8], little_endian: bool, planes: &str) -> PyResult<()> {
        let planes = parse_planes(planes)?;
        validate_utf16_planes(bytes, ByteOrder::from_little_endian(little_endian), planes)
            .map_err(validation_err)
    }

    /// Byte spans of `pattern` in `source`; `limit` counts 2-byte units.
    #[staticmethod]
    #[pyo3(signature = (source, pattern, little_endian, all_matches, overlapping = false, limit = None, planes = "all"))]
    pub fn search_pattern(
        source: &[u8],
        pattern: &[u8],
        little_endian: bool,
        all_matches: bool,
        overlapping: bool,
        limit: Option<usize>,
        planes: &str,
    ) -> PyResult<Vec<(usize, usize)>> {
        spans(search_utf16_planes(
            source,
            pattern,
            ByteOrder::from_little_endian(little_endian),
            parse_planes(planes)?,
            options(all_matches, overlapping, limit),
        ))
    }
}

/// `unitscan.UTF32`. `little_endian` selects the byte order; there is no
/// BOM detection.
#[pyclass(name = "UTF32", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyUtf32;

#[pymethods]
impl PyUtf32 {
    /// True when every 4-byte unit is a Unicode scalar value.
    #[staticmethod]
    pub fn is_utf32(bytes: &[u8], little_endian: bool) -> bool {
        is_utf32(bytes, ByteOrder::from_little_endian(little_endian))
    }

    /// Raises `ValueError` describing the first invalid unit.
    #[staticmethod]
    pub fn validate(bytes: &[u8], little_endian: bool) -> PyResult<()> {
        validate_utf32(bytes, ByteOrder::from_little_endian(little_endian)).map_err(validation_err)
    }

    /// Byte spans of `pattern` in `source`; `limit` counts 4-byte units.
    #[staticmethod]
    #[pyo3(signature = (source, pattern, little_endian, all_matches, overlapping = false, limit = None))]
    pub fn search_pattern(
        source: &[u8],
        pattern: &[u8],
        little_endian: bool,
        all_matches: bool,
        overlapping: bool,
        limit: Option<usize>,
    ) -> PyResult<Vec<(usize, usize)>> {
        spans(search_utf32(
            source,
            pattern,
            ByteOrder::from_little_endian(little_endian),
            options(all_matches, overlapping, limit),
        ))
    }
}
