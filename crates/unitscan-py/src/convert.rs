use pyo3::{exceptions::PyValueError, PyErr, PyResult};

use ::unitscan::{Planes, SearchError, SearchOptions, Span, ValidationError};

pub(crate) fn validation_err(error: ValidationError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

pub(crate) fn search_err(error: SearchError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

pub(crate) fn options(all_matches: bool, overlapping: bool, limit: Option<usize>) -> SearchOptions {
    SearchOptions {
        all_matches,
        overlapping,
        limit,
    }
}

/// Python names planes as `"all"`, `"basic"` or `"supplementary"`.
pub(crate) fn planes(name: &str) -> PyResult<Planes> {
    match name {
        "all" => Ok(Planes::All),
        "basic" => Ok(Planes::Basic),
        "supplementary" => Ok(Planes::Supplementary),
        other => Err(PyValueError::new_err(format!(
            "unknown planes {other:?}, expected \"all\", \"basic\" or \"supplementary\""
        ))),
    }
}

/// Python receives spans as `(start, end)` tuples.
pub(crate) fn spans(found: Result<Vec<Span>, SearchError>) -> PyResult<Vec<(usize, usize)>> {
    found
        .map(|spans| spans.into_iter().map(Into::into).collect())
        .map_err(search_err)
}
