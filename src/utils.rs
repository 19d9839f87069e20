#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::tolerance::{
    errors::TolError,
    options::{StepControl, TolOptions, Tolerances, DEFAULT_NSIMS},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err("expected a 1-D numpy.ndarray or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("expected a 1-D contiguous float64 array or sequence"))?;
    Ok(Array1::from(slice.to_vec()))
}

#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 2-D numpy.ndarray or nested sequence of float64",
        )
    })?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(PyValueError::new_err("matrix rows must all have the same length"));
    }
    let mut out = Array2::zeros((nrows, ncols));
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[[i, j]] = v;
        }
    }
    Ok(out)
}

#[cfg(feature = "python-bindings")]
pub fn build_tol_options<'py>(
    py: Python<'py>, iprn: usize, weight: Option<&Bound<'py, PyAny>>, epsf: f64, epsx: f64,
    epsg: f64, maxitn: usize,
) -> PyResult<TolOptions> {
    let tols =
        Tolerances::new(epsf, epsx, epsg, maxitn, DEFAULT_NSIMS).map_err(tol_err_to_py)?;
    let weight_vec = match weight {
        Some(raw) => Some(extract_f64_vector(py, raw)?),
        None => None,
    };
    Ok(TolOptions::new(tols, StepControl::default(), iprn, weight_vec))
}

#[cfg(feature = "python-bindings")]
pub fn tol_err_to_py(err: TolError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
