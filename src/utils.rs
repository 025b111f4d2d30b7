#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::mixture::{FeatureModel, Observation};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Coerce a Python object into a contiguous 1-D `f64` array.
///
/// Accepts, in order of preference: a numpy `float64` array, anything
/// with a `to_numpy()` method (e.g. a pandas Series), or a plain Python
/// sequence of floats (copied into a fresh array).
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

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Coerce a Python object into an owned vector of `i64` rank values.
///
/// Same fallback chain as [`extract_f64_array`], specialized to the
/// integer rankings the models consume. The result is copied out so the
/// caller holds no borrow of the Python buffer.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_i64_ranking<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Vec<i64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<i64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(slice.to_vec());
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<i64>>() {
            if let Ok(slice) = series_ro.as_slice() {
                return Ok(slice.to_vec());
            }
        }
    }

    raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of int64")
    })
}

/// Extract the Rust feature models from a Python list of model objects.
///
/// Each element must be a `TiedRankLogit` or `Multinoulli` instance from
/// this extension module; the inner Rust models are cloned out so the
/// resulting class owns its state independently of the Python objects.
#[cfg(feature = "python-bindings")]
pub fn extract_feature_models<'py>(
    class_features: &Bound<'py, PyAny>,
) -> PyResult<Vec<FeatureModel>> {
    use crate::{Multinoulli, TiedRankLogit};

    let mut features = Vec::new();
    for item in class_features.try_iter()? {
        let item = item?;
        if let Ok(ranking) = item.extract::<PyRef<TiedRankLogit>>() {
            features.push(FeatureModel::Ranking(ranking.inner.clone()));
        } else if let Ok(multinoulli) = item.extract::<PyRef<Multinoulli>>() {
            features.push(FeatureModel::Multinoulli(multinoulli.inner.clone()));
        } else {
            return Err(PyTypeError::new_err(
                "each class feature must be a TiedRankLogit or Multinoulli instance",
            ));
        }
    }
    Ok(features)
}

/// Pair a raw Python joint observation with a class's feature kinds.
///
/// `raw_observation` must be a sequence with one entry per feature: a
/// ranking sequence for `TiedRankLogit` features, an integer category
/// for `Multinoulli` features. Kind pairing happens here; semantic
/// validation (lengths, ranges) stays with the Rust core.
#[cfg(feature = "python-bindings")]
pub fn extract_joint_observation<'py>(
    py: Python<'py>, features: &[FeatureModel], raw_observation: &Bound<'py, PyAny>,
) -> PyResult<Vec<Observation>> {
    let items: Vec<Bound<'py, PyAny>> = raw_observation.try_iter()?.collect::<PyResult<_>>()?;
    if items.len() != features.len() {
        return Err(PyTypeError::new_err(format!(
            "observation has {} features but the mixture expects {}",
            items.len(),
            features.len()
        )));
    }

    let mut observations = Vec::with_capacity(items.len());
    for (feature, item) in features.iter().zip(&items) {
        let observation = match feature {
            FeatureModel::Ranking(_) => Observation::Ranking(extract_i64_ranking(py, item)?),
            FeatureModel::Multinoulli(_) => {
                let category: usize = item.extract().map_err(|_| {
                    PyTypeError::new_err(
                        "multinoulli features take a non-negative integer category",
                    )
                })?;
                Observation::Category(category)
            }
        };
        observations.push(observation);
    }
    Ok(observations)
}
