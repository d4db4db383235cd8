//! Python bindings for error_function.
//!
//! Every function takes a single argument: an `int`, a `float`, a `list` of
//! numbers or a one-dimensional numpy array of `float32`, `float64`,
//! `longdouble` or `int64`.

use std::fmt::Display;
use std::os::raw::c_int;

use numpy::npyffi::NPY_TYPES;
use numpy::{
    IntoPyArray, PyArrayDescrMethods, PyArrayDyn, PyArrayMethods, PyUntypedArray,
    PyUntypedArrayMethods, dtype,
};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::{PyComplex, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

use ::fast_error_function::prelude::{
    DynamicInput, DynamicOutput, FastErf, FastErfEvaluator, Function, Method, Value,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert an error into the module's RuntimeError layout.
fn to_py_error(name: &str, e: impl Display) -> PyErr {
    PyRuntimeError::new_err(format!(
        "\nError Encountered: erfpy\n\tFunction Name: {}\n\n{}\n",
        name, e
    ))
}

/// Name of a non-numeric list element's type.
fn type_tag(item: &Bound<'_, PyAny>) -> &'static str {
    if item.is_instance_of::<PyString>() {
        "str"
    } else if item.is_none() {
        "NoneType"
    } else if item.is_instance_of::<PyComplex>() {
        "complex"
    } else if item.is_instance_of::<PyList>() {
        "list"
    } else if item.is_instance_of::<PyTuple>() {
        "tuple"
    } else if item.is_instance_of::<PyDict>() {
        "dict"
    } else {
        "object"
    }
}

/// Convert one list element into a [`Value`].
fn to_value(item: &Bound<'_, PyAny>) -> PyResult<Value> {
    if item.is_instance_of::<PyInt>() {
        // Integers too wide for i64 are still real numbers.
        return Ok(match item.extract::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Real(item.extract::<f64>()?),
        });
    }
    if item.is_instance_of::<PyFloat>() {
        return Ok(Value::Real(item.extract::<f64>()?));
    }
    Ok(Value::Other(type_tag(item)))
}

/// Evaluate a one-dimensional numpy array.
fn eval_array<'py>(
    py: Python<'py>,
    array: &Bound<'py, PyUntypedArray>,
    evaluator: &FastErfEvaluator,
    name: &str,
) -> PyResult<PyObject> {
    let descr = array.dtype();

    if descr.num() == NPY_TYPES::NPY_LONGDOUBLE as c_int {
        let cast = array.call_method1("astype", ("float64",))?;
        return eval_array(py, cast.downcast::<PyUntypedArray>()?, evaluator, name);
    }

    if descr.is_equiv_to(&dtype::<f32>(py)) {
        let input = array.downcast::<PyArrayDyn<f32>>()?.readonly();
        let output = evaluator
            .eval_array_dyn(&input.as_array())
            .map_err(|e| to_py_error(name, e))?;
        return Ok(output.into_pyarray(py).into_any().unbind());
    }

    if descr.is_equiv_to(&dtype::<f64>(py)) {
        let input = array.downcast::<PyArrayDyn<f64>>()?.readonly();
        let output = evaluator
            .eval_array_dyn(&input.as_array())
            .map_err(|e| to_py_error(name, e))?;
        return Ok(output.into_pyarray(py).into_any().unbind());
    }

    if descr.is_equiv_to(&dtype::<i64>(py)) {
        let input = array.downcast::<PyArrayDyn<i64>>()?.readonly();
        let output = evaluator
            .eval_integer_array_dyn(&input.as_array())
            .map_err(|e| to_py_error(name, e))?;
        return Ok(output.into_pyarray(py).into_any().unbind());
    }

    Err(to_py_error(name, "Could not parse inputs."))
}

/// Evaluate any supported Python input.
fn evaluate<'py>(
    py: Python<'py>,
    x: &Bound<'py, PyAny>,
    method: Method,
    function: Function,
    name: &str,
) -> PyResult<PyObject> {
    let evaluator = FastErf::new()
        .method(method)
        .function(function)
        .build()
        .map_err(|e| to_py_error(name, e))?;

    let input = if x.is_instance_of::<PyInt>() {
        match x.extract::<i64>() {
            Ok(n) => DynamicInput::Integer(n),
            Err(_) => DynamicInput::Real(x.extract::<f64>()?),
        }
    } else if x.is_instance_of::<PyFloat>() {
        DynamicInput::Real(x.extract::<f64>()?)
    } else if let Ok(list) = x.downcast::<PyList>() {
        let values = list
            .iter()
            .map(|item| to_value(&item))
            .collect::<PyResult<Vec<Value>>>()?;
        let output = evaluator
            .eval_dynamic(DynamicInput::List(&values))
            .map_err(|e| to_py_error(name, e))?;
        return to_py_object(py, output);
    } else if let Ok(array) = x.downcast::<PyUntypedArray>() {
        if array.ndim() != 1 {
            return Err(to_py_error(name, "Input is not 1-dimensional."));
        }
        return eval_array(py, array, &evaluator, name);
    } else {
        return Err(to_py_error(name, "Could not parse inputs."));
    };

    let output = evaluator
        .eval_dynamic(input)
        .map_err(|e| to_py_error(name, e))?;
    to_py_object(py, output)
}

/// Convert a dynamic output into the matching Python object.
fn to_py_object(py: Python<'_>, output: DynamicOutput) -> PyResult<PyObject> {
    Ok(match output {
        DynamicOutput::Real(y) => PyFloat::new(py, y).into_any().unbind(),
        DynamicOutput::List(ys) => PyList::new(py, ys)?.into_any().unbind(),
        DynamicOutput::Float32(ys) => ys.into_pyarray(py).into_any().unbind(),
        DynamicOutput::Float64(ys) => ys.into_pyarray(py).into_any().unbind(),
    })
}

// ============================================================================
// Python Functions
// ============================================================================

/// Computes erf(x) using the exponential approximation in A&S.
#[pyfunction]
fn abramowitz_and_stegun<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(
        py,
        x,
        Method::AbramowitzStegun,
        Function::Erf,
        "abramowitz_and_stegun",
    )
}

/// Computes erf(x) using the rational approximation in A&S.
#[pyfunction]
fn abramowitz_and_stegun_rational<'py>(
    py: Python<'py>,
    x: &Bound<'py, PyAny>,
) -> PyResult<PyObject> {
    evaluate(
        py,
        x,
        Method::AbramowitzStegunRational,
        Function::Erf,
        "abramowitz_and_stegun_rational",
    )
}

/// Computes erf(x) using the approximation in K&L.
#[pyfunction]
fn karagiannidis_and_lioumpas<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(
        py,
        x,
        Method::KaragiannidisLioumpas,
        Function::Erf,
        "karagiannidis_and_lioumpas",
    )
}

/// Computes erf(x) using the most accurate routine available.
#[pyfunction]
fn erf<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(py, x, Method::Reference, Function::Erf, "erf")
}

/// Computes erfc(x) = 1 - erf(x) using the most accurate routine available.
#[pyfunction]
fn erfc<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(py, x, Method::Reference, Function::Erfc, "erfc")
}

/// Computes erf(x) using the algorithm in Numerical Recipes.
#[pyfunction]
fn numerical_recipes<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(
        py,
        x,
        Method::NumericalRecipes,
        Function::Erf,
        "numerical_recipes",
    )
}

/// Computes erf(x) using the algorithm in Sun's libm.
#[pyfunction]
fn sun<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(py, x, Method::Sun, Function::Erf, "sun")
}

/// Computes erf(x) using Winitzki's approximation.
#[pyfunction]
fn winitzki<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<PyObject> {
    evaluate(py, x, Method::Winitzki, Function::Erf, "winitzki")
}

// ============================================================================
// Module Registration
// ============================================================================

#[pymodule]
fn erfpy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(abramowitz_and_stegun, m)?)?;
    m.add_function(wrap_pyfunction!(abramowitz_and_stegun_rational, m)?)?;
    m.add_function(wrap_pyfunction!(karagiannidis_and_lioumpas, m)?)?;
    m.add_function(wrap_pyfunction!(erf, m)?)?;
    m.add_function(wrap_pyfunction!(erfc, m)?)?;
    m.add_function(wrap_pyfunction!(numerical_recipes, m)?)?;
    m.add_function(wrap_pyfunction!(sun, m)?)?;
    m.add_function(wrap_pyfunction!(winitzki, m)?)?;

    let methods: Vec<&str> = Method::ALL.iter().map(|method| method.name()).collect();
    m.add("METHODS", methods)?;
    Ok(())
}
