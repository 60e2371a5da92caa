//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardError, Digit, EngineConfig, PrefixMatch};
use crate::engine::{CardNumberEngine, CardValidity, EngineResult};

fn to_py_err(err: CardError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn validity_name(validity: CardValidity) -> &'static str {
    match validity {
        CardValidity::Correct => "correct",
        CardValidity::Wrong => "wrong",
        CardValidity::NotIdentified => "not_identified",
    }
}

/// Python wrapper for EngineResult.
#[pyclass(name = "EngineResult")]
#[derive(Clone, Debug)]
pub struct PyEngineResult(pub EngineResult);

#[pymethods]
impl PyEngineResult {
    /// Network display name, empty when unidentified.
    #[getter]
    fn network_name(&self) -> &'static str {
        self.0.network_name()
    }

    /// One of "correct", "wrong", "not_identified".
    #[getter]
    fn validity(&self) -> &'static str {
        validity_name(self.0.validity)
    }

    fn __repr__(&self) -> String {
        format!(
            "EngineResult(network={:?}, validity={})",
            self.0.network_name(),
            validity_name(self.0.validity)
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for CardNumberEngine.
///
/// One instance per input session.
#[pyclass(name = "CardNumberEngine")]
pub struct PyCardNumberEngine {
    engine: CardNumberEngine<'static>,
}

#[pymethods]
impl PyCardNumberEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - strict_prefix: re-check the network on delete with starts-with
    ///   instead of substring matching
    /// - placeholder: character shown in unfilled slots
    #[new]
    #[pyo3(signature = (strict_prefix = false, placeholder = 'X'))]
    fn new(strict_prefix: bool, placeholder: char) -> Self {
        let prefix_match = if strict_prefix {
            PrefixMatch::StartsWith
        } else {
            PrefixMatch::Contains
        };
        let config = EngineConfig::default()
            .with_prefix_match(prefix_match)
            .with_placeholder(placeholder);
        Self {
            engine: CardNumberEngine::with_config(config),
        }
    }

    /// Append one digit (0-9).
    fn insert_digit(&mut self, digit: u8) -> PyResult<PyEngineResult> {
        let digit = Digit::new(digit).map_err(to_py_err)?;
        Ok(PyEngineResult(self.engine.insert_digit(digit)))
    }

    /// Append every digit of a string, ignoring spaces.
    fn insert_str(&mut self, input: &str) -> PyResult<PyEngineResult> {
        self.engine
            .insert_str(input)
            .map(PyEngineResult)
            .map_err(to_py_err)
    }

    /// Remove the last digit.
    fn delete_last_digit(&mut self) -> PyEngineResult {
        PyEngineResult(self.engine.delete_last_digit())
    }

    /// Clear the session.
    fn reset(&mut self) {
        self.engine.reset();
    }

    #[getter]
    fn network_name(&self) -> &'static str {
        self.engine.network().name()
    }

    #[getter]
    fn validity(&self) -> &'static str {
        validity_name(self.engine.validity())
    }

    #[getter]
    fn current_mask(&self) -> &'static str {
        self.engine.current_mask()
    }

    #[getter]
    fn filled_count(&self) -> usize {
        self.engine.filled_count()
    }

    #[getter]
    fn cursor(&self) -> usize {
        self.engine.cursor()
    }

    /// Mask with entered digits written in.
    fn display_text(&self) -> String {
        self.engine.display_text()
    }

    fn __repr__(&self) -> String {
        format!("CardNumberEngine({:?})", self.engine.display_text())
    }
}
