//! Checksum and sample bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::issuers::{CardNetwork, IssuerCatalog};
use crate::samples::SampleGenerator;
use crate::validation;

/// Validate a complete card number with the Luhn checksum.
#[pyfunction]
pub fn luhn_check(number: &str) -> bool {
    validation::luhn_check(number)
}

/// Check digit completing a payload, or None for non-digit input.
#[pyfunction]
pub fn luhn_check_digit(payload: &str) -> Option<u8> {
    validation::luhn_check_digit(payload)
}

/// Network display name for a whole number, empty when unrecognised.
#[pyfunction]
pub fn classify(number: &str) -> &'static str {
    IssuerCatalog::standard().classify(number).name()
}

/// Python wrapper for SampleGenerator.
#[pyclass(name = "SampleGenerator")]
pub struct PySampleGenerator {
    inner: SampleGenerator<'static>,
}

#[pymethods]
impl PySampleGenerator {
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            inner: SampleGenerator::new(seed),
        }
    }

    /// Generate a Luhn-valid number for a network display name
    /// (e.g. "Visa", "American Express").
    ///
    /// Returns None for networks that entry never recognises.
    fn generate(&mut self, network_name: &str) -> PyResult<Option<String>> {
        let network = CardNetwork::ALL
            .into_iter()
            .find(|n| n.is_identified() && n.name() == network_name)
            .ok_or_else(|| {
                PyValueError::new_err(format!("unknown card network: {network_name}"))
            })?;
        Ok(self.inner.generate(network))
    }
}
