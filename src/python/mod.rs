//! Python bindings for the card number engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_cardnum as cn
//!
//! engine = cn.CardNumberEngine()
//! result = engine.insert_str("4111 1111 1111 1111")
//! assert result.network_name == "Visa"
//! assert result.validity == "correct"
//!
//! engine.delete_last_digit()
//! print(engine.display_text())  # 4111 1111 1111 111X
//! ```

use pyo3::prelude::*;

mod py_engine;
mod py_validation;

pub use py_engine::*;
pub use py_validation::*;

/// rust-cardnum: incremental card number recognition.
#[pymodule]
fn rust_cardnum(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardNumberEngine>()?;
    m.add_class::<PyEngineResult>()?;
    m.add_class::<PySampleGenerator>()?;

    m.add_function(wrap_pyfunction!(luhn_check, m)?)?;
    m.add_function(wrap_pyfunction!(luhn_check_digit, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;

    Ok(())
}
