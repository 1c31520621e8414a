use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

/// Godta både str og dict/objekt; alt annet serialiseres med json.dumps.
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))
}

/// Returnér som Python-objekt (dict) via json.loads (unngår pyo3 serde-feature)
fn json_to_py(py: Python<'_>, out: &str) -> PyResult<PyObject> {
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out,))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
fn compile_page_json(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, payload)?;
    let out = crate::api::compile_page_json(&json_in).map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

#[pyfunction]
fn compile_html_json(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, payload)?;
    let out = crate::api::compile_html_json(&json_in).map_err(PyValueError::new_err)?;
    json_to_py(py, &out)
}

#[pyfunction]
fn classify_step(text: &str) -> PyResult<String> {
    let step = crate::classify(text, crate::StepPosition::Middle)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    serde_json::to_string(&step).map_err(|e| PyValueError::new_err(e.to_string()))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn zwoforge_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compile_page_json, m)?)?;
    m.add_function(wrap_pyfunction!(compile_html_json, m)?)?;
    m.add_function(wrap_pyfunction!(classify_step, m)?)?;
    Ok(())
}
