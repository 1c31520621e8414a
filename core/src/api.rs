// core/src/api.rs
//! JSON-inngang til kompilatoren (brukes av Python-bindingen og CLI-tester).

use serde::Deserialize;
use serde_json::{json, Value};
use serde_path_to_error as spte;

use crate::config::CompileConfig;
use crate::models::RawStep;
use crate::page::extract_page;
use crate::pipeline::{compile_page, CompiledPage};

// ──────────────────────────────────────────────────────────────────────────────
// INPUT-REPR (untagged): PRØV OBJECT FØRST, SÅ PAR [text, posisjon]
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct StepObject {
    text: String,
    #[serde(alias = "sourceline", alias = "line")]
    source_position: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StepIn {
    Object(StepObject),
    Pair(String, u32),
}

impl From<StepIn> for RawStep {
    fn from(s: StepIn) -> Self {
        match s {
            StepIn::Object(o) => RawStep::new(o.text, o.source_position),
            StepIn::Pair(text, pos) => RawStep::new(text, pos),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompileIn {
    steps: Vec<StepIn>,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    config: Option<CompileConfig>,
}

#[derive(Debug, Deserialize)]
struct CompileHtmlIn {
    html: String,
    #[serde(default)]
    config: Option<CompileConfig>,
}

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

fn page_to_json(page: &CompiledPage) -> Value {
    let workouts: Vec<Value> = page
        .workouts
        .iter()
        .map(|w| {
            json!({
                "index": w.index,
                "title": w.title,
                "file_name": w.file_name,
                "steps": w.document.steps.len(),
                "duration_s": w.document.total_duration_s(),
                "xml": w.xml,
            })
        })
        .collect();
    let failures: Vec<Value> = page
        .failures
        .iter()
        .map(|f| {
            json!({
                "group": f.index,
                "raw_text": f.error.raw_text,
                "reason": f.error.reason,
            })
        })
        .collect();
    json!({ "workouts": workouts, "failures": failures })
}

fn parse<'de, T: Deserialize<'de>>(json_in: &'de str, what: &str) -> Result<T, String> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| format!("parse error ({what}) at {}: {}", e.path(), e))
}

// ──────────────────────────────────────────────────────────────────────────────
// OFFENTLIG API
// ──────────────────────────────────────────────────────────────────────────────

/// `{steps, titles, config?}` → `{workouts, failures}`
pub fn compile_page_json(json_in: &str) -> Result<String, String> {
    let parsed: CompileIn = parse(json_in, "CompileIn")?;
    let cfg = parsed.config.unwrap_or_default();
    let steps: Vec<RawStep> = parsed.steps.into_iter().map(RawStep::from).collect();

    let page = compile_page(&steps, &parsed.titles, &cfg, None).map_err(|e| e.to_string())?;
    Ok(page_to_json(&page).to_string())
}

/// `{html, config?}` → `{workouts, failures}`; titler hentes fra siden.
pub fn compile_html_json(json_in: &str) -> Result<String, String> {
    let parsed: CompileHtmlIn = parse(json_in, "CompileHtmlIn")?;
    let cfg = parsed.config.unwrap_or_default();
    let scraped = extract_page(&parsed.html);

    let page = compile_page(&scraped.steps, &scraped.titles, &cfg, None).map_err(|e| e.to_string())?;
    Ok(page_to_json(&page).to_string())
}
