// core/src/fetch.rs
use std::path::Path;
use std::time::Duration;

use log::info;
use ureq::Agent;

use crate::error::CompileError;

/// Kilde for rå HTML (prod: HttpPageSource, test: StaticPageSource)
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, CompileError>;
}

/// Enkel blocking-klient (ureq)
pub struct HttpPageSource {
    agent: Agent,
}

impl HttpPageSource {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self { agent }
    }
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<String, CompileError> {
        let fetch_err = |message: String| CompileError::Fetch { target: url.to_string(), message };

        let resp = self.agent.get(url).call().map_err(|e| fetch_err(e.to_string()))?;
        let body = resp.into_string().map_err(|e| fetch_err(e.to_string()))?;
        info!("fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

/// Fast innhold, uavhengig av URL.
pub struct StaticPageSource {
    pub html: String,
}

impl PageSource for StaticPageSource {
    fn fetch(&self, _url: &str) -> Result<String, CompileError> {
        Ok(self.html.clone())
    }
}

/// "Fil eller URL": finnes stien lokalt leses den, ellers hentes den.
pub fn load_page(target: &str, source: &dyn PageSource) -> Result<String, CompileError> {
    let path = Path::new(target);
    if path.is_file() {
        let html = std::fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
        info!("read {} ({} bytes)", path.display(), html.len());
        Ok(html)
    } else {
        source.fetch(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_source() {
        let src = StaticPageSource { html: "<html></html>".into() };
        let html = load_page("https://example.invalid/workouts/x", &src).unwrap();
        assert_eq!(html, "<html></html>");
    }
}
