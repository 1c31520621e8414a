// core/src/zwo.rs
//! Rendering av WorkoutDocument til .zwo (XML), samt filnavn.
//!
//! Utdata er deterministisk: fast attributtrekkefølge per stegtype, fire
//! mellomrom per nivå og avsluttende linjeskift. Samme dokument gir alltid
//! byte-identisk tekst.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{ParsedStep, WorkoutDocument};

const INDENT: &str = "    ";

// ──────────────────────────────────────────────────────────────────────────────
// Enkelt elementtre
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn new(name: &'static str) -> Self {
        Self { name, attrs: Vec::new(), text: None, children: Vec::new() }
    }

    fn text(name: &'static str, text: &str) -> Self {
        Self { text: Some(text.to_string()), ..Self::new(name) }
    }

    fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    fn attr_opt(self, key: &'static str, value: Option<u32>) -> Self {
        match value {
            Some(v) => self.attr(key, v.to_string()),
            None => self,
        }
    }

    fn render(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(self.name);
        for (k, v) in &self.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            out.push_str(&escape(v, true));
            out.push('"');
        }

        match (&self.text, self.children.is_empty()) {
            (Some(t), true) => {
                out.push('>');
                out.push_str(&escape(t, false));
                out.push_str("</");
                out.push_str(self.name);
                out.push_str(">\n");
            }
            (None, true) => out.push_str("/>\n"),
            (_, false) => {
                out.push_str(">\n");
                for child in &self.children {
                    child.render(depth + 1, out);
                }
                for _ in 0..depth {
                    out.push_str(INDENT);
                }
                out.push_str("</");
                out.push_str(self.name);
                out.push_str(">\n");
            }
        }
    }
}

/// Tegn som er lovlige i XML 1.0 (`Char`-produksjonen).
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escaping for tekst og attributter. Ulovlige tegn fjernes; linjeskift og
/// tab i attributter skrives som tegnreferanser så de overlever
/// attributt-normaliseringen.
fn escape(s: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            '"' if in_attr => out.push_str("&quot;"),
            '\n' if in_attr => out.push_str("&#10;"),
            '\t' if in_attr => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

/// Effektbrøk som desimaltall: 0.5 → "0.5", 1.0 → "1.0".
pub fn format_power(power: f64) -> String {
    if power.is_finite() && power.fract() == 0.0 {
        format!("{power:.1}")
    } else {
        format!("{power}")
    }
}

fn step_element(step: &ParsedStep) -> Element {
    match step {
        ParsedStep::Ramp { duration_s, power_low, power_high, cadence, label } => {
            Element::new(label.element_name())
                .attr("Duration", duration_s.to_string())
                .attr("PowerLow", format_power(*power_low))
                .attr("PowerHigh", format_power(*power_high))
                .attr("pace", "0")
                .attr_opt("Cadence", *cadence)
        }
        ParsedStep::SteadyState { duration_s, power, cadence } => Element::new("SteadyState")
            .attr("Duration", duration_s.to_string())
            .attr("Power", format_power(*power))
            .attr("pace", "0")
            .attr_opt("Cadence", *cadence),
        ParsedStep::Intervals {
            repeat,
            on_duration_s,
            off_duration_s,
            on_power,
            off_power,
            on_cadence,
            off_cadence,
        } => {
            let el = Element::new("IntervalsT")
                .attr("Repeat", repeat.to_string())
                .attr("OnDuration", on_duration_s.to_string())
                .attr("OffDuration", off_duration_s.to_string())
                .attr("OnPower", format_power(*on_power))
                .attr("OffPower", format_power(*off_power))
                .attr("pace", "0");
            match (on_cadence, off_cadence) {
                (Some(on), Some(off)) => el
                    .attr("Cadence", on.to_string())
                    .attr("CadenceResting", off.to_string()),
                _ => el,
            }
        }
        ParsedStep::FreeRide { duration_s } => Element::new("FreeRide")
            .attr("Duration", duration_s.to_string())
            .attr("FlatRoad", "0"),
    }
}

/// Render dokumentet til .zwo-tekst.
pub fn serialize(doc: &WorkoutDocument) -> String {
    let mut root = Element::new("workout_file");
    root.children.push(Element::text("author", &doc.author));
    root.children.push(Element::text("name", &doc.name));
    root.children.push(Element::text("description", &doc.description));
    root.children.push(Element::text("sportType", &doc.sport_type));

    let mut tags = Element::new("tags");
    for tag in &doc.tags {
        tags.children.push(Element::new("tag").attr("name", tag.as_str()));
    }
    root.children.push(tags);

    let mut workout = Element::new("workout");
    workout.children.extend(doc.steps.iter().map(step_element));
    root.children.push(workout);

    let mut out = String::new();
    root.render(0, &mut out);
    out
}

// ──────────────────────────────────────────────────────────────────────────────
// Filnavn
// ──────────────────────────────────────────────────────────────────────────────

/// Hvordan filnavn nummereres når én side gir flere økter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Numbering {
    /// "<tittel>.zwo"
    #[default]
    None,
    /// "<n> <tittel>.zwo", n fra 1
    Ordinal,
    /// "training <n> <tittel>.zwo", n fra 0 (som GUI-verktøyet)
    Training,
}

/// Tittel → filnavn. Skilletegn for stier byttes med `_`.
pub fn file_name(title: &str, ordinal: Option<usize>) -> String {
    let clean = sanitize_title(title);
    match ordinal {
        Some(n) => format!("{n} {clean}.zwo"),
        None => format!("{clean}.zwo"),
    }
}

/// Filnavn for gruppe `index` (0-basert) etter valgt nummerering.
pub fn numbered_file_name(title: &str, index: usize, numbering: Numbering) -> String {
    match numbering {
        Numbering::None => file_name(title, None),
        Numbering::Ordinal => file_name(title, Some(index + 1)),
        Numbering::Training => format!("training {}", file_name(title, Some(index))),
    }
}

fn sanitize_title(title: &str) -> String {
    title.trim().replace(['/', '\\'], "_")
}
