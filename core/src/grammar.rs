// core/src/grammar.rs
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::models::{ParsedStep, RampLabel, StepPosition};
use crate::normalize::{normalize_duration, normalize_power};

// ──────────────────────────────────────────────────────────────────────────────
// Grammatikker. Rekkefølgen er prioritet: første match vinner.
// Alle forankres i starten av teksten, men ikke i slutten.
// ──────────────────────────────────────────────────────────────────────────────

const RAMP_PATTERN: &str = concat!(
    r"^(?:(?P<hrs>[0-9]+)hr )?(?:(?P<mins>[0-9]+)min )?(?:(?P<secs>[0-9]+)sec )?",
    r"(?:@ (?P<cadence>[0-9]+)rpm, )?from (?P<low>[0-9]+) to (?P<high>[0-9]+)% FTP",
);

const STEADY_PATTERN: &str = concat!(
    r"^(?:(?P<hrs>[0-9]+)hr )?(?:(?P<mins>[0-9]+)min )?(?:(?P<secs>[0-9]+)sec )?",
    r"@ (?:(?P<cadence>[0-9]+)rpm, )?(?P<power>[0-9]+)% FTP",
);

const INTERVALS_PATTERN: &str = concat!(
    r"^(?P<reps>[0-9]+)x (?:(?P<on_hrs>[0-9]+)hr )?(?:(?P<on_mins>[0-9]+)min )?(?:(?P<on_secs>[0-9]+)sec )?",
    r"@ (?:(?P<on_cadence>[0-9]+)rpm, )?(?P<on_power>[0-9]+)% FTP,",
    r"(?:(?P<off_hrs>[0-9]+)hr )?(?:(?P<off_mins>[0-9]+)min )?(?:(?P<off_secs>[0-9]+)sec )?",
    r"@ (?:(?P<off_cadence>[0-9]+)rpm, )?(?P<off_power>[0-9]+)% FTP",
);

const FREE_RIDE_PATTERN: &str =
    r"^(?:(?P<hrs>[0-9]+)hr )?(?:(?P<mins>[0-9]+)min )?(?:(?P<secs>[0-9]+)sec )?free ride";

/// Hvilke timer som brukes for pause-varigheten i intervaller.
///
/// Kildeverktøyet regner pausen med *on*-timene (`Source`). `Corrected`
/// bruker pause-timene. Standard er kildens oppførsel inntil det er avklart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalOffHours {
    #[default]
    Source,
    Corrected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyOptions {
    pub off_hours: IntervalOffHours,
}

type BuildFn = fn(&Captures, StepPosition, &ClassifyOptions) -> Result<ParsedStep, String>;

struct Grammar {
    name: &'static str,
    regex: Regex,
    build: BuildFn,
}

static GRAMMARS: Lazy<Vec<Grammar>> = Lazy::new(|| {
    let table: [(&'static str, &'static str, BuildFn); 4] = [
        ("ramp", RAMP_PATTERN, build_ramp),
        ("steady_state", STEADY_PATTERN, build_steady),
        ("intervals", INTERVALS_PATTERN, build_intervals),
        ("free_ride", FREE_RIDE_PATTERN, build_free_ride),
    ];
    table
        .into_iter()
        .filter_map(|(name, pattern, build)| match Regex::new(pattern) {
            Ok(regex) => Some(Grammar { name, regex, build }),
            Err(e) => {
                // Hardkodede mønstre, skal aldri skje
                error!("grammar {name} failed to compile: {e}");
                None
            }
        })
        .collect()
});

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

/// Valgfri numerisk capture. Fraværende gruppe → None (ikke 0).
fn opt_num(caps: &Captures, name: &str) -> Result<Option<u32>, String> {
    match caps.name(name) {
        None => Ok(None),
        Some(m) => m
            .as_str()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| format!("capture `{name}` ({}) out of range: {e}", m.as_str())),
    }
}

fn req_num(caps: &Captures, name: &str) -> Result<u32, String> {
    opt_num(caps, name)?.ok_or_else(|| format!("missing capture `{name}`"))
}

fn duration(caps: &Captures, hrs: &str, mins: &str, secs: &str) -> Result<u32, String> {
    Ok(normalize_duration(
        opt_num(caps, hrs)?,
        opt_num(caps, mins)?,
        opt_num(caps, secs)?,
    ))
}

// ──────────────────────────────────────────────────────────────────────────────
// BYGGERE (capture → ParsedStep)
// ──────────────────────────────────────────────────────────────────────────────

fn build_ramp(caps: &Captures, pos: StepPosition, _opts: &ClassifyOptions) -> Result<ParsedStep, String> {
    Ok(ParsedStep::Ramp {
        duration_s: duration(caps, "hrs", "mins", "secs")?,
        power_low: normalize_power(req_num(caps, "low")?),
        power_high: normalize_power(req_num(caps, "high")?),
        cadence: opt_num(caps, "cadence")?,
        label: RampLabel::for_position(pos),
    })
}

fn build_steady(caps: &Captures, _pos: StepPosition, _opts: &ClassifyOptions) -> Result<ParsedStep, String> {
    Ok(ParsedStep::SteadyState {
        duration_s: duration(caps, "hrs", "mins", "secs")?,
        power: normalize_power(req_num(caps, "power")?),
        cadence: opt_num(caps, "cadence")?,
    })
}

fn build_intervals(caps: &Captures, _pos: StepPosition, opts: &ClassifyOptions) -> Result<ParsedStep, String> {
    let repeat = req_num(caps, "reps")?;
    if repeat == 0 {
        return Err("repeat count must be at least 1".to_string());
    }

    let on_duration_s = duration(caps, "on_hrs", "on_mins", "on_secs")?;
    let off_hrs = match opts.off_hours {
        IntervalOffHours::Source => "on_hrs",
        IntervalOffHours::Corrected => "off_hrs",
    };
    let off_duration_s = duration(caps, off_hrs, "off_mins", "off_secs")?;

    // Kadens tas bare med når begge er oppgitt
    let (on_cadence, off_cadence) = match (opt_num(caps, "on_cadence")?, opt_num(caps, "off_cadence")?) {
        (Some(on), Some(off)) => (Some(on), Some(off)),
        _ => (None, None),
    };

    Ok(ParsedStep::Intervals {
        repeat,
        on_duration_s,
        off_duration_s,
        on_power: normalize_power(req_num(caps, "on_power")?),
        off_power: normalize_power(req_num(caps, "off_power")?),
        on_cadence,
        off_cadence,
    })
}

fn build_free_ride(caps: &Captures, _pos: StepPosition, _opts: &ClassifyOptions) -> Result<ParsedStep, String> {
    Ok(ParsedStep::FreeRide {
        duration_s: duration(caps, "hrs", "mins", "secs")?,
    })
}

// ──────────────────────────────────────────────────────────────────────────────
// OFFENTLIG API
// ──────────────────────────────────────────────────────────────────────────────

/// Klassifiser én stegtekst med standardvalg (kildens pause-timer).
pub fn classify(raw_text: &str, position: StepPosition) -> Result<ParsedStep, ParseError> {
    classify_with(raw_text, position, &ClassifyOptions::default())
}

/// Prøver grammatikkene i fast rekkefølge; første strukturelle match avgjør.
/// Tall som ikke passer i u32 (eller 0 repetisjoner) gir ParseError for den
/// matchende grammatikken, uten å prøve de neste.
pub fn classify_with(
    raw_text: &str,
    position: StepPosition,
    options: &ClassifyOptions,
) -> Result<ParsedStep, ParseError> {
    for grammar in GRAMMARS.iter() {
        let Some(caps) = grammar.regex.captures(raw_text) else {
            continue;
        };
        return match (grammar.build)(&caps, position, options) {
            Ok(step) => {
                debug!("classified {:?} as {} ({:?})", raw_text, grammar.name, position);
                Ok(step)
            }
            Err(reason) => Err(ParseError {
                raw_text: raw_text.to_string(),
                reason: format!("{} grammar: {reason}", grammar.name),
            }),
        };
    }
    Err(ParseError::no_grammar(raw_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grammars_compile() {
        let names: Vec<_> = GRAMMARS.iter().map(|g| g.name).collect();
        assert_eq!(names, ["ramp", "steady_state", "intervals", "free_ride"]);
    }

    #[test]
    fn absent_cadence_is_not_zero() {
        let caps = GRAMMARS[1].regex.captures("10min @ 65% FTP").unwrap();
        assert_eq!(opt_num(&caps, "cadence").unwrap(), None);
        let caps = GRAMMARS[1].regex.captures("10min @ 0rpm, 65% FTP").unwrap();
        assert_eq!(opt_num(&caps, "cadence").unwrap(), Some(0));
    }

    #[test]
    fn overflowing_number_is_parse_error() {
        let err = classify("99999999999min @ 65% FTP", StepPosition::Middle).unwrap_err();
        assert!(err.reason.starts_with("steady_state grammar"), "{}", err.reason);
    }

    #[test]
    fn only_ascii_digits_count() {
        // Arabisk-indiske sifre er Unicode-\d, men ikke tall her
        for text in ["\u{661}\u{660}min free ride", "10min @ \u{666}\u{665}% FTP"] {
            let err = classify(text, StepPosition::Middle).unwrap_err();
            assert_eq!(err, ParseError::no_grammar(text));
        }
    }
}
