// core/src/page.rs
//! Uttrekk av steg og titler fra en økt-side.
//!
//! Bygget på html5ever-tokenizeren (samme parser som scraper bruker), som
//! gir linjenummer for hvert token og dekoder entiteter. Stegene er direkte
//! `div`-barn av en `div` med klasse som inneholder `workoutlist`; posisjonen
//! er linjen tokenizeren rapporterer for barnets start-tag. Titler er `h4`
//! med klasse som inneholder `flaticon-bike`.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::RawStep;

const STEP_LIST_CLASS: &str = "workoutlist";
const TITLE_CLASS: &str = "flaticon-bike";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedPage {
    pub steps: Vec<RawStep>,
    pub titles: Vec<String>,
}

fn has_class(tag: &Tag, needle: &str) -> bool {
    tag.attrs
        .iter()
        .any(|a| &*a.name.local == "class" && a.value.contains(needle))
}

/// Slå sammen whitespace (inkl. &nbsp;) til enkle mellomrom.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct OpenStep {
    line: u32,
    text: String,
}

#[derive(Default)]
struct PageSink {
    page: ScrapedPage,
    div_depth: usize,
    list_depth: Option<usize>, // dybde til workoutlist-diven
    open_step: Option<OpenStep>,
    open_title: Option<String>,
    in_raw_text: bool, // inne i script/style
}

impl PageSink {
    fn start_tag(&mut self, tag: &Tag, line: u32) -> TokenSinkResult<()> {
        match &*tag.name {
            "div" => {
                self.div_depth += 1;
                match self.list_depth {
                    Some(d) if self.div_depth == d + 1 && self.open_step.is_none() => {
                        self.open_step = Some(OpenStep { line, text: String::new() });
                    }
                    None if has_class(tag, STEP_LIST_CLASS) => {
                        self.list_depth = Some(self.div_depth);
                    }
                    _ => {}
                }
            }
            "h4" if has_class(tag, TITLE_CLASS) => {
                self.open_title = Some(String::new());
            }
            // Innholdet er rå tekst, ikke markup
            "script" => {
                self.in_raw_text = true;
                return TokenSinkResult::RawData(RawKind::ScriptData);
            }
            "style" => {
                self.in_raw_text = true;
                return TokenSinkResult::RawData(RawKind::Rawtext);
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }

    fn end_tag(&mut self, tag: &Tag) {
        match &*tag.name {
            "div" => {
                if matches!(self.list_depth, Some(d) if self.div_depth == d + 1) {
                    if let Some(step) = self.open_step.take() {
                        let text = collapse(&step.text);
                        debug!("step at line {}: {:?}", step.line, text);
                        self.page.steps.push(RawStep::new(text, step.line));
                    }
                }
                if self.list_depth == Some(self.div_depth) {
                    self.list_depth = None;
                }
                self.div_depth = self.div_depth.saturating_sub(1);
            }
            "h4" => {
                if let Some(title) = self.open_title.take() {
                    self.page.titles.push(collapse(&title));
                }
            }
            "script" | "style" => self.in_raw_text = false,
            _ => {}
        }
    }

    fn characters(&mut self, text: &str) {
        if self.in_raw_text {
            return;
        }
        if let Some(step) = self.open_step.as_mut() {
            step.text.push_str(text);
        }
        if let Some(title) = self.open_title.as_mut() {
            title.push_str(text);
        }
    }
}

impl TokenSink for PageSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        let line = u32::try_from(line_number).unwrap_or(u32::MAX);
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(&tag, line),
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) => self.characters(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Hent steg (med kildelinje) og titler i dokumentrekkefølge.
pub fn extract_page(html: &str) -> ScrapedPage {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(PageSink::default(), TokenizerOpts::default());
    // Sinken ber aldri om Script-pause, så ett feed tømmer køen
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.page
}
