//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WnramArgs};
use crate::error::Result;
use crate::parser::VerbFrame;
use crate::pos::PartOfSpeech;
use crate::wordnet::WordNetStats;

/// Result structure for a word lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub query: String,
    pub senses: Vec<SenseInfo>,
}

/// One synset matched by a lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SenseInfo {
    pub offset: String,
    pub pos: PartOfSpeech,
    pub satellite: bool,
    pub lemma: String,
    pub synonyms: Vec<String>,
    pub gloss: String,
    pub relations: Vec<RelatedInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub frames: Vec<VerbFrame>,
}

/// A word reached through one relation.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedInfo {
    pub relation: String,
    pub word: String,
    pub pos: PartOfSpeech,
    pub offset: String,
}

/// Result structure for listing synsets.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub total: usize,
    pub synsets: Vec<SynsetSummary>,
}

/// Short description of a synset.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynsetSummary {
    pub offset: String,
    pub pos: PartOfSpeech,
    pub lemma: String,
    pub gloss: String,
}

/// Result types that can render themselves for a terminal.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

impl HumanOutput for LookupResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        if self.senses.is_empty() {
            let _ = writeln!(out, "No entries for \"{}\"", self.query);
            return out;
        }
        for (i, sense) in self.senses.iter().enumerate() {
            let satellite = if sense.satellite { ", satellite" } else { "" };
            let _ = writeln!(
                out,
                "{}. {} ({}{}) [{}]",
                i + 1,
                sense.lemma,
                sense.pos,
                satellite,
                sense.offset
            );
            let _ = writeln!(out, "   Synonyms: {}", sense.synonyms.join(", "));
            let _ = writeln!(out, "   | {}", sense.gloss);
            for related in &sense.relations {
                let _ = writeln!(
                    out,
                    "   {:<28} {} ({})",
                    related.relation, related.word, related.pos
                );
            }
            if !sense.frames.is_empty() {
                let frames: Vec<String> = sense
                    .frames
                    .iter()
                    .map(|f| match f.word {
                        Some(word) => format!("{}@{}", f.frame, word + 1),
                        None => f.frame.to_string(),
                    })
                    .collect();
                let _ = writeln!(out, "   Frames: {}", frames.join(" "));
            }
        }
        out
    }
}

impl HumanOutput for ListResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for synset in &self.synsets {
            let _ = writeln!(
                out,
                "{} {:<4} {:<24} | {}",
                synset.offset, synset.pos, synset.lemma, synset.gloss
            );
        }
        if self.synsets.len() < self.total {
            let _ = writeln!(out, "... {} of {} synsets shown", self.synsets.len(), self.total);
        }
        out
    }
}

impl HumanOutput for WordNetStats {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Synsets:              {}", self.synsets);
        for (pos, count) in &self.synsets_by_pos {
            let _ = writeln!(out, "  {:<19} {}", pos.to_string(), count);
        }
        let _ = writeln!(out, "Satellites:           {}", self.satellites);
        let _ = writeln!(out, "Words:                {}", self.words);
        let _ = writeln!(out, "Lemmas:               {}", self.lemmas);
        let _ = writeln!(out, "Semantic relations:   {}", self.semantic_relations);
        let _ = writeln!(out, "Syntactic relations:  {}", self.syntactic_relations);
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &WnramArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            print!("{}", result.to_human());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WnramArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
