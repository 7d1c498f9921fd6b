//! Command implementations for the wnram CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::WordNetConfig;
use crate::error::Result;
use crate::relation::Relation;
use crate::wordnet::{Lookup, WordNet};

/// Execute a CLI command.
pub fn execute_command(args: WnramArgs) -> Result<()> {
    let wordnet = open_wordnet(&args)?;
    match &args.command {
        Command::Lookup(lookup_args) => {
            let result = lookup_word(&wordnet, lookup_args)?;
            output_result("Lookup results", &result, &args)
        }
        Command::List(list_args) => {
            let result = list_synsets(&wordnet, list_args);
            output_result("Synsets", &result, &args)
        }
        Command::Stats => output_result("Database statistics", &wordnet.stats(), &args),
    }
}

/// Load the dictionary named on the command line.
pub fn open_wordnet(args: &WnramArgs) -> Result<WordNet> {
    let config = match &args.config {
        Some(path) => WordNetConfig::load_from_file(path)?,
        None => WordNetConfig::default(),
    };

    let start = Instant::now();
    let wordnet = WordNet::open_with_config(&args.dict, &config)?;
    info!(
        "Loaded {} synsets from {} in {:?}",
        wordnet.len(),
        args.dict.display(),
        start.elapsed()
    );
    Ok(wordnet)
}

/// Look up a word and collect its senses.
pub fn lookup_word(wordnet: &WordNet, args: &LookupArgs) -> Result<LookupResult> {
    let mask = args.relation_mask();
    let senses = wordnet
        .lookup(&args.word, &args.pos)?
        .iter()
        .map(|lookup| sense_info(lookup, mask))
        .collect();
    Ok(LookupResult {
        query: args.word.clone(),
        senses,
    })
}

fn sense_info(lookup: &Lookup<'_>, mask: Relation) -> SenseInfo {
    let relations = lookup
        .relations(mask)
        .into_iter()
        .map(|(relation, target)| RelatedInfo {
            relation: relation.to_string(),
            word: target.word().to_string(),
            pos: target.pos(),
            offset: target.key().offset.clone(),
        })
        .collect();

    SenseInfo {
        offset: lookup.key().offset.clone(),
        pos: lookup.pos(),
        satellite: lookup.is_satellite(),
        lemma: lookup.lemma().to_string(),
        synonyms: lookup.synonyms().into_iter().map(str::to_string).collect(),
        gloss: lookup.gloss().to_string(),
        relations,
        frames: lookup.frames().to_vec(),
    }
}

/// List synsets in load order.
pub fn list_synsets(wordnet: &WordNet, args: &ListArgs) -> ListResult {
    let total = wordnet.iter(&args.pos).count();
    let limit = args.limit.unwrap_or(usize::MAX);
    let synsets = wordnet
        .iter(&args.pos)
        .take(limit)
        .map(|lookup| SynsetSummary {
            offset: lookup.key().offset.clone(),
            pos: lookup.pos(),
            lemma: lookup.lemma().to_string(),
            gloss: lookup.gloss().to_string(),
        })
        .collect();
    ListResult { total, synsets }
}
