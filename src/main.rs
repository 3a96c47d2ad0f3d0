// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};
use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bible_ranges::{DocId, QueryRanges, RangeScorer, ScoringConfig};

mod cli;
use cli::display::{self, pad_left, pad_right, proximity_label, score_value};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Score {
            query,
            docs,
            config,
            limit,
        } => run_score(&query, &docs, config.as_deref(), limit),
        Commands::Inspect { field, config } => run_inspect(&field, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<ScoringConfig> {
    match path {
        Some(path) => {
            let config = ScoringConfig::load(path)?;
            info!(path, field = %config.field, unit = ?config.distance_unit, "loaded config");
            Ok(config)
        }
        None => Ok(ScoringConfig::default()),
    }
}

/// Split a JSON document array into ids and their stored range fields.
fn read_documents(raw: &str, field: &str) -> Result<(Vec<DocId>, HashMap<DocId, String>)> {
    let docs: Vec<serde_json::Map<String, Value>> =
        serde_json::from_str(raw).context("documents must be a JSON array of objects")?;

    let mut ids = Vec::with_capacity(docs.len());
    let mut fields = HashMap::with_capacity(docs.len());
    let mut seen = HashSet::with_capacity(docs.len());

    for (pos, doc) in docs.iter().enumerate() {
        let id = doc
            .get("id")
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok())
            .map(DocId)
            .with_context(|| format!("document #{} has no u32 \"id\"", pos))?;

        if !seen.insert(id) {
            bail!("duplicate document id {}", id);
        }
        ids.push(id);

        match doc.get(field) {
            None | Some(Value::Null) => {}
            Some(Value::String(text)) => {
                fields.insert(id, text.clone());
            }
            Some(other) => bail!("document {}: \"{}\" must be a string, got {}", id, field, other),
        }
    }

    debug!(docs = ids.len(), with_field = fields.len(), "read documents");
    Ok((ids, fields))
}

fn run_score(query: &str, docs_path: &str, config: Option<&str>, limit: usize) -> Result<()> {
    let config = load_config(config)?;
    let codec = config.validate()?;

    let query_ranges = codec.decode(query).context("invalid query")?;
    let query_ranges = QueryRanges::new(query_ranges).context("invalid query")?;

    let raw = fs::read_to_string(docs_path).with_context(|| format!("cannot read {}", docs_path))?;
    let (ids, fields) = read_documents(&raw, &config.field)?;

    let scorer = RangeScorer::with_codec(&query_ranges, &fields, codec, config.distance_unit);
    let ranked = scorer.rank(&ids, limit)?;

    display::heading(&format!("{} of {} documents", ranked.len(), ids.len()));
    println!(
        "{} {}   {}",
        pad_left("doc", 10),
        pad_left("score", 12),
        pad_right("proximity", 24)
    );
    for hit in &ranked {
        println!(
            "{} {}   {}",
            pad_left(&hit.doc.to_string(), 10),
            pad_left(&score_value(hit.score), 12),
            pad_right(&proximity_label(hit.proximity), 24)
        );
    }
    Ok(())
}

fn run_inspect(field: &str, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let codec = config.validate()?;
    let ranges = codec.decode(field)?;

    display::heading(&format!("{} ranges", ranges.len()));
    for (i, range) in ranges.iter().enumerate() {
        println!(
            "{} {}{}{}   {} .. {}",
            pad_left(&i.to_string(), 3),
            range.start(),
            codec.bound_separator(),
            range.end(),
            range.start().human(),
            range.end().human()
        );
    }
    println!("{}", codec.encode(&ranges));
    Ok(())
}
