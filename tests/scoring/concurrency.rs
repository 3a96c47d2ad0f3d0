//! One query, many threads.
//!
//! The query is parsed once and shared by reference; every thread scores its
//! own slice of documents. Results must match a single-threaded run exactly.

use std::thread;

use bible_ranges::{DocId, FnSource, RangeScorer, ScoringConfig};

use crate::common::{query_of, range};

fn synthetic_field(doc: DocId) -> Option<String> {
    let n = doc.get();
    if n % 7 == 0 {
        return None;
    }
    let book = n % 66 + 1;
    let chapter = n % 50 + 1;
    Some(format!("{:02}{:03}001-{:02}{:03}010", book, chapter, book, chapter))
}

#[test]
fn threads_share_one_query() {
    let query = query_of(&[range((1, 1, 1), (1, 3, 5)), range((40, 5, 1), (40, 7, 29))]);
    let source = FnSource(synthetic_field);
    let config = ScoringConfig::default();
    let docs: Vec<DocId> = (0..2_000).map(DocId).collect();

    let sequential: Vec<f64> = {
        let scorer = RangeScorer::new(&query, &source, &config).unwrap();
        docs.iter().map(|&doc| scorer.score(doc).unwrap()).collect()
    };

    let parallel: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = docs
            .chunks(250)
            .map(|chunk| {
                let (query, source, config) = (&query, &source, &config);
                scope.spawn(move || {
                    let scorer = RangeScorer::new(query, source, config).unwrap();
                    chunk.iter().map(|&doc| scorer.score(doc).unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn batch_scoring_matches_one_at_a_time() {
    let query = query_of(&[range((19, 23, 1), (19, 23, 6))]);
    let source = FnSource(synthetic_field);
    let scorer = RangeScorer::new(&query, &source, &ScoringConfig::default()).unwrap();
    let docs: Vec<DocId> = (0..1_000).map(DocId).collect();

    let batch = scorer.score_all(&docs).unwrap();
    for (hit, &doc) in batch.iter().zip(&docs) {
        assert_eq!(hit.doc, doc);
        assert_eq!(hit.score, scorer.score(doc).unwrap());
    }
}
