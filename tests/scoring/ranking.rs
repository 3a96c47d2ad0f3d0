//! Batch ranking tests.

use std::collections::HashMap;

use bible_ranges::{DocId, Proximity, RangeScorer, ScoringConfig, BEST_SCORE, NOT_RELEVANT};

use crate::common::{query_of, range};

/// Commentaries on the Sermon on the Mount and its neighbours.
fn corpus() -> HashMap<DocId, String> {
    [
        (10, "40005001-40007029"),          // Matthew 5-7
        (11, "40008001-40008004"),          // Matthew 8:1-4
        (12, "42006017-42006049"),          // Luke 6:17-49
        (13, ""),                           // annotated, no ranges
        (14, "40004023-40004025,01001001-01001031"), // Matthew 4:23-25 + Genesis 1
        (15, "40012001-40012008"),          // Matthew 12:1-8
    ]
    .into_iter()
    .map(|(id, field)| (DocId(id), field.to_string()))
    .collect()
}

#[test]
fn sermon_on_the_mount_ranking() {
    // Query: Matthew 5:1-12 (the Beatitudes)
    let query = query_of(&[range((40, 5, 1), (40, 5, 12))]);
    let fields = corpus();
    let scorer = RangeScorer::new(&query, &fields, &ScoringConfig::default()).unwrap();

    let docs: Vec<DocId> = (10..=16).map(DocId).collect();
    let ranked = scorer.rank(&docs, 10).unwrap();
    let order: Vec<u32> = ranked.iter().map(|hit| hit.doc.get()).collect();

    // 10 overlaps; 14 ends at 4:25 (1 chapter before); 11 starts 8:1 (3 chapters
    // after 5:12); 15 is 7 chapters after; 12 is another book; 13 and 16 have nothing.
    assert_eq!(order, vec![10, 14, 11, 15, 12, 13, 16]);
    assert_eq!(ranked[0].score, BEST_SCORE);
    assert_eq!(ranked[1].proximity.and_then(Proximity::distance), Some(1));
    assert_eq!(ranked[2].proximity.and_then(Proximity::distance), Some(3));
    assert_eq!(ranked[5].score, NOT_RELEVANT);
    assert_eq!(ranked[6].proximity, None);
}

#[test]
fn rank_respects_limit() {
    let query = query_of(&[range((40, 5, 1), (40, 5, 12))]);
    let fields = corpus();
    let scorer = RangeScorer::new(&query, &fields, &ScoringConfig::default()).unwrap();

    let docs: Vec<DocId> = fields.keys().copied().collect();
    let top = scorer.rank(&docs, 2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].doc, DocId(10));
    assert_eq!(top[1].doc, DocId(14));
}

#[test]
fn one_corrupt_document_fails_the_batch() {
    let query = query_of(&[range((40, 5, 1), (40, 5, 12))]);
    let mut fields = corpus();
    fields.insert(DocId(99), "40005001-4000".to_string());
    let scorer = RangeScorer::new(&query, &fields, &ScoringConfig::default()).unwrap();

    let docs: Vec<DocId> = fields.keys().copied().collect();
    let err = scorer.rank(&docs, 10).unwrap_err();
    assert_eq!(err.doc(), DocId(99));
}
