use cosim_store::{ExactMirror, MirroredStore, VectorStore};
use pretty_assertions::assert_eq;

fn reference_corpus() -> (Vec<Vec<f32>>, Vec<String>) {
    (
        vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 3.0, 4.0],
            vec![1.0, 1.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ],
        vec![
            "doc1".to_string(),
            "doc2".to_string(),
            "doc3".to_string(),
            "doc4".to_string(),
        ],
    )
}

#[tokio::test]
async fn core_and_exact_mirror_agree_on_ranking() {
    let (vectors, labels) = reference_corpus();
    let mut mirrored =
        MirroredStore::with_mirror(VectorStore::new(3), Box::new(ExactMirror::new(3)));
    mirrored.append(vectors, labels).await.unwrap();

    let query = [1.0, 2.0, 2.0];
    let core = mirrored.search(&query, 3).unwrap();
    let mirror = mirrored.search_mirror(&query, 3).await.unwrap();

    let core_labels: Vec<&str> = core.iter().map(|r| r.label.as_str()).collect();
    let mirror_labels: Vec<&str> = mirror.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(core_labels, mirror_labels);
    assert_eq!(core_labels, vec!["doc2", "doc1", "doc3"]);

    for (core_hit, mirror_hit) in core.iter().zip(mirror.iter()) {
        assert!((core_hit.score - mirror_hit.score).abs() < 1e-6);
    }
}

#[tokio::test]
async fn closing_the_mirror_detaches_it_but_keeps_core_searchable() {
    let (vectors, labels) = reference_corpus();
    let mut mirrored =
        MirroredStore::with_mirror(VectorStore::new(3), Box::new(ExactMirror::new(3)));
    mirrored.append(vectors, labels).await.unwrap();

    mirrored.close().await.unwrap();

    assert!(mirrored.search_mirror(&[1.0, 2.0, 2.0], 3).await.is_err());
    let core = mirrored.search(&[1.0, 2.0, 2.0], 3).unwrap();
    assert_eq!(core.len(), 3);
}

#[tokio::test]
async fn appends_after_close_still_reach_the_core() {
    let mut mirrored =
        MirroredStore::with_mirror(VectorStore::new(2), Box::new(ExactMirror::new(2)));
    mirrored.close().await.unwrap();

    mirrored
        .append(vec![vec![1.0, 0.0]], vec!["late".to_string()])
        .await
        .unwrap();
    assert_eq!(mirrored.store().len(), 1);
}
