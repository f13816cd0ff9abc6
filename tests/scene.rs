use std::path::PathBuf;

use skewbox::{intersects, BoundingBox, GeometryError, Parallelepiped, Scene, Vector3d};

fn data_path(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    PathBuf::from(manifest_dir).join("tests").join("data").join(name)
}

#[test]
fn test_import_and_pairs() {
    let mut scene = Scene::new();
    let added = scene.import_solids(data_path("scene.txt")).expect("Failed to import solids");
    assert_eq!(added, 5);
    assert_eq!(scene.len(), 5);

    assert_eq!(scene.get(2).unwrap().top.a, Vector3d::new(0.5, 0.0, 0.0));
    assert_eq!(scene.get(4).unwrap().bottom.c, Vector3d::new(6.0, 6.0, 7.0));

    assert_eq!(scene.intersecting_pairs(), vec![(0, 1), (0, 2), (1, 2), (3, 4)]);
}

#[test]
fn test_import_missing_file() {
    let mut scene = Scene::new();
    match scene.import_solids(data_path("does_not_exist.txt")) {
        Err(GeometryError::Io(_)) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_batch_matches_pairwise() {
    let bounds = BoundingBox::new([0.0, 0.0, 0.0], [30.0, 30.0, 30.0]);
    let mut scene = Scene::new();
    scene.random_solids_with_seed(60, bounds, 6.0, 11).unwrap();
    assert_eq!(scene.len(), 60);

    let pairs = scene.intersecting_pairs();
    let solids = scene.solids();
    let mut expected = Vec::new();
    for i in 0..solids.len() {
        for j in (i + 1)..solids.len() {
            if intersects(&solids[i], &solids[j]) {
                expected.push((i, j));
            }
        }
    }
    assert_eq!(pairs, expected);

    let probe = solids[0];
    let hits = scene.intersecting(&probe);
    assert!(hits.contains(&0));
    let expected_hits: Vec<usize> = (0..solids.len())
        .filter(|&i| intersects(&probe, &solids[i]))
        .collect();
    assert_eq!(hits, expected_hits);
}

#[test]
fn test_map_vertices() {
    let mut scene = Scene::new();
    let v = Vector3d::new;
    scene.add(Parallelepiped::new(v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0), v(3.0, 1.0, 0.0), v(0.0, 0.0, 5.0)));
    scene.add(Parallelepiped::new(v(1.0, 1.0, 1.0), v(2.0, 1.0, 1.0), v(2.0, 1.0, 2.0), v(1.0, 2.0, 1.0)));

    let boxes = scene.map(|s| s.bounding_box());
    assert_eq!(boxes[0], BoundingBox::new([0.0, 0.0, 0.0], [3.0, 1.0, 5.0]));
    assert_eq!(boxes[1], BoundingBox::new([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]));
}
