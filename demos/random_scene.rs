use std::time::Instant;

use skewbox::{BoundingBox, Scene};

fn main() {
    // Initialize Rayon explicitly so thread creation happens before the timed section.
    rayon::ThreadPoolBuilder::new().build_global().unwrap();

    let bounds = BoundingBox::new([0.0, 0.0, 0.0], [100.0, 100.0, 100.0]);
    let mut scene = Scene::new();
    let added = scene.random_solids(500, bounds, 8.0).unwrap();
    println!("Generated {} solids", added);

    let start = Instant::now();
    let pairs = scene.intersecting_pairs();
    println!("Found {} intersecting pairs in {:?}", pairs.len(), start.elapsed());

    for (i, j) in pairs.iter().take(10) {
        let a = scene.get(*i).unwrap();
        let b = scene.get(*j).unwrap();
        println!("{} {} -> {} {}", i, j, a.top.a, b.top.a);
    }
}
