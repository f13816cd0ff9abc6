use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::bounds::BoundingBox;
use crate::error::GeometryError;
use crate::intersect::intersects;
use crate::parallelepiped::Parallelepiped;
use crate::vector::Vector3d;

/// A collection of parallelepipeds queried in batch.
///
/// Every pair is tested with the full pairwise predicate, so batch answers are exactly the
/// answers of [`intersects`] on the same two solids. Batches run in parallel on the rayon pool.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    solids: Vec<Parallelepiped>,
}

impl Scene {
    pub fn new() -> Self {
        Self { solids: Vec::new() }
    }

    /// Adds a solid and returns its index.
    pub fn add(&mut self, solid: Parallelepiped) -> usize {
        self.solids.push(solid);
        self.solids.len() - 1
    }

    pub fn set_solids(&mut self, solids: Vec<Parallelepiped>) {
        self.solids = solids;
    }

    pub fn clear(&mut self) {
        self.solids.clear();
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Parallelepiped> {
        self.solids.get(index)
    }

    pub fn solids(&self) -> &[Parallelepiped] {
        &self.solids
    }

    /// All index pairs `(i, j)` with `i < j` whose solids intersect, in ascending order.
    #[tracing::instrument(skip(self), fields(solids = self.solids.len()))]
    pub fn intersecting_pairs(&self) -> Vec<(usize, usize)> {
        let solids = &self.solids;
        let count = solids.len();
        let pairs: Vec<(usize, usize)> = (0..count)
            .into_par_iter()
            .flat_map_iter(|i| {
                (i + 1..count)
                    .filter(move |&j| intersects(&solids[i], &solids[j]))
                    .map(move |j| (i, j))
            })
            .collect();
        tracing::debug!(pairs = pairs.len(), "pairwise test finished");
        pairs
    }

    /// Indices of the solids that intersect `probe`, in ascending order.
    #[tracing::instrument(skip_all, fields(solids = self.solids.len()))]
    pub fn intersecting(&self, probe: &Parallelepiped) -> Vec<usize> {
        self.solids
            .par_iter()
            .enumerate()
            .filter(|(_, solid)| intersects(probe, solid))
            .map(|(i, _)| i)
            .collect()
    }

    /// Applies `f` to every solid in parallel, preserving order.
    pub fn map<F, R>(&self, f: F) -> Vec<R>
    where
        F: Fn(&Parallelepiped) -> R + Sync + Send,
        R: Send,
    {
        self.solids.par_iter().map(f).collect()
    }

    /// Appends `count` random non-degenerate solids lying fully inside `bounds`.
    ///
    /// The anchor corner is drawn uniformly in `bounds` and each of the three edge vectors
    /// has components in `[-max_edge, max_edge]`. Returns the number of solids added, which
    /// is below `count` only if the attempt budget ran out.
    ///
    /// Fails without adding anything if `bounds` is inverted or not finite on some axis, or if
    /// `max_edge` is negative or not finite.
    pub fn random_solids(
        &mut self,
        count: usize,
        bounds: BoundingBox,
        max_edge: f64,
    ) -> Result<usize, GeometryError> {
        self.random_solids_with_seed(count, bounds, max_edge, get_seed())
    }

    pub fn random_solids_with_seed(
        &mut self,
        count: usize,
        bounds: BoundingBox,
        max_edge: f64,
        seed: u64,
    ) -> Result<usize, GeometryError> {
        for axis in 0..3 {
            let (min, max) = (bounds.min[axis], bounds.max[axis]);
            if min > max || !(max - min).is_finite() {
                return Err(GeometryError::InvalidBounds { axis });
            }
        }
        if max_edge < 0.0 || !(2.0 * max_edge).is_finite() {
            return Err(GeometryError::InvalidEdgeLength(max_edge));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut found = 0;
        let max_attempts = attempt_budget(count);
        let mut attempts = 0;

        let edge = |rng: &mut StdRng| {
            Vector3d::new(
                rng.gen_range(-max_edge..=max_edge),
                rng.gen_range(-max_edge..=max_edge),
                rng.gen_range(-max_edge..=max_edge),
            )
        };

        while found < count && attempts < max_attempts {
            attempts += 1;
            let a1 = Vector3d::new(
                rng.gen_range(bounds.min[0]..=bounds.max[0]),
                rng.gen_range(bounds.min[1]..=bounds.max[1]),
                rng.gen_range(bounds.min[2]..=bounds.max[2]),
            );
            let b1 = a1 + edge(&mut rng);
            let c1 = b1 + edge(&mut rng);
            let a2 = a1 + edge(&mut rng);

            let Ok(solid) = Parallelepiped::try_new(a1, b1, c1, a2) else {
                continue;
            };
            if !bounds.contains_box(&solid.bounding_box()) {
                continue;
            }
            self.solids.push(solid);
            found += 1;
        }

        if found < count {
            tracing::warn!(found, count, attempts, "random generation ran out of attempts");
        } else {
            tracing::debug!(found, attempts, "random solids generated");
        }
        Ok(found)
    }

    /// Reads solids from a text file, see [`Scene::parse_solids`] for the format.
    pub fn import_solids<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, GeometryError> {
        let file = File::open(path)?;
        self.read_solids(BufReader::new(file))
    }

    /// Parses solids given as four `x y z` lines each (`a1`, `b1`, `c1`, `a2`).
    ///
    /// Blank lines and lines starting with `#` are skipped. Nothing is added if any line
    /// fails to parse. Returns the number of solids added.
    pub fn parse_solids(&mut self, text: &str) -> Result<usize, GeometryError> {
        self.read_solids(text.as_bytes())
    }

    fn read_solids<R: BufRead>(&mut self, reader: R) -> Result<usize, GeometryError> {
        let mut parsed = Vec::new();
        let mut pending: Vec<Vector3d> = Vec::with_capacity(4);
        let mut last_line = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            last_line = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let point: Vector3d = line.parse().map_err(|e: GeometryError| e.at_line(index + 1))?;
            pending.push(point);
            if pending.len() == 4 {
                parsed.push(Parallelepiped::new(pending[0], pending[1], pending[2], pending[3]));
                pending.clear();
            }
        }

        if !pending.is_empty() {
            return Err(GeometryError::IncompleteSolid { line: last_line });
        }

        let added = parsed.len();
        tracing::debug!(added, "solids imported");
        self.solids.extend(parsed);
        Ok(added)
    }
}

const ATTEMPTS_PER_SOLID: usize = 1000;

fn attempt_budget(count: usize) -> usize {
    count.saturating_mul(ATTEMPTS_PER_SOLID)
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_at(x: f64, y: f64, z: f64) -> Parallelepiped {
        let o = Vector3d::new(x, y, z);
        Parallelepiped::new(
            o,
            o + Vector3d::new(1.0, 0.0, 0.0),
            o + Vector3d::new(1.0, 0.0, 1.0),
            o + Vector3d::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_add_and_get() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.add(cell_at(0.0, 0.0, 0.0)), 0);
        assert_eq!(scene.add(cell_at(5.0, 0.0, 0.0)), 1);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(1), Some(&cell_at(5.0, 0.0, 0.0)));
        assert!(scene.get(2).is_none());
        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_pairs_chain() {
        let mut scene = Scene::new();
        scene.set_solids(vec![
            cell_at(0.0, 0.0, 0.0),
            cell_at(1.0, 1.0, 1.0),
            cell_at(2.0, 2.0, 2.0),
            cell_at(10.0, 10.0, 10.0),
        ]);
        assert_eq!(scene.intersecting_pairs(), vec![(0, 1), (1, 2)]);
        assert_eq!(scene.intersecting(&cell_at(1.0, 1.0, 1.0)), vec![0, 1, 2]);
        assert!(scene.intersecting(&cell_at(-5.0, 0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_map_preserves_order() {
        let mut scene = Scene::new();
        for i in 0..10 {
            scene.add(cell_at(i as f64, 0.0, 0.0));
        }
        let xs = scene.map(|s| s.top.a.x);
        assert_eq!(xs, (0..10).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_solids_stay_in_bounds() {
        let bounds = BoundingBox::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
        let mut scene = Scene::new();
        let added = scene.random_solids(50, bounds, 2.0).unwrap();
        assert_eq!(added, 50);
        assert_eq!(scene.len(), 50);
        for solid in scene.solids() {
            assert!(bounds.contains_box(&solid.bounding_box()));
        }
    }

    #[test]
    fn test_random_solids_deterministic_seed() {
        let bounds = BoundingBox::new([-5.0, -5.0, -5.0], [5.0, 5.0, 5.0]);
        let mut first = Scene::new();
        let mut second = Scene::new();
        first.random_solids_with_seed(20, bounds, 1.5, 42).unwrap();
        second.random_solids_with_seed(20, bounds, 1.5, 42).unwrap();
        assert_eq!(first.solids(), second.solids());
    }

    #[test]
    fn test_random_solids_rejects_bad_ranges() {
        let mut scene = Scene::new();
        let inverted = BoundingBox::new([10.0, 0.0, 0.0], [0.0, 10.0, 10.0]);
        assert!(matches!(
            scene.random_solids(5, inverted, 1.0),
            Err(GeometryError::InvalidBounds { axis: 0 })
        ));
        let unbounded = BoundingBox::new([0.0, 0.0, f64::NEG_INFINITY], [10.0, 10.0, 10.0]);
        assert!(matches!(
            scene.random_solids(5, unbounded, 1.0),
            Err(GeometryError::InvalidBounds { axis: 2 })
        ));

        let bounds = BoundingBox::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
        assert!(matches!(
            scene.random_solids(5, bounds, -1.0),
            Err(GeometryError::InvalidEdgeLength(_))
        ));
        assert!(matches!(
            scene.random_solids(5, bounds, f64::NAN),
            Err(GeometryError::InvalidEdgeLength(_))
        ));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_random_solids_budget() {
        // zero-length edges never give a valid solid
        let bounds = BoundingBox::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]);
        let mut scene = Scene::new();
        assert_eq!(scene.random_solids_with_seed(3, bounds, 0.0, 1).unwrap(), 0);
        assert!(scene.is_empty());

        assert_eq!(attempt_budget(3), 3000);
        assert_eq!(attempt_budget(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_parse_solids() {
        let text = "\
# unit cell
0 0 0
1 0 0
1 0 1
0 1 0

1 1 1
2 1 1
2 1 2
1 2 1
";
        let mut scene = Scene::new();
        assert_eq!(scene.parse_solids(text).unwrap(), 2);
        assert_eq!(scene.get(0), Some(&cell_at(0.0, 0.0, 0.0)));
        assert_eq!(scene.get(1), Some(&cell_at(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_parse_errors() {
        let mut scene = Scene::new();
        match scene.parse_solids("0 0 0\n1 0 0\n1 zero 1\n0 1 0\n") {
            Err(GeometryError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
        match scene.parse_solids("0 0 0\n1 0 0\n1 0 1\n") {
            Err(GeometryError::IncompleteSolid { line }) => assert_eq!(line, 3),
            other => panic!("expected incomplete solid, got {:?}", other),
        }
        assert!(scene.is_empty());
    }
}
