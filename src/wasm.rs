use crate::bounds::BoundingBox;
use crate::intersect::intersects;
use crate::parallelepiped::Parallelepiped;
use crate::scene::Scene;
use crate::vector::Vector3d;
use js_sys::{Array, Float64Array, Uint32Array};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

fn parse_js_point(val: &JsValue) -> Option<Vector3d> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < 3 {
        return None;
    }
    Some(Vector3d::new(
        arr.get(0).as_f64()?,
        arr.get(1).as_f64()?,
        arr.get(2).as_f64()?,
    ))
}

/// WASM wrapper for a single parallelepiped.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Solid {
    inner: Parallelepiped,
}

#[wasm_bindgen]
impl Solid {
    /// Creates a solid from the points `a1, b1, c1, a2` given as 12 flat coordinates.
    #[wasm_bindgen(constructor)]
    pub fn new(coords: &[f64]) -> Solid {
        let coords: &[f64; 12] = coords.try_into().unwrap_or_else(|_| {
            panic!("A parallelepiped requires exactly 4 points (12 coordinates), got {}", coords.len())
        });
        Solid {
            inner: Parallelepiped::from_coords(coords),
        }
    }

    /// Creates a solid from four `[x, y, z]` arrays, rejecting degenerate input.
    #[wasm_bindgen(js_name = fromPoints)]
    pub fn from_points(a1: JsValue, b1: JsValue, c1: JsValue, a2: JsValue) -> Result<Solid, JsValue> {
        let mut points = [Vector3d::ZERO; 4];
        for (point, val) in points.iter_mut().zip([&a1, &b1, &c1, &a2]) {
            *point = parse_js_point(val).ok_or_else(|| JsValue::from_str("Expected an [x, y, z] array"))?;
        }
        Parallelepiped::try_new(points[0], points[1], points[2], points[3])
            .map(|inner| Solid { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn intersects(&self, other: &Solid) -> bool {
        intersects(&self.inner, &other.inner)
    }

    /// The 8 corners as 24 flat coordinates, top face first.
    pub fn vertices(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.vertices().iter().flat_map(|v| v.to_array()).collect();
        Float64Array::from(&flat[..])
    }

    /// Bounding box as `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    #[wasm_bindgen(js_name = boundingBox)]
    pub fn bounding_box(&self) -> Float64Array {
        let b = self.inner.bounding_box();
        Float64Array::from(&[b.min[0], b.min[1], b.min[2], b.max[0], b.max[1], b.max[2]][..])
    }
}

/// WASM wrapper for a batch of solids.
#[wasm_bindgen]
pub struct SolidScene {
    inner: Scene,
}

#[wasm_bindgen]
impl SolidScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SolidScene {
        SolidScene { inner: Scene::new() }
    }

    pub fn add(&mut self, solid: &Solid) -> usize {
        self.inner.add(solid.inner)
    }

    /// Appends `count` random solids inside the given box, returns the number added.
    #[wasm_bindgen(js_name = addRandom)]
    pub fn add_random(
        &mut self,
        count: usize,
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
        max_edge: f64,
    ) -> Result<usize, JsValue> {
        let bounds = BoundingBox::new([min_x, min_y, min_z], [max_x, max_y, max_z]);
        self.inner
            .random_solids(count, bounds, max_edge)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Parses solids from text, four `x y z` lines per solid.
    #[wasm_bindgen(js_name = parseSolids)]
    pub fn parse_solids(&mut self, text: &str) -> Result<usize, JsValue> {
        self.inner
            .parse_solids(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    pub fn get(&self, index: usize) -> Option<Solid> {
        self.inner.get(index).map(|inner| Solid { inner: *inner })
    }

    /// Intersecting index pairs flattened as `[i0, j0, i1, j1, ...]`.
    #[wasm_bindgen(js_name = intersectingPairs)]
    pub fn intersecting_pairs(&self) -> Uint32Array {
        let flat: Vec<u32> = self
            .inner
            .intersecting_pairs()
            .into_iter()
            .flat_map(|(i, j)| [i as u32, j as u32])
            .collect();
        Uint32Array::from(&flat[..])
    }

    pub fn intersecting(&self, probe: &Solid) -> Uint32Array {
        let indices: Vec<u32> = self
            .inner
            .intersecting(&probe.inner)
            .into_iter()
            .map(|i| i as u32)
            .collect();
        Uint32Array::from(&indices[..])
    }
}

impl Default for SolidScene {
    fn default() -> Self {
        Self::new()
    }
}
