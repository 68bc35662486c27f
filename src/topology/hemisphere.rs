use std::collections::BTreeMap;
use std::fmt;

use crate::math::{outward_normal, Point3};

/// Which side of the viewing plane (`z = 0`) an element is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    /// `z <= 0`: facing the viewer.
    Near,
    /// `z > 0`: facing away from the viewer.
    Far,
}

impl Hemisphere {
    /// Both hemispheres, near first.
    pub const ALL: [Hemisphere; 2] = [Hemisphere::Near, Hemisphere::Far];

    /// Returns the opposite hemisphere.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Near => Self::Far,
            Self::Far => Self::Near,
        }
    }

    /// Classifies by the mean of the given z values.
    #[must_use]
    pub fn from_z_values(z_values: &[f64]) -> Self {
        if is_near(z_values) {
            Self::Near
        } else {
            Self::Far
        }
    }

    /// Classifies a single point by its z coordinate.
    #[must_use]
    pub fn of_point(point: &Point3) -> Self {
        Self::from_z_values(&[point.z])
    }

    /// Classifies an edge by the mean z of its endpoints.
    #[must_use]
    pub fn of_edge(a: &Point3, b: &Point3) -> Self {
        Self::from_z_values(&[a.z, b.z])
    }

    /// Classifies a face by the z component of its outward normal.
    ///
    /// Faces straddling the viewing plane have an ambiguous mean z, while
    /// their orientation is not.
    #[must_use]
    pub fn of_face(a: &Point3, b: &Point3, c: &Point3) -> Self {
        Self::from_z_values(&[outward_normal(a, b, c).z])
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Near => f.write_str("near"),
            Self::Far => f.write_str("far"),
        }
    }
}

/// `mean(z_values) <= 0`. A mean of exactly zero counts as near.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_near(z_values: &[f64]) -> bool {
    if z_values.is_empty() {
        return true;
    }
    let mean = z_values.iter().sum::<f64>() / z_values.len() as f64;
    mean <= 0.0
}

/// A pair of maps holding every element of one kind, split by hemisphere.
///
/// Elements do not store their own hemisphere: a key lives in exactly one
/// of the two maps, and lookups probe both.
#[derive(Debug, Clone)]
pub struct Hemispheres<T> {
    near: BTreeMap<String, T>,
    far: BTreeMap<String, T>,
}

impl<T> Default for Hemispheres<T> {
    fn default() -> Self {
        Self {
            near: BTreeMap::new(),
            far: BTreeMap::new(),
        }
    }
}

impl<T> Hemispheres<T> {
    /// Creates an empty pair of maps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map for one hemisphere.
    #[must_use]
    pub fn side(&self, hemisphere: Hemisphere) -> &BTreeMap<String, T> {
        match hemisphere {
            Hemisphere::Near => &self.near,
            Hemisphere::Far => &self.far,
        }
    }

    fn side_mut(&mut self, hemisphere: Hemisphere) -> &mut BTreeMap<String, T> {
        match hemisphere {
            Hemisphere::Near => &mut self.near,
            Hemisphere::Far => &mut self.far,
        }
    }

    /// Looks up an element in either hemisphere.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.far.get(key).or_else(|| self.near.get(key))
    }

    /// Looks up an element mutably in either hemisphere.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        if self.far.contains_key(key) {
            self.far.get_mut(key)
        } else {
            self.near.get_mut(key)
        }
    }

    /// Returns which hemisphere currently holds `key`, if any.
    #[must_use]
    pub fn locate(&self, key: &str) -> Option<Hemisphere> {
        if self.near.contains_key(key) {
            Some(Hemisphere::Near)
        } else if self.far.contains_key(key) {
            Some(Hemisphere::Far)
        } else {
            None
        }
    }

    /// Returns `true` if either hemisphere holds `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// Inserts an element into `hemisphere`, evicting any copy held by the
    /// opposite map so the key is never present twice.
    pub fn insert(&mut self, hemisphere: Hemisphere, key: String, value: T) {
        self.side_mut(hemisphere.opposite()).remove(&key);
        self.side_mut(hemisphere).insert(key, value);
    }

    /// Moves `key` into `hemisphere`.
    ///
    /// Returns `true` if the element changed maps, `false` if it was already
    /// there or does not exist.
    pub fn move_to(&mut self, key: &str, hemisphere: Hemisphere) -> bool {
        match self.side_mut(hemisphere.opposite()).remove_entry(key) {
            Some((k, value)) => {
                self.side_mut(hemisphere).insert(k, value);
                true
            }
            None => false,
        }
    }

    /// Total number of elements across both hemispheres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.near.len() + self.far.len()
    }

    /// Returns `true` if both hemispheres are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.near.is_empty() && self.far.is_empty()
    }

    /// Iterates every element as `(hemisphere, key, value)`, near first.
    pub fn iter(&self) -> impl Iterator<Item = (Hemisphere, &String, &T)> {
        let near = self.near.iter().map(|(k, v)| (Hemisphere::Near, k, v));
        let far = self.far.iter().map(|(k, v)| (Hemisphere::Far, k, v));
        near.chain(far)
    }

    /// Mutably iterates the elements of one hemisphere.
    pub fn iter_side_mut(
        &mut self,
        hemisphere: Hemisphere,
    ) -> impl Iterator<Item = (&String, &mut T)> {
        self.side_mut(hemisphere).iter_mut()
    }

    /// All keys across both hemispheres, sorted.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.near.keys().chain(self.far.keys()).cloned().collect();
        keys.sort_unstable();
        keys
    }
}
