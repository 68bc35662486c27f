use crate::config::Frequency;

/// Integer barycentric weights `[wa, wb, wc]` of a lattice point relative to
/// the corners of one face. They always sum to the lattice total.
pub(super) type Weights = [i64; 3];

/// The triangular lattice of a frequency pair `(m, n)`, laid over a face
/// with corners `A`, `B`, `C` counterclockwise seen from outside.
///
/// Lattice coordinates `(i, j)` step along the two generators of the
/// hexagonal grid. `A` sits at `(0, 0)`, `B` at `(m, n)` and `C` at
/// `(-n, m + n)`. The weights of every lattice point are integers over
/// `T = m² + mn + n²`, so no comparison in the walk needs a tolerance.
#[derive(Debug, Clone, Copy)]
pub(super) struct Lattice {
    m: i64,
    n: i64,
    total: i64,
    divisor: i64,
}

/// A vertex of a cell that straddles a base edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CellVertex {
    /// On this face (or its boundary), with weights in this face's frame.
    Inside(Weights),
    /// Beyond the edge, with weights reflected into the neighbouring face's
    /// frame. Only the neighbouring face's seam record can name it.
    Across(Weights),
}

/// How one small triangle of the lattice relates to the face being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Cell {
    /// All three vertices lie on the face.
    Interior([Weights; 3]),
    /// The triangle crosses the base edge opposite corner `edge` and its
    /// far vertices lie on the neighbouring face.
    Straddling {
        edge: usize,
        vertices: [CellVertex; 3],
    },
    /// Not part of this face or any seam it owns.
    Outside,
}

impl Lattice {
    pub(super) fn new(frequency: Frequency) -> Self {
        let m = i64::from(frequency.m());
        let n = i64::from(frequency.n());
        let total = m * m + m * n + n * n;
        Self {
            m,
            n,
            total,
            divisor: gcd(m, n),
        }
    }

    /// `T`: the sum of every point's weights.
    pub(super) fn total(&self) -> i64 {
        self.total
    }

    /// `m + n`: lattice steps along each base edge.
    pub(super) fn edge_frequency(&self) -> i64 {
        self.m + self.n
    }

    /// Weights of lattice point `(i, j)`. May be negative off the face.
    pub(super) fn weights(&self, i: i64, j: i64) -> Weights {
        let (m, n) = (self.m, self.n);
        let wb = (m + n) * i + n * j;
        let wc = m * j - n * i;
        [self.total - wb - wc, wb, wc]
    }

    /// Weights reduced by `gcd(m, n)` for use in node keys, so that the
    /// same point gets the same key whatever multiple of a pair built it.
    pub(super) fn key_weights(&self, weights: Weights) -> Weights {
        weights.map(|w| w / self.divisor)
    }

    /// The total matching [`Lattice::key_weights`].
    pub(super) fn key_total(&self) -> i64 {
        self.total / self.divisor
    }

    /// Coordinates covering the face plus one cell of margin on each side.
    fn coordinates(&self) -> impl Iterator<Item = (i64, i64)> {
        let (m, n) = (self.m, self.n);
        (-1..=m + n + 1).flat_map(move |j| (-n - 1..=m + 1).map(move |i| (i, j)))
    }

    /// Every lattice point on the face, boundary included.
    pub(super) fn points(&self) -> impl Iterator<Item = Weights> + '_ {
        self.coordinates()
            .map(|(i, j)| self.weights(i, j))
            .filter(is_inside)
    }

    /// Every small triangle touching the face, classified.
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.coordinates().flat_map(move |(i, j)| {
            let up = [(i, j), (i + 1, j), (i, j + 1)];
            let down = [(i + 1, j), (i + 1, j + 1), (i, j + 1)];
            [up, down].map(|tri| classify(tri.map(|(i, j)| self.weights(i, j))))
        })
    }
}

/// `true` if no weight is negative.
pub(super) fn is_inside(weights: &Weights) -> bool {
    weights.iter().all(|&w| w >= 0)
}

/// Mirrors a point across the base edge opposite corner `edge`, giving its
/// weights in the frame of the face on the other side of that edge.
pub(super) fn reflect(weights: Weights, edge: usize) -> Weights {
    let depth = weights[edge];
    let mut out = weights.map(|w| w + depth);
    out[edge] = -depth;
    out
}

fn classify(cell: [Weights; 3]) -> Cell {
    if cell.iter().all(is_inside) {
        return Cell::Interior(cell);
    }
    for edge in 0..3 {
        let crosses = cell.iter().any(|w| w[edge] < 0) && cell.iter().any(|w| w[edge] > 0);
        if !crosses {
            continue;
        }
        let vertices = cell.map(|w| {
            if w[edge] >= 0 {
                CellVertex::Inside(w)
            } else {
                CellVertex::Across(reflect(w, edge))
            }
        });
        let on_faces = vertices.iter().all(|v| match v {
            CellVertex::Inside(w) | CellVertex::Across(w) => is_inside(w),
        });
        if on_faces {
            return Cell::Straddling { edge, vertices };
        }
    }
    Cell::Outside
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
