use std::fmt;
use std::str::FromStr;

use crate::error::{BuildError, GeodomeError, Result};

/// Largest accepted `m + n`; keeps every lattice weight well inside `i64`.
const MAX_EDGE_FREQUENCY: u32 = 1 << 20;

/// Geometric subdivision scheme, inferred from a frequency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubdivisionClass {
    /// `(m, 0)` or `(0, n)`: edges of the base face are lattice lines.
    I,
    /// `(m, m)`: lattice lines bisect the base face's corner angles.
    II,
    /// `(m, n)`, `m != n`, both positive: skew, chiral subdivision.
    III,
}

impl fmt::Display for SubdivisionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I => f.write_str("classI"),
            Self::II => f.write_str("classII"),
            Self::III => f.write_str("classIII"),
        }
    }
}

impl FromStr for SubdivisionClass {
    type Err = GeodomeError;

    /// Accepts `classI`, `I` or `1` (and the II/III equivalents), ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let roman = lower.strip_prefix("class").unwrap_or(&lower).trim();
        match roman {
            "i" | "1" => Ok(Self::I),
            "ii" | "2" => Ok(Self::II),
            "iii" | "3" => Ok(Self::III),
            _ => Err(BuildError::UnknownSubdivisionClass(s.to_string()).into()),
        }
    }
}

/// A validated subdivision frequency pair `(m, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
pub struct Frequency {
    m: u32,
    n: u32,
}

impl Frequency {
    /// Creates a frequency pair.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidFrequency`] for `(0, 0)` or when `m + n`
    /// is too large to subdivide.
    pub fn new(m: u32, n: u32) -> Result<Self> {
        let invalid = |reason| BuildError::InvalidFrequency {
            m: i64::from(m),
            n: i64::from(n),
            reason,
        };
        if m == 0 && n == 0 {
            return Err(invalid("at least one component must be positive").into());
        }
        if u64::from(m) + u64::from(n) > u64::from(MAX_EDGE_FREQUENCY) {
            return Err(invalid("edge frequency is too large").into());
        }
        Ok(Self { m, n })
    }

    /// Unvalidated constructor for pairs known to be valid at compile time.
    pub(crate) const fn from_raw(m: u32, n: u32) -> Self {
        Self { m, n }
    }

    /// Creates a frequency pair from signed components.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidFrequency`] if either component is
    /// negative, or for the reasons listed on [`Frequency::new`].
    pub fn from_signed(m: i64, n: i64) -> Result<Self> {
        match (u32::try_from(m), u32::try_from(n)) {
            (Ok(mu), Ok(nu)) => Self::new(mu, nu),
            _ => Err(BuildError::InvalidFrequency {
                m,
                n,
                reason: "components must be non-negative integers",
            }
            .into()),
        }
    }

    /// Builds the pair for a class from a single edge frequency `v`.
    ///
    /// Class I maps to `(v, 0)` and Class II to `(v/2, v/2)`. Class III has
    /// no single-number form.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidFrequency`] if `v` is zero, odd for
    /// Class II, or the class is Class III.
    pub fn for_class(class: SubdivisionClass, v: u32) -> Result<Self> {
        let invalid = |reason| BuildError::InvalidFrequency {
            m: i64::from(v),
            n: 0,
            reason,
        };
        match class {
            SubdivisionClass::I => Self::new(v, 0),
            SubdivisionClass::II if v % 2 == 0 => Self::new(v / 2, v / 2),
            SubdivisionClass::II => Err(invalid("class II needs an even edge frequency").into()),
            SubdivisionClass::III => {
                Err(invalid("class III needs an explicit (m, n) pair").into())
            }
        }
    }

    /// First component.
    #[must_use]
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Second component.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The subdivision class implied by the pair.
    #[must_use]
    pub fn class(&self) -> SubdivisionClass {
        if self.m == 0 || self.n == 0 {
            SubdivisionClass::I
        } else if self.m == self.n {
            SubdivisionClass::II
        } else {
            SubdivisionClass::III
        }
    }

    /// Edge frequency `v = m + n`.
    #[must_use]
    pub fn edge_frequency(&self) -> u32 {
        self.m + self.n
    }

    /// Triangulation number `T = m² + mn + n²`: how many small triangles
    /// each base face splits into.
    #[must_use]
    pub fn triangulation_number(&self) -> u64 {
        let (m, n) = (u64::from(self.m), u64::from(self.n));
        m * m + m * n + n * n
    }
}

impl TryFrom<(i64, i64)> for Frequency {
    type Error = GeodomeError;

    fn try_from((m, n): (i64, i64)) -> Result<Self> {
        Self::from_signed(m, n)
    }
}

impl From<Frequency> for (i64, i64) {
    fn from(frequency: Frequency) -> Self {
        (i64::from(frequency.m), i64::from(frequency.n))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.m, self.n)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn freq(m: u32, n: u32) -> Frequency {
        Frequency::new(m, n).unwrap()
    }

    #[test]
    fn class_inference() {
        assert_eq!(freq(3, 0).class(), SubdivisionClass::I);
        assert_eq!(freq(0, 2).class(), SubdivisionClass::I);
        assert_eq!(freq(2, 2).class(), SubdivisionClass::II);
        assert_eq!(freq(2, 1).class(), SubdivisionClass::III);
        assert_eq!(freq(1, 3).class(), SubdivisionClass::III);
    }

    #[test]
    fn triangulation_numbers() {
        assert_eq!(freq(2, 0).triangulation_number(), 4);
        assert_eq!(freq(2, 2).triangulation_number(), 12);
        assert_eq!(freq(2, 1).triangulation_number(), 7);
        assert_eq!(freq(2, 1).edge_frequency(), 3);
    }

    #[test]
    fn zero_pair_is_invalid() {
        assert!(matches!(
            Frequency::new(0, 0),
            Err(GeodomeError::Build(BuildError::InvalidFrequency { .. }))
        ));
    }

    #[test]
    fn negative_components_are_invalid() {
        assert!(Frequency::from_signed(-1, 2).is_err());
        assert!(Frequency::try_from((2, -1)).is_err());
        assert_eq!(Frequency::try_from((2, 1)).unwrap(), freq(2, 1));
    }

    #[test]
    fn huge_frequency_is_invalid() {
        assert!(Frequency::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn legacy_single_number_form() {
        let class_i = SubdivisionClass::I;
        let class_ii = SubdivisionClass::II;
        assert_eq!(Frequency::for_class(class_i, 3).unwrap(), freq(3, 0));
        assert_eq!(Frequency::for_class(class_ii, 4).unwrap(), freq(2, 2));
        assert!(Frequency::for_class(class_ii, 3).is_err());
        assert!(Frequency::for_class(SubdivisionClass::III, 3).is_err());
        assert!(Frequency::for_class(class_i, 0).is_err());
    }

    #[test]
    fn parse_class_names() {
        assert_eq!("classII".parse::<SubdivisionClass>().unwrap(), SubdivisionClass::II);
        assert_eq!("iii".parse::<SubdivisionClass>().unwrap(), SubdivisionClass::III);
        assert_eq!(" 1 ".parse::<SubdivisionClass>().unwrap(), SubdivisionClass::I);
        assert!(matches!(
            "classIV".parse::<SubdivisionClass>(),
            Err(GeodomeError::Build(BuildError::UnknownSubdivisionClass(_)))
        ));
    }

    #[test]
    fn class_display_round_trips() {
        for class in [SubdivisionClass::I, SubdivisionClass::II, SubdivisionClass::III] {
            assert_eq!(class.to_string().parse::<SubdivisionClass>().unwrap(), class);
        }
    }
}
