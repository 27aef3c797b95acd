use crate::{
    coord::{CoordIJK, FaceIJK},
    error, Direction, Face,
};
use std::fmt;

/// Maximum value for a base cell.
pub const MAX: u8 = 121;

// Bitmap where a bit's position represents a base cell value.
const BASE_PENTAGONS: u128 = 0x0020_0802_0008_0100_8402_0040_0100_4010;

// -----------------------------------------------------------------------------

/// One of the 122 base cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct BaseCell(u8);

impl BaseCell {
    /// Initializes a new base cell using a value that may be out of range.
    ///
    /// # Safety
    ///
    /// The value must be a valid base cell.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value <= MAX, "base cell out of range");
        Self(value)
    }

    /// Returns true if the base cell is pentagonal.
    ///
    /// # Example
    ///
    /// ```
    /// use dggrid::BaseCell;
    ///
    /// assert!(BaseCell::try_from(4)?.is_pentagon());
    /// assert!(!BaseCell::try_from(8)?.is_pentagon());
    /// # Ok::<(), dggrid::error::InvalidBaseCell>(())
    /// ```
    #[must_use]
    pub const fn is_pentagon(self) -> bool {
        BASE_PENTAGONS & (1 << self.0) != 0
    }

    /// Returns true if this is one of the two pentagons whose neighbors are
    /// all oriented towards it (base cells 4 and 117).
    #[must_use]
    pub(crate) const fn is_polar_pentagon(self) -> bool {
        self.0 == 4 || self.0 == 117
    }

    /// Returns the neighboring base cell in the given direction, or `None` if
    /// this base cell is a pentagon and `dir` follows its deleted k-axe.
    #[must_use]
    pub(crate) fn neighbor(self, dir: Direction) -> Option<Self> {
        BASE_CELL_NEIGHBORS[usize::from(self)][usize::from(dir)]
    }

    /// Returns the number of 60° CCW rotations needed to switch to the
    /// coordinate system of the neighboring base cell in the given direction.
    #[must_use]
    pub(crate) fn neighbor_rotation(self, dir: Direction) -> u8 {
        BASE_CELL_ROTATIONS[usize::from(self)][usize::from(dir)]
    }

    /// Returns the direction from this base cell to `other`, or `None` if
    /// they're not neighbors.
    #[must_use]
    pub(crate) fn direction(self, other: Self) -> Option<Direction> {
        Direction::iter().find(|&dir| self.neighbor(dir) == Some(other))
    }

    /// Returns whether `face` is one of this (pentagonal) base cell's
    /// clockwise-offset faces.
    #[must_use]
    pub(crate) fn is_cw_offset(self, face: Face) -> bool {
        BASE_CELL_DATA[usize::from(self)]
            .cw_offset_pent
            .is_some_and(|(f0, f1)| f0 == face || f1 == face)
    }

    /// Returns the number of 60° CCW rotations needed to rotate the vertex
    /// numbers of this base cell (on its home face) to the orientation they
    /// have on `face`, or `None` if this base cell doesn't reach `face`.
    #[must_use]
    pub(crate) fn vertex_rotation(self, face: Face) -> Option<u8> {
        BASE_CELL_VERTEX_ROTATIONS[usize::from(self)]
            .iter()
            .find(|&&(f, _)| f == face)
            .map(|&(_, rotation)| rotation)
    }

    /// Returns the total number of base cells.
    ///
    /// # Example
    ///
    /// ```
    /// use dggrid::BaseCell;
    ///
    /// assert_eq!(BaseCell::count(), 122);
    /// ```
    #[must_use]
    pub const fn count() -> u8 {
        MAX + 1
    }

    /// Returns all the base cell.
    ///
    /// # Example
    ///
    /// ```
    /// use dggrid::BaseCell;
    ///
    /// let cells = BaseCell::iter().collect::<Vec<_>>();
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::count()).map(Self::new_unchecked)
    }
}

impl TryFrom<u8> for BaseCell {
    type Error = error::InvalidBaseCell;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX {
            return Err(Self::Error::new(value, "out of range"));
        }
        Ok(Self(value))
    }
}

impl From<BaseCell> for u8 {
    fn from(value: BaseCell) -> Self {
        value.0
    }
}

impl From<BaseCell> for usize {
    fn from(value: BaseCell) -> Self {
        Self::from(value.0)
    }
}

impl From<BaseCell> for FaceIJK {
    fn from(value: BaseCell) -> Self {
        BASE_CELL_DATA[usize::from(value)].home
    }
}

impl fmt::Display for BaseCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -----------------------------------------------------------------------------

/// Static metadata attached to a base cell: its home `FaceIJK` and, for
/// pentagons, the faces where an extra clockwise rotation is required.
struct BaseCellData {
    /// Home face and `ijk` coordinates (resolution 0).
    home: FaceIJK,
    /// Clockwise-offset adjacent faces, if this base cell is a pentagon.
    cw_offset_pent: Option<(Face, Face)>,
}

/// Neighboring base cell in each `IJK` direction, `None` if there is none.
#[rustfmt::skip]
const BASE_CELL_NEIGHBORS: [[Option<BaseCell>; 7]; MAX as usize + 1] = [
    [Some(BaseCell::new_unchecked(0)), Some(BaseCell::new_unchecked(1)), Some(BaseCell::new_unchecked(5)), Some(BaseCell::new_unchecked(2)), Some(BaseCell::new_unchecked(4)), Some(BaseCell::new_unchecked(3)), Some(BaseCell::new_unchecked(8))], // 0
    [Some(BaseCell::new_unchecked(1)), Some(BaseCell::new_unchecked(7)), Some(BaseCell::new_unchecked(6)), Some(BaseCell::new_unchecked(9)), Some(BaseCell::new_unchecked(0)), Some(BaseCell::new_unchecked(3)), Some(BaseCell::new_unchecked(2))], // 1
    [Some(BaseCell::new_unchecked(2)), Some(BaseCell::new_unchecked(6)), Some(BaseCell::new_unchecked(10)), Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(0)), Some(BaseCell::new_unchecked(1)), Some(BaseCell::new_unchecked(5))], // 2
    [Some(BaseCell::new_unchecked(3)), Some(BaseCell::new_unchecked(13)), Some(BaseCell::new_unchecked(1)), Some(BaseCell::new_unchecked(7)), Some(BaseCell::new_unchecked(4)), Some(BaseCell::new_unchecked(12)), Some(BaseCell::new_unchecked(0))], // 3
    [Some(BaseCell::new_unchecked(4)), None, Some(BaseCell::new_unchecked(15)), Some(BaseCell::new_unchecked(8)), Some(BaseCell::new_unchecked(3)), Some(BaseCell::new_unchecked(0)), Some(BaseCell::new_unchecked(12))], // 4
    [Some(BaseCell::new_unchecked(5)), Some(BaseCell::new_unchecked(2)), Some(BaseCell::new_unchecked(18)), Some(BaseCell::new_unchecked(10)), Some(BaseCell::new_unchecked(8)), Some(BaseCell::new_unchecked(0)), Some(BaseCell::new_unchecked(16))], // 5
    [Some(BaseCell::new_unchecked(6)), Some(BaseCell::new_unchecked(14)), Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(17)), Some(BaseCell::new_unchecked(1)), Some(BaseCell::new_unchecked(9)), Some(BaseCell::new_unchecked(2))], // 6
    [Some(BaseCell::new_unchecked(7)), Some(BaseCell::new_unchecked(21)), Some(BaseCell::new_unchecked(9)), Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(3)), Some(BaseCell::new_unchecked(13)), Some(BaseCell::new_unchecked(1))], // 7
    [Some(BaseCell::new_unchecked(8)), Some(BaseCell::new_unchecked(5)), Some(BaseCell::new_unchecked(22)), Some(BaseCell::new_unchecked(16)), Some(BaseCell::new_unchecked(4)), Some(BaseCell::new_unchecked(0)), Some(BaseCell::new_unchecked(15))], // 8
    [Some(BaseCell::new_unchecked(9)), Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(14)), Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(1)), Some(BaseCell::new_unchecked(7)), Some(BaseCell::new_unchecked(6))], // 9
    [Some(BaseCell::new_unchecked(10)), Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(24)), Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(5)), Some(BaseCell::new_unchecked(2)), Some(BaseCell::new_unchecked(18))], // 10
    [Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(17)), Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(25)), Some(BaseCell::new_unchecked(2)), Some(BaseCell::new_unchecked(6)), Some(BaseCell::new_unchecked(10))], // 11
    [Some(BaseCell::new_unchecked(12)), Some(BaseCell::new_unchecked(28)), Some(BaseCell::new_unchecked(13)), Some(BaseCell::new_unchecked(26)), Some(BaseCell::new_unchecked(4)), Some(BaseCell::new_unchecked(15)), Some(BaseCell::new_unchecked(3))], // 12
    [Some(BaseCell::new_unchecked(13)), Some(BaseCell::new_unchecked(26)), Some(BaseCell::new_unchecked(21)), Some(BaseCell::new_unchecked(29)), Some(BaseCell::new_unchecked(3)), Some(BaseCell::new_unchecked(12)), Some(BaseCell::new_unchecked(7))], // 13
    [Some(BaseCell::new_unchecked(14)), None, Some(BaseCell::new_unchecked(17)), Some(BaseCell::new_unchecked(27)), Some(BaseCell::new_unchecked(9)), Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(6))], // 14
    [Some(BaseCell::new_unchecked(15)), Some(BaseCell::new_unchecked(22)), Some(BaseCell::new_unchecked(28)), Some(BaseCell::new_unchecked(31)), Some(BaseCell::new_unchecked(4)), Some(BaseCell::new_unchecked(8)), Some(BaseCell::new_unchecked(12))], // 15
    [Some(BaseCell::new_unchecked(16)), Some(BaseCell::new_unchecked(18)), Some(BaseCell::new_unchecked(33)), Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(8)), Some(BaseCell::new_unchecked(5)), Some(BaseCell::new_unchecked(22))], // 16
    [Some(BaseCell::new_unchecked(17)), Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(14)), Some(BaseCell::new_unchecked(6)), Some(BaseCell::new_unchecked(35)), Some(BaseCell::new_unchecked(25)), Some(BaseCell::new_unchecked(27))], // 17
    [Some(BaseCell::new_unchecked(18)), Some(BaseCell::new_unchecked(24)), Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(32)), Some(BaseCell::new_unchecked(5)), Some(BaseCell::new_unchecked(10)), Some(BaseCell::new_unchecked(16))], // 18
    [Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(34)), Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(36)), Some(BaseCell::new_unchecked(7)), Some(BaseCell::new_unchecked(21)), Some(BaseCell::new_unchecked(9))], // 19
    [Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(14)), Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(9)), Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(27)), Some(BaseCell::new_unchecked(36))], // 20
    [Some(BaseCell::new_unchecked(21)), Some(BaseCell::new_unchecked(38)), Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(34)), Some(BaseCell::new_unchecked(13)), Some(BaseCell::new_unchecked(29)), Some(BaseCell::new_unchecked(7))], // 21
    [Some(BaseCell::new_unchecked(22)), Some(BaseCell::new_unchecked(16)), Some(BaseCell::new_unchecked(41)), Some(BaseCell::new_unchecked(33)), Some(BaseCell::new_unchecked(15)), Some(BaseCell::new_unchecked(8)), Some(BaseCell::new_unchecked(31))], // 22
    [Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(24)), Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(10)), Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(37)), Some(BaseCell::new_unchecked(25))], // 23
    [Some(BaseCell::new_unchecked(24)), None, Some(BaseCell::new_unchecked(32)), Some(BaseCell::new_unchecked(37)), Some(BaseCell::new_unchecked(10)), Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(18))], // 24
    [Some(BaseCell::new_unchecked(25)), Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(17)), Some(BaseCell::new_unchecked(11)), Some(BaseCell::new_unchecked(45)), Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(35))], // 25
    [Some(BaseCell::new_unchecked(26)), Some(BaseCell::new_unchecked(42)), Some(BaseCell::new_unchecked(29)), Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(12)), Some(BaseCell::new_unchecked(28)), Some(BaseCell::new_unchecked(13))], // 26
    [Some(BaseCell::new_unchecked(27)), Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(35)), Some(BaseCell::new_unchecked(46)), Some(BaseCell::new_unchecked(14)), Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(17))], // 27
    [Some(BaseCell::new_unchecked(28)), Some(BaseCell::new_unchecked(31)), Some(BaseCell::new_unchecked(42)), Some(BaseCell::new_unchecked(44)), Some(BaseCell::new_unchecked(12)), Some(BaseCell::new_unchecked(15)), Some(BaseCell::new_unchecked(26))], // 28
    [Some(BaseCell::new_unchecked(29)), Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(38)), Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(13)), Some(BaseCell::new_unchecked(26)), Some(BaseCell::new_unchecked(21))], // 29
    [Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(32)), Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(50)), Some(BaseCell::new_unchecked(16)), Some(BaseCell::new_unchecked(18)), Some(BaseCell::new_unchecked(33))], // 30
    [Some(BaseCell::new_unchecked(31)), Some(BaseCell::new_unchecked(41)), Some(BaseCell::new_unchecked(44)), Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(15)), Some(BaseCell::new_unchecked(22)), Some(BaseCell::new_unchecked(28))], // 31
    [Some(BaseCell::new_unchecked(32)), Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(24)), Some(BaseCell::new_unchecked(18)), Some(BaseCell::new_unchecked(52)), Some(BaseCell::new_unchecked(50)), Some(BaseCell::new_unchecked(37))], // 32
    [Some(BaseCell::new_unchecked(33)), Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(49)), Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(22)), Some(BaseCell::new_unchecked(16)), Some(BaseCell::new_unchecked(41))], // 33
    [Some(BaseCell::new_unchecked(34)), Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(38)), Some(BaseCell::new_unchecked(21)), Some(BaseCell::new_unchecked(54)), Some(BaseCell::new_unchecked(36)), Some(BaseCell::new_unchecked(51))], // 34
    [Some(BaseCell::new_unchecked(35)), Some(BaseCell::new_unchecked(46)), Some(BaseCell::new_unchecked(45)), Some(BaseCell::new_unchecked(56)), Some(BaseCell::new_unchecked(17)), Some(BaseCell::new_unchecked(27)), Some(BaseCell::new_unchecked(25))], // 35
    [Some(BaseCell::new_unchecked(36)), Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(34)), Some(BaseCell::new_unchecked(19)), Some(BaseCell::new_unchecked(55)), Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(54))], // 36
    [Some(BaseCell::new_unchecked(37)), Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(52)), Some(BaseCell::new_unchecked(57)), Some(BaseCell::new_unchecked(24)), Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(32))], // 37
    [Some(BaseCell::new_unchecked(38)), None, Some(BaseCell::new_unchecked(34)), Some(BaseCell::new_unchecked(51)), Some(BaseCell::new_unchecked(29)), Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(21))], // 38
    [Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(37)), Some(BaseCell::new_unchecked(25)), Some(BaseCell::new_unchecked(23)), Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(57)), Some(BaseCell::new_unchecked(45))], // 39
    [Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(27)), Some(BaseCell::new_unchecked(36)), Some(BaseCell::new_unchecked(20)), Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(46)), Some(BaseCell::new_unchecked(55))], // 40
    [Some(BaseCell::new_unchecked(41)), Some(BaseCell::new_unchecked(49)), Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(61)), Some(BaseCell::new_unchecked(22)), Some(BaseCell::new_unchecked(33)), Some(BaseCell::new_unchecked(31))], // 41
    [Some(BaseCell::new_unchecked(42)), Some(BaseCell::new_unchecked(58)), Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(62)), Some(BaseCell::new_unchecked(28)), Some(BaseCell::new_unchecked(44)), Some(BaseCell::new_unchecked(26))], // 42
    [Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(62)), Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(64)), Some(BaseCell::new_unchecked(26)), Some(BaseCell::new_unchecked(42)), Some(BaseCell::new_unchecked(29))], // 43
    [Some(BaseCell::new_unchecked(44)), Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(58)), Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(28)), Some(BaseCell::new_unchecked(31)), Some(BaseCell::new_unchecked(42))], // 44
    [Some(BaseCell::new_unchecked(45)), Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(35)), Some(BaseCell::new_unchecked(25)), Some(BaseCell::new_unchecked(63)), Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(56))], // 45
    [Some(BaseCell::new_unchecked(46)), Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(56)), Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(27)), Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(35))], // 46
    [Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(38)), Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(29)), Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(51)), Some(BaseCell::new_unchecked(64))], // 47
    [Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(49)), Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(33)), Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(66)), Some(BaseCell::new_unchecked(50))], // 48
    [Some(BaseCell::new_unchecked(49)), None, Some(BaseCell::new_unchecked(61)), Some(BaseCell::new_unchecked(66)), Some(BaseCell::new_unchecked(33)), Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(41))], // 49
    [Some(BaseCell::new_unchecked(50)), Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(32)), Some(BaseCell::new_unchecked(30)), Some(BaseCell::new_unchecked(70)), Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(52))], // 50
    [Some(BaseCell::new_unchecked(51)), Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(54)), Some(BaseCell::new_unchecked(71)), Some(BaseCell::new_unchecked(38)), Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(34))], // 51
    [Some(BaseCell::new_unchecked(52)), Some(BaseCell::new_unchecked(57)), Some(BaseCell::new_unchecked(70)), Some(BaseCell::new_unchecked(74)), Some(BaseCell::new_unchecked(32)), Some(BaseCell::new_unchecked(37)), Some(BaseCell::new_unchecked(50))], // 52
    [Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(61)), Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(75)), Some(BaseCell::new_unchecked(31)), Some(BaseCell::new_unchecked(41)), Some(BaseCell::new_unchecked(44))], // 53
    [Some(BaseCell::new_unchecked(54)), Some(BaseCell::new_unchecked(71)), Some(BaseCell::new_unchecked(55)), Some(BaseCell::new_unchecked(73)), Some(BaseCell::new_unchecked(34)), Some(BaseCell::new_unchecked(51)), Some(BaseCell::new_unchecked(36))], // 54
    [Some(BaseCell::new_unchecked(55)), Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(54)), Some(BaseCell::new_unchecked(36)), Some(BaseCell::new_unchecked(72)), Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(73))], // 55
    [Some(BaseCell::new_unchecked(56)), Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(63)), Some(BaseCell::new_unchecked(77)), Some(BaseCell::new_unchecked(35)), Some(BaseCell::new_unchecked(46)), Some(BaseCell::new_unchecked(45))], // 56
    [Some(BaseCell::new_unchecked(57)), Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(74)), Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(37)), Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(52))], // 57
    [Some(BaseCell::new_unchecked(58)), None, Some(BaseCell::new_unchecked(62)), Some(BaseCell::new_unchecked(76)), Some(BaseCell::new_unchecked(44)), Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(42))], // 58
    [Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(63)), Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(79)), Some(BaseCell::new_unchecked(39)), Some(BaseCell::new_unchecked(45)), Some(BaseCell::new_unchecked(57))], // 59
    [Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(72)), Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(80)), Some(BaseCell::new_unchecked(40)), Some(BaseCell::new_unchecked(55)), Some(BaseCell::new_unchecked(46))], // 60
    [Some(BaseCell::new_unchecked(61)), Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(49)), Some(BaseCell::new_unchecked(41)), Some(BaseCell::new_unchecked(81)), Some(BaseCell::new_unchecked(75)), Some(BaseCell::new_unchecked(66))], // 61
    [Some(BaseCell::new_unchecked(62)), Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(58)), Some(BaseCell::new_unchecked(42)), Some(BaseCell::new_unchecked(82)), Some(BaseCell::new_unchecked(64)), Some(BaseCell::new_unchecked(76))], // 62
    [Some(BaseCell::new_unchecked(63)), None, Some(BaseCell::new_unchecked(56)), Some(BaseCell::new_unchecked(45)), Some(BaseCell::new_unchecked(79)), Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(77))], // 63
    [Some(BaseCell::new_unchecked(64)), Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(62)), Some(BaseCell::new_unchecked(43)), Some(BaseCell::new_unchecked(84)), Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(82))], // 64
    [Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(58)), Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(44)), Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(76)), Some(BaseCell::new_unchecked(75))], // 65
    [Some(BaseCell::new_unchecked(66)), Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(81)), Some(BaseCell::new_unchecked(85)), Some(BaseCell::new_unchecked(49)), Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(61))], // 66
    [Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(66)), Some(BaseCell::new_unchecked(50)), Some(BaseCell::new_unchecked(48)), Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(85)), Some(BaseCell::new_unchecked(70))], // 67
    [Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(56)), Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(46)), Some(BaseCell::new_unchecked(90)), Some(BaseCell::new_unchecked(77)), Some(BaseCell::new_unchecked(80))], // 68
    [Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(51)), Some(BaseCell::new_unchecked(64)), Some(BaseCell::new_unchecked(47)), Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(71)), Some(BaseCell::new_unchecked(84))], // 69
    [Some(BaseCell::new_unchecked(70)), Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(52)), Some(BaseCell::new_unchecked(50)), Some(BaseCell::new_unchecked(83)), Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(74))], // 70
    [Some(BaseCell::new_unchecked(71)), Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(73)), Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(51)), Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(54))], // 71
    [Some(BaseCell::new_unchecked(72)), None, Some(BaseCell::new_unchecked(73)), Some(BaseCell::new_unchecked(55)), Some(BaseCell::new_unchecked(80)), Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(88))], // 72
    [Some(BaseCell::new_unchecked(73)), Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(72)), Some(BaseCell::new_unchecked(88)), Some(BaseCell::new_unchecked(54)), Some(BaseCell::new_unchecked(71)), Some(BaseCell::new_unchecked(55))], // 73
    [Some(BaseCell::new_unchecked(74)), Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(83)), Some(BaseCell::new_unchecked(92)), Some(BaseCell::new_unchecked(52)), Some(BaseCell::new_unchecked(57)), Some(BaseCell::new_unchecked(70))], // 74
    [Some(BaseCell::new_unchecked(75)), Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(61)), Some(BaseCell::new_unchecked(53)), Some(BaseCell::new_unchecked(94)), Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(81))], // 75
    [Some(BaseCell::new_unchecked(76)), Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(82)), Some(BaseCell::new_unchecked(96)), Some(BaseCell::new_unchecked(58)), Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(62))], // 76
    [Some(BaseCell::new_unchecked(77)), Some(BaseCell::new_unchecked(63)), Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(56)), Some(BaseCell::new_unchecked(93)), Some(BaseCell::new_unchecked(79)), Some(BaseCell::new_unchecked(90))], // 77
    [Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(74)), Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(57)), Some(BaseCell::new_unchecked(95)), Some(BaseCell::new_unchecked(92)), Some(BaseCell::new_unchecked(79))], // 78
    [Some(BaseCell::new_unchecked(79)), Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(63)), Some(BaseCell::new_unchecked(59)), Some(BaseCell::new_unchecked(93)), Some(BaseCell::new_unchecked(95)), Some(BaseCell::new_unchecked(77))], // 79
    [Some(BaseCell::new_unchecked(80)), Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(72)), Some(BaseCell::new_unchecked(60)), Some(BaseCell::new_unchecked(99)), Some(BaseCell::new_unchecked(90)), Some(BaseCell::new_unchecked(88))], // 80
    [Some(BaseCell::new_unchecked(81)), Some(BaseCell::new_unchecked(85)), Some(BaseCell::new_unchecked(94)), Some(BaseCell::new_unchecked(101)), Some(BaseCell::new_unchecked(61)), Some(BaseCell::new_unchecked(66)), Some(BaseCell::new_unchecked(75))], // 81
    [Some(BaseCell::new_unchecked(82)), Some(BaseCell::new_unchecked(96)), Some(BaseCell::new_unchecked(84)), Some(BaseCell::new_unchecked(98)), Some(BaseCell::new_unchecked(62)), Some(BaseCell::new_unchecked(76)), Some(BaseCell::new_unchecked(64))], // 82
    [Some(BaseCell::new_unchecked(83)), None, Some(BaseCell::new_unchecked(74)), Some(BaseCell::new_unchecked(70)), Some(BaseCell::new_unchecked(100)), Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(92))], // 83
    [Some(BaseCell::new_unchecked(84)), Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(82)), Some(BaseCell::new_unchecked(64)), Some(BaseCell::new_unchecked(97)), Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(98))], // 84
    [Some(BaseCell::new_unchecked(85)), Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(101)), Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(66)), Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(81))], // 85
    [Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(76)), Some(BaseCell::new_unchecked(75)), Some(BaseCell::new_unchecked(65)), Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(96)), Some(BaseCell::new_unchecked(94))], // 86
    [Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(83)), Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(100)), Some(BaseCell::new_unchecked(67)), Some(BaseCell::new_unchecked(70)), Some(BaseCell::new_unchecked(85))], // 87
    [Some(BaseCell::new_unchecked(88)), Some(BaseCell::new_unchecked(72)), Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(73)), Some(BaseCell::new_unchecked(99)), Some(BaseCell::new_unchecked(80)), Some(BaseCell::new_unchecked(105))], // 88
    [Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(97)), Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(103)), Some(BaseCell::new_unchecked(69)), Some(BaseCell::new_unchecked(84)), Some(BaseCell::new_unchecked(71))], // 89
    [Some(BaseCell::new_unchecked(90)), Some(BaseCell::new_unchecked(77)), Some(BaseCell::new_unchecked(80)), Some(BaseCell::new_unchecked(68)), Some(BaseCell::new_unchecked(106)), Some(BaseCell::new_unchecked(93)), Some(BaseCell::new_unchecked(99))], // 90
    [Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(73)), Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(71)), Some(BaseCell::new_unchecked(105)), Some(BaseCell::new_unchecked(88)), Some(BaseCell::new_unchecked(103))], // 91
    [Some(BaseCell::new_unchecked(92)), Some(BaseCell::new_unchecked(83)), Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(74)), Some(BaseCell::new_unchecked(108)), Some(BaseCell::new_unchecked(100)), Some(BaseCell::new_unchecked(95))], // 92
    [Some(BaseCell::new_unchecked(93)), Some(BaseCell::new_unchecked(79)), Some(BaseCell::new_unchecked(90)), Some(BaseCell::new_unchecked(77)), Some(BaseCell::new_unchecked(109)), Some(BaseCell::new_unchecked(95)), Some(BaseCell::new_unchecked(106))], // 93
    [Some(BaseCell::new_unchecked(94)), Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(81)), Some(BaseCell::new_unchecked(75)), Some(BaseCell::new_unchecked(107)), Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(101))], // 94
    [Some(BaseCell::new_unchecked(95)), Some(BaseCell::new_unchecked(92)), Some(BaseCell::new_unchecked(79)), Some(BaseCell::new_unchecked(78)), Some(BaseCell::new_unchecked(109)), Some(BaseCell::new_unchecked(108)), Some(BaseCell::new_unchecked(93))], // 95
    [Some(BaseCell::new_unchecked(96)), Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(98)), Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(76)), Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(82))], // 96
    [Some(BaseCell::new_unchecked(97)), None, Some(BaseCell::new_unchecked(98)), Some(BaseCell::new_unchecked(84)), Some(BaseCell::new_unchecked(103)), Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(111))], // 97
    [Some(BaseCell::new_unchecked(98)), Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(97)), Some(BaseCell::new_unchecked(111)), Some(BaseCell::new_unchecked(82)), Some(BaseCell::new_unchecked(96)), Some(BaseCell::new_unchecked(84))], // 98
    [Some(BaseCell::new_unchecked(99)), Some(BaseCell::new_unchecked(80)), Some(BaseCell::new_unchecked(105)), Some(BaseCell::new_unchecked(88)), Some(BaseCell::new_unchecked(106)), Some(BaseCell::new_unchecked(90)), Some(BaseCell::new_unchecked(113))], // 99
    [Some(BaseCell::new_unchecked(100)), Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(83)), Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(108)), Some(BaseCell::new_unchecked(114)), Some(BaseCell::new_unchecked(92))], // 100
    [Some(BaseCell::new_unchecked(101)), Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(107)), Some(BaseCell::new_unchecked(112)), Some(BaseCell::new_unchecked(81)), Some(BaseCell::new_unchecked(85)), Some(BaseCell::new_unchecked(94))], // 101
    [Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(101)), Some(BaseCell::new_unchecked(87)), Some(BaseCell::new_unchecked(85)), Some(BaseCell::new_unchecked(114)), Some(BaseCell::new_unchecked(112)), Some(BaseCell::new_unchecked(100))], // 102
    [Some(BaseCell::new_unchecked(103)), Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(97)), Some(BaseCell::new_unchecked(89)), Some(BaseCell::new_unchecked(116)), Some(BaseCell::new_unchecked(105)), Some(BaseCell::new_unchecked(111))], // 103
    [Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(107)), Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(115)), Some(BaseCell::new_unchecked(86)), Some(BaseCell::new_unchecked(94)), Some(BaseCell::new_unchecked(96))], // 104
    [Some(BaseCell::new_unchecked(105)), Some(BaseCell::new_unchecked(88)), Some(BaseCell::new_unchecked(103)), Some(BaseCell::new_unchecked(91)), Some(BaseCell::new_unchecked(113)), Some(BaseCell::new_unchecked(99)), Some(BaseCell::new_unchecked(116))], // 105
    [Some(BaseCell::new_unchecked(106)), Some(BaseCell::new_unchecked(93)), Some(BaseCell::new_unchecked(99)), Some(BaseCell::new_unchecked(90)), Some(BaseCell::new_unchecked(117)), Some(BaseCell::new_unchecked(109)), Some(BaseCell::new_unchecked(113))], // 106
    [Some(BaseCell::new_unchecked(107)), None, Some(BaseCell::new_unchecked(101)), Some(BaseCell::new_unchecked(94)), Some(BaseCell::new_unchecked(115)), Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(112))], // 107
    [Some(BaseCell::new_unchecked(108)), Some(BaseCell::new_unchecked(100)), Some(BaseCell::new_unchecked(95)), Some(BaseCell::new_unchecked(92)), Some(BaseCell::new_unchecked(118)), Some(BaseCell::new_unchecked(114)), Some(BaseCell::new_unchecked(109))], // 108
    [Some(BaseCell::new_unchecked(109)), Some(BaseCell::new_unchecked(108)), Some(BaseCell::new_unchecked(93)), Some(BaseCell::new_unchecked(95)), Some(BaseCell::new_unchecked(117)), Some(BaseCell::new_unchecked(118)), Some(BaseCell::new_unchecked(106))], // 109
    [Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(98)), Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(96)), Some(BaseCell::new_unchecked(119)), Some(BaseCell::new_unchecked(111)), Some(BaseCell::new_unchecked(115))], // 110
    [Some(BaseCell::new_unchecked(111)), Some(BaseCell::new_unchecked(97)), Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(98)), Some(BaseCell::new_unchecked(116)), Some(BaseCell::new_unchecked(103)), Some(BaseCell::new_unchecked(119))], // 111
    [Some(BaseCell::new_unchecked(112)), Some(BaseCell::new_unchecked(107)), Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(101)), Some(BaseCell::new_unchecked(120)), Some(BaseCell::new_unchecked(115)), Some(BaseCell::new_unchecked(114))], // 112
    [Some(BaseCell::new_unchecked(113)), Some(BaseCell::new_unchecked(99)), Some(BaseCell::new_unchecked(116)), Some(BaseCell::new_unchecked(105)), Some(BaseCell::new_unchecked(117)), Some(BaseCell::new_unchecked(106)), Some(BaseCell::new_unchecked(121))], // 113
    [Some(BaseCell::new_unchecked(114)), Some(BaseCell::new_unchecked(112)), Some(BaseCell::new_unchecked(100)), Some(BaseCell::new_unchecked(102)), Some(BaseCell::new_unchecked(118)), Some(BaseCell::new_unchecked(120)), Some(BaseCell::new_unchecked(108))], // 114
    [Some(BaseCell::new_unchecked(115)), Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(107)), Some(BaseCell::new_unchecked(104)), Some(BaseCell::new_unchecked(120)), Some(BaseCell::new_unchecked(119)), Some(BaseCell::new_unchecked(112))], // 115
    [Some(BaseCell::new_unchecked(116)), Some(BaseCell::new_unchecked(103)), Some(BaseCell::new_unchecked(119)), Some(BaseCell::new_unchecked(111)), Some(BaseCell::new_unchecked(113)), Some(BaseCell::new_unchecked(105)), Some(BaseCell::new_unchecked(121))], // 116
    [Some(BaseCell::new_unchecked(117)), None, Some(BaseCell::new_unchecked(109)), Some(BaseCell::new_unchecked(118)), Some(BaseCell::new_unchecked(113)), Some(BaseCell::new_unchecked(121)), Some(BaseCell::new_unchecked(106))], // 117
    [Some(BaseCell::new_unchecked(118)), Some(BaseCell::new_unchecked(120)), Some(BaseCell::new_unchecked(108)), Some(BaseCell::new_unchecked(114)), Some(BaseCell::new_unchecked(117)), Some(BaseCell::new_unchecked(121)), Some(BaseCell::new_unchecked(109))], // 118
    [Some(BaseCell::new_unchecked(119)), Some(BaseCell::new_unchecked(111)), Some(BaseCell::new_unchecked(115)), Some(BaseCell::new_unchecked(110)), Some(BaseCell::new_unchecked(121)), Some(BaseCell::new_unchecked(116)), Some(BaseCell::new_unchecked(120))], // 119
    [Some(BaseCell::new_unchecked(120)), Some(BaseCell::new_unchecked(115)), Some(BaseCell::new_unchecked(114)), Some(BaseCell::new_unchecked(112)), Some(BaseCell::new_unchecked(121)), Some(BaseCell::new_unchecked(119)), Some(BaseCell::new_unchecked(118))], // 120
    [Some(BaseCell::new_unchecked(121)), Some(BaseCell::new_unchecked(116)), Some(BaseCell::new_unchecked(120)), Some(BaseCell::new_unchecked(119)), Some(BaseCell::new_unchecked(117)), Some(BaseCell::new_unchecked(113)), Some(BaseCell::new_unchecked(118))], // 121
];

/// Number of 60° CCW rotations into the neighbor base cell system, in each
/// `IJK` direction (meaningless where there is no neighbor).
#[rustfmt::skip]
const BASE_CELL_ROTATIONS: [[u8; 7]; MAX as usize + 1] = [
    [0, 5, 0, 0, 1, 5, 1], // 0
    [0, 0, 1, 0, 1, 0, 1], // 1
    [0, 0, 0, 0, 0, 5, 0], // 2
    [0, 5, 0, 0, 2, 5, 1], // 3
    [0, 0, 1, 0, 3, 4, 2], // 4
    [0, 0, 1, 0, 1, 0, 1], // 5
    [0, 0, 0, 3, 5, 5, 0], // 6
    [0, 0, 0, 0, 0, 5, 0], // 7
    [0, 5, 0, 0, 0, 5, 1], // 8
    [0, 0, 1, 3, 0, 0, 1], // 9
    [0, 0, 1, 3, 0, 0, 1], // 10
    [0, 3, 3, 3, 0, 0, 0], // 11
    [0, 5, 0, 0, 3, 5, 1], // 12
    [0, 0, 1, 0, 1, 0, 1], // 13
    [0, 0, 3, 0, 5, 2, 0], // 14
    [0, 5, 0, 0, 4, 5, 1], // 15
    [0, 0, 0, 0, 0, 5, 0], // 16
    [0, 3, 3, 3, 3, 0, 3], // 17
    [0, 0, 0, 3, 5, 5, 0], // 18
    [0, 3, 3, 3, 0, 0, 0], // 19
    [0, 3, 3, 3, 0, 3, 0], // 20
    [0, 0, 0, 3, 5, 5, 0], // 21
    [0, 0, 1, 0, 1, 0, 1], // 22
    [0, 3, 3, 3, 0, 3, 0], // 23
    [0, 0, 3, 0, 5, 2, 0], // 24
    [0, 0, 0, 3, 0, 0, 3], // 25
    [0, 0, 0, 0, 0, 5, 0], // 26
    [0, 3, 0, 0, 0, 3, 3], // 27
    [0, 0, 1, 0, 1, 0, 1], // 28
    [0, 0, 1, 3, 0, 0, 1], // 29
    [0, 3, 3, 3, 0, 0, 0], // 30
    [0, 0, 0, 0, 0, 5, 0], // 31
    [0, 3, 3, 3, 3, 0, 3], // 32
    [0, 0, 1, 3, 0, 0, 1], // 33
    [0, 3, 3, 3, 3, 0, 3], // 34
    [0, 0, 3, 0, 3, 0, 3], // 35
    [0, 0, 0, 3, 0, 0, 3], // 36
    [0, 3, 0, 0, 0, 3, 3], // 37
    [0, 0, 3, 0, 5, 2, 0], // 38
    [0, 3, 0, 0, 3, 3, 0], // 39
    [0, 3, 0, 0, 3, 3, 0], // 40
    [0, 0, 0, 3, 5, 5, 0], // 41
    [0, 0, 0, 3, 5, 5, 0], // 42
    [0, 3, 3, 3, 0, 0, 0], // 43
    [0, 0, 1, 3, 0, 0, 1], // 44
    [0, 0, 3, 0, 0, 3, 3], // 45
    [0, 0, 0, 3, 0, 3, 0], // 46
    [0, 3, 3, 3, 0, 3, 0], // 47
    [0, 3, 3, 3, 0, 3, 0], // 48
    [0, 0, 3, 0, 5, 2, 0], // 49
    [0, 0, 0, 3, 0, 0, 3], // 50
    [0, 3, 0, 0, 0, 3, 3], // 51
    [0, 0, 3, 0, 3, 0, 3], // 52
    [0, 3, 3, 3, 0, 0, 0], // 53
    [0, 0, 3, 0, 3, 0, 3], // 54
    [0, 0, 3, 0, 0, 3, 3], // 55
    [0, 3, 3, 3, 0, 0, 3], // 56
    [0, 0, 0, 3, 0, 3, 0], // 57
    [0, 0, 3, 0, 5, 2, 0], // 58
    [0, 3, 3, 3, 3, 3, 0], // 59
    [0, 3, 3, 3, 3, 3, 0], // 60
    [0, 3, 3, 3, 3, 0, 3], // 61
    [0, 3, 3, 3, 3, 0, 3], // 62
    [0, 0, 3, 0, 5, 2, 0], // 63
    [0, 0, 0, 3, 0, 0, 3], // 64
    [0, 3, 3, 3, 0, 3, 0], // 65
    [0, 3, 0, 0, 0, 3, 3], // 66
    [0, 3, 0, 0, 3, 3, 0], // 67
    [0, 3, 3, 3, 0, 0, 0], // 68
    [0, 3, 0, 0, 3, 3, 0], // 69
    [0, 0, 3, 0, 0, 3, 3], // 70
    [0, 0, 0, 3, 0, 3, 0], // 71
    [0, 0, 3, 0, 5, 2, 0], // 72
    [0, 3, 3, 3, 0, 0, 3], // 73
    [0, 3, 3, 3, 0, 0, 3], // 74
    [0, 0, 0, 3, 0, 0, 3], // 75
    [0, 3, 0, 0, 0, 3, 3], // 76
    [0, 0, 0, 3, 0, 5, 0], // 77
    [0, 3, 3, 3, 0, 0, 0], // 78
    [0, 0, 1, 3, 1, 0, 1], // 79
    [0, 0, 1, 3, 1, 0, 1], // 80
    [0, 0, 3, 0, 3, 0, 3], // 81
    [0, 0, 3, 0, 3, 0, 3], // 82
    [0, 0, 3, 0, 5, 2, 0], // 83
    [0, 0, 3, 0, 0, 3, 3], // 84
    [0, 0, 0, 3, 0, 3, 0], // 85
    [0, 3, 0, 0, 3, 3, 0], // 86
    [0, 3, 3, 3, 3, 3, 0], // 87
    [0, 0, 0, 3, 0, 5, 0], // 88
    [0, 3, 3, 3, 3, 3, 0], // 89
    [0, 0, 0, 0, 0, 0, 1], // 90
    [0, 3, 3, 3, 0, 0, 0], // 91
    [0, 0, 0, 3, 0, 5, 0], // 92
    [0, 5, 0, 0, 5, 5, 0], // 93
    [0, 0, 3, 0, 0, 3, 3], // 94
    [0, 0, 0, 0, 0, 0, 1], // 95
    [0, 0, 0, 3, 0, 3, 0], // 96
    [0, 0, 3, 0, 5, 2, 0], // 97
    [0, 3, 3, 3, 0, 0, 3], // 98
    [0, 5, 0, 0, 5, 5, 0], // 99
    [0, 0, 1, 3, 1, 0, 1], // 100
    [0, 3, 3, 3, 0, 0, 3], // 101
    [0, 3, 3, 3, 0, 0, 0], // 102
    [0, 0, 1, 3, 1, 0, 1], // 103
    [0, 3, 3, 3, 3, 3, 0], // 104
    [0, 0, 0, 0, 0, 0, 1], // 105
    [0, 0, 1, 0, 3, 5, 1], // 106
    [0, 0, 3, 0, 5, 2, 0], // 107
    [0, 5, 0, 0, 5, 5, 0], // 108
    [0, 0, 1, 0, 4, 5, 1], // 109
    [0, 3, 3, 3, 0, 0, 0], // 110
    [0, 0, 0, 3, 0, 5, 0], // 111
    [0, 0, 0, 3, 0, 5, 0], // 112
    [0, 0, 1, 0, 2, 5, 1], // 113
    [0, 0, 0, 0, 0, 0, 1], // 114
    [0, 0, 1, 3, 1, 0, 1], // 115
    [0, 5, 0, 0, 5, 5, 0], // 116
    [0, 0, 1, 0, 3, 4, 2], // 117
    [0, 0, 1, 0, 0, 5, 1], // 118
    [0, 0, 0, 0, 0, 0, 1], // 119
    [0, 5, 0, 0, 5, 5, 0], // 120
    [0, 0, 1, 0, 1, 5, 1], // 121
];

/// Per-base-cell static metadata: home face+ijk and, for pentagons, the
/// clockwise-offset adjacent faces.
#[rustfmt::skip]
const BASE_CELL_DATA: [BaseCellData; MAX as usize + 1] = [
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 0
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 1
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 2
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 3
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(2, 0, 0)), cw_offset_pent: None }, // 4
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 5
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 6
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 7
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 8
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 9
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 10
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 11
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 12
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 13
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(2), Face::new_unchecked(6))) }, // 14
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 15
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 16
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 17
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 18
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 19
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 20
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 21
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 22
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 23
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(1), Face::new_unchecked(5))) }, // 24
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 25
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 26
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 27
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 28
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 29
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 30
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 31
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 32
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 33
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 34
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 35
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 36
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 37
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(3), Face::new_unchecked(7))) }, // 38
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 39
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 40
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 41
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 42
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 43
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 44
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 45
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 46
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 47
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 48
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(0), Face::new_unchecked(9))) }, // 49
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 50
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 51
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 52
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 53
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 54
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 55
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 56
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 57
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(4), Face::new_unchecked(8))) }, // 58
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 59
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 60
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 61
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 62
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(11), Face::new_unchecked(15))) }, // 63
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 64
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 65
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 66
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 67
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 68
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 69
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 70
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 71
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(12), Face::new_unchecked(16))) }, // 72
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 73
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 74
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 75
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 76
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 77
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 78
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 79
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 80
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 81
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(1, 1, 0)), cw_offset_pent: None }, // 82
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(10), Face::new_unchecked(19))) }, // 83
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 84
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 85
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 86
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 87
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 88
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 89
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 90
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 91
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 92
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 93
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 94
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 95
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 96
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(13), Face::new_unchecked(17))) }, // 97
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 98
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 99
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 100
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 101
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 102
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 103
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 104
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 105
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 106
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(2, 0, 0)), cw_offset_pent: Some((Face::new_unchecked(14), Face::new_unchecked(18))) }, // 107
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 108
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 109
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 1, 1)), cw_offset_pent: None }, // 110
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 111
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 0, 1)), cw_offset_pent: None }, // 112
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 113
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 114
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 1, 0)), cw_offset_pent: None }, // 115
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 116
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(2, 0, 0)), cw_offset_pent: None }, // 117
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 118
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 0, 0)), cw_offset_pent: None }, // 119
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(1, 0, 1)), cw_offset_pent: None }, // 120
    BaseCellData { home: FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(1, 0, 0)), cw_offset_pent: None }, // 121
];

/// For each base cell, the CCW rotations needed to go from its home-face
/// vertex numbering to the vertex numbering on another face it reaches.
#[rustfmt::skip]
const BASE_CELL_VERTEX_ROTATIONS: [[(Face, u8); 5]; MAX as usize + 1] = [
    [(Face::new_unchecked(0), 5), (Face::new_unchecked(1), 0), (Face::new_unchecked(2), 1), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 0
    [(Face::new_unchecked(1), 5), (Face::new_unchecked(2), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 1
    [(Face::new_unchecked(0), 5), (Face::new_unchecked(1), 0), (Face::new_unchecked(2), 1), (Face::new_unchecked(6), 3), (Face::new_unchecked(0), 0)], // base cell 2
    [(Face::new_unchecked(1), 5), (Face::new_unchecked(2), 0), (Face::new_unchecked(3), 1), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 3
    [(Face::new_unchecked(4), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(2), 3), (Face::new_unchecked(1), 2), (Face::new_unchecked(3), 4)], // base cell 4
    [(Face::new_unchecked(0), 5), (Face::new_unchecked(1), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 5
    [(Face::new_unchecked(1), 0), (Face::new_unchecked(2), 1), (Face::new_unchecked(6), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 6
    [(Face::new_unchecked(1), 5), (Face::new_unchecked(2), 0), (Face::new_unchecked(3), 1), (Face::new_unchecked(7), 3), (Face::new_unchecked(0), 0)], // base cell 7
    [(Face::new_unchecked(0), 0), (Face::new_unchecked(1), 1), (Face::new_unchecked(4), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 8
    [(Face::new_unchecked(1), 5), (Face::new_unchecked(2), 0), (Face::new_unchecked(7), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 9
    [(Face::new_unchecked(0), 5), (Face::new_unchecked(1), 0), (Face::new_unchecked(6), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 10
    [(Face::new_unchecked(1), 0), (Face::new_unchecked(6), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 11
    [(Face::new_unchecked(2), 5), (Face::new_unchecked(3), 0), (Face::new_unchecked(4), 1), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 12
    [(Face::new_unchecked(2), 5), (Face::new_unchecked(3), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 13
    [(Face::new_unchecked(1), 0), (Face::new_unchecked(6), 3), (Face::new_unchecked(11), 0), (Face::new_unchecked(2), 1), (Face::new_unchecked(7), 4)], // base cell 14
    [(Face::new_unchecked(0), 1), (Face::new_unchecked(3), 5), (Face::new_unchecked(4), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 15
    [(Face::new_unchecked(0), 0), (Face::new_unchecked(1), 1), (Face::new_unchecked(4), 5), (Face::new_unchecked(5), 3), (Face::new_unchecked(0), 0)], // base cell 16
    [(Face::new_unchecked(1), 3), (Face::new_unchecked(6), 0), (Face::new_unchecked(11), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 17
    [(Face::new_unchecked(0), 0), (Face::new_unchecked(1), 1), (Face::new_unchecked(5), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 18
    [(Face::new_unchecked(2), 0), (Face::new_unchecked(7), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 19
    [(Face::new_unchecked(2), 3), (Face::new_unchecked(7), 0), (Face::new_unchecked(11), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 20
    [(Face::new_unchecked(2), 0), (Face::new_unchecked(3), 1), (Face::new_unchecked(7), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 21
    [(Face::new_unchecked(0), 0), (Face::new_unchecked(4), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 22
    [(Face::new_unchecked(1), 3), (Face::new_unchecked(6), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 23
    [(Face::new_unchecked(10), 0), (Face::new_unchecked(1), 1), (Face::new_unchecked(6), 4), (Face::new_unchecked(0), 0), (Face::new_unchecked(5), 3)], // base cell 24
    [(Face::new_unchecked(1), 3), (Face::new_unchecked(6), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(11), 3), (Face::new_unchecked(0), 0)], // base cell 25
    [(Face::new_unchecked(2), 5), (Face::new_unchecked(3), 0), (Face::new_unchecked(4), 1), (Face::new_unchecked(8), 3), (Face::new_unchecked(0), 0)], // base cell 26
    [(Face::new_unchecked(6), 3), (Face::new_unchecked(7), 3), (Face::new_unchecked(11), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 27
    [(Face::new_unchecked(3), 5), (Face::new_unchecked(4), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 28
    [(Face::new_unchecked(2), 5), (Face::new_unchecked(3), 0), (Face::new_unchecked(8), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 29
    [(Face::new_unchecked(0), 0), (Face::new_unchecked(5), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 30
    [(Face::new_unchecked(0), 1), (Face::new_unchecked(3), 5), (Face::new_unchecked(4), 0), (Face::new_unchecked(9), 3), (Face::new_unchecked(0), 0)], // base cell 31
    [(Face::new_unchecked(0), 3), (Face::new_unchecked(5), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 32
    [(Face::new_unchecked(0), 0), (Face::new_unchecked(4), 5), (Face::new_unchecked(5), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 33
    [(Face::new_unchecked(2), 3), (Face::new_unchecked(7), 0), (Face::new_unchecked(12), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 34
    [(Face::new_unchecked(6), 3), (Face::new_unchecked(11), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 35
    [(Face::new_unchecked(2), 3), (Face::new_unchecked(7), 0), (Face::new_unchecked(11), 3), (Face::new_unchecked(12), 3), (Face::new_unchecked(0), 0)], // base cell 36
    [(Face::new_unchecked(5), 3), (Face::new_unchecked(6), 3), (Face::new_unchecked(10), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 37
    [(Face::new_unchecked(12), 0), (Face::new_unchecked(3), 1), (Face::new_unchecked(8), 4), (Face::new_unchecked(2), 0), (Face::new_unchecked(7), 3)], // base cell 38
    [(Face::new_unchecked(6), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 39
    [(Face::new_unchecked(7), 0), (Face::new_unchecked(11), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 40
    [(Face::new_unchecked(0), 1), (Face::new_unchecked(4), 0), (Face::new_unchecked(9), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 41
    [(Face::new_unchecked(3), 0), (Face::new_unchecked(4), 1), (Face::new_unchecked(8), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 42
    [(Face::new_unchecked(3), 0), (Face::new_unchecked(8), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 43
    [(Face::new_unchecked(3), 5), (Face::new_unchecked(4), 0), (Face::new_unchecked(9), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 44
    [(Face::new_unchecked(6), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(11), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 45
    [(Face::new_unchecked(6), 3), (Face::new_unchecked(7), 3), (Face::new_unchecked(11), 0), (Face::new_unchecked(16), 3), (Face::new_unchecked(0), 0)], // base cell 46
    [(Face::new_unchecked(3), 3), (Face::new_unchecked(8), 0), (Face::new_unchecked(12), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 47
    [(Face::new_unchecked(0), 3), (Face::new_unchecked(5), 0), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 48
    [(Face::new_unchecked(4), 0), (Face::new_unchecked(9), 3), (Face::new_unchecked(14), 0), (Face::new_unchecked(0), 1), (Face::new_unchecked(5), 4)], // base cell 49
    [(Face::new_unchecked(0), 3), (Face::new_unchecked(5), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0)], // base cell 50
    [(Face::new_unchecked(7), 3), (Face::new_unchecked(8), 3), (Face::new_unchecked(12), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 51
    [(Face::new_unchecked(5), 3), (Face::new_unchecked(10), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 52
    [(Face::new_unchecked(4), 0), (Face::new_unchecked(9), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 53
    [(Face::new_unchecked(7), 3), (Face::new_unchecked(12), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 54
    [(Face::new_unchecked(7), 0), (Face::new_unchecked(11), 3), (Face::new_unchecked(12), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 55
    [(Face::new_unchecked(6), 3), (Face::new_unchecked(11), 0), (Face::new_unchecked(16), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 56
    [(Face::new_unchecked(5), 1), (Face::new_unchecked(6), 3), (Face::new_unchecked(10), 0), (Face::new_unchecked(15), 3), (Face::new_unchecked(0), 0)], // base cell 57
    [(Face::new_unchecked(4), 1), (Face::new_unchecked(9), 4), (Face::new_unchecked(3), 0), (Face::new_unchecked(8), 3), (Face::new_unchecked(13), 0)], // base cell 58
    [(Face::new_unchecked(6), 3), (Face::new_unchecked(10), 0), (Face::new_unchecked(15), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 59
    [(Face::new_unchecked(7), 3), (Face::new_unchecked(11), 0), (Face::new_unchecked(16), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 60
    [(Face::new_unchecked(4), 3), (Face::new_unchecked(9), 0), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 61
    [(Face::new_unchecked(3), 3), (Face::new_unchecked(8), 0), (Face::new_unchecked(13), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 62
    [(Face::new_unchecked(16), 0), (Face::new_unchecked(11), 3), (Face::new_unchecked(6), 0), (Face::new_unchecked(15), 1), (Face::new_unchecked(10), 4)], // base cell 63
    [(Face::new_unchecked(3), 3), (Face::new_unchecked(8), 0), (Face::new_unchecked(12), 3), (Face::new_unchecked(13), 3), (Face::new_unchecked(0), 0)], // base cell 64
    [(Face::new_unchecked(4), 3), (Face::new_unchecked(9), 0), (Face::new_unchecked(13), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 65
    [(Face::new_unchecked(5), 3), (Face::new_unchecked(9), 3), (Face::new_unchecked(14), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 66
    [(Face::new_unchecked(5), 0), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 67
    [(Face::new_unchecked(11), 3), (Face::new_unchecked(16), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 68
    [(Face::new_unchecked(8), 0), (Face::new_unchecked(12), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 69
    [(Face::new_unchecked(5), 0), (Face::new_unchecked(10), 3), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 70
    [(Face::new_unchecked(7), 3), (Face::new_unchecked(8), 3), (Face::new_unchecked(12), 0), (Face::new_unchecked(17), 3), (Face::new_unchecked(0), 0)], // base cell 71
    [(Face::new_unchecked(16), 1), (Face::new_unchecked(11), 4), (Face::new_unchecked(17), 0), (Face::new_unchecked(12), 3), (Face::new_unchecked(7), 0)], // base cell 72
    [(Face::new_unchecked(7), 3), (Face::new_unchecked(12), 0), (Face::new_unchecked(17), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 73
    [(Face::new_unchecked(5), 3), (Face::new_unchecked(10), 0), (Face::new_unchecked(15), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 74
    [(Face::new_unchecked(4), 3), (Face::new_unchecked(9), 0), (Face::new_unchecked(13), 3), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0)], // base cell 75
    [(Face::new_unchecked(8), 3), (Face::new_unchecked(9), 3), (Face::new_unchecked(13), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 76
    [(Face::new_unchecked(11), 3), (Face::new_unchecked(15), 1), (Face::new_unchecked(16), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 77
    [(Face::new_unchecked(10), 3), (Face::new_unchecked(15), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 78
    [(Face::new_unchecked(10), 3), (Face::new_unchecked(15), 0), (Face::new_unchecked(16), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 79
    [(Face::new_unchecked(11), 3), (Face::new_unchecked(16), 0), (Face::new_unchecked(17), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 80
    [(Face::new_unchecked(9), 3), (Face::new_unchecked(14), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 81
    [(Face::new_unchecked(8), 3), (Face::new_unchecked(13), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 82
    [(Face::new_unchecked(10), 3), (Face::new_unchecked(5), 0), (Face::new_unchecked(19), 1), (Face::new_unchecked(14), 4), (Face::new_unchecked(15), 0)], // base cell 83
    [(Face::new_unchecked(8), 0), (Face::new_unchecked(12), 3), (Face::new_unchecked(13), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 84
    [(Face::new_unchecked(5), 3), (Face::new_unchecked(9), 3), (Face::new_unchecked(14), 0), (Face::new_unchecked(19), 3), (Face::new_unchecked(0), 0)], // base cell 85
    [(Face::new_unchecked(9), 0), (Face::new_unchecked(13), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 86
    [(Face::new_unchecked(5), 3), (Face::new_unchecked(14), 0), (Face::new_unchecked(19), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 87
    [(Face::new_unchecked(12), 3), (Face::new_unchecked(16), 1), (Face::new_unchecked(17), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 88
    [(Face::new_unchecked(8), 3), (Face::new_unchecked(12), 0), (Face::new_unchecked(17), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 89
    [(Face::new_unchecked(11), 3), (Face::new_unchecked(15), 1), (Face::new_unchecked(16), 0), (Face::new_unchecked(17), 5), (Face::new_unchecked(0), 0)], // base cell 90
    [(Face::new_unchecked(12), 3), (Face::new_unchecked(17), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 91
    [(Face::new_unchecked(10), 3), (Face::new_unchecked(15), 0), (Face::new_unchecked(19), 1), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 92
    [(Face::new_unchecked(15), 1), (Face::new_unchecked(16), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 93
    [(Face::new_unchecked(9), 0), (Face::new_unchecked(13), 3), (Face::new_unchecked(14), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 94
    [(Face::new_unchecked(10), 3), (Face::new_unchecked(15), 0), (Face::new_unchecked(16), 5), (Face::new_unchecked(19), 1), (Face::new_unchecked(0), 0)], // base cell 95
    [(Face::new_unchecked(8), 3), (Face::new_unchecked(9), 3), (Face::new_unchecked(13), 0), (Face::new_unchecked(18), 3), (Face::new_unchecked(0), 0)], // base cell 96
    [(Face::new_unchecked(13), 3), (Face::new_unchecked(8), 0), (Face::new_unchecked(17), 1), (Face::new_unchecked(12), 4), (Face::new_unchecked(18), 0)], // base cell 97
    [(Face::new_unchecked(8), 3), (Face::new_unchecked(13), 0), (Face::new_unchecked(18), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 98
    [(Face::new_unchecked(16), 1), (Face::new_unchecked(17), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 99
    [(Face::new_unchecked(14), 3), (Face::new_unchecked(15), 5), (Face::new_unchecked(19), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 100
    [(Face::new_unchecked(9), 3), (Face::new_unchecked(14), 0), (Face::new_unchecked(19), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 101
    [(Face::new_unchecked(14), 3), (Face::new_unchecked(19), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 102
    [(Face::new_unchecked(12), 3), (Face::new_unchecked(17), 0), (Face::new_unchecked(18), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 103
    [(Face::new_unchecked(9), 3), (Face::new_unchecked(13), 0), (Face::new_unchecked(18), 3), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 104
    [(Face::new_unchecked(12), 3), (Face::new_unchecked(16), 1), (Face::new_unchecked(17), 0), (Face::new_unchecked(18), 5), (Face::new_unchecked(0), 0)], // base cell 105
    [(Face::new_unchecked(15), 1), (Face::new_unchecked(16), 0), (Face::new_unchecked(17), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 106
    [(Face::new_unchecked(18), 1), (Face::new_unchecked(13), 4), (Face::new_unchecked(19), 0), (Face::new_unchecked(14), 3), (Face::new_unchecked(9), 0)], // base cell 107
    [(Face::new_unchecked(15), 0), (Face::new_unchecked(19), 1), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 108
    [(Face::new_unchecked(15), 0), (Face::new_unchecked(16), 5), (Face::new_unchecked(19), 1), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 109
    [(Face::new_unchecked(13), 3), (Face::new_unchecked(18), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 110
    [(Face::new_unchecked(13), 3), (Face::new_unchecked(17), 1), (Face::new_unchecked(18), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 111
    [(Face::new_unchecked(14), 3), (Face::new_unchecked(18), 1), (Face::new_unchecked(19), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 112
    [(Face::new_unchecked(16), 1), (Face::new_unchecked(17), 0), (Face::new_unchecked(18), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 113
    [(Face::new_unchecked(14), 3), (Face::new_unchecked(15), 5), (Face::new_unchecked(18), 1), (Face::new_unchecked(19), 0), (Face::new_unchecked(0), 0)], // base cell 114
    [(Face::new_unchecked(13), 3), (Face::new_unchecked(18), 0), (Face::new_unchecked(19), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 115
    [(Face::new_unchecked(17), 1), (Face::new_unchecked(18), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 116
    [(Face::new_unchecked(15), 5), (Face::new_unchecked(19), 0), (Face::new_unchecked(17), 3), (Face::new_unchecked(18), 2), (Face::new_unchecked(16), 4)], // base cell 117
    [(Face::new_unchecked(15), 5), (Face::new_unchecked(18), 1), (Face::new_unchecked(19), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 118
    [(Face::new_unchecked(13), 3), (Face::new_unchecked(17), 1), (Face::new_unchecked(18), 0), (Face::new_unchecked(19), 5), (Face::new_unchecked(0), 0)], // base cell 119
    [(Face::new_unchecked(18), 1), (Face::new_unchecked(19), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 120
    [(Face::new_unchecked(17), 1), (Face::new_unchecked(18), 0), (Face::new_unchecked(19), 5), (Face::new_unchecked(0), 0), (Face::new_unchecked(0), 0)], // base cell 121
];
