//! Ray/box test for one ray against many boxes (Williams et al. slopes).
//!
//! [`RayClassifier::set`] does all the division up front: per-axis inverse
//! direction, the six pairwise slopes `s_ab = dir_b / dir_a`, their
//! intercepts `c_ab = origin_b - s_ab * origin_a`, and a classification code
//! from the sign of each direction component. [`RayClassifier::test`] then
//! dispatches on the code to one of 27 specialized predicates that only
//! multiply, add and compare.
//!
//! Each predicate checks, for every ordered pair `(a, b)` of axes the ray
//! moves along, that it enters the slab of `b` no later than it leaves the
//! slab of `a`:
//!
//! ```text
//! s_ab * far_a - near_b + c_ab  >= 0   (dir_b > 0)
//!                               <= 0   (dir_b < 0)
//! ```
//!
//! where `far_a` is the face the ray exits through on `a` and `near_b` the
//! face it enters through on `b`. The origin must not be past the exit face
//! of any moving axis (half-line), and on a zero axis it must lie inside the
//! slab since that coordinate never changes.

use nalgebra::{Point3, Vector3};
use tracing::trace;
use vcad_kernel_bounds::{Aabb, RealCoord};

use crate::slab::invert;

/// Sign class of one direction component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sign {
    /// Negative.
    Minus = 0,
    /// Exactly zero (either sign) or NaN.
    Zero = 1,
    /// Positive.
    Plus = 2,
}

impl Sign {
    /// Classify a direction component.
    #[inline]
    pub fn of<T: RealCoord>(v: T) -> Self {
        if v.is_nan() || v == T::ZERO {
            Sign::Zero
        } else if v < T::ZERO {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Sign::Minus,
            1 => Sign::Zero,
            _ => Sign::Plus,
        }
    }
}

/// Direction class of a ray: one [`Sign`] per axis, named x-y-z.
///
/// `M` is minus, `O` zero, `P` plus, so `Pom` moves toward `+x`, is still in
/// `y` and moves toward `-z`. The discriminant is the classification code
/// `z << 4 | y << 2 | x` with digits `M = 0`, `O = 1`, `P = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum RayClass {
    Mmm = 0,
    Omm = 1,
    Pmm = 2,
    Mom = 4,
    Oom = 5,
    Pom = 6,
    Mpm = 8,
    Opm = 9,
    Ppm = 10,
    Mmo = 16,
    Omo = 17,
    Pmo = 18,
    Moo = 20,
    Ooo = 21,
    Poo = 22,
    Mpo = 24,
    Opo = 25,
    Ppo = 26,
    Mmp = 32,
    Omp = 33,
    Pmp = 34,
    Mop = 36,
    Oop = 37,
    Pop = 38,
    Mpp = 40,
    Opp = 41,
    Ppp = 42,
}

impl RayClass {
    /// All 27 classes in code order.
    pub const ALL: [RayClass; 27] = [
        RayClass::Mmm,
        RayClass::Omm,
        RayClass::Pmm,
        RayClass::Mom,
        RayClass::Oom,
        RayClass::Pom,
        RayClass::Mpm,
        RayClass::Opm,
        RayClass::Ppm,
        RayClass::Mmo,
        RayClass::Omo,
        RayClass::Pmo,
        RayClass::Moo,
        RayClass::Ooo,
        RayClass::Poo,
        RayClass::Mpo,
        RayClass::Opo,
        RayClass::Ppo,
        RayClass::Mmp,
        RayClass::Omp,
        RayClass::Pmp,
        RayClass::Mop,
        RayClass::Oop,
        RayClass::Pop,
        RayClass::Mpp,
        RayClass::Opp,
        RayClass::Ppp,
    ];

    /// Class for a sign per axis.
    pub fn from_signs(x: Sign, y: Sign, z: Sign) -> Self {
        Self::ALL[x as usize + 3 * y as usize + 9 * z as usize]
    }

    /// Class for a classification code; `None` for the encodable values
    /// that do not name a class (a digit of 3).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RayClass::Mmm),
            1 => Some(RayClass::Omm),
            2 => Some(RayClass::Pmm),
            4 => Some(RayClass::Mom),
            5 => Some(RayClass::Oom),
            6 => Some(RayClass::Pom),
            8 => Some(RayClass::Mpm),
            9 => Some(RayClass::Opm),
            10 => Some(RayClass::Ppm),
            16 => Some(RayClass::Mmo),
            17 => Some(RayClass::Omo),
            18 => Some(RayClass::Pmo),
            20 => Some(RayClass::Moo),
            21 => Some(RayClass::Ooo),
            22 => Some(RayClass::Poo),
            24 => Some(RayClass::Mpo),
            25 => Some(RayClass::Opo),
            26 => Some(RayClass::Ppo),
            32 => Some(RayClass::Mmp),
            33 => Some(RayClass::Omp),
            34 => Some(RayClass::Pmp),
            36 => Some(RayClass::Mop),
            37 => Some(RayClass::Oop),
            38 => Some(RayClass::Pop),
            40 => Some(RayClass::Mpp),
            41 => Some(RayClass::Opp),
            42 => Some(RayClass::Ppp),
            _ => None,
        }
    }

    /// The packed classification code.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Sign digits along x, y and z.
    pub fn digits(self) -> [u8; 3] {
        let code = self.code();
        [code & 3, (code >> 2) & 3, code >> 4]
    }

    /// Signs along x, y and z.
    pub fn signs(self) -> [Sign; 3] {
        self.digits().map(Sign::from_digit)
    }
}

/// Precomputed ray for testing against many boxes.
///
/// Build one per ray (or per worker, calling [`RayClassifier::set`] for each
/// new ray). Between `set` calls the state is read-only, so a classifier can
/// be shared by reference across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayClassifier<T: RealCoord> {
    origin: Point3<T>,
    direction: Vector3<T>,
    inv_direction: Vector3<T>,
    s_xy: T,
    s_yx: T,
    s_zy: T,
    s_yz: T,
    s_xz: T,
    s_zx: T,
    c_xy: T,
    c_yx: T,
    c_zy: T,
    c_yz: T,
    c_xz: T,
    c_zx: T,
    code: u8,
}

impl<T: RealCoord> RayClassifier<T> {
    /// Classify the ray from `origin` along `direction`.
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        let zero = T::ZERO;
        let mut classifier = Self {
            origin,
            direction,
            inv_direction: direction,
            s_xy: zero,
            s_yx: zero,
            s_zy: zero,
            s_yz: zero,
            s_xz: zero,
            s_zx: zero,
            c_xy: zero,
            c_yx: zero,
            c_zy: zero,
            c_yz: zero,
            c_xz: zero,
            c_zx: zero,
            code: 0,
        };
        classifier.set(origin, direction);
        classifier
    }

    /// Replace the ray and recompute every derived value.
    pub fn set(&mut self, origin: Point3<T>, direction: Vector3<T>) {
        let (o, d) = (&origin, &direction);
        let inv = invert(d);

        self.s_xy = d.y * inv.x;
        self.s_yx = d.x * inv.y;
        self.s_zy = d.y * inv.z;
        self.s_yz = d.z * inv.y;
        self.s_xz = d.z * inv.x;
        self.s_zx = d.x * inv.z;

        self.c_xy = o.y - self.s_xy * o.x;
        self.c_yx = o.x - self.s_yx * o.y;
        self.c_zy = o.y - self.s_zy * o.z;
        self.c_yz = o.z - self.s_yz * o.y;
        self.c_xz = o.z - self.s_xz * o.x;
        self.c_zx = o.x - self.s_zx * o.z;

        let class = RayClass::from_signs(Sign::of(d.x), Sign::of(d.y), Sign::of(d.z));
        self.code = class.code();
        self.origin = origin;
        self.direction = direction;
        self.inv_direction = inv;
        trace!(code = self.code, ?class, "ray classified");
    }

    /// Ray origin.
    pub fn origin(&self) -> &Point3<T> {
        &self.origin
    }

    /// Ray direction as given to [`RayClassifier::set`].
    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    /// The packed classification code.
    pub fn code(&self) -> u8 {
        self.code
    }

    /// The direction class, if the code names one.
    pub fn class(&self) -> Option<RayClass> {
        RayClass::from_code(self.code)
    }

    /// `true` if the ray (a half-line) touches the box. Faces count.
    ///
    /// A box with `min > max` on any axis is empty and never hits.
    pub fn test(&self, aabb: &Aabb<T>) -> bool {
        match self.class() {
            Some(class) => self.test_class(class, aabb),
            None => false,
        }
    }

    /// Entry distance (in units of the direction's length) for a box that
    /// [`RayClassifier::test`] accepts, `+inf` otherwise. Zero when the
    /// origin is inside the box.
    pub fn entry_distance(&self, aabb: &Aabb<T>) -> T {
        let Some(class) = self.class() else {
            return T::INFINITY;
        };
        if !self.test_class(class, aabb) {
            return T::INFINITY;
        }
        let [sx, sy, sz] = class.signs();
        let near = |sign: Sign, lo: T, hi: T, o: T, inv: T| match sign {
            Sign::Plus => (lo - o) * inv,
            Sign::Minus => (hi - o) * inv,
            Sign::Zero => T::ZERO,
        };
        let (o, inv) = (&self.origin, &self.inv_direction);
        T::ZERO
            .max_of(near(sx, aabb.min.x, aabb.max.x, o.x, inv.x))
            .max_of(near(sy, aabb.min.y, aabb.max.y, o.y, inv.y))
            .max_of(near(sz, aabb.min.z, aabb.max.z, o.z, inv.z))
    }

    fn test_class(&self, class: RayClass, aabb: &Aabb<T>) -> bool {
        if aabb.is_empty() {
            return false;
        }
        match class {
            RayClass::Mmm => self.mmm(aabb),
            RayClass::Omm => self.omm(aabb),
            RayClass::Pmm => self.pmm(aabb),
            RayClass::Mom => self.mom(aabb),
            RayClass::Oom => self.oom(aabb),
            RayClass::Pom => self.pom(aabb),
            RayClass::Mpm => self.mpm(aabb),
            RayClass::Opm => self.opm(aabb),
            RayClass::Ppm => self.ppm(aabb),
            RayClass::Mmo => self.mmo(aabb),
            RayClass::Omo => self.omo(aabb),
            RayClass::Pmo => self.pmo(aabb),
            RayClass::Moo => self.moo(aabb),
            RayClass::Ooo => self.ooo(aabb),
            RayClass::Poo => self.poo(aabb),
            RayClass::Mpo => self.mpo(aabb),
            RayClass::Opo => self.opo(aabb),
            RayClass::Ppo => self.ppo(aabb),
            RayClass::Mmp => self.mmp(aabb),
            RayClass::Omp => self.omp(aabb),
            RayClass::Pmp => self.pmp(aabb),
            RayClass::Mop => self.mop(aabb),
            RayClass::Oop => self.oop(aabb),
            RayClass::Pop => self.pop(aabb),
            RayClass::Mpp => self.mpp(aabb),
            RayClass::Opp => self.opp(aabb),
            RayClass::Ppp => self.ppp(aabb),
        }
    }

    fn mmm(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x >= lo.x
            && o.y >= lo.y
            && o.z >= lo.z
            && self.s_xy * lo.x - hi.y + self.c_xy <= T::ZERO
            && self.s_yx * lo.y - hi.x + self.c_yx <= T::ZERO
            && self.s_zy * lo.z - hi.y + self.c_zy <= T::ZERO
            && self.s_yz * lo.y - hi.z + self.c_yz <= T::ZERO
            && self.s_xz * lo.x - hi.z + self.c_xz <= T::ZERO
            && self.s_zx * lo.z - hi.x + self.c_zx <= T::ZERO
    }

    fn omm(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && o.y >= lo.y
            && o.z >= lo.z
            && self.s_zy * lo.z - hi.y + self.c_zy <= T::ZERO
            && self.s_yz * lo.y - hi.z + self.c_yz <= T::ZERO
    }

    fn pmm(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x <= hi.x
            && o.y >= lo.y
            && o.z >= lo.z
            && self.s_xy * hi.x - hi.y + self.c_xy <= T::ZERO
            && self.s_yx * lo.y - lo.x + self.c_yx >= T::ZERO
            && self.s_zy * lo.z - hi.y + self.c_zy <= T::ZERO
            && self.s_yz * lo.y - hi.z + self.c_yz <= T::ZERO
            && self.s_xz * hi.x - hi.z + self.c_xz <= T::ZERO
            && self.s_zx * lo.z - lo.x + self.c_zx >= T::ZERO
    }

    fn mom(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.y..=hi.y).contains(&o.y)
            && o.x >= lo.x
            && o.z >= lo.z
            && self.s_xz * lo.x - hi.z + self.c_xz <= T::ZERO
            && self.s_zx * lo.z - hi.x + self.c_zx <= T::ZERO
    }

    fn oom(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && (lo.y..=hi.y).contains(&o.y)
            && o.z >= lo.z
    }

    fn pom(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.y..=hi.y).contains(&o.y)
            && o.x <= hi.x
            && o.z >= lo.z
            && self.s_xz * hi.x - hi.z + self.c_xz <= T::ZERO
            && self.s_zx * lo.z - lo.x + self.c_zx >= T::ZERO
    }

    fn mpm(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x >= lo.x
            && o.y <= hi.y
            && o.z >= lo.z
            && self.s_xy * lo.x - lo.y + self.c_xy >= T::ZERO
            && self.s_yx * hi.y - hi.x + self.c_yx <= T::ZERO
            && self.s_zy * lo.z - lo.y + self.c_zy >= T::ZERO
            && self.s_yz * hi.y - hi.z + self.c_yz <= T::ZERO
            && self.s_xz * lo.x - hi.z + self.c_xz <= T::ZERO
            && self.s_zx * lo.z - hi.x + self.c_zx <= T::ZERO
    }

    fn opm(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && o.y <= hi.y
            && o.z >= lo.z
            && self.s_zy * lo.z - lo.y + self.c_zy >= T::ZERO
            && self.s_yz * hi.y - hi.z + self.c_yz <= T::ZERO
    }

    fn ppm(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x <= hi.x
            && o.y <= hi.y
            && o.z >= lo.z
            && self.s_xy * hi.x - lo.y + self.c_xy >= T::ZERO
            && self.s_yx * hi.y - lo.x + self.c_yx >= T::ZERO
            && self.s_zy * lo.z - lo.y + self.c_zy >= T::ZERO
            && self.s_yz * hi.y - hi.z + self.c_yz <= T::ZERO
            && self.s_xz * hi.x - hi.z + self.c_xz <= T::ZERO
            && self.s_zx * lo.z - lo.x + self.c_zx >= T::ZERO
    }

    fn mmo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.z..=hi.z).contains(&o.z)
            && o.x >= lo.x
            && o.y >= lo.y
            && self.s_xy * lo.x - hi.y + self.c_xy <= T::ZERO
            && self.s_yx * lo.y - hi.x + self.c_yx <= T::ZERO
    }

    fn omo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && (lo.z..=hi.z).contains(&o.z)
            && o.y >= lo.y
    }

    fn pmo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.z..=hi.z).contains(&o.z)
            && o.x <= hi.x
            && o.y >= lo.y
            && self.s_xy * hi.x - hi.y + self.c_xy <= T::ZERO
            && self.s_yx * lo.y - lo.x + self.c_yx >= T::ZERO
    }

    fn moo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.y..=hi.y).contains(&o.y)
            && (lo.z..=hi.z).contains(&o.z)
            && o.x >= lo.x
    }

    fn ooo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && (lo.y..=hi.y).contains(&o.y)
            && (lo.z..=hi.z).contains(&o.z)
    }

    fn poo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.y..=hi.y).contains(&o.y)
            && (lo.z..=hi.z).contains(&o.z)
            && o.x <= hi.x
    }

    fn mpo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.z..=hi.z).contains(&o.z)
            && o.x >= lo.x
            && o.y <= hi.y
            && self.s_xy * lo.x - lo.y + self.c_xy >= T::ZERO
            && self.s_yx * hi.y - hi.x + self.c_yx <= T::ZERO
    }

    fn opo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && (lo.z..=hi.z).contains(&o.z)
            && o.y <= hi.y
    }

    fn ppo(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.z..=hi.z).contains(&o.z)
            && o.x <= hi.x
            && o.y <= hi.y
            && self.s_xy * hi.x - lo.y + self.c_xy >= T::ZERO
            && self.s_yx * hi.y - lo.x + self.c_yx >= T::ZERO
    }

    fn mmp(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x >= lo.x
            && o.y >= lo.y
            && o.z <= hi.z
            && self.s_xy * lo.x - hi.y + self.c_xy <= T::ZERO
            && self.s_yx * lo.y - hi.x + self.c_yx <= T::ZERO
            && self.s_zy * hi.z - hi.y + self.c_zy <= T::ZERO
            && self.s_yz * lo.y - lo.z + self.c_yz >= T::ZERO
            && self.s_xz * lo.x - lo.z + self.c_xz >= T::ZERO
            && self.s_zx * hi.z - hi.x + self.c_zx <= T::ZERO
    }

    fn omp(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && o.y >= lo.y
            && o.z <= hi.z
            && self.s_zy * hi.z - hi.y + self.c_zy <= T::ZERO
            && self.s_yz * lo.y - lo.z + self.c_yz >= T::ZERO
    }

    fn pmp(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x <= hi.x
            && o.y >= lo.y
            && o.z <= hi.z
            && self.s_xy * hi.x - hi.y + self.c_xy <= T::ZERO
            && self.s_yx * lo.y - lo.x + self.c_yx >= T::ZERO
            && self.s_zy * hi.z - hi.y + self.c_zy <= T::ZERO
            && self.s_yz * lo.y - lo.z + self.c_yz >= T::ZERO
            && self.s_xz * hi.x - lo.z + self.c_xz >= T::ZERO
            && self.s_zx * hi.z - lo.x + self.c_zx >= T::ZERO
    }

    fn mop(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.y..=hi.y).contains(&o.y)
            && o.x >= lo.x
            && o.z <= hi.z
            && self.s_xz * lo.x - lo.z + self.c_xz >= T::ZERO
            && self.s_zx * hi.z - hi.x + self.c_zx <= T::ZERO
    }

    fn oop(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && (lo.y..=hi.y).contains(&o.y)
            && o.z <= hi.z
    }

    fn pop(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.y..=hi.y).contains(&o.y)
            && o.x <= hi.x
            && o.z <= hi.z
            && self.s_xz * hi.x - lo.z + self.c_xz >= T::ZERO
            && self.s_zx * hi.z - lo.x + self.c_zx >= T::ZERO
    }

    fn mpp(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x >= lo.x
            && o.y <= hi.y
            && o.z <= hi.z
            && self.s_xy * lo.x - lo.y + self.c_xy >= T::ZERO
            && self.s_yx * hi.y - hi.x + self.c_yx <= T::ZERO
            && self.s_zy * hi.z - lo.y + self.c_zy >= T::ZERO
            && self.s_yz * hi.y - lo.z + self.c_yz >= T::ZERO
            && self.s_xz * lo.x - lo.z + self.c_xz >= T::ZERO
            && self.s_zx * hi.z - hi.x + self.c_zx <= T::ZERO
    }

    fn opp(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        (lo.x..=hi.x).contains(&o.x)
            && o.y <= hi.y
            && o.z <= hi.z
            && self.s_zy * hi.z - lo.y + self.c_zy >= T::ZERO
            && self.s_yz * hi.y - lo.z + self.c_yz >= T::ZERO
    }

    fn ppp(&self, aabb: &Aabb<T>) -> bool {
        let (o, lo, hi) = (&self.origin, &aabb.min, &aabb.max);
        o.x <= hi.x
            && o.y <= hi.y
            && o.z <= hi.z
            && self.s_xy * hi.x - lo.y + self.c_xy >= T::ZERO
            && self.s_yx * hi.y - lo.x + self.c_yx >= T::ZERO
            && self.s_zy * hi.z - lo.y + self.c_zy >= T::ZERO
            && self.s_yz * hi.y - lo.z + self.c_yz >= T::ZERO
            && self.s_xz * hi.x - lo.z + self.c_xz >= T::ZERO
            && self.s_zx * hi.z - lo.x + self.c_zx >= T::ZERO
    }
}
