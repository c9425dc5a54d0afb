//! ARC4 string-seeded random number generator
//!
//! Bit-compatible with the default generator of the `seedrandom` library.
//! Game codes already in circulation were drawn with that generator, so the
//! key mixing, the RC4-drop[256] warm-up and the float construction below
//! must not change.
//!
//! # Algorithm
//!
//! 1. The seed's UTF-16 code units are folded into a key of at most 256
//!    bytes (`mix_key`).
//! 2. The standard RC4 key schedule permutes the state with that key.
//! 3. The first 256 output bytes are discarded.
//! 4. Each float takes 6 output bytes as a 48-bit numerator and keeps
//!    appending bytes until 52 significant bits are filled.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws, on every platform. Different seeds,
//! even one character apart, give unrelated sequences.

/// Size of the RC4 state and of the key ring.
const WIDTH: usize = 256;

/// Bytes drawn for the initial numerator of every float.
const CHUNKS: usize = 6;

/// Initial exponent: the first numerator is divided by 2^48.
const START_EXPONENT: i32 = 48;

/// Floats carry 52 significant bits.
const SIGNIFICANCE: u64 = 1 << 52;

/// Numerators at or above 2^53 would round when converted to f64.
const OVERFLOW: u64 = 1 << 53;

/// Deterministic random number generator seeded from a string
///
/// Each instance owns its state; there is no process-wide generator.
/// Cloning produces an independent copy positioned at the same point of the
/// stream.
///
/// # Example
/// ```
/// use codenames_board_core_rs::RngManager;
///
/// let mut rng = RngManager::new("A1B2");
/// let value = rng.next_f64();
/// assert!((0.0..1.0).contains(&value));
///
/// let order = rng.shuffle(&[1, 2, 3, 4]);
/// assert_eq!(order.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngManager {
    /// RC4 permutation of 0..=255
    state: [u8; WIDTH],
    i: u8,
    j: u8,
}

impl RngManager {
    /// Create a new RNG from a seed string
    ///
    /// Any string is accepted, including non-ASCII text. An empty seed
    /// behaves like a single zero key byte.
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new("hello.");
    /// assert_eq!(rng.next_f64(), 0.9282578795792454);
    /// ```
    pub fn new(seed: &str) -> Self {
        let mut key = mix_key(seed);
        if key.is_empty() {
            key.push(0);
        }

        let mut state = [0u8; WIDTH];
        for (index, slot) in state.iter_mut().enumerate() {
            *slot = index as u8;
        }

        let mut j: u8 = 0;
        for i in 0..WIDTH {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(state[i]);
            state.swap(i, j as usize);
        }

        let mut rng = Self { state, i: 0, j: 0 };
        // RC4-drop[256]
        for _ in 0..WIDTH {
            rng.next_byte();
        }
        rng
    }

    /// Generate the next raw keystream byte
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.state[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.state.swap(self.i as usize, self.j as usize);
        let index = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
        self.state[index as usize]
    }

    /// Read `count` keystream bytes as one big-endian integer
    ///
    /// # Panics
    /// Panics if `count > 8`
    pub fn next_bytes(&mut self, count: usize) -> u64 {
        assert!(count <= 8, "at most 8 bytes fit in a u64");
        (0..count).fold(0u64, |acc, _| (acc << 8) | u64::from(self.next_byte()))
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new("A1B2");
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let mut numerator = self.next_bytes(CHUNKS);
        let mut exponent = START_EXPONENT;
        let mut extra: u64 = 0;

        while numerator < SIGNIFICANCE {
            numerator = (numerator + extra) * WIDTH as u64;
            exponent += 8;
            extra = u64::from(self.next_byte());
        }
        while numerator >= OVERFLOW {
            numerator >>= 1;
            exponent -= 1;
            extra >>= 1;
        }

        (numerator + extra) as f64 / 2f64.powi(exponent)
    }

    /// Generate random value in range [min, max)
    ///
    /// Computed as `floor(next_f64() * (max - min)) + min`, so one call
    /// consumes exactly one float draw.
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use codenames_board_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new("A1B2");
    /// let position = rng.range(0, 25);
    /// assert!((0..25).contains(&position));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let span = (max - min) as f64;
        (self.next_f64() * span).floor() as i64 + min
    }

    /// Return a shuffled copy of `items`
    ///
    /// See [`RngManager::shuffle_in_place`] for the exact draw order.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut result = items.to_vec();
        self.shuffle_in_place(&mut result);
        result
    }

    /// Reverse Fisher–Yates shuffle
    ///
    /// For `i` from `len - 1` down to `1`: draw one float, swap element `i`
    /// with element `floor(draw * (i + 1))`. The iteration order is part of
    /// the compatibility contract for shared game codes.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64).floor() as usize;
            items.swap(i, j);
        }
    }
}

/// Fold the seed's UTF-16 code units into an RC4 key
///
/// Positions wrap around a 256-entry ring; each unit is mixed with a running
/// `smear` of everything previously written to the same slot.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;

    for (index, unit) in seed.encode_utf16().enumerate() {
        let slot = index % WIDTH;
        smear ^= u32::from(key.get(slot).copied().unwrap_or(0)) * 19;
        let mixed = (smear.wrapping_add(u32::from(unit)) & 0xFF) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }

    key
}
