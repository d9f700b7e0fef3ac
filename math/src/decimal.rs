use {
    crate::error::MathError,
    borsh::{BorshDeserialize, BorshSerialize},
    num_bigint::BigUint,
    num_traits::ToPrimitive,
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    std::{cmp::Ordering, fmt, str::FromStr},
};

/// Number of fractional decimal digits carried by [`Dec`].
pub const PRECISION: u32 = 18;

/// `10^PRECISION`, the raw value of `1.0`.
const ONE_RAW: u128 = 1_000_000_000_000_000_000;

/// Unsigned 18-decimal fixed-point number.
///
/// Being unsigned is what keeps the dust accumulator `>= 0`: any operation
/// that would go negative fails with [`MathError::NegativeResult`] instead.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize,
    BorshDeserialize,
)]
pub struct Dec(u128);

impl Dec {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(ONE_RAW);

    /// Build from an already-scaled raw value (`raw / 10^18`).
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// The scaled raw value.
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Lift a whole number of units into the decimal domain.
    ///
    /// Cannot overflow: `u64::MAX × 10^18 < u128::MAX`.
    pub fn from_int(units: u64) -> Self {
        Self(u128::from(units).saturating_mul(ONE_RAW))
    }

    /// `numerator / denominator`, rounded half-to-even.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Result<Self, MathError> {
        Self::from_int(numerator).checked_quo_int(denominator)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MathError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MathError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MathError::NegativeResult)
    }

    /// `self × other`, rounded half-to-even at the 18th digit.
    pub fn checked_mul(self, other: Self) -> Result<Self, MathError> {
        mul_div_round(self.0, other.0, ONE_RAW).map(Self)
    }

    /// `self × units`; exact.
    pub fn checked_mul_int(self, units: u64) -> Result<Self, MathError> {
        self.0
            .checked_mul(u128::from(units))
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    /// `self ÷ other`, rounded half-to-even at the 18th digit.
    pub fn checked_quo(self, other: Self) -> Result<Self, MathError> {
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        mul_div_round(self.0, ONE_RAW, other.0).map(Self)
    }

    /// `self ÷ divisor`, rounded half-to-even at the 18th digit.
    pub fn checked_quo_int(self, divisor: u64) -> Result<Self, MathError> {
        if divisor == 0 {
            return Err(MathError::DivisionByZero);
        }
        mul_div_round(self.0, 1, u128::from(divisor)).map(Self)
    }

    /// Whole units, truncated toward zero.
    pub fn truncate_int(self) -> u128 {
        self.0 / ONE_RAW
    }

    /// Whole units as `u64`, truncated toward zero.
    pub fn truncate_u64(self) -> Result<u64, MathError> {
        u64::try_from(self.truncate_int()).map_err(|_| MathError::Overflow)
    }

    /// The fractional part, `self − trunc(self)`.
    pub fn fract(self) -> Self {
        Self(self.0 % ONE_RAW)
    }
}

/// `a × b ÷ d` with a 256-bit-or-wider intermediate, rounded half-to-even.
#[allow(clippy::arithmetic_side_effects)]
fn mul_div_round(a: u128, b: u128, d: u128) -> Result<u128, MathError> {
    if d == 0 {
        return Err(MathError::DivisionByZero);
    }
    let numerator = BigUint::from(a) * BigUint::from(b);
    let divisor = BigUint::from(d);
    let mut quotient = &numerator / &divisor;
    let twice_remainder = (&numerator % &divisor) << 1u32;

    let round_up = match twice_remainder.cmp(&divisor) {
        Ordering::Greater => true,
        Ordering::Equal => quotient.bit(0),
        Ordering::Less => false,
    };
    if round_up {
        quotient += 1u32;
    }
    quotient.to_u128().ok_or(MathError::Overflow)
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / ONE_RAW,
            self.0 % ONE_RAW,
            width = PRECISION as usize
        )
    }
}

impl FromStr for Dec {
    type Err = MathError;

    /// Accepts `"12"`, `"0.15"`, `"1.000000000000000001"`. At most 18
    /// fractional digits, no sign, no exponent.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| MathError::InvalidDecimal {
            input: input.to_string(),
            reason,
        };

        let (int_part, frac_part) = match input.split_once('.') {
            Some((int_part, frac_part)) => {
                if frac_part.is_empty() {
                    return Err(invalid("missing fractional digits"));
                }
                (int_part, frac_part)
            }
            None => (input, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("empty string"));
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("non-digit character"));
        }
        if frac_part.len() > PRECISION as usize {
            return Err(invalid("more than 18 fractional digits"));
        }

        let int_units: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| MathError::Overflow)?
        };
        let frac_raw: u128 = if frac_part.is_empty() {
            0
        } else {
            let digits: u128 = frac_part.parse().map_err(|_| invalid("fraction"))?;
            let missing = PRECISION.saturating_sub(frac_part.len() as u32);
            let scale = 10u128.checked_pow(missing).ok_or(MathError::Overflow)?;
            digits.checked_mul(scale).ok_or(MathError::Overflow)?
        };

        int_units
            .checked_mul(ONE_RAW)
            .and_then(|raw| raw.checked_add(frac_raw))
            .map(Self)
            .ok_or(MathError::Overflow)
    }
}

// Decimals travel through JSON config and genesis files as strings so that no
// precision is lost to a float parser along the way.
impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
