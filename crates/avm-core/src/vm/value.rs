//! Runtime Value Representation
//!
//! The only runtime type is a single-precision float. Arithmetic follows
//! IEEE 754 exactly: division by zero produces infinities or NaN, never an error.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Encoded size of a value on the wire
pub const VALUE_SIZE: usize = 4;

/// Runtime value (IEEE 754 binary32)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Value(f32);

impl Value {
    pub const fn new(value: f32) -> Self {
        Value(value)
    }

    pub const fn as_f32(self) -> f32 {
        self.0
    }

    // `add` comes from `std::ops::Add`; the rest are named aliases.
    pub fn subtract(self, rhs: Value) -> Value {
        self - rhs
    }

    pub fn multiply(self, rhs: Value) -> Value {
        self * rhs
    }

    pub fn divide(self, rhs: Value) -> Value {
        self / rhs
    }

    pub fn negate(self) -> Value {
        -self
    }

    /// Little-endian wire encoding
    pub fn serialize(self) -> [u8; VALUE_SIZE] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; VALUE_SIZE]) -> Self {
        Value(f32::from_le_bytes(bytes))
    }

    /// Shortest decimal form that round-trips; whole numbers keep `.0`.
    ///
    /// Non-finite values print as `inf`, `-inf` and `NaN`. Large magnitudes
    /// switch to exponent form (`1e20`).
    pub fn disassemble(self) -> String {
        format!("{:?}", self.0)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value(value)
    }
}

impl From<Value> for f32 {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disassemble())
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        Value(self.0 * rhs.0)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        Value(self.0 / rhs.0)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value(-self.0)
    }
}
