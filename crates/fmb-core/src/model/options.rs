//! Formatting options — precision, scaling base, and separator.
//!
//! Every constructor normalizes its inputs, so a `FormatOptions` value
//! always satisfies `precision <= MAX_PRECISION`.

/// Largest number of fraction digits the formatter will render.
pub const MAX_PRECISION: u8 = 3;

/// Fraction digits used when the caller does not ask for anything else.
pub const DEFAULT_PRECISION: u8 = 2;

/// Scaling divisor between successive magnitude units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    /// 1024 bytes per step.
    #[default]
    Binary,
    /// 1000 bytes per step.
    Decimal,
}

impl Base {
    /// Map a raw integer onto a base.
    ///
    /// Only exactly `1000` selects decimal scaling. Every other value,
    /// including nonsense like `0` or `-7`, falls back to binary.
    pub fn from_raw(raw: i64) -> Self {
        if raw == 1000 {
            Base::Decimal
        } else {
            Base::Binary
        }
    }

    /// The divisor applied at each magnitude step.
    pub const fn divisor(self) -> u64 {
        match self {
            Base::Binary => 1024,
            Base::Decimal => 1000,
        }
    }
}

/// Clamp a requested precision into `0..=MAX_PRECISION`.
pub fn clamp_precision(requested: i64) -> u8 {
    requested.clamp(0, i64::from(MAX_PRECISION)) as u8
}

/// Options for a single formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    precision: u8,
    base: Base,
    separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            base: Base::Binary,
            separator: String::new(),
        }
    }
}

impl FormatOptions {
    /// Build options from raw, unvalidated values.
    ///
    /// Precision is clamped and the base normalized via [`Base::from_raw`];
    /// nothing is rejected.
    pub fn new(precision: i64, base: i64, separator: impl Into<String>) -> Self {
        Self {
            precision: clamp_precision(precision),
            base: Base::from_raw(base),
            separator: separator.into(),
        }
    }

    pub fn with_precision(mut self, precision: i64) -> Self {
        self.precision = clamp_precision(precision);
        self
    }

    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Fraction digits requested, already clamped.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Text inserted between the number and its unit.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}
