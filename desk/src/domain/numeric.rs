//! Typed numeric form input: the text the user typed plus the number it means.

/// Raw text + parsed value for quantity and price inputs.
///
/// Empty or unparseable text means 0. Both `.` and `,` work as the decimal separator;
/// `1.234,56` is read as one thousand two hundred thirty-four and 56 cents. Negative or
/// non-finite input also means 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericField {
    raw: String,
    value: f64,
}

impl NumericField {
    pub fn from_value(value: f64) -> Self {
        let value = sanitize(value);
        Self {
            raw: format_plain(value),
            value,
        }
    }

    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = parse_decimal(&raw);
        Self { raw, value }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Mutable text for an input widget; call [`NumericField::commit`] after editing.
    pub fn raw_mut(&mut self) -> &mut String {
        &mut self.raw
    }

    /// Re-parse after the raw text changed.
    pub fn commit(&mut self) {
        self.value = parse_decimal(&self.raw);
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.commit();
    }

    pub fn set_value(&mut self, value: f64) {
        *self = Self::from_value(value);
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Lenient decimal parse, see [`NumericField`].
pub fn parse_decimal(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        // Both present: the later one is the decimal separator
        (Some(comma), Some(dot)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (Some(_), None) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };

    normalized.parse::<f64>().map(sanitize).unwrap_or(0.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn format_plain(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
