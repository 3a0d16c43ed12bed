//! Text-or-number dispatch.

/// Either a piece of text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// Length of text, or twice a number.
///
/// Text length counts UTF-16 code units, the way browser/JS strings do.
pub fn process_value(value: impl Into<Value>) -> f64 {
    match value.into() {
        Value::Text(text) => text.encode_utf16().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("hello"), 5.0)]
    #[case(Value::from(""), 0.0)]
    #[case(Value::from(10_i32), 20.0)]
    #[case(Value::from(-1.5), -3.0)]
    fn processes(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(process_value(value), expected);
    }

    #[test]
    fn text_length_counts_utf16_units() {
        // "é" is one unit, the emoji is a surrogate pair
        assert_eq!(process_value("é😀"), 3.0);
    }
}
