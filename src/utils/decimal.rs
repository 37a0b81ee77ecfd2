use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

pub trait BigDecimalHelpers {
    fn to_f64_or_zero(&self) -> f64;
}

impl BigDecimalHelpers for BigDecimal {
    fn to_f64_or_zero(&self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl BigDecimalHelpers for Option<BigDecimal> {
    fn to_f64_or_zero(&self) -> f64 {
        self.as_ref()
            .map(|bd| bd.to_f64().unwrap_or(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn converts_plain_and_fractional_values() {
        assert_eq!(BigDecimal::from(150).to_f64_or_zero(), 150.0);
        assert_eq!(BigDecimal::from_str("12.5").unwrap().to_f64_or_zero(), 12.5);
        assert_eq!(None::<BigDecimal>.to_f64_or_zero(), 0.0);
    }
}
