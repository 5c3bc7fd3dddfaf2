use std::borrow::Cow;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Signed;
use validator::ValidationError;

/// Converts a submitted price into an exact decimal through its shortest
/// string form: `150.0_f64` becomes `150`, `99.99` stays `99.99`. Going
/// through the float's own representation would smuggle binary rounding
/// noise into the database.
pub fn parse_price(price: f64) -> Option<BigDecimal> {
    BigDecimal::from_str(&price.to_string())
        .ok()
        .filter(|decimal| decimal.is_positive())
}

/// Validator hook for DTO price fields.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if parse_price(price).is_none() {
        let mut error = ValidationError::new("price_not_positive");
        error.message = Some(Cow::from("Price must be a positive number"));
        return Err(error);
    }
    Ok(())
}
