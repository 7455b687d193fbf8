//! Display symbols of the supported currencies.

/// Returns the symbol printed after amounts of the given currency.
///
/// Unknown codes have no symbol.
///
/// # Example
///
/// ```
/// # use billdex::model::currency_symbol;
/// assert_eq!(currency_symbol("EUR"), "€");
/// assert_eq!(currency_symbol("SGD"), "SGD$");
/// assert_eq!(currency_symbol("XXX"), "");
/// ```
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "RUB" => "₽",
        "KRW" => "₩",
        "BRL" => "R$",
        "SGD" => "SGD$",
        _ => "",
    }
}
