use crate::models::FlightOffer;

/// Parse the client-supplied budget string into a usable ceiling.
///
/// Returns `None` for anything that is not a finite, non-negative number;
/// the pipeline treats that as a ceiling no offer can clear.
pub fn parse_budget(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|b| b.is_finite() && *b >= 0.0)
}

/// Keep only offers priced at or below the budget ceiling.
pub fn filter_by_budget(offers: Vec<FlightOffer>, budget: f64) -> Vec<FlightOffer> {
    offers.into_iter().filter(|o| o.price <= budget).collect()
}
