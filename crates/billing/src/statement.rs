use serde::{Deserialize, Serialize};

use stagebill_core::{BillingError, BillingResult};
use stagebill_repertory::{Play, PlayCatalog};

use crate::invoice::Invoice;
use crate::pricing::{PricingResult, PricingVariant};

/// One performance priced: the resolved play, the seat count, and the
/// pricing outcome. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceValuation {
    play: Play,
    audience: u32,
    pricing: PricingResult,
}

impl PerformanceValuation {
    pub fn play(&self) -> &Play {
        &self.play
    }

    pub fn name(&self) -> &str {
        &self.play.name
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }

    pub fn amount(&self) -> u64 {
        self.pricing.amount
    }

    pub fn volume_credits(&self) -> u64 {
        self.pricing.volume_credits
    }

    pub fn pricing(&self) -> PricingResult {
        self.pricing
    }
}

/// Aggregated billing data for one invoice.
///
/// This is the structured counterpart of the rendered report: a caller that
/// wants another output format reads the valuations and totals from here
/// instead of recomputing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    customer: String,
    performances: Vec<PerformanceValuation>,
    total_amount: u64,
    total_volume_credits: u64,
}

impl Statement {
    /// Price every performance of `invoice` against `catalog`.
    ///
    /// All-or-nothing: the first unresolved play id or unknown play type
    /// aborts the whole statement, so no partial billing data ever escapes.
    /// Valuations keep the invoice's performance order. Totals are summed
    /// once here; inputs are immutable, so the cache cannot go stale.
    pub fn prepare(invoice: &Invoice, catalog: &PlayCatalog) -> BillingResult<Self> {
        let mut performances = Vec::with_capacity(invoice.performances.len());
        let mut total_amount: u64 = 0;
        let mut total_volume_credits: u64 = 0;

        for performance in &invoice.performances {
            let play = catalog.resolve(&performance.play_id)?;
            let variant = PricingVariant::for_play(play)?;
            let pricing = variant.price(performance.audience);

            total_amount = total_amount
                .checked_add(pricing.amount)
                .ok_or_else(|| BillingError::invariant("statement amount overflow"))?;
            total_volume_credits = total_volume_credits
                .checked_add(pricing.volume_credits)
                .ok_or_else(|| BillingError::invariant("statement credit overflow"))?;

            performances.push(PerformanceValuation {
                play: play.clone(),
                audience: performance.audience,
                pricing,
            });
        }

        Ok(Self {
            customer: invoice.customer.clone(),
            performances,
            total_amount,
            total_volume_credits,
        })
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[PerformanceValuation] {
        &self.performances
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Performance;

    fn repertory() -> PlayCatalog {
        let mut catalog = PlayCatalog::new();
        catalog
            .insert("hamlet", Play::new("Hamlet", "tragedy"))
            .unwrap();
        catalog
            .insert("as-like", Play::new("As You Like It", "comedy"))
            .unwrap();
        catalog
            .insert("othello", Play::new("Othello", "tragedy"))
            .unwrap();
        catalog
            .insert("henry-v", Play::new("Henry V", "history"))
            .unwrap();
        catalog
    }

    #[test]
    fn totals_are_the_sums_of_per_performance_results() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );

        let statement = Statement::prepare(&invoice, &repertory()).unwrap();

        let amounts: Vec<u64> = statement.performances().iter().map(|v| v.amount()).collect();
        assert_eq!(amounts, [65_000, 58_000, 50_000]);
        assert_eq!(statement.total_amount(), 173_000);

        let credits: Vec<u64> = statement
            .performances()
            .iter()
            .map(|v| v.volume_credits())
            .collect();
        assert_eq!(credits, [25, 12, 10]);
        assert_eq!(statement.total_volume_credits(), 47);
    }

    #[test]
    fn valuations_keep_invoice_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("othello", 10),
                Performance::new("hamlet", 10),
                Performance::new("henry-v", 10),
            ],
        );

        let statement = Statement::prepare(&invoice, &repertory()).unwrap();
        let names: Vec<&str> = statement.performances().iter().map(|v| v.name()).collect();
        assert_eq!(names, ["Othello", "Hamlet", "Henry V"]);
    }

    #[test]
    fn empty_invoice_yields_zero_totals() {
        let invoice = Invoice::new("BigCo", vec![]);
        let statement = Statement::prepare(&invoice, &repertory()).unwrap();

        assert!(statement.performances().is_empty());
        assert_eq!(statement.total_amount(), 0);
        assert_eq!(statement.total_volume_credits(), 0);
    }

    #[test]
    fn missing_play_aborts_the_whole_statement() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("macbeth", 40),
            ],
        );

        let err = Statement::prepare(&invoice, &repertory()).unwrap_err();
        assert_eq!(err, BillingError::PlayNotFound("macbeth".to_string()));
    }

    #[test]
    fn unknown_play_type_aborts_the_whole_statement() {
        let mut catalog = repertory();
        catalog
            .insert("cats", Play::new("Cats", "musical"))
            .unwrap();

        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("cats", 40)],
        );

        let err = Statement::prepare(&invoice, &catalog).unwrap_err();
        assert_eq!(err, BillingError::UnknownPlayType("musical".to_string()));
    }

    #[test]
    fn preparation_does_not_mutate_its_inputs() {
        let catalog = repertory();
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);

        let catalog_before = catalog.clone();
        let invoice_before = invoice.clone();

        let first = Statement::prepare(&invoice, &catalog).unwrap();
        let second = Statement::prepare(&invoice, &catalog).unwrap();

        assert_eq!(catalog, catalog_before);
        assert_eq!(invoice, invoice_before);
        assert_eq!(first, second);
    }
}
