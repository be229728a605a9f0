//! The boardroom advisory composer.
//!
//! Builds a [`BoardSummary`] from current population state. The summary
//! is a fixed-order aggregation -- consumers (PDF export, dashboard
//! panels) render the lines positionally, so the order of computation
//! here is part of the contract:
//!
//! 1. count and names of high-risk athletes;
//! 2. total standing offers plus the single highest-valued athlete;
//! 3. names with a closing market;
//! 4. names carrying the `Visa` badge;
//! 5. names carrying the `Dropout` or `Family` badge;
//! 6. names with public-relations exposure above the threshold.
//!
//! Each line filters the full population independently. An empty
//! population produces empty lists and zero counts.

use fastbreak_types::{BoardSummary, MarketState, RiskBadge, RiskLevel, TopValuation};

use crate::store::AthleteStore;

/// Public-relations exposure above this value surfaces in line 6.
pub const PR_EXPOSURE_THRESHOLD: u8 = 2;

/// Compose the boardroom summary for the current population.
pub fn summarize(store: &AthleteStore) -> BoardSummary {
    let high_risk_names: Vec<String> = store
        .iter()
        .filter(|a| a.risk_level == RiskLevel::High)
        .map(|a| a.name.clone())
        .collect();

    let total_offers = store
        .iter()
        .fold(0_u64, |sum, a| sum.saturating_add(u64::from(a.offer_count)));

    // Ties resolve to the first athlete in id order: strictly-greater
    // comparison keeps the earlier candidate.
    let mut top_valuation: Option<TopValuation> = None;
    for athlete in store.iter() {
        let beats = top_valuation
            .as_ref()
            .is_none_or(|top| athlete.valuation_score > top.score);
        if beats {
            top_valuation = Some(TopValuation {
                athlete_id: athlete.id,
                name: athlete.name.clone(),
                score: athlete.valuation_score,
            });
        }
    }

    let closing_names: Vec<String> = store
        .iter()
        .filter(|a| a.market_state == MarketState::Closing)
        .map(|a| a.name.clone())
        .collect();

    let visa_names: Vec<String> = store
        .iter()
        .filter(|a| a.has_badge(RiskBadge::Visa))
        .map(|a| a.name.clone())
        .collect();

    let welfare_names: Vec<String> = store
        .iter()
        .filter(|a| a.has_badge(RiskBadge::Dropout) || a.has_badge(RiskBadge::Family))
        .map(|a| a.name.clone())
        .collect();

    let pr_exposure_names: Vec<String> = store
        .iter()
        .filter(|a| a.pr_risk > PR_EXPOSURE_THRESHOLD)
        .map(|a| a.name.clone())
        .collect();

    BoardSummary {
        high_risk_count: high_risk_names.len(),
        high_risk_names,
        total_offers,
        top_valuation,
        closing_names,
        visa_names,
        welfare_names,
        pr_exposure_names,
    }
}

#[cfg(test)]
mod tests {
    use fastbreak_types::{Athlete, Stage};

    use super::*;

    #[test]
    fn empty_population_yields_empty_summary() {
        let store = AthleteStore::new();
        let summary = summarize(&store);
        assert_eq!(summary, BoardSummary::default());
    }

    #[test]
    fn high_risk_line_counts_and_names() {
        let mut store = AthleteStore::new();
        let mut risky = Athlete::new("Risky", Stage::EuroPro);
        risky.risk_level = RiskLevel::High;
        let _ = store.seed(risky);
        let _ = store.seed(Athlete::new("Calm", Stage::Academy));

        let summary = summarize(&store);
        assert_eq!(summary.high_risk_count, 1);
        assert_eq!(summary.high_risk_names, vec![String::from("Risky")]);
    }

    #[test]
    fn offers_sum_across_population() {
        let mut store = AthleteStore::new();
        let _ = store.seed(Athlete::new("A", Stage::EuroPro).with_offers(2));
        let _ = store.seed(Athlete::new("B", Stage::DomesticPro).with_offers(5));

        let summary = summarize(&store);
        assert_eq!(summary.total_offers, 7);
    }

    #[test]
    fn top_valuation_picks_the_maximum() {
        let mut store = AthleteStore::new();
        let _ = store.seed(Athlete::new("Mid", Stage::EuroPro).with_valuation(60));
        let top = store.seed(Athlete::new("Star", Stage::NbaInternational).with_valuation(95));
        let _ = store.seed(Athlete::new("Low", Stage::Academy).with_valuation(20));

        let summary = summarize(&store);
        assert_eq!(
            summary.top_valuation.as_ref().map(|t| t.athlete_id),
            Some(top)
        );
        assert_eq!(summary.top_valuation.map(|t| t.score), Some(95));
    }

    #[test]
    fn top_valuation_tie_goes_to_first_in_id_order() {
        let mut store = AthleteStore::new();
        let first = store.seed(Athlete::new("First", Stage::EuroPro).with_valuation(80));
        let _ = store.seed(Athlete::new("Second", Stage::EuroPro).with_valuation(80));

        let summary = summarize(&store);
        assert_eq!(
            summary.top_valuation.map(|t| t.athlete_id),
            Some(first)
        );
    }

    #[test]
    fn badge_lines_filter_independently() {
        let mut store = AthleteStore::new();

        let mut visa = Athlete::new("Visa Case", Stage::EuroPro);
        visa.risk_badges.insert(RiskBadge::Visa);
        let _ = store.seed(visa);

        let mut family = Athlete::new("Family Case", Stage::Academy);
        family.risk_badges.insert(RiskBadge::Family);
        let _ = store.seed(family);

        let mut both = Athlete::new("Both", Stage::DomesticPro);
        both.risk_badges.insert(RiskBadge::Visa);
        both.risk_badges.insert(RiskBadge::Dropout);
        let _ = store.seed(both);

        let summary = summarize(&store);
        assert_eq!(
            summary.visa_names,
            vec![String::from("Visa Case"), String::from("Both")]
        );
        assert_eq!(
            summary.welfare_names,
            vec![String::from("Family Case"), String::from("Both")]
        );
    }

    #[test]
    fn closing_market_line() {
        let mut store = AthleteStore::new();
        let _ = store.seed(
            Athlete::new("Closing", Stage::EuroPro).with_market_state(MarketState::Closing),
        );
        let _ = store.seed(Athlete::new("Open", Stage::EuroPro));

        let summary = summarize(&store);
        assert_eq!(summary.closing_names, vec![String::from("Closing")]);
    }

    #[test]
    fn pr_exposure_is_strictly_above_threshold() {
        let mut store = AthleteStore::new();
        let _ = store.seed(Athlete::new("Loud", Stage::EuroPro).with_pr_risk(3));
        let _ = store.seed(Athlete::new("Borderline", Stage::EuroPro).with_pr_risk(2));

        let summary = summarize(&store);
        assert_eq!(summary.pr_exposure_names, vec![String::from("Loud")]);
    }
}
