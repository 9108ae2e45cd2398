use serde::Serialize;

use crate::error::InputError;
use crate::input::FieldKind;

/// Validated loan inputs. Every field is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    principal: f64,
    annual_rate_percent: f64,
    term_months: f64,
}

/// The three derived figures. They only ever exist together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiBreakdown {
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

fn check(field: FieldKind, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}

impl LoanTerms {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_months: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            principal: check(FieldKind::Principal, principal)?,
            annual_rate_percent: check(FieldKind::Rate, annual_rate_percent)?,
            term_months: check(FieldKind::Term, term_months)?,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn term_months(&self) -> f64 {
        self.term_months
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    /// Standard annuity payment. `None` when the arithmetic leaves the
    /// finite range, e.g. a typed term of several thousand months.
    pub fn breakdown(&self) -> Option<EmiBreakdown> {
        let rate = self.monthly_rate();
        // (1 + r)^n - 1 via ln_1p/exp_m1: subtracting 1 from the power
        // cancels to zero for tiny positive rates.
        let growth_minus_one = (self.term_months * rate.ln_1p()).exp_m1();
        let growth = growth_minus_one + 1.0;
        let emi = self.principal * rate * growth / growth_minus_one;

        // For near-zero rates the product can round to just under the principal.
        let total_payment = (emi * self.term_months).max(self.principal);
        let total_interest = total_payment - self.principal;

        let breakdown = EmiBreakdown {
            emi,
            total_interest,
            total_payment,
        };
        breakdown.is_finite().then_some(breakdown)
    }
}

impl EmiBreakdown {
    fn is_finite(&self) -> bool {
        self.emi.is_finite() && self.total_interest.is_finite() && self.total_payment.is_finite()
    }

    /// Each figure rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            emi: round2(self.emi),
            total_interest: round2(self.total_interest),
            total_payment: round2(self.total_payment),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// JSON shape of a quote: the rounded figures, or the reason there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteReport {
    pub available: bool,
    #[serde(flatten)]
    pub breakdown: Option<EmiBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Result<EmiBreakdown, InputError>> for QuoteReport {
    fn from(result: Result<EmiBreakdown, InputError>) -> Self {
        match result {
            Ok(b) => Self {
                available: true,
                breakdown: Some(b.rounded()),
                reason: None,
            },
            Err(e) => Self {
                available: false,
                breakdown: None,
                reason: Some(e.to_string()),
            },
        }
    }
}

/// Validate and compute, reporting why no figures are available.
pub fn quote(
    principal: f64,
    annual_rate_percent: f64,
    term_months: f64,
) -> Result<EmiBreakdown, InputError> {
    LoanTerms::new(principal, annual_rate_percent, term_months)?
        .breakdown()
        .ok_or(InputError::Overflow)
}

/// EMI for the given inputs, or `None` when they cannot produce one.
pub fn calculate_emi(
    principal: f64,
    annual_rate_percent: f64,
    term_months: f64,
) -> Option<EmiBreakdown> {
    quote(principal, annual_rate_percent, term_months).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn test_default_loan() {
        let result = calculate_emi(100_000.0, 12.0, 24.0).unwrap().rounded();
        assert_eq!(
            result,
            EmiBreakdown {
                emi: 4707.35,
                total_interest: 12976.33,
                total_payment: 112976.33,
            }
        );
    }

    #[test]
    fn test_monthly_rate() {
        let terms = LoanTerms::new(100_000.0, 12.0, 24.0).unwrap();
        assert!((terms.monthly_rate() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_single_month_loan() {
        let result = calculate_emi(1_000.0, 1.0, 1.0).unwrap();
        assert!(close(result.emi, 1000.83));
        assert!(close(result.total_interest, 0.83));
        assert!(close(result.total_payment, 1000.83));
    }

    #[test]
    fn test_high_rate_long_term() {
        let result = calculate_emi(500_000.0, 36.0, 360.0).unwrap();
        assert!(result.emi.is_finite() && result.emi > 0.0);
        assert!(result.total_interest > result.total_payment * 0.5);
    }

    #[test]
    fn test_totals_are_consistent() {
        for &(p, r, n) in &[
            (1_000.0, 1.0, 1.0),
            (75_500.0, 7.25, 60.0),
            (250_000.0, 18.5, 180.0),
            (500_000.0, 36.0, 360.0),
        ] {
            let result = calculate_emi(p, r, n).unwrap();
            assert!((result.emi * n - result.total_payment).abs() < 1e-6);
            assert!((result.total_payment - p - result.total_interest).abs() < 1e-6);
        }
    }

    #[test]
    fn test_emi_increases_with_principal() {
        let mut last = 0.0;
        for p in [1_000.0, 11_000.0, 100_000.0, 250_000.0, 500_000.0] {
            let emi = calculate_emi(p, 12.0, 24.0).unwrap().emi;
            assert!(emi > last);
            last = emi;
        }
    }

    #[test]
    fn test_emi_increases_with_rate() {
        let mut last = 0.0;
        for r in [0.1, 1.0, 5.5, 12.0, 24.0, 36.0] {
            let emi = calculate_emi(100_000.0, r, 24.0).unwrap().emi;
            assert!(emi > last);
            last = emi;
        }
    }

    #[test]
    fn test_zero_inputs_are_unavailable() {
        assert_eq!(calculate_emi(0.0, 12.0, 24.0), None);
        assert_eq!(calculate_emi(100_000.0, 0.0, 24.0), None);
        assert_eq!(calculate_emi(100_000.0, 12.0, 0.0), None);
    }

    #[test]
    fn test_zero_rate_never_reaches_division() {
        assert_eq!(
            LoanTerms::new(100_000.0, 0.0, 24.0),
            Err(InputError::NotPositive {
                field: FieldKind::Rate,
                value: 0.0,
            })
        );
        assert_eq!(
            quote(100_000.0, -0.0, 24.0).unwrap_err().field(),
            Some(FieldKind::Rate)
        );
    }

    #[test]
    fn test_negative_and_non_finite_inputs() {
        assert_eq!(calculate_emi(-5.0, 12.0, 24.0), None);
        assert_eq!(calculate_emi(100_000.0, -1.0, 24.0), None);
        assert_eq!(
            quote(f64::NAN, 12.0, 24.0),
            Err(InputError::NotFinite {
                field: FieldKind::Principal
            })
        );
        assert_eq!(
            quote(100_000.0, 12.0, f64::INFINITY),
            Err(InputError::NotFinite {
                field: FieldKind::Term
            })
        );
    }

    #[test]
    fn test_overflow_is_unavailable() {
        assert_eq!(quote(5_000.0, 36.0, 1e6), Err(InputError::Overflow));
    }

    #[test]
    fn test_tiny_rates_stay_finite() {
        for rate in [1e-9, 1e-12, 1e-15] {
            let result = quote(100_000.0, rate, 24.0).unwrap();
            assert!(result.emi.is_finite());
            assert!(result.total_interest >= 0.0);
            assert!((result.emi - 100_000.0 / 24.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_quote_report_json() {
        let ready = QuoteReport::from(quote(100_000.0, 12.0, 24.0));
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({
                "available": true,
                "emi": 4707.35,
                "total_interest": 12976.33,
                "total_payment": 112976.33,
            })
        );

        let blank = QuoteReport::from(quote(0.0, 12.0, 24.0));
        assert_eq!(
            serde_json::to_value(&blank).unwrap(),
            serde_json::json!({
                "available": false,
                "reason": "loan amount must be greater than zero (got 0)",
            })
        );
    }

    #[test]
    fn test_repeat_calls_match() {
        let first = calculate_emi(123_456.0, 9.9, 77.0);
        let second = calculate_emi(123_456.0, 9.9, 77.0);
        assert_eq!(first, second);
    }
}
