//! Price and status mapping for provider SKUs.

use thiserror::Error;

use crate::{
    domain::sync::models::{CandidateStatus, MappedCandidate},
    integrations::digiflazz::RawProviderSku,
};

/// Markup applied when none is configured: 15%.
pub const DEFAULT_MARKUP_BASIS_POINTS: u32 = 1_500;

const BASIS_POINTS: i128 = 10_000;

/// How selling prices are derived from provider cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Markup over cost in hundredths of a percent.
    pub markup_basis_points: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            markup_basis_points: DEFAULT_MARKUP_BASIS_POINTS,
        }
    }
}

impl PricingPolicy {
    /// `round(cost * (1 + markup))`, halves rounded away from zero.
    #[must_use]
    pub fn selling_price(&self, cost: i64) -> i64 {
        let numerator = i128::from(cost) * (BASIS_POINTS + i128::from(self.markup_basis_points));

        saturate(div_round(numerator, BASIS_POINTS))
    }
}

/// `round((selling - cost) * 100 / cost)`, or 0 for a zero cost.
#[must_use]
pub fn profit_margin(cost: i64, selling: i64) -> i64 {
    if cost == 0 {
        return 0;
    }

    let numerator = (i128::from(selling) - i128::from(cost)) * 100;

    saturate(div_round(numerator, i128::from(cost)))
}

/// Inactive wins over stock state; stock only matters for enabled SKUs.
#[must_use]
pub fn derive_status(sku: &RawProviderSku) -> CandidateStatus {
    if !sku.buyer_enabled || !sku.seller_enabled {
        return CandidateStatus::Inactive;
    }

    if sku.stock == 0 && !sku.unlimited_stock {
        return CandidateStatus::OutOfStock;
    }

    CandidateStatus::Active
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A value does not fit the 32-bit storage columns.
    #[error("{field} {value} of {sku} is outside the storable range")]
    Overflow {
        sku: String,
        field: &'static str,
        value: i64,
    },
}

/// Map one provider SKU to a priced candidate.
///
/// This is the only place where transport-width amounts are narrowed to the
/// storage width. Prices that do not fit are rejected here; stock saturates.
pub fn map_sku(
    sku: &RawProviderSku,
    provider: &str,
    pricing: &PricingPolicy,
) -> Result<MappedCandidate, MapError> {
    let selling = pricing.selling_price(sku.cost_price);
    let margin = profit_margin(sku.cost_price, selling);

    let narrow = |field: &'static str, value: i64| {
        i32::try_from(value).map_err(|_overflow| MapError::Overflow {
            sku: sku.sku_code.clone(),
            field,
            value,
        })
    };

    let cost_price = narrow("cost_price", sku.cost_price)?;
    let selling_price = narrow("selling_price", selling)?;
    let profit_margin = narrow("profit_margin", margin)?;
    let stock = i32::try_from(sku.stock).unwrap_or(if sku.stock < 0 {
        i32::MIN
    } else {
        i32::MAX
    });

    Ok(MappedCandidate {
        provider: provider.to_string(),
        sku_code: sku.sku_code.clone(),
        name: sku.name.clone(),
        category_hint: sku.category.clone(),
        brand: sku.brand.clone(),
        item_type: sku.item_type.clone(),
        description: sku.description.clone(),
        seller_name: sku.seller_name.clone(),
        cost_price,
        selling_price,
        profit_margin,
        stock,
        unlimited_stock: sku.unlimited_stock,
        status: derive_status(sku),
        available: sku.buyer_enabled && sku.seller_enabled,
        start_cut_off: sku.start_cut_off.clone(),
        end_cut_off: sku.end_cut_off.clone(),
        supports_multi: sku.supports_multi,
        category: None,
        sub_category: None,
    })
}

fn div_round(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if remainder.abs() * 2 >= denominator.abs() {
        if (numerator < 0) == (denominator < 0) {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use crate::test::helpers::raw_sku;

    use super::*;

    fn reference_selling(cost: i64) -> i64 {
        // round(cost * 1.15) with halves away from zero, in exact arithmetic.
        (cost * 115 + 50).div_euclid(100)
    }

    #[test]
    fn default_markup_is_fifteen_percent() {
        let pricing = PricingPolicy::default();

        for cost in [1, 7, 10, 99, 1_000, 10_250, 12_345, 99_999, 1_000_003] {
            assert_eq!(
                pricing.selling_price(cost),
                reference_selling(cost),
                "selling price for cost {cost}"
            );
        }
    }

    #[test]
    fn halves_round_up() {
        let pricing = PricingPolicy::default();

        // 10 * 1.15 = 11.5
        assert_eq!(pricing.selling_price(10), 12);
        // 30 * 1.15 = 34.5
        assert_eq!(pricing.selling_price(30), 35);
    }

    #[test]
    fn markup_is_configurable() {
        let pricing = PricingPolicy {
            markup_basis_points: 250,
        };

        assert_eq!(pricing.selling_price(10_000), 10_250);
        assert_eq!(PricingPolicy { markup_basis_points: 0 }.selling_price(777), 777);
    }

    #[test]
    fn margin_matches_formula() {
        assert_eq!(profit_margin(10_000, 11_500), 15);
        // (12 - 10) * 100 / 10 = 20
        assert_eq!(profit_margin(10, 12), 20);
        // (35 - 30) * 100 / 30 = 16.67
        assert_eq!(profit_margin(30, 35), 17);
        // (8 - 7) * 100 / 7 = 14.29
        assert_eq!(profit_margin(7, 8), 14);
    }

    #[test]
    fn zero_cost_has_zero_margin() {
        assert_eq!(profit_margin(0, 0), 0);

        let candidate = map_sku(&raw_sku("FREE", 0), "digiflazz", &PricingPolicy::default());

        assert!(matches!(candidate, Ok(c) if c.profit_margin == 0 && c.selling_price == 0));
    }

    #[test]
    fn disabled_buyer_is_inactive_even_without_stock() {
        let mut sku = raw_sku("TSEL10", 10_000);
        sku.buyer_enabled = false;
        sku.stock = 0;

        assert_eq!(derive_status(&sku), CandidateStatus::Inactive);
    }

    #[test]
    fn disabled_seller_is_inactive() {
        let mut sku = raw_sku("TSEL10", 10_000);
        sku.seller_enabled = false;

        assert_eq!(derive_status(&sku), CandidateStatus::Inactive);
    }

    #[test]
    fn empty_stock_is_out_of_stock_unless_unlimited() {
        let mut sku = raw_sku("TSEL10", 10_000);
        sku.stock = 0;

        assert_eq!(derive_status(&sku), CandidateStatus::OutOfStock);

        sku.unlimited_stock = true;

        assert_eq!(derive_status(&sku), CandidateStatus::Active);
    }

    #[test]
    fn maps_prices_status_and_availability() {
        let mapped = map_sku(
            &raw_sku("TSEL10", 10_000),
            "digiflazz",
            &PricingPolicy::default(),
        );

        let Ok(candidate) = mapped else {
            panic!("expected a candidate, got {mapped:?}");
        };

        assert_eq!(candidate.provider, "digiflazz");
        assert_eq!(candidate.cost_price, 10_000);
        assert_eq!(candidate.selling_price, 11_500);
        assert_eq!(candidate.profit_margin, 15);
        assert_eq!(candidate.status, CandidateStatus::Active);
        assert!(candidate.available);
        assert_eq!(candidate.category, None);
    }

    #[test]
    fn cost_beyond_storage_width_overflows() {
        let result = map_sku(
            &raw_sku("BIG", 3_000_000_000),
            "digiflazz",
            &PricingPolicy::default(),
        );

        assert_eq!(
            result,
            Err(MapError::Overflow {
                sku: "BIG".to_string(),
                field: "cost_price",
                value: 3_000_000_000,
            })
        );
    }

    #[test]
    fn oversized_stock_saturates_instead_of_skipping() {
        let mut sku = raw_sku("BULK", 10_000);
        sku.stock = 5_000_000_000;

        let mapped = map_sku(&sku, "digiflazz", &PricingPolicy::default());

        assert!(
            matches!(mapped, Ok(ref c) if c.stock == i32::MAX),
            "expected saturated stock, got {mapped:?}"
        );
    }

    #[test]
    fn selling_price_beyond_storage_width_overflows() {
        // Cost fits in i32 but the marked-up price does not.
        let result = map_sku(
            &raw_sku("EDGE", 2_000_000_000),
            "digiflazz",
            &PricingPolicy::default(),
        );

        assert!(
            matches!(result, Err(MapError::Overflow { field: "selling_price", .. })),
            "expected selling price overflow, got {result:?}"
        );
    }
}
