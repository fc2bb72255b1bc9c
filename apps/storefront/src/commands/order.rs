//! # Order Commands
//!
//! Turns the shell's (position, quantity) picks into an order.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Placement                                      │
//! │                                                                         │
//! │  [{position: 1, quantity: 2}, {position: 3, quantity: 1}]              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Resolve positions against the active listing                          │
//! │       │   out of range? ──► ApiError VALIDATION_ERROR (nothing bought)  │
//! │       ▼                                                                 │
//! │  Store::order(lines)                                                    │
//! │       │   line fails? ────► ApiError (earlier lines stay bought)        │
//! │       ▼                                                                 │
//! │  OrderReceipt { id, placedAt, lineCount, totalCents, total }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::StoreState;
use storefront_core::{OrderLine, ProductId};

/// One pick from the shell: a 1-based listing position and a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSelection {
    pub position: usize,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub line_count: usize,
    pub total_cents: i64,
    /// Display form, e.g. `$2675.00`
    pub total: String,
}

/// Places an order for the given selections.
///
/// Positions index the active listing as it stands when the command is
/// called. All positions are resolved before anything is bought.
pub fn place_order(
    state: &mut StoreState,
    selections: Vec<OrderSelection>,
) -> Result<OrderReceipt, ApiError> {
    debug!(lines = selections.len(), "place_order command");

    state.with_store_mut(|store| -> Result<OrderReceipt, ApiError> {
        let listing: Vec<ProductId> = store.list_active().into_iter().map(|(id, _)| id).collect();

        let lines = selections
            .iter()
            .map(|selection| {
                selection
                    .position
                    .checked_sub(1)
                    .and_then(|index| listing.get(index))
                    .map(|&id| OrderLine::new(id, selection.quantity))
                    .ok_or_else(|| {
                        ApiError::validation(format!(
                            "Position {} is not in the listing (1-{})",
                            selection.position,
                            listing.len()
                        ))
                    })
            })
            .collect::<Result<Vec<OrderLine>, ApiError>>()?;

        let total = store.order(&lines)?;

        let receipt = OrderReceipt {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            line_count: lines.len(),
            total_cents: total.cents(),
            total: total.to_string(),
        };

        info!(
            order_id = %receipt.id,
            total = %receipt.total,
            lines = receipt.line_count,
            "Order placed"
        );
        Ok(receipt)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list_products, total_quantity};
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

    fn default_state() -> StoreState {
        StoreState::from_config(&ConfigState::default()).unwrap()
    }

    fn pick(position: usize, quantity: i64) -> OrderSelection {
        OrderSelection { position, quantity }
    }

    #[test]
    fn test_place_order_totals_with_promotions() {
        let mut state = default_state();

        // MacBook ×2 at second-half price, Pixel ×1
        let receipt = place_order(&mut state, vec![pick(1, 2), pick(3, 1)]).unwrap();

        assert_eq!(receipt.total_cents, 267_500);
        assert_eq!(receipt.total, "$2675.00");
        assert_eq!(receipt.line_count, 2);
        assert_eq!(total_quantity(&state), 1100 - 3);
    }

    #[test]
    fn test_non_stocked_and_limited_lines() {
        let mut state = default_state();

        // Windows License ×2 at 30% off, Shipping ×1
        let receipt = place_order(&mut state, vec![pick(4, 2), pick(5, 1)]).unwrap();
        assert_eq!(receipt.total_cents, 17_500 + 1_000);
        assert_eq!(list_products(&state)[3].quantity, None);
    }

    #[test]
    fn test_out_of_range_position_buys_nothing() {
        let mut state = default_state();

        for bad in [0, 6] {
            let err = place_order(&mut state, vec![pick(1, 1), pick(bad, 1)]).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }
        assert_eq!(total_quantity(&state), 1100);
    }

    #[test]
    fn test_failed_line_keeps_earlier_lines() {
        let mut state = default_state();

        let err = place_order(&mut state, vec![pick(3, 5), pick(5, 2)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderLimitExceeded);

        // Pixel purchase is not rolled back
        assert_eq!(list_products(&state)[2].quantity, Some(245));
    }

    #[test]
    fn test_insufficient_stock() {
        let mut state = default_state();

        let err = place_order(&mut state, vec![pick(3, 251)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(total_quantity(&state), 1100);
    }

    #[test]
    fn test_oversized_amount_is_a_validation_error() {
        let mut state = default_state();

        let err = place_order(&mut state, vec![pick(4, 1_000_000_000_000_000)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "Amount for 1000000000000000 of 'Windows License' is too large"
        );
    }

    #[test]
    fn test_positions_follow_current_listing() {
        let mut state = default_state();

        // Sell out the Pixel; the license moves up to position 3
        place_order(&mut state, vec![pick(3, 250)]).unwrap();
        let receipt = place_order(&mut state, vec![pick(3, 1)]).unwrap();
        assert_eq!(receipt.total_cents, 8_750);
    }

    #[test]
    fn test_receipt_wire_shape() {
        let mut state = default_state();
        let receipt = place_order(&mut state, vec![pick(3, 1)]).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["lineCount"], 1);
        assert_eq!(json["totalCents"], 50_000);
        assert_eq!(json["total"], "$500.00");
        assert!(json["placedAt"].is_string());
        assert!(json["id"].is_string());

        let selection: OrderSelection =
            serde_json::from_str(r#"{ "position": 2, "quantity": 3 }"#).unwrap();
        assert_eq!(selection, pick(2, 3));
    }
}
