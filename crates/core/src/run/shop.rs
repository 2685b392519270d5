use super::*;
use crate::*;

impl Run {
    /// Buys one copy of joker `id`. Only one purchase is allowed per stage.
    pub fn purchase_joker(&mut self, id: &str, events: &mut EventBus) -> Result<Purchase, RunError> {
        self.ensure_playing()?;
        if self.state.purchased_this_stage {
            return Err(RunError::AlreadyPurchased);
        }
        let joker = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| RunError::UnknownJoker(id.to_string()))?;
        let cost = joker.base_cost.saturating_mul(self.state.cost_multiplier);
        if self.state.chips < cost {
            return Err(RunError::NotEnoughChips {
                cost,
                chips: self.state.chips,
            });
        }

        self.state.chips -= cost;
        self.state.purchased_this_stage = true;
        self.jokers.push(joker);
        events.push(Event::JokerBought {
            id: id.to_string(),
            cost,
            chips: self.state.chips,
        });
        Ok(Purchase {
            id: id.to_string(),
            cost,
            chips: self.state.chips,
        })
    }

    /// Drops every active copy of `id`. Free, and allowed in any phase.
    pub fn remove_joker(&mut self, id: &str, events: &mut EventBus) -> usize {
        let before = self.jokers.len();
        self.jokers.retain(|joker| joker.id != id);
        let count = before - self.jokers.len();
        if count > 0 {
            events.push(Event::JokerRemoved {
                id: id.to_string(),
                count,
            });
        }
        count
    }
}
