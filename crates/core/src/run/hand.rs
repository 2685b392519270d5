use super::*;
use crate::*;

impl Run {
    /// Toggles `card_id` in the selection and returns the fresh evaluation,
    /// or `None` once nothing is selected.
    pub fn select_card(&mut self, card_id: u32) -> Result<Option<HandEvaluation>, RunError> {
        self.ensure_playing()?;
        if !self.hand.iter().any(|card| card.id == card_id) {
            return Err(RunError::UnknownCard(card_id));
        }
        if let Some(pos) = self.selection.iter().position(|&id| id == card_id) {
            self.selection.remove(pos);
        } else {
            if self.selection.len() >= self.config.max_selection {
                return Err(RunError::SelectionFull(self.config.max_selection));
            }
            self.selection.push(card_id);
        }
        Ok(self.evaluate_selection())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.selection
            .iter()
            .filter_map(|id| self.hand.iter().find(|card| card.id == *id).copied())
            .collect()
    }

    pub fn evaluate_selection(&self) -> Option<HandEvaluation> {
        score_hand(&self.selected_cards(), &self.jokers)
    }

    pub fn play_selection(&mut self, events: &mut EventBus) -> Result<PlayOutcome, RunError> {
        self.ensure_playing()?;
        self.check_selection_size()?;
        if self.hands_left() == Some(0) {
            return Err(RunError::NoHandsLeft);
        }
        let played = self.selected_cards();
        let evaluation = score_hand(&played, &self.jokers).ok_or(RunError::EmptySelection)?;

        let delta = evaluation.total_score;
        self.state.hands_played += 1;
        self.state.score += delta;
        self.state.run_score += delta;
        log::debug!(
            "{} for {} ({} + {}) x {}",
            evaluation.hand,
            delta,
            evaluation.base_score,
            evaluation.cards_value,
            evaluation.multiplier
        );
        events.push(Event::HandScored {
            hand: evaluation.hand,
            total: delta,
            score: self.state.score,
            target: self.state.target,
        });

        self.move_selection_to_discard();

        let mut outcome = PlayOutcome {
            evaluation,
            score_delta: delta,
            advance: None,
            shortfall: 0,
            completed: false,
            exhausted: false,
        };
        if self.state.target_reached() {
            match self.stages.next_after(&self.state.stage_id).cloned() {
                Some(next) => outcome.advance = Some(self.advance_to(&next, events)),
                None => {
                    self.complete(events);
                    outcome.completed = true;
                }
            }
            return Ok(outcome);
        }

        outcome.shortfall = self.refill_hand(events);
        outcome.exhausted = self.check_exhausted(events);
        Ok(outcome)
    }

    pub fn discard_selection(&mut self, events: &mut EventBus) -> Result<DiscardOutcome, RunError> {
        self.ensure_playing()?;
        self.check_selection_size()?;
        if self.state.discards_used >= self.config.max_discards {
            return Err(RunError::NoDiscardsLeft);
        }

        let discarded = self.move_selection_to_discard();
        self.state.discards_used += 1;
        let discards_left = self.discards_left();
        events.push(Event::CardsDiscarded {
            count: discarded,
            discards_left,
        });

        let shortfall = self.refill_hand(events);
        let exhausted = self.check_exhausted(events);
        Ok(DiscardOutcome {
            discarded,
            discards_left,
            shortfall,
            exhausted,
        })
    }

    fn check_selection_size(&self) -> Result<(), RunError> {
        let selected = self.selection.len();
        if selected == 0 {
            return Err(RunError::EmptySelection);
        }
        if selected > self.config.max_selection {
            return Err(RunError::TooManyCards {
                selected,
                max: self.config.max_selection,
            });
        }
        Ok(())
    }

    /// Moves the selected cards from the hand onto the discard pile and
    /// clears the selection.
    fn move_selection_to_discard(&mut self) -> usize {
        let selection = std::mem::take(&mut self.selection);
        let (moved, kept): (Vec<Card>, Vec<Card>) = self
            .hand
            .drain(..)
            .partition(|card| selection.contains(&card.id));
        self.hand = kept;
        let count = moved.len();
        self.deck.discard(moved);
        count
    }

    fn refill_hand(&mut self, events: &mut EventBus) -> usize {
        let shortfall = fill_hand(&mut self.hand, &mut self.deck, self.config.hand_size);
        if shortfall > 0 {
            events.push(Event::DeckDepleted { missing: shortfall });
        }
        shortfall
    }

    fn check_exhausted(&mut self, events: &mut EventBus) -> bool {
        let cause = if self.hand.is_empty() && self.deck.is_empty() {
            ExhaustCause::OutOfCards
        } else if self.hands_left() == Some(0) {
            ExhaustCause::OutOfHands
        } else {
            return false;
        };
        self.state.phase = Phase::Exhausted;
        log::info!(
            "run exhausted at {} with {}/{} ({:?})",
            self.state.stage_id,
            self.state.score,
            self.state.target,
            cause
        );
        events.push(Event::Exhausted {
            stage: self.state.stage_id.clone(),
            score: self.state.score,
            target: self.state.target,
            cause,
        });
        true
    }
}
