use super::*;
use crate::*;

impl Run {
    /// Moves to `next` after the current stage's target was reached.
    pub(super) fn advance_to(&mut self, next: &Stage, events: &mut EventBus) -> Advance {
        let from_stage = self.current_stage().cloned();
        let from = self.state.stage_id.clone();
        let leveled_up = next.level > self.state.level;

        let mut reward = 0;
        if leveled_up {
            reward = self.state.bite * self.config.level_reward_factor;
            self.state.chips += reward;
            self.state.cost_multiplier *= self.config.cost_growth;
            self.jokers.clear();
            log::info!(
                "level {} reached: +{} chips, joker prices x{}",
                next.level,
                reward,
                self.state.cost_multiplier
            );
            events.push(Event::LevelAdvanced {
                level: next.level,
                reward,
                cost_multiplier: self.state.cost_multiplier,
            });
            self.observe_chips(events);
        }

        let run_score_reset = match &from_stage {
            Some(prev) => self.stages.rules.resets_score(prev, next),
            None => leveled_up,
        };
        if run_score_reset {
            self.state.run_score = 0;
        }

        self.deal_fresh_stage();
        self.state.enter_stage(next);
        self.state.round += 1;
        log::info!("advanced from {} to {}", from, next.display_name);
        events.push(Event::StageAdvanced {
            from: from.clone(),
            to: next.id.clone(),
            round: self.state.round,
        });

        Advance {
            from,
            to: next.id.clone(),
            leveled_up,
            reward,
            run_score_reset,
        }
    }

    /// Last stage cleared: the run ends in `Complete`.
    pub(super) fn complete(&mut self, events: &mut EventBus) {
        self.state.phase = Phase::Complete;
        log::info!("all stages cleared with {} chips", self.state.chips);
        events.push(Event::GameCompleted {
            chips: self.state.chips,
        });
    }
}
