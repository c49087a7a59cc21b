use crate::game::{GameEngine, GameError, GameState, GameStorage, LevelId, View};
use std::rc::Rc;
use yew::prelude::*;

/// Everything a screen can ask the game to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameAction {
    SelectLevel(LevelId),
    UseHint,
    SubmitAnswer(String),
    BackToMenu,
    Restart { now_ms: u64 },
}

/// Result of the last action, shown once by the screen that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Solved { level: LevelId, score: u32 },
    Incorrect,
    HintRevealed(&'static str),
    Rejected(GameError),
}

#[derive(Clone, Debug)]
pub struct GameModel<S>
where
    S: GameStorage,
{
    engine: GameEngine<S>,
    pub feedback: Option<Feedback>,
}

impl<S> GameModel<S>
where
    S: GameStorage,
{
    pub fn new(storage: S, now_ms: u64) -> Self {
        Self {
            engine: GameEngine::new(storage, now_ms),
            feedback: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.engine.view()
    }

    fn apply(&mut self, action: GameAction) {
        self.feedback = match action {
            GameAction::SelectLevel(id) => self
                .engine
                .select_level(id)
                .err()
                .map(Feedback::Rejected),
            GameAction::UseHint => self.engine.use_hint().map(Feedback::HintRevealed),
            GameAction::SubmitAnswer(answer) => {
                let level = self.engine.state().current_level;
                match self.engine.submit_answer(&answer) {
                    Ok(Some(score)) => Some(Feedback::Solved { level, score }),
                    Ok(None) => Some(Feedback::Incorrect),
                    Err(err) => Some(Feedback::Rejected(err)),
                }
            }
            GameAction::BackToMenu => {
                self.engine.back_to_menu();
                None
            }
            GameAction::Restart { now_ms } => {
                self.engine.restart(now_ms);
                None
            }
        };
    }
}

impl<S> Reducible for GameModel<S>
where
    S: GameStorage + Clone,
{
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MemoryStorage;

    fn reduce(model: GameModel<MemoryStorage>, action: GameAction) -> GameModel<MemoryStorage> {
        (*Rc::new(model).reduce(action)).clone()
    }

    #[test]
    fn solving_level_one_reports_score() {
        let model = GameModel::new(MemoryStorage::new(), 0);
        let model = reduce(model, GameAction::SelectLevel(1));
        assert_eq!(model.view(), View::Level);
        let model = reduce(model, GameAction::SubmitAnswer("nope".into()));
        assert_eq!(model.feedback, Some(Feedback::Incorrect));
        let model = reduce(model, GameAction::SubmitAnswer("Hello World".into()));
        assert_eq!(
            model.feedback,
            Some(Feedback::Solved { level: 1, score: 100 })
        );
        assert_eq!(model.view(), View::Menu);
        assert_eq!(model.state().total_score, 100);
    }

    #[test]
    fn locked_level_is_rejected_without_moving() {
        let model = reduce(
            GameModel::new(MemoryStorage::new(), 0),
            GameAction::SelectLevel(5),
        );
        assert_eq!(
            model.feedback,
            Some(Feedback::Rejected(GameError::LevelLocked(5)))
        );
        assert_eq!(model.view(), View::Menu);
    }

    #[test]
    fn hints_and_restart() {
        let model = reduce(
            GameModel::new(MemoryStorage::new(), 0),
            GameAction::SelectLevel(1),
        );
        let model = reduce(model, GameAction::UseHint);
        assert!(matches!(model.feedback, Some(Feedback::HintRevealed(_))));
        assert_eq!(model.state().hints_used(1), 1);

        let model = reduce(model, GameAction::BackToMenu);
        assert_eq!(model.view(), View::Menu);
        assert_eq!(model.feedback, None);

        let model = reduce(model, GameAction::Restart { now_ms: 77 });
        assert_eq!(model.state(), &GameState::new(77));
    }
}
