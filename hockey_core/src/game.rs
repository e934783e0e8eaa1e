use hecs::{Entity, World};

use crate::{
    create_paddle, create_puck, step, Body, Config, ConfigError, Events, GameRng, Goal,
    InputState, Key, Rink, Score, ScoreSink, Side,
};

/// Everything one match needs, passed explicitly into every tick.
///
/// Independent games share nothing, so several can run side by side.
pub struct Game {
    pub world: World,
    config: Config,
    pub input: InputState,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    sink: Option<Box<dyn ScoreSink>>,
    human: Entity,
    ai: Entity,
    puck: Entity,
}

impl Game {
    /// Deterministic game for a given seed
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    pub fn from_entropy(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    pub fn with_rng(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let human = create_paddle(&mut world, Side::Human, &config);
        let ai = create_paddle(&mut world, Side::Ai, &config);
        let puck = create_puck(&mut world, &config);

        log::debug!("new game on a {}x{} rink", config.rink_width, config.rink_height);

        Ok(Self {
            world,
            config,
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
            sink: None,
            human,
            ai,
            puck,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Swap in new tuning mid-match. A config that fails validation is
    /// rejected and the current one stays in place.
    pub fn set_config(&mut self, config: Config) -> Result<(), ConfigError> {
        config.validate()?;
        log::debug!("config replaced");
        self.config = config;
        Ok(())
    }

    pub fn set_score_sink(&mut self, sink: impl ScoreSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    pub fn clear_score_sink(&mut self) {
        self.sink = None;
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Feed a raw key event by name; non-directional keys are dropped.
    pub fn key_event(&mut self, name: &str, pressed: bool) {
        match (Key::from_name(name), pressed) {
            (Some(key), true) => self.key_down(key),
            (Some(key), false) => self.key_up(key),
            (None, _) => {}
        }
    }

    /// Run one tick of game logic
    pub fn tick(&mut self) -> Option<Goal> {
        step(
            &mut self.world,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &mut self.sink,
        )
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rink(&self) -> Rink {
        Rink::new(&self.config)
    }

    pub fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Human => self.human,
            Side::Ai => self.ai,
        }
    }

    pub fn puck_entity(&self) -> Entity {
        self.puck
    }

    pub fn paddle(&self, side: Side) -> Option<Body> {
        self.body(self.paddle_entity(side))
    }

    pub fn puck(&self) -> Option<Body> {
        self.body(self.puck)
    }

    fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|body| *body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;
    use glam::Vec2;

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(Config::new(), 1).unwrap();
        assert_eq!(game.paddle(Side::Human).unwrap().pos, Vec2::new(250.0, 700.0));
        assert_eq!(game.paddle(Side::Ai).unwrap().pos, Vec2::new(250.0, 100.0));
        let puck = game.puck().unwrap();
        assert_eq!(puck.pos, Vec2::new(250.0, 400.0));
        assert_eq!(puck.vel, Vec2::ZERO);
        assert_eq!(game.score(), Score::new());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::new();
        config.ai.rmin = 2.0;
        assert!(matches!(
            Game::new(config, 1),
            Err(ConfigError::RminOutOfRange(_))
        ));
    }

    #[test]
    fn test_set_config_rejects_bad_tuning() {
        let mut game = Game::new(Config::new(), 1).unwrap();
        let puck = game.puck_entity();
        // AI in chase mode, so it draws an accuracy factor every tick
        game.world.get::<&mut Body>(puck).unwrap().pos = Vec2::new(250.0, 300.0);

        let mut config = Config::new();
        config.ai.rmin = 1.5;
        assert!(matches!(
            game.set_config(config),
            Err(ConfigError::RminOutOfRange(_))
        ));
        assert_eq!(game.config().ai.rmin, Params::AI_RMIN);

        for _ in 0..5 {
            game.tick();
        }
        assert_ne!(game.paddle(Side::Ai).unwrap().force, Vec2::ZERO);
    }

    #[test]
    fn test_set_config_accepts_valid_tuning() {
        let mut game = Game::new(Config::new(), 1).unwrap();
        let mut config = Config::new();
        config.ai.rmin = 0.5;
        game.set_config(config).unwrap();
        assert_eq!(game.config().ai.rmin, 0.5);
    }

    #[test]
    fn test_key_event_by_name() {
        let mut game = Game::new(Config::new(), 1).unwrap();
        game.key_event("ArrowUp", true);
        game.key_event("Shift", true);
        assert!(game.input.is_held(Key::Up));
        game.key_event("ArrowUp", false);
        assert_eq!(game.input.resultant_force(0.5), None);
    }
}
