// Face management module
// Owns the current expression and keeps the look controller in step with it

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::catalog::{render_params_for, RenderParams};
use crate::config::FaceConfig;
use crate::error::ConfigError;
use crate::expression::{Expression, ExpressionClass};
use crate::eyelids::Blink;
use crate::gaze::GazeTarget;
use crate::look::{LookController, SaccadeWander, WanderStrategy};

// ============================================================================
// FRAME SNAPSHOT
// ============================================================================

/// Which half of the gaze state machine is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookState {
    RandomLookActive,
    FixedLookActive,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    pub expression: Expression,
    pub gaze: GazeTarget,
    pub params: RenderParams,
    /// Blink lid closure, 0.0 open to 1.0 shut
    pub lid_closure: f64,
}

// ============================================================================
// VECTOR FACE
// ============================================================================

pub struct VectorFace {
    config: FaceConfig,
    expression: Expression,
    look: LookController,
    blink: Blink,
    lid_closure: f64,
}

impl VectorFace {
    /// Face for a `width` x `height` display ticking at `fps`.
    ///
    /// Seeds the wander from OS entropy. Zero dimensions are accepted and
    /// simply leave the pupils no room to move.
    pub fn new(width: u32, height: u32, fps: u32) -> Self {
        Self::build(FaceConfig::new(width, height, fps))
    }

    /// Face from a validated configuration
    pub fn from_config(config: FaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Face with a caller-supplied wander strategy
    pub fn with_strategy(
        config: FaceConfig,
        strategy: Box<dyn WanderStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, strategy))
    }

    fn build(config: FaceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::assemble(config, Box::new(SaccadeWander::new(config.wander, rng)))
    }

    fn assemble(config: FaceConfig, strategy: Box<dyn WanderStrategy>) -> Self {
        let envelope = config.envelope();
        let look = LookController::new(envelope, config.max_tick_secs(), strategy);
        info!(
            "Vector face {}x{} @ {} fps, gaze envelope ±{:.1}x±{:.1}, wander: {}",
            config.width,
            config.height,
            config.fps,
            envelope.max_x,
            envelope.max_y,
            look.strategy_name()
        );

        Self {
            config,
            expression: Expression::default(),
            look,
            blink: Blink::new(),
            lid_closure: 0.0,
        }
    }

    /// Switch expression, toggling random look only on a class change
    pub fn set_expression(&mut self, expression: Expression) {
        let previous = self.expression;
        debug!("Expression {} -> {}", previous, expression);

        match (previous.class(), expression.class()) {
            (ExpressionClass::Autonomous, ExpressionClass::Directional(direction)) => {
                let target = direction.offset(self.look.envelope());
                self.look.disable();
                self.look.set_fixed_target(target);
                info!("Random look suspended for {}", expression);
            }
            (ExpressionClass::Directional(_), ExpressionClass::Directional(direction)) => {
                let target = direction.offset(self.look.envelope());
                self.look.set_fixed_target(target);
            }
            (ExpressionClass::Directional(_), ExpressionClass::Autonomous) => {
                self.look.enable();
                info!("Random look resumed for {}", expression);
            }
            (ExpressionClass::Autonomous, ExpressionClass::Autonomous) => {}
        }

        self.expression = expression;
    }

    /// Advance gaze wander and blink by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        self.look.tick(dt);
        let cadence = render_params_for(self.expression).blink;
        self.lid_closure = self.blink.tick(dt, &cadence);
    }

    pub fn current_gaze_target(&self) -> GazeTarget {
        self.look.current_target()
    }

    pub fn current_expression(&self) -> Expression {
        self.expression
    }

    pub fn look_state(&self) -> LookState {
        if self.look.is_random_look_enabled() {
            LookState::RandomLookActive
        } else {
            LookState::FixedLookActive
        }
    }

    /// Read-only view of the look controller
    pub fn look_controller(&self) -> &LookController {
        &self.look
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn frame(&self) -> FaceFrame {
        FaceFrame {
            expression: self.expression,
            gaze: self.current_gaze_target(),
            params: render_params_for(self.expression),
            lid_closure: self.lid_closure,
        }
    }
}
