use std::fmt;

use tracing::debug;

use crate::config::MotionConfig;
use crate::oracle::TransformSink;

use super::{MotionInput, MotionModule, MotionOffset};

/// Sums an ordered set of motion modules into one offset per frame.
///
/// Modules are updated in insertion order every frame so replays are
/// deterministic. While suppressed, modules are not evaluated and the combined
/// offset moves towards zero at `suppress_reset_speed`.
pub struct MotionBlender {
    modules: Vec<Box<dyn MotionModule>>,
    config: MotionConfig,
    suppressed: bool,
    combined: MotionOffset,
}

impl MotionBlender {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            modules: Vec::new(),
            config,
            suppressed: false,
            combined: MotionOffset::ZERO,
        }
    }

    pub fn with_modules(config: MotionConfig, modules: Vec<Box<dyn MotionModule>>) -> Self {
        let mut blender = Self::new(config);
        blender.swap_modules(modules);
        blender
    }

    pub fn push(&mut self, mut module: Box<dyn MotionModule>) {
        self.adopt(module.as_mut());
        self.modules.push(module);
    }

    /// Applies the blender-wide decay rate to a module that does not pin one.
    fn adopt(&self, module: &mut dyn MotionModule) {
        module
            .channel_mut()
            .inherit_reset_speed(self.config.module_reset_speed);
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn modules(&self) -> &[Box<dyn MotionModule>] {
        &self.modules
    }

    /// Finds the first module with the given name.
    pub fn find(&self, name: &str) -> Option<&dyn MotionModule> {
        self.modules
            .iter()
            .find(|module| module.name() == name)
            .map(|module| &**module)
    }

    /// Returns the first module of concrete type `T`.
    pub fn module_mut<T: MotionModule + 'static>(&mut self) -> Option<&mut T> {
        self.modules
            .iter_mut()
            .find_map(|module| module.as_any_mut().downcast_mut::<T>())
    }

    /// Offset produced by the last [`update`](Self::update).
    pub fn combined(&self) -> MotionOffset {
        self.combined
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Advances every module and returns the summed offset.
    pub fn update(&mut self, input: &MotionInput, dt: f32) -> MotionOffset {
        if self.suppressed {
            let max_delta = self.config.suppress_reset_speed * dt.max(0.0);
            self.combined = self.combined.move_towards(MotionOffset::ZERO, max_delta);
            return self.combined;
        }

        let mut total = MotionOffset::ZERO;
        for module in &mut self.modules {
            module.motion_update(input, dt);
            total += module.output();
        }
        self.combined = total;
        total
    }

    /// Forwards the current combined offset to `sink`.
    pub fn apply(&self, sink: &mut dyn TransformSink) {
        sink.apply_offset(self.combined);
    }

    /// Replaces the module set. Incoming modules take the configured decay
    /// rate unless they pin their own. The outgoing modules are reset and returned so
    /// no residual offset survives if they are reinstalled later.
    pub fn swap_modules(
        &mut self,
        mut modules: Vec<Box<dyn MotionModule>>,
    ) -> Vec<Box<dyn MotionModule>> {
        for module in &mut modules {
            self.adopt(module.as_mut());
        }
        let mut outgoing = std::mem::replace(&mut self.modules, modules);
        for module in &mut outgoing {
            module.reset();
        }
        debug!(
            target: "motion",
            outgoing = outgoing.len(),
            incoming = self.modules.len(),
            "swapped motion modules"
        );
        outgoing
    }

    /// Stops module evaluation and blends the combined offset to zero.
    ///
    /// Modules are reset so they start from rest on [`resume`](Self::resume).
    pub fn suppress(&mut self) {
        if self.suppressed {
            return;
        }
        self.suppressed = true;
        for module in &mut self.modules {
            module.reset();
        }
        debug!(target: "motion", "motion suppressed");
    }

    pub fn resume(&mut self) {
        if !self.suppressed {
            return;
        }
        self.suppressed = false;
        debug!(target: "motion", "motion resumed");
    }

    /// Zeroes every module and the combined offset.
    pub fn reset_all(&mut self) {
        for module in &mut self.modules {
            module.reset();
        }
        self.combined = MotionOffset::ZERO;
    }
}

impl Default for MotionBlender {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl fmt::Debug for MotionBlender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.modules.iter().map(|module| module.name()).collect();
        f.debug_struct("MotionBlender")
            .field("modules", &names)
            .field("suppressed", &self.suppressed)
            .field("combined", &self.combined)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::modules::{LeanModule, LeanSettings, WobbleModule, WobbleSettings};
    use crate::oracle::RecordingTransform;

    fn leaning() -> MotionInput {
        MotionInput {
            lean: 1.0,
            ..MotionInput::default()
        }
    }

    fn blender() -> MotionBlender {
        MotionBlender::with_modules(
            MotionConfig::default(),
            vec![
                Box::new(LeanModule::new(LeanSettings::default())),
                Box::new(WobbleModule::new(WobbleSettings::default())),
            ],
        )
    }

    #[test]
    fn combined_is_sum_of_module_outputs() {
        let mut blender = blender();
        let combined = blender.update(&leaning(), 1.0 / 60.0);
        let sum: MotionOffset = blender.modules().iter().map(|module| module.output()).sum();
        assert_eq!(combined, sum);
        assert!(!combined.is_zero());

        let mut sink = RecordingTransform::default();
        blender.apply(&mut sink);
        assert_eq!(sink.last(), Some(combined));
    }

    #[test]
    fn suppression_blends_to_zero_without_evaluating() {
        let mut blender = blender();
        for _ in 0..60 {
            blender.update(&leaning(), 1.0 / 60.0);
        }
        blender.suppress();
        assert!(blender.modules().iter().all(|module| module.output().is_zero()));

        let mut previous = blender.combined().magnitude();
        for _ in 0..600 {
            let current = blender.update(&leaning(), 1.0 / 60.0).magnitude();
            assert!(current <= previous);
            previous = current;
        }
        assert!(blender.combined().is_zero());
        assert!(blender.modules().iter().all(|module| module.output().is_zero()));

        blender.resume();
        assert!(!blender.update(&leaning(), 1.0 / 60.0).is_zero());
    }

    #[test]
    fn swap_resets_outgoing_modules() {
        let mut blender = blender();
        blender.module_mut::<WobbleModule>().unwrap().wobble(5.0);
        for _ in 0..10 {
            blender.update(&leaning(), 1.0 / 60.0);
        }

        let outgoing = blender.swap_modules(Vec::new());
        assert_eq!(outgoing.len(), 2);
        assert!(outgoing.iter().all(|module| module.output().is_zero()));
        assert!(blender.update(&leaning(), 1.0 / 60.0).is_zero());
    }

    #[test]
    fn find_by_name() {
        let blender = blender();
        assert!(blender.find("lean").is_some());
        assert!(blender.find("bob").is_none());
        assert_eq!(blender.find("wobble").map(|m| m.output()), Some(MotionOffset::ZERO));
    }
}
