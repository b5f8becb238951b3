use super::MotionModule;
use super::modules::{
    BobModule, BobSettings, BreathModule, BreathSettings, CurveModule, CurveSettings,
    ExternalModule, ExternalSettings, ImpulseModule, ImpulseSettings, LeanModule, LeanSettings,
    NoiseModule, NoiseSettings, StrafeModule, StrafeSettings, SwayModule, SwaySettings,
    WobbleModule, WobbleSettings,
};

/// Motion set a player state asks for; the runtime maps each profile to a
/// [`MotionPreset`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionProfile {
    #[default]
    Idle,
    Walk,
    Run,
    Crouch,
    Airborne,
    Ladder,
    Push,
    Slide,
    Zipline,
    Hidden,
    Dead,
}

/// Data description of one module.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModuleSpec {
    Bob(BobSettings),
    Breath(BreathSettings),
    Noise(NoiseSettings),
    Lean(LeanSettings),
    Sway(SwaySettings),
    Strafe(StrafeSettings),
    Impulse(ImpulseSettings),
    Curve(CurveSettings),
    External(ExternalSettings),
    Wobble(WobbleSettings),
}

impl ModuleSpec {
    pub fn build(&self) -> Box<dyn MotionModule> {
        match self {
            Self::Bob(settings) => Box::new(BobModule::new(settings.clone())),
            Self::Breath(settings) => Box::new(BreathModule::new(settings.clone())),
            Self::Noise(settings) => Box::new(NoiseModule::new(settings.clone())),
            Self::Lean(settings) => Box::new(LeanModule::new(settings.clone())),
            Self::Sway(settings) => Box::new(SwayModule::new(settings.clone())),
            Self::Strafe(settings) => Box::new(StrafeModule::new(settings.clone())),
            Self::Impulse(settings) => Box::new(ImpulseModule::new(settings.clone())),
            Self::Curve(settings) => Box::new(CurveModule::new(settings.clone())),
            Self::External(settings) => Box::new(ExternalModule::new(settings.clone())),
            Self::Wobble(settings) => Box::new(WobbleModule::new(settings.clone())),
        }
    }
}

/// Authored, ordered module list for one profile.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionPresetSpec {
    pub name: String,
    pub profile: MotionProfile,
    pub modules: Vec<ModuleSpec>,
}

impl MotionPresetSpec {
    pub fn new(name: impl Into<String>, profile: MotionProfile) -> Self {
        Self {
            name: name.into(),
            profile,
            modules: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_module(mut self, module: ModuleSpec) -> Self {
        self.modules.push(module);
        self
    }

    /// Instantiates fresh modules, in declaration order.
    pub fn build(&self) -> MotionPreset {
        MotionPreset {
            name: self.name.clone(),
            profile: self.profile,
            modules: self.modules.iter().map(ModuleSpec::build).collect(),
        }
    }
}

/// Live module set ready to be installed into a
/// [`MotionBlender`](super::MotionBlender).
pub struct MotionPreset {
    pub name: String,
    pub profile: MotionProfile,
    pub modules: Vec<Box<dyn MotionModule>>,
}

impl MotionPreset {
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|module| module.name()).collect()
    }
}

impl std::fmt::Debug for MotionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionPreset")
            .field("name", &self.name)
            .field("profile", &self.profile)
            .field("modules", &self.module_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn build_preserves_order() {
        let spec = MotionPresetSpec::new("walk", MotionProfile::Walk)
            .with_module(ModuleSpec::Bob(BobSettings::default()))
            .with_module(ModuleSpec::Sway(SwaySettings::default()))
            .with_module(ModuleSpec::Impulse(ImpulseSettings::default()));
        let preset = spec.build();
        assert_eq!(preset.module_names(), ["bob", "sway", "impulse"]);
        assert_eq!(preset.profile, MotionProfile::Walk);
    }

    #[test]
    fn profile_names_are_snake_case() {
        assert_eq!(MotionProfile::Airborne.to_string(), "airborne");
        assert_eq!(MotionProfile::from_str("Zipline"), Ok(MotionProfile::Zipline));
    }
}
