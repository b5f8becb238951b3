//! Motion presets keyed by profile.

use std::collections::BTreeMap;

use horror_core::motion::{MotionPreset, MotionPresetSpec, MotionProfile};

/// Authored motion presets, one per [`MotionProfile`].
///
/// Profiles without a preset build an empty module set, so a missing entry
/// simply means "no procedural motion" for that mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionLibrary {
    presets: BTreeMap<MotionProfile, MotionPresetSpec>,
}

impl MotionLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the preset for `spec.profile`, returning the old one.
    pub fn insert(&mut self, spec: MotionPresetSpec) -> Option<MotionPresetSpec> {
        self.presets.insert(spec.profile, spec)
    }

    pub fn get(&self, profile: MotionProfile) -> Option<&MotionPresetSpec> {
        self.presets.get(&profile)
    }

    pub fn contains(&self, profile: MotionProfile) -> bool {
        self.presets.contains_key(&profile)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn profiles(&self) -> impl Iterator<Item = MotionProfile> + '_ {
        self.presets.keys().copied()
    }

    /// Instantiates fresh modules for `profile`.
    pub fn build(&self, profile: MotionProfile) -> MotionPreset {
        match self.presets.get(&profile) {
            Some(spec) => spec.build(),
            None => MotionPresetSpec::new(profile.to_string(), profile).build(),
        }
    }
}

impl FromIterator<MotionPresetSpec> for MotionLibrary {
    fn from_iter<I: IntoIterator<Item = MotionPresetSpec>>(iter: I) -> Self {
        let mut library = Self::new();
        for spec in iter {
            library.insert(spec);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use horror_core::motion::ModuleSpec;
    use horror_core::motion::modules::BobSettings;

    use super::*;

    #[test]
    fn missing_profile_builds_empty_preset() {
        let library: MotionLibrary = [MotionPresetSpec::new("walk", MotionProfile::Walk)
            .with_module(ModuleSpec::Bob(BobSettings::default()))]
        .into_iter()
        .collect();

        assert_eq!(library.build(MotionProfile::Walk).module_names(), ["bob"]);
        let dead = library.build(MotionProfile::Dead);
        assert!(dead.modules.is_empty());
        assert_eq!(dead.name, "dead");
    }
}
