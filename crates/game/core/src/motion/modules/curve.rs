use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

impl CurveKey {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear curve over sorted keys, clamped at both ends.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<CurveKey>", into = "Vec<CurveKey>")
)]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl From<Vec<CurveKey>> for Curve {
    fn from(keys: Vec<CurveKey>) -> Self {
        Self::new(keys)
    }
}

impl From<Curve> for Vec<CurveKey> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}

impl Curve {
    pub fn new(keys: impl IntoIterator<Item = CurveKey>) -> Self {
        let mut keys: Vec<_> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Time of the last key, zero for an empty curve.
    pub fn duration(&self) -> f32 {
        self.keys.last().map_or(0.0, |key| key.time)
    }

    pub fn sample(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // `time` lies strictly inside the key range, so a following key exists.
        let next = self.keys.partition_point(|key| key.time <= time);
        let (a, b) = (self.keys[next - 1], self.keys[next]);
        let span = b.time - a.time;
        if span <= f32::EPSILON {
            return b.value;
        }
        a.value + (b.value - a.value) * ((time - a.time) / span)
    }
}

/// Plays an authored curve along fixed axes, e.g. a recoil or a stumble.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurveSettings {
    pub curve: Curve,
    pub position_axis: Vec3,
    pub rotation_axis: Vec3,
    /// Playback length; the curve is stretched to fit. Zero uses the curve's own length.
    pub duration: f32,
    pub looping: bool,
    /// Starts playing as soon as the module is built.
    pub autoplay: bool,
    pub channel: ChannelSettings,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            curve: Curve::default(),
            position_axis: Vec3::ZERO,
            rotation_axis: Vec3::ZERO,
            duration: 0.0,
            looping: false,
            autoplay: false,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CurveModule {
    settings: CurveSettings,
    channel: MotionChannel,
    elapsed: f32,
    playing: bool,
}

impl CurveModule {
    pub fn new(settings: CurveSettings) -> Self {
        let channel = settings.channel.build();
        let playing = settings.autoplay;
        Self {
            settings,
            channel,
            elapsed: 0.0,
            playing,
        }
    }

    /// Restarts playback from the first key.
    pub fn play(&mut self) {
        self.elapsed = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn length(&self) -> f32 {
        if self.settings.duration > 0.0 {
            self.settings.duration
        } else {
            self.settings.curve.duration()
        }
    }
}

impl MotionModule for CurveModule {
    fn name(&self) -> &'static str {
        "curve"
    }

    channel_accessors!();

    fn evaluate(&mut self, _input: &MotionInput, dt: f32) -> Option<MotionOffset> {
        if !self.playing {
            return None;
        }

        let length = self.length();
        if length <= f32::EPSILON {
            self.playing = false;
            return None;
        }

        self.elapsed += dt;
        if self.elapsed >= length {
            if self.settings.looping {
                self.elapsed %= length;
            } else {
                self.playing = false;
                return None;
            }
        }

        let curve_time = self.elapsed / length * self.settings.curve.duration();
        let value = self.settings.curve.sample(curve_time);
        Some(MotionOffset::new(
            self.settings.position_axis * value,
            self.settings.rotation_axis * value,
        ))
    }

    fn clear_running_state(&mut self) {
        self.elapsed = 0.0;
        self.playing = false;
    }
}
