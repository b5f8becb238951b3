use crate::motion::MotionOffset;

/// Receives the combined camera/weapon offset once per frame.
pub trait TransformSink {
    fn apply_offset(&mut self, offset: MotionOffset);
}

/// Sink that keeps every applied offset, for replay and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransform {
    pub applied: Vec<MotionOffset>,
}

impl RecordingTransform {
    pub fn last(&self) -> Option<MotionOffset> {
        self.applied.last().copied()
    }
}

impl TransformSink for RecordingTransform {
    fn apply_offset(&mut self, offset: MotionOffset) {
        self.applied.push(offset);
    }
}
