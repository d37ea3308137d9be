use bytemuck::{Pod, Zeroable};

/// Unique identifier for a body in the engine. Never reused within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Something the UI layer may want to react to, emitted during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BubbleEvent {
    /// A body was pressed and released without being dragged around.
    /// The board opens the confession's comments on this.
    Tapped(BodyId),
    /// A body was released after a drag and launched at `speed` px/tick.
    Thrown { id: BodyId, speed: f32 },
    /// A device shake kicked every free body.
    Shaken,
}

impl BubbleEvent {
    pub const KIND_TAPPED: f32 = 1.0;
    pub const KIND_THROWN: f32 = 2.0;
    pub const KIND_SHAKEN: f32 = 3.0;

    /// Flatten into the 4-float wire record read by the page.
    pub fn to_record(self) -> EventRecord {
        match self {
            BubbleEvent::Tapped(id) => EventRecord {
                kind: Self::KIND_TAPPED,
                a: id.0 as f32,
                ..Default::default()
            },
            BubbleEvent::Thrown { id, speed } => EventRecord {
                kind: Self::KIND_THROWN,
                a: id.0 as f32,
                b: speed,
                ..Default::default()
            },
            BubbleEvent::Shaken => EventRecord {
                kind: Self::KIND_SHAKEN,
                ..Default::default()
            },
        }
    }
}

/// A bubble event as it crosses into JavaScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thrown_record_carries_id_and_speed() {
        let rec = BubbleEvent::Thrown { id: BodyId(7), speed: 4.5 }.to_record();
        assert_eq!(rec.kind, BubbleEvent::KIND_THROWN);
        assert_eq!(rec.a, 7.0);
        assert_eq!(rec.b, 4.5);
        assert_eq!(rec.c, 0.0);
    }

    #[test]
    fn records_are_four_floats() {
        let recs = [BubbleEvent::Shaken.to_record(), BubbleEvent::Tapped(BodyId(2)).to_record()];
        let floats: &[f32] = bytemuck::cast_slice(&recs);
        assert_eq!(floats.len(), 2 * EventRecord::FLOATS);
        assert_eq!(floats[4], BubbleEvent::KIND_TAPPED);
        assert_eq!(floats[5], 2.0);
    }
}
