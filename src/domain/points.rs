//! Point samples delivered by the external point source (local pointer or
//! WebSocket feed) once per tick.

use serde::Deserialize;

use crate::core::vec2::Vec2;

/// One externally-driven point. The engine never moves it; `movement` is
/// the per-tick displacement used as the point's effective velocity in
/// collision math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSample {
    pub pos: Vec2,
    pub movement: Vec2,
}

impl PointSample {
    pub fn new(pos: Vec2, movement: Vec2) -> Self {
        Self { pos, movement }
    }
}

/// Wire formats accepted from the point feed:
/// `[{"pos": [x, y], "movement": [dx, dy]}, ...]` or bare `[[x, y], ...]`
/// (movement defaults to zero).
#[derive(Deserialize)]
#[serde(untagged)]
enum WirePoint {
    Tagged {
        pos: [f32; 2],
        #[serde(default)]
        movement: [f32; 2],
    },
    Bare([f32; 2]),
}

/// Parse a point batch. Samples with non-finite components are dropped;
/// a document that is not valid JSON in either shape is an error (the
/// facade downgrades it to an ignored batch).
pub fn parse_batch(json: &str) -> Result<Vec<PointSample>, String> {
    let wire: Vec<WirePoint> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(wire
        .into_iter()
        .filter_map(|w| {
            let (pos, movement) = match w {
                WirePoint::Tagged { pos, movement } => (pos, movement),
                WirePoint::Bare(pos) => (pos, [0.0, 0.0]),
            };
            let sample = PointSample::new(
                Vec2::new(pos[0], pos[1]),
                Vec2::new(movement[0], movement[1]),
            );
            (sample.pos.is_finite() && sample.movement.is_finite()).then_some(sample)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_points() {
        let batch = parse_batch(r#"[{"pos": [0.1, 0.2], "movement": [0.01, -0.02]}]"#).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].pos, Vec2::new(0.1, 0.2));
        assert_eq!(batch[0].movement, Vec2::new(0.01, -0.02));
    }

    #[test]
    fn parses_bare_pairs_with_zero_movement() {
        let batch = parse_batch("[[0.4, 0.6], [0.5, 0.5]]").unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].movement, Vec2::zero());
    }

    #[test]
    fn movement_defaults_to_zero_when_missing() {
        let batch = parse_batch(r#"[{"pos": [0.3, 0.3]}]"#).unwrap();
        assert_eq!(batch[0].movement, Vec2::zero());
    }

    #[test]
    fn rejects_non_json_documents() {
        assert!(parse_batch("detect").is_err());
        assert!(parse_batch("{\"pos\": [0.1, 0.2]}").is_err());
    }

    #[test]
    fn empty_batch_is_fine() {
        assert!(parse_batch("[]").unwrap().is_empty());
    }

    #[test]
    fn drops_non_finite_samples() {
        let batch = parse_batch(r#"[[0.5, 0.5], [1e40, 0.5]]"#).unwrap();
        // 1e40 overflows f32 to infinity and the sample is dropped.
        assert_eq!(batch.len(), 1);
    }
}
