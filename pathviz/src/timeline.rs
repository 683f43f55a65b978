//! Frame schedule for animating a search.
//!
//! Every settled cell gets one frame, `delay` apart, in settlement order.
//! The route's interior follows on the same clock; its two endpoints keep
//! their start/finish styling and get no frame.

use pathviz_core::Pos;

/// What a frame highlights.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Visited,
    Path,
}

/// One animation step: highlight `pos` as `kind` at `at_ms` after start.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub at_ms: u64,
    pub pos: Pos,
    pub kind: FrameKind,
}

/// Build the frame schedule for a finished search.
///
/// `path` is the reconstructed route; if it does not begin at `start` (no
/// route was found) only the exploration frames are produced.
pub fn timeline(visited: &[Pos], path: &[Pos], start: Pos, delay_ms: u64) -> Vec<Frame> {
    let mut frames: Vec<Frame> = visited
        .iter()
        .enumerate()
        .map(|(i, &pos)| Frame {
            at_ms: delay_ms.saturating_mul(i as u64),
            pos,
            kind: FrameKind::Visited,
        })
        .collect();

    if path.first() != Some(&start) || path.len() < 3 {
        return frames;
    }

    let base = visited.len() as u64;
    frames.extend(path[1..path.len() - 1].iter().enumerate().map(|(i, &pos)| Frame {
        at_ms: delay_ms.saturating_mul(base + i as u64),
        pos,
        kind: FrameKind::Path,
    }));
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: i32, c: i32) -> Pos {
        Pos::new(r, c)
    }

    #[test]
    fn visited_then_path_interior() {
        let visited = [p(0, 0), p(1, 0), p(0, 1), p(1, 1)];
        let path = [p(0, 0), p(1, 0), p(1, 1)];
        let frames = timeline(&visited, &path, p(0, 0), 50);
        assert_eq!(frames.len(), 5);
        assert_eq!(
            frames[0],
            Frame {
                at_ms: 0,
                pos: p(0, 0),
                kind: FrameKind::Visited
            }
        );
        assert_eq!(frames[3].at_ms, 150);
        assert_eq!(
            frames[4],
            Frame {
                at_ms: 200,
                pos: p(1, 0),
                kind: FrameKind::Path
            }
        );
    }

    #[test]
    fn no_path_frames_when_route_missing() {
        let visited = [p(0, 0)];
        let frames = timeline(&visited, &[p(0, 1)], p(0, 0), 50);
        assert_eq!(frames.len(), 1);
        assert!(frames.iter().all(|f| f.kind == FrameKind::Visited));
    }

    #[test]
    fn huge_delay_saturates() {
        let visited = [p(0, 0), p(1, 0), p(1, 1)];
        let path = [p(0, 0), p(1, 0), p(1, 1)];
        let frames = timeline(&visited, &path, p(0, 0), u64::MAX);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].at_ms, 0);
        assert!(frames[1..].iter().all(|f| f.at_ms == u64::MAX));
    }

    #[test]
    fn adjacent_endpoints_have_no_interior() {
        let frames = timeline(&[p(0, 0), p(0, 1)], &[p(0, 0), p(0, 1)], p(0, 0), 10);
        assert_eq!(frames.len(), 2);
    }
}
