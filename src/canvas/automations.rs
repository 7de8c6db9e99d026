use super::{Animator, DrawCommand, FrameClock, Node, Rgba, Surface};

/// Fractional positions of the three workflow nodes.
const LAYOUT: [(f64, f64); 3] = [(0.2, 0.3), (0.5, 0.7), (0.8, 0.35)];
const NODE_RADIUS: f64 = 4.0;
const DASH: [f64; 2] = [4.0, 6.0];

/// Three nodes joined in a triangle, with dashes flowing along the edges.
#[derive(Debug, Clone, Default)]
pub struct Automations {
    clock: FrameClock,
}

impl Automations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn nodes(surface: &Surface) -> [Node; 3] {
        LAYOUT.map(|(fx, fy)| Node {
            x: surface.css_width * fx,
            y: surface.css_height * fy,
            r: NODE_RADIUS,
        })
    }

    pub fn node_alpha(t: f64) -> f64 {
        0.3 + 0.2 * (t * 0.02).sin()
    }

    pub fn line_alpha(t: f64) -> f64 {
        0.2 + 0.15 * (t * 0.03).sin()
    }

    pub fn dash_offset(t: f64) -> f64 {
        -t * 0.5
    }
}

impl Animator for Automations {
    // The clock keeps running across hide/show; only the phase matters.
    fn activate(&mut self, _surface: &Surface) {}

    fn frame(&mut self, surface: &Surface) -> Vec<DrawCommand> {
        let t = self.clock.t();
        let nodes = Self::nodes(surface);
        let mut cmds = Vec::with_capacity(1 + 3 + 3);
        cmds.push(DrawCommand::Clear {
            width: surface.css_width,
            height: surface.css_height,
        });

        let line = Rgba::amber(Self::line_alpha(t));
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            cmds.push(DrawCommand::Line {
                from: (nodes[a].x, nodes[a].y),
                to: (nodes[b].x, nodes[b].y),
                color: line,
                width: 1.0,
                dash: DASH.to_vec(),
                dash_offset: Self::dash_offset(t),
            });
        }

        let fill = Rgba::amber(Self::node_alpha(t));
        cmds.extend(nodes.iter().map(|n| DrawCommand::Circle {
            center: (n.x, n.y),
            radius: n.r,
            color: fill,
        }));

        self.clock.advance();
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(500.0, 200.0, 2.0)
    }

    #[test]
    fn nodes_sit_at_fractional_positions() {
        let n = Automations::nodes(&surface());
        assert_eq!((n[0].x, n[0].y), (100.0, 60.0));
        assert_eq!((n[1].x, n[1].y), (250.0, 140.0));
        assert_eq!((n[2].x, n[2].y), (400.0, 70.0));
        assert!(n.iter().all(|n| n.r == 4.0));
    }

    #[test]
    fn frame_is_clear_then_triangle_then_nodes() {
        let mut a = Automations::new();
        let cmds = a.frame(&surface());
        assert_eq!(cmds.len(), 7);
        assert!(matches!(cmds[0], DrawCommand::Clear { width, height } if width == 500.0 && height == 200.0));
        let lines: Vec<_> = cmds[1..4]
            .iter()
            .map(|c| match c {
                DrawCommand::Line { from, to, dash, .. } => {
                    assert_eq!(dash, &vec![4.0, 6.0]);
                    (*from, *to)
                }
                other => panic!("expected line, got {other:?}"),
            })
            .collect();
        assert_eq!(lines[0], ((100.0, 60.0), (250.0, 140.0)));
        assert_eq!(lines[1], ((250.0, 140.0), (400.0, 70.0)));
        assert_eq!(lines[2], ((400.0, 70.0), (100.0, 60.0)));
        assert!(cmds[4..].iter().all(|c| matches!(c, DrawCommand::Circle { .. })));
    }

    #[test]
    fn pulse_and_dash_follow_the_clock() {
        let mut a = Automations::new();
        let s = surface();
        a.frame(&s);
        let cmds = a.frame(&s);
        assert_eq!(a.clock().tick(), 2);
        match &cmds[1] {
            DrawCommand::Line {
                color, dash_offset, ..
            } => {
                assert_eq!(*dash_offset, -0.5);
                assert!((color.a - (0.2 + 0.15 * 0.03f64.sin())).abs() < 1e-12);
            }
            other => panic!("expected line, got {other:?}"),
        }
        match &cmds[4] {
            DrawCommand::Circle { color, .. } => {
                assert!((color.a - (0.3 + 0.2 * 0.02f64.sin())).abs() < 1e-12)
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn alphas_stay_in_range() {
        for t in (0..2000).map(f64::from) {
            let n = Automations::node_alpha(t);
            let l = Automations::line_alpha(t);
            assert!(n > 0.0999 && n < 0.5001);
            assert!(l > 0.0499 && l < 0.3501);
        }
    }
}
