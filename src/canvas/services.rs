use super::{Animator, DrawCommand, FrameClock, Node, Rgba, Surface};

/// Scattered pulsing nodes, joined when close enough.
///
/// Node positions are drawn from `fastrand` and regenerated whenever the
/// canvas becomes visible or is resized, so they always fit the current
/// bounds. Nothing survives a hide/show cycle.
#[derive(Debug, Clone)]
pub struct Services {
    rng: fastrand::Rng,
    count: usize,
    link_distance: f64,
    nodes: Vec<Node>,
    clock: FrameClock,
}

/// True when two nodes are strictly closer than `max`.
pub fn connected(a: &Node, b: &Node, max: f64) -> bool {
    a.distance(b) < max
}

/// Index pairs `(i, j)`, `i < j`, of every connected node pair.
pub fn links(nodes: &[Node], max: f64) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for i in 0..nodes.len() {
        for j in i + 1..nodes.len() {
            if connected(&nodes[i], &nodes[j], max) {
                out.push((i, j));
            }
        }
    }
    out
}

impl Services {
    pub fn new(rng: fastrand::Rng, count: usize, link_distance: f64) -> Self {
        Self {
            rng,
            count,
            link_distance,
            nodes: Vec::new(),
            clock: FrameClock::default(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn seed(&mut self, surface: &Surface) {
        let (w, h) = (surface.css_width, surface.css_height);
        let rng = &mut self.rng;
        self.nodes = (0..self.count)
            .map(|_| Node {
                x: rng.f64() * w,
                y: rng.f64() * h,
                r: 2.0 + rng.f64() * 3.0,
            })
            .collect();
    }

    /// Drops the node set; the next activation reseeds.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Node pulse is offset by x so neighbours don't blink in unison.
    pub fn node_alpha(t: f64, x: f64) -> f64 {
        0.15 + 0.12 * (t * 0.015 + x * 0.01).sin()
    }

    pub fn line_alpha(t: f64) -> f64 {
        0.05 + 0.04 * (t * 0.02).sin()
    }
}

impl Animator for Services {
    fn activate(&mut self, surface: &Surface) {
        self.seed(surface);
    }

    fn resize(&mut self, surface: &Surface) {
        self.seed(surface);
    }

    fn deactivate(&mut self) {
        self.clear();
    }

    fn frame(&mut self, surface: &Surface) -> Vec<DrawCommand> {
        let t = self.clock.t();
        let mut cmds = vec![DrawCommand::Clear {
            width: surface.css_width,
            height: surface.css_height,
        }];

        let line = Rgba::amber(Self::line_alpha(t));
        for (i, j) in links(&self.nodes, self.link_distance) {
            let (a, b) = (&self.nodes[i], &self.nodes[j]);
            cmds.push(DrawCommand::Line {
                from: (a.x, a.y),
                to: (b.x, b.y),
                color: line,
                width: 0.6,
                dash: Vec::new(),
                dash_offset: 0.0,
            });
        }

        cmds.extend(self.nodes.iter().map(|n| DrawCommand::Circle {
            center: (n.x, n.y),
            radius: n.r,
            color: Rgba::amber(Self::node_alpha(t, n.x)),
        }));

        self.clock.advance();
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: f64, y: f64) -> Node {
        Node { x, y, r: 3.0 }
    }

    #[test]
    fn connected_is_strictly_less_than() {
        let a = node(0.0, 0.0);
        assert!(connected(&a, &node(249.999, 0.0), 250.0));
        assert!(!connected(&a, &node(250.0, 0.0), 250.0));
        // 150-200-250 triangle: exactly on the boundary.
        assert!(!connected(&a, &node(150.0, 200.0), 250.0));
        assert!(connected(&a, &node(150.0, 199.0), 250.0));
        assert!(!connected(&a, &node(300.0, 10.0), 250.0));
    }

    #[test]
    fn links_cover_each_close_pair_once() {
        let nodes = [node(0.0, 0.0), node(100.0, 0.0), node(400.0, 0.0), node(600.0, 0.0)];
        assert_eq!(links(&nodes, 250.0), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn seeding_respects_bounds_and_count() {
        let mut s = Services::new(fastrand::Rng::with_seed(7), 12, 250.0);
        let surface = Surface::new(320.0, 180.0, 1.0);
        s.activate(&surface);
        assert_eq!(s.nodes().len(), 12);
        for n in s.nodes() {
            assert!((0.0..320.0).contains(&n.x));
            assert!((0.0..180.0).contains(&n.y));
            assert!((2.0..5.0).contains(&n.r));
        }
    }

    #[test]
    fn resize_reseeds_inside_new_bounds() {
        let mut s = Services::new(fastrand::Rng::with_seed(1), 12, 250.0);
        s.activate(&Surface::new(2000.0, 2000.0, 1.0));
        s.resize(&Surface::new(50.0, 40.0, 1.0));
        assert!(s.nodes().iter().all(|n| n.x < 50.0 && n.y < 40.0));
    }

    #[test]
    fn frame_draws_lines_then_nodes() {
        let mut s = Services::new(fastrand::Rng::with_seed(3), 12, 250.0);
        let surface = Surface::new(800.0, 400.0, 2.0);
        s.activate(&surface);
        let expected_links = links(s.nodes(), 250.0).len();
        let cmds = s.frame(&surface);
        assert!(matches!(cmds[0], DrawCommand::Clear { .. }));
        let line_count = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { width, dash, .. } if *width == 0.6 && dash.is_empty()))
            .count();
        assert_eq!(line_count, expected_links);
        assert!(cmds[1 + expected_links..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
        assert_eq!(cmds.len(), 1 + expected_links + 12);
        assert_eq!(s.clock().tick(), 1);
    }

    #[test]
    fn node_pulse_depends_on_x() {
        assert_ne!(Services::node_alpha(10.0, 0.0), Services::node_alpha(10.0, 50.0));
        assert_eq!(Services::node_alpha(0.0, 0.0), 0.15);
    }

    #[test]
    fn clear_discards_nodes() {
        let mut s = Services::new(fastrand::Rng::with_seed(9), 12, 250.0);
        s.activate(&Surface::new(100.0, 100.0, 1.0));
        s.clear();
        assert!(s.nodes().is_empty());
    }
}
