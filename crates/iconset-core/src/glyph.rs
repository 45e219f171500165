use crate::geometry::ViewBox;
use crate::params::IconRenderParams;
use crate::svg::SvgNode;

/// A pre-authored vector shape: a single path in a fixed coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub name: &'static str,
    pub view_box: ViewBox,
    /// SVG path data (`d` attribute), embedded verbatim in every render.
    pub path_data: &'static str,
}

impl Glyph {
    pub const fn new(name: &'static str, view_box: ViewBox, path_data: &'static str) -> Self {
        Self {
            name,
            view_box,
            path_data,
        }
    }

    /// Bind the glyph to a set of render parameters.
    ///
    /// Never fails: sizes and colors are resolved and copied into the node
    /// without validation.
    pub fn render(&self, params: &IconRenderParams) -> SvgNode {
        let resolved = params.resolve();
        log::trace!(
            "rendering glyph '{}' at {}x{}",
            self.name,
            resolved.width,
            resolved.height
        );
        SvgNode::new(self.view_box, &resolved, self.path_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Glyph = Glyph::new("square", ViewBox::new(0.0, 0.0, 24.0, 24.0), "M0 0h24v24H0z");

    #[test]
    fn test_render_binds_params() {
        let node = SQUARE.render(&IconRenderParams::new().with_size(48).with_fill("blue"));
        assert_eq!(node.view_box, SQUARE.view_box);
        assert_eq!(node.width, "48px");
        assert_eq!(node.height, "48px");
        assert_eq!(node.path.d, "M0 0h24v24H0z");
        assert_eq!(node.path.fill, "blue");
    }

    #[test]
    fn test_render_with_logger_installed() {
        let _ = env_logger::builder().is_test(true).try_init();
        let node = SQUARE.render(&IconRenderParams::default());
        assert_eq!(node.width, "14px");
    }
}
