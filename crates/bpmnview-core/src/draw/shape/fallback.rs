use super::ShapeDefinition;
use crate::{
    color::Color,
    draw::{LabelPlacement, Paint, Primitive, StrokeDefinition, TextDefinition},
    geometry::Size,
};

/// Elements with no dedicated shape: a grey dashed placeholder captioned with
/// the element's type.
#[derive(Debug, Clone)]
pub struct FallbackDefinition {
    caption: String,
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl FallbackDefinition {
    /// Creates a placeholder captioned with `type_name`, minus its first `bpmn:` prefix.
    pub fn new(type_name: &str) -> Self {
        Self {
            caption: type_name.replacen("bpmn:", "", 1),
            fill_color: Color::new("#eee").expect("'#eee' is a valid CSS color"),
            stroke: StrokeDefinition::dashed(
                Color::new("#999").expect("'#999' is a valid CSS color"),
                1.0,
                "4 4",
            ),
            text: TextDefinition::new(),
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl ShapeDefinition for FallbackDefinition {
    fn render_outline(&self, size: Size) -> Primitive {
        Primitive::Rect {
            size,
            corner_radius: None,
            paint: Paint::new(Some(self.fill_color), self.stroke.clone()),
        }
    }

    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::AboveOrigin
    }

    fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Always captions the placeholder with the type name; the element's own
    /// name is not shown.
    fn render(&self, size: Size, _label: Option<&str>) -> Vec<Primitive> {
        let caption = self
            .label_placement()
            .place(&self.caption, size, &self.text);
        vec![self.render_outline(size), Primitive::Text(caption)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::StrokeStyle;

    #[test]
    fn test_caption_strips_first_bpmn_prefix() {
        assert_eq!(FallbackDefinition::new("bpmn:DataObjectReference").caption(), "DataObjectReference");
        assert_eq!(FallbackDefinition::new("custom:Thing").caption(), "custom:Thing");
        assert_eq!(FallbackDefinition::new("bpmn:bpmn:X").caption(), "bpmn:X");
    }

    #[test]
    fn test_outline_is_dashed_grey() {
        let outline = FallbackDefinition::new("bpmn:TextAnnotation").render_outline(Size::new(100.0, 30.0));

        match outline {
            Primitive::Rect { paint, .. } => {
                assert_eq!(paint.fill().map(|c| c.to_string()), Some("#eeeeee".to_string()));
                assert_eq!(paint.stroke().color().to_string(), "#999999");
                assert_eq!(paint.stroke().style(), &StrokeStyle::Dashed("4 4".to_string()));
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_render_ignores_name_and_shows_caption() {
        let primitives = FallbackDefinition::new("bpmn:Group").render(Size::new(10.0, 10.0), Some("Named"));

        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[1].as_text().map(|t| t.content()), Some("Group"));
    }
}
