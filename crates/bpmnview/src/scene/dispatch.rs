//! Maps an element's category to the definition that draws it.

use bpmnview_core::draw::{
    ActivityDefinition, ContainerDefinition, EventDefinition, FallbackDefinition,
    GatewayDefinition, ShapeDefinition,
};

use crate::{classify::ShapeCategory, model::ModelShape};

pub(super) fn shape_definition(shape: &ModelShape) -> Box<dyn ShapeDefinition> {
    match shape.category() {
        ShapeCategory::Activity => Box::new(ActivityDefinition::default()),
        ShapeCategory::Event => Box::new(EventDefinition::default()),
        ShapeCategory::Gateway => Box::new(GatewayDefinition::default()),
        ShapeCategory::Container => Box::new(ContainerDefinition::from_is_horizontal(
            shape.shape().is_horizontal(),
        )),
        ShapeCategory::Fallback => Box::new(FallbackDefinition::new(shape.type_name())),
    }
}
