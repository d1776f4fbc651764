use attr_strings::{Attributes, StyleListBuilder};

// =============================================================================
// Basic chains
// =============================================================================

#[test]
fn builds_conditional_declarations() {
    let has_border = true;
    let is_on_top = false;
    let top = 2;
    let bottom = 10;
    let left = 4;
    let right = 20;

    let style = StyleListBuilder::new("background-color", "DodgerBlue")
        .add_style_when(
            "border-width",
            format!("{top}px {right}px {bottom}px {left}px"),
            has_border,
        )
        .add_style_when("z-index", 999, is_on_top)
        .add_style_when("z-index", -1, !is_on_top)
        .add_style("padding", "35px")
        .build();

    pretty_assertions::assert_eq!(
        style,
        "background-color:DodgerBlue;border-width:2px 20px 10px 4px;z-index:-1;padding:35px;"
    );
}

#[test]
fn lazy_conditions_gate_declarations() {
    let style = StyleListBuilder::default()
        .add_style_with("display", "none", || true)
        .add_style_with("visibility", "hidden", || false)
        .build();

    pretty_assertions::assert_eq!(style, "display:none;");
}

#[test]
fn merged_groups_append_verbatim() {
    let style = StyleListBuilder::new("margin", 0)
        .merge(StyleListBuilder::new("padding", "35px").add_style("border", "none"))
        .build();

    pretty_assertions::assert_eq!(style, "margin:0;padding:35px;border:none;");
}

// =============================================================================
// Pass-through attribute bags
// =============================================================================

#[test]
fn round_trips_through_an_attribute_bag() {
    let style = StyleListBuilder::new("background-color", "DodgerBlue")
        .add_style("border-width", "2px 20px 10px 4px")
        .add_style_when("z-index", 999, false)
        .add_style("padding", "35px")
        .build();

    let mut attributes = Attributes::new();
    attributes.insert("style", style.clone());

    let merged = StyleListBuilder::default()
        .add_style_from_attributes(Some(&attributes))
        .build();

    pretty_assertions::assert_eq!(merged, style);
}

#[test]
fn missing_bag_is_a_no_op() {
    let style = StyleListBuilder::new("padding", "35px")
        .add_style_from_attributes(None)
        .build();

    pretty_assertions::assert_eq!(style, "padding:35px;");
}

#[test]
fn missing_style_key_is_a_no_op() {
    let attributes: Attributes = [("class", "unrelated")].into_iter().collect();

    let style = StyleListBuilder::default()
        .add_style_from_attributes(Some(&attributes))
        .build_nonempty();

    assert_eq!(style, None);
}
