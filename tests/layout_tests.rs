use minitv::layout::{layout_node, Anchors, HAnchor, Spacing, VAnchor};
use minitv::utils::{Position, Rectangle, Size};
use minitv::Element;

fn boxed(name: &str, w: i32, h: i32) -> Element {
    let mut e = Element::panel(name);
    e.min_size = Size::new(w, h);
    e
}

#[test]
fn layout_node_anchors_in_container() {
    let container = Rectangle::new(10, 20, 400, 200);
    let desired = Size::new(100, 50);
    let out = layout_node(container, desired, Anchors::new(HAnchor::Right, VAnchor::Bottom));
    assert_eq!(out.size, desired);
    assert_eq!(out.position, Position::new(10 + 300, 20 + 150));

    let out = layout_node(container, desired, Anchors::CENTER);
    assert_eq!(out.position, Position::new(10 + 150, 20 + 75));
}

#[test]
fn third_child_wraps_to_a_second_row() {
    let mut root = Element::panel("root");
    root.expand_x = true;
    root.expand_y = true;
    root.insert(boxed("a", 40, 10)).unwrap();
    root.insert(boxed("b", 40, 10)).unwrap();

    let size = root.arrange(0, 0, 100, 50);
    assert_eq!(size, Size::new(100, 50));
    assert_eq!(root.get("b").unwrap().layout().abs, Position::new(40, 0));
    let one_row = root.get("b").unwrap().layout().container.height;

    root.insert(boxed("c", 40, 10)).unwrap();
    root.arrange(0, 0, 100, 50);
    let c = root.get("c").unwrap().layout();
    assert_eq!(c.abs, Position::new(0, 10));
    assert_eq!(c.rel.y + c.frame.height, 2 * one_row);
    // expand_y keeps the content at the offered height
    assert_eq!(root.layout().content, Size::new(100, 50));
}

#[test]
fn right_bottom_child_lands_in_the_corner() {
    let mut parent = boxed("parent", 100, 100);
    parent.alignment = Anchors::RIGHT_BOTTOM;
    parent.insert(boxed("child", 10, 10)).unwrap();
    parent.arrange(0, 0, 100, 100);
    assert_eq!(
        parent.get("child").unwrap().layout().abs,
        Position::new(90, 90)
    );
}

#[test]
fn nine_way_alignment_of_a_single_child() {
    let cases = [
        (Anchors::LEFT_TOP, (0, 0)),
        (Anchors::CENTER_TOP, (45, 0)),
        (Anchors::RIGHT_TOP, (90, 0)),
        (Anchors::LEFT_MIDDLE, (0, 20)),
        (Anchors::CENTER, (45, 20)),
        (Anchors::RIGHT_MIDDLE, (90, 20)),
        (Anchors::LEFT_BOTTOM, (0, 40)),
        (Anchors::CENTER_BOTTOM, (45, 40)),
        (Anchors::RIGHT_BOTTOM, (90, 40)),
    ];
    for (anchors, (x, y)) in cases {
        let mut parent = boxed("parent", 100, 50);
        parent.alignment = anchors;
        parent.insert(boxed("child", 10, 10)).unwrap();
        parent.arrange(0, 0, 100, 50);
        assert_eq!(
            parent.get("child").unwrap().layout().abs,
            Position::new(x, y),
            "{anchors:?}"
        );
    }
}

#[test]
fn frames_offset_children_and_nest() {
    let mut root = Element::panel("root");
    root.margin = Spacing::uniform(2);
    root.border = Spacing::uniform(1);
    root.padding = Spacing::new(3, 4);
    let mut inner = boxed("inner", 20, 10);
    inner.margin = Spacing::uniform(1);
    root.insert(inner).unwrap();

    let size = root.arrange(5, 5, 200, 200);
    assert_eq!(size, Size::new(22 + 2 * 6, 12 + 2 * 7));
    let inner = root.get("inner").unwrap();
    assert_eq!(inner.layout().abs, Position::new(5 + 3 + 3, 5 + 3 + 4));
    assert_eq!(inner.client_rect(), Rectangle::new(12, 13, 20, 10));
}

#[test]
fn shorter_children_align_within_their_row() {
    let mut root = Element::panel("root");
    root.alignment = Anchors::LEFT_BOTTOM;
    root.insert(boxed("tall", 10, 20)).unwrap();
    root.insert(boxed("short", 10, 6)).unwrap();
    root.arrange(0, 0, 100, 100);
    assert_eq!(root.get("tall").unwrap().layout().abs, Position::new(0, 80));
    assert_eq!(root.get("short").unwrap().layout().abs, Position::new(10, 94));
}

#[test]
fn plain_root_aligns_against_the_arranged_area() {
    let mut root = Element::panel("root");
    root.alignment = Anchors::RIGHT_BOTTOM;
    root.insert(boxed("child", 10, 10)).unwrap();
    let size = root.arrange(0, 0, 100, 100);
    // the root still reports its measured size
    assert_eq!(size, Size::new(10, 10));
    assert_eq!(
        root.get("child").unwrap().layout().abs,
        Position::new(90, 90)
    );

    root.alignment = Anchors::CENTER;
    root.padding = Spacing::uniform(5);
    root.arrange(0, 0, 100, 100);
    assert_eq!(
        root.get("child").unwrap().layout().abs,
        Position::new(5 + 40, 5 + 40)
    );
}

#[test]
fn overflow_spills_toward_the_end() {
    let mut root = Element::panel("root");
    root.expand_x = true;
    root.expand_y = true;
    root.alignment = Anchors::RIGHT_BOTTOM;
    root.insert(boxed("big", 80, 40)).unwrap();
    assert_eq!(root.arrange(0, 0, 30, 10), Size::new(30, 10));
    assert_eq!(root.get("big").unwrap().layout().abs, Position::new(0, 0));
}

#[test]
fn label_measures_its_caption() {
    let mut label = Element::label("title", "AB");
    label.padding = Spacing::uniform(2);
    let size = label.arrange(0, 0, 480, 272);
    assert_eq!(size, Size::new(18 + 4, 22 + 4));

    label.set_caption(b"ABC").unwrap();
    assert_eq!(label.arrange(0, 0, 480, 272).width, 27 + 4);
}
