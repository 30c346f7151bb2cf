// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_field_picker` crate.
//!
//! These drive a `FieldTree` over a small in-memory scene, checking the shape
//! of each expansion, the addresses rows carry, and what activation delivers.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use understory_field_picker::{
    AnimatableType, AnimatableTypes, FieldDescriptor, FieldSelection, FieldTree, FieldType,
    PickerError, PickerOptions, RowIcon, RowKind, RowPath, SceneHost, Segment,
};

struct Object {
    name: &'static str,
    components: Vec<usize>,
    children: Vec<usize>,
}

/// Objects and components are indices; component types are their names.
struct Scene {
    objects: Vec<Object>,
    component_types: Vec<&'static str>,
}

impl Scene {
    /// ```text
    /// SO1 [Camera, Light]
    /// ├── Child1
    /// └── Child2 [Camera]
    ///     └── Grandchild
    /// ```
    fn new() -> Self {
        Self {
            objects: vec![
                Object {
                    name: "SO1",
                    components: vec![0, 1],
                    children: vec![1, 2],
                },
                Object {
                    name: "Child1",
                    components: vec![],
                    children: vec![],
                },
                Object {
                    name: "Child2",
                    components: vec![2],
                    children: vec![3],
                },
                Object {
                    name: "Grandchild",
                    components: vec![],
                    children: vec![],
                },
            ],
            component_types: vec!["Camera", "Light", "Camera"],
        }
    }
}

impl SceneHost for Scene {
    type Object = usize;
    type Component = usize;
    type Type = &'static str;

    fn object_name(&self, object: &usize) -> Cow<'_, str> {
        Cow::Borrowed(self.objects[*object].name)
    }

    fn components(&self, object: &usize) -> Vec<usize> {
        self.objects[*object].components.clone()
    }

    fn child_count(&self, object: &usize) -> usize {
        self.objects[*object].children.len()
    }

    fn child_at(&self, object: &usize, index: usize) -> usize {
        self.objects[*object].children[index]
    }

    fn component_type(&self, component: &usize) -> &'static str {
        self.component_types[*component]
    }

    fn type_name(&self, ty: &&'static str) -> Cow<'_, str> {
        Cow::Borrowed(*ty)
    }
}

fn reflect(ty: &&'static str) -> Vec<FieldDescriptor<&'static str>> {
    match *ty {
        "Camera" => vec![
            FieldDescriptor::new("fieldOfView", FieldType::Float).with_animatable(true),
            FieldDescriptor::new("nearClip", FieldType::Float).with_animatable(true),
            FieldDescriptor::new("name", FieldType::String).with_animatable(true),
            FieldDescriptor::new("cullingMask", FieldType::Int),
            FieldDescriptor::object("lens", "Lens").with_animatable(true),
            FieldDescriptor::new("target", FieldType::Object).with_animatable(true),
        ],
        "Light" => vec![
            FieldDescriptor::new("color", FieldType::Color).with_animatable(true),
            FieldDescriptor::new("enabled", FieldType::Bool).with_animatable(true),
        ],
        "Lens" => vec![
            FieldDescriptor::new("focalLength", FieldType::Float).with_animatable(true),
            FieldDescriptor::new("shift", FieldType::Vector2).with_animatable(true),
        ],
        _ => Vec::new(),
    }
}

type Selections = Rc<RefCell<Vec<FieldSelection<usize, usize>>>>;

fn record(tree: &mut FieldTree<Scene>) -> Selections {
    let seen = Selections::default();
    let sink = Rc::clone(&seen);
    tree.set_listener(move |selection| sink.borrow_mut().push(selection));
    seen
}

fn labels(tree: &FieldTree<Scene>, row: &[usize]) -> Vec<String> {
    let children = if row.is_empty() {
        tree.top_level()
    } else {
        tree.node(row).unwrap().children()
    };
    children.iter().map(|n| n.label().to_owned()).collect()
}

fn addresses(tree: &FieldTree<Scene>, row: &[usize]) -> Vec<String> {
    let children = if row.is_empty() {
        tree.top_level()
    } else {
        tree.node(row).unwrap().children()
    };
    children.iter().map(|n| n.address().to_string()).collect()
}

fn kinds(tree: &FieldTree<Scene>, row: &[usize]) -> Vec<RowKind> {
    let children = if row.is_empty() {
        tree.top_level()
    } else {
        tree.node(row).unwrap().children()
    };
    children.iter().map(|n| n.row_kind()).collect()
}

#[test]
fn root_expands_to_transform_components_then_children() {
    let scene = Scene::new();
    let tree = FieldTree::new(&scene, Some(0));

    assert_eq!(
        kinds(&tree, &[]),
        [
            RowKind::TransformGroup,
            RowKind::Component,
            RowKind::Component,
            RowKind::ChildrenGroup,
        ]
    );
    assert_eq!(labels(&tree, &[]), ["Transform", "Camera", "Light", "Children"]);
    assert_eq!(
        addresses(&tree, &[]),
        ["!SO1", "!SO1/:Camera", "!SO1/:Light", "!SO1"]
    );

    let icons: Vec<_> = tree.top_level().iter().map(|n| n.icon()).collect();
    assert_eq!(
        icons,
        [
            Some(RowIcon::SceneObject),
            Some(RowIcon::Component),
            Some(RowIcon::Component),
            Some(RowIcon::SceneObject),
        ]
    );

    // Only the root is pre-expanded.
    assert!(tree.root().unwrap().is_expanded());
    assert!(tree.top_level().iter().all(|n| !n.is_expanded()));
}

#[test]
fn childless_object_omits_children_group() {
    let scene = Scene::new();
    let tree = FieldTree::new(&scene, Some(1));
    assert_eq!(kinds(&tree, &[]), [RowKind::TransformGroup]);
    assert_eq!(tree.row_count(), 1);
}

#[test]
fn transform_group_has_three_vector3_leaves() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let leaves = tree.expand(&scene, &reflect, &[0]).unwrap();

    let got: Vec<_> = leaves
        .iter()
        .map(|n| (n.address().as_str(), n.field_type(), n.owner_component().copied()))
        .collect();
    assert_eq!(
        got,
        [
            ("!SO1/Position", Some(AnimatableType::Vector3), None),
            ("!SO1/Rotation", Some(AnimatableType::Vector3), None),
            ("!SO1/Scale", Some(AnimatableType::Vector3), None),
        ]
    );
    assert!(leaves.iter().all(|n| n.is_leaf() && n.icon().is_none()));
}

#[test]
fn component_lists_classified_fields_in_order() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[1]).unwrap();

    // `name` is a string, `cullingMask` is not animatable, and `target` has no
    // nested type to recurse into.
    assert_eq!(labels(&tree, &[1]), ["fieldOfView", "nearClip", "lens"]);
    assert_eq!(
        kinds(&tree, &[1]),
        [RowKind::Field, RowKind::Field, RowKind::ObjectField]
    );
    assert_eq!(
        addresses(&tree, &[1]),
        [
            "!SO1/:Camera/fieldOfView",
            "!SO1/:Camera/nearClip",
            "!SO1/:Camera/lens",
        ]
    );
    assert!(
        tree.node(&[1])
            .unwrap()
            .children()
            .iter()
            .all(|n| n.owner_component() == Some(&0))
    );
}

#[test]
fn activating_a_transform_leaf_reports_no_component() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let seen = record(&mut tree);

    tree.expand(&scene, &reflect, &[0]).unwrap();
    tree.activate(&[0, 0]).unwrap();

    assert_eq!(
        *seen.borrow(),
        [FieldSelection {
            object: 0,
            component: None,
            path: "!SO1/Position".into(),
            field_type: AnimatableType::Vector3,
        }]
    );
}

#[test]
fn activating_a_component_field_reports_the_component() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let seen = record(&mut tree);

    tree.expand(&scene, &reflect, &[1]).unwrap();
    tree.activate(&[1, 0]).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].object, 0);
    assert_eq!(seen[0].component, Some(0));
    assert_eq!(seen[0].path, "!SO1/:Camera/fieldOfView");
    assert_eq!(seen[0].field_type, AnimatableType::Float);
}

#[test]
fn nested_fields_keep_the_owning_component() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let seen = record(&mut tree);

    tree.expand(&scene, &reflect, &[1]).unwrap();
    tree.expand(&scene, &reflect, &[1, 2]).unwrap();
    assert_eq!(
        addresses(&tree, &[1, 2]),
        ["!SO1/:Camera/lens/focalLength", "!SO1/:Camera/lens/shift"]
    );

    tree.activate(&[1, 2, 1]).unwrap();
    let selection = seen.borrow_mut().pop().unwrap();
    assert_eq!(selection.component, Some(0));
    assert_eq!(selection.field_type, AnimatableType::Vector2);
    assert_eq!(selection.path.component(), Some("Camera"));
    assert_eq!(selection.path.field_path(), "lens/shift");
    assert_eq!(
        selection.path.segments().collect::<Vec<_>>(),
        [
            Segment::Object("SO1"),
            Segment::Component("Camera"),
            Segment::Field("lens"),
            Segment::Field("shift"),
        ]
    );
}

#[test]
fn collapse_then_expand_reproduces_rows() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[1]).unwrap();
    tree.expand(&scene, &reflect, &[1, 2]).unwrap();
    let before: Vec<_> = tree
        .rows()
        .iter()
        .map(|r| (r.node.address().clone(), r.node.field_type()))
        .collect();
    assert_eq!(tree.row_count(), 9);

    tree.collapse(&[1]).unwrap();
    assert!(!tree.node(&[1]).unwrap().is_expanded());
    assert!(tree.node(&[1, 0]).is_none());
    assert_eq!(tree.row_count(), 4);

    // Descendant expansion state is gone; re-expand both levels.
    tree.expand(&scene, &reflect, &[1]).unwrap();
    assert!(!tree.node(&[1, 2]).unwrap().is_expanded());
    tree.expand(&scene, &reflect, &[1, 2]).unwrap();

    let after: Vec<_> = tree
        .rows()
        .iter()
        .map(|r| (r.node.address().clone(), r.node.field_type()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn children_group_lists_children_in_order() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[3]).unwrap();

    assert_eq!(labels(&tree, &[3]), ["Child1", "Child2"]);
    assert_eq!(kinds(&tree, &[3]), [RowKind::ChildObject, RowKind::ChildObject]);
    assert_eq!(addresses(&tree, &[3]), ["!SO1", "!SO1"]);
    assert_eq!(tree.node(&[3, 1]).unwrap().owner_object(), &2);
    assert_eq!(tree.node(&[3, 1]).unwrap().icon(), Some(RowIcon::SceneObject));
}

#[test]
fn child_object_expands_like_a_root() {
    let scene = Scene::new();
    let mut nested = FieldTree::new(&scene, Some(0));
    nested.expand(&scene, &reflect, &[3]).unwrap();
    nested.expand(&scene, &reflect, &[3, 1]).unwrap();

    let standalone = FieldTree::new(&scene, Some(2));

    assert_eq!(kinds(&nested, &[3, 1]), kinds(&standalone, &[]));
    assert_eq!(labels(&nested, &[3, 1]), labels(&standalone, &[]));
    assert_eq!(
        addresses(&nested, &[3, 1]),
        ["!SO1/!Child2", "!SO1/!Child2/:Camera", "!SO1/!Child2"]
    );
    assert_eq!(
        addresses(&standalone, &[]),
        ["!Child2", "!Child2/:Camera", "!Child2"]
    );
}

#[test]
fn deep_child_fields_carry_every_object_segment() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let seen = record(&mut tree);

    tree.expand(&scene, &reflect, &[3]).unwrap();
    tree.expand(&scene, &reflect, &[3, 1]).unwrap();
    tree.expand(&scene, &reflect, &[3, 1, 1]).unwrap();
    tree.activate(&[3, 1, 1, 0]).unwrap();

    tree.expand(&scene, &reflect, &[3, 1, 2]).unwrap();
    tree.expand(&scene, &reflect, &[3, 1, 2, 0]).unwrap();
    tree.expand(&scene, &reflect, &[3, 1, 2, 0, 0]).unwrap();
    tree.activate(&[3, 1, 2, 0, 0, 2]).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen[0].object, 2);
    assert_eq!(seen[0].component, Some(2));
    assert_eq!(seen[0].path, "!SO1/!Child2/:Camera/fieldOfView");
    assert_eq!(seen[1].object, 3);
    assert_eq!(seen[1].component, None);
    assert_eq!(seen[1].path, "!SO1/!Child2/!Grandchild/Scale");
}

#[test]
fn absent_root_has_no_rows() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, None);

    assert!(tree.root().is_none());
    assert!(tree.top_level().is_empty());
    assert!(tree.rows().is_empty());
    assert_eq!(tree.row_count(), 0);
    assert_eq!(
        tree.expand(&scene, &reflect, &[0]).unwrap_err(),
        PickerError::NoSuchRow {
            row: RowPath::from_slice(&[0]),
        }
    );
}

#[test]
fn leaves_cannot_expand() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[0]).unwrap();

    let expected = PickerError::NotExpandable {
        address: "!SO1/Rotation".into(),
    };
    assert_eq!(
        tree.expand(&scene, &reflect, &[0, 1]).unwrap_err(),
        expected
    );
    assert_eq!(tree.toggle(&scene, &reflect, &[0, 1]), Err(expected));
    assert!(!tree.node(&[0, 1]).unwrap().is_expanded());
}

#[test]
fn activating_a_branch_is_rejected_without_notifying() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let seen = record(&mut tree);

    assert_eq!(
        tree.activate(&[1]),
        Err(PickerError::NotALeaf {
            kind: RowKind::Component,
            address: "!SO1/:Camera".into(),
        })
    );
    assert_eq!(
        tree.activate(&[]),
        Err(PickerError::NoSuchRow {
            row: RowPath::new(),
        })
    );
    assert!(seen.borrow().is_empty());
}

#[test]
fn activation_without_listener_is_a_noop() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    let seen = record(&mut tree);
    tree.expand(&scene, &reflect, &[0]).unwrap();

    tree.clear_listener();
    assert!(!tree.has_listener());
    assert_eq!(tree.activate(&[0, 2]), Ok(()));
    assert!(seen.borrow().is_empty());
}

#[test]
fn toggle_flips_expansion() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));

    assert_eq!(tree.toggle(&scene, &reflect, &[2]), Ok(true));
    assert_eq!(labels(&tree, &[2]), ["color", "enabled"]);
    assert_eq!(tree.toggle(&scene, &reflect, &[2]), Ok(false));
    assert!(tree.node(&[2]).unwrap().children().is_empty());
}

#[test]
fn rows_are_depth_first_with_depths() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[1]).unwrap();

    let rows: Vec<_> = tree
        .rows()
        .into_iter()
        .map(|r| (r.depth, r.node.label().to_owned(), r.row.to_vec()))
        .collect();
    let expected: Vec<(usize, String, Vec<usize>)> = vec![
        (0, "Transform".into(), vec![0]),
        (0, "Camera".into(), vec![1]),
        (1, "fieldOfView".into(), vec![1, 0]),
        (1, "nearClip".into(), vec![1, 1]),
        (1, "lens".into(), vec![1, 2]),
        (0, "Light".into(), vec![2]),
        (0, "Children".into(), vec![3]),
    ];
    assert_eq!(rows, expected);
    assert_eq!(tree.row_count(), rows.len());
}

#[test]
fn expansion_reads_the_live_graph() {
    let mut scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[3]).unwrap();
    assert_eq!(labels(&tree, &[3]), ["Child1", "Child2"]);

    scene.objects[0].children.push(3);
    // Expanded rows are not refreshed until they are collapsed.
    assert_eq!(labels(&tree, &[3]), ["Child1", "Child2"]);
    tree.collapse(&[3]).unwrap();
    tree.expand(&scene, &reflect, &[3]).unwrap();
    assert_eq!(labels(&tree, &[3]), ["Child1", "Child2", "Grandchild"]);
}

#[test]
fn rebuild_picks_up_new_components_and_keeps_listener() {
    let mut scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(1));
    let seen = record(&mut tree);
    assert_eq!(kinds(&tree, &[]), [RowKind::TransformGroup]);

    scene.component_types.push("Light");
    scene.objects[1].components.push(3);
    scene.objects[1].children.push(3);
    tree.rebuild(&scene);

    assert_eq!(labels(&tree, &[]), ["Transform", "Light", "Children"]);
    assert!(tree.has_listener());

    tree.expand(&scene, &reflect, &[1]).unwrap();
    tree.activate(&[1, 1]).unwrap();
    assert_eq!(seen.borrow()[0].path, "!Child1/:Light/enabled");
    assert_eq!(seen.borrow()[0].component, Some(3));
    assert_eq!(seen.borrow()[0].field_type, AnimatableType::Bool);
}

#[test]
fn set_root_rebinds_the_tree() {
    let scene = Scene::new();
    let mut tree = FieldTree::new(&scene, Some(0));
    tree.expand(&scene, &reflect, &[1]).unwrap();

    tree.set_root(&scene, Some(3));
    assert_eq!(addresses(&tree, &[]), ["!Grandchild"]);

    tree.set_root(&scene, None);
    assert_eq!(tree.row_count(), 0);
}

#[test]
fn options_relabel_groups_without_touching_addresses() {
    let scene = Scene::new();
    let options = PickerOptions::builder()
        .transform_label("Xform")
        .children_label("Kids")
        .build();
    let tree = FieldTree::with_options(&scene, Some(0), options);

    assert_eq!(labels(&tree, &[]), ["Xform", "Camera", "Light", "Kids"]);
    assert_eq!(
        addresses(&tree, &[]),
        ["!SO1", "!SO1/:Camera", "!SO1/:Light", "!SO1"]
    );
}

#[test]
fn options_filter_leaf_types() {
    let scene = Scene::new();
    let options = PickerOptions::builder()
        .leaf_types(AnimatableTypes::FLOAT)
        .build();
    let mut tree = FieldTree::with_options(&scene, Some(0), options);

    assert!(tree.expand(&scene, &reflect, &[0]).unwrap().is_empty());
    assert!(tree.expand(&scene, &reflect, &[2]).unwrap().is_empty());

    tree.expand(&scene, &reflect, &[1]).unwrap();
    tree.expand(&scene, &reflect, &[1, 2]).unwrap();
    assert_eq!(labels(&tree, &[1, 2]), ["focalLength"]);
}
