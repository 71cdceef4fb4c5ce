use matlens::scene::builder::GraphBuilder;
use serde_json::json;

#[test]
fn test_build_simple_tree() {
    let tree = GraphBuilder::new()
        .node("Image Texture", "ShaderNodeTexImage")
        .prop("interpolation", "Linear")
        .done()
        .node("Principled BSDF", "ShaderNodeBsdfPrincipled")
        .input("Roughness", 0.25)
        .linked_input("Base Color", json!([0.8, 0.8, 0.8, 1.0]))
        .bare_input("Normal")
        .done()
        .link("Image Texture", "Color", "Principled BSDF", "Base Color")
        .build();

    assert_eq!(tree.nodes.len(), 2);
    assert_eq!(tree.links.len(), 1);

    // 检查节点结构
    let bsdf = &tree.nodes[1];
    assert_eq!(bsdf.name, "Principled BSDF");
    assert_eq!(bsdf.kind, "ShaderNodeBsdfPrincipled");
    assert_eq!(bsdf.inputs.len(), 3);

    let roughness = &bsdf.inputs[0];
    assert_eq!(roughness.value, Some(json!(0.25)));
    assert!(!roughness.linked);

    let base_color = &bsdf.inputs[1];
    assert!(base_color.linked);

    let normal = &bsdf.inputs[2];
    assert_eq!(normal.value, None);

    // 检查连接
    let link = &tree.links[0];
    assert_eq!(link.from_node, "Image Texture");
    assert_eq!(link.from_socket, "Color");
    assert_eq!(link.to_node, "Principled BSDF");
    assert_eq!(link.to_socket, "Base Color");
}

#[test]
fn test_into_scene_wraps_single_material() {
    let scene = GraphBuilder::new()
        .node("Math", "ShaderNodeMath")
        .done()
        .into_scene("Cube", "Material");

    assert_eq!(scene.active_object.as_deref(), Some("Cube"));
    let object = scene.active().expect("active object missing");
    assert_eq!(object.material_slots.len(), 1);

    let material = object.material_slots[0]
        .material
        .as_ref()
        .expect("material missing");
    assert_eq!(material.name, "Material");
    assert!(material.use_nodes);
    assert_eq!(material.node_tree.as_ref().map(|t| t.nodes.len()), Some(1));
}
