use crate::registry::NodeSpec;
use crate::scene::{InputSocket, ShaderNode};
use serde_json::{Map, Value, json};

fn socket(name: &str, value: Value) -> InputSocket {
    InputSocket {
        name: name.to_string(),
        value: Some(value),
        linked: false,
    }
}

fn bare_socket(name: &str) -> InputSocket {
    InputSocket {
        name: name.to_string(),
        value: None,
        linked: false,
    }
}

fn node(name: &str, kind: &str, inputs: Vec<InputSocket>, props: &[(&str, Value)]) -> ShaderNode {
    let props: Map<String, Value> = props.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
    ShaderNode {
        name: name.to_string(),
        kind: kind.to_string(),
        inputs,
        props,
    }
}

// --- PRINCIPLED BSDF ---

pub struct PrincipledBsdfSpec;

impl NodeSpec for PrincipledBsdfSpec {
    fn name(&self) -> &str {
        "ShaderNodeBsdfPrincipled"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Principled BSDF",
            self.name(),
            vec![
                socket("Base Color", json!([0.8, 0.8, 0.8, 1.0])),
                socket("Metallic", json!(0.0)),
                socket("Specular", json!(0.5)),
                socket("Roughness", json!(0.5)),
                socket("IOR", json!(1.45)),
                socket("Alpha", json!(1.0)),
                socket("Emission", json!([0.0, 0.0, 0.0, 1.0])),
                socket("Emission Strength", json!(1.0)),
                socket("Normal", json!([0.0, 0.0, 0.0])),
            ],
            &[
                ("distribution", json!("GGX")),
                ("subsurface_method", json!("RANDOM_WALK")),
            ],
        )
    }
}

// --- DIFFUSE BSDF ---

pub struct DiffuseBsdfSpec;

impl NodeSpec for DiffuseBsdfSpec {
    fn name(&self) -> &str {
        "ShaderNodeBsdfDiffuse"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Diffuse BSDF",
            self.name(),
            vec![
                socket("Color", json!([0.8, 0.8, 0.8, 1.0])),
                socket("Roughness", json!(0.0)),
                socket("Normal", json!([0.0, 0.0, 0.0])),
            ],
            &[],
        )
    }
}

// --- IMAGE TEXTURE ---

pub struct TexImageSpec;

impl NodeSpec for TexImageSpec {
    fn name(&self) -> &str {
        "ShaderNodeTexImage"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Image Texture",
            self.name(),
            vec![socket("Vector", json!([0.0, 0.0, 0.0]))],
            &[
                ("interpolation", json!("Linear")),
                ("projection", json!("FLAT")),
                ("projection_blend", json!(0.0)),
                ("extension", json!("REPEAT")),
            ],
        )
    }
}

// --- MIX RGB ---

pub struct MixRgbSpec;

impl NodeSpec for MixRgbSpec {
    fn name(&self) -> &str {
        "ShaderNodeMixRGB"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Mix",
            self.name(),
            vec![
                socket("Fac", json!(0.5)),
                socket("Color1", json!([0.5, 0.5, 0.5, 1.0])),
                socket("Color2", json!([0.5, 0.5, 0.5, 1.0])),
            ],
            &[
                ("blend_type", json!("MIX")),
                ("use_alpha", json!(false)),
                ("use_clamp", json!(false)),
            ],
        )
    }
}

// --- MATH ---

pub struct MathSpec;

impl NodeSpec for MathSpec {
    fn name(&self) -> &str {
        "ShaderNodeMath"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Math",
            self.name(),
            vec![
                socket("Value", json!(0.5)),
                socket("Value_001", json!(0.5)),
            ],
            &[("operation", json!("ADD")), ("use_clamp", json!(false))],
        )
    }
}

// --- NORMAL MAP ---

pub struct NormalMapSpec;

impl NodeSpec for NormalMapSpec {
    fn name(&self) -> &str {
        "ShaderNodeNormalMap"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Normal Map",
            self.name(),
            vec![
                socket("Strength", json!(1.0)),
                socket("Color", json!([0.5, 0.5, 1.0, 1.0])),
            ],
            &[("space", json!("TANGENT")), ("uv_map", json!(""))],
        )
    }
}

// --- TEXTURE COORDINATE ---

pub struct TexCoordSpec;

impl NodeSpec for TexCoordSpec {
    fn name(&self) -> &str {
        "ShaderNodeTexCoord"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Texture Coordinate",
            self.name(),
            vec![],
            &[("from_instancer", json!(false))],
        )
    }
}

// --- MATERIAL OUTPUT ---

pub struct OutputMaterialSpec;

impl NodeSpec for OutputMaterialSpec {
    fn name(&self) -> &str {
        "ShaderNodeOutputMaterial"
    }

    fn spawn(&self) -> ShaderNode {
        node(
            "Material Output",
            self.name(),
            vec![
                bare_socket("Surface"),
                bare_socket("Volume"),
                socket("Displacement", json!([0.0, 0.0, 0.0])),
            ],
            &[("target", json!("ALL")), ("is_active_output", json!(true))],
        )
    }
}
