use crate::scene::ShaderNode;
use serde_json::Value;

/// 图像纹理节点的描述行: 始终展示，不参与默认值抑制
pub fn describe(node: &ShaderNode) -> Vec<String> {
    let mut info = Vec::new();

    match node.props.get("image") {
        Some(Value::Object(image)) => {
            let name = image.get("name").and_then(Value::as_str).unwrap_or("");
            let filepath = image.get("filepath").and_then(Value::as_str).unwrap_or("");

            if !filepath.is_empty() {
                info.push(format!("Image file: {}", basename(filepath)));
            } else if image.get("packed").and_then(Value::as_bool).unwrap_or(false) {
                info.push(format!("Image file: {} (packed)", name));
            } else {
                info.push(format!("Image name: {}", name));
            }

            if let Some(size) = image.get("size").and_then(Value::as_array) {
                if let (Some(w), Some(h)) = (
                    size.first().and_then(Value::as_u64),
                    size.get(1).and_then(Value::as_u64),
                ) {
                    info.push(format!("Image size: {}x{}", w, h));
                }
            }

            if let Some(cs) = image.get("colorspace").and_then(Value::as_str) {
                info.push(format!("Color space: {}", cs));
            }
        }
        _ => info.push("Image: unspecified".to_string()),
    }

    if let Some(mode) = node.props.get("interpolation").and_then(Value::as_str) {
        info.push(format!("Interpolation: {}", mode));
    }
    if let Some(mode) = node.props.get("projection").and_then(Value::as_str) {
        info.push(format!("Projection: {}", mode));
    }

    info
}

/// Path basename; image paths come from the host on any platform, so both
/// separator styles are recognized.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
